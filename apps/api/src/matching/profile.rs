use serde::{Deserialize, Serialize};

/// Seniority ladder shared by candidates and postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceLevel {
    Junior,
    Intermediate,
    Senior,
}

impl ExperienceLevel {
    /// Case-insensitive, exact label match. Surrounding whitespace is not ignored.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "junior" => Some(Self::Junior),
            "intermediate" => Some(Self::Intermediate),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Self::Junior => 1,
            Self::Intermediate => 2,
            Self::Senior => 3,
        }
    }

    /// Rank for a free-form label, 0 when unrecognized.
    pub fn rank_of(label: &str) -> u8 {
        Self::parse(label).map_or(0, Self::rank)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub locations: Vec<String>,
    pub desired_roles: Vec<String>,
    pub job_type: String,
}

/// Candidate profile as seen by the scorer. Never persisted by the matching core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub experience_level: String,
    pub preferences: Preferences,
}

// ────────────────────────────────────────────────────────────────────────────
// Request payloads (validated before scoring)
// ────────────────────────────────────────────────────────────────────────────

/// Skills may arrive as a JSON array or as a single comma-separated string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SkillList {
    List(Vec<String>),
    Csv(String),
}

impl SkillList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            SkillList::List(skills) => skills,
            SkillList::Csv(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreferencesPayload {
    pub locations: Option<Vec<String>>,
    pub desired_roles: Option<Vec<String>>,
    pub job_type: Option<String>,
}

impl PreferencesPayload {
    /// Returns the typed preferences, or the dotted names of every missing field.
    pub fn validate(self) -> Result<Preferences, Vec<&'static str>> {
        match (self.locations, self.desired_roles, self.job_type) {
            (Some(locations), Some(desired_roles), Some(job_type)) => Ok(Preferences {
                locations,
                desired_roles,
                job_type,
            }),
            (locations, desired_roles, job_type) => {
                let mut missing = Vec::new();
                if locations.is_none() {
                    missing.push("preferences.locations");
                }
                if desired_roles.is_none() {
                    missing.push("preferences.desired_roles");
                }
                if job_type.is_none() {
                    missing.push("preferences.job_type");
                }
                Err(missing)
            }
        }
    }
}

/// Loosely-typed profile body for `POST /api/recommendations`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfilePayload {
    pub skills: Option<SkillList>,
    pub experience_level: Option<String>,
    pub preferences: Option<PreferencesPayload>,
}

impl ProfilePayload {
    pub fn validate(self) -> Result<UserProfile, Vec<&'static str>> {
        let mut missing = Vec::new();

        if self.skills.is_none() {
            missing.push("skills");
        }
        if self.experience_level.is_none() {
            missing.push("experience_level");
        }
        let preferences = match self.preferences {
            Some(prefs) => match prefs.validate() {
                Ok(prefs) => Some(prefs),
                Err(nested) => {
                    missing.extend(nested);
                    None
                }
            },
            None => {
                missing.push("preferences");
                None
            }
        };

        match (self.skills, self.experience_level, preferences) {
            (Some(skills), Some(experience_level), Some(preferences)) if missing.is_empty() => {
                Ok(UserProfile {
                    skills: skills.into_vec(),
                    experience_level,
                    preferences,
                })
            }
            _ => Err(missing),
        }
    }
}
