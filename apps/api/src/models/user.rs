use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::matching::profile::{Preferences, PreferencesPayload, SkillList, UserProfile};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub skills: Vec<String>,
    pub experience_level: String,
    pub preferences: Json<Preferences>,
    pub created_at: DateTime<Utc>,
}

impl UserRow {
    /// The scoring view of a stored user.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            skills: self.skills.clone(),
            experience_level: self.experience_level.clone(),
            preferences: self.preferences.0.clone(),
        }
    }
}

/// Validated user ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub profile: UserProfile,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub skills: Option<SkillList>,
    pub experience_level: Option<String>,
    pub preferences: Option<PreferencesPayload>,
}

impl UserPayload {
    pub fn validate(self) -> Result<NewUser, Vec<&'static str>> {
        let mut missing = Vec::new();
        for (name, absent) in [
            ("name", self.name.is_none()),
            ("skills", self.skills.is_none()),
            ("experience_level", self.experience_level.is_none()),
        ] {
            if absent {
                missing.push(name);
            }
        }

        let preferences = match self.preferences {
            Some(prefs) => prefs.validate().map_err(|nested| missing.extend(nested)).ok(),
            None => {
                missing.push("preferences");
                None
            }
        };

        match (self.name, self.skills, self.experience_level, preferences) {
            (Some(name), Some(skills), Some(experience_level), Some(preferences))
                if missing.is_empty() =>
            {
                Ok(NewUser {
                    name,
                    profile: UserProfile {
                        skills: skills.into_vec(),
                        experience_level,
                        preferences,
                    },
                })
            }
            _ => Err(missing),
        }
    }
}
