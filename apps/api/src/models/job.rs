use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub job_id: i32,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    /// Comma-separated, stored exactly as submitted.
    pub required_skills: String,
    pub experience_level: String,
    pub created_at: DateTime<Utc>,
}

/// Validated job ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub required_skills: String,
    pub experience_level: String,
}

/// Body of `POST /api/jobs`. Every field is required; presence is all that is checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobPayload {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub required_skills: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience_level: Option<String>,
}

impl JobPayload {
    pub fn validate(self) -> Result<NewJob, Vec<&'static str>> {
        let fields = [
            ("job_title", self.job_title.is_none()),
            ("company", self.company.is_none()),
            ("required_skills", self.required_skills.is_none()),
            ("location", self.location.is_none()),
            ("job_type", self.job_type.is_none()),
            ("experience_level", self.experience_level.is_none()),
        ];
        let missing: Vec<&'static str> = fields
            .into_iter()
            .filter(|(_, absent)| *absent)
            .map(|(name, _)| name)
            .collect();

        match self {
            JobPayload {
                job_title: Some(job_title),
                company: Some(company),
                required_skills: Some(required_skills),
                location: Some(location),
                job_type: Some(job_type),
                experience_level: Some(experience_level),
            } => Ok(NewJob {
                job_title,
                company,
                location,
                job_type,
                required_skills,
                experience_level,
            }),
            _ => Err(missing),
        }
    }
}
