//! Shared fixtures and in-memory storage for unit tests.

use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;

use crate::errors::AppError;
use crate::matching::profile::{Preferences, UserProfile};
use crate::models::job::{JobPosting, NewJob};
use crate::models::user::{NewUser, UserRow};
use crate::repository::Repository;

pub fn data_engineer_profile() -> UserProfile {
    UserProfile {
        skills: vec!["Python".to_string(), "SQL".to_string()],
        experience_level: "intermediate".to_string(),
        preferences: Preferences {
            locations: vec!["remote".to_string()],
            desired_roles: vec!["Data Engineer".to_string()],
            job_type: "full-time".to_string(),
        },
    }
}

pub fn data_engineer_job() -> JobPosting {
    job("Data Engineer", "python,sql", "remote", "full-time", "intermediate")
}

pub fn job(
    title: &str,
    required_skills: &str,
    location: &str,
    job_type: &str,
    experience_level: &str,
) -> JobPosting {
    JobPosting {
        job_id: 1,
        job_title: title.to_string(),
        company: "Acme".to_string(),
        location: location.to_string(),
        job_type: job_type.to_string(),
        required_skills: required_skills.to_string(),
        experience_level: experience_level.to_string(),
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Vec-backed repository with sequential ids starting at 1.
#[derive(Default)]
pub struct MemoryRepository {
    users: Mutex<Vec<UserRow>>,
    jobs: Mutex<Vec<JobPosting>>,
}

impl MemoryRepository {
    pub fn job_count(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn create_user(&self, user: NewUser) -> Result<i32, AppError> {
        let mut users = self.users.lock().unwrap();
        let id = users.len() as i32 + 1;
        users.push(UserRow {
            id,
            name: user.name,
            skills: user.profile.skills,
            experience_level: user.profile.experience_level,
            preferences: Json(user.profile.preferences),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn get_user(&self, id: i32) -> Result<Option<UserRow>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create_job(&self, job: NewJob) -> Result<i32, AppError> {
        let mut jobs = self.jobs.lock().unwrap();
        let job_id = jobs.len() as i32 + 1;
        jobs.push(JobPosting {
            job_id,
            job_title: job.job_title,
            company: job.company,
            location: job.location,
            job_type: job.job_type,
            required_skills: job.required_skills,
            experience_level: job.experience_level,
            created_at: Utc::now(),
        });
        Ok(job_id)
    }

    async fn get_job(&self, job_id: i32) -> Result<Option<JobPosting>, AppError> {
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().find(|j| j.job_id == job_id).cloned())
    }

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.jobs.lock().unwrap().clone())
    }
}

/// Repository whose every call fails, for error-path tests.
pub struct UnavailableRepository;

#[async_trait]
impl Repository for UnavailableRepository {
    async fn create_user(&self, _user: NewUser) -> Result<i32, AppError> {
        Err(AppError::Internal(anyhow!("repository unavailable")))
    }

    async fn get_user(&self, _id: i32) -> Result<Option<UserRow>, AppError> {
        Err(AppError::Internal(anyhow!("repository unavailable")))
    }

    async fn create_job(&self, _job: NewJob) -> Result<i32, AppError> {
        Err(AppError::Internal(anyhow!("repository unavailable")))
    }

    async fn get_job(&self, _job_id: i32) -> Result<Option<JobPosting>, AppError> {
        Err(AppError::Internal(anyhow!("repository unavailable")))
    }

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Err(AppError::Internal(anyhow!("repository unavailable")))
    }
}
