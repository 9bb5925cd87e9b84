//! Storage seam for users and job postings.
//!
//! Handlers only see `Arc<dyn Repository>`; `PgRepository` is the production backend.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::job::{JobPosting, NewJob};
use crate::models::user::{NewUser, UserRow};

#[async_trait]
pub trait Repository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<i32, AppError>;
    async fn get_user(&self, id: i32) -> Result<Option<UserRow>, AppError>;
    async fn create_job(&self, job: NewJob) -> Result<i32, AppError>;
    async fn get_job(&self, job_id: i32) -> Result<Option<JobPosting>, AppError>;
    /// Full job collection ordered by `job_id`, read in a single statement.
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError>;
}

pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository for PgRepository {
    async fn create_user(&self, user: NewUser) -> Result<i32, AppError> {
        let NewUser { name, profile } = user;
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO user_profiles (name, skills, experience_level, preferences)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&name)
        .bind(&profile.skills)
        .bind(&profile.experience_level)
        .bind(Json(&profile.preferences))
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted user profile {id}");
        Ok(id)
    }

    async fn get_user(&self, id: i32) -> Result<Option<UserRow>, AppError> {
        Ok(
            sqlx::query_as::<_, UserRow>("SELECT * FROM user_profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create_job(&self, job: NewJob) -> Result<i32, AppError> {
        let job_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO job_postings
                (job_title, company, location, job_type, required_skills, experience_level)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING job_id
            "#,
        )
        .bind(&job.job_title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.job_type)
        .bind(&job.required_skills)
        .bind(&job.experience_level)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted job posting {job_id} ({})", job.job_title);
        Ok(job_id)
    }

    async fn get_job(&self, job_id: i32) -> Result<Option<JobPosting>, AppError> {
        Ok(
            sqlx::query_as::<_, JobPosting>("SELECT * FROM job_postings WHERE job_id = $1")
                .bind(job_id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(
            sqlx::query_as::<_, JobPosting>("SELECT * FROM job_postings ORDER BY job_id")
                .fetch_all(&self.pool)
                .await?,
        )
    }
}
