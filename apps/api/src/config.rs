use std::str::FromStr;

use anyhow::{Context, Result};

use crate::matching::recommender::RecommendationPolicy;
use crate::matching::scorer::MatchWeights;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub weights: MatchWeights,
    pub policy: RecommendationPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 10)?,
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            weights: weights_from_env()?,
            policy: policy_from_env()?,
        })
    }
}

fn weights_from_env() -> Result<MatchWeights> {
    let defaults = MatchWeights::default();
    Ok(MatchWeights {
        skills: env_or("MATCH_WEIGHT_SKILLS", defaults.skills)?,
        experience: env_or("MATCH_WEIGHT_EXPERIENCE", defaults.experience)?,
        location: env_or("MATCH_WEIGHT_LOCATION", defaults.location)?,
        role: env_or("MATCH_WEIGHT_ROLE", defaults.role)?,
        job_type: env_or("MATCH_WEIGHT_JOB_TYPE", defaults.job_type)?,
        overqualified_factor: env_or("MATCH_OVERQUALIFIED_FACTOR", defaults.overqualified_factor)?,
    })
}

fn policy_from_env() -> Result<RecommendationPolicy> {
    let defaults = RecommendationPolicy::default();
    Ok(RecommendationPolicy {
        min_score: env_or("MATCH_MIN_SCORE", defaults.min_score)?,
        limit: env_or("MATCH_LIMIT", defaults.limit)?,
        score_scale: env_or("MATCH_SCORE_SCALE", defaults.score_scale)?,
    })
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(key, std::env::var(key).ok(), default)
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{value}'")),
        None => Ok(default),
    }
}
