//! Match Scoring — pluggable, trait-based scorer that measures a candidate profile against
//! a single job posting.
//!
//! Default: `WeightedMatchScorer` (pure, deterministic, order-sensitive weighting).
//!
//! `AppState` holds the scorer behind an `Arc<dyn MatchScorer>` inside the `Recommender`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::profile::{ExperienceLevel, UserProfile};
use crate::models::job::JobPosting;

/// Weights applied by `WeightedMatchScorer`. Skills and role are additive,
/// experience, location and job type scale the running score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub role: f64,
    pub job_type: f64,
    /// Extra factor on `experience` when the candidate is exactly one level above the job.
    pub overqualified_factor: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 5.5,
            experience: 0.80,
            location: 0.75,
            role: 0.95,
            job_type: 0.5,
            overqualified_factor: 0.5,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap scoring strategies without
/// touching the recommender or the handlers.
pub trait MatchScorer: Send + Sync {
    fn score(&self, profile: &UserProfile, job: &JobPosting) -> f64;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Weighted heuristic scorer.
///
/// Algorithm, applied strictly in this order:
/// 1. skills: `+ |profile ∩ job| / |job tokens| × skills`
/// 2. experience: same level `× experience`, one level above `× experience × overqualified_factor`
/// 3. location: job location among preferred locations `× location`
/// 4. role: job title among desired roles `+ role`
/// 5. job type: matches preferred type `× job_type`
///
/// Steps 2, 3 and 5 only scale what has accumulated before them: the role bonus is
/// scaled by a job type match but never by the location multiplier.
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    weights: MatchWeights,
}

impl WeightedMatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, profile: &UserProfile, job: &JobPosting) -> f64 {
        let w = &self.weights;
        let prefs = &profile.preferences;
        let mut score = 0.0_f64;

        score += skills_ratio(&profile.skills, &job.required_skills) * w.skills;

        match experience_gap(&profile.experience_level, &job.experience_level) {
            0 => score *= w.experience,
            1 => score *= w.experience * w.overqualified_factor,
            _ => {}
        }

        if contains_ignore_case(&prefs.locations, &job.location) {
            score *= w.location;
        }

        if contains_ignore_case(&prefs.desired_roles, &job.job_title) {
            score += w.role;
        }

        if job.job_type.to_lowercase() == prefs.job_type.to_lowercase() {
            score *= w.job_type;
        }

        score
    }
}

/// Share of the job's distinct skill tokens covered by the profile.
///
/// Tokens are split on `,` and lowercased but not trimmed. An empty
/// `required_skills` still yields one empty token, so the denominator is never zero
/// and such a job contributes a ratio of 0.
pub fn skills_ratio(profile_skills: &[String], required_skills: &str) -> f64 {
    let job_skills: HashSet<String> = required_skills
        .split(',')
        .map(str::to_lowercase)
        .collect();
    if job_skills.is_empty() {
        return 0.0;
    }

    let user_skills: HashSet<String> = profile_skills.iter().map(|s| s.to_lowercase()).collect();
    let matched = job_skills.intersection(&user_skills).count();

    matched as f64 / job_skills.len() as f64
}

/// Candidate rank minus job rank. Unrecognized levels rank 0.
pub fn experience_gap(candidate_level: &str, job_level: &str) -> i32 {
    ExperienceLevel::rank_of(candidate_level) as i32 - ExperienceLevel::rank_of(job_level) as i32
}

fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystack.iter().any(|item| item.to_lowercase() == needle)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{data_engineer_job, data_engineer_profile, job};

    fn scorer() -> WeightedMatchScorer {
        WeightedMatchScorer::default()
    }

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_full_match_follows_step_order() {
        // 5.5 → ×0.8 = 4.4 → ×0.75 = 3.3 → +0.95 = 4.25 → ×0.5 = 2.125
        let score = scorer().score(&data_engineer_profile(), &data_engineer_job());
        approx(score, 2.125);
    }

    #[test]
    fn test_scoring_is_case_insensitive() {
        let profile = data_engineer_profile();
        let mut shouted = data_engineer_job();
        shouted.job_title = "DATA ENGINEER".to_string();
        shouted.required_skills = "PYTHON,Sql".to_string();
        shouted.location = "Remote".to_string();
        shouted.job_type = "FULL-TIME".to_string();
        shouted.experience_level = "Intermediate".to_string();

        approx(
            scorer().score(&profile, &shouted),
            scorer().score(&profile, &data_engineer_job()),
        );
    }

    #[test]
    fn test_no_overlap_stays_below_threshold() {
        let job = job(
            "Pastry Chef",
            "baking,decorating",
            "paris",
            "part-time",
            "senior",
        );
        let score = scorer().score(&data_engineer_profile(), &job);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_full_match_beats_no_match() {
        let profile = data_engineer_profile();
        let matching = data_engineer_job();
        let unrelated = job("Welder", "welding", "detroit", "contract", "intermediate");
        assert!(scorer().score(&profile, &matching) > scorer().score(&profile, &unrelated));
    }

    #[test]
    fn test_partial_skills_ratio() {
        approx(
            skills_ratio(&["python".to_string()], "python,sql,spark,airflow"),
            0.25,
        );
    }

    #[test]
    fn test_duplicate_job_tokens_count_once() {
        approx(skills_ratio(&["python".to_string()], "python,PYTHON"), 1.0);
    }

    #[test]
    fn test_empty_required_skills_counts_one_empty_token() {
        approx(skills_ratio(&["python".to_string()], ""), 0.0);
        // The empty token still dilutes the ratio when a trailing comma is present.
        approx(skills_ratio(&["python".to_string()], "python,"), 0.5);
    }

    #[test]
    fn test_tokens_are_not_trimmed() {
        approx(skills_ratio(&["sql".to_string()], "python, sql"), 0.0);
    }

    #[test]
    fn test_overqualified_by_one_level_is_damped() {
        let mut profile = data_engineer_profile();
        profile.experience_level = "senior".to_string();
        profile.preferences.locations.clear();
        profile.preferences.desired_roles.clear();
        profile.preferences.job_type = "contract".to_string();

        // 5.5 × 0.8 × 0.5
        approx(scorer().score(&profile, &data_engineer_job()), 2.2);
    }

    #[test]
    fn test_underqualified_or_far_overqualified_is_unchanged() {
        let mut profile = data_engineer_profile();
        profile.preferences.locations.clear();
        profile.preferences.desired_roles.clear();
        profile.preferences.job_type = "contract".to_string();

        profile.experience_level = "junior".to_string();
        approx(scorer().score(&profile, &data_engineer_job()), 5.5);

        let mut junior_job = data_engineer_job();
        junior_job.experience_level = "junior".to_string();
        profile.experience_level = "senior".to_string();
        approx(scorer().score(&profile, &junior_job), 5.5);
    }

    #[test]
    fn test_unknown_levels_on_both_sides_count_as_equal() {
        assert_eq!(experience_gap("wizard", "guru"), 0);
        assert_eq!(experience_gap("Senior", "junior"), 2);
        assert_eq!(experience_gap("junior", "intermediate"), -1);
    }

    #[test]
    fn test_role_bonus_is_additive_after_location() {
        let mut profile = data_engineer_profile();
        profile.skills.clear();
        profile.preferences.job_type = "contract".to_string();

        // skills 0 → ×0.8 → ×0.75 stays 0, role adds 0.95 untouched
        approx(scorer().score(&profile, &data_engineer_job()), 0.95);
    }

    #[test]
    fn test_job_type_scales_role_bonus() {
        let mut profile = data_engineer_profile();
        profile.skills.clear();

        approx(scorer().score(&profile, &data_engineer_job()), 0.475);
    }

    #[test]
    fn test_custom_weights_are_used() {
        let weights = MatchWeights {
            skills: 10.0,
            experience: 1.0,
            location: 1.0,
            role: 0.0,
            job_type: 1.0,
            overqualified_factor: 1.0,
        };
        let score =
            WeightedMatchScorer::new(weights).score(&data_engineer_profile(), &data_engineer_job());
        approx(score, 10.0);
    }

    #[test]
    fn test_scoring_does_not_mutate_inputs() {
        let profile = data_engineer_profile();
        let job = data_engineer_job();
        let first = scorer().score(&profile, &job);
        let second = scorer().score(&profile, &job);
        assert_eq!(first, second);
        assert_eq!(profile, data_engineer_profile());
        assert_eq!(job, data_engineer_job());
    }
}
