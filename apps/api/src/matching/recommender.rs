//! Recommendation pipeline: score every job, drop weak matches, rank, keep the top few.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::profile::UserProfile;
use crate::matching::scorer::{MatchScorer, WeightedMatchScorer};
use crate::models::job::JobPosting;

/// Thresholds and presentation settings for the ranking pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationPolicy {
    /// Raw scores below this are discarded (compared before scaling).
    pub min_score: f64,
    /// Maximum number of records returned.
    pub limit: usize,
    /// Multiplier applied to raw scores for `match_score`.
    pub score_scale: f64,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            min_score: 0.45,
            limit: 3,
            score_scale: 10.0,
        }
    }
}

/// A ranked job as returned to API callers. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub required_skills: Vec<String>,
    pub experience_level: String,
    pub match_score: f64,
}

impl Recommendation {
    fn from_job(job: &JobPosting, match_score: f64) -> Self {
        Self {
            job_title: job.job_title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            required_skills: job.required_skills.split(',').map(str::to_string).collect(),
            experience_level: job.experience_level.clone(),
            match_score,
        }
    }
}

pub struct Recommender {
    scorer: Arc<dyn MatchScorer>,
    policy: RecommendationPolicy,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(
            Arc::new(WeightedMatchScorer::default()),
            RecommendationPolicy::default(),
        )
    }
}

impl Recommender {
    pub fn new(scorer: Arc<dyn MatchScorer>, policy: RecommendationPolicy) -> Self {
        Self { scorer, policy }
    }

    /// Ranks `jobs` for `profile`, best first.
    ///
    /// Ties on the rounded `match_score` keep the order in which jobs were supplied.
    pub fn recommend(&self, profile: &UserProfile, jobs: &[JobPosting]) -> Vec<Recommendation> {
        let mut ranked: Vec<Recommendation> = jobs
            .iter()
            .filter_map(|job| {
                let score = self.scorer.score(profile, job);
                debug!(job_id = job.job_id, score, "scored job");
                (score >= self.policy.min_score).then(|| {
                    Recommendation::from_job(job, round2(score * self.policy.score_scale))
                })
            })
            .collect();

        let qualifying = ranked.len();
        ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        ranked.truncate(self.policy.limit);

        debug!(
            candidates = jobs.len(),
            qualifying,
            returned = ranked.len(),
            "ranked recommendations"
        );
        ranked
    }
}

/// Rounds to two decimals. Exact halves go to the even neighbour (20.625 → 20.62).
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        scaled.round_ties_even()
    } else {
        scaled.round()
    };
    rounded / 100.0
}
