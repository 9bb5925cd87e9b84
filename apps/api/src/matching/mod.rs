// Job matching: profile scoring and recommendation ranking.
// Scoring is pure and synchronous; handlers only load the job snapshot and validate input.

pub mod handlers;
pub mod profile;
pub mod recommender;
pub mod scorer;
