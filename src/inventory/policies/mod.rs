mod risk_score;
mod severity_bucket;

pub use risk_score::{RiskScorePolicy, CRITICAL_WEIGHT, HIGH_WEIGHT};
pub use severity_bucket::SeverityBucketPolicy;
