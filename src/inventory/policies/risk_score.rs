/// Weight of one CRITICAL record in the risk score
pub const CRITICAL_WEIGHT: usize = 10;

/// Weight of one HIGH record in the risk score
pub const HIGH_WEIGHT: usize = 5;

/// RiskScorePolicy computes the composite risk score of an inventory
///
/// The score is the weighted severity sum divided by the number of components,
/// rounded to one decimal place. An empty inventory scores 0.0.
pub struct RiskScorePolicy;

impl RiskScorePolicy {
    pub fn score(critical_count: usize, high_count: usize, total_components: usize) -> f64 {
        if total_components == 0 {
            return 0.0;
        }

        let weighted = (critical_count * CRITICAL_WEIGHT + high_count * HIGH_WEIGHT) as f64;
        Self::round_one_decimal(weighted / total_components as f64)
    }

    fn round_one_decimal(value: f64) -> f64 {
        (value * 10.0).round() / 10.0
    }
}
