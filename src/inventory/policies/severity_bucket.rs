use crate::inventory::domain::{Severity, SeverityBucket, VulnerabilityRecord};

/// SeverityBucketPolicy reduces a component's matching records to one of
/// four display buckets
///
/// Ranking:
/// 1. `Critical` if any record is CRITICAL
/// 2. `High` if any record is HIGH
/// 3. `Low` for any other non-empty set (MEDIUM, LOW and UNKNOWN collapse here)
/// 4. `None` when nothing matched
pub struct SeverityBucketPolicy;

impl SeverityBucketPolicy {
    pub fn bucket<'a, I>(records: I) -> SeverityBucket
    where
        I: IntoIterator<Item = &'a VulnerabilityRecord>,
    {
        let mut bucket = SeverityBucket::None;
        for record in records {
            match record.severity() {
                Severity::Critical => return SeverityBucket::Critical,
                Severity::High => bucket = SeverityBucket::High,
                _ if bucket == SeverityBucket::None => bucket = SeverityBucket::Low,
                _ => {}
            }
        }
        bucket
    }
}
