use crate::inventory::domain::SbomSnapshot;
use crate::shared::Result;

/// Result of loading a snapshot: the usable data plus a note for every
/// entry that was skipped because required fields were missing
#[derive(Debug, Clone)]
pub struct SnapshotLoadResult {
    pub snapshot: SbomSnapshot,
    pub skipped: Vec<String>,
}

/// SnapshotSource port for obtaining the SBOM snapshot
///
/// This port abstracts where the component inventory and vulnerability
/// records come from. Implementations hand over structured records and
/// must skip malformed entries rather than fail the whole load.
pub trait SnapshotSource {
    /// Loads the snapshot
    ///
    /// # Errors
    /// Returns an error only if the source as a whole is unreadable
    fn load_snapshot(&self) -> Result<SnapshotLoadResult>;
}
