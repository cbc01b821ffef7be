/// Embedded snapshot adapter
mod embedded_snapshot;

pub use embedded_snapshot::EmbeddedSnapshotSource;
