use crate::application::read_models::DashboardReadModel;

/// DashboardResponse - Internal response DTO from the dashboard use case
#[derive(Debug, Clone)]
pub struct DashboardResponse {
    /// View-optimized dashboard data, ready for a formatter
    pub read_model: DashboardReadModel,
    /// Whether any component in the filtered view has a known vulnerability
    /// Used to determine exit code for CI integration
    pub has_vulnerable_components: bool,
    /// Entries skipped while loading the snapshot
    pub skipped_entries: Vec<String>,
}
