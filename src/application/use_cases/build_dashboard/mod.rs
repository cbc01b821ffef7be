use crate::application::dto::{DashboardRequest, DashboardResponse};
use crate::application::read_models::DashboardReadModelBuilder;
use crate::inventory::services::{DashboardSession, ReportMetadataGenerator};
use crate::ports::outbound::{ProgressReporter, SnapshotSource};
use crate::shared::Result;

/// BuildDashboardUseCase - Core use case for rendering the dashboard
///
/// This use case orchestrates the dashboard workflow using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `S` - SnapshotSource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildDashboardUseCase<S, PR> {
    snapshot_source: S,
    progress_reporter: PR,
}

impl<S, PR> BuildDashboardUseCase<S, PR>
where
    S: SnapshotSource,
    PR: ProgressReporter,
{
    /// Creates a new BuildDashboardUseCase with injected dependencies
    pub fn new(snapshot_source: S, progress_reporter: PR) -> Self {
        Self {
            snapshot_source,
            progress_reporter,
        }
    }

    /// Executes the dashboard use case
    ///
    /// # Arguments
    /// * `request` - Filter criteria and the tabs to render
    ///
    /// # Returns
    /// DashboardResponse containing the read model and whether the filtered
    /// view holds vulnerable components
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be loaded or a selector names
    /// a value absent from the snapshot
    pub fn execute(&self, request: DashboardRequest) -> Result<DashboardResponse> {
        // Step 1: Load snapshot
        self.progress_reporter.report("📖 Loading SBOM snapshot...");

        let loaded = self.snapshot_source.load_snapshot()?;
        for note in &loaded.skipped {
            self.progress_reporter
                .report_warning(&format!("Skipped malformed entry: {}", note));
        }

        self.progress_reporter.report(&format!(
            "✅ Loaded {} component(s) and {} vulnerability record(s)",
            loaded.snapshot.components().len(),
            loaded.snapshot.vulnerabilities().len()
        ));

        // Step 2: Correlate and aggregate
        let mut session = DashboardSession::new(loaded.snapshot);

        // Step 3: Apply filter criteria
        if !request.criteria.is_unrestricted() {
            self.progress_reporter.report("🔍 Applying filters...");
        }
        session.apply_criteria(request.criteria)?;

        let filtered = session.filtered_components();
        let has_vulnerable_components = filtered.iter().any(|c| session.has_vulnerabilities(c));
        self.progress_reporter.report(&format!(
            "   - {} of {} component(s) shown",
            filtered.len(),
            session.statistics().total_components
        ));

        // Step 4: Build read model
        let report = ReportMetadataGenerator::generate_default();
        let read_model = DashboardReadModelBuilder::build(&session, &report, &request.tabs);

        Ok(DashboardResponse {
            read_model,
            has_vulnerable_components,
            skipped_entries: loaded.skipped,
        })
    }
}

#[cfg(test)]
mod tests;
