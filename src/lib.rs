//! sbom-dashboard - SBOM inventory and vulnerability dashboard
//!
//! This library correlates a component inventory (an SBOM snapshot) with
//! vulnerability scan records, aggregates statistics and risk, and renders
//! the result as a tabbed dashboard. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`inventory`): Components, vulnerability records,
//!   correlation, filtering and aggregation
//! - **Application Layer** (`application`): Use case, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_dashboard::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = BuildDashboardUseCase::new(
//!     EmbeddedSnapshotSource::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = DashboardRequest::new(
//!     FilterCriteria {
//!         search_text: "jackson".to_string(),
//!         ..FilterCriteria::default()
//!     },
//!     vec![DashboardTab::Components],
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = MarkdownFormatter::new().format(&response.read_model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::embedded::EmbeddedSnapshotSource;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        DashboardRequest, DashboardResponse, DashboardTab, OutputFormat,
    };
    pub use crate::application::read_models::DashboardReadModel;
    pub use crate::application::use_cases::BuildDashboardUseCase;
    pub use crate::inventory::domain::{
        Component, FilterCriteria, SbomSnapshot, Selector, Severity, SeverityBucket, Statistics,
        VulnerabilityRecord,
    };
    pub use crate::inventory::services::{
        ComponentFilter, DashboardSession, StatisticsCalculator, VulnerabilityIndex,
        VulnerabilityMatcher,
    };
    pub use crate::ports::outbound::{
        DashboardFormatter, OutputPresenter, ProgressReporter, SnapshotLoadResult, SnapshotSource,
    };
    pub use crate::shared::Result;
}
