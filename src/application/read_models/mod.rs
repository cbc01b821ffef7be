//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the dashboard for formatters.

mod component_view;
mod dashboard_read_model;
mod dashboard_read_model_builder;

pub use component_view::{ComponentCardView, LicenseGroupView, VulnerabilityView};
pub use dashboard_read_model::{
    ChartSlice, ComponentListView, DashboardReadModel, FilterView, MetadataView, OverviewView,
    SecurityView, StatisticsView,
};
pub use dashboard_read_model_builder::DashboardReadModelBuilder;
