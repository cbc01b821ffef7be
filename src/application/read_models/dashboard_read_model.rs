//! Dashboard read model for rendering
//!
//! This module provides the main read model struct that aggregates
//! all dashboard data in a render-ready format.

use super::component_view::{ComponentCardView, LicenseGroupView, VulnerabilityView};

/// Main read model for the dashboard
///
/// Tabs that were not requested are `None`.
#[derive(Debug, Clone)]
pub struct DashboardReadModel {
    pub metadata: MetadataView,
    pub filter: FilterView,
    pub overview: Option<OverviewView>,
    pub components: Option<ComponentListView>,
    pub security: Option<SecurityView>,
    pub licenses: Option<Vec<LicenseGroupView>>,
}

/// View representation of snapshot and report metadata
#[derive(Debug, Clone)]
pub struct MetadataView {
    pub bom_format: String,
    pub spec_version: String,
    pub serial_number: String,
    pub snapshot_timestamp: String,
    /// Calendar date of the snapshot (`YYYY-MM-DD`), if the timestamp parses
    pub snapshot_date: Option<String>,
    pub source_tool_name: Option<String>,
    pub source_tool_version: Option<String>,
    pub generated_at: String,
    pub report_id: String,
    pub generator_name: String,
    pub generator_version: String,
}

/// Active filter criteria and the selectable options
#[derive(Debug, Clone)]
pub struct FilterView {
    pub search_text: String,
    pub ecosystem: String,
    pub license: String,
    pub vulnerable_only: bool,
    /// `ALL` followed by every ecosystem, in first-seen order
    pub ecosystem_options: Vec<String>,
    /// `ALL` followed by every license, in first-seen order
    pub license_options: Vec<String>,
}

/// Overview tab: headline statistics and chart series
#[derive(Debug, Clone)]
pub struct OverviewView {
    pub statistics: StatisticsView,
    pub ecosystem_chart: Vec<ChartSlice>,
    pub license_chart: Vec<ChartSlice>,
    pub risk_chart: Vec<ChartSlice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsView {
    pub total_components: usize,
    pub unique_licenses: usize,
    pub vulnerable_components: usize,
    pub total_vulnerabilities: usize,
    pub critical_count: usize,
    pub high_count: usize,
    pub risk_score: f64,
}

/// One labelled value of a chart series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: usize,
    pub color: Option<&'static str>,
}

/// Components tab: the filtered component cards
#[derive(Debug, Clone)]
pub struct ComponentListView {
    pub cards: Vec<ComponentCardView>,
}

impl ComponentListView {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Security tab: every vulnerability record of the snapshot
#[derive(Debug, Clone)]
pub struct SecurityView {
    pub vulnerabilities: Vec<VulnerabilityView>,
    pub affected_components: usize,
}
