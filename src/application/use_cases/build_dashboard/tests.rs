use super::*;
use crate::application::dto::DashboardTab;
use crate::inventory::domain::{
    Component, FilterCriteria, SbomSnapshot, Selector, Severity, SnapshotMetadata,
    VulnerabilityRecord,
};
use crate::ports::outbound::SnapshotLoadResult;
use std::cell::RefCell;

// Mock implementations for testing
struct MockSnapshotSource {
    skipped: Vec<String>,
    fail: bool,
}

impl MockSnapshotSource {
    fn new() -> Self {
        Self {
            skipped: Vec::new(),
            fail: false,
        }
    }
}

impl SnapshotSource for MockSnapshotSource {
    fn load_snapshot(&self) -> Result<SnapshotLoadResult> {
        if self.fail {
            anyhow::bail!("snapshot unavailable");
        }

        let metadata = SnapshotMetadata::new(
            "CycloneDX".to_string(),
            "1.6".to_string(),
            "urn:uuid:test".to_string(),
            "2026-01-20T20:46:59+00:00".to_string(),
            None,
        );
        let components = vec![
            Component::new(
                "snakeyaml".to_string(),
                Some("org.yaml".to_string()),
                "1.26".to_string(),
                "Apache-2.0".to_string(),
                "maven".to_string(),
            )?,
            Component::new(
                "express".to_string(),
                None,
                "4.17.1".to_string(),
                "MIT".to_string(),
                "npm".to_string(),
            )?,
        ];
        let records = vec![VulnerabilityRecord::new(
            "CVE-2022-1471".to_string(),
            "org.yaml:snakeyaml".to_string(),
            "1.26".to_string(),
            "2.0".to_string(),
            Severity::High,
        )?];

        Ok(SnapshotLoadResult {
            snapshot: SbomSnapshot::new(metadata, components, records),
            skipped: self.skipped.clone(),
        })
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_warning(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn report_error(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[test]
fn test_execute_default_request() {
    let reporter = MockProgressReporter::default();
    let use_case = BuildDashboardUseCase::new(MockSnapshotSource::new(), &reporter);

    let response = use_case.execute(DashboardRequest::default()).unwrap();

    assert!(response.has_vulnerable_components);
    assert!(response.skipped_entries.is_empty());
    let overview = response.read_model.overview.unwrap();
    assert_eq!(overview.statistics.total_components, 2);
    // (0 + 5) / 2 = 2.5
    assert_eq!(overview.statistics.risk_score, 2.5);
    assert_eq!(response.read_model.components.unwrap().count(), 2);
    assert!(reporter
        .messages
        .borrow()
        .iter()
        .any(|m| m.contains("Loaded 2 component(s) and 1 vulnerability record(s)")));
}

#[test]
fn test_execute_filtered_view_without_vulnerabilities() {
    let reporter = MockProgressReporter::default();
    let use_case = BuildDashboardUseCase::new(MockSnapshotSource::new(), &reporter);
    let request = DashboardRequest::new(
        FilterCriteria {
            ecosystem: Selector::Only("npm".to_string()),
            ..FilterCriteria::default()
        },
        vec![DashboardTab::Components],
    );

    let response = use_case.execute(request).unwrap();

    assert!(!response.has_vulnerable_components);
    assert!(response.read_model.overview.is_none());
    let cards = response.read_model.components.unwrap().cards;
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "express");
}

#[test]
fn test_execute_reports_skipped_entries() {
    let reporter = MockProgressReporter::default();
    let source = MockSnapshotSource {
        skipped: vec!["component #3: missing version".to_string()],
        fail: false,
    };
    let use_case = BuildDashboardUseCase::new(source, &reporter);

    let response = use_case.execute(DashboardRequest::default()).unwrap();

    assert_eq!(response.skipped_entries.len(), 1);
    assert_eq!(
        *reporter.warnings.borrow(),
        vec!["Skipped malformed entry: component #3: missing version"]
    );
}

#[test]
fn test_execute_rejects_unknown_license() {
    let reporter = MockProgressReporter::default();
    let use_case = BuildDashboardUseCase::new(MockSnapshotSource::new(), &reporter);
    let request = DashboardRequest::new(
        FilterCriteria {
            license: Selector::Only("GPL-3.0".to_string()),
            ..FilterCriteria::default()
        },
        Vec::new(),
    );

    let error = use_case.execute(request).unwrap_err();
    assert!(error.to_string().contains("Unknown license filter: GPL-3.0"));
}

#[test]
fn test_execute_propagates_load_failure() {
    let reporter = MockProgressReporter::default();
    let source = MockSnapshotSource {
        skipped: Vec::new(),
        fail: true,
    };
    let use_case = BuildDashboardUseCase::new(source, &reporter);

    let error = use_case.execute(DashboardRequest::default()).unwrap_err();
    assert_eq!(error.to_string(), "snapshot unavailable");
}
