use crate::application::read_models::{
    ChartSlice, ComponentCardView, DashboardReadModel, FilterView, LicenseGroupView, MetadataView,
    OverviewView, SecurityView, StatisticsView, VulnerabilityView,
};
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard<'a> {
    metadata: Metadata<'a>,
    filter: Filter<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overview: Option<Overview<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    components: Option<ComponentList<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    security: Option<Security<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Vec<LicenseGroup<'a>>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    bom_format: &'a str,
    spec_version: &'a str,
    serial_number: &'a str,
    timestamp: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    snapshot_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_tool: Option<Tool<'a>>,
    report: Report<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    id: &'a str,
    generated_at: &'a str,
    tool: Tool<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Filter<'a> {
    search_text: &'a str,
    ecosystem: &'a str,
    license: &'a str,
    vulnerable_only: bool,
    ecosystem_options: &'a [String],
    license_options: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Overview<'a> {
    statistics: Statistics,
    ecosystem_chart: Vec<Slice<'a>>,
    license_chart: Vec<Slice<'a>>,
    risk_chart: Vec<Slice<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    total_components: usize,
    unique_licenses: usize,
    vulnerable_components: usize,
    total_vulnerabilities: usize,
    critical_count: usize,
    high_count: usize,
    risk_score: f64,
}

#[derive(Debug, Serialize)]
struct Slice<'a> {
    label: &'a str,
    value: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ComponentList<'a> {
    count: usize,
    items: Vec<Card<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Card<'a> {
    key: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
    version: &'a str,
    #[serde(rename = "type")]
    component_type: &'a str,
    license: &'a str,
    ecosystem: &'a str,
    risk: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<String>,
    vulnerabilities: Vec<Vulnerability<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Vulnerability<'a> {
    id: &'a str,
    package_name: &'a str,
    installed_version: &'a str,
    fixed_versions: &'a [String],
    severity: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Security<'a> {
    total: usize,
    affected_components: usize,
    vulnerabilities: Vec<Vulnerability<'a>>,
}

#[derive(Debug, Serialize)]
struct LicenseGroup<'a> {
    license: &'a str,
    count: usize,
    components: &'a [String],
}

/// JsonFormatter adapter for rendering the dashboard as JSON
///
/// Field names are camelCase; tabs that were not requested are omitted.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardFormatter for JsonFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let dashboard = Dashboard {
            metadata: self.build_metadata(&model.metadata),
            filter: self.build_filter(&model.filter),
            overview: model.overview.as_ref().map(|o| self.build_overview(o)),
            components: model.components.as_ref().map(|list| ComponentList {
                count: list.count(),
                items: list.cards.iter().map(|c| self.build_card(c)).collect(),
            }),
            security: model.security.as_ref().map(|s| self.build_security(s)),
            licenses: model
                .licenses
                .as_ref()
                .map(|groups| groups.iter().map(|g| self.build_license_group(g)).collect()),
        };

        serde_json::to_string_pretty(&dashboard).map_err(Into::into)
    }
}

impl JsonFormatter {
    fn build_metadata<'a>(&self, metadata: &'a MetadataView) -> Metadata<'a> {
        let source_tool = match (&metadata.source_tool_name, &metadata.source_tool_version) {
            (Some(name), Some(version)) => Some(Tool { name, version }),
            _ => None,
        };

        Metadata {
            bom_format: &metadata.bom_format,
            spec_version: &metadata.spec_version,
            serial_number: &metadata.serial_number,
            timestamp: &metadata.snapshot_timestamp,
            snapshot_date: metadata.snapshot_date.as_deref(),
            source_tool,
            report: Report {
                id: &metadata.report_id,
                generated_at: &metadata.generated_at,
                tool: Tool {
                    name: &metadata.generator_name,
                    version: &metadata.generator_version,
                },
            },
        }
    }

    fn build_filter<'a>(&self, filter: &'a FilterView) -> Filter<'a> {
        Filter {
            search_text: &filter.search_text,
            ecosystem: &filter.ecosystem,
            license: &filter.license,
            vulnerable_only: filter.vulnerable_only,
            ecosystem_options: &filter.ecosystem_options,
            license_options: &filter.license_options,
        }
    }

    fn build_overview<'a>(&self, overview: &'a OverviewView) -> Overview<'a> {
        Overview {
            statistics: self.build_statistics(&overview.statistics),
            ecosystem_chart: self.build_chart(&overview.ecosystem_chart),
            license_chart: self.build_chart(&overview.license_chart),
            risk_chart: self.build_chart(&overview.risk_chart),
        }
    }

    fn build_statistics(&self, stats: &StatisticsView) -> Statistics {
        Statistics {
            total_components: stats.total_components,
            unique_licenses: stats.unique_licenses,
            vulnerable_components: stats.vulnerable_components,
            total_vulnerabilities: stats.total_vulnerabilities,
            critical_count: stats.critical_count,
            high_count: stats.high_count,
            risk_score: stats.risk_score,
        }
    }

    fn build_chart<'a>(&self, slices: &'a [ChartSlice]) -> Vec<Slice<'a>> {
        slices
            .iter()
            .map(|s| Slice {
                label: &s.label,
                value: s.value,
                color: s.color,
            })
            .collect()
    }

    fn build_card<'a>(&self, card: &'a ComponentCardView) -> Card<'a> {
        Card {
            key: &card.key,
            name: &card.name,
            group: card.group.as_deref(),
            version: &card.version,
            component_type: &card.component_type,
            license: &card.license,
            ecosystem: &card.ecosystem,
            risk: card.severity_bucket.label(),
            badge: card.vulnerability_badge(),
            vulnerabilities: card
                .vulnerabilities
                .iter()
                .map(|v| self.build_vulnerability(v))
                .collect(),
        }
    }

    fn build_vulnerability<'a>(&self, vuln: &'a VulnerabilityView) -> Vulnerability<'a> {
        Vulnerability {
            id: &vuln.id,
            package_name: &vuln.package_name,
            installed_version: &vuln.installed_version,
            fixed_versions: &vuln.fixed_versions,
            severity: vuln.severity.as_str(),
        }
    }

    fn build_security<'a>(&self, security: &'a SecurityView) -> Security<'a> {
        Security {
            total: security.vulnerabilities.len(),
            affected_components: security.affected_components,
            vulnerabilities: security
                .vulnerabilities
                .iter()
                .map(|v| self.build_vulnerability(v))
                .collect(),
        }
    }

    fn build_license_group<'a>(&self, group: &'a LicenseGroupView) -> LicenseGroup<'a> {
        LicenseGroup {
            license: &group.license,
            count: group.count(),
            components: &group.components,
        }
    }
}
