use crate::application::read_models::{
    ChartSlice, ComponentCardView, ComponentListView, DashboardReadModel, FilterView,
    LicenseGroupView, MetadataView, OverviewView, SecurityView, VulnerabilityView,
};
use crate::inventory::domain::{Severity, SeverityBucket};
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;

/// Markdown table header for the component list
const COMPONENT_TABLE_HEADER: &str =
    "| Component | Version | Type | License | Ecosystem | Risk | Vulnerabilities |\n";

/// Markdown table separator line for the component list
const COMPONENT_TABLE_SEPARATOR: &str =
    "|-----------|---------|------|---------|-----------|------|-----------------|\n";

/// Markdown table header for vulnerability information
const VULN_TABLE_HEADER: &str =
    "| Vulnerability | Package | Installed Version | Fixed Version | Severity |\n";

/// Markdown table separator line for vulnerability table
const VULN_TABLE_SEPARATOR: &str =
    "|---------------|---------|-------------------|---------------|----------|\n";

/// MarkdownFormatter adapter for rendering the dashboard as Markdown
///
/// Each requested tab becomes a top-level section, in display order.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn pluralize(count: usize, singular: &str, plural: &str) -> String {
        if count == 1 {
            format!("{} {}", count, singular)
        } else {
            format!("{} {}", count, plural)
        }
    }

    fn capitalize(text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn severity_emoji(severity: Severity) -> &'static str {
        match severity {
            Severity::Critical => "🔴",
            Severity::High => "🟠",
            Severity::Medium => "🟡",
            Severity::Low => "🟢",
            Severity::Unknown => "⚪",
        }
    }

    fn bucket_emoji(bucket: SeverityBucket) -> &'static str {
        match bucket {
            SeverityBucket::Critical => "🔴",
            SeverityBucket::High => "🟠",
            SeverityBucket::Low => "🟡",
            SeverityBucket::None => "🟢",
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    /// Renders the title and the snapshot/report metadata lines
    fn render_header(&self, output: &mut String, metadata: &MetadataView) {
        output.push_str("# SBOM Dashboard\n\n");

        let mut parts = vec![format!("{} v{}", metadata.bom_format, metadata.spec_version)];
        if let (Some(name), Some(version)) =
            (&metadata.source_tool_name, &metadata.source_tool_version)
        {
            parts.push(format!("Generated by {} v{}", Self::capitalize(name), version));
        }
        if let Some(date) = &metadata.snapshot_date {
            parts.push(date.clone());
        }
        output.push_str(&parts.join(" • "));
        output.push_str("\n\n");

        output.push_str(&format!(
            "*Report `{}` rendered at {} by {} {}*\n\n",
            metadata.report_id,
            metadata.generated_at,
            metadata.generator_name,
            metadata.generator_version
        ));
    }

    /// Renders the active filter criteria, only when some filter is set
    fn render_filters(&self, output: &mut String, filter: &FilterView) {
        let mut active = Vec::new();
        if !filter.search_text.is_empty() {
            active.push(format!("Search: `{}`", filter.search_text));
        }
        if filter.ecosystem != crate::inventory::domain::ALL_SELECTOR {
            active.push(format!("Ecosystem: `{}`", filter.ecosystem));
        }
        if filter.license != crate::inventory::domain::ALL_SELECTOR {
            active.push(format!("License: `{}`", filter.license));
        }
        if filter.vulnerable_only {
            active.push("Vulnerable only".to_string());
        }

        if !active.is_empty() {
            output.push_str(&format!("**Filters:** {}\n\n", active.join(", ")));
        }
    }

    /// Renders the overview tab
    fn render_overview(&self, output: &mut String, overview: &OverviewView) {
        let stats = &overview.statistics;

        output.push_str("## Overview\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        output.push_str(&format!("| Total Components | {} |\n", stats.total_components));
        output.push_str(&format!("| Unique Licenses | {} |\n", stats.unique_licenses));
        output.push_str(&format!(
            "| Vulnerable Components | {} |\n",
            stats.vulnerable_components
        ));
        output.push_str(&format!(
            "| Total Vulnerabilities | {} |\n",
            stats.total_vulnerabilities
        ));
        output.push_str(&format!("| Critical | {} |\n", stats.critical_count));
        output.push_str(&format!("| High | {} |\n", stats.high_count));
        output.push_str(&format!("| Risk Score | {:.1}/10 |\n\n", stats.risk_score));

        self.render_chart(
            output,
            "Components by Ecosystem",
            "Ecosystem",
            &overview.ecosystem_chart,
        );
        self.render_chart(output, "License Distribution", "License", &overview.license_chart);
        self.render_chart(output, "Risk Distribution", "Risk", &overview.risk_chart);
    }

    /// Renders one chart series as a two-column table
    fn render_chart(&self, output: &mut String, title: &str, label: &str, slices: &[ChartSlice]) {
        output.push_str(&format!("### {}\n\n", title));
        if slices.is_empty() {
            output.push_str("*No data*\n\n");
            return;
        }

        output.push_str(&format!("| {} | Components |\n", label));
        output.push_str("|---|---|\n");
        for slice in slices {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(&slice.label),
                slice.value
            ));
        }
        output.push('\n');
    }

    /// Renders the components tab
    fn render_components(&self, output: &mut String, list: &ComponentListView) {
        output.push_str("## Components\n\n");
        output.push_str(&format!(
            "**{}**\n\n",
            Self::pluralize(list.count(), "component", "components")
        ));

        if list.is_empty() {
            output.push_str("*No components match the current filters.*\n\n");
            return;
        }

        output.push_str(COMPONENT_TABLE_HEADER);
        output.push_str(COMPONENT_TABLE_SEPARATOR);
        for card in &list.cards {
            self.render_component_row(output, card);
        }
        output.push('\n');

        let vulnerable: Vec<&ComponentCardView> = list
            .cards
            .iter()
            .filter(|c| !c.vulnerabilities.is_empty())
            .collect();
        if vulnerable.is_empty() {
            return;
        }

        output.push_str("### Known Vulnerabilities\n\n");
        for card in vulnerable {
            output.push_str(&format!("#### {}@{}\n\n", card.coordinate, card.version));
            for vuln in &card.vulnerabilities {
                output.push_str(&format!(
                    "- {} **{}** ({}), fixed in: {}\n",
                    Self::severity_emoji(vuln.severity),
                    vuln.id,
                    vuln.severity,
                    Self::fixed_versions_display(vuln)
                ));
            }
            output.push('\n');
        }
    }

    fn render_component_row(&self, output: &mut String, card: &ComponentCardView) {
        let badge = card
            .vulnerability_badge()
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} {} | {} |\n",
            Self::escape_markdown_table_cell(&card.coordinate),
            Self::escape_markdown_table_cell(&card.version),
            Self::escape_markdown_table_cell(&card.component_type),
            Self::escape_markdown_table_cell(&card.license),
            Self::escape_markdown_table_cell(&card.ecosystem),
            Self::bucket_emoji(card.severity_bucket),
            card.severity_bucket,
            badge
        ));
    }

    fn fixed_versions_display(vuln: &VulnerabilityView) -> String {
        if vuln.fixed_versions.is_empty() {
            "N/A".to_string()
        } else {
            vuln.fixed_versions.join(", ")
        }
    }

    /// Renders the security tab
    fn render_security(&self, output: &mut String, security: &SecurityView) {
        output.push_str("## Security\n\n");
        output.push_str(&format!(
            "**{} detected across {}.**\n\n",
            Self::pluralize(
                security.vulnerabilities.len(),
                "vulnerability",
                "vulnerabilities"
            ),
            Self::pluralize(security.affected_components, "component", "components")
        ));

        if security.vulnerabilities.is_empty() {
            output.push_str("*No known vulnerabilities.*\n\n");
            return;
        }

        output.push_str(VULN_TABLE_HEADER);
        output.push_str(VULN_TABLE_SEPARATOR);

        for vuln in &security.vulnerabilities {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} {} |\n",
                Self::escape_markdown_table_cell(&vuln.id),
                Self::escape_markdown_table_cell(&vuln.package_name),
                Self::escape_markdown_table_cell(&vuln.installed_version),
                Self::escape_markdown_table_cell(&Self::fixed_versions_display(vuln)),
                Self::severity_emoji(vuln.severity),
                vuln.severity
            ));
        }
        output.push('\n');
    }

    /// Renders the licenses tab
    fn render_licenses(&self, output: &mut String, groups: &[LicenseGroupView]) {
        output.push_str("## Licenses\n\n");
        if groups.is_empty() {
            output.push_str("*No components.*\n\n");
            return;
        }

        for group in groups {
            output.push_str(&format!(
                "### {} ({})\n\n",
                group.license,
                Self::pluralize(group.count(), "component", "components")
            ));
            for component in &group.components {
                output.push_str(&format!("- {}\n", component));
            }
            output.push('\n');
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardFormatter for MarkdownFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata);
        self.render_filters(&mut output, &model.filter);

        if let Some(overview) = &model.overview {
            self.render_overview(&mut output, overview);
        }
        if let Some(components) = &model.components {
            self.render_components(&mut output, components);
        }
        if let Some(security) = &model.security {
            self.render_security(&mut output, security);
        }
        if let Some(licenses) = &model.licenses {
            self.render_licenses(&mut output, licenses);
        }

        Ok(output)
    }
}
