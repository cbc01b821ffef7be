/// Dashboard tabs that can be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    Overview,
    Components,
    Security,
    Licenses,
}

impl DashboardTab {
    /// Every tab, in display order
    pub const ALL: [DashboardTab; 4] = [
        DashboardTab::Overview,
        DashboardTab::Components,
        DashboardTab::Security,
        DashboardTab::Licenses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Components => "components",
            DashboardTab::Security => "security",
            DashboardTab::Licenses => "licenses",
        }
    }
}

impl std::str::FromStr for DashboardTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(DashboardTab::Overview),
            "components" => Ok(DashboardTab::Components),
            "security" => Ok(DashboardTab::Security),
            "licenses" => Ok(DashboardTab::Licenses),
            _ => Err(format!(
                "Invalid tab: {}. Please specify one of: overview, components, security, licenses",
                s
            )),
        }
    }
}

impl std::fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
