use super::DashboardTab;
use crate::inventory::domain::FilterCriteria;

/// DashboardRequest - Internal request DTO for the dashboard use case
#[derive(Debug, Clone)]
pub struct DashboardRequest {
    /// Filter predicates for the component list
    pub criteria: FilterCriteria,
    /// Tabs to include in the rendering, in display order
    pub tabs: Vec<DashboardTab>,
}

impl DashboardRequest {
    /// Creates a request; an empty tab list selects every tab
    pub fn new(criteria: FilterCriteria, tabs: Vec<DashboardTab>) -> Self {
        let tabs = if tabs.is_empty() {
            DashboardTab::ALL.to_vec()
        } else {
            // Display order, without duplicates
            DashboardTab::ALL
                .iter()
                .copied()
                .filter(|t| tabs.contains(t))
                .collect()
        };

        Self { criteria, tabs }
    }

    pub fn includes(&self, tab: DashboardTab) -> bool {
        self.tabs.contains(&tab)
    }
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self::new(FilterCriteria::default(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tabs_selects_all() {
        let request = DashboardRequest::default();
        assert_eq!(request.tabs, DashboardTab::ALL.to_vec());
    }

    #[test]
    fn test_tabs_are_normalized() {
        let request = DashboardRequest::new(
            FilterCriteria::default(),
            vec![
                DashboardTab::Licenses,
                DashboardTab::Overview,
                DashboardTab::Licenses,
            ],
        );
        assert_eq!(
            request.tabs,
            vec![DashboardTab::Overview, DashboardTab::Licenses]
        );
        assert!(request.includes(DashboardTab::Overview));
        assert!(!request.includes(DashboardTab::Security));
    }
}
