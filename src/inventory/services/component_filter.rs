use super::VulnerabilityMatcher;
use crate::inventory::domain::{Component, FilterCriteria, VulnerabilityRecord};

/// ComponentFilter - Applies the dashboard's search and selector predicates
///
/// A component is kept only if it passes all of:
/// - case-insensitive substring search over name and group (empty search passes)
/// - the ecosystem selector
/// - the license selector
/// - the "vulnerable only" toggle
///
/// Filtering is stable and never fails; no match yields an empty list.
pub struct ComponentFilter<'c> {
    criteria: &'c FilterCriteria,
    needle: String,
}

impl<'c> ComponentFilter<'c> {
    pub fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search_text.to_lowercase(),
        }
    }

    /// Filters against a record list, correlating with [`VulnerabilityMatcher`]
    pub fn filter_components<'a>(
        &self,
        components: &'a [Component],
        records: &[VulnerabilityRecord],
    ) -> Vec<&'a Component> {
        self.filter_with(components, |c| {
            VulnerabilityMatcher::has_vulnerabilities(c, records)
        })
    }

    /// Filters with a caller-supplied vulnerability predicate
    pub fn filter_with<'a, F>(
        &self,
        components: &'a [Component],
        is_vulnerable: F,
    ) -> Vec<&'a Component>
    where
        F: Fn(&Component) -> bool,
    {
        components
            .iter()
            .filter(|c| self.accepts(c, &is_vulnerable))
            .collect()
    }

    fn accepts<F>(&self, component: &Component, is_vulnerable: &F) -> bool
    where
        F: Fn(&Component) -> bool,
    {
        self.matches_search(component)
            && self.criteria.ecosystem.accepts(component.ecosystem())
            && self.criteria.license.accepts(component.license())
            // Evaluated last so the correlation only runs for otherwise-kept components
            && (!self.criteria.vulnerable_only || is_vulnerable(component))
    }

    fn matches_search(&self, component: &Component) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        component.name().to_lowercase().contains(&self.needle)
            || component
                .group()
                .is_some_and(|g| g.to_lowercase().contains(&self.needle))
    }
}
