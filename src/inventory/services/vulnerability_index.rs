use crate::inventory::domain::{Component, VulnerabilityRecord};
use std::collections::HashMap;

/// VulnerabilityIndex - Key index over vulnerability records
///
/// Replaces the per-component scan of [`VulnerabilityMatcher`] with two map
/// lookups: one keyed by the leaf name (after the last `:`), one keyed by the
/// full package name. Results are identical to the scan, including record order.
///
/// [`VulnerabilityMatcher`]: super::VulnerabilityMatcher
#[derive(Debug, Default)]
pub struct VulnerabilityIndex {
    by_leaf_name: HashMap<String, Vec<usize>>,
    by_package_name: HashMap<String, Vec<usize>>,
}

impl VulnerabilityIndex {
    pub fn build(records: &[VulnerabilityRecord]) -> Self {
        let mut index = Self::default();
        for (position, record) in records.iter().enumerate() {
            index
                .by_leaf_name
                .entry(record.package_leaf_name().to_string())
                .or_default()
                .push(position);
            index
                .by_package_name
                .entry(record.package_name().to_string())
                .or_default()
                .push(position);
        }
        index
    }

    /// Positions (ascending, deduplicated) of every record matching the component
    pub fn positions_for(&self, component: &Component) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .by_leaf_name
            .get(component.name())
            .cloned()
            .unwrap_or_default();

        if let Some(group) = component.group() {
            let qualified = format!("{}:{}", group, component.name());
            if let Some(extra) = self.by_package_name.get(&qualified) {
                positions.extend_from_slice(extra);
                positions.sort_unstable();
                positions.dedup();
            }
        }

        positions
    }

    pub fn contains(&self, component: &Component) -> bool {
        if self.by_leaf_name.contains_key(component.name()) {
            return true;
        }
        component.group().is_some_and(|group| {
            self.by_package_name
                .contains_key(&format!("{}:{}", group, component.name()))
        })
    }

    /// Resolves matching records against the slice the index was built from
    pub fn records_for<'a>(
        &self,
        component: &Component,
        records: &'a [VulnerabilityRecord],
    ) -> Vec<&'a VulnerabilityRecord> {
        self.positions_for(component)
            .into_iter()
            .filter_map(|position| records.get(position))
            .collect()
    }
}
