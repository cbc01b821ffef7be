/// Count of components sharing one category value (an ecosystem or a license)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Global summary statistics over one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_components: usize,
    /// Components per ecosystem, in first-seen order
    pub ecosystem_counts: Vec<CategoryCount>,
    pub unique_licenses: usize,
    pub vulnerable_components: usize,
    pub total_vulnerabilities: usize,
    pub critical_count: usize,
    pub high_count: usize,
    pub risk_score: f64,
}

impl Statistics {
    /// Number of components in the given ecosystem (0 if absent)
    pub fn ecosystem_count(&self, ecosystem: &str) -> usize {
        self.ecosystem_counts
            .iter()
            .find(|c| c.name == ecosystem)
            .map_or(0, |c| c.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecosystem_count_lookup() {
        let stats = Statistics {
            total_components: 3,
            ecosystem_counts: vec![CategoryCount::new("maven", 2), CategoryCount::new("npm", 1)],
            unique_licenses: 1,
            vulnerable_components: 0,
            total_vulnerabilities: 0,
            critical_count: 0,
            high_count: 0,
            risk_score: 0.0,
        };
        assert_eq!(stats.ecosystem_count("maven"), 2);
        assert_eq!(stats.ecosystem_count("npm"), 1);
        assert_eq!(stats.ecosystem_count("cargo"), 0);
    }
}
