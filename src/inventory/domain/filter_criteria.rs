use std::fmt;

/// Selector value meaning "do not restrict"
pub const ALL_SELECTOR: &str = "ALL";

/// A dropdown-style selector: either every value, or exactly one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    #[default]
    All,
    Only(String),
}

impl Selector {
    /// Builds a selector from user input; `ALL` and the empty string select everything
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value == ALL_SELECTOR {
            Selector::All
        } else {
            Selector::Only(value.to_string())
        }
    }

    /// Returns true if the given value passes this selector (exact comparison)
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(selected) => selected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str(ALL_SELECTOR),
            Selector::Only(value) => f.write_str(value),
        }
    }
}

/// User-supplied filter predicates for the component list
///
/// The default value keeps every component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub ecosystem: Selector,
    pub license: Selector,
    pub vulnerable_only: bool,
}

impl FilterCriteria {
    pub fn new(
        search_text: String,
        ecosystem: Selector,
        license: Selector,
        vulnerable_only: bool,
    ) -> Self {
        Self {
            search_text,
            ecosystem,
            license,
            vulnerable_only,
        }
    }

    /// Returns true if no predicate restricts the result
    pub fn is_unrestricted(&self) -> bool {
        self.search_text.is_empty()
            && self.ecosystem.is_all()
            && self.license.is_all()
            && !self.vulnerable_only
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parse() {
        assert_eq!(Selector::parse("ALL"), Selector::All);
        assert_eq!(Selector::parse(""), Selector::All);
        assert_eq!(Selector::parse("npm"), Selector::Only("npm".to_string()));
        // "all" is a literal value, not the wildcard
        assert_eq!(Selector::parse("all"), Selector::Only("all".to_string()));
    }

    #[test]
    fn test_selector_accepts() {
        assert!(Selector::All.accepts("maven"));
        let npm = Selector::Only("npm".to_string());
        assert!(npm.accepts("npm"));
        assert!(!npm.accepts("NPM"));
        assert!(!npm.accepts("maven"));
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(Selector::All.to_string(), "ALL");
        assert_eq!(Selector::Only("MIT".to_string()).to_string(), "MIT");
    }

    #[test]
    fn test_default_criteria_is_unrestricted() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unrestricted());
        assert_eq!(criteria.search_text, "");
        assert_eq!(criteria.ecosystem, Selector::All);
        assert!(!criteria.vulnerable_only);
    }

    #[test]
    fn test_criteria_with_toggle_is_restricted() {
        let criteria = FilterCriteria::new(String::new(), Selector::All, Selector::All, true);
        assert!(!criteria.is_unrestricted());
    }
}
