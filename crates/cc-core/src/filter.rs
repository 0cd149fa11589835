use std::collections::BTreeSet;

use serde::Serialize;

/// The two independent filter dimensions a list page exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterDimension {
    Category,
    Classifier,
}

/// A removable chip rendered for each active filter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterChip {
    pub dimension: FilterDimension,
    pub value: String,
}

/// Multi-select filter state. An empty set means that dimension is not
/// filtering. Values are free-form; a value matching no item just produces an
/// empty view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    categories: BTreeSet<String>,
    classifiers: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the category filter, or remove it if already present.
    /// Returns `true` when the value is selected afterwards.
    pub fn toggle_category(&mut self, value: impl Into<String>) -> bool {
        toggle(&mut self.categories, value.into())
    }

    /// Classifier counterpart of [`toggle_category`](Self::toggle_category).
    pub fn toggle_classifier(&mut self, value: impl Into<String>) -> bool {
        toggle(&mut self.classifiers, value.into())
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.classifiers.clear();
    }

    pub fn active_filter_count(&self) -> usize {
        self.categories.len() + self.classifiers.len()
    }

    pub fn is_active(&self) -> bool {
        self.active_filter_count() > 0
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn classifiers(&self) -> &BTreeSet<String> {
        &self.classifiers
    }

    /// OR within a dimension, AND across dimensions.
    pub fn matches(&self, category: &str, classifier: &str) -> bool {
        (self.categories.is_empty() || self.categories.contains(category))
            && (self.classifiers.is_empty() || self.classifiers.contains(classifier))
    }

    /// Active filters as chips, categories first.
    pub fn chips(&self) -> Vec<FilterChip> {
        let categories = self.categories.iter().map(|v| FilterChip {
            dimension: FilterDimension::Category,
            value: v.clone(),
        });
        let classifiers = self.classifiers.iter().map(|v| FilterChip {
            dimension: FilterDimension::Classifier,
            value: v.clone(),
        });
        categories.chain(classifiers).collect()
    }
}

fn toggle(set: &mut BTreeSet<String>, value: String) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_original() {
        let mut f = FilterState::new();
        f.toggle_category("Sales");
        let before = f.clone();

        assert!(f.toggle_category("Marketing"));
        assert!(!f.toggle_category("Marketing"));
        assert_eq!(f, before);
    }

    #[test]
    fn clear_empties_both_dimensions() {
        let mut f = FilterState::new();
        f.toggle_category("Sales");
        f.toggle_classifier("High");
        f.toggle_classifier("Critical");
        assert_eq!(f.active_filter_count(), 3);

        f.clear();
        assert_eq!(f.active_filter_count(), 0);
        assert!(!f.is_active());
    }

    #[test]
    fn empty_dimension_matches_everything() {
        let mut f = FilterState::new();
        assert!(f.matches("Anything", "Whatever"));

        f.toggle_classifier("High");
        assert!(f.matches("Sales", "High"));
        assert!(!f.matches("Sales", "Low"));
    }

    #[test]
    fn dimensions_are_conjunctive() {
        let mut f = FilterState::new();
        f.toggle_category("Sales");
        f.toggle_category("Marketing");
        f.toggle_classifier("High");

        assert!(f.matches("Marketing", "High"));
        assert!(!f.matches("Marketing", "Medium"));
        assert!(!f.matches("Financial Operations", "High"));
    }

    #[test]
    fn chips_list_categories_before_classifiers() {
        let mut f = FilterState::new();
        f.toggle_classifier("High");
        f.toggle_category("Sales");
        f.toggle_category("Marketing");

        let chips = f.chips();
        let values: Vec<_> = chips.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["Marketing", "Sales", "High"]);
        assert_eq!(chips[2].dimension, FilterDimension::Classifier);
    }
}
