use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use crate::filter::FilterState;
use crate::types::{Categorized, ItemId};

/// Items shown per category section before "view more".
pub const DEFAULT_PAGE_SIZE: usize = 6;
/// How many more items each "view more" reveals.
pub const DEFAULT_EXPAND_STEP: usize = 6;
/// Declared section order of the dashboard.
pub const DEFAULT_CATEGORY_ORDER: [&str; 3] = ["Marketing", "Financial Operations", "Sales"];

// ---------------------------------------------------------------------------
// SectionLayout
// ---------------------------------------------------------------------------

/// Per-page presentation parameters: the declared section order and paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionLayout {
    category_order: Vec<String>,
    page_size: usize,
    expand_step: usize,
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORY_ORDER)
    }
}

impl SectionLayout {
    pub fn new<I, S>(category_order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category_order: category_order.into_iter().map(Into::into).collect(),
            page_size: DEFAULT_PAGE_SIZE,
            expand_step: DEFAULT_EXPAND_STEP,
        }
    }

    /// Zero is bumped to one so a section always shows something.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_expand_step(mut self, expand_step: usize) -> Self {
        self.expand_step = expand_step.max(1);
        self
    }

    pub fn category_order(&self) -> &[String] {
        &self.category_order
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn expand_step(&self) -> usize {
        self.expand_step
    }

    /// Position of `category` in the declared order, or `None` when the
    /// category is not declared.
    pub fn rank(&self, category: &str) -> Option<usize> {
        self.category_order.iter().position(|c| c == category)
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Transient UI state of one mounted list page. Created fresh on mount and
/// dropped on navigation; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct ViewState {
    filters: FilterState,
    hidden: AHashSet<ItemId>,
    expansion_limits: AHashMap<String, usize>,
    page_size: usize,
    expand_step: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_EXPAND_STEP)
    }
}

impl ViewState {
    pub fn new(page_size: usize, expand_step: usize) -> Self {
        Self {
            filters: FilterState::new(),
            hidden: AHashSet::new(),
            expansion_limits: AHashMap::new(),
            page_size: page_size.max(1),
            expand_step: expand_step.max(1),
        }
    }

    pub fn for_layout(layout: &SectionLayout) -> Self {
        Self::new(layout.page_size(), layout.expand_step())
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Soft-hide an item. Returns `false` if it was already hidden. There is
    /// no inverse: the hidden set only grows for the session.
    pub fn hide(&mut self, id: ItemId) -> bool {
        self.hidden.insert(id)
    }

    pub fn is_hidden(&self, id: &ItemId) -> bool {
        self.hidden.contains(id)
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    /// Current row limit for a category section.
    pub fn limit_for(&self, category: &str) -> usize {
        self.expansion_limits
            .get(category)
            .copied()
            .unwrap_or(self.page_size)
    }

    /// Raise the category's limit by one step and return the new limit.
    pub fn expand(&mut self, category: &str) -> usize {
        let step = self.expand_step;
        let page_size = self.page_size;
        let limit = self
            .expansion_limits
            .entry(category.to_string())
            .or_insert(page_size);
        *limit = limit.saturating_add(step);
        *limit
    }

    /// The visibility predicate: not hidden, and passing both filters. The
    /// hidden check runs first as the cheapest.
    pub fn is_visible<T: Categorized + ?Sized>(&self, item: &T) -> bool {
        !self.hidden.contains(item.item_id())
            && self.filters.matches(item.category(), item.classifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_declares_dashboard_order() {
        let layout = SectionLayout::default();
        assert_eq!(
            layout.category_order(),
            &["Marketing", "Financial Operations", "Sales"]
        );
        assert_eq!(layout.page_size(), 6);
        assert_eq!(layout.expand_step(), 6);
    }

    #[test]
    fn rank_follows_declaration() {
        let layout = SectionLayout::new(["B", "A"]);
        assert_eq!(layout.rank("B"), Some(0));
        assert_eq!(layout.rank("A"), Some(1));
        assert_eq!(layout.rank("Z"), None);
    }

    #[test]
    fn zero_paging_is_clamped() {
        let layout = SectionLayout::default()
            .with_page_size(0)
            .with_expand_step(0);
        assert_eq!(layout.page_size(), 1);
        assert_eq!(layout.expand_step(), 1);
    }

    #[test]
    fn hide_is_idempotent() {
        let mut state = ViewState::default();
        assert!(state.hide(ItemId::Num(7)));
        assert!(!state.hide(ItemId::Num(7)));
        assert_eq!(state.hidden_count(), 1);
    }

    #[test]
    fn expand_adds_one_step_per_call() {
        let mut state = ViewState::default();
        assert_eq!(state.limit_for("Sales"), 6);
        assert_eq!(state.expand("Sales"), 12);
        assert_eq!(state.expand("Sales"), 18);
        assert_eq!(state.limit_for("Marketing"), 6);
    }
}
