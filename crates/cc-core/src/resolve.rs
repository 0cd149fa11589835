//! Visibility and grouping resolution.
//!
//! Turns a source collection plus [`ViewState`] into the render-ready
//! structure: visible items partitioned by category, sections in declared
//! order, each truncated to its page limit.

use serde::Serialize;

use crate::types::Categorized;
use crate::view::{SectionLayout, ViewState};

/// One rendered category section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<'a, T> {
    pub category: String,
    /// Visible items up to the section limit, in source order.
    pub items: Vec<&'a T>,
    /// Visible items in the section before truncation.
    pub total: usize,
    /// `total` exceeds the section limit; the "view more" control is shown.
    pub has_more: bool,
}

impl<T> Group<'_, T> {
    pub fn hidden_by_limit(&self) -> usize {
        self.total - self.items.len()
    }
}

/// Resolver output: either non-empty sections or the empty-state sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResolvedView<'a, T> {
    Groups { groups: Vec<Group<'a, T>> },
    Empty,
}

impl<'a, T> ResolvedView<'a, T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, ResolvedView::Empty)
    }

    pub fn groups(&self) -> &[Group<'a, T>] {
        match self {
            ResolvedView::Groups { groups } => groups,
            ResolvedView::Empty => &[],
        }
    }

    pub fn group(&self, category: &str) -> Option<&Group<'a, T>> {
        self.groups().iter().find(|g| g.category == category)
    }

    /// Category names in render order.
    pub fn categories(&self) -> Vec<&str> {
        self.groups().iter().map(|g| g.category.as_str()).collect()
    }

    /// Items actually rendered across all sections.
    pub fn rendered_count(&self) -> usize {
        self.groups().iter().map(|g| g.items.len()).sum()
    }
}

/// Resolve `items` against `state`.
///
/// Sections come from `layout`'s declared category order, never from the
/// data: an item whose category is not declared matches no section and is not
/// rendered. Within a section items keep source order. Sections with no
/// visible items are omitted, and a fully empty result is
/// [`ResolvedView::Empty`].
pub fn resolve<'a, T: Categorized>(
    items: &'a [T],
    state: &ViewState,
    layout: &SectionLayout,
) -> ResolvedView<'a, T> {
    let mut sections: Vec<Vec<&'a T>> = vec![Vec::new(); layout.category_order().len()];

    for item in items.iter().filter(|item| state.is_visible(*item)) {
        if let Some(rank) = layout.rank(item.category()) {
            sections[rank].push(item);
        }
    }

    let groups: Vec<Group<'a, T>> = layout
        .category_order()
        .iter()
        .zip(sections)
        .filter(|(_, visible)| !visible.is_empty())
        .map(|(category, mut visible)| {
            let limit = state.limit_for(category);
            let total = visible.len();
            visible.truncate(limit);
            Group {
                category: category.clone(),
                items: visible,
                total,
                has_more: total > limit,
            }
        })
        .collect();

    if groups.is_empty() {
        return ResolvedView::Empty;
    }
    ResolvedView::Groups { groups }
}

/// Number of visible (unhidden, filter-passing) items in `category`, ignoring
/// the section limit.
pub fn visible_in_category<T: Categorized>(items: &[T], state: &ViewState, category: &str) -> usize {
    items
        .iter()
        .filter(|item| item.category() == category && state.is_visible(*item))
        .count()
}
