//! The collection view engine.
//!
//! One [`CollectionView`] is mounted per list page. It owns the page's
//! immutable item collection and its transient [`ViewState`], exposes the
//! mutators the presentation layer calls on user interaction, and re-derives
//! the grouped output on every read.

use tracing::debug;

use crate::actions::{ActionOutcome, CardActions, CtaSlot, DispatchError};
use crate::catalog::{CatalogError, ItemSource};
use crate::filter::FilterChip;
use crate::resolve::{resolve, visible_in_category, ResolvedView};
use crate::types::{Categorized, ItemId};
use crate::view::{SectionLayout, ViewState};

pub struct CollectionView<T> {
    items: Vec<T>,
    layout: SectionLayout,
    state: ViewState,
}

impl<T: Categorized> CollectionView<T> {
    /// Mount a view over `items` with fresh state: no filters, nothing hidden,
    /// default section limits.
    pub fn new(items: Vec<T>, layout: SectionLayout) -> Self {
        let state = ViewState::for_layout(&layout);
        Self {
            items,
            layout,
            state,
        }
    }

    pub fn from_source<S>(source: &S, layout: SectionLayout) -> Result<Self, CatalogError>
    where
        S: ItemSource<Item = T>,
    {
        Ok(Self::new(source.items()?, layout))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn find(&self, id: &ItemId) -> Option<&T> {
        self.items.iter().find(|item| item.item_id() == id)
    }

    // -----------------------------------------------------------------------
    // Filters
    // -----------------------------------------------------------------------

    pub fn toggle_category_filter(&mut self, category: &str) -> bool {
        let selected = self.state.filters_mut().toggle_category(category);
        debug!(category, selected, "category filter toggled");
        selected
    }

    /// Toggle a classifier value (status for agents, impact for tasks).
    pub fn toggle_status_filter(&mut self, classifier: &str) -> bool {
        let selected = self.state.filters_mut().toggle_classifier(classifier);
        debug!(classifier, selected, "classifier filter toggled");
        selected
    }

    /// Drop every category and classifier filter. Dismissed items stay hidden.
    pub fn clear_filters(&mut self) {
        self.state.filters_mut().clear();
        debug!("filters cleared");
    }

    pub fn active_filter_count(&self) -> usize {
        self.state.filters().active_filter_count()
    }

    pub fn filter_chips(&self) -> Vec<FilterChip> {
        self.state.filters().chips()
    }

    // -----------------------------------------------------------------------
    // Dismiss
    // -----------------------------------------------------------------------

    /// Hide an item for the rest of the session. Unknown and already-hidden
    /// ids are accepted; returns whether the hidden set changed.
    pub fn hide_item(&mut self, id: impl Into<ItemId>) -> bool {
        let id = id.into();
        let changed = self.state.hide(id.clone());
        debug!(%id, changed, "item hidden");
        changed
    }

    // -----------------------------------------------------------------------
    // Pagination
    // -----------------------------------------------------------------------

    /// Reveal one more page of `category`. A no-op when everything visible in
    /// the section is already shown or the category has no section; returns
    /// whether the limit moved.
    pub fn expand_category(&mut self, category: &str) -> bool {
        if self.layout.rank(category).is_none() {
            debug!(category, "no such section");
            return false;
        }
        let visible = visible_in_category(&self.items, &self.state, category);
        if visible <= self.state.limit_for(category) {
            debug!(category, visible, "nothing more to show");
            return false;
        }
        let limit = self.state.expand(category);
        debug!(category, limit, visible, "category expanded");
        true
    }

    // -----------------------------------------------------------------------
    // Output
    // -----------------------------------------------------------------------

    /// The render-ready sections, recomputed from scratch.
    pub fn visible_groups(&self) -> ResolvedView<'_, T> {
        resolve(&self.items, &self.state, &self.layout)
    }

    /// Whether the item is rendered in some section, ignoring section limits.
    pub fn is_visible(&self, id: &ItemId) -> bool {
        self.find(id).is_some_and(|item| {
            self.layout.rank(item.category()).is_some() && self.state.is_visible(item)
        })
    }
}

impl<T: Categorized + CardActions> CollectionView<T> {
    /// Handle a click on one of a card's buttons. Hide actions are applied to
    /// the view before the outcome is returned.
    pub fn dispatch(&mut self, id: &ItemId, slot: CtaSlot) -> Result<ActionOutcome, DispatchError> {
        let item = self
            .find(id)
            .ok_or_else(|| DispatchError::UnknownItem(id.clone()))?;
        if self.state.is_hidden(id) {
            return Err(DispatchError::Dismissed(id.clone()));
        }
        let action = item.action(slot).ok_or_else(|| DispatchError::NoAction {
            id: id.clone(),
            slot,
        })?;

        let outcome = ActionOutcome::for_action(action, id);
        if let ActionOutcome::Hidden { id } = &outcome {
            self.state.hide(id.clone());
        }
        debug!(%id, ?slot, ?outcome, "card action dispatched");
        Ok(outcome)
    }
}
