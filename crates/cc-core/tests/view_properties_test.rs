use std::collections::BTreeSet;

use cc_core::types::{Categorized, ItemId};
use cc_core::{CollectionView, SectionLayout};
use proptest::prelude::*;

/// The first three are the default declared order; "Legal" is undeclared.
const CATEGORIES: [&str; 4] = ["Marketing", "Financial Operations", "Sales", "Legal"];
const DECLARED: [&str; 3] = ["Marketing", "Financial Operations", "Sales"];
const CLASSIFIERS: [&str; 4] = ["Critical", "High", "Medium", "Low"];

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: ItemId,
    category: &'static str,
    classifier: &'static str,
}

impl Categorized for Row {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
    fn category(&self) -> &str {
        self.category
    }
    fn classifier(&self) -> &str {
        self.classifier
    }
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec((0..CATEGORIES.len(), 0..CLASSIFIERS.len()), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (c, k))| Row {
                id: ItemId::Num(i as u64),
                category: CATEGORIES[c],
                classifier: CLASSIFIERS[k],
            })
            .collect()
    })
}

fn subset(values: &'static [&'static str]) -> impl Strategy<Value = BTreeSet<&'static str>> {
    prop::sample::subsequence(values.to_vec(), 0..=values.len())
        .prop_map(|v| v.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_visibility_is_the_conjunction_of_filters_and_hidden_set(
        rows in rows_strategy(),
        categories in subset(&CATEGORIES),
        classifiers in subset(&CLASSIFIERS),
        hidden in prop::collection::btree_set(0u64..40, 0..20),
    ) {
        let layout = SectionLayout::default().with_page_size(usize::MAX);
        let mut view = CollectionView::new(rows.clone(), layout);
        for c in &categories {
            view.toggle_category_filter(c);
        }
        for k in &classifiers {
            view.toggle_status_filter(k);
        }
        for id in &hidden {
            view.hide_item(ItemId::Num(*id));
        }

        let expected: Vec<&Row> = rows
            .iter()
            .filter(|r| {
                let ItemId::Num(n) = r.id else { unreachable!() };
                !hidden.contains(&n)
                    && DECLARED.contains(&r.category)
                    && (categories.is_empty() || categories.contains(r.category))
                    && (classifiers.is_empty() || classifiers.contains(r.classifier))
            })
            .collect();

        let resolved = view.visible_groups();
        let mut rendered: Vec<&Row> = resolved.groups().iter().flat_map(|g| g.items.iter().copied()).collect();
        rendered.sort_by_key(|r| r.id.clone());

        prop_assert_eq!(rendered, expected.clone());
        prop_assert_eq!(resolved.is_empty(), expected.is_empty());
    }

    #[test]
    fn prop_hide_is_idempotent(rows in rows_strategy(), id in 0u64..40) {
        let mut once = CollectionView::new(rows.clone(), SectionLayout::default());
        once.hide_item(ItemId::Num(id));

        let mut twice = CollectionView::new(rows, SectionLayout::default());
        twice.hide_item(ItemId::Num(id));
        twice.hide_item(ItemId::Num(id));

        prop_assert_eq!(once.state().hidden_count(), twice.state().hidden_count());
        prop_assert_eq!(once.visible_groups(), twice.visible_groups());
    }

    #[test]
    fn prop_toggle_twice_is_identity(
        rows in rows_strategy(),
        start in subset(&CATEGORIES),
        value in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let mut view = CollectionView::new(rows, SectionLayout::default());
        for c in &start {
            view.toggle_category_filter(c);
        }
        let before = view.state().filters().clone();

        view.toggle_category_filter(value);
        view.toggle_category_filter(value);

        prop_assert_eq!(view.state().filters(), &before);
    }

    #[test]
    fn prop_section_order_ignores_input_order(rows in rows_strategy().prop_shuffle()) {
        let view = CollectionView::new(rows.clone(), SectionLayout::default());
        let resolved = view.visible_groups();

        let expected: Vec<&str> = DECLARED
            .into_iter()
            .filter(|c| rows.iter().any(|r| r.category == *c))
            .collect();
        prop_assert_eq!(resolved.categories(), expected);
    }

    #[test]
    fn prop_expand_is_monotonic(rows in rows_strategy(), steps in 1usize..5) {
        let mut view = CollectionView::new(rows, SectionLayout::default());
        for category in CATEGORIES {
            let mut shown = view.visible_groups().group(category).map_or(0, |g| g.items.len());
            for _ in 0..steps {
                view.expand_category(category);
                let resolved = view.visible_groups();
                let now = resolved.group(category).map_or(0, |g| g.items.len());
                prop_assert!(now >= shown);
                if let Some(group) = resolved.group(category) {
                    if view.state().limit_for(category) >= group.total {
                        prop_assert!(!group.has_more);
                    }
                }
                shown = now;
            }
        }
    }
}
