use cc_core::actions::{ActionOutcome, CtaSlot};
use cc_core::catalog::{demo_agents, demo_attention_items, demo_tasks};
use cc_core::config::ViewConfig;
use cc_core::types::{Categorized, ItemId};
use cc_core::{CollectionView, ResolvedView, SectionLayout};

/// Minimal item shape for driving the engine with arbitrary data.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: ItemId,
    category: String,
    classifier: String,
}

impl Categorized for Row {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn classifier(&self) -> &str {
        &self.classifier
    }
}

fn row(id: u64, category: &str, classifier: &str) -> Row {
    Row {
        id: ItemId::Num(id),
        category: category.into(),
        classifier: classifier.into(),
    }
}

fn view(rows: Vec<Row>) -> CollectionView<Row> {
    CollectionView::new(rows, SectionLayout::default())
}

// ===========================================================================
// Pagination
// ===========================================================================

#[test]
fn small_section_shows_everything() {
    // 10 items, 3 of them Marketing.
    let mut rows = vec![
        row(1, "Marketing", "High"),
        row(2, "Marketing", "Low"),
        row(3, "Marketing", "Medium"),
    ];
    rows.extend((4..=10).map(|i| row(i, "Sales", "Low")));

    let v = view(rows);
    let groups = v.visible_groups();
    let marketing = groups.group("Marketing").expect("marketing section");
    assert_eq!(marketing.items.len(), 3);
    assert!(!marketing.has_more);
}

#[test]
fn large_section_pages_in_steps_of_six() {
    let rows: Vec<Row> = (1..=8).map(|i| row(i, "Sales", "High")).collect();
    let mut v = view(rows);

    {
        let groups = v.visible_groups();
        let sales = groups.group("Sales").unwrap();
        assert_eq!(sales.items.len(), 6);
        assert_eq!(sales.total, 8);
        assert!(sales.has_more);
    }

    assert!(v.expand_category("Sales"));

    let groups = v.visible_groups();
    let sales = groups.group("Sales").unwrap();
    assert_eq!(sales.items.len(), 8);
    assert!(!sales.has_more);

    // The control is gone; further expansion changes nothing.
    assert!(!v.expand_category("Sales"));
    assert_eq!(v.state().limit_for("Sales"), 12);
}

#[test]
fn expanding_one_section_leaves_others_alone() {
    let mut rows: Vec<Row> = (1..=8).map(|i| row(i, "Sales", "High")).collect();
    rows.extend((9..=16).map(|i| row(i, "Marketing", "High")));
    let mut v = view(rows);

    v.expand_category("Marketing");

    let groups = v.visible_groups();
    assert_eq!(groups.group("Marketing").unwrap().items.len(), 8);
    assert_eq!(groups.group("Sales").unwrap().items.len(), 6);
}

#[test]
fn configured_page_size_is_honoured() {
    let mut cfg = ViewConfig::default();
    cfg.page_size = 2;
    cfg.expand_step = 1;

    let rows: Vec<Row> = (1..=4).map(|i| row(i, "Sales", "High")).collect();
    let mut v = CollectionView::new(rows, cfg.layout());
    assert_eq!(v.visible_groups().rendered_count(), 2);

    v.expand_category("Sales");
    assert_eq!(v.visible_groups().rendered_count(), 3);
}

// ===========================================================================
// Hiding and filtering
// ===========================================================================

#[test]
fn hidden_item_stays_out_under_classifier_filter() {
    let mut v = view(vec![
        row(1, "Sales", "High"),
        row(2, "Marketing", "High"),
        row(3, "Sales", "Low"),
    ]);

    v.hide_item(ItemId::Num(1));
    v.toggle_status_filter("High");

    let groups = v.visible_groups();
    assert!(groups.group("Sales").is_none());
    let marketing = groups.group("Marketing").unwrap();
    assert_eq!(marketing.items[0].id, ItemId::Num(2));
}

#[test]
fn hiding_everything_yields_the_empty_sentinel() {
    let mut v = view(vec![
        row(1, "Sales", "High"),
        row(2, "Marketing", "Low"),
    ]);
    assert_eq!(v.active_filter_count(), 0);

    v.hide_item(ItemId::Num(1));
    v.hide_item(ItemId::Num(2));

    assert_eq!(v.visible_groups(), ResolvedView::Empty);
}

#[test]
fn filter_matching_nothing_yields_the_empty_sentinel() {
    let mut v = view(vec![row(1, "Sales", "High")]);
    v.toggle_category_filter("Legal");
    assert!(v.visible_groups().is_empty());

    v.toggle_category_filter("Legal");
    assert!(!v.visible_groups().is_empty());
}

#[test]
fn undeclared_category_matches_no_section() {
    let v = view(vec![row(1, "Legal", "High"), row(2, "Sales", "High")]);
    let groups = v.visible_groups();
    assert_eq!(groups.categories(), vec!["Sales"]);

    let only_legal = view(vec![row(1, "Legal", "High")]);
    assert_eq!(only_legal.visible_groups(), ResolvedView::Empty);
}

#[test]
fn hiding_unknown_id_is_accepted() {
    let mut v = view(vec![row(1, "Sales", "High")]);
    assert!(v.hide_item(ItemId::Text("ghost".into())));
    assert!(!v.hide_item(ItemId::Text("ghost".into())));
    assert_eq!(v.visible_groups().rendered_count(), 1);
}

#[test]
fn chips_reflect_active_filters() {
    let mut v = view(vec![row(1, "Sales", "High")]);
    v.toggle_category_filter("Sales");
    v.toggle_status_filter("High");
    v.toggle_status_filter("Low");

    assert_eq!(v.active_filter_count(), 3);
    let values: Vec<String> = v.filter_chips().into_iter().map(|c| c.value).collect();
    assert_eq!(values, vec!["Sales", "High", "Low"]);
}

// ===========================================================================
// Demo collections
// ===========================================================================

#[test]
fn workforce_status_filter() {
    let mut v = CollectionView::new(demo_agents(), SectionLayout::default());
    v.toggle_status_filter("Active");

    let groups = v.visible_groups();
    assert_eq!(groups.categories(), vec!["Marketing", "Financial Operations"]);
    assert_eq!(groups.rendered_count(), 2);
}

#[test]
fn tasks_group_in_declared_order() {
    let v = CollectionView::new(demo_tasks(), SectionLayout::default());
    assert_eq!(
        v.visible_groups().categories(),
        vec!["Marketing", "Financial Operations", "Sales"]
    );
}

#[test]
fn dismissing_attention_cards_through_actions() {
    let mut v = CollectionView::new(demo_attention_items(), SectionLayout::default());

    // "Defer" and "Pause" both hide; "Diagnose" navigates.
    let deferred = v.dispatch(&ItemId::Num(1), CtaSlot::Secondary).unwrap();
    let paused = v.dispatch(&ItemId::Num(4), CtaSlot::Secondary).unwrap();
    let diagnosed = v.dispatch(&ItemId::Num(2), CtaSlot::Secondary).unwrap();

    assert!(matches!(deferred, ActionOutcome::Hidden { .. }));
    assert!(matches!(paused, ActionOutcome::Hidden { .. }));
    assert_eq!(diagnosed.url(), Some("/agents/conversion-funnel-optimizer"));

    let groups = v.visible_groups();
    assert_eq!(groups.rendered_count(), 2);
    assert_eq!(v.state().hidden_count(), 2);
}
