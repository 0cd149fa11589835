use std::fmt::Write as _;
use std::path::PathBuf;

use cc_core::actions::CtaSlot;
use cc_core::catalog::{demo_agents, demo_attention_items, demo_tasks, CollectionKind};
use cc_core::config::Config;
use cc_core::filter::{FilterChip, FilterDimension};
use cc_core::types::{Categorized, ItemId};
use cc_core::{CollectionView, ResolvedView};
use clap::Args;
use serde::Serialize;

use super::{mount, CardView, Collection};

/// Interactions replayed against a freshly mounted view, in the order a user
/// would make them: filters, then dismissals, then "view more".
#[derive(Debug, Clone, Default, Args)]
pub struct ViewOptions {
    /// Toggle a category filter (repeatable).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,
    /// Toggle an impact/status filter (repeatable).
    #[arg(long = "classifier", value_name = "VALUE")]
    pub classifiers: Vec<String>,
    /// Dismiss a card by id (repeatable).
    #[arg(long = "hide", value_name = "ID")]
    pub hide: Vec<ItemId>,
    /// Press "view more" on a section (repeatable).
    #[arg(long = "expand", value_name = "CATEGORY")]
    pub expand: Vec<String>,
    /// Load items from a JSON array instead of the built-in data.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Print the resolved view as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the `view` subcommand.
pub fn run(config: &Config, collection: Collection, opts: &ViewOptions) -> anyhow::Result<()> {
    let kind = CollectionKind::from(collection);
    let file = opts.file.as_deref();
    let out = match kind {
        CollectionKind::Attention => {
            let mut view = mount(config, kind, demo_attention_items(), file)?;
            apply(&mut view, opts);
            render(kind, &view, opts.json)?
        }
        CollectionKind::Tasks => {
            let mut view = mount(config, kind, demo_tasks(), file)?;
            apply(&mut view, opts);
            render(kind, &view, opts.json)?
        }
        CollectionKind::Workforce => {
            let mut view = mount(config, kind, demo_agents(), file)?;
            apply(&mut view, opts);
            render(kind, &view, opts.json)?
        }
    };
    print!("{out}");
    Ok(())
}

pub fn apply<T: Categorized>(view: &mut CollectionView<T>, opts: &ViewOptions) {
    for category in &opts.categories {
        view.toggle_category_filter(category);
    }
    for classifier in &opts.classifiers {
        view.toggle_status_filter(classifier);
    }
    for id in &opts.hide {
        view.hide_item(id.clone());
    }
    for category in &opts.expand {
        view.expand_category(category);
    }
}

#[derive(Serialize)]
struct ViewReport<'a, T> {
    collection: CollectionKind,
    active_filters: usize,
    chips: Vec<FilterChip>,
    hidden: usize,
    view: ResolvedView<'a, T>,
}

pub fn render<T: CardView>(
    kind: CollectionKind,
    view: &CollectionView<T>,
    json: bool,
) -> anyhow::Result<String> {
    if json {
        let report = ViewReport {
            collection: kind,
            active_filters: view.active_filter_count(),
            chips: view.filter_chips(),
            hidden: view.state().hidden_count(),
            view: view.visible_groups(),
        };
        let mut out = serde_json::to_string_pretty(&report)?;
        out.push('\n');
        return Ok(out);
    }
    Ok(render_text(kind, view))
}

/// Human-readable listing: header, active filter chips, then one block per
/// section with a "(+N more)" marker where the section is truncated.
pub fn render_text<T: CardView>(kind: CollectionKind, view: &CollectionView<T>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", kind.title());
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(
        out,
        "Filter by: {} | {}: {}",
        view.layout().category_order().join(", "),
        kind.classifier_name(),
        kind.classifier_values().join(", ")
    );

    let chips = view.filter_chips();
    if !chips.is_empty() {
        let labels: Vec<String> = chips.iter().map(chip_label).collect();
        let _ = writeln!(out, "Filters ({}): {}", chips.len(), labels.join(" "));
    }

    let groups = match view.visible_groups() {
        ResolvedView::Empty => {
            out.push_str("No items\n");
            return out;
        }
        ResolvedView::Groups { groups } => groups,
    };

    for group in &groups {
        let _ = writeln!(out, "\n{} ({})", group.category, group.total);
        for item in &group.items {
            let _ = writeln!(out, "  #{:<4} {}", item.item_id().to_string(), item.headline());
            let detail = item.detail();
            if !detail.is_empty() {
                let _ = writeln!(out, "        {detail}");
            }
            let buttons: Vec<&str> = [CtaSlot::Primary, CtaSlot::Secondary]
                .into_iter()
                .filter_map(|slot| item.cta_label(slot))
                .collect();
            if !buttons.is_empty() {
                let _ = writeln!(out, "        [{}]", buttons.join("] ["));
            }
        }
        if group.has_more {
            let _ = writeln!(out, "  (+{} more)", group.hidden_by_limit());
        }
    }
    out
}

fn chip_label(chip: &FilterChip) -> String {
    let dimension = match chip.dimension {
        FilterDimension::Category => "category",
        FilterDimension::Classifier => "classifier",
    };
    format!("[{dimension}: {} x]", chip.value)
}
