use std::path::Path;

use cc_core::actions::{ActionOutcome, CtaSlot};
use cc_core::catalog::{demo_agents, demo_attention_items, demo_tasks, CollectionKind};
use cc_core::config::Config;
use cc_core::shell::Route;
use cc_core::types::ItemId;
use cc_core::CollectionView;
use serde::Serialize;

use super::{mount, CardView, Collection, Slot};

#[derive(Debug, Serialize)]
struct ActionReport {
    card: ItemId,
    button: Option<String>,
    #[serde(flatten)]
    outcome: ActionOutcome,
    /// Where the navigation lands when the URL is an in-app route.
    route: Option<Route>,
    visible: usize,
}

/// Run the `action` subcommand.
pub fn run(
    config: &Config,
    collection: Collection,
    id: &ItemId,
    slot: Slot,
    file: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let kind = CollectionKind::from(collection);
    let slot = CtaSlot::from(slot);
    let report = match kind {
        CollectionKind::Attention => {
            press(&mut mount(config, kind, demo_attention_items(), file)?, id, slot)?
        }
        CollectionKind::Tasks => press(&mut mount(config, kind, demo_tasks(), file)?, id, slot)?,
        CollectionKind::Workforce => press(&mut mount(config, kind, demo_agents(), file)?, id, slot)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", describe(&report));
    }
    Ok(())
}

fn press<T: CardView>(
    view: &mut CollectionView<T>,
    id: &ItemId,
    slot: CtaSlot,
) -> anyhow::Result<ActionReport> {
    let button = view
        .find(id)
        .and_then(|item| item.cta_label(slot))
        .map(str::to_string);
    let outcome = view.dispatch(id, slot)?;
    let route = outcome.url().and_then(Route::parse);
    Ok(ActionReport {
        card: id.clone(),
        button,
        outcome,
        route,
        visible: view.visible_groups().rendered_count(),
    })
}

fn describe(report: &ActionReport) -> String {
    let label = report.button.as_deref().unwrap_or("?");
    match &report.outcome {
        ActionOutcome::Navigate { url } => match &report.route {
            Some(route) => format!("#{} \"{label}\" -> {url} ({})\n", report.card, route.title()),
            None => format!("#{} \"{label}\" -> {url}\n", report.card),
        },
        ActionOutcome::Hidden { id } => format!(
            "#{id} \"{label}\" -> dismissed ({} cards still visible)\n",
            report.visible
        ),
    }
}
