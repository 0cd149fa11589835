pub mod action;
pub mod config;
pub mod pages;
pub mod view;

use std::path::Path;

use cc_core::actions::{CardActions, CtaSlot};
use cc_core::catalog::{CollectionKind, JsonFileSource, StaticSource};
use cc_core::config::Config;
use cc_core::shell::{AppShell, Page};
use cc_core::types::{AgentItem, AttentionItem, Categorized, TaskItem};
use cc_core::CollectionView;
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Collection argument accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Attention,
    Tasks,
    Workforce,
}

impl From<Collection> for CollectionKind {
    fn from(c: Collection) -> Self {
        match c {
            Collection::Attention => CollectionKind::Attention,
            Collection::Tasks => CollectionKind::Tasks,
            Collection::Workforce => CollectionKind::Workforce,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Slot {
    Primary,
    Secondary,
}

impl From<Slot> for CtaSlot {
    fn from(s: Slot) -> Self {
        match s {
            Slot::Primary => CtaSlot::Primary,
            Slot::Secondary => CtaSlot::Secondary,
        }
    }
}

/// Text rendering for one card in a section listing.
pub trait CardView: Categorized + CardActions + Serialize {
    fn headline(&self) -> String;
    fn detail(&self) -> String;
}

impl CardView for AttentionItem {
    fn headline(&self) -> String {
        format!("[{}] {} ({})", self.impact, self.action_type, self.agent_name)
    }

    fn detail(&self) -> String {
        self.description.clone()
    }
}

impl CardView for TaskItem {
    fn headline(&self) -> String {
        format!(
            "[{}] {} ({}) due {}",
            self.impact, self.action_type, self.agent_name, self.due_date
        )
    }

    fn detail(&self) -> String {
        self.description.clone()
    }
}

impl CardView for AgentItem {
    fn headline(&self) -> String {
        format!("{} {} [{}] {}%", self.status.glyph(), self.name, self.status, self.progress)
    }

    fn detail(&self) -> String {
        format!("{} | {}", self.activity_line(), self.metric)
    }
}

/// The sidebar page that renders `kind`.
pub fn page_for(kind: CollectionKind) -> Page {
    Page::ALL
        .into_iter()
        .find(|p| p.collection() == Some(kind))
        .unwrap_or(Page::CommandCenter)
}

/// Navigate a fresh shell to the collection's page and mount its view, from
/// `file` when given, otherwise from the built-in items.
pub fn mount<T>(
    config: &Config,
    kind: CollectionKind,
    builtin: Vec<T>,
    file: Option<&Path>,
) -> anyhow::Result<CollectionView<T>>
where
    T: Categorized + Clone + DeserializeOwned,
{
    let mut shell = AppShell::new();
    shell.navigate(page_for(kind));

    let layout = config.view.layout();
    let view = match file {
        Some(path) => shell.mount_view(&JsonFileSource::<T>::new(path), layout)?,
        None => shell.mount_view(&StaticSource::new(builtin), layout)?,
    };
    Ok(view)
}
