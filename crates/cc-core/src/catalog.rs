use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;

use ahash::AHashSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::actions::CardAction;
use crate::types::{AgentItem, AgentStatus, AttentionItem, Categorized, Impact, ItemId, TaskItem};

// ---------------------------------------------------------------------------
// ItemSource
// ---------------------------------------------------------------------------

/// Supplies the immutable base collection a page mounts with.
pub trait ItemSource {
    type Item;

    fn items(&self) -> Result<Vec<Self::Item>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("io: {path}: {message}")]
    Io { path: PathBuf, message: String },
    #[error("parse: {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
}

/// Reject collections whose ids are not unique.
pub fn ensure_unique_ids<T: Categorized>(items: &[T]) -> Result<(), CatalogError> {
    let mut seen = AHashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.item_id()) {
            return Err(CatalogError::DuplicateId(item.item_id().clone()));
        }
    }
    Ok(())
}

/// An in-memory collection, handed out by clone on every mount.
#[derive(Debug, Clone)]
pub struct StaticSource<T> {
    items: Vec<T>,
}

impl<T> StaticSource<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> ItemSource for StaticSource<T> {
    type Item = T;

    fn items(&self) -> Result<Vec<T>, CatalogError> {
        Ok(self.items.clone())
    }
}

/// Reads a JSON array of items from disk on every mount.
#[derive(Debug, Clone)]
pub struct JsonFileSource<T> {
    path: PathBuf,
    _item: PhantomData<fn() -> T>,
}

impl<T> JsonFileSource<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _item: PhantomData,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl<T: DeserializeOwned + Categorized> ItemSource for JsonFileSource<T> {
    type Item = T;

    fn items(&self) -> Result<Vec<T>, CatalogError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| CatalogError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        let items: Vec<T> = serde_json::from_str(&text).map_err(|e| CatalogError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        ensure_unique_ids(&items)?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "loaded items");
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// CollectionKind
// ---------------------------------------------------------------------------

/// The list collections rendered by the dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Attention,
    Tasks,
    Workforce,
}

impl CollectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            CollectionKind::Attention => "Attention Required",
            CollectionKind::Tasks => "My Tasks",
            CollectionKind::Workforce => "Installed Agents",
        }
    }

    /// Name of the classifier dimension in the filter bar.
    pub fn classifier_name(&self) -> &'static str {
        match self {
            CollectionKind::Attention | CollectionKind::Tasks => "Impact",
            CollectionKind::Workforce => "Status",
        }
    }

    /// Values the classifier filter offers for this collection.
    pub fn classifier_values(&self) -> Vec<&'static str> {
        match self {
            CollectionKind::Attention | CollectionKind::Tasks => {
                Impact::ALL.iter().map(Impact::label).collect()
            }
            CollectionKind::Workforce => AgentStatus::ALL.iter().map(AgentStatus::label).collect(),
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CollectionKind::Attention => "attention",
            CollectionKind::Tasks => "tasks",
            CollectionKind::Workforce => "workforce",
        })
    }
}

// ---------------------------------------------------------------------------
// Demo data
// ---------------------------------------------------------------------------

fn to_agent(url: &str) -> CardAction {
    CardAction::NavigateToAgent { url: url.into() }
}

/// Attention cards shown on the command center.
pub fn demo_attention_items() -> Vec<AttentionItem> {
    vec![
        AttentionItem {
            id: ItemId::Num(1),
            category: "Marketing".into(),
            action_type: "Approval Required".into(),
            agent_name: "Keyword Optimizer".into(),
            agent_logo: "/avatars/avatar1.png".into(),
            impact: Impact::High,
            description: "+$524 in savings".into(),
            primary_cta: "Review".into(),
            primary_action: to_agent("/agents/keyword-optimizer"),
            secondary_cta: "Defer".into(),
            secondary_action: CardAction::HideCard,
        },
        AttentionItem {
            id: ItemId::Num(2),
            category: "Marketing".into(),
            action_type: "Anomaly Detected".into(),
            agent_name: "Conversion Funnel Optimizer".into(),
            agent_logo: "/avatars/avatar2.png".into(),
            impact: Impact::Critical,
            description: "-34% Leads WoW".into(),
            primary_cta: "View Anomaly".into(),
            primary_action: to_agent("/agents/conversion-funnel-optimizer"),
            secondary_cta: "Diagnose".into(),
            secondary_action: to_agent("/agents/conversion-funnel-optimizer"),
        },
        AttentionItem {
            id: ItemId::Num(3),
            category: "Financial Operations".into(),
            action_type: "Unblocking Required".into(),
            agent_name: "Books Reconciler".into(),
            agent_logo: "/avatars/avatar3.png".into(),
            impact: Impact::Critical,
            description: "27 Expenses Pending".into(),
            primary_cta: "View Error".into(),
            primary_action: to_agent("/agents/books-reconciler"),
            secondary_cta: "Reauth".into(),
            secondary_action: CardAction::NavigateToReauth {
                url: "/reauth/books-reconciler".into(),
            },
        },
        AttentionItem {
            id: ItemId::Num(4),
            category: "Marketing".into(),
            action_type: "In Progress".into(),
            agent_name: "Blog Content Strategizer".into(),
            agent_logo: "/avatars/avatar4.png".into(),
            impact: Impact::Medium,
            description: "Outline 65% Complete".into(),
            primary_cta: "View Progress".into(),
            primary_action: to_agent("/agents/blog-content-strategizer"),
            secondary_cta: "Pause".into(),
            secondary_action: CardAction::HideCard,
        },
    ]
}

/// Task cards shown on the My Tasks page.
pub fn demo_tasks() -> Vec<TaskItem> {
    let task = |id: u64,
                category: &str,
                action_type: &str,
                agent_name: &str,
                impact: Impact,
                ctas: (&str, &str),
                due_date: &str,
                description: &str| {
        let slug = agent_name.to_lowercase().replace(' ', "-");
        TaskItem {
            id: id.into(),
            category: category.into(),
            action_type: action_type.into(),
            agent_name: agent_name.into(),
            agent_logo: agent_name.chars().next().map(String::from).unwrap_or_default(),
            impact,
            due_date: due_date.into(),
            description: description.into(),
            primary_cta: ctas.0.into(),
            primary_action: to_agent(&format!("/agents/{slug}")),
            secondary_cta: ctas.1.into(),
            secondary_action: CardAction::HideCard,
        }
    };

    vec![
        task(
            1,
            "Sales",
            "Performance Review",
            "Sales Agent",
            Impact::High,
            ("Review Now", "Dismiss"),
            "Today",
            "Sales agent performance has dropped by 15% this week",
        ),
        task(
            2,
            "Sales",
            "Task Completion",
            "Customer Support",
            Impact::Medium,
            ("Complete Task", "Reschedule"),
            "Today",
            "3 customer support tickets need immediate attention",
        ),
        task(
            3,
            "Financial Operations",
            "System Alert",
            "Technical Agent",
            Impact::Critical,
            ("Investigate", "Silence Alert"),
            "Tomorrow",
            "Technical agent detected unusual system activity",
        ),
        task(
            4,
            "Sales",
            "Training Required",
            "New Agent",
            Impact::Low,
            ("Start Training", "Schedule Later"),
            "This Week",
            "New agent requires training on updated procedures",
        ),
        task(
            5,
            "Marketing",
            "Strategy Review",
            "Marketing Agent",
            Impact::Medium,
            ("Review Strategy", "Postpone"),
            "Next Week",
            "Marketing campaign requires strategic review",
        ),
    ]
}

/// Installed agents shown on the workforce page.
pub fn demo_agents() -> Vec<AgentItem> {
    vec![
        AgentItem {
            id: ItemId::Num(1),
            category: "Marketing".into(),
            name: "Keyword Optimizer".into(),
            agent_logo: "/avatars/avatar1.png".into(),
            status: AgentStatus::Waiting,
            current_task: Some("Optimizing Holiday Campaign".into()),
            last_completed: None,
            progress: 65,
            metric: "+$524 in savings".into(),
            cta: "Review".into(),
            cta_action: to_agent("https://keyword-optimizer.vercel.app/"),
        },
        AgentItem {
            id: ItemId::Num(2),
            category: "Marketing".into(),
            name: "Conversion Funnel Optimizer".into(),
            agent_logo: "/avatars/avatar2.png".into(),
            status: AgentStatus::Idle,
            current_task: None,
            last_completed: Some("A/B Test Concluded".into()),
            progress: 100,
            metric: "-34% Leads WoW".into(),
            cta: "Review".into(),
            cta_action: to_agent("/agents/conversion-funnel-optimizer"),
        },
        AgentItem {
            id: ItemId::Num(3),
            category: "Financial Operations".into(),
            name: "Books Reconciler".into(),
            agent_logo: "/avatars/avatar3.png".into(),
            status: AgentStatus::Active,
            current_task: Some("Reconciling Q3 Expenses".into()),
            last_completed: None,
            progress: 30,
            metric: "27 Expenses Pending".into(),
            cta: "Review".into(),
            cta_action: to_agent("/agents/books-reconciler"),
        },
        AgentItem {
            id: ItemId::Num(4),
            category: "Marketing".into(),
            name: "Blog Content Strategizer".into(),
            agent_logo: "/avatars/avatar4.png".into(),
            status: AgentStatus::Active,
            current_task: Some("Creating outline for Amazon Marketplace".into()),
            last_completed: None,
            progress: 65,
            metric: "5 blog posts to be picked".into(),
            cta: "View Outline".into(),
            cta_action: to_agent("/agents/blog-content-strategizer"),
        },
    ]
}
