use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::actions::{CardAction, CardActions, CtaSlot};

// ---------------------------------------------------------------------------
// ItemId
// ---------------------------------------------------------------------------

/// Identifier of a card in a collection. The dashboard data mixes numeric and
/// string ids, so both are accepted; JSON carries them untagged.
///
/// Text that is a plain decimal number (`"7"`, not `"007"`) is always read as
/// [`ItemId::Num`], whether it comes from JSON or the command line, so the
/// same card has one id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Num(u64),
    Text(String),
}

impl ItemId {
    fn from_text(s: String) -> Self {
        match s.parse::<u64>() {
            Ok(n) if n.to_string() == s => ItemId::Num(n),
            _ => ItemId::Text(s),
        }
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Num(n) => ItemId::Num(n),
            Raw::Text(s) => ItemId::from_text(s),
        })
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Num(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Num(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::from_text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::from_text(s)
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ItemId::from_text(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Categorized
// ---------------------------------------------------------------------------

/// The view engine's contract with an item shape. Everything else on the item
/// is display data the engine passes through untouched.
pub trait Categorized {
    fn item_id(&self) -> &ItemId;

    /// Section the item is grouped under.
    fn category(&self) -> &str;

    /// Secondary discriminator used by the classifier filter (impact for
    /// tasks, status for agents).
    fn classifier(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Classifiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    Critical,
    High,
    Medium,
    Low,
}

impl Impact {
    pub const ALL: [Impact; 4] = [Impact::Critical, Impact::High, Impact::Medium, Impact::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Impact::Critical => "Critical",
            Impact::High => "High",
            Impact::Medium => "Medium",
            Impact::Low => "Low",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentStatus {
    Active,
    Idle,
    Waiting,
}

impl AgentStatus {
    pub const ALL: [AgentStatus; 3] = [AgentStatus::Active, AgentStatus::Idle, AgentStatus::Waiting];

    pub fn label(&self) -> &'static str {
        match self {
            AgentStatus::Active => "Active",
            AgentStatus::Idle => "Idle",
            AgentStatus::Waiting => "Waiting",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            AgentStatus::Active => "@",
            AgentStatus::Idle => "*",
            AgentStatus::Waiting => "!",
        }
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// AttentionItem
// ---------------------------------------------------------------------------

/// A command-center card asking the user to act on an agent's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttentionItem {
    pub id: ItemId,
    pub category: String,
    pub action_type: String,
    pub agent_name: String,
    pub agent_logo: String,
    pub impact: Impact,
    pub description: String,
    pub primary_cta: String,
    pub primary_action: CardAction,
    pub secondary_cta: String,
    pub secondary_action: CardAction,
}

impl Categorized for AttentionItem {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn classifier(&self) -> &str {
        self.impact.label()
    }
}

impl CardActions for AttentionItem {
    fn action(&self, slot: CtaSlot) -> Option<&CardAction> {
        match slot {
            CtaSlot::Primary => Some(&self.primary_action),
            CtaSlot::Secondary => Some(&self.secondary_action),
        }
    }

    fn cta_label(&self, slot: CtaSlot) -> Option<&str> {
        match slot {
            CtaSlot::Primary => Some(&self.primary_cta),
            CtaSlot::Secondary => Some(&self.secondary_cta),
        }
    }
}

// ---------------------------------------------------------------------------
// TaskItem
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: ItemId,
    pub category: String,
    pub action_type: String,
    pub agent_name: String,
    pub agent_logo: String,
    pub impact: Impact,
    pub due_date: String,
    pub description: String,
    pub primary_cta: String,
    pub primary_action: CardAction,
    pub secondary_cta: String,
    pub secondary_action: CardAction,
}

impl Categorized for TaskItem {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn classifier(&self) -> &str {
        self.impact.label()
    }
}

impl CardActions for TaskItem {
    fn action(&self, slot: CtaSlot) -> Option<&CardAction> {
        match slot {
            CtaSlot::Primary => Some(&self.primary_action),
            CtaSlot::Secondary => Some(&self.secondary_action),
        }
    }

    fn cta_label(&self, slot: CtaSlot) -> Option<&str> {
        match slot {
            CtaSlot::Primary => Some(&self.primary_cta),
            CtaSlot::Secondary => Some(&self.secondary_cta),
        }
    }
}

// ---------------------------------------------------------------------------
// AgentItem
// ---------------------------------------------------------------------------

/// An installed agent as shown on the workforce page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentItem {
    pub id: ItemId,
    pub category: String,
    pub name: String,
    pub agent_logo: String,
    pub status: AgentStatus,
    #[serde(default)]
    pub current_task: Option<String>,
    #[serde(default)]
    pub last_completed: Option<String>,
    /// Percent complete, 0-100.
    #[serde(deserialize_with = "percent")]
    pub progress: u8,
    pub metric: String,
    pub cta: String,
    pub cta_action: CardAction,
}

fn percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = u8::deserialize(deserializer)?;
    if value > 100 {
        return Err(serde::de::Error::custom(format!(
            "progress {value} is outside 0-100"
        )));
    }
    Ok(value)
}

impl AgentItem {
    /// The current task, or the last completed one when idle.
    pub fn activity_line(&self) -> String {
        match (&self.current_task, &self.last_completed) {
            (Some(task), _) => task.clone(),
            (None, Some(done)) => format!("Last completed: {done}"),
            (None, None) => String::new(),
        }
    }
}

impl Categorized for AgentItem {
    fn item_id(&self) -> &ItemId {
        &self.id
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn classifier(&self) -> &str {
        self.status.label()
    }
}

impl CardActions for AgentItem {
    fn action(&self, slot: CtaSlot) -> Option<&CardAction> {
        match slot {
            CtaSlot::Primary => Some(&self.cta_action),
            CtaSlot::Secondary => None,
        }
    }

    fn cta_label(&self, slot: CtaSlot) -> Option<&str> {
        match slot {
            CtaSlot::Primary => Some(&self.cta),
            CtaSlot::Secondary => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
