//! Core of the Command Center dashboard: the collection view engine that backs
//! every list page (attention cards, tasks, workforce), its item catalogs and
//! card actions, the application shell state, and configuration.

pub mod actions;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod filter;
pub mod resolve;
pub mod settings;
pub mod shell;
pub mod types;
pub mod view;

pub use engine::CollectionView;
pub use resolve::{Group, ResolvedView};
pub use view::{SectionLayout, ViewState};
