//! Sewna designer catalog
//!
//! Persistent designer profiles, sample seeding and the match service
//! built on top of the vector engine.

mod seed;
mod service;
mod store;
mod types;

pub use seed::sample_designers;
pub use service::DesignerService;
pub use store::CatalogStore;
pub use types::{DesignerProfile, DesignerRecord, DesignerSummary, MatchView};
