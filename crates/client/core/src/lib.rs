//! Cross-surface client primitives.
//!
//! Houses the view models, formatting, interaction bus, and thin service
//! layer that any presentation surface can reuse. Nothing here mutates game
//! state: services call the server boundary, validate what comes back, and
//! hand display-ready values to the caller.
pub mod format;
pub mod interaction;
pub mod services;
pub mod view_model;

pub use format::{ReceiptSummary, format_amount, gacha_summary, receipt_summary};
pub use interaction::{AccentScheduler, InteractionBus, InteractionEvent, Topic};
pub use services::{ClaimService, ProgressionService, RosterService, ServiceError, SummonService};
pub use view_model::{HeroView, RosterView, TeamView};
