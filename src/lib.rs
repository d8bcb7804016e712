//! Core of a browser-style interactive recipe card: scale ingredient
//! quantities, walk the instruction steps with narration and an elapsed-time
//! timer, and persist the whole UI state across reloads.
//!
//! The crate is UI-independent. A host shell owns rendering (from
//! [`render::RenderModel`]), the periodic display tick, keyboard events
//! (resolved through [`shortcuts::action_for_key`]) and the print dialog,
//! and injects the platform capabilities — storage, speech, vibration —
//! behind the traits in [`store`] and [`capabilities`]. Every capability has
//! a no-op fallback, so the cooking flow keeps working when all of them are
//! unavailable.

pub mod capabilities;
pub mod controller;
pub mod cooking_timer;
pub mod duration_format;
pub mod models;
pub mod render;
pub mod scaling;
pub mod session;
pub mod shortcuts;
pub mod snapshot;
pub mod store;

pub use capabilities::{Haptics, Narrator, NoHaptics, SilentNarrator, STEP_PULSE_MS};
pub use controller::{Action, RecipeCard};
pub use cooking_timer::{CookingTimer, TICK_INTERVAL_MS};
pub use duration_format::format_duration;
pub use models::{Ingredient, Recipe, RecipeStep};
pub use render::RenderModel;
pub use scaling::{parse_servings, scaled_quantity};
pub use session::{CookingSession, StepOutcome, TimerCommand};
pub use shortcuts::action_for_key;
pub use snapshot::{CardSnapshot, TimerSnapshot};
pub use store::{FileSnapshotStore, NullSnapshotStore, SnapshotStore, StoreError};
