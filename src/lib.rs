//! Weekly Lead/Co-Lead rotation roster.
//!
//! Assigns two rotating roles to Monday-to-Friday slots across a fixed
//! period, skipping public holidays, and lets an operator search, group,
//! swap and export the result.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Employee`, `Holiday`, `HolidayCalendar`,
//!   `WeeklySchedule`, `OverrideTable`
//! - **`rotation`**: The deterministic round-robin generator
//! - **`store`**: Mutable roster state with swap, holiday edits and reset
//! - **`view`**: Search, month grouping, current week, summary metrics
//! - **`export`**: CSV rendering
//! - **`format`**: Thai / English date display
//! - **`config`**: Layered configuration (bundled roster, TOML file, env)
//! - **`validation`**: Configuration integrity checks
//!
//! # Data Flow
//!
//! ```text
//! RosterConfig ─► RotationGenerator ─► ScheduleStore ─► view / export
//!                                            ▲
//!                                   swap / add / remove / reset
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod models;
pub mod rotation;
pub mod store;
pub mod validation;
pub mod view;

pub use config::RosterConfig;
pub use error::{ConfigError, RosterError};
pub use rotation::{generate, RotationGenerator};
pub use store::{ScheduleStore, SwapScope};
