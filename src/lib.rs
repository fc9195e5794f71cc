//! Core crate exports for the `medboard` appointment dashboard.
//!
//! The pipeline, record and suggestion modules are usable without a terminal.
//! The [`ui`] module wires them into an interactive session.

pub mod app_dirs;
pub mod logging;
pub mod pipeline;
pub mod records;
pub mod suggestions;
pub mod ui;

pub use pipeline::{Criteria, Debouncer, SortCriterion};
pub use records::{AppointmentRecord, AppointmentStatus, ClinicSelection, Gender, RecordStore};
pub use suggestions::{HistoryStore, JsonFileStore, MemoryStore, SearchHistory, SuggestionEngine};
pub use ui::{Dashboard, DashboardOutcome, Theme};
