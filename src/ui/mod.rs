//! Interactive terminal dashboard.
//!
//! [`Dashboard`] configures and launches the session. The remaining
//! submodules hold the event loop, key handling, rendering and the widgets
//! they draw with.

mod actions;
mod builder;
mod clock;
mod components;
mod highlight;
pub mod input;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use builder::Dashboard;
pub use outcome::DashboardOutcome;
pub use state::App;
pub use theme::Theme;
