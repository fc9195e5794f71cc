use crate::records::AppointmentRecord;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOutcome {
	/// `true` when the user confirmed with Enter, `false` when they backed out.
	pub accepted: bool,
	/// Search text at the time the session ended.
	pub query: String,
	pub selection: Option<AppointmentRecord>,
}
