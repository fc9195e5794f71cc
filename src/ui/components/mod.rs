mod controls;
mod header;
mod log_pane;
mod overlay;
mod picker;
mod table;

pub(crate) use controls::{InputContext, PendingState, ToolbarContext, render_input, render_toolbar};
pub(crate) use header::{HeaderContext, render_header};
pub(crate) use log_pane::LogPane;
pub(crate) use overlay::{OverlayContext, render_overlay};
pub(crate) use picker::{PickerContext, PickerOption, render_picker};
pub(crate) use table::{TableContext, render_empty_state, render_table};
