//! TUI rendering and input handling for Glidepath.
//!
//! Rendering is a pure function of what the session exposes: the raw
//! input text, the cursor position, and the [`ViewState`] projection.
//! Nothing here can mutate submission state; key events are mapped to
//! [`AppEvent`]s and handled by the binary's event loop.

pub mod form;
pub mod input;
pub mod result;

pub use form::FormCursor;
pub use input::{AppEvent, map_key};

use glidepath_types::{RawInputs, ViewState};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

/// Width reserved for the form pane; the rest belongs to the result.
const FORM_PANE_WIDTH: u16 = 46;

pub fn draw(frame: &mut Frame, inputs: &RawInputs, cursor: &FormCursor, view: ViewState<'_>) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_PANE_WIDTH), Constraint::Min(30)])
        .split(frame.area());

    form::draw(frame, panes[0], inputs, cursor, view);
    result::draw(frame, panes[1], view);
}
