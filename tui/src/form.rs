//! The form pane: ten labeled fields, one active at a time.

use glidepath_types::{Field, RawInputs, ViewState};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Which field has focus. Wraps at both ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormCursor {
    index: usize,
}

impl FormCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self) -> Field {
        Field::ALL[self.index]
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % Field::COUNT;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + Field::COUNT - 1) % Field::COUNT;
    }
}

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    inputs: &RawInputs,
    cursor: &FormCursor,
    view: ViewState<'_>,
) {
    let block = Block::bordered().title(" Retirement Planning Form ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width = Field::ALL
        .iter()
        .map(|f| f.label().width())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::with_capacity(Field::COUNT + 2);
    for field in Field::ALL {
        let active = field == cursor.field();
        let label_style = if active {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value_style = if active {
            Style::default().add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default()
        };

        let label = field.label();
        let padding = " ".repeat(label_width.saturating_sub(label.width()));
        lines.push(Line::from(vec![
            Span::styled(format!("{label}{padding} "), label_style),
            Span::styled(inputs.get(field).to_string(), value_style),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        submit_hint(view),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);

    // Terminal cursor sits at the end of the active value.
    let row = cursor.index as u16;
    let col = (label_width + 1 + inputs.get(cursor.field()).width()) as u16;
    if row < inner.height && col < inner.width {
        frame.set_cursor_position(Position::new(inner.x + col, inner.y + row));
    }
}

/// The hint doubles as the control state: while a request is in flight
/// the submit key is advertised as disabled, mirroring the session gate.
fn submit_hint(view: ViewState<'_>) -> &'static str {
    match view {
        ViewState::Busy => "Calculating...  Tab next · Esc quit",
        _ => "Enter calculate · Tab next · Esc quit",
    }
}
