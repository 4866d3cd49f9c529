//! The result pane: projection chart and goal probability, or whatever
//! the current lifecycle state calls for.

use glidepath_types::{ErrorInfo, ProjectionModel, ViewState};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Wrap};

pub fn draw(frame: &mut Frame, area: Rect, view: ViewState<'_>) {
    let block = Block::bordered().title(" Retirement Projection ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match view {
        ViewState::Blank => draw_notice(frame, inner, "Ready", Color::DarkGray),
        ViewState::Busy => {
            draw_notice(frame, inner, "Calculating data... please wait.", Color::Yellow);
        }
        ViewState::Result(model) => draw_result(frame, inner, model),
        ViewState::Error(error) => draw_error(frame, inner, error),
    }
}

fn draw_notice(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let notice = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);

    let centered = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    frame.render_widget(notice, centered);
}

fn draw_error(frame: &mut Frame, area: Rect, error: &ErrorInfo) {
    let lines = vec![
        Line::from(Span::styled(
            "Could not calculate projection",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(error.message.clone()),
        Line::default(),
        Line::from(Span::styled(
            "Fix the inputs and press Enter to retry.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_result(frame: &mut Frame, area: Rect, model: &ProjectionModel) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(area);

    let points = chart_points(model);
    if points.is_empty() {
        draw_notice(frame, sections[0], "No trajectory returned.", Color::DarkGray);
    } else {
        draw_chart(frame, sections[0], model, &points);
    }

    let probability = Line::from(vec![
        Span::raw("Probability to Reach Goal: "),
        Span::styled(
            format_probability(model.probability_percent),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(probability).alignment(Alignment::Center),
        sections[1],
    );
}

fn draw_chart(frame: &mut Frame, area: Rect, model: &ProjectionModel, points: &[(f64, f64)]) {
    let [y_min, y_max] = value_bounds(points);
    let x_max = points.len() as f64;

    let dataset = Dataset::default()
        .name("avg net worth")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(points);

    let first_label = model
        .series
        .first()
        .map_or_else(String::new, |p| p.label.clone());
    let last_label = model
        .series
        .last()
        .map_or_else(String::new, |p| p.label.clone());

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .bounds([1.0, x_max.max(2.0)])
                .labels([first_label, last_label]),
        )
        .y_axis(
            Axis::default()
                .bounds([y_min, y_max])
                .labels([format_amount(y_min), format_amount(y_max)]),
        );

    frame.render_widget(chart, area);
}

/// Chart coordinates: x is the 1-based year, y the net worth.
fn chart_points(model: &ProjectionModel) -> Vec<(f64, f64)> {
    model
        .series
        .iter()
        .enumerate()
        .map(|(i, point)| ((i + 1) as f64, point.value))
        .collect()
}

/// Y-axis bounds with a little headroom so the line never hugs the frame.
fn value_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for &(_, value) in points {
        min = min.min(value);
        max = max.max(value);
    }
    if min == max {
        // Flat trajectory still needs a non-degenerate axis.
        return [min - 1.0, max + 1.0];
    }
    let margin = (max - min) * 0.05;
    [min - margin, max + margin]
}

fn format_probability(percent: f64) -> String {
    format!("{}%", percent.round())
}

/// Compact currency labels for the y axis.
fn format_amount(value: f64) -> String {
    let abs = value.abs();
    if abs >= 10_000_000.0 {
        format!("{:.1}Cr", value / 10_000_000.0)
    } else if abs >= 100_000.0 {
        format!("{:.1}L", value / 100_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}
