//! UI Rendering - all drawing functions

use crate::form::GreetingForm;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PLACEHOLDER: &str = "Enter your name";

/// Draw the whole form
pub fn draw_ui(f: &mut Frame, form: &GreetingForm, endpoint: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Submit control
            Constraint::Min(1),    // Greeting
            Constraint::Length(1), // Status bar
        ])
        .split(f.size());

    render_input(f, form, chunks[0]);
    render_submit(f, chunks[1]);
    render_greeting(f, form, chunks[2]);
    render_status(f, endpoint, chunks[3]);
}

fn render_input(f: &mut Frame, form: &GreetingForm, area: Rect) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let cursor_width = Line::from(form.before_cursor()).width();
    let (offset, cursor_col) = input_viewport(cursor_width, inner_width);

    let input = if form.name().is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(form.name())
            .style(Style::default().fg(Color::White))
            .scroll((0, to_u16(offset)))
    };

    let input = input.block(Block::default().borders(Borders::ALL).title("Name"));
    f.render_widget(input, area);

    // +1 for border
    let x = area.x.saturating_add(1).saturating_add(to_u16(cursor_col));
    f.set_cursor(x, area.y + 1);
}

/// Horizontal scroll and cursor column for a single-line input.
///
/// Both are in terminal columns. The cursor always lands inside the
/// `inner_width` visible columns, so the text scrolls once it reaches the
/// right edge.
pub(crate) fn input_viewport(cursor_width: usize, inner_width: usize) -> (usize, usize) {
    if inner_width == 0 {
        return (cursor_width, 0);
    }
    let offset = (cursor_width + 1).saturating_sub(inner_width);
    (offset, cursor_width - offset)
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn render_submit(f: &mut Frame, area: Rect) {
    let button = Paragraph::new(" [ Get Greeting ]  (Enter)")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(button, area);
}

fn render_greeting(f: &mut Frame, form: &GreetingForm, area: Rect) {
    // An absent or empty greeting renders nothing
    let Some(greeting) = form.greeting().filter(|g| !g.is_empty()) else {
        return;
    };

    let paragraph = Paragraph::new(greeting)
        .style(Style::default().fg(Color::Green))
        .block(Block::default().borders(Borders::TOP))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, endpoint: &str, area: Rect) {
    let status_text = format!("greetctl | {} | Ctrl+C=Quit", endpoint);
    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
