//! UI rendering logic
//!
//! Layout structure:
//! - Title bar (1 line, fixed)
//! - Tree viewer (remaining space)
//! - Status line (1 line, fixed)

use super::app::App;
use super::viewer::Viewer;
use astv::astv::presentation::BulkState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Minimum terminal width required for the UI
const MIN_TERMINAL_WIDTH: u16 = 40;
const STATUS_LINE_HEIGHT: u16 = 1;

pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    if size.width < MIN_TERMINAL_WIDTH {
        render_error_too_narrow(frame, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(STATUS_LINE_HEIGHT),
        ])
        .split(size);

    render_title_bar(frame, chunks[0], &app.model.file_name());
    render_tree_viewer(frame, chunks[1], app);
    render_status_line(frame, chunks[2], app);
}

fn render_error_too_narrow(frame: &mut Frame, area: Rect) {
    let msg = format!(
        "Terminal too narrow: {} < {} chars",
        area.width, MIN_TERMINAL_WIDTH
    );
    let paragraph =
        Paragraph::new(msg).style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    frame.render_widget(paragraph, area);
}

fn render_title_bar(frame: &mut Frame, area: Rect, file_name: &str) {
    let title = format!("astv:: {}", file_name);
    let paragraph = Paragraph::new(title).style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

fn render_tree_viewer(frame: &mut Frame, area: Rect, app: &App) {
    let errors = app.model.tree().errors().len();
    let title = match errors {
        0 => "AST".to_string(),
        1 => "AST (1 error)".to_string(),
        n => format!("AST ({} errors)", n),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner_area = block.inner(area);
    frame.render_widget(block, area);
    app.tree_viewer.render(frame, inner_area, &app.model);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(error) = app.model.last_error() {
        let paragraph = Paragraph::new(format!("reload failed: {}", error))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(paragraph, area);
        return;
    }

    let location = app
        .tree_viewer
        .selected()
        .map(|id| id.to_string())
        .unwrap_or_else(|| "/".to_string());
    let bulk = match app.model.bulk_state() {
        BulkState::Collapsed => "a: expand all",
        BulkState::Expanded => "a: collapse all",
    };

    let line = Line::from(vec![
        Span::styled(location, Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        Span::raw(bulk),
        Span::raw("  p: all but Pos  r: reload  q: quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
