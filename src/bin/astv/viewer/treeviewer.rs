//! Tree viewer - displays and navigates the rendered AST
//!
//! Headers carry their accent color, collapsed containers are muted and
//! error fields are red. The selected line is highlighted and kept in view.

use super::model::{FlatLine, LineKind, Model};
use super::viewer::{Viewer, ViewerEvent};
use astv::astv::tree::ContainerId;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Debug)]
pub struct TreeViewer {
    /// Currently selected line
    selected: Option<ContainerId>,
    /// Columns of indentation per depth level
    indent: usize,
}

impl TreeViewer {
    pub fn new(indent: usize) -> Self {
        TreeViewer {
            selected: None,
            indent,
        }
    }

    pub fn selected(&self) -> Option<&ContainerId> {
        self.selected.as_ref()
    }

    /// Index of the selected line, the root when nothing is selected yet
    fn selected_index(&self, lines: &[FlatLine]) -> usize {
        self.selected
            .as_ref()
            .and_then(|id| lines.iter().position(|line| &line.id == id))
            .unwrap_or(0)
    }

    /// Move the selection to the closest visible ancestor if its line disappeared
    pub fn reveal(&mut self, model: &Model) {
        let lines = model.flattened();
        while let Some(id) = &self.selected {
            if lines.iter().any(|line| &line.id == id) {
                return;
            }
            self.selected = id.parent();
        }
    }

    fn select(&mut self, lines: &[FlatLine], index: usize) -> ViewerEvent {
        let id = lines[index].id.clone();
        if self.selected.as_ref() == Some(&id) {
            return ViewerEvent::NoChange;
        }
        self.selected = Some(id.clone());
        ViewerEvent::SelectLine(id)
    }

    fn line_style(&self, line: &FlatLine, model: &Model) -> (Style, Style) {
        let icon = match line.accent {
            Some(accent) => Style::default().fg(parse_color(model.accent_color(accent))),
            None => Style::default(),
        };
        let text = match line.kind {
            LineKind::Error => Style::default().fg(Color::Red),
            _ if line.collapsed => Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            LineKind::Node | LineKind::Property => Style::default().add_modifier(Modifier::BOLD),
            LineKind::Field => Style::default(),
        };
        (icon, text)
    }
}

fn parse_color(hex: &str) -> Color {
    hex.parse().unwrap_or(Color::Reset)
}

impl Viewer for TreeViewer {
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model) {
        let lines = model.flattened();
        let selected = self.selected_index(&lines);
        let height = usize::from(area.height).max(1);
        let offset = selected.saturating_sub(height - 1);

        let rendered: Vec<Line> = lines
            .iter()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(index, line)| {
                let (icon_style, text_style) = self.line_style(line, model);
                let rendered = Line::from(vec![
                    Span::raw(" ".repeat(line.depth * self.indent)),
                    Span::styled(line.icon, icon_style),
                    Span::raw(" "),
                    Span::styled(line.text.clone(), text_style),
                ]);
                if index == selected {
                    rendered.style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD))
                } else {
                    rendered
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(rendered), area);
    }

    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent> {
        let lines = model.flattened();
        if lines.is_empty() {
            return Some(ViewerEvent::NoChange);
        }
        let current = self.selected_index(&lines);
        if self.selected.is_none() {
            self.selected = Some(lines[current].id.clone());
        }

        let event = match key.code {
            KeyCode::Up if current > 0 => self.select(&lines, current - 1),
            KeyCode::Down if current + 1 < lines.len() => self.select(&lines, current + 1),
            KeyCode::Home => self.select(&lines, 0),
            KeyCode::End => self.select(&lines, lines.len() - 1),
            KeyCode::Left | KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                let line = &lines[current];
                if line.collapsible {
                    ViewerEvent::Toggle(line.id.clone())
                } else {
                    ViewerEvent::NoChange
                }
            }
            KeyCode::Char('a') => ViewerEvent::ToggleAll,
            KeyCode::Char('p') => ViewerEvent::ToggleAllExceptPositions,
            KeyCode::Char('r') => ViewerEvent::Reload,
            _ => ViewerEvent::NoChange,
        };
        Some(event)
    }
}
