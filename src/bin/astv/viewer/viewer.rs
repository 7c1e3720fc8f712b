//! Viewer trait and event types
//!
//! A viewer renders itself from the [`Model`] and turns key presses into
//! [`ViewerEvent`]s; the [`App`](super::app::App) applies those to the model.

use super::model::Model;
use astv::astv::tree::ContainerId;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Model changes requested by a viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The cursor moved to another line
    SelectLine(ContainerId),
    /// Flip one container
    Toggle(ContainerId),
    /// Bulk expand/collapse
    ToggleAll,
    /// Bulk expand/collapse, keeping `Pos` blocks closed
    ToggleAllExceptPositions,
    /// Re-read the source file
    Reload,
    NoChange,
}

pub trait Viewer {
    /// Render this viewer to the given area
    fn render(&self, frame: &mut Frame, area: Rect, model: &Model);

    /// Handle a keyboard event and return the resulting event
    fn handle_key(&mut self, key: KeyEvent, model: &Model) -> Option<ViewerEvent>;
}
