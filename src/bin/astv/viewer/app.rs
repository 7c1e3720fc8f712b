//! Application state and event handling
//!
//! Global keys (quit) are handled here; everything else goes to the tree
//! viewer, whose events are then applied to the model.

use super::model::Model;
use super::treeviewer::TreeViewer;
use super::viewer::{Viewer, ViewerEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct App {
    pub model: Model,
    pub tree_viewer: TreeViewer,
    pub should_quit: bool,
}

impl App {
    pub fn new(model: Model, indent: usize) -> Self {
        App {
            model,
            tree_viewer: TreeViewer::new(indent),
            should_quit: false,
        }
    }

    /// Handle a keyboard event
    ///
    /// Returns whether the state changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return true;
            }
            _ => {}
        }

        match self.tree_viewer.handle_key(key, &self.model) {
            Some(event) => self.process_viewer_event(event),
            None => false,
        }
    }

    fn process_viewer_event(&mut self, event: ViewerEvent) -> bool {
        let changed = match event {
            ViewerEvent::SelectLine(_) => true,
            ViewerEvent::Toggle(id) => self.model.toggle(&id),
            ViewerEvent::ToggleAll => self.model.toggle_all(),
            ViewerEvent::ToggleAllExceptPositions => self.model.toggle_all_except_positions(),
            ViewerEvent::Reload => self.model.reload(),
            ViewerEvent::NoChange => false,
        };
        if changed {
            self.tree_viewer.reveal(&self.model);
        }
        changed
    }
}
