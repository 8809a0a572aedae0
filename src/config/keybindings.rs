//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides default vim-style bindings with option to override via [`KeyBindings::bind`].
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Only code and modifiers matter; kind and state are ignored.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings
            .get(&KeyEvent::new(key.code, key.modifiers))
            .copied()
    }

    /// Bind (or rebind) a key.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyCode::*;
        const NONE: KeyModifiers = KeyModifiers::NONE;
        const SHIFT: KeyModifiers = KeyModifiers::SHIFT;
        const CTRL: KeyModifiers = KeyModifiers::CONTROL;

        let table = [
            // Vim-style scrolling
            (Char('j'), NONE, KeyAction::ScrollDown),
            (Char('k'), NONE, KeyAction::ScrollUp),
            (Char('g'), NONE, KeyAction::ScrollToTop),
            (Char('G'), SHIFT, KeyAction::ScrollToBottom),
            (Home, NONE, KeyAction::ScrollToTop),
            (End, NONE, KeyAction::ScrollToBottom),
            // Arrow key scrolling
            (Up, NONE, KeyAction::ScrollUp),
            (Down, NONE, KeyAction::ScrollDown),
            // Page navigation
            (Char('d'), CTRL, KeyAction::PageDown),
            (Char('u'), CTRL, KeyAction::PageUp),
            (PageDown, NONE, KeyAction::PageDown),
            (PageUp, NONE, KeyAction::PageUp),
            // Node focus
            (Char('j'), CTRL, KeyAction::NextNode),
            (Char('k'), CTRL, KeyAction::PrevNode),
            (Tab, NONE, KeyAction::NextNode),
            (BackTab, SHIFT, KeyAction::PrevNode),
            // Expansion
            (Enter, NONE, KeyAction::ToggleExpand),
            (Char(' '), NONE, KeyAction::ToggleExpand),
            (Char('E'), SHIFT, KeyAction::ExpandAll),
            (Char('C'), SHIFT, KeyAction::CollapseAll),
            // Editing
            (Char('m'), NONE, KeyAction::OpenMenu),
            (Char('x'), NONE, KeyAction::DeleteNode),
            (Delete, NONE, KeyAction::DeleteNode),
            (Char('e'), NONE, KeyAction::RenameNode),
            (F(2), NONE, KeyAction::RenameNode),
            // Display
            (Char('L'), SHIFT, KeyAction::ToggleLines),
            (Char('?'), NONE, KeyAction::Help),
            // Documents
            (Char('s'), NONE, KeyAction::Save),
            (Char('r'), NONE, KeyAction::Reload),
            // Application controls
            (Char('q'), NONE, KeyAction::Quit),
            (Char('c'), CTRL, KeyAction::Quit),
        ];

        let bindings = table
            .into_iter()
            .map(|(code, modifiers, action)| (KeyEvent::new(code, modifiers), action))
            .collect();

        Self { bindings }
    }
}
