//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Scrolling
    /// Scroll up by one line. Default: k/↑
    ScrollUp,
    /// Scroll down by one line. Default: j/↓
    ScrollDown,
    /// Scroll up by one viewport height. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down by one viewport height. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump to top of the tree. Default: g/Home
    ScrollToTop,
    /// Jump to bottom of the tree. Default: G/End
    ScrollToBottom,

    // Focus
    /// Move focus to the next visible node. Default: Ctrl+j/Tab
    NextNode,
    /// Move focus to the previous visible node. Default: Ctrl+k/Shift+Tab
    PrevNode,

    // Expansion
    /// Toggle the focused node open or closed. Default: Enter/Space
    ToggleExpand,
    /// Expand every node. Default: E
    ExpandAll,
    /// Collapse every node. Default: C
    CollapseAll,

    // Editing
    /// Open the context menu for the focused node. Default: m
    OpenMenu,
    /// Delete the focused node and its subtree. Default: Delete/x
    DeleteNode,
    /// Rename the focused node. Default: F2/e
    RenameNode,

    // Display
    /// Toggle connecting lines between parents and children. Default: L
    ToggleLines,
    /// Show the key help line. Default: ?
    Help,

    // Documents
    /// Save the tree to its file. Default: s
    Save,
    /// Reload the tree from its file. Default: r
    Reload,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

impl KeyAction {
    /// True for actions handled by the scroll handler.
    pub fn is_scroll(self) -> bool {
        matches!(
            self,
            KeyAction::ScrollUp
                | KeyAction::ScrollDown
                | KeyAction::PageUp
                | KeyAction::PageDown
                | KeyAction::ScrollToTop
                | KeyAction::ScrollToBottom
        )
    }
}
