//! Application state for the tree view.
//!
//! `AppState` owns the tree together with everything derived from it: the
//! layout cache, the scroll controller and the focus. All transitions are
//! plain method calls, so the whole state machine runs without a terminal.

use crate::model::{NodeIndex, NodeInit, NodeKind, PersistError, Tree, TreeError};
use crate::source::{self, JsonFormat};
use crate::view_state::cache::LayoutCache;
use crate::view_state::context_menu::{CommandId, ContextMenu, MenuAction, MenuEntry};
use crate::view_state::hit_test::{HitTestResult, HitTester};
use crate::view_state::layout::TreeLayout;
use crate::view_state::layout_params::LayoutParams;
use crate::view_state::scroll::{ScrollController, ScrollDelta};
use crate::view_state::style::TreeStyle;
use crate::view_state::surface::CellMeasure;
use crate::view_state::types::{Point, ViewportDimensions};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Tag given to nodes created by "Add New Event".
pub const NEW_EVENT_TAG: &str = "New Event";

/// Tag given to nodes created by "Add New Variable".
pub const NEW_VARIABLE_TAG: &str = "New Variable";

/// An open context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    /// Node the menu was opened on.
    pub target: NodeIndex,
    /// Rows, title and separator included.
    pub entries: Vec<MenuEntry>,
    /// Highlighted row. Always an action row when the menu has one.
    pub selected: usize,
}

impl MenuState {
    /// Open on `target` with the first action highlighted.
    pub fn new(target: NodeIndex, entries: Vec<MenuEntry>) -> Self {
        let selected = entries
            .iter()
            .position(|e| e.action().is_some())
            .unwrap_or(0);
        Self {
            target,
            entries,
            selected,
        }
    }

    /// Highlighted action, if any.
    pub fn selected_action(&self) -> Option<MenuAction> {
        self.entries.get(self.selected).and_then(MenuEntry::action)
    }

    /// Move the highlight to the next action row, wrapping around.
    pub fn select_next(&mut self) {
        self.step(1);
    }

    /// Move the highlight to the previous action row, wrapping around.
    pub fn select_prev(&mut self) {
        self.step(self.entries.len().saturating_sub(1));
    }

    fn step(&mut self, by: usize) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let mut candidate = self.selected;
        for _ in 0..len {
            candidate = (candidate + by) % len;
            if self.entries[candidate].action().is_some() {
                self.selected = candidate;
                return;
            }
        }
    }
}

/// An in-progress rename.
///
/// `cursor` counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameState {
    /// Node being renamed.
    pub target: NodeIndex,
    /// Text typed so far.
    pub buffer: String,
    /// Insertion point in characters.
    pub cursor: usize,
}

impl RenameState {
    /// Start editing `current` with the cursor at the end.
    pub fn new(target: NodeIndex, current: &str) -> Self {
        Self {
            target,
            buffer: current.to_string(),
            cursor: current.chars().count(),
        }
    }

    /// Byte offset of the cursor in `buffer`.
    pub fn byte_cursor(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }
}

/// What keyboard input currently drives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys go through the key bindings.
    #[default]
    Browse,
    /// A context menu is open.
    Menu(MenuState),
    /// The rename input is open.
    Renaming(RenameState),
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct AppState {
    tree: Tree,
    cache: LayoutCache,
    scroll: ScrollController,
    style: TreeStyle,
    menu: ContextMenu,
    viewport: ViewportDimensions,
    focused: Option<NodeIndex>,
    file_path: Option<PathBuf>,

    /// Input mode.
    pub mode: Mode,

    /// One-line message for the status bar.
    pub status: Option<String>,

    /// Show the key help line.
    pub help_visible: bool,

    /// Set by the quit action; the event loop exits on the next iteration.
    pub should_quit: bool,
}

impl Default for AppState {
    /// Empty tree with default style and menu table.
    fn default() -> Self {
        Self::new(Tree::new(), TreeStyle::default(), ContextMenu::default())
    }
}

impl AppState {
    /// Create state around `tree`.
    pub fn new(tree: Tree, style: TreeStyle, menu: ContextMenu) -> Self {
        let scroll = ScrollController::new(style.scroll_margin, 1);
        Self {
            tree,
            cache: LayoutCache::new(),
            scroll,
            style,
            menu,
            viewport: ViewportDimensions::default(),
            focused: None,
            file_path: None,
            mode: Mode::Browse,
            status: None,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Remember `path` as the document's file for save and reload.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// The tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Style in effect.
    pub fn style(&self) -> &TreeStyle {
        &self.style
    }

    /// Context menu table.
    pub fn context_menu(&self) -> &ContextMenu {
        &self.menu
    }

    /// Last viewport size reported by the view.
    pub fn viewport(&self) -> ViewportDimensions {
        self.viewport
    }

    /// Focused node, if any.
    pub fn focused(&self) -> Option<NodeIndex> {
        self.focused
    }

    /// Document file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Scroll controller.
    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    /// Current scroll offset.
    pub fn offset(&self) -> i32 {
        self.scroll.offset()
    }

    /// Number of layout passes run so far.
    pub fn layout_passes(&self) -> u64 {
        self.cache.passes()
    }

    fn layout_params(&self) -> LayoutParams {
        LayoutParams::new(self.viewport.width, self.style.clone())
    }

    // ===== Layout and scrolling =====

    /// Bring the layout up to date and push its height into the scroll
    /// controller.
    pub fn refresh(&mut self) {
        let params = self.layout_params();
        let layout = self.cache.ensure(&self.tree, &params, &CellMeasure);
        self.scroll.set_line_height(layout.line_height());
        self.scroll.set_document_height(layout.total_height());
        self.scroll.set_viewport_height(self.viewport.height);
        self.scroll.update_range();
    }

    /// Layout for the current tree and viewport, if [`refresh`](Self::refresh)
    /// has run since the last change.
    pub fn layout(&self) -> Option<&TreeLayout> {
        self.cache.get(&self.tree, &self.layout_params())
    }

    /// Record a new viewport size.
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.viewport = ViewportDimensions::new(width.max(0), height.max(0));
        self.scroll.set_margin(self.style.scroll_margin);
        self.scroll.handle_viewport_resize(self.viewport.height);
        self.refresh();
    }

    /// Apply a scroll request; returns the new offset.
    pub fn scroll_by(&mut self, delta: ScrollDelta) -> i32 {
        self.refresh();
        self.scroll.apply_delta(delta)
    }

    /// Node under a viewport point.
    pub fn hit_test(&mut self, point: Point) -> HitTestResult {
        self.refresh();
        match self.cache.last() {
            Some(layout) => {
                HitTester::new(&self.tree, layout).hit_test(point, self.scroll.offset())
            }
            None => HitTestResult::miss(),
        }
    }

    // ===== Focus =====

    /// Focus `index` (or nothing) and scroll it into view.
    ///
    /// Indices not in the tree clear the focus.
    pub fn set_focus(&mut self, index: Option<NodeIndex>) {
        self.focused = index.filter(|&i| self.tree.contains(i));
        self.reveal_focused();
    }

    /// Focus the next visible node. With nothing focused, the first.
    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    /// Focus the previous visible node. With nothing focused, the last.
    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        self.refresh();
        let Some(layout) = self.cache.last() else {
            return;
        };
        let order = layout.order();
        if order.is_empty() {
            self.focused = None;
            return;
        }
        let current = self.focused.and_then(|f| layout.get(f)).map(|n| n.row);
        let row = match current {
            Some(row) if forward => (row + 1).min(order.len() - 1),
            Some(row) => row.saturating_sub(1),
            None if forward => 0,
            None => order.len() - 1,
        };
        self.focused = Some(order[row]);
        self.reveal_focused();
    }

    fn reveal_focused(&mut self) {
        self.refresh();
        let Some(index) = self.focused else {
            return;
        };
        let rect = self.cache.last().and_then(|l| l.get(index)).map(|n| n.rect);
        if let Some(rect) = rect {
            self.scroll.reveal(rect.y, rect.bottom());
        }
    }

    /// Move focus off nodes that were deleted or hidden by a collapse.
    ///
    /// A hidden node hands focus to its nearest visible ancestor.
    fn settle_focus(&mut self) {
        self.refresh();
        let Some(mut index) = self.focused else {
            return;
        };
        if !self.tree.contains(index) {
            self.focused = None;
            return;
        }
        let Some(layout) = self.cache.last() else {
            return;
        };
        while layout.get(index).is_none() {
            match self.tree.parent(index) {
                Ok(parent) if !parent.is_root() => index = parent,
                _ => {
                    self.focused = None;
                    return;
                }
            }
        }
        self.focused = Some(index);
    }

    // ===== Editing =====

    /// Flip the expansion state of `index`.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if `index` is absent.
    pub fn toggle_node(&mut self, index: NodeIndex) -> Result<bool, TreeError> {
        let expanded = self.tree.toggle_expansion(index)?;
        debug!(%index, expanded, "toggled node");
        self.settle_focus();
        Ok(expanded)
    }

    /// Expand every node.
    pub fn expand_all(&mut self) {
        self.tree.expand_all();
        self.refresh();
    }

    /// Collapse every node. Focus moves to the focused node's root.
    pub fn collapse_all(&mut self) {
        self.tree.collapse_all();
        self.settle_focus();
        self.reveal_focused();
    }

    /// Delete `index` and its subtree; returns how many nodes went.
    ///
    /// If the focus was inside the subtree it moves to the deleted node's
    /// parent. A menu or rename aimed inside the subtree is closed.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if `index` is absent; nothing changes.
    pub fn delete_node(&mut self, index: NodeIndex) -> Result<usize, TreeError> {
        let parent = self.tree.parent(index)?;
        let removed = self.tree.delete_subtree(index)?;

        if self.focused.is_some_and(|f| removed.contains(&f)) {
            self.focused = Some(parent).filter(|p| !p.is_root());
        }
        let target = match &self.mode {
            Mode::Menu(menu) => Some(menu.target),
            Mode::Renaming(rename) => Some(rename.target),
            Mode::Browse => None,
        };
        if target.is_some_and(|t| removed.contains(&t)) {
            self.mode = Mode::Browse;
        }
        self.settle_focus();
        self.status = Some(format!("Deleted {} node(s)", removed.len()));
        Ok(removed.len())
    }

    /// Replace the tag of `index`.
    ///
    /// # Errors
    ///
    /// `TreeError::NotFound` if `index` is absent.
    pub fn rename_node(&mut self, index: NodeIndex, tag: &str) -> Result<(), TreeError> {
        self.tree.rename_node(index, tag)?;
        self.reveal_focused();
        Ok(())
    }

    /// Append a new `kind` child under `parent`, expand the parent and
    /// focus the new node.
    ///
    /// # Errors
    ///
    /// `TreeError::InvalidParent` if `parent` does not exist.
    pub fn add_child(&mut self, parent: NodeIndex, kind: NodeKind) -> Result<NodeIndex, TreeError> {
        let tag = match kind {
            NodeKind::Event => NEW_EVENT_TAG,
            NodeKind::Variable => NEW_VARIABLE_TAG,
            _ => "New Node",
        };
        let index = self.tree.add_node(tag, parent, kind, NodeInit::default())?;
        if !parent.is_root() {
            self.tree.set_expanded(parent, true)?;
        }
        self.set_focus(Some(index));
        Ok(index)
    }

    /// Switch connecting lines on or off.
    pub fn toggle_lines(&mut self) {
        let show = !self.style.show_lines;
        self.style = self.style.clone().with_lines(show);
        self.status = Some(format!(
            "Connecting lines {}",
            if show { "on" } else { "off" }
        ));
    }

    // ===== Menu and rename =====

    /// Open the context menu for `target` and focus it.
    pub fn open_menu(&mut self, target: NodeIndex) {
        let Ok(node) = self.tree.get(target) else {
            return;
        };
        let entries = self.menu.build(node);
        self.mode = Mode::Menu(MenuState::new(target, entries));
        self.set_focus(Some(target));
    }

    /// Open the rename input on `target`, prefilled with its tag.
    pub fn begin_rename(&mut self, target: NodeIndex) {
        if let Ok(node) = self.tree.get(target) {
            self.mode = Mode::Renaming(RenameState::new(target, node.tag()));
        }
    }

    /// Run a menu command against `target`. Closes any open menu first.
    pub fn run_command(&mut self, command: CommandId, target: NodeIndex) {
        self.mode = Mode::Browse;
        debug!(%command, %target, "running command");
        let result = match command {
            CommandId::AddEvent => self
                .add_child(target, NodeKind::Event)
                .map(|index| self.begin_rename(index)),
            CommandId::AddVariable => self
                .add_child(target, NodeKind::Variable)
                .map(|index| self.begin_rename(index)),
            CommandId::DeleteNode => self.delete_node(target).map(|_| ()),
            CommandId::ModifyText => {
                self.begin_rename(target);
                Ok(())
            }
            CommandId::LoadTree => {
                self.reload();
                Ok(())
            }
            CommandId::SaveTree => {
                self.save();
                Ok(())
            }
            CommandId::ToggleLines => {
                self.toggle_lines();
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!(error = %e, %command, "command failed");
            self.status = Some(e.to_string());
        }
    }

    // ===== Documents =====

    fn replace_tree(&mut self, tree: Tree) {
        self.tree = tree;
        // A fresh tree can reach the same revision number as the old one.
        self.cache.invalidate();
        self.focused = None;
        self.mode = Mode::Browse;
        self.refresh();
        self.scroll.apply_delta(ScrollDelta::Top);
    }

    /// Replace the tree with the contents of `path` and remember the path.
    ///
    /// # Errors
    ///
    /// Any [`PersistError`]; the current tree is untouched.
    pub fn load_data_from_file(&mut self, path: &Path) -> Result<(), PersistError> {
        let tree = source::load_data_from_file(path, &JsonFormat)?;
        self.replace_tree(tree);
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the tree to `path` and remember the path.
    ///
    /// # Errors
    ///
    /// Any [`PersistError`].
    pub fn save_data_to_file(&mut self, path: &Path) -> Result<(), PersistError> {
        source::save_data_to_file(&self.tree, path, &JsonFormat)?;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save to the remembered file, reporting the outcome in the status line.
    pub fn save(&mut self) {
        let Some(path) = self.file_path.clone() else {
            self.status = Some("No file to save to".to_string());
            return;
        };
        self.status = Some(match self.save_data_to_file(&path) {
            Ok(()) => format!("Saved {}", path.display()),
            Err(e) => e.to_string(),
        });
    }

    /// Reload the remembered file, reporting the outcome in the status line.
    pub fn reload(&mut self) {
        let Some(path) = self.file_path.clone() else {
            self.status = Some("No file to load".to_string());
            return;
        };
        self.status = Some(match self.load_data_from_file(&path) {
            Ok(()) => format!("Loaded {}", path.display()),
            Err(e) => e.to_string(),
        });
    }

    /// Drop every node. Always succeeds.
    pub fn reset(&mut self) {
        let mut tree = std::mem::take(&mut self.tree);
        tree.reset();
        self.replace_tree(tree);
        info!("tree reset");
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
