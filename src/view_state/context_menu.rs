//! Context-menu actions keyed by node kind.
//!
//! The menu is a lookup table, not a branch ladder: each [`NodeKind`] maps to
//! an ordered action list, and kinds without an entry get the fallback list
//! (delete, rename). The table can be replaced from configuration.

use crate::model::{Node, NodeKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Longest tag shown in a menu title before truncation.
pub const TITLE_MAX_CHARS: usize = 45;

/// Command dispatched when a menu action is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandId {
    /// Append a new event node under the target.
    AddEvent,
    /// Append a new variable node under the target.
    AddVariable,
    /// Delete the target and its subtree.
    DeleteNode,
    /// Rename the target.
    ModifyText,
    /// Replace the tree with the contents of a file.
    LoadTree,
    /// Write the tree to a file.
    SaveTree,
    /// Switch connecting lines on or off.
    ToggleLines,
}

impl CommandId {
    /// Menu label for this command.
    pub fn label(self) -> &'static str {
        match self {
            CommandId::AddEvent => "Add New Event",
            CommandId::AddVariable => "Add New Variable",
            CommandId::DeleteNode => "Delete Node",
            CommandId::ModifyText => "Modify Node Text",
            CommandId::LoadTree => "Load Tree from file",
            CommandId::SaveTree => "Save Tree to file",
            CommandId::ToggleLines => "Toggle Connecting Lines",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One selectable menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuAction {
    /// Text shown to the user.
    pub label: &'static str,
    /// Command to run.
    pub command: CommandId,
}

impl From<CommandId> for MenuAction {
    fn from(command: CommandId) -> Self {
        Self {
            label: command.label(),
            command,
        }
    }
}

/// A row of a built menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Disabled heading naming the target node.
    Title(String),
    /// Divider.
    Separator,
    /// Selectable action.
    Action(MenuAction),
}

impl MenuEntry {
    /// The action, if this row is selectable.
    pub fn action(&self) -> Option<MenuAction> {
        match self {
            MenuEntry::Action(action) => Some(*action),
            _ => None,
        }
    }
}

/// Kind → actions table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenu {
    table: HashMap<NodeKind, Vec<MenuAction>>,
    fallback: Vec<MenuAction>,
}

impl Default for ContextMenu {
    fn default() -> Self {
        let table = [
            (NodeKind::Event, vec![CommandId::AddEvent]),
            (
                NodeKind::Variable,
                vec![CommandId::AddVariable, CommandId::DeleteNode],
            ),
            (NodeKind::Container, vec![]),
            (
                NodeKind::DocumentRoot,
                vec![CommandId::LoadTree, CommandId::SaveTree],
            ),
        ]
        .into_iter()
        .map(|(kind, commands)| (kind, commands.into_iter().map(MenuAction::from).collect()))
        .collect();

        Self {
            table,
            fallback: vec![CommandId::DeleteNode.into(), CommandId::ModifyText.into()],
        }
    }
}

impl ContextMenu {
    /// Default table with `overrides` replacing whole entries.
    pub fn with_overrides(overrides: &HashMap<NodeKind, Vec<CommandId>>) -> Self {
        let mut menu = Self::default();
        for (&kind, commands) in overrides {
            menu.set_actions(kind, commands);
        }
        menu
    }

    /// Replace the action list for `kind`.
    pub fn set_actions(&mut self, kind: NodeKind, commands: &[CommandId]) {
        self.table
            .insert(kind, commands.iter().copied().map(MenuAction::from).collect());
    }

    /// Ordered actions for `kind`; the fallback list if `kind` has no entry.
    pub fn actions_for(&self, kind: NodeKind) -> &[MenuAction] {
        self.table
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&self.fallback)
    }

    /// Full menu for `node`: title, separator, then its actions.
    pub fn build(&self, node: &Node) -> Vec<MenuEntry> {
        let mut entries = vec![MenuEntry::Title(menu_title(node.tag())), MenuEntry::Separator];
        entries.extend(self.actions_for(node.kind()).iter().copied().map(MenuEntry::Action));
        entries
    }
}

/// Tag cut to [`TITLE_MAX_CHARS`] characters, with `...` if anything was cut.
pub fn menu_title(tag: &str) -> String {
    let mut title: String = tag.chars().take(TITLE_MAX_CHARS).collect();
    if tag.chars().count() > TITLE_MAX_CHARS {
        title.push_str("...");
    }
    title
}
