//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod context_menu;
mod help;
pub mod layout;
pub mod rename_input;
pub mod styles;
pub mod surface;
pub mod tree_view;

pub use help::render_help_overlay;
pub use styles::{ColorConfig, TreeColors};
pub use surface::BufferSurface;
pub use tree_view::TreeView;

use crate::config::keybindings::KeyBindings;
use crate::model::AppError;
use crate::state::{
    handle_click, handle_key_action, handle_wheel, menu_handler, rename_handler, AppState, Mode,
    PointerButton,
};
use crate::view_state::types::Point;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    colors: TreeColors,
    /// Last rendered tree area (mouse coordinates are made relative to it)
    last_tree_area: Rect,
    /// Last rendered context menu, if one was open
    last_menu_area: Option<Rect>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(
        app_state: AppState,
        key_bindings: KeyBindings,
        colors: TreeColors,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, app_state, key_bindings, colors))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Redraws only after input.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        colors: TreeColors,
    ) -> Self {
        let mut app = Self {
            terminal,
            app_state,
            key_bindings,
            colors,
            last_tree_area: Rect::default(),
            last_menu_area: None,
        };
        app.sync_viewport();
        app
    }

    /// Apply a pure handler to the owned state.
    fn apply(&mut self, handler: impl FnOnce(AppState) -> AppState) {
        let state = std::mem::take(&mut self.app_state);
        self.app_state = handler(state);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, whatever mode is active
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.app_state.mode {
            Mode::Menu(_) => self.handle_menu_key(key),
            Mode::Renaming(_) => self.handle_rename_key(key),
            Mode::Browse if self.app_state.help_visible => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                    self.app_state.help_visible = false;
                }
            }
            Mode::Browse => {
                if let Some(action) = self.key_bindings.get(key) {
                    debug!(?action, "key action");
                    self.apply(|state| handle_key_action(state, action));
                }
            }
        }
        self.app_state.should_quit
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.apply(menu_handler::handle_menu_prev)
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.apply(menu_handler::handle_menu_next)
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.apply(menu_handler::handle_menu_confirm),
            KeyCode::Esc | KeyCode::Char('q') => self.apply(menu_handler::handle_menu_cancel),
            _ => {}
        }
    }

    fn handle_rename_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.apply(rename_handler::submit_rename),
            KeyCode::Esc => self.apply(rename_handler::cancel_rename),
            KeyCode::Backspace => self.apply(rename_handler::handle_backspace),
            KeyCode::Delete => self.apply(rename_handler::handle_delete),
            KeyCode::Left => self.apply(rename_handler::handle_cursor_left),
            KeyCode::Right => self.apply(rename_handler::handle_cursor_right),
            KeyCode::Home => self.apply(rename_handler::handle_cursor_home),
            KeyCode::End => self.apply(rename_handler::handle_cursor_end),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.apply(|state| rename_handler::handle_char_input(state, ch))
            }
            _ => {}
        }
    }

    /// Handle a single mouse event
    ///
    /// Clicks inside an open menu pick a row; clicks in the tree go through
    /// the hit tester with coordinates relative to the tree area.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);

        let menu_open = matches!(self.app_state.mode, Mode::Menu(_));
        let menu_hit = self
            .last_menu_area
            .filter(|area| menu_open && area.contains((column, row).into()));
        if let (MouseEventKind::Down(_), Some(menu_area)) = (mouse.kind, menu_hit) {
            if let Some(menu_row) = context_menu::menu_row_at(menu_area, column, row) {
                self.apply(|state| menu_handler::handle_menu_click(state, menu_row));
            }
            return;
        }

        let tree = self.last_tree_area;
        let point = Point::new(
            i32::from(column) - i32::from(tree.x),
            i32::from(row) - i32::from(tree.y),
        );
        let in_tree = tree.contains((column, row).into());

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if in_tree => {
                self.apply(|state| handle_click(state, point, PointerButton::Primary))
            }
            MouseEventKind::Down(MouseButton::Right) if in_tree => {
                self.apply(|state| handle_click(state, point, PointerButton::Secondary))
            }
            MouseEventKind::ScrollUp => self.apply(|state| handle_wheel(state, true)),
            MouseEventKind::ScrollDown => self.apply(|state| handle_wheel(state, false)),
            _ => {}
        }
    }

    /// Handle terminal resize
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        self.sync_viewport();
    }

    /// Recompute screen areas and push the tree area into the state.
    fn sync_viewport(&mut self) {
        let frame_area = match self.terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width, size.height),
            Err(_) => Rect::new(0, 0, 80, 24),
        };
        let areas = layout::calculate_areas(frame_area, &self.app_state);
        self.last_tree_area = areas.tree;
        self.app_state
            .set_viewport(i32::from(areas.tree.width), i32::from(areas.tree.height));
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        // The rename input changes the tree area's height
        self.sync_viewport();

        let state = &self.app_state;
        let colors = &self.colors;
        let mut menu_area = None;
        self.terminal.draw(|frame| {
            menu_area = layout::render_layout(frame, state, colors);
        })?;
        self.last_menu_area = menu_area;
        Ok(())
    }
}

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp around an existing terminal (test-only constructor)
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self::with_terminal(terminal, app_state, key_bindings, TreeColors::default())
    }
}

/// Run the TUI until the user quits.
///
/// The terminal is restored whether or not the loop fails.
pub fn run_app(
    app_state: AppState,
    key_bindings: KeyBindings,
    colors: TreeColors,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, key_bindings, colors)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;
    info!("terminal restored");

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
