use std::io;
use std::time::Duration;

use anyhow::Result;
use brokerdash_core::{
    AgentDetail, AgentRecord, BrokerdashConfig, BrokerdashError, Dataset, SelectionState,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEvent};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{debug, info};

use crate::events::{Action, EventHandler, Keybinds, ScrollDirection};
use crate::theme::{Theme, ThemeManager};
use crate::ui::layout::MainLayout;

const PAGE_SIZE: usize = 10;
const FALLBACK_SIZE: (u16, u16) = (80, 24);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Performance,
    Analytics,
    Help,
}

impl View {
    /// Views reachable from the tab bar.
    pub fn all() -> &'static [View] {
        &[View::Performance, View::Analytics]
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Performance => "Agent Performance",
            View::Analytics => "Executive Analytics",
            View::Help => "Help",
        }
    }

    pub fn next(&self) -> View {
        let views = View::all();
        let idx = views.iter().position(|v| v == self).unwrap_or(0);
        views[(idx + 1) % views.len()]
    }

    pub fn prev(&self) -> View {
        let views = View::all();
        let idx = views.iter().position(|v| v == self).unwrap_or(0);
        views[(idx + views.len() - 1) % views.len()]
    }
}

/// Startup settings resolved from config and command-line flags.
pub struct AppOptions {
    pub theme: String,
    pub view: View,
    pub currency: String,
    pub tick_rate: Duration,
    pub mouse_enabled: bool,
    pub keybinds: Keybinds,
}

impl AppOptions {
    pub fn from_config(config: &BrokerdashConfig) -> Self {
        Self {
            theme: config.tui.theme.clone(),
            view: View::Performance,
            currency: config.currency_symbol().to_string(),
            tick_rate: Duration::from_millis(config.tui.tick_rate_ms),
            mouse_enabled: config.tui.mouse_enabled,
            keybinds: Keybinds::new(),
        }
    }
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from_config(&BrokerdashConfig::default())
    }
}

pub struct App {
    pub should_quit: bool,
    pub current_view: View,
    pub theme_manager: ThemeManager,
    pub dataset: Dataset,
    pub source_name: String,
    pub selection: SelectionState,
    /// Highlighted roster row. Moving it never opens the drawer.
    pub cursor: usize,
    pub status_message: Option<String>,
    pub last_error: Option<String>,
    pub event_handler: EventHandler,
    pub keybinds: Keybinds,
    pub currency: String,
    pub tick_rate: Duration,
    pub mouse_enabled: bool,
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    pub fn new(dataset: Dataset, source_name: impl Into<String>, options: AppOptions) -> Self {
        let theme_manager = ThemeManager::with_theme(&options.theme);
        let source_name = source_name.into();
        info!(
            source = %source_name,
            agents = dataset.agents.len(),
            theme = theme_manager.current_theme_name(),
            "Starting dashboard"
        );

        Self {
            should_quit: false,
            current_view: options.view,
            theme_manager,
            dataset,
            source_name,
            selection: SelectionState::new(),
            cursor: 0,
            status_message: None,
            last_error: None,
            event_handler: EventHandler::new(),
            keybinds: options.keybinds,
            currency: options.currency,
            tick_rate: options.tick_rate,
            mouse_enabled: options.mouse_enabled,
            terminal_size: None,
        }
    }

    /// A failed load still yields a usable app: the error goes to the log and
    /// the status bar, and the screens render their zero states.
    pub fn from_load_result(
        result: Result<Dataset, BrokerdashError>,
        source_name: impl Into<String>,
        options: AppOptions,
    ) -> Self {
        match result {
            Ok(dataset) => Self::new(dataset, source_name, options),
            Err(e) => {
                e.log();
                let mut app = Self::new(Dataset::default(), source_name, options);
                app.status_message = Some(format!("Load failed [{}]", e.error_code()));
                app.last_error = Some(e.to_string());
                app
            }
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let size = terminal.size()?;
        self.terminal_size = Some((size.width, size.height));

        if self.mouse_enabled {
            crossterm::execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;
        }

        let result = self.event_loop(terminal);

        if self.mouse_enabled {
            crossterm::execute!(io::stdout(), crossterm::event::DisableMouseCapture)?;
        }

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                MainLayout::render(frame, self);
            })?;

            if event::poll(self.tick_rate)? {
                let evt = event::read()?;
                self.handle_event(evt);
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key.code, key.modifiers);
            }
            Event::Mouse(mouse) if self.mouse_enabled => self.handle_mouse_event(mouse),
            Event::Resize(width, height) => {
                if let Some(action) = self.event_handler.handle_resize(width, height) {
                    self.execute_action(action);
                }
            }
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if let Some(action) = self.keybinds.get(key, modifiers) {
            self.execute_action(action.clone());
        }
    }

    /// Hit-tests against regions computed from the same layout the last frame used.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (width, height) = self.terminal_size.unwrap_or(FALLBACK_SIZE);
        let regions = MainLayout::clickable_regions(self, Rect::new(0, 0, width, height));
        self.event_handler.set_clickable_regions(regions);

        if let Some(action) = self.event_handler.handle_mouse(mouse) {
            self.execute_action(action);
        }
    }

    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextView => self.set_view(self.current_view.next()),
            Action::PrevView => self.set_view(self.current_view.prev()),
            Action::Up => self.move_cursor_up(1),
            Action::Down => self.move_cursor_down(1),
            Action::Top => self.cursor = 0,
            Action::Bottom => self.cursor = self.max_cursor(),
            Action::PageUp => self.move_cursor_up(PAGE_SIZE),
            Action::PageDown => self.move_cursor_down(PAGE_SIZE),
            Action::Select => {
                if self.current_view == View::Performance {
                    self.select_row(self.cursor);
                }
            }
            Action::SelectRow(idx) => {
                if self.current_view == View::Performance {
                    self.select_row(idx);
                }
            }
            Action::Back => self.handle_back(),
            Action::CloseDrawer => self.close_drawer(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Help => self.set_view(View::Help),
            Action::GoToView(idx) => {
                if let Some(view) = View::all().get(idx) {
                    self.set_view(*view);
                }
            }
            Action::MouseScroll { direction } => match direction {
                ScrollDirection::Up => self.move_cursor_up(1),
                ScrollDirection::Down => self.move_cursor_down(1),
            },
            Action::Resize { width, height } => {
                self.terminal_size = Some((width, height));
            }
            Action::MouseClick { .. } | Action::None => {}
        }
    }

    fn handle_back(&mut self) {
        if self.selection.is_open() {
            self.close_drawer();
            return;
        }
        match self.current_view {
            View::Help => self.current_view = View::Performance,
            _ => self.should_quit = true,
        }
    }

    fn select_row(&mut self, idx: usize) {
        let Some(record) = self.dataset.agents.get(idx) else {
            return;
        };
        self.cursor = idx;
        if self.selection.select(record) {
            self.status_message = Some(format!("Viewing {} ({})", record.name, record.id));
        }
    }

    fn close_drawer(&mut self) {
        if self.selection.clear() {
            self.status_message = None;
        }
    }

    /// The detail drawer belongs to the performance screen, so leaving it
    /// closes the drawer.
    fn set_view(&mut self, view: View) {
        if view == self.current_view {
            return;
        }
        if view != View::Performance {
            self.close_drawer();
        }
        debug!(view = view.name(), "Switching view");
        self.current_view = view;
    }

    fn toggle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        self.status_message = Some(format!(
            "Theme: {}",
            self.theme_manager.current_theme_name()
        ));
    }

    fn max_cursor(&self) -> usize {
        self.dataset.agents.len().saturating_sub(1)
    }

    fn move_cursor_up(&mut self, by: usize) {
        self.cursor = self.cursor.saturating_sub(by);
    }

    fn move_cursor_down(&mut self, by: usize) {
        self.cursor = (self.cursor + by).min(self.max_cursor());
    }

    /// The agent whose drawer is showing. `None` when nothing is selected or
    /// the selected id has left the roster.
    pub fn selected_record(&self) -> Option<&AgentRecord> {
        if self.current_view != View::Performance {
            return None;
        }
        self.selection.resolve(&self.dataset.agents)
    }

    pub fn is_drawer_open(&self) -> bool {
        self.selected_record().is_some()
    }

    pub fn drawer_detail(&self) -> Option<AgentDetail> {
        self.selected_record().map(|record| {
            AgentDetail::build(
                record,
                &self.dataset.agents,
                self.dataset.activity_for(&record.id),
            )
        })
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.theme_manager.current_theme()
    }
}
