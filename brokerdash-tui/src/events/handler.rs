use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,
    /// Open the drawer for the row under the cursor.
    Select,
    /// Close the drawer, or leave the help screen.
    Back,
    ToggleTheme,
    Help,
    GoToView(usize),
    /// Move the cursor to a roster row and open its drawer.
    SelectRow(usize),
    CloseDrawer,
    MouseClick { x: u16, y: u16 },
    MouseScroll { direction: ScrollDirection },
    Resize { width: u16, height: u16 },
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickableRegion {
    pub area: Rect,
    pub action: Action,
    pub label: String,
}

impl ClickableRegion {
    pub fn new(area: Rect, action: Action, label: impl Into<String>) -> Self {
        Self {
            area,
            action,
            label: label.into(),
        }
    }
}

/// Turns mouse and resize events into actions.
///
/// Regions are checked in registration order and the first hit wins, so
/// overlays register before whatever they cover.
#[derive(Debug, Default)]
pub struct EventHandler {
    terminal_size: Option<(u16, u16)>,
    clickable_regions: Vec<ClickableRegion>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terminal_size(&self) -> Option<(u16, u16)> {
        self.terminal_size
    }

    pub fn register_clickable_region(&mut self, region: ClickableRegion) {
        self.clickable_regions.push(region);
    }

    pub fn set_clickable_regions(&mut self, regions: Vec<ClickableRegion>) {
        self.clickable_regions = regions;
    }

    pub fn clear_clickable_regions(&mut self) {
        self.clickable_regions.clear();
    }

    pub fn clickable_regions(&self) -> &[ClickableRegion] {
        &self.clickable_regions
    }

    pub fn region_at(&self, x: u16, y: u16) -> Option<&ClickableRegion> {
        self.clickable_regions
            .iter()
            .find(|region| region.area.contains(Position::new(x, y)))
    }

    /// Key events are resolved through [`super::Keybinds`] and yield `None` here.
    pub fn handle_event(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.handle_resize(width, height),
            _ => None,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (x, y) = (mouse.column, mouse.row);
                match self.region_at(x, y) {
                    Some(region) => Some(region.action.clone()),
                    None => Some(Action::MouseClick { x, y }),
                }
            }
            MouseEventKind::ScrollUp => Some(Action::MouseScroll {
                direction: ScrollDirection::Up,
            }),
            MouseEventKind::ScrollDown => Some(Action::MouseScroll {
                direction: ScrollDirection::Down,
            }),
            _ => None,
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) -> Option<Action> {
        self.terminal_size = Some((width, height));
        Some(Action::Resize { width, height })
    }
}
