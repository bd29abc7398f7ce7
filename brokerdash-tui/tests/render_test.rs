use brokerdash_core::{Dataset, RecordSource, SampleSource};
use brokerdash_tui::events::Action;
use brokerdash_tui::ui::layout::MainLayout;
use brokerdash_tui::{App, AppOptions, View};
use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

const WIDTH: u16 = 160;
const HEIGHT: u16 = 50;

fn sample_app() -> App {
    let source = SampleSource;
    let mut app = App::new(source.load().unwrap(), source.name(), AppOptions::default());
    app.terminal_size = Some((WIDTH, HEIGHT));
    app
}

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|frame| MainLayout::render(frame, app))
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(WIDTH as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn region_for(app: &App, label: &str) -> Rect {
    MainLayout::clickable_regions(app, Rect::new(0, 0, WIDTH, HEIGHT))
        .into_iter()
        .find(|r| r.label == label)
        .map(|r| r.area)
        .unwrap_or_else(|| panic!("no clickable region labelled {label}"))
}

#[test]
fn test_performance_screen_lists_roster() {
    let app = sample_app();
    let screen = draw(&app);

    assert!(screen.contains("Agent Performance"));
    assert!(screen.contains("Agents (6)"));
    assert!(screen.contains("Layla Haddad"));
    assert!(screen.contains("Hamza Qureshi"));
    assert!(!screen.contains("Agent Detail"));
}

#[test]
fn test_analytics_screen_renders_panels() {
    let mut app = sample_app();
    app.execute_action(Action::NextView);
    assert_eq!(app.current_view, View::Analytics);

    let screen = draw(&app);
    assert!(screen.contains("Website Traffic"));
    assert!(screen.contains("Listing Engagement"));
}

#[test]
fn test_help_screen_lists_keys() {
    let mut app = sample_app();
    app.execute_action(Action::Help);

    let screen = draw(&app);
    assert!(screen.contains("Keys"));
    assert!(screen.contains("q / Ctrl+c"));
}

#[test]
fn test_clicking_a_row_opens_the_drawer() {
    let mut app = sample_app();
    let row = region_for(&app, "AG-1002");

    app.handle_mouse_event(left_click(row.x + 2, row.y));
    assert_eq!(app.selection.selected_id(), Some("AG-1002"));
    assert_eq!(app.cursor, 1);

    let screen = draw(&app);
    assert!(screen.contains("Agent Detail"));
    assert!(screen.contains("Monthly Revenue"));
    assert!(screen.contains("Omar Siddiqui"));
}

#[test]
fn test_clicking_the_backdrop_closes_the_drawer() {
    let mut app = sample_app();
    app.execute_action(Action::SelectRow(0));
    assert!(app.is_drawer_open());

    // Inside the drawer: nothing happens.
    let drawer = region_for(&app, "drawer");
    app.handle_mouse_event(left_click(drawer.x + 3, drawer.y + 4));
    assert!(app.is_drawer_open());

    // The header sits behind the drawer and counts as backdrop.
    app.handle_mouse_event(left_click(1, 0));
    assert!(!app.is_drawer_open());
    assert_eq!(app.current_view, View::Performance);
    assert!(!draw(&app).contains("Agent Detail"));
}

#[test]
fn test_close_button_closes_the_drawer() {
    let mut app = sample_app();
    app.execute_action(Action::SelectRow(3));

    let close = region_for(&app, "close");
    app.handle_mouse_event(left_click(close.x, close.y));
    assert_eq!(app.selection.selected_id(), None);
}

#[test]
fn test_header_tab_switches_view() {
    let mut app = sample_app();
    let tab = region_for(&app, View::Analytics.name());

    app.handle_mouse_event(left_click(tab.x + 1, tab.y));
    assert_eq!(app.current_view, View::Analytics);
}

#[test]
fn test_empty_dataset_renders_zero_states() {
    let mut app = App::new(Dataset::default(), "empty", AppOptions::default());
    app.terminal_size = Some((WIDTH, HEIGHT));

    let screen = draw(&app);
    assert!(screen.contains("0 / 0"));
    assert!(screen.contains("No agents in this dataset"));

    app.execute_action(Action::Select);
    assert!(!app.is_drawer_open());

    app.execute_action(Action::NextView);
    let screen = draw(&app);
    assert!(screen.contains("Website Traffic"));
}
