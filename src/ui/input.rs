use crate::catalog::CatalogSource;
use crate::ui::app::{App, InputMode, Route};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key<S: CatalogSource>(app: &mut App<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
    {
        app.request_quit();
        return;
    }

    if !matches!(app.input_mode(), InputMode::Normal) {
        match key.code {
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Enter => app.submit_input(),
            KeyCode::Backspace => app.pop_input(),
            KeyCode::Char(ch) => app.push_input(ch),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Right | KeyCode::Char('n') => {
            app.next_page();
        }
        KeyCode::Left | KeyCode::Char('p') => {
            app.previous_page();
        }
        KeyCode::Char('g') => app.begin_go_to_page(),
        KeyCode::Char('/') => app.begin_search(),
        KeyCode::Char('h') => app.navigate(Route::popular(), 1),
        KeyCode::Char('r') => match app.route().clone() {
            Route::List { .. } => app.reload_list(),
            route @ Route::Detail { .. } => app.navigate(route, 1),
        },
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('c') => app.clear_error(),
        _ => {}
    }
}
