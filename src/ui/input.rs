//! Key bindings at the render boundary.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::api::StoryClient;
use crate::prefs::PreferenceStore;
use crate::ui::app::App;

/// All keystrokes go to the search input except the few bindings below;
/// plain characters never collide with commands.
pub fn handle_key<C: StoryClient, S: PreferenceStore>(app: &mut App<C, S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Esc) {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'd') {
        app.remove_selected();
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.edit_backspace(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char(c) if key.modifiers.intersection(KeyModifiers::CONTROL).is_empty() => {
            app.edit_push(c);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}
