use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops;
use crate::util::unicode;

use super::app::{App, ConfirmAction, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    // Any keypress clears the previous status message
    app.status = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }
}

// ---------------------------------------------------------------------------
// Navigate mode
// ---------------------------------------------------------------------------

fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit, saving first; a failed write keeps the session open
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            if !app.unsaved || app.save() {
                app.should_quit = true;
            }
        }
        // Quit without saving
        (KeyModifiers::SHIFT, KeyCode::Char('Q')) => {
            app.should_quit = true;
        }

        (KeyModifiers::NONE, KeyCode::Char('j')) | (_, KeyCode::Down) => {
            if app.cursor + 1 < app.list.len() {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (_, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            if !app.list.is_empty() {
                app.cursor = app.list.len() - 1;
            }
        }

        (KeyModifiers::NONE, KeyCode::Char(' ')) | (KeyModifiers::NONE, KeyCode::Enter) => {
            toggle_selected(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            start_add(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('e')) => {
            start_edit(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('d')) => {
            delete_selected(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('c')) => {
            request_clear(app);
        }
        (KeyModifiers::NONE, KeyCode::Char('s')) => {
            app.save();
        }
        _ => {}
    }
}

fn toggle_selected(app: &mut App) {
    if app.list.is_empty() {
        return;
    }
    if ops::toggle_task(&mut app.list, app.cursor).is_ok() {
        app.unsaved = true;
    }
}

fn start_add(app: &mut App) {
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_target = None;
    app.mode = Mode::Edit;
}

fn start_edit(app: &mut App) {
    let Some(task) = app.list.tasks().get(app.cursor) else {
        app.info("no tasks to edit");
        return;
    };
    app.edit_buffer = task.text.clone();
    app.edit_cursor = app.edit_buffer.len();
    app.edit_target = Some(app.cursor);
    app.mode = Mode::Edit;
}

fn delete_selected(app: &mut App) {
    if app.list.is_empty() {
        app.info("no tasks to delete");
        return;
    }
    match ops::delete_task(&mut app.list, app.cursor) {
        Ok(()) => {
            app.unsaved = true;
            app.clamp_cursor();
        }
        Err(e) => app.error(e.to_string()),
    }
}

fn request_clear(app: &mut App) {
    if app.list.is_empty() {
        app.info("no tasks to clear");
        return;
    }
    app.confirm = Some(ConfirmAction::ClearAll);
    app.mode = Mode::Confirm;
}

// ---------------------------------------------------------------------------
// Confirm mode
// ---------------------------------------------------------------------------

fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            let action = app.confirm.take();
            app.mode = Mode::Navigate;
            if let Some(ConfirmAction::ClearAll) = action {
                let removed = app.list.len();
                ops::clear_tasks(&mut app.list);
                app.cursor = 0;
                app.scroll_offset = 0;
                app.unsaved = true;
                let noun = if removed == 1 { "task" } else { "tasks" };
                app.info(format!("cleared {} {}", removed, noun));
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Edit mode (single-line input for add/edit)
// ---------------------------------------------------------------------------

fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => commit_edit(app),
        (_, KeyCode::Esc) => cancel_edit(app),

        // Word-wise motion
        (m, KeyCode::Left)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            app.edit_cursor = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
        }
        (m, KeyCode::Right)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            app.edit_cursor = unicode::word_boundary_right(&app.edit_buffer, app.edit_cursor);
        }

        (_, KeyCode::Left) => {
            app.edit_cursor = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor);
        }
        (_, KeyCode::Right) => {
            app.edit_cursor = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor);
        }
        (_, KeyCode::Home) => {
            app.edit_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = 0;
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_cursor = app.edit_buffer.len();
        }

        // Kill to start of line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.drain(..app.edit_cursor);
            app.edit_cursor = 0;
        }
        // Kill word left
        (m, KeyCode::Char('w')) if m.contains(KeyModifiers::CONTROL) => {
            let start = unicode::word_boundary_left(&app.edit_buffer, app.edit_cursor);
            app.edit_buffer.drain(start..app.edit_cursor);
            app.edit_cursor = start;
        }

        (KeyModifiers::NONE, KeyCode::Backspace) => {
            let start = unicode::prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor);
            app.edit_buffer.drain(start..app.edit_cursor);
            app.edit_cursor = start;
        }
        (_, KeyCode::Delete) => {
            let end = unicode::next_grapheme_boundary(&app.edit_buffer, app.edit_cursor);
            app.edit_buffer.drain(app.edit_cursor..end);
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

fn commit_edit(app: &mut App) {
    let result = match app.edit_target {
        Some(index) => ops::edit_task(&mut app.list, index, &app.edit_buffer),
        None => ops::add_task(&mut app.list, &app.edit_buffer),
    };
    match result {
        Ok(()) => {
            if app.edit_target.is_none() {
                // Land the cursor on the task that was just added
                app.cursor = app.list.len() - 1;
            }
            app.unsaved = true;
            cancel_edit(app);
        }
        // Stay in edit mode so the input can be fixed rather than lost
        Err(e) => app.error(e.to_string()),
    }
}

fn cancel_edit(app: &mut App) {
    app.edit_buffer.clear();
    app.edit_cursor = 0;
    app.edit_target = None;
    app.mode = Mode::Navigate;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
