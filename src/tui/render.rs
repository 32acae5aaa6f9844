use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::util::unicode;

use super::app::{App, Mode, Status};

/// Main render function: title row, task list, status/input row
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title row
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status / input row
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_status_row(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let marker = if app.unsaved { "*" } else { "" };
    let left = format!(" {}{}", app.path.display(), marker);
    let right = format!("{}/{} done ", app.list.completed_count(), app.list.len());

    let mut spans = vec![Span::styled(
        left.clone(),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = unicode::display_width(&left) + unicode::display_width(&right);
    if used < width {
        spans.push(Span::styled(
            " ".repeat(width - used),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            right,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.list.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "  no tasks yet. press a to add one",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
        frame.render_widget(msg, area);
        return;
    }

    let height = area.height as usize;
    let width = area.width as usize;
    app.ensure_cursor_visible(height);

    // Row layout: selection marker (2) + checkbox (4) + text
    let text_budget = width.saturating_sub(6);

    let mut lines = Vec::new();
    for (i, task) in app
        .list
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let selected = i == app.cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };

        let marker_style = Style::default().fg(app.theme.highlight).bg(row_bg);
        let checkbox_style = if task.completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        let mut text_style = Style::default().fg(app.theme.text).bg(row_bg);
        if task.completed {
            text_style = text_style
                .fg(app.theme.dim)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        if selected {
            text_style = text_style.fg(app.theme.text_bright);
        }

        lines.push(Line::from(vec![
            Span::styled(if selected { "\u{25B8} " } else { "  " }, marker_style),
            Span::styled(
                if task.completed { "[x] " } else { "[ ] " },
                checkbox_style,
            ),
            Span::styled(unicode::truncate_to_width(&task.text, text_budget), text_style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Edit => edit_prompt_line(app, width),
        Mode::Confirm => Line::from(Span::styled(
            " clear all tasks? (y/n)",
            Style::default().fg(app.theme.yellow).bg(bg),
        )),
        Mode::Navigate => match &app.status {
            Some(Status::Error(msg)) => Line::from(Span::styled(
                format!(" {}", msg),
                Style::default().fg(app.theme.red).bg(bg),
            )),
            Some(Status::Info(msg)) => Line::from(Span::styled(
                format!(" {}", msg),
                Style::default().fg(app.theme.green).bg(bg),
            )),
            None if app.show_key_hints => Line::from(Span::styled(
                " a add  e edit  d delete  space toggle  c clear  s save  q quit",
                Style::default().fg(app.theme.dim).bg(bg),
            )),
            None => Line::from(Span::styled(
                " ".repeat(width),
                Style::default().bg(bg),
            )),
        },
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(bg)),
        area,
    );
}

/// Input prompt with a mid-line cursor: `add: buffer▌rest`
fn edit_prompt_line(app: &App, width: usize) -> Line<'_> {
    let bg = app.theme.background;
    let prompt = match app.edit_target {
        Some(_) => " edit: ",
        None => " add: ",
    };
    let before = &app.edit_buffer[..app.edit_cursor];
    let after = &app.edit_buffer[app.edit_cursor..];

    let mut spans = vec![
        Span::styled(prompt, Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(before, Style::default().fg(app.theme.text_bright).bg(bg)),
        Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(after, Style::default().fg(app.theme.text_bright).bg(bg)),
    ];

    // Right-aligned: a pending error beats the key hint
    let tail = match &app.status {
        Some(Status::Error(msg)) => msg.clone(),
        _ => "Enter save  Esc cancel".to_string(),
    };
    let tail_style = match &app.status {
        Some(Status::Error(_)) => Style::default().fg(app.theme.red).bg(bg),
        _ => Style::default().fg(app.theme.dim).bg(bg),
    };
    let used: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let tail_width = unicode::display_width(&tail);
    if used + tail_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - tail_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(tail, tail_style));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Config, Task, TaskList};
    use crate::tui::input::handle_key;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    /// Render into an in-memory buffer and return plain text (no styles)
    fn render_to_string(app: &mut App, w: u16, h: u16) -> String {
        let backend = TestBackend::new(w, h);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buf = terminal.backend().buffer().clone();
        let w = buf.area.width as usize;
        buf.content
            .chunks(w)
            .map(|row| {
                let s: String = row.iter().map(|cell| cell.symbol()).collect();
                s.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn sample_app() -> App {
        let list = TaskList::from_tasks(vec![
            Task::new("Write report"),
            Task {
                text: "Buy milk".into(),
                completed: true,
            },
        ]);
        App::new(list, PathBuf::from("tasks.txt"), &Config::default())
    }

    #[test]
    fn test_render_task_rows() {
        let mut app = sample_app();
        let screen = render_to_string(&mut app, 40, 8);
        assert!(screen.contains("[ ] Write report"));
        assert!(screen.contains("[x] Buy milk"));
        assert!(screen.contains("tasks.txt"));
        assert!(screen.contains("1/2 done"));
    }

    #[test]
    fn test_render_empty_list_hint() {
        let mut app = App::new(
            TaskList::new(),
            PathBuf::from("tasks.txt"),
            &Config::default(),
        );
        let screen = render_to_string(&mut app, 40, 8);
        assert!(screen.contains("no tasks yet"));
        assert!(screen.contains("0/0 done"));
    }

    #[test]
    fn test_render_edit_prompt() {
        let mut app = sample_app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE));
        let screen = render_to_string(&mut app, 60, 8);
        assert!(screen.contains("add: hi"));
        assert!(screen.contains("Esc cancel"));
    }

    #[test]
    fn test_render_confirm_prompt() {
        let mut app = sample_app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        let screen = render_to_string(&mut app, 40, 8);
        assert!(screen.contains("clear all tasks? (y/n)"));
    }

    #[test]
    fn test_render_unsaved_marker() {
        let mut app = sample_app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));
        let screen = render_to_string(&mut app, 40, 8);
        assert!(screen.contains("tasks.txt*"));
    }

    #[test]
    fn test_render_long_text_truncated() {
        let long = "x".repeat(100);
        let mut app = App::new(
            TaskList::from_tasks(vec![Task::new(long)]),
            PathBuf::from("tasks.txt"),
            &Config::default(),
        );
        let screen = render_to_string(&mut app, 20, 6);
        assert!(screen.contains('\u{2026}'));
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let tasks: Vec<Task> = (0..30).map(|i| Task::new(format!("task {}", i))).collect();
        let mut app = App::new(
            TaskList::from_tasks(tasks),
            PathBuf::from("tasks.txt"),
            &Config::default(),
        );
        app.cursor = 29;
        let screen = render_to_string(&mut app, 30, 10);
        assert!(screen.contains("task 29"));
        assert!(!screen.contains("task 0\n"));
    }
}
