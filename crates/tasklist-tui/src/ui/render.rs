//! Main render function for the TUI.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs};
use ratatui::Frame;

use tasklist_core::{visible_tasks, Filter, NoticeKind, TaskRow};

use crate::app::{App, Focus};

const PLACEHOLDER: &str = "Add a task";
const TOAST_WIDTH: u16 = 48;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Header, add field, list, footer
    let [header_area, input_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app);
    render_input(frame, input_area, app);
    render_tasks(frame, body_area, app);
    render_footer(frame, footer_area, app);
    render_toasts(frame, area, app);
}

fn focused_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render the header with one tab per filter.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let tasks = app.screen().tasks();
    let titles: Vec<Line> = Filter::all()
        .iter()
        .map(|filter| {
            let count = visible_tasks(tasks, *filter).count();
            Line::from(format!("{} ({})", filter.name(), count))
        })
        .collect();

    let selected = Filter::all()
        .iter()
        .position(|f| *f == app.screen().filter())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Task Manager ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        )
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render the add-task field.
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.screen();
    let focused = app.focus() == Focus::Input;

    let text = if screen.input().is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(screen.input())
    };

    let title = if screen.is_loading() {
        " New task (waiting...) "
    } else {
        " New task "
    };

    let input = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(focused_border(focused)),
    );
    frame.render_widget(input, area);

    if focused {
        let x = area.x + 1 + screen.input().chars().count() as u16;
        frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn row_item(row: &TaskRow<'_>, submitting: bool) -> ListItem<'static> {
    let task = row.task;
    let checkbox = if task.completed { "[x] " } else { "[ ] " };

    let line = match row.draft {
        Some(draft) => {
            let mut spans = vec![
                Span::raw(checkbox),
                Span::styled(
                    format!("{draft}_"),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ];
            if submitting {
                spans.push(Span::styled(
                    "  saving...",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        }
        None => {
            let style = if task.completed {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(checkbox, style),
                Span::styled(task.title.clone(), style),
            ])
        }
    };

    ListItem::new(line)
}

/// Render the task list.
fn render_tasks(frame: &mut Frame, area: Rect, app: &App) {
    let screen = app.screen();
    let rows = screen.rows();
    let submitting = screen.edit_session().is_some_and(|s| s.submitting);

    let title = format!(" Tasks: {} ({}) ", screen.filter(), rows.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(focused_border(matches!(app.focus(), Focus::List | Focus::Edit)));

    if rows.is_empty() {
        let message = if !screen.store().has_loaded() {
            "  Loading tasks..."
        } else if screen.tasks().is_empty() {
            "  No tasks yet."
        } else {
            "  No tasks match this filter."
        };
        let empty = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows.iter().map(|row| row_item(row, submitting)).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if app.focus() != Focus::Input {
        state.select(Some(app.selected()));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the footer with status and key help.
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let store = app.screen().store();

    let status = if store.is_loading() {
        Span::styled("Loading...", Style::default().fg(Color::Yellow))
    } else if let Some(failure) = app.screen().last_failure() {
        Span::styled(failure.to_string(), Style::default().fg(Color::Red))
    } else {
        let completed = store.completed_count();
        Span::styled(
            format!(
                "{} tasks | {} completed | {} pending",
                store.tasks().len(),
                completed,
                store.tasks().len() - completed
            ),
            Style::default().fg(Color::Green),
        )
    };

    let help = match app.focus() {
        Focus::Input => " Enter: add | Tab: list | Ctrl-C: quit ",
        Focus::List => {
            " Space: toggle | e: edit | d: delete | f/1-3: filter | r: refresh | a: add | q: quit "
        }
        Focus::Edit => " Enter: save | Tab: save & leave | Esc: cancel ",
    };

    let footer = Line::from(vec![
        status,
        Span::raw(" | "),
        Span::styled(help, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(footer), area);
}

/// Render toasts stacked in the top-right corner, newest at the bottom.
fn render_toasts(frame: &mut Frame, area: Rect, app: &App) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);

    for (i, toast) in app.screen().notifier().iter().enumerate() {
        let y = area.y + 1 + (i as u16) * 3;
        if y + 3 > area.bottom() {
            break;
        }
        let toast_area = Rect::new(x, y, width, 3);

        let (title, color) = match toast.kind {
            NoticeKind::Success => (" Done ", Color::Green),
            NoticeKind::Error => (" Error ", Color::Red),
            NoticeKind::Info => (" Info ", Color::Blue),
        };

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(toast.message.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(color)),
            ),
            toast_area,
        );
    }
}
