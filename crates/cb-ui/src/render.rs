//! Render functions

use cb_core::comment::{Comment, LoadState, SortMode};
use ratatui::text::Line as TextLine;
use ratatui::{prelude::*, widgets::*};

use crate::app::{AppMode, Board};
use crate::theme::Theme;

/// Draw the whole view
pub fn draw(frame: &mut Frame, board: &Board, theme: &Theme) {
    let area = frame.area();
    let editing = board.state.mode == AppMode::Insert;

    let mut constraints = vec![Constraint::Length(1), Constraint::Min(3)];
    if editing {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_tab_bar(frame, chunks[0], board, theme);
    render_comment_list(frame, chunks[1], board, theme);
    if editing {
        render_comment_editor(frame, chunks[2], board, theme);
    }
    render_status_bar(frame, chunks[chunks.len() - 1], board);

    if board.state.mode == AppMode::Help {
        render_help(frame, area);
    }
}

fn render_tab_bar(frame: &mut Frame, area: Rect, board: &Board, theme: &Theme) {
    let active = board.store().sort_mode();

    let mut spans = vec![
        Span::styled(" Comments ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("{} ", board.store().len()),
            Style::default().fg(theme.meta),
        ),
        Span::raw("  "),
    ];

    for mode in SortMode::ALL {
        let style = if mode == active {
            Style::default()
                .fg(theme.active_tab)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.inactive_tab)
        };
        spans.push(Span::styled(mode.label(), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(TextLine::from(spans)), area);
}

fn render_comment_list(frame: &mut Frame, area: Rect, board: &Board, theme: &Theme) {
    let border = if board.state.mode == AppMode::Insert {
        theme.unfocus_border
    } else {
        theme.focus_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    match board.store().load_state() {
        LoadState::Pending => {
            frame.render_widget(Paragraph::new("Loading comments...").block(block), area);
            return;
        }
        LoadState::Unavailable(reason) => {
            let text = vec![
                TextLine::from(Span::styled(
                    "Comment list unavailable",
                    Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
                )),
                TextLine::from(""),
                TextLine::from(reason.as_str()),
                TextLine::from(""),
                TextLine::from(Span::styled(
                    "Press r to retry",
                    Style::default().fg(theme.meta),
                )),
            ];
            frame.render_widget(
                Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
                area,
            );
            return;
        }
        LoadState::Ready => {}
    }

    if board.store().is_empty() {
        frame.render_widget(
            Paragraph::new("No comments yet. Press c to write one.").block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = board
        .store()
        .comments()
        .iter()
        .map(|comment| comment_item(comment, board, theme))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(theme.selection))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(board.state.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn comment_item<'a>(comment: &'a Comment, board: &Board, theme: &Theme) -> ListItem<'a> {
    let mut header = Vec::new();
    if board.options().show_avatars {
        header.push(Span::styled(
            format!("[{}] ", comment.author.initial()),
            Style::default().fg(theme.meta),
        ));
    }
    header.push(Span::styled(
        comment.author.display_name.as_str(),
        Style::default().fg(theme.author).add_modifier(Modifier::BOLD),
    ));

    let mut meta = vec![
        Span::raw("    "),
        Span::styled(comment.display_time(), Style::default().fg(theme.meta)),
        Span::styled(
            format!("  Likes: {}", comment.like_count),
            Style::default().fg(theme.meta),
        ),
    ];
    if comment.is_authored_by(board.user()) {
        meta.push(Span::styled("  [x] delete", Style::default().fg(theme.delete)));
    }

    ListItem::new(vec![
        TextLine::from(header),
        TextLine::from(vec![Span::raw("    "), Span::raw(comment.text.as_str())]),
        TextLine::from(meta),
        TextLine::from(""),
    ])
}

fn render_comment_editor(frame: &mut Frame, area: Rect, board: &Board, theme: &Theme) {
    let block = Block::default()
        .title("Publish a friendly comment (Enter to publish, Esc to close)")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.focus_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let state = &board.state;
    frame.render_widget(Paragraph::new(state.editor_content.as_str()), inner);

    // CJK characters are two columns wide
    let display_width: usize = state
        .editor_content
        .chars()
        .take(state.editor_cursor)
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum();

    let cursor_x = inner
        .x
        .saturating_add(display_width as u16)
        .min(inner.x + inner.width.saturating_sub(1));
    frame.set_cursor_position((cursor_x, inner.y));
}

fn render_status_bar(frame: &mut Frame, area: Rect, board: &Board) {
    let mode = match board.state.mode {
        AppMode::Normal => "NORMAL",
        AppMode::Insert => "INSERT",
        AppMode::Help => "HELP",
    };

    let text = board.state.message.clone().unwrap_or_else(|| {
        format!(
            " {} | {} | {} comments | {} | ? for help ",
            mode,
            board.store().sort_mode().label(),
            board.store().len(),
            board.user().as_author().display_name,
        )
    });

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let text = vec![
        TextLine::from(Span::styled(
            "comment-board",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(Span::styled("Tabs", Style::default().fg(Color::Yellow))),
        TextLine::from("  h           Hottest (most likes first)"),
        TextLine::from("  t           Latest (newest first)"),
        TextLine::from("  Tab         Switch tab"),
        TextLine::from(""),
        TextLine::from(Span::styled("List", Style::default().fg(Color::Yellow))),
        TextLine::from("  j/k         Move selection"),
        TextLine::from("  g/G         Go to top/bottom"),
        TextLine::from("  c           Write a comment"),
        TextLine::from("  x           Delete your selected comment"),
        TextLine::from("  r           Retry loading the list"),
        TextLine::from(""),
        TextLine::from(Span::styled("Other", Style::default().fg(Color::Yellow))),
        TextLine::from("  q           Quit"),
        TextLine::from("  ?           Show this help"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        help_area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup[1])[1]
}
