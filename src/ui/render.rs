//! Drawing: header with the search input, body with the story list and
//! loading/error feedback, footer with key hints.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::api::{Story, StoryClient};
use crate::prefs::PreferenceStore;
use crate::ui::app::App;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, HN_ORANGE, ROW_META, STATUS_ERROR,
};

pub fn draw<C: StoryClient, S: PreferenceStore>(frame: &mut Frame<'_>, app: &App<C, S>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    draw_search_input(frame, app, header);
    frame.render_widget(Clear, body);
    draw_body(frame, app, body);
    draw_footer(frame, footer);
}

fn draw_search_input<C: StoryClient, S: PreferenceStore>(
    frame: &mut Frame<'_>,
    app: &App<C, S>,
    area: Rect,
) {
    let block = Block::default()
        .title(Span::styled(
            " My Hacker Stories ",
            Style::default().fg(HN_ORANGE).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(ROW_META)),
        Span::styled(app.query(), Style::default().fg(HEADER_TEXT)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    // The input line is the only focus target; park the cursor there.
    if inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x + ("Search: ".len() + app.query().len()).min(inner.width as usize - 1) as u16;
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn draw_body<C: StoryClient, S: PreferenceStore>(frame: &mut Frame<'_>, app: &App<C, S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let state = app.stories();

    // The loading placeholder replaces the list entirely; an error
    // banner sits above the stale list, which stays visible.
    if state.is_loading {
        frame.render_widget(
            Paragraph::new(Span::styled("Loading ...", Style::default().fg(ROW_META))),
            inner,
        );
        return;
    }

    let mut list_area = inner;
    if state.is_error {
        let banner = Rect { height: 1, ..inner };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Something went wrong ...",
                Style::default().fg(STATUS_ERROR),
            )),
            banner,
        );
        list_area = Rect {
            y: inner.y + 1,
            height: inner.height.saturating_sub(1),
            ..inner
        };
    }

    let items: Vec<ListItem> = app.visible_stories().iter().map(story_row).collect();
    let list = List::new(items)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if !app.visible_stories().is_empty() {
        list_state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn story_row(story: &Story) -> ListItem<'_> {
    let meta = format!(
        "  by {} · {} comments · {} points",
        story.author, story.comment_count, story.points
    );
    ListItem::new(Line::from(vec![
        Span::styled(story.title.as_str(), Style::default().fg(HEADER_TEXT)),
        Span::styled(meta, Style::default().fg(ROW_META)),
    ]))
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("Enter", Style::default().fg(HN_ORANGE)),
        Span::styled(" search  ", Style::default().fg(ROW_META)),
        Span::styled("↑/↓", Style::default().fg(HN_ORANGE)),
        Span::styled(" select  ", Style::default().fg(ROW_META)),
        Span::styled("Ctrl-D", Style::default().fg(HN_ORANGE)),
        Span::styled(" dismiss  ", Style::default().fg(ROW_META)),
        Span::styled("Esc", Style::default().fg(HN_ORANGE)),
        Span::styled(" quit", Style::default().fg(ROW_META)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(hints).block(block), area);
}
