use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Tabs},
};

use crate::app::{FeedApp, FeedMode};
use crate::models::FeedItem;

pub fn render(frame: &mut Frame, area: Rect, app: &mut FeedApp) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_subject_tabs(frame, chunks[0], app);
    render_search(frame, chunks[1], app);
    render_cards(frame, chunks[2], app);
    render_controls(frame, chunks[3], app.mode());
}

fn render_subject_tabs(frame: &mut Frame, area: Rect, app: &FeedApp) {
    let selected = app
        .subjects()
        .iter()
        .position(|label| label == app.filter().subject().label())
        .unwrap_or(0);

    let tabs = Tabs::new(app.subjects().iter().map(|label| Line::from(label.as_str())))
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Cyan).bold())
        .divider("·")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Video Snippets ")
                .title_style(Style::default().fg(Color::Cyan).bold()),
        );
    frame.render_widget(tabs, area);
}

fn render_search(frame: &mut Frame, area: Rect, app: &FeedApp) {
    let query = app.filter().query();
    let searching = app.mode() == FeedMode::Search;

    let line = if query.is_empty() && !searching {
        Line::from("/ Search videos...".fg(Color::DarkGray))
    } else {
        Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::DarkGray)),
            Span::styled(query, Style::default().fg(Color::White)),
        ])
    };

    let border = if searching {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(widget, area);

    if searching {
        let cursor_x = area.x + 3 + query.chars().count() as u16;
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn render_cards(frame: &mut Frame, area: Rect, app: &mut FeedApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Color::DarkGray)
        .padding(Padding::horizontal(1))
        .title(format!(" {} videos ", app.navigator().len()));
    let inner = block.inner(area);

    if app.navigator().is_empty() {
        app.center_active(inner.height);
        let widget = Paragraph::new("No videos match this filter")
            .alignment(Alignment::Center)
            .fg(Color::DarkGray)
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let scroll = app.center_active(inner.height);
    let active = app.navigator().active_index();
    let card_height = usize::from(app.card_height());

    let lines: Vec<Line> = app
        .navigator()
        .items()
        .iter()
        .enumerate()
        .flat_map(|(index, item)| card_lines(item, active == Some(index), card_height))
        .collect();

    let widget = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(widget, area);
}

fn card_lines(item: &FeedItem, is_active: bool, height: usize) -> Vec<Line<'_>> {
    let title_style = if is_active {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White)
    };
    let marker = if is_active { "▶ " } else { "  " };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(item.title.as_str(), title_style),
        ]),
        Line::from(Span::styled(
            format!("  {}  ·  {}  ·  {} views", item.subject, item.duration, item.views),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("  {}", item.thumbnail_url),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    lines.resize(height, Line::from(""));
    lines
}

fn render_controls(frame: &mut Frame, area: Rect, mode: FeedMode) {
    let text = match mode {
        FeedMode::Browse => "j/k move  ·  1-9 jump  ·  tab subject  ·  / search  ·  q quit",
        FeedMode::Search => "type to filter  ·  enter done  ·  esc clear",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> FeedItem {
        FeedItem {
            id: 1,
            title: "Solving Integration by Parts".to_string(),
            thumbnail_url: "https://example.com/thumb.jpg".to_string(),
            duration: "2:50".to_string(),
            views: "215".to_string(),
            subject: "Mathematics".to_string(),
        }
    }

    #[test]
    fn test_card_fills_its_height() {
        let item = item();
        assert_eq!(card_lines(&item, false, 5).len(), 5);
        assert_eq!(card_lines(&item, true, 2).len(), 2);
    }
}
