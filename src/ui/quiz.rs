use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::QuizApp;
use crate::models::Question;

use super::option_label;

pub fn render(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let session = app.session();
    let question = session.current_question();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], &question.text);
    render_options(
        frame,
        chunks[2],
        question,
        app.option_cursor(),
        session.answer_for(session.current_index()),
    );
    render_controls(frame, chunks[3], app);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let session = app.session();
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let position = Paragraph::new(format!(
        "Question {} of {}",
        session.current_index() + 1,
        session.total_questions()
    ))
    .fg(Color::DarkGray);
    let answered = Paragraph::new(format!("{} answered", session.answered_count()))
        .alignment(Alignment::Right)
        .fg(Color::Gray);

    frame.render_widget(position, halves[0]);
    frame.render_widget(answered, halves[1]);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    cursor: usize,
    recorded: Option<usize>,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_highlighted = index == cursor;
        let is_recorded = recorded == Some(index);
        let style = if is_recorded {
            Style::default().fg(Color::Green).bold()
        } else if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let check = if is_recorded { "[x]" } else { "[ ]" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, check), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let session = app.session();
    let next = if session.is_last_question() {
        "finish"
    } else {
        "next"
    };

    let mut spans = vec![Span::raw(format!(
        "j/k navigate  ·  enter select  ·  p back  ·  n {}  ·  q quit",
        next
    ))];
    if !session.can_advance() {
        spans.push(Span::styled(
            "  (answer to continue)",
            Style::default().fg(Color::Yellow),
        ));
    }

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
