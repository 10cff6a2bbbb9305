use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::QuizApp;
use crate::quiz::{QuestionOutcome, ResultSummary};

use super::option_label;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &QuizApp) {
    let summary = app.summary();
    let grade_color = get_grade_color(summary.percentage());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &summary, app.progress_steps(), grade_color);
    render_question_breakdown(frame, chunks[2], &summary.outcomes, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn progress_dots(filled: usize, steps: usize) -> String {
    (0..steps)
        .map(|i| if i < filled { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    summary: &ResultSummary,
    steps: usize,
    grade_color: Color,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({:.0}%)",
                summary.score,
                summary.total,
                summary.percentage()
            ),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Span::styled(
            progress_dots(summary.progress_dots(steps), steps),
            Style::default().fg(grade_color),
        )),
        Line::from(""),
        Line::from(summary.feedback().message().fg(Color::Gray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    outcomes: &[QuestionOutcome],
    scroll: usize,
) {
    let lines: Vec<Line> = outcomes
        .iter()
        .map(|outcome| {
            let (symbol, color) = if outcome.is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };
            let chosen = outcome
                .chosen
                .map(option_label)
                .unwrap_or_else(|| "-".to_string());

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", outcome.position + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    truncate_question(&outcome.text),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  {} → {}", chosen, option_label(outcome.correct_answer)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r retry  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
