mod feed;
mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{FeedApp, QuizApp};
use crate::models::AppState;

pub fn render_quiz(frame: &mut Frame, app: &QuizApp) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area, app.session().total_questions()),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

/// Takes the app mutably: the feed view re-centers the active card once the
/// list height is known.
pub fn render_feed(frame: &mut Frame, app: &mut FeedApp) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);
    feed::render(frame, area, app);
}

/// `A`, `B`, ... for the first 26 options, then 1-based numbers.
fn option_label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::{parse_feed, parse_questions};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(0), "A");
        assert_eq!(option_label(3), "D");
        assert_eq!(option_label(26), "27");
    }

    #[test]
    fn test_quiz_screens_render() {
        let questions = parse_questions(include_str!("../../assets/questions.json")).unwrap();
        let mut app = QuizApp::with_questions(questions, &Config::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render_quiz(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("5 Questions"));

        app.start_quiz();
        terminal.draw(|frame| render_quiz(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("Question 1 of 5"));

        for answer in [1, 1, 2, 2, 1] {
            app.select_option(answer).unwrap();
            app.next_question();
        }
        terminal.draw(|frame| render_quiz(frame, &app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("5 / 5"));
        assert!(text.contains("Perfect!"));
    }

    #[test]
    fn test_feed_render_centers_active_card() {
        let items = parse_feed(include_str!("../../assets/feed.json")).unwrap();
        let mut app = FeedApp::with_items(items, &Config::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|frame| render_feed(frame, &mut app)).unwrap();
        assert_eq!(app.scroll_top(), 0);
        assert!(screen_text(&terminal).contains("Understanding Quantum Superposition"));

        app.set_active(7);
        terminal.draw(|frame| render_feed(frame, &mut app)).unwrap();
        assert!(app.scroll_top() > 0);
        assert!(screen_text(&terminal).contains("Supply and Demand Equilibrium"));
    }
}
