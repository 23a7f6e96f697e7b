//! Declarative description of what each screen shows.
//!
//! `render` turns the app state into a `View` without touching the terminal,
//! so screens can be checked in tests and drawn by any backend.

use crate::app::{App, Screen};

pub const GAME_TITLE: &str = "MindField";
pub const GAME_RULES: &str = "Make your way through a minefield of questions, \
     in which you must get the right answer or you lose! Do you have what it takes?";

/// Score bar shown on every screen. The home screen has no running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub best: u32,
    pub current: Option<u32>,
}

/// A key the player can press and what it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub key: &'static str,
    pub label: &'static str,
}

const fn control(key: &'static str, label: &'static str) -> Control {
    Control { key, label }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Home {
        title: &'static str,
        rules: &'static str,
        notice: Option<String>,
    },
    Loading {
        message: &'static str,
    },
    Question {
        category: String,
        value: Option<u32>,
        prompt: String,
        input: String,
    },
    Correct {
        headline: &'static str,
        message: String,
    },
    GameOver {
        headline: &'static str,
        message: String,
        answer: String,
    },
    FetchFailed {
        headline: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub header: Header,
    pub body: Body,
    pub controls: Vec<Control>,
}

fn points(count: u32) -> String {
    if count == 1 {
        "1 point".to_string()
    } else {
        format!("{} points", count)
    }
}

/// Describe the current screen.
pub fn render(app: &App) -> View {
    let best = app.best_score();
    let running = Header {
        best,
        current: Some(app.score()),
    };

    match app.screen() {
        Screen::Home { notice } => View {
            header: Header {
                best,
                current: None,
            },
            body: Body::Home {
                title: GAME_TITLE,
                rules: GAME_RULES,
                notice: notice.clone(),
            },
            controls: vec![control("enter", "start game"), control("q", "quit")],
        },
        Screen::Loading => View {
            header: running,
            body: Body::Loading {
                message: "Fetching a question...",
            },
            controls: Vec::new(),
        },
        Screen::Playing { question, input } => View {
            header: running,
            body: Body::Question {
                category: question.category_title.to_uppercase(),
                value: question.value,
                prompt: question.prompt.clone(),
                input: input.clone(),
            },
            controls: vec![control("enter", "submit"), control("esc", "end game")],
        },
        Screen::Correct => View {
            header: running,
            body: Body::Correct {
                headline: "CORRECT",
                message: format!("You earned {}.", points(1)),
            },
            controls: vec![
                control("enter", "next question"),
                control("e", "end game"),
                control("q", "quit"),
            ],
        },
        Screen::GameOver { score, answer } => View {
            header: running,
            body: Body::GameOver {
                headline: "GAME OVER",
                message: format!("You scored {}.", points(*score)),
                answer: answer.clone(),
            },
            controls: vec![control("enter", "try again"), control("q", "quit")],
        },
        Screen::FetchFailed { message } => View {
            header: running,
            body: Body::FetchFailed {
                headline: "CONNECTION PROBLEM",
                message: message.clone(),
            },
            controls: vec![
                control("r", "retry"),
                control("esc", "home"),
                control("q", "quit"),
            ],
        },
    }
}
