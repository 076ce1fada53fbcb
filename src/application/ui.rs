#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use yansi::Paint;

use crate::domain::models::UiState;
use crate::domain::services::Pause;

const IDLE_TEXT: &str = "About to open that app? Press Enter first.";
const LOADING_TEXT: &str = "Thinking...";
const BUSY_TEXT: &str = "Still thinking, hang on.";
const HELP_TEXT: &str = "Press Enter (or f) for a question, q to quit.";

pub fn render(state: &UiState) -> String {
    match state {
        UiState::Idle => return IDLE_TEXT.to_string(),
        UiState::Loading => return LOADING_TEXT.to_string(),
        UiState::Success(question) => return question.to_string(),
        UiState::Error(message) => return format!("Error: {message}"),
    }
}

fn paint(state: &UiState) -> String {
    let text = render(state);
    match state {
        UiState::Idle => return Paint::new(text).dimmed().to_string(),
        UiState::Loading => return Paint::yellow(text).italic().to_string(),
        UiState::Success(_) => return Paint::cyan(text).bold().to_string(),
        UiState::Error(_) => return Paint::red(text).to_string(),
    }
}

/// What a single line of input asks the screen to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Fetch,
    Quit,
    Help,
}

impl Input {
    pub fn parse(line: &str) -> Input {
        match line.trim() {
            "" | "f" | "fetch" => return Input::Fetch,
            "q" | "quit" | "exit" => return Input::Quit,
            _ => return Input::Help,
        }
    }
}

/// Interactive screen. Renders every state change and turns Enter presses
/// into fetch triggers until the user quits or stdin closes.
pub async fn start(pause: Pause) -> Result<()> {
    println!("{}\n", Paint::new("Pause").bold().underline());

    let mut rx = pause.subscribe();
    println!("{}", paint(&rx.borrow_and_update()));

    let renderer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            println!("{}", paint(&state));
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Input::parse(&line) {
            Input::Fetch => {
                if pause.fetch().is_none() {
                    println!("{}", Paint::new(BUSY_TEXT).dimmed());
                }
            }
            Input::Quit => break,
            Input::Help => println!("{}", Paint::new(HELP_TEXT).dimmed()),
        }
    }

    renderer.abort();
    return Ok(());
}

/// One shot mode: fetch a single question and print it.
pub async fn ask(pause: Pause) -> Result<()> {
    if let Some(handle) = pause.fetch() {
        handle.await?;
    }

    match pause.state() {
        UiState::Success(question) => {
            println!("{question}");
            return Ok(());
        }
        UiState::Error(message) => bail!(message),
        state => bail!(format!("Question request ended in unexpected state {state:?}")),
    }
}
