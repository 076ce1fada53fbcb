use anyhow::Result;
use test_utils::completion_fixture;
use test_utils::empty_completion_fixture;

use super::ask;
use super::render;
use super::Input;
use crate::domain::models::FakeTransport;
use crate::domain::models::SamplingOptions;
use crate::domain::models::UiState;
use crate::domain::services::Pause;
use crate::domain::services::QuestionFetcher;

fn pause(transport: FakeTransport) -> Pause {
    return Pause::new(QuestionFetcher::new(
        Box::new(transport),
        SamplingOptions::default(),
    ));
}

#[test]
fn it_renders_every_state() {
    insta::assert_snapshot!(render(&UiState::Idle), @"About to open that app? Press Enter first.");
    insta::assert_snapshot!(render(&UiState::Loading), @"Thinking...");
    insta::assert_snapshot!(render(&UiState::Success("Why now?".to_string())), @"Why now?");
    insta::assert_snapshot!(render(&UiState::Error("No question found.".to_string())), @"Error: No question found.");
}

#[test]
fn it_parses_input() {
    assert_eq!(Input::parse(""), Input::Fetch);
    assert_eq!(Input::parse("  f \n"), Input::Fetch);
    assert_eq!(Input::parse("q"), Input::Quit);
    assert_eq!(Input::parse("exit"), Input::Quit);
    assert_eq!(Input::parse("hello"), Input::Help);
}

#[tokio::test]
async fn it_asks_once() -> Result<()> {
    let pause = pause(FakeTransport::responding(200, &completion_fixture("Is it worth it.")));
    ask(pause).await?;

    return Ok(());
}

#[tokio::test]
async fn it_fails_asking_with_the_user_facing_message() {
    let pause = pause(FakeTransport::responding(200, &empty_completion_fixture()));
    let err = ask(pause).await.unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"No question found.");
}
