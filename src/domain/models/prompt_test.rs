use super::Prompt;
use crate::domain::models::Role;

#[test]
fn it_builds_a_system_then_user_prompt() {
    let messages = Prompt::messages();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[1].role, Role::User);
}

#[test]
fn it_fixes_the_output_contract() {
    let system = &Prompt::messages()[0].content;

    assert!(system.contains("exactly one complete question"));
    assert!(system.contains("question mark"));
}

#[test]
fn it_is_deterministic() {
    assert_eq!(Prompt::messages(), Prompt::messages());
}

#[test]
fn it_describes_the_situation() {
    insta::assert_snapshot!(Prompt::messages()[1].content, @"I'm about to open a social media app out of habit. Ask me one question that helps me pause and notice whether I actually want to open it right now.");
}
