#[cfg(test)]
#[path = "prompt_test.rs"]
mod tests;

use super::ChatMessage;
use super::Role;

const SYSTEM_PROMPT: &str = "You write one short self-reflection question. Reply with exactly one complete question that ends with a question mark. Do not add a greeting, preamble, quotes, explanation or any other filler.";

const USER_PROMPT: &str = "I'm about to open a social media app out of habit. Ask me one question that helps me pause and notice whether I actually want to open it right now.";

pub struct Prompt {}

impl Prompt {
    /// The system and user messages sent with every request, in that order.
    pub fn messages() -> Vec<ChatMessage> {
        return vec![
            ChatMessage::new(Role::System, SYSTEM_PROMPT),
            ChatMessage::new(Role::User, USER_PROMPT),
        ];
    }
}
