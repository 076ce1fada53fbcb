mod chat;
mod fetch_error;
mod prompt;
mod transport;
mod ui_state;

pub use chat::*;
pub use fetch_error::*;
pub use prompt::*;
pub use transport::*;
pub use ui_state::*;

#[cfg(test)]
mod fake_transport;
#[cfg(test)]
pub use fake_transport::*;
