mod normalizer;
mod pause;
mod question_fetcher;

pub use normalizer::*;
pub use pause::*;
pub use question_fetcher::*;
