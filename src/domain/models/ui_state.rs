#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        return matches!(self, UiState::Loading);
    }
}
