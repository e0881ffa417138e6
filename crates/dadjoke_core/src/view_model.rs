#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Joke(String),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub address: Option<String>,
    pub status: ViewStatus,
    pub dirty: bool,
}
