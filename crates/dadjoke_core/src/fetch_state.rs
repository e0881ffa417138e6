use std::fmt;

/// Lifecycle of one logical request. Exactly one variant is active, so a
/// payload and a failure can never coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Failure(FetchFailure),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            FetchState::Success(payload) => Some(payload),
            FetchState::Loading | FetchState::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            FetchState::Failure(failure) => Some(failure),
            FetchState::Loading | FetchState::Success(_) => None,
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent<T> {
    Begin,
    Succeeded(T),
    Failed(FetchFailure),
}

/// Closed failure taxonomy. Anything the transport or decoder cannot
/// classify lands in `Unknown` rather than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    InvalidAddress,
    Network,
    Timeout,
    HttpStatus(u16),
    Decode,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub class: FailureClass,
    pub message: String,
}

impl FetchFailure {
    pub fn new(class: FailureClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Pure transition function. The previous state never leaks into the result:
/// every event fully determines the next state.
pub fn transition<T>(_state: FetchState<T>, event: FetchEvent<T>) -> FetchState<T> {
    match event {
        FetchEvent::Begin => FetchState::Loading,
        FetchEvent::Succeeded(payload) => FetchState::Success(payload),
        FetchEvent::Failed(failure) => FetchState::Failure(failure),
    }
}
