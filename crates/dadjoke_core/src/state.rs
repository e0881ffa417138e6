use crate::fetch_state::{transition, FetchEvent, FetchState};
use crate::view_model::{AppViewModel, ViewStatus};

pub type RequestId = u64;

/// Decoded joke payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub id: String,
    pub joke: String,
    pub status: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveRequest {
    address: String,
    request_id: RequestId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    active: Option<ActiveRequest>,
    fetch: Option<FetchState<Joke>>,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let status = match &self.fetch {
            None => ViewStatus::Idle,
            Some(FetchState::Loading) => ViewStatus::Loading,
            Some(FetchState::Success(joke)) => ViewStatus::Joke(joke.joke.clone()),
            Some(FetchState::Failure(failure)) => ViewStatus::Error(failure.message.clone()),
        };
        AppViewModel {
            address: self.address().map(ToOwned::to_owned),
            status,
            dirty: self.dirty,
        }
    }

    pub fn fetch_state(&self) -> Option<&FetchState<Joke>> {
        self.fetch.as_ref()
    }

    pub fn address(&self) -> Option<&str> {
        self.active.as_ref().map(|active| active.address.as_str())
    }

    pub fn active_request(&self) -> Option<RequestId> {
        self.active.as_ref().map(|active| active.request_id)
    }

    /// True while a request has been started and not yet resolved.
    pub fn in_flight(&self) -> Option<RequestId> {
        match self.fetch {
            Some(FetchState::Loading) => self.active_request(),
            _ => None,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn begin(&mut self, address: String) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.active = Some(ActiveRequest {
            address,
            request_id,
        });
        self.apply(FetchEvent::Begin);
        request_id
    }

    pub(crate) fn apply(&mut self, event: FetchEvent<Joke>) {
        let current = self.fetch.take().unwrap_or_default();
        self.fetch = Some(transition(current, event));
        self.dirty = true;
    }

    pub(crate) fn reset(&mut self) {
        self.active = None;
        self.fetch = None;
        self.dirty = true;
    }
}
