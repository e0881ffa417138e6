//! Dadjoke core: pure fetch state machine and view-model helpers.
mod effect;
mod fetch_state;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use fetch_state::{transition, FailureClass, FetchEvent, FetchFailure, FetchState};
pub use msg::Msg;
pub use state::{AppState, Joke, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, ViewStatus};
