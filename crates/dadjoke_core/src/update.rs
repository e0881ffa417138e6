use crate::{AppState, Effect, FetchEvent, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AddressChanged(raw) => {
            let address = raw.trim();
            if address.is_empty() || state.address() == Some(address) {
                return (state, Vec::new());
            }
            restart(&mut state, address.to_owned())
        }
        Msg::RefreshRequested => match state.address() {
            Some(address) => {
                let address = address.to_owned();
                restart(&mut state, address)
            }
            None => Vec::new(),
        },
        Msg::FetchCompleted { request_id, result } => {
            // Results from superseded requests must never overwrite the latest one.
            if state.in_flight() != Some(request_id) {
                return (state, Vec::new());
            }
            let event = match result {
                Ok(joke) => FetchEvent::Succeeded(joke),
                Err(failure) => FetchEvent::Failed(failure),
            };
            state.apply(event);
            Vec::new()
        }
        Msg::Shutdown => {
            let effects = cancel_in_flight(&state);
            if state.address().is_some() {
                state.reset();
            }
            effects
        }
    };

    (state, effects)
}

fn restart(state: &mut AppState, address: String) -> Vec<Effect> {
    let mut effects = cancel_in_flight(state);
    let request_id = state.begin(address.clone());
    effects.push(Effect::StartFetch {
        request_id,
        url: address,
    });
    effects
}

fn cancel_in_flight(state: &AppState) -> Vec<Effect> {
    state
        .in_flight()
        .map(|request_id| Effect::CancelFetch { request_id })
        .into_iter()
        .collect()
}
