use dadjoke_core::{update, AppState, FailureClass, FetchFailure, Joke, Msg, ViewStatus};

#[test]
fn view_tracks_each_fetch_state() {
    let (state, _) = update(
        AppState::new(),
        Msg::AddressChanged("https://icanhazdadjoke.com/".to_string()),
    );
    let view = state.view();
    assert_eq!(view.status, ViewStatus::Loading);
    assert_eq!(view.address.as_deref(), Some("https://icanhazdadjoke.com/"));
    assert!(view.dirty);

    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            request_id: 1,
            result: Ok(Joke {
                id: "R7UfaahVfFd".to_string(),
                joke: "My dog used to chase people on a bike a lot.".to_string(),
                status: 200,
            }),
        },
    );
    assert_eq!(
        state.view().status,
        ViewStatus::Joke("My dog used to chase people on a bike a lot.".to_string())
    );

    let (state, _) = update(state, Msg::RefreshRequested);
    let (state, _) = update(
        state,
        Msg::FetchCompleted {
            request_id: 2,
            result: Err(FetchFailure::new(FailureClass::HttpStatus(503), "http status 503")),
        },
    );
    assert_eq!(
        state.view().status,
        ViewStatus::Error("http status 503".to_string())
    );
}
