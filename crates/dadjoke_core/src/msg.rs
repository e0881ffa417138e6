#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The consumer pointed the orchestrator at a (possibly new) address.
    AddressChanged(String),
    /// Re-fetch the current address.
    RefreshRequested,
    /// Engine completion for a request.
    FetchCompleted {
        request_id: crate::RequestId,
        result: Result<crate::Joke, crate::FetchFailure>,
    },
    /// Tear the orchestrator down.
    Shutdown,
}
