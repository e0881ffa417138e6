#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartFetch {
        request_id: crate::RequestId,
        url: String,
    },
    CancelFetch {
        request_id: crate::RequestId,
    },
}
