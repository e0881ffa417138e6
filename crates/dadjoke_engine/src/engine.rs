use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dadjoke_logging::{joke_debug, joke_info, joke_warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::decode::JsonPayload;
use crate::fetch::{fetch_json, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError, RequestId};

enum EngineCommand {
    Start { request_id: RequestId, url: String },
    Cancel { request_id: RequestId },
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] FetchError),
}

struct InFlight {
    token: CancellationToken,
    task: JoinHandle<()>,
}

/// Runs requests on a background tokio runtime. Each request can be
/// cancelled by id; a cancelled request never emits an event.
pub struct EngineHandle<T> {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent<T>>,
}

impl<T: JsonPayload> EngineHandle<T> {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        let fetcher = ReqwestFetcher::new(settings)?;
        Self::with_fetcher(Arc::new(fetcher))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("dadjoke-engine".to_string())
            .spawn(move || {
                let mut in_flight: HashMap<RequestId, InFlight> = HashMap::new();
                while let Ok(command) = cmd_rx.recv() {
                    in_flight.retain(|_, entry| !entry.task.is_finished());
                    match command {
                        EngineCommand::Start { request_id, url } => {
                            joke_info!("Start request_id={} url={}", request_id, url);
                            let token = CancellationToken::new();
                            let task = runtime.spawn(run_request::<T>(
                                fetcher.clone(),
                                request_id,
                                url,
                                token.clone(),
                                event_tx.clone(),
                            ));
                            in_flight.insert(request_id, InFlight { token, task });
                        }
                        EngineCommand::Cancel { request_id } => {
                            if let Some(entry) = in_flight.remove(&request_id) {
                                joke_debug!("Cancel request_id={}", request_id);
                                entry.token.cancel();
                            }
                        }
                    }
                }
                for entry in in_flight.values() {
                    entry.token.cancel();
                }
                joke_debug!("engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn start(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Start {
            request_id,
            url: url.into(),
        });
    }

    pub fn cancel(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request_id });
    }

    pub fn try_recv(&self) -> Option<EngineEvent<T>> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent<T>> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_request<T: JsonPayload>(
    fetcher: Arc<dyn Fetcher>,
    request_id: RequestId,
    url: String,
    token: CancellationToken,
    event_tx: mpsc::Sender<EngineEvent<T>>,
) {
    let task = tokio::spawn(async move { fetch_json::<T>(fetcher.as_ref(), &url).await });
    let abort = task.abort_handle();

    let joined = tokio::select! {
        _ = token.cancelled() => {
            abort.abort();
            joke_debug!("request_id={} cancelled before completion", request_id);
            return;
        }
        joined = task => joined,
    };

    let result = match joined {
        Ok(result) => result,
        Err(err) => {
            joke_warn!("request_id={} task failed: {}", request_id, err);
            Err(FetchError::new(FailureKind::Unknown, err.to_string()))
        }
    };

    if token.is_cancelled() {
        return;
    }
    let _ = event_tx.send(EngineEvent::Completed { request_id, result });
}
