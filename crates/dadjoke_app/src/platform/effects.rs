use std::time::Duration;

use dadjoke_core::{Effect, FailureClass, FetchFailure, Joke, Msg};
use dadjoke_engine::{
    EngineError, EngineEvent, EngineHandle, FailureKind, FetchError, FetchSettings, JokeResponse,
};
use dadjoke_logging::{joke_info, joke_warn};

pub struct EffectRunner {
    engine: EngineHandle<JokeResponse>,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartFetch { request_id, url } => {
                    joke_info!("StartFetch request_id={} url={}", request_id, url);
                    self.engine.start(request_id, url);
                }
                Effect::CancelFetch { request_id } => {
                    joke_info!("CancelFetch request_id={}", request_id);
                    self.engine.cancel(request_id);
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine event, translated into a message.
    pub fn next_msg(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent<JokeResponse>) -> Msg {
    match event {
        EngineEvent::Completed { request_id, result } => {
            let result = match result {
                Ok(body) => Ok(map_joke(body)),
                Err(err) => {
                    joke_warn!("Request {} failed: {}", request_id, err);
                    Err(map_failure(&err))
                }
            };
            Msg::FetchCompleted { request_id, result }
        }
    }
}

fn map_joke(body: JokeResponse) -> Joke {
    Joke {
        id: body.id,
        joke: body.joke,
        status: body.status,
    }
}

fn map_failure(err: &FetchError) -> FetchFailure {
    let class = match err.kind {
        FailureKind::InvalidUrl => FailureClass::InvalidAddress,
        FailureKind::HttpStatus(code) => FailureClass::HttpStatus(code),
        FailureKind::Timeout => FailureClass::Timeout,
        FailureKind::TooLarge { .. } | FailureKind::Decode => FailureClass::Decode,
        FailureKind::Network => FailureClass::Network,
        FailureKind::Unknown => FailureClass::Unknown,
    };
    FetchFailure::new(class, err.to_string())
}
