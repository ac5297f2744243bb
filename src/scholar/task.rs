use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

use super::{fetch_publications, PublicationRecord, ScholarSource};
use crate::error::FetchError;

// ---------------------------------------------------------------------------
// Fetch state seen by the Publications view
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Pending,
    Loaded(Vec<PublicationRecord>),
    Failed(FetchError),
}

impl FetchState {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}

type FetchResult = Result<Vec<PublicationRecord>, FetchError>;

// ---------------------------------------------------------------------------
// Background fetch, polled once per frame
// ---------------------------------------------------------------------------

/// Runs one publications fetch on a worker thread.
///
/// Starting a new fetch (or cancelling) drops the previous receiver, so a
/// superseded worker finishes its requests and its result is discarded.
#[derive(Default)]
pub struct PublicationsTask {
    state: FetchState,
    rx: Option<Receiver<FetchResult>>,
}

impl PublicationsTask {
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn start(&mut self, source: Arc<dyn ScholarSource>, author_id: String, limit: usize) {
        let (tx, rx) = mpsc::channel();
        log::info!("Fetching publications for '{author_id}' (limit {limit})");

        let spawned = thread::Builder::new()
            .name("publications".into())
            .spawn(move || {
                let result = fetch_publications(source.as_ref(), &author_id, limit);
                // Receiver gone means the view moved on.
                let _ = tx.send(result);
            });

        match spawned {
            Ok(_) => {
                self.rx = Some(rx);
                self.state = FetchState::Pending;
            }
            Err(e) => {
                log::error!("Could not start publications worker: {e}");
                self.rx = None;
                self.state = FetchState::Failed(FetchError::FetchFailed(e.to_string()));
            }
        }
    }

    /// Abandon any in-flight fetch and forget the last result.
    pub fn reset(&mut self) {
        self.rx = None;
        self.state = FetchState::Idle;
    }

    /// Pick up a finished result. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = &self.rx else {
            return false;
        };
        let next = match rx.try_recv() {
            Ok(Ok(pubs)) => {
                log::info!("Fetched {} publications", pubs.len());
                FetchState::Loaded(pubs)
            }
            Ok(Err(e)) => {
                log::error!("Publications fetch failed: {e}");
                FetchState::Failed(e)
            }
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                FetchState::Failed(FetchError::FetchFailed("publications worker exited".into()))
            }
        };
        self.rx = None;
        self.state = next;
        true
    }
}
