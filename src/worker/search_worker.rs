//! Background search worker.
//!
//! Each submitted request runs on its own thread and is tagged with a
//! generation number. Submitting a new request makes every earlier one stale;
//! stale threads still run to completion, but their results are dropped when
//! they arrive instead of being reported.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, trace};

use crate::chess_errors::ChessErrors;
use crate::worker::search_protocol::{handle_search_request, SearchRequest, SearchResponse};

type TaggedResult = (u64, Result<SearchResponse, ChessErrors>);

pub struct SearchWorker {
    max_depth: u8,
    generation: Arc<AtomicU64>,
    pending: bool,
    results_tx: Sender<TaggedResult>,
    results_rx: Receiver<TaggedResult>,
}

impl SearchWorker {
    /// Requests deeper than `max_depth` are searched at `max_depth`.
    pub fn new(max_depth: u8) -> Self {
        let (results_tx, results_rx) = channel();
        Self {
            max_depth,
            generation: Arc::new(AtomicU64::new(0)),
            pending: false,
            results_tx,
            results_rx,
        }
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Generation of the most recent request.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether the latest request has not reported yet.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    /// Starts `request` on a new thread and supersedes any in-flight request.
    pub fn submit(&mut self, mut request: SearchRequest) -> u64 {
        if request.depth > self.max_depth {
            debug!("clamping depth {} to {}", request.depth, self.max_depth);
            request.depth = self.max_depth;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.pending = true;
        let results_tx = self.results_tx.clone();
        let current = Arc::clone(&self.generation);

        thread::spawn(move || {
            trace!("generation {generation} started");
            let result = handle_search_request(&request);
            if current.load(Ordering::SeqCst) != generation {
                trace!("generation {generation} finished after being superseded");
            }
            // Closed channel: the worker was dropped.
            let _ = results_tx.send((generation, result));
        });

        generation
    }

    /// Blocks until the latest request reports. Returns `None` when nothing is
    /// pending.
    pub fn recv_current(&mut self) -> Option<Result<SearchResponse, ChessErrors>> {
        while self.pending {
            let Ok(tagged) = self.results_rx.recv() else {
                return None;
            };
            if let Some(result) = self.accept(tagged) {
                return Some(result);
            }
        }
        None
    }

    /// Like [`Self::recv_current`] but waits at most `timeout`.
    pub fn recv_current_timeout(
        &mut self,
        timeout: Duration,
    ) -> Option<Result<SearchResponse, ChessErrors>> {
        while self.pending {
            match self.results_rx.recv_timeout(timeout) {
                Ok(tagged) => {
                    if let Some(result) = self.accept(tagged) {
                        return Some(result);
                    }
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return None,
            }
        }
        None
    }

    fn accept(
        &mut self,
        (generation, result): TaggedResult,
    ) -> Option<Result<SearchResponse, ChessErrors>> {
        if generation != self.generation() {
            debug!("dropping stale result of generation {generation}");
            return None;
        }
        self.pending = false;
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::SearchWorker;
    use std::time::Duration;

    use crate::worker::search_protocol::SearchRequest;

    fn request(fen: &str, depth: u8) -> SearchRequest {
        SearchRequest {
            position_fen: fen.to_owned(),
            depth,
        }
    }

    #[test]
    fn reports_the_submitted_search() {
        let mut worker = SearchWorker::new(3);
        assert!(worker.recv_current().is_none());

        let generation = worker.submit(request("7k/8/8/3q4/8/8/8/K2R4 w - - 0 0", 1));
        assert_eq!(generation, 1);
        assert!(worker.has_pending());

        let response = worker
            .recv_current()
            .expect("a search is pending")
            .expect("search should run")
            .expect("white has moves");
        assert_eq!(response.chess_move.end_square, 35);
        assert!(!worker.has_pending());
    }

    #[test]
    fn stale_results_are_discarded() {
        let mut worker = SearchWorker::new(3);

        worker.submit(request("7k/8/8/3q4/8/8/8/K2R4 w - - 0 0", 1));
        worker.submit(request("r1K5/r7/8/8/8/8/8/7k w - - 0 0", 1));

        let response = worker
            .recv_current()
            .expect("a search is pending")
            .expect("search should run");
        assert_eq!(response, None);
        assert_eq!(worker.generation(), 2);
        assert!(worker.recv_current().is_none());
    }

    #[test]
    fn deep_requests_are_clamped() {
        let mut worker = SearchWorker::new(1);
        assert_eq!(worker.max_depth(), 1);
        worker.submit(request("6k1/Q7/6K1/8/8/8/8/8 w - - 0 0", 40));

        let response = worker
            .recv_current_timeout(Duration::from_secs(30))
            .expect("clamped search finishes quickly")
            .expect("search should run")
            .expect("white has moves");
        assert_eq!(response.evaluation, crate::search::board_scoring::MATE_SCORE);
    }

    #[test]
    fn bad_fen_comes_back_as_an_error() {
        let mut worker = SearchWorker::new(2);
        worker.submit(request("not a fen", 1));
        assert!(worker.recv_current().expect("a search is pending").is_err());
    }
}
