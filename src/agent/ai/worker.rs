//! Background search.
//!
//! A search at expert depth takes long enough that whoever serves input must
//! not wait on it. [`SearchWorker::spawn`] runs it on the rayon pool and hands
//! back a [`SearchHandle`] to poll, wait on or cancel. Results carry the
//! [`PositionKey`](crate::game_repr::PositionKey) they were computed for, so
//! [`Game::apply_search_result`](crate::game_repr::Game::apply_search_result)
//! refuses them once the game has moved on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, TryRecvError};
use log::debug;

use crate::config::SearchConfig;
use crate::error::{ChessError, Result};
use crate::game_repr::{Color, GameState, PositionKey};

use super::search::{get_best_move_cancellable, SearchResult};

pub struct SearchWorker;

impl SearchWorker {
    /// Start searching `state` for `ai_color` on a pool thread.
    ///
    /// The state is an owned snapshot; the live game can keep changing while
    /// the search runs.
    pub fn spawn(state: GameState, ai_color: Color, config: SearchConfig) -> SearchHandle {
        let (tx, rx) = bounded(1);
        let cancel = Arc::new(AtomicBool::new(false));
        let key = state.position_key();

        let flag = Arc::clone(&cancel);
        rayon::spawn(move || {
            let result = get_best_move_cancellable(&state, ai_color, &config, &flag);
            if let Err(ChessError::SearchCancelled) = result {
                debug!("search for {:?} cancelled", key);
            }
            // The handle may already be gone; nobody is waiting then
            let _ = tx.send(result);
        });

        SearchHandle { rx, cancel, key }
    }
}

/// The caller's end of a running search. Dropping it cancels the search.
pub struct SearchHandle {
    rx: Receiver<Result<SearchResult>>,
    cancel: Arc<AtomicBool>,
    key: PositionKey,
}

impl SearchHandle {
    /// Position the search was started from
    pub fn key(&self) -> PositionKey {
        self.key
    }

    /// Ask the search to stop. It answers with `SearchCancelled` unless it
    /// had already finished.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// The result, if the search has finished
    pub fn try_result(&self) -> Option<Result<SearchResult>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ChessError::WorkerDisconnected)),
        }
    }

    /// Wait at most `timeout` for the result
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Result<SearchResult>> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(ChessError::WorkerDisconnected)),
        }
    }

    /// Block until the search finishes
    pub fn wait(self) -> Result<SearchResult> {
        self.rx.recv().map_err(|_| ChessError::WorkerDisconnected)?
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
