// src/notify/poller.rs

use crate::api::ApiClient;
use crate::core::board::{BoardRules, TicketBoard};
use crate::errors::AppResult;
use crate::models::Ticket;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::Instrument;

/// Where open tickets come from.
#[async_trait::async_trait]
pub trait TicketSource: Send + Sync {
    async fn open_tickets(&self) -> AppResult<Vec<Ticket>>;
}

#[async_trait::async_trait]
impl TicketSource for ApiClient {
    async fn open_tickets(&self) -> AppResult<Vec<Ticket>> {
        ApiClient::open_tickets(self).await
    }
}

/// Re-fetches open tickets on a fixed interval and publishes the board.
pub struct TicketPoller {
    source: Arc<dyn TicketSource>,
    rules: BoardRules,
    interval: Duration,
}

impl TicketPoller {
    pub fn new(source: Arc<dyn TicketSource>, rules: BoardRules, interval: Duration) -> Self {
        Self {
            source,
            rules,
            interval,
        }
    }

    /// Start polling on the current tokio runtime. The first fetch happens
    /// immediately.
    pub fn spawn(self) -> PollerHandle {
        let refresh = Arc::new(Notify::new());
        let (board_tx, board_rx) = watch::channel(None);
        let (stop_tx, stop_rx) = oneshot::channel();

        let task = tokio::spawn(
            self.run(refresh.clone(), board_tx, stop_rx)
                .instrument(tracing::debug_span!("ticket_poller")),
        );

        PollerHandle {
            refresh,
            board: board_rx,
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    async fn run(
        self,
        refresh: Arc<Notify>,
        board_tx: watch::Sender<Option<TicketBoard>>,
        mut stop_rx: oneshot::Receiver<()>,
    ) {
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = &mut stop_rx => break,
                _ = refresh.notified() => {
                    tracing::debug!("manual refresh");
                    ticker.reset();
                }
                _ = ticker.tick() => {}
            }

            let fetched = tokio::select! {
                biased;
                _ = &mut stop_rx => break,
                res = self.source.open_tickets() => res,
            };

            match fetched {
                Ok(tickets) => {
                    let board = self.rules.build(tickets);
                    tracing::debug!(visible = board.len(), "ticket board updated");
                    board_tx.send_replace(Some(board));
                }
                // keep the previous board, try again on the next tick
                Err(e) => tracing::warn!(error = %e, "ticket poll failed"),
            }
        }

        tracing::debug!("ticket poller stopped");
    }
}

/// Owner of a running poller. Dropping it cancels the task, so nothing is
/// published after teardown.
pub struct PollerHandle {
    refresh: Arc<Notify>,
    board: watch::Receiver<Option<TicketBoard>>,
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Poll now instead of waiting for the next tick.
    pub fn refresh(&self) {
        self.refresh.notify_one();
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<TicketBoard>> {
        self.board.clone()
    }

    pub fn latest(&self) -> Option<TicketBoard> {
        self.board.borrow().clone()
    }

    /// Stop polling and wait for the task to finish.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            stop.send(()).ok();
        }
        if let Some(task) = self.task.take() {
            task.await.ok();
        }
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
