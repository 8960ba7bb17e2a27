use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEventKind,
};
use futures::StreamExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::trace;

use crate::animation::FrameRequest;
use crate::error::BarSwapError;

/// Application-level events
#[derive(Debug, Clone)]
pub enum Event {
    /// User key press
    Key(KeyEvent),
    /// Pointer pressed anywhere on the view
    Tap { column: u16, row: u16 },
    /// Terminal resize
    Resize(u16, u16),
    /// Animation frame delivered by the [`Scheduler`]
    Frame,
}

/// Handles event collection from the terminal.
///
/// Uses crossterm's async `EventStream` (via `futures::StreamExt`) instead of
/// blocking `event::poll()` / `event::read()`, so no tokio worker thread is
/// ever blocked.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    tx: mpsc::UnboundedSender<Event>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    /// Create a new event handler and spawn the input task.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));

        let input_tx = tx.clone();
        let input_stop = stop.clone();
        tokio::spawn(async move {
            let mut reader = EventStream::new();
            loop {
                if input_stop.load(Ordering::Relaxed) {
                    return;
                }
                let maybe_event = reader.next().await;
                if input_stop.load(Ordering::Relaxed) {
                    return;
                }
                let event = match maybe_event {
                    Some(Ok(CrosstermEvent::Key(key))) if key.kind == KeyEventKind::Press => {
                        Event::Key(key)
                    }
                    // Only the press is a tap; drags and releases are dropped
                    Some(Ok(CrosstermEvent::Mouse(mouse)))
                        if matches!(mouse.kind, MouseEventKind::Down(_)) =>
                    {
                        Event::Tap {
                            column: mouse.column,
                            row: mouse.row,
                        }
                    }
                    Some(Ok(CrosstermEvent::Resize(w, h))) => Event::Resize(w, h),
                    Some(Err(_)) | None => {
                        // Stream ended or errored — exit gracefully
                        return;
                    }
                    _ => continue,
                };
                if input_tx.send(event).is_err() {
                    return;
                }
            }
        });

        Self { rx, tx, stop }
    }

    /// Scheduler posting frames back into this handler
    pub fn scheduler(&self) -> Scheduler {
        Scheduler::new(self.tx.clone())
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    /// Signal the input task to stop
    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

/// Turns [`FrameRequest`]s into `Event::Frame` deliveries.
///
/// Delayed frames are a spawned `tokio::time::sleep`, never a blocking wait.
/// At most one frame is outstanding; further requests fold into it until the
/// app acknowledges delivery.
#[derive(Debug, Clone)]
pub struct Scheduler {
    tx: mpsc::UnboundedSender<Event>,
    pending: Arc<AtomicBool>,
}

impl Scheduler {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            tx,
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn request(&self, request: FrameRequest) {
        if self.pending.swap(true, Ordering::AcqRel) {
            trace!("frame already pending, folding {request:?}");
            return;
        }
        match request {
            FrameRequest::NextFrame => post(&self.tx),
            FrameRequest::After(delay) => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    post(&tx);
                });
            }
        }
    }

    /// Mark the outstanding frame as delivered
    pub fn acknowledge(&self) {
        self.pending.store(false, Ordering::Release);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

/// Best effort: a frame nobody is listening for is dropped
fn post(tx: &mpsc::UnboundedSender<Event>) {
    if tx.send(Event::Frame).is_err() {
        trace!("{}", BarSwapError::FrameDropped);
    }
}
