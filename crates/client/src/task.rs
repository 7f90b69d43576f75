use text_hasher_core::HashResponse;
use tokio::sync::mpsc;
use tracing::debug;

use crate::client::HashClient;
use crate::error::ClientError;

/// Progress and completion of one hash action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashEvent {
    /// Percentage, strictly increasing within one action.
    Progress(u8),
    Completed(HashResponse),
    Failed(ClientError),
}

impl HashEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, HashEvent::Progress(_))
    }
}

// Room for every event of one action, so the task never waits on the reader.
const EVENT_CAPACITY: usize = 8;

/// Runs one hash call on the tokio runtime and streams its events.
///
/// The receiver yields zero or more `Progress` events followed by exactly one
/// `Completed` or `Failed`. Dropping the receiver discards the outcome.
pub fn spawn_hash(client: HashClient, text: String) -> mpsc::Receiver<HashEvent> {
    let (tx, rx) = mpsc::channel(EVENT_CAPACITY);
    tokio::spawn(async move {
        let _ = tx.send(HashEvent::Progress(20)).await;
        let _ = tx.send(HashEvent::Progress(50)).await;
        let outcome = match client.send(&text).await {
            Ok(resp) => {
                let _ = tx.send(HashEvent::Progress(80)).await;
                client.read_response(resp).await
            }
            Err(e) => Err(e),
        };
        let event = match outcome {
            Ok(resp) => {
                let _ = tx.send(HashEvent::Progress(100)).await;
                HashEvent::Completed(resp)
            }
            Err(e) => HashEvent::Failed(e),
        };
        if tx.send(event).await.is_err() {
            debug!("hash result dropped, receiver closed");
        }
    });
    rx
}

/// Drains `events` until the terminal event, calling `on_progress` for each
/// progress update.
pub async fn wait_for_outcome(
    mut events: mpsc::Receiver<HashEvent>,
    mut on_progress: impl FnMut(u8),
) -> Result<HashResponse, ClientError> {
    while let Some(event) = events.recv().await {
        match event {
            HashEvent::Progress(pct) => on_progress(pct),
            HashEvent::Completed(resp) => return Ok(resp),
            HashEvent::Failed(e) => return Err(e),
        }
    }
    Err(ClientError::Unexpected(
        "hash task ended without a result".to_owned(),
    ))
}
