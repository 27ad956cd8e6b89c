/*!
 * Single-slot handoff between the pipeline driver and the presenter.
 *
 * The driver sends one presentation at a time through a channel of
 * capacity 1 together with a one-shot acknowledgement, then waits on that
 * acknowledgement. At most one reveal is ever in flight and presentations
 * reach the presenter in the order the driver produced them.
 */

use tokio::sync::{mpsc, oneshot};

use crate::errors::PipelineError;

/// One sentence ready to be revealed
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// Sentence as extracted from the document
    pub source: String,
    /// Corrected translation, or an inline failure placeholder
    pub translation: String,
    /// Run progress in percent once this sentence is shown
    pub progress: f64,
}

/// How a run ended, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// Truncated error message
    Failed(String),
}

/// Commands consumed by the presenter task
#[derive(Debug)]
pub enum PresenterCommand {
    /// Reveal a sentence, then acknowledge through `done`
    Present {
        presentation: Presentation,
        done: oneshot::Sender<()>,
    },
    /// No more presentations will follow
    Finish(RunOutcome),
}

/// Driver side of the handoff
#[derive(Debug)]
pub struct HandoffSender {
    tx: mpsc::Sender<PresenterCommand>,
}

/// Presenter side of the handoff
#[derive(Debug)]
pub struct HandoffReceiver {
    rx: mpsc::Receiver<PresenterCommand>,
}

/// Create a connected sender/receiver pair
pub fn channel() -> (HandoffSender, HandoffReceiver) {
    let (tx, rx) = mpsc::channel(1);
    (HandoffSender { tx }, HandoffReceiver { rx })
}

impl HandoffSender {
    /// Hand `presentation` over and wait until it has been fully revealed
    pub async fn present(&self, presentation: Presentation) -> Result<(), PipelineError> {
        let (done, revealed) = oneshot::channel();
        self.tx
            .send(PresenterCommand::Present { presentation, done })
            .await
            .map_err(|_| PipelineError::PresenterClosed)?;
        revealed.await.map_err(|_| PipelineError::PresenterClosed)
    }

    /// Tell the presenter the run is over
    pub async fn finish(&self, outcome: RunOutcome) -> Result<(), PipelineError> {
        self.tx
            .send(PresenterCommand::Finish(outcome))
            .await
            .map_err(|_| PipelineError::PresenterClosed)
    }
}

impl HandoffReceiver {
    /// Next command, or `None` once the driver side is dropped
    pub async fn recv(&mut self) -> Option<PresenterCommand> {
        self.rx.recv().await
    }
}
