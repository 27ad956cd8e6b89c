/*!
 * Translate-and-present pipeline.
 *
 * - `driver`: iterates pages and sentences, translates and corrects them
 * - `handoff`: capacity-1 channel with per-sentence acknowledgement
 * - `presenter`: typewriter reveal task and the surface callbacks
 * - `buffer`: tail-retaining reveal buffer
 */

pub use self::buffer::RevealBuffer;
pub use self::driver::{PipelineDriver, RunReport, RunState, compute_progress};
pub use self::handoff::{HandoffReceiver, HandoffSender, Presentation, PresenterCommand, RunOutcome, channel};
pub use self::presenter::{Pane, Presenter, RevealSurface, RevealTiming};

pub mod buffer;
pub mod driver;
pub mod handoff;
pub mod presenter;
