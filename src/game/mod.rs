//! Turn orchestration: the session state machine and its collaborator seams.

pub mod session;
pub mod turn;

pub use session::{GameSession, PlayerInput, TurnReporter};
pub use turn::{TurnContext, TurnResult};
