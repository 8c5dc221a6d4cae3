//! Application layer for botbench
//!
//! Use cases (the conversation driver and the parallel runner) and the
//! ports they depend on. Adapters for the ports live in the
//! infrastructure layer; this crate never touches the network itself.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RunParams;
pub use ports::{
    bot_transport::{BotTransport, ChatId},
    customer_simulator::{CustomerSimulator, SimulatorError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::{
    drive_conversation::{ConversationAborted, DriveConversationUseCase},
    run_session::{RunSessionError, RunSessionUseCase},
};
