//! Use cases - the conversation driver and the parallel runner

pub mod drive_conversation;
pub mod run_session;
