//! Conversation entities and transcripts

pub mod entities;
pub mod transcript;
