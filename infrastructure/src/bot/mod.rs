//! HTTP adapter for the bot under test

pub mod client;
