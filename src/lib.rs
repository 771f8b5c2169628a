//! Inclusive Jobs — conversational flow engine for accessible job matching.

pub mod channels;
pub mod config;
pub mod conversation;
pub mod error;
pub mod flow;
pub mod flows;
pub mod model;
