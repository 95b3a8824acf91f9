//! CLI module graph.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod dispatch;
pub mod operator;
pub mod output;
pub mod paths;
pub mod rate;
pub mod send;
pub mod session;
pub mod settings;
pub mod watch;
