pub mod cli;
pub mod commands;
pub mod config;
mod context;
pub mod report;
pub mod session;

pub use context::AppContext;
pub use session::{Action, CopyOutcome, Session};
