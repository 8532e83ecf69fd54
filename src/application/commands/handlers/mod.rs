//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod version_handlers;

pub use version_handlers::*;
