//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod passage_handlers;
mod version_handlers;

pub use passage_handlers::*;
pub use version_handlers::*;
