//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod passage_queries;
mod version_queries;

pub mod handlers;

pub use passage_queries::*;
pub use version_queries::*;
