//! Canon Context - 正典限界上下文
//!
//! 职责:
//! - 书卷枚举及其元数据（约别、次经标记、规范名）
//! - 书卷名称/缩写解析

mod book;
mod errors;
mod resolver;

pub use book::{Book, Testament};
pub use errors::CanonError;
pub use resolver::BookResolver;
