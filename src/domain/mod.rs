//! Domain Layer - 领域层
//!
//! 纯同步计算，无 I/O、无日志。包含三个限界上下文:
//! - Canon Context: 书卷与缩写解析
//! - Citation Context: 引文解析与区间展开
//! - Retrieval Context: 检索计划与结果组装

pub mod canon;
pub mod citation;
pub mod retrieval;

// 解析 → 展开 → 计划 的组合
mod resolution;

pub use canon::{Book, BookResolver, Testament};
pub use citation::{expand, parse, CoordinateSet, CoordinateSpec, Position};
pub use resolution::{resolve, ResolutionError};
pub use retrieval::{assemble, plan, BibleVersion, RetrievalPlan, Verse};
