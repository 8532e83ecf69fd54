//! Retrieval Context - 检索限界上下文
//!
//! 职责:
//! - 译本与经文值对象
//! - 译本 × 坐标的检索计划
//! - 按计划顺序组装存储结果

mod assembler;
mod errors;
mod plan;
mod value_objects;

pub use assembler::assemble;
pub use errors::PlanError;
pub use plan::{plan, PlanMode, RetrievalPlan, RetrievalStep, StepTarget};
pub use value_objects::{BibleVersion, Verse};
