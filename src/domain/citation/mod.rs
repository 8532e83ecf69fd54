//! Citation Context - 引文限界上下文
//!
//! 职责:
//! - 经文坐标值对象（节坐标、整章标记、坐标集合）
//! - 两种记法的引文解析
//! - 区间展开与规范化

mod errors;
mod expander;
mod parser;
mod value_objects;

pub use errors::CitationError;
pub use expander::expand;
pub use parser::{
    normalize_citation, parse, ChapterRange, CoordinateSpec, Notation, RangeTokens, VerseRange,
    MAX_RANGE_SPAN,
};
pub use value_objects::{ChapterMarker, CoordinateSet, Granularity, Member, Position};
