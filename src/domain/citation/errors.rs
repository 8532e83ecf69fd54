//! Citation Context - Errors

use thiserror::Error;

/// 引文解析错误
///
/// 全部为终止性错误：一条格式错误的引文不会产生任何部分结果
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CitationError {
    #[error("citation has no book name: '{0}'")]
    MissingBookName(String),

    #[error("unknown book: '{0}'")]
    UnknownBook(String),

    #[error("malformed coordinate: {0}")]
    MalformedCoordinate(String),

    #[error("citation mixes whole chapters and verses: '{0}'")]
    MixedGranularity(String),
}

impl CitationError {
    pub(crate) fn malformed(token: &str, reason: &str) -> Self {
        Self::MalformedCoordinate(format!("'{}' ({})", token, reason))
    }
}
