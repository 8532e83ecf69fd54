//! Retrieval Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("no translation given to plan against")]
    EmptyVersionList,

    #[error("citation resolved to no coordinates")]
    EmptyCoordinateSet,
}
