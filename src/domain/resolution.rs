//! 引文解析 → 展开 → 计划 的便捷组合

use thiserror::Error;

use super::canon::BookResolver;
use super::citation::{self, CitationError};
use super::retrieval::{self, BibleVersion, PlanError, RetrievalPlan};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error(transparent)]
    Citation(#[from] CitationError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

/// 一步得到检索计划，适用于不需要中间结果的调用方
pub fn resolve(
    resolver: &BookResolver,
    citation: &str,
    versions: &[BibleVersion],
) -> Result<RetrievalPlan, ResolutionError> {
    let spec = citation::parse(resolver, citation)?;
    let coords = citation::expand(&spec);
    Ok(retrieval::plan(&coords, versions)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::retrieval::PlanMode;

    fn versions(list: &[&str]) -> Vec<BibleVersion> {
        list.iter()
            .map(|a| BibleVersion::new(*a, *a, "en").unwrap())
            .collect()
    }

    #[test]
    fn test_resolve_compare() {
        let resolver = BookResolver::bundled().unwrap();
        let plan = resolve(&resolver, "Jn 1,1", &versions(&["kjv", "niv"])).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.mode(), PlanMode::Compare);
    }

    #[test]
    fn test_resolve_propagates_citation_error() {
        let resolver = BookResolver::bundled().unwrap();
        let result = resolve(&resolver, "Nope 1,1", &versions(&["kjv"]));
        assert!(matches!(
            result,
            Err(ResolutionError::Citation(CitationError::UnknownBook(_)))
        ));
    }

    #[test]
    fn test_resolve_propagates_plan_error() {
        let resolver = BookResolver::bundled().unwrap();
        let result = resolve(&resolver, "Jn 1,1", &[]);
        assert_eq!(result, Err(ResolutionError::Plan(PlanError::EmptyVersionList)));
    }
}
