//! Version Queries

/// 列出所有译本查询
#[derive(Debug, Clone)]
pub struct ListVersions;
