//! Passage Queries

/// 读取经文查询
#[derive(Debug, Clone)]
pub struct ReadPassage {
    /// 用户输入的引文，如 "Jn 16:1-10,20-30"
    pub citation: String,
    /// 译本缩写，按优先顺序；为空时使用默认译本
    pub versions: Vec<String>,
}

/// 只生成检索计划、不取经文的查询
#[derive(Debug, Clone)]
pub struct PlanPassage {
    pub citation: String,
    pub versions: Vec<String>,
}
