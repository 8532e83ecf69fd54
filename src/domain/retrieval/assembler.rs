//! 经文组装器
//!
//! 按计划的步骤顺序拼接各步结果；结果以步骤序号为键，因此与各步完成的先后无关。

use std::collections::HashMap;

use super::{RetrievalPlan, Verse};

/// 组装检索结果
///
/// - 严格按步骤顺序拼接，步内保持存储协作方返回的顺序
/// - 不去重：用户重复请求的坐标会重复输出
/// - 结果中缺失的步骤不贡献经文，计划外的序号被忽略
pub fn assemble(plan: &RetrievalPlan, mut results: HashMap<usize, Vec<Verse>>) -> Vec<Verse> {
    plan.steps()
        .iter()
        .filter_map(|step| results.remove(&step.index()))
        .flatten()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canon::Book;
    use crate::domain::citation::{CoordinateSet, Position};
    use crate::domain::retrieval::{plan, BibleVersion};

    fn version(abbreviation: &str) -> BibleVersion {
        BibleVersion::new(abbreviation, abbreviation, "en").unwrap()
    }

    fn verse(v: &BibleVersion, chapter: u32, number: u32) -> Verse {
        Verse::new(
            format!("{} {}:{}", v, chapter, number),
            Position::new(Book::John, chapter, number).unwrap(),
            v.clone(),
        )
    }

    #[test]
    fn test_assemble_in_step_order_regardless_of_insertion() {
        let (kjv, niv) = (version("kjv"), version("niv"));
        let coords =
            CoordinateSet::from_positions(vec![Position::new(Book::John, 1, 1).unwrap()]).unwrap();
        let plan = plan(&coords, &[kjv.clone(), niv.clone()]).unwrap();

        let mut results = HashMap::new();
        results.insert(1, vec![verse(&niv, 1, 1)]);
        results.insert(0, vec![verse(&kjv, 1, 1)]);

        let assembled = assemble(&plan, results);
        let order: Vec<&str> = assembled.iter().map(|v| v.version().abbreviation()).collect();
        assert_eq!(order, vec!["kjv", "niv"]);
    }

    #[test]
    fn test_assemble_keeps_step_internal_order_and_duplicates() {
        let kjv = version("kjv");
        let coords = CoordinateSet::from_positions(vec![
            Position::new(Book::John, 1, 1).unwrap(),
            Position::new(Book::John, 1, 2).unwrap(),
        ])
        .unwrap();
        let plan = plan(&coords, &[kjv.clone(), kjv.clone()]).unwrap();
        assert_eq!(plan.len(), 4);

        let results: HashMap<usize, Vec<Verse>> = (0..4)
            .map(|i| (i, vec![verse(&kjv, 1, (i % 2) as u32 + 1)]))
            .collect();

        let assembled = assemble(&plan, results);
        let verses: Vec<u32> = assembled.iter().map(|v| v.position().verse()).collect();
        assert_eq!(verses, vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_missing_and_extra_steps() {
        let kjv = version("kjv");
        let coords =
            CoordinateSet::from_positions(vec![Position::new(Book::John, 1, 1).unwrap()]).unwrap();
        let plan = plan(&coords, &[kjv.clone()]).unwrap();

        let mut results = HashMap::new();
        results.insert(7, vec![verse(&kjv, 9, 9)]);
        assert!(assemble(&plan, results).is_empty());
    }
}
