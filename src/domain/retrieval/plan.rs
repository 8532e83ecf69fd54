//! 检索计划
//!
//! 决策表（译本数 × 坐标成员数）:
//!
//! | 译本 | 成员 | 模式            | 步骤                                   |
//! |------|------|-----------------|----------------------------------------|
//! | 1    | 1    | `Single`        | 1 步                                   |
//! | 1    | n    | `VerseList`     | 1 步批量取节（节级）                   |
//! | 1    | n    | `ChapterConcat` | 每章 1 步（整章）                      |
//! | m    | 1    | `Compare`       | 每个译本 1 步，按译本顺序              |
//! | m    | n    | `CompareList`   | 译本在外层、成员在内层，每对 1 步      |
//!
//! 步骤顺序完全由输入的译本顺序和成员顺序决定，构建后不再重排。

use serde::Serialize;

use super::{BibleVersion, PlanError};
use crate::domain::citation::{ChapterMarker, CoordinateSet, Granularity, Member, Position};

/// 计划模式，告诉组装器如何分组结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanMode {
    Single,
    VerseList,
    ChapterConcat,
    Compare,
    CompareList,
}

impl PlanMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanMode::Single => "single",
            PlanMode::VerseList => "verse-list",
            PlanMode::ChapterConcat => "chapter-concat",
            PlanMode::Compare => "compare",
            PlanMode::CompareList => "compare-list",
        }
    }
}

/// 单步检索目标
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StepTarget {
    Verse(Position),
    VerseList(Vec<Position>),
    Chapter(ChapterMarker),
}

impl From<Member> for StepTarget {
    fn from(member: Member) -> Self {
        match member {
            Member::Verse(position) => StepTarget::Verse(position),
            Member::Chapter(marker) => StepTarget::Chapter(marker),
        }
    }
}

/// 检索步骤
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetrievalStep {
    index: usize,
    version: BibleVersion,
    target: StepTarget,
    mode: PlanMode,
}

impl RetrievalStep {
    /// 在计划中的序号，结果按此序号回填
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn version(&self) -> &BibleVersion {
        &self.version
    }

    pub fn target(&self) -> &StepTarget {
        &self.target
    }

    pub fn mode(&self) -> PlanMode {
        self.mode
    }
}

/// 检索计划
///
/// 不变量:
/// - 至少一步
/// - 所有步骤共享同一模式
/// - 步骤 index 等于其在列表中的位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetrievalPlan {
    steps: Vec<RetrievalStep>,
}

impl RetrievalPlan {
    pub fn steps(&self) -> &[RetrievalStep] {
        &self.steps
    }

    pub fn mode(&self) -> PlanMode {
        // 构建时保证非空
        self.steps.first().map_or(PlanMode::Single, RetrievalStep::mode)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// 根据坐标集合与译本列表构建检索计划
///
/// # 错误
/// - `EmptyVersionList` - 未给出译本（先于坐标检查）
/// - `EmptyCoordinateSet` - 坐标集合为空
pub fn plan(coords: &CoordinateSet, versions: &[BibleVersion]) -> Result<RetrievalPlan, PlanError> {
    if versions.is_empty() {
        return Err(PlanError::EmptyVersionList);
    }
    if coords.is_empty() {
        return Err(PlanError::EmptyCoordinateSet);
    }

    let members = coords.members();
    let pairs: Vec<(&BibleVersion, StepTarget, PlanMode)> = match (versions, members) {
        ([version], [member]) => vec![(version, StepTarget::from(*member), PlanMode::Single)],
        ([version], _) => match coords.granularity() {
            Some(Granularity::Chapter) => members
                .iter()
                .map(|m| (version, StepTarget::from(*m), PlanMode::ChapterConcat))
                .collect(),
            _ => vec![(
                version,
                StepTarget::VerseList(coords.positions()),
                PlanMode::VerseList,
            )],
        },
        (_, [member]) => versions
            .iter()
            .map(|v| (v, StepTarget::from(*member), PlanMode::Compare))
            .collect(),
        _ => versions
            .iter()
            .flat_map(|v| {
                members
                    .iter()
                    .map(move |m| (v, StepTarget::from(*m), PlanMode::CompareList))
            })
            .collect(),
    };

    let steps = pairs
        .into_iter()
        .enumerate()
        .map(|(index, (version, target, mode))| RetrievalStep {
            index,
            version: version.clone(),
            target,
            mode,
        })
        .collect();

    Ok(RetrievalPlan { steps })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::canon::Book;

    fn version(abbreviation: &str) -> BibleVersion {
        BibleVersion::new(abbreviation, abbreviation.to_uppercase(), "en").unwrap()
    }

    fn verses(chapter: u32, range: std::ops::RangeInclusive<u32>) -> CoordinateSet {
        CoordinateSet::from_positions(
            range.map(|v| Position::new(Book::John, chapter, v).unwrap()),
        )
        .unwrap()
    }

    fn chapters(list: &[u32]) -> CoordinateSet {
        CoordinateSet::from_chapters(
            list.iter()
                .map(|c| ChapterMarker::new(Book::Exodus, *c).unwrap()),
        )
        .unwrap()
    }

    fn abbreviations(plan: &RetrievalPlan) -> Vec<&str> {
        plan.steps()
            .iter()
            .map(|s| s.version().abbreviation())
            .collect()
    }

    #[test]
    fn test_single_version_single_verse() {
        let plan = plan(&verses(1, 1..=1), &[version("kjv")]).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.mode(), PlanMode::Single);
        assert_eq!(
            plan.steps()[0].target(),
            &StepTarget::Verse(Position::new(Book::John, 1, 1).unwrap())
        );
    }

    #[test]
    fn test_single_version_single_chapter() {
        let plan = plan(&chapters(&[3]), &[version("kjv")]).unwrap();
        assert_eq!(plan.mode(), PlanMode::Single);
        assert!(matches!(plan.steps()[0].target(), StepTarget::Chapter(_)));
    }

    #[test]
    fn test_single_version_verse_list() {
        let coords = verses(16, 1..=10);
        let plan = plan(&coords, &[version("kjv")]).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.mode(), PlanMode::VerseList);
        assert_eq!(
            plan.steps()[0].target(),
            &StepTarget::VerseList(coords.positions())
        );
    }

    #[test]
    fn test_single_version_chapter_concat() {
        let plan = plan(&chapters(&[1, 2, 4]), &[version("kjv")]).unwrap();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.mode(), PlanMode::ChapterConcat);
        let order: Vec<u32> = plan
            .steps()
            .iter()
            .map(|s| match s.target() {
                StepTarget::Chapter(c) => c.chapter(),
                other => panic!("unexpected target {:?}", other),
            })
            .collect();
        assert_eq!(order, vec![1, 2, 4]);
    }

    #[test]
    fn test_compare_keeps_version_order() {
        let plan = plan(&verses(1, 1..=1), &[version("kjv"), version("niv")]).unwrap();
        assert_eq!(plan.len(), 2);
        assert!(plan.steps().iter().all(|s| s.mode() == PlanMode::Compare));
        assert_eq!(abbreviations(&plan), vec!["kjv", "niv"]);

        let reversed = super::plan(&verses(1, 1..=1), &[version("niv"), version("kjv")]).unwrap();
        assert_eq!(abbreviations(&reversed), vec!["niv", "kjv"]);
    }

    #[test]
    fn test_compare_whole_chapter() {
        let plan = plan(&chapters(&[20]), &[version("kjv"), version("nab")]).unwrap();
        assert_eq!(plan.mode(), PlanMode::Compare);
        assert!(plan
            .steps()
            .iter()
            .all(|s| matches!(s.target(), StepTarget::Chapter(_))));
    }

    #[test]
    fn test_compare_list_versions_outer() {
        let coords = verses(3, 16..=17);
        let plan = plan(&coords, &[version("kjv"), version("niv"), version("nab")]).unwrap();
        assert_eq!(plan.len(), 6);
        assert_eq!(plan.mode(), PlanMode::CompareList);
        assert_eq!(
            abbreviations(&plan),
            vec!["kjv", "kjv", "niv", "niv", "nab", "nab"]
        );
        let verses_order: Vec<u32> = plan
            .steps()
            .iter()
            .map(|s| match s.target() {
                StepTarget::Verse(p) => p.verse(),
                other => panic!("unexpected target {:?}", other),
            })
            .collect();
        assert_eq!(verses_order, vec![16, 17, 16, 17, 16, 17]);
        let indices: Vec<usize> = plan.steps().iter().map(|s| s.index()).collect();
        assert_eq!(indices, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn test_compare_list_chapters() {
        let plan = plan(&chapters(&[1, 2]), &[version("kjv"), version("niv")]).unwrap();
        assert_eq!(plan.mode(), PlanMode::CompareList);
        assert_eq!(plan.len(), 4);
        assert!(plan
            .steps()
            .iter()
            .all(|s| matches!(s.target(), StepTarget::Chapter(_))));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(
            plan(&verses(1, 1..=1), &[]),
            Err(PlanError::EmptyVersionList)
        );
        assert_eq!(
            plan(&CoordinateSet::default(), &[version("kjv")]),
            Err(PlanError::EmptyCoordinateSet)
        );
        assert_eq!(
            plan(&CoordinateSet::default(), &[]),
            Err(PlanError::EmptyVersionList)
        );
    }
}
