//! 区间展开器
//!
//! 将 `CoordinateSpec` 展开为升序、去重的 `CoordinateSet`

use super::{ChapterMarker, CoordinateSet, CoordinateSpec, Member, Position, RangeTokens};

/// 展开引文
///
/// 不相交区间之间允许重叠，例如 `5-7.6-9` 得到 5,6,7,8,9 各一次。
pub fn expand(spec: &CoordinateSpec) -> CoordinateSet {
    let book = spec.book();

    let members: Vec<Member> = match spec.ranges() {
        RangeTokens::Chapters(ranges) => ranges
            .iter()
            .flat_map(|r| r.start..=r.end)
            .map(|chapter| Member::Chapter(ChapterMarker::from_parts(book, chapter)))
            .collect(),
        RangeTokens::Verses(ranges) => ranges
            .iter()
            .flat_map(|r| (r.start..=r.end).map(move |verse| (r.chapter, verse)))
            .map(|(chapter, verse)| Member::Verse(Position::from_parts(book, chapter, verse)))
            .collect(),
    };

    // 单一书卷由 CoordinateSpec 保证，单一粒度由 RangeTokens 的分支保证
    CoordinateSet::canonical(members)
}
