//! Citation Context - Value Objects

use serde::{Deserialize, Serialize};

use super::CitationError;
use crate::domain::canon::Book;

/// 经文坐标 (书卷, 章, 节)
///
/// 不变量:
/// - chapter >= 1, verse >= 1
/// - 排序：书卷正典顺序，然后章，然后节
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    book: Book,
    chapter: u32,
    verse: u32,
}

impl Position {
    pub fn new(book: Book, chapter: u32, verse: u32) -> Result<Self, &'static str> {
        if chapter == 0 {
            return Err("章号必须从 1 开始");
        }
        if verse == 0 {
            return Err("节号必须从 1 开始");
        }
        Ok(Self::from_parts(book, chapter, verse))
    }

    /// 调用方已保证 chapter/verse >= 1
    pub(crate) const fn from_parts(book: Book, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }

    pub fn book(&self) -> Book {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verse(&self) -> u32 {
        self.verse
    }

    /// 该节所在的整章
    pub fn chapter_marker(&self) -> ChapterMarker {
        ChapterMarker::from_parts(self.book, self.chapter)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// 整章标记 (书卷, 章)，表示该章的每一节
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChapterMarker {
    book: Book,
    chapter: u32,
}

impl ChapterMarker {
    pub fn new(book: Book, chapter: u32) -> Result<Self, &'static str> {
        if chapter == 0 {
            return Err("章号必须从 1 开始");
        }
        Ok(Self::from_parts(book, chapter))
    }

    pub(crate) const fn from_parts(book: Book, chapter: u32) -> Self {
        Self { book, chapter }
    }

    pub fn book(&self) -> Book {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }
}

impl std::fmt::Display for ChapterMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)
    }
}

/// 坐标集合成员
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Member {
    Verse(Position),
    Chapter(ChapterMarker),
}

impl Member {
    pub fn book(&self) -> Book {
        match self {
            Member::Verse(position) => position.book(),
            Member::Chapter(marker) => marker.book(),
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            Member::Verse(_) => Granularity::Verse,
            Member::Chapter(_) => Granularity::Chapter,
        }
    }
}

impl From<Position> for Member {
    fn from(position: Position) -> Self {
        Member::Verse(position)
    }
}

impl From<ChapterMarker> for Member {
    fn from(marker: ChapterMarker) -> Self {
        Member::Chapter(marker)
    }
}

/// 坐标粒度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Verse,
    Chapter,
}

/// 展开后的规范坐标集合
///
/// 不变量:
/// - 成员全部为 `Position` 或全部为 `ChapterMarker`，从不混合
/// - 成员属于同一书卷
/// - 升序、无重复
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoordinateSet {
    members: Vec<Member>,
}

impl CoordinateSet {
    /// 由任意成员构建：排序去重，并校验粒度与书卷一致
    pub fn from_members(
        members: impl IntoIterator<Item = Member>,
    ) -> Result<Self, CitationError> {
        let set = Self::canonical(members.into_iter().collect());
        let members = set.members();

        if let Some(first) = members.first() {
            let (book, granularity) = (first.book(), first.granularity());
            if members.iter().any(|m| m.granularity() != granularity) {
                return Err(CitationError::MixedGranularity(book.to_string()));
            }
            if members.iter().any(|m| m.book() != book) {
                return Err(CitationError::MalformedCoordinate(
                    "coordinates span more than one book".to_string(),
                ));
            }
        }

        Ok(set)
    }

    /// 排序去重，不做校验；调用方保证单一书卷、单一粒度
    pub(super) fn canonical(mut members: Vec<Member>) -> Self {
        members.sort();
        members.dedup();
        Self { members }
    }

    /// 由同一书卷的节坐标构建
    pub fn from_positions(
        positions: impl IntoIterator<Item = Position>,
    ) -> Result<Self, CitationError> {
        Self::from_members(positions.into_iter().map(Member::Verse))
    }

    /// 由同一书卷的整章标记构建
    pub fn from_chapters(
        chapters: impl IntoIterator<Item = ChapterMarker>,
    ) -> Result<Self, CitationError> {
        Self::from_members(chapters.into_iter().map(Member::Chapter))
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn book(&self) -> Option<Book> {
        self.members.first().map(Member::book)
    }

    pub fn granularity(&self) -> Option<Granularity> {
        self.members.first().map(Member::granularity)
    }

    pub fn positions(&self) -> Vec<Position> {
        self.members
            .iter()
            .filter_map(|m| match m {
                Member::Verse(position) => Some(*position),
                Member::Chapter(_) => None,
            })
            .collect()
    }

    pub fn chapters(&self) -> Vec<ChapterMarker> {
        self.members
            .iter()
            .filter_map(|m| match m {
                Member::Chapter(marker) => Some(*marker),
                Member::Verse(_) => None,
            })
            .collect()
    }

    /// 渲染为规范引文，如 "John 16:1-10, 20-30; 17:3" 或 "Exodus 1-2, 4-7, 9"
    ///
    /// 连续成员折叠为区间
    pub fn reference(&self) -> String {
        let Some(book) = self.book() else {
            return String::new();
        };

        let mut out = format!("{} ", book);
        match self.granularity() {
            Some(Granularity::Chapter) => {
                let chapters: Vec<u32> = self.chapters().iter().map(|c| c.chapter()).collect();
                out.push_str(&runs(&chapters).join(", "));
            }
            _ => {
                let positions = self.positions();
                let mut chapter_parts = Vec::new();
                let mut start = 0;
                while start < positions.len() {
                    let chapter = positions[start].chapter();
                    let end = positions[start..]
                        .iter()
                        .position(|p| p.chapter() != chapter)
                        .map_or(positions.len(), |offset| start + offset);
                    let verses: Vec<u32> =
                        positions[start..end].iter().map(|p| p.verse()).collect();
                    chapter_parts.push(format!("{}:{}", chapter, runs(&verses).join(", ")));
                    start = end;
                }
                out.push_str(&chapter_parts.join("; "));
            }
        }
        out
    }
}

/// 将升序数字折叠为 "a-b" / "a" 片段
fn runs(numbers: &[u32]) -> Vec<String> {
    let mut parts = Vec::new();
    let mut iter = numbers.iter().copied().peekable();
    while let Some(start) = iter.next() {
        let mut end = start;
        while let Some(next) = end.checked_add(1).filter(|n| iter.peek() == Some(n)) {
            end = next;
            iter.next();
        }
        if start == end {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{}-{}", start, end));
        }
    }
    parts
}
