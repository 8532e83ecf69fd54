//! 引文解析器
//!
//! 支持两种记法：
//! - NAB 记法（默认）: `,` 分隔章与节，`.` 分隔不相交区间，如 `Jn16,1-10.20-30`
//! - Chicago 记法: `:` 分隔章与节，`,` 分隔不相交区间，如 `Jn16:1-10,20-30`
//!
//! 两种记法中 `-` 均表示闭区间。整章引用（如 `Exodus1-2.4-7.9`）只能用 NAB 记法表达；Chicago 记法中不带 `:` 的标记延续前一章，按节处理。

use serde::Serialize;

use super::{CitationError, ChapterMarker, Member, Position};
use crate::domain::canon::{Book, BookResolver};

/// 单个区间标记允许的最大跨度（章或节）
pub const MAX_RANGE_SPAN: u32 = 500;

/// 引文记法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notation {
    Nab,
    Chicago,
}

impl Notation {
    /// 检测坐标主体的记法：`:` 出现在任何 `,` 之前即为 Chicago 记法
    pub fn detect(body: &str) -> Self {
        match (body.find(':'), body.find(',')) {
            (Some(colon), Some(comma)) if colon < comma => Notation::Chicago,
            (Some(_), None) => Notation::Chicago,
            _ => Notation::Nab,
        }
    }

    /// 章/节分隔符
    pub fn verse_separator(&self) -> char {
        match self {
            Notation::Nab => ',',
            Notation::Chicago => ':',
        }
    }

    /// 不相交区间分隔符
    pub fn range_separator(&self) -> char {
        match self {
            Notation::Nab => '.',
            Notation::Chicago => ',',
        }
    }
}

/// 整章区间 start..=end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChapterRange {
    pub start: u32,
    pub end: u32,
}

/// 同一章内的节区间 chapter:start..=end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerseRange {
    pub chapter: u32,
    pub start: u32,
    pub end: u32,
}

/// 区间标记列表，整章与节级从不混合
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RangeTokens {
    Chapters(Vec<ChapterRange>),
    Verses(Vec<VerseRange>),
}

/// 单条引文的结构化表示，由 `parse` 构建、`expand` 消费
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoordinateSpec {
    book: Book,
    notation: Notation,
    ranges: RangeTokens,
}

impl CoordinateSpec {
    pub fn book(&self) -> Book {
        self.book
    }

    pub fn notation(&self) -> Notation {
        self.notation
    }

    pub fn ranges(&self) -> &RangeTokens {
        &self.ranges
    }

    /// 单成员引文（单节或单章）
    pub fn from_member(member: Member) -> Self {
        let ranges = match member {
            Member::Verse(position) => RangeTokens::Verses(vec![VerseRange {
                chapter: position.chapter(),
                start: position.verse(),
                end: position.verse(),
            }]),
            Member::Chapter(marker) => RangeTokens::Chapters(vec![ChapterRange {
                start: marker.chapter(),
                end: marker.chapter(),
            }]),
        };
        Self {
            book: member.book(),
            notation: Notation::Nab,
            ranges,
        }
    }
}

impl From<Position> for CoordinateSpec {
    fn from(position: Position) -> Self {
        Self::from_member(Member::Verse(position))
    }
}

impl From<ChapterMarker> for CoordinateSpec {
    fn from(marker: ChapterMarker) -> Self {
        Self::from_member(Member::Chapter(marker))
    }
}

/// 去除全部空白并转为小写
pub fn normalize_citation(citation: &str) -> String {
    citation
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// 解析引文
///
/// 引文会先经过 `normalize_citation`，因此调用方可以直接传入用户输入。
///
/// # 错误
/// - `MissingBookName` - 引文不以书卷名开头
/// - `UnknownBook` - 书卷名无法识别
/// - `MalformedCoordinate` - 非数字、悬空分隔符、倒置区间等
/// - `MixedGranularity` - 同一引文混合整章与节级引用
pub fn parse(resolver: &BookResolver, citation: &str) -> Result<CoordinateSpec, CitationError> {
    let normalized = normalize_citation(citation);

    let (token, body) = split_book_token(&normalized)
        .ok_or_else(|| CitationError::MissingBookName(citation.to_string()))?;
    let book = resolver
        .resolve(token)
        .map_err(|_| CitationError::UnknownBook(token.to_string()))?;

    let notation = Notation::detect(body);
    let ranges = parse_body(body, notation, &normalized)?;

    Ok(CoordinateSpec {
        book,
        notation,
        ranges,
    })
}

/// 切出开头的书卷标记：可选的一位数字前缀 + 最长字母串
fn split_book_token(s: &str) -> Option<(&str, &str)> {
    let mut end = 0;
    let mut chars = s.char_indices().peekable();

    if let Some(&(_, c)) = chars.peek() {
        if c.is_ascii_digit() {
            end = c.len_utf8();
            chars.next();
        }
    }

    let letters_start = end;
    while let Some(&(i, c)) = chars.peek() {
        if !c.is_alphabetic() {
            break;
        }
        end = i + c.len_utf8();
        chars.next();
    }

    if end == letters_start {
        return None;
    }
    Some(s.split_at(end))
}

/// 解析坐标主体
///
/// 第一个标记决定粒度：带章/节分隔符则为节级引用，之后不带分隔符的标记
/// 视为延续最近一章的节或节区间；否则为整章引用，之后不允许出现节级标记。
fn parse_body(
    body: &str,
    notation: Notation,
    citation: &str,
) -> Result<RangeTokens, CitationError> {
    if body.is_empty() {
        return Err(CitationError::malformed(citation, "missing chapter"));
    }

    let mut chapters: Vec<ChapterRange> = Vec::new();
    let mut verses: Vec<VerseRange> = Vec::new();
    let mut current_chapter: Option<u32> = None;

    for raw in body.split(notation.range_separator()) {
        if raw.is_empty() {
            return Err(CitationError::malformed(citation, "dangling separator"));
        }

        match raw.split_once(notation.verse_separator()) {
            Some((chapter, verse_part)) => {
                if !chapters.is_empty() {
                    return Err(CitationError::MixedGranularity(citation.to_string()));
                }
                let chapter = parse_number(chapter, raw)?;
                let (start, end) = parse_range(verse_part, raw)?;
                current_chapter = Some(chapter);
                verses.push(VerseRange {
                    chapter,
                    start,
                    end,
                });
            }
            None => match current_chapter {
                Some(chapter) => {
                    let (start, end) = parse_range(raw, raw)?;
                    verses.push(VerseRange {
                        chapter,
                        start,
                        end,
                    });
                }
                // Chicago 记法的首个标记必含 `:`，走不到这里
                None => {
                    let (start, end) = parse_range(raw, raw)?;
                    chapters.push(ChapterRange { start, end });
                }
            },
        }
    }

    if chapters.is_empty() {
        Ok(RangeTokens::Verses(verses))
    } else {
        Ok(RangeTokens::Chapters(chapters))
    }
}

/// 解析 `a` 或 `a-b`（闭区间，a <= b）
fn parse_range(s: &str, token: &str) -> Result<(u32, u32), CitationError> {
    let (start, end) = match s.split_once('-') {
        Some((start, end)) => (parse_number(start, token)?, parse_number(end, token)?),
        None => {
            let n = parse_number(s, token)?;
            (n, n)
        }
    };

    if start > end {
        return Err(CitationError::malformed(token, "inverted range"));
    }
    if end - start >= MAX_RANGE_SPAN {
        return Err(CitationError::malformed(token, "range too wide"));
    }
    Ok((start, end))
}

fn parse_number(s: &str, token: &str) -> Result<u32, CitationError> {
    if s.is_empty() {
        return Err(CitationError::malformed(token, "missing number"));
    }
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return Err(CitationError::malformed(token, "not a number"));
    }
    match s.parse::<u32>() {
        Ok(0) => Err(CitationError::malformed(token, "numbers start at 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(CitationError::malformed(token, "number out of range")),
    }
}
