//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{ImportedVerse, VersionRecord};
use crate::domain::canon::Book;
use crate::domain::retrieval::{RetrievalStep, StepTarget, Verse};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub key: &'static str,
    pub name: &'static str,
    pub testament: &'static str,
    pub deuterocanonical: bool,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            key: book.key(),
            name: book.name(),
            testament: book.testament().as_str(),
            deuterocanonical: book.is_deuterocanonical(),
        }
    }
}

// ============================================================================
// Version DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub abbreviation: String,
    pub name: String,
    pub language: String,
    pub verse_count: usize,
    pub created_at: String,
}

impl From<VersionRecord> for VersionResponse {
    fn from(record: VersionRecord) -> Self {
        Self {
            abbreviation: record.version.abbreviation().to_string(),
            name: record.version.name().to_string(),
            language: record.version.language().to_string(),
            verse_count: record.verse_count,
            created_at: record.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImportVerseRequest {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl From<ImportVerseRequest> for ImportedVerse {
    fn from(req: ImportVerseRequest) -> Self {
        Self {
            book: req.book,
            chapter: req.chapter,
            verse: req.verse,
            text: req.text,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImportVersionRequest {
    pub abbreviation: String,
    pub name: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub verses: Vec<ImportVerseRequest>,
}

fn default_language() -> String {
    "en".to_string()
}

#[derive(Debug, Serialize)]
pub struct ImportVersionResult {
    pub abbreviation: String,
    pub imported: usize,
}

// ============================================================================
// Passage DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PassageRequest {
    pub citation: String,
    /// 译本缩写，按请求顺序；为空时使用默认译本
    #[serde(default)]
    pub versions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VerseResponse {
    pub version: String,
    pub book: &'static str,
    pub chapter: u32,
    pub verse: u32,
    pub reference: String,
    pub text: String,
}

impl From<Verse> for VerseResponse {
    fn from(verse: Verse) -> Self {
        let position = verse.position();
        Self {
            version: verse.version().abbreviation().to_string(),
            book: position.book().name(),
            chapter: position.chapter(),
            verse: position.verse(),
            reference: position.to_string(),
            text: verse.text().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PassageReadResponse {
    pub reference: String,
    pub mode: &'static str,
    pub verses: Vec<VerseResponse>,
}

#[derive(Debug, Serialize)]
pub struct PlanStepResponse {
    pub index: usize,
    pub version: String,
    /// verse / verse-list / chapter
    pub kind: &'static str,
    pub targets: Vec<String>,
}

impl From<&RetrievalStep> for PlanStepResponse {
    fn from(step: &RetrievalStep) -> Self {
        let (kind, targets) = match step.target() {
            StepTarget::Verse(position) => ("verse", vec![position.to_string()]),
            StepTarget::VerseList(positions) => (
                "verse-list",
                positions.iter().map(ToString::to_string).collect(),
            ),
            StepTarget::Chapter(chapter) => ("chapter", vec![chapter.to_string()]),
        };
        Self {
            index: step.index(),
            version: step.version().abbreviation().to_string(),
            kind,
            targets,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PassagePlanResult {
    pub reference: String,
    pub mode: &'static str,
    pub steps: Vec<PlanStepResponse>,
}
