//! Retrieval Context - Value Objects

use serde::{Deserialize, Serialize};

use crate::domain::citation::Position;

/// 译本
///
/// 对核心而言只是一个不透明标识（缩写）加上展示用元数据
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BibleVersion {
    abbreviation: String,
    name: String,
    language: String,
}

impl BibleVersion {
    pub fn new(
        abbreviation: impl Into<String>,
        name: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, &'static str> {
        let abbreviation = abbreviation.into().trim().to_lowercase();
        if abbreviation.is_empty() {
            return Err("译本缩写不能为空");
        }
        if abbreviation.len() > 32 {
            return Err("译本缩写长度不能超过32字符");
        }
        Ok(Self {
            abbreviation,
            name: name.into(),
            language: language.into(),
        })
    }

    /// 小写缩写，作为译本标识
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl std::fmt::Display for BibleVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbreviation)
    }
}

/// 经文，由存储协作方返回
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    text: String,
    position: Position,
    version: BibleVersion,
}

impl Verse {
    pub fn new(text: impl Into<String>, position: Position, version: BibleVersion) -> Self {
        Self {
            text: text.into(),
            position,
            version,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn version(&self) -> &BibleVersion {
        &self.version
    }
}
