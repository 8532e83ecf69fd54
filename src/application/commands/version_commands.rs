//! Version Commands

/// 导入的单节经文，书卷可用规范名或任一缩写
#[derive(Debug, Clone)]
pub struct ImportedVerse {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// 导入译本命令：登记译本并写入（覆盖）其经文
#[derive(Debug, Clone)]
pub struct ImportVersion {
    pub abbreviation: String,
    pub name: String,
    pub language: String,
    pub verses: Vec<ImportedVerse>,
}
