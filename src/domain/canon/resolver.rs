//! BookResolver - 书卷名称/缩写解析
//!
//! 缩写表在进程启动时加载一次，之后只读，可在多个调用方之间共享而无需加锁

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use super::{Book, CanonError};

/// 随程序打包的缩写表
const BUNDLED_TABLE: &str = include_str!("../../../resources/abbreviations.toml");

/// 缩写表文件格式
#[derive(Debug, Deserialize)]
struct AbbreviationTable {
    books: BTreeMap<String, Vec<String>>,
}

/// 书卷解析器
///
/// 不变量:
/// - 每个书卷至少以其查表键注册
/// - 同一个小写别名只对应一个书卷
#[derive(Debug, Clone)]
pub struct BookResolver {
    entries: HashMap<String, Book>,
}

impl BookResolver {
    /// 使用打包的缩写表
    pub fn bundled() -> Result<Self, CanonError> {
        Self::from_toml_str(BUNDLED_TABLE)
    }

    /// 从 TOML 文本构建
    pub fn from_toml_str(source: &str) -> Result<Self, CanonError> {
        let table: AbbreviationTable =
            toml::from_str(source).map_err(|e| CanonError::InvalidTable(e.to_string()))?;

        let mut aliases = Vec::new();
        for (key, abbreviations) in table.books {
            let book = Book::from_key(&key).ok_or_else(|| CanonError::UnknownKey(key.clone()))?;
            aliases.extend(abbreviations.into_iter().map(|alias| (alias, book)));
        }

        Self::from_aliases(aliases)
    }

    /// 从 (别名, 书卷) 列表构建，所有书卷的查表键自动注册
    pub fn from_aliases(
        aliases: impl IntoIterator<Item = (String, Book)>,
    ) -> Result<Self, CanonError> {
        let mut entries = HashMap::new();
        let keys = Book::ALL.iter().map(|book| (book.key().to_string(), *book));

        for (alias, book) in keys.chain(aliases) {
            let alias = alias.trim().to_lowercase();
            if alias.is_empty() {
                return Err(CanonError::InvalidTable(format!(
                    "empty abbreviation for {}",
                    book
                )));
            }
            match entries.get(&alias) {
                Some(existing) if *existing != book => {
                    return Err(CanonError::DuplicateAlias {
                        alias,
                        first: *existing,
                        second: book,
                    });
                }
                Some(_) => {}
                None => {
                    entries.insert(alias, book);
                }
            }
        }

        Ok(Self { entries })
    }

    /// 解析书卷标记（大小写不敏感，必须完整匹配）
    pub fn resolve(&self, token: &str) -> Result<Book, CanonError> {
        self.entries
            .get(&token.to_lowercase())
            .copied()
            .ok_or_else(|| CanonError::UnknownBook(token.to_string()))
    }

    /// 已注册的别名数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
