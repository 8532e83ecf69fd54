//! Lectio - 经文引文解析与检索服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Canon Context: 正典书卷与缩写解析
//! - Citation Context: 引文解析与坐标展开
//! - Retrieval Context: 检索计划与经文组装
//!
//! 应用层 (application/):
//! - Ports: 端口定义（VerseStore, VersionRepository）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Memory: VerseStore 内存实现
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
