//! Lectio - 经文引文解析与检索服务
//!
//! - Domain: canon/, citation/, retrieval/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, memory, persistence

use std::sync::Arc;

use lectio::config::{load_config, print_config, AppConfig};
use lectio::domain::canon::BookResolver;
use lectio::infrastructure::http::{AppState, HttpServer, ServerConfig};
use lectio::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteVerseStore, SqliteVersionRepository,
};

/// 加载书卷缩写表：配置了文件路径则读文件，否则使用内置表
async fn load_resolver(config: &AppConfig) -> anyhow::Result<BookResolver> {
    let resolver = match &config.canon.abbreviations_path {
        Some(path) => {
            let source = tokio::fs::read_to_string(path).await.map_err(|e| {
                anyhow::anyhow!("Failed to read abbreviation table {}: {}", path.display(), e)
            })?;
            BookResolver::from_toml_str(&source)?
        }
        None => BookResolver::bundled()?,
    };
    tracing::info!(aliases = resolver.len(), "Book resolver loaded");
    Ok(resolver)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.filter())),
        )
        .init();

    tracing::info!("Lectio - 经文引文解析与检索服务");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let resolver = Arc::new(load_resolver(&config).await?);

    // 创建 Repository 适配器
    let version_repo = Arc::new(SqliteVersionRepository::new(pool.clone()));
    let verse_store = Arc::new(SqliteVerseStore::new(pool));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(
        resolver,
        version_repo,
        verse_store,
        config.reading.default_version.clone(),
    );

    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
