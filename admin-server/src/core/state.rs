use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{FixedIdentity, IdentityResolver};
use crate::core::{Config, Result, ServerError};
use crate::db::{self, memory::MemoryStore, repository::Repositories};
use crate::services::Services;

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::Memory => "memory",
        }
    }
}

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | repos | Repositories | 存储 (PostgreSQL 或内存) |
/// | services | Services | 业务服务 |
/// | identity | Arc<dyn IdentityResolver> | 请求身份解析 |
/// | pool | Option<PgPool> | 数据库连接池 (内存模式下为空) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub repos: Repositories,
    pub services: Services,
    pub identity: Arc<dyn IdentityResolver>,
    pub pool: Option<PgPool>,
    pub backend: StorageBackend,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 配置了 `DATABASE_URL` 时连接 PostgreSQL 并执行迁移；
    /// 否则使用带演示数据的内存存储 (生产环境拒绝启动)。
    pub async fn initialize(config: &Config) -> Result<Self> {
        match &config.database_url {
            Some(url) => {
                let pool = db::connect(url, config.database_max_connections).await?;
                let repos = Repositories::postgres(pool.clone());
                let mut state = Self::assemble(config, repos, StorageBackend::Postgres);
                state.pool = Some(pool);
                Ok(state)
            }
            None if config.is_production() => Err(ServerError::Config(
                "DATABASE_URL is required in production".into(),
            )),
            None => {
                tracing::warn!("DATABASE_URL not set, using in-memory storage with demo data");
                let store = Arc::new(MemoryStore::new());
                store
                    .seed_demo(config.current_store_id, config.business_offset())
                    .await
                    .map_err(|e| ServerError::Config(format!("demo seed failed: {e}")))?;
                Ok(Self::with_memory(config.clone(), store))
            }
        }
    }

    /// 基于已有内存存储构建状态 (测试使用)
    pub fn with_memory(config: Config, store: Arc<MemoryStore>) -> Self {
        Self::assemble(&config, Repositories::memory(store), StorageBackend::Memory)
    }

    /// 替换身份解析器
    pub fn with_identity(mut self, identity: Arc<dyn IdentityResolver>) -> Self {
        self.identity = identity;
        self
    }

    fn assemble(config: &Config, repos: Repositories, backend: StorageBackend) -> Self {
        let services = Services::new(config, &repos);
        Self {
            config: Arc::new(config.clone()),
            identity: Arc::new(FixedIdentity::from_config(config)),
            services,
            repos,
            pool: None,
            backend,
        }
    }
}
