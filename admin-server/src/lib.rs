//! Admin Server - 加盟店管理后台 API
//!
//! # 架构概述
//!
//! - **门店状态** (`services/store_status`): 当日销售汇总 + 在岗员工
//! - **劳动合同** (`services/contract`): 合同头 + 工资 + 工作时间表，软删除
//! - **合作方** (`services/master_id`): 由已有记录推导的顺序主编号
//! - **存储** (`db`): PostgreSQL (sqlx) 或内存存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # 请求身份 (注入的 IdentityResolver)
//! ├── services/      # 业务服务
//! ├── api/           # HTTP 路由和处理器
//! ├── routes/        # 路由装配 + 中间件栈
//! ├── middleware/    # 请求日志
//! ├── utils/         # 日志、时间、校验、分页
//! └── db/            # repository 层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, FixedIdentity, IdentityResolver};
pub use core::{Config, Server, ServerError, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 .env，初始化日志
pub fn setup_environment() -> Config {
    // .env 不存在时忽略
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    config
}
