use chrono::FixedOffset;
use rust_decimal::Decimal;

use crate::utils::time;

/// 服务器配置 - 管理后台的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_URL | (未设置) | PostgreSQL 连接串，未设置时使用内存存储 |
/// | DATABASE_MAX_CONNECTIONS | 10 | 连接池大小 |
/// | ENVIRONMENT | development | 运行环境 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | BUSINESS_UTC_OFFSET_HOURS | 9 | 营业日时区偏移(小时) |
/// | CURRENT_USER_ID | 1 | 固定身份: 用户 ID |
/// | CURRENT_USER_NAME | 관리자 | 固定身份: 显示名 |
/// | CURRENT_STORE_ID | 1 | 固定身份: 所属门店 |
/// | DEPOSIT_AMOUNT | 0 | 门店状态: 入金占位金额 |
/// | WITHDRAW_AMOUNT | 0 | 门店状态: 出金占位金额 |
/// | MASTER_ID_MAX_RETRIES | 3 | 主编号冲突重试次数 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (未设置) | 日志目录 (按天滚动) |
///
/// # 示例
///
/// ```ignore
/// DATABASE_URL=postgres://localhost/admin HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// PostgreSQL 连接串
    pub database_url: Option<String>,
    /// 连接池最大连接数
    pub database_max_connections: u32,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// 营业日时区偏移 (小时)
    pub business_utc_offset_hours: i32,

    // === 固定身份 (无认证) ===
    pub current_user_id: i64,
    pub current_user_name: String,
    pub current_store_id: i64,

    // === 门店状态占位金额 ===
    pub deposit_amount: Decimal,
    pub withdraw_amount: Decimal,

    /// 主编号分配冲突时的重试次数
    pub master_id_max_retries: u32,

    // === 日志 ===
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: env_parse("HTTP_PORT", 3000),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            database_max_connections: env_parse("DATABASE_MAX_CONNECTIONS", 10),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS", 30000),
            business_utc_offset_hours: env_parse("BUSINESS_UTC_OFFSET_HOURS", 9),

            current_user_id: env_parse("CURRENT_USER_ID", 1),
            current_user_name: std::env::var("CURRENT_USER_NAME")
                .unwrap_or_else(|_| "관리자".into()),
            current_store_id: env_parse("CURRENT_STORE_ID", 1),

            deposit_amount: env_parse("DEPOSIT_AMOUNT", Decimal::ZERO),
            withdraw_amount: env_parse("WITHDRAW_AMOUNT", Decimal::ZERO),

            master_id_max_retries: env_parse("MASTER_ID_MAX_RETRIES", 3),

            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON", false),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 测试用配置: 内存存储, 固定身份 user 1 / store 1
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            database_url: None,
            database_max_connections: 1,
            environment: "test".into(),
            request_timeout_ms: 5000,
            business_utc_offset_hours: 9,
            current_user_id: 1,
            current_user_name: "관리자".into(),
            current_store_id: 1,
            deposit_amount: Decimal::ZERO,
            withdraw_amount: Decimal::ZERO,
            master_id_max_retries: 3,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }

    /// 营业日时区
    pub fn business_offset(&self) -> FixedOffset {
        time::offset_from_hours(self.business_utc_offset_hours)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_falls_back_on_garbage() {
        // SAFETY: test-local variable name, not read concurrently elsewhere
        unsafe { std::env::set_var("ADMIN_TEST_PORT_GARBAGE", "not-a-port") };
        assert_eq!(env_parse::<u16>("ADMIN_TEST_PORT_GARBAGE", 3000), 3000);
        assert_eq!(env_parse::<u16>("ADMIN_TEST_PORT_UNSET", 8080), 8080);
    }

    #[test]
    fn test_business_offset_default_is_kst() {
        let config = Config::for_tests();
        assert_eq!(config.business_offset().local_minus_utc(), 9 * 3600);
        assert!(!config.is_production());
    }
}
