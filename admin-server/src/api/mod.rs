//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`business_partners`] - 合作方管理接口
//! - [`contracts`] - 劳动合同管理接口
//! - [`store_status`] - 门店实时状态
//! - [`sales`] - 销售汇总
//! - [`attendance`] - 出勤 / 打卡
//! - [`payslips`] - 工资单接口

pub mod attendance;
pub mod business_partners;
pub mod contracts;
pub mod health;
pub mod payslips;
pub mod sales;
pub mod store_status;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppResult};
