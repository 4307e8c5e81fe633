//! 业务服务层
//!
//! - [`master_id`] - 合作方主编号分配
//! - [`attendance`] - 在岗员工解析 + 打卡
//! - [`sales`] - 当日销售汇总
//! - [`contract`] - 劳动合同聚合
//! - [`store_status`] - 门店实时状态
//! - [`business_partner`] / [`payslip`] - 其他 CRUD

pub mod attendance;
pub mod business_partner;
pub mod contract;
pub mod master_id;
pub mod payslip;
pub mod sales;
pub mod store_status;

pub use attendance::AttendanceResolver;
pub use business_partner::BusinessPartnerService;
pub use contract::{ContractListQuery, ContractManager};
pub use master_id::{IdAllocator, MasterIdAllocator};
pub use payslip::PayslipService;
pub use sales::SalesAggregator;
pub use store_status::{CashPlaceholders, StoreStatusComposer};

use crate::core::Config;
use crate::db::repository::Repositories;

/// All services, wired over one set of repositories
#[derive(Clone)]
pub struct Services {
    pub attendance: AttendanceResolver,
    pub sales: SalesAggregator,
    pub contracts: ContractManager,
    pub store_status: StoreStatusComposer,
    pub partners: BusinessPartnerService,
    pub payslips: PayslipService,
}

impl Services {
    pub fn new(config: &Config, repos: &Repositories) -> Self {
        let offset = config.business_offset();
        let attendance = AttendanceResolver::new(repos.attendance.clone(), repos.employees.clone());
        let sales = SalesAggregator::new(repos.orders.clone(), offset);
        let store_status = StoreStatusComposer::new(
            repos.stores.clone(),
            sales.clone(),
            attendance.clone(),
            offset,
            CashPlaceholders {
                deposit: config.deposit_amount,
                withdraw: config.withdraw_amount,
            },
        );

        Self {
            attendance,
            sales,
            contracts: ContractManager::new(
                repos.contracts.clone(),
                repos.employees.clone(),
                repos.stores.clone(),
            ),
            store_status,
            partners: BusinessPartnerService::new(
                repos.partners.clone(),
                config.master_id_max_retries,
            ),
            payslips: PayslipService::new(repos.payslips.clone()),
        }
    }
}
