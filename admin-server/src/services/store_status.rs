//! 门店实时状态
//!
//! 并发执行门店查询、当日销售汇总和在岗员工解析，三者之间没有顺序依赖。

use std::sync::Arc;

use chrono::{FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use shared::models::StoreStatus;

use super::attendance::AttendanceResolver;
use super::sales::SalesAggregator;
use crate::db::repository::StoreRepository;
use crate::utils::{AppError, AppResult, ErrorCode, time};

/// 入金/出金占位金额 (来自配置)
#[derive(Debug, Clone, Copy, Default)]
pub struct CashPlaceholders {
    pub deposit: Decimal,
    pub withdraw: Decimal,
}

#[derive(Clone)]
pub struct StoreStatusComposer {
    stores: Arc<dyn StoreRepository>,
    sales: SalesAggregator,
    attendance: AttendanceResolver,
    offset: FixedOffset,
    cash: CashPlaceholders,
}

impl StoreStatusComposer {
    pub fn new(
        stores: Arc<dyn StoreRepository>,
        sales: SalesAggregator,
        attendance: AttendanceResolver,
        offset: FixedOffset,
        cash: CashPlaceholders,
    ) -> Self {
        Self {
            stores,
            sales,
            attendance,
            offset,
            cash,
        }
    }

    /// 当前营业日的门店状态
    pub async fn today(&self, store_id: i64) -> AppResult<StoreStatus> {
        self.compose(store_id, time::today(self.offset)).await
    }

    /// 指定营业日的门店状态
    pub async fn compose(&self, store_id: i64, date: NaiveDate) -> AppResult<StoreStatus> {
        let (store, sales, working) = tokio::try_join!(
            async { Ok::<_, AppError>(self.stores.find_by_id(store_id).await?) },
            self.sales.daily(store_id, date),
            self.attendance.working_employees(store_id, date),
        )?;

        let store = store.ok_or_else(|| {
            AppError::new(ErrorCode::StoreNotFound).with_detail("store_id", store_id)
        })?;

        Ok(StoreStatus {
            store_name: store.name,
            today_sales: sales.total,
            sales_by_payment_type: sales.by_payment_type,
            deposit_amount: self.cash.deposit,
            withdraw_amount: self.cash.withdraw,
            working_employees: working,
            date,
        })
    }
}
