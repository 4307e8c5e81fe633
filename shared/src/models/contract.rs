//! Employment Contract Model

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::employee::EmployeeSnapshot;
use super::store::Store;

/// Contract lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "contract_status", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ContractStatus {
    #[default]
    Draft,
    Sent,
    Signed,
    Active,
    Terminated,
}

wire_enum!(ContractStatus {
    Draft => "DRAFT",
    Sent => "SENT",
    Signed => "SIGNED",
    Active => "ACTIVE",
    Terminated => "TERMINATED",
});

/// How the salary is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "salary_type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum SalaryType {
    Annual,
    Monthly,
    Hourly,
}

wire_enum!(SalaryType {
    Annual => "ANNUAL",
    Monthly => "MONTHLY",
    Hourly => "HOURLY",
});

/// How often wages are paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "pay_cycle", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum PayCycle {
    Monthly,
    Weekly,
    Daily,
}

wire_enum!(PayCycle {
    Monthly => "MONTHLY",
    Weekly => "WEEKLY",
    Daily => "DAILY",
});

/// Work-day category of a schedule row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "schedule_day_type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum DayType {
    Weekday,
    Saturday,
    Sunday,
}

wire_enum!(DayType {
    Weekday => "WEEKDAY",
    Saturday => "SATURDAY",
    Sunday => "SUNDAY",
});

/// Contract header (aggregate root)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmploymentContract {
    pub id: i64,
    pub employee_id: i64,
    pub store_id: i64,
    pub status: ContractStatus,
    pub is_electronic_signed: bool,
    /// Name snapshots taken when the contract was written
    pub company_name: Option<String>,
    pub store_name: Option<String>,
    pub brand_name: Option<String>,
    pub job_description: Option<String>,
    pub salary_type: SalaryType,
    pub pay_cycle: PayCycle,
    /// Day of month (or weekday index for weekly cycles) wages are paid
    pub pay_day: Option<i32>,
    pub contract_start_date: NaiveDate,
    pub contract_end_date: Option<NaiveDate>,
    pub work_start_date: NaiveDate,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_by: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Contract row in list responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContractListItem {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub contract: EmploymentContract,
    pub employee_name: Option<String>,
}

/// Salary sub-record (zero or one per contract)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContractSalary {
    pub contract_id: i64,
    pub annual_salary: Option<Decimal>,
    pub monthly_salary: Option<Decimal>,
    pub hourly_wage: Option<Decimal>,
    pub updated_at: i64,
}

/// Work schedule sub-record (one per day type)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ContractWorkSchedule {
    pub contract_id: i64,
    pub day_type: DayType,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_start_time: Option<NaiveTime>,
    pub break_end_time: Option<NaiveTime>,
    pub updated_at: i64,
}

/// Contract header plus everything it owns or references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractDetail {
    #[serde(flatten)]
    pub contract: EmploymentContract,
    pub employee: Option<EmployeeSnapshot>,
    pub store: Option<Store>,
    pub salary: Option<ContractSalary>,
    pub schedules: Vec<ContractWorkSchedule>,
}

/// Create contract payload
///
/// Required fields are optional here so that a missing field surfaces as a
/// validation error naming the field instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractCreate {
    pub employee_id: Option<i64>,
    /// Defaults to the current user's store
    pub store_id: Option<i64>,
    pub status: Option<ContractStatus>,
    pub is_electronic_signed: Option<bool>,
    pub company_name: Option<String>,
    pub store_name: Option<String>,
    pub brand_name: Option<String>,
    pub job_description: Option<String>,
    pub salary_type: Option<SalaryType>,
    pub pay_cycle: Option<PayCycle>,
    pub pay_day: Option<i32>,
    pub contract_start_date: Option<NaiveDate>,
    pub contract_end_date: Option<NaiveDate>,
    pub work_start_date: Option<NaiveDate>,
}

/// Validated contract insert, produced by the contract service
#[derive(Debug, Clone)]
pub struct NewContract {
    pub employee_id: i64,
    pub store_id: i64,
    pub status: ContractStatus,
    pub is_electronic_signed: bool,
    pub company_name: Option<String>,
    pub store_name: Option<String>,
    pub brand_name: Option<String>,
    pub job_description: Option<String>,
    pub salary_type: SalaryType,
    pub pay_cycle: PayCycle,
    pub pay_day: Option<i32>,
    pub contract_start_date: NaiveDate,
    pub contract_end_date: Option<NaiveDate>,
    pub work_start_date: NaiveDate,
    pub created_by: Option<i64>,
    pub created_at: i64,
}

/// Update contract payload (absent fields are left unchanged)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractUpdate {
    pub status: Option<ContractStatus>,
    pub is_electronic_signed: Option<bool>,
    pub company_name: Option<String>,
    pub store_name: Option<String>,
    pub brand_name: Option<String>,
    pub job_description: Option<String>,
    pub salary_type: Option<SalaryType>,
    pub pay_cycle: Option<PayCycle>,
    pub pay_day: Option<i32>,
    pub contract_start_date: Option<NaiveDate>,
    pub contract_end_date: Option<NaiveDate>,
    pub work_start_date: Option<NaiveDate>,
}

/// Salary upsert payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalaryUpsert {
    pub annual_salary: Option<Decimal>,
    pub monthly_salary: Option<Decimal>,
    pub hourly_wage: Option<Decimal>,
}

/// One schedule row in a schedule upsert payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleUpsert {
    pub day_type: DayType,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_start_time: Option<NaiveTime>,
    pub break_end_time: Option<NaiveTime>,
}

/// Contract list filter, resolved by the contract service
#[derive(Debug, Clone, Default)]
pub struct ContractFilter {
    /// Restrict to these employees (already resolved from a name search)
    pub employee_ids: Option<Vec<i64>>,
    pub status: Option<ContractStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_wire_names() {
        assert_eq!("DRAFT".parse::<ContractStatus>(), Ok(ContractStatus::Draft));
        assert_eq!(
            "TERMINATED".parse::<ContractStatus>(),
            Ok(ContractStatus::Terminated)
        );
        assert!("draft".parse::<ContractStatus>().is_err());
        assert_eq!(ContractStatus::default(), ContractStatus::Draft);
    }

    #[test]
    fn test_serde_matches_wire_names() {
        for status in ContractStatus::ALL {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.as_str());
        }
        for day in DayType::ALL {
            let json = serde_json::to_value(day).unwrap();
            assert_eq!(json, day.as_str());
        }
    }

    #[test]
    fn test_create_payload_tolerates_missing_fields() {
        let payload: ContractCreate =
            serde_json::from_str(r#"{"employee_id": 3, "salary_type": "HOURLY"}"#).unwrap();
        assert_eq!(payload.employee_id, Some(3));
        assert_eq!(payload.salary_type, Some(SalaryType::Hourly));
        assert!(payload.pay_cycle.is_none());
    }
}
