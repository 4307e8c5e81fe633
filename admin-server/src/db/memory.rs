//! In-memory storage
//!
//! Implements every repository trait over plain maps behind one lock.
//! Used when no `DATABASE_URL` is configured and by the test suites; it keeps
//! the same invariants as the PostgreSQL schema (unique master ids, one open
//! session per attendance record, soft-delete filtering on reads).

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{FixedOffset, NaiveDate};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::{
    AttendanceRecord, AttendanceSession, BusinessPartner, BusinessPartnerCreate,
    BusinessPartnerType, ContractFilter, ContractListItem, ContractSalary, ContractUpdate,
    ContractWorkSchedule, DayType, EmailStatus, EmployeeSnapshot, EmploymentContract, NewContract,
    Order, Payslip, PayslipFilter, SalaryUpsert, ScheduleUpsert, Store,
};
use shared::util::now_millis;

use super::repository::{
    AttendanceRepository, BusinessPartnerRepository, ContractRepository, EmployeeRepository,
    OrderRepository, PayslipRepository, RepoError, RepoResult, StoreRepository,
};
use crate::utils::time;

#[derive(Default)]
struct Tables {
    last_id: i64,
    stores: BTreeMap<i64, Store>,
    employees: BTreeMap<i64, EmployeeSnapshot>,
    records: BTreeMap<i64, AttendanceRecord>,
    sessions: BTreeMap<i64, AttendanceSession>,
    orders: BTreeMap<i64, Order>,
    contracts: BTreeMap<i64, EmploymentContract>,
    salaries: BTreeMap<i64, ContractSalary>,
    schedules: BTreeMap<(i64, DayType), ContractWorkSchedule>,
    partners: BTreeMap<i64, BusinessPartner>,
    partner_types: Vec<BusinessPartnerType>,
    payslips: BTreeMap<i64, Payslip>,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn live_contract(&self, id: i64) -> Option<&EmploymentContract> {
        self.contracts.get(&id).filter(|c| !c.is_deleted)
    }

    fn live_payslip(&self, id: i64) -> Option<&Payslip> {
        self.payslips.get(&id).filter(|p| !p.is_deleted)
    }

    fn schedules_of(&self, contract_id: i64) -> Vec<ContractWorkSchedule> {
        self.schedules
            .range((contract_id, DayType::Weekday)..=(contract_id, DayType::Sunday))
            .map(|(_, s)| s.clone())
            .collect()
    }
}

fn page<T: Clone>(items: &[T], limit: i64, offset: i64) -> Vec<T> {
    let skip = usize::try_from(offset).unwrap_or(0);
    let take = usize::try_from(limit).unwrap_or(0);
    items.iter().skip(skip).take(take).cloned().collect()
}

/// Thread-safe in-memory store
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Empty store with the default partner type taxonomy
    pub fn new() -> Self {
        let store = Self::default();
        store.tables.write().partner_types = BusinessPartnerType::defaults();
        store
    }

    // ==================== Seeding ====================

    pub fn insert_store(&self, store: Store) -> Store {
        let mut t = self.tables.write();
        t.last_id = t.last_id.max(store.id);
        t.stores.insert(store.id, store.clone());
        store
    }

    pub fn insert_employee(&self, employee: EmployeeSnapshot) -> EmployeeSnapshot {
        let mut t = self.tables.write();
        t.last_id = t.last_id.max(employee.id);
        t.employees.insert(employee.id, employee.clone());
        employee
    }

    pub fn insert_order(
        &self,
        store_id: i64,
        final_amount: Option<Decimal>,
        payment_type: Option<&str>,
        created_at: i64,
    ) -> Order {
        let mut t = self.tables.write();
        let order = Order {
            id: t.next_id(),
            store_id,
            final_amount,
            payment_type: payment_type.map(str::to_string),
            created_at,
        };
        t.orders.insert(order.id, order.clone());
        order
    }

    pub fn insert_payslip(
        &self,
        employee_id: i64,
        store_id: i64,
        pay_period: &str,
        gross_pay: Decimal,
        deductions: Decimal,
    ) -> Payslip {
        let mut t = self.tables.write();
        let now = now_millis();
        let payslip = Payslip {
            id: t.next_id(),
            employee_id,
            store_id,
            pay_period: pay_period.to_string(),
            gross_pay,
            deductions,
            net_pay: gross_pay - deductions,
            email_status: EmailStatus::NotSent,
            sent_at: None,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };
        t.payslips.insert(payslip.id, payslip.clone());
        payslip
    }

    /// Flag a payslip deleted (payslips have no delete endpoint)
    pub fn flag_payslip_deleted(&self, id: i64) {
        if let Some(p) = self.tables.write().payslips.get_mut(&id) {
            p.is_deleted = true;
        }
    }

    /// Flag an attendance record deleted
    pub fn flag_record_deleted(&self, id: i64) {
        if let Some(r) = self.tables.write().records.get_mut(&id) {
            r.is_deleted = true;
        }
    }

    /// Insert a closed session directly (history seeding)
    pub fn insert_closed_session(&self, attendance_id: i64, clock_in: i64, clock_out: i64) {
        let mut t = self.tables.write();
        let session = AttendanceSession {
            id: t.next_id(),
            attendance_id,
            clock_in: Some(clock_in),
            clock_out: Some(clock_out),
            created_at: clock_in,
        };
        t.sessions.insert(session.id, session);
    }

    /// Replace the partner type taxonomy
    pub fn set_partner_types(&self, types: Vec<BusinessPartnerType>) {
        self.tables.write().partner_types = types;
    }

    /// Demo data for running without a database
    pub async fn seed_demo(&self, store_id: i64, offset: FixedOffset) -> RepoResult<()> {
        self.insert_store(Store {
            id: store_id,
            name: "강남점".into(),
            brand_name: Some("Crab Coffee".into()),
            company_name: Some("(주)크랩".into()),
            address: Some("서울특별시 강남구 테헤란로 1".into()),
            phone: Some("02-000-0000".into()),
        });
        for (id, name, position) in [
            (store_id * 100 + 1, "김민수", "매니저"),
            (store_id * 100 + 2, "이서연", "바리스타"),
            (store_id * 100 + 3, "박지훈", "바리스타"),
        ] {
            self.insert_employee(EmployeeSnapshot {
                id,
                store_id: Some(store_id),
                name: name.into(),
                phone: None,
                email: None,
                position: Some(position.into()),
            });
        }

        let today = time::today(offset);
        let start = time::day_start_millis(today, offset);
        let hour = 3_600_000;
        self.insert_order(store_id, Some(Decimal::from(4500)), Some("CARD"), start + 9 * hour);
        self.insert_order(store_id, Some(Decimal::from(12000)), Some("CARD"), start + 10 * hour);
        self.insert_order(store_id, Some(Decimal::from(3000)), Some("CASH"), start + 11 * hour);
        self.insert_order(store_id, None, None, start + 12 * hour);

        let first = self
            .ensure_record(store_id * 100 + 1, store_id, today, start)
            .await?;
        self.open_session(first.id, start + 8 * hour).await?;
        let second = self
            .ensure_record(store_id * 100 + 2, store_id, today, start)
            .await?;
        self.insert_closed_session(second.id, start + 7 * hour, start + 9 * hour);

        self.insert_payslip(
            store_id * 100 + 1,
            store_id,
            &today.format("%Y-%m").to_string(),
            Decimal::from(3_000_000),
            Decimal::from(280_000),
        );
        Ok(())
    }
}

#[async_trait]
impl StoreRepository for MemoryStore {
    async fn find_by_id(&self, store_id: i64) -> RepoResult<Option<Store>> {
        Ok(self.tables.read().stores.get(&store_id).cloned())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn find_name(&self, employee_id: i64) -> RepoResult<Option<String>> {
        Ok(self
            .tables
            .read()
            .employees
            .get(&employee_id)
            .map(|e| e.name.clone()))
    }

    async fn find_snapshot(&self, employee_id: i64) -> RepoResult<Option<EmployeeSnapshot>> {
        Ok(self.tables.read().employees.get(&employee_id).cloned())
    }

    async fn search_ids_by_name(&self, term: &str) -> RepoResult<Vec<i64>> {
        let needle = term.to_lowercase();
        Ok(self
            .tables
            .read()
            .employees
            .values()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .map(|e| e.id)
            .collect())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn find_in_range(&self, store_id: i64, start: i64, end: i64) -> RepoResult<Vec<Order>> {
        let mut orders: Vec<Order> = self
            .tables
            .read()
            .orders
            .values()
            .filter(|o| o.store_id == store_id && (start..=end).contains(&o.created_at))
            .cloned()
            .collect();
        orders.sort_by_key(|o| o.created_at);
        Ok(orders)
    }
}

#[async_trait]
impl AttendanceRepository for MemoryStore {
    async fn find_records(
        &self,
        store_id: i64,
        work_date: NaiveDate,
    ) -> RepoResult<Vec<AttendanceRecord>> {
        let mut records: Vec<AttendanceRecord> = self
            .tables
            .read()
            .records
            .values()
            .filter(|r| r.store_id == store_id && r.work_date == work_date && !r.is_deleted)
            .cloned()
            .collect();
        records.sort_by_key(|r| (r.employee_id, r.id));
        Ok(records)
    }

    async fn find_record(
        &self,
        employee_id: i64,
        store_id: i64,
        work_date: NaiveDate,
    ) -> RepoResult<Option<AttendanceRecord>> {
        Ok(self
            .tables
            .read()
            .records
            .values()
            .find(|r| {
                r.employee_id == employee_id
                    && r.store_id == store_id
                    && r.work_date == work_date
                    && !r.is_deleted
            })
            .cloned())
    }

    async fn ensure_record(
        &self,
        employee_id: i64,
        store_id: i64,
        work_date: NaiveDate,
        now: i64,
    ) -> RepoResult<AttendanceRecord> {
        let mut t = self.tables.write();
        if let Some(existing) = t.records.values().find(|r| {
            r.employee_id == employee_id
                && r.store_id == store_id
                && r.work_date == work_date
                && !r.is_deleted
        }) {
            return Ok(existing.clone());
        }
        let record = AttendanceRecord {
            id: t.next_id(),
            employee_id,
            store_id,
            work_date,
            is_deleted: false,
            created_at: now,
        };
        t.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn find_open_sessions(&self, attendance_id: i64) -> RepoResult<Vec<AttendanceSession>> {
        let mut sessions: Vec<AttendanceSession> = self
            .tables
            .read()
            .sessions
            .values()
            .filter(|s| s.attendance_id == attendance_id && s.is_open())
            .cloned()
            .collect();
        sessions.sort_by_key(|s| (s.clock_in, s.id));
        Ok(sessions)
    }

    async fn open_session(
        &self,
        attendance_id: i64,
        clock_in: i64,
    ) -> RepoResult<AttendanceSession> {
        let mut t = self.tables.write();
        if t
            .sessions
            .values()
            .any(|s| s.attendance_id == attendance_id && s.clock_out.is_none())
        {
            return Err(RepoError::Duplicate("uq_attendance_sessions_open".into()));
        }
        let session = AttendanceSession {
            id: t.next_id(),
            attendance_id,
            clock_in: Some(clock_in),
            clock_out: None,
            created_at: clock_in,
        };
        t.sessions.insert(session.id, session.clone());
        Ok(session)
    }

    async fn close_session(
        &self,
        session_id: i64,
        clock_out: i64,
    ) -> RepoResult<AttendanceSession> {
        let mut t = self.tables.write();
        match t.sessions.get_mut(&session_id) {
            Some(s) if s.clock_out.is_none() => {
                s.clock_out = Some(clock_out);
                Ok(s.clone())
            }
            _ => Err(RepoError::NotFound(format!("open session {session_id}"))),
        }
    }
}

#[async_trait]
impl ContractRepository for MemoryStore {
    async fn create(&self, data: NewContract) -> RepoResult<EmploymentContract> {
        let mut t = self.tables.write();
        let contract = EmploymentContract {
            id: t.next_id(),
            employee_id: data.employee_id,
            store_id: data.store_id,
            status: data.status,
            is_electronic_signed: data.is_electronic_signed,
            company_name: data.company_name,
            store_name: data.store_name,
            brand_name: data.brand_name,
            job_description: data.job_description,
            salary_type: data.salary_type,
            pay_cycle: data.pay_cycle,
            pay_day: data.pay_day,
            contract_start_date: data.contract_start_date,
            contract_end_date: data.contract_end_date,
            work_start_date: data.work_start_date,
            is_deleted: false,
            created_by: data.created_by,
            created_at: data.created_at,
            updated_at: data.created_at,
        };
        t.contracts.insert(contract.id, contract.clone());
        Ok(contract)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<EmploymentContract>> {
        Ok(self.tables.read().live_contract(id).cloned())
    }

    async fn list(
        &self,
        filter: &ContractFilter,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<ContractListItem>, i64)> {
        let t = self.tables.read();
        let mut matching: Vec<&EmploymentContract> = t
            .contracts
            .values()
            .filter(|c| !c.is_deleted)
            .filter(|c| {
                filter
                    .employee_ids
                    .as_ref()
                    .is_none_or(|ids| ids.contains(&c.employee_id))
            })
            .filter(|c| filter.status.is_none_or(|s| c.status == s))
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let items: Vec<ContractListItem> = matching
            .into_iter()
            .map(|c| ContractListItem {
                contract: c.clone(),
                employee_name: t.employees.get(&c.employee_id).map(|e| e.name.clone()),
            })
            .collect();
        let total = items.len() as i64;
        Ok((page(&items, limit, offset), total))
    }

    async fn update(
        &self,
        id: i64,
        data: ContractUpdate,
        now: i64,
    ) -> RepoResult<Option<EmploymentContract>> {
        let mut t = self.tables.write();
        let Some(c) = t.contracts.get_mut(&id).filter(|c| !c.is_deleted) else {
            return Ok(None);
        };
        if let Some(v) = data.status {
            c.status = v;
        }
        if let Some(v) = data.is_electronic_signed {
            c.is_electronic_signed = v;
        }
        if data.company_name.is_some() {
            c.company_name = data.company_name;
        }
        if data.store_name.is_some() {
            c.store_name = data.store_name;
        }
        if data.brand_name.is_some() {
            c.brand_name = data.brand_name;
        }
        if data.job_description.is_some() {
            c.job_description = data.job_description;
        }
        if let Some(v) = data.salary_type {
            c.salary_type = v;
        }
        if let Some(v) = data.pay_cycle {
            c.pay_cycle = v;
        }
        if data.pay_day.is_some() {
            c.pay_day = data.pay_day;
        }
        if let Some(v) = data.contract_start_date {
            c.contract_start_date = v;
        }
        if data.contract_end_date.is_some() {
            c.contract_end_date = data.contract_end_date;
        }
        if let Some(v) = data.work_start_date {
            c.work_start_date = v;
        }
        c.updated_at = now;
        Ok(Some(c.clone()))
    }

    async fn soft_delete(&self, id: i64, now: i64) -> RepoResult<bool> {
        let mut t = self.tables.write();
        match t.contracts.get_mut(&id) {
            Some(c) if !c.is_deleted => {
                c.is_deleted = true;
                c.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_salary(&self, contract_id: i64) -> RepoResult<Option<ContractSalary>> {
        Ok(self.tables.read().salaries.get(&contract_id).cloned())
    }

    async fn upsert_salary(
        &self,
        contract_id: i64,
        data: SalaryUpsert,
        now: i64,
    ) -> RepoResult<ContractSalary> {
        let salary = ContractSalary {
            contract_id,
            annual_salary: data.annual_salary,
            monthly_salary: data.monthly_salary,
            hourly_wage: data.hourly_wage,
            updated_at: now,
        };
        self.tables
            .write()
            .salaries
            .insert(contract_id, salary.clone());
        Ok(salary)
    }

    async fn find_schedules(&self, contract_id: i64) -> RepoResult<Vec<ContractWorkSchedule>> {
        Ok(self.tables.read().schedules_of(contract_id))
    }

    async fn upsert_schedules(
        &self,
        contract_id: i64,
        rows: Vec<ScheduleUpsert>,
        now: i64,
    ) -> RepoResult<Vec<ContractWorkSchedule>> {
        let mut t = self.tables.write();
        for row in rows {
            t.schedules.insert(
                (contract_id, row.day_type),
                ContractWorkSchedule {
                    contract_id,
                    day_type: row.day_type,
                    start_time: row.start_time,
                    end_time: row.end_time,
                    break_start_time: row.break_start_time,
                    break_end_time: row.break_end_time,
                    updated_at: now,
                },
            );
        }
        Ok(t.schedules_of(contract_id))
    }
}

#[async_trait]
impl BusinessPartnerRepository for MemoryStore {
    async fn master_ids_with_prefix(&self, prefix: &str) -> RepoResult<Vec<String>> {
        Ok(self
            .tables
            .read()
            .partners
            .values()
            .filter(|p| p.master_id.starts_with(prefix))
            .map(|p| p.master_id.clone())
            .collect())
    }

    async fn create(
        &self,
        master_id: &str,
        data: &BusinessPartnerCreate,
        now: i64,
    ) -> RepoResult<BusinessPartner> {
        let mut t = self.tables.write();
        if t.partners.values().any(|p| p.master_id == master_id) {
            return Err(RepoError::Duplicate(format!("master_id {master_id}")));
        }
        let partner = BusinessPartner {
            id: t.next_id(),
            master_id: master_id.to_string(),
            partner_type: data.partner_type.clone(),
            name: data.name.clone(),
            business_number: data.business_number.clone(),
            representative: data.representative.clone(),
            phone: data.phone.clone(),
            address: data.address.clone(),
            created_at: now,
            updated_at: now,
        };
        t.partners.insert(partner.id, partner.clone());
        Ok(partner)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<BusinessPartner>> {
        Ok(self.tables.read().partners.get(&id).cloned())
    }

    async fn list(
        &self,
        partner_type: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<BusinessPartner>, i64)> {
        let mut matching: Vec<BusinessPartner> = self
            .tables
            .read()
            .partners
            .values()
            .filter(|p| partner_type.is_none_or(|pt| p.partner_type == pt))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.master_id.cmp(&b.master_id));
        let total = matching.len() as i64;
        Ok((page(&matching, limit, offset), total))
    }

    async fn list_types(&self) -> RepoResult<Vec<BusinessPartnerType>> {
        Ok(self.tables.read().partner_types.clone())
    }
}

#[async_trait]
impl PayslipRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Payslip>> {
        Ok(self.tables.read().live_payslip(id).cloned())
    }

    async fn list(
        &self,
        filter: &PayslipFilter,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<Payslip>, i64)> {
        let mut matching: Vec<Payslip> = self
            .tables
            .read()
            .payslips
            .values()
            .filter(|p| !p.is_deleted)
            .filter(|p| filter.employee_id.is_none_or(|id| p.employee_id == id))
            .filter(|p| {
                filter
                    .pay_period
                    .as_deref()
                    .is_none_or(|period| p.pay_period == period)
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| (&b.pay_period, b.id).cmp(&(&a.pay_period, a.id)));
        let total = matching.len() as i64;
        Ok((page(&matching, limit, offset), total))
    }

    async fn update_email_status(
        &self,
        id: i64,
        status: EmailStatus,
        sent_at: Option<i64>,
        now: i64,
    ) -> RepoResult<Option<Payslip>> {
        let mut t = self.tables.write();
        let Some(p) = t.payslips.get_mut(&id).filter(|p| !p.is_deleted) else {
            return Ok(None);
        };
        p.email_status = status;
        if sent_at.is_some() {
            p.sent_at = sent_at;
        }
        p.updated_at = now;
        Ok(Some(p.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[tokio::test]
    async fn test_single_open_session_per_record() {
        let store = MemoryStore::new();
        let record = store.ensure_record(7, 1, date(), 0).await.unwrap();
        store.open_session(record.id, 100).await.unwrap();

        let err = store.open_session(record.id, 200).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        let open = store.find_open_sessions(record.id).await.unwrap();
        assert_eq!(open.len(), 1);
        store.close_session(open[0].id, 300).await.unwrap();
        assert!(store.find_open_sessions(record.id).await.unwrap().is_empty());
        store.open_session(record.id, 400).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_record_is_idempotent() {
        let store = MemoryStore::new();
        let a = store.ensure_record(7, 1, date(), 0).await.unwrap();
        let b = store.ensure_record(7, 1, date(), 10).await.unwrap();
        assert_eq!(a.id, b.id);
        assert_eq!(store.find_records(1, date()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ensure_record_skips_flagged() {
        let store = MemoryStore::new();
        let flagged = store.ensure_record(7, 1, date(), 0).await.unwrap();
        store.open_session(flagged.id, 5).await.unwrap();
        store.flag_record_deleted(flagged.id);

        let fresh = store.ensure_record(7, 1, date(), 10).await.unwrap();
        assert_ne!(fresh.id, flagged.id);
        assert!(!fresh.is_deleted);
        assert!(store.find_open_sessions(fresh.id).await.unwrap().is_empty());
        let live = store.find_records(1, date()).await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].id, fresh.id);
    }

    #[tokio::test]
    async fn test_order_range_is_inclusive() {
        let store = MemoryStore::new();
        store.insert_order(1, Some(Decimal::ONE), None, 100);
        store.insert_order(1, Some(Decimal::ONE), None, 200);
        store.insert_order(1, Some(Decimal::ONE), None, 201);
        store.insert_order(2, Some(Decimal::ONE), None, 150);

        let orders = store.find_in_range(1, 100, 200).await.unwrap();
        assert_eq!(orders.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_master_id_rejected() {
        let store = MemoryStore::new();
        let data = BusinessPartnerCreate {
            partner_type: "SUPPLIER".into(),
            name: "A".into(),
            business_number: None,
            representative: None,
            phone: None,
            address: None,
        };
        BusinessPartnerRepository::create(&store, "PTN000001", &data, 0)
            .await
            .unwrap();
        let err = BusinessPartnerRepository::create(&store, "PTN000001", &data, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_deleted_payslip_is_invisible() {
        let store = MemoryStore::new();
        let p = store.insert_payslip(1, 1, "2025-03", Decimal::from(100), Decimal::ZERO);
        store.flag_payslip_deleted(p.id);

        assert!(PayslipRepository::find_by_id(&store, p.id).await.unwrap().is_none());
        let (rows, total) = PayslipRepository::list(&store, &PayslipFilter::default(), 10, 0)
            .await
            .unwrap();
        assert!(rows.is_empty());
        assert_eq!(total, 0);
        assert!(
            store
                .update_email_status(p.id, EmailStatus::Sent, Some(1), 1)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_seed_demo() {
        let store = MemoryStore::new();
        let offset = time::offset_from_hours(9);
        store.seed_demo(1, offset).await.unwrap();

        let today = time::today(offset);
        assert!(StoreRepository::find_by_id(&store, 1).await.unwrap().is_some());
        assert_eq!(store.find_records(1, today).await.unwrap().len(), 2);
    }
}
