//! 时间工具函数: 业务时区转换
//!
//! 所有日期→时间戳转换统一在 service / handler 层完成，
//! repository 层只接收 `i64` Unix millis。
//! 业务时区为固定偏移 (默认 UTC+9)，没有夏令时。

use chrono::{FixedOffset, NaiveDate, NaiveTime, Offset, Utc};

use super::{AppError, AppResult};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// 解析日期字符串 (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// 可选日期参数，缺省为业务时区的今天
pub fn date_or_today(date: Option<&str>, offset: FixedOffset) -> AppResult<NaiveDate> {
    match date {
        Some(d) => parse_date(d),
        None => Ok(today(offset)),
    }
}

/// 小时偏移 → FixedOffset，超出范围时回退到 UTC
pub fn offset_from_hours(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| {
        tracing::warn!(hours, "Invalid business UTC offset, falling back to UTC");
        Utc.fix()
    })
}

/// 业务时区的今天 (当前时间换算到偏移后截断到日期)
pub fn today(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

/// 日期开始 (00:00:00.000) → Unix millis (业务时区)
pub fn day_start_millis(date: NaiveDate, offset: FixedOffset) -> i64 {
    let local_midnight = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    local_midnight - i64::from(offset.local_minus_utc()) * 1000
}

/// 日期结束 (23:59:59.999) → Unix millis (业务时区)
///
/// 返回当天最后一毫秒，调用方使用 `<= end` (含) 语义。
pub fn day_end_millis(date: NaiveDate, offset: FixedOffset) -> i64 {
    day_start_millis(date, offset) + MILLIS_PER_DAY - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kst() -> FixedOffset {
        offset_from_hours(9)
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_date("2025/03/01").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_day_bounds_in_kst() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        // 2025-03-01T00:00:00+09:00 == 2025-02-28T15:00:00Z
        assert_eq!(day_start_millis(date, kst()), 1_740_754_800_000);
        assert_eq!(
            day_end_millis(date, kst()),
            1_740_754_800_000 + MILLIS_PER_DAY - 1
        );
    }

    #[test]
    fn test_consecutive_days_do_not_overlap() {
        let d1 = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(day_end_millis(d1, kst()) + 1, day_start_millis(d2, kst()));
    }

    #[test]
    fn test_invalid_offset_falls_back_to_utc() {
        assert_eq!(offset_from_hours(30).local_minus_utc(), 0);
        assert_eq!(offset_from_hours(9).local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_date_or_today() {
        let parsed = date_or_today(Some("2024-07-15"), kst()).unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(date_or_today(None, kst()).unwrap(), today(kst()));
        assert!(date_or_today(Some("yesterday"), kst()).is_err());
    }
}
