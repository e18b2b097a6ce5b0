//! 时间工具函数 — 业务时区换算
//!
//! 所有"今天"的判定统一使用配置的业务时区 (`Config::timezone`)，
//! 按日历日截断比较，整个进程内保持一致。

use chrono::{Datelike, NaiveDate, Weekday};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// 当前业务日 (业务时区的日历日)
pub fn today_in(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// 某月第一天；月份非法时返回校验错误
pub fn first_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::validation(format!("Invalid month: {}-{}", year, month)))
}

/// 某月的全部日历日
pub fn month_days(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let first = first_of_month(year, month)?;
    let next_month = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    Ok(first.iter_days().take_while(|d| *d < next_month).collect())
}

/// 两个日期之间的夜数 (check_out 不含)
///
/// 日期顺序颠倒时结果为负，由调用方决定是否拒绝。
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// 周末夜判定 (周六/周日晚)
pub fn is_weekend_night(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_days_june_has_30() {
        let days = month_days(2023, 6).unwrap();
        assert_eq!(days.len(), 30);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(days[29], NaiveDate::from_ymd_opt(2023, 6, 30).unwrap());
    }

    #[test]
    fn test_month_days_leap_february() {
        assert_eq!(month_days(2024, 2).unwrap().len(), 29);
        assert_eq!(month_days(2023, 2).unwrap().len(), 28);
    }

    #[test]
    fn test_month_days_december_rolls_year() {
        let days = month_days(2023, 12).unwrap();
        assert_eq!(days.len(), 31);
    }

    #[test]
    fn test_month_days_invalid_month() {
        assert!(month_days(2023, 13).is_err());
        assert!(month_days(2023, 0).is_err());
    }

    #[test]
    fn test_nights_between() {
        let ci = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let co = NaiveDate::from_ymd_opt(2023, 6, 5).unwrap();
        assert_eq!(nights_between(ci, co), 4);
        assert_eq!(nights_between(ci, ci), 0);
        assert_eq!(nights_between(co, ci), -4);
    }

    #[test]
    fn test_is_weekend_night() {
        // 2023-06-03 is a Saturday
        assert!(is_weekend_night(NaiveDate::from_ymd_opt(2023, 6, 3).unwrap()));
        assert!(is_weekend_night(NaiveDate::from_ymd_opt(2023, 6, 4).unwrap()));
        assert!(!is_weekend_night(NaiveDate::from_ymd_opt(2023, 6, 5).unwrap()));
    }
}
