//! Tính khoảng thời gian đã trôi qua theo lịch (năm, tháng, ngày).

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Khoảng thời gian từ ngày sự kiện tới thời điểm tính.
///
/// `years`/`months`/`days` bám theo ranh giới lịch, còn `total_days` là số ngày
/// thực tế (làm tròn xuống), nên hai cách đếm có thể lệch nhau.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSince {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: u64,
}

impl TimeSince {
    /// Tính khoảng cách giữa `event_date` (00:00 UTC) và `now`.
    ///
    /// Ngày trong tương lai cho kết quả bằng không ở mọi trường.
    pub fn between(event_date: NaiveDate, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        if event_date > today {
            return Self::default();
        }

        let start = event_date.and_time(NaiveTime::MIN).and_utc();
        let total_days = now.signed_duration_since(start).num_days().max(0) as u64;

        let mut years = today.year() - event_date.year();
        let mut months = today.month() as i32 - event_date.month() as i32;
        let mut days = today.day() as i32 - event_date.day() as i32;

        if days < 0 {
            months -= 1;
            // Ngày của sự kiện bị kẹp vào độ dài tháng trước (31/1 -> 29/2).
            let previous = days_in_previous_month(today) as i32;
            days = today.day() as i32 + previous - (event_date.day() as i32).min(previous);
        }

        if months < 0 {
            years -= 1;
            months += 12;
        }

        Self {
            years: years as u32,
            months: months as u32,
            days: days as u32,
            total_days,
        }
    }

    /// Tính tới thời điểm hiện tại.
    pub fn since(event_date: NaiveDate) -> Self {
        Self::between(event_date, Utc::now())
    }

    /// Chuỗi hiển thị rút gọn: `"2y 3m"`, `"5m"`, `"1y"` hoặc `"<1m"`.
    pub fn compact(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if self.years > 0 {
            parts.push(format!("{}y", self.years));
        }
        if self.months > 0 {
            parts.push(format!("{}m", self.months));
        }
        if parts.is_empty() {
            return "<1m".to_string();
        }
        parts.join(" ")
    }
}

impl fmt::Display for TimeSince {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}

/// Tiện ích: tính rồi định dạng luôn.
pub fn format_time_since(event_date: NaiveDate, now: DateTime<Utc>) -> String {
    TimeSince::between(event_date, now).compact()
}

fn days_in_previous_month(date: NaiveDate) -> u32 {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}
