//! Bridge WASM <-> JavaScript trung lập framework.

use chrono::{DateTime, NaiveDate, Utc};
use milestone_core::{CategoryVisibility, GroupedEvents, MilestoneError, TimeSince};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Tính `{years, months, days, total_days}` cho ngày sự kiện.
///
/// `now` (RFC 3339 hoặc `YYYY-MM-DD`) mặc định là thời điểm hiện tại.
#[wasm_bindgen]
pub fn time_since(date: &str, now: Option<String>) -> Result<JsValue, JsValue> {
    init_panic_hook();
    let since = compute(date, now.as_deref())?;
    to_value(&since)
        .map_err(|err| JsValue::from_str(&format!("Không serialize kết quả: {err}")))
}

/// Chuỗi rút gọn kiểu `"1y 3m"` hoặc `"<1m"`.
#[wasm_bindgen]
pub fn format_time_since(date: &str, now: Option<String>) -> Result<String, JsValue> {
    Ok(compute(date, now.as_deref())?.compact())
}

/// Đọc tài liệu `{"events": [...]}` thành danh sách sự kiện đã kiểm tra.
#[wasm_bindgen]
pub fn parse_events(document: &str) -> Result<JsValue, JsValue> {
    init_panic_hook();
    let events = milestone_feed::parse_events_str(document)
        .map_err(|err| JsValue::from_str(&format_milestone_error(err)))?;
    to_value(&events)
        .map_err(|err| JsValue::from_str(&format!("Không serialize sự kiện: {err}")))
}

/// Đọc tài liệu rồi chia nhóm `{model, tool, art}`, mỗi nhóm mới nhất trước.
#[wasm_bindgen]
pub fn group_events(document: &str) -> Result<JsValue, JsValue> {
    init_panic_hook();
    let events = milestone_feed::parse_events_str(document)
        .map_err(|err| JsValue::from_str(&format_milestone_error(err)))?;
    to_value(&GroupedEvents::from_events(&events))
        .map_err(|err| JsValue::from_str(&format!("Không serialize nhóm sự kiện: {err}")))
}

/// Đọc `location.search` thành `{model, tool, art}`.
#[wasm_bindgen]
pub fn visibility_from_query(search: &str) -> Result<JsValue, JsValue> {
    to_value(&CategoryVisibility::from_query(search))
        .map_err(|err| JsValue::from_str(&format!("Không serialize bộ lọc: {err}")))
}

/// Query chuẩn hoá cho trạng thái bộ lọc; `undefined` khi cả ba đều bật.
#[wasm_bindgen]
pub fn visibility_query(visibility: JsValue) -> Result<Option<String>, JsValue> {
    let visibility: CategoryVisibility = from_value(visibility)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được bộ lọc: {err}")))?;
    Ok(visibility.to_query())
}

fn compute(date: &str, now: Option<&str>) -> Result<TimeSince, JsValue> {
    let event_date = milestone_feed::parse_event_date(date).ok_or_else(|| {
        JsValue::from_str(&format_milestone_error(MilestoneError::Parse(format!(
            "ngày `{date}`"
        ))))
    })?;
    let now = match now {
        Some(value) => parse_now(value).ok_or_else(|| {
            JsValue::from_str(&format_milestone_error(MilestoneError::Parse(format!(
                "thời điểm `{value}`"
            ))))
        })?,
        None => Utc::now(),
    };
    Ok(TimeSince::between(event_date, now))
}

fn parse_now(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        })
}

fn init_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

fn format_milestone_error(err: MilestoneError) -> String {
    format!("Milestone error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_accepts_dates_and_timestamps() {
        assert_eq!(
            parse_now("2024-03-15").map(|dt| dt.to_rfc3339()),
            Some("2024-03-15T00:00:00+00:00".to_string())
        );
        assert!(parse_now("2024-03-15T10:00:00+07:00").is_some());
        assert!(parse_now("yesterday").is_none());
    }

    #[test]
    fn formatted_string_uses_injected_now() {
        assert_eq!(
            format_time_since("2022-11-30", Some("2024-03-15T12:00:00Z".into())).ok(),
            Some("1y 3m".to_string())
        );
    }
}
