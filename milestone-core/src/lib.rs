//! Logic lõi cho trang "How Long Since AI?": mô hình sự kiện, tính thời gian đã trôi qua,
//! trạng thái bộ lọc danh mục và dữ liệu dẫn xuất để hiển thị.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod elapsed;
pub mod view;
pub mod visibility;

pub use elapsed::{format_time_since, TimeSince};
pub use view::{GroupedEvents, LoadState, ViewAction, ViewState};
pub use visibility::CategoryVisibility;

/// Cấu hình nạp dữ liệu cho trang.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MilestoneConfig {
    /// Đường dẫn tới tài liệu JSON chứa danh sách sự kiện.
    pub events_url: String,
}

impl Default for MilestoneConfig {
    fn default() -> Self {
        Self {
            events_url: "/events.json".to_string(),
        }
    }
}

/// Nhóm phân loại sự kiện, theo thứ tự liệt kê cố định.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Model,
    Tool,
    Art,
}

impl Category {
    /// Cả ba danh mục theo thứ tự hiển thị.
    pub const ALL: [Category; 3] = [Category::Model, Category::Tool, Category::Art];

    /// Token dùng trong JSON và tham số `show` của URL.
    pub fn token(self) -> &'static str {
        match self {
            Category::Model => "model",
            Category::Tool => "tool",
            Category::Art => "art",
        }
    }

    /// Tiêu đề section.
    pub fn title(self) -> &'static str {
        match self {
            Category::Model => "Models",
            Category::Tool => "Programming",
            Category::Art => "Art",
        }
    }

    /// Màu nhấn của section và nút lọc.
    pub fn color(self) -> &'static str {
        match self {
            Category::Model => "#00d9a0",
            Category::Tool => "#a855f7",
            Category::Art => "#f472b6",
        }
    }

    /// Chuyển token sang danh mục; token lạ trả về `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.token() == token)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Category {
    type Err = MilestoneError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::from_token(value).ok_or_else(|| MilestoneError::UnknownCategory {
            id: None,
            value: value.to_string(),
        })
    }
}

/// Một cột mốc AI, bất biến sau khi nạp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MilestoneEvent {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
}

impl MilestoneEvent {
    /// Thời gian đã trôi qua tính tới `now`.
    pub fn time_since(&self, now: chrono::DateTime<chrono::Utc>) -> TimeSince {
        TimeSince::between(self.date, now)
    }
}

/// Lỗi chung khi dựng dữ liệu cho trang.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MilestoneError {
    #[error("Dữ liệu đầu vào thiếu thông tin tối thiểu")]
    MissingData,
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Ngày không hợp lệ `{value}` ở sự kiện {id}")]
    InvalidDate { id: String, value: String },
    #[error("Danh mục không hợp lệ `{value}`{}", describe_id(.id))]
    UnknownCategory { id: Option<String>, value: String },
    #[error("Trùng id sự kiện: {0}")]
    DuplicateId(String),
    #[error("Lỗi khác: {0}")]
    Other(String),
}

fn describe_id(id: &Option<String>) -> String {
    id.as_ref()
        .map(|id| format!(" ở sự kiện {id}"))
        .unwrap_or_default()
}
