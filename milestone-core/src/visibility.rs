//! Trạng thái bật/tắt danh mục và đồng bộ hai chiều với tham số `show` của URL.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::Category;

/// Tên tham số query chứa danh sách danh mục đang bật.
pub const SHOW_PARAM: &str = "show";

/// Mỗi danh mục luôn có đúng một cờ hiển thị.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CategoryVisibility {
    pub model: bool,
    pub tool: bool,
    pub art: bool,
}

impl Default for CategoryVisibility {
    fn default() -> Self {
        Self::all(true)
    }
}

impl CategoryVisibility {
    pub fn all(visible: bool) -> Self {
        Self {
            model: visible,
            tool: visible,
            art: visible,
        }
    }

    /// Đọc trạng thái từ `location.search` (có hoặc không có dấu `?`).
    ///
    /// Thiếu `show` thì bật cả ba. Có `show` thì chỉ bật các token được liệt kê,
    /// token lạ bị bỏ qua. Nếu `show` xuất hiện nhiều lần, lấy giá trị đầu tiên.
    pub fn from_query(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let show = form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == SHOW_PARAM)
            .map(|(_, value)| value.into_owned());

        let Some(show) = show else {
            return Self::default();
        };

        let mut visibility = Self::all(false);
        for category in show
            .split(',')
            .map(str::trim)
            .filter_map(Category::from_token)
        {
            visibility.set(category, true);
        }
        visibility
    }

    pub fn is_visible(&self, category: Category) -> bool {
        match category {
            Category::Model => self.model,
            Category::Tool => self.tool,
            Category::Art => self.art,
        }
    }

    pub fn set(&mut self, category: Category, visible: bool) {
        let flag = match category {
            Category::Model => &mut self.model,
            Category::Tool => &mut self.tool,
            Category::Art => &mut self.art,
        };
        *flag = visible;
    }

    /// Đảo cờ của đúng một danh mục.
    pub fn toggle(&mut self, category: Category) {
        self.set(category, !self.is_visible(category));
    }

    /// Danh mục đang bật, theo thứ tự liệt kê cố định.
    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(move |category| self.is_visible(*category))
    }

    pub fn all_enabled(&self) -> bool {
        self.model && self.tool && self.art
    }

    /// Query chuẩn hoá (không có `?`). `None` khi cả ba đều bật: URL mặc định không có query.
    pub fn to_query(&self) -> Option<String> {
        if self.all_enabled() {
            return None;
        }
        let tokens: Vec<&str> = self.enabled().map(Category::token).collect();
        Some(format!("{SHOW_PARAM}={}", tokens.join(",")))
    }

    /// URL tương đối dùng cho `history.replaceState`.
    pub fn location_for(&self, pathname: &str) -> String {
        match self.to_query() {
            Some(query) => format!("{pathname}?{query}"),
            None => pathname.to_string(),
        }
    }
}
