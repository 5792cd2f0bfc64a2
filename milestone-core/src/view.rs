//! Trạng thái của trang và dữ liệu dẫn xuất phục vụ render.

use serde::{Deserialize, Serialize};

use crate::{Category, CategoryVisibility, MilestoneEvent};

/// Sự kiện đã chia theo danh mục, mỗi nhóm mới nhất trước.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupedEvents {
    pub model: Vec<MilestoneEvent>,
    pub tool: Vec<MilestoneEvent>,
    pub art: Vec<MilestoneEvent>,
}

impl GroupedEvents {
    /// Chia nhóm ổn định rồi sắp xếp giảm dần theo ngày.
    ///
    /// Sắp xếp ổn định: sự kiện trùng ngày giữ thứ tự trong nguồn.
    pub fn from_events(events: &[MilestoneEvent]) -> Self {
        let mut grouped = Self::default();
        for event in events {
            grouped.group_mut(event.category).push(event.clone());
        }
        for category in Category::ALL {
            grouped
                .group_mut(category)
                .sort_by(|a, b| b.date.cmp(&a.date));
        }
        grouped
    }

    pub fn group(&self, category: Category) -> &[MilestoneEvent] {
        match category {
            Category::Model => &self.model,
            Category::Tool => &self.tool,
            Category::Art => &self.art,
        }
    }

    fn group_mut(&mut self, category: Category) -> &mut Vec<MilestoneEvent> {
        match category {
            Category::Model => &mut self.model,
            Category::Tool => &mut self.tool,
            Category::Art => &mut self.art,
        }
    }

    /// Các section cần render, theo thứ tự cố định, bỏ qua danh mục đang tắt.
    pub fn visible_sections<'a>(
        &'a self,
        visibility: &'a CategoryVisibility,
    ) -> impl Iterator<Item = (Category, &'a [MilestoneEvent])> + 'a {
        Category::ALL
            .into_iter()
            .filter(move |category| visibility.is_visible(*category))
            .map(move |category| (category, self.group(category)))
    }

    pub fn len(&self) -> usize {
        self.model.len() + self.tool.len() + self.art.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Kết quả của lần tải dữ liệu duy nhất.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded(Vec<MilestoneEvent>),
    Failed(String),
}

impl LoadState {
    /// Chưa tải xong hoặc tải lỗi đều được coi là danh sách rỗng.
    pub fn events(&self) -> &[MilestoneEvent] {
        match self {
            LoadState::Loaded(events) => events,
            LoadState::Pending | LoadState::Failed(_) => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }
}

/// Các điểm thay đổi trạng thái hợp lệ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Toggle(Category),
    LoadSucceeded(Vec<MilestoneEvent>),
    LoadFailed(String),
}

/// Trạng thái do component gốc sở hữu.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub load: LoadState,
    pub visibility: CategoryVisibility,
}

impl ViewState {
    pub fn new(visibility: CategoryVisibility) -> Self {
        Self {
            load: LoadState::Pending,
            visibility,
        }
    }

    /// Khởi tạo từ `location.search` lúc mở trang.
    pub fn from_query(search: &str) -> Self {
        Self::new(CategoryVisibility::from_query(search))
    }

    /// Áp dụng một thay đổi; trả về `true` nếu trạng thái đổi.
    pub fn apply(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::Toggle(category) => {
                self.visibility.toggle(category);
                true
            }
            ViewAction::LoadSucceeded(events) => self.settle(LoadState::Loaded(events)),
            ViewAction::LoadFailed(reason) => self.settle(LoadState::Failed(reason)),
        }
    }

    // Danh sách sự kiện chỉ được ghi một lần.
    fn settle(&mut self, outcome: LoadState) -> bool {
        if !self.load.is_pending() {
            return false;
        }
        self.load = outcome;
        true
    }

    pub fn events(&self) -> &[MilestoneEvent] {
        self.load.events()
    }

    pub fn grouped(&self) -> GroupedEvents {
        GroupedEvents::from_events(self.events())
    }

    /// URL cần ghi đè sau mỗi lần đổi bộ lọc.
    pub fn location_for(&self, pathname: &str) -> String {
        self.visibility.location_for(pathname)
    }
}
