use super::super::domain::{CategoryColumn, CategoryCount, CategoryOrdering, SelectionState};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarOrientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorEncoding {
    /// One colour per category value, with a legend.
    ByCategory,
    /// Bars shaded by count on a sequential scheme, no legend.
    ByCount { scheme: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartHint {
    pub orientation: BarOrientation,
    pub color: ColorEncoding,
    pub value_axis_title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_axis_title: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    pub column: CategoryColumn,
    pub label: &'static str,
    pub title: &'static str,
    pub ordering: CategoryOrdering,
    pub counts: Vec<CategoryCount>,
    pub total: usize,
    pub mode: Option<CategoryCount>,
    pub headline: String,
    pub chart: ChartHint,
}

#[derive(Debug, Clone, Serialize)]
pub struct RawTableView {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Everything one dashboard render needs for a given vehicle selection.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub generated_at: DateTime<Utc>,
    pub vehicle_options: Vec<String>,
    pub selection: SelectionState,
    pub total_deliveries: usize,
    pub filtered_deliveries: usize,
    pub sections: Vec<CategorySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<RawTableView>,
}

impl DashboardReport {
    pub fn section(&self, column: CategoryColumn) -> Option<&CategorySection> {
        self.sections.iter().find(|section| section.column == column)
    }
}
