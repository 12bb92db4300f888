mod aggregate;
mod cache;
pub mod domain;
mod filter;
pub mod loader;
pub mod narrative;
pub mod report;

pub use aggregate::{aggregate, mode_of, CategoryBreakdown};
pub use cache::DatasetCache;
pub use domain::{
    CategoryColumn, CategoryCount, CategoryOrdering, DeliveryRecord, DeliveryTable,
    SelectionState, TableSchema,
};
pub use filter::filter;
pub use loader::DataUnavailable;
pub use narrative::{narrative, Narrative};
pub use report::views::DashboardReport;
pub use report::DeliveryDashboard;
