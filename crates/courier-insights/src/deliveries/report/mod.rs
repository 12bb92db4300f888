pub mod views;

use super::aggregate::CategoryBreakdown;
use super::domain::{CategoryColumn, CategoryCount, DeliveryTable, SelectionState};
use super::filter::filter;
use chrono::Utc;
use tracing::debug;
use views::{
    BarOrientation, CategorySection, ChartHint, ColorEncoding, DashboardReport, RawTableView,
};

pub const NO_DATA_HEADLINE: &str = "No deliveries match the current vehicle selection.";
pub const BLANK_VALUE_LABEL: &str = "(blank)";

/// Recomputes the dashboard from the full table for one user interaction.
#[derive(Debug, Clone, Default)]
pub struct DeliveryDashboard {
    pub selection: SelectionState,
    pub include_rows: bool,
}

impl DeliveryDashboard {
    pub fn new(selection: SelectionState) -> Self {
        Self {
            selection,
            include_rows: false,
        }
    }

    pub fn with_rows(mut self, include_rows: bool) -> Self {
        self.include_rows = include_rows;
        self
    }

    pub fn build(&self, table: &DeliveryTable) -> DashboardReport {
        let filtered = filter(table, &self.selection);

        let sections = CategoryColumn::ordered()
            .into_iter()
            .map(|column| section(CategoryBreakdown::build(&filtered, column)))
            .collect();

        let rows = self.include_rows.then(|| RawTableView {
            headers: filtered.headers().to_vec(),
            rows: filtered.rows(),
        });

        debug!(
            filtered = filtered.len(),
            total = table.len(),
            "dashboard recomputed"
        );

        DashboardReport {
            generated_at: Utc::now(),
            vehicle_options: table.vehicle_types(),
            selection: self.selection.clone(),
            total_deliveries: table.len(),
            filtered_deliveries: filtered.len(),
            sections,
            rows,
        }
    }
}

fn section(breakdown: CategoryBreakdown) -> CategorySection {
    let CategoryBreakdown {
        column,
        counts,
        total,
        mode,
    } = breakdown;

    CategorySection {
        column,
        label: column.label(),
        title: title(column),
        ordering: column.ordering(),
        headline: headline(column, mode.as_ref()),
        chart: chart_hint(column),
        counts,
        total,
        mode,
    }
}

fn title(column: CategoryColumn) -> &'static str {
    match column {
        CategoryColumn::Weather => "Total Delivery by Weather Condition",
        CategoryColumn::TrafficLevel => "Total Delivery by Traffic Level",
        CategoryColumn::TimeOfDay => "Total Delivery by Delivery Time of Day",
        CategoryColumn::VehicleType => "Total Delivery by Vehicle Type",
    }
}

pub fn headline(column: CategoryColumn, mode: Option<&CategoryCount>) -> String {
    let Some(CategoryCount { value, count }) = mode else {
        return NO_DATA_HEADLINE.to_string();
    };
    let value = if value.is_empty() {
        BLANK_VALUE_LABEL
    } else {
        value.as_str()
    };

    match column {
        CategoryColumn::Weather => {
            format!("Most common weather condition: {value} with {count} total deliveries.")
        }
        CategoryColumn::TrafficLevel => format!(
            "The most common traffic level: {value} traffic with {count} total deliveries."
        ),
        CategoryColumn::TimeOfDay => {
            format!("The most common delivery time: {value} with {count} total deliveries.")
        }
        CategoryColumn::VehicleType => format!(
            "Most common vehicle type used by the courier: {value} with {count} total deliveries."
        ),
    }
}

fn chart_hint(column: CategoryColumn) -> ChartHint {
    match column {
        CategoryColumn::Weather => ChartHint {
            orientation: BarOrientation::Horizontal,
            color: ColorEncoding::ByCategory,
            value_axis_title: "Number of Deliveries",
            category_axis_title: None,
        },
        CategoryColumn::TrafficLevel => ChartHint {
            orientation: BarOrientation::Vertical,
            color: ColorEncoding::ByCount { scheme: "blues" },
            value_axis_title: "Number of Deliveries",
            category_axis_title: Some("Traffic Level"),
        },
        CategoryColumn::TimeOfDay => ChartHint {
            orientation: BarOrientation::Vertical,
            color: ColorEncoding::ByCount { scheme: "greens" },
            value_axis_title: "Number of Deliveries",
            category_axis_title: Some("Delivery Time of Day"),
        },
        CategoryColumn::VehicleType => ChartHint {
            orientation: BarOrientation::Horizontal,
            color: ColorEncoding::ByCategory,
            value_axis_title: "Number of Deliveries",
            category_axis_title: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deliveries::loader::load_reader;
    use std::io::Cursor;

    fn table() -> DeliveryTable {
        load_reader(Cursor::new(
            "Order_ID,Weather,Traffic_Level,Time_of_Day,Vehicle_Type,Delivery_Time_min\n\
1,Clear,Low,Morning,Bike,41\n\
2,Rainy,High,Evening,Bike,72\n\
3,Clear,Medium,Night,Scooter,38\n\
4,Clear,Low,Afternoon,Car,55\n\
5,Snowy,High,Morning,Bike,80\n",
        ))
        .expect("table loads")
    }

    #[test]
    fn sections_follow_tab_order_with_headlines() {
        let report = DeliveryDashboard::default().build(&table());

        let columns: Vec<_> = report.sections.iter().map(|s| s.column).collect();
        assert_eq!(columns, CategoryColumn::ordered().to_vec());
        assert_eq!(report.vehicle_options, vec!["Bike", "Scooter", "Car"]);
        assert_eq!(report.filtered_deliveries, 5);

        let weather = report.section(CategoryColumn::Weather).expect("weather");
        assert_eq!(
            weather.headline,
            "Most common weather condition: Clear with 3 total deliveries."
        );
        let traffic = report
            .section(CategoryColumn::TrafficLevel)
            .expect("traffic");
        assert_eq!(
            traffic.headline,
            "The most common traffic level: High traffic with 2 total deliveries."
        );
        assert!(report.rows.is_none());
    }

    #[test]
    fn empty_selection_result_renders_no_data_sections() {
        let selection: SelectionState = ["Truck"].into_iter().collect();
        let report = DeliveryDashboard::new(selection).with_rows(true).build(&table());

        assert_eq!(report.total_deliveries, 5);
        assert_eq!(report.filtered_deliveries, 0);
        for section in &report.sections {
            assert!(section.counts.is_empty());
            assert!(section.mode.is_none());
            assert_eq!(section.headline, NO_DATA_HEADLINE);
        }
        let rows = report.rows.expect("row view requested");
        assert_eq!(rows.headers.len(), 6);
        assert!(rows.rows.is_empty());
    }

    #[test]
    fn raw_rows_keep_original_columns() {
        let selection: SelectionState = ["Car"].into_iter().collect();
        let report = DeliveryDashboard::new(selection).with_rows(true).build(&table());
        let rows = report.rows.expect("row view requested");
        assert_eq!(
            rows.rows,
            vec![vec!["4", "Clear", "Low", "Afternoon", "Car", "55"]]
        );
    }

    #[test]
    fn blank_mode_value_gets_a_placeholder() {
        let mode = CategoryCount::new("", 4);
        assert_eq!(
            headline(CategoryColumn::Weather, Some(&mode)),
            "Most common weather condition: (blank) with 4 total deliveries."
        );
        assert_eq!(
            headline(CategoryColumn::VehicleType, None),
            NO_DATA_HEADLINE
        );
    }

    #[test]
    fn report_serializes_chart_hints() {
        let report = DeliveryDashboard::default().build(&table());
        let json = serde_json::to_value(&report).expect("report serializes");
        let traffic = &json["sections"][1];
        assert_eq!(traffic["column"], "traffic_level");
        assert_eq!(traffic["ordering"], "value_ascending");
        assert_eq!(traffic["chart"]["orientation"], "vertical");
        assert_eq!(traffic["chart"]["color"]["kind"], "by_count");
        assert_eq!(traffic["chart"]["color"]["scheme"], "blues");
        assert_eq!(json["sections"][0]["ordering"], "count_descending");
        assert!(json.get("rows").is_none());
    }
}
