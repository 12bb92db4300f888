use super::domain::{CategoryColumn, CategoryCount, CategoryOrdering, DeliveryTable};
use std::collections::HashMap;

/// Counts deliveries per distinct value of `column`.
///
/// Only values present in `table` appear, so the counts always sum to
/// `table.len()`. The result is ordered by [`CategoryColumn::ordering`]; an
/// empty table yields an empty vector.
pub fn aggregate(table: &DeliveryTable, column: CategoryColumn) -> Vec<CategoryCount> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for record in table.records() {
        let value = column.value_of(record);
        match slots.get(value).copied() {
            Some(slot) => counts[slot].count += 1,
            None => {
                slots.insert(value, counts.len());
                counts.push(CategoryCount::new(value, 1));
            }
        }
    }

    match column.ordering() {
        // Stable sort: equal counts stay in first-encountered order.
        CategoryOrdering::CountDescending => counts.sort_by(|a, b| b.count.cmp(&a.count)),
        CategoryOrdering::ValueAscending => counts.sort_by(|a, b| a.value.cmp(&b.value)),
    }

    counts
}

/// The entry with the highest count, or `None` when there is nothing to rank.
///
/// Ties resolve to the entry that comes first in `counts`.
pub fn mode_of(counts: &[CategoryCount]) -> Option<&CategoryCount> {
    counts.iter().fold(None, |best, candidate| match best {
        Some(current) if current.count >= candidate.count => Some(current),
        _ => Some(candidate),
    })
}

/// One chart's worth of data: ordered counts plus the mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub column: CategoryColumn,
    pub counts: Vec<CategoryCount>,
    pub total: usize,
    pub mode: Option<CategoryCount>,
}

impl CategoryBreakdown {
    pub fn build(table: &DeliveryTable, column: CategoryColumn) -> Self {
        let counts = aggregate(table, column);
        let mode = mode_of(&counts).cloned();
        Self {
            column,
            total: table.len(),
            counts,
            mode,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deliveries::loader::load_reader;
    use std::io::Cursor;

    fn table(rows: &[(&str, &str, &str, &str)]) -> DeliveryTable {
        let mut csv = String::from("Weather,Traffic_Level,Time_of_Day,Vehicle_Type\n");
        for (weather, traffic, time, vehicle) in rows {
            csv.push_str(&format!("{weather},{traffic},{time},{vehicle}\n"));
        }
        load_reader(Cursor::new(csv)).expect("table loads")
    }

    #[test]
    fn weather_keeps_count_descending_with_first_seen_ties() {
        let table = table(&[
            ("Windy", "Low", "Morning", "Bike"),
            ("Clear", "Low", "Morning", "Bike"),
            ("Clear", "Low", "Morning", "Bike"),
            ("Foggy", "Low", "Morning", "Bike"),
            ("Windy", "Low", "Morning", "Bike"),
            ("Rainy", "Low", "Morning", "Bike"),
        ]);

        let counts = aggregate(&table, CategoryColumn::Weather);
        assert_eq!(
            counts,
            vec![
                CategoryCount::new("Windy", 2),
                CategoryCount::new("Clear", 2),
                CategoryCount::new("Foggy", 1),
                CategoryCount::new("Rainy", 1),
            ]
        );
        assert_eq!(mode_of(&counts), Some(&CategoryCount::new("Windy", 2)));
    }

    #[test]
    fn traffic_and_time_sort_by_value_not_by_severity() {
        let table = table(&[
            ("Clear", "Medium", "Night", "Car"),
            ("Clear", "High", "Morning", "Car"),
            ("Clear", "Low", "Afternoon", "Car"),
            ("Clear", "Medium", "Evening", "Car"),
        ]);

        let traffic: Vec<_> = aggregate(&table, CategoryColumn::TrafficLevel)
            .into_iter()
            .map(|entry| entry.value)
            .collect();
        assert_eq!(traffic, vec!["High", "Low", "Medium"]);

        let time: Vec<_> = aggregate(&table, CategoryColumn::TimeOfDay)
            .into_iter()
            .map(|entry| entry.value)
            .collect();
        assert_eq!(time, vec!["Afternoon", "Evening", "Morning", "Night"]);
    }

    #[test]
    fn value_sorted_tie_resolves_to_smallest_value() {
        let table = table(&[
            ("Clear", "Low", "Morning", "Scooter"),
            ("Clear", "Low", "Morning", "Bike"),
        ]);
        let counts = aggregate(&table, CategoryColumn::VehicleType);
        assert_eq!(mode_of(&counts), Some(&CategoryCount::new("Bike", 1)));
    }

    #[test]
    fn mode_of_empty_sequence_is_none() {
        assert_eq!(mode_of(&[]), None);
    }

    #[test]
    fn breakdown_of_empty_table_has_no_mode() {
        let table = table(&[]);
        for column in CategoryColumn::ordered() {
            let breakdown = CategoryBreakdown::build(&table, column);
            assert!(breakdown.is_empty());
            assert_eq!(breakdown.total, 0);
            assert!(breakdown.mode.is_none());
        }
    }
}
