use super::domain::{DeliveryTable, SelectionState};
use tracing::debug;

/// Narrows `table` to the selected vehicle types, keeping row order.
///
/// An empty selection means "no filter" and returns every row. Selections
/// that match nothing produce an empty table rather than an error.
pub fn filter(table: &DeliveryTable, selection: &SelectionState) -> DeliveryTable {
    if selection.is_unfiltered() {
        return table.clone();
    }

    let records = table
        .records()
        .iter()
        .filter(|record| selection.contains(&record.vehicle_type))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        selected = selection.len(),
        matched = records.len(),
        total = table.len(),
        "applied vehicle type selection"
    );

    DeliveryTable::new(table.shared_schema(), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deliveries::loader::load_reader;
    use std::io::Cursor;

    fn table() -> DeliveryTable {
        load_reader(Cursor::new(
            "Order_ID,Weather,Traffic_Level,Time_of_Day,Vehicle_Type\n\
1,Clear,Low,Morning,Bike\n\
2,Rainy,High,Evening,Bike\n\
3,Foggy,Medium,Night,Scooter\n\
4,Clear,Low,Afternoon,Car\n\
5,Snowy,High,Morning,Bike\n",
        ))
        .expect("table loads")
    }

    fn order_ids(table: &DeliveryTable) -> Vec<&str> {
        table
            .records()
            .iter()
            .map(|record| record.passthrough[0].as_str())
            .collect()
    }

    #[test]
    fn empty_selection_passes_every_row_through() {
        let table = table();
        let filtered = filter(&table, &SelectionState::all());
        assert_eq!(filtered, table);
    }

    #[test]
    fn keeps_matching_rows_in_original_order() {
        let table = table();
        let selection: SelectionState = ["Car", "Bike"].into_iter().collect();
        let filtered = filter(&table, &selection);
        assert_eq!(order_ids(&filtered), vec!["1", "2", "4", "5"]);
        assert_eq!(filtered.headers(), table.headers());
    }

    #[test]
    fn selecting_every_vehicle_type_keeps_row_count() {
        let table = table();
        let selection: SelectionState = table.vehicle_types().into_iter().collect();
        assert_eq!(filter(&table, &selection).len(), table.len());
    }

    #[test]
    fn blank_vehicle_type_is_selectable_on_its_own() {
        let table = load_reader(Cursor::new(
            "Order_ID,Weather,Traffic_Level,Time_of_Day,Vehicle_Type\n\
1,Clear,Low,Morning,Bike\n\
2,Rainy,High,Evening,\n\
3,Foggy,Medium,Night,Car\n",
        ))
        .expect("table loads");
        assert_eq!(table.vehicle_types(), vec!["Bike", "", "Car"]);

        let selection: SelectionState = [""].into_iter().collect();
        let filtered = filter(&table, &selection);
        assert_eq!(order_ids(&filtered), vec!["2"]);
    }

    #[test]
    fn unknown_vehicle_type_yields_empty_table() {
        let table = table();
        let selection: SelectionState = ["Truck"].into_iter().collect();
        let filtered = filter(&table, &selection);
        assert!(filtered.is_empty());
        assert_eq!(filtered.headers(), table.headers());
    }
}
