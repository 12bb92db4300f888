use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// One row of the delivery dataset.
///
/// The four category columns are typed fields; every other column is kept
/// verbatim in `passthrough`, aligned with [`TableSchema::passthrough_headers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    pub vehicle_type: String,
    pub weather: String,
    pub traffic_level: String,
    pub time_of_day: String,
    pub passthrough: Vec<String>,
}

/// Column layout of the loaded CSV, validated when the table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    headers: Vec<String>,
    category_positions: [usize; 4],
    passthrough_positions: Vec<usize>,
}

impl TableSchema {
    /// Resolves the required category columns against a header row.
    ///
    /// Returns the names of every missing required column on failure.
    pub fn from_headers(headers: Vec<String>) -> Result<Self, Vec<&'static str>> {
        let mut category_positions = [0usize; 4];
        let mut missing = Vec::new();

        for (slot, column) in CategoryColumn::ordered().into_iter().enumerate() {
            match headers
                .iter()
                .position(|header| header == column.column_name())
            {
                Some(position) => category_positions[slot] = position,
                None => missing.push(column.column_name()),
            }
        }

        if !missing.is_empty() {
            return Err(missing);
        }

        let passthrough_positions = (0..headers.len())
            .filter(|position| !category_positions.contains(position))
            .collect();

        Ok(Self {
            headers,
            category_positions,
            passthrough_positions,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn passthrough_headers(&self) -> impl Iterator<Item = &str> {
        self.passthrough_positions
            .iter()
            .map(|&position| self.headers[position].as_str())
    }

    pub fn position_of(&self, column: CategoryColumn) -> usize {
        self.category_positions[column.slot()]
    }

    pub(crate) fn passthrough_positions(&self) -> &[usize] {
        &self.passthrough_positions
    }

    /// Re-expands a record into the original column order.
    pub fn row(&self, record: &DeliveryRecord) -> Vec<String> {
        let mut cells = vec![String::new(); self.headers.len()];
        for column in CategoryColumn::ordered() {
            cells[self.position_of(column)] = column.value_of(record).to_string();
        }
        for (&position, value) in self.passthrough_positions.iter().zip(&record.passthrough) {
            cells[position] = value.clone();
        }
        cells
    }
}

/// Immutable, ordered snapshot of the delivery dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryTable {
    schema: Arc<TableSchema>,
    records: Vec<DeliveryRecord>,
}

impl DeliveryTable {
    pub fn new(schema: Arc<TableSchema>, records: Vec<DeliveryRecord>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    pub(crate) fn shared_schema(&self) -> Arc<TableSchema> {
        Arc::clone(&self.schema)
    }

    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn headers(&self) -> &[String] {
        self.schema.headers()
    }

    /// Rows in their original column order, for the raw table view.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|record| self.schema.row(record))
            .collect()
    }

    /// Distinct vehicle types in first-appearance order.
    pub fn vehicle_types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| seen.insert(record.vehicle_type.as_str()))
            .map(|record| record.vehicle_type.clone())
            .collect()
    }
}

/// How a breakdown is ordered before it reaches the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryOrdering {
    /// Highest count first; equal counts keep first-encountered order.
    CountDescending,
    /// Lexicographic by category value.
    ValueAscending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryColumn {
    Weather,
    TrafficLevel,
    TimeOfDay,
    VehicleType,
}

impl CategoryColumn {
    /// Dashboard tab order.
    pub fn ordered() -> [CategoryColumn; 4] {
        [
            CategoryColumn::Weather,
            CategoryColumn::TrafficLevel,
            CategoryColumn::TimeOfDay,
            CategoryColumn::VehicleType,
        ]
    }

    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Weather => "Weather",
            Self::TrafficLevel => "Traffic_Level",
            Self::TimeOfDay => "Time_of_Day",
            Self::VehicleType => "Vehicle_Type",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weather => "Weather",
            Self::TrafficLevel => "Traffic Level",
            Self::TimeOfDay => "Delivery Time",
            Self::VehicleType => "Vehicle Type",
        }
    }

    // Weather keeps its count-descending order while the other three are
    // sorted by value; callers and charts depend on both.
    pub const fn ordering(self) -> CategoryOrdering {
        match self {
            Self::Weather => CategoryOrdering::CountDescending,
            Self::TrafficLevel | Self::TimeOfDay | Self::VehicleType => {
                CategoryOrdering::ValueAscending
            }
        }
    }

    pub fn value_of(self, record: &DeliveryRecord) -> &str {
        match self {
            Self::Weather => &record.weather,
            Self::TrafficLevel => &record.traffic_level,
            Self::TimeOfDay => &record.time_of_day,
            Self::VehicleType => &record.vehicle_type,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Weather => 0,
            Self::TrafficLevel => 1,
            Self::TimeOfDay => 2,
            Self::VehicleType => 3,
        }
    }
}

/// Number of deliveries sharing one category value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Vehicle types chosen by the user. Empty means "every vehicle".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionState {
    vehicle_types: BTreeSet<String>,
}

impl SelectionState {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_unfiltered(&self) -> bool {
        self.vehicle_types.is_empty()
    }

    pub fn contains(&self, vehicle_type: &str) -> bool {
        self.vehicle_types.contains(vehicle_type)
    }

    pub fn vehicle_types(&self) -> impl Iterator<Item = &str> {
        self.vehicle_types.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vehicle_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicle_types.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionState {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        // Values are kept verbatim: a blank vehicle type is a real option.
        let vehicle_types = iter.into_iter().map(Into::into).collect();
        Self { vehicle_types }
    }
}
