use super::domain::{CategoryColumn, DeliveryRecord, DeliveryTable, TableSchema};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// The dataset could not be turned into a [`DeliveryTable`].
///
/// Fatal for a dashboard render: callers surface it instead of drawing a
/// partial page.
#[derive(Debug, Error)]
pub enum DataUnavailable {
    #[error("failed to read delivery dataset at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid delivery CSV data: {0}")]
    Malformed(#[from] csv::Error),
    #[error("delivery dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
}

pub fn load_path<P: AsRef<Path>>(path: P) -> Result<DeliveryTable, DataUnavailable> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| DataUnavailable::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table = load_reader(file)?;
    info!(path = %path.display(), rows = table.len(), "delivery dataset loaded");
    Ok(table)
}

pub fn load_reader<R: Read>(reader: R) -> Result<DeliveryTable, DataUnavailable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();
    let schema =
        Arc::new(TableSchema::from_headers(headers).map_err(DataUnavailable::MissingColumns)?);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        records.push(record_from_row(&schema, &row));
    }

    debug!(
        columns = schema.headers().len(),
        rows = records.len(),
        "parsed delivery rows"
    );
    Ok(DeliveryTable::new(schema, records))
}

fn record_from_row(schema: &TableSchema, row: &csv::StringRecord) -> DeliveryRecord {
    let cell = |position: usize| row.get(position).unwrap_or_default().to_string();

    DeliveryRecord {
        vehicle_type: cell(schema.position_of(CategoryColumn::VehicleType)),
        weather: cell(schema.position_of(CategoryColumn::Weather)),
        traffic_level: cell(schema.position_of(CategoryColumn::TrafficLevel)),
        time_of_day: cell(schema.position_of(CategoryColumn::TimeOfDay)),
        passthrough: schema
            .passthrough_positions()
            .iter()
            .map(|&position| cell(position))
            .collect(),
    }
}
