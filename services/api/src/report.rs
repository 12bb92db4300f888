use chrono::Local;
use clap::Args;
use courier_insights::config::AppConfig;
use courier_insights::deliveries::report::views::CategorySection;
use courier_insights::deliveries::{
    loader, narrative, DashboardReport, DeliveryDashboard, SelectionState,
};
use courier_insights::error::AppError;
use std::path::PathBuf;

const BAR_WIDTH: usize = 30;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Delivery dataset to read (defaults to APP_DATASET_PATH or data/df_da.csv)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Vehicle type to include; repeat for several. Omit to include every vehicle.
    #[arg(long)]
    pub(crate) vehicle: Vec<String>,
    /// Print the filtered delivery rows after the breakdowns
    #[arg(long)]
    pub(crate) show_rows: bool,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        dataset,
        vehicle,
        show_rows,
        json,
    } = args;

    let path = match dataset {
        Some(path) => path,
        None => AppConfig::load()?.dataset.path,
    };
    let table = loader::load_path(&path)?;

    let selection: SelectionState = vehicle.into_iter().collect();
    let report = DeliveryDashboard::new(selection)
        .with_rows(show_rows)
        .build(&table);

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|err| AppError::Io(std::io::Error::other(err)))?;
        println!("{rendered}");
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

pub(crate) fn render_report(report: &DashboardReport) -> String {
    let narrative = narrative();
    let mut out = String::new();

    out.push_str(&format!("{}\n", narrative.title));
    out.push_str(&format!("{}\n", narrative.credit));
    out.push_str(&format!(
        "Generated {}\n",
        report.generated_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    ));

    let selected = if report.selection.is_unfiltered() {
        format!("all ({})", report.vehicle_options.join(", "))
    } else {
        report.selection.vehicle_types().collect::<Vec<_>>().join(", ")
    };
    out.push_str(&format!("Courier vehicle type: {selected}\n"));
    out.push_str(&format!(
        "Deliveries: {} of {}\n",
        report.filtered_deliveries, report.total_deliveries
    ));

    for section in &report.sections {
        out.push('\n');
        render_section(&mut out, section);
    }

    if let Some(rows) = &report.rows {
        out.push_str("\nFiltered deliveries\n");
        out.push_str(&rows.headers.join(" | "));
        out.push('\n');
        for row in &rows.rows {
            out.push_str(&row.join(" | "));
            out.push('\n');
        }
    }

    out.push_str("\nFindings\n");
    for finding in narrative.findings {
        out.push_str(&format!("- {finding}\n"));
    }

    out.push_str("\nRecommendation\n");
    for (index, recommendation) in narrative.recommendations.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}: {}\n",
            index + 1,
            recommendation.heading,
            recommendation.detail
        ));
    }
    out.push_str(&format!("\nCode Reference: {}\n", narrative.code_reference));

    out
}

fn render_section(out: &mut String, section: &CategorySection) {
    out.push_str(&format!("{}\n", section.title));

    let max = section
        .counts
        .iter()
        .map(|entry| entry.count)
        .max()
        .unwrap_or(0);
    let label_width = section
        .counts
        .iter()
        .map(|entry| entry.value.len())
        .max()
        .unwrap_or(0);

    for entry in &section.counts {
        out.push_str(&format!(
            "  {:<label_width$} {:>5} {}\n",
            entry.value,
            entry.count,
            bar(entry.count, max)
        ));
    }
    out.push_str(&format!("{}\n", section.headline));
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "#".repeat(width)
}
