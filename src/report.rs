//! Terminal report rendering.
//!
//! All user-facing output goes through here so the services stay pure. Uses
//! `console` for styling; no machine-readable format is produced.

use crate::services::cleanup::DeletionOutcome;
use crate::types::mod_record::{LoaderType, ModRecord, ModStatus};
use console::{measure_text_width, pad_str, style, Alignment};
use std::path::Path;

pub fn print_autodetected(path: &Path) {
    println!(
        "{} {}",
        style("Auto-detected Minecraft mods folder:").cyan(),
        path.display()
    );
}

pub fn print_no_mods() {
    println!("{}", style("No mods found in this folder.").red());
}

pub fn print_dominant(dominant: Option<LoaderType>) {
    match dominant {
        Some(loader) => println!(
            "\n{} {}\n",
            style("Dominant loader detected:").cyan(),
            style(loader).bold()
        ),
        None => println!(
            "\n{}\n",
            style("No dominant loader could be determined (all mods are Unknown); skipping conflict analysis.")
                .yellow()
        ),
    }
}

pub fn print_all_match() {
    println!("{}", style("All mods match the same loader type!").green());
}

pub fn print_conflicts_found(count: usize) {
    println!(
        "{}",
        style(format!("Found {count} mods from other loaders.")).yellow()
    );
}

pub fn print_report_only(count: usize) {
    println!(
        "{}",
        style(format!(
            "Found {count} mods from other loaders (report-only, nothing deleted)."
        ))
        .yellow()
    );
}

pub fn print_deletion(outcome: &DeletionOutcome) {
    if !outcome.confirmed {
        println!("{}", style("Skipping deletion.").green());
        return;
    }
    for file in &outcome.deleted {
        println!("{} {file}", style("- Deleted:").red());
    }
    for (file, error) in &outcome.failed {
        println!("{}", style(format!("Failed to delete {file}: {error}")).red());
    }
}

/// Per-mod table: name, loader, version, status.
pub fn print_table(records: &[ModRecord], statuses: &[ModStatus]) {
    let header = ["Mod Name", "Type", "Version", "Status"];
    let rows: Vec<[String; 4]> = records
        .iter()
        .zip(statuses)
        .map(|(record, status)| {
            [
                record.name.clone(),
                record.loader.to_string(),
                record.version.clone(),
                status.to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(measure_text_width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(measure_text_width(cell));
        }
    }

    let pad = |cell: &str, col: usize| pad_str(cell, widths[col], Alignment::Left, None).to_string();

    println!();
    println!(
        "  {}  {}  {}  {}",
        style(pad(header[0], 0)).cyan().bold(),
        style(pad(header[1], 1)).cyan().bold(),
        style(pad(header[2], 2)).cyan().bold(),
        style(pad(header[3], 3)).cyan().bold()
    );
    println!("  {}", "─".repeat(widths.iter().sum::<usize>() + 6));

    for (row, status) in rows.iter().zip(statuses) {
        let status_cell = if *status == ModStatus::Ok {
            style(pad(&row[3], 3)).green()
        } else {
            style(pad(&row[3], 3)).red()
        };
        println!(
            "  {}  {}  {}  {}",
            style(pad(&row[0], 0)).bold(),
            style(pad(&row[1], 1)).yellow(),
            style(pad(&row[2], 2)).green(),
            status_cell
        );
    }
}

pub fn print_crash_logs(errors: &[String]) {
    println!("\n{}", style("Recent Crash Log Entries:").red().bold());
    for error in errors {
        println!("• {error}");
    }
}

pub fn print_done() {
    println!("\n{}", style("Scan complete!").green());
}
