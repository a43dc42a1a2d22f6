use crate::cli::{CsvArgs, ListFormat};
use crate::core::tabular::{self, Row};
use crate::utils::output::OutputStyle;
use anyhow::Result;

pub fn handle_csv_command(args: &CsvArgs) -> Result<()> {
    let rows = tabular::read_csv(&args.file)?;

    if rows.is_empty() {
        println!("No data rows found.");
        return Ok(());
    }

    let format = args.format.as_ref().unwrap_or(&ListFormat::Simple);
    match format {
        ListFormat::Simple => print_simple_list(&rows),
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }

    Ok(())
}

fn print_simple_list(rows: &[Row]) {
    for (index, row) in rows.iter().enumerate() {
        let mut columns: Vec<_> = row.iter().collect();
        columns.sort_by_key(|(header, _)| header.as_str());

        let line = columns
            .iter()
            .map(|(header, value)| format!("{}={}", header, value))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}  {}", OutputStyle::muted(&format!("{:>4}", index + 1)), line);
    }
}
