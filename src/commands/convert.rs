use crate::cli::ConvertArgs;
use crate::core::xml;
use crate::utils::output::print_success;
use anyhow::{Context, Result};

pub fn handle_convert_command(args: &ConvertArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read JSON file: {}", args.file.display()))?;

    let output = xml::json_to_xml(&content)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write XML file: {}", path.display()))?;
            print_success(&format!("Wrote XML to {}", path.display()));
        }
        None => println!("{}", output),
    }

    Ok(())
}
