use crate::cli::{FibArgs, ListFormat};
use crate::core::sequence;
use anyhow::Result;

pub fn handle_fib_command(args: &FibArgs) -> Result<()> {
    let terms = sequence::fibonacci(args.count)?;

    let format = args.format.as_ref().unwrap_or(&ListFormat::Simple);
    match format {
        ListFormat::Simple => {
            let line = terms
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("{}", line);
        }
        ListFormat::Json => {
            println!("{}", serde_json::to_string(&terms)?);
        }
    }

    Ok(())
}
