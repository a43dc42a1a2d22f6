use crate::cli::{ListFormat, UsersArgs};
use crate::core::records::{self, UserRecord};
use crate::utils::output::OutputStyle;
use crate::utils::time_format;
use anyhow::{Context, Result};
use chrono::DateTime;
use serde_json::Value;

pub fn handle_users_command(args: &UsersArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read user file: {}", args.file.display()))?;

    let input: Vec<UserRecord> = serde_json::from_str(&content)
        .with_context(|| "Failed to parse user file as a JSON array of records")?;

    let users = records::filter_active_users(input)?;

    if users.is_empty() {
        println!("No active users found.");
        return Ok(());
    }

    let format = args.format.as_ref().unwrap_or(&ListFormat::Simple);
    match format {
        ListFormat::Simple => print_simple_list(&users),
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&users)?),
    }

    Ok(())
}

fn print_simple_list(users: &[UserRecord]) {
    for user in users {
        let created = user
            .get("created_at")
            .map(display_created_at)
            .unwrap_or_default();
        let label = user
            .get("name")
            .or_else(|| user.get("email"))
            .and_then(Value::as_str)
            .unwrap_or("<unnamed>");
        println!("{}  {}", OutputStyle::muted(&created), OutputStyle::value(label));
    }
}

/// Normalize whichever timestamp shape the record carries for display.
fn display_created_at(value: &Value) -> String {
    match value {
        Value::String(s) => time_format::parse_flexible(s)
            .map(|dt| time_format::format_datetime(&dt))
            .unwrap_or_else(|_| s.clone()),
        Value::Number(n) => n
            .as_i64()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|dt| time_format::format_datetime(&dt))
            .unwrap_or_else(|| n.to_string()),
        other => other.to_string(),
    }
}
