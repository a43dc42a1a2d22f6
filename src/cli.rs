use crate::commands::{configure, convert, csv, fib, password, users, weather};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "utilikit")]
#[command(about = "A Rust-based command-line toolkit for everyday data utilities")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub async fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Fib(args) => {
                fib::handle_fib_command(&args)?;
            }
            Commands::Users(args) => {
                users::handle_users_command(&args)?;
            }
            Commands::Weather(args) => {
                weather::handle_weather_command(config, &args).await?;
            }
            Commands::Csv(args) => {
                csv::handle_csv_command(&args)?;
            }
            Commands::Password(args) => {
                password::handle_password_command(&args)?;
            }
            Commands::Convert(args) => {
                convert::handle_convert_command(&args)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, args.command.clone())?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Fibonacci sequence
    Fib(FibArgs),

    /// Filter and sort user records from a JSON file
    Users(UsersArgs),

    /// Look up current weather for a city
    Weather(WeatherArgs),

    /// Parse a CSV file into header-keyed records
    Csv(CsvArgs),

    /// Check a password against the security requirements
    Password(PasswordArgs),

    /// Convert a JSON file to XML
    Convert(ConvertArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct FibArgs {
    #[arg(help = "Number of terms to generate")]
    pub count: i64,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args)]
pub struct UsersArgs {
    #[arg(help = "JSON file containing an array of user records")]
    pub file: PathBuf,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args)]
pub struct WeatherArgs {
    #[arg(help = "City name to look up")]
    pub city: String,
}

#[derive(Args)]
pub struct CsvArgs {
    #[arg(help = "CSV file to parse")]
    pub file: PathBuf,

    #[arg(short, long)]
    pub format: Option<ListFormat>,
}

#[derive(Args)]
pub struct PasswordArgs {
    #[arg(help = "Password to check")]
    pub password: String,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[arg(help = "JSON file to convert")]
    pub file: PathBuf,

    #[arg(short, long, help = "Write the XML to a file instead of stdout")]
    pub output: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone)]
pub enum ListFormat {
    Simple,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}
