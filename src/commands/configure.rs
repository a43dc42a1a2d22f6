use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::output::print_success;
use anyhow::Result;

pub fn handle_config_command(config: Config, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => handle_show_command(&config),
        Some(ConfigCommands::Reset) => handle_reset_command(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    println!("⚙️  Utilikit Configuration");
    println!("==========================");

    println!("General:");
    println!("  Batch size: {}", config.general.batch_size);
    println!("  Max workers: {}", config.general.max_workers);
    println!("  Color: {}", config.general.color);

    if let Some(weather) = &config.weather {
        println!("Weather:");
        println!("  Endpoint: {}", weather.endpoint);
        println!("  Timeout: {}s", weather.timeout_secs);
        println!("  Retries: {}", weather.retries);
    }

    Ok(())
}

fn handle_reset_command() -> Result<()> {
    let default_config = Config::default();
    default_config.save()?;
    print_success("Configuration reset to defaults");
    Ok(())
}
