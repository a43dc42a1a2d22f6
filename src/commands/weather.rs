use crate::cli::WeatherArgs;
use crate::config::Config;
use crate::utils::output::{OutputStyle, print_warning};
use crate::weather::{WeatherClient, WeatherProvider};
use anyhow::Result;

pub async fn handle_weather_command(config: Config, args: &WeatherArgs) -> Result<()> {
    let weather_config = config.weather.unwrap_or_default();
    let client = WeatherClient::new(weather_config)?;

    match client.current(&args.city).await {
        Some(report) => {
            OutputStyle::print_header(&format!("🌤️  Weather for {}", args.city));
            OutputStyle::print_field("Temperature", &report.temperature.to_string());
            OutputStyle::print_field("Humidity", &report.humidity.to_string());
            OutputStyle::print_field("Conditions", &report.conditions);
        }
        None => {
            print_warning(&format!("No weather data available for '{}'", args.city));
        }
    }

    Ok(())
}
