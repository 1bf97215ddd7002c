use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = config.log_level_filter()
        .map_err(|e| CustomError::new(&e.to_string()))?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| CustomError::new(&format!("Failed to initialize logging: {}", e)))?;
    info!("logging initialized.");
    Ok(())
}

/// Parses `key=value` pairs as given on the command line.
pub fn parse_key_value(input: &str) -> Result<(String, String), CustomError>
{
    match input.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(CustomError::new(&format!("expected key=value, got '{}'", input))),
    }
}
