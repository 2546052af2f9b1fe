//! logging stuff
use {
    crate::{config::options::LoggingFormat, getopt},
    color_eyre::Result,
    tracing::{Level, info, subscriber},
    tracing_subscriber::FmtSubscriber,
};

/// convert a level name (or its short form) into a [`tracing::Level`]
///
/// unknown names log errors only
pub fn string_to_log_level(lvl: &str) -> Level {
    match lvl.to_lowercase().as_str() {
        "d" | "debug" | "dbg" => Level::DEBUG,
        "t" | "trace" | "trc" => Level::TRACE,
        "e" | "error" | "err" => Level::ERROR,
        "i" | "info" | "inf" => Level::INFO,
        "w" | "warn" | "wrn" => Level::WARN,
        _ => Level::ERROR,
    }
}

/// setup logging
pub fn setup() -> Result<()> {
    let level = getopt!(logging.level);

    if !getopt!(logging.enable) || level.eq_ignore_ascii_case("off") {
        return Ok(());
    }

    let max_level = string_to_log_level(&level);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .with_ansi(getopt!(logging.ansi))
        .with_line_number(getopt!(logging.line_numbers))
        .with_target(getopt!(logging.event_targets));

    match getopt!(logging.format) {
        LoggingFormat::Pretty => {
            subscriber::set_global_default(subscriber.pretty().finish())?;
        }
        LoggingFormat::Compact => {
            subscriber::set_global_default(subscriber.compact().finish())?;
        }
    }

    info!("Logging setup successfully");
    Ok(())
}
