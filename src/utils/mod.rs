use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use console::style;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, LevelFilter};
use ms::{__to_string__, ms};

pub fn set_hook() {
    // setup a panic hook to easily exit the program on panic
    std::panic::set_hook(Box::new(|panic_info| {
        // print the panic message
        let message = if let Some(message) = panic_info.payload().downcast_ref::<String>() {
            message.clone()
        } else if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
            (*message).to_string()
        } else {
            format!("{panic_info:?}")
        };

        // add some color
        log::error!("{message}");

        #[cfg(debug_assertions)]
        log::debug!("{panic_info}");

        std::process::exit(1);
    }));
}

pub fn clean_term() {
    let term = console::Term::stdout();

    // dialoguer hides the cursor while prompting
    if term.is_term() {
        term.show_cursor().ok();
    }
}

pub fn logs(verbose: bool) {
    let colors = ColoredLevelConfig::new()
        .info(Color::BrightCyan)
        .error(Color::BrightRed)
        .warn(Color::BrightYellow)
        .debug(Color::BrightWhite);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();

            match level {
                Level::Debug => out.finish(format_args!(
                    "{} [{}]: {}",
                    colors.color(Level::Debug).to_string().to_lowercase(),
                    record.target(),
                    message
                )),

                level => out.finish(format_args!(
                    "{}: {}",
                    colors.color(level).to_string().to_lowercase(),
                    message
                )),
            }
        })
        .level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        // reqwest and friends are very chatty on debug
        .level_for("hyper", LevelFilter::Info)
        .level_for("rustls", LevelFilter::Info)
        .chain(
            fern::Dispatch::new()
                .filter(|metadata| !matches!(metadata.level(), Level::Error | Level::Warn))
                .chain(std::io::stdout()),
        )
        .chain(
            fern::Dispatch::new()
                .level(log::LevelFilter::Warn)
                .chain(std::io::stderr()),
        )
        .apply()
        .ok();
}

/// Parses the timestamps sent by the API, which may or may not carry an offset.
/// Timestamps without one are UTC.
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(timestamp) {
        return Ok(date.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|date| DateTime::<Utc>::from_naive_utc_and_offset(date, Utc))
        .map_err(|e| anyhow!("Invalid timestamp `{timestamp}`: {e}"))
}

pub fn relative_time(date: DateTime<Utc>) -> String {
    let millis = (Utc::now() - date).num_milliseconds();

    ms!(millis.unsigned_abs(), true)
}

/// `3 minutes ago`, or the raw value when it can't be parsed.
pub fn format_timestamp(timestamp: &str) -> String {
    match parse_timestamp(timestamp) {
        Ok(date) => format!("{} ago", relative_time(date)),
        Err(_) => timestamp.to_string(),
    }
}

pub fn urlify(s: &str) -> String {
    style(s).bold().underlined().to_string()
}

pub fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

/// Squashes text to a single line of at most `max` characters for table cells.
pub fn truncate(s: &str, max: usize) -> String {
    let line = s.split_whitespace().collect::<Vec<_>>().join(" ");

    if line.chars().count() <= max {
        return line;
    }

    let mut cut = line.chars().take(max.saturating_sub(3)).collect::<String>();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod test {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn test_parse_timestamp() {
        let date = parse_timestamp("2024-03-01T12:30:15.123456").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 3, 1));
        assert_eq!((date.hour(), date.minute(), date.second()), (12, 30, 15));

        let date = parse_timestamp("2024-03-01T12:30:15+02:00").unwrap();
        assert_eq!(date.hour(), 10);

        let date = parse_timestamp("2024-03-01 12:30:15").unwrap();
        assert_eq!(date.minute(), 30);

        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_format_timestamp_fallback() {
        assert_eq!(format_timestamp("not a date"), "not a date");
        assert!(format_timestamp("2020-01-01T00:00:00").ends_with(" ago"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("pending"), "Pending");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hey there", 20), "hey there");
        assert_eq!(truncate("hey\n  there\tfriend", 20), "hey there friend");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
