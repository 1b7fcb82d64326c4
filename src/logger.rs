use std::str::FromStr;
use std::time::SystemTime;

use log::LevelFilter;

/// sets up the global logger, writing `[time LEVEL target] message` lines to stdout.
/// An unparseable level falls back to info. Calling this again once a logger is set does nothing
pub fn init_logger(level: &str) {
    let level = parse_level(level);
    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // rocket is chatty at info, but the launch line is worth keeping
        .level_for("rocket", LevelFilter::Warn.min(level))
        .level_for("rocket::launch", level)
        .level_for("_", LevelFilter::Warn.min(level))
        .chain(std::io::stdout())
        .apply();
    if let Err(e) = result {
        log::debug!("Logger was already initialized, keeping it: {e}");
    }
}

fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level {level:?}, falling back to info");
        LevelFilter::Info
    })
}

/// the closest of rocket's own log levels to `level`. Rocket prints its launch banner at `normal`, so anything quieter than info hides it
pub fn rocket_log_level(level: &str) -> &'static str {
    match parse_level(level) {
        LevelFilter::Off => "off",
        LevelFilter::Error | LevelFilter::Warn => "critical",
        LevelFilter::Info => "normal",
        LevelFilter::Debug | LevelFilter::Trace => "debug",
    }
}
