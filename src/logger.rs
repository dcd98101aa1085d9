use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Other crates stay at warn so `--debug` shows only this tool's trace
fn logger(debug: bool) -> SimpleLogger {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level(env!("CARGO_CRATE_NAME"), level)
}

pub fn init(debug: bool) -> Result<()> {
    logger(debug).init()?;

    Ok(())
}
