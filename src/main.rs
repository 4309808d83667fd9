use anyhow::Result;
use filterdesk::config::Config;
use filterdesk::logger::Logger;
use filterdesk::records::load_records;
use filterdesk::theme::Theme;
use filterdesk::ui;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--init-config") {
        let path = match args.get(1) {
            Some(path) => PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(&path);
    }

    let config = Config::load()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    let level = if config.logging.enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger.install(level)?;

    let theme = Theme::from_config(&config.theme)?;

    let records_path = args
        .first()
        .map(PathBuf::from)
        .or_else(|| config.data.records_path.clone());
    let records = match records_path {
        Some(path) => load_records(&path)?,
        None => {
            eprintln!("❌ Error: no records file given");
            eprintln!("\n💡 To use this app:");
            eprintln!("1. Pass a JSON records file: filterdesk records.json");
            eprintln!("2. Or set records_path under [data] in filterdesk.toml");
            eprintln!("3. Run `filterdesk --init-config` to write a default config");
            return Ok(());
        }
    };

    let result = ui::run_app(config, theme, records, logger.clone()).await;
    if let Err(e) = &result {
        log::error!("Dashboard exited with error: {:#}", e);
    }
    // The installed dispatch holds a clone that is never dropped
    logger.flush();

    result
}
