use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use expenses_tui::{app::App, config::Config, logger};
use log::*;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("expenses-tui")
        .version(crate_version!())
        .about("A terminal user interface for browsing expense records")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let log = logger::init(config.log_level)?;
    if let Some(path) = config.file_path() {
        info!("Loaded configuration from {}", path.display());
    }

    App::start(config, log).await
}
