mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod history;
mod output;
mod session;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    let config = if cli.no_config {
        Config::default()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);

    utils::logging::init(cli.debug);

    if let Err(e) = app::run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
