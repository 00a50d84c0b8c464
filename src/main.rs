mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod fetch;
mod output;
mod scrape;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::core::CrawlConfig;

fn main() {
    let cli = Cli::parse();
    let file_config = Config::load(cli.quiet);

    let crawl = match CrawlConfig::resolve(&cli, &file_config) {
        Ok(crawl) => crawl,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = app::run(&crawl) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
