mod app;
mod cli;
mod config;
mod consts;
mod error;
mod output;
mod utils;

use clap::Parser;
use literal_shelf::debug::set_debug;

use cli::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();
    let config = if cli.quiet {
        Config::load_quiet()
    } else {
        Config::load()
    };
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
