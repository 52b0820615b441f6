mod commands;
mod terminal;

use std::time::Duration;

use cepr_common::cep::Cep;
use cepr_common::config::Config;
use colored::*;
use commands::CommandLine;

use crate::terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    // Validation happens before any network work; a bad code never spawns
    // a fetch.
    let cep: Cep = match commands.cep.parse() {
        Ok(cep) => cep,
        Err(err) => {
            eprintln!("{}", err.to_string().red().bold());
            std::process::exit(1);
        }
    };

    let cfg = Config::from_env(
        Duration::from_millis(commands.timeout_ms),
        commands.quiet,
    );

    commands::lookup::lookup(&cep, &cfg).await
}
