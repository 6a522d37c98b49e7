use anyhow::Error;
use clap::Parser;

use identicon::logger::configure_logger;

mod cli;
use cli::{Cli, SubCommand};

fn main() -> Result<(), Error> {
    let opts: Cli = Cli::parse();
    configure_logger(opts.log_level);

    match opts.subcmd {
        SubCommand::Generate(cmd) => cmd.execute(),
        SubCommand::Pattern(cmd) => cmd.execute(),
        SubCommand::Show(cmd) => cmd.execute(),
    }
}
