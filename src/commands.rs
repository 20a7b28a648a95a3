use crate::cli::{Cli, Command};
use crate::error::Result;

pub mod browse;
pub mod config;
pub mod list;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::List(args) => list::run(args),
        Command::Browse(args) => browse::run(args),
        Command::Config(args) => config::run(args),
    }
}
