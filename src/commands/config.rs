//! roomlist config コマンド

use crate::config::{default_path, Config};
use crate::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// 読み込まれる設定とキー割り当てを表示
    Show,
    /// 設定ファイルのパスを表示
    Path,
}

pub fn run(args: Args) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(),
        ConfigCommand::Path => path(),
    }
}

fn show() -> Result<()> {
    let config = Config::load()?;
    let bindings = config.bindings.to_bindings()?;

    print!("{}", config.to_toml()?);
    println!();
    println!("# Key bindings");
    for (key, dimension) in bindings.iter() {
        println!("#   {} -> {}", key, dimension);
    }
    Ok(())
}

fn path() -> Result<()> {
    match default_path() {
        Some(path) if path.exists() => println!("{}", path.display()),
        Some(path) => println!("{} (not found, using defaults)", path.display()),
        None => println!("No config path: set ROOMLIST_CONFIG or HOME"),
    }
    Ok(())
}
