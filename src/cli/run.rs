use std::{fs, path::Path};

use anyhow::Result;

use super::args::{Arguments, Command, ExtractArgs};
use super::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, default_config_json, load_config};
use crate::core::extract;
use crate::reporter;

/// Dispatch to the appropriate command handler based on parsed arguments.
///
/// With no subcommand, behaves as `extract` over the positional path.
pub fn run(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Extract(cmd)) => run_extract(cmd.args),
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            Ok(ExitStatus::Success)
        }
        None => run_extract(args.extract),
    }
}

fn run_extract(args: ExtractArgs) -> Result<ExitStatus> {
    let config = load_config(&args.path)?.config;
    let output = extract(&args.path, &config, args.verbose)?;
    let output = output.trim();

    println!("{}", output);
    if output.is_empty() {
        reporter::no_documentation();
    }

    Ok(ExitStatus::Success)
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
