use clap::Parser;
use std::path::PathBuf;

use radar::commands::{Command, run};
use radar::data::FileStorage;
use radar::{Session, init_logging};

#[derive(Parser, Debug)]
#[command(name = "radar")]
#[command(about = "A unit-economics decision simulator for partner subscription programs")]
struct Args {
    /// Path to the data directory (default: ~/.radar/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(FileStorage::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let mut session = Session::load_or_default(FileStorage::new(data_dir));
    run(args.command, &mut session)?;

    Ok(())
}
