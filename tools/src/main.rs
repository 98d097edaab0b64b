use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, value_name = "FILE")]
    filename: PathBuf,

    #[arg(short, long)]
    bits: u32,
    #[arg(short, long)]
    count: i64,
}

#[derive(Parser, Debug)]
enum Commands {
    Unpack(commands::unpack::Config),
    Probs(commands::probs::Config),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let data = fs::read(cli.filename.as_path()).unwrap();
    info!(
        "Process {:?}: {} values of {} bits from {} bytes",
        cli.filename.display(),
        cli.count,
        cli.bits,
        data.len()
    );

    match cli.command {
        Commands::Unpack(cfg) => commands::unpack::command(&data, cli.bits, cli.count, cfg).unwrap(),
        Commands::Probs(cfg) => commands::probs::command(&data, cli.bits, cli.count, cfg).unwrap(),
    }
}
