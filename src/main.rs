use std::path::PathBuf;

use clap::{Parser, Subcommand};
use foodswap_tools::{Result, ToolError, paths, sync};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    match cli.command {
        Command::Export(args) => execute_export(args),
        Command::ExportMaster(args) => execute_export_master(args),
        Command::Import(args) => execute_import(args),
        Command::ImportMaster(args) => execute_import_master(args),
    }
}

fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn execute_export(args: PathArgs) -> Result<()> {
    let counts = sync::export_entities(&args.store(), &args.foods_csv(), &args.swaps_csv())?;
    println!(
        "exported {} foods to {}",
        counts.foods,
        args.foods_csv().display()
    );
    println!(
        "exported {} swaps to {}",
        counts.swaps,
        args.swaps_csv().display()
    );
    println!("edit the CSV files in a spreadsheet tool, then run `foodswap-tools import`");
    Ok(())
}

fn execute_export_master(args: PathArgs) -> Result<()> {
    let rows = sync::export_master(&args.store(), &args.master_csv())?;
    println!(
        "exported {} swaps to {}",
        rows,
        args.master_csv().display()
    );
    println!("edit the master CSV in a spreadsheet tool, then run `foodswap-tools import-master`");
    Ok(())
}

fn execute_import(args: PathArgs) -> Result<()> {
    let counts = sync::import_entities(&args.foods_csv(), &args.swaps_csv(), &args.store())?;
    println!("loaded {} foods and {} swaps from CSV", counts.foods, counts.swaps);
    println!("updated {}", args.store().display());
    Ok(())
}

fn execute_import_master(args: PathArgs) -> Result<()> {
    let counts = sync::import_master(&args.master_csv(), &args.store())?;
    println!(
        "loaded {} unique targets and {} swaps from CSV",
        counts.foods, counts.swaps
    );
    println!("updated {}", args.store().display());
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Round-trip the food swap dataset between its JSON store and editable CSV files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export the store into one CSV file per entity type.
    Export(PathArgs),
    /// Export the store into a single denormalised master CSV.
    ExportMaster(PathArgs),
    /// Rebuild the store from the per-entity CSV files.
    Import(PathArgs),
    /// Rebuild the store from the master CSV.
    ImportMaster(PathArgs),
}

#[derive(clap::Args)]
struct PathArgs {
    /// Path to the canonical JSON store.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Directory where the CSV files are read and written.
    #[arg(long)]
    csv_dir: Option<PathBuf>,
}

impl PathArgs {
    fn store(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(paths::default_store_path)
    }

    fn csv_dir(&self) -> PathBuf {
        self.csv_dir.clone().unwrap_or_else(paths::default_csv_dir)
    }

    fn foods_csv(&self) -> PathBuf {
        self.csv_dir().join(paths::FOODS_CSV)
    }

    fn swaps_csv(&self) -> PathBuf {
        self.csv_dir().join(paths::SWAPS_CSV)
    }

    fn master_csv(&self) -> PathBuf {
        self.csv_dir().join(paths::MASTER_CSV)
    }
}
