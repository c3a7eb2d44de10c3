use clap::Parser;
use pdbfetch::{retrieve_structure, RetrievalRequest, Settings, WWPDB_SERVER};
use std::path::PathBuf;
use tracing::{error, info, trace, Level};

/// Download a structure from the wwPDB archive
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    /// PDB identifier of the structure, e.g. 4hhb
    id: String,

    /// Output directory
    output_path: PathBuf,

    /// Sequence identity threshold for trimming
    #[arg(long, default_value_t = 0.7)]
    idscore: f64,

    /// Root of the divided archive
    #[arg(long, default_value_t = String::from(WWPDB_SERVER))]
    server: String,

    /// Verbosity of the program:
    /// -v for debug and -vv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_target(false)
        .init();
    trace!("{args:?}");

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> pdbfetch::Result<()> {
    let request =
        RetrievalRequest::new(&args.id, &args.output_path, Some(args.idscore))?.resolve()?;
    info!(
        "Structures will be saved to {}",
        request.output_directory().display()
    );

    let settings = Settings::default().with_server(&args.server);
    let path = retrieve_structure(&request, &settings)?;
    info!("Structure saved to {}", path.display());
    Ok(())
}
