use clap::{Parser, Subcommand};

use learnkit::commands;
use learnkit::context::CanvasContext;
use learnkit::error_fmt::{AppError, SettingsResultExt};
use learnkit::logging;
use learnkit::settings::{self, Settings};

#[derive(Parser)]
#[command(name = "learnkit")]
#[command(about = "Mind-map layout and word-search engines for learning canvases")]
struct Cli {
    /// Settings file (defaults to learnkit.yml in the working directory)
    #[arg(long, short, global = true)]
    config: Option<String>,
    /// Log engine activity to stderr (ignored when LEARNKIT_LOG or RUST_LOG
    /// is set; those filters take precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the radial layout of a mind map
    Layout {
        /// Mind-map JSON file, bare or in a success envelope
        file: String,
        /// Print the layout as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Validate a mind map or word search
    Check {
        /// Content JSON file
        file: String,
    },
    /// Replay selection gestures against a word search
    Puzzle {
        /// Word-search JSON file, bare or in a success envelope
        file: String,
        /// Cells dragged over, as "row,col row,col ..." (repeat flag for
        /// several gestures)
        #[arg(long, short)]
        gesture: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprint!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let settings_path = settings::resolve_path(cli.config.as_deref());
    let settings =
        Settings::load(&settings_path).with_settings_path(&settings_path.display().to_string())?;
    let mut ctx = CanvasContext::new(settings);

    match cli.command {
        Commands::Layout { file, json } => commands::layout(&mut ctx, &file, json),
        Commands::Check { file } => commands::check(&mut ctx, &file),
        Commands::Puzzle { file, gesture } => commands::puzzle(&mut ctx, &file, &gesture),
    }
}
