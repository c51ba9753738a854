use anyhow::Result;
use clap::Subcommand;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
enum Commands {
    /// Store the API token and workspace root, and configure the companion
    /// tool with them
    Configure {
        #[arg(long)]
        token: String,
        #[arg(long)]
        workspace: std::path::PathBuf,
        /// Override the API base URL
        #[arg(long)]
        api_base_url: Option<String>,
        /// Companion tool program name or path
        #[arg(long)]
        tool: Option<String>,
    },

    /// List available tracks
    Tracks {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List exercises for a track (defaults to the current track)
    Exercises {
        track: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the current track (bootstraps new tracks via hello-world)
    Track { slug: String },

    /// Set the current exercise, downloading it if needed
    Exercise { slug: String },

    /// Show an exercise's description and solution file
    Open { exercise: Option<String> },

    /// Show an exercise's test file
    ShowTests { exercise: Option<String> },

    /// Run the exercise tests via the companion tool
    Test { exercise: Option<String> },

    /// Submit the solution via the companion tool
    Submit { exercise: Option<String> },

    /// Mark the solution complete
    Complete { exercise: Option<String> },

    /// Publish the solution
    Publish { exercise: Option<String> },

    /// Unpublish the solution
    Unpublish { exercise: Option<String> },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    cli_runtime::run()
}
