use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

mod html;
mod server;
mod store;
mod types;
mod week;

#[derive(Parser, Debug)]
#[command(name = "agendita")]
#[command(about = "Personal agenda with a weekly task board")]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding the task snapshot and generated files
    #[arg(short, long, default_value = ".", global = true)]
    data: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Render the current board to a static HTML file (no server)
    Build,
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level))
        .add_directive("hyper=warn".parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_max_level(Level::TRACE)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_level);

    match args.command {
        // Default to serve if no command specified
        None => {
            server::serve(8080, args.data).await?;
        }
        Some(Commands::Serve { port }) => {
            server::serve(port, args.data).await?;
        }
        Some(Commands::Build) => {
            let store = store::TaskStore::load(&args.data);
            let html_path = args.data.join("index.html");
            html::generate_html(store.tasks(), Local::now().date_naive(), &html_path)?;
            info!(path = %html_path.display(), "HTML saved");
        }
    }

    Ok(())
}
