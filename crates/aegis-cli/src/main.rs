use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "aegis", version, about = "Aegis security dashboard")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the dashboard web server.
    Serve {
        /// Path to aegis.yaml. Defaults are used when omitted.
        #[arg(long, short, env = "AEGIS_CONFIG")]
        config: Option<PathBuf>,

        /// Override the configured listen port.
        #[arg(long)]
        port: Option<u16>,
    },

    /// Render a component to stdout as HTML.
    Render {
        #[command(subcommand)]
        cmd: RenderCommand,
    },

    /// Validate a configuration file and print the effective settings.
    Check {
        #[arg(long, short)]
        config: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum RenderCommand {
    /// Render the audit log table.
    Audit {
        /// JSON file holding an array of records. Reads stdin when omitted.
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Render the loading skeleton instead of the records.
        #[arg(long, default_value_t = false)]
        loading: bool,

        /// Path to aegis.yaml, for display settings.
        #[arg(long, short, env = "AEGIS_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Render the status badge.
    Status {
        /// conscious | predictive | self_healing | under_attack
        #[arg(long)]
        mode: String,

        /// critical | high | medium | low | none
        #[arg(long, default_value = "none")]
        threat: String,

        /// Disable the optional pulse animation.
        #[arg(long, default_value_t = false)]
        no_animate: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so rendered HTML on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Serve { config, port } => commands::serve::run(config.as_deref(), port).await?,

        Command::Render { cmd } => {
            let html = match cmd {
                RenderCommand::Audit {
                    input,
                    loading,
                    config,
                } => {
                    let config = commands::load_config(config.as_deref())?;
                    commands::render::render_audit(input.as_deref(), loading, &config.display)?
                }
                RenderCommand::Status {
                    mode,
                    threat,
                    no_animate,
                } => commands::render::render_status(&mode, &threat, !no_animate),
            };
            println!("{html}");
        }

        Command::Check { config } => {
            let report = commands::check::run(&config)?;
            print!("{report}");
        }
    }

    Ok(())
}
