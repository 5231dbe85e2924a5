use anyhow::Context;
use chatsift::{report, Config};
use clap::Parser;

#[derive(Parser)]
#[command(name = "chatsift", about = "chatsift — sift exported chat transcripts")]
struct Cli {
    /// Path to the exported transcript text file.
    transcript: std::path::PathBuf,

    /// Restrict the aggregations to one participant.
    #[arg(long)]
    user: Option<String>,

    /// Emit records and stats as JSON instead of the plain-text report.
    #[arg(long)]
    json: bool,

    /// Write debug logs to stderr (RUST_LOG respected).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::debug!("chatsift debug logging enabled");
    }

    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let formats = config.format_list()?;

    // The decode contract: bytes in, lossy UTF-8 out. The parser itself only
    // ever sees a valid string.
    let bytes = std::fs::read(&cli.transcript)
        .with_context(|| format!("reading transcript {}", cli.transcript.display()))?;
    let raw = String::from_utf8_lossy(&bytes);

    let records = chatsift::parse(&raw, &formats);
    let participant = cli.user.as_deref();

    if cli.json {
        let payload = report::render_json(&records, participant, &config);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", report::render_summary(&records, participant, &config));
    }
    Ok(())
}
