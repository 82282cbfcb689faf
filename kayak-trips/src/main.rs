use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use kayak_trips::calendar::FlightCalendar;
use kayak_trips::feed::{FeedClient, FeedConfig};

/// Extract flight history from a travel-booking calendar feed as JSON.
#[derive(Parser, Debug)]
#[command(name = "kayak-trips", version)]
struct Cli {
    /// Exported calendar file (.ics); takes precedence over --url
    #[arg(required_unless_present = "url")]
    file: Option<PathBuf>,

    /// Private calendar feed URL
    #[arg(long, env = "KAYAK_FEED_URL")]
    url: Option<String>,

    /// Write JSON here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
}

impl Cli {
    fn feed_config(&self) -> Option<FeedConfig> {
        let config = match (&self.file, &self.url) {
            (Some(path), _) => FeedConfig::file(path),
            (None, Some(url)) => FeedConfig::url(url),
            (None, None) => return None,
        };
        Some(config.with_timeout(self.timeout))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli
        .feed_config()
        .ok_or("either a calendar FILE or --url is required")?;
    let client = FeedClient::new(config)?;
    let text = client.fetch().await?;

    let mut calendar = FlightCalendar::parse(&text)?;
    let json = if cli.compact {
        calendar.to_json_compact()?
    } else {
        calendar.to_json()?
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))?;
            eprintln!(
                "Wrote {} flights from {} to {}",
                calendar.len(),
                client.source(),
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
