use std::ffi::OsString;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ezbio_rs::{EzClient, Extraction, profile};
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Parser)]
#[command(name = "ezbio")]
#[command(about = "Print an e-z.bio profile as one line of JSON")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Username, `@username`, or `https://e-z.bio/<username>`.
    #[arg(allow_hyphen_values = true)]
    username: String,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Alternative profile base URL.
    #[arg(long, hide = true)]
    base_url: Option<Url>,

    /// Reject usernames outside `[A-Za-z0-9_.-]`.
    #[arg(long)]
    strict: bool,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// A lone argument is always the username, even when it looks like a flag.
    fn from_args(args: Vec<OsString>) -> Option<Self> {
        if let [_, username] = args.as_slice() {
            return Some(Cli {
                username: username.to_string_lossy().into_owned(),
                timeout: DEFAULT_TIMEOUT_SECS,
                base_url: None,
                strict: false,
                verbose: false,
            });
        }
        Cli::try_parse_from(args).ok()
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let Some(cli) = Cli::from_args(std::env::args_os().collect()) else {
        println!("{}", Extraction::error("Username required").to_json());
        return ExitCode::from(1);
    };

    init_tracing(cli.verbose);

    let out = match prepare(&cli) {
        Ok((client, username)) => profile::extract(&client, &username).await,
        Err(e) => Extraction::error(format!("{e:#}")),
    };
    println!("{}", out.to_json());

    // Extraction failures are reported in the JSON, not the exit status.
    ExitCode::SUCCESS
}

fn prepare(cli: &Cli) -> anyhow::Result<(EzClient, String)> {
    let username = profile::normalize_input(&cli.username)?;
    if cli.strict && !profile::is_valid_username(&username) {
        anyhow::bail!("Invalid username format");
    }

    let mut builder = EzClient::builder().timeout(Duration::from_secs(cli.timeout));
    if let Some(base) = &cli.base_url {
        builder = builder.base_bio(base.clone());
    }
    let client = builder.build().context("building HTTP client")?;
    tracing::debug!(username = %username, base = %client.base_bio(), "client ready");
    Ok((client, username))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
