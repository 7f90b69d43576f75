use std::env;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use text_hasher_client::config::{self, Config};
use text_hasher_client::{
    digests_match, spawn_hash, wait_for_outcome, DigestFormat, HashClient, History, TextStats,
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: text-hasher [--config PATH] [--url URL] [--timeout SECS] \
[--format lower|upper|spaced] [--compare HASH] [TEXT...]
Without TEXT, stdin is hashed with one trailing newline removed.";

#[derive(Debug, Default)]
struct Args {
    config_path: Option<PathBuf>,
    url: Option<String>,
    timeout_secs: Option<u64>,
    format: Option<String>,
    compare: Option<String>,
    texts: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let cfg = match &args.config_path {
        Some(path) => {
            info!(?path, "loading config file");
            config::load_config(path)?
        }
        None => Config::default(),
    };

    let endpoint = args
        .url
        .clone()
        .or_else(|| env::var("TEXT_HASHER_API_URL").ok())
        .or_else(|| cfg.client.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());

    let timeout = args
        .timeout_secs
        .or_else(|| {
            env::var("TEXT_HASHER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
        })
        .or(cfg.client.timeout_secs)
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    let format = args
        .format
        .as_deref()
        .or(cfg.client.format.as_deref())
        .map(str::parse::<DigestFormat>)
        .transpose()
        .map_err(|e| anyhow!(e))?
        .unwrap_or_default();

    let texts = if args.texts.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("reading text from stdin")?;
        vec![strip_line_ending(input)]
    } else {
        args.texts
    };

    let client = HashClient::new(endpoint, timeout)?;
    let mut history = History::new();

    for text in texts {
        let stats = TextStats::of(&text);
        debug!(
            characters = stats.characters,
            words = stats.words,
            lines = stats.lines,
            endpoint = client.endpoint(),
            "hashing input"
        );
        let events = spawn_hash(client.clone(), text);
        let resp = wait_for_outcome(events, |pct| debug!(progress = pct, "hash in flight"))
            .await?;
        let entry = history.record_now(&resp);
        println!("{}  {}", format.render(&entry.hash), entry.preview);
    }

    if let Some(candidate) = args.compare {
        let Some(latest) = history.latest() else {
            bail!("No hash to compare! Generate a hash first.");
        };
        if digests_match(&candidate, &latest.hash) {
            println!("The hashes match!");
        } else {
            bail!("The hashes do not match!");
        }
    }
    Ok(())
}

/// Drops the single line ending that `echo` and editors append.
fn strip_line_ending(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

fn parse_args() -> Result<Args> {
    let argv: Vec<String> = env::args().collect();
    let mut args = Args::default();
    let mut i = 1;

    while i < argv.len() {
        let flag = argv[i].as_str();
        match flag {
            "--config" | "--url" | "--timeout" | "--format" | "--compare" => {
                i += 1;
                let Some(value) = argv.get(i).cloned() else {
                    bail!("{flag} requires an argument\n{USAGE}");
                };
                match flag {
                    "--config" => args.config_path = Some(PathBuf::from(value)),
                    "--url" => args.url = Some(value),
                    "--timeout" => {
                        let secs = value
                            .parse::<u64>()
                            .with_context(|| format!("invalid --timeout value: {value}"))?;
                        args.timeout_secs = Some(secs);
                    }
                    "--format" => args.format = Some(value),
                    _ => args.compare = Some(value),
                }
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => args.texts.push(other.to_owned()),
        }
        i += 1;
    }

    Ok(args)
}
