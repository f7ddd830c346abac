//! confusables-gen - regenerate the confusables dataset from unicode.org.
//!
//! Downloads (or reads locally) the upstream confusables.txt, parses it,
//! and writes the JSON dataset consumed by `confusables::Db::load` and
//! embedded as the default database.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use confusables::generator::parse_confusables;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LATEST_CONFUSABLES_URL: &str =
    "https://unicode.org/Public/security/latest/confusables.txt";

struct Args {
    /// Unicode version to download ("latest" or e.g. "16.0.0").
    version: String,
    /// Path to a local confusables.txt (offline mode).
    input: Option<PathBuf>,
    /// Output JSON path.
    output: PathBuf,
    /// Override for the generated_at timestamp (reproducible builds).
    generated_at: Option<DateTime<Utc>>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        version: "latest".to_string(),
        input: None,
        output: PathBuf::from("data/confusables.json"),
        generated_at: None,
    };

    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || {
            it.next()
                .with_context(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--version" => args.version = value()?,
            "--input" => args.input = Some(PathBuf::from(value()?)),
            "--output" => args.output = PathBuf::from(value()?),
            "--generated-at" => {
                let raw = value()?;
                let ts = DateTime::parse_from_rfc3339(&raw)
                    .with_context(|| format!("failed to parse generated-at {raw:?}"))?;
                args.generated_at = Some(ts.with_timezone(&Utc));
            }
            "--help" | "-h" => {
                println!(
                    "usage: confusables-gen [--version V] [--input FILE] \
                     [--output FILE] [--generated-at RFC3339]"
                );
                std::process::exit(0);
            }
            other => bail!("unknown flag: {other}"),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;

    let mut version = args.version.clone();
    let (text, source_url) = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading local confusables.txt");
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            (text, format!("local file: {}", path.display()))
        }
        None => {
            // Normalize version: 16.0 -> 16.0.0, the layout unicode.org uses.
            if version != "latest" && version.matches('.').count() == 1 {
                version.push_str(".0");
            }
            let url = if version == "latest" {
                LATEST_CONFUSABLES_URL.to_string()
            } else {
                format!("https://unicode.org/Public/security/{version}/confusables.txt")
            };
            info!(%url, "downloading confusables.txt");
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()?;
            let resp = client
                .get(&url)
                .send()
                .await
                .context("failed to download confusables")?
                .error_for_status()
                .context("bad status")?;
            (resp.text().await?, url)
        }
    };

    let mut df = parse_confusables(&text, &source_url, &version)
        .context("failed to parse confusables.txt")?;
    if let Some(ts) = args.generated_at {
        df.generated_at = ts;
    }

    let json = serde_json::to_vec_pretty(&df).context("failed to marshal json")?;

    if let Some(dir) = args.output.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
    }
    std::fs::write(&args.output, &json)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        output = %args.output.display(),
        mappings = df.total_mappings,
        unicode_version = %df.unicode_version,
        "generated dataset"
    );
    Ok(())
}
