use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use sportsboard::{calendar::midnight_utc, logging, tables};
use std::env;
use tracing::info;

/// Parsed command line: `dump_tables [YYYY-MM-DD] [--yaml]`.
#[derive(Debug, PartialEq, Eq)]
struct DumpArgs {
    date: Option<NaiveDate>,
    yaml: bool,
}

impl DumpArgs {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut out = DumpArgs {
            date: None,
            yaml: false,
        };
        for arg in args {
            match arg.as_str() {
                "--yaml" => out.yaml = true,
                "--json" => out.yaml = false,
                flag if flag.starts_with("--") => bail!("unknown flag {}", flag),
                date => {
                    if out.date.is_some() {
                        bail!("only one date may be given");
                    }
                    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                        .with_context(|| format!("expected YYYY-MM-DD, got {:?}", date))?;
                    out.date = Some(parsed);
                }
            }
        }
        Ok(out)
    }

    /// Midnight UTC of the given date, or now.
    fn reference(&self) -> DateTime<Utc> {
        self.date.map(midnight_utc).unwrap_or_else(Utc::now)
    }
}

fn main() -> Result<()> {
    logging::init(&env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()));

    let args = DumpArgs::parse(env::args().skip(1))
        .context("Usage: dump_tables [YYYY-MM-DD] [--yaml]")?;
    let now = args.reference();
    info!(%now, yaml = args.yaml, "generating tables");

    let payload = tables::generate(now);
    let out = if args.yaml {
        serde_yaml::to_string(&payload)?
    } else {
        serde_json::to_string_pretty(&payload)?
    };
    println!("{}", out);
    Ok(())
}
