//! Chunder resolver CLI
//!
//! Usage:
//!   chunder-resolve uri --edge sydney --edge tokyo   Resolve edges
//!   chunder-resolve uri --region au1                 Resolve a legacy region
//!   chunder-resolve legacy --region us-va            Old region-only lookup
//!   chunder-resolve shortcode EU_IRELAND             Resolve a shortcode
//!   chunder-resolve tables --json                    Dump lookup tables

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chunder_core::{
    resolve_chunder_uris, resolve_region_uri, resolve_shortcode, valid_regions, Config,
    ConnectionConfig, Region, DEFAULT_EDGE, DEFAULT_REGION, DEPRECATED_REGIONS, EDGE_TO_REGION,
    REGION_TO_EDGE, SHORTCODES,
};

#[derive(Parser, Debug)]
#[command(name = "chunder-resolve")]
#[command(about = "Resolve signaling hostnames from edges and regions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve edges (or a legacy region) to hostnames
    Uri {
        /// Edge to connect to; repeat for fallbacks
        #[arg(short, long)]
        edge: Vec<String>,

        /// Legacy region (cannot be combined with --edge)
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Resolve a region the old way, reporting its replacement region
    Legacy {
        /// Region to resolve
        #[arg(short, long)]
        region: Option<String>,
    },

    /// Look up the region behind a shortcode
    Shortcode {
        /// Shortcode (e.g., ASIAPAC_SYDNEY)
        code: String,
    },

    /// Print the lookup tables
    Tables {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config {
        /// Print a sample configuration instead
        #[arg(long)]
        sample: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {:?}", path))?,
        None => Config::load(),
    };

    match cli.command {
        Commands::Uri { edge, region } => run_uri(&config, edge, region),
        Commands::Legacy { region } => {
            run_legacy(region.or_else(|| config.connection.region.clone()));
            Ok(())
        }
        Commands::Shortcode { code } => run_shortcode(&code),
        Commands::Tables { json } => run_tables(json),
        Commands::Config { sample } => {
            if sample {
                print!("{}", Config::sample());
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
            Ok(())
        }
    }
}

fn run_uri(config: &Config, edges: Vec<String>, region: Option<String>) -> anyhow::Result<()> {
    let selection = if edges.is_empty() && region.is_none() {
        debug!("No edge or region given, using config");
        config.clone()
    } else {
        Config {
            connection: ConnectionConfig { edges, region },
        }
    };

    let mut advisories = Vec::new();
    let mut on_deprecated = |message: &str| advisories.push(message.to_string());
    let uris = selection.resolve(Some(&mut on_deprecated))?;

    for advisory in &advisories {
        eprintln!("warning: {}", advisory);
    }
    for uri in uris {
        println!("{}", uri);
    }
    Ok(())
}

fn run_legacy(region: Option<String>) {
    let mut replacement: Option<Region> = None;
    let mut on_deprecated = |successor: Region| replacement = Some(successor);
    let uri = resolve_region_uri(region.as_deref(), Some(&mut on_deprecated));

    if let Some(successor) = replacement {
        info!("Region replaced by {}", successor);
    }
    println!("{}", uri);
}

fn run_shortcode(code: &str) -> anyhow::Result<()> {
    match resolve_shortcode(code) {
        Some(region) => {
            println!("{}", region);
            Ok(())
        }
        None => {
            warn!("Unknown shortcode {:?}", code);
            bail!("unknown shortcode: {}", code)
        }
    }
}

/// Serializable view of the lookup tables
#[derive(Serialize, Debug)]
struct TablesDump {
    default_region: &'static str,
    default_edge: &'static str,
    valid_regions: Vec<&'static str>,
    edge_to_region: BTreeMap<&'static str, &'static str>,
    region_to_edge: BTreeMap<&'static str, &'static str>,
    deprecated_regions: BTreeMap<&'static str, &'static str>,
    shortcodes: BTreeMap<&'static str, &'static str>,
}

impl TablesDump {
    fn collect() -> Self {
        Self {
            default_region: DEFAULT_REGION.as_str(),
            default_edge: DEFAULT_EDGE.as_str(),
            valid_regions: valid_regions().collect(),
            edge_to_region: EDGE_TO_REGION
                .iter()
                .map(|(e, r)| (e.as_str(), r.as_str()))
                .collect(),
            region_to_edge: REGION_TO_EDGE
                .iter()
                .map(|(r, e)| (r.as_str(), e.as_str()))
                .collect(),
            deprecated_regions: DEPRECATED_REGIONS
                .iter()
                .map(|(d, r)| (d.as_str(), r.as_str()))
                .collect(),
            shortcodes: SHORTCODES.iter().map(|(c, r)| (*c, r.as_str())).collect(),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("default region: {}\n", self.default_region));
        out.push_str(&format!("default edge:   {}\n", self.default_edge));
        for (title, table) in [
            ("edge -> region", &self.edge_to_region),
            ("region -> edge", &self.region_to_edge),
            ("deprecated region -> region", &self.deprecated_regions),
            ("shortcode -> region", &self.shortcodes),
        ] {
            out.push_str(&format!("\n{}\n", title));
            for (from, to) in table {
                out.push_str(&format!("  {:<24} {}\n", from, to));
            }
        }
        out
    }
}

fn run_tables(json: bool) -> anyhow::Result<()> {
    let dump = TablesDump::collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        print!("{}", dump.render_text());
    }
    Ok(())
}
