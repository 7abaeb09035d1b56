use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

use cc_attribution::{config, extract, license, pipeline, store};

#[derive(Parser, Debug)]
#[command(
    name = "cc-attribution",
    version,
    about = "Extract Creative Commons licenses from decoded image metadata and render attribution markup"
)]
struct Cli {
    /// JSON file holding the decoded EXIF/IPTC metadata mapping
    /// (keys such as "copyright", "ImageDescription", "credit", "title")
    #[arg(value_name = "FILE")]
    metadata: Option<PathBuf>,

    /// Classify a Copyright field value directly
    #[arg(long, value_name = "TEXT")]
    copyright: Option<String>,

    /// Classify a license URL directly
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Path to config file (default: cc-attribution.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config file and exit
    #[arg(long)]
    init: bool,

    /// Print the rendered attribution block as well
    #[arg(long)]
    render: bool,

    /// List the license choices offered on edit forms and exit
    #[arg(long)]
    list_choices: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --init
    if cli.init {
        let config = config::Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => config::Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    // Handle --list-choices
    if cli.list_choices {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(license::choices())?);
        } else {
            for choice in license::choices() {
                println!("{:<16} {}", choice.display_name, choice.url);
            }
        }
        return Ok(());
    }

    let config = config::Config::load(cli.config.as_deref())?;

    // Assemble the decoded metadata mapping from whichever inputs were given.
    let mut metadata: HashMap<String, String> = HashMap::new();
    if let Some(path) = &cli.metadata {
        let contents = std::fs::read_to_string(path).context("Failed to read metadata file")?;
        metadata = serde_json::from_str(&contents).context("Failed to parse metadata file")?;
    }
    if let Some(copyright) = &cli.copyright {
        metadata.insert(pipeline::COPYRIGHT_KEY.to_string(), copyright.clone());
    }

    if metadata.is_empty() && cli.url.is_none() {
        anyhow::bail!(
            "No input given. Pass a metadata JSON file, --copyright, or --url. Use --help for usage."
        );
    }

    // Resolve the license URL: given directly, or extracted from the mapping.
    let license_url = match &cli.url {
        Some(url) => Some(url.clone()),
        None => metadata
            .get(pipeline::COPYRIGHT_KEY)
            .and_then(|c| extract::license_candidate(c)),
    };

    let Some(license_url) = license_url else {
        println!("No Creative Commons license found in the metadata.");
        return Ok(());
    };

    let normalized = license::normalize_url(&license_url);
    let Some(identity) = license::classify(&normalized) else {
        println!("Not a recognized Creative Commons license URL: {normalized}");
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&identity)?);
    } else {
        println!("License:       {}", identity.name);
        println!("URL:           {}", identity.url);
        if let Some(icon) = &identity.icon_url {
            println!("Badge:         {icon}");
        }
        println!("Public domain: {}", identity.is_public_domain);
    }

    if cli.render {
        let mut mem = store::MemoryStore::new();
        if !metadata.is_empty() {
            mem.insert_metadata(1, metadata);
        }
        pipeline::on_image_ingested(&mut mem, 1);
        // A directly given URL bypasses extraction; seed it as a user edit.
        if cli.url.is_some() {
            mem.set_field(1, store::LICENSE_URL, &normalized);
        }

        println!();
        println!(
            "{}",
            pipeline::render_attribution_markup(&mem, &config, 1, None)
        );
        if config.enable_attribution_box {
            let simple = pipeline::simple_attribution_markup(&mem, &config, 1);
            if !simple.is_empty() {
                println!("{simple}");
            }
        }
    }

    Ok(())
}
