use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use api_shared::ContentRes;
use folio_core::{
    catalogue, config::base_url_from_env_value, ContentKind, Resolution, SiteConfig,
    DEFAULT_ADDR, DEFAULT_ASSETS_DIR,
};
use folio_site::{PageStatus, Site};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio site CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registry records
    List {
        /// Only list `work` or `project` records
        #[arg(long)]
        kind: Option<ContentKind>,
    },
    /// Resolve an id and print its record as JSON
    Show {
        /// Exact content id
        id: String,
    },
    /// Render the page a path points at and print its HTML
    Render {
        /// Site-absolute path, e.g. /works/osep-statistician
        path: String,
    },
    /// Write every page as static HTML
    Export {
        /// Output directory
        out_dir: PathBuf,
        /// Prefix for generated links
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { kind }) => {
            let registry = catalogue::registry()?;
            let records: Vec<_> = match kind {
                Some(kind) => registry.records_of(kind).collect(),
                None => registry.records().iter().collect(),
            };
            if records.is_empty() {
                println!("No records found.");
            }
            for record in records {
                println!("{:<8} {:<24} {}", record.kind, record.id, record.title);
            }
        }
        Some(Commands::Show { id }) => {
            let registry = catalogue::registry()?;
            match registry.resolve(&id) {
                Resolution::Found(record) => {
                    println!("{}", serde_json::to_string_pretty(&ContentRes::from(record))?);
                }
                Resolution::NotFound => {
                    eprintln!("Not found: {id:?}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Some(Commands::Render { path }) => {
            let site = Site::builtin(SiteConfig::default())?;
            let page = site.render_route(&path)?;
            println!("{}", page.html);
            if page.status == PageStatus::NotFound {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Export { out_dir, base_url }) => {
            let config = SiteConfig::new(
                DEFAULT_ADDR.into(),
                PathBuf::from(DEFAULT_ASSETS_DIR),
                base_url_from_env_value(base_url),
            )?;
            let site = Site::builtin(config)?;
            match site.export(&out_dir) {
                Ok(report) => println!(
                    "Exported {} pages to {}",
                    report.files.len(),
                    out_dir.display()
                ),
                Err(e) => {
                    eprintln!("Error exporting site: {}", e);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(ExitCode::SUCCESS)
}
