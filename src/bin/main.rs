//! schemascope CLI - Crawl a database schema into a catalog
//!
//! Usage:
//!   schemascope crawl <database.db> [--info-level <level>] [--output <format>]
//!   schemascope tables <database.db>
//!
//! Examples:
//!   schemascope crawl ./sales.db --info-level detailed --output json
//!   schemascope crawl ./sales.db --include-tables 'main\.orders.*' --children 1
//!   schemascope tables ./sales.db

use clap::{Parser, Subcommand, ValueEnum};
use schemascope::config::ConnectionConfig;
use schemascope::crawl::{crawl, CrawlOptions, InfoLevel};
use schemascope::filter::{GrepOptions, InclusionRule};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schemascope")]
#[command(about = "schemascope - Crawl a database schema into a navigable catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl a database and print its catalog
    Crawl {
        /// Path to the SQLite database file
        database: PathBuf,

        /// How much metadata to retrieve
        #[arg(short, long, default_value = "standard")]
        info_level: InfoLevelArg,

        /// Regular expression of tables to include (matched against
        /// "catalog.table")
        #[arg(long)]
        include_tables: Option<String>,

        /// Regular expression of tables to exclude
        #[arg(long)]
        exclude_tables: Option<String>,

        /// Regular expression of schemas to include
        #[arg(long)]
        include_schemas: Option<String>,

        /// Keep only tables with a column matching this pattern
        #[arg(long)]
        grep_columns: Option<String>,

        /// Invert the grep match
        #[arg(long)]
        invert_match: bool,

        /// Levels of referenced (parent) tables to keep around matches
        #[arg(long, default_value_t = 0)]
        parents: usize,

        /// Levels of referencing (child) tables to keep around matches
        #[arg(long, default_value_t = 0)]
        children: usize,

        /// Output format
        #[arg(short, long, default_value = "json")]
        output: OutputFormat,
    },

    /// List tables in natural (foreign-key dependency) order
    Tables {
        /// Path to the SQLite database file
        database: PathBuf,
    },
}

#[derive(Clone, ValueEnum)]
enum InfoLevelArg {
    Minimum,
    Standard,
    Detailed,
    Maximum,
}

impl From<InfoLevelArg> for InfoLevel {
    fn from(arg: InfoLevelArg) -> Self {
        match arg {
            InfoLevelArg::Minimum => InfoLevel::minimum(),
            InfoLevelArg::Standard => InfoLevel::standard(),
            InfoLevelArg::Detailed => InfoLevel::detailed(),
            InfoLevelArg::Maximum => InfoLevel::maximum(),
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// The whole catalog as pretty-printed JSON
    Json,
    /// A terse per-table summary
    Summary,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("schemascope=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("schemascope: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::Crawl {
            database,
            info_level,
            include_tables,
            exclude_tables,
            include_schemas,
            grep_columns,
            invert_match,
            parents,
            children,
            output,
        } => {
            let mut options = CrawlOptions::with_info_level(info_level.into());
            options.table_rule = InclusionRule::from_patterns(
                include_tables.as_deref(),
                exclude_tables.as_deref(),
            )?;
            options.schema_rule =
                InclusionRule::from_patterns(include_schemas.as_deref(), None)?;
            options.grep = GrepOptions {
                column_rule: grep_columns
                    .as_deref()
                    .map(InclusionRule::include)
                    .transpose()?,
                invert_match,
                ..GrepOptions::default()
            };
            options.parent_table_depth = parents;
            options.child_table_depth = children;

            let conn = ConnectionConfig::sqlite(database.to_string_lossy()).connect()?;
            let catalog = crawl(&conn, &options).await?;

            match output {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&catalog)?);
                }
                OutputFormat::Summary => {
                    print_summary(&catalog);
                }
            }
        }

        Commands::Tables { database } => {
            let conn = ConnectionConfig::sqlite(database.to_string_lossy()).connect()?;
            let options = CrawlOptions::default();
            let catalog = crawl(&conn, &options).await?;
            for table in catalog.tables_natural_order() {
                println!("{}", table.full_name());
            }
        }
    }
    Ok(())
}

fn print_summary(catalog: &schemascope::Catalog) {
    if let Some(product) = &catalog.database_info.product_name {
        let version = catalog
            .database_info
            .product_version
            .as_deref()
            .unwrap_or("");
        println!("{product} {version}");
    }
    for table in catalog.tables_natural_order() {
        let kind = if table.is_view() { "view" } else { "table" };
        println!("{} [{kind}]", table.full_name());
        for column in table.columns_in_order() {
            let type_name = column.type_name.as_deref().unwrap_or("?");
            let mut flags = String::new();
            if column.part_of_primary_key {
                flags.push_str(" pk");
            }
            if column.part_of_foreign_key {
                flags.push_str(" fk");
            }
            println!("  {} {type_name}{flags}", column.name);
        }
        for fk in catalog.imported_foreign_keys(&table.key()) {
            for pair in &fk.column_pairs {
                println!("  -> {} references {}", pair.foreign, pair.primary);
            }
        }
    }
}
