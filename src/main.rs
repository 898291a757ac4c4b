// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use oserpent::utils::logging::{format_error, format_success, format_warning};
use oserpent::{
    Config, LexiconAnnotator, ReportExporter, SearchPipeline, SerperClient, SiteFilter,
    ThemeExtractor,
};
use std::path::PathBuf;
use tracing::{info, warn};

const BANNER: &str = r#"
 ▒█████    ██████ ▓█████  ██▀███   ██▓███  ▓█████  ███▄    █ ▄▄▄█████▓
▒██▒  ██▒▒██    ▒ ▓█   ▀ ▓██ ▒ ██▒▓██░  ██▒▓█   ▀  ██ ▀█   █ ▓  ██▒ ▓▒
▒██░  ██▒░ ▓██▄   ▒███   ▓██ ░▄█ ▒▓██░ ██▓▒▒███   ▓██  ▀█ ██▒▒ ▓██░ ▒░
▒██   ██░  ▒   ██▒▒▓█  ▄ ▒██▀▀█▄  ▒██▄█▓▒ ▒▒▓█  ▄ ▓██▒  ▐▌██▒░ ▓██▓ ░
░ ████▓▒░▒██████▒▒░▒████▒░██▓ ▒██▒▒██▒ ░  ░░▒████▒▒██░   ▓██░  ▒██▒ ░
░ ▒░▒░▒░ ▒ ▒▓▒ ▒ ░░░ ▒░ ░░ ▒▓ ░▒▓░▒▓▒░ ░  ░░░ ▒░ ░░ ▒░   ▒ ▒   ▒ ░░
  ░ ▒ ▒░ ░ ░▒  ░ ░ ░ ░  ░  ░▒ ░ ▒░░▒ ░      ░ ░  ░░ ░░   ░ ▒░    ░
░ ░ ░ ▒  ░  ░  ░     ░     ░░   ░ ░░          ░      ░   ░ ░   ░
    ░ ░        ░     ░  ░   ░                 ░  ░         ░
"#;

#[derive(Parser)]
#[command(name = "oserpent")]
#[command(version = "0.1.0")]
#[command(
    about = "Search the Serper API with Google dork site filters and summarize the themes",
    long_about = None,
    before_help = BANNER
)]
struct Cli {
    /// Search query
    query: String,

    /// Search on GitHub
    #[arg(long)]
    github: bool,

    /// Search on YouTube
    #[arg(long)]
    youtube: bool,

    /// Search on ExploitDB
    #[arg(long)]
    exploitdb: bool,

    /// Number of themes to show
    #[arg(short = 'n', long, value_name = "NUM")]
    top_n: Option<usize>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Write the run report as JSON
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(long, requires = "output")]
    pretty: bool,
}

impl Cli {
    fn filters(&self, config: &Config) -> Vec<SiteFilter> {
        SiteFilter::from_flags(
            self.github,
            self.youtube,
            self.exploitdb,
            config.search.general_when_unfiltered,
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args_os().len() == 1 {
        Cli::command().print_help()?;
        std::process::exit(1);
    }

    let cli = Cli::parse();

    oserpent::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        info!(
            "Config file {} not found, using defaults and environment",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    colored::control::set_override(cli.color && config.output.color);

    let api_key = match config.api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("{}", format_error(&format!("Error: {}.", e)));
            std::process::exit(1);
        }
    };

    let filters = cli.filters(&config);
    if filters.is_empty() {
        eprintln!(
            "{}",
            format_warning("No site filter selected; pass --github, --youtube or --exploitdb")
        );
    }
    let top_n = cli.top_n.unwrap_or(config.themes.top_n);

    let client = SerperClient::new(api_key, config.search.endpoint.clone())
        .context("Failed to create search client")?;
    let extractor = ThemeExtractor::new(LexiconAnnotator::new())
        .with_categories(config.themes.categories.clone());
    let pipeline =
        SearchPipeline::new(client, extractor, top_n).context("Invalid theme count")?;

    let mut stdout = std::io::stdout().lock();
    let report = pipeline
        .run(&cli.query, &filters, &mut stdout)
        .await
        .context("Search run failed")?;

    if let Some(path) = cli.output {
        let exporter = ReportExporter::new(path);
        exporter
            .export(&report, cli.pretty)
            .context("Failed to write JSON report")?;
        eprintln!(
            "{}",
            format_success(&format!("Report written to {}", exporter.path().display()))
        );
    }

    Ok(())
}
