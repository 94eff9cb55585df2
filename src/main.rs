use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coursedex::season::offering_counts;
use coursedex::{Dataset, MatchPath, QueryPipeline, SearchConfig};

mod cli;
use cli::display::{
    pad_right, quarters_badge, row, score_value, section_bot, section_top, themed, truncate,
    BOLD, DIM, GRAY, GREEN, YELLOW,
};
use cli::{Cli, Commands, ConfigArgs};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            dataset,
            query,
            json,
            scores,
            config,
        } => run_search(&dataset, &query, json, scores, &config),
        Commands::Inspect { dataset, config } => run_inspect(&dataset, &config),
        #[cfg(feature = "server")]
        Commands::Serve {
            dataset,
            bind,
            port,
            config,
        } => run_serve(&dataset, &bind, port, &config),
    }
}

/// Defaults, then the config file, then `COURSEDEX_*` env vars, then flags.
fn resolve_config(args: &ConfigArgs) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    config = config.with_env_overrides()?;

    if let Some(weight) = args.title_weight {
        config.title_weight = weight;
    }
    if let Some(weight) = args.description_weight {
        config.description_weight = weight;
    }

    config.validate()?;
    tracing::debug!(?config, "resolved search config");
    Ok(config)
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    Dataset::from_file(path).with_context(|| format!("failed to load dataset {}", path.display()))
}

// ============================================================================
// SEARCH
// ============================================================================

fn run_search(path: &Path, query: &str, json: bool, scores: bool, args: &ConfigArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let title_weight = config.title_weight;
    let pipeline = QueryPipeline::new(config)?;
    let dataset = load_dataset(path)?;

    let query = query.to_lowercase();
    let outcome = pipeline.search(&dataset, &query);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.courses())?);
        return Ok(());
    }

    let path_label = match outcome.path {
        MatchPath::Browse => "all courses",
        MatchPath::CourseCode => "course code",
        MatchPath::Relevance => "relevance",
    };
    let mut header = format!("RESULTS: {} ({})", outcome.len(), path_label);
    if !outcome.seasons.is_empty() {
        header.push_str(&format!(" in {}", outcome.seasons.join(" or ")));
    }

    section_top(&header);
    if outcome.is_empty() {
        row(&format!("  {}", themed(GRAY, &[DIM], "no matching courses")));
    }
    for hit in &outcome.hits {
        let course = hit.course;
        let code = pad_right(&themed(GREEN, &[BOLD], &course.course_code), 12);
        let title = pad_right(&truncate(&course.title, 36), 37);
        let score = match (scores, hit.score) {
            (true, Some(score)) => score_value(score, title_weight),
            (true, None) => themed(GRAY, &[], "     -"),
            (false, _) => String::new(),
        };
        row(&format!(
            "  {} {} {} {}",
            code,
            title,
            score,
            quarters_badge(&course.quarters)
        ));
    }
    section_bot();
    Ok(())
}

// ============================================================================
// INSPECT
// ============================================================================

fn run_inspect(path: &Path, args: &ConfigArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let dataset = load_dataset(path)?;

    let described = dataset
        .iter()
        .filter(|course| course.description_text().is_some())
        .count();

    section_top("DATASET");
    row(&format!("  path         {}", path.display()));
    row(&format!(
        "  courses      {}",
        themed(YELLOW, &[BOLD], &dataset.len().to_string())
    ));
    row(&format!("  described    {}", described));
    row(&format!("  fingerprint  {:08x}", dataset.fingerprint()));
    section_bot();

    if !config.seasons.is_empty() {
        section_top("OFFERINGS");
        for (season, count) in offering_counts(&dataset, &config.seasons) {
            row(&format!("  {} {}", pad_right(&season, 12), count));
        }
        section_bot();
    }
    Ok(())
}

// ============================================================================
// SERVE
// ============================================================================

#[cfg(feature = "server")]
fn run_serve(path: &Path, bind: &str, port: u16, args: &ConfigArgs) -> Result<()> {
    use coursedex::server::{run_server, AppState, DatasetStore};

    let pipeline = QueryPipeline::new(resolve_config(args)?)?;
    let store = DatasetStore::open(path)
        .with_context(|| format!("failed to load dataset {}", path.display()))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(run_server(AppState::new(store, pipeline), bind, port))?;
    Ok(())
}
