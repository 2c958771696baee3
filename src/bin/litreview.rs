// src/bin/litreview.rs
//! Terminal front end for a running literature backend.

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use litreview::application::{
    client::{AnalysisOutcome, QueryAnalysisController, SearchController, SearchOutcome},
    dto::RefineQueryRequestDto,
    ports::{LiteratureApiPort, NotificationSinkPort, notifications::{Notice, NotificationSink}},
};
use litreview::config::ClientConfig;
use litreview::domain::{analysis::QueryAnalysis, article::ArticleSet};
use litreview::infrastructure::http::{HttpLiteratureApi, build_client};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "litreview", version, about = "Literature review assistant")]
struct Cli {
    /// Backend base URL; overrides LITREVIEW_API_URL.
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search PubMed through the backend.
    Search(SearchArgs),
    /// Break a research question into keywords, MeSH terms and PubMed queries.
    Analyze(AnalyzeArgs),
    /// Rewrite a PubMed query according to feedback.
    Refine {
        base_query: String,
        feedback: String,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    query: String,
    /// Result cap, clamped to 1..=100.
    #[arg(short = 'n', long, default_value_t = 20, allow_negative_numbers = true)]
    max_results: i64,
    /// Keep studies that do not report statistical analysis.
    #[arg(long)]
    no_filter_stats: bool,
    /// Print abstracts below each result.
    #[arg(long)]
    abstracts: bool,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    query: String,
    /// 1-based index of the suggested query to use (default: the first).
    #[arg(long)]
    pick: Option<usize>,
    /// Run a search with the selected query afterwards.
    #[arg(long)]
    search: bool,
    #[arg(short = 'n', long, default_value_t = 20, allow_negative_numbers = true)]
    max_results: i64,
    #[arg(long)]
    no_filter_stats: bool,
}

struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("[{}] {}", notice.level, notice);
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("litreview: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url);
    }
    let client = build_client(config.http_timeout())?;
    let api: Arc<LiteratureApiPort> = Arc::new(HttpLiteratureApi::new(client, config.api_url()));
    let notifier: Arc<NotificationSinkPort> = Arc::new(ConsoleNotifier);

    match cli.command {
        Command::Search(args) => search(api, notifier, args).await,
        Command::Analyze(args) => analyze(api, notifier, args).await,
        Command::Refine {
            base_query,
            feedback,
        } => {
            let refined = api
                .refine_query(&RefineQueryRequestDto {
                    base_query,
                    feedback,
                })
                .await
                .context("refining query")?;
            println!("{}", refined.query);
            Ok(())
        }
    }
}

async fn search(
    api: Arc<LiteratureApiPort>,
    notifier: Arc<NotificationSinkPort>,
    args: SearchArgs,
) -> Result<()> {
    let controller = SearchController::new(api, notifier);
    controller.set_query(args.query);
    controller.set_max_results(args.max_results);
    controller.set_filter_stats(!args.no_filter_stats);
    let outcome = controller.search().await;
    finish_search(&controller, outcome, args.abstracts)
}

async fn analyze(
    api: Arc<LiteratureApiPort>,
    notifier: Arc<NotificationSinkPort>,
    args: AnalyzeArgs,
) -> Result<()> {
    let search = Arc::new(SearchController::new(Arc::clone(&api), Arc::clone(&notifier)));
    search.set_max_results(args.max_results);
    search.set_filter_stats(!args.no_filter_stats);

    let target = Arc::clone(&search);
    let analysis = QueryAnalysisController::new(api, notifier, move |query: &str| {
        target.set_query(query);
    });

    match analysis.analyze(&args.query).await {
        AnalysisOutcome::Completed { .. } => {}
        AnalysisOutcome::Rejected | AnalysisOutcome::Failed | AnalysisOutcome::Superseded => {
            bail!("query analysis did not complete")
        }
    }

    let Some(result) = analysis.analysis() else {
        bail!("query analysis did not complete");
    };
    if let Some(pick) = args.pick {
        let candidate = pick
            .checked_sub(1)
            .and_then(|index| result.pubmed_queries().get(index))
            .with_context(|| {
                format!("--pick must be between 1 and {}", result.pubmed_queries().len())
            })?;
        analysis.select_query(candidate)?;
    }
    print_analysis(&result, analysis.selected_query().as_deref());

    if args.search {
        if let Some(query) = analysis.confirm_selection() {
            println!("\nSearching with: {query}\n");
        }
        let outcome = search.search().await;
        return finish_search(&search, outcome, false);
    }
    Ok(())
}

fn finish_search(
    controller: &SearchController,
    outcome: SearchOutcome,
    abstracts: bool,
) -> Result<()> {
    match outcome {
        SearchOutcome::Completed { .. } => {
            print_articles(&controller.articles(), abstracts);
            Ok(())
        }
        SearchOutcome::Rejected => bail!("no query given"),
        SearchOutcome::Failed | SearchOutcome::Superseded => bail!("search did not complete"),
    }
}

fn print_articles(articles: &ArticleSet, abstracts: bool) {
    for (index, article) in articles.iter().enumerate() {
        println!("{:>3}. {}", index + 1, article.title);
        println!(
            "     {} • {} • {} • PMID {}",
            article.byline(),
            article.journal,
            article.year,
            article.pubmed_id
        );
        if abstracts && !article.abstract_text.is_empty() {
            println!("     Abstract: {}", article.abstract_text);
        }
        if let Some(summary) = &article.summary {
            println!("     Summary: {summary}");
        }
    }
}

fn print_analysis(analysis: &QueryAnalysis, selected: Option<&str>) {
    println!("Keywords:");
    for keyword in analysis.keywords() {
        println!("  - {keyword}");
    }
    println!("Suggested MeSH Terms: {}", analysis.mesh_terms().join("; "));
    println!("Optimized PubMed Queries:");
    for (index, query) in analysis.pubmed_queries().iter().enumerate() {
        let marker = if Some(query.as_str()) == selected { '*' } else { ' ' };
        println!(" {marker}{}. {query}", index + 1);
    }
    println!("Search Strategy:\n  {}", analysis.search_strategy());
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "litreview=debug,info" } else { "warn" };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default.to_string());
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
