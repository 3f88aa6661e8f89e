use clap::{Args, Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rti_analysis::{create_model, RelevanceModel};
use rti_core::{ArticleBrief, ArticleStatus, ArticleStorage, Result};
use rti_export::{content_to_markdown, export_articles, ExportFilter, ExportFormat, RelevanceFilter};
use rti_feed::logging::init_logging;
use rti_feed::{handle_command, FeedArgs, FeedCommands, FeedManager, MockFeed};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

mod display;
mod duration;

use duration::HumanDuration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Monitor news for Right to Information relevance", long_about = None)]
pub struct Cli {
    #[arg(long, env = "RTI_LOG_LEVEL", default_value = "info", global = true)]
    log_level: Level,
    #[arg(long, env = "RTI_STORAGE", default_value = "memory", global = true)]
    storage: String,
    #[arg(long, env = "RTI_MODEL", default_value = "keyword", global = true, help = "Relevance model to score with. Available models: keyword (default)")]
    model: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct FeedOptions {
    /// Number of articles the mock feed produces per refresh
    #[arg(long, default_value_t = rti_feed::feeds::mock::DEFAULT_ARTICLE_COUNT)]
    count: usize,
    /// Seed for reproducible mock articles
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Score article text for RTI relevance (reads stdin when no text or file is given)
    Analyze {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Generate blog and social content for a headline
    Generate {
        #[arg(long)]
        title: String,
        #[arg(long)]
        summary: String,
        /// Seed for the randomly chosen blog title and call to action
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Pull and score the article feed
    Feed {
        #[command(flatten)]
        options: FeedOptions,
        #[command(subcommand)]
        command: Option<FeedCommands>,
    },
    /// Export scored articles as csv, json or markdown
    Export {
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        #[arg(long, default_value = "all")]
        relevance: RelevanceFilter,
        #[arg(long, default_value_t = rti_export::filter::DEFAULT_EXPORT_DAYS)]
        days: i64,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        options: FeedOptions,
    },
    /// Serve the dashboard API
    Serve {
        #[arg(long, env = "RTI_ADDR", default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
        /// Refresh the feed periodically (e.g. 1h, 30m, 1h15m30s)
        #[arg(long)]
        refresh: Option<HumanDuration>,
        #[command(flatten)]
        options: FeedOptions,
    },
}

fn create_manager(
    storage: Arc<dyn ArticleStorage>,
    model: Arc<dyn RelevanceModel>,
    options: &FeedOptions,
) -> FeedManager {
    let feed = match options.seed {
        Some(seed) => MockFeed::with_seed(seed),
        None => MockFeed::new(),
    }
    .with_count(options.count);

    let mut manager = FeedManager::new(storage, model);
    manager.add_feed(Box::new(feed));
    info!("📰 Feeds initialized: {}", manager.feed_names().join(", "));
    manager
}

async fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(tokio::fs::read_to_string(path).await?),
        (None, None) => Ok(std::io::read_to_string(std::io::stdin())?),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let logger = init_logging(cli.log_level);

    let model = create_model(&cli.model)?;
    info!("🧠 Relevance model initialized (using {})", model.name());

    match cli.command {
        Commands::Analyze { text, file, json } => {
            let input = read_input(text, file).await?;
            let analysis = model.analyze(&input);
            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                display::print_analysis(&analysis);
            }
        }
        Commands::Generate { title, summary, seed, format } => {
            let brief = ArticleBrief::new(title, summary);
            let content = match seed {
                Some(seed) => rti_analysis::generate_content_with(&brief, &mut StdRng::seed_from_u64(seed)),
                None => rti_analysis::generate_content(&brief),
            };
            match format {
                OutputFormat::Text => display::print_content(&content),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&content)?),
                OutputFormat::Markdown => println!("{}", content_to_markdown(&brief, &content)),
            }
        }
        Commands::Feed { options, command } => {
            let storage = rti_storage::create_storage(&cli.storage).await?;
            let mut manager = create_manager(storage, model, &options);
            let args = FeedArgs {
                command: command.unwrap_or(FeedCommands::Refresh {
                    min_relevance: 0.0,
                    feed: None,
                }),
            };
            handle_command(args, &mut manager).await?;
        }
        Commands::Export { format, relevance, days, output, options } => {
            let filter = ExportFilter::new(days, relevance)?;
            let storage = rti_storage::create_storage(&cli.storage).await?;
            let mut manager = create_manager(storage.clone(), model, &options);
            manager.refresh().await?;

            let now = chrono::Utc::now();
            let articles = filter.apply(&storage.list_articles().await?, now);
            let body = export_articles(&articles, format, now)?;
            for article in &articles {
                storage.set_status(article.id, ArticleStatus::Exported).await?;
            }

            match output {
                Some(path) => {
                    tokio::fs::write(&path, body).await?;
                    logger.info(&format!("📦 Exported {} articles to {}", articles.len(), path.display()));
                }
                None => println!("{}", body),
            }
        }
        Commands::Serve { addr, refresh, options } => {
            let storage = rti_storage::create_storage(&cli.storage).await?;
            let mut manager = create_manager(storage.clone(), model.clone(), &options);
            let ingested = manager.refresh().await?;
            info!("✨ Loaded {} articles", ingested.len());

            if let Some(interval) = refresh {
                info!("Running in periodic mode with {}s interval", interval.0.as_secs());
                let logger = logger.clone().with_prefix("[refresh]".to_string());
                tokio::spawn(async move {
                    loop {
                        tokio::time::sleep(interval.0).await;
                        match manager.refresh().await {
                            Ok(results) => logger.info(&format!("Refreshed {} articles", results.len())),
                            Err(e) => logger.error(&format!("Error during refresh: {}", e)),
                        }
                    }
                });
            }

            let state = rti_web::AppState { model, storage };
            rti_web::serve(state, addr).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rti_core::Error;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_args() {
        let cli = Cli::try_parse_from([
            "rti", "export", "--format", "markdown", "--relevance", "high", "--days", "30", "--seed", "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Export { format, relevance, days, options, .. } => {
                assert_eq!(format, ExportFormat::Markdown);
                assert_eq!(relevance, RelevanceFilter::High);
                assert_eq!(days, 30);
                assert_eq!(options.seed, Some(5));
                assert_eq!(options.count, 25);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_export_format() {
        assert!(Cli::try_parse_from(["rti", "export", "--format", "pdf"]).is_err());
    }

    #[tokio::test]
    async fn test_read_input_prefers_text() {
        let input = read_input(Some("inline".to_string()), None).await.unwrap();
        assert_eq!(input, "inline");
        assert!(matches!(
            read_input(None, Some(PathBuf::from("/nonexistent/article.txt"))).await,
            Err(Error::Io(_))
        ));
    }
}
