use clap::{Args, Subcommand};
use rti_core::Result;

use crate::feeds::FeedManager;

#[derive(Args, Debug, Clone)]
pub struct FeedArgs {
    #[command(subcommand)]
    pub command: FeedCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FeedCommands {
    /// Pull every feed once, score the articles and print them
    Refresh {
        /// Only print articles scoring at least this much (0.0 - 1.0)
        #[arg(long, default_value_t = 0.0)]
        min_relevance: f64,
        /// Refresh a single feed, by name or shorthand
        #[arg(long)]
        feed: Option<String>,
    },
    /// List available feeds
    List,
}

pub async fn handle_command(args: FeedArgs, manager: &mut FeedManager) -> Result<()> {
    match args.command {
        FeedCommands::Refresh { min_relevance, feed } => {
            let results = manager.refresh_matching(feed.as_deref()).await?;
            println!("Fetched {} articles", results.len());

            for (article, status) in results
                .iter()
                .filter(|(article, _)| article.rti_relevance >= min_relevance)
            {
                println!(
                    "{} [{:>5.1}%] {} ({}, {})",
                    status.emoji(),
                    article.rti_relevance * 100.0,
                    article.title,
                    article.source,
                    article.status
                );
            }
        }
        FeedCommands::List => {
            println!("Available feeds:");
            for (name, aliases) in manager.feed_aliases() {
                if aliases.is_empty() {
                    println!("  {}", name);
                } else {
                    println!("  {} ({})", name, aliases.join(", "));
                }
            }
        }
    }
    Ok(())
}
