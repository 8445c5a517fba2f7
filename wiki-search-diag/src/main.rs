//! Diagnostic CLI for the wiki search indices.
//!
//! Connects to the configured search engine, reports the document count
//! of one wiki index, prints a couple of example documents, and runs an
//! example full-text query. Connection parameters come solely from
//! `ELASTIC_*` environment variables; the flags only select the index
//! and the query text.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use tracing::info;

use wiki_search_client::{ConnectionConfig, OpenSearchClient, WikiSearchClient};
use wiki_search_shared::SearchRequest;

/// Number of example documents shown by the index inspection.
const SAMPLE_SIZE: usize = 2;

/// Number of hits fetched by the example search.
const SEARCH_LIMIT: usize = 3;

#[derive(Parser)]
#[command(name = "wiki-diag")]
#[command(about = "Inspect a wiki search index and run an example query", long_about = None)]
struct Cli {
    /// Language of the wiki index to inspect
    #[arg(long, value_enum, default_value = "en")]
    language: Language,

    /// Query text for the example search
    #[arg(long, default_value = "Paris 2024 Olympic Games")]
    query: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Language {
    En,
    Zh,
}

impl Language {
    /// Name of the index holding this language's documents.
    fn index_name(self) -> &'static str {
        match self {
            Language::En => "wiki_en",
            Language::Zh => "wiki_zh",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let index = cli.language.index_name();

    let config = ConnectionConfig::from_env().context("failed to load connection settings")?;
    let endpoint = config.endpoint.clone();

    let engine = OpenSearchClient::new(config).context("failed to create search engine client")?;
    let client = WikiSearchClient::new(Box::new(engine));

    // The client is dropped (and the connection released) on every exit
    // path below; the close() at the end only makes it explicit.
    client
        .ping()
        .await
        .with_context(|| format!("cannot reach the search engine at {}", endpoint))?;
    info!(endpoint = %endpoint, "Connected to search engine");

    inspect_index(&client, index).await?;
    run_example_search(&client, index, &cli.query).await?;

    client.close();
    Ok(())
}

/// Print the document count and a few example documents for an index.
async fn inspect_index(client: &WikiSearchClient, index: &str) -> Result<()> {
    let count = client
        .count(index)
        .await
        .with_context(|| format!("failed to count documents in index {}", index))?;
    println!(
        "Number of documents in index {}: {}",
        index.bold(),
        count.to_string().bold()
    );

    let documents = client
        .sample(index, SAMPLE_SIZE)
        .await
        .with_context(|| format!("failed to fetch example documents from index {}", index))?;

    if documents.is_empty() {
        println!("No example documents found.");
    } else {
        println!("Example documents:");
        for document in documents {
            println!("{}", document);
        }
    }

    Ok(())
}

/// Run the example query and print the normalized results.
async fn run_example_search(client: &WikiSearchClient, index: &str, query: &str) -> Result<()> {
    let request = SearchRequest::new(index, query).with_limit(SEARCH_LIMIT);
    let results = client
        .search(&request)
        .await
        .with_context(|| format!("search for {:?} in index {} failed", query, index))?;

    if results.is_empty() {
        println!("No relevant documents found.");
        return Ok(());
    }

    for (idx, hit) in results.iter().enumerate() {
        println!("{}", format!("Result {}:", idx + 1).bold());
        println!("  ID: {}", hit.id);
        println!("  Score: {}", hit.score);
        println!("  Title: {}", hit.title.green());
        if !hit.url.is_empty() {
            println!("  URL: {}", hit.url.blue());
        }
        println!("  Content: {}", hit.content);
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_index_names() {
        assert_eq!(Language::En.index_name(), "wiki_en");
        assert_eq!(Language::Zh.index_name(), "wiki_zh");
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["wiki-diag"]);

        assert_eq!(cli.language, Language::En);
        assert_eq!(cli.query, "Paris 2024 Olympic Games");
    }

    #[test]
    fn test_cli_language_selector() {
        let cli = Cli::parse_from(["wiki-diag", "--language", "zh", "--query", "奥运会"]);

        assert_eq!(cli.language, Language::Zh);
        assert_eq!(cli.query, "奥运会");
    }
}
