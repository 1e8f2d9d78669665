use anyhow::Result;
use clap::{Parser, Subcommand};
use search_cli::{format_hits, format_match, load_corpus};
use search_core::{DocId, DocumentStatus, SearchServer};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search-cli")]
#[command(about = "Load documents into an in-memory TF-IDF index and query it", long_about = None)]
struct Cli {
    /// Space-separated stop words
    #[arg(long, default_value = "")]
    stop_words: String,
    /// Input path (JSON/JSONL file or directory)
    #[arg(long)]
    input: PathBuf,
    /// Print JSON instead of document lines
    #[arg(long, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the top documents for a query
    Search {
        query: String,
        /// Only documents with this status (default: active)
        #[arg(long)]
        status: Option<DocumentStatus>,
    },
    /// Print the query words found in one document
    Match {
        query: String,
        #[arg(long)]
        id: DocId,
    },
    /// Print the document count and ids in insertion order
    Stats,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let mut server = SearchServer::from_stop_words_text(&cli.stop_words)?;
    load_corpus(&mut server, &cli.input)?;

    match cli.command {
        Commands::Search { query, status } => {
            let hits = server.find_top_documents_with_status(&query, status.unwrap_or_default())?;
            println!("{}", format_hits(&hits, cli.json)?);
        }
        Commands::Match { query, id } => {
            let (words, status) = server.match_document(&query, id)?;
            println!("{}", format_match(id, &words, status, cli.json)?);
        }
        Commands::Stats => {
            let ids: Vec<String> = server.ids().map(|id| id.to_string()).collect();
            println!("documents = {}", server.document_count());
            println!("ids = {}", ids.join(" "));
        }
    }
    Ok(())
}
