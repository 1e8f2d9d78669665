use anyhow::{bail, Context, Result};
use search_core::{DocId, DocumentStatus, SearchHit, SearchServer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: DocId,
    pub text: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<i32>,
}

#[derive(Serialize)]
struct MatchOutput<'a> {
    doc_id: DocId,
    status: DocumentStatus,
    words: &'a [String],
}

/// `.json`/`.jsonl` files under `input`, or `input` itself when it is a file.
/// Directory entries are visited in file-name order so ids are inserted
/// deterministically. A missing path or an unreadable entry is an error.
pub fn collect_input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        bail!("input path {} does not exist", input.display());
    }
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(input).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", input.display()))?;
        let p = entry.path();
        if p.is_file() && matches!(p.extension().and_then(|s| s.to_str()), Some("json" | "jsonl")) {
            files.push(p.to_path_buf());
        }
    }
    Ok(files)
}

/// Add every document found under `input`. Returns the number added.
pub fn load_corpus(server: &mut SearchServer, input: &Path) -> Result<usize> {
    let mut added = 0;
    for file in collect_input_files(input)? {
        let docs = if file.extension().and_then(|s| s.to_str()) == Some("jsonl") {
            read_jsonl(&file)?
        } else {
            read_json(&file)?
        };
        for doc in docs {
            server
                .add_document(doc.id, &doc.text, doc.status, &doc.ratings)
                .with_context(|| format!("adding document {} from {}", doc.id, file.display()))?;
            added += 1;
        }
    }
    tracing::info!(added, total = server.document_count(), "loaded corpus");
    Ok(added)
}

fn read_jsonl(file: &Path) -> Result<Vec<InputDoc>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let mut docs = Vec::new();
    for (line_no, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let doc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: malformed document", file.display(), line_no + 1))?;
        docs.push(doc);
    }
    Ok(docs)
}

fn read_json(file: &Path) -> Result<Vec<InputDoc>> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parsing {}", file.display()))?;
    let docs = match json {
        serde_json::Value::Array(arr) => arr
            .into_iter()
            .map(serde_json::from_value)
            .collect::<serde_json::Result<Vec<InputDoc>>>()?,
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)?],
        other => bail!("{}: expected a document object or array, found {}", file.display(), other),
    };
    Ok(docs)
}

pub fn format_hits(hits: &[SearchHit], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(hits)?);
    }
    Ok(hits.iter().map(|h| h.to_string()).collect::<Vec<_>>().join("\n"))
}

pub fn format_match(doc_id: DocId, words: &[String], status: DocumentStatus, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&MatchOutput { doc_id, status, words })?);
    }
    Ok(format!("{{ document_id = {}, status = {}, words = {} }}", doc_id, status, words.join(" ")))
}
