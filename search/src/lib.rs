use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tfidf_core::{Document, ScoredDocument};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Load documents from every input path, keeping input order.
pub fn load_inputs(paths: &[PathBuf]) -> Result<Vec<Document>> {
    let mut docs = Vec::new();
    for path in paths {
        docs.extend(load_documents(path)?);
    }
    Ok(docs)
}

/// Load `{id, text}` records from a file or a directory tree.
///
/// `.json` files hold an array of records or one record, `.jsonl` files one
/// record per line. Any other file becomes a single document named after the
/// file. Directories are walked in file-name order.
pub fn load_documents(path: &Path) -> Result<Vec<Document>> {
    let mut docs = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.with_context(|| format!("walking {}", path.display()))?;
            if entry.file_type().is_file() {
                load_file(entry.path(), &mut docs)?;
            }
        }
    } else if path.is_file() {
        load_file(path, &mut docs)?;
    } else {
        bail!("input {} is neither a file nor a directory", path.display());
    }
    tracing::debug!(path = %path.display(), num_docs = docs.len(), "loaded input");
    Ok(docs)
}

fn load_file(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    match file.extension().and_then(|s| s.to_str()) {
        Some("jsonl") => load_jsonl(file, docs),
        Some("json") => load_json(file, docs),
        _ => load_plain(file, docs),
    }
}

fn load_jsonl(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid JSON", file.display(), n + 1))?;
        let doc = Document::from_value(&value)
            .with_context(|| format!("{}:{}", file.display(), n + 1))?;
        docs.push(doc);
    }
    Ok(())
}

fn load_json(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("opening {}", file.display()))?;
    let reader = BufReader::new(f);
    let json: Value = serde_json::from_reader(reader)
        .with_context(|| format!("{}: invalid JSON", file.display()))?;
    match json {
        Value::Array(arr) => {
            for (i, v) in arr.iter().enumerate() {
                let doc = Document::from_value(v)
                    .with_context(|| format!("{}: record {}", file.display(), i))?;
                docs.push(doc);
            }
        }
        Value::Object(_) => {
            docs.push(Document::from_value(&json).with_context(|| file.display().to_string())?);
        }
        _ => bail!("{}: expected an array of records or a single record", file.display()),
    }
    Ok(())
}

fn load_plain(file: &Path, docs: &mut Vec<Document>) -> Result<()> {
    let id = file
        .file_name()
        .and_then(|s| s.to_str())
        .with_context(|| format!("{}: file name is not valid UTF-8", file.display()))?;
    let text = fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    docs.push(Document::new(id, text));
    Ok(())
}

/// Render ranked results for stdout.
pub fn render(results: &[ScoredDocument], scores: bool, format: OutputFormat) -> Result<String> {
    let out: String = match (format, scores) {
        (OutputFormat::Text, false) => results.iter().map(|d| format!("{}\n", d.id)).collect(),
        (OutputFormat::Text, true) => results
            .iter()
            .map(|d| format!("{}\t{:.6}\n", d.id, d.score))
            .collect(),
        (OutputFormat::Json, false) => {
            let ids: Vec<&str> = results.iter().map(|d| d.id.as_str()).collect();
            serde_json::to_string_pretty(&ids)? + "\n"
        }
        (OutputFormat::Json, true) => serde_json::to_string_pretty(results)? + "\n",
    };
    Ok(out)
}
