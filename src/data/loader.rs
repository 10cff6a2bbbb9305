use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::models::{FeedItem, Question};
use crate::quiz::{validate_questions, SessionError};

/// Problems with the content of a data file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no {0} found")]
    Empty(&'static str),

    #[error("duplicate id {0}")]
    DuplicateId(u32),

    #[error(transparent)]
    Question(#[from] SessionError),
}

/// Failure to load a data file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid data in {}: {source}", .path.display())]
    Data {
        path: PathBuf,
        #[source]
        source: DataError,
    },
}

pub fn parse_questions(json: &str) -> Result<Vec<Question>, DataError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    ensure_unique_ids(questions.iter().map(|question| question.id))?;
    validate_questions(&questions)?;
    Ok(questions)
}

pub fn parse_feed(json: &str) -> Result<Vec<FeedItem>, DataError> {
    let items: Vec<FeedItem> = serde_json::from_str(json)?;
    if items.is_empty() {
        return Err(DataError::Empty("feed items"));
    }
    ensure_unique_ids(items.iter().map(|item| item.id))?;
    Ok(items)
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let questions = parse_questions(&read(path)?).map_err(|source| LoadError::Data {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = questions.len(), "questions loaded");
    Ok(questions)
}

pub fn load_feed_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<FeedItem>, LoadError> {
    let path = path.as_ref();
    let items = parse_feed(&read(path)?).map_err(|source| LoadError::Data {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = items.len(), "feed loaded");
    Ok(items)
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_unique_ids(ids: impl Iterator<Item = u32>) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId(id));
        }
    }
    Ok(())
}
