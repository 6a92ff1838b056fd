//! Index name heuristics
//!
//! The data source only reports index names. Kind and covered columns are
//! guessed from naming conventions (`PRIMARY`, `uk_email`, `idx_user_id`) and
//! are a display aid, not authoritative metadata.

use super::column::ColumnMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    Primary,
    Unique,
    Index,
}

impl IndexKind {
    pub fn label(&self) -> &'static str {
        match self {
            IndexKind::Primary => "PRIMARY",
            IndexKind::Unique => "UNIQUE",
            IndexKind::Index => "INDEX",
        }
    }
}

const UNIQUE_PREFIXES: &[&str] = &["uniq", "unique", "uk", "uq", "ux"];
const INDEX_PREFIXES: &[&str] = &["idx", "ix", "index", "key", "fk"];

/// What the indices panel shows for one index name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub name: String,
    pub kind: IndexKind,
    pub columns: Vec<String>,
}

impl IndexSummary {
    pub fn infer(name: &str, columns: &[ColumnMetadata]) -> Self {
        let kind = infer_kind(name);
        let covered = if kind == IndexKind::Primary {
            columns
                .iter()
                .filter(|c| c.is_primary_key())
                .map(|c| c.name.clone())
                .collect()
        } else {
            infer_columns(name, columns)
        };
        Self {
            name: name.to_string(),
            kind,
            columns: covered,
        }
    }
}

fn infer_kind(name: &str) -> IndexKind {
    if name.eq_ignore_ascii_case("PRIMARY") {
        return IndexKind::Primary;
    }
    let first = first_token(name).to_ascii_lowercase();
    if UNIQUE_PREFIXES.contains(&first.as_str()) {
        IndexKind::Unique
    } else {
        IndexKind::Index
    }
}

fn first_token(name: &str) -> &str {
    name.split('_').next().unwrap_or(name)
}

/// Part of the name after a recognised prefix token.
fn strip_prefix(name: &str) -> &str {
    let first = first_token(name).to_ascii_lowercase();
    let known = UNIQUE_PREFIXES.contains(&first.as_str()) || INDEX_PREFIXES.contains(&first.as_str());
    match name.split_once('_') {
        Some((_, rest)) if known && !rest.is_empty() => rest,
        _ => name,
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn match_column(fragment: &str, columns: &[ColumnMetadata]) -> Option<String> {
    let wanted = normalize(fragment);
    columns
        .iter()
        .find(|c| normalize(&c.name) == wanted)
        .map(|c| c.name.clone())
}

fn infer_columns(name: &str, columns: &[ColumnMetadata]) -> Vec<String> {
    let rest = strip_prefix(name);
    if let Some(column) = match_column(rest, columns) {
        return vec![column];
    }
    rest.split('_')
        .filter(|token| !token.is_empty())
        .map(|token| match_column(token, columns).unwrap_or_else(|| token.to_string()))
        .collect()
}
