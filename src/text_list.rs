//! Whitespace separated integer lists, the only on-disk format.
//!
//! Input is any number of decimal `i32` values separated by whitespace. Output lists put a single
//! space after every value, and the report holds the original and the sorted list in two sections.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub fn parse_list(text: &str) -> Result<Vec<i32>> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i32>().map_err(|_| Error::NotAnInteger {
                token: token.to_owned(),
                position,
            })
        })
        .collect()
}

pub fn read_list(path: &Path) -> Result<Vec<i32>> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_owned(),
        source,
    })?;

    let list = parse_list(&text)?;
    tracing::debug!(path = %path.display(), len = list.len(), "read list");

    Ok(list)
}

pub fn format_list(v: &[i32]) -> String {
    let mut out = String::with_capacity(v.len() * 4);
    for val in v {
        // Writing into a String can't fail.
        let _ = write!(out, "{val} ");
    }

    out
}

pub fn format_report(original: &[i32], sorted: &[i32]) -> String {
    format!(
        "Original:\n{}\n\nSorted:\n{}\n",
        format_list(original),
        format_list(sorted)
    )
}

pub fn write_report(path: &Path, original: &[i32], sorted: &[i32]) -> Result<()> {
    fs::write(path, format_report(original, sorted)).map_err(|source| Error::Write {
        path: path.to_owned(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "wrote report");
    Ok(())
}
