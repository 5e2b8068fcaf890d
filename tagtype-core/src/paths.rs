//! Lexical path operations.
//!
//! Component identities are plain strings coming from an earlier build
//! step, so every operation here works on `/`-separated text and never
//! touches the filesystem. Backslashes are treated as separators and a
//! drive prefix (`C:/`) roots a path, so identities produced on Windows
//! stay comparable. Drive letters are lowercased.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Error raised by a [`PathOps`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("expected an absolute path, got '{path}'")]
    NotAbsolute { path: String },
}

/// Path utilities supplied by the host environment.
pub trait PathOps {
    /// Resolve `path` against `base`, producing a normalized absolute path.
    ///
    /// An absolute `path` ignores `base`.
    fn resolve(&self, base: &Utf8Path, path: &str) -> Result<Utf8PathBuf, PathError>;

    /// Compute the path of `to` relative to the directory `from`.
    fn relative(&self, from: &Utf8Path, to: &Utf8Path) -> Result<Utf8PathBuf, PathError>;

    /// Check whether `path` is absolute.
    fn is_absolute(&self, path: &str) -> bool;

    /// Join `segment` onto `base` and normalize the result.
    fn join(&self, base: &Utf8Path, segment: &str) -> Utf8PathBuf;

    /// Directory portion of `path`.
    fn dirname(&self, path: &Utf8Path) -> Utf8PathBuf;
}

/// POSIX-style lexical implementation of [`PathOps`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixPaths;

impl PathOps for PosixPaths {
    fn resolve(&self, base: &Utf8Path, path: &str) -> Result<Utf8PathBuf, PathError> {
        if self.is_absolute(path) {
            return Ok(normalize(path));
        }
        if !self.is_absolute(base.as_str()) {
            return Err(PathError::NotAbsolute {
                path: base.to_string(),
            });
        }
        Ok(normalize(&format!("{}/{}", base, path)))
    }

    fn relative(&self, from: &Utf8Path, to: &Utf8Path) -> Result<Utf8PathBuf, PathError> {
        for path in [from, to] {
            if !self.is_absolute(path.as_str()) {
                return Err(PathError::NotAbsolute {
                    path: path.to_string(),
                });
            }
        }

        let from = normalize(from.as_str());
        let to = normalize(to.as_str());
        let from_parts = segments(from.as_str());
        let to_parts = segments(to.as_str());

        let common = from_parts
            .iter()
            .zip(&to_parts)
            .take_while(|(a, b)| a == b)
            .count();

        let parts: Vec<&str> = std::iter::repeat_n("..", from_parts.len() - common)
            .chain(to_parts[common..].iter().copied())
            .collect();

        Ok(Utf8PathBuf::from(parts.join("/")))
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with('/') || path.starts_with('\\') || drive_len(path) > 0
    }

    fn join(&self, base: &Utf8Path, segment: &str) -> Utf8PathBuf {
        if base.as_str().is_empty() {
            return normalize(segment);
        }
        normalize(&format!("{}/{}", base, segment))
    }

    fn dirname(&self, path: &Utf8Path) -> Utf8PathBuf {
        let normalized = normalize(path.as_str());
        let text = normalized.as_str();
        let root = root_len(text);
        match text.rfind('/') {
            Some(idx) if idx < root => Utf8PathBuf::from(&text[..root]),
            Some(idx) => Utf8PathBuf::from(&text[..idx]),
            None => Utf8PathBuf::from("."),
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Length of a leading `X:/` or `X:\` drive prefix, or 0.
fn drive_len(path: &str) -> usize {
    match path.as_bytes() {
        [letter, b':', b'/' | b'\\', ..] if letter.is_ascii_alphabetic() => 3,
        _ => 0,
    }
}

/// Length of the root of a normalized path: `/`, `c:/` or nothing.
fn root_len(path: &str) -> usize {
    match drive_len(path) {
        0 if path.starts_with('/') => 1,
        len => len,
    }
}

/// Collapse `.`, `..` and repeated separators.
///
/// `..` never climbs above the root of an absolute path.
fn normalize(path: &str) -> Utf8PathBuf {
    let path = path.replace('\\', "/");
    let root = match drive_len(&path) {
        0 if path.starts_with('/') => Some("/".to_string()),
        0 => None,
        len => Some(path[..len].to_ascii_lowercase()),
    };
    let absolute = root.is_some();
    let rest = &path[root.as_ref().map_or(0, String::len)..];
    let mut out: Vec<&str> = Vec::new();

    for part in rest.split('/') {
        match part {
            "" | "." => {}
            ".." => match out.last() {
                Some(&"..") | None if !absolute => out.push(".."),
                Some(&"..") | None => {}
                Some(_) => {
                    out.pop();
                }
            },
            _ => out.push(part),
        }
    }

    let joined = out.join("/");
    match root {
        Some(root) => Utf8PathBuf::from(format!("{}{}", root, joined)),
        None if joined.is_empty() => Utf8PathBuf::from("."),
        None => Utf8PathBuf::from(joined),
    }
}
