//! EnvVarSet type.
//!
//! An ordered set of environment variables parsed from `.env` files.

use std::path::Path;
use tracing::warn;

/// Ordered key/value pairs from one or more `.env` layers.
///
/// Keys keep their first-seen position; a later insert of an existing key
/// replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVarSet {
    entries: Vec<(String, String)>,
}

impl EnvVarSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse flat `KEY=value` lines.
    ///
    /// Blank lines, `#`/`;` comments and `[section]` headers are skipped, so
    /// sectioned files flatten into one level. Values may be double quoted
    /// (with `\n`, `\r`, `\"`, `\\` escapes) or single quoted (verbatim).
    /// Nothing is interpolated.
    pub fn parse(contents: &str) -> Self {
        let mut set = Self::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty()
                || line.starts_with('#')
                || line.starts_with(';')
                || (line.starts_with('[') && line.ends_with(']'))
            {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                let value = parse_env_value(value.trim());
                if !can_export(key, &value) {
                    warn!(key = %key.escape_debug(), "skipping env entry containing a NUL byte");
                    continue;
                }
                set.insert(key, value);
            }
        }

        set
    }

    /// Read and parse a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, including `NotFound`; callers decide
    /// whether a missing layer matters.
    pub fn from_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Overlay `other` on top of this set; `other` wins on collision.
    pub fn merge(&mut self, other: EnvVarSet) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All entries in order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry into the process environment.
    ///
    /// Existing variables with the same name are overwritten; nothing is
    /// ever removed. Entries the platform cannot hold (empty key, `=` in
    /// the key, NUL anywhere) are skipped with a warning. Not safe to call
    /// while other threads read the environment.
    pub fn apply_to_process(&self) {
        for (key, value) in &self.entries {
            if !can_export(key, value) {
                warn!(key = %key.escape_debug(), "skipping env entry that cannot be exported");
                continue;
            }
            std::env::set_var(key, value);
        }
    }

    /// Serialize to .env format string
    ///
    /// Quotes values that contain spaces or special characters.
    fn to_env_string(&self) -> String {
        let mut output = String::new();

        for (key, value) in &self.entries {
            if needs_quotes(value) {
                output.push_str(&format!("{}=\"{}\"\n", key, escape_env_value(value)));
            } else {
                output.push_str(&format!("{}={}\n", key, value));
            }
        }

        output
    }
}

impl FromIterator<(String, String)> for EnvVarSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

impl std::fmt::Display for EnvVarSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_env_string())
    }
}

/// Whether `std::env::set_var` accepts this pair without panicking.
fn can_export(key: &str, value: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0']) && !value.contains('\0')
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(|ch| ch.is_whitespace())
        || value.contains(['#', ';', '=', '"', '\'', '\\'])
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
