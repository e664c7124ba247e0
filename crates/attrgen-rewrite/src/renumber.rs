//! Renumbering of attribute ids during early development.
//!
//! Once an id has shipped it must never change; only ids at or above the
//! base are touched.

use std::path::Path;

use tracing::{debug, info, info_span};

use crate::error::{Result, RewriteError};
use crate::lines::{read, split_ending, write};

pub const ID_KEY: &str = "\"x-id\":";
pub const DEFAULT_BASE: u32 = 140;
pub const DEFAULT_OFFSET: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenumberOptions {
    /// Ids below this are left alone.
    pub base: u32,
    /// First id handed out.
    pub offset: u32,
}

impl Default for RenumberOptions {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// The id on an `"x-id": <n>,` line.
fn id_value(content: &str) -> Option<u32> {
    let mut tokens = content.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(ID_KEY), Some(number), None) => number.trim_end_matches(',').parse().ok(),
        _ => None,
    }
}

/// Renumber `text`, returning the new text and how many ids were rewritten.
///
/// # Errors
///
/// Returns [`RewriteError::IdOverflow`] when an assigned id would exceed
/// `u32::MAX`.
pub fn renumber_text(text: &str, options: RenumberOptions) -> Result<(String, u32)> {
    let mut count: u32 = 0;
    let mut out = String::with_capacity(text.len());

    for (index, line) in text.split_inclusive('\n').enumerate() {
        if !line.contains(ID_KEY) {
            out.push_str(line);
            continue;
        }
        let (content, ending) = split_ending(line);
        match id_value(content) {
            Some(id) if id >= options.base => {
                let next = options
                    .offset
                    .checked_add(count)
                    .ok_or(RewriteError::IdOverflow {
                        line: index + 1,
                        offset: options.offset,
                    })?;
                let indent = &content[..content.len() - content.trim_start().len()];
                out.push_str(&format!("{indent}{ID_KEY} {next},{ending}"));
                count += 1;
            }
            Some(_) => out.push_str(line),
            None => {
                debug!("couldn't parse: {}", content.trim());
                out.push_str(line);
            }
        }
    }
    Ok((out, count))
}

/// Renumber the schema file in place.
pub fn renumber_file(path: &Path, options: RenumberOptions) -> Result<u32> {
    let span = info_span!("renumber", path = %path.display(), base = options.base, offset = options.offset);
    let _guard = span.enter();

    let text = read(path)?;
    let (rewritten, count) = renumber_text(&text, options)?;
    write(path, &rewritten)?;
    debug!("wrote file {}", path.display());
    info!("{count} total attributes");
    Ok(count)
}
