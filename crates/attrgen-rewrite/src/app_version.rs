//! Firmware application version bump.
//!
//! The version header is scanned top to bottom for the major, then minor,
//! then patch `#define`. Every patch define after the minor one is bumped
//! modulo 256; everything else is copied through.

use std::fmt;
use std::path::Path;

use tracing::{debug, info, info_span};

use crate::error::{Result, RewriteError};
use crate::lines::{read, split_ending, write};

pub const MAJOR_KEY: &str = "APP_VERSION_MAJOR";
pub const MINOR_KEY: &str = "APP_VERSION_MINOR";
pub const PATCH_KEY: &str = "APP_VERSION_PATCH";

/// Default file receiving the `version=` line.
pub const DEFAULT_VERSION_OUTPUT: &str = "version.txt";

/// Component value when its define was not found.
pub const NOT_FOUND: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppVersion {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
}

impl Default for AppVersion {
    fn default() -> Self {
        Self {
            major: NOT_FOUND,
            minor: NOT_FOUND,
            patch: NOT_FOUND,
        }
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl AppVersion {
    /// Content of the version output file (no trailing newline).
    pub fn version_line(&self) -> String {
        format!("version={self}")
    }
}

/// Value of `#define <key> <number>`.
///
/// `None` when the line does not mention the key. Lines that mention it but
/// do not have that shape are logged and also yield `None`.
fn define_value(line: &str, key: &str) -> Option<i64> {
    // the key must be followed by whitespace to be a candidate
    let mentioned = line
        .match_indices(key)
        .any(|(at, _)| line[at + key.len()..].starts_with([' ', '\t']));
    if !mentioned {
        return None;
    }
    debug!("found {key}");
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [_, name, number] if *name == key => match number.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!("couldn't parse {key} line");
                None
            }
        },
        _ => {
            debug!("couldn't parse {key} line");
            None
        }
    }
}

#[derive(Clone, Copy)]
enum Phase {
    Major,
    Minor,
    Patch,
}

/// Bump the patch define in `text`. Returns the new text and the version
/// found (with the bumped patch).
pub fn bump_app_version_text(text: &str) -> (String, AppVersion) {
    let mut version = AppVersion::default();
    let mut phase = Phase::Major;
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        match phase {
            Phase::Major => {
                if let Some(value) = define_value(line, MAJOR_KEY) {
                    version.major = value;
                    phase = Phase::Minor;
                }
                out.push_str(line);
            }
            Phase::Minor => {
                if let Some(value) = define_value(line, MINOR_KEY) {
                    version.minor = value;
                    phase = Phase::Patch;
                }
                out.push_str(line);
            }
            Phase::Patch => match define_value(line, PATCH_KEY) {
                Some(patch) => {
                    version.patch = patch.wrapping_add(1).rem_euclid(256);
                    let (_, ending) = split_ending(line);
                    let rewritten = format!("#define {PATCH_KEY} {}", version.patch);
                    debug!("new version string {rewritten}");
                    out.push_str(&rewritten);
                    out.push_str(ending);
                }
                None => out.push_str(line),
            },
        }
    }
    (out, version)
}

/// Rewrite `header` with a bumped patch number and write
/// `version=<major>.<minor>.<patch>` to `output`.
pub fn bump_app_version(header: &Path, output: &Path) -> Result<AppVersion> {
    let span = info_span!("bump_app_version", header = %header.display());
    let _guard = span.enter();

    let text = read(header)?;
    let (rewritten, version) = bump_app_version_text(&text);
    write(header, &rewritten)?;
    debug!("wrote file {}", header.display());

    std::fs::write(output, version.version_line())
        .map_err(|source| RewriteError::write(output, source))?;
    info!(version = %version, output = %output.display(), "application version bumped");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "\
#ifndef __APP_VERSION_H__
#define APP_VERSION_MAJOR 4
#define APP_VERSION_MINOR 2
#define APP_VERSION_PATCH 17
#define APP_VERSION_STRING \"4.2\"
#endif
";

    #[test]
    fn bumps_patch_only() {
        let (text, version) = bump_app_version_text(HEADER);
        assert_eq!(
            version,
            AppVersion {
                major: 4,
                minor: 2,
                patch: 18
            }
        );
        assert_eq!(text, HEADER.replace("PATCH 17", "PATCH 18"));
        assert_eq!(version.version_line(), "version=4.2.18");
    }

    #[test]
    fn patch_wraps_at_256() {
        let (text, version) = bump_app_version_text(&HEADER.replace("17", "255"));
        assert_eq!(version.patch, 0);
        assert!(text.contains("#define APP_VERSION_PATCH 0\n"));
    }

    #[test]
    fn missing_components_render_minus_one() {
        let (text, version) = bump_app_version_text("#define APP_VERSION_MAJOR 1\n");
        assert_eq!(text, "#define APP_VERSION_MAJOR 1\n");
        assert_eq!(version.to_string(), "1.-1.-1");
    }

    #[test]
    fn patch_before_minor_is_not_touched() {
        let text = "#define APP_VERSION_PATCH 3\n#define APP_VERSION_MAJOR 1\n";
        let (out, version) = bump_app_version_text(text);
        assert_eq!(out, text);
        assert_eq!(version.patch, NOT_FOUND);
    }

    #[test]
    fn unparsable_candidate_is_kept() {
        let text = "#define APP_VERSION_MAJOR 1\n#define APP_VERSION_MINOR 0\n\
                    #define APP_VERSION_PATCH (BASE + 1)\n";
        let (out, version) = bump_app_version_text(text);
        assert_eq!(out, text);
        assert_eq!(version.patch, NOT_FOUND);
    }

    #[test]
    fn longer_names_are_not_candidates() {
        assert_eq!(define_value("#define APP_VERSION_MAJOR_X 9\n", MAJOR_KEY), None);
        assert_eq!(define_value("#define APP_VERSION_MAJOR 9\n", MAJOR_KEY), Some(9));
    }
}
