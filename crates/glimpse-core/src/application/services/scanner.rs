//! Preview Declaration Scanner.
//!
//! Walks the project's `lib/` tree and collects `@Preview`-annotated
//! callable declarations. Recognition is a narrow structural match — a
//! token scan for the marker plus a regex over the following declaration
//! header — not a Dart parser. Files may be syntactically invalid outside
//! the marker region and still scan fine; that tolerance is intentional.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::application::error::ApplicationError;
use crate::application::ports::Filesystem;
use crate::domain::{PreviewDeclaration, ProjectRoot, preview::dedup_preserving_order};
use crate::error::{GlimpseError, GlimpseResult};

/// Recognized preview marker token.
pub const PREVIEW_MARKER: &str = "@Preview";

/// Scan the project for preview declarations.
///
/// Visitation order is made deterministic by sorting enumerated paths, so
/// alias numbering downstream is reproducible across platforms. The
/// `exclude` subtree (the tool directory) is never scanned — the scanner
/// must not see its own generated output.
///
/// Zero declarations is success, not an error.
pub fn scan(
    fs: &dyn Filesystem,
    root: &ProjectRoot,
    exclude: &Path,
) -> GlimpseResult<Vec<PreviewDeclaration>> {
    let source_dir = root.source_dir();
    if !fs.is_dir(&source_dir) {
        debug!(dir = %source_dir.display(), "no source directory, nothing to scan");
        return Ok(Vec::new());
    }

    let mut files = fs
        .list_files(&source_dir)
        .map_err(|e| scan_error(&source_dir, e))?;
    files.retain(|p| is_dart_file(p) && !p.starts_with(exclude));
    files.sort();

    let mut declarations = Vec::new();
    for file in files {
        let content = fs.read_to_string(&file).map_err(|e| scan_error(&file, e))?;
        let Some(module) = root.relativize(&file) else {
            continue;
        };
        let found = scan_content(&module, &content);
        trace!(module = %module, count = found.len(), "scanned module");
        declarations.extend(found);
    }

    let declarations = dedup_preserving_order(declarations);
    debug!(count = declarations.len(), "preview scan complete");
    Ok(declarations)
}

fn is_dart_file(path: &PathBuf) -> bool {
    path.extension().map(|e| e == "dart").unwrap_or(false)
}

fn scan_error(path: &Path, source: GlimpseError) -> GlimpseError {
    ApplicationError::Scan {
        path: path.to_path_buf(),
        reason: source.to_string(),
    }
    .into()
}

// ── Structural matching ───────────────────────────────────────────────────────

/// Declaration header following the marker: optional modifiers, optional
/// return type (possibly generic or nullable), then the callable name.
fn declaration_header() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^\s*(?:(?:static|final|const|external)\s+)*(?:[A-Za-z_$][\w$]*(?:<[^>;{}]*>)?\??\s+)?([A-Za-z_$][\w$]*)\s*\(",
        )
        .expect("declaration header pattern is valid")
    })
}

/// Find every marker-annotated declaration in one module's text.
pub(crate) fn scan_content(module: &str, content: &str) -> Vec<PreviewDeclaration> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(pos) = content[cursor..].find(PREVIEW_MARKER) {
        let after = cursor + pos + PREVIEW_MARKER.len();
        cursor = after;

        // Reject longer identifiers such as `@PreviewConfig`.
        if content[after..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        {
            continue;
        }

        let Some(rest) = skip_argument_list(&content[after..]) else {
            continue;
        };
        if let Some(caps) = declaration_header().captures(rest) {
            found.push(PreviewDeclaration::new(module, &caps[1]));
        }
    }

    found
}

/// Skip the annotation's balanced argument list, if present.
///
/// Paren depth only; string literals containing parens are not tracked.
/// An unbalanced list yields `None` and the marker is skipped.
fn skip_argument_list(rest: &str) -> Option<&str> {
    let trimmed = rest.trim_start();
    if !trimmed.starts_with('(') {
        return Some(rest);
    }
    let mut depth = 0usize;
    for (i, c) in trimmed.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&trimmed[i + 1..]);
                }
            }
            _ => {}
        }
    }
    None
}
