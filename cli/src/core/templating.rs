//! # docsetup Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! ## Overview
//!
//! This module implements placeholder substitution for the documentation
//! templates. A template is plain text containing tokens of the exact form
//! `{{KEY}}`; rendering replaces each token whose `KEY` is present in the
//! `ProjectInfo` with its value. There is no expression syntax, no filters,
//! no escaping and no control flow.
//!
//! ## Architecture
//!
//! - `render`: Pure function. Scans the text once, left to right. Inserted
//!   values are never scanned again, so a value that itself looks like
//!   `{{OTHER}}` ends up in the output verbatim.
//! - `render_file`: Reads a template from disk, renders it, and writes the
//!   result (creating parent directories, overwriting any existing file).
//!   A missing template is not an error; it yields `TemplateOutcome::Missing`
//!   so the caller can warn and move on.
//! - `RenderPolicy`: What to do with tokens that have no value. `Lenient`
//!   leaves them in place; `Strict` refuses to write the file.
//!
//! ## Examples
//!
//! ```rust
//! let info: ProjectInfo = [("PROJECT_NAME", "Foo")].into_iter().collect();
//! let rendered = templating::render("# {{PROJECT_NAME}} {{MISSING}}", &info);
//! assert_eq!(rendered.text, "# Foo {{MISSING}}");
//! assert_eq!(rendered.unresolved, vec!["{{MISSING}}"]);
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{DocsError, Result};
use crate::core::project_info::ProjectInfo;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// How tokens without a matching key are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    /// Leave unknown tokens verbatim in the output.
    #[default]
    Lenient,
    /// Fail the template if any unknown token remains.
    Strict,
}

/// Result of rendering a template string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Number of tokens replaced with a value.
    pub replacements: usize,
    /// Distinct `{{KEY}}` tokens left in the output, in first-seen order.
    pub unresolved: Vec<String>,
}

/// What `render_file` did with one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOutcome {
    Written {
        target: PathBuf,
        replacements: usize,
        unresolved: Vec<String>,
    },
    Missing {
        source: PathBuf,
    },
}

/// Replaces every `{{KEY}}` whose key is in `info` with its value.
pub fn render(template: &str, info: &ProjectInfo) -> Rendered {
    let mut text = String::with_capacity(template.len());
    let mut replacements = 0;
    let mut unresolved: Vec<String> = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        text.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            // No closing braces anywhere after this point.
            rest = &rest[start..];
            break;
        };
        let key = &after_open[..end];

        if let Some(value) = info.get(key) {
            text.push_str(value);
            replacements += 1;
            rest = &after_open[end + CLOSE.len()..];
        } else if is_token_name(key) {
            let token = &rest[start..start + OPEN.len() + end + CLOSE.len()];
            if !unresolved.iter().any(|t| t == token) {
                unresolved.push(token.to_string());
            }
            text.push_str(token);
            rest = &after_open[end + CLOSE.len()..];
        } else {
            // Something like `{{{KEY}}`: step over one brace and look again.
            text.push('{');
            rest = &rest[start + 1..];
        }
    }
    text.push_str(rest);

    Rendered {
        text,
        replacements,
        unresolved,
    }
}

/// A token name is anything non-empty between the braces that contains no brace itself.
fn is_token_name(key: &str) -> bool {
    !key.is_empty() && !key.contains(['{', '}'])
}

/// Renders the template at `source` into `target`.
///
/// # Errors
///
/// Returns an `Err` if the template exists but cannot be read, if the target
/// cannot be written, or (under `RenderPolicy::Strict`) if unresolved tokens
/// remain. In the strict case nothing is written.
pub fn render_file(
    source: &Path,
    target: &Path,
    info: &ProjectInfo,
    policy: RenderPolicy,
) -> Result<TemplateOutcome> {
    if !source.exists() {
        debug!("Template not found: {}", source.display());
        return Ok(TemplateOutcome::Missing {
            source: source.to_path_buf(),
        });
    }

    let content = io::read_file_to_string(source)
        .with_context(|| format!("Failed to read template '{}'", source.display()))?;
    let rendered = render(&content, info);
    debug!(
        "Rendered '{}': {} replacement(s), {} unresolved",
        source.display(),
        rendered.replacements,
        rendered.unresolved.len()
    );

    if policy == RenderPolicy::Strict && !rendered.unresolved.is_empty() {
        anyhow::bail!(DocsError::UnresolvedPlaceholders {
            path: source.to_path_buf(),
            tokens: rendered.unresolved,
        });
    }

    io::write_string_to_file(target, &rendered.text)
        .with_context(|| format!("Failed to write rendered file '{}'", target.display()))?;

    Ok(TemplateOutcome::Written {
        target: target.to_path_buf(),
        replacements: rendered.replacements,
        unresolved: rendered.unresolved,
    })
}
