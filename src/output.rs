//! User-facing output for detection runs
//!
//! All banner, context, and size rendering goes through this module so the
//! detector stays free of formatting concerns. Progress detail travels over
//! `log`; everything here is meant for the terminal.

use std::fmt::Write as _;
use std::path::Path;

use colored::Colorize;

use crate::models::Diagnostic;

/// Lines of surrounding source shown above and below a finding
const CONTEXT_LINES: u32 = 2;

/// Announce that ES6+ syntax was found (stderr)
pub fn print_failure_banner() {
    eprintln!("{}", "[ES5Check] ES6+ syntax detected:".red().bold());
}

/// Announce a clean run (stdout)
pub fn print_pass_banner() {
    println!(
        "{}",
        "[ES5Check] Check passed! Files contain no ES6+ syntax.".green()
    );
}

/// Render one diagnostic with a window of surrounding source lines
///
/// The offending line is prefixed with `>` and a `^` marker is placed under
/// the reported column. The exact marker offset is cosmetic; its presence
/// under the offending line is what matters.
#[must_use]
pub fn render_context(source: &str, diagnostic: &Diagnostic) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let rule = diagnostic.rule_id.as_deref().unwrap_or("unknown");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nline {}, column {}: {} ({})",
        diagnostic.line, diagnostic.column, diagnostic.message, rule
    );

    let line = diagnostic.line.max(1);
    let start = line.saturating_sub(CONTEXT_LINES).max(1);
    let end = (line + CONTEXT_LINES).min(lines.len() as u32);

    for i in start..=end {
        let content = lines.get(i as usize - 1).unwrap_or(&"");
        let is_error_line = i == line;
        let prefix = if is_error_line { "> " } else { "  " };
        let _ = writeln!(out, "{prefix}{i}: {content}");

        if is_error_line {
            let offset = diagnostic.column.max(1) as usize - 1
                + prefix.len()
                + i.to_string().len()
                + ": ".len();
            let _ = writeln!(out, "{}^", " ".repeat(offset));
        }
    }
    out
}

/// Print each file's size in KB plus a total line
#[allow(clippy::cast_precision_loss)]
pub fn print_file_sizes(files: &[std::path::PathBuf]) -> std::io::Result<()> {
    let mut total: u64 = 0;
    for file in files {
        let size = std::fs::metadata(file)?.len();
        total += size;
        println!(
            "[ES5Check] {}: {:.2} KB",
            basename(file),
            size as f64 / 1024.0
        );
    }
    println!("[ES5Check] total size: {:.2} KB", total as f64 / 1024.0);
    Ok(())
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string())
}
