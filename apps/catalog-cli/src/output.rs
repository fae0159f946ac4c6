//! Output formatting for the CLI.
//!
//! Data goes to stdout; notices and errors go to stderr so `--format json`
//! output stays pipeable.

use catalog_gateway::{Notice, NoticeLevel};
use catalog_types::Tool;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::json;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!(error = %e, "failed to encode output"),
    }
}

fn level_name(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "success",
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    }
}

/// Render a notice as one line.
pub fn notice_line(notice: &Notice, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => notice.message.clone(),
            NoticeLevel::Warning => format!("Warning: {}", notice.message),
            NoticeLevel::Error => format!("Error: {}", notice.message),
        },
        OutputFormat::Json => json!({
            "status": level_name(notice.level),
            "message": notice.message,
        })
        .to_string(),
    }
}

/// Print an error message.
pub fn print_error(message: &str, format: OutputFormat) {
    eprintln!("{}", notice_line(&Notice::error(message), format));
}

/// Print a table row.
pub fn print_row(label: &str, value: &str) {
    println!("  {:<16} {}", format!("{}:", label), value);
}

/// Print a divider line.
pub fn print_divider() {
    println!("{}", "-".repeat(100));
}

/// Shorten `text` to `width` characters, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Print tools as a table or JSON array.
pub fn print_tools(tools: &[Tool], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            if tools.is_empty() {
                println!("No tools found");
                return;
            }
            println!("{:<4} {:<36} {:<24} {:<12} {}", "#", "ID", "Name", "Category", "URL");
            print_divider();
            for (i, tool) in tools.iter().enumerate() {
                let hidden = if tool.is_hidden() { " (hidden)" } else { "" };
                println!(
                    "{:<4} {:<36} {:<24} {:<12} {}{}",
                    i + 1,
                    truncate(&tool.id, 36),
                    truncate(&tool.name, 24),
                    truncate(&tool.catelog, 12),
                    tool.url,
                    hidden
                );
            }
        }
        OutputFormat::Json => print_json(tools),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_line_text() {
        assert_eq!(
            notice_line(&Notice::success("Tool added"), OutputFormat::Text),
            "Tool added"
        );
        assert_eq!(
            notice_line(&Notice::error("Request failed"), OutputFormat::Text),
            "Error: Request failed"
        );
        assert_eq!(
            notice_line(&Notice::warning("Deleted 1 of 2 tools"), OutputFormat::Text),
            "Warning: Deleted 1 of 2 tools"
        );
    }

    #[test]
    fn test_notice_line_json_escapes() {
        let line = notice_line(&Notice::error(r#"bad "name""#), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], r#"bad "name""#);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("搜索引擎工具", 4), "搜索引…");
    }
}
