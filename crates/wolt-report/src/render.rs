//! Plain-text rendering
//!
//! The report is consumed by humans (and pasted into issues by the calling
//! workflow), so layout is stable plain text: a header, SITE HEALTH, the
//! network digest for the trailing window, and a placeholder section for
//! the issue feed that is merged in outside this subsystem.

use chrono::{DateTime, Utc};
use wolt_core::{wire_timestamp, VerifiedMessage};

use crate::health::SiteStatus;

/// Messages section content: either the verified batch or the reason the
/// relay could not be queried.
#[derive(Debug, Clone)]
pub enum MessageDigest {
    /// Verified messages in chronological (oldest-first) order.
    Messages(Vec<VerifiedMessage>),
    /// Relay failure note.
    Error(String),
}

const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "------------------------------";

/// Truncate message content for display. Counts characters, not bytes, so
/// multi-byte content cannot be split mid-codepoint. Cosmetic only; runs on
/// the already-verified record.
pub fn truncate_preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let mut preview: String = content.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }
}

/// Render the full heartbeat report.
pub fn render_report(
    generated_at: DateTime<Utc>,
    sites: &[SiteStatus],
    window_days: i64,
    digest: &MessageDigest,
    preview_len: usize,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("WOLT HEARTBEAT".to_string());
    lines.push(format!("Generated: {}", wire_timestamp(generated_at)));
    lines.push(HEAVY_RULE.to_string());
    lines.push(String::new());

    lines.push("SITE HEALTH".to_string());
    lines.push(LIGHT_RULE.to_string());
    for site in sites {
        let icon = if site.is_up() { "UP" } else { "DOWN" };
        let detail = match (site.status, &site.error) {
            (Some(code), _) => code.to_string(),
            (None, Some(error)) => error.clone(),
            (None, None) => "error".to_string(),
        };
        lines.push(format!("  [{icon}] {} ({detail})", site.name));
    }
    lines.push(String::new());

    lines.push(format!("WOLT NETWORK (last {window_days} days)"));
    lines.push(LIGHT_RULE.to_string());
    match digest {
        MessageDigest::Error(reason) => {
            lines.push(format!("  Error checking messages: {reason}"));
        }
        MessageDigest::Messages(messages) if messages.is_empty() => {
            lines.push(format!(
                "  No new messages in the last {window_days} days."
            ));
        }
        MessageDigest::Messages(messages) => {
            lines.push(format!("  {} message(s):", messages.len()));
            lines.push(String::new());
            for verified in messages {
                let tag = if verified.outcome.is_valid() {
                    "verified"
                } else {
                    "UNVERIFIED"
                };
                let date = verified
                    .message
                    .created_at
                    .split('T')
                    .next()
                    .unwrap_or(&verified.message.created_at);
                lines.push(format!("  [{}] ({tag}, {date})", verified.message.from_wolt));
                lines.push(format!(
                    "    {}",
                    truncate_preview(&verified.message.content, preview_len)
                ));
                lines.push(String::new());
            }
            // Drop the trailing blank inside the section.
            lines.pop();
        }
    }
    lines.push(String::new());

    lines.push("GITHUB ISSUES".to_string());
    lines.push(LIGHT_RULE.to_string());
    lines.push("  (merged in by the calling workflow)".to_string());
    lines.push(String::new());

    lines.push(HEAVY_RULE.to_string());
    lines.push("This is an automated heartbeat from the wolt network.".to_string());

    lines.join("\n")
}
