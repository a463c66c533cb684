//! Rendering of response envelopes

use anyhow::Result;
use colored::*;
use nextcloud_admin::api::Envelope;
use serde_json::json;

/// What to print for a response
pub enum Rendering {
    /// Status line and the data subtree
    Data,
    /// Status line and the `<element>` entries found at this data path
    List(&'static [&'static str]),
}

pub fn print_envelope(envelope: &Envelope, rendering: &Rendering, as_json: bool) -> Result<()> {
    if as_json {
        let value = match rendering {
            Rendering::Data => serde_json::to_value(envelope)?,
            Rendering::List(path) => json!({
                "status": envelope.status(),
                "statuscode": envelope.status_code(),
                "message": envelope.message(),
                "data": envelope.data_list_at(path),
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", status_line(envelope));

    match rendering {
        Rendering::Data => {
            if let Some(data) = envelope.data() {
                println!("{}", serde_json::to_string_pretty(data)?);
            }
        }
        Rendering::List(path) => {
            let entries = envelope.data_list_at(path);
            if entries.is_empty() {
                println!("  {}", "(none)".dimmed());
            }
            for entry in entries {
                println!("  {}", entry);
            }
        }
    }
    Ok(())
}

fn status_line(envelope: &Envelope) -> String {
    let code = format!("({})", envelope.status_code());
    let line = if envelope.is_ok() {
        format!("{} {} {}", "✓".bright_green().bold(), envelope.status().bright_green(), code.dimmed())
    } else {
        format!("{} {} {}", "✗".bright_red().bold(), envelope.status().bright_red(), code.dimmed())
    };

    match envelope.message() {
        Some(message) if !message.is_empty() => format!("{} {}", line, message),
        _ => line,
    }
}
