//! Structured JSON logger.
//!
//! - One log line = one event
//! - Deterministic key ordering (event, severity, then fields sorted by key)
//! - Synchronous, unbuffered writes

use std::fmt;
use std::io::{self, Write};

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues (e.g. backend fallback)
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger writing one JSON object per event.
pub struct Logger;

impl Logger {
    /// Log an event to stdout.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::write_event(severity, event, fields, &mut io::stdout());
    }

    /// Log an event to stderr (errors and fatal conditions).
    pub fn log_stderr(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        Self::write_event(severity, event, fields, &mut io::stderr());
    }

    fn write_event<W: Write>(severity: Severity, event: &str, fields: &[(&str, &str)], out: &mut W) {
        let mut line = String::with_capacity(128);
        line.push_str("{\"event\":\"");
        escape_into(&mut line, event);
        line.push_str("\",\"severity\":\"");
        line.push_str(severity.as_str());
        line.push('"');

        let mut sorted: Vec<_> = fields.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);
        for (key, value) in sorted {
            line.push_str(",\"");
            escape_into(&mut line, key);
            line.push_str("\":\"");
            escape_into(&mut line, value);
            line.push('"');
        }

        line.push_str("}\n");

        // Single write, then flush: no partial lines under interleaving.
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }
}

fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        Logger::write_event(severity, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_event_and_severity_lead() {
        let line = render(Severity::Info, "server_started", &[]);
        assert_eq!(line, "{\"event\":\"server_started\",\"severity\":\"INFO\"}\n");
    }

    #[test]
    fn test_fields_sorted_by_key() {
        let line = render(Severity::Warn, "fallback", &[("zeta", "1"), ("alpha", "2")]);
        let alpha = line.find("alpha").unwrap();
        let zeta = line.find("zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_escaping() {
        let line = render(Severity::Error, "oops", &[("detail", "a \"quoted\"\nthing")]);
        assert!(line.contains("a \\\"quoted\\\"\\nthing"));
        // Still a single line
        assert_eq!(line.matches('\n').count(), 1);
    }

    #[test]
    fn test_output_is_valid_json() {
        let line = render(Severity::Info, "db_connected", &[("backend", "sqlite")]);
        let parsed: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(parsed["event"], "db_connected");
        assert_eq!(parsed["backend"], "sqlite");
    }
}
