//! Outcome rendering shared by `check` and `interactive`.

use anyhow::Result;
use std::io::{self, Write};

use phishguard_core::analyze::{AnalysisError, Outcome, Verdict};
use phishguard_core::config::OutputFormat;

pub(crate) fn outcome_json(url: &str, result: &Result<Verdict, AnalysisError>) -> serde_json::Value {
    let outcome = Outcome::from_result(result);
    serde_json::json!({
        "url": url.trim(),
        "outcome": outcome.as_str(),
        "message": outcome.message(),
        "tone": outcome.tone().as_str(),
        "color": outcome.color(),
        "error": result.as_ref().err().map(|e| e.to_string()),
    })
}

/// Prints one outcome on stdout; see [`write_outcome`].
pub(crate) fn print_outcome(
    url: &str,
    result: &Result<Verdict, AnalysisError>,
    format: OutputFormat,
    pretty: bool,
) -> Result<Outcome> {
    write_outcome(&mut io::stdout().lock(), url, result, format, pretty)
}

/// Writes one outcome; JSON is pretty-printed for one-shot checks and one
/// object per line otherwise. Error causes in text mode go to stderr.
pub(crate) fn write_outcome<W: Write>(
    out: &mut W,
    url: &str,
    result: &Result<Verdict, AnalysisError>,
    format: OutputFormat,
    pretty: bool,
) -> Result<Outcome> {
    let outcome = Outcome::from_result(result);
    match format {
        OutputFormat::Text => {
            writeln!(out, "{outcome}")?;
            if let Err(err) = result {
                if !matches!(err, AnalysisError::EmptyInput) {
                    eprintln!("  {err}");
                }
            }
        }
        OutputFormat::Json => {
            let value = outcome_json(url, result);
            let line = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            writeln!(out, "{line}")?;
        }
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_for_verdict() {
        let v = outcome_json("  https://example.com ", &Ok(Verdict::Phishing));
        assert_eq!(v["url"], "https://example.com");
        assert_eq!(v["outcome"], "phishing");
        assert_eq!(v["tone"], "danger");
        assert_eq!(v["color"], "#e74c3c");
        assert!(v["error"].is_null());
    }

    #[test]
    fn json_for_error_carries_cause() {
        let v = outcome_json("", &Err(AnalysisError::EmptyInput));
        assert_eq!(v["outcome"], "empty_input");
        assert_eq!(v["tone"], "warning");
        assert_eq!(v["error"], "no URL given");
    }

    #[test]
    fn text_outcome_written_to_given_writer() {
        let mut out = Vec::new();
        let outcome = write_outcome(
            &mut out,
            "https://example.com",
            &Ok(Verdict::Safe),
            OutputFormat::Text,
            false,
        )
        .unwrap();
        assert_eq!(outcome, Outcome::Safe);
        assert_eq!(String::from_utf8(out).unwrap(), "✓ SAFE\n");
    }
}
