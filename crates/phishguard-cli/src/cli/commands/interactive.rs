//! `phishguard interactive` – classify URLs read from stdin, one per line.

use anyhow::{Context, Result};
use phishguard_core::analyze::{Analyzer, Outcome};
use phishguard_core::classifier::ModelSlot;
use phishguard_core::config::{OutputFormat, PhishGuardConfig};
use std::borrow::Cow;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

use crate::cli::render::write_outcome;

const PROMPT: &str = "url> ";

/// The model is loaded once; a load failure is reported on every line.
pub fn run_interactive(
    cfg: &PhishGuardConfig,
    model: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<i32> {
    let model_path = cfg.resolve_model_path(model)?;
    let analyzer = Analyzer::new(ModelSlot::load(&model_path));
    let format = format.unwrap_or(cfg.output);

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    if prompt && !analyzer.model().is_ready() {
        eprintln!("{} ({})", Outcome::ModelUnavailable, model_path.display());
    }

    let outcomes = run_session(
        &analyzer,
        stdin.lock(),
        &mut io::stdout().lock(),
        format,
        prompt,
    )?;

    tracing::info!(handled = outcomes.len(), "interactive session ended");
    Ok(0)
}

/// Analyzes every line of `input` until EOF, writing one outcome per line.
///
/// Lines are decoded lossily, so invalid UTF-8 is still analyzed. Only a
/// read or write error ends the session early.
pub(crate) fn run_session<R: BufRead, W: Write>(
    analyzer: &Analyzer,
    mut input: R,
    out: &mut W,
    format: OutputFormat,
    prompt: bool,
) -> Result<Vec<Outcome>> {
    let mut outcomes = Vec::new();
    let mut buf = Vec::new();
    loop {
        if prompt {
            eprint!("{PROMPT}");
            io::stderr().flush().ok();
        }
        buf.clear();
        let n = input.read_until(b'\n', &mut buf).context("read stdin")?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!(bytes = n, "input line is not valid UTF-8, decoded lossily");
        }
        let result = analyzer.analyze(&line);
        outcomes.push(write_outcome(out, &line, &result, format, false)?);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn example_model() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/example-forest.json")
    }

    fn json_lines(out: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn session_survives_blank_and_invalid_lines() {
        let analyzer = Analyzer::new(ModelSlot::load(&example_model()));
        assert!(analyzer.model().is_ready());

        let input: &[u8] = b"http://10.0.0.1/a\n\n\xff\xfe\nhttps://www.example.com/\n";
        let mut out = Vec::new();
        let outcomes = run_session(&analyzer, input, &mut out, OutputFormat::Json, false).unwrap();

        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0], Outcome::Phishing);
        assert_eq!(outcomes[1], Outcome::EmptyInput);
        assert!(matches!(outcomes[2], Outcome::Safe | Outcome::Phishing));
        assert_eq!(outcomes[3], Outcome::Safe);

        let lines = json_lines(&out);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["url"], "http://10.0.0.1/a");
        assert_eq!(lines[1]["outcome"], "empty_input");
        assert_eq!(lines[2]["url"], "\u{fffd}\u{fffd}");
        assert_eq!(lines[3]["outcome"], "safe");
    }

    #[test]
    fn missing_model_reported_on_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let analyzer = Analyzer::new(ModelSlot::load(&dir.path().join("absent.json")));

        let input: &[u8] = b"https://a.example/\nhttps://b.example/";
        let mut out = Vec::new();
        let outcomes = run_session(&analyzer, input, &mut out, OutputFormat::Text, false).unwrap();

        assert_eq!(outcomes, vec![Outcome::ModelUnavailable; 2]);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "❌ Model not loaded\n❌ Model not loaded\n"
        );
    }

    #[test]
    fn empty_input_ends_without_outcomes() {
        let analyzer = Analyzer::new(ModelSlot::load(&example_model()));
        let mut out = Vec::new();
        let outcomes =
            run_session(&analyzer, io::empty(), &mut out, OutputFormat::Text, false).unwrap();
        assert!(outcomes.is_empty());
        assert!(out.is_empty());
    }

    struct BrokenReader;

    impl io::Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn read_error_ends_session() {
        let analyzer = Analyzer::new(ModelSlot::load(&example_model()));
        let mut out = Vec::new();
        let err = run_session(
            &analyzer,
            io::BufReader::new(BrokenReader),
            &mut out,
            OutputFormat::Text,
            false,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("read stdin"));
    }
}
