//! Rendering of command outcomes for both output formats.

use crate::cli::OutputFormat;
use crate::commands::CommandOutput;
use crate::error::CliError;

/// Render an outcome to the string that goes to stdout.
///
/// JSON mode prints the whole envelope; text mode prints the command's
/// report followed by bullet sections for any warnings and errors, so
/// nothing the envelope carries is lost in the human-readable view.
pub fn render(
    outcome: &CommandOutput,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            let rendered = if pretty {
                serde_json::to_string_pretty(&outcome.envelope)?
            } else {
                serde_json::to_string(&outcome.envelope)?
            };
            Ok(rendered)
        }
        OutputFormat::Text => Ok(render_text(outcome)),
    }
}

fn render_text(outcome: &CommandOutput) -> String {
    let mut text = outcome.text.clone();

    if !outcome.envelope.meta.warnings.is_empty() {
        text.push_str("\n\nwarnings:");
        for warning in &outcome.envelope.meta.warnings {
            text.push_str(&format!("\n  - {warning}"));
        }
    }

    if !outcome.envelope.errors.is_empty() {
        text.push_str("\n\nerrors:");
        for error in &outcome.envelope.errors {
            text.push_str(&format!("\n  - [{}] {}", error.code, error.message));
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use sigmatick_core::{Envelope, EnvelopeError, EnvelopeMeta};

    use super::*;

    fn outcome_with(warnings: &[&str], errors: Vec<EnvelopeError>) -> CommandOutput {
        let mut meta = EnvelopeMeta::new("req-test", "local", 5);
        for warning in warnings {
            meta.push_warning(*warning);
        }
        CommandOutput {
            envelope: Envelope::with_errors(meta, json!({"n": 1}), errors),
            text: String::from("report body"),
        }
    }

    #[test]
    fn text_mode_appends_warning_and_error_sections() {
        let outcome = outcome_with(
            &["skipped 2024-01-03: missing field '4. close'"],
            vec![EnvelopeError::new("source.upstream", "Note: rate limited")],
        );

        let rendered = render(&outcome, OutputFormat::Text, false).expect("must render");

        assert!(rendered.starts_with("report body"));
        assert!(rendered.contains("warnings:\n  - skipped 2024-01-03"));
        assert!(rendered.contains("errors:\n  - [source.upstream] Note: rate limited"));
    }

    #[test]
    fn clean_outcome_renders_just_the_report() {
        let outcome = outcome_with(&[], Vec::new());

        let rendered = render(&outcome, OutputFormat::Text, false).expect("must render");

        assert_eq!(rendered, "report body");
    }

    #[test]
    fn json_mode_round_trips_the_envelope() {
        let outcome = outcome_with(&["one warning"], Vec::new());

        let rendered = render(&outcome, OutputFormat::Json, false).expect("must render");
        let parsed: Value = serde_json::from_str(&rendered).expect("must parse");

        assert_eq!(parsed["data"]["n"], 1);
        assert_eq!(parsed["meta"]["source"], "local");
        assert_eq!(parsed["meta"]["warnings"][0], "one warning");
        assert!(parsed.get("errors").is_none());
    }

    #[test]
    fn pretty_json_is_indented() {
        let outcome = outcome_with(&[], Vec::new());

        let rendered = render(&outcome, OutputFormat::Json, true).expect("must render");

        assert!(rendered.contains("\n  \"meta\""));
    }
}
