use crate::complexity::{ComplexityLevel, Rule, RuleSet, Tone};
use crate::report::EstimateReport;
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    explain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, explain: bool) -> Self {
        Self { writer, explain }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &EstimateReport) -> anyhow::Result<()> {
        for entry in &report.estimates {
            write!(
                self.writer,
                "{:<12} {}",
                badge(entry.estimate.level),
                entry.source
            )?;
            if self.explain {
                let rule = entry.estimate.rule.as_deref().unwrap_or("fallback");
                write!(
                    self.writer,
                    "  {}",
                    format!("[rule: {rule}, loops: {}]", entry.estimate.loop_tokens).dimmed()
                )?;
            }
            writeln!(self.writer)?;
        }

        for skipped in &report.skipped {
            writeln!(
                self.writer,
                "{} {} ({})",
                "skipped".yellow(),
                skipped.source,
                skipped.reason
            )?;
        }

        // A summary table only pays off beyond a single snippet
        if report.estimates.len() > 1 {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", summary_table(report))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn summary_table(report: &EstimateReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Complexity", "Snippets"]);
    for (level, count) in &report.summary {
        table.add_row(vec![Cell::new(level.label()), Cell::new(*count)]);
    }
    table
}

/// Render a label in its badge color
pub fn badge(level: ComplexityLevel) -> ColoredString {
    level.label().color(tone_color(level.tone())).bold()
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Green => Color::Green,
        Tone::Blue => Color::Blue,
        Tone::Yellow => Color::Yellow,
        Tone::Orange => Color::TrueColor {
            r: 255,
            g: 165,
            b: 0,
        },
        Tone::Red => Color::Red,
        Tone::Purple => Color::Magenta,
        Tone::Gray => Color::BrightBlack,
    }
}

/// Print the rule table in evaluation order
pub fn write_rules<W: Write>(writer: &mut W, rules: &RuleSet) -> anyhow::Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Priority", "Rule", "Label", "Condition"]);
    for Rule {
        name,
        priority,
        level,
        condition,
    } in rules.rules()
    {
        table.add_row(vec![
            Cell::new(priority),
            Cell::new(name),
            Cell::new(level.label()),
            Cell::new(condition),
        ]);
    }
    table.add_row(vec![
        Cell::new("-"),
        Cell::new("fallback"),
        Cell::new(ComplexityLevel::Unknown.label()),
        Cell::new("no rule fired"),
    ]);
    writeln!(writer, "{table}")?;
    Ok(())
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    explain: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, explain)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complexity::{Estimate, Profile};
    use crate::report::{SnippetEstimate, SnippetSource};

    /// Accepts every write but fails to flush, like a full disk behind a buffer
    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }
    }

    fn report() -> EstimateReport {
        EstimateReport::new(
            Profile::Canonical,
            vec![SnippetEstimate {
                source: SnippetSource::Inline,
                bytes: 10,
                estimate: Estimate {
                    level: ComplexityLevel::Linear,
                    rule: Some("linear".into()),
                    loop_tokens: 1,
                },
            }],
            Vec::new(),
        )
    }

    #[test]
    fn test_json_writer_emits_labels() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf).write_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["profile"], "canonical");
        assert_eq!(value["estimates"][0]["level"], "O(n)");
        assert_eq!(value["estimates"][0]["source"]["kind"], "inline");
        assert_eq!(value["summary"]["O(n)"], 1);
    }

    #[test]
    fn test_terminal_writer_explains_rule() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf, true)
            .write_report(&report())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("O(n)"));
        assert!(text.contains("<inline>"));
        assert!(text.contains("[rule: linear, loops: 1]"));
    }

    #[test]
    fn test_writers_report_flush_failure() {
        let json = JsonWriter::new(FailingFlush(Vec::new())).write_report(&report());
        assert!(json.is_err());

        let terminal = TerminalWriter::new(FailingFlush(Vec::new()), false).write_report(&report());
        assert!(terminal.unwrap_err().to_string().contains("disk full"));
    }

    #[test]
    fn test_write_rules_lists_fallback_last() {
        let mut buf = Vec::new();
        write_rules(&mut buf, &RuleSet::canonical()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let exponential = text.find("exponential").unwrap();
        let fallback = text.find("fallback").unwrap();
        assert!(exponential < fallback);
        assert!(text.contains("memo-marker"));
    }
}
