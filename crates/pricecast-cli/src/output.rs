use std::io::{self, Write};

use pricecast_core::{ChartData, ChartSink};

use crate::cli::OutputFormat;
use crate::commands::{CommandOutput, HistoryReport};
use crate::error::CliError;

pub fn render(output: &CommandOutput, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let value = match output {
                CommandOutput::Chart(chart) => serde_json::to_value(chart)?,
                CommandOutput::History(report) => serde_json::to_value(report)?,
            };
            let payload = if pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => {
            let stdout = io::stdout();
            match output {
                CommandOutput::Chart(chart) => {
                    let mut sink = TerminalChart::new(stdout.lock());
                    sink.render(chart)?;
                }
                CommandOutput::History(report) => {
                    render_history_table(&mut stdout.lock(), report)?;
                }
            }
        }
    }

    Ok(())
}

/// Text sink for projected series: one aligned row per date, then the axis
/// plan. Projected columns print at two decimals; the actual column prints
/// the close exactly as retrieved.
pub struct TerminalChart<W: Write> {
    writer: W,
}

impl<W: Write> TerminalChart<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ChartSink for TerminalChart<W> {
    fn render(&mut self, chart: &ChartData) -> io::Result<()> {
        writeln!(self.writer, "{}", chart.spec.title)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{:<12}{:>12}{:>12}{:>12}{:>12}",
            "date", "actual", "expected", "bull", "bear"
        )?;
        for point in &chart.series.points {
            writeln!(
                self.writer,
                "{:<12}{:>12}{:>12.2}{:>12.2}{:>12.2}",
                point.date.format_ymd(),
                point.actual,
                point.expected,
                point.bull,
                point.bear
            )?;
        }
        writeln!(self.writer)?;

        if !chart.spec.price_ticks.is_empty() {
            let ticks = chart
                .spec
                .price_ticks
                .iter()
                .map(|tick| tick.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(self.writer, "price ticks : {ticks}")?;
        }
        writeln!(
            self.writer,
            "date ticks  : every {} days",
            chart.spec.date_tick_interval_days
        )?;

        Ok(())
    }
}

fn render_history_table(writer: &mut impl Write, report: &HistoryReport) -> io::Result<()> {
    writeln!(
        writer,
        "{} closes {}..{}",
        report.symbol, report.window.start, report.window.end
    )?;
    writeln!(writer)?;
    writeln!(writer, "{:<12}{:>12}", "date", "close")?;
    for point in &report.points {
        writeln!(writer, "{:<12}{:>12}", point.date.format_ymd(), point.close)?;
    }

    Ok(())
}
