use colored::*;
use std::io::{self, Write};

use crate::core::telemetry::{PresentationSink, Report};
use crate::error::Result;

/// Writes the report section by section, each followed by a blank line
pub struct ConsoleSink<W: Write> {
    writer: W,
    color: bool,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self { writer, color }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn banner(&self, title: &str) -> String {
        if self.color {
            title.bold().bright_cyan().to_string()
        } else {
            title.to_string()
        }
    }

    fn heading(&self, title: &str, failed: bool) -> String {
        match (self.color, failed) {
            (false, _) => title.to_string(),
            (true, false) => title.bold().green().to_string(),
            (true, true) => title.bold().red().to_string(),
        }
    }
}

impl<W: Write> PresentationSink for ConsoleSink<W> {
    fn present(&mut self, report: &Report) -> Result<()> {
        let banner = report.variant.banner();
        writeln!(self.writer, "{}", self.banner(banner))?;
        writeln!(self.writer, "{}", "=".repeat(banner.len()))?;
        writeln!(
            self.writer,
            "Collected at: {}",
            report.collected_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(self.writer)?;

        for block in &report.sections {
            writeln!(self.writer, "{}", self.heading(block.title, block.is_failed()))?;
            writeln!(self.writer, "{}", "-".repeat(block.title.len()))?;
            write!(self.writer, "{}", block.text)?;
            writeln!(self.writer)?;
        }

        self.writer.flush()?;
        Ok(())
    }
}

/// Emits the report, structured records included, as pretty-printed JSON
pub struct JsonSink<W: Write> {
    writer: W,
}

impl JsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PresentationSink for JsonSink<W> {
    fn present(&mut self, report: &Report) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
