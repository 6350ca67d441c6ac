use std::io::{self, Write};

use is_terminal::IsTerminal;
use llmdex_types::CatalogueEntry;
use owo_colors::OwoColorize;

use super::traits::{Frontend, PresentationError};
use crate::presentation::guard::{RenderFeatures, Tier};
use crate::presentation::presenters::{FULL_COLUMNS, compact_line, full_row};
use crate::presentation::views::TableView;
use crate::session::SessionController;

/// Rows printed by the static listing before it gives up.
pub const STATIC_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Compact,
    Table,
}

/// One-shot writer for the non-interactive outputs.
pub struct ConsoleRenderer {
    color: bool,
    width: Option<usize>,
}

impl ConsoleRenderer {
    pub fn new(color: bool, width: Option<usize>) -> Self {
        Self { color, width }
    }

    /// Colour and clipping only when stdout is a terminal.
    pub fn detect() -> Self {
        if !io::stdout().is_terminal() {
            return Self::new(false, None);
        }
        let width = terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize);
        Self::new(true, width)
    }

    pub fn render<W: Write>(
        &self,
        out: &mut W,
        format: OutputFormat,
        entries: &[&CatalogueEntry],
    ) -> io::Result<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, entries)?;
                writeln!(out)
            }
            OutputFormat::Compact => {
                for entry in entries {
                    writeln!(out, "{}", compact_line(entry))?;
                }
                Ok(())
            }
            OutputFormat::Table => self.table(out, entries),
        }
    }

    pub fn table<W: Write>(&self, out: &mut W, entries: &[&CatalogueEntry]) -> io::Result<()> {
        if entries.is_empty() {
            return writeln!(out, "No models match the current filters.");
        }
        let rows: Vec<Vec<String>> = entries.iter().map(|e| full_row(e)).collect();
        let view = TableView::new(FULL_COLUMNS.to_vec(), &rows)
            .color(self.color)
            .max_width(self.width);
        write!(out, "{}", view)
    }
}

/// Last tier: print a bounded slice of the current view and end the session.
pub struct StaticListing<W: Write> {
    out: W,
    features: RenderFeatures,
}

impl<W: Write> StaticListing<W> {
    pub fn new(out: W, features: RenderFeatures) -> Self {
        Self { out, features }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, session: &SessionController) -> io::Result<()> {
        let view = session.view();
        let shown: Vec<&CatalogueEntry> = session.rows().take(STATIC_LIMIT).collect();

        let width = if self.features.color {
            terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
        } else {
            None
        };
        ConsoleRenderer::new(self.features.color, width).table(&mut self.out, &shown)?;

        if !shown.is_empty() {
            let trailer = format!("showing {} of {} models", shown.len(), view.matched());
            if self.features.color {
                writeln!(self.out, "{}", trailer.dimmed())?;
            } else {
                writeln!(self.out, "{}", trailer)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Frontend for StaticListing<W> {
    fn tier(&self) -> Tier {
        Tier::Static
    }

    fn run(&mut self, session: &mut SessionController) -> Result<(), PresentationError> {
        self.write(session)?;
        session.terminate();
        Ok(())
    }
}
