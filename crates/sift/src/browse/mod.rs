//! Paginated row browsing.
//!
//! `BrowseState` is the pure pagination machine; `RowBrowser` drives it at the
//! terminal, rendering each page as a table and looping until the operator
//! selects a row or quits.

use crate::dataset::Dataset;
use crate::error::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input};
use std::ops::Range;

/// Page window over `total` rows. A zero-row dataset still has one (empty)
/// page so rendering never divides by zero.
#[derive(Debug, Clone)]
pub struct BrowseState {
    total: usize,
    page_size: usize,
    page: usize,
}

impl BrowseState {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            total,
            page_size: page_size.max(1),
            page: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        ((self.total + self.page_size - 1) / self.page_size).max(1)
    }

    pub fn page_range(&self) -> Range<usize> {
        let start = self.page * self.page_size;
        let end = ((self.page + 1) * self.page_size).min(self.total);
        start..end.max(start)
    }

    /// Advance one page. Returns false (page unchanged) at the last page.
    pub fn next(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page. Returns false (page unchanged) at the first page.
    pub fn previous(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    Quit,
    Select(usize),
}

impl BrowseCommand {
    /// Parse one input line. `None` means invalid input and the caller
    /// re-prompts on the same page.
    pub fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "n" | "next" => Some(BrowseCommand::Next),
            "p" | "prev" | "previous" => Some(BrowseCommand::Previous),
            "q" | "quit" => Some(BrowseCommand::Quit),
            _ => trimmed.parse::<usize>().ok().map(BrowseCommand::Select),
        }
    }
}

/// Display preview of a row: newlines collapsed to spaces, truncated to
/// `preview_chars` characters, with "..." always appended (a display
/// convention, not a truncation indicator).
pub fn preview(text: &str, preview_chars: usize) -> String {
    let mut out: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(preview_chars)
        .collect();
    out.push_str("...");
    out
}

pub struct RowBrowser {
    term: Term,
    theme: ColorfulTheme,
    page_size: usize,
    preview_chars: usize,
}

impl RowBrowser {
    pub fn new(page_size: usize, preview_chars: usize) -> Self {
        Self {
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
            page_size,
            preview_chars,
        }
    }

    /// Browse the dataset until the operator selects a row (returns its full
    /// text) or quits (returns `None`, "selection abandoned").
    pub fn browse(&self, dataset: &Dataset) -> Result<Option<String>> {
        let mut state = BrowseState::new(dataset.len(), self.page_size);

        loop {
            self.render_page(dataset, &state)?;

            let line: String = Input::with_theme(&self.theme)
                .with_prompt("Row index, [n]ext, [p]rev or [q]uit")
                .allow_empty(true)
                .interact_text_on(&self.term)?;

            match BrowseCommand::parse(&line) {
                Some(BrowseCommand::Next) => {
                    if !state.next() {
                        self.term
                            .write_line(&format!("{}", style("Already at the last page.").yellow()))?;
                    }
                }
                Some(BrowseCommand::Previous) => {
                    if !state.previous() {
                        self.term.write_line(&format!(
                            "{}",
                            style("Already at the first page.").yellow()
                        ))?;
                    }
                }
                Some(BrowseCommand::Quit) => return Ok(None),
                Some(BrowseCommand::Select(idx)) => match dataset.text(idx) {
                    Some(text) => {
                        self.term
                            .write_line(&format!("\nRow {} selected:\n{}", idx, text))?;
                        return Ok(Some(text.to_string()));
                    }
                    None => {
                        self.term
                            .write_line(&format!("{}", style("Invalid index, try again.").yellow()))?;
                    }
                },
                None => {
                    self.term.write_line(&format!(
                        "{}",
                        style("Please enter a row index, n, p or q.").yellow()
                    ))?;
                }
            }
        }
    }

    fn render_page(&self, dataset: &Dataset, state: &BrowseState) -> Result<()> {
        self.term.write_line(&format!(
            "\n{} (page {}/{}, {} rows)",
            style("Dataset rows").bold().cyan(),
            state.page() + 1,
            state.page_count(),
            dataset.len()
        ))?;

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Row").fg(Color::Cyan),
            Cell::new("Preview").fg(Color::Cyan),
        ]);

        for idx in state.page_range() {
            let text = dataset.text(idx).unwrap_or("");
            table.add_row(vec![
                Cell::new(idx),
                Cell::new(preview(text, self.preview_chars)),
            ]);
        }

        self.term.write_line(&table.to_string())?;
        Ok(())
    }
}
