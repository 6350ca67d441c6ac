use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::presenters::EntryDetail;

pub struct DetailView<'a> {
    detail: &'a EntryDetail,
    color: bool,
}

impl<'a> DetailView<'a> {
    pub fn new(detail: &'a EntryDetail, color: bool) -> Self {
        Self { detail, color }
    }
}

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.color {
            writeln!(f, "{} ({})", self.detail.heading.bold(), self.detail.id.cyan())?;
        } else {
            writeln!(f, "{} ({})", self.detail.heading, self.detail.id)?;
        }

        for section in &self.detail.sections {
            writeln!(f)?;
            if self.color {
                writeln!(f, "{}", section.title.yellow())?;
            } else {
                writeln!(f, "{}", section.title)?;
            }
            for (label, value) in &section.fields {
                writeln!(f, "  {:<14} {}", label, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_detail;
    use llmdex_testing::fixtures::sample_entry;

    #[test]
    fn test_plain_detail_lists_sections() {
        let detail = present_detail(&sample_entry("acme", "rocket"));
        let out = DetailView::new(&detail, false).to_string();
        assert!(out.contains("(rocket)"));
        assert!(out.contains("\nCosts\n"));
        assert!(out.contains("  Tool calling   "));
    }
}
