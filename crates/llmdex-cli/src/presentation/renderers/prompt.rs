//! Turn-based table UI.
//!
//! Each turn prints the current page, reads one line, and dispatches at
//! most one command. End of input quits.

use std::io::{BufRead, Write};

use llmdex_engine::{Flag, SortMode, TriState, parse_context, parse_cost, parse_tags};
use owo_colors::OwoColorize;

use super::traits::{Frontend, PresentationError};
use crate::presentation::guard::{RenderFeatures, Tier};
use crate::presentation::presenters::{FULL_COLUMNS, full_row, present_detail};
use crate::presentation::views::{DetailView, TableView};
use crate::session::{Command, Dispatch, Movement, SessionController, SortCycle, StatusLevel};

const HELP: &str = "\
Commands:
  /text | s text     fuzzy search (empty clears)
  p <id|any>         provider filter
  t|r|w|temp [y|n|any]  tool / reasoning / open weights / temperature (no value cycles)
  ctx <n>            minimum context (128k, 1m)
  in <usd> | out <usd>  maximum input / output cost per 1M tokens
  mi <tags> | mo <tags>  required input / output modalities (text,image)
  o [name]           cycle sort, or set it (provider, input-cost, context, newest, ...)
  n | b | g <page>   next / previous / go to page
  ps <n>             page size
  <row>              show detail for a row on this page
  c                  copy selected model id
  x                  clear search and filters
  h | ?              toggle this help
  q                  quit";

/// What one line of input asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptInput {
    Run(Command),
    /// Run the command, then tell the user their value was not understood.
    Cleared(Command, String),
    /// 1-based row on the current page.
    Row(usize),
    Help,
    Blank,
    Unknown(String),
}

pub fn parse_line(line: &str) -> PromptInput {
    let line = line.trim();
    if line.is_empty() {
        return PromptInput::Blank;
    }
    if let Some(term) = line.strip_prefix('/') {
        return PromptInput::Run(Command::Search(term.trim().to_string()));
    }

    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "s" => PromptInput::Run(Command::Search(arg.to_string())),
        "p" => {
            let provider = (!arg.is_empty() && !arg.eq_ignore_ascii_case("any"))
                .then(|| arg.to_ascii_lowercase());
            PromptInput::Run(Command::SetProvider(provider))
        }
        "t" => tri_state(Flag::ToolCall, arg),
        "r" => tri_state(Flag::Reasoning, arg),
        "w" => tri_state(Flag::OpenWeights, arg),
        "temp" => tri_state(Flag::Temperature, arg),
        "ctx" => bound(arg, parse_context, Command::SetMinContext),
        "in" => bound(arg, parse_cost, Command::SetMaxInputCost),
        "out" => bound(arg, parse_cost, Command::SetMaxOutputCost),
        "mi" => PromptInput::Run(Command::SetModalitiesIn(parse_tags(arg))),
        "mo" => PromptInput::Run(Command::SetModalitiesOut(parse_tags(arg))),
        "o" if arg.is_empty() => PromptInput::Run(Command::CycleSort(SortCycle::Extended)),
        "o" => match arg.parse::<SortMode>() {
            Ok(mode) => PromptInput::Run(Command::SetSort(mode)),
            Err(e) => PromptInput::Unknown(e),
        },
        "n" | "next" => PromptInput::Run(Command::NextPage),
        "b" | "prev" => PromptInput::Run(Command::PrevPage),
        "g" => match arg.parse::<usize>() {
            Ok(page) if page >= 1 => PromptInput::Run(Command::GotoPage(page - 1)),
            _ => PromptInput::Unknown(format!("not a page number: '{}'", arg)),
        },
        "ps" => match arg.parse::<usize>() {
            Ok(size) if size >= 1 => PromptInput::Run(Command::SetPageSize(size)),
            _ => PromptInput::Unknown(format!("page size must be a positive number, got '{}'", arg)),
        },
        "c" => PromptInput::Run(Command::Copy),
        "x" => PromptInput::Run(Command::ClearFilters),
        "h" | "?" | "help" => PromptInput::Help,
        "q" | "quit" | "exit" => PromptInput::Run(Command::Quit),
        _ => match line.parse::<usize>() {
            Ok(row) if row >= 1 => PromptInput::Row(row),
            _ => PromptInput::Unknown(format!("unknown command '{}' (h for help)", line)),
        },
    }
}

fn tri_state(flag: Flag, arg: &str) -> PromptInput {
    if arg.is_empty() {
        return PromptInput::Run(Command::CycleFlag(flag));
    }
    match TriState::parse(arg) {
        Some(state) => PromptInput::Run(Command::SetFlag(flag, state)),
        None => PromptInput::Cleared(
            Command::SetFlag(flag, TriState::Any),
            format!("'{}' is not y, n or any; filter cleared", arg),
        ),
    }
}

fn bound<T>(arg: &str, parse: fn(&str) -> Option<T>, command: fn(Option<T>) -> Command) -> PromptInput {
    if arg.is_empty() {
        return PromptInput::Run(command(None));
    }
    match parse(arg) {
        Some(value) => PromptInput::Run(command(Some(value))),
        None => PromptInput::Cleared(
            command(None),
            format!("'{}' is not a number; filter cleared", arg),
        ),
    }
}

pub struct PromptLoop<R: BufRead, W: Write> {
    input: R,
    output: W,
    features: RenderFeatures,
    show_detail: bool,
    notice: Option<String>,
}

impl<R: BufRead, W: Write> PromptLoop<R, W> {
    pub fn new(input: R, output: W, features: RenderFeatures) -> Self {
        Self {
            input,
            output,
            features,
            show_detail: false,
            notice: None,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn render(&mut self, session: &SessionController) -> std::io::Result<()> {
        let color = self.features.color;
        let query = session.query();
        let view = session.view();

        let mut summary = format!(
            "{} models | page {}/{} | sort: {}",
            view.len(),
            query.page_index + 1,
            session.page_count(),
            query.sort
        );
        if !query.search.is_empty() {
            summary.push_str(&format!(" | search: {}", query.search));
        }
        let filters = query.filters.summary();
        if !filters.is_empty() {
            summary.push_str(&format!(" | {}", filters));
        }
        if view.is_truncated() {
            summary.push_str(&format!(" | {} matched, capped", view.matched()));
        }

        writeln!(self.output)?;
        if color {
            writeln!(self.output, "{}", summary.bold())?;
        } else {
            writeln!(self.output, "{}", summary)?;
        }

        let page = session.page();
        if page.is_empty() {
            writeln!(self.output, "No models match the current filters.")?;
        } else {
            let selected = session.selected();
            let rows: Vec<Vec<String>> = page
                .iter()
                .enumerate()
                .map(|(i, (position, entry))| {
                    let marker = if Some(*position) == selected { "*" } else { " " };
                    let mut row = vec![format!("{}{}", marker, i + 1)];
                    row.extend(full_row(entry));
                    row
                })
                .collect();
            let mut headers = vec!["#"];
            headers.extend(FULL_COLUMNS);
            write!(self.output, "{}", TableView::new(headers, &rows).color(color))?;
        }

        if self.show_detail {
            self.show_detail = false;
            if let Some(entry) = session.selected_entry() {
                writeln!(self.output)?;
                write!(self.output, "{}", DetailView::new(&present_detail(entry), color))?;
            }
        }

        if session.show_help() {
            writeln!(self.output, "{}", HELP)?;
        }
        if let Some(status) = session.status() {
            match (status.level, color) {
                (StatusLevel::Warning, true) => writeln!(self.output, "{}", status.text.yellow())?,
                (StatusLevel::Info, true) => writeln!(self.output, "{}", status.text.green())?,
                _ => writeln!(self.output, "{}", status.text)?,
            }
        }
        if let Some(notice) = self.notice.take() {
            writeln!(self.output, "{}", notice)?;
        }
        Ok(())
    }

    fn handle(&mut self, input: PromptInput, session: &mut SessionController) -> Dispatch {
        match input {
            PromptInput::Run(command) => session.dispatch(command),
            PromptInput::Cleared(command, notice) => {
                self.notice = Some(notice);
                session.dispatch(command)
            }
            PromptInput::Row(row) => {
                let page = session.page();
                match page.get(row - 1).map(|(position, _)| *position) {
                    Some(position) => {
                        self.show_detail = true;
                        session.dispatch(Command::Select(Movement::To(position)))
                    }
                    None => {
                        self.notice = Some(format!("no row {} on this page", row));
                        Dispatch::Continue
                    }
                }
            }
            PromptInput::Help => session.dispatch(Command::ToggleHelp),
            PromptInput::Blank => Dispatch::Continue,
            PromptInput::Unknown(message) => {
                self.notice = Some(message);
                Dispatch::Continue
            }
        }
    }
}

impl<R: BufRead, W: Write> Frontend for PromptLoop<R, W> {
    fn tier(&self) -> Tier {
        Tier::Prompt
    }

    fn run(&mut self, session: &mut SessionController) -> Result<(), PresentationError> {
        while !session.is_terminated() {
            self.render(session)?;
            write!(self.output, "llmdex> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                session.dispatch(Command::Quit);
                break;
            }

            if self.handle(parse_line(&line), session) == Dispatch::Quit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use llmdex_engine::{CatalogueStore, Direction, QueryState, SortKey};
    use llmdex_testing::fixtures::sample_entries;
    use std::io::Cursor;

    fn session() -> SessionController {
        SessionController::new(
            CatalogueStore::new(sample_entries()),
            QueryState::default().with_page_size(2),
            Box::new(MemoryClipboard::default()),
        )
    }

    fn run_script(script: &str, session: &mut SessionController) -> String {
        let mut prompt = PromptLoop::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            RenderFeatures::text(false),
        );
        prompt.run(session).unwrap();
        String::from_utf8(prompt.into_output()).unwrap()
    }

    #[test]
    fn test_parse_search_forms() {
        assert_eq!(
            parse_line("/claude"),
            PromptInput::Run(Command::Search("claude".to_string()))
        );
        assert_eq!(
            parse_line("s  gpt 4o "),
            PromptInput::Run(Command::Search("gpt 4o".to_string()))
        );
        assert_eq!(parse_line("s"), PromptInput::Run(Command::Search(String::new())));
    }

    #[test]
    fn test_parse_filters() {
        assert_eq!(
            parse_line("p Anthropic"),
            PromptInput::Run(Command::SetProvider(Some("anthropic".to_string())))
        );
        assert_eq!(parse_line("p any"), PromptInput::Run(Command::SetProvider(None)));
        assert_eq!(parse_line("t"), PromptInput::Run(Command::CycleFlag(Flag::ToolCall)));
        assert_eq!(
            parse_line("r n"),
            PromptInput::Run(Command::SetFlag(Flag::Reasoning, TriState::No))
        );
        assert_eq!(
            parse_line("ctx 128k"),
            PromptInput::Run(Command::SetMinContext(Some(128_000)))
        );
        assert_eq!(
            parse_line("in 2.5"),
            PromptInput::Run(Command::SetMaxInputCost(Some(2.5)))
        );
    }

    #[test]
    fn test_invalid_numbers_clear_the_filter() {
        assert!(matches!(
            parse_line("in cheap"),
            PromptInput::Cleared(Command::SetMaxInputCost(None), _)
        ));
        assert!(matches!(
            parse_line("ctx lots"),
            PromptInput::Cleared(Command::SetMinContext(None), _)
        ));
        assert!(matches!(
            parse_line("w maybe"),
            PromptInput::Cleared(Command::SetFlag(Flag::OpenWeights, TriState::Any), _)
        ));
    }

    #[test]
    fn test_parse_sort_and_paging() {
        assert_eq!(
            parse_line("o"),
            PromptInput::Run(Command::CycleSort(SortCycle::Extended))
        );
        assert_eq!(
            parse_line("o newest"),
            PromptInput::Run(Command::SetSort(SortMode::By(SortKey::Release, Direction::Desc)))
        );
        assert!(matches!(parse_line("o price"), PromptInput::Unknown(_)));
        assert_eq!(parse_line("g 3"), PromptInput::Run(Command::GotoPage(2)));
        assert!(matches!(parse_line("g 0"), PromptInput::Unknown(_)));
        assert!(matches!(parse_line("ps -1"), PromptInput::Unknown(_)));
        assert_eq!(parse_line("2"), PromptInput::Row(2));
        assert_eq!(parse_line("?"), PromptInput::Help);
        assert!(matches!(parse_line("frobnicate"), PromptInput::Unknown(_)));
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut session = session();
        let out = run_script("", &mut session);
        assert!(session.is_terminated());
        assert!(out.contains("llmdex> "));
    }

    #[test]
    fn test_script_drives_the_session() {
        let mut session = session();
        let out = run_script("n\nn\nx\nin abc\n1\nq\nn\n", &mut session);

        assert!(session.is_terminated());
        assert!(out.contains("page 2/"));
        assert!(out.contains("not a number; filter cleared"));
        assert!(out.contains("\nCapabilities\n"));
        assert_eq!(session.query().filters.max_input_cost, None);
    }

    #[test]
    fn test_row_outside_page_is_reported() {
        let mut session = session();
        let out = run_script("9\nq\n", &mut session);
        assert!(out.contains("no row 9 on this page"));
    }

    #[test]
    fn test_copy_reports_status() {
        let mut session = session();
        let out = run_script("c\nq\n", &mut session);
        let first = sample_entries()[0].model_id.clone();
        assert!(out.contains(&format!("copied {}", first)));
    }
}
