//! Interactive browsing over stdin.
//!
//! Each input line is one command. `type` simulates keystrokes: every
//! character becomes its own input event, so a single `type` line is a burst
//! that the session debounces into one search.

use std::io::Write;

use recipe_browser::{Panel, RecipeBrowser, Session, UiEvent};
use recipe_core::{Catalog, RecipeId};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::config::BrowserConfig;
use crate::error::Result;
use crate::render::TextPresenter;

/// Help text for the interactive session.
pub const HELP: &str = "\
Commands:
  filter all|veg|nonveg|favorites   choose a category
  sort default|az|za                choose a sort order
  type TEXT                         type into the search field
  search TEXT                       replace the search field
  clear                             clear the search field
  fav ID                            toggle a favorite
  open ID ingredients|steps         expand or collapse a panel
  help                              show this help
  quit                              leave";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Events to send to the session, in order.
    Events(Vec<UiEvent>),
    /// Print the help text.
    Help,
    /// End the session.
    Quit,
    /// Blank line.
    Empty,
    /// Unparseable input, with a message for the user.
    Invalid(String),
}

/// Turns input lines into events, tracking the search field contents.
#[derive(Debug, Default)]
pub struct LineParser {
    field: String,
}

impl LineParser {
    /// Current contents of the simulated search field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Parse one input line.
    pub fn parse(&mut self, line: &str) -> Line {
        let line = line.trim_start();
        let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let arg = rest.trim();

        match command {
            "" => Line::Empty,
            "help" | "?" => Line::Help,
            "quit" | "exit" | "q" => Line::Quit,
            "filter" => parse_arg(arg, "filter", UiEvent::FilterSelected),
            "sort" => parse_arg(arg, "sort order", UiEvent::SortSelected),
            "type" => {
                let events = rest
                    .chars()
                    .map(|c| {
                        self.field.push(c);
                        UiEvent::TextChanged(self.field.clone())
                    })
                    .collect::<Vec<_>>();
                if events.is_empty() {
                    Line::Invalid("type needs some text".to_string())
                } else {
                    Line::Events(events)
                }
            }
            "search" => {
                self.field = rest.to_string();
                Line::Events(vec![UiEvent::TextChanged(self.field.clone())])
            }
            "clear" => {
                self.field.clear();
                Line::Events(vec![UiEvent::ClearRequested])
            }
            "fav" => parse_arg(arg, "recipe id", UiEvent::FavoriteToggled),
            "open" => parse_open(arg),
            other => Line::Invalid(format!("Unknown command '{other}' (try 'help')")),
        }
    }
}

fn parse_arg<T: std::str::FromStr>(arg: &str, what: &str, event: fn(T) -> UiEvent) -> Line
where
    T::Err: std::fmt::Display,
{
    if arg.is_empty() {
        return Line::Invalid(format!("Missing {what}"));
    }
    match arg.parse() {
        Ok(value) => Line::Events(vec![event(value)]),
        Err(e) => Line::Invalid(e.to_string()),
    }
}

fn parse_open(arg: &str) -> Line {
    let mut words = arg.split_whitespace();
    let (Some(id), Some(panel), None) = (words.next(), words.next(), words.next()) else {
        return Line::Invalid("Usage: open ID ingredients|steps".to_string());
    };
    match (id.parse::<RecipeId>(), panel.parse::<Panel>()) {
        (Ok(id), Ok(panel)) => Line::Events(vec![UiEvent::PanelToggled(id, panel)]),
        (Err(e), _) | (_, Err(e)) => Line::Invalid(e.to_string()),
    }
}

/// Read commands from `input`, forwarding events until `quit` or end of input.
///
/// Help text and parse errors go to `out`.
pub async fn read_commands<R, W>(input: R, events: mpsc::Sender<UiEvent>, mut out: W)
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut parser = LineParser::default();
    let mut lines = input.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                log::warn!("Failed to read input: {e}");
                break;
            }
        };

        let reply = match parser.parse(&line) {
            Line::Events(batch) => {
                for event in batch {
                    if events.send(event).await.is_err() {
                        return;
                    }
                }
                continue;
            }
            Line::Empty => continue,
            Line::Quit => break,
            Line::Help => HELP.to_string(),
            Line::Invalid(message) => format!("! {message}"),
        };
        if let Err(e) = writeln!(out, "{reply}") {
            log::warn!("Failed to write output: {e}");
        }
    }
    log::debug!("Input closed, ending session");
}

/// `browse`: run an interactive session on stdin and stdout.
pub async fn run_browse(config: &BrowserConfig, catalog: &Catalog) -> Result<()> {
    let favorites = config.open_favorites()?;
    let presenter = TextPresenter::new(std::io::stdout());
    let browser =
        RecipeBrowser::new(catalog, favorites, presenter).with_query(config.initial_query());
    let mut session = Session::new(browser, config.quiet_period());

    println!("{HELP}\n");

    let (tx, rx) = mpsc::channel(64);
    let reader = tokio::io::BufReader::new(tokio::io::stdin());
    tokio::join!(
        session.run(rx),
        read_commands(reader, tx, std::io::stdout())
    );
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
