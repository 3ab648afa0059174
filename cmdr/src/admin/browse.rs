/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! `mc-admin registrants browse`: an interactive loop over one
//! [`RegistrantListController`].
//!
//! Each typed line is split into words ([`tokenize`]) and parsed by [`BrowseCli`], a clap
//! `multicall` command table. The result is a [`BrowseStep`]: either an engine
//! [`Action`] (pure state change, no IO) or a side effect that goes through the
//! controller (delete, export, reload).
//!
//! ```text
//! inscricoes> filter curso "ciencia da comp"
//! inscricoes> page-size 25
//! inscricoes> next
//! inscricoes> delete 42
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use minicurso_list_engine::{Action, FilterField, PageSize, RegistrantListController,
                            RegistrantSource};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use super::{AdminContext, registrant_command, ui_str};
use crate::common::prompt;
use crate::{MinicursoError, Toast, prompt_seg_normal, render::{ViewMode,
                                                              render_registrant_view}};

#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct BrowseCli {
    #[command(subcommand)]
    pub command: BrowseCommand,
}

#[derive(Debug, Subcommand)]
pub enum BrowseCommand {
    #[clap(about = "Filter one column, without a value the filter is cleared")]
    Filter { column: FilterColumn, value: Option<String> },
    #[clap(about = "Clear every filter")]
    Clear,
    #[clap(about = "Rows per page: 10, 25, 50 or 100")]
    PageSize { size: PageSize },
    #[clap(about = "First page")]
    First,
    #[clap(about = "Previous page", visible_alias = "p")]
    Prev,
    #[clap(about = "Next page", visible_alias = "n")]
    Next,
    #[clap(about = "Last page")]
    Last,
    #[clap(about = "Go to a page")]
    Page { number: usize },
    #[clap(about = "Delete a registration")]
    Delete {
        id: i64,
        #[arg(long, short = 'y', help = "Don't ask for confirmation")]
        yes: bool,
    },
    #[clap(about = "Download the spreadsheet")]
    Export {
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    #[clap(about = "Fetch the list again (clears the filters)")]
    Reload,
    #[clap(about = "Switch between table and cards")]
    View { mode: ViewMode },
    #[clap(about = "Leave", visible_aliases = ["exit", "q"])]
    Quit,
}

/// The filterable columns, as typed in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterColumn {
    #[value(name = "nome", alias = "name")]
    Name,
    #[value(name = "email")]
    Email,
    #[value(name = "curso", alias = "course")]
    Course,
    #[value(name = "nivel", alias = "level")]
    Level,
}

impl From<FilterColumn> for FilterField {
    fn from(column: FilterColumn) -> Self {
        match column {
            FilterColumn::Name => FilterField::Name,
            FilterColumn::Email => FilterField::Email,
            FilterColumn::Course => FilterField::Course,
            FilterColumn::Level => FilterField::Level,
        }
    }
}

/// What one typed command asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseStep {
    Engine(Action),
    Delete { id: i64, confirmed: bool },
    Export { output: Option<PathBuf> },
    Reload,
    SwitchView(ViewMode),
    Quit,
}

impl From<BrowseCommand> for BrowseStep {
    fn from(command: BrowseCommand) -> Self {
        match command {
            BrowseCommand::Filter { column, value } => BrowseStep::Engine(Action::SetFilter(
                column.into(),
                value.unwrap_or_default(),
            )),
            BrowseCommand::Clear => BrowseStep::Engine(Action::ClearFilters),
            BrowseCommand::PageSize { size } => BrowseStep::Engine(Action::SetPageSize(size)),
            BrowseCommand::First => BrowseStep::Engine(Action::FirstPage),
            BrowseCommand::Prev => BrowseStep::Engine(Action::PrevPage),
            BrowseCommand::Next => BrowseStep::Engine(Action::NextPage),
            BrowseCommand::Last => BrowseStep::Engine(Action::LastPage),
            BrowseCommand::Page { number } => BrowseStep::Engine(Action::GoToPage(number)),
            BrowseCommand::Delete { id, yes } => BrowseStep::Delete { id, confirmed: yes },
            BrowseCommand::Export { output } => BrowseStep::Export { output },
            BrowseCommand::Reload => BrowseStep::Reload,
            BrowseCommand::View { mode } => BrowseStep::SwitchView(mode),
            BrowseCommand::Quit => BrowseStep::Quit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    #[error("unterminated quote {quote}")]
    UnterminatedQuote { quote: char },
}

/// Splits on whitespace. Single or double quotes group words, a backslash escapes the
/// next character.
///
/// # Errors
///
/// An unterminated quote.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut acc = vec![];
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match (quote, ch) {
            (_, '\\') => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
                in_token = true;
            }
            (Some(open), ch) if ch == open => quote = None,
            (Some(_), ch) => current.push(ch),
            (None, '"' | '\'') => {
                quote = Some(ch);
                in_token = true;
            }
            (None, ch) if ch.is_whitespace() => {
                if in_token {
                    acc.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            (None, ch) => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if let Some(quote) = quote {
        return Err(TokenizeError::UnterminatedQuote { quote });
    }
    if in_token {
        acc.push(current);
    }
    Ok(acc)
}

/// `Ok(None)` for a blank line. `Err` carries the text to show (a parse error or the
/// help).
///
/// # Errors
///
/// Anything clap or the tokenizer refuses, already rendered.
pub fn parse_step(line: &str) -> Result<Option<BrowseStep>, String> {
    let words = tokenize(line).map_err(|error| error.to_string())?;
    if words.is_empty() {
        return Ok(None);
    }
    BrowseCli::try_parse_from(words)
        .map(|cli| Some(cli.command.into()))
        .map_err(|error| error.render().to_string())
}

type StdinLines = Lines<BufReader<Stdin>>;

async fn read_next_line(lines: &mut StdinLines) -> Result<Option<String>, MinicursoError> {
    lines
        .next_line()
        .await
        .map_err(|source| MinicursoError::Io {
            action: "read from",
            path: PathBuf::from("<stdin>"),
            source,
        })
}

/// # Errors
///
/// The first load failing, an expired session, or a terminal error. Other API failures
/// are shown and the loop goes on.
pub async fn try_browse<S: RegistrantSource>(
    context: &AdminContext,
    controller: &mut RegistrantListController<S>,
    initial_view: ViewMode,
) -> Result<(), MinicursoError> {
    let mut view = initial_view;
    controller
        .reload()
        .await
        .map_err(|error| context.report_failure(ui_str::registrant::LOAD_FAILED, error))?;

    eprintln!("{}", ui_str::browse_banner_msg());
    println!("{}", render_registrant_view(controller.state(), view));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("{}", prompt_seg_normal(ui_str::browse::PROMPT));
        let Some(line) = read_next_line(&mut lines).await? else {
            break;
        };

        let step = match parse_step(&line) {
            Ok(Some(step)) => step,
            Ok(None) => continue,
            Err(text) => {
                eprintln!("{text}");
                continue;
            }
        };
        // % is Display, ? is Debug.
        tracing::debug!(message = "browse step", step = ?step);

        match step {
            BrowseStep::Quit => break,
            BrowseStep::Engine(action) => controller.dispatch(action),
            BrowseStep::SwitchView(mode) => view = mode,
            BrowseStep::Reload => {
                if let Err(error) = controller.reload().await {
                    let error = context.report_failure(ui_str::registrant::LOAD_FAILED, error);
                    if error.is_session_expired() {
                        return Err(error);
                    }
                }
            }
            BrowseStep::Delete { id, confirmed } => {
                if !confirmed {
                    eprint!(
                        "{}",
                        ui_str::confirm_prompt_msg(
                            ui_str::registrant::CONFIRM_TITLE,
                            ui_str::registrant::CONFIRM_TEXT,
                        )
                    );
                    let answer = read_next_line(&mut lines).await?;
                    if !answer.is_some_and(|it| prompt::is_yes(&it)) {
                        continue;
                    }
                }
                match registrant_command::try_delete(context, controller, id).await {
                    Ok(()) => {}
                    Err(error) if error.is_session_expired() => return Err(error),
                    Err(_) => continue,
                }
            }
            BrowseStep::Export { output } => {
                if let Err(error) =
                    registrant_command::try_export(context, controller, output, false).await
                    && error.is_session_expired()
                {
                    return Err(error);
                }
                continue;
            }
        }

        println!("{}", render_registrant_view(controller.state(), view));
    }

    Toast::info(ui_str::browse::BYE).show();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() { BrowseCli::command().debug_assert(); }

    #[test_case("next", &["next"])]
    #[test_case("  filter   nome  ana ", &["filter", "nome", "ana"])]
    #[test_case(r#"filter curso "ciencia da comp""#, &["filter", "curso", "ciencia da comp"])]
    #[test_case("filter nome 'd\\'avila'", &["filter", "nome", "d'avila"])]
    #[test_case(r#"filter nome """#, &["filter", "nome", ""])]
    #[test_case("", &[])]
    fn test_tokenize(line: &str, expected: &[&str]) {
        assert_eq!(tokenize(line).unwrap(), expected);
    }

    #[test]
    fn test_tokenize_unterminated() {
        assert_eq!(
            tokenize("filter nome \"ana"),
            Err(TokenizeError::UnterminatedQuote { quote: '"' })
        );
    }

    #[test_case("filter nome Ana", BrowseStep::Engine(Action::SetFilter(FilterField::Name, "Ana".into())))]
    #[test_case("filter level", BrowseStep::Engine(Action::SetFilter(FilterField::Level, String::new())))]
    #[test_case("clear", BrowseStep::Engine(Action::ClearFilters))]
    #[test_case("n", BrowseStep::Engine(Action::NextPage))]
    #[test_case("page 4", BrowseStep::Engine(Action::GoToPage(4)))]
    #[test_case("delete 7 -y", BrowseStep::Delete { id: 7, confirmed: true })]
    #[test_case("export", BrowseStep::Export { output: None })]
    #[test_case("view cards", BrowseStep::SwitchView(ViewMode::Cards))]
    #[test_case("exit", BrowseStep::Quit)]
    fn test_parse_step(line: &str, expected: BrowseStep) {
        assert_eq!(parse_step(line), Ok(Some(expected)));
    }

    #[test]
    fn test_parse_page_size() {
        assert_eq!(
            parse_step("page-size 50"),
            Ok(Some(BrowseStep::Engine(Action::SetPageSize(
                PageSize::try_from(50).unwrap()
            ))))
        );
        assert!(parse_step("page-size 30").is_err());
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(parse_step("   "), Ok(None));
        assert!(parse_step("dance").is_err());
        assert!(parse_step("help").is_err());
    }
}
