// CaseDesk - app/commands.rs
//
// Line-oriented command language for the interactive case-list session.
// Parsing is pure; `execute` applies a command to the case-list state and
// reports what the front-end should print next.

use crate::app::state::{ApplyMode, CaseListState};
use crate::core::filter::FilterField;
use crate::util::constants;
use crate::util::error::CommandError;

/// A parsed interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search string (empty clears it).
    Search(String),
    /// Stage a filter value.
    Set { field: FilterField, value: String },
    /// Stage an empty value for a filter field.
    Unset(FilterField),
    /// Commit staged filters.
    Apply,
    /// Clear staged and applied filters.
    Clear,
    /// Clear search and filters.
    Reset,
    /// Expand or collapse a record.
    Toggle(u64),
    /// Print the visible list.
    Show,
    /// Print staged vs applied filters.
    Staged,
    /// Print the dashboard summary of the visible list.
    Summary,
    Help,
    Quit,
}

/// What the front-end should render after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The visible set may have changed; print the list.
    List,
    /// Only staged values changed; print the filter panel.
    Filters,
    Summary,
    Help,
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  search [text]          set the search string (empty clears it)
  set <field> <value>    stage a filter (fields: type, status, from, to)
  unset <field>          stage an empty filter value
  apply                  apply staged filters
  clear                  clear all filters
  reset                  clear search and filters
  toggle <id>            expand or collapse a case
  show                   print the case list
  staged                 print staged and applied filters
  summary                print status/type counts and upcoming deadlines
  help                   print this help
  quit                   leave the session";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    if line.len() > constants::MAX_COMMAND_LENGTH {
        return Err(CommandError::TooLong {
            length: line.len(),
            max: constants::MAX_COMMAND_LENGTH,
        });
    }

    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "set",
                    argument: "field",
                });
            }
            let field = parse_field(field)?;
            if value.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "set",
                    argument: "value",
                });
            }
            Command::Set {
                field,
                value: value.to_string(),
            }
        }
        "unset" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "unset",
                    argument: "field",
                });
            }
            Command::Unset(parse_field(rest)?)
        }
        "apply" => Command::Apply,
        "clear" => Command::Clear,
        "reset" => Command::Reset,
        "toggle" | "t" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "toggle",
                    argument: "id",
                });
            }
            let id = rest.parse::<u64>().map_err(|_| CommandError::InvalidId {
                raw: rest.to_string(),
            })?;
            Command::Toggle(id)
        }
        "show" | "ls" => Command::Show,
        "staged" | "filters" => Command::Staged,
        "summary" => Command::Summary,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(CommandError::UnknownCommand {
                name: other.to_string(),
            })
        }
    };

    Ok(Some(command))
}

fn parse_field(name: &str) -> Result<FilterField, CommandError> {
    FilterField::from_name(name).ok_or_else(|| CommandError::UnknownField {
        name: name.to_string(),
    })
}

/// Apply `command` to `state`.
pub fn execute(state: &mut CaseListState, command: Command) -> Effect {
    match command {
        Command::Search(query) => {
            state.set_search(query);
            Effect::List
        }
        Command::Set { field, value } => {
            state.set_staged_field(field, value);
            staged_effect(state)
        }
        Command::Unset(field) => {
            state.set_staged_field(field, "");
            staged_effect(state)
        }
        Command::Apply => {
            state.apply_filters();
            Effect::List
        }
        Command::Clear => {
            state.clear_filters();
            Effect::List
        }
        Command::Reset => {
            state.reset_all();
            Effect::List
        }
        Command::Toggle(id) => {
            state.toggle_selection(id);
            Effect::List
        }
        Command::Show => Effect::List,
        Command::Staged => Effect::Filters,
        Command::Summary => Effect::Summary,
        Command::Help => Effect::Help,
        Command::Quit => Effect::Quit,
    }
}

/// Staged edits only change the list when auto-apply is on.
fn staged_effect(state: &CaseListState) -> Effect {
    match state.apply_mode() {
        ApplyMode::Auto => Effect::List,
        ApplyMode::Staged => Effect::Filters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::CaseStore;

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_set_keeps_inner_spaces() {
        assert_eq!(
            parse("set status Under Review"),
            Ok(Some(Command::Set {
                field: FilterField::Status,
                value: "Under Review".to_string(),
            }))
        );
    }

    #[test]
    fn test_parse_search_without_text_clears() {
        assert_eq!(parse("search"), Ok(Some(Command::Search(String::new()))));
        assert_eq!(
            parse("SEARCH  Smith Corp "),
            Ok(Some(Command::Search("Smith Corp".to_string())))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse("frobnicate"), Err(CommandError::UnknownCommand { .. })));
        assert!(matches!(parse("set colour red"), Err(CommandError::UnknownField { .. })));
        assert!(matches!(
            parse("set type"),
            Err(CommandError::MissingArgument { argument: "value", .. })
        ));
        assert!(matches!(parse("toggle abc"), Err(CommandError::InvalidId { .. })));
        assert!(matches!(parse("toggle"), Err(CommandError::MissingArgument { .. })));

        let long = "search ".to_string() + &"x".repeat(constants::MAX_COMMAND_LENGTH);
        assert!(matches!(parse(&long), Err(CommandError::TooLong { .. })));
    }

    #[test]
    fn test_execute_staged_then_apply() {
        let mut state = CaseListState::new(CaseStore::sample(), ApplyMode::Staged);
        let set = parse("set type Copyright").unwrap().unwrap();
        assert_eq!(execute(&mut state, set), Effect::Filters);
        assert_eq!(state.visible().len(), 5);

        assert_eq!(execute(&mut state, Command::Apply), Effect::List);
        let ids: Vec<u64> = state.visible().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3]);

        execute(&mut state, Command::Unset(FilterField::ApplicationType));
        execute(&mut state, Command::Apply);
        assert_eq!(state.visible().len(), 5);
    }

    #[test]
    fn test_execute_in_auto_mode_lists() {
        let mut state = CaseListState::new(CaseStore::sample(), ApplyMode::Auto);
        let set = parse("set status pending").unwrap().unwrap();
        assert_eq!(execute(&mut state, set), Effect::List);
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn test_execute_toggle_and_quit() {
        let mut state = CaseListState::new(CaseStore::sample(), ApplyMode::Staged);
        execute(&mut state, Command::Toggle(4));
        assert_eq!(state.selected_id(), Some(4));
        assert_eq!(execute(&mut state, Command::Quit), Effect::Quit);
    }
}
