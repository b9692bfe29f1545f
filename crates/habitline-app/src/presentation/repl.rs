use std::io::Write;

use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::application::commands::habit_commands::{AddHabitCommand, CompleteHabitCommand};
use crate::application::commands::reminder_commands::AddReminderCommand;
use crate::application::commands::CommandHandler;
use crate::application::dtos::{HabitDto, ReminderDto};
use crate::presentation::render;
use crate::presentation::state::AppState;
use habitline_domain::habit::Difficulty;
use habitline_domain::shared::{DomainError, ErrorSeverity};

#[derive(Debug, PartialEq)]
enum ReplCommand {
    Add { name: String, difficulty: Difficulty },
    Done { name: String },
    List,
    Stats { name: Option<String> },
    Chart { name: Option<String> },
    Remind { habit: String, time: String },
    Reminders,
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` for a blank line, `Err` carries the
/// usage message to print.
///
/// Habit names may contain spaces; where a command takes a trailing
/// difficulty or time, the last token is split off first.
fn parse_command(line: &str) -> Result<Option<ReplCommand>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let keyword = keyword.to_ascii_lowercase();
    let tokens: Vec<&str> = rest.split_whitespace().collect();

    match keyword.as_str() {
        "add" => {
            if tokens.is_empty() {
                return Err("Usage: add <name> [easy|medium|hard]".to_string());
            }
            // A lone token is always the name, even if it reads like a level
            match tokens.last().and_then(|last| Difficulty::parse(last)) {
                Some(difficulty) if tokens.len() >= 2 => Ok(Some(ReplCommand::Add {
                    name: tokens[..tokens.len() - 1].join(" "),
                    difficulty,
                })),
                _ => Ok(Some(ReplCommand::Add {
                    name: tokens.join(" "),
                    difficulty: Difficulty::default(),
                })),
            }
        }
        "done" => {
            if tokens.is_empty() {
                return Err("Usage: done <name>".to_string());
            }
            Ok(Some(ReplCommand::Done {
                name: tokens.join(" "),
            }))
        }
        "remind" => {
            if tokens.len() < 2 {
                return Err("Usage: remind <name> <HH:MM>".to_string());
            }
            Ok(Some(ReplCommand::Remind {
                habit: tokens[..tokens.len() - 1].join(" "),
                time: tokens[tokens.len() - 1].to_string(),
            }))
        }
        "list" => Ok(Some(ReplCommand::List)),
        "stats" => Ok(Some(ReplCommand::Stats {
            name: (!tokens.is_empty()).then(|| tokens.join(" ")),
        })),
        "chart" => Ok(Some(ReplCommand::Chart {
            name: (!tokens.is_empty()).then(|| tokens.join(" ")),
        })),
        "reminders" => Ok(Some(ReplCommand::Reminders)),
        "help" => Ok(Some(ReplCommand::Help)),
        "quit" | "exit" => Ok(Some(ReplCommand::Quit)),
        _ => Err(format!(
            "Unknown command '{}'. Type 'help' for usage.",
            keyword
        )),
    }
}

pub async fn run(state: &AppState) -> anyhow::Result<()> {
    println!("Habitline - daily habit tracker");
    render::help();

    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        // EOF (Ctrl+D / closed pipe) exits like `quit`
        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                println!("{}", usage);
                continue;
            }
        };

        if !execute(command, state).await {
            break;
        }
    }

    println!("Bye!");
    Ok(())
}

/// Run one command. Returns false when the loop should exit.
async fn execute(command: ReplCommand, state: &AppState) -> bool {
    match command {
        ReplCommand::Add { name, difficulty } => {
            let result = state
                .command_handlers
                .add_habit
                .handle(AddHabitCommand { name, difficulty })
                .await;
            match result {
                Ok(result) => println!("✅ Habit '{}' added", result.name),
                Err(e) => report_error(&e),
            }
        }
        ReplCommand::Done { name } => {
            let result = state
                .command_handlers
                .complete_habit
                .handle(CompleteHabitCommand { name })
                .await;
            match result {
                Ok(result) => println!(
                    "✅ '{}' completed! Current streak: {}",
                    result.name, result.streak
                ),
                Err(e) => report_error(&e),
            }
        }
        ReplCommand::List => {
            let habits: Vec<HabitDto> = state
                .stores
                .habits
                .list()
                .await
                .iter()
                .map(HabitDto::from)
                .collect();
            render::habit_table(&habits);
        }
        ReplCommand::Stats { name } => {
            let today = Local::now().date_naive();
            match name {
                Some(name) => match state.queries.stats.get_stats(&name, today).await {
                    Ok(stats) => render::stats_blocks(&[stats]),
                    Err(e) => report_error(&e),
                },
                None => {
                    let stats = state.queries.stats.get_all_stats(today).await;
                    render::stats_blocks(&stats);
                }
            }
        }
        ReplCommand::Chart { name } => match name {
            Some(name) => match state.queries.stats.get_timeline(&name).await {
                Ok(timeline) => render::streak_chart(&[timeline]),
                Err(e) => report_error(&e),
            },
            None => {
                let timelines = state.queries.stats.get_all_timelines().await;
                render::streak_chart(&timelines);
            }
        },
        ReplCommand::Remind { habit, time } => {
            let result = state
                .command_handlers
                .add_reminder
                .handle(AddReminderCommand { habit, time })
                .await;
            match result {
                Ok(result) => println!("✅ Reminder set for '{}' at {}", result.habit, result.time),
                Err(e) => report_error(&e),
            }
        }
        ReplCommand::Reminders => {
            let reminders: Vec<ReminderDto> = state
                .stores
                .reminders
                .list()
                .await
                .iter()
                .map(ReminderDto::from)
                .collect();
            render::reminder_table(&reminders);
            render::scheduler_status(state.services.scheduler.is_running().await);
        }
        ReplCommand::Help => render::help(),
        ReplCommand::Quit => return false,
    }
    true
}

fn report_error(err: &DomainError) {
    match err.severity() {
        ErrorSeverity::Info => {
            log::info!("{}", err);
            println!("{}", err);
        }
        ErrorSeverity::Warning => {
            log::warn!("{}", err);
            println!("⚠️  {}", err);
        }
        ErrorSeverity::Error => {
            log::error!("{}", err);
            println!("❌ {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse_command("").unwrap(), None);
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn add_defaults_to_medium() {
        assert_eq!(
            parse_command("add Read").unwrap(),
            Some(ReplCommand::Add {
                name: "Read".to_string(),
                difficulty: Difficulty::Medium,
            })
        );
    }

    #[test]
    fn add_takes_trailing_difficulty() {
        assert_eq!(
            parse_command("add Morning Run hard").unwrap(),
            Some(ReplCommand::Add {
                name: "Morning Run".to_string(),
                difficulty: Difficulty::Hard,
            })
        );
    }

    #[test]
    fn add_single_token_named_like_a_level_is_a_name() {
        assert_eq!(
            parse_command("add easy").unwrap(),
            Some(ReplCommand::Add {
                name: "easy".to_string(),
                difficulty: Difficulty::Medium,
            })
        );
    }

    #[test]
    fn add_without_name_is_usage_error() {
        assert!(parse_command("add").is_err());
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(
            parse_command("ADD Read").unwrap(),
            Some(ReplCommand::Add {
                name: "Read".to_string(),
                difficulty: Difficulty::Medium,
            })
        );
        assert_eq!(parse_command("LIST").unwrap(), Some(ReplCommand::List));
    }

    #[test]
    fn done_joins_multi_word_names() {
        assert_eq!(
            parse_command("done Morning Run").unwrap(),
            Some(ReplCommand::Done {
                name: "Morning Run".to_string(),
            })
        );
    }

    #[test]
    fn done_without_name_is_usage_error() {
        assert!(parse_command("done").is_err());
    }

    #[test]
    fn remind_splits_trailing_time_token() {
        assert_eq!(
            parse_command("remind Morning Run 21:15").unwrap(),
            Some(ReplCommand::Remind {
                habit: "Morning Run".to_string(),
                time: "21:15".to_string(),
            })
        );
    }

    #[test]
    fn remind_without_time_is_usage_error() {
        assert!(parse_command("remind Read").is_err());
        assert!(parse_command("remind").is_err());
    }

    #[test]
    fn bare_commands_parse() {
        assert_eq!(parse_command("list").unwrap(), Some(ReplCommand::List));
        assert_eq!(
            parse_command("stats").unwrap(),
            Some(ReplCommand::Stats { name: None })
        );
        assert_eq!(
            parse_command("chart").unwrap(),
            Some(ReplCommand::Chart { name: None })
        );
        assert_eq!(
            parse_command("reminders").unwrap(),
            Some(ReplCommand::Reminders)
        );
        assert_eq!(parse_command("help").unwrap(), Some(ReplCommand::Help));
    }

    #[test]
    fn stats_and_chart_take_an_optional_name() {
        assert_eq!(
            parse_command("stats Morning Run").unwrap(),
            Some(ReplCommand::Stats {
                name: Some("Morning Run".to_string()),
            })
        );
        assert_eq!(
            parse_command("chart Read").unwrap(),
            Some(ReplCommand::Chart {
                name: Some("Read".to_string()),
            })
        );
    }

    #[test]
    fn quit_and_exit_both_quit() {
        assert_eq!(parse_command("quit").unwrap(), Some(ReplCommand::Quit));
        assert_eq!(parse_command("exit").unwrap(), Some(ReplCommand::Quit));
    }

    #[test]
    fn unknown_keyword_is_an_error() {
        let err = parse_command("bogus").unwrap_err();
        assert!(err.contains("Unknown command"));
    }
}
