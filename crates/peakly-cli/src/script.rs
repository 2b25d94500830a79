use std::sync::OnceLock;

use peakly_core::actions::CollectionAction;
use peakly_core::actions::MapAction;
use peakly_core::actions::PlannerAction;
use peakly_core::actions::SessionAction;
use peakly_core::catalog::ViewMode;
use peakly_core::collection::Ownership;
use peakly_core::filter::FilterTag;
use peakly_core::state::DifficultyTier;
use peakly_core::state::Rarity;
use peakly_core::state::Step;
use regex::Regex;

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""([^"]*)"|(\S+)"#).expect("token pattern is valid"))
}

/// Splits a line on whitespace, keeping double-quoted runs together.
pub fn tokenize(line: &str) -> Vec<String> {
    token_pattern()
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parses one script line. Blank lines, comments and toggles of unknown
/// filter tags produce no action.
pub fn parse_line(line: &str) -> Result<Option<SessionAction>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let tokens = tokenize(line);
    let Some((command, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let action: SessionAction = match command.as_str() {
        "complete" => PlannerAction::CompleteStep(step_arg(args)?).into(),
        "open" => PlannerAction::SetOpenStep(step_arg(args)?).into(),
        "toggle" => PlannerAction::ToggleStep(step_arg(args)?).into(),
        "dates" => match args {
            [start, end] => PlannerAction::SetDates {
                start: start.clone(),
                end: end.clone(),
            }
            .into(),
            _ => return Err("dates expects START END".to_string()),
        },
        "difficulty" => {
            let value = single_arg(command, args)?;
            let tier = DifficultyTier::parse(value)
                .ok_or_else(|| format!("unknown difficulty: {value}"))?;
            PlannerAction::SetDifficulty(tier).into()
        }
        "start" => PlannerAction::SetStartPoint(args.join(" ")).into(),
        "add" => PlannerAction::AddMember(args.join(" ")).into(),
        "remove" => PlannerAction::RemoveMember {
            id: single_arg(command, args)?.to_string(),
        }
        .into(),
        "mode" => {
            let value = single_arg(command, args)?;
            let mode = ViewMode::parse(value).ok_or_else(|| format!("unknown mode: {value}"))?;
            MapAction::SetMode(mode).into()
        }
        "filter" => match args {
            [name, flag] => MapAction::SetFilterNamed {
                name: name.clone(),
                enabled: parse_flag(flag)?,
            }
            .into(),
            _ => return Err("filter expects TAG on|off".to_string()),
        },
        "toggle-filter" => match FilterTag::parse(single_arg(command, args)?) {
            Some(tag) => MapAction::ToggleFilter(tag).into(),
            None => return Ok(None),
        },
        "clear-filters" => MapAction::ClearFilters.into(),
        "query" => MapAction::SetQuery(args.join(" ")).into(),
        "cards" => {
            let value = single_arg(command, args)?;
            let ownership =
                Ownership::parse(value).ok_or_else(|| format!("unknown card filter: {value}"))?;
            CollectionAction::SetOwnership(ownership).into()
        }
        "rarity" => {
            let value = single_arg(command, args)?;
            CollectionAction::SetRarity(parse_rarity_filter(value)?).into()
        }
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(Some(action))
}

pub fn parse_rarity_filter(value: &str) -> Result<Option<Rarity>, String> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Rarity::parse(value)
        .map(Some)
        .ok_or_else(|| format!("unknown rarity: {value}"))
}

fn single_arg<'a>(command: &str, args: &'a [String]) -> Result<&'a str, String> {
    match args {
        [value] => Ok(value.as_str()),
        _ => Err(format!("{command} expects exactly one argument")),
    }
}

fn step_arg(args: &[String]) -> Result<Step, String> {
    let value = single_arg("step command", args)?;
    Step::parse(value).ok_or_else(|| format!("unknown step: {value}"))
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(format!("expected on|off, got {other}")),
    }
}

#[cfg(test)]
mod tests {
    use peakly_core::catalog::MarkerCategory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokenize_keeps_quoted_runs() {
        assert_eq!(
            tokenize(r#"add "Ana Lee"  now"#),
            vec!["add".to_string(), "Ana Lee".to_string(), "now".to_string()]
        );
        assert_eq!(tokenize(r#"query """#), vec!["query".to_string(), String::new()]);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# warm up"), Ok(None));
    }

    #[test]
    fn planner_commands_parse() {
        assert_eq!(
            parse_line("complete start-point"),
            Ok(Some(SessionAction::Planner(PlannerAction::CompleteStep(
                Step::StartPoint
            ))))
        );
        assert_eq!(
            parse_line(r#"add "Ana Lee""#),
            Ok(Some(SessionAction::Planner(PlannerAction::AddMember(
                "Ana Lee".to_string()
            ))))
        );
        assert_eq!(
            parse_line("dates 2025-06-15 2025-06-17"),
            Ok(Some(SessionAction::Planner(PlannerAction::SetDates {
                start: "2025-06-15".to_string(),
                end: "2025-06-17".to_string(),
            })))
        );
        assert_eq!(
            parse_line("difficulty Moderate"),
            Ok(Some(SessionAction::Planner(PlannerAction::SetDifficulty(
                DifficultyTier::Moderate
            ))))
        );
    }

    #[test]
    fn map_commands_parse() {
        assert_eq!(
            parse_line("filter legendary on"),
            Ok(Some(SessionAction::Map(MapAction::SetFilterNamed {
                name: "legendary".to_string(),
                enabled: true,
            })))
        );
        assert_eq!(
            parse_line("toggle-filter forest"),
            Ok(Some(SessionAction::Map(MapAction::ToggleFilter(
                FilterTag::Category(MarkerCategory::Forest)
            ))))
        );
        assert_eq!(parse_line("toggle-filter glacier"), Ok(None));
        assert_eq!(
            parse_line("mode personal"),
            Ok(Some(SessionAction::Map(MapAction::SetMode(
                ViewMode::Personal
            ))))
        );
    }

    #[test]
    fn bad_lines_report_why() {
        assert_eq!(
            parse_line("complete summit"),
            Err("unknown step: summit".to_string())
        );
        assert_eq!(
            parse_line("fly home"),
            Err("unknown command: fly".to_string())
        );
        assert_eq!(
            parse_line("filter forest maybe"),
            Err("expected on|off, got maybe".to_string())
        );
        assert_eq!(
            parse_line("rarity all"),
            Ok(Some(SessionAction::Collection(CollectionAction::SetRarity(
                None
            ))))
        );
    }
}
