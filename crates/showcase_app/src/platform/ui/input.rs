use showcase_core::{Msg, ALL_CATEGORIES};

use super::constants::CARD_ROWS;

/// One line typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Msg(Msg),
    Down(usize),
    Up(usize),
    Top,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, Some(rest)),
        None => (line.trim_start(), None),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Down(CARD_ROWS),
        "category" | "c" => {
            let name = rest.map(str::trim).filter(|name| !name.is_empty());
            Command::Msg(Msg::CategorySelected(
                name.unwrap_or(ALL_CATEGORIES).to_owned(),
            ))
        }
        // Search text is passed through untouched apart from the separator.
        "search" | "s" => Command::Msg(Msg::SearchChanged(rest.unwrap_or("").to_owned())),
        "sort" => Command::Msg(Msg::SortSelected(rest.unwrap_or("").trim().to_owned())),
        "more" | "m" => Command::Msg(Msg::LoadMoreClicked),
        "down" | "d" => Command::Down(rows(rest)),
        "up" | "u" => Command::Up(rows(rest)),
        "top" => Command::Top,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_owned()),
    }
}

fn rows(rest: Option<&str>) -> usize {
    rest.and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(CARD_ROWS)
}
