use std::io::{self, Write};

use colored::Colorize;

use crate::launcher::{Feedback, Item};
use crate::search::{Query, SearchMode};

/// Turns colour off unless the listing goes to a terminal.
pub fn configure_color(is_terminal: bool) {
    if !is_terminal {
        colored::control::set_override(false);
    }
}

/// Writes the feedback as a readable listing, for checking a query by hand.
pub fn print_items<W: Write>(out: &mut W, feedback: &Feedback, query: &Query) -> io::Result<()> {
    let mode = match query.mode {
        SearchMode::Title => "TITLE",
        SearchMode::Folder => "FOLDER",
        SearchMode::Tag => "TAG",
    };

    writeln!(
        out,
        "{}  {} {} '{}'",
        "┃".bright_magenta(),
        mode.bright_green().bold(),
        "SEARCH".bold(),
        query.text.bright_white()
    )?;

    if feedback.items.is_empty() {
        writeln!(out, "{}  No snippets found.", "┃".bright_magenta())?;
        return Ok(());
    }

    writeln!(
        out,
        "{}  Found {} entries:",
        "┃".bright_magenta(),
        feedback.items.len()
    )?;
    writeln!(out, "{}", "─".repeat(60).bright_magenta())?;

    for (idx, item) in feedback.items.iter().enumerate() {
        print_item(out, idx, item)?;

        if idx < feedback.items.len() - 1 {
            writeln!(
                out,
                "{}  {}",
                "┃".bright_magenta(),
                "─".repeat(40).bright_black()
            )?;
        }
    }

    Ok(())
}

fn print_item<W: Write>(out: &mut W, idx: usize, item: &Item) -> io::Result<()> {
    writeln!(
        out,
        "{}  {}. {}",
        "┃".bright_magenta(),
        (idx + 1).to_string().bright_yellow(),
        item.title.bright_white().bold()
    )?;
    writeln!(
        out,
        "{}     {}: {}",
        "┃".bright_magenta(),
        "Path".bright_blue(),
        item.subtitle
    )?;
    if let Some(match_text) = &item.match_text {
        writeln!(
            out,
            "{}     {}: {}",
            "┃".bright_magenta(),
            "Match".bright_cyan(),
            match_text
        )?;
    }
    writeln!(
        out,
        "{}     {}: {}",
        "┃".bright_magenta(),
        "ID".bright_black(),
        item.uid
    )?;

    // First line of the fragment only; the launcher copies the full text.
    if let Some(first_line) = item.arg.lines().next() {
        let more = item.arg.lines().count() > 1;
        writeln!(
            out,
            "{}     {}{}",
            "┃".bright_magenta(),
            first_line,
            if more { " …" } else { "" }
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_item() {
        let feedback = Feedback {
            items: vec![
                Item {
                    uid: "s1".into(),
                    title: "Read file".into(),
                    subtitle: "Dev/Rust".into(),
                    arg: "let s = fs::read(p)?;\nOk(s)".into(),
                    ..Item::default()
                },
                Item {
                    uid: "s2".into(),
                    title: "Grep".into(),
                    subtitle: "Inbox".into(),
                    arg: "grep -rn".into(),
                    match_text: Some("shell".into()),
                    ..Item::default()
                },
            ],
        };

        let mut out = Vec::new();
        print_items(&mut out, &feedback, &Query::parse("t sh")).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Found 2 entries"));
        assert!(text.contains("Read file"));
        assert!(text.contains("Dev/Rust"));
        assert!(text.contains("let s = fs::read(p)?;"));
        assert!(!text.contains("Ok(s)"));
        assert!(text.contains("shell"));
    }

    #[test]
    fn piped_listing_has_no_escape_codes() {
        configure_color(false);
        let feedback = Feedback {
            items: vec![Item {
                uid: "s1".into(),
                title: "Read file".into(),
                subtitle: "Inbox".into(),
                arg: "cat".into(),
                ..Item::default()
            }],
        };

        let mut out = Vec::new();
        print_items(&mut out, &feedback, &Query::parse("read")).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("1. Read file"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn empty_result_says_so() {
        let mut out = Vec::new();
        print_items(&mut out, &Feedback::default(), &Query::parse("nothing")).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("No snippets found."));
    }
}
