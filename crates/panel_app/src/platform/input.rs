//! Line commands standing in for the host document's form events.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    SetImageUrl(String),
    SetOutputUrl(String),
    PickFile(PathBuf),
    DropFiles(Vec<PathBuf>),
    Submit,
    Show,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<Option<InputCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        // Field values may be empty, mirroring an unfilled input.
        "url" => InputCommand::SetImageUrl(rest.to_string()),
        "output" => InputCommand::SetOutputUrl(rest.to_string()),
        "file" if rest.is_empty() => return Err("usage: file <path>".to_string()),
        "file" => InputCommand::PickFile(PathBuf::from(rest)),
        "drop" => {
            let paths: Vec<PathBuf> = rest.split_whitespace().map(PathBuf::from).collect();
            if paths.is_empty() {
                return Err("usage: drop <path> [path...]".to_string());
            }
            InputCommand::DropFiles(paths)
        }
        "submit" => InputCommand::Submit,
        "show" => InputCommand::Show,
        "help" | "?" => InputCommand::Help,
        "quit" | "exit" => InputCommand::Quit,
        other => return Err(format!("unknown command `{other}`, try `help`")),
    };
    Ok(Some(command))
}
