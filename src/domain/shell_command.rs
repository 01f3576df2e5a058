//! Grammar of the interactive browse loop.

use crate::domain::AppError;

/// Selects one path: a row index from the last listing or an entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Index(usize),
    Name(String),
}

impl Target {
    fn parse(token: &str) -> Self {
        match token.parse::<usize>() {
            Ok(index) => Target::Index(index),
            Err(_) => Target::Name(token.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Pwd,
    ChangeDir(String),
    Up,
    Open(Target),
    NewDir(String),
    Rename { target: Target, new_name: String },
    Delete(Target),
    Copy(Target),
    Cut(Target),
    Paste,
    ShowClipboard,
    About,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  ls | refresh               list the current directory
  pwd                        print the current directory
  cd <path>                  change directory
  up | ..                    go to the parent directory
  open <n|name>              open a directory or launch a file
  mkdir | new <name>         create a directory here
  rename | mv <n|name> <new> rename an entry
  rm | delete <n|name>       delete an entry (recursively)
  copy | cp <n|name>         mark an entry for copy
  cut <n|name>               mark an entry for move
  paste                      paste the marked entry here
  clip                       show the marked entry
  about                      about filenav
  help                       show this help
  quit | exit | q            leave
";

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, AppError> {
    let tokens = tokenize(line)?;
    let Some((head, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (head.as_str(), args) {
        ("ls" | "refresh", []) => ShellCommand::List,
        ("pwd", []) => ShellCommand::Pwd,
        ("cd", [path]) => ShellCommand::ChangeDir(path.clone()),
        ("up" | "..", []) => ShellCommand::Up,
        ("open", [target]) => ShellCommand::Open(Target::parse(target)),
        ("mkdir" | "new", [name]) => ShellCommand::NewDir(name.clone()),
        ("rename" | "mv", [target, new_name]) => {
            ShellCommand::Rename { target: Target::parse(target), new_name: new_name.clone() }
        }
        ("rm" | "delete", [target]) => ShellCommand::Delete(Target::parse(target)),
        ("copy" | "cp", [target]) => ShellCommand::Copy(Target::parse(target)),
        ("cut", [target]) => ShellCommand::Cut(Target::parse(target)),
        ("paste", []) => ShellCommand::Paste,
        ("clip", []) => ShellCommand::ShowClipboard,
        ("about", []) => ShellCommand::About,
        ("help" | "?", []) => ShellCommand::Help,
        ("quit" | "exit" | "q", []) => ShellCommand::Quit,
        (
            "ls" | "refresh" | "pwd" | "cd" | "up" | ".." | "open" | "mkdir" | "new" | "rename"
            | "mv" | "rm" | "delete" | "copy" | "cp" | "cut" | "paste" | "clip" | "about"
            | "help" | "?" | "quit" | "exit" | "q",
            _,
        ) => {
            return Err(AppError::Command(format!(
                "Wrong number of arguments for '{}'. Type 'help' for usage.",
                head
            )));
        }
        (other, _) => {
            return Err(AppError::Command(format!(
                "Unknown command '{}'. Type 'help' for usage.",
                other
            )));
        }
    };
    Ok(Some(command))
}

/// Split on whitespace, grouping double-quoted spans into one token.
pub fn tokenize(line: &str) -> Result<Vec<String>, AppError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(AppError::Command("Unterminated quote".to_string()));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
