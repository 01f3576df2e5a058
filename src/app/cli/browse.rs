//! Interactive browse loop over a [`Session`].

use std::io::{BufRead, Write};
use std::path::Path;

use crate::app::{ActionOutcome, Session};
use crate::domain::shell_command::{HELP_TEXT, parse_line};
use crate::domain::{AppError, ShellCommand};
use crate::ports::{Launcher, Prompter};

/// What the loop should show after a command ran.
enum Redraw {
    Nothing,
    Status,
    Listing,
}

/// Read commands from `input` until `quit` or end of input.
///
/// Command failures are written to `errors` and the loop continues; only
/// I/O failures on the streams themselves end it.
pub fn run_loop<P, L, R, W, E>(
    session: &mut Session<P, L>,
    input: R,
    out: &mut W,
    errors: &mut E,
) -> Result<(), AppError>
where
    P: Prompter,
    L: Launcher,
    R: BufRead,
    W: Write,
    E: Write,
{
    write!(out, "{}", session.listing().render())?;
    let mut lines = input.lines();

    loop {
        write!(out, "{}> ", session.current_dir().display())?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(errors, "Error: {}", err)?;
                continue;
            }
        };
        if command == ShellCommand::Quit {
            return Ok(());
        }

        match execute(session, &command, out) {
            Ok(Redraw::Nothing) => {}
            Ok(Redraw::Status) => writeln!(out, "{}", session.status())?,
            Ok(Redraw::Listing) => {
                write!(out, "{}", session.listing().render())?;
                writeln!(out, "{}", session.status())?;
            }
            Err(err) => {
                log::debug!("command {:?} failed: {}", command, err);
                writeln!(errors, "Error: {}", err)?;
            }
        }
    }
}

fn execute<P: Prompter, L: Launcher, W: Write>(
    session: &mut Session<P, L>,
    command: &ShellCommand,
    out: &mut W,
) -> Result<Redraw, AppError> {
    let redraw = match command {
        ShellCommand::List => {
            session.refresh()?;
            Redraw::Listing
        }
        ShellCommand::Pwd => {
            writeln!(out, "{}", session.current_dir().display())?;
            Redraw::Nothing
        }
        ShellCommand::ChangeDir(path) => {
            session.navigate(Path::new(path))?;
            Redraw::Listing
        }
        ShellCommand::Up => {
            session.up()?;
            Redraw::Listing
        }
        ShellCommand::Open(target) => {
            let before = session.current_dir().to_path_buf();
            session.activate(target)?;
            if session.current_dir() == before.as_path() {
                Redraw::Status
            } else {
                Redraw::Listing
            }
        }
        ShellCommand::NewDir(name) => {
            session.new_dir(name)?;
            Redraw::Listing
        }
        ShellCommand::Rename { target, new_name } => outcome(session.rename(target, new_name)?),
        ShellCommand::Delete(target) => outcome(session.delete(target)?),
        ShellCommand::Copy(target) => {
            session.copy(target)?;
            Redraw::Status
        }
        ShellCommand::Cut(target) => {
            session.cut(target)?;
            Redraw::Status
        }
        ShellCommand::Paste => outcome(session.paste()?),
        ShellCommand::ShowClipboard => {
            match session.clipboard().peek() {
                Some(entry) => writeln!(out, "{}: {}", entry.mode(), entry.path().display())?,
                None => writeln!(out, "Clipboard is empty.")?,
            }
            Redraw::Nothing
        }
        ShellCommand::About => {
            writeln!(
                out,
                "filenav {}\nBrowse, copy, move and delete files from the terminal.",
                env!("CARGO_PKG_VERSION")
            )?;
            Redraw::Nothing
        }
        ShellCommand::Help => {
            write!(out, "{}", HELP_TEXT)?;
            Redraw::Nothing
        }
        ShellCommand::Quit => Redraw::Nothing,
    };
    Ok(redraw)
}

fn outcome(outcome: ActionOutcome) -> Redraw {
    match outcome {
        ActionOutcome::Done => Redraw::Listing,
        ActionOutcome::Cancelled => Redraw::Status,
    }
}
