//! Terminal front-end.
//!
//! Renders the contact list and status region on stdout and turns typed lines
//! into [`Command`]s. Logs go to stderr, so stdout only carries the surface.

use crate::app::Command;
use crate::status::{Severity, StatusView};
use crate::ui::{Confirm, ListRow, Surface};
use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub const HELP: &str = "\
Commands:
  list                    show contacts
  add <name> <phone>      add a contact (phone like +1234567890)
  delete <row>            delete the contact on that row
  alert                   send an alert with your location
  help                    show this help
  quit                    exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Dispatch(Command),
    /// 1-based row of the last rendered list
    DeleteRow(usize),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Parse one line typed by the user.
///
/// For `add`, the last word is the phone and everything before it the name;
/// incomplete input is still submitted so the form validation reports it.
pub fn parse_line(line: &str) -> ConsoleInput {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return ConsoleInput::Empty;
    };
    let args: Vec<&str> = words.collect();

    match verb.to_lowercase().as_str() {
        "list" | "refresh" => ConsoleInput::Dispatch(Command::Refresh),
        "add" => {
            let (name, phone) = match args.split_last() {
                Some((phone, name)) if !name.is_empty() => (name.join(" "), phone.to_string()),
                Some((name, _)) => (name.to_string(), String::new()),
                None => (String::new(), String::new()),
            };
            ConsoleInput::Dispatch(Command::SubmitContact { name, phone })
        }
        "delete" | "rm" => match args.as_slice() {
            [row] => match row.parse::<usize>() {
                Ok(row) if row > 0 => ConsoleInput::DeleteRow(row),
                _ => ConsoleInput::Invalid(format!("Not a row number: {}", row)),
            },
            _ => ConsoleInput::Invalid("Usage: delete <row>".to_string()),
        },
        "alert" => ConsoleInput::Dispatch(Command::SendAlert),
        "help" | "?" => ConsoleInput::Help,
        "quit" | "exit" => ConsoleInput::Quit,
        other => ConsoleInput::Invalid(format!("Unknown command: {} (try 'help')", other)),
    }
}

/// Surface printing to stdout.
#[derive(Default)]
pub struct ConsoleSurface {
    rows: Mutex<Vec<ListRow>>,
    loading: AtomicBool,
}

impl ConsoleSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete command captured on a rendered row (1-based).
    pub fn delete_command(&self, row: usize) -> Option<Command> {
        let rows = self.rows.lock().ok()?;
        match rows.get(row.checked_sub(1)?)? {
            ListRow::Contact { on_delete, .. } => Some(on_delete.clone()),
            ListRow::Placeholder(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

impl Surface for ConsoleSurface {
    fn render_contacts(&self, rows: &[ListRow]) {
        if let Ok(mut rendered) = self.rows.lock() {
            *rendered = rows.to_vec();
        }

        println!("Contacts:");
        for (index, row) in rows.iter().enumerate() {
            match row {
                ListRow::Contact { label, .. } => println!("  {}. {}", index + 1, label),
                ListRow::Placeholder(text) => println!("  {}", text),
            }
        }
    }

    fn render_status(&self, status: &StatusView) {
        // Clearing has nothing to erase on a scrolling terminal
        if status.is_empty() {
            return;
        }

        let marker = match status.severity {
            Severity::Success => "[ok]",
            Severity::Error => "[error]",
        };
        println!("{} {}", marker, status.message);
    }

    fn set_loading(&self, loading: bool) {
        self.loading.store(loading, Ordering::SeqCst);
    }

    fn reset_form(&self) {
        tracing::debug!("Form reset");
    }
}

/// Confirmation read from stdin; only `y` or `yes` proceeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl StdinConfirm {
    fn is_yes(answer: &str) -> bool {
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn ask(prompt: &str, input: &mut impl BufRead) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match input.read_line(&mut answer) {
            Ok(_) => Self::is_yes(&answer),
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}

/// Run a blocking call, handing the worker's other tasks off first when on a
/// multi-thread runtime.
fn run_blocking<T>(f: impl FnOnce() -> T) -> T {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == tokio::runtime::RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        run_blocking(|| Self::ask(prompt, &mut io::stdin().lock()))
    }
}
