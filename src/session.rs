//! Interactive session: maps user commands onto the password field.

use secrecy::{ExposeSecret, SecretString};

use crate::clipboard::{copy_password, ClipboardBackend, ClipboardError};
use crate::clock;
use crate::field::PasswordField;
use crate::suggest::suggest_password;
use crate::types::StrengthScore;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a command replaces the password.
    SetPassword(String),
    Suggest,
    ToggleVisibility,
    Show,
    Hide,
    Copy,
    Clear,
    Clock,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        match line.trim() {
            ":suggest" | ":s" => Command::Suggest,
            ":toggle" | ":t" => Command::ToggleVisibility,
            ":show" => Command::Show,
            ":hide" => Command::Hide,
            ":copy" | ":c" => Command::Copy,
            ":clear" => Command::Clear,
            ":clock" => Command::Clock,
            ":help" | ":h" | ":?" => Command::Help,
            ":quit" | ":q" => Command::Quit,
            _ => Command::SetPassword(line.to_string()),
        }
    }
}

/// What the front-end should show after a command.
#[derive(Debug)]
pub enum Outcome {
    Scored(StrengthScore),
    Suggested {
        password: SecretString,
        score: StrengthScore,
    },
    Visibility(bool),
    Copied,
    Warning(String),
    Error(String),
    Clock(String),
    Help,
    Quit,
}

pub const HELP: &str = "\
Type a password and press enter to score it.
  :suggest  suggest a strong password
  :toggle   show or hide the password (:show, :hide)
  :copy     copy the password to the clipboard
  :clear    clear the password
  :clock    show the current time
  :quit     exit";

pub struct Session<B: ClipboardBackend> {
    field: PasswordField,
    clipboard: B,
}

impl<B: ClipboardBackend> Session<B> {
    pub fn new(clipboard: B, visible: bool) -> Self {
        Self {
            field: PasswordField::new(visible),
            clipboard,
        }
    }

    pub fn field(&self) -> &PasswordField {
        &self.field
    }

    pub fn clipboard(&self) -> &B {
        &self.clipboard
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::SetPassword(password) => {
                self.field.set(&password);
                Outcome::Scored(self.field.evaluate())
            }
            Command::Suggest => {
                let password = suggest_password();
                self.field.set(password.expose_secret());
                Outcome::Suggested {
                    password,
                    score: self.field.evaluate(),
                }
            }
            Command::ToggleVisibility => Outcome::Visibility(self.field.toggle_visibility()),
            Command::Show => {
                if !self.field.is_visible() {
                    self.field.toggle_visibility();
                }
                Outcome::Visibility(true)
            }
            Command::Hide => {
                if self.field.is_visible() {
                    self.field.toggle_visibility();
                }
                Outcome::Visibility(false)
            }
            Command::Copy => match copy_password(&mut self.clipboard, self.field.password()) {
                Ok(()) => Outcome::Copied,
                Err(e @ ClipboardError::EmptyPassword) => Outcome::Warning(e.to_string()),
                Err(e) => Outcome::Error(e.to_string()),
            },
            Command::Clear => {
                self.field.clear();
                Outcome::Scored(self.field.evaluate())
            }
            Command::Clock => Outcome::Clock(clock::now()),
            Command::Help => Outcome::Help,
            Command::Quit => Outcome::Quit,
        }
    }
}
