//! The interactive answer capability.
//!
//! Gathering only ever needs one thing from a user: an answer to a prompt,
//! with a fallback used when the answer is blank. [`Answer`] is that seam.
//! [`TerminalAnswers`] drives a real terminal (or a pipe) and
//! [`ScriptedAnswers`] replays canned answers in tests and non-interactive
//! callers.

use std::collections::VecDeque;
use std::io::{BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::error::EnvgenError;

pub trait Answer {
    /// Ask `prompt`. A blank (or whitespace-only) answer yields `default`.
    /// Answers are trimmed.
    fn answer(&mut self, prompt: &str, default: &str) -> Result<String, EnvgenError>;

    /// Informational text shown between prompts (group headings, choices).
    fn notice(&mut self, _text: &str) {}
}

/// Answers read from the process's stdin.
///
/// On a terminal this uses `dialoguer` line editing. When stdin is piped,
/// lines are read directly and end-of-input becomes
/// [`EnvgenError::InputClosed`] instead of an endless re-prompt.
pub struct TerminalAnswers {
    interactive: bool,
}

impl TerminalAnswers {
    pub fn new() -> Self {
        Self {
            interactive: std::io::stdin().is_terminal(),
        }
    }
}

impl Default for TerminalAnswers {
    fn default() -> Self {
        Self::new()
    }
}

impl Answer for TerminalAnswers {
    fn answer(&mut self, prompt: &str, default: &str) -> Result<String, EnvgenError> {
        let raw = if self.interactive {
            let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
            if !default.is_empty() {
                input = input.default(default.to_string());
            }
            match input.interact_text() {
                Ok(value) => value,
                Err(dialoguer::Error::IO(err))
                    if err.kind() == std::io::ErrorKind::Interrupted =>
                {
                    return Err(EnvgenError::InputClosed {
                        prompt: prompt.into(),
                    });
                }
                Err(err) => {
                    return Err(EnvgenError::Prompt {
                        prompt: prompt.into(),
                        reason: err.to_string(),
                    });
                }
            }
        } else {
            read_piped_line(prompt, default)?
        };
        Ok(or_default(&raw, default))
    }

    fn notice(&mut self, text: &str) {
        eprintln!("{text}");
    }
}

fn read_piped_line(prompt: &str, default: &str) -> Result<String, EnvgenError> {
    let mut stderr = std::io::stderr();
    let shown = if default.is_empty() {
        format!("{prompt}: ")
    } else {
        format!("{prompt} [{default}]: ")
    };
    // Best effort: a closed stderr must not abort gathering.
    let _ = stderr.write_all(shown.as_bytes());
    let _ = stderr.flush();

    let mut line = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| EnvgenError::Prompt {
            prompt: prompt.into(),
            reason: e.to_string(),
        })?;
    if read == 0 {
        return Err(EnvgenError::InputClosed {
            prompt: prompt.into(),
        });
    }
    Ok(line)
}

fn or_default(raw: &str, default: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Canned answers, consumed in order. Records every prompt it was asked.
#[derive(Debug, Default, Clone)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
    asked: Vec<String>,
    notices: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Prompts asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Answer for ScriptedAnswers {
    fn answer(&mut self, prompt: &str, default: &str) -> Result<String, EnvgenError> {
        self.asked.push(prompt.to_string());
        let raw = self
            .answers
            .pop_front()
            .ok_or_else(|| EnvgenError::InputClosed {
                prompt: prompt.into(),
            })?;
        Ok(or_default(&raw, default))
    }

    fn notice(&mut self, text: &str) {
        self.notices.push(text.to_string());
    }
}
