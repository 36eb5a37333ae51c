//! Scripted prompter for testing.
//!
//! Answers are consumed in order.  Like the real prompter, `input` re-asks
//! on validation failure: an answer rejected by the validator is recorded
//! and the next queued answer is tried.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use wayfarer_core::{
    application::{ApplicationError, ports::Prompter},
    error::WayfarerResult,
};

/// One scripted answer, matched against the prompt kind at consumption time.
#[derive(Debug, Clone)]
pub enum ScriptedAnswer {
    Confirm(bool),
    Input(String),
    Select(usize),
    MultiSelect(Vec<usize>),
}

impl ScriptedAnswer {
    /// Shorthand for `Input`.
    pub fn text(s: &str) -> Self {
        Self::Input(s.to_string())
    }
}

/// Test prompter fed from a fixed answer queue.  Clones share state, so a
/// handle kept by the test still sees the transcript after the service has
/// taken ownership of its own clone.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<ScriptedAnswer>>>,
    transcript: Arc<Mutex<Vec<String>>>,
    rejections: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<ScriptedAnswer>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into())),
            transcript: Arc::new(Mutex::new(Vec::new())),
            rejections: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything the session reported (summaries, progress notes).
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.lock().unwrap().clone()
    }

    /// Validation messages produced by rejected answers.
    pub fn rejections(&self) -> Vec<String> {
        self.rejections.lock().unwrap().clone()
    }

    /// `true` once every scripted answer has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.answers.lock().unwrap().is_empty()
    }

    fn next(&self, prompt: &str) -> WayfarerResult<ScriptedAnswer> {
        self.answers.lock().unwrap().pop_front().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("no scripted answer left for prompt '{prompt}'"),
            }
            .into()
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, message: &str, _default: bool) -> WayfarerResult<bool> {
        match self.next(message)? {
            ScriptedAnswer::Confirm(value) => Ok(value),
            other => Err(mismatch(message, &other)),
        }
    }

    fn input(
        &self,
        message: &str,
        default: Option<&str>,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> WayfarerResult<String> {
        loop {
            let raw = match self.next(message)? {
                ScriptedAnswer::Input(raw) => raw,
                other => return Err(mismatch(message, &other)),
            };
            // Empty input takes the default, as the terminal prompter does.
            let candidate = match (&raw, default) {
                (raw, Some(default)) if raw.is_empty() => default.to_string(),
                (raw, _) => raw.clone(),
            };
            match validate(&candidate) {
                Ok(()) => return Ok(candidate),
                Err(reason) => self.rejections.lock().unwrap().push(reason),
            }
        }
    }

    fn select(&self, message: &str, items: &[String], _default: usize) -> WayfarerResult<usize> {
        match self.next(message)? {
            ScriptedAnswer::Select(index) if index < items.len() => Ok(index),
            other => Err(mismatch(message, &other)),
        }
    }

    fn multi_select(&self, message: &str, items: &[String]) -> WayfarerResult<Vec<usize>> {
        match self.next(message)? {
            ScriptedAnswer::MultiSelect(indices) if indices.iter().all(|i| *i < items.len()) => {
                Ok(indices)
            }
            other => Err(mismatch(message, &other)),
        }
    }

    fn report(&self, message: &str) {
        self.transcript.lock().unwrap().push(message.to_string());
    }
}

fn mismatch(message: &str, got: &ScriptedAnswer) -> wayfarer_core::error::WayfarerError {
    ApplicationError::PromptFailed {
        reason: format!("scripted answer {got:?} does not fit prompt '{message}'"),
    }
    .into()
}

// ── tests ─────────────────────────────────────────────────────────────────────
