//! Shared prompt-session context.
//!
//! The original generators coordinated through module-scoped counters and
//! sets; here the same state is threaded explicitly through every prompt
//! stage as a [`PromptSession`], so composed generators stay in step without
//! globals.

use std::collections::HashSet;

/// Maximum number of numbered questions across the composed app generators.
pub const TOTAL_QUESTIONS: usize = 3;

/// Mutable context threaded through all prompt stages of one run.
#[derive(Debug, Clone)]
pub struct PromptSession {
    current_question: usize,
    total_questions: usize,
    /// Enum class names declared so far in this session.  A repeated name is
    /// an "existing enum" whose value prompt becomes optional.
    enums: HashSet<String>,
}

impl PromptSession {
    pub fn new() -> Self {
        Self::with_totals(0, TOTAL_QUESTIONS)
    }

    /// Resume at a given question index, for generators composed after
    /// another has already asked some questions.
    pub fn with_totals(current: usize, total: usize) -> Self {
        Self {
            current_question: current,
            total_questions: total,
            enums: HashSet::new(),
        }
    }

    /// Format the next numbered question: `(1/3) <msg>`.  Increments the
    /// running index.
    pub fn numbered_question(&mut self, msg: &str) -> String {
        self.current_question += 1;
        format!(
            "({}/{}) {}",
            self.current_question, self.total_questions, msg
        )
    }

    /// Record an enum class name.  Returns `true` if the name was already
    /// declared in this session.
    pub fn declare_enum(&mut self, name: &str) -> bool {
        !self.enums.insert(name.to_string())
    }

    pub fn is_existing_enum(&self, name: &str) -> bool {
        self.enums.contains(name)
    }

    pub fn current_question(&self) -> usize {
        self.current_question
    }
}

impl Default for PromptSession {
    fn default() -> Self {
        Self::new()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_questions_count_up() {
        let mut session = PromptSession::new();
        assert_eq!(
            session.numbered_question("What is the name of your application?"),
            "(1/3) What is the name of your application?"
        );
        assert_eq!(
            session.numbered_question("Enter AWS region to use"),
            "(2/3) Enter AWS region to use"
        );
        assert_eq!(session.current_question(), 2);
    }

    #[test]
    fn resumed_session_continues_numbering() {
        let mut session = PromptSession::with_totals(1, 3);
        assert_eq!(session.numbered_question("next"), "(2/3) next");
    }

    #[test]
    fn enum_names_are_remembered_across_the_session() {
        let mut session = PromptSession::new();
        assert!(!session.declare_enum("Color"));
        assert!(session.declare_enum("Color"));
        assert!(session.is_existing_enum("Color"));
        assert!(!session.is_existing_enum("Status"));
    }
}
