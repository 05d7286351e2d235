use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier used for tests, questions and options.
///
/// Catalog documents use either numbers or strings. Comparison is strict,
/// so `1` and `"1"` never match each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        ItemId::Number(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        ItemId::Number(i64::from(value))
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        ItemId::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        ItemId::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: ItemId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: ItemId,
    pub text: String,
    pub options: Vec<QuizOption>,
    pub correct_answer: ItemId,
}

impl Question {
    pub fn option(&self, option_id: &ItemId) -> Option<&QuizOption> {
        self.options.iter().find(|o| &o.id == option_id)
    }

    pub fn has_option(&self, option_id: &ItemId) -> bool {
        self.option(option_id).is_some()
    }

    pub fn is_correct_option(&self, option_id: &ItemId) -> bool {
        &self.correct_answer == option_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    pub id: ItemId,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Test {
    pub fn question(&self, question_id: &ItemId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == question_id)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

/// The static bank of tests, loaded once and shared read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub tests: Vec<Test>,
}

impl Catalog {
    pub fn test(&self, test_id: &ItemId) -> Option<&Test> {
        self.tests.iter().find(|t| &t.id == test_id)
    }

    pub fn position(&self, test_id: &ItemId) -> Option<usize> {
        self.tests.iter().position(|t| &t.id == test_id)
    }

    pub fn first(&self) -> Option<&Test> {
        self.tests.first()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// Selected option per answered question.
pub type AnswerRecord = HashMap<ItemId, ItemId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Quiz,
    QuitConfirm,
}

/// Terminal cursor inside the current page: which question row and which of
/// its options is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Focus {
    pub question: usize,
    pub option: usize,
}
