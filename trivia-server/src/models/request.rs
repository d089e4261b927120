//! Request bodies for the mutating and quiz endpoints

use serde::Deserialize;

use super::NewQuestion;

/// Category assigned when a new question does not name one
pub const DEFAULT_CATEGORY: i32 = 1;

/// Difficulty assigned when a new question does not give one
pub const DEFAULT_DIFFICULTY: i32 = 1;

/// Category id meaning "every category" in a quiz request
pub const ALL_CATEGORIES: i32 = 0;

/// Request body rejected after it parsed as JSON
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be an integer")]
    NotInteger { field: &'static str },
}

/// An integer that clients send either as a JSON number or as numeric text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntField {
    Number(i64),
    Text(String),
}

impl IntField {
    pub fn to_i32(&self, field: &'static str) -> Result<i32, RequestError> {
        let value = match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<i64>().ok(),
        };
        value
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(RequestError::NotInteger { field })
    }
}

/// Body of `POST /questions`: a new question, or a search when `searchTerm` is present
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionForm {
    pub question: Option<String>,
    pub answer: Option<String>,
    /// Defaults to [`DEFAULT_CATEGORY`]
    pub category: Option<IntField>,
    /// Defaults to [`DEFAULT_DIFFICULTY`]
    pub difficulty: Option<IntField>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// What a [`QuestionForm`] asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionAction {
    Search(String),
    Create(NewQuestion),
}

impl QuestionForm {
    pub fn into_action(self) -> Result<QuestionAction, RequestError> {
        if let Some(term) = self.search_term {
            return Ok(QuestionAction::Search(term));
        }

        let question = self.question.filter(|q| !q.is_empty());
        let answer = self.answer.filter(|a| !a.is_empty());
        let (question, answer) = match (question, answer) {
            (Some(q), Some(a)) => (q, a),
            (None, _) => return Err(RequestError::Missing { field: "question" }),
            (_, None) => return Err(RequestError::Missing { field: "answer" }),
        };

        let category = match &self.category {
            Some(field) => field.to_i32("category")?,
            None => DEFAULT_CATEGORY,
        };
        let difficulty = match &self.difficulty {
            Some(field) => field.to_i32("difficulty")?,
            None => DEFAULT_DIFFICULTY,
        };

        Ok(QuestionAction::Create(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        }))
    }
}

/// Category chosen for a quiz; other fields the client sends are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: IntField,
}

/// Body of `POST /quizzes`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    /// Ids already served in this quiz; required, `[]` on the first round
    pub previous_questions: Vec<i32>,
}

impl QuizRequest {
    /// Category to draw from, `None` for every category.
    pub fn category_filter(&self) -> Result<Option<i32>, RequestError> {
        match &self.quiz_category {
            None => Ok(None),
            Some(category) => match category.id.to_i32("quiz_category.id")? {
                ALL_CATEGORIES => Ok(None),
                id => Ok(Some(id)),
            },
        }
    }
}
