//! Domain models and the pure helpers the handlers build on

pub mod pagination;
pub mod question;
pub mod request;
pub mod selection;

pub use pagination::{Page, PageParams, QUESTIONS_PER_PAGE};
pub use question::{Category, CategoryMap, NewQuestion, Question};
pub use request::{QuestionAction, QuestionForm, QuizRequest, RequestError};
pub use selection::{pick_random, quiz_candidates};
