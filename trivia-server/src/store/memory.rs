//! In-process store
//!
//! Holds questions and categories behind a `tokio::sync::RwLock`. Ids come
//! from a counter that only moves forward, so a deleted id is never reissued.
//! Used by `trivia serve --memory` and by the router tests.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, StoreResult, TriviaStore};
use crate::models::{Category, NewQuestion, Question};

const SEED_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

// (question, answer, category, difficulty)
const SEED_QUESTIONS: &[(&str, &str, i32, i32)] = &[
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

#[derive(Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    last_question_id: i32,
}

/// Store kept entirely in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// An empty store with no categories or questions.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the six standard categories and the starter questions.
    pub fn seeded() -> Self {
        let categories = SEED_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category {
                id,
                kind: (*kind).to_string(),
            })
            .collect();

        let questions: Vec<Question> = SEED_QUESTIONS
            .iter()
            .zip(1..)
            .map(|(&(question, answer, category, difficulty), id)| Question {
                id,
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            })
            .collect();

        let last_question_id = questions.last().map(|q| q.id).unwrap_or(0);

        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                last_question_id,
            }),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.tables.read().await;
        let mut categories = tables.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn category(&self, id: i32) -> StoreResult<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        // Insertion order is id order
        Ok(self.tables.read().await.questions.clone())
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.tables.write().await;
        tables.last_question_id += 1;
        let question = Question {
            id: tables.last_question_id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        let mut tables = self.tables.write().await;
        let index = tables
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| StoreError::question_not_found(id))?;
        tables.questions.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_question(text: &str) -> NewQuestion {
        NewQuestion {
            question: text.into(),
            answer: "answer".into(),
            category: 1,
            difficulty: 1,
        }
    }

    #[tokio::test]
    async fn seeded_store_has_standard_categories() {
        let store = MemoryStore::seeded();
        let categories = store.categories().await.unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(store.category(3).await.unwrap().unwrap().kind, "Geography");
        assert!(store.category(150).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn ids_are_never_reused() {
        let store = MemoryStore::new();
        let first = store.insert_question(new_question("first")).await.unwrap();
        store.delete_question(first.id).await.unwrap();
        let second = store.insert_question(new_question("second")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryStore::seeded();
        let err = store.delete_question(1000).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = MemoryStore::seeded();
        let found = store.search_questions("TITLE").await.unwrap();
        let ids: Vec<i32> = found.iter().map(|q| q.id).collect();
        // "entitled" and "title"
        assert_eq!(ids, vec![1, 5]);
    }

    #[tokio::test]
    async fn category_filter_keeps_id_order() {
        let store = MemoryStore::seeded();
        let art: Vec<i32> = store
            .questions_in_category(2)
            .await
            .unwrap()
            .iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(art, vec![12, 13, 14, 15]);
    }
}
