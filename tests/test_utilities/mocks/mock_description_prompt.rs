use explainer::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock DescriptionPrompt for testing that returns a canned answer and
/// records the questions it was asked
#[derive(Clone)]
pub struct MockDescriptionPrompt {
    answer: Option<String>,
    questions: Arc<Mutex<Vec<String>>>,
}

impl MockDescriptionPrompt {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            answer: None,
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

impl DescriptionPrompt for MockDescriptionPrompt {
    fn ask(&self, question: &str) -> Result<String> {
        self.questions.lock().unwrap().push(question.to_string());
        match &self.answer {
            Some(answer) => Ok(answer.clone()),
            None => anyhow::bail!("Failed to read description from stdin (mock failure)"),
        }
    }
}
