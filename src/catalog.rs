use crate::logger;
use crate::models::{Catalog, ItemId};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no tests")]
    EmptyCatalog,
    #[error("test {0} has no questions")]
    EmptyTest(ItemId),
    #[error("duplicate test id {0}")]
    DuplicateTest(ItemId),
    #[error("test {test} has duplicate question id {question}")]
    DuplicateQuestion { test: ItemId, question: ItemId },
    #[error("question {question} has duplicate option id {option}")]
    DuplicateOption { question: ItemId, option: ItemId },
    #[error("question {question} names unknown correct answer {answer}")]
    UnknownCorrectAnswer { question: ItemId, answer: ItemId },
}

pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match parse_catalog(&content) {
        Ok(catalog) => {
            logger::log(&format!(
                "Loaded {} tests from {}",
                catalog.len(),
                path.display()
            ));
            Ok(catalog)
        }
        Err(e) => {
            logger::log(&format!("Rejected catalog {}: {}", path.display(), e));
            Err(e)
        }
    }
}

pub fn parse_catalog(content: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_str(content)?;
    check_catalog(&catalog)?;
    Ok(catalog)
}

/// Referential checks done once at load so the session never meets a test
/// without questions or an answer key pointing nowhere.
fn check_catalog(catalog: &Catalog) -> Result<(), CatalogError> {
    if catalog.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    let mut test_ids = HashSet::new();
    for test in &catalog.tests {
        if !test_ids.insert(&test.id) {
            return Err(CatalogError::DuplicateTest(test.id.clone()));
        }
        if test.questions.is_empty() {
            return Err(CatalogError::EmptyTest(test.id.clone()));
        }

        let mut question_ids = HashSet::new();
        for question in &test.questions {
            if !question_ids.insert(&question.id) {
                return Err(CatalogError::DuplicateQuestion {
                    test: test.id.clone(),
                    question: question.id.clone(),
                });
            }

            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(&option.id) {
                    return Err(CatalogError::DuplicateOption {
                        question: question.id.clone(),
                        option: option.id.clone(),
                    });
                }
            }

            if !question.has_option(&question.correct_answer) {
                return Err(CatalogError::UnknownCorrectAnswer {
                    question: question.id.clone(),
                    answer: question.correct_answer.clone(),
                });
            }
        }
    }

    Ok(())
}
