//! Unit tests for industries, questions and documents

use bson::oid::ObjectId;

use crate::domain::entities::{Document, Industry, Question};
use crate::errors::ValidationError;

#[test]
fn test_industry_name_is_lowercased() {
    let industry = Industry::new("Mining").unwrap();
    assert_eq!(industry.name, "mining");
    assert_eq!(Industry::new(" ").unwrap_err(), ValidationError::invalid("name"));
}

#[test]
fn test_question_requires_text() {
    let industry_id = ObjectId::new();
    let question = Question::new(industry_id, "Why mining?").unwrap();
    assert_eq!(question.industry_id, industry_id);
    assert_eq!(
        Question::new(industry_id, "").unwrap_err(),
        ValidationError::invalid("question")
    );
}

#[test]
fn test_document_requires_all_text_fields() {
    let owner = ObjectId::new();
    assert!(Document::new(owner, "/docs/cv.pdf", "cv", "recruit").is_ok());
    assert_eq!(
        Document::new(owner, "", "cv", "recruit").unwrap_err(),
        ValidationError::invalid("url")
    );
    assert_eq!(
        Document::new(owner, "/docs/cv.pdf", "cv", "").unwrap_err(),
        ValidationError::invalid("owner_type")
    );
}
