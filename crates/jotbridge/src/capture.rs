//! Submission value capture for dependent scenarios
//!
//! The update-with-optional-parameters scenario rewrites the name and email
//! answers of an existing submission, so it needs the question ids and
//! current values of that submission first. This module pulls them out of a
//! `getSubmission` envelope.
//!
//! Jotform keys the `answers` map by question number rendered as a string,
//! so ordering the keys must be numeric: "10" comes after "2", not before.

use serde_json::Value;

use crate::envelope::Envelope;
use crate::error::HarnessError;
use crate::properties::PropertyBag;

/// Values lifted from a fetched submission, passed as a direct input to the
/// update scenario (and mirrored into the property bag for fixture
/// placeholder expansion).
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionCapture {
    pub submission_new: String,
    pub first_question_id: String,
    pub second_question_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Sort answer keys in ascending numeric order.
///
/// Keys that do not parse as integers are a capture failure, not a silent
/// skip: a lexical fallback would reorder "10" before "2".
pub fn numeric_key_order<'a, I>(keys: I) -> Result<Vec<String>, HarnessError>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut question_ids = Vec::new();
    for key in keys {
        let id: u64 = key.parse().map_err(|_| HarnessError::Capture {
            reason: format!("answer key '{key}' is not numeric"),
        })?;
        question_ids.push(id);
    }
    question_ids.sort_unstable();
    Ok(question_ids.iter().map(u64::to_string).collect())
}

impl SubmissionCapture {
    /// Extract capture values from a successful `getSubmission` envelope.
    ///
    /// The first answer (numerically) must be a full-name control with a
    /// nested `answer` object holding `first` and `last`; the second must
    /// be an email control whose `answer` is a flat string.
    pub fn from_envelope(envelope: &Envelope) -> Result<Self, HarnessError> {
        let content = envelope.content_object()?;
        let submission_new = envelope.content_str("new")?.to_string();

        let answers = content
            .get("answers")
            .and_then(Value::as_object)
            .ok_or(HarnessError::MissingField {
                field: "content.answers".to_string(),
            })?;

        let ordered = numeric_key_order(answers.keys().collect::<Vec<_>>())?;
        if ordered.len() < 2 {
            return Err(HarnessError::Capture {
                reason: format!("expected at least 2 answers, got {}", ordered.len()),
            });
        }
        let first_question_id = ordered[0].clone();
        let second_question_id = ordered[1].clone();

        let first_answer = &answers[&first_question_id];
        let first_name = nested_answer_str(first_answer, &first_question_id, "first")?;
        let last_name = nested_answer_str(first_answer, &first_question_id, "last")?;

        let email = answers[&second_question_id]
            .get("answer")
            .and_then(Value::as_str)
            .ok_or(HarnessError::Capture {
                reason: format!("answer '{second_question_id}' has no flat 'answer' string"),
            })?
            .to_string();

        Ok(SubmissionCapture {
            submission_new,
            first_question_id,
            second_question_id,
            first_name,
            last_name,
            email,
        })
    }

    /// Mirror the captured values into the property bag under the keys the
    /// update fixtures reference.
    pub fn apply_to(&self, bag: &mut PropertyBag) {
        bag.set("submissionNew", &self.submission_new);
        bag.set("firstQuestionId", &self.first_question_id);
        bag.set("secondQuestionId", &self.second_question_id);
        bag.set("firstName", &self.first_name);
        bag.set("lastName", &self.last_name);
        bag.set("email", &self.email);
    }
}

fn nested_answer_str(answer: &Value, question_id: &str, field: &str) -> Result<String, HarnessError> {
    answer
        .get("answer")
        .and_then(|a| a.get(field))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(HarnessError::Capture {
            reason: format!("answer '{question_id}' has no nested 'answer.{field}'"),
        })
}
