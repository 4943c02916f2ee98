//! In-memory form and submission store backing the stub gateway
//!
//! Seeded deterministically so the verification suite can run against a
//! fresh gateway with the default connector properties: the seed ids equal
//! the `jotbridge::properties::defaults` constants.

use std::collections::BTreeMap;

use jotbridge::properties::defaults;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::http::common::ConnectorRequest;

#[derive(Debug, Clone, PartialEq)]
pub struct FormRecord {
    pub id: String,
    pub title: String,
    pub status: String,
    pub created_at: String,
}

impl FormRecord {
    pub fn to_content(&self) -> Value {
        json!({
            "id": self.id,
            "title": self.title,
            "status": self.status,
            "created_at": self.created_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionRecord {
    pub id: String,
    pub form_id: String,
    /// Unread flag, "1" or "0". Jotform keeps it as a string.
    pub new: String,
    pub created_at: String,
    /// Answers keyed by question number rendered as a string.
    pub answers: BTreeMap<String, Value>,
}

impl SubmissionRecord {
    pub fn to_content(&self) -> Value {
        json!({
            "id": self.id,
            "form_id": self.form_id,
            "new": self.new,
            "created_at": self.created_at,
            "answers": self.answers,
        })
    }
}

pub struct ConnectorStore {
    forms: BTreeMap<String, FormRecord>,
    submissions: BTreeMap<String, SubmissionRecord>,
}

impl ConnectorStore {
    pub fn seeded() -> Self {
        let mut forms = BTreeMap::new();
        forms.insert(
            defaults::FORM_ID.to_string(),
            FormRecord {
                id: defaults::FORM_ID.to_string(),
                title: "Customer Feedback".to_string(),
                status: "ENABLED".to_string(),
                created_at: "2024-03-18 09:24:11".to_string(),
            },
        );

        let mut submissions = BTreeMap::new();
        // Question ids straddle the 10 boundary so a lexical ordering of
        // the keys would pick the wrong "first" answer.
        let seeded_answers: BTreeMap<String, Value> = [
            (
                "2".to_string(),
                json!({
                    "text": "Name",
                    "type": "control_fullname",
                    "answer": {"first": "Jan", "last": "Novak"},
                }),
            ),
            (
                "3".to_string(),
                json!({
                    "text": "E-mail",
                    "type": "control_email",
                    "answer": "jan.novak@example.com",
                }),
            ),
            (
                "10".to_string(),
                json!({
                    "text": "Comments",
                    "type": "control_textarea",
                    "answer": "Works as expected.",
                }),
            ),
        ]
        .into();
        submissions.insert(
            defaults::SUBMISSION_ID.to_string(),
            SubmissionRecord {
                id: defaults::SUBMISSION_ID.to_string(),
                form_id: defaults::FORM_ID.to_string(),
                new: "1".to_string(),
                created_at: "2024-03-19 14:02:37".to_string(),
                answers: seeded_answers,
            },
        );
        submissions.insert(
            "5810637521126235968".to_string(),
            SubmissionRecord {
                id: "5810637521126235968".to_string(),
                form_id: defaults::FORM_ID.to_string(),
                new: "0".to_string(),
                created_at: "2024-03-20 08:15:09".to_string(),
                answers: [(
                    "2".to_string(),
                    json!({
                        "text": "Name",
                        "type": "control_fullname",
                        "answer": {"first": "Mia", "last": "Larsen"},
                    }),
                )]
                .into(),
            },
        );

        ConnectorStore { forms, submissions }
    }

    pub fn form(&self, id: &str) -> Option<&FormRecord> {
        self.forms.get(id)
    }

    pub fn submission(&self, id: &str) -> Option<&SubmissionRecord> {
        self.submissions.get(id)
    }

    pub fn all_submissions(&self) -> Vec<&SubmissionRecord> {
        self.submissions.values().collect()
    }

    pub fn form_submissions(&self, form_id: &str) -> Vec<&SubmissionRecord> {
        self.submissions
            .values()
            .filter(|s| s.form_id == form_id)
            .collect()
    }

    /// Clone a form under a fresh id. Returns the clone, or `None` when the
    /// source form does not exist.
    pub fn clone_form(&mut self, form_id: &str) -> Option<FormRecord> {
        let source = self.forms.get(form_id)?;
        let clone = FormRecord {
            id: Uuid::new_v4().simple().to_string(),
            title: format!("Clone of {}", source.title),
            status: source.status.clone(),
            created_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };
        self.forms.insert(clone.id.clone(), clone.clone());
        Some(clone)
    }

    /// Apply an update request to a stored submission. Returns the updated
    /// record, or `None` when the submission does not exist. Question ids
    /// the submission does not have are ignored, as the upstream API
    /// ignores writes to unknown fields.
    pub fn update_submission(
        &mut self,
        submission_id: &str,
        request: &ConnectorRequest,
    ) -> Option<&SubmissionRecord> {
        let submission = self.submissions.get_mut(submission_id)?;

        if let Some(new) = &request.new {
            submission.new = new.clone();
        }
        if let Some(question_id) = &request.first_question_id {
            if let Some(answer) = submission.answers.get_mut(question_id) {
                if let Some(first_name) = &request.first_name {
                    answer["answer"]["first"] = json!(first_name);
                }
                if let Some(last_name) = &request.last_name {
                    answer["answer"]["last"] = json!(last_name);
                }
            }
        }
        if let Some(question_id) = &request.second_question_id {
            if let Some(answer) = submission.answers.get_mut(question_id) {
                if let Some(email) = &request.email {
                    answer["answer"] = json!(email);
                }
            }
        }

        Some(&*submission)
    }
}
