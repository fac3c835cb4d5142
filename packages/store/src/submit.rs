use crate::StoreError;
use pegboard_model::Node;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Payload posted to the submission endpoint when a public-view form is
/// sent: the form's title plus the current field values keyed by field
/// name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    pub form_title: String,
    #[serde(rename = "formData")]
    pub fields: BTreeMap<String, String>,
}

impl FormSubmission {
    /// Serialize the state of a rendered form: every field child of the
    /// form node, paired with whatever value the visitor entered. Fields
    /// without a value submit empty.
    pub fn from_form(form: &Node, values: &BTreeMap<String, String>) -> Self {
        let mut fields = BTreeMap::new();
        for child in &form.children {
            let Some(props) = &child.field else { continue };
            let Some(name) = &props.name else { continue };
            let value = values.get(name).cloned().unwrap_or_default();
            fields.insert(name.clone(), value);
        }
        Self {
            form_title: if form.content.is_empty() {
                "Form".to_string()
            } else {
                form.content.clone()
            },
            fields,
        }
    }
}

/// The outbound side of form handling. Success or failure is surfaced to
/// the visitor as a transient message by the caller; nothing is retried
/// here.
pub trait FormSubmitter {
    fn submit(&self, submission: &FormSubmission) -> Result<(), StoreError>;
}

/// Records submissions for tests.
#[derive(Default)]
pub struct MemorySubmitter {
    pub submissions: RefCell<Vec<FormSubmission>>,
}

impl MemorySubmitter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormSubmitter for MemorySubmitter {
    fn submit(&self, submission: &FormSubmission) -> Result<(), StoreError> {
        self.submissions.borrow_mut().push(submission.clone());
        Ok(())
    }
}
