use std::sync::{Mutex, MutexGuard};

use crate::entities::Modal;

#[derive(Debug, Clone, PartialEq)]
pub struct ModalOverlay {
    pub title: String,
    pub body: String,
}

/// Rendered page: the body markup plus an optional modal on top of it.
#[derive(Default)]
pub struct Document {
    body: Mutex<String>,
    modal: Mutex<Option<ModalOverlay>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body(&self) -> String {
        lock(&self.body).clone()
    }

    /// Replaces the whole body. Any open modal is closed.
    pub fn set_body(&self, markup: String) {
        *lock(&self.body) = markup;
        *lock(&self.modal) = None;
    }

    pub fn modal(&self) -> Option<ModalOverlay> {
        lock(&self.modal).clone()
    }

    /// Whether an element tagged `data-testid="{test_id}"` is rendered.
    pub fn has_test_id(&self, test_id: &str) -> bool {
        lock(&self.body).contains(&format!(r#"data-testid="{}""#, test_id))
    }

    /// Number of elements tagged `data-testid="{test_id}"`.
    pub fn count_test_id(&self, test_id: &str) -> usize {
        lock(&self.body)
            .matches(&format!(r#"data-testid="{}""#, test_id))
            .count()
    }
}

/// Modal capability that draws into a [`Document`].
pub struct DocumentModal {
    document: std::sync::Arc<Document>,
}

impl DocumentModal {
    pub fn new(document: std::sync::Arc<Document>) -> Self {
        Self { document }
    }
}

impl Modal for DocumentModal {
    fn show(&self, title: &str, body: &str) {
        *lock(&self.document.modal) = Some(ModalOverlay {
            title: title.into(),
            body: body.into(),
        });
    }

    fn hide(&self) {
        *lock(&self.document.modal) = None;
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
