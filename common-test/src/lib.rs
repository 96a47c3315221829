use std::{cell::RefCell, rc::Rc};

use common::subject_observer::{Observer, Subject, UpdateError};

/// Shared journal test observers append their label to, so a test can
/// assert invocation order across several observer instances.
pub type Journal = Rc<RefCell<Vec<String>>>;

pub fn new_journal() -> Journal {
    Rc::new(RefCell::new(vec![]))
}

pub fn journal_entries(journal: &Journal) -> Vec<String> {
    journal.borrow().clone()
}

/// Observer that records its label on every update and always succeeds.
pub struct RecordingObserver {
    label: String,
    journal: Journal,
}

impl RecordingObserver {
    pub fn new(label: impl Into<String>, journal: &Journal) -> Rc<Self> {
        Rc::new(RecordingObserver {
            label: label.into(),
            journal: Rc::clone(journal),
        })
    }
}

impl<S: Subject> Observer<S> for RecordingObserver {
    fn update(&self, _source: &S) -> Result<(), UpdateError> {
        self.journal.borrow_mut().push(self.label.clone());
        Ok(())
    }
}

/// Observer that records its label on every update, then fails.
pub struct FailingObserver {
    label: String,
    journal: Journal,
}

impl FailingObserver {
    pub fn new(label: impl Into<String>, journal: &Journal) -> Rc<Self> {
        Rc::new(FailingObserver {
            label: label.into(),
            journal: Rc::clone(journal),
        })
    }
}

impl<S: Subject> Observer<S> for FailingObserver {
    fn update(&self, _source: &S) -> Result<(), UpdateError> {
        self.journal.borrow_mut().push(self.label.clone());
        Err(UpdateError(format!("{} is unreachable", self.label)))
    }
}
