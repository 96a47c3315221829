use std::rc::Rc;

use common::subject_observer::{NotifySummary, Observer, SharedObservers, Subject};
use log::{debug, warn};

use crate::PostId;

/// Subject raised when a new comment lands on a blog post.
///
/// Built once per comment: observers are attached right after construction,
/// a single notify cycle broadcasts the event to all of them, and the
/// subject is then discarded. `comment_text` and `post_id` never change
/// after construction.
pub struct AddedComment {
    observers: SharedObservers<Self>,
    comment_text: String,
    post_id: PostId,
}

impl AddedComment {
    pub fn new(comment_text: impl Into<String>, post_id: PostId) -> Self {
        AddedComment {
            observers: vec![],
            comment_text: comment_text.into(),
            post_id,
        }
    }

    pub fn comment_text(&self) -> &str {
        &self.comment_text
    }

    pub fn post_id(&self) -> PostId {
        self.post_id
    }
}

impl Subject for AddedComment {
    fn attach(&mut self, observer: Rc<dyn Observer<Self>>) -> &mut Self {
        if self.observers.iter().any(|obs| Rc::ptr_eq(obs, &observer)) {
            debug!("observer already attached for post {}", self.post_id);
        } else {
            self.observers.push(observer);
        }
        self
    }

    fn detach(&mut self, observer: Rc<dyn Observer<Self>>) {
        self.observers.retain(|obs| !Rc::ptr_eq(obs, &observer));
    }

    fn notify(&self) -> NotifySummary {
        let mut summary = NotifySummary::default();
        for obs in &self.observers {
            match obs.update(self) {
                Ok(()) => summary.record_delivery(),
                Err(error) => {
                    warn!("observer failed for post {}: {}", self.post_id, error);
                    summary.record_failure(error);
                }
            }
        }
        summary
    }
}
