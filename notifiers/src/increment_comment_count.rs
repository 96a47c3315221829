use common::subject_observer::{Observer, UpdateError};
use comments::AddedComment;

use crate::gateways::CounterStore;

/// Bumps the persisted comment count of the post the comment was added to.
pub struct IncrementCommentCount<C> {
    store: C,
}

impl<C: CounterStore> IncrementCommentCount<C> {
    pub fn new(store: C) -> Self {
        IncrementCommentCount { store }
    }
}

impl<C: CounterStore> Observer<AddedComment> for IncrementCommentCount<C> {
    fn update(&self, source: &AddedComment) -> Result<(), UpdateError> {
        self.store.increment_comment_count(source.post_id())?;
        Ok(())
    }
}
