use common::subject_observer::{Observer, UpdateError};
use comments::AddedComment;

use crate::gateways::{Audience, Mailer};

/// Emails everyone who previously commented on the same post.
pub struct EmailOtherCommentators<M> {
    mailer: M,
}

impl<M: Mailer> EmailOtherCommentators<M> {
    pub fn new(mailer: M) -> Self {
        EmailOtherCommentators { mailer }
    }
}

impl<M: Mailer> Observer<AddedComment> for EmailOtherCommentators<M> {
    fn update(&self, source: &AddedComment) -> Result<(), UpdateError> {
        let body = format!(
            "Someone also commented on post {} with: \"{}\"",
            source.post_id(),
            source.comment_text()
        );
        self.mailer
            .send(Audience::OtherCommentators, source.post_id(), &body)?;
        Ok(())
    }
}
