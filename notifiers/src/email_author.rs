use common::subject_observer::{Observer, UpdateError};
use comments::AddedComment;

use crate::gateways::{Audience, Mailer};

/// Emails the author of the post the new comment was added to.
pub struct EmailAuthor<M> {
    mailer: M,
}

impl<M: Mailer> EmailAuthor<M> {
    pub fn new(mailer: M) -> Self {
        EmailAuthor { mailer }
    }
}

impl<M: Mailer> Observer<AddedComment> for EmailAuthor<M> {
    fn update(&self, source: &AddedComment) -> Result<(), UpdateError> {
        let body = format!(
            "Someone commented on your post {} with: \"{}\"",
            source.post_id(),
            source.comment_text()
        );
        self.mailer
            .send(Audience::PostAuthor, source.post_id(), &body)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use common::subject_observer::Observer;
    use comments::AddedComment;
    use mockall::mock;

    use crate::gateways::{Audience, GatewayError, Mailer};

    use super::EmailAuthor;

    mock! {
        TestMailer {}

        impl Mailer for TestMailer {
            fn send(
                &self,
                audience: Audience,
                post_id: comments::PostId,
                body: &str,
            ) -> Result<(), GatewayError>;
        }
    }

    #[test]
    fn test_update_should_mail_the_post_author() {
        // Given
        let added_comment = AddedComment::new("hello, world", 123);
        let mut mailer = MockTestMailer::new();
        mailer
            .expect_send()
            .times(1)
            .withf(|audience, &post_id, body| {
                *audience == Audience::PostAuthor
                    && post_id == 123
                    && body == "Someone commented on your post 123 with: \"hello, world\""
            })
            .returning(|_, _, _| Ok(()));

        // When
        let result = EmailAuthor::new(mailer).update(&added_comment);

        // Then
        assert!(result.is_ok());
    }

    #[test]
    fn test_update_should_surface_a_delivery_failure() {
        // Given
        let added_comment = AddedComment::new("hello, world", 123);
        let mut mailer = MockTestMailer::new();
        mailer.expect_send().times(1).returning(|audience, _, _| {
            Err(GatewayError::Delivery(audience, "smtp timeout".to_string()))
        });

        // When
        let result = EmailAuthor::new(mailer).update(&added_comment);

        // Then
        assert!(
            matches!(result, Err(error) if error.0.contains("smtp timeout")),
            "Should convert the gateway error into an update error"
        );
    }
}
