mod log_gateway;

pub use log_gateway::{LogCounterStore, LogMailer};

use common::subject_observer::UpdateError;
use comments::PostId;
use strum::Display;
use thiserror::Error;

/// Recipients of a comment notification mail. Resolving the actual
/// addresses belongs to the mail subsystem behind the [`Mailer`] seam.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Audience {
    PostAuthor,
    OtherCommentators,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("mail delivery to {0} failed: {1}")]
    Delivery(Audience, String),
    #[error("comment count update failed for post {0}: {1}")]
    Storage(PostId, String),
}

impl From<GatewayError> for UpdateError {
    fn from(error: GatewayError) -> Self {
        UpdateError(error.to_string())
    }
}

/// Outbound mail seam. The real delivery subsystem lives outside this
/// crate; notifiers only hand over the audience and the composed body.
pub trait Mailer {
    fn send(&self, audience: Audience, post_id: PostId, body: &str) -> Result<(), GatewayError>;
}

/// Persistence seam for the per-post comment counter.
pub trait CounterStore {
    fn increment_comment_count(&self, post_id: PostId) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use common::subject_observer::UpdateError;

    use super::{Audience, GatewayError};

    #[test]
    fn test_audience_display() {
        assert_eq!("post-author", Audience::PostAuthor.to_string());
        assert_eq!("other-commentators", Audience::OtherCommentators.to_string());
    }

    #[test]
    fn test_gateway_error_converts_into_update_error() {
        // Given
        let error = GatewayError::Storage(123, "store is down".to_string());

        // When
        let update_error: UpdateError = error.into();

        // Then
        assert_eq!(
            UpdateError("comment count update failed for post 123: store is down".to_string()),
            update_error
        );
    }
}
