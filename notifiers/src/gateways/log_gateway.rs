use comments::PostId;
use log::info;

use super::{Audience, CounterStore, GatewayError, Mailer};

/// Mailer that traces the mail it would send through the log facade.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, audience: Audience, post_id: PostId, body: &str) -> Result<(), GatewayError> {
        info!("[mail:{audience}] post {post_id}: {body}");
        Ok(())
    }
}

/// Counter store that traces the increment it would persist.
pub struct LogCounterStore;

impl CounterStore for LogCounterStore {
    fn increment_comment_count(&self, post_id: PostId) -> Result<(), GatewayError> {
        info!("comment_count += 1 for post {post_id}");
        Ok(())
    }
}
