use std::rc::Rc;

use thiserror::Error;

/// Failure raised by a single observer while handling an update.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct UpdateError(pub String);

pub trait Observer<S: Subject> {
    fn update(&self, source: &S) -> Result<(), UpdateError>;
}

pub type SharedObservers<S> = Vec<Rc<dyn Observer<S>>>;

pub trait Subject: Sized {
    /// Registers an observer, keyed by instance identity. Attaching the
    /// same instance twice is a no-op.
    fn attach(&mut self, observer: Rc<dyn Observer<Self>>) -> &mut Self;

    /// Removes an observer by identity. Detaching an instance that was
    /// never attached is a no-op.
    fn detach(&mut self, observer: Rc<dyn Observer<Self>>);

    /// Calls `update` on every attached observer, in attachment order.
    /// A failing observer never prevents the remaining ones from running.
    fn notify(&self) -> NotifySummary;
}

/// Outcome of one notify cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifySummary {
    pub delivered: usize,
    pub failures: Vec<UpdateError>,
}

impl NotifySummary {
    pub fn record_delivery(&mut self) {
        self.delivered += 1;
    }

    pub fn record_failure(&mut self, error: UpdateError) {
        self.failures.push(error);
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{NotifySummary, UpdateError};

    #[test]
    fn test_notify_summary_is_complete() {
        // Given
        let mut summary = NotifySummary::default();
        summary.record_delivery();

        // Then
        assert!(
            summary.is_complete(),
            "Should be complete when no failure was recorded"
        );

        // When
        summary.record_failure(UpdateError("mail gateway unreachable".to_string()));

        // Then
        assert!(
            !summary.is_complete(),
            "Should not be complete once a failure was recorded"
        );
        assert_eq!(1, summary.delivered);
        assert_eq!(1, summary.failures.len());
    }
}
