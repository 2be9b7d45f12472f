use crate::modules::notifications::port::{NotificationDispatch, NotificationRequest, NotifyError};
use tokio::sync::Mutex;

/// Records dispatched notifications; stands in for the serverless
/// collaborator in tests and the dev shell. `rejecting()` simulates an
/// unavailable collaborator so callers can prove the fire-and-forget path.
#[derive(Default)]
pub struct InMemoryNotifier {
    pub sent: Mutex<Vec<NotificationRequest>>,
    reject: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject: true,
        }
    }
}

#[async_trait::async_trait]
impl NotificationDispatch for InMemoryNotifier {
    async fn dispatch(&self, request: NotificationRequest) -> Result<(), NotifyError> {
        if self.reject {
            return Err(NotifyError::Unavailable("rejected by test double".into()));
        }
        self.sent.lock().await.push(request);
        Ok(())
    }
}
