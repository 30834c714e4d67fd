use std::sync::{Arc, Mutex};

use shellcmd::report::Reporter;

/// One notification captured by [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info(String),
    Error(String),
}

/// Reporter that keeps every notification, in order, for later assertions.
///
/// Cloning shares the underlying log, so a test can hand one clone to a
/// runner and inspect another.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    log: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle suitable for `CommandRunner::new`.
    pub fn shared(&self) -> Arc<dyn Reporter> {
        Arc::new(self.clone())
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.log.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Info(msg) => Some(msg),
                Notification::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Error(msg) => Some(msg),
                Notification::Info(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, msg: &str) {
        self.log
            .lock()
            .unwrap()
            .push(Notification::Info(msg.to_string()));
    }

    fn error(&self, msg: &str) {
        self.log
            .lock()
            .unwrap()
            .push(Notification::Error(msg.to_string()));
    }
}
