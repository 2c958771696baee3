// tests/support/mocks/notifier.rs
use litreview::application::ports::notifications::{Notice, NoticeLevel, NotificationSink};
use std::sync::Mutex;

#[derive(Default)]
pub struct CapturingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl CapturingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn levels(&self) -> Vec<NoticeLevel> {
        self.notices().into_iter().map(|n| n.level).collect()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices().last().cloned()
    }
}

impl NotificationSink for CapturingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}
