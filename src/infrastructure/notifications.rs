use crate::application::ports::notifications::{Notice, NoticeLevel, NotificationSink};

/// Emits notices as log events.
#[derive(Default, Clone)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, notice: Notice) {
        let description = notice.description.as_deref().unwrap_or_default();
        match notice.level {
            NoticeLevel::Info => tracing::info!(title = %notice.title, description, "notice"),
            NoticeLevel::Warning => tracing::warn!(title = %notice.title, description, "notice"),
            NoticeLevel::Error => tracing::error!(title = %notice.title, description, "notice"),
        }
    }
}
