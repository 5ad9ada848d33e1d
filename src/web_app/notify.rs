// web_app/notify.rs - Notification surface
//
// Components receive a `Notifier` instead of reaching for a global toast
// channel. In the browser this is the `ToastContext`; tests pass a
// recorder or a closure.

use crate::web_app::model::Toast;

/// Accepts transient, non-blocking user notifications
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

impl<F> Notifier for F
where
    F: Fn(Toast),
{
    fn notify(&self, toast: Toast) {
        self(toast)
    }
}
