use shared_types::AppError;
use shared_ui::{ToastOptions, Toasts};

/// Log a failed action and tell the user with a toast.
pub fn report_failure(toast: Toasts, action: &str, err: &AppError) {
    tracing::error!(action, error = %err, "Action failed");
    toast.error(err.friendly_message(), ToastOptions::new());
}

pub fn report_success(toast: Toasts, message: impl Into<String>) {
    toast.success(message.into(), ToastOptions::new());
}
