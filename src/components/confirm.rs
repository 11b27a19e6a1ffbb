use dioxus::prelude::*;

use crate::styles::combinations::*;

/// Delete-confirmation dialog state. At most one target is captured at a
/// time; the trigger is only rendered while the dialog is closed, so
/// opening while open is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Confirming { id: u32 },
}

impl DeleteDialog {
    /// Capture a target and open the dialog.
    pub fn request(&mut self, id: u32) {
        *self = DeleteDialog::Confirming { id };
    }

    /// Close without side effects, discarding any captured target.
    pub fn cancel(&mut self) {
        *self = DeleteDialog::Closed;
    }

    /// Close and yield the captured target. Yields at most once per
    /// capture: the transition to `Closed` happens before the caller can
    /// act on the id.
    pub fn confirm(&mut self) -> Option<u32> {
        match *self {
            DeleteDialog::Confirming { id } => {
                *self = DeleteDialog::Closed;
                Some(id)
            }
            DeleteDialog::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DeleteDialog::Confirming { .. })
    }
}

#[component]
pub fn ConfirmDialog(
    title: String,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/40",
            div {
                class: "bg-white rounded-lg shadow-lg w-full max-w-md p-6",
                h3 {
                    class: "text-lg font-semibold text-gray-900 mb-2",
                    "Delete {title}?"
                }
                p {
                    class: "text-sm text-gray-600 mb-6",
                    "This action cannot be undone."
                }
                div {
                    class: "flex justify-end gap-3",
                    button {
                        class: BUTTON_SECONDARY,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: BUTTON_DANGER,
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_captures_target() {
        let mut dialog = DeleteDialog::default();
        assert!(!dialog.is_open());

        dialog.request(42);
        assert!(dialog.is_open());
        assert_eq!(dialog, DeleteDialog::Confirming { id: 42 });
    }

    #[test]
    fn test_cancel_discards_target() {
        let mut dialog = DeleteDialog::default();
        dialog.request(42);

        dialog.cancel();
        assert_eq!(dialog, DeleteDialog::Closed);
        // Nothing left to confirm after a cancel.
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn test_confirm_yields_captured_id_once() {
        let mut dialog = DeleteDialog::default();
        dialog.request(42);

        assert_eq!(dialog.confirm(), Some(42));
        assert_eq!(dialog, DeleteDialog::Closed);
        assert_eq!(dialog.confirm(), None);
    }

    #[test]
    fn test_new_capture_replaces_previous_target() {
        let mut dialog = DeleteDialog::default();
        dialog.request(1);
        dialog.cancel();
        dialog.request(2);
        assert_eq!(dialog.confirm(), Some(2));
    }
}
