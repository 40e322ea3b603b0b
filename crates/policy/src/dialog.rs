//! JavaScript dialog semantics.

/// The kinds of JavaScript dialog the page can raise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    /// `window.alert`: one acknowledgement button, always resumes.
    Alert,
    /// `window.confirm`: OK/Cancel, resumes with a boolean.
    Confirm,
}

/// The button chosen on a confirm dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmChoice {
    Ok,
    Cancel,
}

/// A dialog raised by page script, awaiting presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogRequest {
    pub kind: DialogKind,
    pub message: String,
}

impl DialogRequest {
    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Alert,
            message: message.into(),
        }
    }

    pub fn confirm(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Confirm,
            message: message.into(),
        }
    }
}

/// Map a confirm choice to the boolean handed back to page script.
pub fn confirm_result(choice: ConfirmChoice) -> bool {
    choice == ConfirmChoice::Ok
}
