//! JavaScript dialog presentation.

use policy::{confirm_result, ConfirmChoice, DialogKind, DialogRequest};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::debug;

use crate::bridge::confirm_resolution_script;

/// Presents modal dialogs to the user.
///
/// Alerts block until acknowledged and always resume the caller; confirms
/// block until one of OK/Cancel is chosen.
pub trait DialogPresenter {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> ConfirmChoice;
}

/// Native modal dialogs.
pub struct RfdPresenter;

impl DialogPresenter for RfdPresenter {
    fn alert(&self, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Alert")
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn confirm(&self, message: &str) -> ConfirmChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title("Confirm")
            .set_description(message)
            .set_buttons(MessageButtons::OkCancel)
            .show();
        match result {
            MessageDialogResult::Ok => ConfirmChoice::Ok,
            _ => ConfirmChoice::Cancel,
        }
    }
}

/// Routes dialog requests from the bridge to a presenter.
pub struct DialogController {
    presenter: Box<dyn DialogPresenter>,
}

impl DialogController {
    pub fn new(presenter: Box<dyn DialogPresenter>) -> Self {
        Self { presenter }
    }

    /// Controller backed by native modal dialogs.
    pub fn with_native_dialogs() -> Self {
        Self::new(Box::new(RfdPresenter))
    }

    /// Present a dialog. For confirms, returns the script that resumes the
    /// page with the chosen boolean; alerts resume on their own.
    pub fn handle(&self, request: &DialogRequest, confirm_id: Option<u64>) -> Option<String> {
        debug!("Presenting {:?} dialog", request.kind);
        match request.kind {
            DialogKind::Alert => {
                self.presenter.alert(&request.message);
                None
            }
            DialogKind::Confirm => {
                let choice = self.presenter.confirm(&request.message);
                confirm_id.map(|id| confirm_resolution_script(id, confirm_result(choice)))
            }
        }
    }
}
