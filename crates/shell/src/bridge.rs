//! Page-to-host IPC bridge.
//!
//! The injected bridge script replaces `window.alert` and `window.confirm`
//! with shims that post a JSON message to the host. Alerts resume the page
//! immediately; confirms park a resolver under `window.__shellDialog` until
//! the host pushes the boolean back with a resolution script.

use policy::DialogRequest;
use serde::Deserialize;
use tracing::debug;

/// Initialization script installing the dialog shims.
///
/// The `confirm` shim returns a Promise, not a synchronous boolean: the IPC
/// bridge cannot block the page's script thread, so callers must await it. A
/// caller that tests the raw return value (`if (confirm(...))`) sees a truthy
/// Promise regardless of the choice.
pub const DIALOG_BRIDGE: &str = r#"
(function () {
    let nextId = 1;
    const pending = new Map();

    window.__shellDialog = {
        resolve(id, result) {
            const resolver = pending.get(id);
            if (resolver) {
                pending.delete(id);
                resolver(result);
            }
        }
    };

    window.alert = function (message) {
        window.ipc.postMessage(JSON.stringify({
            type: 'alert',
            message: String(message)
        }));
    };

    window.confirm = function (message) {
        const id = nextId++;
        window.ipc.postMessage(JSON.stringify({
            type: 'confirm',
            id: id,
            message: String(message)
        }));
        return new Promise((resolve) => pending.set(id, resolve));
    };
})();
"#;

/// Messages the page posts over the bridge.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BridgeMessage {
    Alert { message: String },
    Confirm { id: u64, message: String },
}

/// Events delivered to the main event loop.
#[derive(Debug)]
pub enum ShellEvent {
    /// A top-level navigation finished loading.
    NavigationCompleted,
    /// Page script raised a dialog.
    Dialog {
        request: DialogRequest,
        confirm_id: Option<u64>,
    },
}

/// Parse a raw IPC body. Anything that is not a dialog message is ignored.
pub fn parse_message(body: &str) -> Option<BridgeMessage> {
    match serde_json::from_str(body) {
        Ok(message) => Some(message),
        Err(_) => {
            debug!("Ignoring IPC message: {}", body);
            None
        }
    }
}

/// Script resuming a parked confirm with its boolean result.
pub fn confirm_resolution_script(id: u64, result: bool) -> String {
    format!("window.__shellDialog && window.__shellDialog.resolve({id}, {result});")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alert() {
        let message = parse_message(r#"{"type":"alert","message":"saved"}"#);
        assert_eq!(
            message,
            Some(BridgeMessage::Alert {
                message: "saved".to_string()
            })
        );
    }

    #[test]
    fn test_parse_confirm() {
        let message = parse_message(r#"{"type":"confirm","id":7,"message":"discard?"}"#);
        assert_eq!(
            message,
            Some(BridgeMessage::Confirm {
                id: 7,
                message: "discard?".to_string()
            })
        );
    }

    #[test]
    fn test_non_dialog_messages_ignored() {
        assert_eq!(parse_message(r##"{"type":"themeColor","value":"#fff"}"##), None);
        assert_eq!(parse_message("not json"), None);
    }

    #[test]
    fn test_resolution_script() {
        assert_eq!(
            confirm_resolution_script(7, true),
            "window.__shellDialog && window.__shellDialog.resolve(7, true);"
        );
        assert!(confirm_resolution_script(8, false).contains("resolve(8, false)"));
    }

    #[test]
    fn test_bridge_overrides_both_dialogs() {
        assert!(DIALOG_BRIDGE.contains("window.alert ="));
        assert!(DIALOG_BRIDGE.contains("window.confirm ="));
        assert!(DIALOG_BRIDGE.contains("__shellDialog"));
    }
}
