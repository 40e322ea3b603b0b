//! Embedded browser surface.
//!
//! Hosts the system webview inside the application window and relays its
//! events to the policy controller. The surface loads the fixed entry URL
//! exactly once; every later top-level load happens only as directed by
//! policy.

use std::sync::Arc;

use parking_lot::Mutex;
use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::{debug, info, warn};
use wry::{PageLoadEvent, WebContext, WebView, WebViewBuilder};

use common::{ShellError, ShellResult};
use inject::{ButtonFinderConfig, CleanupConfig};
use policy::{DialogRequest, NavigationDecision, NavigationKind, NewWindowDecision, PolicyConfig};

use crate::bridge::{self, BridgeMessage, ShellEvent, DIALOG_BRIDGE};
use crate::platform::ExternalOpener;
use crate::ENTRY_URL;

/// GitHub dark fill, shown until the page paints.
pub const BACKGROUND_COLOR: (u8, u8, u8, u8) = (13, 17, 23, 255);

/// Embedded browser surface configuration.
#[derive(Clone, Debug)]
pub struct SurfaceConfig {
    /// Target URL, loaded once at construction.
    pub url: String,
    /// Whether the shell injects its script payloads. The system webview
    /// always executes the page's own script; it exposes no toggle for that.
    pub javascript_enabled: bool,
    /// Initial background fill.
    pub background_color: (u8, u8, u8, u8),
    /// Whether the webview devtools are available.
    pub devtools: bool,
}

impl SurfaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: &str) -> Self {
        self.url = url.to_string();
        self
    }

    pub fn with_javascript(mut self, enabled: bool) -> Self {
        self.javascript_enabled = enabled;
        self
    }

    pub fn with_devtools(mut self, enabled: bool) -> Self {
        self.devtools = enabled;
        self
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            url: ENTRY_URL.to_string(),
            javascript_enabled: true,
            background_color: BACKGROUND_COLOR,
            devtools: false,
        }
    }
}

/// Classifies raw navigation callbacks, which carry only a URL.
///
/// The first callback is the load of the entry URL. While a load is still in
/// flight, further callbacks are redirect legs of that load (server 302s,
/// auth round-trips), not user activity, and must never be externalized. Once
/// a load has finished, a callback for the current document is a reload and
/// anything else was user activated. The engine does not report the real
/// activation type, so a scripted location change after load completion is
/// indistinguishable from a click; the heuristic biases toward Allow
/// everywhere else.
#[derive(Debug, Default)]
pub struct NavigationTracker {
    current: Option<String>,
    loading: bool,
}

impl NavigationTracker {
    pub fn classify(&self, url: &str) -> NavigationKind {
        match &self.current {
            None => NavigationKind::InitialLoad,
            Some(_) if self.loading => NavigationKind::Other,
            Some(current) if current == url => NavigationKind::Reload,
            Some(_) => NavigationKind::LinkActivated,
        }
    }

    pub fn record_allowed(&mut self, url: &str) {
        self.current = Some(url.to_string());
        self.loading = true;
    }

    pub fn record_load_finished(&mut self) {
        self.loading = false;
    }
}

/// Decide and act on a raw navigation callback. Returns whether the engine
/// should proceed with the in-app load.
fn handle_navigation(
    policy: &PolicyConfig,
    tracker: &Mutex<NavigationTracker>,
    opener: &dyn ExternalOpener,
    url: &str,
) -> bool {
    let kind = tracker.lock().classify(url);
    match policy.decide_navigation(kind, url) {
        NavigationDecision::Allow => {
            debug!("Navigation allowed ({:?}): {}", kind, url);
            tracker.lock().record_allowed(url);
            true
        }
        NavigationDecision::CancelAndOpenExternally => {
            info!("Externalizing link: {}", url);
            opener.open(url);
            false
        }
    }
}

/// The document-end scripts and their injection scope (`true` = main frame
/// only). The dialog bridge must stay main-frame-only: confirm resolution
/// runs through `evaluate_script`, which reaches the main frame only, so a
/// resolver parked in a subframe could never be resumed.
fn initialization_scripts(cleanup: &CleanupConfig) -> Vec<(String, bool)> {
    vec![
        (DIALOG_BRIDGE.to_string(), true),
        (cleanup.document_end_script(), false),
    ]
}

/// Handle a new-window request. Never creates an in-app surface.
fn handle_new_window(policy: &PolicyConfig, opener: &dyn ExternalOpener, url: &str) -> bool {
    let NewWindowDecision::OpenExternally = policy.decide_new_window(url);
    info!("New window request -> default browser: {}", url);
    opener.open(url);
    false
}

/// The embedded browser surface.
pub struct Surface {
    webview: WebView,
    post_navigation_script: String,
    button_script: String,
    javascript_enabled: bool,
}

impl Surface {
    /// Build the surface inside the given window and load the entry URL.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        window: &Window,
        config: SurfaceConfig,
        policy: PolicyConfig,
        cleanup: CleanupConfig,
        buttons: ButtonFinderConfig,
        opener: Arc<dyn ExternalOpener>,
        web_context: &mut WebContext,
        proxy: EventLoopProxy<ShellEvent>,
    ) -> ShellResult<Self> {
        let tracker = Arc::new(Mutex::new(NavigationTracker::default()));

        let nav_policy = policy.clone();
        let nav_opener = Arc::clone(&opener);
        let nav_tracker = Arc::clone(&tracker);
        let win_policy = policy;
        let win_opener = opener;
        let load_tracker = Arc::clone(&tracker);
        let load_proxy = proxy.clone();
        let ipc_proxy = proxy;

        let mut builder = WebViewBuilder::with_web_context(web_context)
            .with_url(&config.url)
            .with_background_color(config.background_color)
            .with_devtools(config.devtools)
            .with_navigation_handler(move |url| {
                handle_navigation(&nav_policy, &nav_tracker, nav_opener.as_ref(), &url)
            })
            .with_new_window_req_handler(move |url| {
                handle_new_window(&win_policy, win_opener.as_ref(), &url)
            })
            .with_on_page_load_handler(move |event, url| {
                if let PageLoadEvent::Finished = event {
                    debug!("Navigation completed: {}", url);
                    load_tracker.lock().record_load_finished();
                    let _ = load_proxy.send_event(ShellEvent::NavigationCompleted);
                }
            })
            .with_ipc_handler(move |message| match bridge::parse_message(message.body()) {
                Some(BridgeMessage::Alert { message }) => {
                    let _ = ipc_proxy.send_event(ShellEvent::Dialog {
                        request: DialogRequest::alert(message),
                        confirm_id: None,
                    });
                }
                Some(BridgeMessage::Confirm { id, message }) => {
                    let _ = ipc_proxy.send_event(ShellEvent::Dialog {
                        request: DialogRequest::confirm(message),
                        confirm_id: Some(id),
                    });
                }
                // Any other page message is a deliberate no-op.
                None => {}
            });

        if config.javascript_enabled {
            for (script, main_only) in initialization_scripts(&cleanup) {
                builder = builder.with_initialization_script_for_main_only(&script, main_only);
            }
        }

        let webview = builder
            .build(window)
            .map_err(|err| ShellError::surface(err.to_string()))?;

        Ok(Self {
            webview,
            post_navigation_script: cleanup.post_navigation_script(),
            button_script: buttons.script(),
            javascript_enabled: config.javascript_enabled,
        })
    }

    /// Evaluate script in page context, discarding the result.
    pub fn evaluate(&self, script: &str) {
        if let Err(err) = self.webview.evaluate_script(script) {
            warn!("Script evaluation failed: {}", err);
        }
    }

    /// Run the cosmetic payloads scheduled after a completed navigation.
    pub fn apply_post_navigation(&self) {
        if !self.javascript_enabled {
            return;
        }
        self.evaluate(&self.post_navigation_script);
        self.evaluate(&self.button_script);
    }
}
