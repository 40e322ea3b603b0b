//! Selector-hide passes over page chrome.

/// Document-end payload. Defines the hide pass, runs it on the usual load
/// events, and keeps re-applying it on a fixed interval to catch chrome that
/// loads asynchronously after initial render.
const DOCUMENT_END_TEMPLATE: &str = r#"
// Function to clean the UI
function cleanUI() {
    const elementsToHide = __SELECTORS__;

    elementsToHide.forEach(selector => {
        document.querySelectorAll(selector).forEach(el => {
            el.style.display = 'none';
        });
    });

    // Widen the Copilot chat container up to the body
    const chatContainer = document.querySelector('.copilot-chat-container');
    if (chatContainer) {
        chatContainer.style.maxWidth = '100%';
        chatContainer.style.width = '100%';
        chatContainer.style.margin = '0';
        chatContainer.style.padding = '0';

        let parent = chatContainer.parentElement;
        while (parent && parent !== document.body) {
            parent.style.maxWidth = '100%';
            parent.style.width = '100%';
            parent.style.margin = '0';
            parent.style.padding = '0';
            parent = parent.parentElement;
        }
    }
}

// Run on initial load
document.addEventListener('DOMContentLoaded', cleanUI);

// Run periodically to catch any dynamically loaded elements
setInterval(cleanUI, __INTERVAL_MS__);

// Also run on any navigation changes or ajax completions
window.addEventListener('load', cleanUI);
document.addEventListener('readystatechange', cleanUI);
"#;

/// Post-navigation payload. Scheduled after a fixed delay once navigation
/// completes: re-hides the core chrome and strips padding from the main
/// content regions.
const POST_NAVIGATION_TEMPLATE: &str = r#"
// Run cleanup after page fully loads
setTimeout(() => {
    const elementsToHide = __SELECTORS__;

    elementsToHide.forEach(selector => {
        document.querySelectorAll(selector).forEach(el => {
            el.style.display = 'none';
        });
    });

    const mainContent = document.querySelector('.application-main');
    if (mainContent) {
        mainContent.style.paddingTop = '0';
    }

    const chatContainer = document.querySelector('.copilot-chat-container');
    if (chatContainer) {
        chatContainer.style.maxWidth = '100%';
        chatContainer.style.width = '100%';
        chatContainer.style.margin = '0';
        chatContainer.style.padding = '0';
        chatContainer.style.paddingTop = '0';
    }

    const conversationContent = document.querySelector('.conversation-container');
    if (conversationContent) {
        conversationContent.style.paddingTop = '0';
    }
}, __DELAY_MS__);
"#;

/// Immutable cosmetic-cleanup configuration.
#[derive(Clone, Debug)]
pub struct CleanupConfig {
    /// Regions hidden by the document-end pass.
    hide_selectors: Vec<String>,
    /// Regions re-hidden after each completed navigation.
    post_nav_selectors: Vec<String>,
    /// Interval of the always-running re-apply timer.
    reapply_interval_ms: u64,
    /// Delay before the post-navigation pass runs.
    post_nav_delay_ms: u64,
}

impl CleanupConfig {
    /// Create a configuration from explicit selector lists.
    pub fn new(
        hide_selectors: impl IntoIterator<Item = impl Into<String>>,
        post_nav_selectors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            hide_selectors: hide_selectors.into_iter().map(Into::into).collect(),
            post_nav_selectors: post_nav_selectors.into_iter().map(Into::into).collect(),
            reapply_interval_ms: 1000,
            post_nav_delay_ms: 1000,
        }
    }

    /// Set the re-apply timer interval.
    pub fn with_reapply_interval_ms(mut self, ms: u64) -> Self {
        self.reapply_interval_ms = ms;
        self
    }

    /// Set the post-navigation delay.
    pub fn with_post_nav_delay_ms(mut self, ms: u64) -> Self {
        self.post_nav_delay_ms = ms;
        self
    }

    /// Selectors hidden by the document-end pass.
    pub fn hide_selectors(&self) -> &[String] {
        &self.hide_selectors
    }

    /// The script injected at document end in all frames.
    pub fn document_end_script(&self) -> String {
        DOCUMENT_END_TEMPLATE
            .replace("__SELECTORS__", &selector_array(&self.hide_selectors))
            .replace("__INTERVAL_MS__", &self.reapply_interval_ms.to_string())
    }

    /// The script evaluated after each completed navigation.
    pub fn post_navigation_script(&self) -> String {
        POST_NAVIGATION_TEMPLATE
            .replace("__SELECTORS__", &selector_array(&self.post_nav_selectors))
            .replace("__DELAY_MS__", &self.post_nav_delay_ms.to_string())
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self::new(
            [
                ".AppHeader-globalBar",
                ".AppHeader-user",
                ".AppHeader-search",
                "nav[aria-label=\"Global\"]",
                ".Layout-sidebar",
                ".AppHeader-context",
                ".AppHeader",
                ".Header",
                "header",
                ".footer",
                "footer",
                ".gh-header-sticky",
                ".tabnav",
                ".breadcrumb",
                ".js-header-wrapper",
                ".gh-header",
                ".flash",
                ".pagehead",
                ".commit-tease",
                ".file-navigation",
                ".repository-content > .gutter-condensed",
                ".repository-content > nav",
            ],
            [
                ".AppHeader-globalBar",
                ".AppHeader-user",
                ".AppHeader-search",
                "nav[aria-label=\"Global\"]",
                ".Layout-sidebar",
                ".AppHeader-context",
                ".AppHeader",
                ".Header",
                "header",
                ".footer",
                "footer",
            ],
        )
    }
}

/// Render a selector list as a JavaScript array literal.
fn selector_array(selectors: &[String]) -> String {
    serde_json::to_string(selectors).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_end_script_contains_all_selectors() {
        let config = CleanupConfig::default();
        let script = config.document_end_script();
        for selector in config.hide_selectors() {
            assert!(
                script.contains(&serde_json::to_string(selector).unwrap()),
                "missing selector {selector}"
            );
        }
    }

    #[test]
    fn test_hide_pass_uses_style_mutation_not_removal() {
        let script = CleanupConfig::default().document_end_script();
        assert!(script.contains("el.style.display = 'none'"));
        assert!(!script.contains(".remove()"));
    }

    #[test]
    fn test_reapply_timer_interval() {
        let script = CleanupConfig::default().document_end_script();
        assert!(script.contains("setInterval(cleanUI, 1000)"));

        let script = CleanupConfig::default()
            .with_reapply_interval_ms(250)
            .document_end_script();
        assert!(script.contains("setInterval(cleanUI, 250)"));
    }

    #[test]
    fn test_post_navigation_script_is_deferred() {
        let script = CleanupConfig::default().post_navigation_script();
        assert!(script.contains("setTimeout"));
        assert!(script.contains("}, 1000)"));
        assert!(script.contains(".application-main"));
        assert!(script.contains(".conversation-container"));
    }

    #[test]
    fn test_custom_selector_list() {
        let config = CleanupConfig::new([".banner"], [".banner"]);
        let script = config.document_end_script();
        assert!(script.contains("\".banner\""));
        assert!(!script.contains(".AppHeader"));
    }

    #[test]
    fn test_selectors_with_quotes_are_escaped() {
        let config = CleanupConfig::default();
        let script = config.document_end_script();
        // nav[aria-label="Global"] must survive JSON escaping intact.
        assert!(script.contains("nav[aria-label=\\\"Global\\\"]"));
    }
}
