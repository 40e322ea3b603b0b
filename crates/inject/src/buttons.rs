//! Heuristic button labeling.

/// Finds interactive elements by accessible label through several fallback
/// selector strategies and tags each with the marker attribute, then keeps a
/// MutationObserver running so elements appearing later get tagged too.
const BUTTON_FINDER_TEMPLATE: &str = r#"
// Function to find buttons more precisely on the Copilot interface
function findAndMarkButton(ariaLabel) {
    const selectors = [
        `[aria-label="${ariaLabel}"]`,
        `button[aria-label="${ariaLabel}"]`,
        `a[aria-label="${ariaLabel}"]`,
        `div[aria-label="${ariaLabel}"]`,
        `*[title="${ariaLabel}"]`,
        `*[data-testid*="${ariaLabel.toLowerCase().replace(/\s+/g, '-')}"]`
    ];

    for (const selector of selectors) {
        const button = document.querySelector(selector);
        if (button) {
            button.setAttribute('__MARKER__', ariaLabel);
            return true;
        }
    }

    // Fall back to text content when no attribute matches
    const allButtons = document.querySelectorAll('button, a[role="button"], [role="button"]');
    for (const button of allButtons) {
        if (button.textContent && button.textContent.includes(ariaLabel)) {
            button.setAttribute('__MARKER__', ariaLabel);
            return true;
        }
    }

    return false;
}

const buttonLabels = __LABELS__;

buttonLabels.forEach(findAndMarkButton);

// Re-run the labeling as the page's markup changes
const observer = new MutationObserver(() => {
    buttonLabels.forEach(findAndMarkButton);
});

observer.observe(document.body, {
    childList: true,
    subtree: true
});
"#;

/// Immutable button-finder configuration.
#[derive(Clone, Debug)]
pub struct ButtonFinderConfig {
    /// Accessible labels to look for.
    labels: Vec<String>,
    /// Attribute set on each found element.
    marker_attribute: String,
}

impl ButtonFinderConfig {
    /// Create a configuration from explicit labels.
    pub fn new(
        labels: impl IntoIterator<Item = impl Into<String>>,
        marker_attribute: impl Into<String>,
    ) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            marker_attribute: marker_attribute.into(),
        }
    }

    /// The labels searched for.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The marker attribute name.
    pub fn marker_attribute(&self) -> &str {
        &self.marker_attribute
    }

    /// The script evaluated after each completed navigation.
    pub fn script(&self) -> String {
        let labels = serde_json::to_string(&self.labels).unwrap_or_else(|_| "[]".to_string());
        BUTTON_FINDER_TEMPLATE
            .replace("__MARKER__", &self.marker_attribute)
            .replace("__LABELS__", &labels)
    }
}

impl Default for ButtonFinderConfig {
    fn default() -> Self {
        Self::new(
            [
                "Open conversations",
                "New conversation",
                "Select model",
                "Open workbench",
                "Menu",
                "Copy",
                "Share",
            ],
            "data-copilot-app-button",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_contains_all_labels() {
        let config = ButtonFinderConfig::default();
        let script = config.script();
        for label in config.labels() {
            assert!(script.contains(label), "missing label {label}");
        }
    }

    #[test]
    fn test_marker_attribute_applied() {
        let script = ButtonFinderConfig::default().script();
        assert!(script.contains("setAttribute('data-copilot-app-button'"));
    }

    #[test]
    fn test_fallback_strategies_present() {
        let script = ButtonFinderConfig::default().script();
        assert!(script.contains("aria-label"));
        assert!(script.contains("title"));
        assert!(script.contains("data-testid"));
        assert!(script.contains("textContent"));
    }

    #[test]
    fn test_observer_installed() {
        let script = ButtonFinderConfig::default().script();
        assert!(script.contains("MutationObserver"));
        assert!(script.contains("childList: true"));
        assert!(script.contains("subtree: true"));
    }

    #[test]
    fn test_custom_marker() {
        let config = ButtonFinderConfig::new(["Send"], "data-test-marker");
        let script = config.script();
        assert!(script.contains("setAttribute('data-test-marker'"));
        assert!(script.contains("\"Send\""));
        assert!(!script.contains("data-copilot-app-button"));
    }
}
