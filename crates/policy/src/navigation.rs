//! Navigation routing decisions.

/// Classification of a navigation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKind {
    /// The user clicked a link.
    LinkActivated,
    /// The first load of the entry URL.
    InitialLoad,
    /// A form submission.
    FormSubmit,
    /// A reload of the current document.
    Reload,
    /// Any other engine-initiated navigation.
    Other,
}

/// Outcome of a navigation decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Load inside the embedded surface.
    Allow,
    /// Cancel the in-app navigation and hand the URL to the default browser.
    CancelAndOpenExternally,
}

/// Outcome of a new-window request. No in-app surface is ever created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewWindowDecision {
    /// Open the target URL in the default browser; report no surface created.
    OpenExternally,
}

/// Immutable policy configuration.
///
/// Built once at startup; the allowed-domain patterns decide which link
/// targets stay inside the embedded surface.
#[derive(Clone, Debug)]
pub struct PolicyConfig {
    /// Substring patterns identifying in-app domains.
    allowed_patterns: Vec<String>,
}

impl PolicyConfig {
    /// Create a configuration from explicit patterns.
    pub fn new(patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            allowed_patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// The allowed-domain patterns.
    pub fn allowed_patterns(&self) -> &[String] {
        &self.allowed_patterns
    }

    /// Check whether a URL stays inside the embedded surface.
    ///
    /// Matches on the absolute URL string, so path-scoped patterns like
    /// `github.com/copilot` work as intended.
    pub fn is_in_app(&self, url: &str) -> bool {
        self.allowed_patterns
            .iter()
            .any(|pattern| url.contains(pattern.as_str()))
    }

    /// Decide what to do with a navigation event.
    ///
    /// Only link activations are subject to the allowed-domain check; every
    /// other navigation kind is allowed unconditionally.
    pub fn decide_navigation(&self, kind: NavigationKind, url: &str) -> NavigationDecision {
        match kind {
            NavigationKind::LinkActivated if !self.is_in_app(url) => {
                NavigationDecision::CancelAndOpenExternally
            }
            _ => NavigationDecision::Allow,
        }
    }

    /// Decide what to do with a new-window request.
    ///
    /// Always externalized, regardless of URL.
    pub fn decide_new_window(&self, _url: &str) -> NewWindowDecision {
        NewWindowDecision::OpenExternally
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::new([
            "github.com/copilot",
            "github.com/github-copilot",
            "copilot.github.com",
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_link_navigation_always_allowed() {
        let policy = PolicyConfig::default();
        for kind in [
            NavigationKind::InitialLoad,
            NavigationKind::FormSubmit,
            NavigationKind::Reload,
            NavigationKind::Other,
        ] {
            assert_eq!(
                policy.decide_navigation(kind, "https://example.com/"),
                NavigationDecision::Allow
            );
        }
    }

    #[test]
    fn test_link_to_allowed_domain_stays_in_app() {
        let policy = PolicyConfig::default();
        assert_eq!(
            policy.decide_navigation(
                NavigationKind::LinkActivated,
                "https://github.com/copilot/c/123"
            ),
            NavigationDecision::Allow
        );
    }

    #[test]
    fn test_link_outside_allowed_domains_externalized() {
        let policy = PolicyConfig::default();
        assert_eq!(
            policy.decide_navigation(NavigationKind::LinkActivated, "https://example.com/"),
            NavigationDecision::CancelAndOpenExternally
        );
    }

    #[test]
    fn test_all_default_patterns_match() {
        let policy = PolicyConfig::default();
        assert!(policy.is_in_app("https://github.com/copilot"));
        assert!(policy.is_in_app("https://github.com/github-copilot/settings"));
        assert!(policy.is_in_app("https://copilot.github.com/plans"));
        assert!(!policy.is_in_app("https://github.com/other"));
    }

    #[test]
    fn test_new_window_always_externalized() {
        let policy = PolicyConfig::default();
        assert_eq!(
            policy.decide_new_window("https://github.com/copilot"),
            NewWindowDecision::OpenExternally
        );
        assert_eq!(
            policy.decide_new_window("https://example.com/"),
            NewWindowDecision::OpenExternally
        );
    }

    #[test]
    fn test_custom_patterns() {
        let policy = PolicyConfig::new(["internal.test"]);
        assert!(policy.is_in_app("https://internal.test/page"));
        assert!(!policy.is_in_app("https://github.com/copilot"));
    }
}
