// Host environment detection for the viewport workaround.

#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Snapshot of the navigator identity strings, taken once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct HostInfo {
    pub platform: String,
    pub user_agent: String,
}

impl HostInfo {
    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Option<Self> {
        let navigator = window()?.navigator();
        Some(Self {
            platform: navigator.platform().ok()?,
            user_agent: navigator.user_agent().ok()?,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[allow(dead_code)]
    pub fn detect() -> Option<Self> {
        None
    }

    /// iPad Safari keeps reporting a stale inner height after scroll and
    /// rotation, so document sizing has to be pinned by hand.
    pub fn has_viewport_quirk(&self) -> bool {
        self.platform.contains("iPad") && self.user_agent.to_ascii_lowercase().contains("safari")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(platform: &str, user_agent: &str) -> HostInfo {
        HostInfo {
            platform: platform.to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    #[test]
    fn ipad_safari_is_quirky() {
        let info = host(
            "iPad",
            "Mozilla/5.0 (iPad; CPU OS 12_2 like Mac OS X) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/12.1 Mobile/15E148 Safari/604.1",
        );
        assert!(info.has_viewport_quirk());
    }

    #[test]
    fn browser_family_match_ignores_case() {
        assert!(host("iPad", "SAFARI").has_viewport_quirk());
    }

    #[test]
    fn desktop_platform_is_not_quirky() {
        let info = host(
            "MacIntel",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 \
             (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
        );
        assert!(!info.has_viewport_quirk());
    }

    #[test]
    fn other_tablet_browsers_are_not_quirky() {
        let info = host(
            "iPad",
            "Mozilla/5.0 (iPad; CPU OS 12_2 like Mac OS X) Gecko/20100101 Firefox/124.0",
        );
        assert!(!info.has_viewport_quirk());
    }
}
