//! Navigation bar model.
//!
//! [`NavigationBar`] is handed its three collaborators explicitly (theme,
//! API keys, routing). [`NavigationBar::view`] turns their current state into
//! a [`NavBarView`] snapshot and [`NavigationBar::activate`] forwards a user
//! interaction to the right collaborator. The Dioxus component in
//! `views::navbar` only draws the snapshot.

use crate::api_keys::{ApiKeyProvider, has_any_api_key};
use crate::style::{KeyStatus, LinkVariant};
use crate::theme::{ThemeMode, ThemeProvider};
use log::debug;

pub const HOME_PATH: &str = "/";
pub const SETTINGS_PATH: &str = "/settings";

/// Stroke icons drawn in a 24x24 view box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Shield,
    Compass,
    TrendingUp,
    Brain,
    Zap,
    Settings,
    Key,
    Sun,
    Moon,
}

impl Icon {
    /// SVG path data.
    pub fn path(&self) -> &'static str {
        match self {
            Icon::Shield => {
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"
            }
            Icon::Compass => {
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z M16.24 7.76l-2.12 6.36-6.36 2.12 2.12-6.36z"
            }
            Icon::TrendingUp => "M22 7l-8.5 8.5-5-5L2 17 M16 7h6v6",
            Icon::Brain => {
                "M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18z M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18z M12 5v13"
            }
            Icon::Zap => "M13 2L3 14h9l-1 8 10-12h-9l1-8z",
            Icon::Settings => {
                "M12 15a3 3 0 1 0 0-6 3 3 0 0 0 0 6z M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06A1.65 1.65 0 0 0 4.6 15a1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06A1.65 1.65 0 0 0 9 4.6a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06A1.65 1.65 0 0 0 19.4 9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"
            }
            Icon::Key => {
                "M21 2l-2 2m-7.61 7.61a5.5 5.5 0 1 1-7.778 7.778 5.5 5.5 0 0 1 7.777-7.777zm0 0L15.5 7.5m0 0l3 3L22 7l-3-3m-3.5 3.5L19 4"
            }
            Icon::Sun => {
                "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z M12 1v2 M12 21v2 M4.22 4.22l1.42 1.42 M18.36 18.36l1.42 1.42 M1 12h2 M21 12h2 M4.22 19.78l1.42-1.42 M18.36 5.64l1.42-1.42"
            }
            Icon::Moon => "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z",
        }
    }
}

/// One primary destination in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

pub const NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry {
        path: "/discover",
        label: "Discover",
        icon: Icon::Compass,
    },
    NavEntry {
        path: "/trending",
        label: "Trending",
        icon: Icon::TrendingUp,
    },
    NavEntry {
        path: "/global-pulse",
        label: "Global Pulse",
        icon: Icon::TrendingUp,
    },
    NavEntry {
        path: "/insight-engine",
        label: "Insight Engine",
        icon: Icon::Brain,
    },
    NavEntry {
        path: "/chat",
        label: "Chat",
        icon: Icon::Zap,
    },
];

/// Exact match only: `/discover/item` does not activate `/discover`.
pub fn is_active(current_path: &str, path: &str) -> bool {
    current_path == path
}

/// Current location and the ability to request a new one.
pub trait RouteProvider {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Everything in the bar a user can activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Brand,
    /// Index into [`NAV_ENTRIES`].
    Entry(usize),
    KeyStatus,
    Settings,
    ThemeToggle,
}

/// Controls on the right of the bar, left to right.
pub const TRAILING_CONTROLS: [Control; 3] =
    [Control::KeyStatus, Control::Settings, Control::ThemeToggle];

impl Control {
    /// Path a control navigates to, `None` for the theme toggle.
    pub fn destination(&self) -> Option<&'static str> {
        match self {
            Control::Brand => Some(HOME_PATH),
            Control::Entry(index) => NAV_ENTRIES.get(*index).map(|entry| entry.path),
            Control::KeyStatus | Control::Settings => Some(SETTINGS_PATH),
            Control::ThemeToggle => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub control: Control,
    pub entry: NavEntry,
    pub variant: LinkVariant,
}

/// Render snapshot of the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarView {
    pub mode: ThemeMode,
    pub entries: Vec<EntryView>,
    pub key_status: KeyStatus,
    pub settings: LinkVariant,
    /// Icon on the theme toggle: the sun offers light mode, the moon dark.
    pub theme_icon: Icon,
}

#[derive(Debug, Clone)]
pub struct NavigationBar<T, K, R> {
    theme: T,
    keys: K,
    router: R,
}

impl<T, K, R> NavigationBar<T, K, R>
where
    T: ThemeProvider,
    K: ApiKeyProvider,
    R: RouteProvider,
{
    pub fn new(theme: T, keys: K, router: R) -> Self {
        Self {
            theme,
            keys,
            router,
        }
    }

    pub fn has_any_api_key(&self) -> bool {
        has_any_api_key(&self.keys)
    }

    pub fn view(&self) -> NavBarView {
        let is_dark = self.theme.is_dark();
        let current_path = self.router.current_path();

        let entries = NAV_ENTRIES
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryView {
                control: Control::Entry(index),
                entry: *entry,
                variant: LinkVariant::from_active(is_active(&current_path, entry.path)),
            })
            .collect();

        NavBarView {
            mode: ThemeMode::from_dark(is_dark),
            entries,
            key_status: KeyStatus::from_configured(self.has_any_api_key()),
            settings: LinkVariant::from_active(is_active(&current_path, SETTINGS_PATH)),
            theme_icon: if is_dark { Icon::Sun } else { Icon::Moon },
        }
    }

    /// Forwards one user interaction. Link-like controls request navigation,
    /// the toggle flips the theme.
    pub fn activate(&self, control: Control) {
        match control.destination() {
            Some(path) => {
                debug!("Navigation requested to {}", path);
                self.router.navigate(path);
            }
            None if control == Control::ThemeToggle => {
                debug!("Theme toggle requested");
                self.theme.toggle_theme();
            }
            None => debug!("Ignoring activation of {:?}", control),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_keys::{ApiKeyStore, Provider};
    use std::cell::{Cell, RefCell};

    struct MockTheme {
        is_dark: bool,
        toggles: Cell<usize>,
    }

    impl MockTheme {
        fn new(is_dark: bool) -> Self {
            Self {
                is_dark,
                toggles: Cell::new(0),
            }
        }
    }

    impl ThemeProvider for &MockTheme {
        fn is_dark(&self) -> bool {
            self.is_dark
        }

        fn toggle_theme(&self) {
            self.toggles.set(self.toggles.get() + 1);
        }
    }

    struct MockRouter {
        current: String,
        requests: RefCell<Vec<String>>,
    }

    impl MockRouter {
        fn at(path: &str) -> Self {
            Self {
                current: path.to_string(),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl RouteProvider for &MockRouter {
        fn current_path(&self) -> String {
            self.current.clone()
        }

        fn navigate(&self, path: &str) {
            self.requests.borrow_mut().push(path.to_string());
        }
    }

    fn active_paths(view: &NavBarView) -> Vec<&'static str> {
        view.entries
            .iter()
            .filter(|entry| entry.variant == LinkVariant::Active)
            .map(|entry| entry.entry.path)
            .collect()
    }

    #[test]
    fn test_primary_entries_order() {
        let entries: Vec<(&str, &str)> = NAV_ENTRIES
            .iter()
            .map(|entry| (entry.label, entry.path))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("Discover", "/discover"),
                ("Trending", "/trending"),
                ("Global Pulse", "/global-pulse"),
                ("Insight Engine", "/insight-engine"),
                ("Chat", "/chat"),
            ]
        );
    }

    #[test]
    fn test_is_active_is_exact_match() {
        assert!(is_active("/chat", "/chat"));
        assert!(!is_active("/chat/", "/chat"));
        assert!(!is_active("/discover/item", "/discover"));
        assert!(!is_active("/", "/discover"));
    }

    #[test]
    fn test_only_current_entry_is_active() {
        let theme = MockTheme::new(true);
        let keys = ApiKeyStore::new();
        for entry in NAV_ENTRIES {
            let router = MockRouter::at(entry.path);
            let bar = NavigationBar::new(&theme, keys.clone(), &router);
            let view = bar.view();
            assert_eq!(active_paths(&view), vec![entry.path]);
            assert_eq!(view.settings, LinkVariant::Inactive);
        }
    }

    #[test]
    fn test_settings_path_activates_settings_only() {
        let theme = MockTheme::new(false);
        let router = MockRouter::at(SETTINGS_PATH);
        let bar = NavigationBar::new(&theme, ApiKeyStore::new(), &router);
        let view = bar.view();
        assert!(active_paths(&view).is_empty());
        assert_eq!(view.settings, LinkVariant::Active);
    }

    #[test]
    fn test_unknown_path_activates_nothing() {
        let theme = MockTheme::new(false);
        let router = MockRouter::at("/discover/deep");
        let bar = NavigationBar::new(&theme, ApiKeyStore::new(), &router);
        let view = bar.view();
        assert!(active_paths(&view).is_empty());
        assert_eq!(view.settings, LinkVariant::Inactive);
    }

    #[test]
    fn test_theme_icon_follows_mode() {
        let router = MockRouter::at(HOME_PATH);

        let dark = MockTheme::new(true);
        let view = NavigationBar::new(&dark, ApiKeyStore::new(), &router).view();
        assert_eq!(view.mode, ThemeMode::Dark);
        assert_eq!(view.theme_icon, Icon::Sun);

        let light = MockTheme::new(false);
        let view = NavigationBar::new(&light, ApiKeyStore::new(), &router).view();
        assert_eq!(view.mode, ThemeMode::Light);
        assert_eq!(view.theme_icon, Icon::Moon);
    }

    #[test]
    fn test_key_status() {
        let theme = MockTheme::new(true);
        let router = MockRouter::at(HOME_PATH);
        let mut keys = ApiKeyStore::new();

        let bar = NavigationBar::new(&theme, keys.clone(), &router);
        assert_eq!(bar.view().key_status, KeyStatus::Missing);

        keys.set_key(Provider::Claude, "sk-ant");
        let bar = NavigationBar::new(&theme, keys.clone(), &router);
        assert!(bar.has_any_api_key());
        assert_eq!(bar.view().key_status, KeyStatus::Configured);

        for provider in Provider::ALL {
            keys.set_key(provider, "key");
        }
        let bar = NavigationBar::new(&theme, keys, &router);
        assert_eq!(bar.view().key_status, KeyStatus::Configured);
    }

    #[test]
    fn test_theme_toggle_invokes_toggle_once() {
        let theme = MockTheme::new(true);
        let router = MockRouter::at(HOME_PATH);
        let bar = NavigationBar::new(&theme, ApiKeyStore::new(), &router);

        bar.activate(Control::ThemeToggle);
        assert_eq!(theme.toggles.get(), 1);
        assert!(router.requests.borrow().is_empty());

        bar.activate(Control::ThemeToggle);
        assert_eq!(theme.toggles.get(), 2);
    }

    #[test]
    fn test_links_request_navigation_once() {
        let theme = MockTheme::new(true);
        let router = MockRouter::at(HOME_PATH);
        let bar = NavigationBar::new(&theme, ApiKeyStore::new(), &router);

        for index in 0..NAV_ENTRIES.len() {
            bar.activate(Control::Entry(index));
        }
        bar.activate(Control::KeyStatus);
        bar.activate(Control::Settings);
        bar.activate(Control::Brand);

        assert_eq!(
            *router.requests.borrow(),
            vec![
                "/discover",
                "/trending",
                "/global-pulse",
                "/insight-engine",
                "/chat",
                "/settings",
                "/settings",
                "/",
            ]
        );
        assert_eq!(theme.toggles.get(), 0);
    }

    #[test]
    fn test_trailing_controls() {
        let destinations: Vec<Option<&str>> = TRAILING_CONTROLS
            .iter()
            .map(Control::destination)
            .collect();
        assert_eq!(
            destinations,
            vec![Some(SETTINGS_PATH), Some(SETTINGS_PATH), None]
        );
        assert_eq!(TRAILING_CONTROLS[0], Control::KeyStatus);
        assert_eq!(TRAILING_CONTROLS[1], Control::Settings);
    }

    #[test]
    fn test_out_of_range_entry_is_ignored() {
        let theme = MockTheme::new(true);
        let router = MockRouter::at(HOME_PATH);
        let bar = NavigationBar::new(&theme, ApiKeyStore::new(), &router);

        assert_eq!(Control::Entry(NAV_ENTRIES.len()).destination(), None);
        bar.activate(Control::Entry(NAV_ENTRIES.len()));
        assert!(router.requests.borrow().is_empty());
        assert_eq!(theme.toggles.get(), 0);
    }
}
