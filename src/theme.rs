use dioxus::prelude::*;

/// Shared light/dark preference. Starts dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { is_dark: true }
    }
}

impl ThemeState {
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Class set on the application root so page styles can follow the theme.
    pub fn root_class(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Source of the current theme and the action that flips it.
pub trait ThemeProvider {
    fn is_dark(&self) -> bool;
    fn toggle_theme(&self);
}

impl ThemeProvider for Signal<ThemeState> {
    fn is_dark(&self) -> bool {
        self.read().is_dark
    }

    fn toggle_theme(&self) {
        let mut theme = *self;
        theme.write().toggle();
    }
}
