//! Class lookup tables for the navigation bar's visual states.
//!
//! Each control has a small set of variants; the classes for a variant in a
//! given [`ThemeMode`] are looked up here instead of being branched inline in
//! the component.

use crate::theme::ThemeMode;

/// Whether a link points at the current route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    Active,
    Inactive,
}

impl LinkVariant {
    pub fn from_active(active: bool) -> Self {
        if active {
            LinkVariant::Active
        } else {
            LinkVariant::Inactive
        }
    }
}

/// State of the API-key indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Configured,
    Missing,
}

impl KeyStatus {
    pub fn from_configured(configured: bool) -> Self {
        if configured {
            KeyStatus::Configured
        } else {
            KeyStatus::Missing
        }
    }

    /// Tooltip shown on the indicator.
    pub fn title(&self) -> &'static str {
        match self {
            KeyStatus::Configured => "API Keys Configured",
            KeyStatus::Missing => "Configure API Keys",
        }
    }
}

pub fn bar(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => {
            "fixed top-0 left-0 right-0 z-50 backdrop-blur-xl border-b transition-all duration-300 bg-black/80 border-slate-800/50"
        }
        ThemeMode::Light => {
            "fixed top-0 left-0 right-0 z-50 backdrop-blur-xl border-b transition-all duration-300 bg-white/80 border-slate-200/50"
        }
    }
}

pub fn brand_badge(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => {
            "p-3 rounded-xl shadow-lg transition-all duration-300 bg-gradient-to-r from-violet-500 to-fuchsia-500 shadow-violet-500/25"
        }
        ThemeMode::Light => {
            "p-3 rounded-xl shadow-lg transition-all duration-300 bg-gradient-to-r from-purple-500 to-pink-500 shadow-purple-500/25"
        }
    }
}

pub fn brand_title(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "text-xl font-bold transition-colors text-white",
        ThemeMode::Light => "text-xl font-bold transition-colors text-slate-900",
    }
}

pub fn brand_subtitle(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => "text-sm font-medium transition-colors text-violet-400",
        ThemeMode::Light => "text-sm font-medium transition-colors text-purple-600",
    }
}

pub fn nav_link(variant: LinkVariant, mode: ThemeMode) -> &'static str {
    match (variant, mode) {
        (LinkVariant::Active, ThemeMode::Dark) => {
            "px-4 py-2 rounded-xl flex items-center space-x-2 transition-all duration-300 bg-violet-500/20 text-violet-400 shadow-sm"
        }
        (LinkVariant::Active, ThemeMode::Light) => {
            "px-4 py-2 rounded-xl flex items-center space-x-2 transition-all duration-300 bg-purple-100 text-purple-700 shadow-lg shadow-purple-500/10"
        }
        (LinkVariant::Inactive, ThemeMode::Dark) => {
            "px-4 py-2 rounded-xl flex items-center space-x-2 transition-all duration-300 text-slate-300 hover:bg-slate-800/50 hover:text-white"
        }
        (LinkVariant::Inactive, ThemeMode::Light) => {
            "px-4 py-2 rounded-xl flex items-center space-x-2 transition-all duration-300 text-slate-600 hover:bg-slate-100 hover:text-slate-900"
        }
    }
}

pub fn key_indicator(status: KeyStatus, mode: ThemeMode) -> &'static str {
    match (status, mode) {
        (KeyStatus::Configured, ThemeMode::Dark) => {
            "p-2 rounded-xl transition-all duration-300 bg-green-500/20 text-green-400 hover:bg-green-500/30"
        }
        (KeyStatus::Configured, ThemeMode::Light) => {
            "p-2 rounded-xl transition-all duration-300 bg-green-100 text-green-600 hover:bg-green-200"
        }
        (KeyStatus::Missing, ThemeMode::Dark) => {
            "p-2 rounded-xl transition-all duration-300 bg-yellow-500/20 text-yellow-400 hover:bg-yellow-500/30"
        }
        (KeyStatus::Missing, ThemeMode::Light) => {
            "p-2 rounded-xl transition-all duration-300 bg-yellow-100 text-yellow-600 hover:bg-yellow-200"
        }
    }
}

pub fn settings_button(variant: LinkVariant, mode: ThemeMode) -> &'static str {
    match (variant, mode) {
        (LinkVariant::Active, ThemeMode::Dark) => {
            "p-3 rounded-xl transition-all duration-300 bg-violet-500/20 text-violet-400"
        }
        (LinkVariant::Active, ThemeMode::Light) => {
            "p-3 rounded-xl transition-all duration-300 bg-purple-100 text-purple-700"
        }
        (LinkVariant::Inactive, ThemeMode::Dark) => {
            "p-3 rounded-xl transition-all duration-300 bg-slate-800/50 text-slate-400 hover:bg-slate-700/50"
        }
        (LinkVariant::Inactive, ThemeMode::Light) => {
            "p-3 rounded-xl transition-all duration-300 bg-slate-100 text-slate-600 hover:bg-slate-200"
        }
    }
}

pub fn theme_toggle(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Dark => {
            "p-3 rounded-xl transition-all duration-300 bg-slate-800/50 text-yellow-400 hover:bg-slate-700/50 shadow-lg shadow-slate-900/20"
        }
        ThemeMode::Light => {
            "p-3 rounded-xl transition-all duration-300 bg-slate-100 text-slate-600 hover:bg-slate-200 shadow-lg shadow-slate-500/10"
        }
    }
}
