//! Web interface components for RealityCheck
//!
//! This module contains the Dioxus components that make up the web interface:
//! the navigation bar layout, the destination pages and the settings page.

/// Navigation bar layout component
mod navbar;
pub use navbar::Navbar;

/// SVG icon renderer
mod icon;
pub use icon::IconSvg;

/// Primary destination pages
mod pages;
pub use pages::{Chat, Discover, GlobalPulse, Home, InsightEngine, Trending};

/// API key settings page
mod settings;
pub use settings::Settings;
