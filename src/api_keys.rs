//! API-key configuration shared by the navigation bar and the settings page.
//!
//! Keys live in memory only. The navigation bar never reads a key, it only
//! asks whether a provider has one configured.

use dioxus::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Model providers the application can hold a credential for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Claude,
    Mistral,
    Cohere,
}

impl Provider {
    /// Every provider, in display order. The key indicator and the settings
    /// page both iterate this list.
    pub const ALL: [Provider; 4] = [
        Provider::OpenAi,
        Provider::Claude,
        Provider::Mistral,
        Provider::Cohere,
    ];

    /// Identifier used when querying an [`ApiKeyProvider`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Claude => "claude",
            Provider::Mistral => "mistral",
            Provider::Cohere => "cohere",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Claude => "Claude",
            Provider::Mistral => "Mistral",
            Provider::Cohere => "Cohere",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown API key provider `{0}`")]
pub struct UnknownProvider(pub String);

impl FromStr for Provider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Provider::ALL
            .into_iter()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| UnknownProvider(s.to_string()))
    }
}

/// Answers whether a named provider has a usable credential.
///
/// Implementations must be side-effect free: the navigation bar queries every
/// provider on each render.
pub trait ApiKeyProvider {
    fn has_valid_key(&self, provider: &str) -> bool;
}

/// In-memory credential table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiKeyStore {
    keys: HashMap<Provider, String>,
}

impl ApiKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, provider: Provider, key: impl Into<String>) {
        self.keys.insert(provider, key.into());
    }

    pub fn clear_key(&mut self, provider: Provider) {
        self.keys.remove(&provider);
    }

    pub fn key(&self, provider: Provider) -> Option<&str> {
        self.keys.get(&provider).map(String::as_str)
    }

    /// A key counts once it has any non-whitespace content.
    pub fn is_configured(&self, provider: Provider) -> bool {
        self.key(provider).is_some_and(|key| !key.trim().is_empty())
    }
}

impl ApiKeyProvider for ApiKeyStore {
    fn has_valid_key(&self, provider: &str) -> bool {
        match provider.parse::<Provider>() {
            Ok(provider) => self.is_configured(provider),
            Err(_) => false,
        }
    }
}

impl ApiKeyProvider for Signal<ApiKeyStore> {
    fn has_valid_key(&self, provider: &str) -> bool {
        self.read().has_valid_key(provider)
    }
}

/// True when at least one known provider has a valid key.
pub fn has_any_api_key<K: ApiKeyProvider + ?Sized>(keys: &K) -> bool {
    Provider::ALL
        .iter()
        .any(|provider| keys.has_valid_key(provider.as_str()))
}
