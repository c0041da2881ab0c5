use crate::api_keys::{ApiKeyStore, Provider};
use dioxus::prelude::*;

/// API-key management. Keys are held in the shared [`ApiKeyStore`] signal for
/// the lifetime of the page only.
#[component]
pub fn Settings() -> Element {
    let keys = use_context::<Signal<ApiKeyStore>>();

    rsx! {
        div { id: "settings-page", class: "max-w-3xl mx-auto px-6 py-8",
            h1 { class: "text-3xl font-bold mb-6", "Settings" }
            h2 { class: "text-xl font-semibold mb-4", "API Keys" }
            ul { class: "space-y-4",
                for provider in Provider::ALL {
                    KeyRow { key: "{provider}", provider, keys }
                }
            }
        }
    }
}

#[component]
fn KeyRow(provider: Provider, keys: Signal<ApiKeyStore>) -> Element {
    let mut keys = keys;
    let value = keys.read().key(provider).unwrap_or_default().to_string();
    let configured = keys.read().is_configured(provider);
    let input_id = format!("key-{}", provider);

    rsx! {
        li { class: "flex items-center gap-3",
            label { r#for: "{input_id}", class: "w-24 font-medium", {provider.display_name()} }
            input {
                id: "{input_id}",
                r#type: "password",
                class: "flex-1 rounded-lg border px-3 py-2",
                placeholder: "Paste your API key",
                value,
                oninput: move |event| {
                    let value = event.value();
                    if value.is_empty() {
                        keys.write().clear_key(provider);
                    } else {
                        keys.write().set_key(provider, value);
                    }
                },
            }
            span { class: if configured { "text-green-500" } else { "text-yellow-500" },
                if configured {
                    "Configured"
                } else {
                    "Not configured"
                }
            }
            button {
                class: "rounded-lg px-3 py-2 bg-slate-200 text-slate-700",
                onclick: move |_| keys.write().clear_key(provider),
                "Clear"
            }
        }
    }
}
