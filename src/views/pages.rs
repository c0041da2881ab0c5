use dioxus::prelude::*;

#[component]
fn Page(title: String, summary: String) -> Element {
    rsx! {
        section { class: "max-w-7xl mx-auto px-6 py-8",
            h1 { class: "text-3xl font-bold mb-4", "{title}" }
            p { class: "text-slate-500", "{summary}" }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        Page {
            title: "RealityCheck AI",
            summary: "Compare what several models say before you trust any one of them.",
        }
    }
}

#[component]
pub fn Discover() -> Element {
    rsx! {
        Page { title: "Discover", summary: "Browse claims and topics worth checking." }
    }
}

#[component]
pub fn Trending() -> Element {
    rsx! {
        Page { title: "Trending", summary: "Topics gaining attention right now." }
    }
}

#[component]
pub fn GlobalPulse() -> Element {
    rsx! {
        Page { title: "Global Pulse", summary: "How stories are reported across regions." }
    }
}

#[component]
pub fn InsightEngine() -> Element {
    rsx! {
        Page {
            title: "Insight Engine",
            summary: "Run one question through every configured model.",
        }
    }
}

#[component]
pub fn Chat() -> Element {
    rsx! {
        Page { title: "Chat", summary: "Talk to the configured models." }
    }
}
