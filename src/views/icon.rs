use crate::nav::Icon;
use dioxus::prelude::*;

#[component]
pub fn IconSvg(icon: Icon, #[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: icon.path() }
        }
    }
}
