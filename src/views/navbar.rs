use crate::Route;
use crate::api_keys::ApiKeyStore;
use crate::nav::{
    Control, HOME_PATH, Icon, NavBarView, NavigationBar, RouteProvider, TRAILING_CONTROLS,
};
use crate::style;
use crate::theme::ThemeState;
use crate::views::IconSvg;
use dioxus::prelude::*;
use log::warn;

/// Where resolved routes are pushed.
trait RoutePusher {
    fn push_route(&self, route: Route);
}

impl RoutePusher for Navigator {
    fn push_route(&self, route: Route) {
        let target = route.to_string();
        if let Some(failure) = self.push(route) {
            warn!("Navigation to {} failed: {:?}", target, failure);
        }
    }
}

/// Routing collaborator backed by the Dioxus router.
///
/// The current path is the matched [`Route`] rendered back to a string, so
/// it is already normalised: `/chat/`, `/chat?x=1` and `/chat#a` all report
/// `/chat`.
#[derive(Clone)]
struct RouterLocation<N = Navigator> {
    current: Route,
    navigator: N,
}

impl<N: RoutePusher> RouteProvider for RouterLocation<N> {
    fn current_path(&self) -> String {
        self.current.to_string()
    }

    fn navigate(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => self.navigator.push_route(route),
            Err(_) => warn!("No route registered for {}", path),
        }
    }
}

/// A router link whose target and click effect both come from `control`.
#[component]
fn ControlLink(control: Control, on_activate: EventHandler<Control>, children: Element) -> Element {
    rsx! {
        Link {
            to: control.destination().unwrap_or(HOME_PATH),
            onclick_only: true,
            onclick: move |_| on_activate.call(control),
            {children}
        }
    }
}

/// Layout shared by every route: the fixed navigation bar, then the page.
///
/// Theme and API-key state come from the contexts provided by `App`, the
/// current location from the router. Clicks are handed back to
/// [`NavigationBar::activate`].
#[component]
pub fn Navbar() -> Element {
    let theme = use_context::<Signal<ThemeState>>();
    let keys = use_context::<Signal<ApiKeyStore>>();
    let location = RouterLocation {
        current: use_route::<Route>(),
        navigator: navigator(),
    };

    let bar = NavigationBar::new(theme, keys, location);
    let NavBarView {
        mode,
        entries,
        key_status,
        settings,
        theme_icon,
    } = bar.view();

    let on_activate = use_callback(move |control: Control| bar.activate(control));

    rsx! {
        nav { class: style::bar(mode),
            div { class: "max-w-7xl mx-auto px-6 py-4",
                div { class: "flex items-center justify-between",
                    ControlLink { control: Control::Brand, on_activate,
                        div { class: "flex items-center space-x-3 group",
                            div { class: style::brand_badge(mode),
                                IconSvg { icon: Icon::Shield, class: "w-6 h-6 text-white" }
                            }
                            div {
                                span { class: style::brand_title(mode), "RealityCheck AI" }
                                p { class: style::brand_subtitle(mode), "Multi-Model Intelligence" }
                            }
                        }
                    }

                    div { class: "hidden lg:flex items-center space-x-1",
                        for item in entries {
                            ControlLink {
                                key: "{item.entry.path}",
                                control: item.control,
                                on_activate,
                                div { class: style::nav_link(item.variant, mode),
                                    IconSvg { icon: item.entry.icon, class: "w-4 h-4" }
                                    span { class: "font-medium", {item.entry.label} }
                                }
                            }
                        }
                    }

                    div { class: "flex items-center space-x-3",
                        for control in TRAILING_CONTROLS {
                            {match control {
                                Control::KeyStatus => rsx! {
                                    ControlLink { control, on_activate,
                                        div {
                                            class: style::key_indicator(key_status, mode),
                                            title: key_status.title(),
                                            IconSvg { icon: Icon::Key, class: "w-4 h-4" }
                                        }
                                    }
                                },
                                Control::Settings => rsx! {
                                    ControlLink { control, on_activate,
                                        div { class: style::settings_button(settings, mode),
                                            IconSvg { icon: Icon::Settings, class: "w-5 h-5" }
                                        }
                                    }
                                },
                                _ => rsx! {
                                    button {
                                        class: style::theme_toggle(mode),
                                        onclick: move |_| on_activate.call(control),
                                        IconSvg { icon: theme_icon, class: "w-5 h-5" }
                                    }
                                },
                            }}
                        }
                    }
                }
            }
        }
        main { class: "pt-28", Outlet::<Route> {} }
    }
}
