use dioxus::prelude::*;

use portfolio::{content::NavItem, theme::Theme, ui::UiState};

use crate::common::platform::SharedStore;
use crate::components::icons::{Icon, IconKind};

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    brand: String,
    items: Vec<NavItem>,
    ui: Signal<UiState>,
}

#[component]
fn ThemeToggle(ui: Signal<UiState>) -> Element {
    let mut ui = ui;
    let theme = use_context::<Memo<Theme>>();
    let store = use_context::<SharedStore>();

    let (icon, label) = if theme().is_dark() {
        (IconKind::Sun, "Switch to light mode")
    } else {
        (IconKind::Moon, "Switch to dark mode")
    };

    rsx! {
        button {
            class: "icon-button",
            "aria-label": label,
            onclick: move |_| {
                ui.with_mut(|state| {
                    state.toggle_theme(store.as_ref());
                });
            },
            Icon { kind: icon, size: 20 }
        }
    }
}

#[component]
fn MobilePanel(items: Vec<NavItem>, ui: Signal<UiState>) -> Element {
    let mut ui = ui;

    rsx! {
        div { class: "mobile-panel",
            for item in items {
                a {
                    key: "{item.name}",
                    class: "nav-link",
                    href: "{item.href}",
                    // closing the panel does not stop the browser from following the anchor
                    onclick: {
                        let href = item.href.clone();
                        move |_| ui.with_mut(|state| state.select_nav_item(&href))
                    },
                    "{item.name}"
                }
            }
        }
    }
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut ui = props.ui;
    let menu_open = ui.read().mobile_menu_open;

    rsx! {
        header { class: "app-header",
            div { class: "container",
                div { class: "nav-container",
                    div { class: "logo", "{props.brand}" }

                    nav { class: "nav-links",
                        for item in props.items.iter() {
                            a {
                                key: "{item.name}",
                                class: "nav-link",
                                href: "{item.href}",
                                "{item.name}"
                            }
                        }
                    }

                    div { class: "nav-actions",
                        ThemeToggle { ui }
                        button {
                            class: "icon-button menu-button",
                            "aria-label": if menu_open { "Close menu" } else { "Open menu" },
                            "aria-expanded": "{menu_open}",
                            onclick: move |_| {
                                ui.with_mut(|state| {
                                    state.toggle_mobile_menu();
                                });
                            },
                            if menu_open {
                                Icon { kind: IconKind::Close }
                            } else {
                                Icon { kind: IconKind::Menu }
                            }
                        }
                    }
                }
            }
            if menu_open {
                MobilePanel { items: props.items.clone(), ui }
            }
        }
    }
}
