#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::{Level, error};

use portfolio::content::SiteContent;

mod common;

mod components;

mod home;
use home::Portfolio;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    common::platform::use_browser_platform();

    // the content is compiled in, so a failure here is a defect in portfolio.toml rather than
    // something a visitor can fix; show a notice instead of a blank page
    let site = use_hook(|| {
        SiteContent::embedded().map_err(|err| {
            error!("failed to load site content: {err:#}");
            err.to_string()
        })
    });

    rsx! {
        style { "{common::style::PAGE_STYLES}" }
        match site {
            Ok(site) => rsx! {
                Portfolio { site }
            },
            Err(err) => rsx! {
                div { class: "portfolio load-error", "{err}" }
            },
        }
    }
}
