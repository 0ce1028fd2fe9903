use chrono::{Datelike, Local};
use dioxus::prelude::*;

use portfolio::{
    content::{
        About, Contact, Profile, ProjectCard, ResearchPaper, SiteContent, copyright_line,
        opens_new_context,
    },
    theme::{Theme, resolve_theme},
    ui::UiState,
};

use crate::common::platform::{SharedProbe, SharedStore};
use crate::components::icons::{Icon, IconKind};
use crate::components::navigation::NavBar;

#[derive(Clone, PartialEq, Props)]
pub struct PortfolioProps {
    site: SiteContent,
}

// the root of the page
//
// the ui state is created exactly once per load, which is also the only time the stored
// preference and the system color scheme are consulted. both come from context, and
// descendants read the theme from context rather than from a class on the document element
#[component]
pub fn Portfolio(props: PortfolioProps) -> Element {
    let store = use_context::<SharedStore>();
    let probe = use_context::<SharedProbe>();
    let ui = use_signal(move || UiState::new(resolve_theme(store.as_ref(), probe.as_ref())));
    let theme = use_memo(move || ui.read().theme);
    use_context_provider(|| theme);

    let site = props.site;
    let scope = theme().css_class();

    rsx! {
        div { class: "portfolio {scope}",
            NavBar {
                brand: "Portfolio".to_owned(),
                items: site.nav.clone(),
                ui,
            }
            Hero { profile: site.profile.clone() }
            AboutSection { about: site.about.clone() }
            Projects { projects: site.projects.clone() }
            Research { papers: site.research.clone() }
            ContactSection { contact: site.contact.clone() }
            Footer { name: site.profile.name.clone() }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct OutboundLinkProps {
    href: String,
    class: String,
    #[props(default)]
    label: Option<String>,
    children: Element,
}

// external urls open in a new context, in-page anchors and mailto: links do not
#[component]
fn OutboundLink(props: OutboundLinkProps) -> Element {
    if opens_new_context(&props.href) {
        rsx! {
            a {
                class: "{props.class}",
                href: "{props.href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "aria-label": props.label,
                {props.children}
            }
        }
    } else {
        rsx! {
            a {
                class: "{props.class}",
                href: "{props.href}",
                "aria-label": props.label,
                {props.children}
            }
        }
    }
}

#[component]
fn Hero(profile: Profile) -> Element {
    let mailto = profile.mailto();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "container",
                img {
                    class: "hero-banner fade-up",
                    src: "{profile.header_image}",
                    alt: "{profile.header_alt}",
                }
                h1 { class: "hero-title fade-up",
                    "Hi, I'm "
                    span { class: "highlight", "{profile.name}" }
                }
                p { class: "hero-subtitle fade-up delay-1", "{profile.title}" }
                div { class: "hero-links fade-up delay-2",
                    OutboundLink {
                        class: "social-link".to_owned(),
                        href: profile.github.clone(),
                        label: "GitHub".to_owned(),
                        Icon { kind: IconKind::Github }
                    }
                    OutboundLink {
                        class: "social-link".to_owned(),
                        href: profile.linkedin.clone(),
                        label: "LinkedIn".to_owned(),
                        Icon { kind: IconKind::Linkedin }
                    }
                    OutboundLink {
                        class: "social-link".to_owned(),
                        href: mailto,
                        label: "Email".to_owned(),
                        Icon { kind: IconKind::Mail }
                    }
                }
            }
        }
    }
}

#[component]
fn AboutSection(about: About) -> Element {
    rsx! {
        section { id: "about", class: "section-alt",
            div { class: "container",
                h2 { class: "section-title", "About Me" }
                for paragraph in about.paragraphs {
                    p { class: "section-text", "{paragraph}" }
                }
            }
        }
    }
}

#[component]
fn Projects(projects: Vec<ProjectCard>) -> Element {
    rsx! {
        section { id: "projects",
            div { class: "container",
                h2 { class: "section-title", "Projects" }
                div { class: "card-grid",
                    for project in projects {
                        div { key: "{project.title}", class: "card",
                            h3 { class: "card-title", "{project.title}" }
                            p { class: "card-text", "{project.description}" }
                            OutboundLink {
                                class: "card-link".to_owned(),
                                href: project.link.clone(),
                                "View Project"
                                Icon { kind: IconKind::ExternalLink, size: 16 }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Research(papers: Vec<ResearchPaper>) -> Element {
    rsx! {
        section { id: "research", class: "section-alt",
            div { class: "container",
                h2 { class: "section-title", "Research" }
                div { class: "paper-list",
                    for paper in papers {
                        PaperCard { key: "{paper.title}", paper }
                    }
                }
            }
        }
    }
}

#[component]
fn PaperCard(paper: ResearchPaper) -> Element {
    let theme = use_context::<Memo<Theme>>();
    let theme = theme();
    let authors = paper.authors_line();
    let citation = paper.citation();

    // pdf links get the document icon, everything else is an outbound link
    let icon_for = |label: &str| {
        if label.eq_ignore_ascii_case("pdf") {
            IconKind::FileText
        } else {
            IconKind::ExternalLink
        }
    };

    rsx! {
        article { class: "card reveal", "data-theme": "{theme}",
            h3 { class: "card-title", "{paper.title}" }
            p { class: "paper-meta", "{authors}" }
            p { class: "paper-meta", "{citation}" }
            p { class: "card-text", "{paper.summary}" }
            div { class: "paper-links",
                for link in paper.links.iter() {
                    OutboundLink {
                        key: "{link.label}",
                        class: "card-link".to_owned(),
                        href: link.url.clone(),
                        Icon { kind: icon_for(&link.label), size: 16 }
                        "{link.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn ContactSection(contact: Contact) -> Element {
    let mailto = contact.mailto();

    rsx! {
        section { id: "contact", class: "section-alt contact",
            div { class: "container",
                h2 { class: "section-title", "{contact.heading}" }
                p { class: "section-text", "{contact.blurb}" }
                a { class: "btn btn-primary", href: "{mailto}",
                    Icon { kind: IconKind::Mail, size: 20 }
                    "Send Email"
                }
            }
        }
    }
}

#[component]
fn Footer(name: String) -> Element {
    let line = copyright_line(&name, Local::now().year());

    rsx! {
        footer { class: "site-footer",
            p { "{line}" }
        }
    }
}
