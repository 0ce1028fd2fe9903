use std::collections::HashSet;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::SECTION_IDS;

const EMBEDDED: &str = include_str!("../content/portfolio.toml");

// site content
//
// everything on the page that is not state lives here; the lists are rendered exactly in the
// order they are declared
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub nav: Vec<NavItem>,
    pub about: About,
    #[serde(default)]
    pub projects: Vec<ProjectCard>,
    #[serde(default)]
    pub research: Vec<ResearchPaper>,
    pub contact: Contact,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub header_image: String,
    pub header_alt: String,
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

impl NavItem {
    // the section id this item scrolls to, without the leading '#'
    pub fn target(&self) -> Option<&str> {
        self.href.strip_prefix('#')
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct About {
    pub paragraphs: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ResearchPaper {
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: u16,
    pub summary: String,
    #[serde(default)]
    pub links: Vec<PaperLink>,
}

impl ResearchPaper {
    pub fn authors_line(&self) -> String {
        self.authors.join(", ")
    }

    pub fn citation(&self) -> String {
        format!("{}, {}", self.venue, self.year)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PaperLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Contact {
    pub heading: String,
    pub blurb: String,
    pub email: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

// in-page anchors and mailto: links stay in the current context, everything else opens a new one
pub fn opens_new_context(href: &str) -> bool {
    !(href.starts_with('#') || href.starts_with("mailto:"))
}

// names double as render keys, so each list must not repeat one
fn ensure_unique<'a>(list: &str, names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();

    for name in names {
        if !seen.insert(name) {
            return Err(anyhow::Error::msg(format!("duplicate {list} entry {name}")));
        }
    }

    Ok(())
}

pub fn copyright_line(name: &str, year: i32) -> String {
    format!("© {year} {name}. All rights reserved.")
}

// the content document keeps everything under a [site] table, so we deserialize through a
// wrapper struct
#[derive(Debug, Deserialize)]
struct TomlSiteFile {
    site: SiteContent,
}

impl SiteContent {
    pub fn embedded() -> Result<Self> {
        Self::from_toml(EMBEDDED).context("embedded portfolio content is invalid")
    }

    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        let file: TomlSiteFile = toml::from_str(doc).context("failed to parse site content")?;
        let site = file.site;

        site.validate()?;

        debug!(
            nav = site.nav.len(),
            projects = site.projects.len(),
            research = site.research.len(),
            "site content loaded"
        );

        Ok(site)
    }

    fn validate(&self) -> Result<()> {
        if self.nav.is_empty() {
            return Err(anyhow::Error::msg("navigation list is empty"));
        }

        for item in &self.nav {
            let target = item
                .target()
                .with_context(|| format!("nav item {} must link to an anchor, got {}", item.name, item.href))?;

            if !SECTION_IDS.contains(&target) {
                return Err(anyhow::Error::msg(format!(
                    "nav item {} points at unknown section #{target}",
                    item.name
                )));
            }
        }

        ensure_unique("nav", self.nav.iter().map(|v| v.name.as_str()))?;
        ensure_unique("project", self.projects.iter().map(|v| v.title.as_str()))?;
        ensure_unique("research", self.research.iter().map(|v| v.title.as_str()))?;

        for paper in &self.research {
            ensure_unique("paper link", paper.links.iter().map(|v| v.label.as_str()))
                .with_context(|| format!("in paper {}", paper.title))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
[site.profile]
name = "A"
title = "B"
header_image = "/h.svg"
header_alt = "h"
github = "https://github.com/a"
linkedin = "https://linkedin.com/in/a"
email = "a@example.com"

[[site.nav]]
name = "Home"
href = "#home"

[site.about]
paragraphs = ["hello"]

[site.contact]
heading = "Hi"
blurb = "Write"
email = "a@example.com"
"##;

    #[test]
    fn test_embedded_content_parses() {
        let site = SiteContent::embedded().unwrap();

        let names: Vec<&str> = site.nav.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Home", "About", "Projects", "Research", "Contact"]);
        assert!(!site.projects.is_empty());
        assert!(!site.research.is_empty());
    }

    #[test]
    fn test_embedded_nav_covers_every_section() {
        let site = SiteContent::embedded().unwrap();
        let targets: Vec<&str> = site.nav.iter().filter_map(|v| v.target()).collect();
        assert_eq!(targets, SECTION_IDS);
    }

    #[test]
    fn test_optional_lists_default_empty() {
        let site = SiteContent::from_toml(MINIMAL).unwrap();
        assert!(site.projects.is_empty());
        assert!(site.research.is_empty());
        assert_eq!(site.profile.mailto(), "mailto:a@example.com");
        assert_eq!(site.contact.mailto(), "mailto:a@example.com");
    }

    #[test]
    fn test_rejects_non_anchor_nav() {
        let doc = MINIMAL.replace("href = \"#home\"", "href = \"/home\"");
        assert!(SiteContent::from_toml(&doc).is_err());
    }

    #[test]
    fn test_rejects_unknown_section() {
        let doc = MINIMAL.replace("#home", "#blog");
        let err = SiteContent::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("#blog"));
    }

    #[test]
    fn test_rejects_empty_nav() {
        let block = "[[site.nav]]\nname = \"Home\"\nhref = \"#home\"\n";
        assert!(MINIMAL.contains(block));

        let doc = format!("[site]\nnav = []\n{}", MINIMAL.replace(block, ""));
        let err = SiteContent::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_rejects_duplicate_project_titles() {
        let project = "\n[[site.projects]]\ntitle = \"Same\"\ndescription = \"d\"\nlink = \"#\"\n";
        let doc = format!("{MINIMAL}{project}{project}");

        let err = SiteContent::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("duplicate project entry Same"));
    }

    #[test]
    fn test_rejects_duplicate_paper_links() {
        let doc = format!(
            "{MINIMAL}{}",
            r##"
[[site.research]]
title = "P"
authors = ["A"]
venue = "V"
year = 2024
summary = "s"

[[site.research.links]]
label = "PDF"
url = "#"

[[site.research.links]]
label = "PDF"
url = "https://example.com/p.pdf"
"##
        );

        let err = SiteContent::from_toml(&doc).unwrap_err();
        assert!(format!("{err:#}").contains("duplicate paper link entry PDF"));
    }

    #[test]
    fn test_new_context_links() {
        assert!(opens_new_context("https://github.com/a"));
        assert!(!opens_new_context("#"));
        assert!(!opens_new_context("#projects"));
        assert!(!opens_new_context("mailto:a@example.com"));
    }

    #[test]
    fn test_paper_formatting() {
        let paper = ResearchPaper {
            title: "T".to_owned(),
            authors: vec!["X".to_owned(), "Y".to_owned(), "Z".to_owned()],
            venue: "Conf".to_owned(),
            year: 2024,
            summary: String::new(),
            links: Vec::new(),
        };

        assert_eq!(paper.authors_line(), "X, Y, Z");
        assert_eq!(paper.citation(), "Conf, 2024");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line("A", 2026), "© 2026 A. All rights reserved.");
    }
}
