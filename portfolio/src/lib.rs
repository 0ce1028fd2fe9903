pub mod content;
pub mod theme;
pub mod ui;

// section anchors
//
// every navigation href must point at one of these, and the webapp renders a section
// with each id in this order
pub const SECTION_IDS: [&str; 5] = ["home", "about", "projects", "research", "contact"];
