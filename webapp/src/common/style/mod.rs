use constcat::concat;

mod components;
mod home;
mod nav;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::{ANIMATIONS, HOME_STYLES};
pub use nav::NAV_STYLES;
pub use variables::CSS_VARIABLES;

pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS
);

// everything the page needs, in cascade order
pub const PAGE_STYLES: &str = concat!(MODERN_STYLES, NAV_STYLES, HOME_STYLES, ANIMATIONS);
