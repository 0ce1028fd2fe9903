// design tokens
//
// the light palette is the default; `.portfolio.dark` swaps the semantic colors so that every
// rule below only ever refers to the semantic names
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #3B82F6;
  --primary-light: #60A5FA;
  --primary-dark: #2563EB;
  --accent: #8B5CF6;

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Layout */
  --header-height: 64px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-20: 80px;
  --space-32: 128px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-theme: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

.portfolio {
  color-scheme: light;

  --background: #FFFFFF;
  --background-alt: var(--neutral-100);
  --surface: var(--neutral-100);
  --nav-background: rgba(255, 255, 255, 0.9);
  --control-background: var(--neutral-200);

  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  --border: var(--neutral-200);
}

.portfolio.dark {
  color-scheme: dark;

  --background: var(--neutral-900);
  --background-alt: var(--neutral-800);
  --surface: var(--neutral-800);
  --nav-background: rgba(17, 24, 39, 0.9);
  --control-background: var(--neutral-800);

  --text-primary: #FFFFFF;
  --text-secondary: var(--neutral-400);

  --border: var(--neutral-800);
}

/* overscroll and the root scrollbar sit outside .portfolio */
html:has(.portfolio.dark) {
  color-scheme: dark;
  background-color: var(--neutral-900);
}"#;
