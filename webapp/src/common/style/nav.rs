pub const NAV_STYLES: &str = r#"
/* Top bar */
.app-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  background-color: var(--nav-background);
  backdrop-filter: blur(4px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-size: 1.5rem;
  font-weight: 700;
}

.nav-links {
  display: none;
  gap: var(--space-8);
}

.nav-link {
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

/* Mobile panel */
.mobile-panel {
  border-top: 1px solid var(--border);
  padding: var(--space-2) var(--space-4);
}

.mobile-panel .nav-link {
  display: block;
  padding: var(--space-2) 0;
}

@media (min-width: 768px) {
  .nav-links {
    display: flex;
  }

  .menu-button,
  .mobile-panel {
    display: none;
  }
}
"#;
