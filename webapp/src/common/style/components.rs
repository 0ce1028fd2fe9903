pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

@media (min-width: 640px) {
  .container {
    padding: 0 var(--space-6);
  }
}

@media (min-width: 1024px) {
  .container {
    padding: 0 var(--space-8);
  }
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-lg);
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--text-inverse);
}

.btn-primary:hover {
  background-color: var(--primary-dark);
  text-decoration: none;
}

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-lg);
  background: transparent;
  color: inherit;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.icon-button:hover {
  background-color: var(--control-background);
}

.social-link {
  display: inline-flex;
  padding: var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--control-background);
  color: var(--text-primary);
  transition: background-color var(--transition-fast) var(--easing-standard),
              color var(--transition-fast) var(--easing-standard);
}

.social-link:hover {
  background-color: var(--primary);
  color: var(--text-inverse);
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  padding: var(--space-6);
  transition: box-shadow var(--transition-fast) var(--easing-standard);
}

.card:hover {
  box-shadow: var(--shadow-lg);
}

.card-link {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--primary);
}

.card-link:hover {
  text-decoration: underline;
}
"#;
