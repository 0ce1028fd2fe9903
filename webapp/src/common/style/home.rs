pub const HOME_STYLES: &str = r#"
/* Portfolio page */

.portfolio {
  min-height: 100vh;
  background-color: var(--background);
  color: var(--text-primary);
  transition: background-color var(--transition-theme) var(--easing-standard),
              color var(--transition-theme) var(--easing-standard);
}

.portfolio section {
  padding: var(--space-20) 0;
  scroll-margin-top: var(--header-height);
}

.portfolio .section-alt {
  background-color: var(--background-alt);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: var(--space-8);
}

.section-text {
  font-size: 1.125rem;
  color: var(--text-secondary);
  max-width: 48rem;
  margin: 0 auto var(--space-4);
  text-align: center;
}

/* Hero */
.portfolio .hero {
  padding-top: var(--space-32);
  text-align: center;
}

.hero-banner {
  display: block;
  width: 100%;
  height: 220px;
  object-fit: cover;
  border-radius: var(--radius-lg);
  margin-bottom: var(--space-12);
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
}

.hero-title .highlight {
  color: var(--primary);
}

.hero-subtitle {
  font-size: 1.25rem;
  margin-bottom: var(--space-8);
  color: var(--text-secondary);
}

.hero-links {
  display: flex;
  justify-content: center;
  gap: var(--space-4);
}

@media (min-width: 768px) {
  .hero-title {
    font-size: 4.5rem;
  }

  .hero-subtitle {
    font-size: 1.5rem;
  }
}

/* Projects and research */
.card-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: var(--space-8);
}

@media (min-width: 768px) {
  .card-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (min-width: 1024px) {
  .card-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

.card-title {
  font-size: 1.5rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.card-text {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

.paper-list {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  max-width: 56rem;
  margin: 0 auto;
}

.paper-meta {
  color: var(--text-secondary);
  font-size: 0.875rem;
  margin-bottom: var(--space-2);
}

.paper-links {
  display: flex;
  gap: var(--space-4);
}

/* Contact and footer */
.contact {
  text-align: center;
}

.site-footer {
  padding: var(--space-8) 0;
  text-align: center;
  border-top: 1px solid var(--border);
  color: var(--text-secondary);
}

.load-error {
  padding: var(--space-32) var(--space-4);
  text-align: center;
  color: var(--text-secondary);
}
"#;

// entrance animations
//
// purely cosmetic; delays are fixed per element and research cards reveal once as they scroll
// into view where the browser supports scroll-driven animations
pub const ANIMATIONS: &str = r#"
@keyframes fade-up {
  from {
    opacity: 0;
    transform: translateY(20px);
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.fade-up {
  animation: fade-up 0.6s var(--easing-standard) both;
}

.delay-1 {
  animation-delay: 0.2s;
}

.delay-2 {
  animation-delay: 0.4s;
}

@supports (animation-timeline: view()) {
  .reveal {
    animation: fade-up linear both;
    animation-timeline: view();
    animation-range: entry 0% entry 60%;
  }
}

@media (prefers-reduced-motion: reduce) {
  .fade-up,
  .reveal {
    animation: none;
  }
}
"#;
