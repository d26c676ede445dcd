//! Global CSS styles for the portfolio page.
//!
//! Warm paper tones with terracotta accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #faf7f2;
  --paper-deep: #f1ebe1;
  --paper-border: #e4dccf;

  /* CLAY (Accents) */
  --clay: #b5643c;
  --clay-dark: #8e4a29;

  /* INK (Text) */
  --ink: #2d2a26;
  --ink-soft: rgba(45, 42, 38, 0.7);
  --ink-muted: rgba(45, 42, 38, 0.5);

  /* Overlay */
  --backdrop: rgba(15, 12, 10, 0.92);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Layout */
  --nav-height: 70px;
  --radius: 8px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
  line-height: 1.6;
  overflow: auto;
}

img {
  display: block;
  max-width: 100%;
}

/* === Navigation === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  height: var(--nav-height);
  background: rgba(250, 247, 242, 0.96);
  box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
  transition: box-shadow var(--transition-normal);
}

.nav-container {
  max-width: 1200px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-family: var(--font-serif);
  font-size: 1.6rem;
  color: var(--ink);
  text-decoration: none;
}

.nav-menu {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--ink-soft);
  text-decoration: none;
  font-size: 0.95rem;
  letter-spacing: 0.05em;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--clay);
}

.hamburger {
  display: none;
  cursor: pointer;
}

.hamburger .bar {
  display: block;
  width: 25px;
  height: 3px;
  margin: 5px auto;
  background: var(--ink);
  transition: all var(--transition-normal);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  padding: calc(var(--nav-height) + 3rem) 1.5rem 3rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 2.5rem;
  background: linear-gradient(180deg, var(--paper) 0%, var(--paper-deep) 100%);
}

.hero-title {
  font-family: var(--font-serif);
  font-size: 3.5rem;
  font-weight: 500;
  text-align: center;
}

.hero-subtitle {
  color: var(--ink-soft);
  text-align: center;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  font-size: 0.85rem;
}

.hero-images {
  display: flex;
  gap: 1.5rem;
  flex-wrap: wrap;
  justify-content: center;
}

.hero-image-frame {
  width: 280px;
  aspect-ratio: 3 / 4;
  overflow: hidden;
  border-radius: var(--radius);
  background: var(--paper-border);
}

.hero-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

/* === Sections === */
.gallery-section,
.about-section {
  max-width: 1200px;
  margin: 0 auto;
  padding: 5rem 1.5rem;
  scroll-margin-top: var(--nav-height);
}

.section-title {
  font-family: var(--font-serif);
  font-size: 2.4rem;
  font-weight: 500;
  text-align: center;
  margin-bottom: 2.5rem;
}

/* === Gallery === */
.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.5rem;
}

.gallery-item {
  position: relative;
  aspect-ratio: 1 / 1;
  overflow: hidden;
  border-radius: var(--radius);
  background: var(--paper-deep);
  cursor: pointer;
}

.gallery-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transition: transform var(--transition-normal);
}

.gallery-item:hover img {
  transform: scale(1.05);
}

.image-container {
  width: 100%;
  height: 100%;
}

.image-container img {
  display: none;
}

.image-container img.active {
  display: block;
}

.multi-image-indicator {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  background: rgba(0, 0, 0, 0.6);
  color: #fff;
  font-size: 0.75rem;
}

.piece-label {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: 0.75rem 1rem;
  background: linear-gradient(0deg, rgba(0, 0, 0, 0.65) 0%, transparent 100%);
  color: #fff;
  font-size: 0.9rem;
}

/* === Timeline === */
.timeline {
  max-width: 720px;
  margin: 0 auto;
  border-left: 2px solid var(--paper-border);
  padding-left: 2rem;
}

.timeline-item {
  position: relative;
  margin-bottom: 2.5rem;
}

.timeline-item::before {
  content: '';
  position: absolute;
  left: calc(-2rem - 7px);
  top: 0.4rem;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--clay);
}

.timeline-period {
  color: var(--clay);
  font-size: 0.8rem;
  letter-spacing: 0.15em;
  text-transform: uppercase;
}

.timeline-title {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  font-weight: 500;
}

.timeline-detail {
  color: var(--ink-soft);
}

/* === Lightbox === */
.lightbox {
  display: none;
  position: fixed;
  inset: 0;
  z-index: 1000;
  background: var(--backdrop);
  align-items: center;
  justify-content: center;
}

.lightbox.active {
  display: flex;
}

.lightbox-img {
  max-width: 90vw;
  max-height: 85vh;
  object-fit: contain;
  border-radius: 4px;
}

.lightbox-close {
  position: absolute;
  top: 1.25rem;
  right: 2rem;
  color: #fff;
  font-size: 2.5rem;
  cursor: pointer;
}

.lightbox-prev,
.lightbox-next {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  padding: 0.5rem 1rem;
  border: none;
  background: transparent;
  color: #fff;
  font-size: 3rem;
  cursor: pointer;
  opacity: 0.7;
  transition: opacity var(--transition-fast);
}

.lightbox-prev { left: 1rem; }
.lightbox-next { right: 1rem; }

.lightbox-prev:hover,
.lightbox-next:hover,
.lightbox-close:hover {
  opacity: 1;
}

/* === Footer === */
.footer {
  padding: 2rem 1.5rem;
  text-align: center;
  color: var(--ink-muted);
  border-top: 1px solid var(--paper-border);
}

/* === Mobile (< 768px) === */
@media (max-width: 768px) {
  .hamburger {
    display: block;
  }

  .hamburger.active .bar:nth-child(2) {
    opacity: 0;
  }

  .hamburger.active .bar:nth-child(1) {
    transform: translateY(8px) rotate(45deg);
  }

  .hamburger.active .bar:nth-child(3) {
    transform: translateY(-8px) rotate(-45deg);
  }

  .nav-menu {
    position: fixed;
    top: var(--nav-height);
    left: -100%;
    width: 100%;
    flex-direction: column;
    gap: 0;
    text-align: center;
    background: var(--paper);
    box-shadow: 0 10px 27px rgba(0, 0, 0, 0.05);
    transition: left var(--transition-normal);
  }

  .nav-menu.active {
    left: 0;
  }

  .nav-item {
    padding: 1rem 0;
  }

  .hero-title {
    font-size: 2.4rem;
  }

  .gallery-grid {
    grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
    gap: 1rem;
  }
}
"#;
