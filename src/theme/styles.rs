//! Global CSS for the portfolio deck.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Typography */
  --font-sans: 'Pretendard', -apple-system, 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-theme: 0.4s ease;
  --transition-page: 0.8s ease-in-out;
  --transition-flip: 0.45s cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  margin: 0;
  font-family: var(--font-sans);
  background-color: var(--background);
  color: var(--text);
  overflow: hidden;
  transition: all var(--transition-theme);
}

/* === Deck === */
.deck {
  position: relative;
  width: 100vw;
  height: 100vh;
  overflow: hidden;
  outline: none;
}

.page-section {
  position: fixed;
  top: 0;
  left: 0;
  width: 100vw;
  height: 100vh;
  display: flex;
  justify-content: center;
  align-items: center;
  padding: 3rem 1.5rem;
  background-color: var(--background);
  transition: transform var(--transition-page), background-color var(--transition-theme);
  will-change: transform;
}

/* The first layer slides up on load, like every later page does */
.page-section.entering {
  animation: slide-up var(--transition-page) both;
}

@keyframes slide-up {
  from { transform: translateY(100%); }
  to { transform: translateY(0%); }
}

/* === Cards === */
.content-card {
  background: var(--card);
  border-radius: 1.25rem;
  padding: 2.5rem;
  max-width: 840px;
  width: 100%;
  box-shadow: 0 20px 60px rgba(0, 0, 0, 0.15);
  transition: box-shadow var(--transition-theme), transform 0.3s ease;
}

.content-card:hover {
  box-shadow: 0 30px 90px rgba(0, 0, 0, 0.2);
  transform: translateY(-6px);
}

.card-title {
  font-size: var(--text-2xl);
  color: var(--accent);
  margin: 0 0 1.25rem;
}

.card-text {
  font-size: var(--text-base);
  line-height: 1.8rem;
  margin: 0 0 1rem;
  white-space: pre-line;
  min-height: 1.8rem;
}

/* === Intro === */
.intro {
  text-align: center;
  max-width: 800px;
  padding: 2rem;
}

.intro-name {
  font-size: var(--text-3xl);
  font-weight: 600;
  margin-bottom: 1.5rem;
  animation: drop-in 0.8s ease both;
}

.intro-tagline {
  font-size: 1.75rem;
  font-weight: 500;
  white-space: pre-line;
  min-height: 7rem;
  animation: rise-in 1s ease 0.3s both;
}

.intro-caret {
  display: inline-block;
  width: 2px;
  height: 1.5rem;
  margin-left: 2px;
  vertical-align: text-bottom;
  background: currentColor;
  animation: caret-blink 1s step-end infinite;
}

@keyframes drop-in {
  from { transform: translateY(-20px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes rise-in {
  from { transform: translateY(20px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes caret-blink {
  50% { opacity: 0; }
}

/* === Project Gallery === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1rem;
}

.flip-card {
  perspective: 1000px;
  width: 100%;
  height: 220px;
  position: relative;
  cursor: pointer;
  transform: translateZ(0);
  will-change: transform;
}

.flip-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
  transition: transform var(--transition-flip);
  will-change: transform;
}

.flip-card:hover .flip-inner,
.flip-card:focus-within .flip-inner {
  transform: rotateY(180deg);
}

.flip-face {
  position: absolute;
  inset: 0;
  backface-visibility: hidden;
  -webkit-backface-visibility: hidden;
  border-radius: 0.75rem;
  box-shadow: 0 6px 14px rgba(0, 0, 0, 0.08);
  padding: 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  background: var(--background);
  text-align: center;
  transform: translateZ(0);
}

.flip-back {
  transform: rotateY(180deg) translateZ(0);
}

.flip-title {
  font-weight: bold;
  margin: 0;
}

.flip-description {
  margin: 0.5rem 0 0;
  line-height: 1.6rem;
}

.flip-link {
  margin-top: 0.5rem;
  color: var(--accent);
  font-weight: 600;
  text-decoration: none;
}

.flip-link:hover {
  text-decoration: underline;
}

/* === Buttons === */
.btn-accent {
  padding: 0.5rem 1rem;
  background: var(--accent);
  color: #ffffff;
  border: none;
  border-radius: 0.5rem;
  font-family: var(--font-sans);
  cursor: pointer;
  transition: filter 0.2s ease;
}

.btn-accent:hover {
  filter: brightness(1.1);
}


.theme-toggle {
  position: fixed;
  top: 1rem;
  right: 1rem;
  z-index: 100;
}

/* === Section Nav === */
.section-nav {
  position: fixed;
  top: 1rem;
  left: 1rem;
  display: flex;
  gap: 1rem;
  z-index: 100;
}

.nav-item {
  cursor: pointer;
  color: var(--text);
  opacity: 0.7;
  transition: color 0.2s ease, opacity 0.2s ease;
}

.nav-item:hover,
.nav-item.active {
  color: var(--accent);
  opacity: 1;
}

/* === Content Error === */
.content-error {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 100vh;
  padding: 1.5rem;
}

/* === Accessibility === */
@media (prefers-reduced-motion: reduce) {
  .page-section,
  .page-section.entering,
  .flip-inner,
  .intro-name,
  .intro-tagline {
    transition: none;
    animation: none;
  }
}

/* === Responsive === */
@media (max-width: 700px) {
  .section-nav {
    gap: 0.5rem;
    flex-wrap: wrap;
    right: 8rem;
    font-size: 0.875rem;
  }

  .content-card {
    padding: 1.5rem;
  }

  .intro-tagline {
    font-size: 1.25rem;
  }
}
"#;
