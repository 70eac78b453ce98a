pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  font-weight: 500;
  cursor: pointer;
  border: none;
  outline: none;
  transition: transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard),
              background-color var(--transition-fast) var(--easing-standard);
}

.btn:hover {
  transform: translateY(-2px);
  box-shadow: var(--glow);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
  transform: none;
}

.btn-primary {
  background: linear-gradient(90deg, hsl(var(--secondary)), hsl(var(--accent)));
  color: hsl(var(--neutral-dark));
}

.btn-outline {
  background: transparent;
  color: hsl(var(--accent));
  border: 1px solid hsl(var(--accent));
}

.spinner {
  width: 1em;
  height: 1em;
  border: 2px solid currentColor;
  border-right-color: transparent;
  border-radius: var(--radius-full);
  animation: spin 0.75s linear infinite;
}

/* Motion primitive */
.motion {
  will-change: transform, opacity;
}

/* Navigation */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  padding: var(--space-6) 0;
  background: transparent;
  transition: padding var(--transition-normal) var(--easing-standard),
              background-color var(--transition-normal) var(--easing-standard);
}

.navbar.scrolled {
  padding: var(--space-3) 0;
  background-color: hsl(var(--primary) / 0.8);
  backdrop-filter: blur(12px);
  box-shadow: var(--shadow-lg);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 700;
  color: hsl(var(--accent));
}

.brand span {
  color: hsl(var(--foreground));
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  position: relative;
  color: hsl(var(--neutral));
  padding: var(--space-1) 0;
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: hsl(var(--accent));
}

/* the underline cross-fades between links rather than sliding */
.nav-link::after {
  content: "";
  position: absolute;
  left: 0;
  right: 0;
  bottom: -4px;
  height: 2px;
  border-radius: var(--radius-full);
  background: hsl(var(--accent));
  opacity: 0;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.nav-link.active::after {
  opacity: 1;
}

.menu-button {
  display: none;
  background: none;
  border: none;
  color: hsl(var(--neutral));
  font-size: 1.25rem;
  cursor: pointer;
}

.menu-overlay {
  display: flex;
  flex-direction: column;
  gap: var(--space-4);
  padding: var(--space-4);
  background-color: hsl(var(--neutral-dark) / 0.95);
  backdrop-filter: blur(12px);
  animation: menu-open var(--transition-normal) var(--easing-standard);
}

@keyframes menu-open {
  from { opacity: 0; transform: translateY(-8px); }
  to { opacity: 1; transform: translateY(0); }
}

.menu-overlay .nav-link {
  padding: var(--space-2) 0;
}

@media (max-width: 767px) {
  .nav-links {
    display: none;
  }

  .menu-button {
    display: block;
  }
}

@media (min-width: 768px) {
  .menu-overlay {
    display: none;
  }
}

.theme-toggle {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  background: none;
  border: 1px solid hsl(var(--neutral) / 0.4);
  border-radius: var(--radius-full);
  color: hsl(var(--neutral));
  padding: var(--space-2) var(--space-3);
  cursor: pointer;
  transition: color var(--transition-fast) var(--easing-standard);
}

.theme-toggle:hover {
  color: hsl(var(--accent));
}

/* Toasts */
.toaster {
  position: fixed;
  bottom: var(--space-4);
  right: var(--space-4);
  z-index: 100;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  list-style: none;
  max-width: 360px;
  width: calc(100% - 2 * var(--space-4));
}

.toast {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: var(--space-3);
  padding: var(--space-4);
  border-radius: var(--radius-md);
  border: 1px solid hsl(var(--neutral) / 0.3);
  background-color: hsl(var(--neutral-dark));
  color: hsl(var(--foreground));
  box-shadow: var(--shadow-lg);
  animation: menu-open var(--transition-normal) var(--easing-standard);
}

.toast-success {
  border-color: hsl(var(--secondary) / 0.6);
}

.toast-destructive {
  background-color: hsl(0 72% 45%);
  border-color: hsl(0 72% 55%);
  color: hsl(0 0% 100%);
}

.toast-title {
  font-weight: 600;
}

.toast-description {
  font-size: 0.875rem;
  opacity: 0.9;
}

.toast-close {
  background: none;
  border: none;
  color: inherit;
  opacity: 0.7;
  cursor: pointer;
}

.toast-close:hover {
  opacity: 1;
}

/* Preloader */
.preloader {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  background-color: #000;
  opacity: 1;
  transition-property: opacity;
  transition-timing-function: var(--easing-standard);
}

.preloader.fading {
  opacity: 0;
  pointer-events: none;
}

.preloader-title {
  font-family: var(--font-display);
  font-size: 3.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  background: linear-gradient(90deg, #3b82f6, #a855f7, #22c55e);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  filter: drop-shadow(0 0 10px rgba(79, 70, 229, 0.8));
  text-align: center;
}

.preloader-subtitle {
  font-size: 1.25rem;
  font-weight: 300;
  letter-spacing: 0.05em;
  color: #67e8f9;
  text-align: center;
  animation: pulse-glow 2s ease-in-out infinite;
}

.star {
  position: absolute;
  width: 4px;
  height: 4px;
  border-radius: var(--radius-full);
  background-color: #fff;
}

/* Scroll to top */
.scroll-top {
  position: fixed;
  bottom: var(--space-8);
  right: var(--space-8);
  z-index: 40;
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  border: none;
  cursor: pointer;
  background: linear-gradient(135deg, hsl(var(--secondary)), hsl(var(--accent)));
  color: hsl(var(--neutral-dark));
  box-shadow: var(--glow);
  transition: opacity var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.scroll-top.hidden {
  opacity: 0;
  transform: translateY(16px);
  pointer-events: none;
}

/* Not found */
.not-found {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
  text-align: center;
}

.not-found h1 {
  font-family: var(--font-display);
  font-size: 4rem;
  color: hsl(var(--accent));
}
"#;
