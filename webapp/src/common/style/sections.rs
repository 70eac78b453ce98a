pub const SECTION_STYLES: &str = r#"
section {
  position: relative;
  padding: var(--space-24) 0;
  scroll-margin-top: var(--header-height);
}

.section-heading {
  text-align: center;
  margin-bottom: var(--space-12);
}

.section-title {
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.section-title span,
.highlight {
  color: hsl(var(--accent));
}

.section-subtitle {
  color: hsl(var(--neutral));
  max-width: 640px;
  margin: 0 auto;
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
}

.particles {
  position: absolute;
  inset: 0;
  overflow: hidden;
  pointer-events: none;
}

.particle {
  position: absolute;
  top: 0;
  left: 0;
  border-radius: var(--radius-full);
  background-color: hsl(var(--accent));
}

.hero-grid {
  position: relative;
  display: grid;
  grid-template-columns: 1fr 1fr;
  align-items: center;
  gap: var(--space-12);
}

.hero-greeting {
  font-size: 1.25rem;
  color: hsl(var(--secondary));
  margin-bottom: var(--space-2);
}

.hero-greeting .letter {
  display: inline-block;
  white-space: pre;
}

.hero-name {
  font-family: var(--font-display);
  font-size: 3.5rem;
  font-weight: 700;
  line-height: 1.1;
  margin-bottom: var(--space-4);
}

.hero-role {
  font-size: 1.5rem;
  color: hsl(var(--neutral));
  min-height: 2.25rem;
  margin-bottom: var(--space-6);
}

.hero-blurb {
  color: hsl(var(--neutral));
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
}

.orbit-stage {
  position: relative;
  width: 360px;
  height: 360px;
  margin: 0 auto;
}

.orbit-ring {
  position: absolute;
  inset: 0;
  border: 1px dashed hsl(var(--accent) / 0.4);
  border-radius: var(--radius-full);
}

.orbit-ring.inner {
  inset: 40px;
  border-color: hsl(var(--secondary) / 0.4);
}

.orbit-badge {
  position: absolute;
  top: 50%;
  left: 50%;
  width: 44px;
  height: 44px;
  margin: -22px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
  background-color: hsl(var(--neutral-dark));
  border: 1px solid hsl(var(--accent) / 0.6);
  box-shadow: var(--glow);
}

.orbit-core {
  position: absolute;
  inset: 110px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  font-family: var(--font-display);
  font-size: 2rem;
  background: radial-gradient(circle, hsl(var(--primary)), hsl(var(--neutral-dark)));
  box-shadow: var(--glow);
}

.scroll-indicator {
  position: absolute;
  bottom: var(--space-8);
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: var(--space-2);
  color: hsl(var(--neutral));
  font-size: 0.875rem;
}

.scroll-indicator i {
  animation: bounce 1.5s ease-in-out infinite;
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 2fr 3fr;
  gap: var(--space-12);
  align-items: start;
}

.about-portrait {
  aspect-ratio: 1;
  border-radius: var(--radius-lg);
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--font-display);
  font-size: 4rem;
  background: linear-gradient(135deg, hsl(var(--primary)), hsl(var(--muted)));
  box-shadow: var(--shadow-lg);
}

.about-bio p {
  color: hsl(var(--neutral));
  margin-bottom: var(--space-4);
}

.stats {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: var(--space-4);
  margin-top: var(--space-8);
}

.stat {
  text-align: center;
  padding: var(--space-4);
  border-radius: var(--radius-md);
  background-color: hsl(var(--muted) / 0.4);
}

.stat-value {
  font-family: var(--font-display);
  font-size: 1.75rem;
  color: hsl(var(--accent));
}

.stat-label {
  font-size: 0.875rem;
  color: hsl(var(--neutral));
}

/* Portfolio */
.project-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-8);
}

.project-card {
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border-radius: var(--radius-lg);
  background-color: hsl(var(--neutral-dark) / 0.6);
  border: 1px solid hsl(var(--muted));
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.project-card:hover {
  transform: translateY(-6px);
  box-shadow: var(--glow);
}

.project-card img {
  width: 100%;
  height: 200px;
  object-fit: cover;
}

.project-body {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  padding: var(--space-6);
  flex: 1;
}

.project-body p {
  color: hsl(var(--neutral));
  font-size: 0.9rem;
  flex: 1;
}

.tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.tag {
  font-size: 0.75rem;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  color: hsl(var(--accent));
  background-color: hsl(var(--accent) / 0.1);
}

.project-links {
  display: flex;
  gap: var(--space-4);
}

.portfolio-more {
  display: flex;
  justify-content: center;
  margin-top: var(--space-12);
}

/* Skills */
.skill-chips {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.skill-chip {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  background-color: hsl(var(--neutral-dark) / 0.6);
}

.skill-chip small {
  color: hsl(var(--neutral));
}

.skill-yellow { color: #facc15; }
.skill-blue { color: #60a5fa; }
.skill-green { color: #4ade80; }
.skill-purple { color: #c084fc; }
.skill-red { color: #f87171; }
.skill-gray { color: #d1d5db; }
.skill-orange { color: #fb923c; }

.skill-categories {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: var(--space-8);
}

.skill-category {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: hsl(var(--neutral-dark) / 0.6);
  border: 1px solid hsl(var(--muted));
}

.skill-category h3 {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-6);
}

.skill-category h3 i {
  color: hsl(var(--accent));
}

.skill-row {
  margin-bottom: var(--space-4);
}

.skill-row-label {
  display: flex;
  justify-content: space-between;
  font-size: 0.9rem;
  margin-bottom: var(--space-1);
}

.progress {
  height: 8px;
  border-radius: var(--radius-full);
  background-color: hsl(var(--muted));
  overflow: hidden;
}

.progress-bar {
  height: 100%;
  border-radius: var(--radius-full);
  background: linear-gradient(90deg, hsl(var(--secondary)), hsl(var(--accent)));
  transition-property: width;
  transition-duration: 1s;
  transition-timing-function: ease-out;
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: 2fr 3fr;
  gap: var(--space-12);
}

.contact-info {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.info-item {
  display: flex;
  align-items: center;
  gap: var(--space-4);
}

.info-item i {
  width: 44px;
  height: 44px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  color: hsl(var(--accent));
  background-color: hsl(var(--accent) / 0.1);
}

.info-label {
  font-size: 0.8rem;
  color: hsl(var(--neutral));
}

.socials {
  display: flex;
  gap: var(--space-3);
}

.social {
  width: 40px;
  height: 40px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  color: hsl(var(--foreground));
  background-color: hsl(var(--muted));
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.social:hover {
  background-color: hsl(var(--accent));
  color: hsl(var(--neutral-dark));
}

.contact-form {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-4);
  padding: var(--space-8);
  border-radius: var(--radius-lg);
  background-color: hsl(var(--neutral-dark) / 0.6);
}

.field {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
}

.field.wide,
.contact-form .btn {
  grid-column: 1 / -1;
}

.field label {
  font-size: 0.875rem;
  color: hsl(var(--neutral));
}

.field input,
.field textarea {
  font: inherit;
  color: hsl(var(--foreground));
  background-color: hsl(var(--muted) / 0.4);
  border: 1px solid hsl(var(--muted));
  border-radius: var(--radius-md);
  padding: var(--space-3);
  outline: none;
}

.field input:focus,
.field textarea:focus {
  border-color: hsl(var(--accent));
}

.form-status {
  grid-column: 1 / -1;
  font-size: 0.875rem;
}

.form-status.ok {
  color: hsl(var(--secondary));
}

.form-status.failed {
  color: hsl(0 72% 60%);
}

/* Footer */
.footer {
  padding: var(--space-12) 0 var(--space-6);
  background-color: hsl(var(--neutral-dark));
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: var(--space-8);
  margin-bottom: var(--space-8);
}

.footer h4 {
  margin-bottom: var(--space-4);
}

.footer-links {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
}

.footer-links a {
  color: hsl(var(--neutral));
}

.footer-links a:hover {
  color: hsl(var(--accent));
}

.copyright {
  text-align: center;
  font-size: 0.875rem;
  color: hsl(var(--neutral));
  border-top: 1px solid hsl(var(--muted));
  padding-top: var(--space-6);
}

@media (max-width: 1023px) {
  .project-grid,
  .skill-categories {
    grid-template-columns: repeat(2, 1fr);
  }
}

@media (max-width: 767px) {
  .hero-grid,
  .about-grid,
  .contact-grid,
  .footer-grid,
  .project-grid,
  .skill-categories {
    grid-template-columns: 1fr;
  }

  .stats {
    grid-template-columns: repeat(2, 1fr);
  }

  .contact-form {
    grid-template-columns: 1fr;
  }

  .hero-name {
    font-size: 2.5rem;
  }

  .orbit-stage {
    width: 280px;
    height: 280px;
  }

  .orbit-core {
    inset: 80px;
  }
}
"#;
