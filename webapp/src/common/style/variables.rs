// palette tokens are "H S% L%" triples so they can be used as hsl(var(--x)) or with an alpha
// channel as hsl(var(--x) / 0.5).  the values here are the dark palette; the theme provider
// overwrites them on the document element at start-up and on every toggle
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Palette */
  --background: 260 75% 25%;
  --primary: 260 75% 45%;
  --secondary: 180 100% 50%;
  --accent: 187 100% 60%;
  --foreground: 0 0% 100%;
  --muted: 260 70% 35%;
  --neutral: 217 10% 70%;
  --neutral-dark: 240 30% 10%;

  /* Typography */
  --font-display: 'Orbitron', system-ui, sans-serif;
  --font-body: 'Poppins', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;

  /* Layout */
  --header-height: 72px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-md: 0 4px 12px rgba(0, 0, 0, 0.25);
  --shadow-lg: 0 10px 30px rgba(0, 0, 0, 0.35);
  --glow: 0 0 20px hsl(var(--accent) / 0.5);

  /* Transitions */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}
"#;
