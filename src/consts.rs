//! Shared tunables for the page behavior layer.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme token.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Particle field ──────────────────────────────────────────────

/// Number of particles in the decorative field.
pub const PARTICLE_COUNT: usize = 50;

/// Particle size range, in pixels: `[MIN, MIN + SPAN)`.
pub const PARTICLE_SIZE_MIN_PX: f64 = 2.0;
pub const PARTICLE_SIZE_SPAN_PX: f64 = 4.0;

/// Maximum animation delay, in seconds.
pub const PARTICLE_DELAY_MAX_S: f64 = 6.0;

/// Animation duration range, in seconds: `[MIN, MIN + SPAN)`.
pub const PARTICLE_DURATION_MIN_S: f64 = 6.0;
pub const PARTICLE_DURATION_SPAN_S: f64 = 3.0;

// ── Scroll reveal ───────────────────────────────────────────────

/// Visibility ratio that counts as "entered the viewport".
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin pulling the trigger boundary 50px above the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Counters ────────────────────────────────────────────────────

/// Number of increments a counter takes to reach its target.
pub const COUNTER_STEPS: u64 = 100;

/// Delay between counter increments, in milliseconds.
pub const COUNTER_TICK_MS: u64 = 30;

// ── Project filter ──────────────────────────────────────────────

/// Filter token matching every category.
pub const FILTER_ALL: &str = "all";

/// Delay added per visible card, producing the cascading fade-in.
pub const FILTER_STAGGER_MS: u64 = 100;

// ── Navbar / scrolling ──────────────────────────────────────────

/// Scroll offset (strictly) above which the navbar chrome engages.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Fixed-header allowance subtracted from anchor scroll targets.
pub const ANCHOR_HEADER_OFFSET_PX: f64 = 80.0;

// ── Notifications ───────────────────────────────────────────────

/// How long a banner stays up before auto-dismissal starts.
pub const NOTIFY_DISMISS_MS: u64 = 5000;

/// Fade-out allowance between hiding a banner and detaching it.
pub const NOTIFY_EXIT_MS: u64 = 150;

// ── Email delivery ──────────────────────────────────────────────

/// EmailJS public client key.
pub const EMAIL_PUBLIC_KEY: &str = "aFLwrrsESpqx_n5Wf";

/// EmailJS service identifier for the contact form.
pub const EMAIL_SERVICE_ID: &str = "service_6tvo6wr";

/// EmailJS template identifier for the contact form.
pub const EMAIL_TEMPLATE_ID: &str = "template_xexx0a9";
