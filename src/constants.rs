// Page wiring: element ids, selectors and timings. Each initializer quietly
// skips itself when its root element is not on the page.

// Preloader
pub const PRELOADER_ID: &str = "preloader";
pub const PRELOADER_AFTER_LOAD_MS: i32 = 800;
pub const PRELOADER_FALLBACK_MS: i32 = 3000;

// Background particles
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";

// Demo player
pub const WAVEFORM_CANVAS_ID: &str = "waveform-canvas";
pub const DEMO_AUDIO_ID: &str = "demo-audio";
pub const PLAY_BUTTON_ID: &str = "play-btn";
pub const PLAY_ICON_SELECTOR: &str = ".play-icon";
pub const PAUSE_ICON_SELECTOR: &str = ".pause-icon";
pub const PROGRESS_FILL_ID: &str = "progress-fill";
pub const PROGRESS_HANDLE_ID: &str = "progress-handle";
pub const PROGRESS_WRAP_ID: &str = "progress-wrap";
pub const DURATION_LABEL_ID: &str = "player-duration";
pub const VOLUME_BUTTON_ID: &str = "volume-btn";
pub const TRANSCRIPT_LINE_SELECTOR: &str = ".transcript-line";
pub const WAVEFORM_OVERLAY_ID: &str = "waveform-overlay";
pub const WAVEFORM_OVERLAY_SELECTOR: &str = ".waveform-overlay";
pub const WAVEFORM_WRAPPER_ID: &str = "waveform-wrapper";
pub const DEMO_PLAYER_ID: &str = "demo-player";
pub const FAVICON_SELECTOR: &str = "link[rel=\"icon\"]";
pub const WAVEFORM_CANVAS_HEIGHT: u32 = 200; // backing store; CSS height is half
pub const WAVEFORM_PIXEL_SCALE: f64 = 2.0;

// Audio analyser
pub const ANALYSER_FFT_SIZE: u32 = 256;
pub const ANALYSER_SMOOTHING: f64 = 0.8;

// Globe
pub const GLOBE_CANVAS_ID: &str = "globe-canvas";
pub const GLOBE_PIXEL_SCALE: f64 = 2.0;

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_LINKS_ID: &str = "nav-links";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_NAV_LINK_SELECTOR: &str = ".nav-link:not(.nav-link-cta)";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const CURSOR_GLOW_ID: &str = "cursor-glow";

// Scroll effects
pub const REVEAL_SELECTOR: &str = ".reveal-up";
pub const COUNTER_SELECTOR: &str = ".stat-number[data-target]";
pub const EVAL_FILL_SELECTOR: &str = ".eval-metric-fill";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

// Shared class names
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_PLAYING: &str = "playing";
pub const CLASS_MUTED: &str = "muted";
pub const CLASS_REVEALED: &str = "revealed";
pub const CLASS_ANIMATED: &str = "animated";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_VISIBLE: &str = "visible";

/// Spinner keyframes injected once for the "Sending..." button icon.
pub const SPIN_CSS: &str = "@keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } } .spin { animation: spin 1s linear infinite; }";
