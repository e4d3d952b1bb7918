// Scroll-triggered effects: reveal delays and counter easing/formatting.

/// Counters run from 0 to their target over this many milliseconds.
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// IntersectionObserver thresholds per effect
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const EVAL_BAR_THRESHOLD: f64 = 0.3;

/// `1 - (1 - p)^3`: fast start, gentle settle.
#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

/// Animation progress in `[0, 1]` after `elapsed_ms`.
#[inline]
pub fn counter_progress(elapsed_ms: f64) -> f64 {
    (elapsed_ms / COUNTER_DURATION_MS).clamp(0.0, 1.0)
}

/// Render a counter value: one decimal place or a rounded integer, then the
/// suffix verbatim. Zero of either sign renders unsigned.
///
/// Exact binary ties at the second decimal round to even (`0.25` → `0.2`),
/// where `toFixed` would round up.
pub fn format_counter(value: f64, decimal: bool, suffix: &str) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if decimal {
        format!("{:.1}{}", value, suffix)
    } else {
        // Round half up, the way a browser's Math.round does.
        format!("{}{}", (value + 0.5).floor() as i64, suffix)
    }
}

/// Parse a reveal `data-delay` like `parseInt`: leading digits only, anything
/// else (missing, empty, garbage) means no delay. Like `data-target`, only
/// the numeric prefix counts and trailing text is ignored.
pub fn parse_delay_ms(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else {
        return 0;
    };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse::<i32>().unwrap_or(0)
}

/// Leading decimal number of `raw`, the way `parseFloat` reads it: `"98.5%"`
/// gives `98.5`, `"x1"` gives nothing.
pub fn parse_leading_f64(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(s.len());
    let candidate = &s[..end];
    // Longest parsable prefix wins ("1e" -> "1", "1.2.3" -> "1.2")
    (1..=candidate.len())
        .rev()
        .find_map(|n| candidate[..n].parse::<f64>().ok())
}

/// A `.stat-number` element's animation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    pub target: f64,
    pub suffix: String,
    pub decimal: bool,
}

impl Counter {
    /// Build from `data-target`, `data-suffix` and `data-decimal`. The target
    /// is read by its numeric prefix; without one the element is left alone.
    pub fn from_attributes(
        target: Option<&str>,
        suffix: Option<&str>,
        decimal: Option<&str>,
    ) -> Option<Self> {
        let target = parse_leading_f64(target?)?;
        Some(Self {
            target,
            suffix: suffix.unwrap_or_default().to_string(),
            decimal: decimal == Some("true"),
        })
    }

    /// Displayed value at linear progress `p`.
    #[inline]
    pub fn value_at(&self, p: f64) -> f64 {
        ease_out_cubic(p.clamp(0.0, 1.0)) * self.target
    }

    pub fn text_at(&self, p: f64) -> String {
        format_counter(self.value_at(p), self.decimal, &self.suffix)
    }
}
