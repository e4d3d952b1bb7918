// Demo player waveform math: bar heights, colors, playback phase and
// transcript timing. Nothing in here touches the DOM.

// Bar layout (backing-store pixels)
pub const BAR_WIDTH: f64 = 3.0;
pub const BAR_GAP: f64 = 4.0;
pub const BAR_RADIUS: f64 = 2.0;
pub const MIN_BAR_HEIGHT: f64 = 3.0;

// Live (analyser-driven) bars
pub const FREQ_WEIGHT: f64 = 0.85;
pub const AMBIENT_WEIGHT: f64 = 0.15;
pub const FLOOR_OFFSET: f64 = 0.05;
pub const PLAYING_HEIGHT_FRACTION: f64 = 0.45;

// Idle bars
pub const IDLE_HEIGHT_SCALE: f64 = 60.0;

/// Phase advance per frame.
pub const TIME_STEP_PLAYING: f64 = 0.03;
pub const TIME_STEP_IDLE: f64 = 0.012;

pub const COLOR_START: [u8; 3] = [124, 58, 237];
pub const COLOR_END: [u8; 3] = [6, 182, 212];

// Favicon bars
pub const FAVICON_SIZE: u32 = 32;
pub const FAVICON_BAR_WIDTH: f64 = 3.0;
pub const FAVICON_BAR_GAP: f64 = 5.0;
pub const FAVICON_BARS: usize = 3;
pub const FAVICON_PERIOD_MS: f64 = 600.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub height: f64,
    pub rgb: [u8; 3],
    pub alpha: f64,
}

#[inline]
pub fn bar_count(canvas_width: f64) -> usize {
    (canvas_width / (BAR_WIDTH + BAR_GAP)).floor().max(0.0) as usize
}

/// Height of bar `i` of `total` from a byte frequency spectrum.
pub fn live_bar_height(i: usize, total: usize, freq: &[u8], time: f64, canvas_height: f64) -> f64 {
    let idx = ((i as f64 / total as f64) * freq.len() as f64).floor() as usize;
    let value = freq.get(idx).copied().unwrap_or(0) as f64 / 255.0;
    let ambient = (i as f64 * 0.08 + time * 2.0).sin() * AMBIENT_WEIGHT;
    let h = (value * FREQ_WEIGHT + ambient + FLOOR_OFFSET) * canvas_height * PLAYING_HEIGHT_FRACTION;
    h.max(MIN_BAR_HEIGHT)
}

/// Breathing idle waveform: three detuned sines.
pub fn idle_bar_height(i: usize, time: f64) -> f64 {
    let i = i as f64;
    let wave1 = (i * 0.08 + time * 1.2).sin() * 0.35;
    let wave2 = (i * 0.12 + time * 0.8 + 1.0).sin() * 0.2;
    let wave3 = (i * 0.04 + time * 1.8 + 2.0).sin() * 0.15;
    (wave1 + wave2 + wave3).abs() * IDLE_HEIGHT_SCALE + MIN_BAR_HEIGHT
}

/// Horizontal violet → cyan gradient.
pub fn bar_color(i: usize, total: usize) -> [u8; 3] {
    let t = if total == 0 { 0.0 } else { i as f64 / total as f64 };
    let mut out = [0u8; 3];
    for (c, (a, b)) in out.iter_mut().zip(COLOR_START.iter().zip(COLOR_END.iter())) {
        let v = *a as f64 + (*b as f64 - *a as f64) * t;
        *c = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

pub fn bar_alpha(playing: bool, i: usize, time: f64, height: f64, canvas_height: f64) -> f64 {
    if playing {
        0.7 + (height / canvas_height) * 0.3
    } else {
        0.4 + (i as f64 * 0.1 + time).sin().abs() * 0.25
    }
}

/// Visualizer clock. Only the sine of `time` is ever used, so it grows
/// without bound.
#[derive(Clone, Debug, Default)]
pub struct WaveformState {
    pub time: f64,
}

impl WaveformState {
    /// Bars for one frame. `freq` is only consulted while `playing`; without
    /// it the idle animation is drawn.
    pub fn bars(
        &self,
        canvas_width: f64,
        canvas_height: f64,
        playing: bool,
        freq: Option<&[u8]>,
    ) -> Vec<Bar> {
        let total = bar_count(canvas_width);
        let live = freq.filter(|f| playing && !f.is_empty());
        (0..total)
            .map(|i| {
                let height = match live {
                    Some(f) => live_bar_height(i, total, f, self.time, canvas_height),
                    None => idle_bar_height(i, self.time),
                };
                Bar {
                    x: i as f64 * (BAR_WIDTH + BAR_GAP),
                    height,
                    rgb: bar_color(i, total),
                    alpha: bar_alpha(playing, i, self.time, height, canvas_height),
                }
            })
            .collect()
    }

    pub fn advance(&mut self, playing: bool) {
        self.time += if playing {
            TIME_STEP_PLAYING
        } else {
            TIME_STEP_IDLE
        };
    }
}

/// Lifecycle of the demo player.
///
/// `AudioGraphInitializing` covers the window between the first play gesture
/// (which builds the audio graph) and the media element's `play` event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerPhase {
    #[default]
    Idle,
    AudioGraphInitializing,
    Playing,
    Paused,
    Ended,
}

/// What a play/pause gesture should ask of the media element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureAction {
    Play,
    Pause,
}

impl PlayerPhase {
    #[inline]
    pub fn is_playing(self) -> bool {
        self == PlayerPhase::Playing
    }

    /// The "click to play" overlay covers the canvas until playback starts
    /// and again after the clip ends.
    #[inline]
    pub fn overlay_visible(self) -> bool {
        matches!(
            self,
            PlayerPhase::Idle | PlayerPhase::AudioGraphInitializing | PlayerPhase::Ended
        )
    }

    pub fn gesture_action(self) -> GestureAction {
        if self.is_playing() {
            GestureAction::Pause
        } else {
            GestureAction::Play
        }
    }

    /// Phase after a play gesture; `graph_built` says whether this gesture
    /// had to construct the audio graph.
    pub fn on_play_requested(self, graph_built: bool) -> Self {
        match self {
            PlayerPhase::Idle | PlayerPhase::Ended if graph_built => {
                PlayerPhase::AudioGraphInitializing
            }
            other => other,
        }
    }

    pub fn on_play(self) -> Self {
        PlayerPhase::Playing
    }

    pub fn on_pause(self) -> Self {
        match self {
            PlayerPhase::Ended => PlayerPhase::Ended,
            _ => PlayerPhase::Paused,
        }
    }

    pub fn on_ended(self) -> Self {
        PlayerPhase::Ended
    }

    /// The media refused to play (missing file, autoplay policy, ...).
    pub fn on_play_failed(self) -> Self {
        match self {
            PlayerPhase::AudioGraphInitializing => PlayerPhase::Idle,
            other => other,
        }
    }
}

/// A transcript row with a half-open `[start, end)` time window in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranscriptLine {
    pub start: f64,
    pub end: f64,
}

impl TranscriptLine {
    /// Parse `data-start` / `data-end`. Rows missing either bound never match.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let start = start?.trim().parse::<f64>().ok()?;
        let end = end?.trim().parse::<f64>().ok()?;
        Some(Self { start, end })
    }

    #[inline]
    pub fn is_active(&self, t: f64) -> bool {
        self.start <= t && t < self.end
    }
}

/// Active flags for every transcript row at `t`, plus the first row that was
/// not active in `prev` (the one to scroll to). Rows without bounds never
/// match; rows beyond `prev` count as previously inactive.
pub fn transcript_update(
    prev: &[bool],
    lines: &[Option<TranscriptLine>],
    t: f64,
) -> (Vec<bool>, Option<usize>) {
    let active: Vec<bool> = lines
        .iter()
        .map(|line| line.is_some_and(|l| l.is_active(t)))
        .collect();
    let was = prev.iter().copied().chain(std::iter::repeat(false));
    let newly = active
        .iter()
        .zip(was)
        .position(|(&now, was)| now && !was);
    (active, newly)
}

/// `M:SS`; non-finite input renders as `0:00`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "0:00".to_string();
    }
    let m = (secs / 60.0).floor() as u64;
    let s = (secs % 60.0).floor() as u64;
    format!("{}:{:02}", m, s)
}

#[inline]
fn known_duration(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Playback position as a percentage, once the duration is known.
pub fn progress_percent(current: f64, duration: f64) -> Option<f64> {
    known_duration(duration).map(|d| current / d * 100.0)
}

/// Seek target for a click at `fraction` of the progress bar width.
pub fn seek_target(fraction: f64, duration: f64) -> Option<f64> {
    known_duration(duration).map(|d| fraction * d)
}

pub fn duration_label(current: f64, duration: f64) -> String {
    format!("{} / {}", format_time(current), format_time(duration))
}

/// Heights of the three favicon bars at wall-clock `now_ms`.
pub fn favicon_bar_heights(now_ms: f64) -> [f64; FAVICON_BARS] {
    let t = now_ms / FAVICON_PERIOD_MS;
    let mut out = [0.0; FAVICON_BARS];
    for (i, h) in out.iter_mut().enumerate() {
        *h = 6.0 + (t + i as f64 * 1.2).sin() * 5.0;
    }
    out
}

/// Left edge of the first favicon bar so the group is centred.
pub fn favicon_bars_start_x() -> f64 {
    let bars = FAVICON_BARS as f64;
    (FAVICON_SIZE as f64 - (bars * FAVICON_BAR_WIDTH + (bars - 1.0) * FAVICON_BAR_GAP)) / 2.0
}
