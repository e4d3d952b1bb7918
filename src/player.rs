use crate::audio::AudioSlot;
use crate::constants::*;
use crate::core::waveform::{
    duration_label, format_time, progress_percent, seek_target, GestureAction, PlayerPhase,
    transcript_update, TranscriptLine, WaveformState,
};
use crate::dom;
use crate::frame::AnimationLoop;
use crate::input;
use crate::overlay;
use crate::render::{favicon::FaviconPainter, waveform::draw_bars};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Mutable player state shared by the media listeners and the bar loop.
struct PlayerState {
    phase: PlayerPhase,
    audio: AudioSlot,
    waveform: WaveformState,
    favicon_loop: Option<AnimationLoop>,
    active_lines: Vec<bool>,
}

/// Elements the player reads or mutates. Everything but the media element is
/// optional chrome.
struct PlayerUi {
    audio: web::HtmlAudioElement,
    play_icon: Option<web::HtmlElement>,
    pause_icon: Option<web::HtmlElement>,
    progress_fill: Option<web::HtmlElement>,
    progress_handle: Option<web::HtmlElement>,
    duration_label: Option<web::Element>,
    overlay: Option<web::Element>,
    player: Option<web::Element>,
    transcript: Transcript,
    favicon: Option<FaviconSwap>,
}

/// `.transcript-line` rows and their parsed time windows, index-aligned.
struct Transcript {
    rows: Vec<web::Element>,
    lines: Vec<Option<TranscriptLine>>,
}

struct FaviconSwap {
    link: web::HtmlLinkElement,
    original_href: String,
    painter: FaviconPainter,
}

type Shared = (Rc<RefCell<PlayerState>>, Rc<PlayerUi>);

/// Demo call player: bar visualizer, transport controls and transcript.
///
/// The bar loop only needs the canvas; controls are wired when the play
/// button and the media element are both present.
pub fn init(document: &web::Document) -> anyhow::Result<Option<AnimationLoop>> {
    let Some(canvas) = dom::by_id::<web::HtmlCanvasElement>(document, WAVEFORM_CANVAS_ID) else {
        log::debug!("no #{WAVEFORM_CANVAS_ID}, skipping demo player");
        return Ok(None);
    };
    let ctx = dom::context_2d(&canvas)?;

    resize_canvas(&canvas);
    {
        let canvas = canvas.clone();
        dom::on_resize(move || resize_canvas(&canvas));
    }

    let rows = dom::query_all(document, TRANSCRIPT_LINE_SELECTOR);
    let lines = rows
        .iter()
        .map(|el| {
            TranscriptLine::parse(
                el.get_attribute("data-start").as_deref(),
                el.get_attribute("data-end").as_deref(),
            )
        })
        .collect();
    let transcript = Transcript { rows, lines };
    let mut active_lines = vec![false; transcript.rows.len()];
    if let Some(first) = transcript.rows.first() {
        dom::add_class(first, CLASS_ACTIVE);
        active_lines[0] = true;
    }

    let state = Rc::new(RefCell::new(PlayerState {
        phase: PlayerPhase::Idle,
        audio: AudioSlot::default(),
        waveform: WaveformState::default(),
        favicon_loop: None,
        active_lines,
    }));

    let audio = dom::by_id::<web::HtmlAudioElement>(document, DEMO_AUDIO_ID);
    let play_btn = document.get_element_by_id(PLAY_BUTTON_ID);
    match (audio, play_btn) {
        (Some(audio), Some(play_btn)) => {
            let ui = Rc::new(PlayerUi {
                audio,
                play_icon: query_html(&play_btn, PLAY_ICON_SELECTOR),
                pause_icon: query_html(&play_btn, PAUSE_ICON_SELECTOR),
                progress_fill: dom::by_id(document, PROGRESS_FILL_ID),
                progress_handle: dom::by_id(document, PROGRESS_HANDLE_ID),
                duration_label: document.get_element_by_id(DURATION_LABEL_ID),
                overlay: document.get_element_by_id(WAVEFORM_OVERLAY_ID),
                player: document.get_element_by_id(DEMO_PLAYER_ID),
                transcript,
                favicon: favicon_swap(document),
            });
            wire_controls(document, &canvas, &play_btn, (state.clone(), ui));
        }
        _ => log::debug!("demo player controls missing, visualizer only"),
    }

    let handle = AnimationLoop::forever(move || {
        let mut st = state.borrow_mut();
        let PlayerState {
            phase,
            audio,
            waveform,
            ..
        } = &mut *st;
        let playing = phase.is_playing();
        let freq = if playing {
            audio.graph_mut().map(|g| g.frequency_data())
        } else {
            None
        };
        let bars = waveform.bars(
            canvas.width() as f64,
            canvas.height() as f64,
            playing,
            freq,
        );
        draw_bars(&ctx, &canvas, &bars);
        waveform.advance(playing);
    });
    Ok(Some(handle))
}

fn resize_canvas(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_to_parent(
        canvas,
        WAVEFORM_PIXEL_SCALE,
        Some(WAVEFORM_CANVAS_HEIGHT),
        Some(WAVEFORM_CANVAS_HEIGHT as f64 / WAVEFORM_PIXEL_SCALE),
    );
}

fn query_html(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn favicon_swap(document: &web::Document) -> Option<FaviconSwap> {
    let link = document
        .query_selector(FAVICON_SELECTOR)
        .ok()
        .flatten()?
        .dyn_into::<web::HtmlLinkElement>()
        .ok()?;
    let painter = match FaviconPainter::new(document) {
        Ok(p) => p,
        Err(e) => {
            log::debug!("favicon animation unavailable: {:?}", e);
            return None;
        }
    };
    Some(FaviconSwap {
        original_href: link.href(),
        link,
        painter,
    })
}

fn wire_controls(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    play_btn: &web::Element,
    shared: Shared,
) {
    let (state, ui) = shared;

    let toggle: Rc<dyn Fn()> = {
        let state = state.clone();
        let ui = ui.clone();
        Rc::new(move || toggle_playback(&state, &ui))
    };

    {
        let toggle = toggle.clone();
        dom::on(play_btn, "click", move || toggle());
    }
    if let Some(overlay_el) = &ui.overlay {
        let toggle = toggle.clone();
        dom::on(overlay_el, "click", move || toggle());
    }
    if let Some(wrapper) = document.get_element_by_id(WAVEFORM_WRAPPER_ID) {
        let toggle = toggle.clone();
        let canvas_val: JsValue = canvas.clone().into();
        dom::on_event(&wrapper, "click", move |ev: web::MouseEvent| {
            let Some(target) = ev.target() else {
                return;
            };
            let on_canvas = JsValue::from(target.clone()) == canvas_val;
            let on_overlay = target
                .dyn_ref::<web::Element>()
                .and_then(|el| el.closest(WAVEFORM_OVERLAY_SELECTOR).ok().flatten())
                .is_some();
            if on_canvas || on_overlay {
                toggle();
            }
        });
    }

    wire_media_events((state.clone(), ui.clone()));

    if let Some(wrap) = document.get_element_by_id(PROGRESS_WRAP_ID) {
        let ui = ui.clone();
        let wrap_el = wrap.clone();
        dom::on_event(&wrap, "click", move |ev: web::MouseEvent| {
            let Some(fraction) = input::pointer_fraction(&ev, &wrap_el) else {
                return;
            };
            if let Some(t) = seek_target(fraction, ui.audio.duration()) {
                ui.audio.set_current_time(t);
            }
        });
    }

    if let Some(volume) = document.get_element_by_id(VOLUME_BUTTON_ID) {
        let audio = ui.audio.clone();
        let volume_el = volume.clone();
        dom::on(&volume, "click", move || {
            let muted = !audio.muted();
            audio.set_muted(muted);
            dom::set_class(&volume_el, CLASS_MUTED, muted);
        });
    }
}

fn toggle_playback(state: &Rc<RefCell<PlayerState>>, ui: &PlayerUi) {
    let action = {
        let mut st = state.borrow_mut();
        let built = st.audio.ensure(&ui.audio);
        let action = st.phase.gesture_action();
        if action == GestureAction::Play {
            st.phase = st.phase.on_play_requested(built);
        }
        action
    };

    match action {
        GestureAction::Pause => {
            _ = ui.audio.pause();
        }
        GestureAction::Play => match ui.audio.play() {
            Ok(promise) => {
                let state = state.clone();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        play_failed(&state, e);
                    }
                });
            }
            Err(e) => play_failed(state, e),
        },
    }
}

/// Missing media or a blocked autoplay: keep the idle bars, say nothing.
fn play_failed(state: &Rc<RefCell<PlayerState>>, e: JsValue) {
    log::debug!("[player] playback unavailable: {:?}", e);
    let mut st = state.borrow_mut();
    st.phase = st.phase.on_play_failed();
}

fn wire_media_events(shared: Shared) {
    let (state, ui) = shared;
    let media: &web::HtmlMediaElement = &ui.audio;

    {
        let (state, ui) = (state.clone(), ui.clone());
        dom::on(media, "play", move || {
            let mut st = state.borrow_mut();
            st.phase = st.phase.on_play();
            apply_chrome(&ui, st.phase);
            if let Some(prev) = st.favicon_loop.take() {
                prev.stop();
            }
            st.favicon_loop = start_favicon(&ui);
        });
    }
    {
        let (state, ui) = (state.clone(), ui.clone());
        dom::on(media, "pause", move || {
            let mut st = state.borrow_mut();
            st.phase = st.phase.on_pause();
            apply_chrome(&ui, st.phase);
            stop_favicon(&ui, st.favicon_loop.take());
        });
    }
    {
        let (state, ui) = (state.clone(), ui.clone());
        dom::on(media, "ended", move || {
            let mut st = state.borrow_mut();
            st.phase = st.phase.on_ended();
            apply_chrome(&ui, st.phase);
            stop_favicon(&ui, st.favicon_loop.take());
        });
    }
    {
        let (state, ui) = (state.clone(), ui.clone());
        dom::on(media, "timeupdate", move || {
            let (t, duration) = (ui.audio.current_time(), ui.audio.duration());
            let Some(pct) = progress_percent(t, duration) else {
                return;
            };
            let pct = format!("{pct}%");
            if let Some(fill) = &ui.progress_fill {
                dom::set_style(fill, "width", &pct);
            }
            if let Some(handle) = &ui.progress_handle {
                dom::set_style(handle, "left", &pct);
            }
            if let Some(label) = &ui.duration_label {
                label.set_text_content(Some(&duration_label(t, duration)));
            }
            sync_transcript(&mut state.borrow_mut().active_lines, &ui.transcript, t);
        });
    }
    {
        let ui = ui.clone();
        dom::on(media, "loadedmetadata", move || {
            if let Some(label) = &ui.duration_label {
                let text = format!("0:00 / {}", format_time(ui.audio.duration()));
                label.set_text_content(Some(&text));
            }
        });
    }
}

/// Icons, overlay and the `playing` class follow the phase.
fn apply_chrome(ui: &PlayerUi, phase: PlayerPhase) {
    let playing = phase.is_playing();
    if let Some(icon) = &ui.play_icon {
        dom::set_style(icon, "display", if playing { "none" } else { "block" });
    }
    if let Some(icon) = &ui.pause_icon {
        dom::set_style(icon, "display", if playing { "block" } else { "none" });
    }
    if let Some(player) = &ui.player {
        dom::set_class(player, CLASS_PLAYING, playing);
    }
    if let Some(overlay_el) = &ui.overlay {
        // A plain pause keeps the overlay hidden; only `ended` brings it back.
        match phase {
            PlayerPhase::Playing => overlay::hide(overlay_el),
            PlayerPhase::Ended => overlay::show(overlay_el),
            _ => {}
        }
    }
}

/// Mark the rows active at `t`; scroll the first newly active one into view.
fn sync_transcript(active: &mut Vec<bool>, transcript: &Transcript, t: f64) {
    let (now, newly) = transcript_update(active, &transcript.lines, t);
    for (el, &on) in transcript.rows.iter().zip(&now) {
        dom::set_class(el, CLASS_ACTIVE, on);
    }
    if let Some(el) = newly.and_then(|i| transcript.rows.get(i)) {
        dom::scroll_into_view_smooth(el, web::ScrollLogicalPosition::Nearest);
    }
    *active = now;
}

fn start_favicon(ui: &Rc<PlayerUi>) -> Option<AnimationLoop> {
    ui.favicon.as_ref()?;
    let ui = ui.clone();
    Some(AnimationLoop::forever(move || {
        if let Some(swap) = &ui.favicon {
            if let Some(url) = swap.painter.frame(js_sys::Date::now()) {
                swap.link.set_href(&url);
            }
        }
    }))
}

fn stop_favicon(ui: &PlayerUi, running: Option<AnimationLoop>) {
    if let Some(l) = running {
        l.stop();
    }
    if let Some(swap) = &ui.favicon {
        swap.link.set_href(&swap.original_href);
    }
}
