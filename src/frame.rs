use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Returned by a frame callback to keep going or to end its loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

struct LoopState {
    stopped: Cell<bool>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopState {
    fn schedule(&self) {
        if self.stopped.get() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn release(self: &Rc<Self>) {
        self.stopped.set(true);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // The tick closure may be the caller; drop it on a later turn.
        let state = self.clone();
        dom::set_timeout(0, move || {
            state.tick.borrow_mut().take();
        });
    }
}

/// A self re-arming `requestAnimationFrame` loop.
///
/// The host drives the cadence, so loops follow the display refresh rate and
/// pause with hidden tabs. Loops run until [`AnimationLoop::stop`] is called
/// or the callback returns [`LoopControl::Stop`]; dropping the handle leaves
/// the loop running.
#[derive(Clone)]
pub struct AnimationLoop {
    state: Rc<LoopState>,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut() -> LoopControl + 'static) -> Self {
        let state = Rc::new(LoopState {
            stopped: Cell::new(false),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let state_tick = state.clone();
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            state_tick.pending.set(None);
            if state_tick.stopped.get() {
                return;
            }
            match frame() {
                LoopControl::Continue => state_tick.schedule(),
                LoopControl::Stop => state_tick.release(),
            }
        }) as Box<dyn FnMut()>));
        state.schedule();
        Self { state }
    }

    /// Convenience for loops that never end on their own.
    pub fn forever(mut frame: impl FnMut() + 'static) -> Self {
        Self::start(move || {
            frame();
            LoopControl::Continue
        })
    }

    pub fn stop(&self) {
        if !self.state.stopped.get() {
            self.state.release();
        }
    }
}
