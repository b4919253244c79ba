//! Leptos DragDrop Utilities
//!
//! Mouse-event drag-and-drop for Leptos.
//! A gesture runs through an explicit state machine
//! (`Idle -> Armed -> Dragging -> Dropped | Cancelled`) and only the
//! final outcome is published to application code.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Pointer position in client pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn from_mouse(ev: &web_sys::MouseEvent) -> Self {
        Self::new(ev.client_x() as f64, ev.client_y() as f64)
    }

    /// Displacement from `origin` to `self`
    pub fn offset_from(&self, origin: Point) -> Offset {
        Offset {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }
}

/// Pointer displacement since drag start
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Apply the displacement to an integer position, rounding to the nearest pixel.
    /// Halves round toward positive infinity.
    pub fn apply_to(&self, x: i32, y: i32) -> (i32, i32) {
        (round_half_up(x as f64 + self.dx), round_half_up(y as f64 + self.dy))
    }
}

fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Gesture phase
#[derive(Clone, Debug, PartialEq)]
pub enum DragPhase<T> {
    Idle,
    /// Button pressed on a source, threshold not yet crossed
    Armed { payload: T, origin: Point },
    /// Gesture active
    Dragging { payload: T, origin: Point, current: Point },
}

impl<T> Default for DragPhase<T> {
    fn default() -> Self {
        DragPhase::Idle
    }
}

/// How a gesture ended
#[derive(Clone, Debug, PartialEq)]
pub enum DragOutcome<T> {
    /// Released over a drop target
    Dropped { payload: T, offset: Offset },
    /// Released elsewhere or aborted with Escape
    Cancelled { payload: T },
}

impl<T> DragOutcome<T> {
    pub fn payload(&self) -> &T {
        match self {
            DragOutcome::Dropped { payload, .. } | DragOutcome::Cancelled { payload } => payload,
        }
    }
}

impl<T: Clone> DragPhase<T> {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging { .. })
    }

    /// Payload of the active gesture, if any
    pub fn dragging_payload(&self) -> Option<&T> {
        match self {
            DragPhase::Dragging { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Current displacement while dragging
    pub fn live_offset(&self) -> Option<Offset> {
        match self {
            DragPhase::Dragging { origin, current, .. } => Some(current.offset_from(*origin)),
            _ => None,
        }
    }

    /// Arm a gesture. Ignored unless idle.
    pub fn press(self, payload: T, at: Point) -> Self {
        match self {
            DragPhase::Idle => DragPhase::Armed { payload, origin: at },
            other => other,
        }
    }

    /// Track the pointer. Starts dragging once either axis moves past `threshold`.
    pub fn pointer_moved(self, at: Point, threshold: f64) -> Self {
        match self {
            DragPhase::Armed { payload, origin } => {
                let offset = at.offset_from(origin);
                if offset.dx.abs() > threshold || offset.dy.abs() > threshold {
                    DragPhase::Dragging { payload, origin, current: at }
                } else {
                    DragPhase::Armed { payload, origin }
                }
            }
            DragPhase::Dragging { payload, origin, .. } => {
                DragPhase::Dragging { payload, origin, current: at }
            }
            DragPhase::Idle => DragPhase::Idle,
        }
    }

    /// Release the button. Always returns to `Idle`; only an active gesture produces an outcome.
    pub fn release(self, at: Point, over_target: bool) -> (Self, Option<DragOutcome<T>>) {
        let outcome = match self {
            DragPhase::Dragging { payload, origin, .. } if over_target => Some(DragOutcome::Dropped {
                payload,
                offset: at.offset_from(origin),
            }),
            DragPhase::Dragging { payload, .. } => Some(DragOutcome::Cancelled { payload }),
            DragPhase::Armed { .. } | DragPhase::Idle => None,
        };
        (DragPhase::Idle, outcome)
    }

    /// Track the pointer with the primary button state from the event.
    /// A gesture whose button is no longer held (released outside the window) is cancelled.
    pub fn pointer_moved_with_button(
        self,
        at: Point,
        threshold: f64,
        primary_held: bool,
    ) -> (Self, Option<DragOutcome<T>>) {
        if primary_held {
            (self.pointer_moved(at, threshold), None)
        } else {
            self.cancel()
        }
    }

    /// Abort the gesture
    pub fn cancel(self) -> (Self, Option<DragOutcome<T>>) {
        let outcome = match self {
            DragPhase::Dragging { payload, .. } => Some(DragOutcome::Cancelled { payload }),
            DragPhase::Armed { .. } | DragPhase::Idle => None,
        };
        (DragPhase::Idle, outcome)
    }
}

/// Tuning for the global listeners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DndOptions {
    /// Movement in pixels before a press becomes a drag
    pub threshold_px: f64,
    /// How long `settling` stays set after a gesture ends
    pub settle_ms: u32,
}

impl Default for DndOptions {
    fn default() -> Self {
        Self {
            threshold_px: DRAG_THRESHOLD_PX,
            settle_ms: 100,
        }
    }
}

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// DnD state signals
pub struct DndSignals<T: Send + Sync + 'static> {
    pub phase_read: ReadSignal<DragPhase<T>>,
    pub phase_write: WriteSignal<DragPhase<T>>,
    /// Pointer is inside a drop target (tracked whether or not a drag is active)
    pub over_target_read: ReadSignal<bool>,
    pub over_target_write: WriteSignal<bool>,
    /// Last finished gesture
    pub outcome_read: ReadSignal<Option<DragOutcome<T>>>,
    pub outcome_write: WriteSignal<Option<DragOutcome<T>>>,
    /// Set briefly after a gesture ends
    pub settling_read: ReadSignal<bool>,
    pub settling_write: WriteSignal<bool>,
    /// Generation of the latest settle window
    pub settle_generation: StoredValue<SettleGeneration>,
}

/// Counter that lets a settle timer tell whether a newer gesture ended after it was started
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleGeneration(u64);

impl SettleGeneration {
    /// Open a new window, returning its token
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

impl<T: Send + Sync + 'static> Clone for DndSignals<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for DndSignals<T> {}

pub fn create_dnd_signals<T: Send + Sync + 'static>() -> DndSignals<T> {
    let (phase_read, phase_write) = signal(DragPhase::<T>::Idle);
    let (over_target_read, over_target_write) = signal(false);
    let (outcome_read, outcome_write) = signal(None::<DragOutcome<T>>);
    let (settling_read, settling_write) = signal(false);
    let settle_generation = StoredValue::new(SettleGeneration::default());
    DndSignals {
        phase_read,
        phase_write,
        over_target_read,
        over_target_write,
        outcome_read,
        outcome_write,
        settling_read,
        settling_write,
        settle_generation,
    }
}

impl<T: Clone + Send + Sync + 'static> DndSignals<T> {
    /// Active drag hovering a drop target
    pub fn is_hovering_target(&self) -> bool {
        self.over_target_read.get() && self.phase_read.with(|p| p.is_dragging())
    }

    /// Live offset if the active gesture's payload matches `pred`
    pub fn live_offset_for(&self, pred: impl Fn(&T) -> bool) -> Option<Offset> {
        self.phase_read.with(|p| match p.dragging_payload() {
            Some(payload) if pred(payload) => p.live_offset(),
            _ => None,
        })
    }
}

/// Publish the outcome of a finished gesture and open the settle window
fn end_drag<T: Clone + Send + Sync + 'static>(dnd: &DndSignals<T>, outcome: Option<DragOutcome<T>>, settle_ms: u32) {
    let Some(outcome) = outcome else {
        return;
    };
    match &outcome {
        DragOutcome::Dropped { offset, .. } => {
            log::debug!("drop, offset=({}, {})", offset.dx, offset.dy)
        }
        DragOutcome::Cancelled { .. } => log::debug!("drag cancelled"),
    }
    dnd.settling_write.set(true);
    dnd.outcome_write.set(Some(outcome));

    let mut token = 0;
    dnd.settle_generation.update_value(|generation| token = generation.begin());

    let settling = dnd.settling_write;
    let last_outcome = dnd.outcome_write;
    let generation = dnd.settle_generation;
    Timeout::new(settle_ms, move || {
        // A later gesture owns the window now
        if !generation.with_value(|g| g.is_current(token)) {
            return;
        }
        settling.set(false);
        last_outcome.set(None);
    })
    .forget();
}

/// Cancel whatever gesture is in progress
fn abort_drag<T: Clone + Send + Sync + 'static>(dnd: &DndSignals<T>, settle_ms: u32) {
    let mut outcome = None;
    dnd.phase_write.update(|phase| {
        let (next, ended) = std::mem::take(phase).cancel();
        *phase = next;
        outcome = ended;
    });
    end_drag(dnd, outcome, settle_ms);
}

/// Create mousedown handler for a drag source.
/// `payload` is evaluated at press time.
pub fn make_on_mousedown<T, P>(dnd: DndSignals<T>, payload: P) -> impl Fn(web_sys::MouseEvent) + 'static
where
    T: Clone + Send + Sync + 'static,
    P: Fn() -> T + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore presses on form controls
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Suppress native image dragging
        ev.prevent_default();
        let at = Point::from_mouse(&ev);
        let payload = payload();
        dnd.phase_write.update(|phase| {
            *phase = std::mem::take(phase).press(payload, at);
        });
    }
}

/// Create mouseenter handler for a drop target
pub fn make_on_target_mouseenter<T: Send + Sync + 'static>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| dnd.over_target_write.set(true)
}

/// Create mouseleave handler for a drop target
pub fn make_on_target_mouseleave<T: Send + Sync + 'static>(dnd: DndSignals<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| dnd.over_target_write.set(false)
}

fn add_listener<F>(target: Option<web_sys::EventTarget>, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Some(target) = target {
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to bind {} listener", event);
        }
    }
    closure.forget();
}

fn add_document_listener<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let doc = web_sys::window().and_then(|win| win.document());
    add_listener(doc.map(Into::into), event, handler);
}

fn add_window_listener<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    add_listener(web_sys::window().map(Into::into), event, handler);
}

/// Bind document-level mousemove, mouseup and keydown handlers, plus a window blur handler,
/// that drive the state machine.
/// Call once per page.
pub fn bind_global_listeners<T: Clone + Send + Sync + 'static>(dnd: DndSignals<T>, options: DndOptions) {
    add_document_listener("mousemove", move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else { return };
        // Only write while a gesture is in progress
        if dnd.phase_read.with_untracked(|p| matches!(p, DragPhase::Idle)) {
            return;
        }
        let at = Point::from_mouse(ev);
        let primary_held = ev.buttons() & 1 != 0;
        let was_dragging = dnd.phase_read.with_untracked(|p| p.is_dragging());
        let mut outcome = None;
        dnd.phase_write.update(|phase| {
            let (next, ended) = std::mem::take(phase).pointer_moved_with_button(at, options.threshold_px, primary_held);
            *phase = next;
            outcome = ended;
        });
        if outcome.is_some() {
            log::debug!("button released outside the page");
            end_drag(&dnd, outcome, options.settle_ms);
        } else if !was_dragging && dnd.phase_read.with_untracked(|p| p.is_dragging()) {
            log::debug!("drag started");
        }
    });

    add_document_listener("mouseup", move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else { return };
        if dnd.phase_read.with_untracked(|p| matches!(p, DragPhase::Idle)) {
            return;
        }
        let at = Point::from_mouse(ev);
        let over_target = dnd.over_target_read.get_untracked();
        let mut outcome = None;
        dnd.phase_write.update(|phase| {
            let (next, ended) = std::mem::take(phase).release(at, over_target);
            *phase = next;
            outcome = ended;
        });
        end_drag(&dnd, outcome, options.settle_ms);
    });

    add_document_listener("keydown", move |ev: web_sys::Event| {
        let Some(ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() else { return };
        if ev.key() != "Escape" || !dnd.phase_read.with_untracked(|p| p.is_dragging()) {
            return;
        }
        abort_drag(&dnd, options.settle_ms);
    });

    // Focus loss means the mouseup may never arrive
    add_window_listener("blur", move |_ev: web_sys::Event| {
        if dnd.phase_read.with_untracked(|p| matches!(p, DragPhase::Idle)) {
            return;
        }
        abort_drag(&dnd, options.settle_ms);
    });
}
