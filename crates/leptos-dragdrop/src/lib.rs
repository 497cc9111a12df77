//! Leptos DragDrop Utilities
//!
//! Mouse-driven drag gestures over a row of indexed slots.
//! Uses movement threshold to distinguish click from drag, and reports
//! the gesture lifecycle through a single callback.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Drag lifecycle reported to the owner of the slots
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragGesture {
    /// Pointer moved past the threshold while holding slot `usize`
    Begin(usize),
    /// Pointer entered slot `usize` during a drag
    Hover(usize),
    /// Pointer left the hovered slot
    Leave,
    /// Released over slot `usize`
    Drop(usize),
    /// Released outside every slot
    Cancel,
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Slot being dragged (threshold passed)
    pub dragging_read: ReadSignal<Option<usize>>,
    dragging_write: WriteSignal<Option<usize>>,
    /// Slot under the pointer during a drag
    pub hovered_read: ReadSignal<Option<usize>>,
    hovered_write: WriteSignal<Option<usize>>,
    /// True for a moment after a drag so the trailing click can be ignored
    pub drag_just_ended_read: ReadSignal<bool>,
    drag_just_ended_write: WriteSignal<bool>,
    /// Pending slot (mousedown but not yet dragging)
    pending_read: ReadSignal<Option<usize>>,
    pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    start_read: ReadSignal<(i32, i32)>,
    start_write: WriteSignal<(i32, i32)>,
    on_gesture: Callback<DragGesture>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the trailing click is suppressed after a drag
const CLICK_SUPPRESS_MS: i32 = 100;

pub fn create_dnd_signals(on_gesture: Callback<DragGesture>) -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (hovered_read, hovered_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        hovered_read,
        hovered_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
        on_gesture,
    }
}

impl DndSignals {
    pub fn is_dragging(&self) -> bool {
        self.dragging_read.get().is_some()
    }

    fn emit(&self, gesture: DragGesture) {
        self.on_gesture.run(gesture);
    }
}

/// Whether the pointer moved far enough from the mousedown point to count as a drag
pub fn past_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// End drag operation
fn end_drag(dnd: &DndSignals, was_dragging: bool) {
    dnd.dragging_write.set(None);
    dnd.hovered_write.set(None);
    dnd.pending_write.set(None);

    if !was_dragging {
        return;
    }
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), CLICK_SUPPRESS_MS);
        cb.forget();
    }
}

/// Create mousedown handler for a draggable slot
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlAnchorElement>().is_some() { return; }
            }
            ev.prevent_default();
            dnd.pending_write.set(Some(index));
            dnd.start_write.set((ev.client_x(), ev.client_y()));
        }
    }
}

/// Create mouseenter handler for a slot
pub fn make_on_slot_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.hovered_write.set(Some(index));
            dnd.emit(DragGesture::Hover(index));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.hovered_write.set(None);
            dnd.emit(DragGesture::Leave);
        }
    }
}

/// Gesture a mouseup ends with. A plain click never started a drag and
/// yields nothing, so the click event goes through untouched.
pub fn release_gesture(dragging: Option<usize>, hovered: Option<usize>) -> Option<DragGesture> {
    dragging?;
    Some(match hovered {
        Some(slot) => DragGesture::Drop(slot),
        None => DragGesture::Cancel,
    })
}

/// Bind window mouseup (drop or cancel) and mousemove (drag start).
/// Both listeners are removed when the calling component is cleaned up.
pub fn bind_global_handlers(dnd: DndSignals) {
    let on_mousemove = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        let Some(pending) = dnd.pending_read.try_get_untracked().flatten() else { return };
        if dnd.dragging_read.try_get_untracked().flatten().is_some() {
            return;
        }
        let Some(start) = dnd.start_read.try_get_untracked() else { return };
        if past_threshold(start, (ev.client_x(), ev.client_y())) {
            dnd.dragging_write.set(Some(pending));
            dnd.emit(DragGesture::Begin(pending));
            // The pointer is still over its own slot
            dnd.hovered_write.set(Some(pending));
            dnd.emit(DragGesture::Hover(pending));
        }
    });

    let on_mouseup = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_read.try_get_untracked() else { return };
        let hovered = dnd.hovered_read.try_get_untracked().flatten();

        end_drag(&dnd, dragging.is_some());
        if let Some(gesture) = release_gesture(dragging, hovered) {
            dnd.emit(gesture);
        }
    });

    on_cleanup(move || {
        on_mousemove.remove();
        on_mouseup.remove();
    });
}
