//! Order Notice Component
//!
//! Toast shown after a saved reorder, with a reset action.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::card_board::BoardSet;

#[component]
pub fn OrderNotice(
    set: RwSignal<BoardSet, LocalStorage>,
    /// Auto-dismiss delay, 0 keeps the notice until dismissed
    timeout_ms: u32,
) -> impl IntoView {
    let pending = Memo::new(move |_| set.with(|set| set.pending_notice()));
    // Bumped on every new notice so an older timer does not close a newer one
    let (generation, set_generation) = signal(0u32);

    Effect::new(move |_| {
        if !pending.get() || timeout_ms == 0 {
            return;
        }
        let current = generation.get_untracked().wrapping_add(1);
        set_generation.set(current);
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            if generation.try_get_untracked() == Some(current) {
                let _ = set.try_update(|set| set.dismiss_notice());
            }
        });
    });

    view! {
        <Show when=move || pending.get()>
            <div class="toast toast--success" role="status">
                <span class="toast__message">"Card order saved for your next visit."</span>
                <button
                    class="toast__action"
                    on:click=move |_| set.update(|set| set.reset_to_default())
                >
                    "Reset order"
                </button>
                <button
                    class="toast__close"
                    aria-label="Dismiss"
                    on:click=move |_| set.update(|set| set.dismiss_notice())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
