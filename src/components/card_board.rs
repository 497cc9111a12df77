//! Card Board Component
//!
//! Renders an `OrderedCardSet` and feeds leptos-dragdrop gestures into it.

use card_order::{CardItem, CardSetConfig, OrderedCardSet};
use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{OrderNotice, ProjectCard};
use crate::config::BoardConfig;
use crate::storage::{order_store, OrderStore};

pub type BoardSet = OrderedCardSet<OrderStore>;

/// Reorderable row of cards
#[component]
pub fn CardBoard(
    board: BoardConfig,
    /// Receives the displayed id order on mount and whenever it changes,
    /// including moves, resets and a restored saved order
    #[prop(optional)]
    on_order_change: Option<Callback<Vec<String>>>,
) -> impl IntoView {
    let config = board.card_set_config().unwrap_or_else(|e| {
        tracing::error!(board = %board.id, error = %e, "invalid board config, order will not persist");
        CardSetConfig::new()
    });

    let set = RwSignal::new_local(BoardSet::new(board.items.clone(), config, order_store()));

    if let Some(callback) = on_order_change {
        // Memo so hover updates do not re-notify an unchanged order
        let order = Memo::new(move |_| set.with(|set| set.ids()));
        Effect::new(move |_| callback.run(order.get()));
    }

    let dnd = create_dnd_signals(Callback::new(move |gesture: DragGesture| {
        set.update(|set| match gesture {
            DragGesture::Begin(index) => set.begin_drag(index),
            DragGesture::Hover(index) => set.hover_slot(index),
            DragGesture::Leave => set.leave_slot(),
            DragGesture::Drop(index) => {
                set.commit_drop(index);
            }
            DragGesture::Cancel => set.cancel_drag(),
        });
    }));
    bind_global_handlers(dnd);

    let cards = move || set.with(|set| set.items().iter().cloned().enumerate().collect::<Vec<_>>());
    let board_class = move || {
        if dnd.is_dragging() { "card-board dragging" } else { "card-board" }
    };

    view! {
        <section class="card-board-section">
            <h2>{board.heading.clone()}</h2>
            <p class="card-board-hint">"Drag the cards to rearrange them."</p>

            <div class=board_class>
                <For
                    each=cards
                    key=|(index, item)| (*index, item.id.clone())
                    children=move |(index, item): (usize, CardItem)| {
                        let on_mousedown = make_on_mousedown(dnd, index);
                        let on_mouseenter = make_on_slot_mouseenter(dnd, index);
                        let on_mouseleave = make_on_mouseleave(dnd);

                        let slot_class = move || {
                            let (dragged, over) = set.with(|set| (set.dragged_index(), set.drag_over_index()));
                            let mut c = String::from("card-slot");
                            if dragged == Some(index) { c.push_str(" dragging"); }
                            if over == Some(index) && dragged != Some(index) { c.push_str(" drop-target"); }
                            c
                        };

                        view! {
                            <div
                                class=slot_class
                                on:mousedown=on_mousedown
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                            >
                                <ProjectCard item=item suppress_click=dnd.drag_just_ended_read />
                            </div>
                        }
                    }
                />
            </div>

            <OrderNotice set=set timeout_ms=board.notice_timeout_ms />
        </section>
    }
}
