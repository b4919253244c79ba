//! Drop Region Component
//!
//! Full-size container that accepts dropped items.

use leptos::prelude::*;
use leptos_dragdrop::*;

use super::DragPayload;

/// Drop target for item drags.
/// `on_drop` is optional; without it a drop only produces hover feedback.
#[component]
pub fn DropRegion(
    dnd: DndSignals<DragPayload>,
    /// Minimum height in pixels
    min_height_px: u32,
    /// Called with the dragged item's payload when a drag is dropped here
    #[prop(optional)]
    on_drop: Option<Callback<DragPayload>>,
    children: Children,
) -> impl IntoView {
    let on_mouseenter = make_on_target_mouseenter(dnd);
    let on_mouseleave = make_on_target_mouseleave(dnd);

    if let Some(on_drop) = on_drop {
        Effect::new(move |_| {
            let dropped = dnd.outcome_read.with(|outcome| match outcome {
                Some(DragOutcome::Dropped { payload, .. }) => Some(payload.clone()),
                _ => None,
            });
            if let Some(payload) = dropped {
                on_drop.run(payload);
            }
        });
    }

    let style = move || {
        let background = if dnd.is_hovering_target() { "lightgreen" } else { "transparent" };
        format!(
            "width: 100%; height: 100%; min-height: {}px; position: relative; background-color: {};",
            min_height_px, background
        )
    };

    view! {
        <div
            class="drop-region"
            style=style
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            {children()}
        </div>
    }
}
