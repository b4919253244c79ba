//! Draggable Item Component
//!
//! Absolutely positioned drag source. Reports the new position through
//! `on_move` when a gesture is dropped; holds no position state itself.

use leptos::prelude::*;
use leptos_dragdrop::*;

/// Data carried by a drag gesture: the item id and its coordinates at drag start
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub id: String,
    pub x: i32,
    pub y: i32,
}

/// Request to place an item at a new absolute position
#[derive(Debug, Clone, PartialEq)]
pub struct ItemMove {
    pub id: String,
    pub x: i32,
    pub y: i32,
}

/// Resolve a finished gesture into a move for the item `own_id`
pub fn resolve_move(outcome: &DragOutcome<DragPayload>, own_id: &str) -> Option<ItemMove> {
    match outcome {
        DragOutcome::Dropped { payload, offset } if payload.id == own_id => {
            let (x, y) = offset.apply_to(payload.x, payload.y);
            Some(ItemMove {
                id: payload.id.clone(),
                x,
                y,
            })
        }
        _ => None,
    }
}

#[component]
pub fn DraggableItem(
    dnd: DndSignals<DragPayload>,
    #[prop(into)] id: String,
    #[prop(into)] x: Signal<i32>,
    #[prop(into)] y: Signal<i32>,
    on_move: Callback<ItemMove>,
    children: Children,
) -> impl IntoView {
    let payload_id = id.clone();
    let on_mousedown = make_on_mousedown(dnd, move || DragPayload {
        id: payload_id.clone(),
        x: x.get_untracked(),
        y: y.get_untracked(),
    });

    let own_id = id.clone();
    Effect::new(move |_| {
        let mv = dnd
            .outcome_read
            .with(|outcome| outcome.as_ref().and_then(|o| resolve_move(o, &own_id)));
        if let Some(mv) = mv {
            on_move.run(mv);
        }
    });

    let style_id = id;
    let style = move || {
        let offset = dnd.live_offset_for(|p| p.id == style_id);
        let mut s = format!("position: absolute; left: {}px; top: {}px; cursor: move;", x.get(), y.get());
        match offset {
            Some(offset) => {
                s.push_str(&format!(
                    " opacity: 0.5; transform: translate({}px, {}px); transition: none;",
                    offset.dx, offset.dy
                ));
            }
            None if dnd.settling_read.get() => s.push_str(" opacity: 1; transition: none;"),
            None => s.push_str(" opacity: 1; transition: left 0.3s ease, top 0.3s ease;"),
        }
        s
    };

    view! {
        <div class="draggable-item" style=style on:mousedown=on_mousedown>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> DragPayload {
        DragPayload { id: "item-1".to_string(), x: 500, y: 150 }
    }

    #[test]
    fn test_drop_resolves_to_rounded_position() {
        let outcome = DragOutcome::Dropped { payload: payload(), offset: Offset::new(37.0, -12.0) };
        assert_eq!(
            resolve_move(&outcome, "item-1"),
            Some(ItemMove { id: "item-1".to_string(), x: 537, y: 138 })
        );

        let outcome = DragOutcome::Dropped { payload: payload(), offset: Offset::new(10.4, 0.6) };
        assert_eq!(resolve_move(&outcome, "item-1").map(|m| (m.x, m.y)), Some((510, 151)));
    }

    #[test]
    fn test_other_items_ignore_drop() {
        let outcome = DragOutcome::Dropped { payload: payload(), offset: Offset::new(1.0, 1.0) };
        assert_eq!(resolve_move(&outcome, "item-2"), None);
    }

    #[test]
    fn test_cancel_does_not_move() {
        let outcome = DragOutcome::Cancelled { payload: payload() };
        assert_eq!(resolve_move(&outcome, "item-1"), None);
    }

    #[test]
    fn test_full_gesture_through_state_machine() {
        let phase = DragPhase::Idle
            .press(payload(), Point::new(520.0, 180.0))
            .pointer_moved(Point::new(540.0, 175.0), DRAG_THRESHOLD_PX)
            .pointer_moved(Point::new(557.0, 168.0), DRAG_THRESHOLD_PX);
        let (_, outcome) = phase.release(Point::new(557.0, 168.0), true);

        let mv = outcome.as_ref().and_then(|o| resolve_move(o, "item-1"));
        assert_eq!(mv, Some(ItemMove { id: "item-1".to_string(), x: 537, y: 138 }));
    }
}
