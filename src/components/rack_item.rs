//! Rack Item Component
//!
//! One item from the page store, wired as a draggable glyph.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use super::{DragPayload, DraggableItem, ItemGlyph, ItemMove};
use crate::models::Item;
use crate::store::{store_item_field, store_move_item, use_page_store};

#[component]
pub fn RackItem(dnd: DndSignals<DragPayload>, item: Item) -> impl IntoView {
    let store = use_page_store();
    let id = item.id.clone();

    // Follow the store so moves and randomize update in place
    let field = |read: fn(&Item) -> i32| {
        let id = id.clone();
        Signal::derive(move || store_item_field(&store, &id, read))
    };
    let x = field(|i| i.x);
    let y = field(|i| i.y);
    let temp = field(|i| i.temp);

    let on_move = Callback::new(move |mv: ItemMove| {
        store_move_item(&store, &mv.id, mv.x, mv.y);
    });

    view! {
        <DraggableItem dnd=dnd id=id.clone() x=x y=y on_move=on_move>
            <ItemGlyph id=id.clone() icon=item.icon temp=temp />
        </DraggableItem>
    }
}
