//! Rack Heatmap App
//!
//! Draggable server icons over a drop region, plus the Randomize button.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DragPayload, DropRegion, RackItem};
use crate::config::DemoConfig;
use crate::state::MathRandom;
use crate::store::{store_items, store_randomize, PageState, PageStore};

use leptos_dragdrop::*;

#[component]
pub fn App(config: DemoConfig) -> impl IntoView {
    let store: PageStore = Store::new(PageState::new());
    provide_context(store);
    provide_context(config.clone());

    // Drag state shared by all items and the drop region
    let dnd = create_dnd_signals::<DragPayload>();
    bind_global_listeners(dnd, config.dnd_options());

    let ranges = config.randomize;
    let on_randomize = move |_: web_sys::MouseEvent| {
        log::debug!("randomize requested");
        store_randomize(&store, &ranges, &mut MathRandom);
    };

    view! {
        <div class="rack-page" style=format!("width: {}px;", config.container_width_px)>
            <DropRegion dnd=dnd min_height_px=config.stage_min_height_px>
                <For
                    each=move || store_items(&store).into_iter().enumerate()
                    key=|(index, item)| format!("{}/{}", item.id, index)
                    children=move |(_, item)| view! { <RackItem dnd=dnd item=item /> }
                />
            </DropRegion>
            <button class="randomize-btn" on:click=on_randomize>
                "Randomize"
            </button>
        </div>
    }
}
