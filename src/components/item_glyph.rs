//! Item Glyph Component
//!
//! Server icon over a temperature-colored disk.

use leptos::prelude::*;

use crate::config::use_config;
use crate::models::Icon;

const ICON_SIZE_PX: u32 = 96;

#[component]
pub fn ItemGlyph(
    #[prop(into)] id: String,
    icon: Icon,
    #[prop(into)] temp: Signal<i32>,
) -> impl IntoView {
    let scale = use_config().temp_scale;
    let halo_style = move || {
        format!(
            "display: flex; align-items: center; justify-content: center; \
             width: 80px; height: 80px; border-radius: 50%; opacity: 0.5; \
             background-color: {}; color: #fff; position: absolute; bottom: -10px; \
             left: 50%; transform: translateX(-50%); z-index: 1;",
            scale.color_for(temp.get())
        )
    };
    let title = move || format!("{}: {}°", id, temp.get());

    view! {
        <div class="item-glyph" title=title>
            <div class="temp-halo" style=halo_style></div>
            <img
                class="item-icon"
                src=icon.svg_url(ICON_SIZE_PX)
                alt=icon.0
                width="96"
                height="96"
                draggable="false"
                style="position: relative; z-index: 99; display: block;"
            />
        </div>
    }
}
