//! UI Components
//!
//! Leptos components for the rack page.

mod draggable_item;
mod drop_region;
mod item_glyph;
mod rack_item;

pub use draggable_item::{DragPayload, DraggableItem, ItemMove};
pub use drop_region::DropRegion;
pub use item_glyph::ItemGlyph;
pub use rack_item::RackItem;
