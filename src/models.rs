//! Frontend Models
//!
//! Data structures for the rack page.

use serde::Serialize;

/// Iconify glyph reference, `prefix:name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon(pub &'static str);

impl Icon {
    /// SVG URL served by the public Iconify API
    pub fn svg_url(&self, height_px: u32) -> String {
        let path = self.0.replacen(':', "/", 1);
        format!("https://api.iconify.design/{}.svg?height={}", path, height_px)
    }
}

/// A draggable server widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: String,
    pub x: i32,
    pub y: i32,
    /// Drives the overlay color; display clamps it to the temperature scale
    pub temp: i32,
    pub icon: Icon,
}

impl Item {
    pub fn new(id: &str, x: i32, y: i32, temp: i32, icon: &'static str) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            temp,
            icon: Icon(icon),
        }
    }
}

/// The five racks shown at page load
pub fn initial_items() -> Vec<Item> {
    vec![
        Item::new("item-1", 500, 150, 99, "mdi:server"),
        Item::new("item-2", 600, 150, 80, "clarity:server-solid"),
        Item::new("item-3", 700, 150, 75, "game-icons:server-rack"),
        Item::new("item-4", 850, 150, 40, "heroicons:server-stack-solid"),
        Item::new("item-5", 950, 150, 20, "clarity:rack-server-outline-badged"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_items_have_unique_ids() {
        let items = initial_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(items.len(), 5);
        assert_eq!(ids.len(), 5);
        assert_eq!(items[0].id, "item-1");
        assert_eq!((items[0].x, items[0].y, items[0].temp), (500, 150, 99));
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(
            Icon("game-icons:server-rack").svg_url(96),
            "https://api.iconify.design/game-icons/server-rack.svg?height=96"
        );
    }
}
