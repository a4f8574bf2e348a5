//! The scene: the room, its ordered furniture and the current selection.

use serde::Serialize;

use crate::geometry::Point;
use crate::model::{FurnitureItem, Room};

/// Room plus furniture in z-order (last is topmost).
///
/// Furniture is only ever appended or removed; items are addressed by slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Scene {
    room: Room,
    items: Vec<FurnitureItem>,
    selected: Option<usize>,
}

impl Scene {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            items: Vec::new(),
            selected: None,
        }
    }

    pub fn with_items(room: Room, items: Vec<FurnitureItem>) -> Self {
        Self {
            room,
            items,
            selected: None,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&FurnitureItem> {
        self.items.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut FurnitureItem> {
        self.items.get_mut(slot)
    }

    /// Appends an item on top of the z-order and returns its slot.
    pub fn push(&mut self, item: FurnitureItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Removes the item in `slot`, keeping the selection pointed at the same item.
    pub fn remove(&mut self, slot: usize) -> Option<FurnitureItem> {
        if slot >= self.items.len() {
            return None;
        }
        let item = self.items.remove(slot);
        self.selected = match self.selected {
            Some(sel) if sel == slot => None,
            Some(sel) if sel > slot => Some(sel - 1),
            other => other,
        };
        Some(item)
    }

    /// Replaces all furniture wholesale and drops the selection.
    pub fn replace_items(&mut self, items: Vec<FurnitureItem>) {
        self.items = items;
        self.selected = None;
    }

    /// Slot of the topmost item under `point`.
    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.items.iter().rposition(|item| item.contains_point(point))
    }

    pub fn selected_slot(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&FurnitureItem> {
        self.selected.and_then(|slot| self.items.get(slot))
    }

    pub fn selected_item_mut(&mut self) -> Option<&mut FurnitureItem> {
        match self.selected {
            Some(slot) => self.items.get_mut(slot),
            None => None,
        }
    }

    /// Selects `slot`; out-of-range slots clear the selection.
    pub fn select(&mut self, slot: usize) {
        self.selected = (slot < self.items.len()).then_some(slot);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
