//! Ordered storage for scene objects.
//!
//! Objects live in an id-keyed map; paint order is an explicit draw-order
//! vector. Insertion appends to the end of the draw order, which is the top
//! of the paint stack (last inserted paints on top).

use crate::model::SceneObject;
use std::collections::HashMap;

/// Backing store for the scene: objects by id plus explicit draw order.
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    objects: HashMap<u64, SceneObject>,
    draw_order: Vec<u64>,
    next_id: u64,
}

impl ObjectStore {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of objects in the store.
    pub fn len(&self) -> usize {
        self.draw_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_order.is_empty()
    }

    /// Returns a fresh unique id and advances the counter.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Sets the next id to be generated. Used when rebuilding a scene from
    /// a snapshot so fresh ids never collide with loaded ones.
    pub fn set_next_id(&mut self, id: u64) {
        self.next_id = id;
    }

    /// Inserts an object at the top of the paint order.
    pub fn insert(&mut self, id: u64, object: SceneObject) {
        debug_assert_eq!(id, object.id, "store key must match object id");
        if self.objects.insert(id, object).is_none() {
            self.draw_order.push(id);
        }
    }

    /// Removes an object, returning it if present.
    pub fn remove(&mut self, id: u64) -> Option<SceneObject> {
        let removed = self.objects.remove(&id);
        if removed.is_some() {
            self.draw_order.retain(|&oid| oid != id);
        }
        removed
    }

    pub fn contains(&self, id: u64) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn get(&self, id: u64) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    /// Iterates objects in paint order (bottom first).
    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.draw_order.iter().filter_map(|id| self.objects.get(id))
    }

    /// Iterates objects mutably. Order is unspecified; use
    /// [`ObjectStore::draw_order_iter`] when order matters.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.values_mut()
    }

    /// Iterates ids in paint order (bottom first).
    pub fn draw_order_iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.draw_order.iter().copied()
    }

    /// Removes everything and resets the draw order. The id counter is
    /// left alone so ids are never reused within a session.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.draw_order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SceneObject;
    use roomkit_core::Point;

    fn obj(store: &mut ObjectStore, name: &str) -> u64 {
        let id = store.generate_id();
        let o = SceneObject::furniture(
            id,
            name,
            "assets/test.png",
            Point::new(0.0, 0.0),
            10.0,
            10.0,
            0.5,
            0.5,
        );
        store.insert(id, o);
        id
    }

    #[test]
    fn insertion_appends_to_paint_order() {
        let mut store = ObjectStore::new();
        let a = obj(&mut store, "a");
        let b = obj(&mut store, "b");
        let c = obj(&mut store, "c");
        let order: Vec<u64> = store.draw_order_iter().collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut store = ObjectStore::new();
        let a = obj(&mut store, "a");
        let b = obj(&mut store, "b");
        let c = obj(&mut store, "c");
        assert!(store.remove(b).is_some());
        let order: Vec<u64> = store.draw_order_iter().collect();
        assert_eq!(order, vec![a, c]);
        assert!(store.remove(b).is_none());
    }

    #[test]
    fn ids_are_never_reused_after_clear() {
        let mut store = ObjectStore::new();
        obj(&mut store, "a");
        let before = store.generate_id();
        store.clear();
        assert!(store.is_empty());
        assert!(store.generate_id() > before);
    }
}
