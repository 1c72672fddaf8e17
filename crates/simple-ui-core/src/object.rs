//! Node handles.
//!
//! Scene nodes are stored in a slot map and referred to by [`NodeId`].
//! Layouts hold ids rather than references, so the scene keeps ownership of
//! the nodes while a table only adjusts their size and position.

use slotmap::new_key_type;

new_key_type! {
    /// A unique identifier for a node in a scene.
    ///
    /// `NodeId`s are stable handles that remain valid while the node lives in
    /// its scene. They become invalid when the node is removed; a stale id is
    /// never confused with a newer node that reuses the same slot.
    pub struct NodeId;
}

impl NodeId {
    /// Get the raw u64 representation of this id.
    ///
    /// Useful for logging and for handing ids across an FFI boundary.
    pub fn as_raw(&self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a `NodeId` from a raw u64 value produced by [`as_raw`](Self::as_raw).
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_node_id_raw_round_trip() {
        let mut map: SlotMap<NodeId, &str> = SlotMap::with_key();
        let id = map.insert("node");
        assert_eq!(NodeId::from_raw(id.as_raw()), id);
    }

    #[test]
    fn test_stale_id_does_not_alias() {
        let mut map: SlotMap<NodeId, &str> = SlotMap::with_key();
        let first = map.insert("first");
        map.remove(first);
        let second = map.insert("second");
        assert_ne!(first, second);
        assert!(map.get(first).is_none());
    }
}
