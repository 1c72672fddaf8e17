//! Node storage and parent/child bookkeeping.
//!
//! [`NodeAccess`] is the seam the layout engine and components work through:
//! anything that can look nodes up by [`NodeId`] and maintain ordered child
//! lists. [`Scene`] is the provided implementation, a slotmap of boxed nodes.
//!
//! Child order is z-order, back to front. Appending a child puts it on top.

use std::any::Any;
use std::fmt::Write as _;

use simple_ui_core::NodeId;
use simple_ui_core::logging::targets;
use slotmap::SlotMap;

use super::node::Node;

/// Errors from scene graph operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// The id does not refer to a live node.
    #[error("invalid node id: {0:?}")]
    InvalidNodeId(NodeId),
    /// The requested parent is the child itself or one of its descendants.
    #[error("cannot add {child:?} under {parent:?}: it would become its own ancestor")]
    CircularParentage { parent: NodeId, child: NodeId },
}

/// Result alias for scene graph operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Access to stored nodes and their hierarchy.
pub trait NodeAccess {
    /// Get a node by id.
    fn get_node(&self, id: NodeId) -> Option<&(dyn Node + 'static)>;

    /// Get a node mutably by id.
    fn get_node_mut(&mut self, id: NodeId) -> Option<&mut (dyn Node + 'static)>;

    /// Store a node with no parent.
    fn insert_node(&mut self, node: Box<dyn Node>) -> NodeId;

    /// Remove a node and its whole subtree, detaching it from its parent.
    ///
    /// Returns the removed node itself.
    fn remove_node(&mut self, id: NodeId) -> Option<Box<dyn Node>>;

    /// Append `child` to `parent`'s children, detaching it from any previous
    /// parent first.
    fn add_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()>;

    /// Detach `child` from `parent`. Returns `false` if it was not a child.
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool;

    /// Detach every child of `parent`, returning them in their previous order.
    fn remove_children(&mut self, parent: NodeId) -> Vec<NodeId>;

    /// Children of `id`, back to front. Empty for unknown ids.
    fn children(&self, id: NodeId) -> &[NodeId];

    /// Parent of `id`, if any.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Whether `id` refers to a live node.
    fn contains(&self, id: NodeId) -> bool {
        self.get_node(id).is_some()
    }

    /// Store `node` and return its id.
    fn add<T: Node>(&mut self, node: T) -> NodeId
    where
        Self: Sized,
    {
        self.insert_node(Box::new(node))
    }

    /// Get a node as its concrete type.
    fn get<T: Node>(&self, id: NodeId) -> Option<&T>
    where
        Self: Sized,
    {
        let node: &(dyn Any + 'static) = self.get_node(id)?;
        node.downcast_ref::<T>()
    }

    /// Get a node mutably as its concrete type.
    fn get_mut<T: Node>(&mut self, id: NodeId) -> Option<&mut T>
    where
        Self: Sized,
    {
        let node: &mut (dyn Any + 'static) = self.get_node_mut(id)?;
        node.downcast_mut::<T>()
    }
}

struct Entry {
    node: Box<dyn Node>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Slotmap-backed node storage.
#[derive(Default)]
pub struct Scene {
    nodes: SlotMap<NodeId, Entry>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `ancestor` is `id` or one of its ancestors.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Render an indented dump of the subtree at `root`.
    ///
    /// Each line shows the node's type name, size and position.
    pub fn format_tree(&self, root: NodeId) -> String {
        let mut out = String::new();
        self.format_node(root, 0, &mut out);
        out
    }

    fn format_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(entry) = self.nodes.get(id) else {
            return;
        };
        let node = &entry.node;
        let size = node.size();
        let pos = node.position();
        let _ = writeln!(
            out,
            "{:indent$}{} {}x{} @ ({}, {}){}",
            "",
            node.type_name(),
            size.width,
            size.height,
            pos.x,
            pos.y,
            if node.is_visible() { "" } else { " hidden" },
            indent = depth * 2,
        );
        for &child in &entry.children {
            self.format_node(child, depth + 1, out);
        }
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.nodes.get_mut(child).and_then(|e| e.parent.take()) else {
            return;
        };
        if let Some(entry) = self.nodes.get_mut(parent) {
            entry.children.retain(|&c| c != child);
        }
    }
}

impl NodeAccess for Scene {
    fn get_node(&self, id: NodeId) -> Option<&(dyn Node + 'static)> {
        self.nodes.get(id).map(|e| &*e.node)
    }

    fn get_node_mut(&mut self, id: NodeId) -> Option<&mut (dyn Node + 'static)> {
        self.nodes.get_mut(id).map(|e| &mut *e.node)
    }

    fn insert_node(&mut self, node: Box<dyn Node>) -> NodeId {
        let id = self.nodes.insert(Entry {
            node,
            parent: None,
            children: Vec::new(),
        });
        tracing::trace!(target: targets::SCENE, ?id, "inserted node");
        id
    }

    fn remove_node(&mut self, id: NodeId) -> Option<Box<dyn Node>> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        self.detach(id);

        let mut pending = vec![id];
        let mut removed = None;
        while let Some(next) = pending.pop() {
            if let Some(entry) = self.nodes.remove(next) {
                pending.extend(entry.children);
                if next == id {
                    removed = Some(entry.node);
                }
            }
        }
        tracing::trace!(target: targets::SCENE, ?id, "removed subtree");
        removed
    }

    fn add_child(&mut self, parent: NodeId, child: NodeId) -> SceneResult<()> {
        if !self.nodes.contains_key(parent) {
            return Err(SceneError::InvalidNodeId(parent));
        }
        if !self.nodes.contains_key(child) {
            return Err(SceneError::InvalidNodeId(child));
        }
        if self.is_ancestor(child, parent) {
            return Err(SceneError::CircularParentage { parent, child });
        }

        self.detach(child);
        if let Some(entry) = self.nodes.get_mut(child) {
            entry.parent = Some(parent);
        }
        if let Some(entry) = self.nodes.get_mut(parent) {
            entry.children.push(child);
        }
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child);
        true
    }

    fn remove_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        let Some(entry) = self.nodes.get_mut(parent) else {
            return Vec::new();
        };
        let children = std::mem::take(&mut entry.children);
        for &child in &children {
            if let Some(entry) = self.nodes.get_mut(child) {
                entry.parent = None;
            }
        }
        children
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|e| e.parent)
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene").field("nodes", &self.nodes.len()).finish()
    }
}
