//! The table layout container.
//!
//! A [`Table`] arranges scene nodes in rows of cells. Each row takes a share
//! of the table's height and each cell a share of the table's width, per
//! their [`Basis`]. Every element in a cell is then sized by its
//! [`SizingStrategy`] and positioned by its [`Anchor`].
//!
//! # Example
//!
//! ```
//! use simple_ui::layout::{Anchor, Basis, SizingStrategy, Table};
//! use simple_ui::widget::{Container, NodeAccess, Scene};
//! use simple_ui::render::Size;
//!
//! let mut scene = Scene::new();
//! let icon = scene.add(Container::with_size(Size::new(10.0, 10.0)));
//! let banner = scene.add(Container::with_size(Size::new(40.0, 10.0)));
//!
//! let mut table = Table::new(&mut scene);
//! table
//!     .row("25%")
//!     .element(&mut scene, banner, SizingStrategy::Stretch)?
//!     .row(Basis::Flexible)
//!     .cell(64)?
//!     .element(&mut scene, icon, (SizingStrategy::Contain, Anchor::TOP))?;
//! table.set_size(&mut scene, Size::new(200.0, 100.0))?;
//!
//! assert_eq!(scene.get_node(banner).unwrap().size(), Size::new(200.0, 25.0));
//! assert_eq!(scene.get_node(icon).unwrap().size(), Size::new(64.0, 64.0));
//! # Ok::<(), simple_ui::layout::TableError>(())
//! ```

use std::collections::HashMap;

use simple_ui_core::NodeId;
use simple_ui_core::logging::{span_names, targets};
use simple_ui_render::{Color, Point, Rect, Size, Stroke};
use simple_ui_style::Style;

use super::anchor::Anchor;
use super::basis::{Basis, distribute};
use super::sizing::SizingStrategy;
use crate::widget::{Container, GraphicsNode, Node, NodeAccess, SceneError};

/// Stroke colour of the debug overlay.
pub const DEBUG_STROKE_COLOUR: u32 = 0xff0000;

/// Errors from building or laying out a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// `cell` or `element` was called before any `row`.
    #[error("no current row: start a row first")]
    NoCurrentRow,
    /// The element's node is not in the storage.
    #[error("unknown node: {0:?}")]
    UnknownNode(NodeId),
    /// A scene graph operation failed.
    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Result alias for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// How one element is sized and positioned in its cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub strategy: SizingStrategy,
    pub anchor: Anchor,
}

impl Placement {
    pub fn new(strategy: SizingStrategy, anchor: Anchor) -> Self {
        Self { strategy, anchor }
    }

    /// Place without resizing.
    pub fn place_only(anchor: Anchor) -> Self {
        Self::new(SizingStrategy::None, anchor)
    }
}

impl From<SizingStrategy> for Placement {
    fn from(strategy: SizingStrategy) -> Self {
        Self::new(strategy, Anchor::default())
    }
}

impl From<Anchor> for Placement {
    fn from(anchor: Anchor) -> Self {
        Self::place_only(anchor)
    }
}

impl From<(SizingStrategy, Anchor)> for Placement {
    fn from((strategy, anchor): (SizingStrategy, Anchor)) -> Self {
        Self::new(strategy, anchor)
    }
}

/// What a cell holds: a borrowed node, or a nested table it owns.
#[derive(Debug)]
enum Item {
    Node(NodeId),
    Table(Box<Table>),
}

#[derive(Debug)]
struct Element {
    item: Item,
    placement: Placement,
    /// Size when added; the reference for scaling strategies.
    original_size: Size,
}

impl Element {
    fn node(&self) -> NodeId {
        match &self.item {
            Item::Node(node) => *node,
            Item::Table(table) => table.node,
        }
    }
}

#[derive(Debug, Default)]
struct Cell {
    basis: Basis,
    elements: Vec<Element>,
}

#[derive(Debug, Default)]
struct Row {
    basis: Basis,
    cells: Vec<Cell>,
}

/// Rectangles computed by the last layout pass.
#[derive(Debug, Clone, Default)]
struct Geometry {
    rows: Vec<Rect>,
    cells: Vec<Vec<Rect>>,
    elements: HashMap<NodeId, Rect>,
}

/// A container that lays its elements out in rows and cells.
///
/// The table owns a backing [`Container`] node in the storage; attach
/// [`node`](Table::node) under a parent to show it. Elements are borrowed:
/// the table writes their size and position but never creates or frees them.
///
/// Builder calls only record structure. Layout runs when the size is set, or
/// on [`update`](Table::update).
#[derive(Debug)]
pub struct Table {
    node: NodeId,
    size: Size,
    rows: Vec<Row>,
    current_row: Option<usize>,
    current_cell: Option<usize>,
    children_changed: bool,
    debug_overlay: Option<NodeId>,
    style: Style,
    geometry: Option<Geometry>,
}

impl Table {
    /// Create an empty table and its backing node.
    pub fn new<S: NodeAccess>(storage: &mut S) -> Self {
        let node = storage.insert_node(Box::new(Container::new()));
        Self {
            node,
            size: Size::ZERO,
            rows: Vec::new(),
            current_row: None,
            current_cell: None,
            children_changed: false,
            debug_overlay: None,
            style: Style::default_theme(),
            geometry: None,
        }
    }

    /// The backing node elements are attached under.
    pub fn node(&self) -> NodeId {
        self.node
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Start a new row. Clears the current cell.
    pub fn row(&mut self, basis: impl Into<Basis>) -> &mut Self {
        self.rows.push(Row {
            basis: basis.into(),
            cells: Vec::new(),
        });
        self.current_row = Some(self.rows.len() - 1);
        self.current_cell = None;
        self
    }

    /// Add a cell to the current row.
    pub fn cell(&mut self, basis: impl Into<Basis>) -> TableResult<&mut Self> {
        let row = self.current_row.ok_or(TableError::NoCurrentRow)?;
        let cells = &mut self.rows[row].cells;
        cells.push(Cell {
            basis: basis.into(),
            elements: Vec::new(),
        });
        self.current_cell = Some(cells.len() - 1);
        Ok(self)
    }

    /// Add `node` to the current cell.
    ///
    /// If the current row has no current cell, a flexible cell spanning the
    /// row is started first. The node's size at this moment is kept as its
    /// original size.
    pub fn element<S: NodeAccess>(
        &mut self,
        storage: &mut S,
        node: NodeId,
        placement: impl Into<Placement>,
    ) -> TableResult<&mut Self> {
        self.push_element(storage, Item::Node(node), placement.into())
    }

    /// Add a nested table to the current cell.
    ///
    /// The outer table owns `inner` from now on and lays it out in the same
    /// pass that sizes its node. Reach it again with
    /// [`nested_mut`](Table::nested_mut). On error `inner` is dropped and its
    /// backing node stays in the storage.
    pub fn table<S: NodeAccess>(
        &mut self,
        storage: &mut S,
        inner: Table,
        placement: impl Into<Placement>,
    ) -> TableResult<&mut Self> {
        self.push_element(storage, Item::Table(Box::new(inner)), placement.into())
    }

    fn push_element<S: NodeAccess>(
        &mut self,
        storage: &mut S,
        item: Item,
        placement: Placement,
    ) -> TableResult<&mut Self> {
        let row = self.current_row.ok_or(TableError::NoCurrentRow)?;
        let node = match &item {
            Item::Node(node) => *node,
            Item::Table(table) => table.node,
        };
        let original_size = storage
            .get_node(node)
            .ok_or(TableError::UnknownNode(node))?
            .size();
        if self.is_self_or_ancestor(storage, node) {
            return Err(SceneError::CircularParentage {
                parent: self.node,
                child: node,
            }
            .into());
        }

        let cell = match self.current_cell {
            Some(cell) => cell,
            None => {
                self.cell(Basis::Flexible)?;
                self.rows[row].cells.len() - 1
            }
        };
        self.rows[row].cells[cell].elements.push(Element {
            item,
            placement,
            original_size,
        });
        self.children_changed = true;
        Ok(self)
    }

    fn is_self_or_ancestor<S: NodeAccess>(&self, storage: &S, node: NodeId) -> bool {
        let mut current = Some(self.node);
        while let Some(id) = current {
            if id == node {
                return true;
            }
            current = storage.parent(id);
        }
        false
    }

    // =========================================================================
    // Size
    // =========================================================================

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Resize the table and lay it out.
    pub fn set_size<S: NodeAccess>(&mut self, storage: &mut S, size: Size) -> TableResult<()> {
        self.size = size;
        if let Some(node) = storage.get_node_mut(self.node) {
            node.set_size(size);
        }
        self.update(storage)
    }

    pub fn set_width<S: NodeAccess>(&mut self, storage: &mut S, width: f32) -> TableResult<()> {
        self.set_size(storage, Size::new(width, self.size.height))
    }

    pub fn set_height<S: NodeAccess>(&mut self, storage: &mut S, height: f32) -> TableResult<()> {
        self.set_size(storage, Size::new(self.size.width, height))
    }

    /// Adopt the backing node's size if something else resized it.
    ///
    /// Needed when this table's node was handed to an enclosing table with
    /// [`element`](Table::element) or is sized by other code. Tables added
    /// with [`table`](Table::table) are laid out by their parent. Returns
    /// whether the size changed.
    pub fn sync_size<S: NodeAccess>(&mut self, storage: &mut S) -> TableResult<bool> {
        let size = storage
            .get_node(self.node)
            .ok_or(TableError::UnknownNode(self.node))?
            .size();
        if size == self.size {
            return Ok(false);
        }
        self.size = size;
        self.update(storage)?;
        Ok(true)
    }

    // =========================================================================
    // Style
    // =========================================================================

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Set the style handed to elements. `None` restores the default theme.
    pub fn set_style<S: NodeAccess>(&mut self, storage: &mut S, style: Option<Style>) {
        self.style = style.unwrap_or_else(Style::default_theme);
        for element in self.elements() {
            if let Some(node) = storage.get_node_mut(element.node()) {
                node.update_style(&self.style);
            }
        }
    }

    // =========================================================================
    // Debug overlay
    // =========================================================================

    /// Whether the debug overlay is shown.
    pub fn debug(&self) -> bool {
        self.debug_overlay.is_some()
    }

    /// The debug overlay node, while enabled.
    pub fn debug_overlay(&self) -> Option<NodeId> {
        self.debug_overlay
    }

    /// Show or hide the row and cell outlines.
    pub fn set_debug<S: NodeAccess>(&mut self, storage: &mut S, debug: bool) -> TableResult<()> {
        match (debug, self.debug_overlay) {
            (true, None) => {
                let overlay = storage.insert_node(Box::new(GraphicsNode::new()));
                storage.add_child(self.node, overlay)?;
                self.debug_overlay = Some(overlay);
                tracing::debug!(target: targets::LAYOUT, table = ?self.node, "debug overlay enabled");
                self.update(storage)
            }
            (false, Some(overlay)) => {
                storage.remove_node(overlay);
                self.debug_overlay = None;
                tracing::debug!(target: targets::LAYOUT, table = ?self.node, "debug overlay disabled");
                Ok(())
            }
            _ => Ok(()),
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Force the next layout pass to rebuild the child list.
    pub fn invalidate(&mut self) {
        self.children_changed = true;
    }

    /// Whether the next pass will rebuild the child list.
    pub fn needs_rebuild(&self) -> bool {
        self.children_changed
    }

    /// Run a layout pass, rebuilding the child list first if it changed.
    pub fn update<S: NodeAccess>(&mut self, storage: &mut S) -> TableResult<()> {
        let _span = tracing::trace_span!(
            target: targets::LAYOUT,
            span_names::LAYOUT_PASS,
            table = ?self.node,
            width = self.size.width,
            height = self.size.height
        )
        .entered();

        if self.children_changed {
            self.rebuild(storage)?;
        }

        if let Some(overlay) = self.debug_overlay {
            // Keep the overlay above the content.
            storage.add_child(self.node, overlay)?;
        }

        let size = self.size;
        let row_heights = distribute(
            size.height,
            &self.rows.iter().map(|r| r.basis).collect::<Vec<_>>(),
        );
        let mut geometry = Geometry::default();
        let mut y = 0.0;
        for (row, &height) in self.rows.iter_mut().zip(&row_heights) {
            let cell_widths = distribute(
                size.width,
                &row.cells.iter().map(|c| c.basis).collect::<Vec<_>>(),
            );
            let mut cell_rects = Vec::with_capacity(row.cells.len());
            let mut x = 0.0;
            for (cell, &width) in row.cells.iter_mut().zip(&cell_widths) {
                let cell_rect = Rect::new(x, y, width, height);
                for element in &mut cell.elements {
                    if let Some(rect) = Self::place(storage, element, cell_rect)? {
                        geometry.elements.insert(element.node(), rect);
                    }
                }
                cell_rects.push(cell_rect);
                x += width;
            }
            geometry.rows.push(Rect::new(0.0, y, size.width, height));
            geometry.cells.push(cell_rects);
            y += height;
        }

        if let Some(overlay) = self.debug_overlay {
            let cells: Vec<Rect> = geometry.cells.iter().flatten().copied().collect();
            self.draw_outline(storage, overlay, &cells);
        }
        self.geometry = Some(geometry);
        Ok(())
    }

    /// Size and position one element, then lay out a nested table in it.
    /// Returns the element's rectangle, or `None` if its node is gone.
    fn place<S: NodeAccess>(
        storage: &mut S,
        element: &mut Element,
        cell: Rect,
    ) -> TableResult<Option<Rect>> {
        let id = element.node();
        let Some(node) = storage.get_node_mut(id) else {
            tracing::warn!(target: targets::LAYOUT, node = ?id, "element node no longer exists");
            return Ok(None);
        };
        let target = element
            .placement
            .strategy
            .target_size(cell.size, element.original_size);
        if node.size() != target {
            node.set_size(target);
        }
        // Anchor by the size the node actually took.
        let size = node.size();
        let position = element.placement.anchor.place(cell, size);
        node.set_position(position);

        if let Item::Table(inner) = &mut element.item {
            inner.size = size;
            inner.update(storage)?;
        }
        Ok(Some(Rect::from_origin_size(position, size)))
    }

    fn rebuild<S: NodeAccess>(&mut self, storage: &mut S) -> TableResult<()> {
        let _span =
            tracing::debug_span!(target: targets::LAYOUT, span_names::REBUILD, table = ?self.node)
                .entered();
        storage.remove_children(self.node);
        for element in self.elements() {
            let id = element.node();
            if !storage.contains(id) {
                tracing::warn!(target: targets::LAYOUT, node = ?id, "skipping removed element node");
                continue;
            }
            storage.add_child(self.node, id)?;
            if let Some(node) = storage.get_node_mut(id) {
                node.update_style(&self.style);
            }
        }
        // Only once every child is back, so a failed rebuild is retried.
        self.children_changed = false;
        tracing::debug!(
            target: targets::LAYOUT,
            children = storage.children(self.node).len(),
            "rebuilt table children"
        );
        Ok(())
    }

    fn draw_outline<S: NodeAccess>(&self, storage: &mut S, overlay: NodeId, cells: &[Rect]) {
        let Some(node) = storage.get_mut::<GraphicsNode>(overlay) else {
            return;
        };
        node.set_size(self.size);
        let stroke = Stroke::new(Color::from_hex_rgb(DEBUG_STROKE_COLOUR), 1.0);
        let graphics = node.graphics_mut();
        graphics
            .clear()
            .stroke_rect(Rect::from_origin_size(Point::ZERO, self.size), stroke);
        for &cell in cells {
            graphics.stroke_rect(cell, stroke);
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    fn elements(&self) -> impl Iterator<Item = &Element> {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .flat_map(|c| &c.elements)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in `row`.
    pub fn cell_count(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(|r| r.cells.len())
    }

    /// Total number of elements.
    pub fn element_count(&self) -> usize {
        self.elements().count()
    }

    /// Element nodes in row, cell, element order.
    pub fn element_nodes(&self) -> Vec<NodeId> {
        self.elements().map(Element::node).collect()
    }

    /// The original size recorded for `node`.
    pub fn original_size(&self, node: NodeId) -> Option<Size> {
        self.elements()
            .find(|e| e.node() == node)
            .map(|e| e.original_size)
    }

    /// The rectangle `row` took in the last pass.
    pub fn row_rect(&self, row: usize) -> Option<Rect> {
        self.geometry.as_ref()?.rows.get(row).copied()
    }

    /// The rectangle a cell took in the last pass.
    pub fn cell_rect(&self, row: usize, cell: usize) -> Option<Rect> {
        self.geometry.as_ref()?.cells.get(row)?.get(cell).copied()
    }

    /// A table nested with [`table`](Table::table), found by its node, at any
    /// depth.
    pub fn nested(&self, node: NodeId) -> Option<&Table> {
        self.elements().find_map(|e| match &e.item {
            Item::Table(inner) if inner.node == node => Some(&**inner),
            Item::Table(inner) => inner.nested(node),
            Item::Node(_) => None,
        })
    }

    /// Mutable access to a nested table. Structural changes made through it
    /// are laid out by the next pass of this table.
    pub fn nested_mut(&mut self, node: NodeId) -> Option<&mut Table> {
        let elements = self
            .rows
            .iter_mut()
            .flat_map(|r| &mut r.cells)
            .flat_map(|c| &mut c.elements);
        for element in elements {
            if let Item::Table(inner) = &mut element.item {
                let found = if inner.node == node {
                    Some(&mut **inner)
                } else {
                    inner.nested_mut(node)
                };
                if found.is_some() {
                    return found;
                }
            }
        }
        None
    }

    /// The rectangle `node` was given in the last pass.
    pub fn element_geometry(&self, node: NodeId) -> Option<Rect> {
        self.geometry.as_ref()?.elements.get(&node).copied()
    }
}
