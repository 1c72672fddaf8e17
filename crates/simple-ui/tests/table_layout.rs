//! End-to-end tests for table layout with real components.

use simple_ui::prelude::*;
use simple_ui::widget::widgets::StyleSlot;
use tracing_subscriber::EnvFilter;

const EPS: f32 = 1e-3;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("simple_ui=debug")),
        )
        .with_test_writer()
        .try_init();
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn test_half_percent_and_flexible_split_width() {
    init_tracing();

    let mut scene = Scene::new();
    let left = scene.add(Panel::new());
    let right = scene.add(Panel::new());

    let mut table = Table::new(&mut scene);
    table
        .row(Basis::Flexible)
        .cell("50%")
        .unwrap()
        .element(&mut scene, left, SizingStrategy::Stretch)
        .unwrap()
        .cell(Basis::Flexible)
        .unwrap()
        .element(&mut scene, right, SizingStrategy::Stretch)
        .unwrap();
    table.set_size(&mut scene, Size::new(300.0, 100.0)).unwrap();

    assert_eq!(table.cell_rect(0, 0).unwrap().width(), 150.0);
    assert_eq!(table.cell_rect(0, 1).unwrap().width(), 150.0);
    assert_eq!(scene.get_node(left).unwrap().size(), Size::new(150.0, 100.0));
    assert_eq!(scene.get_node(right).unwrap().position(), Point::new(150.0, 0.0));
    assert_eq!(
        scene.get::<Panel>(right).unwrap().pane().size,
        Size::new(150.0, 100.0)
    );
}

#[test]
fn test_row_heights_sum_to_table_height() {
    init_tracing();

    let mut scene = Scene::new();
    let mut table = Table::new(&mut scene);
    table
        .row(Basis::Flexible)
        .row(20.0)
        .row("10%")
        .row(Basis::Flexible);
    table.set_size(&mut scene, Size::new(100.0, 100.0)).unwrap();

    let heights: Vec<f32> = (0..table.row_count())
        .map(|i| table.row_rect(i).unwrap().height())
        .collect();
    assert_eq!(heights, vec![35.0, 20.0, 10.0, 35.0]);
    assert!(approx(heights.iter().sum(), 100.0));
    assert!(approx(table.row_rect(3).unwrap().bottom(), 100.0));
}

#[test]
fn test_cells_use_full_table_width_in_every_row() {
    let mut scene = Scene::new();
    let mut table = Table::new(&mut scene);
    table.row(Basis::Flexible).cell(40.0).unwrap();
    table.row(Basis::Flexible).cell(Basis::Flexible).unwrap().cell(Basis::Flexible).unwrap();
    table.set_width(&mut scene, 120.0).unwrap();
    table.set_height(&mut scene, 60.0).unwrap();

    assert_eq!(table.size(), Size::new(120.0, 60.0));
    assert_eq!(table.cell_rect(0, 0), Some(Rect::new(0.0, 0.0, 40.0, 30.0)));
    assert_eq!(table.cell_rect(1, 1), Some(Rect::new(60.0, 30.0, 60.0, 30.0)));
}

#[test]
fn test_anchors_in_one_cell() {
    let mut scene = Scene::new();
    let corners = [
        (Anchor::TOP_LEFT, Point::new(0.0, 0.0)),
        (Anchor::TOP_RIGHT, Point::new(90.0, 0.0)),
        (Anchor::CENTER, Point::new(45.0, 20.0)),
        (Anchor::BOTTOM_LEFT, Point::new(0.0, 40.0)),
        (Anchor::BOTTOM_RIGHT, Point::new(90.0, 40.0)),
    ];

    let mut table = Table::new(&mut scene);
    table.row(Basis::Flexible);
    let mut ids = Vec::new();
    for (anchor, _) in corners {
        let id = scene.add(Container::with_size(Size::new(10.0, 10.0)));
        table.element(&mut scene, id, anchor).unwrap();
        ids.push(id);
    }
    table.set_size(&mut scene, Size::new(100.0, 50.0)).unwrap();

    for (id, (_, expected)) in ids.iter().zip(corners) {
        assert_eq!(scene.get_node(*id).unwrap().position(), expected);
    }
}

#[test]
fn test_cover_overflows_and_contain_fits() {
    let mut scene = Scene::new();
    let cover = scene.add(Container::with_size(Size::new(20.0, 10.0)));
    let contain = scene.add(Container::with_size(Size::new(20.0, 10.0)));

    let mut table = Table::new(&mut scene);
    table
        .row(Basis::Flexible)
        .cell(Basis::Flexible)
        .unwrap()
        .element(&mut scene, cover, SizingStrategy::Cover)
        .unwrap()
        .cell(Basis::Flexible)
        .unwrap()
        .element(&mut scene, contain, SizingStrategy::Contain)
        .unwrap();
    table.set_size(&mut scene, Size::new(100.0, 40.0)).unwrap();

    // Each cell is 50x40.
    let cover = scene.get_node(cover).unwrap().geometry();
    assert_eq!(cover.size, Size::new(80.0, 40.0));
    assert_eq!(cover.origin, Point::new(-15.0, 0.0));

    let contain = scene.get_node(contain).unwrap().geometry();
    assert_eq!(contain.size, Size::new(50.0, 25.0));
    assert_eq!(contain.origin, Point::new(50.0, 7.5));
}

#[test]
fn test_child_order_follows_declaration() {
    init_tracing();

    let mut scene = Scene::new();
    let label = scene.add(Label::new("Name"));
    let divider = scene.add(Divider::new());
    let checkbox = scene.add(Checkbox::new());
    let button = scene.add(TextButton::new("Save"));

    let mut table = Table::new(&mut scene);
    table
        .row(Basis::Flexible)
        .cell("70%")
        .unwrap()
        .element(&mut scene, label, SizingStrategy::Stretch)
        .unwrap()
        .cell(Basis::Flexible)
        .unwrap()
        .element(&mut scene, checkbox, SizingStrategy::Contain)
        .unwrap()
        .row(4.0)
        .element(&mut scene, divider, SizingStrategy::Stretch)
        .unwrap()
        .row(Basis::Flexible)
        .element(&mut scene, button, Placement::default())
        .unwrap();
    table.set_debug(&mut scene, true).unwrap();
    table.set_size(&mut scene, Size::new(200.0, 104.0)).unwrap();

    let overlay = table.debug_overlay().unwrap();
    assert_eq!(
        scene.children(table.node()),
        &[label, checkbox, divider, button, overlay]
    );

    let first = scene.format_tree(table.node());
    table.update(&mut scene).unwrap();
    assert_eq!(scene.format_tree(table.node()), first);
}

#[test]
fn test_table_style_reaches_components() {
    let mut scene = Scene::new();
    let divider = scene.add(Divider::new());
    let button = scene.add(Button::new());

    let mut table = Table::new(&mut scene);
    table
        .row(Basis::Flexible)
        .element(&mut scene, divider, Placement::default())
        .unwrap()
        .element(&mut scene, button, Placement::default())
        .unwrap();

    let mut themes = Themes::builtin();
    themes
        .load_str("name = \"night\"\nshadow_colour = \"#112233\"")
        .unwrap();
    let style = themes.get("night").unwrap().clone();
    table.set_style(&mut scene, Some(style.clone()));
    table.update(&mut scene).unwrap();

    assert_eq!(scene.get::<Divider>(divider).unwrap().line().tint, style.shadow_colour);
    assert_eq!(
        scene.get::<Button>(button).unwrap().background().node_base().tint(),
        style.shadow_colour
    );

    // A component's own style wins over the table's.
    let own = make_style(Default::default());
    scene.get_mut::<Divider>(divider).unwrap().set_style(Some(own.clone()));
    table.set_style(&mut scene, Some(style));
    assert_eq!(scene.get::<Divider>(divider).unwrap().line().tint, own.shadow_colour);

    let mut slot = StyleSlot::new();
    slot.inherit(table.style());
    assert_eq!(slot.get(), table.style());
}

#[test]
fn test_nested_tables() {
    init_tracing();

    let mut scene = Scene::new();
    let icon = scene.add(Container::with_size(Size::new(8.0, 8.0)));
    let caption = scene.add(Label::new("Volume"));

    let mut inner = Table::new(&mut scene);
    inner
        .row(Basis::Flexible)
        .cell(Basis::Flexible)
        .unwrap()
        .element(&mut scene, icon, (SizingStrategy::Grow, Anchor::TOP_LEFT))
        .unwrap()
        .cell(40)
        .unwrap()
        .element(&mut scene, caption, SizingStrategy::Stretch)
        .unwrap();
    let inner_node = inner.node();

    let mut outer = Table::new(&mut scene);
    outer
        .row(30)
        .row(Basis::Flexible)
        .table(&mut scene, inner, SizingStrategy::Stretch)
        .unwrap();
    outer.set_size(&mut scene, Size::new(100.0, 90.0)).unwrap();

    // Laid out in the same pass, no extra call needed.
    assert_eq!(outer.nested(inner_node).unwrap().size(), Size::new(100.0, 60.0));
    assert_eq!(
        scene.get_node(inner_node).unwrap().position(),
        Point::new(0.0, 30.0)
    );
    let icon = scene.get_node(icon).unwrap();
    assert_eq!(icon.size(), Size::new(60.0, 60.0));
    assert_eq!(icon.position(), Point::ZERO);
    assert_eq!(
        scene.get_node(caption).unwrap().geometry(),
        Rect::new(60.0, 0.0, 40.0, 60.0)
    );
}

#[test]
fn test_table_nested_by_node_follows_on_sync() {
    let mut scene = Scene::new();
    let icon = scene.add(Container::with_size(Size::new(8.0, 8.0)));

    let mut inner = Table::new(&mut scene);
    inner
        .row(Basis::Flexible)
        .element(&mut scene, icon, SizingStrategy::Stretch)
        .unwrap();

    let mut outer = Table::new(&mut scene);
    outer
        .row(Basis::Flexible)
        .element(&mut scene, inner.node(), SizingStrategy::Stretch)
        .unwrap();
    outer.set_size(&mut scene, Size::new(50.0, 20.0)).unwrap();

    assert!(inner.sync_size(&mut scene).unwrap());
    assert_eq!(scene.get_node(icon).unwrap().size(), Size::new(50.0, 20.0));
}

#[test]
fn test_removed_element_does_not_break_layout() {
    init_tracing();

    let mut scene = Scene::new();
    let first = scene.add(Divider::new());
    let gone = scene.add(Panel::new());
    let last = scene.add(Divider::new());

    let mut table = Table::new(&mut scene);
    table
        .row(Basis::Flexible)
        .element(&mut scene, first, SizingStrategy::Stretch)
        .unwrap()
        .row(Basis::Flexible)
        .element(&mut scene, gone, SizingStrategy::Stretch)
        .unwrap()
        .row(Basis::Flexible)
        .element(&mut scene, last, SizingStrategy::Stretch)
        .unwrap();
    table.set_size(&mut scene, Size::new(90.0, 30.0)).unwrap();

    scene.remove_node(gone);
    table.invalidate();
    table.set_size(&mut scene, Size::new(90.0, 60.0)).unwrap();

    assert_eq!(scene.children(table.node()), &[first, last]);
    assert_eq!(
        scene.get_node(last).unwrap().geometry(),
        Rect::new(0.0, 40.0, 90.0, 20.0)
    );
}

#[test]
fn test_errors_before_first_row() {
    let mut scene = Scene::new();
    let node = scene.add(Container::new());
    let mut table = Table::new(&mut scene);

    assert_eq!(table.cell(10.0).err(), Some(TableError::NoCurrentRow));
    let err = table
        .element(&mut scene, node, Placement::default())
        .err()
        .unwrap();
    assert_eq!(err, TableError::NoCurrentRow);
    assert_eq!(err.to_string(), "no current row: start a row first");
}
