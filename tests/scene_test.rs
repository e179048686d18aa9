use fireworks_canvas::canvas::{BBox, Canvas, DrawCommand, PaletteColor, Scene, ShapeId};
use fireworks_canvas::physic_engine::types::Vec2;

#[test]
fn test_create_move_delete_coords() {
    let mut scene = Scene::new();
    let id = scene.create_oval(BBox::new(0.0, 0.0, 5.0, 5.0), PaletteColor::Blue);

    assert_eq!(scene.coords(id), Some(BBox::new(0.0, 0.0, 5.0, 5.0)));

    scene.move_by(id, Vec2::new(2.0, -1.0));
    assert_eq!(scene.coords(id), Some(BBox::new(2.0, -1.0, 7.0, 4.0)));

    scene.delete(id);
    assert_eq!(scene.coords(id), None);
    assert!(scene.is_empty());
}

#[test]
fn test_journal_keeps_order_and_drains() {
    let mut scene = Scene::new();
    let bbox = BBox::new(1.0, 1.0, 6.0, 6.0);
    let id = scene.create_oval(bbox, PaletteColor::Green);
    scene.move_by(id, Vec2::new(1.0, 0.0));
    scene.delete(id);

    assert_eq!(
        scene.drain_commands(),
        vec![
            DrawCommand::Create {
                id,
                bbox,
                color: PaletteColor::Green
            },
            DrawCommand::Move {
                id,
                delta: Vec2::new(1.0, 0.0)
            },
            DrawCommand::Delete { id },
        ]
    );
    assert!(scene.drain_commands().is_empty());
}

#[test]
fn test_operations_on_deleted_shape_are_silent() {
    let mut scene = Scene::new();
    let id = scene.create_oval(BBox::default(), PaletteColor::Red);
    scene.delete(id);
    let _ = scene.drain_commands();

    scene.delete(id);
    scene.move_by(id, Vec2::new(3.0, 3.0));
    scene.move_by(ShapeId(999), Vec2::new(3.0, 3.0));

    assert!(scene.pending_commands().is_empty());
    assert_eq!(scene.coords(id), None);
}

#[test]
fn test_ids_are_never_reused() {
    let mut scene = Scene::new();
    let a = scene.create_oval(BBox::default(), PaletteColor::Red);
    scene.delete(a);
    let b = scene.create_oval(BBox::default(), PaletteColor::Red);
    scene.clear();
    let c = scene.create_oval(BBox::default(), PaletteColor::Red);

    assert!(a < b && b < c);
}

#[test]
fn test_iter_follows_creation_order() {
    let mut scene = Scene::new();
    let ids: Vec<ShapeId> = PaletteColor::ALL
        .iter()
        .map(|&c| scene.create_oval(BBox::default(), c))
        .collect();

    let seen: Vec<ShapeId> = scene.iter().map(|(id, _)| id).collect();
    assert_eq!(seen, ids);
}

#[test]
fn test_clear_journals_deletes() {
    let mut scene = Scene::new();
    scene.create_oval(BBox::default(), PaletteColor::Red);
    scene.create_oval(BBox::default(), PaletteColor::Yellow);
    let _ = scene.drain_commands();

    scene.clear();

    let commands = scene.drain_commands();
    assert_eq!(commands.len(), 2);
    assert!(commands
        .iter()
        .all(|c| matches!(c, DrawCommand::Delete { .. })));
    assert_eq!(scene.len(), 0);
}
