use super::TestHost;
use crate::geometry::{Point, ViewportRect};
use crate::model::{ItemId, sample_items};
use crate::resource::tests::png_bytes;
use crate::subscription::Listener;
use crate::zoom_math::{Transform, clamp_offset};
use crate::{
    EventStatus, Gallery, GalleryError, InputEvent, Key, MemoryResources, Message, ModalMode,
    MouseButton, ResourceProvider,
};

const EPSILON: f32 = 0.0001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn host() -> TestHost {
    TestHost::new(
        Gallery::with_items(sample_items()),
        ViewportRect::sized(300.0, 400.0),
    )
}

fn wheel(delta_y: f32, position: Point) -> InputEvent {
    InputEvent::Wheel { delta_y, position }
}

fn press(position: Point) -> InputEvent {
    InputEvent::PointerPressed {
        button: MouseButton::Left,
        position,
    }
}

fn moved(position: Point) -> InputEvent {
    InputEvent::PointerMoved { position }
}

fn release(position: Point) -> InputEvent {
    InputEvent::PointerReleased {
        button: MouseButton::Left,
        position,
    }
}

fn escape() -> InputEvent {
    InputEvent::KeyPressed { key: Key::Escape }
}

#[test]
fn test_open_zoom_drag_escape_session() {
    let mut host = host();
    let center = host.rect.center();

    host.send(Message::Select(3));
    assert_eq!(host.gallery.transform(), Some(Transform::identity()));

    // Zoom at the viewport center: scale 1.5, no offset
    assert!(host.input(wheel(-500.0, center)).is_captured());
    let t = host.gallery.transform().unwrap();
    assert!(approx_eq(t.scale, 1.5));
    assert_eq!(t.offset, Point::zero());

    // Drag by (40, 40)
    host.input(press(center));
    host.input(moved(center + Point::new(40.0, 40.0)));
    let expected = clamp_offset(Point::new(40.0, 40.0), t.scale, host.rect);
    assert_eq!(host.gallery.transform().unwrap().offset, expected);
    assert_eq!(expected, Point::new(40.0, 40.0));

    // Escape mid-gesture closes the viewer and aborts the drag
    assert!(host.input(escape()).is_captured());
    assert_eq!(host.gallery.transform(), None);
    assert!(!host.gallery.viewport().is_dragging());

    // Stray pointer events after close are no-ops, even delivered directly
    let rect = host.rect;
    assert_eq!(
        host.gallery.on_event(&moved(Point::new(10.0, 10.0)), rect),
        EventStatus::Ignored
    );
    assert_eq!(
        host.gallery.on_event(&release(Point::new(10.0, 10.0)), rect),
        EventStatus::Ignored
    );
    assert_eq!(host.gallery.transform(), None);
}

#[test]
fn test_wheel_default_prevented_only_while_open() {
    let mut host = host();
    let center = host.rect.center();

    host.input(wheel(-100.0, center));
    assert_eq!(host.prevented_defaults, 0);

    host.send(Message::Select(1));
    host.input(wheel(-100.0, center));
    host.input(wheel(50.0, center));
    assert_eq!(host.prevented_defaults, 2);
}

#[test]
fn test_listeners_do_not_leak_across_cycles() {
    let mut host = host();
    assert_eq!(host.attached, vec![Listener::Keyboard]);

    for round in 0..20 {
        let id: ItemId = (round % 4) + 1;
        host.send(Message::Select(id));
        assert_eq!(host.attached.len(), 5);

        host.input(wheel(-800.0, host.rect.center()));
        host.input(press(host.rect.center()));

        // Rotate through every exit path
        match round % 3 {
            0 => host.send(Message::Deselect),
            1 => {
                host.input(escape());
            }
            _ => host.send(Message::Select(999)),
        }
        assert_eq!(host.attached, vec![Listener::Keyboard]);
    }

    assert_eq!(host.tracker.teardown(), vec![Listener::Keyboard]);
}

#[test]
fn test_deleting_open_item_detaches_listeners() {
    let mut host = host();
    host.send(Message::Select(2));
    host.input(wheel(-1000.0, Point::new(200.0, 120.0)));

    host.send(Message::RemoveSelected);

    assert_eq!(host.attached, vec![Listener::Keyboard]);
    assert_eq!(host.gallery.viewport().scale(), 1.0);
    assert_eq!(host.gallery.viewport().offset(), Point::zero());
    assert!(host.gallery.store().get(2).is_none());
}

#[test]
fn test_layout_change_between_events_is_respected() {
    let mut host = host();
    let center = host.rect.center();
    host.send(Message::Select(1));
    host.input(wheel(-1000.0, center));
    host.input(press(center));
    host.input(moved(center + Point::new(140.0, 0.0)));
    assert!(approx_eq(host.gallery.transform().unwrap().offset.x, 140.0));

    // Viewport shrinks: the next move is clamped against the new bounds
    host.rect = ViewportRect::sized(200.0, 400.0);
    host.input(moved(center + Point::new(141.0, 0.0)));
    assert!(approx_eq(host.gallery.transform().unwrap().offset.x, 100.0));
}

#[test]
fn test_upload_add_and_replace_through_provider() {
    let mut host = host();
    let mut resources = MemoryResources::new();

    let upload = resources.provide("sunset.png", png_bytes()).unwrap();
    host.send(Message::BeginAdd(upload.clone()));
    assert_eq!(host.gallery.modal(), ModalMode::Add);
    assert_eq!(host.gallery.draft().unwrap().resource, upload.locator);

    host.send(Message::DraftTitleChanged("Sunset".into()));
    host.send(Message::SaveModal);
    let added = host.gallery.items().last().unwrap().clone();
    assert_eq!(added.id, 5);
    assert_eq!(added.title, "Sunset");
    assert_eq!(added.category, "Upload");

    // Non-image bytes never reach the gallery
    let rejected = resources.provide("readme.txt", b"hello".to_vec());
    assert!(matches!(rejected, Err(GalleryError::UnrecognizedImage { .. })));

    host.send(Message::Select(added.id));
    host.input(wheel(-1000.0, host.rect.center()));
    let zoom = host.gallery.transform();

    let replacement = resources.provide("sunset-v2.png", png_bytes()).unwrap();
    host.send(Message::ReplaceImage(replacement.clone()));

    let item = host.gallery.selected_item().unwrap();
    assert_eq!(item.resource, replacement.locator);
    assert_eq!(item.title, "Sunset");
    assert_eq!(host.gallery.transform(), zoom);
}

#[test]
fn test_metadata_edit_does_not_touch_image() {
    let mut host = host();
    host.send(Message::Select(1));
    let resource = host.gallery.selected_item().unwrap().resource.clone();

    host.input(InputEvent::KeyPressed { key: Key::Char('i') });
    assert_eq!(host.gallery.modal(), ModalMode::Edit);

    host.send(Message::DraftTitleChanged("Summit".into()));
    host.send(Message::DraftCategoryChanged("Alpine".into()));
    host.send(Message::SaveModal);

    let item = host.gallery.selected_item().unwrap();
    assert_eq!(item.title, "Summit");
    assert_eq!(item.category, "Alpine");
    assert_eq!(item.resource, resource);
}

#[test]
fn test_zoom_out_fully_recenters() {
    let mut host = host();
    host.send(Message::Select(4));

    host.input(wheel(-2000.0, Point::new(20.0, 30.0)));
    host.input(press(host.rect.center()));
    host.input(moved(Point::new(0.0, 0.0)));
    host.input(release(Point::new(0.0, 0.0)));
    assert!(!host.gallery.transform().unwrap().offset.is_zero());

    // Zoom back out in small steps at an off-center cursor
    for _ in 0..40 {
        host.input(wheel(100.0, Point::new(280.0, 20.0)));
    }

    assert_eq!(host.gallery.transform(), Some(Transform::identity()));

    // At identity a drag cannot be armed
    assert_eq!(host.input(press(host.rect.center())), EventStatus::Ignored);
    host.input(moved(Point::new(290.0, 390.0)));
    assert_eq!(host.gallery.transform(), Some(Transform::identity()));
}
