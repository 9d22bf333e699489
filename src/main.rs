/// Scripted interaction session against the in-memory gallery.
///
/// Replays what a user does in the viewer (open, zoom, drag, close, upload,
/// edit, delete) and logs the resulting state after every step. Useful for
/// checking zoom tunables from the config file without a UI.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use vitrine::ViewerConfig;

    let config = ViewerConfig::load_from_default_path().unwrap_or_default();

    env_logger::Builder::new()
        .filter_level(config.preferences.log_level.to_level_filter())
        .parse_default_env()
        .init();

    if let Err(e) = session::run(&config) {
        log::error!("Session aborted: {}", e);
        std::process::exit(1);
    }
}

// No native entry point on WASM; hosts embed the library directly.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod session {
    use vitrine::keybindings::{key_to_string, optional_key_to_string};
    use vitrine::model::sample_items;
    use vitrine::{
        Gallery, GalleryError, InputEvent, Key, MemoryResources, Message, MouseButton, Point,
        ResourceProvider, ViewerConfig, ViewportRect,
    };

    /// Smallest byte sequence the provider recognizes as a PNG.
    const PNG_HEADER: [u8; 16] = [
        0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 13, b'I', b'H', b'D', b'R',
    ];

    pub fn run(config: &ViewerConfig) -> Result<(), GalleryError> {
        let mut gallery = Gallery::with_items(sample_items())
            .with_zoom_settings(config.zoom.to_settings())
            .with_keybindings(config.keybindings.clone());
        let mut resources = MemoryResources::new();
        let rect = ViewportRect::new(40.0, 20.0, 300.0, 400.0);
        let center = rect.center();

        log::info!("Gallery ready with {} items", gallery.items().len());
        let bindings = gallery.keybindings();
        log::info!(
            "Keys: close {}, delete {}, edit {}, save {}",
            key_to_string(bindings.close_viewer),
            optional_key_to_string(bindings.delete_item),
            optional_key_to_string(bindings.edit_info),
            optional_key_to_string(bindings.save_modal)
        );

        gallery.update(Message::Select(3))?;
        report(&gallery, "open item 3");

        gallery.on_event(
            &InputEvent::Wheel {
                delta_y: -500.0,
                position: center,
            },
            rect,
        );
        report(&gallery, "wheel zoom at center");

        gallery.on_event(
            &InputEvent::Wheel {
                delta_y: -500.0,
                position: center + Point::new(50.0, 0.0),
            },
            rect,
        );
        report(&gallery, "wheel zoom 50px right of center");

        gallery.on_event(
            &InputEvent::PointerPressed {
                button: MouseButton::Left,
                position: center,
            },
            rect,
        );
        gallery.on_event(
            &InputEvent::PointerMoved {
                position: center + Point::new(40.0, 40.0),
            },
            rect,
        );
        report(&gallery, "drag by (40, 40)");

        gallery.on_event(&InputEvent::KeyPressed { key: Key::Escape }, rect);
        report(&gallery, "escape");

        let stray = gallery.on_event(
            &InputEvent::PointerMoved {
                position: Point::new(0.0, 0.0),
            },
            rect,
        );
        log::info!("stray pointer move after close: {:?}", stray);

        match resources.provide("notes.txt", b"not an image".to_vec()) {
            Ok(upload) => gallery.update(Message::BeginAdd(upload))?,
            Err(e) => log::warn!("upload rejected: {}", e),
        }

        let upload = resources.provide("capture.png", PNG_HEADER.to_vec())?;
        gallery.update(Message::BeginAdd(upload))?;
        gallery.update(Message::DraftTitleChanged("Harbor Lights".into()))?;
        gallery.on_event(&InputEvent::KeyPressed { key: Key::Enter }, rect);
        report(&gallery, "add upload");

        if let Some(added) = gallery.items().last().map(|item| item.id) {
            gallery.update(Message::Select(added))?;
            let replacement = resources.provide("capture-v2.png", PNG_HEADER.to_vec())?;
            gallery.update(Message::ReplaceImage(replacement))?;
            gallery.update(Message::RemoveSelected)?;
        }
        let released = gallery.release_orphaned(&mut resources);
        log::info!(
            "Released {} uploads, {} still stored",
            released,
            resources.len()
        );

        gallery.update(Message::Select(2))?;
        gallery.update(Message::OpenEditModal)?;
        gallery.update(Message::DraftCategoryChanged("Weather".into()))?;
        gallery.update(Message::SaveModal)?;
        report(&gallery, "edit item 2");

        gallery.update(Message::RemoveSelected)?;
        report(&gallery, "delete open item");

        Ok(())
    }

    fn report(gallery: &Gallery, step: &str) {
        match gallery.transform() {
            Some(t) => log::info!(
                "{}: item {:?} open, scale {:.2}, offset ({:.1}, {:.1})",
                step,
                gallery.selected(),
                t.scale,
                t.offset.x,
                t.offset.y
            ),
            None => log::info!("{}: viewer closed", step),
        }
        match serde_json::to_string(gallery.items()) {
            Ok(json) => log::debug!("{}: items {}", step, json),
            Err(e) => log::warn!("{}: could not serialize items: {}", step, e),
        }
    }
}
