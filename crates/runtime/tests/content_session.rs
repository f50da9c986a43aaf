//! Sessions built from content files on disk.

use std::path::Path;

use satchel_content::ContentFactory;
use satchel_core::Contact;
use satchel_runtime::{GameEvent, ItemCatalog, RuntimeConfig, RuntimeError, Session};

fn build(factory: &ContentFactory) -> anyhow::Result<Session> {
    let config = factory.load_config()?;
    let catalog = ItemCatalog::from_definitions(factory.load_items()?)?;
    let world = factory.load_world()?;

    let session = Session::builder()
        .config(RuntimeConfig::new(config))
        .catalog(catalog)
        .world_items(world.items)
        .build()?;
    Ok(session)
}

#[test]
fn shipped_data_builds_a_playable_session() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
    let mut session = build(&ContentFactory::new(data_dir)).unwrap();

    let capacity = session.state().inventory.capacity();
    let world: Vec<_> = session.state().world.iter().map(|item| item.id).collect();
    assert!(world.len() > capacity);

    let mut rejected = 0;
    for item in world {
        let events = session.pick_up(item, Contact::Player).unwrap();
        if matches!(events.as_slice(), [GameEvent::PickupRejected { .. }]) {
            rejected += 1;
        }
    }

    assert_eq!(session.state().inventory.len(), capacity);
    assert_eq!(rejected, session.state().world.len());
}

#[test]
fn duplicate_handles_in_catalog_file_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(ContentFactory::ITEMS_FILE),
        r#"(items: [
            (handle: 1, id: "a", name: "A", kind: Misc),
            (handle: 1, id: "b", name: "B", kind: Misc),
        ])"#,
    )
    .unwrap();

    let items = ContentFactory::new(dir.path()).load_items().unwrap();
    let err = ItemCatalog::from_definitions(items).unwrap_err();
    assert!(matches!(
        RuntimeError::from(err),
        RuntimeError::Catalog(satchel_core::CatalogError::DuplicateHandle(_))
    ));
}

#[test]
fn config_file_drives_capacity_and_health() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(ContentFactory::ITEMS_FILE),
        r#"(items: [(handle: 1, id: "pebble", name: "Pebble", kind: Misc)])"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join(ContentFactory::CONFIG_FILE),
        "inventory_capacity = 1\nslot_count = 1\nmax_health = 40\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join(ContentFactory::WORLD_FILE),
        r#"(items: ["pebble", "pebble"])"#,
    )
    .unwrap();

    let session = build(&ContentFactory::new(dir.path())).unwrap();
    assert_eq!(session.state().inventory.capacity(), 1);
    assert_eq!(session.state().panel.hp_text(), "HP: 40 / 40");
    assert_eq!(session.state().world.len(), 2);
}
