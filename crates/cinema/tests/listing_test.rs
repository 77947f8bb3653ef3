//! Tests for catalog listings, the guide and console telemetry.

use cinema::{
    CameraBody, Catalog, FocalLength, LensType, SHOOTING_GUIDE, all_camera_bodies,
    catalog_entries, focal_entries, focal_length_label, telemetry,
};

#[test]
fn camera_entries_follow_declaration_order() -> anyhow::Result<()> {
    let entries = catalog_entries::<CameraBody>();
    let ids: Vec<&str> = entries.iter().map(|entry| entry.id).collect();
    let expected: Vec<&str> = all_camera_bodies().iter().map(|camera| camera.id()).collect();
    assert_eq!(ids, expected);
    assert_eq!(entries[0].name, "IMAX Film Camera");
    assert!(entries.iter().all(|entry| entry.prompt.is_none()));
    Ok(())
}

#[test]
fn lens_entries_carry_their_prompt_fragment() -> anyhow::Result<()> {
    let entries = catalog_entries::<LensType>();
    assert_eq!(entries.len(), 10);
    let cooke = entries
        .iter()
        .find(|entry| entry.id == "COOKE_S4")
        .ok_or_else(|| anyhow::anyhow!("Cooke missing"))?;
    assert_eq!(cooke.prompt, Some(LensType::CookeS4.spec().prompt));
    assert_eq!(cooke.usage, "Romance and character-driven stories");
    Ok(())
}

#[test]
fn focal_entries_carry_labels() -> anyhow::Result<()> {
    let entries = focal_entries();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0].id, "8");
    assert_eq!(entries[0].name, "8mm");
    for (entry, focal) in entries.iter().zip(FocalLength::all()) {
        assert_eq!(entry.label, Some(focal_length_label(focal)));
    }
    Ok(())
}

#[test]
fn entries_serialize_without_empty_options() -> anyhow::Result<()> {
    let camera = serde_json::to_value(&catalog_entries::<CameraBody>()[0])?;
    assert_eq!(camera["id"], "IMAX");
    assert!(camera.get("prompt").is_none());
    assert!(camera.get("label").is_none());

    let focal = serde_json::to_value(&focal_entries()[4])?;
    assert_eq!(focal["id"], "35");
    assert!(focal["label"].is_string());
    Ok(())
}

#[test]
fn guide_walks_through_every_choice() {
    assert_eq!(SHOOTING_GUIDE.len(), 4);
    assert!(
        SHOOTING_GUIDE
            .iter()
            .all(|section| !section.title.is_empty() && !section.body.is_empty())
    );
    assert!(SHOOTING_GUIDE[2].body.contains("100-135mm"));
}

#[test]
fn telemetry_installs_a_single_global_subscriber() {
    assert!(telemetry::init_console_telemetry(false).is_ok());
    assert!(telemetry::init_console_telemetry(true).is_err());
}
