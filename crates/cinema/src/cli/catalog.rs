//! `cinema catalog` handler.

use cinema::{
    CameraAngle, CameraBody, Catalog, CatalogEntry, CatalogKind, CinemaResult, JsonError,
    LensType, OutputFormat, all_aspect_ratios, all_camera_bodies, all_image_sizes,
    catalog_entries, focal_entries,
};
use serde_json::{Value, json};

const ALL_KINDS: [CatalogKind; 6] = [
    CatalogKind::Cameras,
    CatalogKind::Lenses,
    CatalogKind::Angles,
    CatalogKind::Focal,
    CatalogKind::Ratios,
    CatalogKind::Sizes,
];

/// Print one catalog, or all of them.
pub fn show_catalog(kind: Option<CatalogKind>, format: OutputFormat) -> CinemaResult<()> {
    let kinds: Vec<CatalogKind> = match kind {
        Some(kind) => vec![kind],
        None => ALL_KINDS.to_vec(),
    };

    match format {
        OutputFormat::Json => {
            let value = match kind {
                Some(kind) => to_json(kind)?,
                None => {
                    let mut doc = serde_json::Map::new();
                    for kind in kinds {
                        doc.insert(key(kind).to_string(), to_json(kind)?);
                    }
                    Value::Object(doc)
                }
            };
            let text = serde_json::to_string_pretty(&value)
                .map_err(|e| JsonError::new("catalog", e.to_string()))?;
            println!("{}", text);
        }
        OutputFormat::Human => {
            for kind in kinds {
                print_human(kind);
            }
        }
    }
    Ok(())
}

fn key(kind: CatalogKind) -> &'static str {
    match kind {
        CatalogKind::Cameras => "cameras",
        CatalogKind::Lenses => "lenses",
        CatalogKind::Angles => "angles",
        CatalogKind::Focal => "focal",
        CatalogKind::Ratios => "ratios",
        CatalogKind::Sizes => "sizes",
    }
}

fn entries(kind: CatalogKind) -> Vec<CatalogEntry> {
    match kind {
        CatalogKind::Cameras => catalog_entries::<CameraBody>(),
        CatalogKind::Lenses => catalog_entries::<LensType>(),
        CatalogKind::Angles => catalog_entries::<CameraAngle>(),
        CatalogKind::Focal => focal_entries(),
        CatalogKind::Ratios | CatalogKind::Sizes => Vec::new(),
    }
}

fn plain_values(kind: CatalogKind) -> Vec<String> {
    match kind {
        CatalogKind::Ratios => all_aspect_ratios().iter().map(ToString::to_string).collect(),
        CatalogKind::Sizes => all_image_sizes().iter().map(ToString::to_string).collect(),
        _ => Vec::new(),
    }
}

fn to_json(kind: CatalogKind) -> CinemaResult<Value> {
    let value = match kind {
        CatalogKind::Ratios | CatalogKind::Sizes => json!(plain_values(kind)),
        _ => serde_json::to_value(entries(kind))
            .map_err(|e| JsonError::new(key(kind), e.to_string()))?,
    };
    Ok(value)
}

fn print_human(kind: CatalogKind) {
    println!("{}", key(kind).to_uppercase());
    println!("{:-<80}", "");

    if matches!(kind, CatalogKind::Ratios | CatalogKind::Sizes) {
        println!("  {}", plain_values(kind).join("  "));
        println!();
        return;
    }

    let icons: Vec<&str> = match kind {
        CatalogKind::Cameras => all_camera_bodies()
            .iter()
            .map(|camera| camera.spec().icon)
            .collect(),
        _ => Vec::new(),
    };

    for (index, entry) in entries(kind).iter().enumerate() {
        let icon = icons.get(index).map(|icon| format!("{} ", icon)).unwrap_or_default();
        match entry.label {
            Some(label) => println!("{}{:<16} {} [{}]", icon, entry.id, entry.name, label),
            None => println!("{}{:<16} {}", icon, entry.id, entry.name),
        }
        println!("    {}", entry.description);
        println!("    {}", entry.detail);
        println!("    Best for: {}", entry.usage);
        if let Some(prompt) = entry.prompt {
            println!("    Prompt: {}", prompt);
        }
    }
    println!();
}
