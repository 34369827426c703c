use chrono::Utc;
use link16_models::{FieldDef, FamilySummary, WordDef, MESSAGE_CATALOG};
use serde::Serialize;
use std::{env, fs, path::PathBuf};

#[derive(Serialize)]
struct Catalog {
    schema_version: String,
    generated_at_utc: String,
    families: Vec<CatalogFamily>,
}

#[derive(Serialize)]
struct CatalogFamily {
    #[serde(flatten)]
    summary: FamilySummary,
    words: Vec<CatalogWord>,
}

#[derive(Serialize)]
struct CatalogWord {
    name: String,
    kind: String,
    fields: Vec<CatalogField>,
}

#[derive(Serialize)]
struct CatalogField {
    name: String,
    width: u8,
    unit: String,
}

fn field(def: &FieldDef) -> CatalogField {
    CatalogField {
        name: def.name.to_string(),
        width: def.width(),
        unit: def.ty.unit().to_string(),
    }
}

fn word(def: &WordDef) -> CatalogWord {
    CatalogWord {
        name: def.name.to_string(),
        kind: def.kind.to_string(),
        fields: def.fields.iter().map(field).collect(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/link16-catalog.v1.json"));

    let families = MESSAGE_CATALOG
        .iter()
        .map(|def| CatalogFamily {
            summary: def.summary(),
            words: std::iter::once(def.initial)
                .chain(def.extensions.iter().copied())
                .chain(def.continuations.iter().copied())
                .map(word)
                .collect(),
        })
        .collect();

    let catalog = Catalog {
        schema_version: "link16-catalog.v1".to_string(),
        generated_at_utc: Utc::now().to_rfc3339(),
        families,
    };

    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&out, serde_json::to_string_pretty(&catalog)?)?;
    println!("catalog exported to {}", out.display());
    Ok(())
}
