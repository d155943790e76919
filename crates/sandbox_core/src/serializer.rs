//! Body document export/import
//!
//! Documents are JSON of the form
//! `{ "bodies": [ { "type", "size", "position", "velocity", "mass",
//! "isStatic", "render": { "fillStyle" } } ] }` in registry order.
//!
//! Import skips entries whose position exactly matches a body already in the
//! registry (including bodies added earlier in the same import), and entries
//! whose `type` is not a known shape.

use chrono::{DateTime, Utc};
use sandbox_math::Vec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::body::{BodySpec, FillStyle};
use crate::error::SerializeError;
use crate::registry::BodyRegistry;
use crate::shape_kind::ShapeKind;

/// File name prefix for exported documents
pub const EXPORT_PREFIX: &str = "bodies_";
/// File name extension for exported documents
pub const EXPORT_EXTENSION: &str = ".json";

/// A serialized set of bodies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyDocument {
    pub bodies: Vec<BodyRecord>,
}

/// One body in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRecord {
    /// Shape name; kept as text so an unknown shape only skips its entry
    #[serde(rename = "type")]
    pub kind: String,
    pub size: f32,
    pub position: Vec2,
    #[serde(default)]
    pub velocity: Vec2,
    /// `null` or absent means the engine default
    #[serde(default)]
    pub mass: Option<f32>,
    #[serde(rename = "isStatic", default)]
    pub is_static: bool,
    #[serde(default)]
    pub render: RenderRecord,
}

/// Display attributes of a body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRecord {
    #[serde(rename = "fillStyle")]
    pub fill_style: FillStyle,
}

impl Default for RenderRecord {
    fn default() -> Self {
        Self {
            fill_style: FillStyle::dynamic_fill(),
        }
    }
}

/// Outcome of an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Bodies added; this is the count shown to the user
    pub imported: usize,
    /// Entries skipped because a body already sat at that position
    pub skipped_duplicates: usize,
    /// Entries skipped because their type was not a known shape
    pub skipped_unknown: usize,
}

/// Snapshot the registry as a document, in registry order
pub fn export(registry: &BodyRegistry) -> BodyDocument {
    let bodies = registry
        .iter()
        .map(|view| BodyRecord {
            kind: view.body.kind.name().to_string(),
            size: view.body.size,
            position: view.position(),
            velocity: view.velocity(),
            mass: Some(view.body.mass),
            is_static: view.body.is_static,
            render: RenderRecord {
                fill_style: view.body.fill.clone(),
            },
        })
        .collect();
    BodyDocument { bodies }
}

/// Export the registry as a JSON string
pub fn export_string(registry: &BodyRegistry) -> Result<String, SerializeError> {
    serde_json::to_string(&export(registry)).map_err(SerializeError::Serialize)
}

/// File name for an export taken at `timestamp`
///
/// ISO-8601 basic format in UTC, e.g. `bodies_20240102T030405.678Z.json`.
/// Names sort in time order.
pub fn export_file_name(timestamp: DateTime<Utc>) -> String {
    format!(
        "{}{}{}",
        EXPORT_PREFIX,
        timestamp.format("%Y%m%dT%H%M%S%.3fZ"),
        EXPORT_EXTENSION
    )
}

/// Write the registry to a new timestamped file in `dir`
///
/// Creates `dir` if needed and returns the path written.
pub fn export_to_dir(registry: &BodyRegistry, dir: &Path) -> Result<PathBuf, SerializeError> {
    export_to_dir_at(registry, dir, Utc::now())
}

/// Like [`export_to_dir`] with an explicit timestamp
pub fn export_to_dir_at(
    registry: &BodyRegistry,
    dir: &Path,
    timestamp: DateTime<Utc>,
) -> Result<PathBuf, SerializeError> {
    let contents = export_string(registry)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(timestamp));
    fs::write(&path, contents)?;
    Ok(path)
}

/// Rebuild bodies from a document
pub fn import(registry: &mut BodyRegistry, document: &BodyDocument) -> ImportReport {
    let mut report = ImportReport::default();

    for record in &document.bodies {
        if registry.position_occupied(record.position) {
            report.skipped_duplicates += 1;
            continue;
        }

        let Some(kind) = ShapeKind::from_name(&record.kind) else {
            log::warn!("Skipping body with unknown type '{}'", record.kind);
            report.skipped_unknown += 1;
            continue;
        };

        let mut spec = BodySpec::new(kind, record.size, record.position)
            .with_velocity(record.velocity)
            .with_static(record.is_static)
            .with_fill(record.render.fill_style.clone());
        spec.mass = record.mass;

        registry.add(spec);
        report.imported += 1;
    }

    report
}

/// Parse a JSON document and import it
pub fn import_str(registry: &mut BodyRegistry, text: &str) -> Result<ImportReport, SerializeError> {
    let document: BodyDocument = serde_json::from_str(text).map_err(SerializeError::Parse)?;
    Ok(import(registry, &document))
}

/// Newest `bodies_*.json` in `dir`, if any
///
/// A missing directory is treated as empty.
pub fn latest_export(dir: &Path) -> Result<Option<PathBuf>, SerializeError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut newest: Option<(String, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(EXPORT_PREFIX) || !name.ends_with(EXPORT_EXTENSION) {
            continue;
        }
        if newest.as_ref().map_or(true, |(best, _)| name > *best) {
            newest = Some((name, entry.path()));
        }
    }
    Ok(newest.map(|(_, path)| path))
}
