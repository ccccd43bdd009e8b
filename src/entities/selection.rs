//! Selection export model - what the CAD host hands us
//!
//! The host side of the pipeline (selection sets, oriented bounding boxes,
//! physical property queries, material names) arrives as a plain-text YAML
//! export. Geometry is never computed here; the extents are taken as given,
//! in the host's internal centimeter unit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// What kind of entity a selection picked.
///
/// A closed enumeration in place of the host API's dynamic entity types;
/// only `Occurrence` carries into the cut list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    /// A placed instance of a component in the assembly
    Occurrence,
    /// A raw solid body
    Body,
    Face,
    Edge,
    Sketch,
    Other,
}

/// Oriented minimum bounding box extents, centimeters.
///
/// Field names are the host's axis labels; they carry no size ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// The three extents sorted descending: the largest is the board length.
    ///
    /// Ties break arbitrarily; the labels are positional.
    pub fn extents_sorted(&self) -> [f64; 3] {
        let mut extents = [self.length, self.width, self.height];
        extents.sort_by(|a, b| b.total_cmp(a));
        extents
    }
}

/// Host-computed physical properties of one occurrence
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicalProperties {
    /// Mass as modeled, kilograms
    pub mass_kg: f64,

    /// Solid volume, cubic centimeters
    pub volume_cm3: f64,
}

/// One entry of the selection export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selection {
    /// Entity kind of the pick
    pub kind: SelectionKind,

    /// Display name of the picked entity
    pub name: String,

    /// Name of the defining component (occurrences only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    /// Oriented minimum bounding box (occurrences only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,

    /// Physical property query results (occurrences only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical: Option<PhysicalProperties>,

    /// Material name as assigned in the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

/// A whole selection export file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionExport {
    #[serde(default)]
    pub selections: Vec<Selection>,
}

/// An occurrence pick with everything the pipeline needs, validated
#[derive(Debug, Clone)]
pub struct Occurrence {
    /// Occurrence display name (e.g. "Post 6x6:1")
    pub name: String,

    /// Defining component name; duplicates collapse on this key
    pub component: String,

    pub bounding_box: BoundingBox,
    pub physical: PhysicalProperties,

    /// Model material, when the export carries one
    pub material: Option<String>,
}

/// Errors loading or validating a selection export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read selection export {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse selection export {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("occurrence '{name}' has no bounding box in the export")]
    MissingBoundingBox { name: String },

    #[error("occurrence '{name}' has no physical properties in the export")]
    MissingPhysical { name: String },
}

impl SelectionExport {
    /// Load an export file
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yml::from_str(&contents).map_err(|source| ExportError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Filter the export down to valid occurrences, in file order.
    ///
    /// Non-occurrence picks are dropped silently; an empty result is fine.
    /// An occurrence missing its geometry blocks is a malformed export.
    pub fn occurrences(&self) -> Result<Vec<Occurrence>, ExportError> {
        let mut occurrences = Vec::new();

        for selection in &self.selections {
            if selection.kind != SelectionKind::Occurrence {
                continue;
            }

            let bounding_box =
                selection
                    .bounding_box
                    .ok_or_else(|| ExportError::MissingBoundingBox {
                        name: selection.name.clone(),
                    })?;
            let physical = selection
                .physical
                .ok_or_else(|| ExportError::MissingPhysical {
                    name: selection.name.clone(),
                })?;

            occurrences.push(Occurrence {
                name: selection.name.clone(),
                // exports from flat (single-instance) designs may omit the
                // component name; the occurrence then stands for itself
                component: selection
                    .component
                    .clone()
                    .unwrap_or_else(|| selection.name.clone()),
                bounding_box,
                physical,
                material: selection.material.clone(),
            });
        }

        Ok(occurrences)
    }
}
