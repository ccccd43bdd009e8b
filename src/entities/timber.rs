//! Timber record computation - the dimension/quantity/mass pipeline
//!
//! Turns validated occurrences into one record per distinct component:
//! stock-snapped exact dimensions, even-foot order lengths with trim margin,
//! nominal board-footage, and estimated mass by species density (or the
//! model's own mass for the `Model` passthrough).

use serde::Serialize;
use thiserror::Error;

use crate::core::fraction::{proper_fraction, FractionError};
use crate::core::units::{
    cm_to_inches, round_half_even, round_partial, round_tenths, round_up_to_even, Resolution,
    INCHES_PER_FOOT, ORDER_MARGIN_FT,
};
use crate::entities::selection::Occurrence;
use crate::entities::species::Species;

/// A dimension computation failed for one component
#[derive(Debug, Error)]
#[error("failed to compute timber dimensions for '{component}'")]
pub struct ComputeError {
    /// Component whose bounding box produced the failure
    pub component: String,

    #[source]
    pub source: FractionError,
}

/// Everything computed for one occurrence
#[derive(Debug, Clone, Serialize)]
pub struct TimberProperties {
    /// Exact snapped dimensions, longest first, as inch strings ("96\"")
    pub exact_length: String,
    pub exact_width: String,
    pub exact_height: String,

    /// Order length: longest extent rounded up to an even foot count, plus margin
    pub order_length_ft: u32,

    /// Order cross-section, snapped inch strings
    pub order_width: String,
    pub order_height: String,

    /// Nominal board-feet for one piece at order dimensions
    pub board_feet: u32,

    /// Estimated mass of one piece, kilograms, one decimal
    pub mass_kg: f64,

    /// Material label: species name, or the model's material for passthrough
    pub material: String,
}

/// One row of the cut list: a distinct component with its count
#[derive(Debug, Clone, Serialize)]
pub struct TimberRecord {
    /// Component name (the deduplication key)
    pub name: String,

    /// Assigned part number
    pub part_number: String,

    /// Number of selected occurrences sharing the component
    pub quantity: u32,

    #[serde(flatten)]
    pub properties: TimberProperties,
}

impl TimberRecord {
    /// Board-feet across the full quantity
    pub fn total_board_feet(&self) -> u32 {
        self.properties.board_feet * self.quantity
    }
}

/// Per-occurrence computation over host-provided geometry
#[derive(Debug)]
pub struct TimberData<'a> {
    occurrence: &'a Occurrence,
    species: &'a Species,
    resolution: Resolution,
}

impl<'a> TimberData<'a> {
    pub fn new(occurrence: &'a Occurrence, species: &'a Species, resolution: Resolution) -> Self {
        Self {
            occurrence,
            species,
            resolution,
        }
    }

    /// Run the pipeline for this occurrence
    pub fn properties(&self) -> Result<TimberProperties, ComputeError> {
        let snap = self.resolution.inches();

        // largest extent is the board length, by convention
        let [length_cm, width_cm, height_cm] = self.occurrence.bounding_box.extents_sorted();

        let length_in = round_partial(cm_to_inches(length_cm), snap);
        let width_in = round_partial(cm_to_inches(width_cm), snap);
        let height_in = round_partial(cm_to_inches(height_cm), snap);

        let exact_length = self.format_inches(length_in)?;
        let exact_width = self.format_inches(width_in)?;
        let exact_height = self.format_inches(height_in)?;

        // order cross-section reuses the snapped exact dimensions
        let order_width = exact_width.clone();
        let order_height = exact_height.clone();

        let order_length_ft = round_up_to_even(length_in / INCHES_PER_FOOT) + ORDER_MARGIN_FT;

        // nominal board-feet: length already in feet, one inch dimension
        // scaled by /12; kept exactly as the estimate has always been done
        let board_feet =
            round_half_even(order_length_ft as f64 * width_in * (height_in / 12.0)) as u32;

        Ok(TimberProperties {
            exact_length,
            exact_width,
            exact_height,
            order_length_ft,
            order_width,
            order_height,
            board_feet,
            mass_kg: self.mass_kg(),
            material: self.material(),
        })
    }

    /// Estimated mass: model passthrough, or density factor times volume
    fn mass_kg(&self) -> f64 {
        if self.species.is_model {
            round_tenths(self.occurrence.physical.mass_kg)
        } else {
            // factor (g/cm^3) * volume (cm^3) = grams
            round_tenths(self.species.density * self.occurrence.physical.volume_cm3 / 1000.0)
        }
    }

    /// Material label for the record
    fn material(&self) -> String {
        if self.species.is_model {
            self.occurrence
                .material
                .clone()
                .unwrap_or_else(|| self.species.name.to_string())
        } else {
            self.species.name.to_string()
        }
    }

    fn format_inches(&self, value_in: f64) -> Result<String, ComputeError> {
        let fraction = proper_fraction(value_in).map_err(|source| ComputeError {
            component: self.occurrence.component.clone(),
            source,
        })?;
        Ok(format!("{}\"", fraction))
    }
}

/// Build one record per distinct component, first-seen order.
///
/// Duplicate occurrences of a component collapse into its quantity; part
/// numbers are `prefix` + 1-based index over the distinct sequence.
pub fn build_records(
    occurrences: &[Occurrence],
    species: &Species,
    resolution: Resolution,
    prefix: &str,
) -> Result<Vec<TimberRecord>, ComputeError> {
    let mut records: Vec<TimberRecord> = Vec::new();
    let mut index_by_component = std::collections::HashMap::new();

    for occurrence in occurrences {
        if let Some(&index) = index_by_component.get(&occurrence.component) {
            let record: &mut TimberRecord = &mut records[index];
            record.quantity += 1;
            continue;
        }

        let properties = TimberData::new(occurrence, species, resolution).properties()?;
        index_by_component.insert(occurrence.component.clone(), records.len());
        records.push(TimberRecord {
            name: occurrence.component.clone(),
            part_number: format!("{}{}", prefix, records.len() + 1),
            quantity: 1,
            properties,
        });
    }

    Ok(records)
}
