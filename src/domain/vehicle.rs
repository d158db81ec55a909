//! Vehicle record and registration draft.
//!
//! [`VehicleRecord`] is the only persisted entity. Its serialized field names
//! follow the registry's existing on-device format (`placa`, `marca`, ...);
//! English aliases are accepted when reading.

use super::error::ValidationError;
use super::validation::{self, Validity};
use serde::{Deserialize, Serialize};

/// One motorcycle's registration data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(rename = "placa", alias = "plate")]
    pub plate: String,

    #[serde(rename = "marca", alias = "brand")]
    pub brand: String,

    #[serde(rename = "modelo", alias = "model")]
    pub model: String,

    #[serde(rename = "cor", alias = "color")]
    pub color: String,

    #[serde(rename = "anoFabricacao", alias = "manufactureYear")]
    pub manufacture_year: String,

    #[serde(rename = "anoModelo", alias = "modelYear")]
    pub model_year: String,

    #[serde(rename = "chassi", alias = "chassis")]
    pub chassis: String,
}

impl VehicleRecord {
    /// Text used by the listing filter.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.plate, self.brand, self.model, self.color, self.chassis
        )
    }
}

/// Identifies one field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Plate,
    Brand,
    Model,
    Color,
    ManufactureYear,
    ModelYear,
    Chassis,
}

impl Field {
    /// All form fields in display order.
    pub const ALL: [Self; 7] = [
        Self::Plate,
        Self::Brand,
        Self::Model,
        Self::Color,
        Self::ManufactureYear,
        Self::ModelYear,
        Self::Chassis,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plate => "Plate",
            Self::Brand => "Brand",
            Self::Model => "Model",
            Self::Color => "Color",
            Self::ManufactureYear => "Manufacture year",
            Self::ModelYear => "Model year",
            Self::Chassis => "Chassis",
        }
    }
}

/// The registration form: seven text fields, any of which may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleDraft {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub color: String,
    pub manufacture_year: String,
    pub model_year: String,
    pub chassis: String,
}

impl VehicleDraft {
    /// Returns the current value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Plate => &self.plate,
            Field::Brand => &self.brand,
            Field::Model => &self.model,
            Field::Color => &self.color,
            Field::ManufactureYear => &self.manufacture_year,
            Field::ModelYear => &self.model_year,
            Field::Chassis => &self.chassis,
        }
    }

    /// Sets a field exactly as typed.
    ///
    /// Nothing is trimmed or filtered, year fields included: a malformed year
    /// stays malformed so [`VehicleDraft::to_record`] can reject it.
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Plate => &mut self.plate,
            Field::Brand => &mut self.brand,
            Field::Model => &mut self.model,
            Field::Color => &mut self.color,
            Field::ManufactureYear => &mut self.manufacture_year,
            Field::ModelYear => &mut self.model_year,
            Field::Chassis => &mut self.chassis,
        };
        value.clone_into(slot);
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates the draft and converts it into a record.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] or
    /// [`ValidationError::InvalidYearFormat`] as reported by
    /// [`validation::validate`].
    pub fn to_record(&self) -> Result<VehicleRecord, ValidationError> {
        match validation::validate(self) {
            Validity::Valid => Ok(VehicleRecord {
                plate: self.plate.clone(),
                brand: self.brand.clone(),
                model: self.model.clone(),
                color: self.color.clone(),
                manufacture_year: self.manufacture_year.clone(),
                model_year: self.model_year.clone(),
                chassis: self.chassis.clone(),
            }),
            Validity::MissingFields => Err(ValidationError::MissingFields),
            Validity::InvalidYearFormat => Err(ValidationError::InvalidYearFormat),
        }
    }
}
