//! View models for the listing and map screens.
//!
//! Rendering never reads `AppState` directly for these screens: the state is
//! first reduced to plain display rows so components only format strings.

use crate::app::AppState;
use crate::domain::VehicleRecord;
use crate::registry::ListingStatus;
use crate::yard::{ElementKind, VisibleElement};

/// Header bar contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Message shown instead of an empty listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// One registry record formatted as a listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRow {
    /// `PLATE - MODEL`
    pub title: String,
    pub brand: String,
    pub color: String,
    /// `manufactureYear/modelYear`
    pub years: String,
    pub chassis: String,
}

impl From<&VehicleRecord> for VehicleRow {
    fn from(record: &VehicleRecord) -> Self {
        Self {
            title: format!("{} - {}", record.plate, record.model),
            brand: record.brand.clone(),
            color: record.color.clone(),
            years: format!("{}/{}", record.manufacture_year, record.model_year),
            chassis: record.chassis.clone(),
        }
    }
}

/// Everything the listing screen displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub header: HeaderInfo,
    /// Loading or error line above the entries.
    pub status: Option<String>,
    pub rows: Vec<VehicleRow>,
    pub empty_state: Option<EmptyState>,
}

/// One map element formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRow {
    pub kind: &'static str,
    pub id: &'static str,
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub registered: bool,
    pub zone: Option<&'static str>,
}

impl From<VisibleElement> for MapRow {
    fn from(element: VisibleElement) -> Self {
        let kind = match element.kind {
            ElementKind::Zone => "zone",
            ElementKind::Box => "box",
            ElementKind::Motorcycle => "moto",
        };
        Self {
            kind,
            id: element.id,
            label: element.label,
            x: element.screen_x,
            y: element.screen_y,
            registered: element.registered,
            zone: element.zone,
        }
    }
}

/// Everything the map screen displays.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub header: HeaderInfo,
    /// Zoom and offset summary.
    pub summary: String,
    pub rows: Vec<MapRow>,
    pub empty_state: Option<EmptyState>,
}

impl ListingView {
    #[must_use]
    pub fn compute(state: &AppState) -> Self {
        let listing = &state.listing;
        let rows: Vec<VehicleRow> = listing.visible().into_iter().map(VehicleRow::from).collect();

        let status = match listing.status() {
            ListingStatus::Loading => Some("Loading...".to_owned()),
            ListingStatus::LoadFailed(message) => {
                Some(format!("Could not load motorcycles: {message}"))
            }
            ListingStatus::Idle | ListingStatus::Loaded => None,
        };

        let empty_state = rows.is_empty().then(|| {
            if listing.vehicles().is_empty() {
                EmptyState {
                    message: "No motorcycles registered".to_owned(),
                    subtitle: "Use `radar-motu register` to add one".to_owned(),
                }
            } else {
                EmptyState {
                    message: format!("No motorcycles match \"{}\"", listing.filter()),
                    subtitle: format!("{} registered in total", listing.vehicles().len()),
                }
            }
        });

        Self {
            header: HeaderInfo {
                title: format!("{} ({})", crate::app::Screen::List.title(), rows.len()),
            },
            status,
            rows,
            empty_state,
        }
    }
}

impl MapView {
    #[must_use]
    pub fn compute(state: &AppState) -> Self {
        let view = &state.viewport;
        let rows: Vec<MapRow> = state
            .visible_map_elements()
            .into_iter()
            .map(MapRow::from)
            .collect();

        let empty_state = rows.is_empty().then(|| EmptyState {
            message: "Nothing in view".to_owned(),
            subtitle: "Pan or zoom out to find the yard".to_owned(),
        });

        Self {
            header: HeaderInfo {
                title: crate::app::Screen::Map.title().to_owned(),
            },
            summary: format!(
                "zoom {:.2}x  offset ({:.0}, {:.0})",
                view.scale, view.translate_x, view.translate_y
            ),
            rows,
            empty_state,
        }
    }
}
