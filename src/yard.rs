//! Static yard map with a pan/zoom viewport.
//!
//! The yard is a fixed 800×600 plan of zones, parking boxes and tracked
//! motorcycles. The [`Viewport`] maps plan coordinates to screen coordinates
//! as `screen = (plan - translate) * scale`.

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.2;

/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 3.0;

/// Multiplier applied by one zoom step.
pub const ZOOM_STEP: f64 = 1.2;

/// Screen distance moved by one pan step.
pub const PAN_STEP: f64 = 30.0;

/// Zoom factor of a fresh viewport.
pub const INITIAL_SCALE: f64 = 0.5;

/// Axis-aligned rectangle in plan coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }

    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: &'static str,
    pub name: &'static str,
    pub area: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParkingBox {
    pub id: &'static str,
    pub zone_id: &'static str,
    pub name: &'static str,
    pub area: Rect,
}

/// A tracked motorcycle marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Motorcycle {
    pub id: &'static str,
    pub plate: &'static str,
    pub x: f64,
    pub y: f64,
}

/// The yard plan.
#[derive(Debug, Clone, PartialEq)]
pub struct YardMap {
    pub bounds: Rect,
    pub zones: Vec<Zone>,
    pub boxes: Vec<ParkingBox>,
    pub motorcycles: Vec<Motorcycle>,
}

impl Default for YardMap {
    fn default() -> Self {
        Self::standard()
    }
}

impl YardMap {
    /// The yard layout shipped with the app.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, 800.0, 600.0),
            zones: vec![
                Zone { id: "Z1", name: "Zone A", area: Rect::new(50.0, 50.0, 300.0, 200.0) },
                Zone { id: "Z2", name: "Zone B", area: Rect::new(400.0, 80.0, 250.0, 300.0) },
                Zone {
                    id: "Z3",
                    name: "Zone C Receiving",
                    area: Rect::new(50.0, 300.0, 300.0, 250.0),
                },
            ],
            boxes: vec![
                ParkingBox {
                    id: "B1",
                    zone_id: "Z1",
                    name: "Box A1",
                    area: Rect::new(70.0, 70.0, 80.0, 50.0),
                },
                ParkingBox {
                    id: "B2",
                    zone_id: "Z1",
                    name: "Box A2",
                    area: Rect::new(170.0, 70.0, 80.0, 50.0),
                },
                ParkingBox {
                    id: "B3",
                    zone_id: "Z2",
                    name: "Box B1",
                    area: Rect::new(420.0, 100.0, 60.0, 120.0),
                },
                ParkingBox {
                    id: "B4",
                    zone_id: "Z3",
                    name: "Box C1 Loading",
                    area: Rect::new(70.0, 320.0, 100.0, 70.0),
                },
            ],
            motorcycles: vec![
                Motorcycle { id: "MOTO001", plate: "ABC1D23", x: 95.0, y: 95.0 },
                Motorcycle { id: "MOTO002", plate: "XYZ7F89", x: 450.0, y: 160.0 },
            ],
        }
    }

    /// Zone containing the given plan point, if any.
    #[must_use]
    pub fn zone_at(&self, x: f64, y: f64) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.area.contains(x, y))
    }
}

/// What a map element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Zone,
    Box,
    Motorcycle,
}

/// A map element that falls inside the viewport, in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleElement {
    pub kind: ElementKind,
    pub id: &'static str,
    pub label: &'static str,
    pub screen_x: f64,
    pub screen_y: f64,
    /// Motorcycles only: the plate is present in the registry.
    pub registered: bool,
    /// Motorcycles only: name of the zone the marker stands in.
    pub zone: Option<&'static str>,
}

impl YardMap {
    /// Elements intersecting the viewport, zones first, then boxes, then
    /// motorcycles.
    ///
    /// `is_registered` decides which motorcycle plates are marked.
    pub fn visible_elements<F>(&self, view: &Viewport, is_registered: F) -> Vec<VisibleElement>
    where
        F: Fn(&str) -> bool,
    {
        let area = view.visible_area();
        let mut elements = Vec::new();

        for zone in self.zones.iter().filter(|z| z.area.intersects(&area)) {
            let (screen_x, screen_y) = view.to_screen(zone.area.x, zone.area.y);
            elements.push(VisibleElement {
                kind: ElementKind::Zone,
                id: zone.id,
                label: zone.name,
                screen_x,
                screen_y,
                registered: false,
                zone: None,
            });
        }

        for parking in self.boxes.iter().filter(|b| b.area.intersects(&area)) {
            let (screen_x, screen_y) = view.to_screen(parking.area.x, parking.area.y);
            elements.push(VisibleElement {
                kind: ElementKind::Box,
                id: parking.id,
                label: parking.name,
                screen_x,
                screen_y,
                registered: false,
                zone: None,
            });
        }

        for moto in self.motorcycles.iter().filter(|m| area.contains(m.x, m.y)) {
            let (screen_x, screen_y) = view.to_screen(moto.x, moto.y);
            elements.push(VisibleElement {
                kind: ElementKind::Motorcycle,
                id: moto.id,
                label: moto.plate,
                screen_x,
                screen_y,
                registered: is_registered(moto.plate),
                zone: self.zone_at(moto.x, moto.y).map(|zone| zone.name),
            });
        }

        elements
    }
}

/// Pan/zoom state of the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Fresh viewport for a view of `width` × `height` screen units.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scale: INITIAL_SCALE,
            translate_x: width / 4.0,
            translate_y: height / 4.0,
            width,
            height,
        }
    }

    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * ZOOM_STEP).min(MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / ZOOM_STEP).max(MIN_SCALE);
    }

    /// Moves the view by a screen-space offset.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.translate_x += dx / self.scale;
        self.translate_y += dy / self.scale;
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.width, self.height);
    }

    /// Plan point to screen point.
    #[must_use]
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.translate_x) * self.scale,
            (y - self.translate_y) * self.scale,
        )
    }

    /// Plan region currently on screen.
    #[must_use]
    pub fn visible_area(&self) -> Rect {
        Rect::new(
            self.translate_x,
            self.translate_y,
            self.width / self.scale,
            self.height / self.scale,
        )
    }
}
