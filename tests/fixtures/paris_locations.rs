//! Real Paris-area locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Sightseeing stops cluster within
//! a few kilometers of each other; the intercity set spans several hundred.

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Paris sights (good for a single walkable/drivable day)
// ============================================================================

pub const LOUVRE: Location = Location::new("Musée du Louvre", 48.8606, 2.3376);
pub const EIFFEL_TOWER: Location = Location::new("Tour Eiffel", 48.8584, 2.2945);
pub const NOTRE_DAME: Location = Location::new("Notre-Dame de Paris", 48.8530, 2.3499);
pub const SACRE_COEUR: Location = Location::new("Sacré-Cœur", 48.8867, 2.3431);
pub const ARC_DE_TRIOMPHE: Location = Location::new("Arc de Triomphe", 48.8738, 2.2950);
pub const MUSEE_ORSAY: Location = Location::new("Musée d'Orsay", 48.8600, 2.3266);
pub const LUXEMBOURG_GARDENS: Location = Location::new("Jardin du Luxembourg", 48.8462, 2.3372);
pub const PANTHEON: Location = Location::new("Panthéon", 48.8462, 2.3464);
pub const VERSAILLES: Location = Location::new("Château de Versailles", 48.8049, 2.1204);

pub const PARIS_SIGHTS: &[Location] = &[
    LOUVRE,
    EIFFEL_TOWER,
    NOTRE_DAME,
    SACRE_COEUR,
    ARC_DE_TRIOMPHE,
    MUSEE_ORSAY,
    LUXEMBOURG_GARDENS,
    PANTHEON,
];

// ============================================================================
// French cities (for intercity days that blow the transit budget)
// ============================================================================

pub const PARIS: Location = Location::new("Paris", 48.8566, 2.3522);
pub const LYON: Location = Location::new("Lyon", 45.7640, 4.8357);
pub const MARSEILLE: Location = Location::new("Marseille", 43.2965, 5.3698);
pub const NICE: Location = Location::new("Nice", 43.7102, 7.2620);

pub const FRENCH_CITIES: &[Location] = &[PARIS, LYON, MARSEILLE, NICE];
