//! Step-by-step construction of a [`Vehicle`] with [`VehicleBuilder`].
//!
//! ```rust
//! use cookbook::vehicle::{Terrain, VehicleBuilder};
//!
//! let car = VehicleBuilder::new()
//!     .wheels(4)
//!     .engine("electric")
//!     .doors(4)
//!     .drives_on(Terrain::Land)
//!     .build()
//!     .unwrap();
//! assert_eq!(car.engine(), Some("electric"));
//! ```

use crate::{Error, Result};
use serde::Serialize;

/// Where a vehicle travels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumIs,
)]
#[strum(ascii_case_insensitive)]
pub enum Terrain {
    Land,
    Water,
    Air,
}

impl Terrain {
    /// Parses a terrain name such as `"land"` or `"Air"`.
    pub fn parse(name: &str) -> Result<Self> {
        Ok(name.parse::<Terrain>()?)
    }
}

/// An immutable vehicle description. Fields that were never set are zero or `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vehicle {
    wheels: u32,
    engine: Option<String>,
    doors: u32,
    terrain: Option<Terrain>,
}

impl Vehicle {
    pub fn wheels(&self) -> u32 {
        self.wheels
    }

    pub fn engine(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    pub fn doors(&self) -> u32 {
        self.doors
    }

    pub fn terrain(&self) -> Option<Terrain> {
        self.terrain
    }
}

/// Builder for [`Vehicle`].
#[derive(Debug, Default, Clone)]
pub struct VehicleBuilder {
    wheels: u32,
    engine: Option<String>,
    doors: u32,
    terrain: Option<Terrain>,
}

impl VehicleBuilder {
    /// Creates a builder with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wheels(mut self, wheels: u32) -> Self {
        self.wheels = wheels;
        self
    }

    pub fn engine<S: Into<String>>(mut self, engine: S) -> Self {
        self.engine = Some(engine.into());
        self
    }

    pub fn doors(mut self, doors: u32) -> Self {
        self.doors = doors;
        self
    }

    pub fn drives_on(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    /// Finishes the vehicle.
    ///
    /// Unset fields are accepted as they are, with one exception: a vehicle
    /// that drives on [`Terrain::Land`] must have at least one wheel, so a bare
    /// `VehicleBuilder::new().drives_on(Terrain::Land).build()` fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVehicle`] for a land vehicle without wheels.
    pub fn build(self) -> Result<Vehicle> {
        if self.terrain.is_some_and(|t| t.is_land()) && self.wheels == 0 {
            return Err(Error::InvalidVehicle(
                "a land vehicle needs at least one wheel".into(),
            ));
        }
        Ok(Vehicle {
            wheels: self.wheels,
            engine: self.engine,
            doors: self.doors,
            terrain: self.terrain,
        })
    }
}
