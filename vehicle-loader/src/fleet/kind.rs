//! Vehicle kind discriminator.

use std::fmt;

/// The closed set of vehicle kinds we know how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// A bicycle. Carries its driver only.
    Bike,
    /// A two-seater bicycle. Carries one passenger.
    Tandem,
    /// A four-seat pedal car ("rosalie"). Carries three passengers.
    QuadCycle,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [
        VehicleKind::Bike,
        VehicleKind::Tandem,
        VehicleKind::QuadCycle,
    ];

    /// Look up a kind by its wire tag (`velo`, `tandem`, `rosalie`).
    ///
    /// Tags are case-sensitive. Returns `None` for anything else.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "velo" => Some(VehicleKind::Bike),
            "tandem" => Some(VehicleKind::Tandem),
            "rosalie" => Some(VehicleKind::QuadCycle),
            _ => None,
        }
    }

    /// The wire tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            VehicleKind::Bike => "velo",
            VehicleKind::Tandem => "tandem",
            VehicleKind::QuadCycle => "rosalie",
        }
    }

    /// Display name used when rendering a vehicle.
    pub fn name(self) -> &'static str {
        match self {
            VehicleKind::Bike => "Bike",
            VehicleKind::Tandem => "Tandem",
            VehicleKind::QuadCycle => "QuadCycle",
        }
    }

    pub const fn max_passengers(self) -> usize {
        match self {
            VehicleKind::Bike => 0,
            VehicleKind::Tandem => 1,
            VehicleKind::QuadCycle => 3,
        }
    }

    pub const fn carries_passengers(self) -> bool {
        self.max_passengers() > 0
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
