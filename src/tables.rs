//! Weight tables, in kg CO2e per answer token.
//!
//! The tables are the only source of scoring truth. Each carries the
//! default weight used for tokens it does not know.

/// Static mapping from an answer token to its weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable {
    /// Answer key the table reads.
    pub key: &'static str,
    pub entries: &'static [(&'static str, f64)],
    /// Weight for tokens not in `entries`.
    pub default: f64,
}

impl WeightTable {
    pub fn lookup(&self, token: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == token)
            .map(|&(_, weight)| weight)
    }

    /// Table weight of `token`, or the table default when it is unknown.
    pub fn weight(&self, token: &str) -> f64 {
        self.lookup(token).unwrap_or(self.default)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(token, _)| token)
    }
}

pub const TRANSPORTATION: WeightTable = WeightTable {
    key: "transportationType",
    entries: &[
        ("car-gasoline", 120.0),
        ("car-diesel", 110.0),
        ("car-electric", 40.0),
        ("public-transport", 30.0),
        ("bicycle", 5.0),
        ("walking", 0.0),
        ("motorcycle", 80.0),
    ],
    default: 60.0,
};

pub const TRANSPORTATION_FREQUENCY: WeightTable = WeightTable {
    key: "transportationFrequency",
    entries: &[
        ("daily", 1.0),
        ("weekly", 0.7),
        ("monthly", 0.3),
        ("rarely", 0.1),
        ("never", 0.0),
    ],
    default: 0.5,
};

pub const TRANSPORTATION_DISTANCE: WeightTable = WeightTable {
    key: "transportationDistance",
    entries: &[
        ("short", 0.5),
        ("medium", 1.0),
        ("long", 1.5),
        ("very-long", 2.0),
    ],
    default: 1.0,
};

pub const ENERGY: WeightTable = WeightTable {
    key: "electricityUnits",
    entries: &[
        ("very-low", 20.0),
        ("low", 40.0),
        ("medium", 80.0),
        ("high", 120.0),
        ("very-high", 160.0),
    ],
    default: 80.0,
};

/// Key of the yes/no renewable energy question.
pub const RENEWABLE_ENERGY_KEY: &str = "renewableEnergy";

/// Renewable energy removes 70% of the energy score.
pub const RENEWABLE_ENERGY_FACTOR: f64 = 0.3;

pub const WATER: WeightTable = WeightTable {
    key: "waterUsage",
    entries: &[
        ("very-low", 10.0),
        ("low", 20.0),
        ("medium", 40.0),
        ("high", 60.0),
        ("very-high", 80.0),
    ],
    default: 40.0,
};

pub const DIET: WeightTable = WeightTable {
    key: "dietType",
    entries: &[
        ("vegan", 20.0),
        ("vegetarian", 35.0),
        ("pescatarian", 50.0),
        ("omnivore", 80.0),
        ("high-meat", 120.0),
    ],
    default: 80.0,
};

pub const FOOD_WASTE: WeightTable = WeightTable {
    key: "foodWasteLevel",
    entries: &[
        ("none", 0.0),
        ("minimal", 10.0),
        ("some", 25.0),
        ("moderate", 40.0),
        ("high", 60.0),
    ],
    default: 25.0,
};

pub const SHOPPING: WeightTable = WeightTable {
    key: "clothesPerMonth",
    entries: &[
        ("0", 0.0),
        ("1-2", 15.0),
        ("3-5", 30.0),
        ("6-10", 50.0),
        ("10+", 80.0),
    ],
    default: 30.0,
};

pub const WASTE: WeightTable = WeightTable {
    key: "recyclingHabits",
    entries: &[
        ("always", 0.0),
        ("often", 10.0),
        ("sometimes", 25.0),
        ("rarely", 40.0),
        ("never", 60.0),
    ],
    default: 25.0,
};

pub const ELECTRONICS: WeightTable = WeightTable {
    key: "streamingHabits",
    entries: &[
        ("minimal", 5.0),
        ("moderate", 15.0),
        ("high", 30.0),
        ("very-high", 50.0),
    ],
    default: 15.0,
};

pub const TRAVEL: WeightTable = WeightTable {
    key: "airTravelFreq",
    entries: &[
        ("never", 0.0),
        ("rarely", 50.0),
        ("occasionally", 150.0),
        ("frequently", 300.0),
        ("very-frequently", 500.0),
    ],
    default: 50.0,
};

pub const APPLIANCES: WeightTable = WeightTable {
    key: "applianceUsage",
    entries: &[
        ("minimal", 20.0),
        ("moderate", 40.0),
        ("high", 60.0),
        ("very-high", 80.0),
    ],
    default: 40.0,
};

pub const HOME: WeightTable = WeightTable {
    key: "homeSize",
    entries: &[
        ("studio", 20.0),
        ("1-bedroom", 30.0),
        ("2-bedroom", 45.0),
        ("3-bedroom", 60.0),
        ("4+", 80.0),
    ],
    default: 45.0,
};

pub const HEATING: WeightTable = WeightTable {
    key: "heatingType",
    entries: &[
        ("electric", 80.0),
        ("gas", 60.0),
        ("oil", 70.0),
        ("wood", 40.0),
        ("solar", 20.0),
        ("heat-pump", 30.0),
    ],
    default: 60.0,
};

pub const DIGITAL_DEVICES: WeightTable = WeightTable {
    key: "digitalDevices",
    entries: &[
        ("1-2", 10.0),
        ("3-5", 25.0),
        ("6-10", 40.0),
        ("10+", 60.0),
    ],
    default: 25.0,
};

pub const PETS: WeightTable = WeightTable {
    key: "petOwnership",
    entries: &[
        ("none", 0.0),
        ("small", 15.0),
        ("medium", 25.0),
        ("large", 35.0),
        ("multiple", 50.0),
    ],
    default: 0.0,
};

/// Negative weights are carbon-negative practices.
pub const GARDEN: WeightTable = WeightTable {
    key: "gardenPractices",
    entries: &[
        ("none", 0.0),
        ("basic", 5.0),
        ("organic", -10.0),
        ("composting", -15.0),
        ("sustainable", -20.0),
    ],
    default: 0.0,
};
