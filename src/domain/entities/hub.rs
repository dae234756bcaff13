//! Village hubs and the electric carts parked at them

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CartStatus {
    Available,
    Charging,
    InUse,
    Maintenance,
}

impl CartStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CartStatus::Available => "Available",
            CartStatus::Charging => "Charging",
            CartStatus::InUse => "In Use",
            CartStatus::Maintenance => "Maintenance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CartKind {
    Passenger,
    Goods,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SolarStatus {
    Active,
    Low,
    Offline,
}

impl SolarStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SolarStatus::Active => "Solar Active",
            SolarStatus::Low => "Solar Low",
            SolarStatus::Offline => "Offline",
        }
    }
}

/// Shared electric vehicle
#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    pub id: &'static str,
    pub status: CartStatus,
    pub battery_level: u8,
    pub capacity: u8,
    pub current_passengers: u8,
    /// Minutes until an in-use cart is back at its hub
    pub estimated_return: Option<u16>,
    pub kind: CartKind,
}

impl Cart {
    pub fn is_available(&self) -> bool {
        self.status == CartStatus::Available
    }

    pub fn free_seats(&self) -> u8 {
        self.capacity.saturating_sub(self.current_passengers)
    }
}

/// Map position in percent of the map width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

/// Named pickup/drop-off location with its carts
#[derive(Debug, Clone, Serialize)]
pub struct Hub {
    pub id: &'static str,
    pub name: &'static str,
    pub position: Position,
    pub carts: &'static [Cart],
    pub solar_status: SolarStatus,
}

impl Hub {
    pub fn available_carts(&self) -> usize {
        self.carts.iter().filter(|c| c.is_available()).count()
    }
}

const fn cart(
    id: &'static str,
    status: CartStatus,
    battery_level: u8,
    capacity: u8,
    current_passengers: u8,
    estimated_return: Option<u16>,
    kind: CartKind,
) -> Cart {
    Cart {
        id,
        status,
        battery_level,
        capacity,
        current_passengers,
        estimated_return,
        kind,
    }
}

use CartKind::{Goods, Mixed, Passenger};
use CartStatus::{Available, Charging, InUse, Maintenance};

pub static VILLAGE_HUBS: &[Hub] = &[
    Hub {
        id: "dhaka",
        name: "Dhaka Central",
        position: Position { x: 45, y: 30 },
        carts: &[
            cart("cart-1", Available, 85, 6, 0, None, Passenger),
            cart("cart-2", InUse, 60, 6, 4, Some(25), Passenger),
            cart("cart-3", Charging, 45, 8, 0, None, Mixed),
        ],
        solar_status: SolarStatus::Active,
    },
    Hub {
        id: "chittagong",
        name: "Chittagong Port",
        position: Position { x: 75, y: 55 },
        carts: &[
            cart("cart-4", Available, 92, 4, 0, None, Goods),
            cart("cart-5", Available, 78, 6, 0, None, Passenger),
        ],
        solar_status: SolarStatus::Active,
    },
    Hub {
        id: "sylhet",
        name: "Sylhet Tea Hub",
        position: Position { x: 65, y: 25 },
        carts: &[
            cart("cart-6", InUse, 40, 8, 6, Some(45), Mixed),
            cart("cart-7", Maintenance, 0, 6, 0, None, Passenger),
        ],
        solar_status: SolarStatus::Low,
    },
    Hub {
        id: "rajshahi",
        name: "Rajshahi Silk",
        position: Position { x: 25, y: 40 },
        carts: &[
            cart("cart-8", Available, 88, 6, 0, None, Passenger),
            cart("cart-9", Charging, 65, 4, 0, None, Goods),
        ],
        solar_status: SolarStatus::Active,
    },
    Hub {
        id: "khulna",
        name: "Khulna Shrimp",
        position: Position { x: 35, y: 65 },
        carts: &[cart("cart-10", Available, 95, 8, 0, None, Mixed)],
        solar_status: SolarStatus::Active,
    },
];

/// Read-only view over the hub network
pub struct HubMap {
    hubs: &'static [Hub],
}

impl HubMap {
    pub fn new() -> Self {
        Self { hubs: VILLAGE_HUBS }
    }

    pub fn hubs(&self) -> &'static [Hub] {
        self.hubs
    }

    pub fn get(&self, id: &str) -> Option<&'static Hub> {
        self.hubs.iter().find(|h| h.id.eq_ignore_ascii_case(id))
    }

    pub fn total_carts(&self) -> usize {
        self.hubs.iter().map(|h| h.carts.len()).sum()
    }

    pub fn available_carts(&self) -> usize {
        self.carts_with_status(CartStatus::Available)
    }

    /// Carts in `status` across every hub
    pub fn carts_with_status(&self, status: CartStatus) -> usize {
        self.hubs
            .iter()
            .flat_map(|h| h.carts)
            .filter(|c| c.status == status)
            .count()
    }

    pub fn solar_active_hubs(&self) -> usize {
        self.hubs
            .iter()
            .filter(|h| h.solar_status == SolarStatus::Active)
            .count()
    }
}

impl Default for HubMap {
    fn default() -> Self {
        Self::new()
    }
}
