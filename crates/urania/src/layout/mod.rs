pub mod rings;

pub use rings::{
    build_house_items, build_planet_items, build_static_zodiac_items, equal_house_cusps,
    get_house_index, HouseRingItem, PlanetRingItem, SignRingItem,
};
