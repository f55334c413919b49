//! # Corridor Reference Routes
//!
//! The three reference corridors out of Tashkent, with their border
//! crossings and toll roads. Crossings and tolls are attached to every
//! route whose country list covers them.

use uztruck_core::{CountryCode, CurrencyCode, Money, RouteId};

use crate::route::{
    BorderCrossing, Coordinates, EurasianRoute, RouteDifficulty, TollInfo,
};

fn cc(code: &str) -> CountryCode {
    CountryCode::new(code).expect("BUG: hardcoded country code rejected")
}

fn money(amount: u64, code: &str) -> Money {
    Money::new(
        amount,
        CurrencyCode::new(code).expect("BUG: hardcoded currency code rejected"),
    )
}

fn alat_konayev() -> BorderCrossing {
    BorderCrossing {
        name: "Alat - Konayev".to_string(),
        from_country: cc("UZ"),
        to_country: cc("KZ"),
        working_hours: "24/7".to_string(),
        average_wait_hours: 4,
        coordinates: Coordinates { lat: 42.1234, lon: 69.5678 },
    }
}

fn troitsk() -> BorderCrossing {
    BorderCrossing {
        name: "Troitsk".to_string(),
        from_country: cc("KZ"),
        to_country: cc("RU"),
        working_hours: "24/7".to_string(),
        average_wait_hours: 8,
        coordinates: Coordinates { lat: 54.0833, lon: 61.5667 },
    }
}

fn m4_don() -> TollInfo {
    TollInfo {
        road: "M4 Don (Moskva - Rostov-na-Donu)".to_string(),
        country: cc("RU"),
        cost: money(1500, "RUB"),
        payment_methods: vec![
            "cash".to_string(),
            "card".to_string(),
            "transponder".to_string(),
        ],
    }
}

fn a1_amber() -> TollInfo {
    TollInfo {
        road: "A1 (Gdansk - Lodz)".to_string(),
        country: cc("PL"),
        cost: money(45, "PLN"),
        payment_methods: vec![
            "cash".to_string(),
            "card".to_string(),
            "viabox".to_string(),
        ],
    }
}

/// The three seeded corridor routes, ordered by slug.
pub fn eurasian_routes() -> Vec<EurasianRoute> {
    vec![
        EurasianRoute {
            id: RouteId::new("route_1").expect("BUG: hardcoded route id rejected"),
            name: "Toshkent - Moskva".to_string(),
            origin: "Toshkent".to_string(),
            destination: "Moskva".to_string(),
            countries: vec![cc("UZ"), cc("KZ"), cc("RU")],
            distance_km: 2847,
            estimated_duration_hours: 35,
            difficulty: RouteDifficulty::Medium,
            popularity: 95,
            seasonal: false,
            restrictions: vec!["winter_equipment".to_string()],
            border_crossings: vec![alat_konayev(), troitsk()],
            tolls: vec![m4_don()],
        },
        EurasianRoute {
            id: RouteId::new("route_2").expect("BUG: hardcoded route id rejected"),
            name: "Toshkent - Berlin".to_string(),
            origin: "Toshkent".to_string(),
            destination: "Berlin".to_string(),
            countries: vec![cc("UZ"), cc("KZ"), cc("RU"), cc("BY"), cc("PL"), cc("DE")],
            distance_km: 4521,
            estimated_duration_hours: 48,
            difficulty: RouteDifficulty::Hard,
            popularity: 75,
            seasonal: true,
            restrictions: vec![
                "euro_standards".to_string(),
                "winter_equipment".to_string(),
                "toll_payments".to_string(),
            ],
            border_crossings: vec![alat_konayev(), troitsk()],
            tolls: vec![m4_don(), a1_amber()],
        },
        EurasianRoute {
            id: RouteId::new("route_3").expect("BUG: hardcoded route id rejected"),
            name: "Toshkent - Varshava".to_string(),
            origin: "Toshkent".to_string(),
            destination: "Varshava".to_string(),
            countries: vec![cc("UZ"), cc("KZ"), cc("RU"), cc("BY"), cc("PL")],
            distance_km: 4102,
            estimated_duration_hours: 45,
            difficulty: RouteDifficulty::Medium,
            popularity: 80,
            seasonal: false,
            restrictions: vec!["euro_standards".to_string(), "toll_payments".to_string()],
            border_crossings: vec![alat_konayev(), troitsk()],
            tolls: vec![m4_don(), a1_amber()],
        },
    ]
}
