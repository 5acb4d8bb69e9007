//! Seed data
//!
//! The demo catalog and booking book, built relative to the startup
//! instant so date buckets and deal windows behave sensibly out of the
//! box. This is the only data source in the system.

use shared::models::{Booking, BookingStatus, Deal, DealType, ItineraryStep, Tour, Waypoint};
use shared::money::{Currency, Money};

const HOUR: i64 = 3_600_000;
const DAY: i64 = 24 * HOUR;

fn rm(major: i64) -> Money {
    Money::from_major(major, Currency::Myr)
}

pub fn seed_tours() -> Vec<Tour> {
    vec![
        Tour {
            id: "t-langkawi".into(),
            title: "Langkawi Island Hopper".into(),
            location: "Langkawi, Kedah".into(),
            duration: "3D2N".into(),
            price: rm(890),
            gallery: Some(vec![
                "/media/tours/langkawi-01.jpg".into(),
                "/media/tours/langkawi-02.jpg".into(),
            ]),
            waypoints: Some(vec![
                Waypoint {
                    name: "Pantai Cenang".into(),
                    lat: 6.2919,
                    lng: 99.7281,
                },
                Waypoint {
                    name: "Pulau Dayang Bunting".into(),
                    lat: 6.1897,
                    lng: 99.7870,
                },
                Waypoint {
                    name: "Kilim Geoforest Park".into(),
                    lat: 6.4108,
                    lng: 99.8581,
                },
            ]),
            tags: vec!["island".into(), "beach".into(), "family".into()],
        },
        Tour {
            id: "t-penang".into(),
            title: "Penang Heritage Trail".into(),
            location: "George Town, Penang".into(),
            duration: "2D1N".into(),
            price: rm(350),
            gallery: Some(vec!["/media/tours/penang-01.jpg".into()]),
            waypoints: None,
            tags: vec!["heritage".into(), "food".into(), "city".into()],
        },
        Tour {
            id: "t-cameron".into(),
            title: "Cameron Highlands Tea & Trails".into(),
            location: "Cameron Highlands, Pahang".into(),
            duration: "3D2N".into(),
            price: rm(520),
            gallery: None,
            waypoints: Some(vec![
                Waypoint {
                    name: "BOH Tea Estate".into(),
                    lat: 4.5252,
                    lng: 101.4204,
                },
                Waypoint {
                    name: "Mossy Forest".into(),
                    lat: 4.5146,
                    lng: 101.3831,
                },
            ]),
            tags: vec!["highland".into(), "nature".into(), "family".into()],
        },
        Tour {
            id: "t-kinabalu".into(),
            title: "Mount Kinabalu Summit Climb".into(),
            location: "Kundasang, Sabah".into(),
            duration: "4D3N".into(),
            price: rm(2150),
            gallery: Some(vec![
                "/media/tours/kinabalu-01.jpg".into(),
                "/media/tours/kinabalu-02.jpg".into(),
                "/media/tours/kinabalu-03.jpg".into(),
            ]),
            waypoints: None,
            tags: vec!["adventure".into(), "nature".into()],
        },
        Tour {
            id: "t-malacca".into(),
            title: "Malacca River & Straits Weekend".into(),
            location: "Malacca City, Melaka".into(),
            duration: "2D1N".into(),
            price: rm(280),
            gallery: None,
            waypoints: None,
            tags: vec!["heritage".into(), "city".into(), "food".into()],
        },
        Tour {
            id: "t-redang".into(),
            title: "Redang Dive Discovery".into(),
            location: "Pulau Redang, Terengganu".into(),
            duration: "4D3N".into(),
            price: rm(1450),
            gallery: Some(vec!["/media/tours/redang-01.jpg".into()]),
            waypoints: None,
            tags: vec!["island".into(), "diving".into(), "beach".into()],
        },
    ]
}

pub fn seed_deals(now: i64) -> Vec<Deal> {
    vec![
        Deal {
            id: "d-monsoon-escape".into(),
            title: "Monsoon Escape to Langkawi".into(),
            location: "Langkawi, Kedah".into(),
            deal_type: DealType::Beach,
            duration: "3D2N".into(),
            original_price: rm(1299),
            sale_price: rm(899),
            starts_at: None,
            ends_at: None,
            promo_code: Some("MONSOON30".into()),
            remaining_quota: Some(40),
            description: Some(
                "Off-season rates at Pantai Cenang with daily island transfers included.".into(),
            ),
            inclusions: Some(vec![
                "2 nights beachfront stay".into(),
                "Daily breakfast".into(),
                "Island-hopping boat pass".into(),
            ]),
            exclusions: Some(vec!["Flights".into(), "Travel insurance".into()]),
            itinerary: Some(vec![
                ItineraryStep {
                    day: 1,
                    title: "Arrival & sunset at Cenang".into(),
                    detail: None,
                },
                ItineraryStep {
                    day: 2,
                    title: "Island hopping".into(),
                    detail: Some("Dayang Bunting, Beras Basah, eagle watching".into()),
                },
                ItineraryStep {
                    day: 3,
                    title: "Free morning & departure".into(),
                    detail: None,
                },
            ]),
            terms: Some(vec![
                "Non-refundable once travel dates are confirmed".into(),
                "Subject to weather advisories".into(),
            ]),
            gallery: Some(vec!["/media/deals/monsoon-01.jpg".into()]),
        },
        Deal {
            id: "d-merdeka-island-hop".into(),
            title: "Merdeka Island Hop Flash Sale".into(),
            location: "Pulau Redang, Terengganu".into(),
            deal_type: DealType::Island,
            duration: "4D3N".into(),
            original_price: rm(1450),
            sale_price: rm(999),
            starts_at: Some(now - 10 * DAY),
            ends_at: Some(now + 24 * HOUR),
            promo_code: Some("MERDEKA24".into()),
            remaining_quota: Some(12),
            description: Some("Final rooms for the national day weekend crossing.".into()),
            inclusions: Some(vec![
                "Return jetty transfers".into(),
                "Full-board meals".into(),
                "2 guided snorkel trips".into(),
            ]),
            exclusions: None,
            itinerary: None,
            terms: None,
            gallery: None,
        },
        Deal {
            id: "d-yearend-highlands".into(),
            title: "Year-End Highlands Retreat".into(),
            location: "Cameron Highlands, Pahang".into(),
            deal_type: DealType::Highland,
            duration: "3D2N".into(),
            original_price: rm(620),
            sale_price: rm(468),
            starts_at: Some(now + 30 * DAY),
            ends_at: Some(now + 75 * DAY),
            promo_code: None,
            remaining_quota: Some(60),
            description: Some("Cool-season rates open for booking next month.".into()),
            inclusions: None,
            exclusions: None,
            itinerary: None,
            terms: None,
            gallery: None,
        },
        Deal {
            id: "d-heritage-weekend".into(),
            title: "George Town Heritage Weekend".into(),
            location: "George Town, Penang".into(),
            deal_type: DealType::Heritage,
            duration: "2D1N".into(),
            original_price: rm(420),
            sale_price: rm(299),
            starts_at: Some(now - 40 * DAY),
            ends_at: Some(now - 5 * DAY),
            promo_code: Some("GTWALK".into()),
            remaining_quota: Some(0),
            description: Some("Festival-week walking tours with museum passes.".into()),
            inclusions: None,
            exclusions: None,
            itinerary: None,
            terms: None,
            gallery: None,
        },
        Deal {
            id: "d-city-lights".into(),
            title: "KL City Lights Stopover".into(),
            location: "Kuala Lumpur".into(),
            deal_type: DealType::City,
            duration: "2D1N".into(),
            original_price: rm(380),
            sale_price: rm(380),
            starts_at: Some(now - DAY),
            ends_at: Some(now + 60 * DAY),
            promo_code: None,
            remaining_quota: Some(25),
            description: Some("Standard stopover package, list rates.".into()),
            inclusions: None,
            exclusions: None,
            itinerary: None,
            terms: None,
            gallery: None,
        },
    ]
}

pub fn seed_bookings(now: i64) -> Vec<Booking> {
    let mk = |id: &str,
              scheduled_at: i64,
              customer_name: &str,
              email: &str,
              phone: &str,
              tour_id: &str,
              party_size: u32,
              amount: Money,
              status: BookingStatus,
              notes: Option<&str>,
              created_at: i64| Booking {
        id: id.into(),
        scheduled_at,
        customer_name: customer_name.into(),
        email: email.into(),
        phone: phone.into(),
        tour_id: tour_id.into(),
        party_size,
        amount,
        status,
        notes: notes.map(Into::into),
        created_at,
        updated_at: created_at,
    };

    vec![
        mk(
            "BK-2301",
            now - 2 * HOUR,
            "Nurul Izzah",
            "nurul.izzah@example.com",
            "+60-12-330 1188",
            "t-penang",
            2,
            rm(700),
            BookingStatus::Confirmed,
            Some("Vegetarian meals, late check-out requested"),
            now - 9 * DAY,
        ),
        mk(
            "BK-2302",
            now - 5 * HOUR,
            "Daniel Wong",
            "daniel.wong@example.com",
            "+60-16-778 4521",
            "t-langkawi",
            4,
            rm(3560),
            BookingStatus::Pending,
            None,
            now - 2 * DAY,
        ),
        mk(
            "BK-2303",
            now - 3 * DAY,
            "Priya Raman",
            "priya.raman@example.com",
            "+60-13-204 9911",
            "t-cameron",
            3,
            rm(1560),
            BookingStatus::Confirmed,
            None,
            now - 12 * DAY,
        ),
        mk(
            "BK-2304",
            now - 5 * DAY,
            "Marcus Tan",
            "marcus.tan@example.com",
            "+65-9123-4567",
            "t-kinabalu",
            2,
            rm(4300),
            BookingStatus::Refunded,
            Some("Summit closed for weather, full refund issued"),
            now - 30 * DAY,
        ),
        mk(
            "BK-2305",
            now - 6 * DAY,
            "Aisyah Rahman",
            "aisyah.r@example.com",
            "+60-19-887 2233",
            "t-malacca",
            5,
            rm(1400),
            BookingStatus::Confirmed,
            None,
            now - 8 * DAY,
        ),
        mk(
            "BK-2306",
            now - 14 * DAY,
            "Chen Wei Ling",
            "weiling.chen@example.com",
            "+60-12-456 7890",
            "t-redang",
            2,
            rm(2900),
            BookingStatus::Cancelled,
            Some("Cancelled within free-cancellation window"),
            now - 25 * DAY,
        ),
        mk(
            "BK-2307",
            now - 21 * DAY,
            "Harpreet Singh",
            "harpreet.singh@example.com",
            "+60-17-220 3344",
            "t-penang",
            6,
            rm(2100),
            BookingStatus::Confirmed,
            None,
            now - 28 * DAY,
        ),
        mk(
            "BK-2308",
            now - 29 * DAY,
            "Siti Hajar",
            "siti.hajar@example.com",
            "+60-11-5566 7788",
            "t-langkawi",
            2,
            rm(1780),
            BookingStatus::Refunded,
            None,
            now - 40 * DAY,
        ),
        mk(
            "BK-2309",
            now - 45 * DAY,
            "James O'Connor",
            "james.oconnor@example.com",
            "+44-7700-900123",
            "t-kinabalu",
            1,
            rm(2150),
            BookingStatus::Confirmed,
            Some("Solo climber, gear rental arranged"),
            now - 60 * DAY,
        ),
        mk(
            "BK-2310",
            now + 5 * DAY,
            "Farah Aziz",
            "farah.aziz@example.com",
            "+60-14-909 1212",
            "t-redang",
            4,
            rm(5800),
            BookingStatus::Pending,
            Some("Awaiting deposit, hold until Friday"),
            now - DAY,
        ),
        mk(
            "BK-2311",
            now + 12 * DAY,
            "Kevin Lim",
            "kevin.lim@example.com",
            "+60-18-345 6677",
            "t-cameron",
            2,
            rm(1040),
            BookingStatus::Pending,
            None,
            now - 6 * HOUR,
        ),
        mk(
            "BK-2312",
            now + 20 * DAY,
            "Meera Pillai",
            "meera.pillai@example.com",
            "+60-12-778 9900",
            "t-malacca",
            3,
            rm(840),
            BookingStatus::Confirmed,
            None,
            now - 3 * DAY,
        ),
    ]
}
