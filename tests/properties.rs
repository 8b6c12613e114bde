//! Property tests for the position <-> beacon encoding.

use beacon_locate::{
    BeaconIdentity, IDENTIFIER_LENGTH, IDENTIFIER_PREFIX, Position, Quadrant, decode, encode,
    parse_identifier,
};
use proptest::prelude::*;

/// One step of the seconds channel in degrees, plus room for 8-place rounding.
const TOLERANCE: f64 = 0.01 / 3600.0 + 1e-8;

fn latitude() -> impl Strategy<Value = f64> {
    -90.0f64..=90.0
}

fn longitude() -> impl Strategy<Value = f64> {
    -180.0f64..=180.0
}

proptest! {
    #[test]
    fn round_trip_within_tolerance(lat in latitude(), lng in longitude(), story in 0i64..=3) {
        let beacon = encode(&Position::new(lat, lng).with_story(story))?;
        let back = decode(&beacon)?;

        prop_assert!((back.latitude - lat).abs() <= TOLERANCE, "lat {} -> {}", lat, back.latitude);
        prop_assert!((back.longitude - lng).abs() <= TOLERANCE, "lng {} -> {}", lng, back.longitude);
        prop_assert_eq!(back.story.value() as i64, story);
    }

    #[test]
    fn identifier_shape(lat in latitude(), lng in longitude()) {
        let beacon = encode(&Position::new(lat, lng))?;

        prop_assert_eq!(beacon.identifier.len(), IDENTIFIER_LENGTH);
        prop_assert!(beacon.identifier.starts_with(IDENTIFIER_PREFIX));
        prop_assert!(beacon.identifier[26..].bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }

    #[test]
    fn quadrant_matches_signs(lat in latitude(), lng in longitude()) {
        let beacon = encode(&Position::new(lat, lng))?;
        let fields = parse_identifier(&beacon.identifier)?;

        let expected = match (lat >= 0.0, lng >= 0.0) {
            (true, true) => Quadrant::NorthEast,
            (true, false) => Quadrant::NorthWest,
            (false, false) => Quadrant::SouthWest,
            (false, true) => Quadrant::SouthEast,
        };
        prop_assert_eq!(fields.quadrant, expected);
    }

    #[test]
    fn story_only_touches_low_bits(lat in latitude(), lng in longitude()) {
        let base = encode(&Position::new(lat, lng))?;
        for story in 0..=3i64 {
            let beacon = encode(&Position::new(lat, lng).with_story(story))?;
            prop_assert_eq!(&beacon.identifier, &base.identifier);
            prop_assert_eq!(beacon.major & !1, base.major);
            prop_assert_eq!(beacon.minor & !1, base.minor);
            prop_assert_eq!(decode(&beacon)?.story.value() as i64, story);
        }
    }

    #[test]
    fn story_clamping_is_idempotent(lat in latitude(), lng in longitude(), story in 3i64..1000) {
        let clamped = encode(&Position::new(lat, lng).with_story(story))?;
        let three = encode(&Position::new(lat, lng).with_story(3))?;
        prop_assert_eq!(clamped, three);
    }

    #[test]
    fn decode_never_panics(identifier in "[0-9A-Fa-f:-]{0,40}", major: u16, minor: u16) {
        let _ = decode(&BeaconIdentity::new(identifier, major, minor));
    }

    #[test]
    fn decoded_positions_stay_in_range(
        quadrant in 1u8..=4,
        lat_degrees in 0u8..=90,
        lat_box in 0u8..12,
        lng_degrees in 0u8..=180,
        lng_box in 0u8..12,
        major: u16,
        minor: u16,
    ) {
        let identifier = format!(
            "{IDENTIFIER_PREFIX}0{quadrant}{lat_degrees:02X}{:02X}{lng_degrees:02X}{:02X}",
            lat_box * 5,
            lng_box * 5,
        );
        if let Ok(position) = decode(&BeaconIdentity::new(identifier, major, minor)) {
            prop_assert!(position.validate().is_ok(), "{:?}", position);
        }
    }

    #[test]
    fn out_of_range_latitude_rejected(lat in 90.0001f64..1000.0, lng in longitude()) {
        prop_assert!(encode(&Position::new(lat, lng)).is_err());
        prop_assert!(encode(&Position::new(-lat, lng)).is_err());
    }
}

#[test]
fn concrete_scenario_51_n_1_w() -> Result<(), beacon_locate::BeaconLocateError> {
    let beacon = encode(&Position::new(51.0, -1.0))?;

    assert_eq!(&beacon.identifier[26..28], "02");
    assert_eq!(&beacon.identifier[28..30], "33");
    assert_eq!(&beacon.identifier[30..32], "00");
    assert_eq!(&beacon.identifier[32..34], "01");
    assert_eq!(&beacon.identifier[34..36], "00");
    assert_eq!(beacon.major % 2, 0);
    assert_eq!(beacon.minor % 2, 0);

    let position = decode(&beacon)?;
    assert!((position.latitude - 51.0).abs() < 1e-6);
    assert!((position.longitude - (-1.0)).abs() < 1e-6);
    assert_eq!(position.story.value(), 0);
    Ok(())
}
