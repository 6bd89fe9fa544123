//! Serde round trips for the value types (only built with the `serde`
//! feature enabled).

#![cfg(feature = "serde")]

use chess_rules::{CastlingRights, Color, Coord, Move, Piece};

#[test]
fn move_round_trips_through_json() {
    let mv = Move::promoting(
        Coord::new(0, 6).unwrap(),
        Coord::new(1, 7).unwrap(),
        Piece::Knight,
    );
    let json = serde_json::to_string(&mv).unwrap();
    let back: Move = serde_json::from_str(&json).unwrap();
    assert_eq!(mv, back);
}

#[test]
fn value_types_round_trip_through_json() {
    let coord = Coord::new(4, 3).unwrap();
    let json = serde_json::to_string(&coord).unwrap();
    assert_eq!(coord, serde_json::from_str::<Coord>(&json).unwrap());

    let color = Color::Black;
    let json = serde_json::to_string(&color).unwrap();
    assert_eq!(color, serde_json::from_str::<Color>(&json).unwrap());

    let rights = CastlingRights::all();
    let json = serde_json::to_string(&rights).unwrap();
    assert_eq!(
        rights,
        serde_json::from_str::<CastlingRights>(&json).unwrap()
    );
}
