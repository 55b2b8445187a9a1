#![cfg(feature = "serde")]

use maybe::{nothing, of, Just, Maybe, Nothing, Nullable};
use serde::Deserialize;

#[derive(Deserialize)]
struct Profile {
    #[serde(default)]
    nickname: Nullable<String>,
    age: Maybe<u32>,
}

#[test]
fn maybe_serializes_like_option() {
    assert_eq!(serde_json::to_string(&of(3)).unwrap(), "3");
    assert_eq!(serde_json::to_string(&nothing::<u32>()).unwrap(), "null");

    let back: Maybe<u32> = serde_json::from_str("7").unwrap();
    assert_eq!(back, Just(7));
    let back: Maybe<u32> = serde_json::from_str("null").unwrap();
    assert_eq!(back, Nothing);
}

#[test]
fn nullable_tells_missing_from_null() {
    let missing: Profile = serde_json::from_str(r#"{"age": 30}"#).unwrap();
    assert_eq!(missing.nickname, Nullable::Undefined);
    assert_eq!(missing.age, Just(30));

    let null: Profile = serde_json::from_str(r#"{"nickname": null, "age": null}"#).unwrap();
    assert_eq!(null.nickname, Nullable::Null);
    assert_eq!(null.age, Nothing);

    let set: Profile = serde_json::from_str(r#"{"nickname": "al", "age": 1}"#).unwrap();
    assert_eq!(maybe::from_nullable(set.nickname), Just("al".to_string()));
}
