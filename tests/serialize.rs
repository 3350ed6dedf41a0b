#![cfg(feature = "serde")]

use flatnum::{array, Array};

#[test]
fn serial_json() {
    let a = array![1., 2.5, -3.];
    let json = serde_json::to_string(&a).unwrap();
    assert_eq!(json, "[1.0,2.5,-3.0]");
    let b: Array = serde_json::from_str(&json).unwrap();
    assert_eq!(a, b);
}

#[test]
fn deserialize_empty() {
    let a: Array = serde_json::from_str("[]").unwrap();
    assert!(a.is_empty());
}

#[test]
fn deserialize_rejects_bad_input() {
    assert!(serde_json::from_str::<Array>("[[1.0]]").is_err());
    assert!(serde_json::from_str::<Array>("{\"data\": [1.0]}").is_err());
}
