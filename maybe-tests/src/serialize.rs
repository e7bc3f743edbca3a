//! `Maybe` serializes as an option of its pointee.
#[cfg(test)]
use crate::fixtures::{arb_source, Point};
#[cfg(test)]
use maybe::{Maybe, RawPointer};
#[cfg(test)]
use proptest::proptest;

#[test]
fn present_serializes_as_the_pointee() {
    let m = Maybe::new(Box::new(Point { x: 1, y: -2 }));
    assert_eq!(serde_json::to_string(&m).unwrap(), r#"{"x":1,"y":-2}"#);
}

#[test]
fn absent_serializes_as_null() {
    let m = Maybe::new(RawPointer::<Point>::null());
    assert_eq!(serde_json::to_string(&m).unwrap(), "null");
}

#[cfg(test)]
proptest! {
    #[test]
    fn matches_option_encoding(source in arb_source()) {
        source.with_maybe(|m| {
            let via_maybe = serde_json::to_value(&m).unwrap();
            let via_option = serde_json::to_value(source.expected()).unwrap();
            assert_eq!(via_maybe, via_option);
        });
    }
}
