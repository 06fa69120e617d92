//! Property access on primitive values

use super::{call_method, create_test_realm, define_accessor, this_getter};
use protochain::{JsValue, PartialDescriptor, PropertyKey};

// ═══════════════════════════════════════════════════════════════════════════════
// Reads
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_string_length_and_indices() {
    let mut realm = create_test_realm();
    let s = JsValue::from("abc");
    let length = realm.key("length");

    assert_eq!(realm.get_value(&s, &length).unwrap(), JsValue::from(3));
    assert_eq!(
        realm.get_value(&s, &PropertyKey::Index(1)).unwrap(),
        JsValue::from("b")
    );
    assert_eq!(
        realm.get_value(&s, &PropertyKey::Index(3)).unwrap(),
        JsValue::Undefined
    );
}

#[test]
fn test_primitive_methods_come_from_intrinsic_prototypes() {
    let mut realm = create_test_realm();

    assert_eq!(
        call_method(&mut realm, &JsValue::from(true), "toString", &[]).unwrap(),
        JsValue::from("true")
    );
    assert_eq!(
        call_method(&mut realm, &JsValue::from(2.5), "toString", &[]).unwrap(),
        JsValue::from("2.5")
    );
    assert_eq!(
        call_method(&mut realm, &JsValue::from("abc"), "valueOf", &[]).unwrap(),
        JsValue::from("abc")
    );
}

#[test]
fn test_wrapper_value_of_unwraps() {
    let mut realm = create_test_realm();
    let boxed = realm.to_object(&JsValue::from(7)).unwrap();
    assert_eq!(
        call_method(&mut realm, &JsValue::Object(boxed), "valueOf", &[]).unwrap(),
        JsValue::from(7)
    );
}

#[test]
fn test_incompatible_receiver() {
    let mut realm = create_test_realm();
    let key = realm.key("valueOf");
    let number_value_of = realm.get_value(&JsValue::from(1), &key).unwrap();

    let err = realm
        .call(&number_value_of, JsValue::from("text"), &[])
        .unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_string_wrapper_own_properties() {
    let mut realm = create_test_realm();
    let wrapper = realm.to_object(&JsValue::from("ab")).unwrap();

    assert_eq!(
        realm
            .own_property_keys(wrapper)
            .unwrap()
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>(),
        ["0", "1", "length"]
    );
    assert_eq!(
        realm.enumerate_keys(wrapper).unwrap(),
        vec![PropertyKey::Index(0), PropertyKey::Index(1)]
    );
}

#[test]
fn test_string_wrapper_stores_no_per_unit_properties() {
    let mut realm = create_test_realm();
    let getter = this_getter(&mut realm, false);
    let proto = realm.string_prototype;
    define_accessor(&mut realm, proto, "self", Some(getter), None);
    let text = JsValue::from("x".repeat(1000));
    let key = realm.key("self");

    let before = realm.object_count();
    let boxed = realm.get_value(&text, &key).unwrap();
    assert_eq!(realm.object_count(), before + 1);
    let wrapper = boxed.as_object().unwrap();
    assert!(realm.object(wrapper).unwrap().properties.is_empty());

    let length = realm.key("length");
    assert_eq!(realm.get_value(&boxed, &length).unwrap(), JsValue::from(1000));
    assert_eq!(
        realm.get_value(&boxed, &PropertyKey::Index(999)).unwrap(),
        JsValue::from("x")
    );
    assert!(realm.has_own_property(wrapper, &PropertyKey::Index(999)).unwrap());
    assert!(!realm.has_own_property(wrapper, &PropertyKey::Index(1000)).unwrap());
    assert_eq!(realm.own_property_keys(wrapper).unwrap().len(), 1001);
}

#[test]
fn test_string_wrapper_units_are_read_only() {
    let mut realm = create_test_realm();
    let wrapper = realm.to_object(&JsValue::from("ab")).unwrap();
    let boxed = JsValue::Object(wrapper);
    let length = realm.key("length");

    let err = realm
        .set_value(&boxed, &PropertyKey::Index(0), JsValue::from("z"), true)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeError: Cannot assign to read only property '0' of object '#<String>'"
    );
    realm.set_value(&boxed, &length, JsValue::from(9), false).unwrap();
    assert_eq!(realm.get_value(&boxed, &length).unwrap(), JsValue::from(2));

    assert!(!realm.delete(wrapper, &length, false).unwrap());
    assert!(realm.delete(wrapper, &length, true).unwrap_err().is_type_error());
    assert!(
        !realm
            .define_property(
                wrapper,
                PropertyKey::Index(1),
                PartialDescriptor::new().value(JsValue::from("q")),
            )
            .unwrap()
    );
    assert!(
        realm
            .define_property(
                wrapper,
                PropertyKey::Index(1),
                PartialDescriptor::new().value(JsValue::from("b")),
            )
            .unwrap()
    );
    assert!(realm.object(wrapper).unwrap().properties.is_empty());

    // past the last code unit the wrapper behaves like an ordinary object
    realm
        .set_value(&boxed, &PropertyKey::Index(5), JsValue::from("e"), true)
        .unwrap();
    assert_eq!(
        realm.get_value(&boxed, &PropertyKey::Index(5)).unwrap(),
        JsValue::from("e")
    );
    assert_eq!(
        super::key_names(realm.own_property_keys(wrapper).unwrap()),
        ["0", "1", "5", "length"]
    );
}

#[test]
fn test_astral_character_indexes_as_two_replacement_units() {
    let mut realm = create_test_realm();
    let s = JsValue::from("\u{1F600}");
    let length = realm.key("length");

    assert_eq!(realm.get_value(&s, &length).unwrap(), JsValue::from(2));
    let high = realm.get_value(&s, &PropertyKey::Index(0)).unwrap();
    let low = realm.get_value(&s, &PropertyKey::Index(1)).unwrap();
    assert_eq!(high, JsValue::from("\u{FFFD}"));
    assert_eq!(low, JsValue::from("\u{FFFD}"));
}

#[test]
fn test_exponent_number_keys_and_to_string() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    let target = JsValue::Object(obj);

    for (n, text) in [(1e21, "1e+21"), (1e-7, "1e-7"), (123.456, "123.456")] {
        let numeric = PropertyKey::from_value(&JsValue::from(n));
        realm.set_value(&target, &numeric, JsValue::from(text), true).unwrap();
        let named = realm.key(text);
        assert_eq!(realm.get_value(&target, &named).unwrap(), JsValue::from(text));
        assert_eq!(
            call_method(&mut realm, &JsValue::from(n), "toString", &[]).unwrap(),
            JsValue::from(text)
        );
    }
    assert_eq!(
        super::key_names(realm.own_property_keys(obj).unwrap()),
        ["1e+21", "1e-7", "123.456"]
    );
}

#[test]
fn test_reading_from_undefined_and_null() {
    let mut realm = create_test_realm();
    let key = realm.key("x");

    let err = realm.get_value(&JsValue::Undefined, &key).unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeError: Cannot read properties of undefined (reading 'x')"
    );
    let err = realm.get_value(&JsValue::Null, &key).unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeError: Cannot read properties of null (reading 'x')"
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Writes
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_sloppy_write_to_primitive_is_dropped() {
    let mut realm = create_test_realm();
    let s = JsValue::from("abc");
    let key = realm.key("x");

    realm.set_value(&s, &key, JsValue::from(1), false).unwrap();
    assert_eq!(realm.get_value(&s, &key).unwrap(), JsValue::Undefined);
    assert!(
        !realm
            .has_own_property(realm.string_prototype, &key)
            .unwrap()
    );
}

#[test]
fn test_strict_write_to_primitive_throws() {
    let mut realm = create_test_realm();
    let key = realm.key("x");

    let err = realm
        .set_value(&JsValue::from("abc"), &key, JsValue::from(1), true)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeError: Cannot create property 'x' on string 'abc'"
    );

    let err = realm
        .set_value(&JsValue::from(5), &key, JsValue::from(1), true)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeError: Cannot create property 'x' on number '5'"
    );
}

#[test]
fn test_strict_write_to_string_index_is_read_only() {
    let mut realm = create_test_realm();
    let err = realm
        .set_value(&JsValue::from("abc"), &PropertyKey::Index(0), JsValue::from("z"), true)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeError: Cannot assign to read only property '0' of string 'abc'"
    );
}

#[test]
fn test_writing_to_undefined_throws_in_both_modes() {
    let mut realm = create_test_realm();
    let key = realm.key("x");
    for strict in [false, true] {
        let err = realm
            .set_value(&JsValue::Undefined, &key, JsValue::from(1), strict)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "TypeError: Cannot set properties of undefined (setting 'x')"
        );
    }
}
