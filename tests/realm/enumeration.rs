//! Own-key and for-in enumeration order

use super::{create_test_realm, key_names, put};
use protochain::{JsValue, PropertyDescriptor, PropertyKey};

#[test]
fn test_insertion_order() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    put(&mut realm, obj, "b", 1);
    put(&mut realm, obj, "a", 2);
    put(&mut realm, obj, "c", 3);

    assert_eq!(key_names(realm.enumerate_keys(obj).unwrap()), ["b", "a", "c"]);
}

#[test]
fn test_integer_keys_come_first_in_ascending_order() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    put(&mut realm, obj, "z", 1);
    put(&mut realm, obj, "10", 1);
    put(&mut realm, obj, "1", 1);
    put(&mut realm, obj, "01", 1);

    assert_eq!(
        key_names(realm.enumerate_keys(obj).unwrap()),
        ["1", "10", "z", "01"]
    );
}

#[test]
fn test_overwrite_keeps_position_and_readd_moves_to_end() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    put(&mut realm, obj, "a", 1);
    put(&mut realm, obj, "b", 2);
    put(&mut realm, obj, "a", 3);
    assert_eq!(key_names(realm.enumerate_keys(obj).unwrap()), ["a", "b"]);

    let key = realm.key("a");
    assert!(realm.delete(obj, &key, false).unwrap());
    put(&mut realm, obj, "a", 4);
    assert_eq!(key_names(realm.enumerate_keys(obj).unwrap()), ["b", "a"]);
}

#[test]
fn test_non_enumerable_keys_only_in_own_property_keys() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    put(&mut realm, obj, "visible", 1);
    let key = realm.key("hidden");
    realm
        .define_own(obj, key, PropertyDescriptor::hidden(JsValue::from(2)))
        .unwrap();

    assert_eq!(key_names(realm.enumerate_keys(obj).unwrap()), ["visible"]);
    assert_eq!(
        key_names(realm.own_property_keys(obj).unwrap()),
        ["visible", "hidden"]
    );
}

#[test]
fn test_chain_keys_own_first_then_prototypes() {
    let mut realm = create_test_realm();
    let proto = realm.create_plain_object();
    put(&mut realm, proto, "c", 1);
    put(&mut realm, proto, "d", 1);
    let obj = realm.create_object(Some(proto));
    put(&mut realm, obj, "a", 1);
    put(&mut realm, obj, "b", 1);

    assert_eq!(
        key_names(realm.enumerate_chain_keys(obj).unwrap()),
        ["a", "b", "c", "d"]
    );
}

#[test]
fn test_chain_keys_report_shadowed_names_once() {
    let mut realm = create_test_realm();
    let proto = realm.create_plain_object();
    put(&mut realm, proto, "shared", 1);
    put(&mut realm, proto, "inherited", 1);
    let obj = realm.create_object(Some(proto));
    put(&mut realm, obj, "shared", 2);

    assert_eq!(
        key_names(realm.enumerate_chain_keys(obj).unwrap()),
        ["shared", "inherited"]
    );
}

#[test]
fn test_non_enumerable_own_property_hides_inherited_key() {
    let mut realm = create_test_realm();
    let proto = realm.create_plain_object();
    put(&mut realm, proto, "x", 1);
    let obj = realm.create_object(Some(proto));
    realm
        .define_own(obj, PropertyKey::from("x"), PropertyDescriptor::hidden(JsValue::from(2)))
        .unwrap();

    assert!(realm.enumerate_chain_keys(obj).unwrap().is_empty());
}

#[test]
fn test_builtin_methods_are_not_enumerated() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    put(&mut realm, obj, "own", 1);

    assert_eq!(key_names(realm.enumerate_chain_keys(obj).unwrap()), ["own"]);
}
