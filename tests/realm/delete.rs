//! Property deletion

use super::{create_test_realm, get, put};
use protochain::{JsValue, PropertyDescriptor, PropertyKey};

#[test]
fn test_delete_own_property() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    put(&mut realm, obj, "x", 1);
    let key = realm.key("x");

    assert!(realm.delete(obj, &key, true).unwrap());
    assert!(!realm.has_own_property(obj, &key).unwrap());
    assert_eq!(get(&mut realm, obj, "x"), JsValue::Undefined);
}

#[test]
fn test_delete_missing_property_succeeds() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    assert!(realm.delete(obj, &PropertyKey::from("nope"), true).unwrap());
}

#[test]
fn test_delete_reveals_inherited_value() {
    let mut realm = create_test_realm();
    let proto = realm.create_plain_object();
    put(&mut realm, proto, "x", "proto");
    let obj = realm.create_object(Some(proto));
    put(&mut realm, obj, "x", "own");
    let key = realm.key("x");

    assert!(realm.delete(obj, &key, false).unwrap());
    assert_eq!(get(&mut realm, obj, "x"), JsValue::from("proto"));

    // Deleting through the child never touches the prototype
    assert!(realm.delete(obj, &key, false).unwrap());
    assert_eq!(get(&mut realm, proto, "x"), JsValue::from("proto"));
}

#[test]
fn test_delete_non_configurable() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    let key = realm.key("x");
    realm
        .define_own(
            obj,
            key.clone(),
            PropertyDescriptor::with_attributes(JsValue::from(1), true, true, false),
        )
        .unwrap();

    assert!(!realm.delete(obj, &key, false).unwrap());
    let err = realm.delete(obj, &key, true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeError: Cannot delete property 'x' of #<Object>"
    );
    assert_eq!(get(&mut realm, obj, "x"), JsValue::from(1));
}

#[test]
fn test_delete_on_sealed_object() {
    let mut realm = create_test_realm();
    let obj = realm.create_plain_object();
    put(&mut realm, obj, "x", 1);
    realm.seal(obj).unwrap();

    let key = realm.key("x");
    assert!(!realm.delete(obj, &key, false).unwrap());
    assert!(realm.is_sealed(obj).unwrap());
}
