#![no_main]

use libfuzzer_sys::fuzz_target;
use protochain::{
    JsError, JsValue, LiteralProperty, ObjectRef, PropertyDescriptor, PropertyKey, Realm,
    RealmConfig,
};

const POOL_SIZE: usize = 8;
const KEYS: [&str; 6] = ["a", "b", "0", "1", "__proto__", "length"];

fn sloppy_setter(realm: &mut Realm, this: JsValue, args: &[JsValue]) -> Result<JsValue, JsError> {
    let key = realm.key("_shadow");
    let value = args.first().cloned().unwrap_or_default();
    if this.is_object() {
        realm.set_value(&this, &key, value, false)?;
    }
    Ok(JsValue::Undefined)
}

fn this_getter(_: &mut Realm, this: JsValue, _: &[JsValue]) -> Result<JsValue, JsError> {
    Ok(this)
}

/// Errors from the object model are expected; a dangling handle is not
fn check(result: Result<impl Sized, JsError>) {
    if let Err(JsError::Internal(message)) = result {
        panic!("internal error: {}", message);
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&mode, ops)) = data.split_first() else {
        return;
    };
    if ops.len() > 4_096 {
        return;
    }

    let config = if mode & 1 == 0 {
        RealmConfig::default()
    } else {
        RealmConfig::without_proto_initializer()
    };
    let mut realm = Realm::with_config(config);
    let getter = realm.create_function("get", mode & 2 == 0, 0, this_getter);
    let setter = realm.create_function("set", mode & 4 == 0, 1, sloppy_setter);

    let mut pool: Vec<ObjectRef> = (0..POOL_SIZE).map(|_| realm.create_plain_object()).collect();
    let values = [
        JsValue::Undefined,
        JsValue::Null,
        JsValue::from(1),
        JsValue::from("str"),
        JsValue::from(true),
    ];

    for chunk in ops.chunks_exact(4) {
        let (op, a, b, c) = (chunk[0], chunk[1], chunk[2], chunk[3]);
        let obj = pool[a as usize % pool.len()];
        let other = pool[b as usize % pool.len()];
        let key = PropertyKey::from(KEYS[c as usize % KEYS.len()]);
        let strict = c & 0x80 != 0;
        let value = if b & 0x80 != 0 {
            JsValue::Object(other)
        } else {
            values[b as usize % values.len()].clone()
        };
        let target = if op & 0x80 != 0 {
            values[a as usize % values.len()].clone()
        } else {
            JsValue::Object(obj)
        };

        match op % 12 {
            0 => check(realm.get_value(&target, &key)),
            1 => check(realm.set_value(&target, &key, value, strict)),
            2 => check(realm.delete(obj, &key, strict)),
            3 => check(realm.set_prototype(obj, Some(other))),
            4 => check(realm.set_prototype_from_value(obj, &value)),
            5 => check(realm.define_own(
                obj,
                key,
                PropertyDescriptor::accessor(Some(getter), Some(setter)),
            )),
            6 => check(realm.enumerate_chain_keys(obj)),
            7 => check(realm.prevent_extensions(obj)),
            8 => check(realm.freeze(obj)),
            9 => {
                let literal = realm.create_object_literal([
                    LiteralProperty::Init(key.clone(), value),
                    LiteralProperty::Getter(key, getter),
                ]);
                check(literal.map(|fresh| pool.push(fresh)));
            }
            10 => check(realm.to_object(&target)),
            _ => check(realm.own_property_keys(obj)),
        }
    }

    // Every chain must still terminate
    for obj in pool {
        let mut current = Some(obj);
        let mut steps = 0;
        while let Some(holder) = current {
            steps += 1;
            assert!(steps <= realm.object_count(), "prototype cycle");
            current = realm.object(holder).unwrap().prototype();
        }
    }
});
