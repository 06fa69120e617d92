//! Minimal JavaScript value and property-lookup runtime
//!
//! Objects live in a [`Realm`] arena and are addressed by [`ObjectRef`].
//! Property reads walk the prototype chain, accessors run as host
//! functions with the original receiver as `this`, and the `__proto__`
//! special forms are controlled by [`RealmConfig::proto_initializer`].
//!
//! # Example
//!
//! ```
//! use protochain::{JsValue, LiteralProperty, Realm};
//!
//! let mut realm = Realm::new();
//! let proto = realm.create_plain_object();
//! realm.set_property(proto, "greeting", JsValue::from("hi")).unwrap();
//!
//! let key = realm.key("__proto__");
//! let obj = realm
//!     .create_object_literal([LiteralProperty::Init(key, JsValue::Object(proto))])
//!     .unwrap();
//!
//! assert_eq!(realm.get_property(obj, "greeting").unwrap(), JsValue::from("hi"));
//! assert!(realm.own_property_keys(obj).unwrap().is_empty());
//! ```

pub mod config;
pub mod error;
pub mod function;
pub mod object;
pub mod prelude;
pub mod property;
pub mod realm;
pub mod string_dict;
pub mod value;

pub use config::RealmConfig;
pub use error::JsError;
pub use function::HostFunction;
pub use object::{ObjectKind, ObjectRecord};
pub use property::{PartialDescriptor, PropertyDescriptor, PropertySlot};
pub use realm::Realm;
pub use realm::literal::LiteralProperty;
pub use value::CheapClone;
pub use value::FunctionRef;
pub use value::JsString;
pub use value::JsValue;
pub use value::ObjectRef;
pub use value::PropertyKey;
