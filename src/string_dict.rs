//! Interning of property names.
//!
//! `Realm::key` hands out keys backed by this dictionary, so every `length`
//! or `__proto__` key in the realm points at the same `Rc<str>` and equality
//! checks on them usually stop at the pointer.

use crate::prelude::FxHashMap;

use crate::value::{CheapClone, JsString};

/// Names every realm touches while installing intrinsics or defining
/// function objects
const REALM_KEYS: &[&str] = &[
    "__proto__",
    "get __proto__",
    "set __proto__",
    // function objects
    "length",
    "name",
    // descriptor fields
    "value",
    "writable",
    "get",
    "set",
    "enumerable",
    "configurable",
    // intrinsic methods
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "toString",
    "valueOf",
];

/// Name table shared by one realm
pub struct StringDict {
    // looked up by &str, so the key is the plain boxed text
    strings: FxHashMap<Box<str>, JsString>,
}

impl StringDict {
    pub fn new() -> Self {
        Self {
            strings: FxHashMap::default(),
        }
    }

    /// A dictionary that already holds the realm's own property names
    pub fn preloaded() -> Self {
        let mut dict = Self::new();
        for name in REALM_KEYS {
            dict.get_or_insert(name);
        }
        dict
    }

    /// The shared string for `s`, allocating it on first use
    pub fn get_or_insert(&mut self, s: &str) -> JsString {
        match self.strings.get(s) {
            Some(shared) => shared.cheap_clone(),
            None => {
                let shared = JsString::from(s);
                self.strings.insert(Box::from(s), shared.cheap_clone());
                shared
            }
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringDict {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringDict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StringDict({} names)", self.strings.len())
    }
}
