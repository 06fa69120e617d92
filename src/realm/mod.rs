//! The realm: object arena, function table and intrinsic prototypes
//!
//! Every host-facing operation goes through [`Realm`]. Property access lives
//! in `resolver`, getter/setter invocation in `accessor`, object literal
//! construction in `literal` and the intrinsic methods in `builtins`.

pub mod accessor;
pub mod builtins;
pub mod literal;
pub mod resolver;

use std::rc::Rc;

use log::{debug, error};

use crate::config::RealmConfig;
use crate::error::JsError;
use crate::function::{FunctionRecord, FunctionTable, HostFunction};
use crate::object::{ObjectHeap, ObjectKind, ObjectRecord};
use crate::property::PropertyDescriptor;
use crate::string_dict::StringDict;
use crate::value::{CheapClone, FunctionRef, JsString, JsValue, ObjectRef, PropertyKey};

/// Signature of the built-in methods installed on intrinsic prototypes
pub type NativeFn = fn(&mut Realm, JsValue, &[JsValue]) -> Result<JsValue, JsError>;

/// Owner of all objects and functions reachable by one engine instance
#[derive(Debug)]
pub struct Realm {
    pub(crate) heap: ObjectHeap,
    pub(crate) functions: FunctionTable,
    string_dict: StringDict,
    config: RealmConfig,
    /// Object.prototype, the default end of every ordinary chain
    pub object_prototype: ObjectRef,
    /// Function.prototype for function objects
    pub function_prototype: ObjectRef,
    /// Boolean.prototype, consulted for boolean primitives
    pub boolean_prototype: ObjectRef,
    /// Number.prototype, consulted for number primitives
    pub number_prototype: ObjectRef,
    /// String.prototype, consulted for string primitives
    pub string_prototype: ObjectRef,
    /// Global object; sloppy functions called with an undefined `this` see it
    pub global: ObjectRef,
}

impl Realm {
    /// Create a realm with the default configuration
    pub fn new() -> Self {
        Self::with_config(RealmConfig::default())
    }

    /// Create a realm, logging builtin installation failures instead of
    /// returning them. Use [`Realm::try_with_config`] to observe them.
    pub fn with_config(config: RealmConfig) -> Self {
        match Self::try_with_config(config.clone()) {
            Ok(realm) => realm,
            Err(err) => {
                error!("failed to install intrinsic methods: {}", err);
                Self::bare(config)
            }
        }
    }

    /// Create a realm and install the intrinsic methods
    pub fn try_with_config(config: RealmConfig) -> Result<Self, JsError> {
        let mut realm = Self::bare(config);
        builtins::init_builtins(&mut realm)?;
        debug!(
            "realm initialised: {} intrinsic objects, {} builtin functions, proto_initializer={}",
            realm.heap.len(),
            realm.functions.len(),
            realm.config.proto_initializer
        );
        Ok(realm)
    }

    /// Intrinsic objects linked together, with no methods installed yet
    fn bare(config: RealmConfig) -> Self {
        let mut heap = ObjectHeap::new();
        let object_prototype = heap.alloc(ObjectRecord::new(None));
        let function_prototype = heap.alloc(ObjectRecord::new(Some(object_prototype)));
        let boolean_prototype = heap.alloc(ObjectRecord::with_kind(
            Some(object_prototype),
            ObjectKind::PrimitiveWrapper(JsValue::Boolean(false)),
        ));
        let number_prototype = heap.alloc(ObjectRecord::with_kind(
            Some(object_prototype),
            ObjectKind::PrimitiveWrapper(JsValue::Number(0.0)),
        ));
        let string_prototype = heap.alloc(ObjectRecord::with_kind(
            Some(object_prototype),
            ObjectKind::PrimitiveWrapper(JsValue::from("")),
        ));
        let global = heap.alloc(ObjectRecord::new(Some(object_prototype)));

        Self {
            heap,
            functions: FunctionTable::new(),
            string_dict: StringDict::preloaded(),
            config,
            object_prototype,
            function_prototype,
            boolean_prototype,
            number_prototype,
            string_prototype,
            global,
        }
    }

    pub fn config(&self) -> &RealmConfig {
        &self.config
    }

    /// Intern a string in the realm's dictionary
    pub fn intern(&mut self, s: &str) -> JsString {
        self.string_dict.get_or_insert(s)
    }

    /// Create a PropertyKey, sharing the allocation of interned names
    #[inline]
    pub fn key(&mut self, s: &str) -> PropertyKey {
        PropertyKey::from(self.string_dict.get_or_insert(s))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Object creation
    // ═══════════════════════════════════════════════════════════════════════════

    /// Create an ordinary object with an explicit prototype (`None` for a
    /// null-prototype object)
    pub fn create_object(&mut self, prototype: Option<ObjectRef>) -> ObjectRef {
        self.heap.alloc(ObjectRecord::new(prototype))
    }

    /// Create a plain object whose prototype is Object.prototype
    pub fn create_plain_object(&mut self) -> ObjectRef {
        self.create_object(Some(self.object_prototype))
    }

    /// Register a host function. Accessor descriptors refer to it directly
    /// through the returned handle.
    pub fn create_function(
        &mut self,
        name: &str,
        strict: bool,
        arity: usize,
        body: impl HostFunction + 'static,
    ) -> FunctionRef {
        let name = self.intern(name);
        self.functions.register(FunctionRecord {
            name,
            strict,
            arity,
            body: Rc::new(body),
        })
    }

    /// Wrap a registered function in a callable object so it can be stored
    /// as a property value
    pub fn create_function_object(&mut self, function: FunctionRef) -> Result<ObjectRef, JsError> {
        let record = self.functions.get(function)?;
        let obj = self.heap.alloc(ObjectRecord::with_kind(
            Some(self.function_prototype),
            ObjectKind::Function(function),
        ));
        let length_key = self.key("length");
        let name_key = self.key("name");
        let properties = &mut self.heap.get_mut(obj)?.properties;
        properties.define(
            length_key,
            PropertyDescriptor::with_attributes(
                JsValue::Number(record.arity as f64),
                false,
                false,
                true,
            ),
        );
        properties.define(
            name_key,
            PropertyDescriptor::with_attributes(JsValue::String(record.name), false, false, true),
        );
        Ok(obj)
    }

    /// Install a built-in method as a non-enumerable data property
    pub fn register_method(
        &mut self,
        obj: ObjectRef,
        name: &str,
        func: NativeFn,
        arity: usize,
    ) -> Result<(), JsError> {
        let function = self.create_function(name, true, arity, func);
        let method = self.create_function_object(function)?;
        let key = self.key(name);
        self.define_own(obj, key, PropertyDescriptor::hidden(JsValue::Object(method)))
    }

    /// Install a built-in accessor property (not enumerable, configurable)
    pub fn register_accessor(
        &mut self,
        obj: ObjectRef,
        name: &str,
        getter: Option<NativeFn>,
        setter: Option<NativeFn>,
    ) -> Result<(), JsError> {
        let getter = getter.map(|f| self.create_function(&format!("get {}", name), true, 0, f));
        let setter = setter.map(|f| self.create_function(&format!("set {}", name), true, 1, f));
        let mut desc = PropertyDescriptor::accessor(getter, setter);
        desc.enumerable = false;
        let key = self.key(name);
        self.define_own(obj, key, desc)
    }

    /// Read-only view of an object record
    pub fn object(&self, obj: ObjectRef) -> Result<&ObjectRecord, JsError> {
        self.heap.get(obj)
    }

    /// Number of objects allocated in this realm
    pub fn object_count(&self) -> usize {
        self.heap.len()
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Primitive handling
    // ═══════════════════════════════════════════════════════════════════════════

    /// The `typeof` result for a value
    pub fn type_of(&self, value: &JsValue) -> &'static str {
        match value {
            JsValue::Undefined => "undefined",
            JsValue::Null => "object", // Historical quirk
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Object(obj) => {
                if self.heap.get(*obj).is_ok_and(ObjectRecord::is_callable) {
                    "function"
                } else {
                    "object"
                }
            }
        }
    }

    /// Intrinsic prototype consulted when reading properties of a primitive
    pub fn prototype_for_primitive(&self, value: &JsValue) -> Option<ObjectRef> {
        match value {
            JsValue::Boolean(_) => Some(self.boolean_prototype),
            JsValue::Number(_) => Some(self.number_prototype),
            JsValue::String(_) => Some(self.string_prototype),
            _ => None,
        }
    }

    /// ToObject: objects pass through, primitives are boxed into fresh
    /// wrapper objects, undefined and null are a TypeError. A String
    /// wrapper stores no properties; its code units and `length` are read
    /// from the wrapped string.
    pub fn to_object(&mut self, value: &JsValue) -> Result<ObjectRef, JsError> {
        let prototype = match value {
            JsValue::Object(obj) => return Ok(*obj),
            JsValue::Undefined | JsValue::Null => {
                return Err(JsError::type_error(format!(
                    "Cannot convert {:?} to object",
                    value
                )));
            }
            _ => self.prototype_for_primitive(value),
        };
        Ok(self.heap.alloc(ObjectRecord::with_kind(
            prototype,
            ObjectKind::PrimitiveWrapper(value.cheap_clone()),
        )))
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Prototype linkage and integrity levels
    // ═══════════════════════════════════════════════════════════════════════════

    /// Object.getPrototypeOf: primitives report their wrapper prototype
    pub fn get_prototype_of(&self, value: &JsValue) -> Result<Option<ObjectRef>, JsError> {
        match value {
            JsValue::Object(obj) => self.heap.prototype_of(*obj),
            JsValue::Undefined | JsValue::Null => Err(JsError::type_error(format!(
                "Cannot convert {:?} to object",
                value
            ))),
            _ => Ok(self.prototype_for_primitive(value)),
        }
    }

    /// Replace the prototype link of `obj`.
    ///
    /// Same-value assignment is a no-op; changing the prototype of a
    /// non-extensible object or creating a cycle is a TypeError.
    pub fn set_prototype(
        &mut self,
        obj: ObjectRef,
        new_proto: Option<ObjectRef>,
    ) -> Result<(), JsError> {
        self.heap.set_prototype(obj, new_proto)?;
        debug!("prototype of {:?} set to {:?}", obj, new_proto);
        Ok(())
    }

    /// Prototype assignment from an arbitrary value: objects and null are
    /// applied, every other value is silently ignored
    pub fn set_prototype_from_value(
        &mut self,
        obj: ObjectRef,
        new_proto: &JsValue,
    ) -> Result<(), JsError> {
        match new_proto {
            JsValue::Object(proto) => self.set_prototype(obj, Some(*proto)),
            JsValue::Null => self.set_prototype(obj, None),
            _ => Ok(()),
        }
    }

    pub fn is_extensible(&self, obj: ObjectRef) -> Result<bool, JsError> {
        Ok(self.heap.get(obj)?.is_extensible())
    }

    pub fn prevent_extensions(&mut self, obj: ObjectRef) -> Result<(), JsError> {
        self.heap.get_mut(obj)?.prevent_extensions();
        debug!("{:?} made non-extensible", obj);
        Ok(())
    }

    pub fn freeze(&mut self, obj: ObjectRef) -> Result<(), JsError> {
        self.heap.get_mut(obj)?.freeze();
        debug!("{:?} frozen", obj);
        Ok(())
    }

    pub fn seal(&mut self, obj: ObjectRef) -> Result<(), JsError> {
        self.heap.get_mut(obj)?.seal();
        debug!("{:?} sealed", obj);
        Ok(())
    }

    pub fn is_frozen(&self, obj: ObjectRef) -> Result<bool, JsError> {
        Ok(self.heap.get(obj)?.is_frozen())
    }

    pub fn is_sealed(&self, obj: ObjectRef) -> Result<bool, JsError> {
        Ok(self.heap.get(obj)?.is_sealed())
    }

    /// Describe a value for error messages, e.g. `#<Object>` or `string 'abc'`
    pub(crate) fn describe(&self, value: &JsValue) -> String {
        match value {
            JsValue::Object(obj) => self
                .heap
                .get(*obj)
                .map(|record| record.class_label().to_string())
                .unwrap_or_else(|_| format!("{:?}", obj)),
            JsValue::String(s) => format!("string '{}'", s),
            JsValue::Undefined | JsValue::Null => format!("{:?}", value),
            other => format!("{} '{:?}'", self.type_of(other), other),
        }
    }
}

impl Default for Realm {
    fn default() -> Self {
        Self::new()
    }
}
