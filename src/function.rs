//! Host callables
//!
//! Getters, setters and methods are host closures registered in the realm's
//! function table and referenced by [`FunctionRef`]. The core never looks
//! inside a body; it only decides which `this` the body receives.

use std::fmt;
use std::rc::Rc;

use crate::error::JsError;
use crate::realm::Realm;
use crate::value::{CheapClone, FunctionRef, JsString, JsValue};

/// A callable body supplied by the embedding engine.
///
/// Bodies get `&mut Realm`, so they may read and mutate any object,
/// including the one whose accessor is currently running.
pub trait HostFunction {
    fn call(&self, realm: &mut Realm, this: JsValue, args: &[JsValue]) -> Result<JsValue, JsError>;
}

impl<F> HostFunction for F
where
    F: Fn(&mut Realm, JsValue, &[JsValue]) -> Result<JsValue, JsError>,
{
    fn call(&self, realm: &mut Realm, this: JsValue, args: &[JsValue]) -> Result<JsValue, JsError> {
        self(realm, this, args)
    }
}

/// Host function wrapper
#[derive(Clone)]
pub struct FunctionRecord {
    pub name: JsString,
    /// Strict functions see primitive receivers unboxed
    pub strict: bool,
    pub arity: usize,
    pub body: Rc<dyn HostFunction>,
}

// Name is an Rc<str> and the body an Rc
impl CheapClone for FunctionRecord {}

impl fmt::Debug for FunctionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRecord")
            .field("name", &self.name)
            .field("strict", &self.strict)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Table of every host function known to a realm
#[derive(Debug, Default)]
pub struct FunctionTable {
    records: Vec<FunctionRecord>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, record: FunctionRecord) -> FunctionRef {
        let handle = FunctionRef(self.records.len() as u32);
        self.records.push(record);
        handle
    }

    /// Copy of the record, so the caller can invoke it while mutating the realm
    pub fn get(&self, handle: FunctionRef) -> Result<FunctionRecord, JsError> {
        self.records
            .get(handle.index())
            .map(CheapClone::cheap_clone)
            .ok_or_else(|| JsError::internal_error(format!("{:?} not found", handle)))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
