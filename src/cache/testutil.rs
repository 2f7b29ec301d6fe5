//! Scripted collaborators for reader tests.
//!
//! `ScriptedStore` plays back a fixed fetch outcome and records every call;
//! the origin helpers count invocations through a shared cell.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::error::BoxError;
use crate::origin::{origin_fn, OriginFetcher};
use crate::store::{Fetch, ObjectStore};

/// What the scripted store answers to every fetch.
#[derive(Debug, Clone)]
enum Script {
    Hit(Vec<u8>),
    Miss,
    Error(String),
}

/// Object store double with call recording.
pub(crate) struct ScriptedStore {
    script: Script,
    fetch_calls: Cell<usize>,
    put_calls: Cell<usize>,
    put_bodies: RefCell<Vec<Vec<u8>>>,
    put_failure: Option<String>,
}

impl ScriptedStore {
    fn with_script(script: Script) -> Self {
        Self {
            script,
            fetch_calls: Cell::new(0),
            put_calls: Cell::new(0),
            put_bodies: RefCell::new(Vec::new()),
            put_failure: None,
        }
    }

    /// Store that always reports a fresh hit with `body`.
    pub(crate) fn hit(body: &[u8]) -> Self {
        Self::with_script(Script::Hit(body.to_vec()))
    }

    /// Store that always reports a miss.
    pub(crate) fn miss() -> Self {
        Self::with_script(Script::Miss)
    }

    /// Store whose fetch always fails with `msg`.
    pub(crate) fn error(msg: &str) -> Self {
        Self::with_script(Script::Error(msg.to_string()))
    }

    /// Makes every put fail with `msg`.
    pub(crate) fn with_failing_puts(mut self, msg: &str) -> Self {
        self.put_failure = Some(msg.to_string());
        self
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }

    pub(crate) fn put_calls(&self) -> usize {
        self.put_calls.get()
    }

    pub(crate) fn put_bodies(&self) -> Vec<Vec<u8>> {
        self.put_bodies.borrow().clone()
    }
}

impl ObjectStore for ScriptedStore {
    fn fetch(&self, _bucket: &str, _key: &str, _freshness: Duration) -> Result<Fetch, BoxError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        match &self.script {
            Script::Hit(body) => Ok(Fetch::Hit(body.clone())),
            Script::Miss => Ok(Fetch::Miss),
            Script::Error(msg) => Err(msg.clone().into()),
        }
    }

    fn put(&self, _bucket: &str, _key: &str, body: &[u8]) -> Result<(), BoxError> {
        self.put_calls.set(self.put_calls.get() + 1);
        self.put_bodies.borrow_mut().push(body.to_vec());
        match &self.put_failure {
            Some(msg) => Err(msg.clone().into()),
            None => Ok(()),
        }
    }
}

/// Origin returning `body`, with an invocation counter the test keeps.
pub(crate) fn counting_origin(body: &[u8]) -> (impl OriginFetcher, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let body = body.to_vec();
    let origin = origin_fn(move || {
        counter.set(counter.get() + 1);
        Ok(body.clone())
    });
    (origin, calls)
}

/// Origin that always fails with `msg`.
pub(crate) fn failing_origin(msg: &str) -> impl OriginFetcher {
    let msg = msg.to_string();
    origin_fn(move || Err(msg.clone().into()))
}
