//! Test doubles shared by the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use value_changer::config::{AnimationConfig, RegistryTarget, GORILLA_TAG};
use value_changer::console::{Attr, Surface};
use value_changer::registry::{StoreResult, ValueKey, ValueStore};
use value_changer::ui::Ui;
use value_changer::utils::error::StoreError;

pub const ERROR_FILE_NOT_FOUND: i32 = 2;
pub const ERROR_ACCESS_DENIED: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Written {
    Qword(u64),
    Str(String),
}

#[derive(Default)]
pub struct StoreLog {
    pub opens: Cell<usize>,
    pub closes: Cell<usize>,
    pub writes: RefCell<Vec<(String, Written)>>,
}

/// In-memory stand-in for the registry key
pub struct FakeStore {
    pub target: RegistryTarget,
    pub key_exists: bool,
    /// Value names whose writes fail with access denied
    pub failing: Vec<&'static str>,
    pub log: Rc<StoreLog>,
}

impl FakeStore {
    pub fn writable() -> Self {
        Self {
            target: GORILLA_TAG,
            key_exists: true,
            failing: Vec::new(),
            log: Rc::new(StoreLog::default()),
        }
    }

    pub fn missing_key() -> Self {
        Self {
            key_exists: false,
            ..Self::writable()
        }
    }

    pub fn failing_on(names: &[&'static str]) -> Self {
        Self {
            failing: names.to_vec(),
            ..Self::writable()
        }
    }

    pub fn opens(&self) -> usize {
        self.log.opens.get()
    }

    pub fn closes(&self) -> usize {
        self.log.closes.get()
    }

    pub fn writes(&self) -> Vec<(String, Written)> {
        self.log.writes.borrow().clone()
    }
}

pub struct FakeKey {
    failing: Vec<&'static str>,
    log: Rc<StoreLog>,
}

impl FakeKey {
    fn record(&self, name: &str, value: Written) -> StoreResult<()> {
        self.log.writes.borrow_mut().push((name.to_string(), value));
        if self.failing.iter().any(|f| *f == name) {
            return Err(StoreError::new(ERROR_ACCESS_DENIED));
        }
        Ok(())
    }
}

impl Drop for FakeKey {
    fn drop(&mut self) {
        self.log.closes.set(self.log.closes.get() + 1);
    }
}

impl ValueStore for FakeStore {
    type Key = FakeKey;

    fn target(&self) -> &RegistryTarget {
        &self.target
    }

    fn open(&self) -> StoreResult<FakeKey> {
        self.log.opens.set(self.log.opens.get() + 1);
        if !self.key_exists {
            return Err(StoreError::new(ERROR_FILE_NOT_FOUND));
        }
        Ok(FakeKey {
            failing: self.failing.clone(),
            log: Rc::clone(&self.log),
        })
    }
}

impl ValueKey for FakeKey {
    fn write_qword(&self, name: &str, value: u64) -> StoreResult<()> {
        self.record(name, Written::Qword(value))
    }

    fn write_string(&self, name: &str, value: &str) -> StoreResult<()> {
        self.record(name, Written::Str(value.to_string()))
    }
}

/// Surface with a fixed width that remembers the current color
pub struct TestSurface {
    pub current: Cell<Attr>,
    pub clears: Cell<usize>,
    pub cursor_visible: Cell<bool>,
    pub title: RefCell<String>,
}

impl TestSurface {
    pub fn new() -> Self {
        Self {
            current: Cell::new(Attr(0x07)),
            clears: Cell::new(0),
            cursor_visible: Cell::new(true),
            title: RefCell::new(String::new()),
        }
    }
}

impl Surface for TestSurface {
    fn attributes(&self) -> Option<Attr> {
        Some(self.current.get())
    }

    fn set_attributes(&self, attr: Attr) {
        self.current.set(attr);
    }

    fn width(&self) -> usize {
        80
    }

    fn clear(&self) {
        self.clears.set(self.clears.get() + 1);
    }

    fn show_cursor(&self, show: bool) {
        self.cursor_visible.set(show);
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }
}

pub fn test_ui(surface: &TestSurface) -> Ui<&TestSurface, Vec<u8>> {
    Ui::new(surface, Vec::new(), AnimationConfig::instant())
}

pub fn output(ui: &Ui<&TestSurface, Vec<u8>>) -> String {
    String::from_utf8_lossy(ui.writer()).into_owned()
}
