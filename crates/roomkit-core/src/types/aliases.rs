//! Type aliases for commonly used complex types.
//!
//! Complex types like `Rc<RefCell<Option<Box<dyn Fn()>>>>` are hard to read
//! at a glance. Aliases give them meaningful names and keep the same pattern
//! used the same way across crates.
//!
//! The editor is single-threaded and event-driven, so its notification
//! hooks use `Rc<RefCell<…>>` rather than `Arc<Mutex<…>>`.

use std::cell::RefCell;
use std::rc::Rc;

/// A UI callback stored in RefCell for shell signal handlers.
///
/// Single-threaded, suitable for callbacks that capture UI state.
/// The editor invokes it after every mutation that needs a repaint.
pub type UiCallback = Rc<RefCell<Option<Box<dyn Fn()>>>>;

/// A UI callback with a single parameter.
pub type UiDataCallback<T> = Rc<RefCell<Option<Box<dyn Fn(T)>>>>;
