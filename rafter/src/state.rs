use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Shared render flag for one mounted component.
///
/// Every [`State`] created from a scheduler marks it dirty on write; the
/// runtime checks it after each handler and effect pass and re-renders while
/// it stays set.
#[derive(Clone, Default)]
pub struct Scheduler {
    dirty: Rc<Cell<bool>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create reactive state whose writes schedule a render here.
    pub fn state<T>(&self, value: T) -> State<T> {
        State {
            inner: Rc::new(RefCell::new(value)),
            dirty: Rc::clone(&self.dirty),
        }
    }

    /// Request a render without touching any state.
    pub fn request_render(&self) {
        self.dirty.set(true);
    }

    /// Check if a render has been requested since the last clear.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub(crate) fn clear_dirty(&self) {
        self.dirty.set(false);
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("dirty", &self.dirty.get())
            .finish()
    }
}

/// Reactive state wrapper with interior mutability.
///
/// `State<T>` is cheap to clone; clones share the value and the scheduler.
/// Any write marks the owning [`Scheduler`] dirty, so the component renders
/// again before the runtime reads the next event.
///
/// # Example
///
/// ```ignore
/// struct Counter {
///     value: State<i32>,
/// }
///
/// impl Counter {
///     fn new(scheduler: &Scheduler) -> Self {
///         Self { value: scheduler.state(0) }
///     }
/// }
///
/// // in a click handler
/// value.update(|v| *v += 1);
/// ```
///
/// Closures passed to [`State::update`] and [`State::with`] must not touch the
/// same state again; the value is borrowed for the duration of the call.
pub struct State<T> {
    inner: Rc<RefCell<T>>,
    dirty: Rc<Cell<bool>>,
}

impl<T> State<T> {
    /// Create state with its own scheduler. Use [`Scheduler::state`] for
    /// state that should drive a mounted component.
    pub fn new(value: T) -> Self {
        Scheduler::new().state(value)
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.borrow().clone()
    }

    /// Read the value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
        self.dirty.set(true);
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.inner.borrow_mut());
        self.dirty.set(true);
    }

    /// Check if the state's scheduler has a pending render
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            dirty: Rc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &self.inner.borrow())
            .field("dirty", &self.dirty.get())
            .finish()
    }
}
