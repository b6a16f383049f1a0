use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};

/// Storage cell an option's value is parsed into.
///
/// The handle returned from a declaration and the one kept by
/// [`Options`](crate::Options) point at the same cell, so the value read
/// after parsing is whatever the command line put there (or the default).
pub struct Slot<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Slot<T> {
    pub(crate) fn new(value: T) -> Slot<T> {
        Slot { cell: Rc::new(RefCell::new(value)) }
    }

    pub(crate) fn set(&self, value: T) {
        *self.cell.borrow_mut() = value;
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.cell.borrow()
    }
}

impl<T: Clone> Slot<T> {
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Slot<T> {
        Slot { cell: Rc::clone(&self.cell) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.cell.borrow(), f)
    }
}

pub(crate) enum Binding {
    Str(Slot<String>),
    Int(Slot<i64>),
    Bool(Slot<bool>),
}

impl Binding {
    /// String form of the current value, used to decide whether a required
    /// option was left empty.
    pub(crate) fn lexical(&self) -> String {
        match self {
            Binding::Str(slot) => slot.get(),
            Binding::Int(slot) => slot.get().to_string(),
            Binding::Bool(slot) => slot.get().to_string(),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Str(slot) => fmt::Debug::fmt(slot, f),
            Binding::Int(slot) => fmt::Debug::fmt(slot, f),
            Binding::Bool(slot) => fmt::Debug::fmt(slot, f),
        }
    }
}
