use std::cell::RefCell;
use std::rc::Rc;

/// Mutable access to page state that may be shared with a renderer.
///
/// Async orchestration holds the cell across awaits and only touches the state
/// inside short synchronous closures, so no borrow is alive while a request
/// is in flight.
pub trait StateCell<T> {
    fn update_state<O>(&mut self, f: impl FnOnce(&mut T) -> O) -> O;

    fn read_state<O>(&self, f: impl FnOnce(&T) -> O) -> O;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn update_state<O>(&mut self, f: impl FnOnce(&mut T) -> O) -> O {
        f(&mut self.borrow_mut())
    }

    fn read_state<O>(&self, f: impl FnOnce(&T) -> O) -> O {
        f(&self.borrow())
    }
}
