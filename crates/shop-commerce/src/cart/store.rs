//! Session-scoped cart store with synchronous observers.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::cart::CartState;
use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&CartState)>;

/// Owns the cart for one browsing session.
///
/// The store is built once at the top of the application and shared by
/// reference with every view. Mutations run on the calling thread and every
/// registered listener has observed the new state before the mutation
/// returns. The store is deliberately `!Sync`: the session runs on a single
/// thread and mutations never interleave.
#[derive(Default)]
pub struct CartStore {
    state: RefCell<CartState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
}

impl CartStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`, creating its line if needed.
    pub fn add_to_cart(&self, product: &Product) {
        self.state.borrow_mut().add(product);
        tracing::debug!(product_id = %product.id, "cart: add");
        self.notify();
    }

    /// Remove the line for `product_id`; absent ids are ignored.
    pub fn remove_from_cart(&self, product_id: &ProductId) {
        let removed = self.state.borrow_mut().remove(product_id);
        tracing::debug!(product_id = %product_id, removed, "cart: remove");
        self.notify();
    }

    /// Set a line's quantity; zero or less removes the line.
    pub fn update_quantity(&self, product_id: &ProductId, quantity: i64) {
        let changed = self.state.borrow_mut().set_quantity(product_id, quantity);
        tracing::debug!(product_id = %product_id, quantity, changed, "cart: update quantity");
        self.notify();
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.state.borrow_mut().clear();
        tracing::debug!("cart: clear");
        self.notify();
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Read the current state without copying it.
    pub fn with_state<R>(&self, f: impl FnOnce(&CartState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn total_items(&self) -> i64 {
        self.state.borrow().total_items()
    }

    pub fn total_price(&self) -> Money {
        self.state.borrow().total_price()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Register a listener called with the new state after every mutation.
    pub fn subscribe(&self, listener: impl Fn(&CartState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let len_before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() < len_before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    // Borrows are released before listeners run so a listener may read the
    // store or subscribe without panicking.
    fn notify(&self) {
        let state = self.snapshot();
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();

        for listener in listeners {
            listener(&state);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, id.to_uppercase(), Money::new(cents)).with_stock(10)
    }

    #[test]
    fn test_add_to_cart_counts_calls() {
        let store = CartStore::new();
        let a = product("a", 1000);

        for _ in 0..4 {
            store.add_to_cart(&a);
        }

        assert_eq!(store.total_items(), 4);
        store.with_state(|s| {
            assert_eq!(s.len(), 1);
            assert_eq!(s.lines()[0].quantity, 4);
        });
    }

    #[test]
    fn test_listeners_see_state_before_call_returns() {
        let store = CartStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.total_items()));

        let a = product("a", 1000);
        store.add_to_cart(&a);
        assert_eq!(*seen.borrow(), vec![1]);

        store.add_to_cart(&a);
        store.update_quantity(&a.id, 5);
        store.remove_from_cart(&a.id);
        store.clear_cart();
        assert_eq!(*seen.borrow(), vec![1, 2, 5, 0, 0]);
    }

    #[test]
    fn test_every_listener_is_notified() {
        let store = CartStore::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let f = Rc::clone(&first);
        store.subscribe(move |s| f.set(s.total_items()));
        let g = Rc::clone(&second);
        store.subscribe(move |s| g.set(s.total_items() * 10));

        store.add_to_cart(&product("a", 100));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 10);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = CartStore::new();
        let calls = Rc::new(Cell::new(0));

        let c = Rc::clone(&calls);
        let id = store.subscribe(move |_| c.set(c.get() + 1));

        store.add_to_cart(&product("a", 100));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add_to_cart(&product("a", 100));

        assert_eq!(calls.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_may_read_store() {
        let store = Rc::new(CartStore::new());
        let observed = Rc::new(Cell::new(Money::zero()));

        let reader = Rc::clone(&store);
        let out = Rc::clone(&observed);
        store.subscribe(move |_| out.set(reader.total_price()));

        store.add_to_cart(&product("a", 1250));
        assert_eq!(observed.get(), Money::new(1250));
    }

    #[test]
    fn test_remove_absent_leaves_state_unchanged() {
        let store = CartStore::new();
        let a = product("a", 1000);
        store.add_to_cart(&a);
        store.update_quantity(&a.id, 0);
        assert!(store.is_empty());

        let before = store.snapshot();
        store.remove_from_cart(&a.id);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_scenario_totals() {
        let store = CartStore::new();
        let a = product("a", 1000);
        let b = product("b", 2500);

        store.add_to_cart(&a);
        store.add_to_cart(&a);
        store.add_to_cart(&b);

        assert_eq!(store.total_items(), 3);
        assert_eq!(store.total_price().display(), "$45.00");

        store.clear_cart();
        assert_eq!(store.total_items(), 0);
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_huge_quantity_keeps_mutations_infallible() {
        let store = CartStore::new();
        let badge = Rc::new(Cell::new(0));
        let b = Rc::clone(&badge);
        store.subscribe(move |s| b.set(s.total_items()));

        let a = product("a", 1000);
        store.add_to_cart(&a);
        store.update_quantity(&a.id, i64::MAX);
        store.add_to_cart(&product("b", 1000));

        assert_eq!(store.total_items(), i64::MAX);
        assert_eq!(badge.get(), i64::MAX);
    }
}
