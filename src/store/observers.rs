//! Change notification for the expense store

use std::fmt;

use crate::models::ExpenseRecord;

/// A change that has just been applied to the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A record was appended at `position`
    Added {
        position: usize,
        record: ExpenseRecord,
    },
    /// Records were removed; positions refer to the list before removal
    Removed {
        removed: Vec<(usize, ExpenseRecord)>,
    },
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback receiving each event together with the updated list
pub type Observer = Box<dyn FnMut(&StoreEvent, &[ExpenseRecord])>;

/// Ordered list of subscribers
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Call every subscriber in subscription order
    pub(crate) fn notify(&mut self, event: &StoreEvent, records: &[ExpenseRecord]) {
        for (_, observer) in &mut self.entries {
            observer(event, records);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn added() -> StoreEvent {
        StoreEvent::Added {
            position: 0,
            record: ExpenseRecord::new("Coffee", Category::Personal, 4.5, "USD"),
        }
    }

    #[test]
    fn test_notify_in_subscription_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();

        for tag in ["first", "second"] {
            let calls = Rc::clone(&calls);
            observers.subscribe(Box::new(move |_, _| calls.borrow_mut().push(tag)));
        }

        observers.notify(&added(), &[]);
        assert_eq!(*calls.borrow(), ["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut observers = Observers::default();

        let counter = Rc::clone(&count);
        let id = observers.subscribe(Box::new(move |_, _| *counter.borrow_mut() += 1));

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert_eq!(observers.len(), 0);

        observers.notify(&added(), &[]);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut observers = Observers::default();
        let a = observers.subscribe(Box::new(|_, _| {}));
        observers.unsubscribe(a);
        let b = observers.subscribe(Box::new(|_, _| {}));
        assert_ne!(a, b);
    }
}
