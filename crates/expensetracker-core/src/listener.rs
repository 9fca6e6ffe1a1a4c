//! Observer side of the model
//!
//! Listeners are shared handles (`Rc<dyn ExpenseTrackerModelListener>`).
//! Two handles are the same listener only when they point at the same
//! allocation; structurally equal listeners are still distinct.

use std::rc::Rc;

use crate::ExpenseTrackerModel;

/// Listener reference type
pub type ListenerRef = Rc<dyn ExpenseTrackerModelListener>;

/// Something that wants to hear about model state changes
pub trait ExpenseTrackerModelListener {
    /// Called synchronously after the model changed.
    ///
    /// Returning an error aborts the broadcast: listeners registered later
    /// are skipped and the error reaches whoever triggered the change.
    fn update(&self, model: &ExpenseTrackerModel) -> anyhow::Result<()>;
}

impl<F> ExpenseTrackerModelListener for F
where
    F: Fn(&ExpenseTrackerModel) -> anyhow::Result<()>,
{
    fn update(&self, model: &ExpenseTrackerModel) -> anyhow::Result<()> {
        self(model)
    }
}

/// Registered listeners in registration order, without duplicates
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: Vec<ListenerRef>,
}

impl ListenerRegistry {
    /// Add a listener unless that same handle is already present
    pub(crate) fn register(&mut self, listener: ListenerRef) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    pub(crate) fn contains(&self, listener: &ListenerRef) -> bool {
        self.listeners.iter().any(|l| same_listener(l, listener))
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ListenerRef> {
        self.listeners.iter()
    }
}

// Compare data pointers only; vtable pointers are not guaranteed unique.
fn same_listener(a: &ListenerRef, b: &ListenerRef) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Silent;

    impl ExpenseTrackerModelListener for Silent {
        fn update(&self, _model: &ExpenseTrackerModel) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_register_rejects_same_handle() {
        let mut registry = ListenerRegistry::default();
        let listener: ListenerRef = Rc::new(Silent);

        assert!(registry.register(listener.clone()));
        assert!(!registry.register(listener.clone()));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&listener));
    }

    #[test]
    fn test_distinct_allocations_are_distinct_listeners() {
        let mut registry = ListenerRegistry::default();
        let first: ListenerRef = Rc::new(|_: &ExpenseTrackerModel| -> anyhow::Result<()> { Ok(()) });
        let second: ListenerRef = Rc::new(|_: &ExpenseTrackerModel| -> anyhow::Result<()> { Ok(()) });

        assert!(registry.register(first.clone()));
        assert!(!registry.contains(&second));
        assert!(registry.register(second));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_iter_keeps_registration_order() {
        let mut registry = ListenerRegistry::default();
        let handles: Vec<ListenerRef> = (0..3)
            .map(|_| Rc::new(|_: &ExpenseTrackerModel| -> anyhow::Result<()> { Ok(()) }) as ListenerRef)
            .collect();
        for handle in &handles {
            registry.register(handle.clone());
        }

        for (registered, expected) in registry.iter().zip(&handles) {
            assert!(same_listener(registered, expected));
        }
    }
}
