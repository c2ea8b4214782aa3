// ============================================================================
// SESSION STORE - Identidad autenticada compartida por toda la app
// ============================================================================
// Celda observable: una única vía de mutación (update_login) que escribe el
// valor y después notifica a los subscribers. Los consumidores se suscriben
// al montar y se dan de baja al desmontar.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Valor centinela mientras nadie se ha autenticado.
pub const NO_USER: &str = "no user";

pub type SubscriptionId = usize;

type Subscriber = Rc<dyn Fn(&str)>;

pub struct SessionStore {
    current_login: RefCell<String>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<SubscriptionId>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            current_login: RefCell::new(NO_USER.to_string()),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn current_login(&self) -> String {
        self.current_login.borrow().clone()
    }

    /// Única vía de mutación. Escribe primero y notifica después: ningún
    /// subscriber puede observar un valor a medio escribir.
    pub fn update_login(&self, new_login: &str) {
        *self.current_login.borrow_mut() = new_login.to_string();
        self.notify(new_login);
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&str) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers
            .borrow_mut()
            .retain(|(subscription_id, _)| *subscription_id != id);
    }

    // Notifica sobre una copia de la lista: un callback puede suscribirse
    // o darse de baja sin romper el borrow en curso.
    fn notify(&self, new_login: &str) {
        let snapshot: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in snapshot {
            callback(new_login);
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_no_user() {
        let store = SessionStore::new();

        assert_eq!(store.current_login(), NO_USER);
    }

    #[test]
    fn test_update_login_changes_current_login() {
        let store = SessionStore::new();

        store.update_login("bob");

        assert_eq!(store.current_login(), "bob");
    }

    #[test]
    fn test_subscribers_observe_the_new_value() {
        let store = SessionStore::new();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));

        {
            let seen = Rc::clone(&seen);
            store.subscribe(move |login| seen.borrow_mut().push(login.to_string()));
        }

        store.update_login("bob");
        store.update_login("alice");

        assert_eq!(*seen.borrow(), vec!["bob".to_string(), "alice".to_string()]);
    }

    #[test]
    fn test_every_subscriber_is_notified_once_per_update() {
        let store = SessionStore::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        {
            let first = Rc::clone(&first);
            store.subscribe(move |_| first.set(first.get() + 1));
        }
        {
            let second = Rc::clone(&second);
            store.subscribe(move |_| second.set(second.get() + 1));
        }

        store.update_login("bob");

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_unsubscribed_callbacks_stop_receiving() {
        let store = SessionStore::new();
        let calls = Rc::new(Cell::new(0));

        let id = {
            let calls = Rc::clone(&calls);
            store.subscribe(move |_| calls.set(calls.get() + 1))
        };

        store.update_login("bob");
        store.unsubscribe(id);
        store.update_login("alice");

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscriber_reads_consistent_value_during_notification() {
        let store = Rc::new(SessionStore::new());
        let observed = Rc::new(RefCell::new(String::new()));

        {
            let reader = Rc::clone(&store);
            let observed = Rc::clone(&observed);
            store.subscribe(move |_| {
                *observed.borrow_mut() = reader.current_login();
            });
        }

        store.update_login("bob");

        // La escritura ya era visible cuando llegó la notificación
        assert_eq!(*observed.borrow(), "bob");
    }
}
