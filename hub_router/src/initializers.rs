//! Page initializer registry.
//!
//! Initializers bind behaviour to freshly injected markup. Each returns an
//! optional [`Teardown`] that unbinds it; the registry runs the teardowns of
//! the previous page before running the next page's set, so bindings never
//! accumulate across navigations.

use std::cell::RefCell;
use std::collections::HashMap;

/// Undoes what an initializer bound.
pub type Teardown = Box<dyn FnOnce()>;

type Initializer = Box<dyn Fn(&str) -> Option<Teardown>>;

struct Registered {
    name: &'static str,
    init: Initializer,
}

/// Strategy map from page id to initializers, plus initializers run on every
/// page.
#[derive(Default)]
pub struct InitializerRegistry {
    common: Vec<Registered>,
    pages: HashMap<String, Vec<Registered>>,
    active: RefCell<Vec<Teardown>>,
}

impl InitializerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an initializer run after every successful navigation.
    pub fn register_common<F>(&mut self, name: &'static str, init: F) -> &mut Self
    where
        F: Fn(&str) -> Option<Teardown> + 'static,
    {
        self.common.push(Registered {
            name,
            init: Box::new(init),
        });
        self
    }

    /// Registers an initializer run only after navigating to `page`.
    pub fn register<F>(&mut self, page: &str, name: &'static str, init: F) -> &mut Self
    where
        F: Fn(&str) -> Option<Teardown> + 'static,
    {
        self.pages.entry(page.to_string()).or_default().push(Registered {
            name,
            init: Box::new(init),
        });
        self
    }

    /// Runs and forgets the teardowns of the current page.
    pub fn teardown(&self) {
        let active = std::mem::take(&mut *self.active.borrow_mut());
        if !active.is_empty() {
            tracing::debug!(count = active.len(), "tearing down page initializers");
        }
        for teardown in active {
            teardown();
        }
    }

    /// Tears down the previous page, then runs the common and page-specific
    /// initializers for `page`. Returns how many initializers ran.
    pub fn run(&self, page: &str) -> usize {
        self.teardown();

        let specific = self.pages.get(page).map(Vec::as_slice).unwrap_or(&[]);
        let mut teardowns = Vec::new();
        for registered in self.common.iter().chain(specific) {
            tracing::debug!(page, initializer = registered.name, "running page initializer");
            if let Some(teardown) = (registered.init)(page) {
                teardowns.push(teardown);
            }
        }

        *self.active.borrow_mut() = teardowns;
        self.common.len() + specific.len()
    }

    /// Number of teardowns waiting for the next navigation.
    pub fn active_count(&self) -> usize {
        self.active.borrow().len()
    }

    pub fn has_page_initializers(&self, page: &str) -> bool {
        self.pages.get(page).is_some_and(|list| !list.is_empty())
    }
}
