// Singleton, without the global.
//
// `AppContext` is constructed once by the caller and passed to whoever needs
// the color store. Every handle it hands out points at the same store, so the
// behavior matches a singleton (one instance, last writer wins) while tests
// stay free to build as many isolated contexts as they like.

use std::cell::RefCell;
use std::rc::Rc;

use crate::harness::{Pattern, Suite};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorStore {
    colors: Vec<String>,
}

/// Cheap, cloneable handle to a shared [`ColorStore`].
#[derive(Debug, Clone, Default)]
pub struct ColorStoreHandle(Rc<RefCell<ColorStore>>);

impl ColorStoreHandle {
    /// Replaces the stored list.
    pub fn write_to_db<I, S>(&self, colors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        tracing::debug!(?colors, "color store overwritten");
        self.0.borrow_mut().colors = colors;
    }

    pub fn read_from_db(&self) -> Vec<String> {
        self.0.borrow().colors.clone()
    }

    pub fn same_instance(&self, other: &ColorStoreHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Default)]
pub struct AppContext {
    colors: ColorStoreHandle,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_store(&self) -> ColorStoreHandle {
        self.colors.clone()
    }
}

/// Two independent clients writing through the same context.
fn make_client_code(context: &AppContext) -> (ColorStoreHandle, ColorStoreHandle) {
    let nick = context.color_store();
    let mike = context.color_store();

    nick.write_to_db(["red", "white"]);
    mike.write_to_db(["green", "black"]);

    (nick, mike)
}

pub fn demo_suite() -> Suite {
    let mut suite = Suite::new(Pattern::Singleton);
    let context = AppContext::new();

    let (nick, mike) = make_client_code(&context);
    let expected = vec!["green".to_string(), "black".to_string()];

    suite.check("both clients share one instance", nick.same_instance(&mike));
    suite.check_eq("nick reads last write", nick.read_from_db(), expected.clone());
    suite.check_eq("mike reads last write", mike.read_from_db(), expected);

    suite
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_identical() {
        let context = AppContext::new();
        let (nick, mike) = make_client_code(&context);
        assert!(nick.same_instance(&mike));
        assert!(nick.same_instance(&context.color_store()));
    }

    #[test]
    fn test_last_writer_wins() {
        let context = AppContext::new();
        let (nick, mike) = make_client_code(&context);

        assert_eq!(nick.read_from_db(), vec!["green", "black"]);
        assert_eq!(mike.read_from_db(), vec!["green", "black"]);

        nick.write_to_db(Vec::<String>::new());
        assert!(mike.read_from_db().is_empty());
    }

    #[test]
    fn test_contexts_are_isolated() {
        let first = AppContext::new();
        let second = AppContext::new();

        first.color_store().write_to_db(["blue"]);

        assert!(!first.color_store().same_instance(&second.color_store()));
        assert!(second.color_store().read_from_db().is_empty());
    }

    #[test]
    fn test_demo_suite_passes() {
        assert!(demo_suite().is_success());
    }
}
