// Chain of Responsibility: mock responses for UI tests.
//
// A request is a URL used purely as a lookup key. Dynamic mocks are asked
// first, then static ones, then the defaults; the first responder that knows
// the key answers and the rest of the chain is never consulted.

use std::collections::HashMap;

use crate::harness::{Pattern, Suite};

pub type Json = String;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responder {
    name: String,
    responses: HashMap<String, Json>,
}

impl Responder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: HashMap::new(),
        }
    }

    pub fn with_response(mut self, request: impl Into<String>, response: impl Into<Json>) -> Self {
        self.insert(request, response);
        self
    }

    pub fn insert(&mut self, request: impl Into<String>, response: impl Into<Json>) {
        self.responses.insert(request.into(), response.into());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Answer from this responder's own table only.
    pub fn handle(&self, request: &str) -> Option<&str> {
        self.responses.get(request).map(String::as_str)
    }
}

/// Ask each handler in order; the first one with an answer wins.
pub fn handle<'a>(handlers: &'a [Responder], request: &str) -> Option<&'a str> {
    first_answer(handlers.iter(), request)
}

fn first_answer<'a>(
    mut links: impl Iterator<Item = &'a Responder>,
    request: &str,
) -> Option<&'a str> {
    let answer =
        links.find_map(|responder| responder.handle(request).map(|json| (responder.name(), json)));

    match answer {
        Some((name, json)) => {
            tracing::debug!(request, responder = name, "request handled");
            Some(json)
        }
        None => {
            tracing::debug!(request, "no responder in the chain knows this request");
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponderChain {
    links: Vec<Responder>,
}

impl ResponderChain {
    pub fn new(links: Vec<Responder>) -> Self {
        Self { links }
    }

    /// Append a fallback behind the current last link.
    pub fn push(&mut self, responder: Responder) {
        self.links.push(responder);
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn handle(&self, request: &str) -> Option<&str> {
        handle(&self.links, request)
    }
}

// ============================================================================
// UI test container
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct UiTestContainer {
    pub dynamic_tests: Option<Responder>,
    pub static_tests: Option<Responder>,
    pub default_tests: Option<Responder>,
}

impl UiTestContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The installed responders in lookup order.
    pub fn chain(&self) -> impl Iterator<Item = &Responder> {
        [&self.dynamic_tests, &self.static_tests, &self.default_tests]
            .into_iter()
            .flatten()
    }

    pub fn handle(&self, request: &str) -> Option<&str> {
        first_answer(self.chain(), request)
    }
}

fn demo_container() -> UiTestContainer {
    UiTestContainer {
        dynamic_tests: Some(
            Responder::new("dynamic")
                .with_response("https://google/wallet", "300")
                .with_response("https://google/discount", "200"),
        ),
        static_tests: Some(
            Responder::new("static")
                .with_response("https://google/apply", "300")
                .with_response("https://google/wallet", "200"),
        ),
        default_tests: Some(
            Responder::new("default")
                .with_response("https://google/apply", "200")
                .with_response("https://google/translate", "500"),
        ),
    }
}

pub fn demo_suite() -> Suite {
    let mut suite = Suite::new(Pattern::ChainOfResponsibility);
    let container = demo_container();

    suite.check_eq("wallet from dynamic", container.handle("https://google/wallet"), Some("300"));
    suite.check_eq("discount from dynamic", container.handle("https://google/discount"), Some("200"));
    suite.check_eq("apply from static", container.handle("https://google/apply"), Some("300"));
    suite.check_eq("translate from default", container.handle("https://google/translate"), Some("500"));
    suite.check_eq("unknown request", container.handle("https://google/maps"), None);

    suite
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_while<T>(f: impl FnOnce() -> T) -> (T, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, f);
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        (result, output)
    }

    fn demo_chain() -> ResponderChain {
        let container = demo_container();
        ResponderChain::new(container.chain().cloned().collect())
    }

    #[test]
    fn test_container_logs_which_responder_answered() {
        let container = demo_container();

        let (answer, output) = logged_while(|| container.handle("https://google/wallet"));
        assert_eq!(answer, Some("300"));
        assert!(output.contains("request handled"), "{output}");
        assert!(output.contains("dynamic"), "{output}");

        let (answer, output) = logged_while(|| container.handle("https://google/absent"));
        assert_eq!(answer, None);
        assert!(output.contains("no responder in the chain knows this request"), "{output}");
    }

    #[test]
    fn test_nearest_handler_wins() {
        let chain = demo_chain();
        assert_eq!(chain.handle("https://google/wallet"), Some("300"));
        assert_eq!(chain.handle("https://google/discount"), Some("200"));
        assert_eq!(chain.handle("https://google/apply"), Some("300"));
        assert_eq!(chain.handle("https://google/translate"), Some("500"));
    }

    #[test]
    fn test_exhausted_chain_returns_none() {
        assert_eq!(demo_chain().handle("https://google/maps"), None);
        assert_eq!(ResponderChain::default().handle("https://google/wallet"), None);
    }

    #[test]
    fn test_single_responder_only_sees_own_table() {
        let responder = Responder::new("static").with_response("https://google/apply", "300");
        assert_eq!(responder.handle("https://google/apply"), Some("300"));
        assert_eq!(responder.handle("https://google/translate"), None);
    }

    #[test]
    fn test_push_adds_fallback() {
        let mut chain = ResponderChain::new(vec![Responder::new("empty")]);
        assert_eq!(chain.handle("key"), None);

        chain.push(Responder::new("fallback").with_response("key", "{}"));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.handle("key"), Some("{}"));
    }

    #[test]
    fn test_container_skips_missing_slots() {
        let mut container = demo_container();
        container.static_tests = None;

        assert_eq!(container.handle("https://google/apply"), Some("200"));
        assert_eq!(container.chain().count(), 2);
    }

    #[test]
    fn test_empty_container() {
        let container = UiTestContainer::new();
        assert_eq!(container.handle("https://google/wallet"), None);
    }

    #[test]
    fn test_demo_suite_passes() {
        assert!(demo_suite().is_success());
    }
}
