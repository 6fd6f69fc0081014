// Observer: a news feed pushes its counter to every subscribed channel.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use uuid::Uuid;

use crate::harness::{Pattern, Suite};

pub trait Observer {
    fn post(&self, value: Option<i64>);
}

/// Identity of one subscription. Subscribing the same observer twice yields
/// two independent ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ============================================================================
// Subject
// ============================================================================

#[derive(Default)]
pub struct NewsFeed {
    news_count: Cell<Option<i64>>,
    observers: RefCell<Vec<(SubscriptionId, Rc<dyn Observer>)>>,
}

impl NewsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn news_count(&self) -> Option<i64> {
        self.news_count.get()
    }

    /// Store the new value and push it to every subscriber before returning.
    pub fn set_news_count(&self, value: i64) {
        self.news_count.set(Some(value));
        self.notify_observers();
    }

    pub fn subscribe(&self, observer: Rc<dyn Observer>) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.observers.borrow_mut().push((id, observer));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|(sub, _)| *sub == id) {
            Some(index) => {
                observers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Push the current value to the subscribers registered right now.
    ///
    /// The list is copied first, so an observer may subscribe or unsubscribe
    /// from inside `post`; the change applies from the next pass on.
    pub fn notify_observers(&self) {
        let snapshot: Vec<Rc<dyn Observer>> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();

        let value = self.news_count.get();
        tracing::debug!(?value, subscribers = snapshot.len(), "notifying observers");
        for observer in snapshot {
            observer.post(value);
        }
    }
}

impl fmt::Debug for NewsFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsFeed")
            .field("news_count", &self.news_count.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

// ============================================================================
// Subscribers
// ============================================================================

#[derive(Debug)]
pub struct ChannelFeed {
    channel: String,
    news_count: Cell<Option<i64>>,
}

impl ChannelFeed {
    pub fn new(channel: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            channel: channel.into(),
            news_count: Cell::new(None),
        })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Last value received, `None` before the first push.
    pub fn news_count(&self) -> Option<i64> {
        self.news_count.get()
    }
}

impl Observer for ChannelFeed {
    fn post(&self, value: Option<i64>) {
        self.news_count.set(value);
    }
}

pub fn demo_suite() -> Suite {
    let mut suite = Suite::new(Pattern::Observer);

    let feed = NewsFeed::new();
    let telegram = ChannelFeed::new("telegram");
    let youtube = ChannelFeed::new("youtube");
    let telegram_id = feed.subscribe(telegram.clone());
    feed.subscribe(youtube.clone());

    feed.set_news_count(10);
    suite.check_eq("telegram receives 10", telegram.news_count(), Some(10));
    suite.check_eq("youtube receives 10", youtube.news_count(), Some(10));

    suite.check("telegram unsubscribed", feed.unsubscribe(telegram_id));
    feed.set_news_count(20);
    suite.check_eq("telegram keeps 10", telegram.news_count(), Some(10));
    suite.check_eq("youtube receives 20", youtube.news_count(), Some(20));

    suite
}
