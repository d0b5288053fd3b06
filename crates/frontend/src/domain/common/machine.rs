//! Tab state machine of an entity view.
//!
//! Exactly one tab is active. Entering a tab issues a [`FetchTicket`]; a
//! response is applied only while the view is mounted and its ticket carries
//! the latest generation, so a slow response for a tab the user already left
//! can never overwrite what is on screen.

use crate::shared::api::TabPayload;
use crate::shared::components::TabId;
use crate::shared::config::TabCachePolicy;
use crate::shared::error::FetchError;
use std::collections::HashMap;

/// What a tab currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    Pending,
    Ready(TabPayload),
    Failed(String),
}

/// Token a fetch carries back to its view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket<T> {
    pub tab: T,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub struct TabMachine<T: TabId> {
    active: T,
    policy: TabCachePolicy,
    generation: u64,
    mounted: bool,
    contents: HashMap<T, TabContent>,
}

impl<T: TabId> TabMachine<T> {
    pub fn new(policy: TabCachePolicy) -> Self {
        Self {
            active: T::initial(),
            policy,
            generation: 0,
            mounted: false,
            contents: HashMap::new(),
        }
    }

    pub fn active(&self) -> T {
        self.active
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Start accepting responses; returns the fetch for the initial tab
    pub fn mount(&mut self) -> FetchTicket<T> {
        self.mounted = true;
        self.issue(self.active)
    }

    /// Stop accepting responses; in-flight fetches resolve into nothing
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Move directly to `tab`. Returns the fetch to issue, if any.
    pub fn select(&mut self, tab: T) -> Option<FetchTicket<T>> {
        if tab == self.active {
            return None;
        }
        self.active = tab;

        let cached = matches!(self.contents.get(&tab), Some(TabContent::Ready(_)));
        if cached && self.policy == TabCachePolicy::CacheForView {
            return None;
        }
        Some(self.issue(tab))
    }

    /// Whether a response for `ticket` would still be applied
    pub fn accepts(&self, ticket: FetchTicket<T>) -> bool {
        self.mounted && ticket.generation == self.generation
    }

    /// Apply a finished fetch. Returns `false` when the response was dropped.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket<T>,
        result: Result<TabPayload, FetchError>,
    ) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        let content = match result {
            Ok(payload) => TabContent::Ready(payload),
            Err(err) => TabContent::Failed(err.to_string()),
        };
        self.contents.insert(ticket.tab, content);
        true
    }

    pub fn content(&self, tab: T) -> Option<&TabContent> {
        self.contents.get(&tab)
    }

    pub fn active_content(&self) -> Option<&TabContent> {
        self.content(self.active)
    }

    fn issue(&mut self, tab: T) -> FetchTicket<T> {
        self.generation += 1;
        self.contents.insert(tab, TabContent::Pending);
        FetchTicket {
            tab,
            generation: self.generation,
        }
    }
}
