//! ViewModel for entity views

use super::entity::EntityKind;
use super::machine::{FetchTicket, TabContent, TabMachine};
use crate::shared::api::ApiClient;
use crate::shared::config::BrowserConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Entity reference plus the reactive tab machine of its view
#[derive(Clone)]
pub struct EntityVm<E: EntityKind> {
    pub entity: E,
    pub machine: RwSignal<TabMachine<E::Tab>>,
    client: ApiClient,
}

impl<E: EntityKind> EntityVm<E> {
    pub fn new(entity: E, config: &BrowserConfig) -> Self {
        Self {
            entity,
            machine: RwSignal::new(TabMachine::new(config.tab_cache)),
            client: ApiClient::new(config),
        }
    }

    /// Mount the view and fetch its initial tab
    pub fn mount(&self) {
        if let Some(ticket) = self.machine.try_update(|m| m.mount()) {
            self.spawn_fetch(ticket);
        }
    }

    pub fn unmount(&self) {
        self.machine.try_update_untracked(|m| m.unmount());
    }

    /// Change notification from the view switch
    pub fn select(&self, tab: E::Tab) {
        if let Some(ticket) = self.machine.try_update(|m| m.select(tab)).flatten() {
            self.spawn_fetch(ticket);
        }
    }

    pub fn active_tab(&self) -> Signal<E::Tab> {
        let machine = self.machine;
        Signal::derive(move || machine.with(|m| m.active()))
    }

    /// Active tab with its content; only changes when either does
    pub fn active_view(&self) -> Memo<(E::Tab, Option<TabContent>)> {
        let machine = self.machine;
        Memo::new(move |_| machine.with(|m| (m.active(), m.active_content().cloned())))
    }

    fn spawn_fetch(&self, ticket: FetchTicket<E::Tab>) {
        let endpoint = self.entity.endpoint(ticket.tab);
        let machine = self.machine;
        let client = self.client.clone();

        spawn_local(async move {
            let result = client.fetch_tab(&endpoint).await;
            if let Err(err) = &result {
                log::warn!("{} failed: {}", endpoint.path(), err);
            }

            // disposed signal means the view was navigated away from
            let accepted = machine
                .try_with_untracked(|m| m.accepts(ticket))
                .unwrap_or(false);
            if accepted {
                machine.update(|m| {
                    m.resolve(ticket, result);
                });
            } else {
                log::debug!("dropping stale response from {}", endpoint.path());
            }
        });
    }
}
