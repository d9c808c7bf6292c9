use std::sync::mpsc::{Receiver, Sender, channel};

/// Pages the host can navigate to. Only the category index triggers a
/// rebuild; everything else is carried for logging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageKind {
    CategoryIndex,
    Other(String),
}

impl PageKind {
    pub fn is_category_index(&self) -> bool {
        matches!(self, PageKind::CategoryIndex)
    }
}

/// Notifications the host fires at the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// Navigation settled on a new page.
    PageChanged { page: PageKind },
    /// The user's locale changed; payload-free by contract.
    LocaleChanged,
    /// The host finished a render pass; deferred work may now touch the DOM.
    RenderSettled,
    /// The page/stream is being torn down.
    Teardown,
}

pub struct Bus {
    pub evt_tx: Sender<HostEvent>,
    pub evt_rx: Receiver<HostEvent>,
}

impl Bus {
    pub fn new() -> Self {
        let (evt_tx, evt_rx) = channel();
        Bus { evt_tx, evt_rx }
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_arrive_in_send_order() {
        let bus = Bus::new();
        bus.evt_tx
            .send(HostEvent::PageChanged {
                page: PageKind::CategoryIndex,
            })
            .unwrap();
        bus.evt_tx.send(HostEvent::RenderSettled).unwrap();

        assert_eq!(
            bus.evt_rx.try_recv().unwrap(),
            HostEvent::PageChanged {
                page: PageKind::CategoryIndex
            }
        );
        assert_eq!(bus.evt_rx.try_recv().unwrap(), HostEvent::RenderSettled);
        assert!(bus.evt_rx.try_recv().is_err());
    }

    #[test]
    fn page_kind_recognition() {
        assert!(PageKind::CategoryIndex.is_category_index());
        assert!(!PageKind::Other("/t/42".to_string()).is_category_index());
    }
}
