use crate::config::SectionsConfig;
use crate::markers::PROCESSED_ATTR;
use crate::page::{HostServices, PageState};
use crate::reconcile::rebuild;
use bus::HostEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Built,
}

/// Reacts to host notifications and schedules the pipeline.
///
/// Rebuild work never runs inside the notification that requested it: the
/// request sets a pending flag, and the host's render-settled notification is
/// the deferred callback that actually touches the DOM. Staleness is handled
/// by the container markers at run time, so back-to-back notifications for
/// the same locale collapse into one effective build.
pub struct Controller {
    cfg: SectionsConfig,
    phase: Phase,
    rebuild_pending: bool,
}

impl Controller {
    pub fn new(cfg: SectionsConfig) -> Self {
        Controller {
            cfg,
            phase: Phase::Idle,
            rebuild_pending: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &SectionsConfig {
        &self.cfg
    }

    pub fn handle(&mut self, event: &HostEvent, page: &mut PageState, host: &HostServices) {
        match event {
            HostEvent::PageChanged { page: kind } => {
                if !kind.is_category_index() {
                    page.set_loading(false);
                    self.rebuild_pending = false;
                    self.set_phase(Phase::Idle);
                    return;
                }
                page.set_loading(true);
                reset_processed(page);
                self.rebuild_pending = true;
                self.set_phase(Phase::Loading);
            }
            HostEvent::LocaleChanged => {
                reset_processed(page);
                page.set_loading(true);
                self.rebuild_pending = true;
                self.set_phase(Phase::Loading);
            }
            HostEvent::RenderSettled => {
                if !self.rebuild_pending {
                    return;
                }
                self.rebuild_pending = false;
                let outcome = rebuild(page, host, &self.cfg);
                self.set_phase(if outcome.mutated() {
                    Phase::Built
                } else {
                    Phase::Idle
                });
            }
            HostEvent::Teardown => {
                // a kept processed flag would suppress the next page's build
                reset_processed(page);
                page.set_loading(false);
                self.rebuild_pending = false;
                self.set_phase(Phase::Idle);
            }
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("section lifecycle: {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

fn reset_processed(page: &mut PageState) {
    if let Some(container) = page.container_mut() {
        container.set_attr(PROCESSED_ATTR, "false");
    }
}
