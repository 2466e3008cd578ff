//! Scroll-to, host signals and teardown.

use scrollstack_common::{Event, PanelId, Point};
use tracing::debug;

use crate::animation::{AnimationTicket, Callback, Continuation, Transition};
use crate::host::StackHost;
use crate::scroll::{self, PendingScroll, ScrollResolution};

use super::ScrollStackController;

impl<H: StackHost> ScrollStackController<H> {
    /// Bring `panel` into view. Without a scrollable range or a measured
    /// frame the request waits for the next [`layout_completed`] signal,
    /// replacing any request already waiting. `on_complete` runs once the
    /// scroll animation finishes.
    ///
    /// [`layout_completed`]: Self::layout_completed
    pub fn scroll_to(&mut self, panel: PanelId, on_complete: Option<Callback>) {
        self.attempt_scroll(PendingScroll::new(panel, on_complete));
    }

    /// Signal from the host that a layout pass finished. Re-evaluates the
    /// pending scroll, parking it again if it still cannot resolve.
    pub fn layout_completed(&mut self) {
        if let Some(mut request) = self.scroll.take_pending() {
            request.attempts += 1;
            self.attempt_scroll(request);
        }
    }

    /// Signal from the host that the animation for `ticket` ended. Returns
    /// `false` for unknown or already reported tickets.
    pub fn animation_completed(&mut self, ticket: AnimationTicket, finished: bool) -> bool {
        let Some(continuation) = self.continuations.take(ticket) else {
            debug!(?ticket, "completion for unknown animation ignored");
            return false;
        };

        match continuation {
            Continuation::Visibility { on_complete } => {
                if finished {
                    run(on_complete);
                }
            }
            Continuation::Removal { panel, on_complete } => {
                // A show or insert during the fade, or a later removal, leaves
                // this ticket stale.
                if self.pending_removals.get(&panel) == Some(&ticket) {
                    self.detach(panel);
                    if finished {
                        run(on_complete);
                    }
                } else {
                    debug!(%panel, "removal was cancelled during fade");
                }
            }
            Continuation::Scroll {
                panel,
                offset,
                on_complete,
            } => {
                if finished {
                    self.publish(Event::ScrollCompleted { panel, offset });
                    run(on_complete);
                } else {
                    debug!(%panel, "scroll animation interrupted");
                }
            }
        }
        true
    }

    /// Drop the waiting scroll request without running its callback.
    pub fn cancel_pending_scroll(&mut self) -> bool {
        self.scroll.cancel()
    }

    /// Drop every pending continuation and the pending scroll. Panels stay
    /// where they are.
    pub fn teardown(&mut self) {
        let dropped = self.continuations.clear();
        let scroll = self.scroll.cancel();
        self.pending_removals.clear();
        debug!(stack = %self.id, dropped, scroll, "controller torn down");
    }

    fn attempt_scroll(&mut self, request: PendingScroll) {
        let resolution = scroll::resolve(
            &self.registry,
            &self.host,
            self.appearance.axis,
            request.panel,
        );
        match resolution {
            ScrollResolution::Direct(offset) | ScrollResolution::ViaContainer(offset) => {
                debug!(panel = %request.panel, ?resolution, "scroll resolved");
                self.apply_scroll(request, offset);
            }
            ScrollResolution::Deferred => {
                let panel = request.panel;
                debug!(%panel, attempts = request.attempts, "scroll deferred until next layout");
                if request.attempts == 0 {
                    self.publish(Event::ScrollDeferred(panel));
                }
                if let Some(replaced) = self.scroll.defer(request) {
                    debug!(panel = %replaced.panel, "superseded pending scroll dropped");
                }
            }
        }
    }

    fn apply_scroll(&mut self, request: PendingScroll, offset: Point) {
        let PendingScroll {
            panel, on_complete, ..
        } = request;

        if self.animation.animate_scroll {
            let from = self.host.content_offset();
            let ticket = self.continuations.park(Continuation::Scroll {
                panel,
                offset,
                on_complete,
            });
            self.host.animate(
                ticket,
                &Transition::ContentOffset { from, to: offset },
                &self.animation.scroll,
            );
        } else {
            self.host.set_content_offset(offset);
            self.publish(Event::ScrollCompleted { panel, offset });
            run(on_complete);
        }
    }
}

fn run(callback: Option<Callback>) {
    if let Some(callback) = callback {
        callback();
    }
}
