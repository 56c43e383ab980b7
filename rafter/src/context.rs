use crate::effect::PendingEffect;
use crate::state::Scheduler;

/// Passed to [`Component::render`](crate::Component::render).
///
/// Collects the effects a render registers so the host can run them once the
/// output has been committed.
pub struct RenderContext<'a> {
    scheduler: &'a Scheduler,
    effects: Vec<PendingEffect>,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(scheduler: &'a Scheduler) -> Self {
        Self {
            scheduler,
            effects: Vec::new(),
        }
    }

    /// Register a post-render effect.
    ///
    /// `f` runs after this render is committed, before the next event is
    /// handled, on the first render and on every later render whose `deps`
    /// compare unequal to the ones it last ran with. Effects are matched
    /// across renders by call order, so call this unconditionally.
    pub fn effect<D, F>(&mut self, deps: D, f: F)
    where
        D: PartialEq + 'static,
        F: FnOnce() + 'static,
    {
        self.effects.push(PendingEffect::new(deps, f));
    }

    pub fn scheduler(&self) -> &Scheduler {
        self.scheduler
    }

    pub(crate) fn into_effects(self) -> Vec<PendingEffect> {
        self.effects
    }
}
