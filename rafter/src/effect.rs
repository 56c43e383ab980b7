use std::any::Any;

/// An effect registered during render, waiting for the commit to finish.
pub(crate) struct PendingEffect {
    deps: Box<dyn Any>,
    same: fn(&dyn Any, &dyn Any) -> bool,
    run: Box<dyn FnOnce()>,
}

impl PendingEffect {
    pub(crate) fn new<D: PartialEq + 'static>(deps: D, run: impl FnOnce() + 'static) -> Self {
        Self {
            deps: Box::new(deps),
            same: same_deps::<D>,
            run: Box::new(run),
        }
    }
}

fn same_deps<D: PartialEq + 'static>(a: &dyn Any, b: &dyn Any) -> bool {
    match (a.downcast_ref::<D>(), b.downcast_ref::<D>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Remembers the dependencies each effect last ran with.
///
/// Effects are identified by the order they were registered in during render,
/// so a component must register the same effects in the same order every time.
/// An effect runs after its first commit and again whenever its dependencies
/// differ from the previous run.
#[derive(Default)]
pub struct EffectStore {
    last: Vec<Option<Box<dyn Any>>>,
}

impl EffectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of effect slots seen so far.
    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }

    /// Run every pending effect whose dependencies changed, in registration
    /// order. Returns how many ran.
    pub(crate) fn run(&mut self, pending: Vec<PendingEffect>) -> usize {
        if pending.len() != self.last.len() && !self.last.is_empty() {
            log::warn!(
                "[effect] effect count changed from {} to {}",
                self.last.len(),
                pending.len()
            );
        }
        if self.last.len() < pending.len() {
            self.last.resize_with(pending.len(), || None);
        }

        let mut ran = 0;
        for (index, effect) in pending.into_iter().enumerate() {
            let changed = match &self.last[index] {
                Some(previous) => !(effect.same)(previous.as_ref(), effect.deps.as_ref()),
                None => true,
            };
            if changed {
                log::trace!("[effect] running effect {index}");
                self.last[index] = Some(effect.deps);
                (effect.run)();
                ran += 1;
            }
        }
        ran
    }

    /// Forget every recorded dependency, as on unmount.
    pub fn clear(&mut self) {
        self.last.clear();
    }
}
