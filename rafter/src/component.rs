use crate::context::RenderContext;
use crate::node::Node;

/// A unit of UI with its own state.
///
/// Components build their [`State`](crate::State) from the
/// [`Scheduler`](crate::Scheduler) they are constructed with, so that any
/// write schedules the next render.
pub trait Component: 'static {
    /// Produce the current output. Called again whenever state is dirty.
    fn render(&self, cx: &mut RenderContext<'_>) -> Node;

    /// Called once, before the first render.
    fn on_mount(&self) {}

    /// Called once when the host drops the component.
    fn on_unmount(&self) {}
}
