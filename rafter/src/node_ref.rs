use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Imperative requests a handle queues for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Focus(String),
    Blur(String),
}

/// Commands waiting for the host, shared by every bound [`NodeRef`].
#[derive(Debug, Clone, Default)]
pub(crate) struct CommandQueue {
    commands: Rc<RefCell<Vec<Command>>>,
}

impl CommandQueue {
    pub(crate) fn push(&self, command: Command) {
        self.commands.borrow_mut().push(command);
    }

    pub(crate) fn drain(&self) -> Vec<Command> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }
}

#[derive(Debug)]
struct Binding {
    id: String,
    queue: CommandQueue,
}

/// Handle to a mounted element.
///
/// Attach it to a [`Node`](crate::Node) during render; the host binds it to
/// that element on commit and unbinds it once a render stops producing the
/// element or the component unmounts. While unbound every imperative call is
/// a no-op.
#[derive(Clone, Default)]
pub struct NodeRef {
    binding: Rc<RefCell<Option<Binding>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.binding.borrow().is_some()
    }

    /// Id of the element this handle is bound to.
    pub fn id(&self) -> Option<String> {
        self.binding.borrow().as_ref().map(|b| b.id.clone())
    }

    /// Ask the host to move keyboard focus to the element.
    ///
    /// Returns false, and does nothing else, when the element is not mounted.
    pub fn focus(&self) -> bool {
        self.request(Command::Focus)
    }

    /// Ask the host to take focus away from the element if it has it.
    pub fn blur(&self) -> bool {
        self.request(Command::Blur)
    }

    fn request(&self, command: fn(String) -> Command) -> bool {
        match self.binding.borrow().as_ref() {
            Some(binding) => {
                binding.queue.push(command(binding.id.clone()));
                true
            }
            None => {
                log::trace!("[node_ref] ignoring request on unmounted element");
                false
            }
        }
    }

    pub(crate) fn bind(&self, id: String, queue: CommandQueue) {
        *self.binding.borrow_mut() = Some(Binding { id, queue });
    }

    pub(crate) fn unbind(&self) {
        self.binding.borrow_mut().take();
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.id()).finish()
    }
}
