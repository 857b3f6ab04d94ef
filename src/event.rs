// Rawhook Event Dispatch
// Subscriber fan-out and the bounded queue hand-off to the host loop

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::warn;
use parking_lot::RwLock;

use crate::key::RawKey;

/// Key edge direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Press,
    Release,
}

/// A decoded key edge, as delivered through an [`EventQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: RawKey,
    pub action: Action,
}

/// Handle returned by a subscription; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerToken {
    action: Action,
    id: u64,
}

type Callback = Box<dyn Fn(RawKey) + Send + Sync>;

/// Multicast notification hub.
///
/// Listeners run synchronously on the OS dispatch thread and must not
/// block, subscribe or unsubscribe from within a callback; queues decouple
/// listeners that need the host thread. Invocation order across listeners
/// is unspecified.
#[derive(Default)]
pub(crate) struct Dispatcher {
    next_id: AtomicU64,
    down: RwLock<Vec<(u64, Callback)>>,
    up: RwLock<Vec<(u64, Callback)>>,
    queues: RwLock<Vec<Sender<KeyEvent>>>,
}

impl Dispatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn subscribe(
        &self,
        action: Action,
        callback: impl Fn(RawKey) + Send + Sync + 'static,
    ) -> ListenerToken {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners(action).write().push((id, Box::new(callback)));
        ListenerToken { action, id }
    }

    /// Remove a previously registered listener. Returns `false` when the
    /// token was already removed.
    pub(crate) fn unsubscribe(&self, token: ListenerToken) -> bool {
        let mut listeners = self.listeners(token.action).write();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != token.id);
        listeners.len() != before
    }

    /// Open a bounded queue that receives every key edge. The dispatch
    /// side never blocks: when the host falls behind, events are dropped.
    pub(crate) fn open_queue(&self, capacity: usize) -> EventQueue {
        let (tx, rx) = bounded(capacity);
        self.queues.write().push(tx);
        EventQueue { rx }
    }

    pub(crate) fn notify(&self, key: RawKey, action: Action) {
        for (_, callback) in self.listeners(action).read().iter() {
            callback(key);
        }
        self.push_to_queues(KeyEvent { key, action });
    }

    fn listeners(&self, action: Action) -> &RwLock<Vec<(u64, Callback)>> {
        match action {
            Action::Press => &self.down,
            Action::Release => &self.up,
        }
    }

    fn push_to_queues(&self, event: KeyEvent) {
        let mut dead = Vec::new();
        for (index, queue) in self.queues.read().iter().enumerate() {
            match queue.try_send(event) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!("event queue full, dropping {:?} {:?}", event.key, event.action);
                }
                Err(TrySendError::Disconnected(_)) => dead.push(index),
            }
        }
        if !dead.is_empty() {
            // Only the dispatch path sends and open_queue only appends, so
            // the recorded indices are still valid here.
            let mut queues = self.queues.write();
            for index in dead.into_iter().rev() {
                if index < queues.len() {
                    queues.remove(index);
                }
            }
        }
    }
}

/// Receiving end of the bounded hand-off channel.
///
/// The host drains it once per tick of its own loop; dropping the queue
/// detaches it from the dispatcher.
pub struct EventQueue {
    rx: Receiver<KeyEvent>,
}

impl EventQueue {
    pub fn try_recv(&self) -> Option<KeyEvent> {
        self.rx.try_recv().ok()
    }

    /// Take everything currently buffered.
    pub fn drain(&self) -> Vec<KeyEvent> {
        self.rx.try_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
