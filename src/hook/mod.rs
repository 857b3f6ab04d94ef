// Rawhook Hook Manager
// Lifecycle, dispatch pipeline, focus gate and interception policy

pub mod args;
pub(crate) mod decode;
#[cfg(target_os = "windows")]
pub(crate) mod native;

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::{Mutex, RwLock};
use smallvec::SmallVec;

use crate::event::{Action, Dispatcher, EventQueue, ListenerToken};
use crate::key::{CodeSpace, KeyFormat, RawKey};
use crate::settings::HookSettings;
use crate::state::PressedSet;
use args::{KeyboardArgs, MouseArgs};
use decode::MouseDecoded;

/// Which interception points [`RawInputHook::start`] installs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookMode {
    /// Thread-local hooks scoped to the calling thread's input queue; only
    /// see events while the host window has focus, and only report packed
    /// virtual codes.
    Foreground,
    /// Low-level global hooks that observe the whole system and carry full
    /// keyboard/mouse event structures.
    Background,
}

impl HookMode {
    pub fn from_work_in_background(work_in_background: bool) -> Self {
        if work_in_background {
            HookMode::Background
        } else {
            HookMode::Foreground
        }
    }

    pub fn work_in_background(self) -> bool {
        matches!(self, HookMode::Background)
    }

    /// The code space each hook family reliably reports.
    pub fn code_space(self) -> CodeSpace {
        match self {
            HookMode::Background => CodeSpace::Scan,
            HookMode::Foreground => CodeSpace::Virtual,
        }
    }
}

/// What the hook callback tells the OS to do with an observed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookDecision {
    /// Hand the event to the next hook in the chain.
    Forward,
    /// Consume the event; the rest of the system never sees it.
    Swallow,
}

#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("hook service is already running")]
    AlreadyRunning,
    #[error("failed to install {device} hook: {detail}")]
    Install { device: &'static str, detail: String },
    #[error("OS-level input hooks are not supported on this platform")]
    Unsupported,
}

/// Opaque native hook handle; 0 is the null handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookHandle(isize);

impl HookHandle {
    pub const NULL: HookHandle = HookHandle(0);

    pub fn from_raw(raw: isize) -> Self {
        HookHandle(raw)
    }

    pub fn as_raw(self) -> isize {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// The installed interception points, released as a unit on stop.
pub type HookHandles = SmallVec<[HookHandle; 2]>;

/// Installation strategy seam between the service and the OS.
///
/// `install` pushes every handle it acquires into `handles` before
/// reporting failure, so a partially successful installation stays
/// revocable through [`RawInputHook::stop`].
pub trait HookBackend: Send {
    fn install(&mut self, mode: HookMode, handles: &mut HookHandles) -> Result<(), HookError>;
    fn remove(&mut self, handles: &mut HookHandles);
}

/// Backend that installs nothing and always succeeds.
///
/// For tests and headless hosts that feed the pipeline through the
/// `handle_*` entry points instead of real OS callbacks.
#[derive(Debug, Default)]
pub struct NullBackend;

impl HookBackend for NullBackend {
    fn install(&mut self, _mode: HookMode, _handles: &mut HookHandles) -> Result<(), HookError> {
        Ok(())
    }

    fn remove(&mut self, handles: &mut HookHandles) {
        handles.clear();
    }
}

#[cfg(target_os = "windows")]
fn default_backend() -> Box<dyn HookBackend> {
    Box::new(native::WindowsBackend::new())
}

#[cfg(not(target_os = "windows"))]
fn default_backend() -> Box<dyn HookBackend> {
    struct UnsupportedBackend;

    impl HookBackend for UnsupportedBackend {
        fn install(&mut self, _: HookMode, _: &mut HookHandles) -> Result<(), HookError> {
            Err(HookError::Unsupported)
        }

        fn remove(&mut self, handles: &mut HookHandles) {
            handles.clear();
        }
    }

    Box::new(UnsupportedBackend)
}

const STOPPED: u8 = 0;
const STARTING: u8 = 1;
const RUNNING: u8 = 2;
const STOPPING: u8 = 3;

type FocusProbe = Arc<dyn Fn() -> bool + Send + Sync>;

fn default_focus_probe() -> bool {
    #[cfg(target_os = "windows")]
    {
        native::host_has_focus()
    }
    #[cfg(not(target_os = "windows"))]
    {
        true
    }
}

/// State shared between the service handle and the native callbacks.
///
/// Everything the per-event path touches is either an atomic flag or sits
/// behind a short-lived lock; the callbacks run on the OS input-dispatch
/// thread and must return quickly.
pub(crate) struct SharedState {
    status: AtomicU8,
    background: AtomicBool,
    intercept: AtomicBool,
    disable_intercept: AtomicU32,
    pressed: Mutex<PressedSet>,
    dispatcher: Dispatcher,
    focus: RwLock<FocusProbe>,
}

impl SharedState {
    fn new() -> Self {
        Self {
            status: AtomicU8::new(STOPPED),
            background: AtomicBool::new(false),
            intercept: AtomicBool::new(false),
            disable_intercept: AtomicU32::new(0),
            pressed: Mutex::new(PressedSet::new()),
            dispatcher: Dispatcher::new(),
            focus: RwLock::new(Arc::new(default_focus_probe)),
        }
    }

    fn running(&self) -> bool {
        self.status.load(Ordering::SeqCst) == RUNNING
    }

    fn gate_allows(&self) -> bool {
        self.background.load(Ordering::Relaxed) || (self.focus.read())()
    }

    fn decision(&self) -> HookDecision {
        if self.intercept.load(Ordering::Relaxed) {
            HookDecision::Swallow
        } else {
            HookDecision::Forward
        }
    }

    fn process(&self, key: RawKey, action: Action) {
        match action {
            Action::Press => {
                if self.pressed.lock().mark_down(key) {
                    self.dispatcher.notify(key, Action::Press);
                }
            }
            Action::Release => {
                self.pressed.lock().mark_up(key);
                self.dispatcher.notify(key, Action::Release);
                // Safety valve: releasing the configured key while
                // interception is on always restores normal routing, so a
                // host bug cannot lock the user out of their input device.
                if self.intercept.load(Ordering::Relaxed)
                    && key.raw_value() != 0
                    && self.disable_intercept.load(Ordering::Relaxed) == key.raw_value()
                {
                    self.intercept.store(false, Ordering::Relaxed);
                    warn!("interception force-disabled by release of {key}");
                }
            }
        }
    }

    pub(crate) fn handle_low_level_keyboard(
        &self,
        code: i32,
        wparam: u32,
        kbd: &KeyboardArgs,
    ) -> HookDecision {
        if code < 0 || !self.running() {
            return HookDecision::Forward;
        }
        let Some((key, action)) = decode::keyboard_low_level(wparam, kbd) else {
            return HookDecision::Forward;
        };
        if !self.gate_allows() {
            return HookDecision::Forward;
        }
        self.process(key, action);
        self.decision()
    }

    pub(crate) fn handle_thread_keyboard(
        &self,
        code: i32,
        wparam: u32,
        lparam: isize,
    ) -> HookDecision {
        if code < 0 || !self.running() {
            return HookDecision::Forward;
        }
        let (key, action) = decode::keyboard_thread(wparam, lparam);
        if !self.gate_allows() {
            return HookDecision::Forward;
        }
        self.process(key, action);
        self.decision()
    }

    pub(crate) fn handle_mouse(&self, code: i32, wparam: u32, mouse: &MouseArgs) -> HookDecision {
        if code < 0 || !self.running() {
            return HookDecision::Forward;
        }
        match decode::mouse(wparam, mouse) {
            MouseDecoded::PassThrough => HookDecision::Forward,
            MouseDecoded::Button { key, action } => {
                if !self.gate_allows() {
                    return HookDecision::Forward;
                }
                self.process(key, action);
                self.decision()
            }
            MouseDecoded::Wheel { key } => {
                if !self.gate_allows() {
                    return HookDecision::Forward;
                }
                // Wheel detents have no held state; report an immediate
                // press+release pair.
                self.process(key, Action::Press);
                self.process(key, Action::Release);
                self.decision()
            }
        }
    }
}

/// System-wide raw input service.
///
/// Owns the hook handles, the pressed-key set and the subscriber registry;
/// all state is acquired by [`start`](Self::start) and released by
/// [`stop`](Self::stop). `start`/`stop` are meant to be driven from a
/// single control thread, and on Windows that thread must pump a message
/// loop while hooks are installed.
pub struct RawInputHook {
    shared: Arc<SharedState>,
    backend: Mutex<Box<dyn HookBackend>>,
    handles: Mutex<HookHandles>,
}

impl RawInputHook {
    /// Service with the platform's native backend.
    pub fn new() -> Self {
        Self::with_backend_boxed(default_backend())
    }

    /// Service with a custom installation backend.
    pub fn with_backend(backend: impl HookBackend + 'static) -> Self {
        Self::with_backend_boxed(Box::new(backend))
    }

    fn with_backend_boxed(backend: Box<dyn HookBackend>) -> Self {
        Self {
            shared: Arc::new(SharedState::new()),
            backend: Mutex::new(backend),
            handles: Mutex::new(HookHandles::new()),
        }
    }

    /// Install the keyboard and mouse interception points.
    ///
    /// Fails fast with [`HookError::AlreadyRunning`] unless the service is
    /// stopped. When one of the two installations fails the other's handle
    /// is kept until an explicit [`stop`](Self::stop), so a half-started
    /// service is still fully revocable.
    pub fn start(&self, mode: HookMode) -> Result<(), HookError> {
        if self
            .shared
            .status
            .compare_exchange(STOPPED, STARTING, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(HookError::AlreadyRunning);
        }
        self.shared
            .background
            .store(mode.work_in_background(), Ordering::SeqCst);

        #[cfg(target_os = "windows")]
        if !native::try_set_active(&self.shared) {
            self.shared.status.store(STOPPED, Ordering::SeqCst);
            return Err(HookError::AlreadyRunning);
        }

        let mut handles = self.handles.lock();
        match self.backend.lock().install(mode, &mut handles) {
            Ok(()) => {
                self.shared.status.store(RUNNING, Ordering::SeqCst);
                debug!("input hooks installed (mode {mode:?})");
                Ok(())
            }
            Err(err) => {
                if handles.is_empty() {
                    #[cfg(target_os = "windows")]
                    native::clear_active(&self.shared);
                    self.shared.status.store(STOPPED, Ordering::SeqCst);
                } else {
                    // Partial install: stay formally running so the held
                    // handle keeps routing through stop().
                    self.shared.status.store(RUNNING, Ordering::SeqCst);
                    warn!("partial hook installation: {err}");
                }
                Err(err)
            }
        }
    }

    /// Start from a settings snapshot, applying the interception flags
    /// before the hooks go live.
    pub fn start_with_settings(&self, settings: &HookSettings) -> Result<(), HookError> {
        self.configure(settings);
        self.start(HookMode::from_work_in_background(settings.work_in_background))
    }

    /// Remove the hooks, clear the pressed set and return to the stopped
    /// state. Safe to call any number of times, running or not.
    pub fn stop(&self) {
        let prev = self.shared.status.swap(STOPPING, Ordering::SeqCst);
        if prev == STOPPED {
            self.shared.status.store(STOPPED, Ordering::SeqCst);
            return;
        }
        let mut handles = self.handles.lock();
        self.backend.lock().remove(&mut handles);
        handles.clear();
        #[cfg(target_os = "windows")]
        native::clear_active(&self.shared);
        self.shared.pressed.lock().clear();
        self.shared.status.store(STOPPED, Ordering::SeqCst);
        debug!("input hooks removed");
    }

    pub fn is_running(&self) -> bool {
        self.shared.running()
    }

    /// Whether the global hook family was selected at the last start.
    pub fn work_in_background(&self) -> bool {
        self.shared.background.load(Ordering::Relaxed)
    }

    pub fn any_key_down(&self) -> bool {
        self.shared.pressed.lock().any_down()
    }

    pub fn is_key_down(&self, key: RawKey) -> bool {
        self.shared.pressed.lock().is_down(key)
    }

    /// Snapshot of the identities currently held down.
    pub fn pressed_keys(&self) -> Vec<RawKey> {
        self.shared.pressed.lock().snapshot()
    }

    /// Whether handled events are being swallowed.
    pub fn intercept_messages(&self) -> bool {
        self.shared.intercept.load(Ordering::Relaxed)
    }

    /// Live-effective: the next callback already observes the new value.
    pub fn set_intercept_messages(&self, intercept: bool) {
        self.shared.intercept.store(intercept, Ordering::Relaxed);
    }

    pub fn disable_intercept_key(&self) -> Option<RawKey> {
        let raw = self.shared.disable_intercept.load(Ordering::Relaxed);
        (raw != 0).then(|| RawKey::from_raw_value(raw))
    }

    /// Configure the safety-valve key; releasing it while interception is
    /// active force-disables interception.
    pub fn set_disable_intercept_key(&self, key: Option<RawKey>) {
        let raw = key.map(RawKey::raw_value).unwrap_or(0);
        self.shared.disable_intercept.store(raw, Ordering::Relaxed);
    }

    /// Apply the runtime-changeable flags from a settings snapshot.
    pub fn configure(&self, settings: &HookSettings) {
        self.set_intercept_messages(settings.intercept_messages);
        self.set_disable_intercept_key(settings.disable_intercept_key);
    }

    /// Replace the focus probe consulted by the gate. The default asks the
    /// OS whether the foreground window belongs to this process.
    pub fn set_focus_predicate(&self, probe: impl Fn() -> bool + Send + Sync + 'static) {
        *self.shared.focus.write() = Arc::new(probe);
    }

    /// Subscribe to down edges. Callbacks run on the OS dispatch thread
    /// and must not block; use [`event_queue`](Self::event_queue) for work
    /// that belongs on the host thread.
    pub fn on_key_down(&self, callback: impl Fn(RawKey) + Send + Sync + 'static) -> ListenerToken {
        self.shared.dispatcher.subscribe(Action::Press, callback)
    }

    /// Subscribe to up edges.
    pub fn on_key_up(&self, callback: impl Fn(RawKey) + Send + Sync + 'static) -> ListenerToken {
        self.shared.dispatcher.subscribe(Action::Release, callback)
    }

    pub fn unsubscribe(&self, token: ListenerToken) -> bool {
        self.shared.dispatcher.unsubscribe(token)
    }

    /// Open a bounded queue carrying every key edge to the host loop.
    pub fn event_queue(&self, capacity: usize) -> EventQueue {
        self.shared.dispatcher.open_queue(capacity)
    }

    /// Render a key the way the active hook family reports it: scan
    /// oriented in background mode, virtual-code oriented otherwise.
    pub fn format_key(&self, key: RawKey, format: KeyFormat) -> String {
        let space = HookMode::from_work_in_background(self.work_in_background()).code_space();
        key.display(format, space)
    }

    /// Dispatch entry for low-level keyboard callbacks; also the synthetic
    /// injection point used by tests and host self-checks.
    pub fn handle_low_level_keyboard(
        &self,
        code: i32,
        wparam: u32,
        kbd: &KeyboardArgs,
    ) -> HookDecision {
        self.shared.handle_low_level_keyboard(code, wparam, kbd)
    }

    /// Dispatch entry for thread-local keyboard callbacks (packed virtual
    /// code in `wparam`, transition in bit 31 of `lparam`).
    pub fn handle_thread_keyboard(&self, code: i32, wparam: u32, lparam: isize) -> HookDecision {
        self.shared.handle_thread_keyboard(code, wparam, lparam)
    }

    /// Dispatch entry for mouse callbacks from either hook family.
    pub fn handle_mouse(&self, code: i32, wparam: u32, mouse: &MouseArgs) -> HookDecision {
        self.shared.handle_mouse(code, wparam, mouse)
    }
}

impl Default for RawInputHook {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RawInputHook {
    // Hooks must never outlive the service; leaking a global hook leaves
    // every process on the desktop routing input through a dead callback.
    fn drop(&mut self) {
        self.stop();
    }
}
