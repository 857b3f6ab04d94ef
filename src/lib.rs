// Rawhook Core Library
// System-wide keyboard and mouse hooks with a canonical key identity

pub mod event;
pub mod hook;
pub mod key;
pub mod settings;
pub mod state;

pub use event::{Action, EventQueue, KeyEvent, ListenerToken};
pub use hook::args::{kbd_flags, messages, KeyboardArgs, MouseArgs};
pub use hook::{
    HookBackend, HookDecision, HookError, HookHandle, HookHandles, HookMode, NullBackend,
    RawInputHook,
};
pub use key::{CodeSpace, KeyFormat, KeyFormatError, RawKey};
pub use settings::HookSettings;
pub use state::PressedSet;
