// Rawhook Win32 Backend
// SetWindowsHookExW installation and the extern "system" callbacks

use std::sync::Arc;

use log::warn;
use parking_lot::RwLock;

use windows::Win32::Foundation::{HINSTANCE, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::{GetCurrentProcessId, GetCurrentThreadId};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, GetForegroundWindow, GetWindowThreadProcessId, SetWindowsHookExW,
    UnhookWindowsHookEx, HHOOK, HOOKPROC, KBDLLHOOKSTRUCT, MOUSEHOOKSTRUCTEX, MSLLHOOKSTRUCT,
    WH_KEYBOARD, WH_KEYBOARD_LL, WH_MOUSE, WH_MOUSE_LL, WINDOWS_HOOK_ID,
};

use crate::hook::args::{KeyboardArgs, MouseArgs};
use crate::hook::{
    HookBackend, HookDecision, HookError, HookHandle, HookHandles, HookMode, SharedState,
};

// Win32 hook procedures receive no user data pointer, so the single active
// service registers its shared state here for the callbacks to find.
static ACTIVE: RwLock<Option<Arc<SharedState>>> = RwLock::new(None);

pub(crate) fn try_set_active(shared: &Arc<SharedState>) -> bool {
    let mut slot = ACTIVE.write();
    if slot.is_some() {
        return false;
    }
    *slot = Some(shared.clone());
    true
}

pub(crate) fn clear_active(shared: &Arc<SharedState>) {
    let mut slot = ACTIVE.write();
    if slot.as_ref().is_some_and(|s| Arc::ptr_eq(s, shared)) {
        *slot = None;
    }
}

fn active() -> Option<Arc<SharedState>> {
    ACTIVE.read().clone()
}

/// Whether the foreground window belongs to this process.
pub(crate) fn host_has_focus() -> bool {
    unsafe {
        let hwnd = GetForegroundWindow();
        if hwnd.0.is_null() {
            return false;
        }
        let mut pid = 0u32;
        GetWindowThreadProcessId(hwnd, Some(&mut pid));
        pid == GetCurrentProcessId()
    }
}

fn null_hook() -> HHOOK {
    HHOOK(std::ptr::null_mut())
}

fn forward(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe { CallNextHookEx(null_hook(), code, wparam, lparam) }
}

fn apply(decision: HookDecision, code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match decision {
        HookDecision::Swallow => LRESULT(1),
        HookDecision::Forward => forward(code, wparam, lparam),
    }
}

// The procedures below run on the OS input-dispatch thread, which silently
// unhooks callbacks that stall; they decode, hand off to the shared
// pipeline and return. Nothing in here may block or unwind.

unsafe extern "system" fn low_level_keyboard_proc(
    code: i32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let Some(shared) = active() else {
        return forward(code, wparam, lparam);
    };
    if code < 0 || lparam.0 == 0 {
        return forward(code, wparam, lparam);
    }
    let kbd = &*(lparam.0 as *const KBDLLHOOKSTRUCT);
    let args = KeyboardArgs {
        vk: kbd.vkCode,
        scan: kbd.scanCode,
        flags: kbd.flags.0,
        time: kbd.time,
    };
    let decision = shared.handle_low_level_keyboard(code, wparam.0 as u32, &args);
    apply(decision, code, wparam, lparam)
}

unsafe extern "system" fn thread_keyboard_proc(
    code: i32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let Some(shared) = active() else {
        return forward(code, wparam, lparam);
    };
    if code < 0 {
        return forward(code, wparam, lparam);
    }
    let decision = shared.handle_thread_keyboard(code, wparam.0 as u32, lparam.0);
    apply(decision, code, wparam, lparam)
}

unsafe extern "system" fn low_level_mouse_proc(
    code: i32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let Some(shared) = active() else {
        return forward(code, wparam, lparam);
    };
    if code < 0 || lparam.0 == 0 {
        return forward(code, wparam, lparam);
    }
    let mouse = &*(lparam.0 as *const MSLLHOOKSTRUCT);
    let args = MouseArgs {
        x: mouse.pt.x,
        y: mouse.pt.y,
        mouse_data: mouse.mouseData,
        flags: mouse.flags,
        time: mouse.time,
    };
    let decision = shared.handle_mouse(code, wparam.0 as u32, &args);
    apply(decision, code, wparam, lparam)
}

unsafe extern "system" fn thread_mouse_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    let Some(shared) = active() else {
        return forward(code, wparam, lparam);
    };
    if code < 0 || lparam.0 == 0 {
        return forward(code, wparam, lparam);
    }
    let mouse = &*(lparam.0 as *const MOUSEHOOKSTRUCTEX);
    let args = MouseArgs {
        x: mouse.Base.pt.x,
        y: mouse.Base.pt.y,
        mouse_data: mouse.mouseData,
        flags: 0,
        time: 0,
    };
    let decision = shared.handle_mouse(code, wparam.0 as u32, &args);
    apply(decision, code, wparam, lparam)
}

/// Backend installing real Win32 hooks.
///
/// Foreground-mode hooks are scoped to the thread calling
/// [`RawInputHook::start`](crate::RawInputHook::start); that thread must
/// pump a message loop or the hooks never fire, and a callback that stalls
/// long enough gets silently unhooked by the OS.
#[derive(Debug, Default)]
pub(crate) struct WindowsBackend;

impl WindowsBackend {
    pub(crate) fn new() -> Self {
        Self
    }

    fn set_hook(
        device: &'static str,
        id: WINDOWS_HOOK_ID,
        proc: HOOKPROC,
        thread_id: u32,
        handles: &mut HookHandles,
    ) -> Result<(), HookError> {
        match unsafe { SetWindowsHookExW(id, proc, HINSTANCE(std::ptr::null_mut()), thread_id) } {
            Ok(hook) => {
                handles.push(HookHandle::from_raw(hook.0 as isize));
                Ok(())
            }
            Err(err) => Err(HookError::Install {
                device,
                detail: err.to_string(),
            }),
        }
    }
}

impl HookBackend for WindowsBackend {
    fn install(&mut self, mode: HookMode, handles: &mut HookHandles) -> Result<(), HookError> {
        let (keyboard_id, mouse_id, keyboard_proc, mouse_proc, thread_id): (
            WINDOWS_HOOK_ID,
            WINDOWS_HOOK_ID,
            HOOKPROC,
            HOOKPROC,
            u32,
        ) = match mode {
            HookMode::Background => (
                WH_KEYBOARD_LL,
                WH_MOUSE_LL,
                Some(low_level_keyboard_proc),
                Some(low_level_mouse_proc),
                0,
            ),
            HookMode::Foreground => (
                WH_KEYBOARD,
                WH_MOUSE,
                Some(thread_keyboard_proc),
                Some(thread_mouse_proc),
                unsafe { GetCurrentThreadId() },
            ),
        };

        Self::set_hook("keyboard", keyboard_id, keyboard_proc, thread_id, handles)?;
        Self::set_hook("mouse", mouse_id, mouse_proc, thread_id, handles)?;
        Ok(())
    }

    fn remove(&mut self, handles: &mut HookHandles) {
        for handle in handles.drain(..) {
            if handle.is_null() {
                continue;
            }
            let hook = HHOOK(handle.as_raw() as *mut core::ffi::c_void);
            if let Err(err) = unsafe { UnhookWindowsHookEx(hook) } {
                warn!("failed to remove hook: {err}");
            }
        }
    }
}
