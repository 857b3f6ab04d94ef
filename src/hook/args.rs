// Rawhook Native Event Payloads
// Portable mirrors of the Win32 hook callback structures

/// Window messages and hook signals carried in the callback's wParam.
/// Kept as plain constants so the decoders stay testable on every target.
pub mod messages {
    pub const WM_KEYDOWN: u32 = 0x0100;
    pub const WM_KEYUP: u32 = 0x0101;
    pub const WM_SYSKEYDOWN: u32 = 0x0104;
    pub const WM_SYSKEYUP: u32 = 0x0105;

    pub const WM_MOUSEMOVE: u32 = 0x0200;
    pub const WM_LBUTTONDOWN: u32 = 0x0201;
    pub const WM_LBUTTONUP: u32 = 0x0202;
    pub const WM_RBUTTONDOWN: u32 = 0x0204;
    pub const WM_RBUTTONUP: u32 = 0x0205;
    pub const WM_MBUTTONDOWN: u32 = 0x0207;
    pub const WM_MBUTTONUP: u32 = 0x0208;
    pub const WM_MOUSEWHEEL: u32 = 0x020A;
    pub const WM_XBUTTONDOWN: u32 = 0x020B;
    pub const WM_XBUTTONUP: u32 = 0x020C;
    pub const WM_MOUSEHWHEEL: u32 = 0x020E;

    /// One wheel detent as reported in the high word of `mouse_data`.
    pub const WHEEL_DELTA: i16 = 120;
}

/// Bits of [`KeyboardArgs::flags`].
pub mod kbd_flags {
    /// Extended-key bit; folds into the scan code as +0x100.
    pub const EXTENDED: u32 = 0x01;
    pub const INJECTED: u32 = 0x10;
    pub const ALT_DOWN: u32 = 0x20;
    /// Set on release transitions.
    pub const UP: u32 = 0x80;
}

/// Low-level keyboard event payload (mirrors `KBDLLHOOKSTRUCT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardArgs {
    /// Virtual key code (0-255).
    pub vk: u32,
    /// Hardware scan code, extended bit NOT yet folded in.
    pub scan: u32,
    /// `kbd_flags` bits.
    pub flags: u32,
    /// Event timestamp in milliseconds.
    pub time: u32,
}

impl KeyboardArgs {
    pub fn new(vk: u32, scan: u32, flags: u32) -> Self {
        Self { vk, scan, flags, time: 0 }
    }

    pub fn extended(&self) -> bool {
        self.flags & kbd_flags::EXTENDED != 0
    }

    pub fn injected(&self) -> bool {
        self.flags & kbd_flags::INJECTED != 0
    }

    pub fn released(&self) -> bool {
        self.flags & kbd_flags::UP != 0
    }
}

/// Mouse event payload (mirrors `MSLLHOOKSTRUCT` / `MOUSEHOOKSTRUCTEX`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseArgs {
    /// Pointer position in screen coordinates.
    pub x: i32,
    pub y: i32,
    /// Auxiliary data; the high word carries the wheel delta or the extra
    /// button number depending on the message.
    pub mouse_data: u32,
    pub flags: u32,
    pub time: u32,
}

impl MouseArgs {
    pub fn with_data(mouse_data: u32) -> Self {
        Self { mouse_data, ..Self::default() }
    }

    /// Signed wheel delta from the high word; ±120 per detent.
    pub fn wheel_delta(&self) -> i16 {
        (self.mouse_data >> 16) as u16 as i16
    }

    /// Extra button number from the high word (1 or 2).
    pub fn xbutton(&self) -> u16 {
        (self.mouse_data >> 16) as u16
    }
}
