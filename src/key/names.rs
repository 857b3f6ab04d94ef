// Rawhook Key Tables
// Curated well-known identities with their canonical (virtual code, scan code)
// pairs, plus the lazily-built lookup maps used for naming and parsing.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::RawKey;

impl RawKey {
    pub const UNKNOWN: RawKey = RawKey::from_parts(0x00, 0x000);

    pub const LEFT_BUTTON: RawKey = RawKey::from_parts(0x01, 0x000);
    pub const RIGHT_BUTTON: RawKey = RawKey::from_parts(0x02, 0x000);
    pub const CTRL_BREAK: RawKey = RawKey::from_parts(0x03, 0x146);
    pub const MIDDLE_BUTTON: RawKey = RawKey::from_parts(0x04, 0x000);
    pub const EXTRA_BUTTON1: RawKey = RawKey::from_parts(0x05, 0x000);
    pub const EXTRA_BUTTON2: RawKey = RawKey::from_parts(0x06, 0x000);
    pub const BACKSPACE: RawKey = RawKey::from_parts(0x08, 0x00E);
    pub const TAB: RawKey = RawKey::from_parts(0x09, 0x00F);
    pub const NUMPAD_CLEAR: RawKey = RawKey::from_parts(0x0C, 0x04C);
    pub const ENTER: RawKey = RawKey::from_parts(0x0D, 0x01C);
    pub const SHIFT: RawKey = RawKey::from_parts(0x10, 0x02A);
    pub const CONTROL: RawKey = RawKey::from_parts(0x11, 0x01D);
    pub const ALT: RawKey = RawKey::from_parts(0x12, 0x038);
    pub const PAUSE: RawKey = RawKey::from_parts(0x13, 0x045);
    pub const CAPS_LOCK: RawKey = RawKey::from_parts(0x14, 0x03A);
    pub const KANA: RawKey = RawKey::from_parts(0x15, 0x000);
    pub const JUNJA: RawKey = RawKey::from_parts(0x17, 0x000);
    pub const FINAL: RawKey = RawKey::from_parts(0x18, 0x000);
    pub const HANJA: RawKey = RawKey::from_parts(0x19, 0x000);
    pub const ESCAPE: RawKey = RawKey::from_parts(0x1B, 0x001);
    pub const CONVERT: RawKey = RawKey::from_parts(0x1C, 0x000);
    pub const NON_CONVERT: RawKey = RawKey::from_parts(0x1D, 0x000);
    pub const ACCEPT: RawKey = RawKey::from_parts(0x1E, 0x000);
    pub const MODE_CHANGE: RawKey = RawKey::from_parts(0x1F, 0x000);
    pub const SPACE: RawKey = RawKey::from_parts(0x20, 0x039);
    pub const PAGE_UP: RawKey = RawKey::from_parts(0x21, 0x049);
    pub const PAGE_DOWN: RawKey = RawKey::from_parts(0x22, 0x051);
    pub const END: RawKey = RawKey::from_parts(0x23, 0x04F);
    pub const HOME: RawKey = RawKey::from_parts(0x24, 0x047);
    pub const LEFT: RawKey = RawKey::from_parts(0x25, 0x04B);
    pub const UP: RawKey = RawKey::from_parts(0x26, 0x048);
    pub const RIGHT: RawKey = RawKey::from_parts(0x27, 0x04D);
    pub const DOWN: RawKey = RawKey::from_parts(0x28, 0x050);
    pub const SELECT: RawKey = RawKey::from_parts(0x29, 0x000);
    pub const PRINT: RawKey = RawKey::from_parts(0x2A, 0x000);
    pub const EXECUTE: RawKey = RawKey::from_parts(0x2B, 0x000);
    pub const PRINT_SCREEN: RawKey = RawKey::from_parts(0x2C, 0x154);
    pub const INSERT: RawKey = RawKey::from_parts(0x2D, 0x052);
    pub const DELETE: RawKey = RawKey::from_parts(0x2E, 0x053);
    pub const HELP: RawKey = RawKey::from_parts(0x2F, 0x063);
    pub const N0: RawKey = RawKey::from_parts(0x30, 0x00B);
    pub const N1: RawKey = RawKey::from_parts(0x31, 0x002);
    pub const N2: RawKey = RawKey::from_parts(0x32, 0x003);
    pub const N3: RawKey = RawKey::from_parts(0x33, 0x004);
    pub const N4: RawKey = RawKey::from_parts(0x34, 0x005);
    pub const N5: RawKey = RawKey::from_parts(0x35, 0x006);
    pub const N6: RawKey = RawKey::from_parts(0x36, 0x007);
    pub const N7: RawKey = RawKey::from_parts(0x37, 0x008);
    pub const N8: RawKey = RawKey::from_parts(0x38, 0x009);
    pub const N9: RawKey = RawKey::from_parts(0x39, 0x00A);
    pub const A: RawKey = RawKey::from_parts(0x41, 0x01E);
    pub const B: RawKey = RawKey::from_parts(0x42, 0x030);
    pub const C: RawKey = RawKey::from_parts(0x43, 0x02E);
    pub const D: RawKey = RawKey::from_parts(0x44, 0x020);
    pub const E: RawKey = RawKey::from_parts(0x45, 0x012);
    pub const F: RawKey = RawKey::from_parts(0x46, 0x021);
    pub const G: RawKey = RawKey::from_parts(0x47, 0x022);
    pub const H: RawKey = RawKey::from_parts(0x48, 0x023);
    pub const I: RawKey = RawKey::from_parts(0x49, 0x017);
    pub const J: RawKey = RawKey::from_parts(0x4A, 0x024);
    pub const K: RawKey = RawKey::from_parts(0x4B, 0x025);
    pub const L: RawKey = RawKey::from_parts(0x4C, 0x026);
    pub const M: RawKey = RawKey::from_parts(0x4D, 0x032);
    pub const N: RawKey = RawKey::from_parts(0x4E, 0x031);
    pub const O: RawKey = RawKey::from_parts(0x4F, 0x018);
    pub const P: RawKey = RawKey::from_parts(0x50, 0x019);
    pub const Q: RawKey = RawKey::from_parts(0x51, 0x010);
    pub const R: RawKey = RawKey::from_parts(0x52, 0x013);
    pub const S: RawKey = RawKey::from_parts(0x53, 0x01F);
    pub const T: RawKey = RawKey::from_parts(0x54, 0x014);
    pub const U: RawKey = RawKey::from_parts(0x55, 0x016);
    pub const V: RawKey = RawKey::from_parts(0x56, 0x02F);
    pub const W: RawKey = RawKey::from_parts(0x57, 0x011);
    pub const X: RawKey = RawKey::from_parts(0x58, 0x02D);
    pub const Y: RawKey = RawKey::from_parts(0x59, 0x015);
    pub const Z: RawKey = RawKey::from_parts(0x5A, 0x02C);
    pub const LEFT_WINDOWS: RawKey = RawKey::from_parts(0x5B, 0x15B);
    pub const RIGHT_WINDOWS: RawKey = RawKey::from_parts(0x5C, 0x15C);
    pub const APPS_KEY: RawKey = RawKey::from_parts(0x5D, 0x15D);
    pub const SLEEP: RawKey = RawKey::from_parts(0x5F, 0x05F);
    pub const NUMPAD0: RawKey = RawKey::from_parts(0x60, 0x052);
    pub const NUMPAD1: RawKey = RawKey::from_parts(0x61, 0x04F);
    pub const NUMPAD2: RawKey = RawKey::from_parts(0x62, 0x050);
    pub const NUMPAD3: RawKey = RawKey::from_parts(0x63, 0x051);
    pub const NUMPAD4: RawKey = RawKey::from_parts(0x64, 0x04B);
    pub const NUMPAD5: RawKey = RawKey::from_parts(0x65, 0x04C);
    pub const NUMPAD6: RawKey = RawKey::from_parts(0x66, 0x04D);
    pub const NUMPAD7: RawKey = RawKey::from_parts(0x67, 0x047);
    pub const NUMPAD8: RawKey = RawKey::from_parts(0x68, 0x048);
    pub const NUMPAD9: RawKey = RawKey::from_parts(0x69, 0x049);
    pub const NUMPAD_MULTIPLY: RawKey = RawKey::from_parts(0x6A, 0x037);
    pub const NUMPAD_ADD: RawKey = RawKey::from_parts(0x6B, 0x04E);
    pub const SEPARATOR: RawKey = RawKey::from_parts(0x6C, 0x000);
    pub const NUMPAD_SUBTRACT: RawKey = RawKey::from_parts(0x6D, 0x04A);
    pub const NUMPAD_DOT: RawKey = RawKey::from_parts(0x6E, 0x053);
    pub const NUMPAD_DIVIDE: RawKey = RawKey::from_parts(0x6F, 0x135);
    pub const F1: RawKey = RawKey::from_parts(0x70, 0x03B);
    pub const F2: RawKey = RawKey::from_parts(0x71, 0x03C);
    pub const F3: RawKey = RawKey::from_parts(0x72, 0x03D);
    pub const F4: RawKey = RawKey::from_parts(0x73, 0x03E);
    pub const F5: RawKey = RawKey::from_parts(0x74, 0x03F);
    pub const F6: RawKey = RawKey::from_parts(0x75, 0x040);
    pub const F7: RawKey = RawKey::from_parts(0x76, 0x041);
    pub const F8: RawKey = RawKey::from_parts(0x77, 0x042);
    pub const F9: RawKey = RawKey::from_parts(0x78, 0x043);
    pub const F10: RawKey = RawKey::from_parts(0x79, 0x044);
    pub const F11: RawKey = RawKey::from_parts(0x7A, 0x057);
    pub const F12: RawKey = RawKey::from_parts(0x7B, 0x058);
    pub const F13: RawKey = RawKey::from_parts(0x7C, 0x064);
    pub const F14: RawKey = RawKey::from_parts(0x7D, 0x065);
    pub const F15: RawKey = RawKey::from_parts(0x7E, 0x066);
    pub const F16: RawKey = RawKey::from_parts(0x7F, 0x067);
    pub const F17: RawKey = RawKey::from_parts(0x80, 0x068);
    pub const F18: RawKey = RawKey::from_parts(0x81, 0x069);
    pub const F19: RawKey = RawKey::from_parts(0x82, 0x06A);
    pub const F20: RawKey = RawKey::from_parts(0x83, 0x06B);
    pub const F21: RawKey = RawKey::from_parts(0x84, 0x06B);
    pub const F22: RawKey = RawKey::from_parts(0x85, 0x06D);
    pub const F23: RawKey = RawKey::from_parts(0x86, 0x06E);
    pub const F24: RawKey = RawKey::from_parts(0x87, 0x076);
    pub const NUM_LOCK: RawKey = RawKey::from_parts(0x90, 0x145);
    pub const SCROLL_LOCK: RawKey = RawKey::from_parts(0x91, 0x046);
    pub const JISHO: RawKey = RawKey::from_parts(0x92, 0x000);
    pub const MASSHOU: RawKey = RawKey::from_parts(0x93, 0x000);
    pub const TOUROKU: RawKey = RawKey::from_parts(0x94, 0x000);
    pub const LOYA: RawKey = RawKey::from_parts(0x95, 0x000);
    pub const ROYA: RawKey = RawKey::from_parts(0x96, 0x000);
    pub const LEFT_BUTTON_ALT: RawKey = RawKey::from_parts(0x9A, 0x000);
    pub const RIGHT_BUTTON_ALT: RawKey = RawKey::from_parts(0x9B, 0x000);
    pub const WHEEL_LEFT: RawKey = RawKey::from_parts(0x9C, 0x001);
    pub const WHEEL_RIGHT: RawKey = RawKey::from_parts(0x9D, 0x001);
    pub const WHEEL_DOWN: RawKey = RawKey::from_parts(0x9E, 0x001);
    pub const WHEEL_UP: RawKey = RawKey::from_parts(0x9F, 0x001);
    pub const LEFT_SHIFT: RawKey = RawKey::from_parts(0xA0, 0x02A);
    pub const RIGHT_SHIFT: RawKey = RawKey::from_parts(0xA1, 0x136);
    pub const LEFT_CONTROL: RawKey = RawKey::from_parts(0xA2, 0x01D);
    pub const RIGHT_CONTROL: RawKey = RawKey::from_parts(0xA3, 0x11D);
    pub const LEFT_ALT: RawKey = RawKey::from_parts(0xA4, 0x038);
    pub const RIGHT_ALT: RawKey = RawKey::from_parts(0xA5, 0x138);
    pub const BROWSER_BACK: RawKey = RawKey::from_parts(0xA6, 0x16A);
    pub const BROWSER_FORWARD: RawKey = RawKey::from_parts(0xA7, 0x169);
    pub const BROWSER_REFRESH: RawKey = RawKey::from_parts(0xA8, 0x167);
    pub const BROWSER_STOP: RawKey = RawKey::from_parts(0xA9, 0x168);
    pub const BROWSER_SEARCH: RawKey = RawKey::from_parts(0xAA, 0x165);
    pub const BROWSER_FAVORITES: RawKey = RawKey::from_parts(0xAB, 0x166);
    pub const BROWSER_HOME: RawKey = RawKey::from_parts(0xAC, 0x132);
    pub const VOLUME_MUTE: RawKey = RawKey::from_parts(0xAD, 0x120);
    pub const VOLUME_DOWN: RawKey = RawKey::from_parts(0xAE, 0x12E);
    pub const VOLUME_UP: RawKey = RawKey::from_parts(0xAF, 0x130);
    pub const MEDIA_NEXT: RawKey = RawKey::from_parts(0xB0, 0x119);
    pub const MEDIA_PREV: RawKey = RawKey::from_parts(0xB1, 0x110);
    pub const MEDIA_STOP: RawKey = RawKey::from_parts(0xB2, 0x124);
    pub const MEDIA_PLAY_PAUSE: RawKey = RawKey::from_parts(0xB3, 0x122);
    pub const LAUNCH_MAIL: RawKey = RawKey::from_parts(0xB4, 0x16C);
    pub const LAUNCH_MEDIA: RawKey = RawKey::from_parts(0xB5, 0x16D);
    pub const LAUNCH_APP1: RawKey = RawKey::from_parts(0xB6, 0x16B);
    pub const LAUNCH_APP2: RawKey = RawKey::from_parts(0xB7, 0x121);
    pub const OEM1: RawKey = RawKey::from_parts(0xBA, 0x027);
    pub const OEM_PLUS: RawKey = RawKey::from_parts(0xBB, 0x00D);
    pub const OEM_COMMA: RawKey = RawKey::from_parts(0xBC, 0x033);
    pub const OEM_MINUS: RawKey = RawKey::from_parts(0xBD, 0x00C);
    pub const OEM_PERIOD: RawKey = RawKey::from_parts(0xBE, 0x034);
    pub const OEM2: RawKey = RawKey::from_parts(0xBF, 0x035);
    pub const OEM3: RawKey = RawKey::from_parts(0xC0, 0x029);
    pub const INTERNATIONAL1: RawKey = RawKey::from_parts(0xC1, 0x073);
    pub const BRAZILIAN_COMMA: RawKey = RawKey::from_parts(0xC2, 0x07E);
    pub const OEM4: RawKey = RawKey::from_parts(0xDB, 0x01A);
    pub const OEM5: RawKey = RawKey::from_parts(0xDC, 0x02B);
    pub const OEM6: RawKey = RawKey::from_parts(0xDD, 0x01B);
    pub const OEM7: RawKey = RawKey::from_parts(0xDE, 0x028);
    pub const OEM8: RawKey = RawKey::from_parts(0xDF, 0x000);
    pub const OEM_MAX: RawKey = RawKey::from_parts(0xE1, 0x000);
    pub const OEM102: RawKey = RawKey::from_parts(0xE2, 0x056);
    pub const ICO_HELP: RawKey = RawKey::from_parts(0xE3, 0x000);
    pub const ICO00: RawKey = RawKey::from_parts(0xE4, 0x000);
    pub const PROCESS_KEY: RawKey = RawKey::from_parts(0xE5, 0x000);
    pub const ICO_CLEAR: RawKey = RawKey::from_parts(0xE6, 0x000);
    pub const PACKET: RawKey = RawKey::from_parts(0xE7, 0x000);
    pub const OEM_RESET: RawKey = RawKey::from_parts(0xE9, 0x071);
    pub const OEM_JUMP: RawKey = RawKey::from_parts(0xEA, 0x05C);
    pub const INTERNATIONAL5: RawKey = RawKey::from_parts(0xEB, 0x07B);
    pub const OEM_PA2: RawKey = RawKey::from_parts(0xEC, 0x000);
    pub const OEM_PA3: RawKey = RawKey::from_parts(0xED, 0x06F);
    pub const OEM_WS_CTRL: RawKey = RawKey::from_parts(0xEE, 0x05A);
    pub const OEM_CU_SEL: RawKey = RawKey::from_parts(0xEF, 0x000);
    pub const OEM_ATTN: RawKey = RawKey::from_parts(0xF0, 0x000);
    pub const OEM_FINISH: RawKey = RawKey::from_parts(0xF1, 0x05B);
    pub const OEM_COPY: RawKey = RawKey::from_parts(0xF2, 0x000);
    pub const OEM_AUTO: RawKey = RawKey::from_parts(0xF3, 0x05F);
    pub const OEM_ENLW: RawKey = RawKey::from_parts(0xF4, 0x000);
    pub const OEM_BACK_TAB: RawKey = RawKey::from_parts(0xF5, 0x05E);
    pub const ATTN: RawKey = RawKey::from_parts(0xF6, 0x000);
    pub const CR_SEL: RawKey = RawKey::from_parts(0xF7, 0x000);
    pub const EX_SEL: RawKey = RawKey::from_parts(0xF8, 0x000);
    pub const EREOF: RawKey = RawKey::from_parts(0xF9, 0x05D);
    pub const PLAY: RawKey = RawKey::from_parts(0xFA, 0x000);
    pub const ZOOM: RawKey = RawKey::from_parts(0xFB, 0x062);
    pub const NONAME: RawKey = RawKey::from_parts(0xFC, 0x000);
    pub const PA1: RawKey = RawKey::from_parts(0xFD, 0x000);
    pub const OEM_CLEAR: RawKey = RawKey::from_parts(0xFE, 0x000);
    // Scan-only keys reported with no virtual code at all
    pub const INTERNATIONAL2: RawKey = RawKey::from_parts(0x00, 0x070);
    pub const INTERNATIONAL4: RawKey = RawKey::from_parts(0x00, 0x079);
    pub const INTERNATIONAL3: RawKey = RawKey::from_parts(0x00, 0x07D);
}

/// Every well-known identity with its canonical display name.
pub(crate) static TABLE: &[(RawKey, &str)] = &[
    (RawKey::LEFT_BUTTON, "LeftButton"),
    (RawKey::RIGHT_BUTTON, "RightButton"),
    (RawKey::CTRL_BREAK, "CtrlBreak"),
    (RawKey::MIDDLE_BUTTON, "MiddleButton"),
    (RawKey::EXTRA_BUTTON1, "ExtraButton1"),
    (RawKey::EXTRA_BUTTON2, "ExtraButton2"),
    (RawKey::BACKSPACE, "Backspace"),
    (RawKey::TAB, "Tab"),
    (RawKey::NUMPAD_CLEAR, "NumpadClear"),
    (RawKey::ENTER, "Enter"),
    (RawKey::SHIFT, "Shift"),
    (RawKey::CONTROL, "Control"),
    (RawKey::ALT, "Alt"),
    (RawKey::PAUSE, "Pause"),
    (RawKey::CAPS_LOCK, "CapsLock"),
    (RawKey::KANA, "Kana"),
    (RawKey::JUNJA, "Junja"),
    (RawKey::FINAL, "Final"),
    (RawKey::HANJA, "Hanja"),
    (RawKey::ESCAPE, "Escape"),
    (RawKey::CONVERT, "Convert"),
    (RawKey::NON_CONVERT, "NonConvert"),
    (RawKey::ACCEPT, "Accept"),
    (RawKey::MODE_CHANGE, "ModeChange"),
    (RawKey::SPACE, "Space"),
    (RawKey::PAGE_UP, "PageUp"),
    (RawKey::PAGE_DOWN, "PageDown"),
    (RawKey::END, "End"),
    (RawKey::HOME, "Home"),
    (RawKey::LEFT, "Left"),
    (RawKey::UP, "Up"),
    (RawKey::RIGHT, "Right"),
    (RawKey::DOWN, "Down"),
    (RawKey::SELECT, "Select"),
    (RawKey::PRINT, "Print"),
    (RawKey::EXECUTE, "Execute"),
    (RawKey::PRINT_SCREEN, "PrintScreen"),
    (RawKey::INSERT, "Insert"),
    (RawKey::DELETE, "Delete"),
    (RawKey::HELP, "Help"),
    (RawKey::N0, "N0"),
    (RawKey::N1, "N1"),
    (RawKey::N2, "N2"),
    (RawKey::N3, "N3"),
    (RawKey::N4, "N4"),
    (RawKey::N5, "N5"),
    (RawKey::N6, "N6"),
    (RawKey::N7, "N7"),
    (RawKey::N8, "N8"),
    (RawKey::N9, "N9"),
    (RawKey::A, "A"),
    (RawKey::B, "B"),
    (RawKey::C, "C"),
    (RawKey::D, "D"),
    (RawKey::E, "E"),
    (RawKey::F, "F"),
    (RawKey::G, "G"),
    (RawKey::H, "H"),
    (RawKey::I, "I"),
    (RawKey::J, "J"),
    (RawKey::K, "K"),
    (RawKey::L, "L"),
    (RawKey::M, "M"),
    (RawKey::N, "N"),
    (RawKey::O, "O"),
    (RawKey::P, "P"),
    (RawKey::Q, "Q"),
    (RawKey::R, "R"),
    (RawKey::S, "S"),
    (RawKey::T, "T"),
    (RawKey::U, "U"),
    (RawKey::V, "V"),
    (RawKey::W, "W"),
    (RawKey::X, "X"),
    (RawKey::Y, "Y"),
    (RawKey::Z, "Z"),
    (RawKey::LEFT_WINDOWS, "LeftWindows"),
    (RawKey::RIGHT_WINDOWS, "RightWindows"),
    (RawKey::APPS_KEY, "AppsKey"),
    (RawKey::SLEEP, "Sleep"),
    (RawKey::NUMPAD0, "Numpad0"),
    (RawKey::NUMPAD1, "Numpad1"),
    (RawKey::NUMPAD2, "Numpad2"),
    (RawKey::NUMPAD3, "Numpad3"),
    (RawKey::NUMPAD4, "Numpad4"),
    (RawKey::NUMPAD5, "Numpad5"),
    (RawKey::NUMPAD6, "Numpad6"),
    (RawKey::NUMPAD7, "Numpad7"),
    (RawKey::NUMPAD8, "Numpad8"),
    (RawKey::NUMPAD9, "Numpad9"),
    (RawKey::NUMPAD_MULTIPLY, "NumpadMultiply"),
    (RawKey::NUMPAD_ADD, "NumpadAdd"),
    (RawKey::SEPARATOR, "Separator"),
    (RawKey::NUMPAD_SUBTRACT, "NumpadSubtract"),
    (RawKey::NUMPAD_DOT, "NumpadDot"),
    (RawKey::NUMPAD_DIVIDE, "NumpadDivide"),
    (RawKey::F1, "F1"),
    (RawKey::F2, "F2"),
    (RawKey::F3, "F3"),
    (RawKey::F4, "F4"),
    (RawKey::F5, "F5"),
    (RawKey::F6, "F6"),
    (RawKey::F7, "F7"),
    (RawKey::F8, "F8"),
    (RawKey::F9, "F9"),
    (RawKey::F10, "F10"),
    (RawKey::F11, "F11"),
    (RawKey::F12, "F12"),
    (RawKey::F13, "F13"),
    (RawKey::F14, "F14"),
    (RawKey::F15, "F15"),
    (RawKey::F16, "F16"),
    (RawKey::F17, "F17"),
    (RawKey::F18, "F18"),
    (RawKey::F19, "F19"),
    (RawKey::F20, "F20"),
    (RawKey::F21, "F21"),
    (RawKey::F22, "F22"),
    (RawKey::F23, "F23"),
    (RawKey::F24, "F24"),
    (RawKey::NUM_LOCK, "NumLock"),
    (RawKey::SCROLL_LOCK, "ScrollLock"),
    (RawKey::JISHO, "Jisho"),
    (RawKey::MASSHOU, "Masshou"),
    (RawKey::TOUROKU, "Touroku"),
    (RawKey::LOYA, "Loya"),
    (RawKey::ROYA, "Roya"),
    (RawKey::LEFT_BUTTON_ALT, "LeftButtonAlt"),
    (RawKey::RIGHT_BUTTON_ALT, "RightButtonAlt"),
    (RawKey::WHEEL_LEFT, "WheelLeft"),
    (RawKey::WHEEL_RIGHT, "WheelRight"),
    (RawKey::WHEEL_DOWN, "WheelDown"),
    (RawKey::WHEEL_UP, "WheelUp"),
    (RawKey::LEFT_SHIFT, "LeftShift"),
    (RawKey::RIGHT_SHIFT, "RightShift"),
    (RawKey::LEFT_CONTROL, "LeftControl"),
    (RawKey::RIGHT_CONTROL, "RightControl"),
    (RawKey::LEFT_ALT, "LeftAlt"),
    (RawKey::RIGHT_ALT, "RightAlt"),
    (RawKey::BROWSER_BACK, "BrowserBack"),
    (RawKey::BROWSER_FORWARD, "BrowserForward"),
    (RawKey::BROWSER_REFRESH, "BrowserRefresh"),
    (RawKey::BROWSER_STOP, "BrowserStop"),
    (RawKey::BROWSER_SEARCH, "BrowserSearch"),
    (RawKey::BROWSER_FAVORITES, "BrowserFavorites"),
    (RawKey::BROWSER_HOME, "BrowserHome"),
    (RawKey::VOLUME_MUTE, "VolumeMute"),
    (RawKey::VOLUME_DOWN, "VolumeDown"),
    (RawKey::VOLUME_UP, "VolumeUp"),
    (RawKey::MEDIA_NEXT, "MediaNext"),
    (RawKey::MEDIA_PREV, "MediaPrev"),
    (RawKey::MEDIA_STOP, "MediaStop"),
    (RawKey::MEDIA_PLAY_PAUSE, "MediaPlayPause"),
    (RawKey::LAUNCH_MAIL, "LaunchMail"),
    (RawKey::LAUNCH_MEDIA, "LaunchMedia"),
    (RawKey::LAUNCH_APP1, "LaunchApp1"),
    (RawKey::LAUNCH_APP2, "LaunchApp2"),
    (RawKey::OEM1, "OEM1"),
    (RawKey::OEM_PLUS, "OEMPlus"),
    (RawKey::OEM_COMMA, "OEMComma"),
    (RawKey::OEM_MINUS, "OEMMinus"),
    (RawKey::OEM_PERIOD, "OEMPeriod"),
    (RawKey::OEM2, "OEM2"),
    (RawKey::OEM3, "OEM3"),
    (RawKey::INTERNATIONAL1, "International1"),
    (RawKey::BRAZILIAN_COMMA, "BrazilianComma"),
    (RawKey::OEM4, "OEM4"),
    (RawKey::OEM5, "OEM5"),
    (RawKey::OEM6, "OEM6"),
    (RawKey::OEM7, "OEM7"),
    (RawKey::OEM8, "OEM8"),
    (RawKey::OEM_MAX, "OEMMax"),
    (RawKey::OEM102, "OEM102"),
    (RawKey::ICO_HELP, "IcoHelp"),
    (RawKey::ICO00, "Ico00"),
    (RawKey::PROCESS_KEY, "ProcessKey"),
    (RawKey::ICO_CLEAR, "IcoClear"),
    (RawKey::PACKET, "Packet"),
    (RawKey::OEM_RESET, "OEMReset"),
    (RawKey::OEM_JUMP, "OEMJump"),
    (RawKey::INTERNATIONAL5, "International5"),
    (RawKey::OEM_PA2, "OEMPa2"),
    (RawKey::OEM_PA3, "OEMPa3"),
    (RawKey::OEM_WS_CTRL, "OEMWsCtrl"),
    (RawKey::OEM_CU_SEL, "OEMCUSel"),
    (RawKey::OEM_ATTN, "OEMAttn"),
    (RawKey::OEM_FINISH, "OEMFinish"),
    (RawKey::OEM_COPY, "OEMCopy"),
    (RawKey::OEM_AUTO, "OEMAuto"),
    (RawKey::OEM_ENLW, "OEMENLW"),
    (RawKey::OEM_BACK_TAB, "OEMBackTab"),
    (RawKey::ATTN, "Attn"),
    (RawKey::CR_SEL, "CRSel"),
    (RawKey::EX_SEL, "EXSel"),
    (RawKey::EREOF, "EREOF"),
    (RawKey::PLAY, "Play"),
    (RawKey::ZOOM, "Zoom"),
    (RawKey::NONAME, "Noname"),
    (RawKey::PA1, "PA1"),
    (RawKey::OEM_CLEAR, "OEMClear"),
    (RawKey::INTERNATIONAL2, "International2"),
    (RawKey::INTERNATIONAL4, "International4"),
    (RawKey::INTERNATIONAL3, "International3"),
];

/// Additional accepted spellings for `RawKey::parse`. Canonical names are
/// matched without being listed here.
static ALIASES: &[(&str, RawKey)] = &[
    ("leftclick", RawKey::LEFT_BUTTON),
    ("mouse1", RawKey::LEFT_BUTTON),
    ("m1", RawKey::LEFT_BUTTON),
    ("rightclick", RawKey::RIGHT_BUTTON),
    ("mouse2", RawKey::RIGHT_BUTTON),
    ("m2", RawKey::RIGHT_BUTTON),
    ("middleclick", RawKey::MIDDLE_BUTTON),
    ("mouse3", RawKey::MIDDLE_BUTTON),
    ("m3", RawKey::MIDDLE_BUTTON),
    ("xbutton1", RawKey::EXTRA_BUTTON1),
    ("xb1", RawKey::EXTRA_BUTTON1),
    ("mouse4", RawKey::EXTRA_BUTTON1),
    ("m4", RawKey::EXTRA_BUTTON1),
    ("xbutton2", RawKey::EXTRA_BUTTON2),
    ("xb2", RawKey::EXTRA_BUTTON2),
    ("mouse5", RawKey::EXTRA_BUTTON2),
    ("m5", RawKey::EXTRA_BUTTON2),
    ("cancel", RawKey::CTRL_BREAK),
    ("back", RawKey::BACKSPACE),
    ("clear", RawKey::NUMPAD_CLEAR),
    ("return", RawKey::ENTER),
    ("esc", RawKey::ESCAPE),
    ("ctrl", RawKey::CONTROL),
    ("menu", RawKey::ALT),
    ("capital", RawKey::CAPS_LOCK),
    ("caps", RawKey::CAPS_LOCK),
    ("spacebar", RawKey::SPACE),
    ("prior", RawKey::PAGE_UP),
    ("pgup", RawKey::PAGE_UP),
    ("next", RawKey::PAGE_DOWN),
    ("pgdn", RawKey::PAGE_DOWN),
    ("pgdown", RawKey::PAGE_DOWN),
    ("snapshot", RawKey::PRINT_SCREEN),
    ("prtsc", RawKey::PRINT_SCREEN),
    ("prtscr", RawKey::PRINT_SCREEN),
    ("ins", RawKey::INSERT),
    ("del", RawKey::DELETE),
    ("0", RawKey::N0),
    ("1", RawKey::N1),
    ("2", RawKey::N2),
    ("3", RawKey::N3),
    ("4", RawKey::N4),
    ("5", RawKey::N5),
    ("6", RawKey::N6),
    ("7", RawKey::N7),
    ("8", RawKey::N8),
    ("9", RawKey::N9),
    ("lwin", RawKey::LEFT_WINDOWS),
    ("win", RawKey::LEFT_WINDOWS),
    ("rwin", RawKey::RIGHT_WINDOWS),
    ("apps", RawKey::APPS_KEY),
    ("application", RawKey::APPS_KEY),
    ("contextmenu", RawKey::APPS_KEY),
    ("num0", RawKey::NUMPAD0),
    ("num1", RawKey::NUMPAD1),
    ("num2", RawKey::NUMPAD2),
    ("num3", RawKey::NUMPAD3),
    ("num4", RawKey::NUMPAD4),
    ("num5", RawKey::NUMPAD5),
    ("num6", RawKey::NUMPAD6),
    ("num7", RawKey::NUMPAD7),
    ("num8", RawKey::NUMPAD8),
    ("num9", RawKey::NUMPAD9),
    ("multiply", RawKey::NUMPAD_MULTIPLY),
    ("add", RawKey::NUMPAD_ADD),
    ("subtract", RawKey::NUMPAD_SUBTRACT),
    ("decimal", RawKey::NUMPAD_DOT),
    ("divide", RawKey::NUMPAD_DIVIDE),
    ("scrlk", RawKey::SCROLL_LOCK),
    ("lshift", RawKey::LEFT_SHIFT),
    ("rshift", RawKey::RIGHT_SHIFT),
    ("lctrl", RawKey::LEFT_CONTROL),
    ("leftctrl", RawKey::LEFT_CONTROL),
    ("rctrl", RawKey::RIGHT_CONTROL),
    ("rightctrl", RawKey::RIGHT_CONTROL),
    ("lalt", RawKey::LEFT_ALT),
    ("lmenu", RawKey::LEFT_ALT),
    ("ralt", RawKey::RIGHT_ALT),
    ("rmenu", RawKey::RIGHT_ALT),
    ("arrowleft", RawKey::LEFT),
    ("leftarrow", RawKey::LEFT),
    ("arrowup", RawKey::UP),
    ("uparrow", RawKey::UP),
    ("arrowright", RawKey::RIGHT),
    ("rightarrow", RawKey::RIGHT),
    ("arrowdown", RawKey::DOWN),
    ("downarrow", RawKey::DOWN),
    ("mute", RawKey::VOLUME_MUTE),
    ("nexttrack", RawKey::MEDIA_NEXT),
    ("prevtrack", RawKey::MEDIA_PREV),
    ("playpause", RawKey::MEDIA_PLAY_PAUSE),
    ("semicolon", RawKey::OEM1),
    ("plus", RawKey::OEM_PLUS),
    ("equals", RawKey::OEM_PLUS),
    ("comma", RawKey::OEM_COMMA),
    ("minus", RawKey::OEM_MINUS),
    ("dash", RawKey::OEM_MINUS),
    ("period", RawKey::OEM_PERIOD),
    ("dot", RawKey::OEM_PERIOD),
    ("slash", RawKey::OEM2),
    ("tilde", RawKey::OEM3),
    ("grave", RawKey::OEM3),
    ("backquote", RawKey::OEM3),
    ("lbracket", RawKey::OEM4),
    ("backslash", RawKey::OEM5),
    ("rbracket", RawKey::OEM6),
    ("quote", RawKey::OEM7),
    ("apostrophe", RawKey::OEM7),
];

// Shared scan codes resolve to the key at that physical position rather
// than the generic or navigation identity carrying the same code.
static SCAN_OVERRIDES: &[(u16, RawKey)] = &[
    (0x01D, RawKey::LEFT_CONTROL),
    (0x02A, RawKey::LEFT_SHIFT),
    (0x038, RawKey::LEFT_ALT),
    (0x047, RawKey::NUMPAD7),
    (0x048, RawKey::NUMPAD8),
    (0x049, RawKey::NUMPAD9),
    (0x04B, RawKey::NUMPAD4),
    (0x04C, RawKey::NUMPAD5),
    (0x04D, RawKey::NUMPAD6),
    (0x04F, RawKey::NUMPAD1),
    (0x050, RawKey::NUMPAD2),
    (0x051, RawKey::NUMPAD3),
    (0x052, RawKey::NUMPAD0),
    (0x053, RawKey::NUMPAD_DOT),
];

static NAME_BY_KEY: LazyLock<HashMap<RawKey, &'static str>> =
    LazyLock::new(|| TABLE.iter().copied().collect());

static KEY_BY_NAME: LazyLock<HashMap<String, RawKey>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(TABLE.len() + ALIASES.len());
    for &(key, name) in TABLE {
        map.insert(name.to_ascii_lowercase(), key);
    }
    for &(alias, key) in ALIASES {
        map.insert(alias.to_string(), key);
    }
    map
});

static KEY_BY_VIRTUAL: LazyLock<HashMap<u8, RawKey>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for &(key, _) in TABLE {
        if key.virtual_code() != 0 {
            map.entry(key.virtual_code()).or_insert(key);
        }
    }
    map
});

static KEY_BY_SCAN: LazyLock<HashMap<u16, RawKey>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for &(key, _) in TABLE {
        if key.scan_code() != 0 {
            map.entry(key.scan_code()).or_insert(key);
        }
    }
    for &(sc, key) in SCAN_OVERRIDES {
        map.insert(sc, key);
    }
    map
});

/// Canonical name of a well-known identity.
pub(crate) fn name_of(key: RawKey) -> Option<&'static str> {
    NAME_BY_KEY.get(&key).copied()
}

pub(crate) fn is_known(key: RawKey) -> bool {
    NAME_BY_KEY.contains_key(&key)
}

/// Case-insensitive lookup by canonical name or alias.
pub(crate) fn by_name(lower: &str) -> Option<RawKey> {
    KEY_BY_NAME.get(lower).copied()
}

pub(crate) fn by_virtual(vk: u8) -> Option<RawKey> {
    KEY_BY_VIRTUAL.get(&vk).copied()
}

pub(crate) fn by_scan(sc: u16) -> Option<RawKey> {
    KEY_BY_SCAN.get(&sc).copied()
}
