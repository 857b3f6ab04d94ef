// Rawhook Callback Decoding
// Pure translation from raw hook parameters to (identity, edge)

use crate::event::Action;
use crate::hook::args::{messages as msg, KeyboardArgs, MouseArgs};
use crate::key::RawKey;

/// Result of decoding one mouse hook message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MouseDecoded {
    /// A button edge.
    Button { key: RawKey, action: Action },
    /// A wheel detent; reported downstream as an immediate press+release
    /// pair because wheel ticks have no held state.
    Wheel { key: RawKey },
    /// Mouse-move or anything else this layer does not interpret.
    PassThrough,
}

/// Decode a low-level keyboard message. Returns `None` for messages that
/// carry no key edge.
pub(crate) fn keyboard_low_level(wparam: u32, args: &KeyboardArgs) -> Option<(RawKey, Action)> {
    let action = match wparam {
        msg::WM_KEYDOWN | msg::WM_SYSKEYDOWN => Action::Press,
        msg::WM_KEYUP | msg::WM_SYSKEYUP => Action::Release,
        _ => return None,
    };
    let key = RawKey::resolve(args.vk as u8, args.scan as u16, args.extended());
    Some((key, action))
}

/// Decode a thread-local keyboard message, where wParam is the packed
/// virtual code and bit 31 of lParam is the transition state.
pub(crate) fn keyboard_thread(wparam: u32, lparam: isize) -> (RawKey, Action) {
    let action = if (lparam as u32) & (1 << 31) == 0 {
        Action::Press
    } else {
        Action::Release
    };
    (RawKey::resolve_virtual(wparam as u8), action)
}

/// Decode a mouse message from either hook family.
///
/// Every down code maps to exactly one identity and the matching up code
/// maps to that same identity; extra buttons disambiguate through the
/// 16-bit high word of the auxiliary data, wheels through its sign.
pub(crate) fn mouse(wparam: u32, args: &MouseArgs) -> MouseDecoded {
    use MouseDecoded::*;

    match wparam {
        msg::WM_LBUTTONDOWN => Button { key: RawKey::LEFT_BUTTON, action: Action::Press },
        msg::WM_LBUTTONUP => Button { key: RawKey::LEFT_BUTTON, action: Action::Release },
        msg::WM_RBUTTONDOWN => Button { key: RawKey::RIGHT_BUTTON, action: Action::Press },
        msg::WM_RBUTTONUP => Button { key: RawKey::RIGHT_BUTTON, action: Action::Release },
        msg::WM_MBUTTONDOWN => Button { key: RawKey::MIDDLE_BUTTON, action: Action::Press },
        msg::WM_MBUTTONUP => Button { key: RawKey::MIDDLE_BUTTON, action: Action::Release },
        msg::WM_XBUTTONDOWN | msg::WM_XBUTTONUP => {
            let key = match args.xbutton() {
                1 => RawKey::EXTRA_BUTTON1,
                2 => RawKey::EXTRA_BUTTON2,
                _ => return PassThrough,
            };
            let action = if wparam == msg::WM_XBUTTONDOWN {
                Action::Press
            } else {
                Action::Release
            };
            Button { key, action }
        }
        msg::WM_MOUSEWHEEL => match args.wheel_delta() {
            d if d > 0 => Wheel { key: RawKey::WHEEL_UP },
            d if d < 0 => Wheel { key: RawKey::WHEEL_DOWN },
            _ => PassThrough,
        },
        msg::WM_MOUSEHWHEEL => match args.wheel_delta() {
            d if d > 0 => Wheel { key: RawKey::WHEEL_RIGHT },
            d if d < 0 => Wheel { key: RawKey::WHEEL_LEFT },
            _ => PassThrough,
        },
        _ => PassThrough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::args::kbd_flags;

    #[test]
    fn test_keyboard_transitions() {
        let args = KeyboardArgs::new(0x41, 0x1E, 0);
        assert_eq!(
            keyboard_low_level(msg::WM_KEYDOWN, &args),
            Some((RawKey::A, Action::Press))
        );
        assert_eq!(
            keyboard_low_level(msg::WM_SYSKEYDOWN, &args),
            Some((RawKey::A, Action::Press))
        );
        assert_eq!(
            keyboard_low_level(msg::WM_KEYUP, &args),
            Some((RawKey::A, Action::Release))
        );
        assert_eq!(
            keyboard_low_level(msg::WM_SYSKEYUP, &args),
            Some((RawKey::A, Action::Release))
        );
        assert_eq!(keyboard_low_level(0x0102, &args), None);
    }

    #[test]
    fn test_keyboard_extended_modifier() {
        // Right Control arrives as the generic VK 0x11 only on hooks that
        // strip side information; the low-level hook reports VK 0xA3.
        let args = KeyboardArgs::new(0xA3, 0x1D, kbd_flags::EXTENDED);
        let (key, _) = keyboard_low_level(msg::WM_KEYDOWN, &args).unwrap();
        assert_eq!(key, RawKey::RIGHT_CONTROL);
    }

    #[test]
    fn test_keyboard_generic_vk_wins_over_scan() {
        let args = KeyboardArgs::new(0x10, 0x36, 0);
        let (key, _) = keyboard_low_level(msg::WM_KEYDOWN, &args).unwrap();
        assert_eq!(key, RawKey::SHIFT);
    }

    #[test]
    fn test_keyboard_thread_uses_bit_31() {
        assert_eq!(keyboard_thread(0x41, 0), (RawKey::A, Action::Press));
        assert_eq!(
            keyboard_thread(0x41, (1i64 << 31) as isize),
            (RawKey::A, Action::Release)
        );
    }

    #[test]
    fn test_mouse_buttons_map_consistently() {
        let args = MouseArgs::default();
        assert_eq!(
            mouse(msg::WM_LBUTTONDOWN, &args),
            MouseDecoded::Button { key: RawKey::LEFT_BUTTON, action: Action::Press }
        );
        assert_eq!(
            mouse(msg::WM_RBUTTONDOWN, &args),
            MouseDecoded::Button { key: RawKey::RIGHT_BUTTON, action: Action::Press }
        );
        assert_eq!(
            mouse(msg::WM_RBUTTONUP, &args),
            MouseDecoded::Button { key: RawKey::RIGHT_BUTTON, action: Action::Release }
        );
        assert_eq!(
            mouse(msg::WM_MBUTTONUP, &args),
            MouseDecoded::Button { key: RawKey::MIDDLE_BUTTON, action: Action::Release }
        );
    }

    #[test]
    fn test_extra_buttons_disambiguate_by_high_word() {
        for (field, key) in [(1u32, RawKey::EXTRA_BUTTON1), (2, RawKey::EXTRA_BUTTON2)] {
            let args = MouseArgs::with_data(field << 16);
            assert_eq!(
                mouse(msg::WM_XBUTTONDOWN, &args),
                MouseDecoded::Button { key, action: Action::Press }
            );
            assert_eq!(
                mouse(msg::WM_XBUTTONUP, &args),
                MouseDecoded::Button { key, action: Action::Release }
            );
        }
        let unknown = MouseArgs::with_data(7 << 16);
        assert_eq!(mouse(msg::WM_XBUTTONDOWN, &unknown), MouseDecoded::PassThrough);
    }

    #[test]
    fn test_wheel_direction_from_delta_sign() {
        let up = MouseArgs::with_data((msg::WHEEL_DELTA as u16 as u32) << 16);
        assert_eq!(mouse(msg::WM_MOUSEWHEEL, &up), MouseDecoded::Wheel { key: RawKey::WHEEL_UP });

        let down = MouseArgs::with_data(((-msg::WHEEL_DELTA) as u16 as u32) << 16);
        assert_eq!(
            mouse(msg::WM_MOUSEWHEEL, &down),
            MouseDecoded::Wheel { key: RawKey::WHEEL_DOWN }
        );

        let right = MouseArgs::with_data((msg::WHEEL_DELTA as u16 as u32) << 16);
        assert_eq!(
            mouse(msg::WM_MOUSEHWHEEL, &right),
            MouseDecoded::Wheel { key: RawKey::WHEEL_RIGHT }
        );

        let left = MouseArgs::with_data(((-msg::WHEEL_DELTA) as u16 as u32) << 16);
        assert_eq!(
            mouse(msg::WM_MOUSEHWHEEL, &left),
            MouseDecoded::Wheel { key: RawKey::WHEEL_LEFT }
        );
    }

    #[test]
    fn test_mouse_move_passes_through() {
        assert_eq!(mouse(msg::WM_MOUSEMOVE, &MouseArgs::default()), MouseDecoded::PassThrough);
        assert_eq!(mouse(0x02FF, &MouseArgs::default()), MouseDecoded::PassThrough);
    }
}
