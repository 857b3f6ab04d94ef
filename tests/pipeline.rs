// Rawhook Integration Tests
//
// Drive the whole pipeline with synthetic hook events:
// raw callback parameters -> decode -> focus gate -> press state -> dispatch
//
// Run with: cargo test --test pipeline

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use rawhook::messages as msg;
use rawhook::{
    Action, HookDecision, HookMode, HookSettings, KeyFormat, KeyboardArgs, MouseArgs, NullBackend,
    RawInputHook, RawKey,
};

fn started(mode: HookMode) -> RawInputHook {
    let _ = env_logger::builder().is_test(true).try_init();
    let hook = RawInputHook::with_backend(NullBackend);
    hook.set_focus_predicate(|| true);
    hook.start(mode).expect("start should succeed");
    hook
}

#[test]
fn test_key_press_release_end_to_end() {
    let hook = started(HookMode::Foreground);
    assert!(hook.is_running());

    let downs = Arc::new(Mutex::new(Vec::new()));
    let ups = Arc::new(Mutex::new(Vec::new()));
    let down_log = downs.clone();
    let up_log = ups.clone();
    hook.on_key_down(move |key| down_log.lock().push(key));
    hook.on_key_up(move |key| up_log.lock().push(key));

    // Synthetic low-level event for virtual code 0x41 ("A")
    let args = KeyboardArgs::new(0x41, 0x1E, 0);
    assert_eq!(
        hook.handle_low_level_keyboard(0, msg::WM_KEYDOWN, &args),
        HookDecision::Forward
    );
    assert!(hook.is_running());
    assert!(hook.is_key_down(RawKey::A));

    assert_eq!(
        hook.handle_low_level_keyboard(0, msg::WM_KEYUP, &args),
        HookDecision::Forward
    );
    assert!(hook.is_running());
    assert!(!hook.any_key_down());

    let downs = downs.lock();
    let ups = ups.lock();
    assert_eq!(downs.len(), 1);
    assert_eq!(ups.len(), 1);
    assert_eq!(downs[0], ups[0]);
    assert_eq!(hook.format_key(downs[0], KeyFormat::General), "A");

    hook.stop();
    assert!(!hook.is_running());
}

#[test]
fn test_key_repeat_suppression_across_the_pipeline() {
    let hook = started(HookMode::Background);
    let downs = Arc::new(AtomicUsize::new(0));
    let counter = downs.clone();
    hook.on_key_down(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let args = KeyboardArgs::new(0x20, 0x39, 0);
    for _ in 0..5 {
        hook.handle_low_level_keyboard(0, msg::WM_KEYDOWN, &args);
    }
    hook.handle_low_level_keyboard(0, msg::WM_KEYUP, &args);
    hook.handle_low_level_keyboard(0, msg::WM_KEYDOWN, &args);

    // Five repeats collapse to one notification; a fresh press after the
    // release notifies again.
    assert_eq!(downs.load(Ordering::SeqCst), 2);
}

#[test]
fn test_mouse_buttons_and_wheel_through_the_queue() {
    let hook = started(HookMode::Background);
    let queue = hook.event_queue(16);

    hook.handle_mouse(0, msg::WM_LBUTTONDOWN, &MouseArgs::default());
    hook.handle_mouse(0, msg::WM_LBUTTONUP, &MouseArgs::default());
    hook.handle_mouse(0, msg::WM_XBUTTONDOWN, &MouseArgs::with_data(2 << 16));
    hook.handle_mouse(0, msg::WM_XBUTTONUP, &MouseArgs::with_data(2 << 16));
    let wheel_up = (msg::WHEEL_DELTA as u16 as u32) << 16;
    hook.handle_mouse(0, msg::WM_MOUSEWHEEL, &MouseArgs::with_data(wheel_up));

    let events = queue.drain();
    let expected = [
        (RawKey::LEFT_BUTTON, Action::Press),
        (RawKey::LEFT_BUTTON, Action::Release),
        (RawKey::EXTRA_BUTTON2, Action::Press),
        (RawKey::EXTRA_BUTTON2, Action::Release),
        (RawKey::WHEEL_UP, Action::Press),
        (RawKey::WHEEL_UP, Action::Release),
    ];
    assert_eq!(events.len(), expected.len());
    for (event, (key, action)) in events.iter().zip(expected) {
        assert_eq!((event.key, event.action), (key, action));
    }
}

#[test]
fn test_interception_with_safety_valve_end_to_end() {
    let hook = RawInputHook::with_backend(NullBackend);
    let settings = HookSettings {
        work_in_background: true,
        intercept_messages: true,
        disable_intercept_key: Some(RawKey::ESCAPE),
    };
    hook.start_with_settings(&settings).unwrap();
    assert!(hook.work_in_background());
    assert!(hook.intercept_messages());

    // Handled events are swallowed while interception is on
    let a = KeyboardArgs::new(0x41, 0x1E, 0);
    assert_eq!(
        hook.handle_low_level_keyboard(0, msg::WM_KEYDOWN, &a),
        HookDecision::Swallow
    );

    // Releasing the valve key restores normal routing
    let esc = KeyboardArgs::new(0x1B, 0x01, 0);
    hook.handle_low_level_keyboard(0, msg::WM_KEYDOWN, &esc);
    hook.handle_low_level_keyboard(0, msg::WM_KEYUP, &esc);
    assert!(!hook.intercept_messages());
    assert_eq!(
        hook.handle_low_level_keyboard(0, msg::WM_KEYUP, &a),
        HookDecision::Forward
    );
}

#[test]
fn test_focus_gate_end_to_end() {
    let hook = RawInputHook::with_backend(NullBackend);
    let focused = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let probe = focused.clone();
    hook.set_focus_predicate(move || probe.load(Ordering::SeqCst));
    hook.start(HookMode::Foreground).unwrap();

    let queue = hook.event_queue(8);
    let args = KeyboardArgs::new(0x41, 0x1E, 0);

    // Unfocused: the event is invisible
    hook.handle_low_level_keyboard(0, msg::WM_KEYDOWN, &args);
    assert!(queue.is_empty());
    assert!(!hook.any_key_down());

    // Focused: the same event is processed
    focused.store(true, Ordering::SeqCst);
    hook.handle_low_level_keyboard(0, msg::WM_KEYDOWN, &args);
    assert_eq!(queue.drain().len(), 1);
    assert!(hook.is_key_down(RawKey::A));
}

#[test]
fn test_press_interrupted_by_stop_restart() {
    let hook = started(HookMode::Background);
    let ups = Arc::new(AtomicUsize::new(0));
    let counter = ups.clone();
    hook.on_key_up(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let args = KeyboardArgs::new(0x41, 0x1E, 0);
    hook.handle_low_level_keyboard(0, msg::WM_KEYDOWN, &args);
    hook.stop();
    hook.start(HookMode::Background).unwrap();

    // The press was lost across the restart; its terminal release is
    // still delivered exactly once and nothing underflows.
    hook.handle_low_level_keyboard(0, msg::WM_KEYUP, &args);
    assert_eq!(ups.load(Ordering::SeqCst), 1);
    assert!(!hook.any_key_down());
    assert!(hook.pressed_keys().is_empty());
}

#[test]
fn test_bindings_round_trip_through_config_text() {
    // The textual encoding stored in host config files resolves back to
    // the identity the hook reports.
    let stored = "m5";
    let binding = RawKey::parse(stored);
    assert!(!binding.is_unknown());

    let hook = started(HookMode::Background);
    let seen = Arc::new(Mutex::new(None));
    let slot = seen.clone();
    hook.on_key_down(move |key| *slot.lock() = Some(key));

    hook.handle_mouse(0, msg::WM_XBUTTONDOWN, &MouseArgs::with_data(2 << 16));
    assert_eq!(seen.lock().unwrap(), binding);
    assert_eq!(RawKey::parse(&binding.to_string()), binding);
}
