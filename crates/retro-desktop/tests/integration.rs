//! Integration tests for DesktopEngine
//!
//! These tests verify the full desktop workflow including:
//! - Window lifecycle (open, minimize, maximize, close, reopen)
//! - Focus fallback and z-order across many operations
//! - Pointer-driven move and resize through the input router
//! - Taskbar, keyboard, start menu and Run dialog policies
//! - Custom registries and the JSON render snapshot

use std::cell::RefCell;
use std::rc::Rc;

use retro_desktop::window::invariants::check_all_invariants;
use retro_desktop::{
    DesktopEngine, DesktopError, DesktopMenuAction, KeyInput, Rect, RunOutcome, StartMenuAction, StartMenuOutcome,
    WindowId, WindowObserver, WindowRegistry, MIN_HEIGHT, MIN_WIDTH, RUN_WINDOW,
};

fn engine() -> DesktopEngine {
    let mut engine = DesktopEngine::new();
    engine.init(1920.0, 1080.0);
    engine
}

fn assert_valid(engine: &DesktopEngine) {
    let violations = check_all_invariants(&engine.windows);
    assert!(violations.is_empty(), "{:?}", violations);
}

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_window_lifecycle_full() {
    let mut engine = engine();

    // Open
    engine.open_window("about").unwrap();
    let about = engine.windows.get("about").unwrap();
    assert!(about.is_open);
    assert_eq!(about.z_index, 21);
    assert_eq!(about.position, Rect::new(100.0, 100.0, 360.0, 260.0));

    // Move
    engine.start_move_drag("about", 200.0, 110.0).unwrap();
    engine.handle_pointer_move(300.0, 210.0);
    engine.handle_pointer_up();
    assert_eq!(engine.windows.get("about").unwrap().position, Rect::new(200.0, 200.0, 360.0, 260.0));

    // Minimize
    engine.minimize_window("about").unwrap();
    assert!(engine.windows.get("about").unwrap().is_minimized);
    assert!(engine.windows.active_id().is_none());

    // Restore from taskbar
    engine.taskbar_click("about").unwrap();
    assert!(!engine.windows.get("about").unwrap().is_minimized);
    assert!(engine.windows.is_active("about"));

    // Maximize and restore
    engine.title_bar_double_click("about").unwrap();
    let about = engine.windows.get("about").unwrap();
    assert_eq!(about.display_rect(engine.workspace()), engine.workspace());
    engine.title_bar_double_click("about").unwrap();
    let about = engine.windows.get("about").unwrap();
    assert_eq!(about.display_rect(engine.workspace()), about.position);

    // Close and reopen keeps the dragged geometry
    engine.close_window("about").unwrap();
    assert!(!engine.windows.get("about").unwrap().is_open);
    assert!(engine.windows.open_order().is_empty());
    engine.open_window("about").unwrap();
    assert_eq!(engine.windows.get("about").unwrap().position, Rect::new(200.0, 200.0, 360.0, 260.0));

    assert_valid(&engine);
}

#[test]
fn test_unknown_window_leaves_state_untouched() {
    let mut engine = engine();
    engine.open_window("about").unwrap();
    let before = engine.snapshot();

    for result in [
        engine.open_window("solitaire2"),
        engine.close_window("solitaire2"),
        engine.minimize_window("solitaire2"),
        engine.toggle_maximize("solitaire2"),
        engine.focus_window("solitaire2"),
        engine.taskbar_click("solitaire2"),
        engine.start_move_drag("solitaire2", 0.0, 0.0),
    ] {
        assert!(matches!(result, Err(DesktopError::UnknownWindow(_))));
    }

    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_focus_fallback_uses_open_order() {
    let mut engine = engine();
    for id in ["about", "projects", "contact", "resume"] {
        engine.open_window(id).unwrap();
    }

    // Raise the oldest window above everything, then focus the newest
    engine.window_mouse_down("about").unwrap();
    engine.window_mouse_down("resume").unwrap();

    engine.close_window("resume").unwrap();
    assert!(engine.windows.is_active("contact"));

    engine.close_window("projects").unwrap();
    assert!(engine.windows.is_active("contact"));

    engine.close_window("contact").unwrap();
    assert!(engine.windows.is_active("about"));

    engine.close_window("about").unwrap();
    assert!(engine.windows.active_id().is_none());
    assert_valid(&engine);
}

#[test]
fn test_focus_fallback_skips_minimized_windows() {
    let mut engine = engine();
    for id in ["about", "projects", "contact"] {
        engine.open_window(id).unwrap();
    }
    engine.minimize_window("contact").unwrap();
    engine.window_mouse_down("projects").unwrap();

    engine.close_window("projects").unwrap();
    assert!(engine.windows.is_active("about"));
    assert_valid(&engine);

    // Alt+F4 closes the visible window and leaves the minimized one alone
    let result = engine.handle_key(&KeyInput::new("F4").alt()).unwrap();
    assert!(result.handled);
    assert!(!engine.windows.get("about").unwrap().is_open);
    assert!(engine.windows.active_id().is_none());

    let result = engine.handle_key(&KeyInput::new("F4").alt()).unwrap();
    assert!(!result.handled);
    let contact = engine.windows.get("contact").unwrap();
    assert!(contact.is_open && contact.is_minimized);
    assert_valid(&engine);
}

#[test]
fn test_z_order_across_many_operations() {
    let mut engine = engine();
    let ids = ["about", "projects", "contact", "mycomputer", "resume", "terminal"];
    for id in ids {
        engine.open_window(id).unwrap();
    }

    for step in 0..60 {
        let id = ids[(step * 7) % ids.len()];
        engine.window_mouse_down(id).unwrap();

        let top = engine.windows.get(id).unwrap().z_index;
        assert_eq!(top, engine.windows.z_counter());
        for other in ids.iter().filter(|&&other| other != id) {
            assert!(engine.windows.get(other).unwrap().z_index < top);
        }
    }
    assert_valid(&engine);
}

#[test]
fn test_observers_see_lifecycle() {
    #[derive(Default)]
    struct RecentPrograms(Rc<RefCell<Vec<WindowId>>>);

    impl WindowObserver for RecentPrograms {
        fn on_open(&mut self, id: &WindowId) {
            let mut recent = self.0.borrow_mut();
            recent.retain(|existing| existing != id);
            recent.insert(0, id.clone());
        }
    }

    let recent = Rc::new(RefCell::new(Vec::new()));
    let mut engine = engine();
    engine.windows.add_observer(Box::new(RecentPrograms(Rc::clone(&recent))));

    engine.open_window("paint").unwrap();
    engine.open_window("notepad").unwrap();
    engine.open_window("paint").unwrap();

    assert_eq!(*recent.borrow(), vec![WindowId::new("paint"), WindowId::new("notepad")]);
}

// =============================================================================
// Pointer Gesture Tests
// =============================================================================

#[test]
fn test_concrete_resize_scenario() {
    let mut engine = engine();
    engine.open_window("about").unwrap();
    assert_eq!(engine.windows.get("about").unwrap().z_index, 21);

    engine.start_resize_drag("about", "se", 460.0, 360.0).unwrap();
    engine.handle_pointer_move(560.0, 310.0);
    engine.handle_pointer_up();
    let r = engine.windows.get("about").unwrap().position;
    assert!((r.width - 460.0).abs() < 0.001);
    assert!((r.height - 210.0).abs() < 0.001);

    engine.start_resize_drag("about", "nw", 100.0, 100.0).unwrap();
    let mut lefts = Vec::new();
    for x in [400.0, 450.0, 700.0, 1200.0] {
        engine.handle_pointer_move(x, 100.0);
        let r = engine.windows.get("about").unwrap().position;
        assert!((r.width - MIN_WIDTH).abs() < 0.001);
        lefts.push(r.left);
    }
    engine.handle_pointer_up();
    assert!(lefts.windows(2).all(|pair| (pair[0] - pair[1]).abs() < 0.001));
    assert!((lefts[0] - 360.0).abs() < 0.001);
}

#[test]
fn test_north_resize_floor() {
    let mut engine = engine();
    engine.open_window("about").unwrap();
    engine.start_resize_drag("about", "n", 200.0, 100.0).unwrap();

    for y in [300.0, 500.0] {
        engine.handle_pointer_move(200.0, y);
        let r = engine.windows.get("about").unwrap().position;
        assert!((r.height - MIN_HEIGHT).abs() < 0.001);
        assert!((r.top - 210.0).abs() < 0.001);
    }
}

#[test]
fn test_maximized_window_rejects_gestures() {
    let mut engine = engine();
    engine.open_window("about").unwrap();
    engine.toggle_maximize("about").unwrap();
    let before = engine.snapshot();

    engine.start_move_drag("about", 10.0, 10.0).unwrap();
    engine.start_resize_drag("about", "se", 10.0, 10.0).unwrap();
    assert!(!engine.handle_pointer_move(500.0, 500.0).is_handled());
    assert!(!engine.handle_pointer_up().is_handled());

    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_drag_survives_off_screen() {
    let mut engine = engine();
    engine.open_window("notepad").unwrap();
    engine.start_move_drag("notepad", 200.0, 130.0).unwrap();
    engine.handle_pointer_move(-800.0, -400.0);
    engine.handle_pointer_up();

    let r = engine.windows.get("notepad").unwrap().position;
    assert!((r.left - (-820.0)).abs() < 0.001);
    assert!((r.top - (-410.0)).abs() < 0.001);
}

#[test]
fn test_embedded_content_resize() {
    let mut engine = engine();
    engine.open_window("minesweeper").unwrap();

    // Fixed-size windows ignore resize handles but accept content sizing
    engine.start_resize_drag("minesweeper", "se", 320.0, 420.0).unwrap();
    assert!(!engine.windows.is_interacting());

    assert!(engine.resize_content("minesweeper", 480.0, 560.0).unwrap());
    assert!(!engine.resize_content("minesweeper", 480.0, 560.0).unwrap());
    let r = engine.windows.get("minesweeper").unwrap().position;
    assert_eq!(r, Rect::new(100.0, 100.0, 480.0, 560.0));
}

// =============================================================================
// Shell Policy Tests
// =============================================================================

#[test]
fn test_keyboard_session() {
    let mut engine = engine();

    engine.handle_key(&KeyInput::new("1").ctrl()).unwrap();
    engine.handle_key(&KeyInput::new("5").ctrl()).unwrap();
    assert!(engine.windows.is_active("resume"));

    let result = engine.handle_key(&KeyInput::new("r").ctrl()).unwrap();
    assert!(result.prevent_default);
    assert!(engine.windows.is_active(RUN_WINDOW));

    // Typing in the Run box does not trigger shortcuts
    engine.handle_key(&KeyInput::new("m").ctrl().in_text_field()).unwrap();
    assert!(engine.windows.get(RUN_WINDOW).unwrap().is_visible());

    engine.handle_key(&KeyInput::new("Escape").in_text_field()).unwrap();
    assert!(!engine.windows.get(RUN_WINDOW).unwrap().is_open);
    assert!(engine.windows.is_active("resume"));

    engine.handle_key(&KeyInput::new("F4").alt()).unwrap();
    assert!(!engine.windows.get("resume").unwrap().is_open);
    assert!(engine.windows.is_active("about"));

    engine.handle_key(&KeyInput::new("Escape")).unwrap();
    assert!(engine.windows.get("about").unwrap().is_minimized);
    assert_valid(&engine);
}

#[test]
fn test_run_dialog_flow() {
    let mut engine = engine();
    engine.start_menu_select(StartMenuAction::Run).unwrap();
    assert!(engine.windows.is_active(RUN_WINDOW));

    match engine.run_command("doom.exe").unwrap() {
        RunOutcome::NotFound { message } => assert!(message.contains("'doom.exe'")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(engine.windows.get(RUN_WINDOW).unwrap().is_open);

    assert_eq!(
        engine.run_command("MyComputer").unwrap(),
        RunOutcome::Opened { id: WindowId::new("mycomputer") }
    );
    assert!(!engine.windows.get(RUN_WINDOW).unwrap().is_open);
    assert!(engine.windows.is_active("mycomputer"));
    assert_valid(&engine);
}

#[test]
fn test_shutdown_from_start_menu() {
    let mut engine = engine();
    engine.toggle_start_menu();
    assert!(engine.snapshot().start_menu_open);

    let outcome = engine.start_menu_select(StartMenuAction::ShutDown).unwrap();
    assert_eq!(outcome, StartMenuOutcome::ShutDown);
    assert!(!engine.snapshot().start_menu_open);
}

#[test]
fn test_desktop_properties_menu() {
    let mut engine = engine();
    engine.open_window("about").unwrap();

    engine.desktop_menu_select(DesktopMenuAction::Properties).unwrap();
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.active_id, Some(WindowId::new("settings")));
    assert!(snapshot.window("about").unwrap().is_open);

    // Without a settings window the entry reports the missing id
    let registry = WindowRegistry::from_json(
        r#"[{"id": "editor", "title": "Editor", "defaultGeometry": {"top": 40, "left": 40, "width": 640, "height": 480}}]"#,
    )
    .unwrap();
    let mut engine = DesktopEngine::with_registry(registry);
    let err = engine.desktop_menu_select(DesktopMenuAction::Properties).unwrap_err();
    assert!(matches!(err, DesktopError::UnknownWindow(_)));
    assert_valid(&engine);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_custom_registry() {
    let registry = WindowRegistry::from_json(
        r#"[
            {"id": "editor", "title": "Editor", "defaultGeometry": {"top": 40, "left": 40, "width": 640, "height": 480}},
            {"id": "clock", "title": "Clock", "defaultGeometry": {"top": 10, "left": 900, "width": 200, "height": 150},
             "resizable": false, "hideMaximize": true}
        ]"#,
    )
    .unwrap();
    let mut engine = DesktopEngine::with_registry(registry);
    engine.init(1280.0, 800.0);

    engine.open_window("editor").unwrap();
    engine.open_window("clock").unwrap();
    assert!(engine.open_window("about").is_err());

    // No Run dialog in this registry: Escape falls through to the active window
    engine.handle_key(&KeyInput::new("Escape")).unwrap();
    assert!(engine.windows.get("clock").unwrap().is_minimized);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.windows.len(), 2);
    assert!(snapshot.window("clock").unwrap().hide_maximize);
    assert_valid(&engine);
}

#[test]
fn test_snapshot_json_round_trip_shape() {
    let mut engine = engine();
    engine.open_window("about").unwrap();
    engine.open_window("resume").unwrap();
    engine.toggle_maximize("resume").unwrap();

    let json: serde_json::Value = serde_json::from_str(&engine.snapshot_json().unwrap()).unwrap();
    assert_eq!(json["openOrder"], serde_json::json!(["about", "resume"]));
    assert_eq!(json["activeId"], "resume");
    assert_eq!(json["interacting"], false);

    let resume = json["windows"]
        .as_array()
        .unwrap()
        .iter()
        .find(|w| w["id"] == "resume")
        .unwrap();
    assert_eq!(resume["isMaximized"], true);
    assert_eq!(resume["displayRect"]["height"], 1050.0);
    assert_eq!(resume["position"]["width"], 760.0);
}
