//! Window manager for lifecycle, focus, z-order and interactive geometry

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{DesktopError, Result};
use crate::input::Interaction;
use crate::math::{ResizeDirection, Vec2};
use super::{RegistryEntry, WindowId, WindowObserver, WindowRecord, WindowRegistry};

/// Value of the z counter before the first window is raised
pub const INITIAL_Z_COUNTER: u32 = 20;

/// z-index every record starts with
pub const INITIAL_WINDOW_Z: u32 = 10;

/// Window manager owning every window record
///
/// This is the only writer of window state. Presentation code reads records
/// and calls the operations below; ids come from the closed registry and
/// anything else is rejected with [`DesktopError::UnknownWindow`].
pub struct WindowManager {
    /// Static window configuration
    registry: WindowRegistry,
    /// One record per registry entry, created up front and never removed
    records: HashMap<WindowId, WindowRecord>,
    /// Open windows in the order they were opened (taskbar order)
    open_order: Vec<WindowId>,
    /// Focused window
    active_id: Option<WindowId>,
    /// Last z-index handed out
    z_counter: u32,
    /// Drag or resize currently driven by the pointer
    interaction: Option<Interaction>,
    /// Lifecycle listeners (recent programs, sounds)
    observers: Vec<Box<dyn WindowObserver>>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WindowRegistry::default())
    }
}

impl WindowManager {
    /// Create a window manager with one closed record per registry entry
    pub fn new(registry: WindowRegistry) -> Self {
        let records = registry
            .iter()
            .map(|entry| {
                let record = WindowRecord::closed(entry.default_geometry, INITIAL_WINDOW_Z);
                (entry.id.clone(), record)
            })
            .collect();

        Self {
            registry,
            records,
            open_order: Vec::new(),
            active_id: None,
            z_counter: INITIAL_Z_COUNTER,
            interaction: None,
            observers: Vec::new(),
        }
    }

    /// Register a lifecycle observer
    pub fn add_observer(&mut self, observer: Box<dyn WindowObserver>) {
        self.observers.push(observer);
    }

    // =========================================================================
    // Read access
    // =========================================================================

    /// Get the registry
    #[inline]
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Get a window record
    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.records.get(id)
    }

    /// Iterate registry entries with their records, in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&RegistryEntry, &WindowRecord)> + '_ {
        self.registry
            .iter()
            .filter_map(|entry| self.records.get(entry.id.as_str()).map(|record| (entry, record)))
    }

    /// Open windows in opening order
    #[inline]
    pub fn open_order(&self) -> &[WindowId] {
        &self.open_order
    }

    /// Get the focused window ID
    #[inline]
    pub fn active_id(&self) -> Option<&WindowId> {
        self.active_id.as_ref()
    }

    /// Check if `id` is the focused window
    pub fn is_active(&self, id: &str) -> bool {
        self.active_id.as_ref().is_some_and(|active| active == id)
    }

    /// Last z-index handed out
    #[inline]
    pub fn z_counter(&self) -> u32 {
        self.z_counter
    }

    /// Current drag or resize gesture
    #[inline]
    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    /// Check if a drag or resize is in flight
    #[inline]
    pub fn is_interacting(&self) -> bool {
        self.interaction.is_some()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open a window (or restore it from the taskbar) and focus it
    ///
    /// Maximize state and geometry are kept from the previous session of
    /// the window.
    pub fn open(&mut self, id: &str) -> Result<()> {
        let record = self.record_mut(id)?;
        record.is_open = true;
        record.is_minimized = false;

        self.push_open_order(id);
        self.raise(id);
        trace!(window = id, "opened");

        self.notify(id, |observer, id| observer.on_open(id));
        self.debug_check_invariants();
        Ok(())
    }

    /// Close a window
    ///
    /// If it was focused, focus falls back to the most recently opened
    /// window that is still visible, not to the topmost one. Minimized
    /// windows are skipped; with none left, nothing is focused.
    pub fn close(&mut self, id: &str) -> Result<()> {
        let record = self.record_mut(id)?;
        record.is_open = false;
        record.is_maximized = false;
        record.is_minimized = false;

        self.open_order.retain(|open| open != id);
        if self.is_active(id) {
            self.active_id = self
                .open_order
                .iter()
                .rev()
                .find(|open| self.records.get(*open).is_some_and(WindowRecord::is_visible))
                .cloned();
        }
        trace!(window = id, active = ?self.active_id, "closed");

        self.notify(id, |observer, id| observer.on_close(id));
        self.debug_check_invariants();
        Ok(())
    }

    /// Minimize a window
    ///
    /// Clears focus if the window had it; no other window is focused in
    /// its place.
    pub fn minimize(&mut self, id: &str) -> Result<()> {
        let record = self.record_mut(id)?;
        if !record.is_open {
            debug!(window = id, "ignoring minimize of closed window");
            return Ok(());
        }
        record.is_minimized = true;

        if self.is_active(id) {
            self.active_id = None;
        }
        trace!(window = id, "minimized");

        self.notify(id, |observer, id| observer.on_minimize(id));
        self.debug_check_invariants();
        Ok(())
    }

    /// Toggle maximize, or restore a hidden window
    ///
    /// A closed or minimized window is shown instead of being maximized.
    pub fn toggle_maximize(&mut self, id: &str) -> Result<()> {
        let record = self.record_mut(id)?;
        if !record.is_open || record.is_minimized {
            record.is_open = true;
            record.is_minimized = false;
            self.push_open_order(id);
        } else {
            record.is_maximized = !record.is_maximized;
        }

        self.raise(id);
        trace!(window = id, "toggled maximize");
        self.debug_check_invariants();
        Ok(())
    }

    /// Raise a window to the top of the stack and focus it
    ///
    /// Hidden windows are ignored; use [`WindowManager::open`] to show them.
    pub fn bring_to_front(&mut self, id: &str) -> Result<()> {
        let record = self.record(id)?;
        if !record.is_visible() {
            debug!(window = id, "ignoring bring to front of hidden window");
            return Ok(());
        }

        self.raise(id);
        self.debug_check_invariants();
        Ok(())
    }

    // =========================================================================
    // Interactive geometry
    // =========================================================================

    /// Start moving a window with the pointer at `pointer`
    ///
    /// Ignored for hidden or maximized windows. Replaces any gesture already
    /// in flight.
    pub fn begin_drag(&mut self, id: &str, pointer: Vec2) -> Result<()> {
        let record = self.record(id)?;
        if !record.accepts_gestures() {
            debug!(window = id, "ignoring drag start");
            return Ok(());
        }
        let start_rect = record.position;

        self.raise(id);
        self.interaction = Some(Interaction::Drag {
            window_id: WindowId::new(id),
            start_pointer: pointer,
            start_rect,
        });
        trace!(window = id, x = pointer.x, y = pointer.y, "drag started");
        Ok(())
    }

    /// Start resizing a window from the handle on `direction`
    ///
    /// Ignored for hidden, maximized or fixed-size windows. Replaces any
    /// gesture already in flight.
    pub fn begin_resize(&mut self, id: &str, pointer: Vec2, direction: ResizeDirection) -> Result<()> {
        let record = self.record(id)?;
        let resizable = self.registry.get(id).is_some_and(|entry| entry.resizable);
        if !record.accepts_gestures() || !resizable {
            debug!(window = id, %direction, "ignoring resize start");
            return Ok(());
        }
        let start_rect = record.position;

        self.raise(id);
        self.interaction = Some(Interaction::Resize {
            window_id: WindowId::new(id),
            direction,
            start_pointer: pointer,
            start_rect,
        });
        trace!(window = id, %direction, "resize started");
        Ok(())
    }

    /// Apply the in-flight gesture for a pointer at `pointer`
    ///
    /// Returns `false` when nothing is in flight. A gesture whose window was
    /// hidden or maximized meanwhile is dropped without touching geometry.
    pub fn pointer_move(&mut self, pointer: Vec2) -> bool {
        let Some(interaction) = self.interaction.as_ref() else {
            return false;
        };
        let rect = interaction.rect_at(pointer);

        match self.records.get_mut(interaction.window_id().as_str()) {
            Some(record) if record.accepts_gestures() => {
                record.position = rect;
                true
            }
            _ => {
                debug!("dropping gesture on window that no longer accepts it");
                self.interaction = None;
                false
            }
        }
    }

    /// End the in-flight gesture, keeping the last geometry
    ///
    /// Returns whether a gesture was in flight.
    pub fn end_interaction(&mut self) -> bool {
        let ended = self.interaction.take();
        if let Some(interaction) = &ended {
            trace!(window = %interaction.window_id(), "gesture ended");
        }
        ended.is_some()
    }

    /// Set a window's size on behalf of its content (e.g. a game board)
    ///
    /// Returns `false` without touching the record when the size is
    /// already current.
    pub fn resize_content(&mut self, id: &str, width: f32, height: f32) -> Result<bool> {
        let record = self.record_mut(id)?;
        if record.position.width == width && record.position.height == height {
            return Ok(false);
        }

        record.position.width = width;
        record.position.height = height;
        trace!(window = id, width, height, "content resized");
        Ok(true)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn record(&self, id: &str) -> Result<&WindowRecord> {
        self.records
            .get(id)
            .ok_or_else(|| DesktopError::UnknownWindow(id.to_string()))
    }

    fn record_mut(&mut self, id: &str) -> Result<&mut WindowRecord> {
        self.records
            .get_mut(id)
            .ok_or_else(|| DesktopError::UnknownWindow(id.to_string()))
    }

    fn push_open_order(&mut self, id: &str) {
        if !self.open_order.iter().any(|open| open == id) {
            self.open_order.push(WindowId::new(id));
        }
    }

    /// Sole writer of `z_index`. Caller has validated `id`.
    fn raise(&mut self, id: &str) {
        self.z_counter = self.z_counter.saturating_add(1);
        if let Some(record) = self.records.get_mut(id) {
            record.z_index = self.z_counter;
        }
        self.active_id = Some(WindowId::new(id));
    }

    fn notify(&mut self, id: &str, event: fn(&mut dyn WindowObserver, &WindowId)) {
        if self.observers.is_empty() {
            return;
        }
        let id = WindowId::new(id);
        for observer in &mut self.observers {
            event(observer.as_mut(), &id);
        }
    }

    #[inline]
    fn debug_check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            let violations = super::invariants::check_all_invariants(self);
            debug_assert!(
                violations.is_empty(),
                "window manager invariants violated: {:?}",
                violations
            );
        }
    }
}
