//! Runtime-checkable window manager invariants
//!
//! Checked after every mutating operation in debug builds and used directly
//! by tests.
//!
//! # Invariants
//!
//! 1. **Record Completeness**: Every registry id has exactly one record
//! 2. **Open Order Consistency**: `open_order` lists each open window once and nothing else
//! 3. **Active Visibility**: The active window is open and not minimized
//! 4. **Closed Flags**: A closed window is neither minimized nor maximized
//! 5. **Z Monotonicity**: No z-index exceeds the z counter

use super::{WindowManager, INITIAL_Z_COUNTER};

/// An invariant violation with details
#[derive(Clone, Debug)]
pub struct InvariantViolation {
    /// Name of the violated invariant
    pub invariant: &'static str,
    /// Description of what went wrong
    pub description: String,
}

/// Check all window manager invariants.
///
/// Returns a list of violations (empty if all invariants hold).
pub fn check_all_invariants(wm: &WindowManager) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    violations.extend(check_record_completeness(wm));
    violations.extend(check_open_order_consistency(wm));
    violations.extend(check_active_visibility(wm));
    violations.extend(check_closed_flags(wm));
    violations.extend(check_z_monotonicity(wm));

    violations
}

/// Invariant 1: Every registry id has exactly one record
fn check_record_completeness(wm: &WindowManager) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    let with_record = wm.iter().count();
    if with_record != wm.registry().len() {
        violations.push(InvariantViolation {
            invariant: "record_completeness",
            description: format!(
                "{} registry entries but only {} have records",
                wm.registry().len(),
                with_record
            ),
        });
    }

    violations
}

/// Invariant 2: `open_order` lists each open window once and nothing else
fn check_open_order_consistency(wm: &WindowManager) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let order = wm.open_order();

    for (i, id) in order.iter().enumerate() {
        if order[..i].contains(id) {
            violations.push(InvariantViolation {
                invariant: "open_order_consistency",
                description: format!("Window {} appears twice in open order", id),
            });
        }
        if !wm.get(id.as_str()).is_some_and(|record| record.is_open) {
            violations.push(InvariantViolation {
                invariant: "open_order_consistency",
                description: format!("Window {} is in open order but not open", id),
            });
        }
    }

    for (entry, record) in wm.iter() {
        if record.is_open && !order.contains(&entry.id) {
            violations.push(InvariantViolation {
                invariant: "open_order_consistency",
                description: format!("Window {} is open but missing from open order", entry.id),
            });
        }
    }

    violations
}

/// Invariant 3: The active window is open and not minimized
fn check_active_visibility(wm: &WindowManager) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if let Some(active) = wm.active_id() {
        match wm.get(active.as_str()) {
            Some(record) if record.is_visible() => {}
            Some(_) => violations.push(InvariantViolation {
                invariant: "active_visibility",
                description: format!("Active window {} is closed or minimized", active),
            }),
            None => violations.push(InvariantViolation {
                invariant: "active_visibility",
                description: format!("Active window {} has no record", active),
            }),
        }
    }

    violations
}

/// Invariant 4: A closed window is neither minimized nor maximized
fn check_closed_flags(wm: &WindowManager) -> Vec<InvariantViolation> {
    wm.iter()
        .filter(|(_, record)| !record.is_open && (record.is_minimized || record.is_maximized))
        .map(|(entry, record)| InvariantViolation {
            invariant: "closed_flags",
            description: format!(
                "Closed window {} has minimized={} maximized={}",
                entry.id, record.is_minimized, record.is_maximized
            ),
        })
        .collect()
}

/// Invariant 5: No z-index exceeds the z counter
fn check_z_monotonicity(wm: &WindowManager) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if wm.z_counter() < INITIAL_Z_COUNTER {
        violations.push(InvariantViolation {
            invariant: "z_monotonicity",
            description: format!("Z counter {} below its initial value", wm.z_counter()),
        });
    }

    for (entry, record) in wm.iter() {
        if record.z_index > wm.z_counter() {
            violations.push(InvariantViolation {
                invariant: "z_monotonicity",
                description: format!(
                    "Window {} has z-index {} above counter {}",
                    entry.id,
                    record.z_index,
                    wm.z_counter()
                ),
            });
        }
    }

    violations
}
