//! Selection state for the tab switcher.
//!
//! [`TabStack`] owns the configured tabs and two independent projections of
//! them:
//!
//! - the *selector order*, which is the configuration order and never changes,
//! - the *stack order*, a recency ordering used for depth-stacking the content
//!   cards (most recently selected first).
//!
//! The only transition is [`TabStack::select`]. It is always computed from the
//! configuration order, so the resulting stack only depends on the selected
//! index and not on previous selections.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::tab::Tab;
use crate::error::{Result, TabsError};

pub struct TabStack<C> {
    tabs: Vec<Tab<C>>,
    /// Indices into `tabs`, front = active.
    order: Vec<usize>,
    hovering: bool,
    pending: Option<usize>,
}

impl<C> TabStack<C> {
    /// Build a stack from the configured tabs. The initial stack order equals
    /// the configuration order.
    ///
    /// Fails if two tabs share a `value`. An empty list is accepted; the stack
    /// then has no active tab and every selection is a no-op.
    pub fn new(tabs: Vec<Tab<C>>) -> Result<Self> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(tabs.len());
        for (idx, tab) in tabs.iter().enumerate() {
            if let Some(&first) = seen.get(tab.value.as_str()) {
                return Err(TabsError::DuplicateValue {
                    value: tab.value.clone(),
                    first,
                    second: idx,
                });
            }
            seen.insert(tab.value.as_str(), idx);
        }
        let order = (0..tabs.len()).collect();
        Ok(Self {
            tabs,
            order,
            hovering: false,
            pending: None,
        })
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Tabs in configuration (selector bar) order.
    pub fn tabs(&self) -> &[Tab<C>] {
        &self.tabs
    }

    /// Tabs in stack order, front (depth 0) first.
    pub fn stack(&self) -> impl Iterator<Item = &Tab<C>> + '_ {
        self.order.iter().map(|&i| &self.tabs[i])
    }

    /// Stack order as configuration indices.
    pub fn stack_indices(&self) -> &[usize] {
        &self.order
    }

    /// Identifiers in stack order.
    pub fn stack_values(&self) -> Vec<&str> {
        self.stack().map(|t| t.value.as_str()).collect()
    }

    pub fn active(&self) -> Option<&Tab<C>> {
        self.order.first().map(|&i| &self.tabs[i])
    }

    pub fn active_index(&self) -> Option<usize> {
        self.order.first().copied()
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active().is_some_and(|t| t.value == value)
    }

    /// Depth of the tab with the given identifier (0 = active).
    pub fn depth_of(&self, value: &str) -> Option<usize> {
        self.stack().position(|t| t.value == value)
    }

    /// Move the tab at `original_index` (configuration order) to the front.
    ///
    /// The remaining tabs keep their configuration order behind it. Returns the
    /// new active value, or `None` when the index is out of range.
    pub fn select(&mut self, original_index: usize) -> Option<&str> {
        if original_index >= self.tabs.len() {
            debug!(
                index = original_index,
                len = self.tabs.len(),
                "ignoring tab selection out of range"
            );
            return None;
        }
        let mut order: Vec<usize> = (0..self.tabs.len()).collect();
        let selected = order.remove(original_index);
        order.insert(0, selected);
        self.order = order;
        trace!(order = ?self.order, "tab stack reordered");
        Some(self.tabs[selected].value.as_str())
    }

    /// Queue a selection to be applied by [`TabStack::commit_pending`].
    ///
    /// A later request replaces an uncommitted earlier one. Out-of-range
    /// indices are rejected and leave any pending request untouched.
    pub fn request_select(&mut self, original_index: usize) -> bool {
        if original_index >= self.tabs.len() {
            debug!(
                index = original_index,
                len = self.tabs.len(),
                "ignoring tab selection request out of range"
            );
            return false;
        }
        if let Some(prev) = self.pending.replace(original_index) {
            trace!(prev, next = original_index, "pending selection replaced");
        }
        true
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Apply the queued selection, if any, and return the new active value.
    pub fn commit_pending(&mut self) -> Option<&str> {
        let idx = self.pending.take()?;
        self.select(idx)
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Update the hover flag. Returns `true` if it changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        if self.hovering == hovering {
            return false;
        }
        self.hovering = hovering;
        trace!(hovering, "selector bar hover changed");
        true
    }

    /// Mutable access to the tab at a configuration index, for rendering content.
    pub(crate) fn tab_mut(&mut self, original_index: usize) -> Option<&mut Tab<C>> {
        self.tabs.get_mut(original_index)
    }
}

impl<C> std::fmt::Debug for TabStack<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabStack")
            .field("tabs", &self.tabs)
            .field("order", &self.order)
            .field("hovering", &self.hovering)
            .field("pending", &self.pending)
            .finish()
    }
}
