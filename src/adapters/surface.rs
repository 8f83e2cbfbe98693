//! VisualSurface - the document state the theme and menu write to

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

/// Element a visual change lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    /// The document element (`<html>`)
    Root,
    Body,
    /// The main content region, looked up at call time
    Content,
}

/// Document-level visual state.
///
/// Writes to a missing target are no-ops.
pub trait VisualSurface {
    fn exists(&self, target: Target) -> bool;
    fn set_attribute(&self, target: Target, name: &str, value: &str);
    fn toggle_class(&self, target: Target, class: &str, on: bool);
}

/// Recorded document state, for native hosts and tests
#[derive(Debug)]
pub struct MemorySurface {
    has_content: bool,
    attributes: RefCell<HashMap<(Target, String), String>>,
    classes: RefCell<BTreeSet<(Target, String)>>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            has_content: true,
            attributes: RefCell::new(HashMap::new()),
            classes: RefCell::new(BTreeSet::new()),
        }
    }

    /// Surface whose page has no main content region
    pub fn without_content() -> Self {
        Self {
            has_content: false,
            ..Self::new()
        }
    }

    pub fn attribute(&self, target: Target, name: &str) -> Option<String> {
        self.attributes
            .borrow()
            .get(&(target, name.to_string()))
            .cloned()
    }

    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.classes.borrow().contains(&(target, class.to_string()))
    }

    /// Sorted class names present on a target
    pub fn classes(&self, target: Target) -> Vec<String> {
        self.classes
            .borrow()
            .iter()
            .filter(|(t, _)| *t == target)
            .map(|(_, class)| class.clone())
            .collect()
    }
}

impl VisualSurface for MemorySurface {
    fn exists(&self, target: Target) -> bool {
        target != Target::Content || self.has_content
    }

    fn set_attribute(&self, target: Target, name: &str, value: &str) {
        if !self.exists(target) {
            return;
        }
        self.attributes
            .borrow_mut()
            .insert((target, name.to_string()), value.to_string());
    }

    fn toggle_class(&self, target: Target, class: &str, on: bool) {
        if !self.exists(target) {
            return;
        }
        let key = (target, class.to_string());
        let mut classes = self.classes.borrow_mut();
        if on {
            classes.insert(key);
        } else {
            classes.remove(&key);
        }
    }
}
