//! Toast notification toggled through CSS classes
//!
//! The toast has two presentation states, each represented by a set of
//! classes. Switching state removes one whole set and adds the other, so
//! the two sets always move together.

use std::rc::Rc;

/// Class membership of a notification element (a `DOMTokenList` in the browser)
pub trait ClassList {
    fn add(&self, classes: &[String]);
    fn remove(&self, classes: &[String]);
    fn contains(&self, class: &str) -> bool;
}

impl<T: ClassList + ?Sized> ClassList for Rc<T> {
    fn add(&self, classes: &[String]) {
        (**self).add(classes)
    }

    fn remove(&self, classes: &[String]) {
        (**self).remove(classes)
    }

    fn contains(&self, class: &str) -> bool {
        (**self).contains(class)
    }
}

pub struct Toast<N> {
    element: N,
    hidden_classes: Vec<String>,
    visible_classes: Vec<String>,
}

impl<N: ClassList> Toast<N> {
    pub fn new(element: N, hidden_classes: Vec<String>, visible_classes: Vec<String>) -> Self {
        Self {
            element,
            hidden_classes,
            visible_classes,
        }
    }

    /// Move the toast on-screen
    pub fn show(&self) {
        self.element.remove(&self.hidden_classes);
        self.element.add(&self.visible_classes);
    }

    /// Move the toast off-screen
    pub fn hide(&self) {
        self.element.remove(&self.visible_classes);
        self.element.add(&self.hidden_classes);
    }

    pub fn is_visible(&self) -> bool {
        self.visible_classes.iter().all(|class| self.element.contains(class))
            && !self.hidden_classes.iter().any(|class| self.element.contains(class))
    }
}
