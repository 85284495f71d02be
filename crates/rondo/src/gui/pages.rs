use crate::config::Destination;
use gtk::prelude::*;
use gtk4 as gtk;
use rondo_dial::{Navigator, RouteId};

/// Stand-in for the screens the dial switches between: one stack page per
/// route, named by its route id.
pub struct PageNavigator {
    stack: gtk::Stack,
}

impl PageNavigator {
    pub fn new(destinations: &[Destination]) -> Self {
        let stack = gtk::Stack::new();
        stack.set_transition_type(gtk::StackTransitionType::Crossfade);
        stack.set_hexpand(true);
        stack.set_vexpand(true);

        for destination in destinations {
            let page = gtk::Label::new(Some(&destination.label));
            page.add_css_class("rondo-page");
            stack.add_titled(&page, Some(destination.route.as_str()), &destination.label);
        }

        Self { stack }
    }

    pub fn stack(&self) -> &gtk::Stack {
        &self.stack
    }
}

impl Navigator for PageNavigator {
    fn navigate_to(&mut self, route: &RouteId) {
        if self.stack.child_by_name(route.as_str()).is_some() {
            self.stack.set_visible_child_name(route.as_str());
        } else {
            log::warn!("No page registered for route '{}'", route);
        }
    }
}
