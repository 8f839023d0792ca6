use std::fmt;

/// Change events posted by editing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Points of at least one contour moved or changed type.
    ContourChanged,
    /// Selection flags changed without any geometry change.
    SelectionChanged,
    /// The glyph's outline structure changed (points or contours added or
    /// removed, components or anchors edited).
    GlyphChanged,
    /// The glyph's contents were dropped wholesale before a rebuild.
    GlyphCleared,
}

/// Identifies one subscription so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerId(u64);

type Handler = Box<dyn FnMut(Notification)>;

/// Dispatches change events to subscribed observers.
///
/// Posting can be suspended with [`hold`](NotificationCenter::hold); held
/// events queue up, with consecutive duplicates collapsed, and flush in
/// order on the matching [`release`](NotificationCenter::release). Holds
/// nest.
#[derive(Default)]
pub struct NotificationCenter {
    handlers: Vec<(HandlerId, Notification, Handler)>,
    next_id: u64,
    hold_depth: u32,
    pending: Vec<Notification>,
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("handlers", &self.handlers.len())
            .field("hold_depth", &self.hold_depth)
            .field("pending", &self.pending)
            .finish()
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        NotificationCenter::default()
    }

    /// Register `handler` for one kind of notification.
    pub fn subscribe<F>(&mut self, event: Notification, handler: F) -> HandlerId
    where
        F: FnMut(Notification) + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, event, Box::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: HandlerId) {
        self.handlers.retain(|(hid, _, _)| *hid != id);
    }

    /// Deliver `event` now, or queue it while a hold is in effect. A held
    /// event identical to the most recently queued one is dropped.
    pub fn post(&mut self, event: Notification) {
        if self.hold_depth > 0 {
            if self.pending.last() != Some(&event) {
                self.pending.push(event);
            }
            return;
        }
        self.dispatch(event);
    }

    /// Suspend delivery until the matching `release`.
    pub fn hold(&mut self) {
        self.hold_depth += 1;
    }

    /// End one hold. When the last hold ends, queued events flush in the
    /// order they were posted.
    pub fn release(&mut self) {
        debug_assert!(self.hold_depth > 0, "release without matching hold");
        self.hold_depth = self.hold_depth.saturating_sub(1);
        if self.hold_depth == 0 {
            let pending = std::mem::take(&mut self.pending);
            for event in pending {
                self.dispatch(event);
            }
        }
    }

    fn dispatch(&mut self, event: Notification) {
        for (_, subscribed, handler) in self.handlers.iter_mut() {
            if *subscribed == event {
                handler(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_center() -> (NotificationCenter, Rc<RefCell<Vec<Notification>>>) {
        let mut center = NotificationCenter::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for event in [
            Notification::ContourChanged,
            Notification::SelectionChanged,
            Notification::GlyphChanged,
            Notification::GlyphCleared,
        ] {
            let log = Rc::clone(&log);
            center.subscribe(event, move |e| log.borrow_mut().push(e));
        }
        (center, log)
    }

    #[test]
    fn post_reaches_matching_subscriber_only() {
        let mut center = NotificationCenter::new();
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        center.subscribe(Notification::ContourChanged, move |_| {
            *h.borrow_mut() += 1
        });
        center.post(Notification::GlyphChanged);
        assert_eq!(*hits.borrow(), 0);
        center.post(Notification::ContourChanged);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut center = NotificationCenter::new();
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        let id = center.subscribe(Notification::GlyphChanged, move |_| {
            *h.borrow_mut() += 1
        });
        center.post(Notification::GlyphChanged);
        center.unsubscribe(id);
        center.post(Notification::GlyphChanged);
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn hold_queues_and_release_flushes_in_order() {
        let (mut center, log) = counting_center();
        center.hold();
        center.post(Notification::GlyphCleared);
        center.post(Notification::GlyphChanged);
        assert!(log.borrow().is_empty());
        center.release();
        assert_eq!(
            *log.borrow(),
            vec![Notification::GlyphCleared, Notification::GlyphChanged]
        );
    }

    #[test]
    fn held_consecutive_duplicates_collapse() {
        let (mut center, log) = counting_center();
        center.hold();
        center.post(Notification::ContourChanged);
        center.post(Notification::ContourChanged);
        center.post(Notification::SelectionChanged);
        center.post(Notification::ContourChanged);
        center.release();
        assert_eq!(
            *log.borrow(),
            vec![
                Notification::ContourChanged,
                Notification::SelectionChanged,
                Notification::ContourChanged
            ]
        );
    }

    #[test]
    fn holds_nest() {
        let (mut center, log) = counting_center();
        center.hold();
        center.hold();
        center.post(Notification::GlyphChanged);
        center.release();
        assert!(log.borrow().is_empty());
        center.release();
        assert_eq!(log.borrow().len(), 1);
    }
}
