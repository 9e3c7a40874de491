use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use crate::{
    capabilities::{FormSurface, MapClick, MapWidget, Position, Sidebar},
    controller::SessionController,
    error::GeolocationError,
    form::FormValues,
    workout::WorkoutKind,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PositionResolved(Position),
    PositionFailed(GeolocationError),
    MapClicked(MapClick),
    FormSubmitted(FormValues),
    KindChanged(WorkoutKind),
}

/// Hands an event back to whoever drives the controller.
pub type EventSink = Rc<dyn Fn(SessionEvent)>;

/// FIFO stand-in for the UI event loop.
#[derive(Clone, Default)]
pub struct EventQueue {
    pending: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sink(&self) -> EventSink {
        let pending = self.pending.clone();
        Rc::new(move |event| pending.borrow_mut().push_back(event))
    }

    pub fn pop(&self) -> Option<SessionEvent> {
        self.pending.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs each queued event to completion, including any that get queued
    /// while handling. Returns how many were handled.
    pub fn dispatch<M, F, S>(&self, controller: &mut SessionController<M, F, S>) -> usize
    where
        M: MapWidget,
        F: FormSurface,
        S: Sidebar,
    {
        let mut handled = 0;
        while let Some(event) = self.pop() {
            controller.handle(event);
            handled += 1;
        }
        handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_preserves_order() {
        let queue = EventQueue::new();
        let sink = queue.sink();

        sink(SessionEvent::KindChanged(WorkoutKind::Cycling));
        sink(SessionEvent::KindChanged(WorkoutKind::Running));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(SessionEvent::KindChanged(WorkoutKind::Cycling)));
        assert_eq!(queue.pop(), Some(SessionEvent::KindChanged(WorkoutKind::Running)));
        assert!(queue.is_empty());
    }
}
