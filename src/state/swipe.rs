// Horizontal-swipe detection for a single touch sequence.

/// Verdict for a move event while a touch sequence is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveVerdict {
    /// No gesture in progress; leave the event alone.
    Ignore,
    /// Movement is mostly vertical; the gesture is abandoned so native
    /// scrolling can proceed.
    Scroll,
    /// Horizontal-swipe candidate; the default action should be suppressed.
    Swipe,
}

/// Direction of a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDir {
    Left,
    Right,
}

/// Minimum horizontal travel, in client coordinates, for a deliberate swipe.
pub const SWIPE_THRESHOLD: f64 = 40.0;

/// Two-state tracker fed by the first touch point of each event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SwipeTracker {
    #[default]
    Idle,
    Tracking { start_x: f64, start_y: f64 },
}

impl SwipeTracker {
    /// Starts tracking a new touch sequence from its start point.
    pub fn begin(&mut self, x: f64, y: f64) {
        *self = SwipeTracker::Tracking {
            start_x: x,
            start_y: y,
        };
    }

    /// Re-evaluates the gesture against the current touch point.
    pub fn movement(&mut self, x: f64, y: f64) -> MoveVerdict {
        let SwipeTracker::Tracking { start_x, start_y } = *self else {
            return MoveVerdict::Ignore;
        };
        let dx = x - start_x;
        let dy = y - start_y;
        if dy.abs() > dx.abs() {
            *self = SwipeTracker::Idle;
            MoveVerdict::Scroll
        } else {
            MoveVerdict::Swipe
        }
    }

    /// Consumes the gesture at touch end. Reports a direction only when the
    /// travel was predominantly horizontal and past the threshold.
    pub fn finish(&mut self, x: f64, y: f64) -> Option<SwipeDir> {
        let SwipeTracker::Tracking { start_x, start_y } = *self else {
            return None;
        };
        *self = SwipeTracker::Idle;
        let dx = x - start_x;
        let dy = y - start_y;
        if dx.abs() > SWIPE_THRESHOLD && dx.abs() > dy.abs() {
            Some(if dx < 0.0 {
                SwipeDir::Left
            } else {
                SwipeDir::Right
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_travel_past_threshold_is_a_left_swipe() {
        let mut t = SwipeTracker::default();
        t.begin(200.0, 100.0);
        assert_eq!(t.movement(150.0, 100.0), MoveVerdict::Swipe);
        assert_eq!(t.finish(100.0, 100.0), Some(SwipeDir::Left));
        assert_eq!(t, SwipeTracker::Idle);
    }

    #[test]
    fn rightward_travel_past_threshold_is_a_right_swipe() {
        let mut t = SwipeTracker::default();
        t.begin(200.0, 100.0);
        assert_eq!(t.finish(300.0, 100.0), Some(SwipeDir::Right));
    }

    #[test]
    fn short_travel_is_not_a_swipe() {
        let mut t = SwipeTracker::default();
        t.begin(200.0, 100.0);
        assert_eq!(t.finish(220.0, 100.0), None);
        // 40.0 exactly does not clear the strict threshold
        t.begin(200.0, 100.0);
        assert_eq!(t.finish(160.0, 100.0), None);
    }

    #[test]
    fn vertical_move_abandons_the_sequence() {
        let mut t = SwipeTracker::default();
        t.begin(100.0, 100.0);
        assert_eq!(t.movement(110.0, 150.0), MoveVerdict::Scroll);
        // later events of the same sequence are ignored
        assert_eq!(t.movement(300.0, 150.0), MoveVerdict::Ignore);
        assert_eq!(t.finish(300.0, 150.0), None);
    }

    #[test]
    fn mostly_horizontal_diagonal_keeps_tracking() {
        let mut t = SwipeTracker::default();
        t.begin(0.0, 0.0);
        assert_eq!(t.movement(-50.0, 20.0), MoveVerdict::Swipe);
        assert_eq!(t.finish(-60.0, 30.0), Some(SwipeDir::Left));
    }

    #[test]
    fn vertical_dominant_end_is_not_a_swipe() {
        let mut t = SwipeTracker::default();
        t.begin(0.0, 0.0);
        assert_eq!(t.finish(50.0, 80.0), None);
    }

    #[test]
    fn end_without_start_does_nothing() {
        let mut t = SwipeTracker::default();
        assert_eq!(t.finish(500.0, 0.0), None);
        assert_eq!(t, SwipeTracker::Idle);
    }
}
