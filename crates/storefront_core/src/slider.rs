//! Slide cycling and autoplay bookkeeping for the home-page slider.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Active-slide cursor over a non-empty slide set.
pub struct SliderState {
    len: usize,
    current: usize,
}

impl SliderState {
    /// Creates a slider with slide 0 active. Returns `None` for an empty slide set.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    /// Number of slides.
    pub fn len(self) -> usize {
        self.len
    }

    /// Always `false`; an empty slide set never produces a [`SliderState`].
    pub fn is_empty(self) -> bool {
        false
    }

    /// Index of the active slide.
    pub fn current(self) -> usize {
        self.current
    }

    /// Whether the slide at `index` is the active one.
    pub fn is_active(self, index: usize) -> bool {
        self.current == index
    }

    /// Activates `index` wrapped into `0..len`, accepting negative offsets.
    pub fn go_to(&mut self, index: isize) -> usize {
        let len = self.len as isize;
        self.current = index.rem_euclid(len) as usize;
        self.current
    }

    /// Advances to the following slide, wrapping after the last one.
    pub fn next(&mut self) -> usize {
        self.go_to(self.current as isize + 1)
    }

    /// Steps back to the preceding slide, wrapping before the first one.
    pub fn prev(&mut self) -> usize {
        self.go_to(self.current as isize - 1)
    }
}

/// A live recurring timer that can be cancelled.
pub trait TimerHandle {
    /// Cancels the timer. The callback must not fire afterwards.
    fn clear(self);
}

/// Owner of the slider's single autoplay timer.
///
/// `start` always clears the previous handle first, so at most one timer is alive.
#[derive(Debug)]
pub struct Autoplay<H: TimerHandle> {
    handle: Option<H>,
}

impl<H: TimerHandle> Default for Autoplay<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H: TimerHandle> Autoplay<H> {
    /// Whether a timer is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Stops any running timer and schedules a fresh one.
    ///
    /// `schedule` returns `None` when the host refused to create the timer; autoplay then stays
    /// stopped.
    pub fn start(&mut self, schedule: impl FnOnce() -> Option<H>) {
        self.stop();
        self.handle = schedule();
    }

    /// Stops the running timer, if any.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }
}

impl<H: TimerHandle> Drop for Autoplay<H> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    struct CountingHandle {
        live: Rc<Cell<usize>>,
    }

    impl CountingHandle {
        fn spawn(live: &Rc<Cell<usize>>) -> Option<Self> {
            live.set(live.get() + 1);
            Some(Self { live: live.clone() })
        }
    }

    impl TimerHandle for CountingHandle {
        fn clear(self) {
            self.live.set(self.live.get() - 1);
        }
    }

    fn active_count(slider: SliderState) -> usize {
        (0..slider.len()).filter(|&i| slider.is_active(i)).count()
    }

    #[test]
    fn empty_slide_set_has_no_state() {
        assert_eq!(SliderState::new(0), None);
    }

    #[test]
    fn next_len_times_returns_to_start() {
        for len in 1..=8 {
            let mut slider = SliderState::new(len).expect("slider");
            slider.go_to(len as isize / 2);
            let start = slider.current();
            for _ in 0..len {
                slider.next();
            }
            assert_eq!(slider.current(), start, "len {len}");
        }
    }

    #[test]
    fn prev_from_first_slide_wraps_to_last() {
        let mut slider = SliderState::new(5).expect("slider");
        assert_eq!(slider.prev(), 4);
        assert_eq!(slider.go_to(-7), 3);
        assert_eq!(slider.go_to(12), 2);
    }

    #[test]
    fn manual_navigation_keeps_exactly_one_active_slide() {
        let mut slider = SliderState::new(4).expect("slider");
        assert_eq!(active_count(slider), 1);
        for step in [true, true, false, false, false, true] {
            if step {
                slider.next();
            } else {
                slider.prev();
            }
            assert_eq!(active_count(slider), 1);
        }
    }

    #[test]
    fn restarting_autoplay_never_leaves_two_timers_alive() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::default();

        autoplay.start(|| CountingHandle::spawn(&live));
        autoplay.start(|| CountingHandle::spawn(&live));
        assert_eq!(live.get(), 1);
        assert!(autoplay.is_running());

        autoplay.stop();
        assert_eq!(live.get(), 0);
        assert!(!autoplay.is_running());

        autoplay.start(|| CountingHandle::spawn(&live));
        drop(autoplay);
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn refused_timer_leaves_autoplay_stopped() {
        let live = Rc::new(Cell::new(0));
        let mut autoplay = Autoplay::default();
        autoplay.start(|| CountingHandle::spawn(&live));
        autoplay.start(|| None::<CountingHandle>);
        assert_eq!(live.get(), 0);
        assert!(!autoplay.is_running());
    }
}
