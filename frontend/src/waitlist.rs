use crate::config;

/// In-memory state of the waitlist form. Lives only as long as the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistSubmission {
    email: String,
    submitted: bool,
}

impl WaitlistSubmission {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Accepts the current email if there is one and returns it. An empty
    /// field leaves the state untouched and returns `None`.
    pub fn submit(&mut self) -> Option<String> {
        if self.email.is_empty() {
            return None;
        }
        self.submitted = true;
        Some(self.email.clone())
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.submitted = false;
    }
}

/// What a successful signup does to the outside world. The browser version
/// fires confetti, logs, and arms a gloo timer; tests swap in recorders.
pub trait WaitlistEffects {
    /// Pending reset. Dropping it must cancel the reset.
    type Timer;

    fn celebrate(&mut self);
    fn record(&mut self, email: &str);
    fn schedule_reset(&mut self, delay_ms: u32) -> Self::Timer;
}

/// Form state plus the reset armed by the last successful submit.
pub struct WaitlistFlow<T> {
    submission: WaitlistSubmission,
    reset_timer: Option<T>,
}

impl<T> Default for WaitlistFlow<T> {
    fn default() -> Self {
        Self {
            submission: WaitlistSubmission::default(),
            reset_timer: None,
        }
    }
}

impl<T> WaitlistFlow<T> {
    pub fn submission(&self) -> &WaitlistSubmission {
        &self.submission
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_timer.is_some()
    }

    pub fn set_email(&mut self, email: String) {
        self.submission.set_email(email);
    }

    /// Runs the success path if the field has something in it. Returns
    /// whether anything changed.
    pub fn submit<E>(&mut self, effects: &mut E) -> bool
    where
        E: WaitlistEffects<Timer = T>,
    {
        let Some(email) = self.submission.submit() else {
            return false;
        };
        effects.celebrate();
        effects.record(&email);
        self.reset_timer = Some(effects.schedule_reset(config::WAITLIST_RESET_MS));
        true
    }

    /// Called when the armed timer fires.
    pub fn reset(&mut self) {
        self.reset_timer = None;
        self.submission.reset();
    }

    /// Drops the pending reset so nothing fires into a destroyed form.
    pub fn teardown(&mut self) {
        self.reset_timer.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn submit_with_email_shows_confirmation_then_resets() {
        let mut form = WaitlistSubmission::default();
        form.set_email("a@b.com".to_string());

        assert_eq!(form.submit().as_deref(), Some("a@b.com"));
        assert!(form.is_submitted());

        form.reset();
        assert_eq!(form, WaitlistSubmission::default());
        assert_eq!(form.email(), "");
        assert!(!form.is_submitted());
    }

    #[test]
    fn empty_submit_is_a_no_op() {
        let mut form = WaitlistSubmission::default();
        assert_eq!(form.submit(), None);
        assert_eq!(form, WaitlistSubmission::default());
    }

    #[test]
    fn clearing_the_field_blocks_submit() {
        let mut form = WaitlistSubmission::default();
        form.set_email("a@b.com".to_string());
        form.set_email(String::new());
        assert_eq!(form.submit(), None);
        assert!(!form.is_submitted());
    }

    #[test]
    fn reset_wins_over_typing_after_submit() {
        let mut form = WaitlistSubmission::default();
        form.set_email("a@b.com".to_string());
        form.submit();
        form.set_email("other@b.com".to_string());

        form.reset();
        assert_eq!(form.email(), "");
        assert!(!form.is_submitted());
    }

    #[test]
    fn format_is_left_to_the_browser() {
        let mut form = WaitlistSubmission::default();
        form.set_email("not-an-email".to_string());
        assert_eq!(form.submit().as_deref(), Some("not-an-email"));
    }

    struct CountingTimer {
        dropped: Rc<Cell<usize>>,
    }

    impl Drop for CountingTimer {
        fn drop(&mut self) {
            self.dropped.set(self.dropped.get() + 1);
        }
    }

    #[derive(Default)]
    struct Recorder {
        bursts: usize,
        logged: Vec<String>,
        delays: Vec<u32>,
        timers_dropped: Rc<Cell<usize>>,
    }

    impl WaitlistEffects for Recorder {
        type Timer = CountingTimer;

        fn celebrate(&mut self) {
            self.bursts += 1;
        }

        fn record(&mut self, email: &str) {
            self.logged.push(email.to_string());
        }

        fn schedule_reset(&mut self, delay_ms: u32) -> CountingTimer {
            self.delays.push(delay_ms);
            CountingTimer {
                dropped: self.timers_dropped.clone(),
            }
        }
    }

    #[test]
    fn signup_celebrates_logs_and_arms_reset_once() {
        let mut effects = Recorder::default();
        let mut flow = WaitlistFlow::default();
        flow.set_email("a@b.com".to_string());

        assert!(flow.submit(&mut effects));
        assert_eq!(effects.bursts, 1);
        assert_eq!(effects.logged, vec!["a@b.com".to_string()]);
        assert_eq!(effects.delays, vec![3_000]);
        assert!(flow.submission().is_submitted());
        assert!(flow.is_reset_pending());
    }

    #[test]
    fn empty_signup_has_no_effects() {
        let mut effects = Recorder::default();
        let mut flow: WaitlistFlow<CountingTimer> = WaitlistFlow::default();

        assert!(!flow.submit(&mut effects));
        assert_eq!(effects.bursts, 0);
        assert!(effects.logged.is_empty());
        assert!(effects.delays.is_empty());
        assert!(!flow.is_reset_pending());
        assert_eq!(flow.submission(), &WaitlistSubmission::default());
    }

    #[test]
    fn timer_firing_returns_to_empty_form() {
        let mut effects = Recorder::default();
        let mut flow = WaitlistFlow::default();
        flow.set_email("a@b.com".to_string());
        flow.submit(&mut effects);

        flow.reset();
        assert_eq!(flow.submission(), &WaitlistSubmission::default());
        assert!(!flow.is_reset_pending());
        assert_eq!(effects.timers_dropped.get(), 1);
    }

    #[test]
    fn teardown_cancels_pending_reset() {
        let mut effects = Recorder::default();
        let mut flow = WaitlistFlow::default();
        flow.set_email("a@b.com".to_string());
        flow.submit(&mut effects);
        assert_eq!(effects.timers_dropped.get(), 0);

        flow.teardown();
        assert_eq!(effects.timers_dropped.get(), 1);
        assert!(!flow.is_reset_pending());
    }
}
