//! Submit gate shared by the booking button and the auth forms.

/// `Idle → Submitting → Done`, with failures returning to `Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionState {
    #[default]
    Idle,
    Submitting,
    Done,
}

impl ActionState {
    /// Enter `Submitting`. Returns `false` and leaves the state alone when a
    /// submission is already in flight.
    pub fn try_begin(&mut self) -> bool {
        if *self == Self::Submitting {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    pub fn succeed(&mut self) {
        if *self == Self::Submitting {
            *self = Self::Done;
        }
    }

    pub fn fail(&mut self) {
        if *self == Self::Submitting {
            *self = Self::Idle;
        }
    }

    /// Whether the trigger should be disabled.
    pub fn is_submitting(&self) -> bool {
        *self == Self::Submitting
    }
}
