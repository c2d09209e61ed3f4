use crate::options::BeforeSlideChangeCallback;

/// One-shot continuation for a suspended slide change.
///
/// Handed to the `before_slide_change` hook. It cannot be cloned, so a transition resumes at
/// most once; a ticket from an older transition is ignored by [`crate::Carousel::proceed`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a transition stays suspended until its ticket is returned"]
pub struct Proceed {
    pub(crate) transition: u64,
    pub(crate) target: isize,
}

impl Proceed {
    /// Internal index the suspended transition will move to.
    pub fn target(&self) -> isize {
        self.target
    }
}

/// How the before-slide-change step is dispatched, fixed at construction.
#[derive(Clone)]
pub(crate) enum HookStrategy {
    /// No hook configured: proceed immediately.
    PassThrough,
    /// A user hook gates the transition.
    UserGated(BeforeSlideChangeCallback),
}

impl HookStrategy {
    pub(crate) fn from_option(hook: Option<&BeforeSlideChangeCallback>) -> Self {
        match hook {
            Some(f) => Self::UserGated(f.clone()),
            None => Self::PassThrough,
        }
    }

    /// Runs the gate. `Some` means the transition may continue right away.
    pub(crate) fn dispatch(&self, ticket: Proceed, current: usize) -> Option<Proceed> {
        match self {
            Self::PassThrough => Some(ticket),
            Self::UserGated(f) => f(ticket.target, current, ticket),
        }
    }
}

impl core::fmt::Debug for HookStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PassThrough => f.write_str("PassThrough"),
            Self::UserGated(_) => f.write_str("UserGated(..)"),
        }
    }
}
