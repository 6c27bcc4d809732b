//! Game configuration options.

use core::time::Duration;

/// Interval between card flips in slapjack.
///
/// The presentation layer schedules [`advance_flip_clock`] on this
/// cadence; the engine itself never touches wall-clock time.
///
/// [`advance_flip_clock`]: crate::SlapjackGame::advance_flip_clock
pub const FLIP_INTERVAL: Duration = Duration::from_millis(1500);

/// Reaction-window lengths selectable for slapjack.
///
/// The window is the bounded interval during which a revealed jack may
/// still be slapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReactionWindow {
    /// One second.
    Secs1,
    /// One and a half seconds.
    Secs1_5,
    /// Two seconds.
    #[default]
    Secs2,
    /// Two and a half seconds.
    Secs2_5,
    /// Three seconds.
    Secs3,
}

impl ReactionWindow {
    /// Every selectable window, shortest first.
    pub const ALL: [Self; 5] = [
        Self::Secs1,
        Self::Secs1_5,
        Self::Secs2,
        Self::Secs2_5,
        Self::Secs3,
    ];

    /// Wall-clock length of the window.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use cardsim::ReactionWindow;
    ///
    /// assert_eq!(ReactionWindow::Secs1_5.duration(), Duration::from_millis(1500));
    /// ```
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Secs1 => Duration::from_millis(1000),
            Self::Secs1_5 => Duration::from_millis(1500),
            Self::Secs2 => Duration::from_millis(2000),
            Self::Secs2_5 => Duration::from_millis(2500),
            Self::Secs3 => Duration::from_millis(3000),
        }
    }
}

/// Configuration options for a slapjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardsim::{ReactionWindow, SlapjackOptions};
///
/// let options = SlapjackOptions::default().with_reaction_window(ReactionWindow::Secs3);
/// assert_eq!(options.reaction_window, ReactionWindow::Secs3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SlapjackOptions {
    /// How long a revealed jack stays slappable.
    pub reaction_window: ReactionWindow,
}

impl SlapjackOptions {
    /// Sets the reaction window.
    ///
    /// A window that is already armed keeps the length captured when its
    /// jack was revealed; the new value applies from the next arming.
    #[must_use]
    pub const fn with_reaction_window(mut self, window: ReactionWindow) -> Self {
        self.reaction_window = window;
        self
    }
}
