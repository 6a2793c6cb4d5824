//! Table and sensor configuration options.

/// How soft Aces are demoted when a card pushes a hand over 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceDemotion {
    /// Demote at most one soft Ace per card added.
    ///
    /// This is how the kiosk scores hands. A hand can end up above 21
    /// without being busted (for example a hard 21 that draws an Ace sits
    /// at 22).
    #[default]
    OncePerCard,
    /// Demote soft Aces one by one until the hand is 21 or under, or no soft
    /// Ace remains.
    UntilSafe,
}

/// Calibration of the distance sensor's gesture zones and debounce.
///
/// Distances use the same unit as the samples fed to the decoder.
///
/// ```
/// use tapjack::GestureOptions;
///
/// let options = GestureOptions::default()
///     .with_hit_near(10.0)
///     .with_threshold(150);
/// assert_eq!(options.hit_near, 10.0);
/// assert_eq!(options.threshold, 150);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureOptions {
    /// Near edge of the HIT zone (exclusive).
    pub hit_near: f64,
    /// Near edge of the STAY zone (exclusive).
    pub stay_near: f64,
    /// Width of both zones; the far edge is `near + width` (exclusive).
    pub zone_width: f64,
    /// Consecutive matching samples that must be exceeded before a gesture
    /// is reported.
    pub threshold: u16,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            hit_near: 8.0,
            stay_near: 35.0,
            zone_width: 22.0,
            threshold: 200,
        }
    }
}

impl GestureOptions {
    /// Sets the near edge of the HIT zone.
    ///
    /// # Example
    ///
    /// ```
    /// use tapjack::GestureOptions;
    ///
    /// let options = GestureOptions::default().with_hit_near(5.0);
    /// assert_eq!(options.hit_near, 5.0);
    /// ```
    #[must_use]
    pub const fn with_hit_near(mut self, distance: f64) -> Self {
        self.hit_near = distance;
        self
    }

    /// Sets the near edge of the STAY zone.
    ///
    /// # Example
    ///
    /// ```
    /// use tapjack::GestureOptions;
    ///
    /// let options = GestureOptions::default().with_stay_near(40.0);
    /// assert_eq!(options.stay_near, 40.0);
    /// ```
    #[must_use]
    pub const fn with_stay_near(mut self, distance: f64) -> Self {
        self.stay_near = distance;
        self
    }

    /// Sets the width of both gesture zones.
    ///
    /// # Example
    ///
    /// ```
    /// use tapjack::GestureOptions;
    ///
    /// let options = GestureOptions::default().with_zone_width(18.0);
    /// assert_eq!(options.zone_width, 18.0);
    /// ```
    #[must_use]
    pub const fn with_zone_width(mut self, width: f64) -> Self {
        self.zone_width = width;
        self
    }

    /// Sets the debounce threshold in samples.
    ///
    /// # Example
    ///
    /// ```
    /// use tapjack::GestureOptions;
    ///
    /// let options = GestureOptions::default().with_threshold(50);
    /// assert_eq!(options.threshold, 50);
    /// ```
    #[must_use]
    pub const fn with_threshold(mut self, samples: u16) -> Self {
        self.threshold = samples;
        self
    }
}

/// Configuration options for the kiosk table.
///
/// The dealer rules, deck and hand size are fixed; only the seat count, the
/// Ace demotion policy and the sensor calibration can be changed.
///
/// ```
/// use tapjack::{AceDemotion, TableOptions};
///
/// let options = TableOptions::default()
///     .with_players(2)
///     .with_demotion(AceDemotion::OncePerCard);
/// assert_eq!(options.players, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableOptions {
    /// Number of player seats (1 to 4).
    pub players: u8,
    /// Ace demotion policy applied to every hand.
    pub demotion: AceDemotion,
    /// Gesture sensor calibration.
    pub gesture: GestureOptions,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            players: 4,
            demotion: AceDemotion::default(),
            gesture: GestureOptions::default(),
        }
    }
}

impl TableOptions {
    /// Sets the number of player seats.
    ///
    /// # Example
    ///
    /// ```
    /// use tapjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_players(3);
    /// assert_eq!(options.players, 3);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the Ace demotion policy.
    ///
    /// # Example
    ///
    /// ```
    /// use tapjack::{AceDemotion, TableOptions};
    ///
    /// let options = TableOptions::default().with_demotion(AceDemotion::OncePerCard);
    /// assert_eq!(options.demotion, AceDemotion::OncePerCard);
    /// ```
    #[must_use]
    pub const fn with_demotion(mut self, demotion: AceDemotion) -> Self {
        self.demotion = demotion;
        self
    }

    /// Sets the gesture sensor calibration.
    ///
    /// # Example
    ///
    /// ```
    /// use tapjack::{GestureOptions, TableOptions};
    ///
    /// let gesture = GestureOptions::default().with_threshold(20);
    /// let options = TableOptions::default().with_gesture(gesture);
    /// assert_eq!(options.gesture.threshold, 20);
    /// ```
    #[must_use]
    pub const fn with_gesture(mut self, gesture: GestureOptions) -> Self {
        self.gesture = gesture;
        self
    }
}
