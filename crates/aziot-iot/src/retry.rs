// Default minimum retry delay, in milliseconds.
const DEFAULT_MIN_DELAY_MS: u32 = 1000;

// Default maximum retry delay, in milliseconds.
const DEFAULT_MAX_DELAY_MS: u32 = 100_000;

// Default upper bound, exclusive, of the random jitter, in milliseconds.
const DEFAULT_MAX_JITTER_MS: u32 = 5000;

// Beyond this exponent the exponential delay exceeds any `u32` ceiling.
const MAX_EXPONENT: u16 = 31;

/// Retry policy configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    min_delay_ms: u32,
    max_delay_ms: u32,
    max_jitter_ms: u32,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfig {
    /// Creates a [`RetryConfig`] with the default delays.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_delay_ms: DEFAULT_MIN_DELAY_MS,
            max_delay_ms: DEFAULT_MAX_DELAY_MS,
            max_jitter_ms: DEFAULT_MAX_JITTER_MS,
        }
    }

    /// Sets the base delay, doubled at each attempt.
    #[must_use]
    pub const fn min_delay_ms(mut self, min_delay_ms: u32) -> Self {
        self.min_delay_ms = min_delay_ms;
        self
    }

    /// Sets the ceiling of the exponential delay.
    #[must_use]
    pub const fn max_delay_ms(mut self, max_delay_ms: u32) -> Self {
        self.max_delay_ms = max_delay_ms;
        self
    }

    /// Sets the exclusive upper bound of the random jitter.
    #[must_use]
    pub const fn max_jitter_ms(mut self, max_jitter_ms: u32) -> Self {
        self.max_jitter_ms = max_jitter_ms;
        self
    }

    /// Computes the delay before the next attempt.
    ///
    /// The jitter is folded into `[0, max_jitter_ms)`.
    #[must_use]
    pub fn delay(&self, elapsed_ms: u32, attempt: RetryAttempt, jitter_ms: u32) -> u32 {
        let jitter_ms = jitter_ms % self.max_jitter_ms.max(1);
        retry_delay(
            elapsed_ms,
            attempt,
            self.min_delay_ms,
            self.max_delay_ms,
            jitter_ms,
        )
    }
}

/// Number of consecutive failed attempts of an operation.
///
/// The counter saturates at [`RetryAttempt::CEILING`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RetryAttempt(u16);

impl RetryAttempt {
    /// The greatest value of the counter.
    pub const CEILING: u16 = i16::MAX as u16;

    /// Creates a [`RetryAttempt`] with no failed attempts.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns the number of failed attempts.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Counts one more failed attempt.
    #[inline]
    pub const fn increment(&mut self) {
        if self.0 < Self::CEILING {
            self.0 += 1;
        }
    }

    /// Resets the counter.
    #[inline]
    pub const fn reset(&mut self) {
        self.0 = 0;
    }
}

impl From<u16> for RetryAttempt {
    fn from(value: u16) -> Self {
        Self(value.min(Self::CEILING))
    }
}

/// Computes an exponential backoff delay with jitter.
///
/// The delay is `min(max_delay_ms, min_delay_ms * 2^attempt) + jitter_ms`,
/// reduced by the time already spent on the failed operation.
#[must_use]
pub fn retry_delay(
    elapsed_ms: u32,
    attempt: RetryAttempt,
    min_delay_ms: u32,
    max_delay_ms: u32,
    jitter_ms: u32,
) -> u32 {
    let exponent = attempt.get().min(MAX_EXPONENT);
    let exponential = u64::from(min_delay_ms) << exponent;
    let capped = exponential.min(u64::from(max_delay_ms));

    // `capped` never exceeds `max_delay_ms`.
    let delay = u32::try_from(capped).unwrap_or(max_delay_ms);
    delay.saturating_add(jitter_ms).saturating_sub(elapsed_ms)
}
