//! Port for the randomness behind strategy sampling.

/// Source of uniformly distributed sampling outcomes.
///
/// Implementations must be safe to share between threads. A generator that
/// is not inherently thread safe has to be wrapped (for example in a mutex)
/// or created per thread.
///
/// # Examples
///
/// ```
/// use nickbot::domain::ports::RandomSource;
///
/// struct Fixed(u8);
///
/// impl RandomSource for Fixed {
///     fn draw(&self, upper: u8) -> u8 {
///         self.0 % upper
///     }
/// }
///
/// assert_eq!(Fixed(42).draw(100), 42);
/// ```
pub trait RandomSource: Send + Sync {
    /// Draw an integer uniformly from `[0, upper)`. `upper` is never zero.
    fn draw(&self, upper: u8) -> u8;
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn draw(&self, upper: u8) -> u8 {
        (**self).draw(upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn draw(&self, upper: u8) -> u8 {
        (**self).draw(upper)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for std::sync::Arc<R> {
    fn draw(&self, upper: u8) -> u8 {
        (**self).draw(upper)
    }
}
