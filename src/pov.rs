use crate::board::Player;

/// Trait to convert an absolute value (eg. an [Outcome](crate::board::Outcome)) to a relative one.
pub trait NonPov: Sized {
    type Output: Pov<Output = Self>;

    /// View this value from the POV of `pov`.
    fn pov(self, pov: Player) -> Self::Output;
}

/// The opposite of [NonPov].
pub trait Pov: Sized {
    type Output: NonPov<Output = Self>;

    /// The opposite of [NonPov::pov].
    fn un_pov(self, pov: Player) -> Self::Output;
}

impl<I: NonPov> NonPov for Option<I> {
    type Output = Option<I::Output>;
    fn pov(self, pov: Player) -> Option<I::Output> {
        self.map(|inner| inner.pov(pov))
    }
}

impl<I: Pov> Pov for Option<I> {
    type Output = Option<I::Output>;
    fn un_pov(self, pov: Player) -> Option<I::Output> {
        self.map(|inner| inner.un_pov(pov))
    }
}
