use num_bigint::BigInt;

/// An (x, y) pair that can take part in interpolation.
pub trait PointSource {
    /// The x-coordinate (share identifier).
    fn x(&self) -> &BigInt;

    /// The y-coordinate (share value).
    fn y(&self) -> &BigInt;
}

impl PointSource for (BigInt, BigInt) {
    fn x(&self) -> &BigInt {
        &self.0
    }

    fn y(&self) -> &BigInt {
        &self.1
    }
}

impl<P: PointSource> PointSource for &P {
    fn x(&self) -> &BigInt {
        (**self).x()
    }

    fn y(&self) -> &BigInt {
        (**self).y()
    }
}
