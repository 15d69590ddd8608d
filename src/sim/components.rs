/// Player intent sampled once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputCmd {
    pub turn: i8, // –1 … +1  (left / right)
    pub walk: i8, // –1 … +1  (back / forward)
    pub quit: bool,
}

impl InputCmd {
    /// Combine two opposing keys into one axis value.
    #[inline]
    pub fn axis(negative: bool, positive: bool) -> i8 {
        positive as i8 - negative as i8
    }
}
