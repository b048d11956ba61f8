#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    #[error("{}", self.message())]
    InvalidTimeConstant,
    #[error("{}", self.message())]
    NonPositiveInterval,
}

impl Error {
    /// Text shown by `Display`, usable without a formatter.
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidTimeConstant => "time constant must be positive and finite",
            Self::NonPositiveInterval => "elapsed time between steps must be positive",
        }
    }
}
