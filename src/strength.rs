//! Discrete smoothing profiles.
//!
//! Each profile is a first-order butterworth low-pass designed for a
//! normalized cutoff ("alpha") and expressed as the coefficients of
//! `v[n] = c1 * x[n] + c2 * v[n - 1]`. Every row satisfies
//! `c1 = (1 - c2) / 2`, so the sum of two consecutive taps has unity gain.
//!
//! Step response of the `f32` filter, as the index of the first sample at
//! or above each level. Sample 1 is the first one after the input jumps.
//!
//! | strength | alpha  | 63%  | 95%  | 99.5% | 99.99% |
//! |----------|--------|------|------|-------|--------|
//! | 1        | 0.05   | 4    | 10   | 18    | 30     |
//! | 2        | 0.01   | 17   | 49   | 85    | 148    |
//! | 3        | 0.001  | 159  | 478  | 844   | 1467   |
//! | 4        | 0.0001 | 1583 | 4769 | 8434  | 14781  |

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coefficients {
    pub c1: f32,
    pub c2: f32,
}

#[allow(clippy::excessive_precision)]
const LIGHT: Coefficients = Coefficients {
    c1: 1.367287359973195227e-1,
    c2: 0.72654252800536101020,
};

#[allow(clippy::excessive_precision)]
const MEDIUM: Coefficients = Coefficients {
    c1: 3.046874709125380054e-2,
    c2: 0.93906250581749239892,
};

#[allow(clippy::excessive_precision)]
const HEAVY: Coefficients = Coefficients {
    c1: 3.131764229192701265e-3,
    c2: 0.99373647154161459660,
};

#[allow(clippy::excessive_precision)]
const HEAVIEST: Coefficients = Coefficients {
    c1: 3.140606106404320030e-4,
    c2: 0.99937187877871913599,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Strength {
    Disabled = 0,
    #[default]
    Light = 1,
    Medium = 2,
    Heavy = 3,
    Heaviest = 4,
}

impl From<u8> for Strength {
    // Anything above the table behaves like the lightest profile.
    fn from(strength: u8) -> Self {
        match strength {
            0 => Self::Disabled,
            2 => Self::Medium,
            3 => Self::Heavy,
            4 => Self::Heaviest,
            _ => Self::Light,
        }
    }
}

impl From<Strength> for u8 {
    fn from(strength: Strength) -> Self {
        strength as u8
    }
}

impl Strength {
    /// Filter coefficients of the profile, `None` when filtering is disabled.
    pub const fn coefficients(self) -> Option<Coefficients> {
        match self {
            Self::Disabled => None,
            Self::Light => Some(LIGHT),
            Self::Medium => Some(MEDIUM),
            Self::Heavy => Some(HEAVY),
            Self::Heaviest => Some(HEAVIEST),
        }
    }

    /// Normalized cutoff the profile was designed for.
    pub const fn design_alpha(self) -> Option<f32> {
        match self {
            Self::Disabled => None,
            Self::Light => Some(0.05),
            Self::Medium => Some(0.01),
            Self::Heavy => Some(0.001),
            Self::Heaviest => Some(0.0001),
        }
    }

    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}
