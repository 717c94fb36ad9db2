//! Sampler enumerants used by sampler constants.
//!
//! A sampler constant carries exactly three argument words: addressing
//! mode, a numeric parameter, and filter mode, in that order. The two
//! enumerations here cover the first and last; the parameter word is a
//! plain [`Word`](crate::Word) the format interprets.

/// Addressing mode of a sampler constant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum SamplerAddressingMode {
    None = 0,
    ClampToEdge = 1,
    Clamp = 2,
    Repeat = 3,
    RepeatMirrored = 4,
}

impl SamplerAddressingMode {
    /// Enumerant value as an argument word.
    #[inline]
    pub const fn word(self) -> u32 {
        self as u32
    }
}

/// Filter mode of a sampler constant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum SamplerFilterMode {
    Nearest = 0,
    Linear = 1,
}

impl SamplerFilterMode {
    /// Enumerant value as an argument word.
    #[inline]
    pub const fn word(self) -> u32 {
        self as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerant_words_match_format() {
        assert_eq!(SamplerAddressingMode::None.word(), 0);
        assert_eq!(SamplerAddressingMode::ClampToEdge.word(), 1);
        assert_eq!(SamplerAddressingMode::Clamp.word(), 2);
        assert_eq!(SamplerAddressingMode::Repeat.word(), 3);
        assert_eq!(SamplerAddressingMode::RepeatMirrored.word(), 4);

        assert_eq!(SamplerFilterMode::Nearest.word(), 0);
        assert_eq!(SamplerFilterMode::Linear.word(), 1);
    }
}
