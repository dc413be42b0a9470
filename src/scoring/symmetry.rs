use crate::core::Color;

/// Whether `colors` reads the same forwards and backwards.
#[must_use]
pub fn is_symmetric(colors: &[Color]) -> bool {
    colors.iter().eq(colors.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Red};

    #[test]
    fn test_symmetric() {
        assert!(is_symmetric(&[Red, Red]));
        assert!(is_symmetric(&[Red, Blue, Red]));
        assert!(is_symmetric(&[Blue, Red, Red, Blue]));
        assert!(is_symmetric(&[]));
    }

    #[test]
    fn test_asymmetric() {
        assert!(!is_symmetric(&[Red, Blue]));
        assert!(!is_symmetric(&[Red, Blue, Green, Red, Red]));
    }
}
