//! Tests for solid-color placeholder synthesis

#[cfg(test)]
mod tests {
    use interweave::CompositeError;
    use interweave::spatial::solid::{SolidColor, synthesize, synthesize_named};
    use interweave::spatial::tiling::expand;

    // Tests white fills every channel with 255 at (height, width, 3)
    // Verified by swapping the white and black values
    #[test]
    fn test_synthesize_white() {
        let buffer = synthesize(SolidColor::White, 4, 3);

        assert_eq!(buffer.dim(), (3, 4, 3));
        assert!(buffer.iter().all(|&v| v == 255));
    }

    // Tests black fills every channel with 0
    // Verified by filling with the white value
    #[test]
    fn test_synthesize_black() {
        let buffer = synthesize(SolidColor::Black, 2, 5);

        assert_eq!(buffer.dim(), (5, 2, 3));
        assert!(buffer.iter().all(|&v| v == 0));
    }

    // Tests color names are matched without regard to case
    // Verified by removing lowercase normalization
    #[test]
    fn test_synthesize_named_case_insensitive() {
        let white = synthesize_named("WHITE", 1, 1);
        let black = synthesize_named("Black", 1, 1);

        assert!(white.is_ok_and(|b| b.iter().all(|&v| v == 255)));
        assert!(black.is_ok_and(|b| b.iter().all(|&v| v == 0)));
    }

    // Tests names other than white and black are rejected
    // Verified by defaulting unknown names to black
    #[test]
    fn test_synthesize_named_rejects_other_colors() {
        match synthesize_named("red", 2, 2) {
            Err(CompositeError::InvalidColorName { name }) => assert_eq!(name, "red"),
            other => unreachable!("Expected InvalidColorName, got {other:?}"),
        }
    }

    // Tests a placeholder tiled to its own size is unchanged
    // Verified by cropping one row short in expand
    #[test]
    fn test_white_tiled_to_own_size_is_unchanged() {
        let white = synthesize(SolidColor::White, 6, 4);
        let tiled = expand(&white, 4, 6).unwrap_or_else(|e| unreachable!("expand failed: {e}"));

        assert_eq!(tiled, white);
    }

    // Tests color values and display names
    // Verified by changing the display strings
    #[test]
    fn test_solid_color_value_and_display() {
        assert_eq!(SolidColor::White.value(), 255);
        assert_eq!(SolidColor::Black.value(), 0);
        assert_eq!(SolidColor::White.to_string(), "white");
        assert_eq!(SolidColor::Black.to_string(), "black");
    }
}
