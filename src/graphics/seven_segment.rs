// graphics/seven_segment.rs

use piston_window::*;

/// Draws digits from lit rectangle segments. Keeps the score readable
/// without any font dependency.
pub struct SevenSegmentDisplay {
    pub digit_width: f64,
    pub digit_height: f64,
    pub spacing: f64,
}

impl SevenSegmentDisplay {
    pub fn new(digit_width: f64, digit_height: f64, spacing: f64) -> Self {
        SevenSegmentDisplay {
            digit_width,
            digit_height,
            spacing,
        }
    }

    /// Segment order: top, top-left, top-right, middle, bottom-left,
    /// bottom-right, bottom
    fn segments_for(digit: u32) -> [bool; 7] {
        match digit {
            0 => [true, true, true, false, true, true, true],
            1 => [false, false, true, false, false, true, false],
            2 => [true, false, true, true, true, false, true],
            3 => [true, false, true, true, false, true, true],
            4 => [false, true, true, true, false, true, false],
            5 => [true, true, false, true, false, true, true],
            6 => [true, true, false, true, true, true, true],
            7 => [true, false, true, false, false, true, false],
            8 => [true, true, true, true, true, true, true],
            9 => [true, true, true, true, false, true, true],
            _ => [false; 7],
        }
    }

    pub fn draw_digit(
        &self,
        digit: u32,
        x: f64,
        y: f64,
        color: [f32; 4],
        context: Context,
        g: &mut G2d,
    ) {
        let segments = Self::segments_for(digit);
        let w = self.digit_width;
        let h = self.digit_height;

        // Horizontal and vertical bar sizes
        let hw = w * 0.8;
        let hh = h * 0.1;
        let vw = w * 0.1;
        let vh = h * 0.4;
        let hx = x + (w - hw) / 2.0;

        let bars = [
            [hx, y, hw, hh],                           // top
            [x, y + hh, vw, vh],                       // top-left
            [x + w - vw, y + hh, vw, vh],              // top-right
            [hx, y + (h - hh) / 2.0, hw, hh],          // middle
            [x, y + h / 2.0, vw, vh],                  // bottom-left
            [x + w - vw, y + h / 2.0, vw, vh],         // bottom-right
            [hx, y + h - hh, hw, hh],                  // bottom
        ];

        for (lit, bar) in segments.iter().zip(bars.iter()) {
            if *lit {
                rectangle(color, *bar, context.transform, g);
            }
        }
    }

    /// Draw `value` left-aligned at (x, y) and return the width used
    pub fn draw_number(
        &self,
        value: u32,
        x: f64,
        y: f64,
        color: [f32; 4],
        context: Context,
        g: &mut G2d,
    ) -> f64 {
        let mut digits = Vec::new();
        let mut rest = value;
        loop {
            digits.push(rest % 10);
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        digits.reverse();

        let mut cursor = x;
        for digit in &digits {
            self.draw_digit(*digit, cursor, y, color, context, g);
            cursor += self.digit_width + self.spacing;
        }
        cursor - x - self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_lights_every_segment() {
        assert_eq!(SevenSegmentDisplay::segments_for(8), [true; 7]);
    }

    #[test]
    fn one_lights_only_the_right_side() {
        let segments = SevenSegmentDisplay::segments_for(1);
        assert_eq!(segments.iter().filter(|lit| **lit).count(), 2);
        assert!(segments[2] && segments[5]);
    }

    #[test]
    fn non_digit_is_blank() {
        assert_eq!(SevenSegmentDisplay::segments_for(10), [false; 7]);
    }
}
