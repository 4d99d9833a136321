/// Braille canvas for high-resolution terminal rendering
/// Each terminal cell contains a 2×4 grid of Braille dots
/// This gives us 2× horizontal and 4× vertical resolution
///
/// Every cell also remembers the pen colour that last drew into it, so the
/// scene can mix goal, ball and keeper colours on one canvas.
use ratatui::style::Color;

/// 3×5 bitmap digits, one row per entry, bit 2 = leftmost column
const DIGIT_FONT: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b001, 0b001, 0b001], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

// Digit glyphs are scaled up to 6×15 pixels (fits a 4-row header)
const DIGIT_SCALE_X: usize = 2;
const DIGIT_SCALE_Y: usize = 3;
pub const DIGIT_WIDTH: usize = 3 * DIGIT_SCALE_X;
pub const DIGIT_HEIGHT: usize = 5 * DIGIT_SCALE_Y;

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>, // 2D array of dot patterns (0-255)
    colors: Vec<Vec<Color>>,
    pen: Color,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
            colors: vec![vec![Color::White; width]; height],
            pen: Color::White,
        }
    }

    /// Colour used by subsequent drawing calls
    pub fn set_pen(&mut self, color: Color) {
        self.pen = color;
    }

    /// Clear all dots
    pub fn clear(&mut self) {
        for row in &mut self.dots {
            for cell in row {
                *cell = 0;
            }
        }
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        let dot_x = pixel_x % 2; // 0 or 1 (left or right column)
        let dot_y = pixel_y % 4; // 0, 1, 2, or 3 (row within cell)

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (dot_x, dot_y) {
            (0, 0) => 0, // dot 1
            (0, 1) => 1, // dot 2
            (0, 2) => 2, // dot 3
            (0, 3) => 6, // dot 7
            (1, 0) => 3, // dot 4
            (1, 1) => 4, // dot 5
            (1, 2) => 5, // dot 6
            (1, 3) => 7, // dot 8
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
        self.colors[cell_y][cell_x] = self.pen;
    }

    /// Set a dot at signed coordinates, ignoring anything off the canvas
    pub fn plot(&mut self, x: i32, y: i32) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize);
        }
    }

    /// Fill a rectangle with pixels
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// Straight line between two pixels (Bresenham)
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32)) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y);
            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Full-width horizontal rule at pixel row `y`
    pub fn draw_horizontal_line(&mut self, y: usize) {
        for x in 0..self.pixel_width() {
            self.set_pixel(x, y);
        }
    }

    /// Small filled disc
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32) {
        let radius = radius.max(1);
        for y in -radius..=radius {
            for x in -radius..=radius {
                if x * x + y * y <= radius * radius {
                    self.plot(cx + x, cy + y);
                }
            }
        }
    }

    /// Draw a single digit with its top-left corner at (x, y)
    pub fn draw_digit(&mut self, digit: u32, x: usize, y: usize) {
        let glyph = DIGIT_FONT[(digit % 10) as usize];
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..3 {
                if bits & (0b100 >> col) != 0 {
                    self.fill_rect(
                        x + col * DIGIT_SCALE_X,
                        y + row * DIGIT_SCALE_Y,
                        DIGIT_SCALE_X,
                        DIGIT_SCALE_Y,
                    );
                }
            }
        }
    }

    /// Draw a whole number, left to right; returns the pixel width used
    pub fn draw_number(&mut self, value: u32, x: usize, y: usize) -> usize {
        let digits: Vec<u32> = value
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect();
        let advance = DIGIT_WIDTH + 2;
        for (i, digit) in digits.iter().enumerate() {
            self.draw_digit(*digit, x + i * advance, y);
        }
        digits.len() * advance
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    /// Colour of the last pen that touched a cell
    pub fn color_at(&self, cell_x: usize, cell_y: usize) -> Color {
        self.colors
            .get(cell_y)
            .and_then(|row| row.get(cell_x))
            .copied()
            .unwrap_or(Color::White)
    }

    /// Get width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Get height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }

    pub fn cell_width(&self) -> usize {
        self.width
    }

    pub fn cell_height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braille_canvas() {
        let mut canvas = BrailleCanvas::new(2, 2);

        // Set a single pixel
        canvas.set_pixel(0, 0);
        assert_eq!(canvas.to_char(0, 0), '⠁'); // dot 1

        // Fill one whole cell
        canvas.clear();
        canvas.fill_rect(0, 0, 2, 4);
        assert_eq!(canvas.to_char(0, 0), '⣿');
        assert_eq!(canvas.to_char(1, 0), '⠀');
    }

    #[test]
    fn test_off_canvas_is_ignored() {
        let mut canvas = BrailleCanvas::new(2, 2);
        canvas.plot(-1, 3);
        canvas.set_pixel(100, 100);
        canvas.fill_circle(-10, -10, 2);
        assert_eq!(canvas.to_char(0, 0), '⠀');
        assert_eq!(canvas.to_char(5, 5), ' ');
    }

    #[test]
    fn test_line_reaches_both_ends() {
        let mut canvas = BrailleCanvas::new(4, 2);
        canvas.draw_line((0, 0), (7, 7));
        // (0,0) is dot 1 of cell (0,0), (7,7) is dot 8 of cell (3,1)
        assert_ne!(canvas.to_char(0, 0), '⠀');
        assert_eq!(canvas.to_char(3, 1) as u32 & 0x80, 0x80);
    }

    #[test]
    fn test_pen_colours_cells() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.set_pen(Color::Red);
        canvas.set_pixel(0, 0);
        canvas.set_pen(Color::Green);
        canvas.set_pixel(2, 0);
        assert_eq!(canvas.color_at(0, 0), Color::Red);
        assert_eq!(canvas.color_at(1, 0), Color::Green);
    }

    #[test]
    fn test_number_width() {
        let mut canvas = BrailleCanvas::new(20, 4);
        assert_eq!(canvas.draw_number(7, 0, 0), DIGIT_WIDTH + 2);
        assert_eq!(canvas.draw_number(12, 0, 0), 2 * (DIGIT_WIDTH + 2));
    }
}
