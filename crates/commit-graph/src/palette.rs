use serde::{Deserialize, Serialize};

/// Index of a color in a [`Palette`], wrapping around its length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ColorIndex(pub usize);

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors handed out to rails in creation order
pub const DEFAULT_COLORS: [Rgb; 8] = [
    Rgb::new(255, 165, 0),   // orange
    Rgb::new(34, 139, 34),   // forest green
    Rgb::new(255, 215, 0),   // gold
    Rgb::new(255, 0, 255),   // magenta
    Rgb::new(255, 0, 0),     // red
    Rgb::new(128, 128, 128), // gray
    Rgb::new(64, 224, 208),  // turquoise
    Rgb::new(128, 128, 0),   // olive
];

/// Ordered list of colors, indexed cyclically
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(pub Vec<Rgb>);

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_COLORS.to_vec())
    }
}

impl Palette {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index bound to the `nth` rail created during a layout
    ///
    /// The palette must not be empty.
    pub(crate) fn index_for(&self, nth: usize) -> ColorIndex {
        ColorIndex(nth % self.len())
    }

    /// Resolve an index to a color, wrapping around the palette length
    ///
    /// Returns `None` only for an empty palette.
    pub fn color(&self, index: ColorIndex) -> Option<Rgb> {
        if self.is_empty() {
            return None;
        }
        self.0.get(index.0 % self.len()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn indices_wrap_in_creation_order() {
        let palette = Palette::default();
        let indices: Vec<_> = (0..10).map(|n| palette.index_for(n).0).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6, 7, 0, 1]);
    }

    #[test]
    fn color_lookup_is_cyclic() {
        let palette = Palette(vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)]);
        assert_eq!(palette.color(ColorIndex(3)), Some(Rgb::new(4, 5, 6)));
        assert_eq!(Palette(Vec::new()).color(ColorIndex(0)), None);
    }

    #[test]
    fn default_colors_are_distinct() {
        let palette = Palette::default();
        for (i, a) in palette.0.iter().enumerate() {
            for b in &palette.0[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
