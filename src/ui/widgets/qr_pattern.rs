// SPDX-License-Identifier: MPL-2.0
//! Decorative QR-style pattern widget using Canvas.
//!
//! The pattern is not a scannable code: it only has to look like one, stay
//! stable for a given seed, and change completely when the seed changes so
//! each personalization mode gets a recognizably different pattern.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Modules per side of the simulated code.
const GRID: usize = 12;

/// Side length of the three finder squares, in modules.
const FINDER: usize = 3;

/// FNV-1a over an item id, so every id maps to a stable, distinct seed.
#[must_use]
pub fn seed_from_id(id: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in id.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// QR-style pattern derived deterministically from a seed.
pub struct QrPattern {
    cache: Cache,
    seed: u64,
    color: Color,
    fade: f32,
    size: f32,
}

impl QrPattern {
    /// Creates a pattern for the given seed, drawn in the given color.
    /// `fade` in `[0, 1]` scales the opacity during transitions.
    #[must_use]
    pub fn new(seed: u64, color: Color, fade: f32) -> Self {
        Self {
            cache: Cache::default(),
            seed,
            color,
            fade: fade.clamp(0.0, 1.0),
            size: sizing::QR_PREVIEW,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this pattern.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Whether the module at `(col, row)` is filled for this seed.
    ///
    /// Uses a splitmix64 round over the seed and cell coordinates, so the same
    /// seed always yields the same pattern and different seeds diverge fully.
    #[must_use]
    pub fn cell_filled(seed: u64, col: usize, row: usize) -> bool {
        let mut z = seed
            .wrapping_add((col as u64) << 32 | row as u64)
            .wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^= z >> 31;
        z & 1 == 1
    }

    fn is_finder(col: usize, row: usize) -> bool {
        let near_start = |v: usize| v < FINDER;
        let near_end = |v: usize| v >= GRID - FINDER;
        (near_start(col) && near_start(row))
            || (near_end(col) && near_start(row))
            || (near_start(col) && near_end(row))
    }
}

impl<Message> canvas::Program<Message> for QrPattern {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                #[allow(clippy::cast_precision_loss)] // GRID is tiny
                let module = frame.width().min(frame.height()) / GRID as f32;
                let color = Color {
                    a: self.fade,
                    ..self.color
                };

                for row in 0..GRID {
                    for col in 0..GRID {
                        if Self::is_finder(col, row) {
                            continue;
                        }
                        if Self::cell_filled(self.seed, col, row) {
                            #[allow(clippy::cast_precision_loss)]
                            let top_left =
                                Point::new(col as f32 * module, row as f32 * module);
                            frame.fill_rectangle(
                                top_left,
                                Size::new(module * 0.9, module * 0.9),
                                color,
                            );
                        }
                    }
                }

                // Finder squares anchor the three corners like a real code.
                #[allow(clippy::cast_precision_loss)]
                let finder_side = FINDER as f32 * module;
                let corners = [
                    Point::ORIGIN,
                    Point::new(frame.width() - finder_side, 0.0),
                    Point::new(0.0, frame.height() - finder_side),
                ];
                for corner in corners {
                    let outer = Path::rectangle(corner, Size::new(finder_side, finder_side));
                    frame.fill(&outer, color);
                    let inset = module * 0.9;
                    let inner = Path::rectangle(
                        Point::new(corner.x + inset, corner.y + inset),
                        Size::new(finder_side - 2.0 * inset, finder_side - 2.0 * inset),
                    );
                    frame.fill(&inner, Color { a: self.fade, ..Color::WHITE });
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_yields_same_pattern() {
        for row in 0..GRID {
            for col in 0..GRID {
                assert_eq!(
                    QrPattern::cell_filled(42, col, row),
                    QrPattern::cell_filled(42, col, row)
                );
            }
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let differing = (0..GRID)
            .flat_map(|row| (0..GRID).map(move |col| (col, row)))
            .filter(|&(col, row)| {
                QrPattern::cell_filled(1, col, row) != QrPattern::cell_filled(2, col, row)
            })
            .count();
        // A hash-derived pattern should flip roughly half the cells.
        assert!(differing > GRID * GRID / 4);
    }

    #[test]
    fn id_seeds_are_stable_and_distinct() {
        assert_eq!(seed_from_id("performance"), seed_from_id("performance"));
        assert_ne!(seed_from_id("performance"), seed_from_id("security"));
    }

    #[test]
    fn finder_corners_are_reserved() {
        assert!(QrPattern::is_finder(0, 0));
        assert!(QrPattern::is_finder(GRID - 1, 0));
        assert!(QrPattern::is_finder(0, GRID - 1));
        // Bottom-right corner stays free, as on a real code.
        assert!(!QrPattern::is_finder(GRID - 1, GRID - 1));
        assert!(!QrPattern::is_finder(GRID / 2, GRID / 2));
    }
}
