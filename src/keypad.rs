//! Calculator keypad layout and hit testing.
//!
//! Generates the fixed 4x4 key grid as edge-inclusive bounding boxes and
//! finds the key under a palm position. The layout is built once at
//! construction and never mutated; the rendering collaborator may fetch
//! it at any time.

// ── Key definition ─────────────────────────────────────────

/// One key on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    /// Key value: a digit, an operator, `'.'`, or `'='`.
    pub value: char,
    /// Left edge (pixels, inclusive).
    pub x1: i32,
    /// Top edge (pixels, inclusive).
    pub y1: i32,
    /// Right edge (pixels, inclusive).
    pub x2: i32,
    /// Bottom edge (pixels, inclusive).
    pub y2: i32,
}

impl Key {
    /// Whether point (px, py) is inside this key's bounding box.
    ///
    /// All four edges are inclusive, so a point on a boundary shared by
    /// two adjacent keys is inside both; `hit_test` resolves the tie.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x1 && px <= self.x2 && py >= self.y1 && py <= self.y2
    }
}

/// The keypad grid, row-major.
pub const KEY_ROWS: [[char; 4]; 4] = [
    ['7', '8', '9', '*'],
    ['4', '5', '6', '-'],
    ['1', '2', '3', '+'],
    ['0', '/', '.', '='],
];

// ── Config ─────────────────────────────────────────────────

/// Keypad geometry.
#[derive(Debug, Clone)]
pub struct KeypadConfig {
    /// Top-left corner of the key grid (pixels).
    pub origin: (i32, i32),
    /// Side length of each square key (pixels).
    pub key_size: i32,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        // Keypad sits on the right of a typical 1280-wide camera frame,
        // below a 100 px display strip anchored at y = 50.
        Self {
            origin: (800, 150),
            key_size: 100,
        }
    }
}

// ── Layout generation ──────────────────────────────────────

/// Generate key definitions for the 4x4 grid.
///
/// Keys tile without gaps in row-major order; adjacent keys share an
/// edge. With edge-inclusive bounds, a shared boundary belongs to every
/// adjacent key and `hit_test` picks the first in grid order.
pub fn generate_layout(config: &KeypadConfig) -> Vec<Key> {
    let (ox, oy) = config.origin;
    let size = config.key_size;
    let mut keys = Vec::with_capacity(16);

    for (row, values) in KEY_ROWS.iter().enumerate() {
        for (col, &value) in values.iter().enumerate() {
            let x1 = ox + col as i32 * size;
            let y1 = oy + row as i32 * size;
            keys.push(Key {
                value,
                x1,
                y1,
                x2: x1 + size,
                y2: y1 + size,
            });
        }
    }

    keys
}

/// Find the key at a given position: first key in grid order whose
/// bounding box contains the point.
pub fn hit_test(keys: &[Key], px: i32, py: i32) -> Option<&Key> {
    keys.iter().find(|k| k.contains(px, py))
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_sixteen_keys() {
        let keys = generate_layout(&KeypadConfig::default());
        assert_eq!(keys.len(), 16);

        let values: String = keys.iter().map(|k| k.value).collect();
        assert_eq!(values, "789*456-123+0/.=");
    }

    #[test]
    fn test_layout_tiles_without_gaps() {
        let config = KeypadConfig {
            origin: (0, 0),
            key_size: 10,
        };
        let keys = generate_layout(&config);

        // Horizontally adjacent keys share their vertical edge.
        assert_eq!(keys[0].x2, keys[1].x1);
        // Vertically adjacent keys share their horizontal edge.
        assert_eq!(keys[0].y2, keys[4].y1);
        // Last key's corner.
        assert_eq!(keys[15].x2, 40);
        assert_eq!(keys[15].y2, 40);
    }

    #[test]
    fn test_key_contains_inclusive_edges() {
        let key = Key {
            value: '5',
            x1: 10,
            y1: 20,
            x2: 30,
            y2: 40,
        };
        assert!(key.contains(20, 30)); // center
        assert!(key.contains(10, 20)); // top-left corner
        assert!(key.contains(30, 40)); // bottom-right corner
        assert!(!key.contains(9, 30)); // just outside left
        assert!(!key.contains(31, 30)); // just outside right
        assert!(!key.contains(20, 41)); // just outside bottom
    }

    #[test]
    fn test_hit_test_inside_key() {
        let config = KeypadConfig {
            origin: (100, 100),
            key_size: 50,
        };
        let keys = generate_layout(&config);

        // '5' is row 1, col 1: x in [150, 200], y in [150, 200].
        let hit = hit_test(&keys, 175, 175).expect("expected a key");
        assert_eq!(hit.value, '5');
    }

    #[test]
    fn test_hit_test_boundary_first_in_grid_order() {
        let config = KeypadConfig {
            origin: (0, 0),
            key_size: 10,
        };
        let keys = generate_layout(&config);

        // x = 10 lies on the shared edge of '7' and '8'; '7' comes first.
        assert_eq!(hit_test(&keys, 10, 5).unwrap().value, '7');
        // y = 10 lies on the shared edge of '7' and '4'; '7' comes first.
        assert_eq!(hit_test(&keys, 5, 10).unwrap().value, '7');
        // Four-corner point between '7', '8', '4', '5'.
        assert_eq!(hit_test(&keys, 10, 10).unwrap().value, '7');
    }

    #[test]
    fn test_hit_test_miss() {
        let keys = generate_layout(&KeypadConfig::default());
        assert!(hit_test(&keys, 0, 0).is_none());
        assert!(hit_test(&keys, -50, -50).is_none());
    }

    #[test]
    fn test_custom_origin() {
        let config = KeypadConfig {
            origin: (0, 0),
            key_size: 100,
        };
        let keys = generate_layout(&config);
        assert_eq!(keys[0].x1, 0);
        assert_eq!(keys[0].y1, 0);
        assert_eq!(hit_test(&keys, 50, 50).unwrap().value, '7');
    }
}
