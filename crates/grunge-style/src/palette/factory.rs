//! Random gradient palettes drawn from curated hue pools.
//!
//! Each pastelization event gets a fresh gradient: one color is drawn from
//! every hue family, the draws are shuffled, a random-length prefix is kept
//! and the first color is repeated at the end so the gradient closes on
//! itself.

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::PaletteError;
use super::gradient::GradientPalette;
use crate::color::Srgb;

/// Default minimum number of distinct anchors kept per palette.
pub const DEFAULT_MIN_ANCHORS: usize = 4;

/// Default maximum number of distinct anchors kept per palette.
pub const DEFAULT_MAX_ANCHORS: usize = 6;

const REDS: &[[u8; 3]] = &[
    [0xff, 0x48, 0x48],
    [0xff, 0x75, 0x75],
    [0xff, 0x8a, 0x8a],
    [0xff, 0x97, 0x97],
    [0xff, 0xa8, 0xa8],
    [0xff, 0xbb, 0xbb],
];

const ORANGES: &[[u8; 3]] = &[
    [0xff, 0xbf, 0x85],
    [0xff, 0xcf, 0xa4],
    [0xff, 0xbd, 0x82],
    [0xff, 0xc4, 0x8e],
];

const YELLOWS: &[[u8; 3]] = &[[0xfd, 0xfd, 0xa5], [0xef, 0xf0, 0xac], [0xfe, 0xf4, 0x95]];

const GREENS: &[[u8; 3]] = &[[0xc6, 0xfc, 0xb4], [0xd4, 0xff, 0xa2], [0x93, 0xee, 0xaa]];

const BLUES: &[[u8; 3]] = &[
    [0x62, 0xd0, 0xff],
    [0x62, 0xa9, 0xff],
    [0x63, 0xe9, 0xfc],
    [0x7b, 0xca, 0xe1],
    [0x92, 0xfe, 0xf9],
];

const PURPLES: &[[u8; 3]] = &[
    [0xdf, 0xb0, 0xfe],
    [0xb0, 0xa7, 0xf1],
    [0xff, 0x86, 0xff],
    [0xff, 0xac, 0xec],
    [0xff, 0x86, 0xc2],
    [0xea, 0x8d, 0xfe],
];

/// A named family of candidate anchor colors.
#[derive(Debug, Clone, PartialEq)]
pub struct HuePool {
    /// Family name, used in error messages and logs
    pub name: String,
    /// Candidate colors; one is drawn uniformly per palette
    pub colors: Vec<Srgb>,
}

impl HuePool {
    /// Create a pool from already-parsed colors.
    pub fn new(name: impl Into<String>, colors: Vec<Srgb>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Create a pool from hex strings such as `"#ff4848"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] for the first unparsable entry.
    pub fn from_hex(name: impl Into<String>, colors: &[impl AsRef<str>]) -> Result<Self, PaletteError> {
        let colors = colors
            .iter()
            .map(|hex| hex.as_ref().parse::<Srgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, colors))
    }

    fn from_table(name: &str, table: &[[u8; 3]]) -> Self {
        Self::new(name, table.iter().map(|&bytes| Srgb::from_bytes(bytes)).collect())
    }
}

/// Builds random [`GradientPalette`]s from a set of hue pools.
///
/// The default factory uses six pastel families (red, orange, yellow,
/// green, blue, purple) and keeps four to six anchors per palette.
///
/// # Draw Order
///
/// For reproducibility the random source is consumed in a fixed order:
/// one uniform index per pool in pool order, then a uniform shuffle of the
/// drawn colors, then the keep count. The same seed therefore always yields
/// the same palette.
///
/// # Example
///
/// ```
/// use grunge_style::PaletteFactory;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let factory = PaletteFactory::default();
/// let mut rng = StdRng::seed_from_u64(7);
/// let palette = factory.random_palette(&mut rng).unwrap();
///
/// let anchors = palette.anchors();
/// assert!((5..=7).contains(&anchors.len()));
/// assert_eq!(anchors.first(), anchors.last());
/// ```
#[derive(Debug, Clone)]
pub struct PaletteFactory {
    pools: Vec<HuePool>,
    min_anchors: usize,
    max_anchors: usize,
}

impl Default for PaletteFactory {
    fn default() -> Self {
        Self {
            pools: Self::default_pools(),
            min_anchors: DEFAULT_MIN_ANCHORS,
            max_anchors: DEFAULT_MAX_ANCHORS,
        }
    }
}

impl PaletteFactory {
    /// Create a factory with custom pools and keep range.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::NoPools`] if `pools` is empty
    /// - [`PaletteError::EmptyPool`] if any pool has no colors
    /// - [`PaletteError::InvalidAnchorRange`] unless
    ///   `1 <= min_anchors <= max_anchors <= pools.len()`
    pub fn new(
        pools: Vec<HuePool>,
        min_anchors: usize,
        max_anchors: usize,
    ) -> Result<Self, PaletteError> {
        if pools.is_empty() {
            return Err(PaletteError::NoPools);
        }
        if let Some(pool) = pools.iter().find(|p| p.colors.is_empty()) {
            return Err(PaletteError::EmptyPool {
                name: pool.name.clone(),
            });
        }
        if min_anchors == 0 || min_anchors > max_anchors || max_anchors > pools.len() {
            return Err(PaletteError::InvalidAnchorRange {
                min: min_anchors,
                max: max_anchors,
                pools: pools.len(),
            });
        }

        Ok(Self {
            pools,
            min_anchors,
            max_anchors,
        })
    }

    /// The six built-in pastel hue families.
    pub fn default_pools() -> Vec<HuePool> {
        vec![
            HuePool::from_table("red", REDS),
            HuePool::from_table("orange", ORANGES),
            HuePool::from_table("yellow", YELLOWS),
            HuePool::from_table("green", GREENS),
            HuePool::from_table("blue", BLUES),
            HuePool::from_table("purple", PURPLES),
        ]
    }

    /// Pools this factory draws from.
    pub fn pools(&self) -> &[HuePool] {
        &self.pools
    }

    /// Inclusive range of distinct anchors kept per palette.
    pub fn anchor_range(&self) -> (usize, usize) {
        (self.min_anchors, self.max_anchors)
    }

    /// Draw a fresh closed-loop gradient.
    ///
    /// The returned palette has `k + 1` anchors where `k` is drawn uniformly
    /// from the keep range, and its last anchor repeats the first.
    pub fn random_palette<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<GradientPalette, PaletteError> {
        let mut anchors = Vec::with_capacity(self.pools.len() + 1);
        for pool in &self.pools {
            let color = pool.colors.choose(rng).ok_or_else(|| PaletteError::EmptyPool {
                name: pool.name.clone(),
            })?;
            anchors.push(*color);
        }

        anchors.shuffle(rng);

        let keep = rng.gen_range(self.min_anchors..=self.max_anchors);
        anchors.truncate(keep);
        anchors.push(anchors[0]);

        GradientPalette::new(&anchors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_pools_match_curated_tables() {
        let pools = PaletteFactory::default_pools();
        let names: Vec<&str> = pools.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["red", "orange", "yellow", "green", "blue", "purple"]);

        let sizes: Vec<usize> = pools.iter().map(|p| p.colors.len()).collect();
        assert_eq!(sizes, [6, 4, 3, 3, 5, 6]);

        assert_eq!(pools[0].colors[0].to_hex(), "#ff4848");
        assert_eq!(pools[4].colors[0].to_hex(), "#62d0ff");
    }

    #[test]
    fn test_random_palette_anchor_count_and_closure() {
        let factory = PaletteFactory::default();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let palette = factory.random_palette(&mut rng).unwrap();
            let anchors = palette.anchors();

            assert!(
                (5..=7).contains(&anchors.len()),
                "seed {seed}: {} anchors",
                anchors.len()
            );
            assert_eq!(anchors.first(), anchors.last(), "seed {seed}: loop not closed");
        }
    }

    #[test]
    fn test_random_palette_draws_at_most_one_per_pool() {
        let factory = PaletteFactory::default();
        let pools = factory.pools();

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let palette = factory.random_palette(&mut rng).unwrap();
            let distinct = &palette.anchors()[..palette.anchors().len() - 1];

            let mut used = vec![false; pools.len()];
            for color in distinct {
                let pool = pools
                    .iter()
                    .position(|p| p.colors.contains(color))
                    .expect("anchor must come from a pool");
                assert!(!used[pool], "seed {seed}: pool {} drawn twice", pools[pool].name);
                used[pool] = true;
            }
        }
    }

    #[test]
    fn test_random_palette_is_deterministic() {
        let factory = PaletteFactory::default();
        let a = factory.random_palette(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = factory.random_palette(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_keep_counts_reachable() {
        let factory = PaletteFactory::default();
        let mut seen = [false; 3];

        for seed in 0..300 {
            let mut rng = StdRng::seed_from_u64(seed);
            let len = factory.random_palette(&mut rng).unwrap().anchors().len();
            seen[len - 5] = true;
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_fixed_keep_range() {
        let factory = PaletteFactory::new(PaletteFactory::default_pools(), 2, 2).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let palette = factory.random_palette(&mut rng).unwrap();
        assert_eq!(palette.anchors().len(), 3);
    }

    #[test]
    fn test_new_validation() {
        assert_eq!(
            PaletteFactory::new(Vec::new(), 1, 1).unwrap_err(),
            PaletteError::NoPools
        );

        let pools = vec![
            HuePool::from_hex("red", &["#ff0000"]).unwrap(),
            HuePool::new("void", Vec::new()),
        ];
        assert_eq!(
            PaletteFactory::new(pools, 1, 2).unwrap_err(),
            PaletteError::EmptyPool {
                name: "void".to_string()
            }
        );

        for (min, max) in [(0, 2), (3, 2), (2, 7)] {
            let err = PaletteFactory::new(PaletteFactory::default_pools(), min, max).unwrap_err();
            assert!(matches!(err, PaletteError::InvalidAnchorRange { .. }));
        }
    }

    #[test]
    fn test_pool_from_hex_rejects_bad_color() {
        let err = HuePool::from_hex("bad", &["#ff0000", "#nothex"]).unwrap_err();
        assert!(matches!(err, PaletteError::ParseColor(_)));
    }
}
