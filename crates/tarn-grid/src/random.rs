//! Seeded random heightmaps.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{GridConfigError, RandomGridConfig};
use tarn_core::HeightMap;

/// Generate a heightmap with elevations uniform in `0..=max_height`.
///
/// Uses `ChaCha8Rng` seeded from `config.seed`, so the same config
/// always yields the same grid on every platform.
///
/// # Examples
///
/// ```
/// use tarn_grid::{random_grid, RandomGridConfig};
///
/// let cfg = RandomGridConfig { length: 5, width: 3, max_height: 4, seed: 7 };
/// let map = random_grid(&cfg).unwrap();
/// assert_eq!((map.length(), map.width()), (5, 3));
/// assert!(map.max_elevation() <= 4);
/// assert_eq!(random_grid(&cfg).unwrap(), map);
/// ```
pub fn random_grid(config: &RandomGridConfig) -> Result<HeightMap, GridConfigError> {
    config.validate()?;
    log::debug!(
        "randomizing {}x{} grid with values 0-{} (seed {})",
        config.length,
        config.width,
        config.max_height,
        config.seed
    );
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let rows = (0..config.width)
        .map(|_| {
            (0..config.length)
                .map(|_| rng.gen_range(0..=config.max_height))
                .collect()
        })
        .collect();
    Ok(HeightMap::new(rows)?)
}
