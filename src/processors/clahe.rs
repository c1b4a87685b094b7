//! Contrast-limited adaptive histogram equalization.
//!
//! Normalizes uneven scan illumination by equalizing the histogram of each
//! tile of a fixed grid, with per-tile clipping to bound noise
//! amplification, and bilinear interpolation between neighboring tile
//! lookup tables to avoid visible tile seams.

use image::GrayImage;

/// A processor applying tiled, contrast-limited histogram equalization.
#[derive(Debug, Clone)]
pub struct Clahe {
    /// Tile grid as (columns, rows).
    grid: (u32, u32),
    /// Clip limit as a multiple of the uniform histogram level.
    clip_limit: f32,
}

impl Clahe {
    /// Creates a new CLAHE processor.
    ///
    /// # Arguments
    ///
    /// * `grid_cols` - Number of tile columns (at least 1).
    /// * `grid_rows` - Number of tile rows (at least 1).
    /// * `clip_limit` - Histogram clip limit as a multiple of the uniform
    ///   level; values at or below zero disable clipping in practice.
    pub fn new(grid_cols: u32, grid_rows: u32, clip_limit: f32) -> Self {
        Self {
            grid: (grid_cols.max(1), grid_rows.max(1)),
            clip_limit,
        }
    }

    /// Returns the tile grid as (columns, rows).
    pub fn grid(&self) -> (u32, u32) {
        self.grid
    }

    /// Returns the clip limit.
    pub fn clip_limit(&self) -> f32 {
        self.clip_limit
    }

    /// Applies the equalization, returning a new image of the same
    /// dimensions. Pure function of the input.
    pub fn apply(&self, image: &GrayImage) -> GrayImage {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return image.clone();
        }

        let (grid_cols, grid_rows) = self.grid;
        let tile_w = width.div_ceil(grid_cols).max(1);
        let tile_h = height.div_ceil(grid_rows).max(1);

        let luts = self.build_tile_luts(image, tile_w, tile_h);

        let mut output = GrayImage::new(width, height);
        for y in 0..height {
            let (ty0, ty1, fy) = interp_coords(y, tile_h, grid_rows);
            for x in 0..width {
                let (tx0, tx1, fx) = interp_coords(x, tile_w, grid_cols);
                let v = image.get_pixel(x, y)[0] as usize;

                let top = lerp(
                    luts[ty0 * grid_cols as usize + tx0][v] as f32,
                    luts[ty0 * grid_cols as usize + tx1][v] as f32,
                    fx,
                );
                let bottom = lerp(
                    luts[ty1 * grid_cols as usize + tx0][v] as f32,
                    luts[ty1 * grid_cols as usize + tx1][v] as f32,
                    fx,
                );
                let value = lerp(top, bottom, fy).round().clamp(0.0, 255.0) as u8;
                output.put_pixel(x, y, image::Luma([value]));
            }
        }
        output
    }

    /// Builds one clipped-equalization lookup table per tile.
    fn build_tile_luts(&self, image: &GrayImage, tile_w: u32, tile_h: u32) -> Vec<[u8; 256]> {
        let (width, height) = image.dimensions();
        let (grid_cols, grid_rows) = self.grid;
        let mut luts = Vec::with_capacity((grid_cols * grid_rows) as usize);

        for ty in 0..grid_rows {
            for tx in 0..grid_cols {
                let x0 = (tx * tile_w).min(width);
                let y0 = (ty * tile_h).min(height);
                let x1 = (x0 + tile_w).min(width);
                let y1 = (y0 + tile_h).min(height);

                luts.push(tile_lut(image, x0, y0, x1, y1, self.clip_limit));
            }
        }
        luts
    }
}

impl Default for Clahe {
    /// Creates a CLAHE processor with an 8x8 grid and clip limit 2.0.
    fn default() -> Self {
        Self::new(8, 8, 2.0)
    }
}

/// Computes the clipped-equalization lookup table for one tile.
fn tile_lut(image: &GrayImage, x0: u32, y0: u32, x1: u32, y1: u32, clip_limit: f32) -> [u8; 256] {
    let area = ((x1.saturating_sub(x0)) * (y1.saturating_sub(y0))) as u64;
    if area == 0 {
        // Degenerate tile past the image edge; identity mapping.
        return std::array::from_fn(|i| i as u8);
    }

    let mut histogram = [0u64; 256];
    for y in y0..y1 {
        for x in x0..x1 {
            histogram[image.get_pixel(x, y)[0] as usize] += 1;
        }
    }

    // Clip and redistribute the excess uniformly across all bins.
    let clip = ((clip_limit * area as f32) / 256.0).max(1.0) as u64;
    let mut excess = 0u64;
    for bin in histogram.iter_mut() {
        if *bin > clip {
            excess += *bin - clip;
            *bin = clip;
        }
    }
    let bonus = excess / 256;
    for bin in histogram.iter_mut() {
        *bin += bonus;
    }

    let total: u64 = histogram.iter().sum();
    let mut lut = [0u8; 256];
    let mut cumulative = 0u64;
    for (i, slot) in lut.iter_mut().enumerate() {
        cumulative += histogram[i];
        *slot = ((cumulative * 255 + total / 2) / total).min(255) as u8;
    }
    lut
}

/// Maps a pixel coordinate to its two neighboring tile indices and the
/// interpolation fraction between them, clamping at the image borders.
fn interp_coords(p: u32, tile: u32, grid: u32) -> (usize, usize, f32) {
    let g = (p as f32 + 0.5) / tile as f32 - 0.5;
    if g <= 0.0 {
        return (0, 0, 0.0);
    }
    let last = (grid - 1) as f32;
    if g >= last {
        let i = (grid - 1) as usize;
        return (i, i, 0.0);
    }
    let i0 = g.floor() as usize;
    (i0, i0 + 1, g - g.floor())
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_preserves_dimensions() {
        let image = GrayImage::from_pixel(123, 77, Luma([90]));
        let out = Clahe::default().apply(&image);
        assert_eq!(out.dimensions(), (123, 77));
    }

    #[test]
    fn test_uniform_input_stays_uniform() {
        let image = GrayImage::from_pixel(128, 128, Luma([128]));
        let out = Clahe::default().apply(&image);
        let first = out.get_pixel(0, 0)[0];
        assert!(out.pixels().all(|p| p[0] == first));
    }

    #[test]
    fn test_deterministic() {
        let mut image = GrayImage::new(96, 96);
        for (x, y, p) in image.enumerate_pixels_mut() {
            *p = Luma([((x * 3 + y * 5) % 200) as u8 + 20]);
        }
        let clahe = Clahe::default();
        assert_eq!(clahe.apply(&image), clahe.apply(&image));
    }

    #[test]
    fn test_stretches_low_contrast_ramp() {
        // Horizontal ramp confined to a narrow band of gray levels.
        let mut image = GrayImage::new(256, 256);
        for (x, _, p) in image.enumerate_pixels_mut() {
            *p = Luma([100 + (x / 4) as u8]);
        }
        let out = Clahe::default().apply(&image);

        let range = |img: &GrayImage| {
            let min = img.pixels().map(|p| p[0]).min().unwrap();
            let max = img.pixels().map(|p| p[0]).max().unwrap();
            max - min
        };
        assert!(range(&out) > range(&image));
    }
}
