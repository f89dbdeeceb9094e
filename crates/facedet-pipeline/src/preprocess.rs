/// Spread grayscale intensities across the full range to soften the effect
/// of uneven lighting before the cascade scan.
pub fn equalize(gray: &mut image::GrayImage) {
    imageproc::contrast::equalize_histogram_mut(gray);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_frame_is_stretched_to_full_range() {
        // Intensities confined to [0, 40) before equalization.
        let mut img = image::GrayImage::from_fn(32, 32, |x, y| image::Luma([((x + y) % 40) as u8]));
        equalize(&mut img);
        let max = img.pixels().map(|p| p.0[0]).max().expect("pixels");
        assert_eq!(max, 255);
    }

    #[test]
    fn pixel_ordering_is_preserved() {
        let mut img = image::GrayImage::from_fn(16, 16, |x, y| image::Luma([(x * 16 + y) as u8]));
        let before: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();
        equalize(&mut img);
        let after: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();

        for i in 0..before.len() {
            for j in 0..before.len() {
                if before[i] <= before[j] {
                    assert!(after[i] <= after[j], "ordering broken at ({i}, {j})");
                }
            }
        }
    }
}
