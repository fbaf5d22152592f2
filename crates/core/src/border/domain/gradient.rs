use crate::border::domain::hue_phase::HuePhase;
use crate::shared::color::Rgb;

/// `count` colors sampled at evenly spaced hues, starting at `phase`.
pub fn rainbow_gradient(phase: HuePhase, count: usize) -> Vec<Rgb> {
    (0..count)
        .map(|i| Rgb::rainbow(phase.sample(i, count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_samples_hit_band_edges() {
        let colors = rainbow_gradient(HuePhase::ZERO, 6);
        assert_eq!(
            colors,
            vec![
                Rgb::new(255, 0, 0),
                Rgb::new(255, 255, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 255, 255),
                Rgb::new(0, 0, 255),
                Rgb::new(255, 0, 255),
            ]
        );
    }

    #[test]
    fn test_phase_rotates_the_gradient() {
        let base = rainbow_gradient(HuePhase::ZERO, 6);
        let rotated = rainbow_gradient(HuePhase::new(60.0), 6);
        assert_eq!(rotated[0], base[1]);
        assert_eq!(rotated[5], base[0]);
    }

    #[test]
    fn test_empty() {
        assert!(rainbow_gradient(HuePhase::ZERO, 0).is_empty());
    }
}
