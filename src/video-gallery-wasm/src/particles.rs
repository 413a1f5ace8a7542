use crate::config::GalleryConfig;

/// One decorative particle, fully parameterized
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container
    pub left: f64,
    /// Vertical position, percent of the container
    pub top: f64,
    /// Drift vector in pixels
    pub tx: f64,
    pub ty: f64,
    /// Animation delay in seconds
    pub delay: f64,
    /// Animation duration in seconds
    pub duration: f64,
}

impl Particle {
    /// Draw a particle from a source of uniform values in [0, 1)
    pub fn random(rng: &mut impl FnMut() -> f64) -> Self {
        Self {
            left: rng() * 100.0,
            top: rng() * 100.0,
            tx: (rng() - 0.5) * 200.0,
            ty: (rng() - 0.5) * 200.0,
            delay: rng() * 20.0,
            duration: rng() * 10.0 + 15.0,
        }
    }

    /// Inline style properties as (name, value) pairs
    pub fn style(&self) -> [(&'static str, String); 6] {
        [
            ("left", format!("{}%", self.left)),
            ("top", format!("{}%", self.top)),
            ("--tx", format!("{}px", self.tx)),
            ("--ty", format!("{}px", self.ty)),
            ("animation-delay", format!("{}s", self.delay)),
            ("animation-duration", format!("{}s", self.duration)),
        ]
    }
}

/// Number of particles for the page; gallery pages get a denser field
pub fn particle_count(config: &GalleryConfig, has_gallery: bool) -> usize {
    if has_gallery {
        config.gallery_particles
    } else {
        config.default_particles
    }
}

/// Generate the whole particle field
pub fn generate(count: usize, mut rng: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(&mut rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic sequence covering the whole [0, 1) range
    fn stepping_rng() -> impl FnMut() -> f64 {
        let mut n: u32 = 0;
        move || {
            n = (n + 7) % 100;
            f64::from(n) / 100.0
        }
    }

    #[test]
    fn test_particle_count() {
        let config = GalleryConfig::default();
        assert_eq!(particle_count(&config, true), 50);
        assert_eq!(particle_count(&config, false), 30);
    }

    #[test]
    fn test_generate_count() {
        assert_eq!(generate(50, stepping_rng()).len(), 50);
        assert_eq!(generate(30, stepping_rng()).len(), 30);
        assert!(generate(0, stepping_rng()).is_empty());
    }

    #[test]
    fn test_particle_ranges() {
        for p in generate(200, stepping_rng()) {
            assert!((0.0..=100.0).contains(&p.left));
            assert!((0.0..=100.0).contains(&p.top));
            assert!((-100.0..=100.0).contains(&p.tx));
            assert!((-100.0..=100.0).contains(&p.ty));
            assert!((0.0..20.0).contains(&p.delay));
            assert!((15.0..25.0).contains(&p.duration));
        }
    }

    #[test]
    fn test_extremes() {
        let low = Particle::random(&mut || 0.0);
        assert_eq!(low.left, 0.0);
        assert_eq!(low.tx, -100.0);
        assert_eq!(low.duration, 15.0);

        let high = Particle::random(&mut || 0.999);
        assert!(high.left < 100.0);
        assert!(high.duration < 25.0);
    }

    #[test]
    fn test_style() {
        let p = Particle {
            left: 10.0,
            top: 20.5,
            tx: -3.0,
            ty: 4.0,
            delay: 1.5,
            duration: 16.0,
        };
        let style = p.style();
        assert_eq!(style[0], ("left", "10%".to_string()));
        assert_eq!(style[1], ("top", "20.5%".to_string()));
        assert_eq!(style[2], ("--tx", "-3px".to_string()));
        assert_eq!(style[5], ("animation-duration", "16s".to_string()));
    }
}
