use raylib::prelude::*;
use crate::constants::*;
use crate::rotator::SlideSurface;

/// Opacity animation toward fully shown (active) or fully hidden (inactive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    active: bool,
    opacity: f32,
    start_opacity: f32,
    timer: f32,
}

impl Fade {
    pub fn hidden() -> Self {
        Self { active: false, opacity: 0.0, start_opacity: 0.0, timer: FADE_DURATION }
    }

    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            self.active = active;
            self.start_opacity = self.opacity;
            self.timer = 0.0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer >= FADE_DURATION {
            return;
        }
        self.timer += dt;
        let t = (self.timer / FADE_DURATION).min(1.0);
        let target = if self.active { 1.0 } else { 0.0 };
        self.opacity = raylib::core::math::lerp(self.start_opacity, target, t);
    }
}

/// Largest rectangle with the texture's aspect ratio centred inside `bounds`.
pub fn fit_rect(tex_width: f32, tex_height: f32, bounds: Rectangle) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return Rectangle::new(bounds.x, bounds.y, 0.0, 0.0);
    }
    let scale = (bounds.width / tex_width).min(bounds.height / tex_height);
    let width = tex_width * scale;
    let height = tex_height * scale;
    Rectangle::new(
        bounds.x + (bounds.width - width) * 0.5,
        bounds.y + (bounds.height - height) * 0.5,
        width,
        height,
    )
}

pub struct Slide {
    image: Texture2D,
    fade: Fade,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image, fade: Fade::hidden() }
    }

    pub fn update(&mut self, dt: f32) {
        self.fade.update(dt);
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, bounds: Rectangle) {
        let opacity = self.fade.opacity();
        if opacity <= 0.0 {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            fit_rect(tex_width, tex_height, bounds),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::new(255, 255, 255, (opacity * 255.0).round() as u8),
        );
    }
}

/// Slides of one carousel region, as seen by its rotator.
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, bounds: Rectangle) {
        // Outgoing slides first so the active one fades in on top
        for slide in self.slides.iter().filter(|s| !s.fade.is_active()) {
            slide.draw(d, bounds);
        }
        for slide in self.slides.iter().filter(|s| s.fade.is_active()) {
            slide.draw(d, bounds);
        }
    }
}

impl SlideSurface for SlideDeck {
    fn len(&self) -> usize {
        self.slides.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.fade.set_active(active);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_reaches_full_opacity_after_duration() {
        let mut fade = Fade::hidden();
        fade.set_active(true);
        fade.update(FADE_DURATION * 0.5);
        assert!(fade.opacity() > 0.0 && fade.opacity() < 1.0);
        fade.update(FADE_DURATION);
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn fade_out_starts_from_current_opacity() {
        let mut fade = Fade::hidden();
        fade.set_active(true);
        fade.update(FADE_DURATION * 0.5);
        let midway = fade.opacity();

        fade.set_active(false);
        fade.update(0.0);
        assert!((fade.opacity() - midway).abs() < 1e-6);
        fade.update(FADE_DURATION);
        assert_eq!(fade.opacity(), 0.0);
    }

    #[test]
    fn repeated_set_active_does_not_restart() {
        let mut fade = Fade::hidden();
        fade.set_active(true);
        fade.update(FADE_DURATION);
        fade.set_active(true);
        fade.update(0.01);
        assert_eq!(fade.opacity(), 1.0);
    }

    #[test]
    fn wide_texture_is_letterboxed() {
        let r = fit_rect(400.0, 100.0, Rectangle::new(10.0, 20.0, 200.0, 200.0));
        assert_eq!(r.width, 200.0);
        assert_eq!(r.height, 50.0);
        assert_eq!(r.x, 10.0);
        assert_eq!(r.y, 95.0);
    }

    #[test]
    fn tall_texture_is_pillarboxed() {
        let r = fit_rect(100.0, 400.0, Rectangle::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(r.width, 50.0);
        assert_eq!(r.height, 200.0);
        assert_eq!(r.x, 75.0);
    }
}
