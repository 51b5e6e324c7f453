use std::time::Duration;
use raylib::prelude::*;
use crate::constants::*;
use crate::rotator::{Rotator, SlideSurface};
use crate::slide::SlideDeck;
use crate::view::{CarouselView, FrameInput};

/// Splits the window between the hero region and the optional secondary strip.
pub fn layout(width: f32, height: f32, with_secondary: bool) -> (Rectangle, Option<Rectangle>) {
    if !with_secondary {
        return (Rectangle::new(0.0, 0.0, width, height), None);
    }
    let secondary_height = (height * SECONDARY_HEIGHT_RATIO).round();
    let hero_height = height - secondary_height;
    (
        Rectangle::new(0.0, 0.0, width, hero_height),
        Some(Rectangle::new(0.0, hero_height, width, secondary_height)),
    )
}

/// Every carousel on the page. Dropping it tears the page down.
pub struct CarouselEngine<S: SlideSurface> {
    hero: CarouselView<S>,
    secondary: Option<CarouselView<S>>,
}

impl<S: SlideSurface> CarouselEngine<S> {
    pub fn new(hero: Rotator<S>, secondary: Option<Rotator<S>>, width: f32, height: f32) -> Self {
        let (hero_bounds, secondary_bounds) = layout(width, height, secondary.is_some());

        let mut hero = CarouselView::new(hero, hero_bounds, true);
        hero.rotator_mut().start_auto();

        let secondary = secondary.zip(secondary_bounds).map(|(rotator, bounds)| {
            let mut view = CarouselView::new(rotator, bounds, false);
            view.rotator_mut().start_auto();
            view
        });

        Self { hero, secondary }
    }

    pub fn hero(&self) -> &CarouselView<S> {
        &self.hero
    }

    pub fn secondary(&self) -> Option<&CarouselView<S>> {
        self.secondary.as_ref()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        let (hero_bounds, secondary_bounds) = layout(width, height, self.secondary.is_some());
        self.hero.set_bounds(hero_bounds);
        if let (Some(view), Some(bounds)) = (self.secondary.as_mut(), secondary_bounds) {
            view.set_bounds(bounds);
        }
    }

    pub fn update(&mut self, dt: Duration, input: &FrameInput) {
        self.hero.update(dt, input);
        if let Some(view) = self.secondary.as_mut() {
            view.update(dt, input);
        }
    }
}

impl CarouselEngine<SlideDeck> {
    pub fn animate(&mut self, dt: f32) {
        self.hero.animate(dt);
        if let Some(view) = self.secondary.as_mut() {
            view.animate(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        self.hero.draw(d);
        if let Some(view) = self.secondary.as_ref() {
            view.draw(d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::testing::RecordingSurface;

    fn engine() -> CarouselEngine<RecordingSurface> {
        let hero = Rotator::new("hero", RecordingSurface::with_len(3), HERO_INTERVAL);
        let secondary = Rotator::new("secondary", RecordingSurface::with_len(4), SECONDARY_INTERVAL);
        CarouselEngine::new(hero, Some(secondary), 1000.0, 1000.0)
    }

    fn current(view: Option<&CarouselView<RecordingSurface>>) -> Option<usize> {
        view.and_then(|v| v.rotator().current_index())
    }

    #[test]
    fn layout_stacks_secondary_below_hero() {
        let (hero, secondary) = layout(1000.0, 1000.0, true);
        let secondary = secondary.unwrap();
        assert_eq!(hero.height + secondary.height, 1000.0);
        assert_eq!(secondary.y, hero.height);
        assert_eq!(secondary.height, 350.0);

        let (hero, secondary) = layout(640.0, 480.0, false);
        assert!(secondary.is_none());
        assert_eq!((hero.width, hero.height), (640.0, 480.0));
    }

    #[test]
    fn rotators_run_on_their_own_intervals() {
        let mut e = engine();
        assert!(e.hero().rotator().timer_active());
        assert!(current(e.secondary()).is_some());

        for _ in 0..100 {
            e.update(Duration::from_millis(150), &FrameInput::default());
        }
        // 15 seconds: five hero ticks, three secondary ticks
        assert_eq!(e.hero().rotator().current_index(), Some(2));
        assert_eq!(current(e.secondary()), Some(3));
    }

    #[test]
    fn hovering_hero_leaves_secondary_running() {
        let mut e = engine();
        let over_hero = FrameInput {
            pointer: Some(Vector2::new(500.0, 100.0)),
            ..FrameInput::default()
        };
        e.update(Duration::from_millis(5000), &over_hero);
        assert_eq!(e.hero().rotator().current_index(), Some(0));
        assert_eq!(current(e.secondary()), Some(1));
    }

    #[test]
    fn arrow_keys_drive_only_the_hero() {
        let mut e = engine();
        let right = FrameInput { right_pressed: true, ..FrameInput::default() };
        e.update(Duration::ZERO, &right);
        assert_eq!(e.hero().rotator().current_index(), Some(1));
        assert_eq!(current(e.secondary()), Some(0));
    }

    #[test]
    fn hidden_window_pauses_every_rotator() {
        let mut e = engine();
        let hidden = FrameInput { visible: false, ..FrameInput::default() };
        e.update(Duration::from_secs(60), &hidden);
        assert_eq!(e.hero().rotator().current_index(), Some(0));
        assert_eq!(current(e.secondary()), Some(0));
    }

    #[test]
    fn resize_moves_the_regions() {
        let mut e = engine();
        e.resize(2000.0, 500.0);
        assert_eq!(e.hero().bounds().width, 2000.0);
        assert_eq!(e.secondary().unwrap().bounds().y, e.hero().bounds().height);
    }
}
