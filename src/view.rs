use std::time::Duration;
use raylib::prelude::*;
use crate::constants::*;
use crate::events::{HostEvent, HoverTracker, VisibilityTracker};
use crate::rotator::{Rotator, SlideSurface};
use crate::slide::SlideDeck;

/// Input sampled from the window once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// `None` when the cursor is outside the window.
    pub pointer: Option<Vector2>,
    pub clicked: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub visible: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self { pointer: None, clicked: false, left_pressed: false, right_pressed: false, visible: true }
    }
}

impl FrameInput {
    pub fn capture(rl: &RaylibHandle) -> Self {
        Self {
            pointer: rl.is_cursor_on_screen().then(|| rl.get_mouse_position()),
            clicked: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            left_pressed: rl.is_key_pressed(KeyboardKey::KEY_LEFT),
            right_pressed: rl.is_key_pressed(KeyboardKey::KEY_RIGHT),
            visible: !rl.is_window_minimized() && !rl.is_window_hidden(),
        }
    }
}

pub fn rect_contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x < rect.x + rect.width
        && point.y >= rect.y
        && point.y < rect.y + rect.height
}

/// One rotator placed on screen, with its arrow buttons.
pub struct CarouselView<S: SlideSurface> {
    rotator: Rotator<S>,
    bounds: Rectangle,
    keyboard: bool,
    hover: HoverTracker,
    visibility: VisibilityTracker,
}

impl<S: SlideSurface> CarouselView<S> {
    /// `keyboard` routes the left/right arrow keys to this rotator.
    pub fn new(rotator: Rotator<S>, bounds: Rectangle, keyboard: bool) -> Self {
        Self {
            rotator,
            bounds,
            keyboard,
            hover: HoverTracker::default(),
            visibility: VisibilityTracker::default(),
        }
    }

    pub fn rotator(&self) -> &Rotator<S> {
        &self.rotator
    }

    pub fn rotator_mut(&mut self) -> &mut Rotator<S> {
        &mut self.rotator
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    pub fn previous_button(&self) -> Rectangle {
        Rectangle::new(
            self.bounds.x + ARROW_MARGIN,
            self.bounds.y + (self.bounds.height - ARROW_SIZE) * 0.5,
            ARROW_SIZE,
            ARROW_SIZE,
        )
    }

    pub fn next_button(&self) -> Rectangle {
        Rectangle::new(
            self.bounds.x + self.bounds.width - ARROW_MARGIN - ARROW_SIZE,
            self.bounds.y + (self.bounds.height - ARROW_SIZE) * 0.5,
            ARROW_SIZE,
            ARROW_SIZE,
        )
    }

    /// Host events produced by this frame's input, in dispatch order.
    pub fn events(&mut self, input: &FrameInput) -> Vec<HostEvent> {
        let mut events = Vec::new();

        let visibility = self.visibility.sample(input.visible);
        let inside = input.pointer.is_some_and(|p| rect_contains(self.bounds, p));
        let hover = self.hover.sample(inside);

        if let Some(event) = visibility {
            events.push(event);
        }

        // Hover edges are tracked while hidden but never resume a hidden rotator
        if input.visible {
            match hover {
                Some(event) => events.push(event),
                None if visibility == Some(HostEvent::VisibilityRestored) && self.hover.is_inside() => {
                    events.push(HostEvent::HoverEnter)
                }
                None => {}
            }
        }

        if let (true, Some(pointer)) = (input.clicked, input.pointer) {
            if rect_contains(self.previous_button(), pointer) {
                events.push(HostEvent::PreviousPressed);
            } else if rect_contains(self.next_button(), pointer) {
                events.push(HostEvent::NextPressed);
            }
        }

        if self.keyboard {
            if input.left_pressed {
                events.push(HostEvent::PreviousPressed);
            }
            if input.right_pressed {
                events.push(HostEvent::NextPressed);
            }
        }

        events
    }

    pub fn update(&mut self, dt: Duration, input: &FrameInput) {
        for event in self.events(input) {
            self.rotator.handle(event);
        }
        self.rotator.update(dt);
    }
}

impl CarouselView<SlideDeck> {
    pub fn animate(&mut self, dt: f32) {
        self.rotator.surface_mut().update(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        // Clip to the region so letterboxed slides never bleed into the neighbour
        let mut s = d.begin_scissor_mode(
            self.bounds.x as i32,
            self.bounds.y as i32,
            self.bounds.width as i32,
            self.bounds.height as i32,
        );
        s.draw_rectangle_rec(self.bounds, Color::BLACK);
        self.rotator.surface().draw(&mut s, self.bounds);
        drop(s);

        if self.rotator.len() > 1 {
            self.draw_arrows(d);
            self.draw_dots(d);
        }
    }

    fn draw_arrows(&self, d: &mut RaylibDrawHandle) {
        let prev = self.previous_button();
        let next = self.next_button();
        let inset = ARROW_SIZE * 0.3;
        let background = Color::new(0, 0, 0, 120);

        d.draw_rectangle_rec(prev, background);
        d.draw_triangle(
            Vector2::new(prev.x + inset, prev.y + prev.height * 0.5),
            Vector2::new(prev.x + prev.width - inset, prev.y + prev.height - inset),
            Vector2::new(prev.x + prev.width - inset, prev.y + inset),
            Color::WHITE,
        );

        d.draw_rectangle_rec(next, background);
        d.draw_triangle(
            Vector2::new(next.x + next.width - inset, next.y + next.height * 0.5),
            Vector2::new(next.x + inset, next.y + inset),
            Vector2::new(next.x + inset, next.y + next.height - inset),
            Color::WHITE,
        );
    }

    fn draw_dots(&self, d: &mut RaylibDrawHandle) {
        let count = self.rotator.len();
        let spacing = 18.0;
        let start_x = self.bounds.x + (self.bounds.width - spacing * (count - 1) as f32) * 0.5;
        let y = self.bounds.y + self.bounds.height - ARROW_MARGIN;

        for i in 0..count {
            let color = if Some(i) == self.rotator.current_index() {
                Color::WHITE
            } else {
                Color::new(255, 255, 255, 90)
            };
            d.draw_circle_v(Vector2::new(start_x + spacing * i as f32, y), 5.0, color);
        }
    }
}
