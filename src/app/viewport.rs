use eframe::egui::{Pos2, Vec2};

use crate::util::distance;

use super::scene::ClusterPoint;

pub(in crate::app) const ZOOM_SENSITIVITY: f32 = 0.0005;
const CAMERA_SPEED: f32 = 0.09;
const CAMERA_ARRIVAL_DISTANCE: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::app) enum CameraStep {
    Moving,
    Arrived,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct Viewport {
    pub(in crate::app) scale_factor: f32,
    pub(in crate::app) translate: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale_factor: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

impl Viewport {
    pub(in crate::app) fn screen_to_world(&self, screen: Pos2) -> Option<Pos2> {
        if self.scale_factor <= 0.0 {
            return None;
        }
        Some(((screen.to_vec2() - self.translate) / self.scale_factor).to_pos2())
    }

    pub(in crate::app) fn world_to_screen(&self, world: Pos2) -> Pos2 {
        (world.to_vec2() * self.scale_factor + self.translate).to_pos2()
    }

    pub(in crate::app) fn zoom(&mut self, delta: f32, pointer: Pos2) {
        let old_scale = self.scale_factor;
        self.scale_factor -= delta * ZOOM_SENSITIVITY;

        if self.scale_factor <= 0.0 {
            self.scale_factor = 0.0;
            return;
        }

        if old_scale > 0.0 {
            let anchor = (pointer.to_vec2() - self.translate) / old_scale;
            self.translate += delta * anchor * ZOOM_SENSITIVITY;
        }
    }

    pub(in crate::app) fn pan(&mut self, previous: Pos2, pointer: Pos2) {
        self.translate -= previous - pointer;
    }

    pub(in crate::app) fn world_center(&self, canvas_size: Vec2) -> Option<Pos2> {
        self.screen_to_world((canvas_size / 2.0).to_pos2())
    }

    pub(in crate::app) fn step_toward(&mut self, target: ClusterPoint, canvas_size: Vec2) -> CameraStep {
        let Some(center) = self.world_center(canvas_size) else {
            return CameraStep::Arrived;
        };

        let angle = -(center.y - target.y).atan2(center.x - target.x);
        let remaining = distance(target.center(), center);
        let speed = remaining * CAMERA_SPEED * self.scale_factor;

        self.translate.x += angle.cos() * speed;
        self.translate.y -= angle.sin() * speed;

        if remaining < CAMERA_ARRIVAL_DISTANCE {
            CameraStep::Arrived
        } else {
            CameraStep::Moving
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{pos2, vec2};
    use proptest::prelude::*;

    use super::*;

    const CANVAS: Vec2 = vec2(1440.0, 920.0);

    fn viewport(scale_factor: f32, tx: f32, ty: f32) -> Viewport {
        Viewport {
            scale_factor,
            translate: vec2(tx, ty),
        }
    }

    #[test]
    fn default_is_identity() {
        let view = Viewport::default();
        assert_eq!(view.screen_to_world(pos2(3.0, 4.0)), Some(pos2(3.0, 4.0)));
        assert_eq!(view.world_to_screen(pos2(3.0, 4.0)), pos2(3.0, 4.0));
    }

    #[test]
    fn screen_to_world_undoes_translate_then_scale() {
        let view = viewport(2.0, 100.0, -50.0);
        assert_eq!(view.screen_to_world(pos2(300.0, 150.0)), Some(pos2(100.0, 100.0)));
    }

    #[test]
    fn zoom_keeps_pointer_anchored() {
        let mut view = viewport(1.3, 40.0, -25.0);
        let pointer = pos2(612.0, 344.0);
        let before = view.screen_to_world(pointer).unwrap();

        view.zoom(-120.0, pointer);
        assert!(view.scale_factor > 1.3);
        let after = view.screen_to_world(pointer).unwrap();
        assert!((before - after).length() < 1e-2);

        view.zoom(300.0, pointer);
        let after = view.screen_to_world(pointer).unwrap();
        assert!((before - after).length() < 1e-2);
    }

    #[test]
    fn zoom_from_zero_skips_anchor_adjustment() {
        let mut view = viewport(0.0, 10.0, 20.0);
        assert_eq!(view.screen_to_world(pos2(1.0, 1.0)), None);

        view.zoom(-100.0, pos2(500.0, 500.0));
        assert!((view.scale_factor - 0.05).abs() < 1e-6);
        assert_eq!(view.translate, vec2(10.0, 20.0));
    }

    #[test]
    fn pan_follows_pointer_motion() {
        let mut view = Viewport::default();
        view.pan(pos2(100.0, 100.0), pos2(130.0, 90.0));
        assert_eq!(view.translate, vec2(30.0, -10.0));
    }

    #[test]
    fn camera_stops_when_scale_is_zero() {
        let mut view = viewport(0.0, 0.0, 0.0);
        let target = ClusterPoint::new(5000.0, 5000.0, 40.0);
        assert_eq!(view.step_toward(target, CANVAS), CameraStep::Arrived);
        assert_eq!(view.translate, Vec2::ZERO);
    }

    #[test]
    fn camera_moves_center_toward_target() {
        let mut view = Viewport::default();
        let target = ClusterPoint::new(2000.0, -300.0, 40.0);
        let start = view.world_center(CANVAS).unwrap();

        assert_eq!(view.step_toward(target, CANVAS), CameraStep::Moving);
        let next = view.world_center(CANVAS).unwrap();
        let before = distance(start, target.center());
        let after = distance(next, target.center());
        assert!((after - before * (1.0 - CAMERA_SPEED)).abs() < 1e-2);
    }

    proptest! {
        #[test]
        fn transform_round_trips(
            scale_factor in 0.01f32..20.0,
            tx in -5000.0f32..5000.0,
            ty in -5000.0f32..5000.0,
            sx in 0.0f32..2000.0,
            sy in 0.0f32..2000.0,
        ) {
            let view = viewport(scale_factor, tx, ty);
            let screen = pos2(sx, sy);
            let world = view.screen_to_world(screen).unwrap();
            let back = view.world_to_screen(world);
            prop_assert!((back - screen).length() < 1e-2, "{screen:?} -> {world:?} -> {back:?}");
        }

        #[test]
        fn camera_animation_converges(
            scale_factor in 0.05f32..5.0,
            tx in -10_000.0f32..10_000.0,
            ty in -10_000.0f32..10_000.0,
            target_x in -100_000.0f32..100_000.0,
            target_y in -100_000.0f32..100_000.0,
        ) {
            let mut view = viewport(scale_factor, tx, ty);
            let target = ClusterPoint::new(target_x, target_y, 60.0);

            let mut frames = 0;
            while view.step_toward(target, CANVAS) == CameraStep::Moving {
                frames += 1;
                prop_assert!(frames <= 500, "camera still moving after 500 frames");
            }
            let center = view.world_center(CANVAS).unwrap();
            prop_assert!(distance(center, target.center()) < CAMERA_ARRIVAL_DISTANCE);
        }

        #[test]
        fn zooming_out_clamps_at_zero(delta in 1.0f32..500.0, start in 0.01f32..10.0) {
            let mut view = viewport(start, 0.0, 0.0);
            let bound = (start / (delta * ZOOM_SENSITIVITY)).ceil() as usize + 1;

            for _ in 0..bound * 2 {
                view.zoom(delta, pos2(400.0, 300.0));
                prop_assert!(view.scale_factor >= 0.0);
                if view.scale_factor == 0.0 {
                    break;
                }
            }
            prop_assert_eq!(view.scale_factor, 0.0);

            view.zoom(delta, pos2(400.0, 300.0));
            prop_assert_eq!(view.scale_factor, 0.0);
        }
    }
}
