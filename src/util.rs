use eframe::egui::{Color32, Pos2, pos2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

impl Circle {
    pub fn new(x: f32, y: f32, r: f32) -> Self {
        Self { x, y, r }
    }

    pub fn center(self) -> Pos2 {
        pos2(self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl HitBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn probe(point: Pos2) -> Self {
        Self::new(point.x, point.y, 1.0, 1.0)
    }

    pub fn center(self) -> Pos2 {
        pos2(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

pub fn distance(a: Pos2, b: Pos2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn circle_overlap(a: Circle, b: Circle) -> bool {
    distance(a.center(), b.center()) < a.r + b.r
}

pub fn box_overlap(a: HitBox, b: HitBox) -> bool {
    a.x + a.w > b.x && a.y + a.h > b.y && a.x < b.x + b.w && a.y < b.y + b.h
}

pub fn color_gradient(from: Color32, to: Color32) -> Color32 {
    const PERCENT: f32 = 0.5;

    let channel = |a: u8, b: u8| {
        let a = f32::from(a);
        let b = f32::from(b);
        (a + PERCENT * (b - a)).floor() as u8
    };

    Color32::from_rgb(
        channel(from.r(), to.r()),
        channel(from.g(), to.g()),
        channel(from.b(), to.b()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_is_floored_midpoint() {
        let blended = color_gradient(Color32::from_rgb(0, 0, 0), Color32::from_rgb(100, 200, 50));
        assert_eq!(blended, Color32::from_rgb(50, 100, 25));
    }

    #[test]
    fn gradient_floors_odd_and_descending_channels() {
        let blended = color_gradient(Color32::from_rgb(100, 1, 255), Color32::from_rgb(51, 4, 0));
        // 100 + 0.5 * -49 = 75.5, 1 + 0.5 * 3 = 2.5, 255 + 0.5 * -255 = 127.5
        assert_eq!(blended, Color32::from_rgb(75, 2, 127));
    }

    #[test]
    fn touching_circles_do_not_overlap() {
        let a = Circle::new(0.0, 0.0, 5.0);
        let b = Circle::new(10.0, 0.0, 5.0);
        assert!(!circle_overlap(a, b));

        let c = Circle::new(9.9, 0.0, 5.0);
        assert!(circle_overlap(a, c));
    }

    #[test]
    fn zero_radius_probe_hits_only_inside() {
        let node = Circle::new(3.0, 4.0, 5.0);
        assert!(circle_overlap(Circle::new(0.5, 0.5, 0.0), node));
        assert!(!circle_overlap(Circle::new(0.0, 0.0, 0.0), node));
    }

    #[test]
    fn box_overlap_is_exclusive_on_edges() {
        let button = HitBox::new(40.0, 300.0, 65.0, 20.0);
        assert!(box_overlap(HitBox::probe(pos2(40.0, 300.0)), button));
        assert!(box_overlap(HitBox::probe(pos2(104.5, 319.5)), button));
        assert!(!box_overlap(HitBox::probe(pos2(105.0, 310.0)), button));
        assert!(!box_overlap(HitBox::probe(pos2(39.0, 310.0)), button));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(pos2(0.0, 0.0), pos2(3.0, 4.0)), 5.0);
    }
}
