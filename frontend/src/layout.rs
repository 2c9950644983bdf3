//! Geometry for the radial feature showcase.
//!
//! Everything is in stage pixels on a square `STAGE_SIZE` canvas. Cards and
//! connector lines are placed from the same angle list but with different
//! circles, so each line stops a little inside its card.

use std::f64::consts::PI;

pub const STAGE_SIZE: f64 = 900.0;
pub const CARD_WIDTH: f64 = 320.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialLayout {
    pub center: Point,
    pub radius: f64,
}

impl RadialLayout {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Point on the circle at `angle` degrees. Screen y grows downwards, so
    /// positive angles sweep clockwise.
    pub fn project(&self, angle: f64) -> Point {
        let rad = angle * PI / 180.0;
        Point::new(
            self.center.x + self.radius * rad.cos(),
            self.center.y + self.radius * rad.sin(),
        )
    }
}

/// Circle the connector lines end on. Sits 50px lower than the cards to line
/// up with the logo disc.
pub const CONNECTOR_LAYOUT: RadialLayout = RadialLayout::new(Point::new(450.0, 500.0), 320.0);

/// Circle the feature cards are centred on.
pub const CARD_LAYOUT: RadialLayout = RadialLayout::new(Point::new(450.0, 450.0), 360.0);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FEATURES;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn six_cards_sit_on_the_circle() {
        let layout = RadialLayout::new(Point::new(450.0, 450.0), 360.0);
        let points: Vec<Point> = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0]
            .iter()
            .map(|&angle| layout.project(angle))
            .collect();

        for p in &points {
            assert!((p.distance(layout.center) - 360.0).abs() < EPS);
        }
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                assert!(a.distance(*b) > 1.0, "{a:?} and {b:?} overlap");
            }
        }
        assert!(close(points[0], Point::new(810.0, 450.0)));
        assert!(close(points[3], Point::new(90.0, 450.0)));
    }

    #[test]
    fn quarter_turn_points_down() {
        let p = CARD_LAYOUT.project(90.0);
        assert!(close(p, Point::new(450.0, 810.0)));
    }

    #[test]
    fn connectors_end_inside_their_cards() {
        for feature in &FEATURES {
            let tip = CONNECTOR_LAYOUT.project(feature.angle);
            let card = CARD_LAYOUT.project(feature.angle);
            assert!(
                tip.distance(card) < CARD_WIDTH / 2.0,
                "{} connector misses its card",
                feature.title
            );
        }
    }

    #[test]
    fn cards_stay_on_stage_horizontally() {
        for feature in &FEATURES {
            let card = CARD_LAYOUT.project(feature.angle);
            assert!(card.x >= 0.0 && card.x <= STAGE_SIZE);
            assert!(card.y >= 0.0 && card.y <= STAGE_SIZE);
        }
    }
}
