//! Core traits for splinecloud

use crate::{point::*, point_cloud::*};

/// Trait for drawable/renderable objects
pub trait Drawable {
    /// Get the bounding box of the object
    fn bounding_box(&self) -> (Point3f, Point3f);

    /// Get the center point of the object
    fn center(&self) -> Point3f {
        let (min, max) = self.bounding_box();
        nalgebra::center(&min, &max)
    }
}

impl<T> Drawable for PointCloud<T>
where
    T: Clone + Copy,
    Point3f: From<T>,
{
    fn bounding_box(&self) -> (Point3f, Point3f) {
        let mut positions = self.points.iter().map(|p| Point3f::from(*p));
        let Some(first) = positions.next() else {
            return (Point3f::origin(), Point3f::origin());
        };

        positions.fold((first, first), |(min, max), p| (min.inf(&p), max.sup(&p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_bounding_box_of_colored_cloud() {
        let cloud = PointCloud::from_points(vec![
            ColoredPoint3f::new(-1.0, 2.0, 0.5, Color::BLACK),
            ColoredPoint3f::new(3.0, -4.0, 1.5, Color::WHITE),
        ]);
        let (min, max) = cloud.bounding_box();
        assert_eq!(min, Point3f::new(-1.0, -4.0, 0.5));
        assert_eq!(max, Point3f::new(3.0, 2.0, 1.5));
        assert_eq!(cloud.center(), Point3f::new(1.0, -1.0, 1.0));
    }

    #[test]
    fn test_bounding_box_of_empty_cloud() {
        let cloud = PointCloud::<ColoredPoint3f>::new();
        assert_eq!(cloud.bounding_box(), (Point3f::origin(), Point3f::origin()));
    }
}
