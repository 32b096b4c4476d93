use glam::{Mat4, Vec3};

/// Axis-aligned bounding box in whatever space its points live in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    pub fn new(point1: Vec3, point2: Vec3) -> AABB {
        let min = point1.min(point2);
        let max = point1.max(point2);
        AABB { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn corners(&self) -> [Vec3; 8] {
        [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Axis-aligned box around all 8 corners after transforming them.
    /// Conservative for rotated boxes, which is what camera framing wants.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let corners = self
            .corners()
            .map(|corner| matrix.transform_point3(corner));

        let mut min = corners[0];
        let mut max = corners[0];
        for corner in &corners[1..] {
            min = min.min(*corner);
            max = max.max(*corner);
        }

        AABB { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn new_orders_min_and_max_per_axis() {
        let aabb = AABB::new(Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, 0.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn size_and_center_of_unit_cube() {
        let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        assert_eq!(aabb.size(), Vec3::splat(2.0));
        assert_eq!(aabb.center(), Vec3::ZERO);
    }

    #[test]
    fn transformed_by_translation_shifts_bounds() {
        let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let moved = aabb.transformed(&Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0)));
        assert_eq!(moved.min, Vec3::new(4.0, -1.0, -1.0));
        assert_eq!(moved.max, Vec3::new(6.0, 1.0, 1.0));
    }

    #[test]
    fn transformed_by_yaw_swaps_extents() {
        // A box long on X, rotated a quarter turn about Y, becomes long on Z.
        let aabb = AABB::new(Vec3::new(-2.0, -1.0, -0.5), Vec3::new(2.0, 1.0, 0.5));
        let rotated = aabb.transformed(&Mat4::from_rotation_y(FRAC_PI_2));
        let size = rotated.size();
        assert!((size.x - 1.0).abs() < 1e-5);
        assert!((size.y - 2.0).abs() < 1e-5);
        assert!((size.z - 4.0).abs() < 1e-5);
    }
}
