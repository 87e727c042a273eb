//! Bounding volume tracker
//!
//! The box is never cached on the body: it is derived from position, half size
//! and orientation, and must be recomputed after any change to those before a
//! collision test reads it.

use crate::domain::play_volume::PlayVolume;

use super::vec3::Vec3;

/// Axis-aligned bounding box (world space)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// True when the box lies inside the volume's x and z walls (y is ignored).
    pub fn within_walls(&self, volume: &PlayVolume, eps: f32) -> bool {
        self.min.x >= volume.x_min - eps
            && self.max.x <= volume.x_max + eps
            && self.min.z >= volume.z_min - eps
            && self.max.z <= volume.z_max + eps
    }

    /// True when the box does not dip below the floor plane.
    pub fn above_floor(&self, volume: &PlayVolume, eps: f32) -> bool {
        self.min.y >= volume.y_min - eps
    }
}

/// Rotation matrix for Euler angles applied in XYZ order (R = Rx * Ry * Rz).
#[inline]
fn rotation_matrix(orientation: Vec3) -> [[f32; 3]; 3] {
    let (sx, cx) = orientation.x.sin_cos();
    let (sy, cy) = orientation.y.sin_cos();
    let (sz, cz) = orientation.z.sin_cos();

    [
        [cy * cz, -cy * sz, sy],
        [cx * sz + sx * sy * cz, cx * cz - sx * sy * sz, -sx * cy],
        [sx * sz - cx * sy * cz, sx * cz + cx * sy * sz, cx * cy],
    ]
}

/// Smallest axis-aligned box enclosing a cube of `half_size` centered at
/// `position` and rotated by `orientation`.
pub fn compute_aabb(position: Vec3, half_size: f32, orientation: Vec3) -> Aabb {
    let r = rotation_matrix(orientation);
    let mut extents = Vec3::zero();
    for (i, row) in r.iter().enumerate() {
        *extents.axis_mut(i) = half_size * (row[0].abs() + row[1].abs() + row[2].abs());
    }
    Aabb::from_center_extents(position, extents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn unrotated_cube_box_is_half_size_around_center() {
        let b = compute_aabb(Vec3::new(10.0, 20.0, 30.0), 5.0, Vec3::zero());
        assert_eq!(b.min, Vec3::new(5.0, 15.0, 25.0));
        assert_eq!(b.max, Vec3::new(15.0, 25.0, 35.0));
    }

    #[test]
    fn quarter_turn_leaves_extents_unchanged() {
        let b = compute_aabb(Vec3::zero(), 5.0, Vec3::new(FRAC_PI_2, 0.0, -FRAC_PI_2));
        let e = b.extents();
        assert!(close(e.x, 5.0));
        assert!(close(e.y, 5.0));
        assert!(close(e.z, 5.0));
    }

    #[test]
    fn eighth_turn_about_x_widens_y_and_z() {
        let b = compute_aabb(Vec3::zero(), 5.0, Vec3::new(FRAC_PI_4, 0.0, 0.0));
        let e = b.extents();
        let diag = 5.0 * std::f32::consts::SQRT_2;
        assert!(close(e.x, 5.0));
        assert!(close(e.y, diag));
        assert!(close(e.z, diag));
    }

    #[test]
    fn box_is_symmetric_about_position() {
        let p = Vec3::new(3.0, -2.0, 7.5);
        let b = compute_aabb(p, 4.0, Vec3::new(0.3, 1.1, -0.7));
        let c = b.center();
        assert!(close(c.x, p.x) && close(c.y, p.y) && close(c.z, p.z));
    }

    #[test]
    fn wall_and_floor_checks_use_tolerance() {
        let volume = PlayVolume::new(0.0, 10.0, 0.0, 10.0, 0.0, 10.0).unwrap();
        let b = Aabb::from_center_extents(Vec3::new(5.0, 1.0, 5.0), Vec3::new(5.0, 1.001, 5.0));
        assert!(b.within_walls(&volume, 0.0));
        assert!(!b.above_floor(&volume, 0.0));
        assert!(b.above_floor(&volume, 0.01));
    }
}
