//! Static scenery obstacles and their bounding volumes
//!
//! Each placed scenery item carries an oriented bounding box derived once
//! from its mesh-local AABB at world-load time. Collision checks re-derive
//! the world-space box from the item's current transform every time, so a
//! variant that animates its scenery keeps working.

use glam::{Affine3A, Mat3, Vec3};
use serde::{Deserialize, Serialize};

use crate::config::ProximityTable;

/// An oriented bounding box: rotated-box approximation of a mesh extent
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obb {
    pub center: Vec3,
    pub half_size: Vec3,
    pub orientation: Mat3,
}

impl Obb {
    /// Box around a mesh-local axis-aligned bounding box
    pub fn from_aabb(min: Vec3, max: Vec3) -> Self {
        Self {
            center: (min + max) * 0.5,
            half_size: (max - min) * 0.5,
            orientation: Mat3::IDENTITY,
        }
    }

    /// World-space box under an affine transform.
    ///
    /// Scale is split out of the matrix columns and folded into the half
    /// extents; the remaining rotation composes with the box orientation.
    pub fn transformed(&self, m: &Affine3A) -> Self {
        let rot_scale = Mat3::from(m.matrix3);
        let scale = Vec3::new(
            rot_scale.x_axis.length(),
            rot_scale.y_axis.length(),
            rot_scale.z_axis.length(),
        );
        let rotation = Mat3::from_cols(
            rot_scale.x_axis / scale.x,
            rot_scale.y_axis / scale.y,
            rot_scale.z_axis / scale.z,
        );
        Self {
            center: m.transform_point3(self.center),
            half_size: self.half_size * scale,
            orientation: rotation * self.orientation,
        }
    }
}

/// Scenery category, derived from the artist-authored object name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleCategory {
    Default,
    Egg,
    Stone,
    Palm,
}

impl ObstacleCategory {
    pub fn from_name(name: &str) -> Self {
        if name.contains("Egg") {
            Self::Egg
        } else if name.contains("Stone") {
            Self::Stone
        } else if name.contains("Palm") {
            Self::Palm
        } else {
            Self::Default
        }
    }

    pub fn threshold(self, table: &ProximityTable) -> f32 {
        match self {
            Self::Default => table.default,
            Self::Egg => table.egg,
            Self::Stone => table.stone,
            Self::Palm => table.palm,
        }
    }

    /// Art-driven footprint correction: palm canopies and stone meshes have
    /// bounding boxes far wider than their trunks/bases.
    fn half_size_override(self) -> Option<Vec3> {
        match self {
            Self::Palm => Some(Vec3::new(1.0, 1.0, 1.0)),
            Self::Stone => Some(Vec3::new(0.1, 1.0, 0.1)),
            _ => None,
        }
    }
}

/// Source data for one placed scenery mesh, as the world loader hands it over
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneryItem {
    pub name: String,
    /// Mesh-local bounding box
    pub aabb_min: Vec3,
    pub aabb_max: Vec3,
    /// World transform of the placed mesh
    pub transform: Affine3A,
}

/// One collidable scenery item with its cached category and threshold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub name: String,
    pub category: ObstacleCategory,
    /// Contact distance, resolved from the category table at build time
    pub threshold: f32,
    local_obb: Obb,
    /// May move in variants with animated scenery
    pub transform: Affine3A,
}

impl Obstacle {
    /// Current world-space bounding volume (re-derived, never cached)
    pub fn world_obb(&self) -> Obb {
        self.local_obb.transformed(&self.transform)
    }
}

/// All collidable scenery, built once at world-load time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleRegistry {
    obstacles: Vec<Obstacle>,
}

impl ObstacleRegistry {
    /// Categorize each item by name, apply footprint corrections, and cache
    /// its proximity threshold so per-check lookups never re-parse names.
    pub fn build(items: Vec<SceneryItem>, thresholds: &ProximityTable) -> Self {
        let obstacles = items
            .into_iter()
            .map(|item| {
                let category = ObstacleCategory::from_name(&item.name);
                let mut local_obb = Obb::from_aabb(item.aabb_min, item.aabb_max);
                if let Some(half) = category.half_size_override() {
                    local_obb.half_size = half;
                }
                Obstacle {
                    threshold: category.threshold(thresholds),
                    category,
                    name: item.name,
                    local_obb,
                    transform: item.transform,
                }
            })
            .collect();
        Self { obstacles }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn of_category(
        &self,
        category: ObstacleCategory,
    ) -> impl Iterator<Item = &Obstacle> {
        self.obstacles
            .iter()
            .filter(move |o| o.category == category)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, at: Vec3) -> SceneryItem {
        SceneryItem {
            name: name.to_string(),
            aabb_min: Vec3::splat(-0.5),
            aabb_max: Vec3::splat(0.5),
            transform: Affine3A::from_translation(at),
        }
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(ObstacleCategory::from_name("mEgg01"), ObstacleCategory::Egg);
        assert_eq!(ObstacleCategory::from_name("Stone_3"), ObstacleCategory::Stone);
        assert_eq!(ObstacleCategory::from_name("mPalmBig"), ObstacleCategory::Palm);
        assert_eq!(ObstacleCategory::from_name("Nest"), ObstacleCategory::Default);
    }

    #[test]
    fn test_obb_from_aabb() {
        let obb = Obb::from_aabb(Vec3::new(-1.0, 0.0, -2.0), Vec3::new(1.0, 2.0, 2.0));
        assert_eq!(obb.center, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(obb.half_size, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_world_obb_follows_transform() {
        let registry = ObstacleRegistry::build(
            vec![item("Nest", Vec3::new(3.0, 0.0, -1.0))],
            &ProximityTable::default(),
        );
        let obstacle = registry.iter().next().unwrap();
        let world = obstacle.world_obb();
        assert!((world.center - Vec3::new(3.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_obb_transform_applies_scale() {
        let obb = Obb::from_aabb(Vec3::splat(-1.0), Vec3::splat(1.0));
        let m = Affine3A::from_scale(Vec3::new(2.0, 1.0, 3.0));
        let world = obb.transformed(&m);
        assert!((world.half_size - Vec3::new(2.0, 1.0, 3.0)).length() < 1e-5);
        // Rotation part stays orthonormal after the scale split
        let det = world.orientation.determinant();
        assert!((det - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_build_caches_threshold_and_footprint() {
        let table = ProximityTable::default();
        let registry = ObstacleRegistry::build(
            vec![
                item("mPalm01", Vec3::ZERO),
                item("Stone02", Vec3::ZERO),
                item("Egg", Vec3::ZERO),
            ],
            &table,
        );
        let palm = registry.of_category(ObstacleCategory::Palm).next().unwrap();
        assert_eq!(palm.threshold, table.palm);
        assert_eq!(palm.world_obb().half_size, Vec3::new(1.0, 1.0, 1.0));

        let stone = registry.of_category(ObstacleCategory::Stone).next().unwrap();
        assert_eq!(stone.threshold, table.stone);
        assert_eq!(stone.world_obb().half_size, Vec3::new(0.1, 1.0, 0.1));

        let egg = registry.of_category(ObstacleCategory::Egg).next().unwrap();
        assert_eq!(egg.threshold, table.egg);
        // Eggs keep their mesh-derived box
        assert_eq!(egg.world_obb().half_size, Vec3::splat(0.5));
    }
}
