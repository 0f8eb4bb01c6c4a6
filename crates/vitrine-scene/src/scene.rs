#![forbid(unsafe_op_in_unsafe_fn)]

use glam::Vec3;

use crate::ray::Ray;

/// Stable handle to a collider in a `Scene`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColliderId(u32);

#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Sphere { center: Vec3, radius: f32 },
    Aabb { min: Vec3, max: Vec3 },
}

#[derive(Clone, Debug)]
pub struct Collider {
    pub id: ColliderId,
    pub name: String,
    pub shape: Shape,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub collider: ColliderId,
    pub t: f32,
}

/// Flat collider set with a nearest-hit ray query. That is all the
/// geometry the click behavior needs; there is no broadphase.
#[derive(Default)]
pub struct Scene {
    colliders: Vec<Collider>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: impl Into<String>, shape: Shape) -> ColliderId {
        let id = ColliderId(self.next_id);
        self.next_id += 1;
        self.colliders.push(Collider {
            id,
            name: name.into(),
            shape,
        });
        id
    }

    pub fn find(&self, name: &str) -> Option<ColliderId> {
        self.colliders.iter().find(|c| c.name == name).map(|c| c.id)
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// First surface along the ray, by distance.
    pub fn raycast(&self, ray: &Ray) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        for c in &self.colliders {
            let t = match c.shape {
                Shape::Sphere { center, radius } => ray.intersect_sphere(center, radius),
                Shape::Aabb { min, max } => ray.intersect_aabb(min, max),
            };
            if let Some(t) = t {
                if nearest.map_or(true, |h| t < h.t) {
                    nearest = Some(Hit { collider: c.id, t });
                }
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raycast_returns_nearest_of_overlapping_hits() {
        let mut scene = Scene::new();
        let far = scene.add(
            "far",
            Shape::Sphere {
                center: Vec3::new(0.0, 0.0, -10.0),
                radius: 1.0,
            },
        );
        let near = scene.add(
            "near",
            Shape::Aabb {
                min: Vec3::new(-1.0, -1.0, -5.0),
                max: Vec3::new(1.0, 1.0, -3.0),
            },
        );

        let hit = scene.raycast(&Ray::new(Vec3::ZERO, Vec3::NEG_Z)).unwrap();
        assert_eq!(hit.collider, near);
        assert_ne!(hit.collider, far);
        assert!((hit.t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn raycast_misses_everything() {
        let mut scene = Scene::new();
        scene.add(
            "orb",
            Shape::Sphere {
                center: Vec3::new(0.0, 0.0, -10.0),
                radius: 1.0,
            },
        );
        assert!(scene.raycast(&Ray::new(Vec3::ZERO, Vec3::Y)).is_none());
    }

    #[test]
    fn find_resolves_names() {
        let mut scene = Scene::new();
        let id = scene.add("placard", Shape::Sphere {
            center: Vec3::ZERO,
            radius: 1.0,
        });
        assert_eq!(scene.find("placard"), Some(id));
        assert_eq!(scene.find("missing"), None);
    }
}
