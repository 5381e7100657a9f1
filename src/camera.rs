use glam::{Mat4, Vec3};

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 2000.0;
pub const START_POSITION: Vec3 = Vec3::new(0.0, 50.0, 200.0);

/// Perspective camera that slowly sways around the origin while looking at it
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: START_POSITION,
            target: Vec3::ZERO,
            fov_y: FOV_Y_DEGREES.to_radians(),
            aspect,
            near: NEAR,
            far: FAR,
        }
    }

    /// Place the camera on its sway path at elapsed time `t` (seconds)
    pub fn orbit(&mut self, t: f32) {
        self.position.x = (t * 0.2).sin() * 50.0;
        self.position.z = 200.0 + (t * 0.1).cos() * 20.0;
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

/// Drawable surface size and the aspect ratio derived from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `width / height`, or `None` while the surface has no area
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }

    pub fn is_drawable(&self) -> bool {
        self.aspect().is_some()
    }

    /// Adopt new surface dimensions and update the camera's aspect.
    ///
    /// A zero-area size (minimized window) is recorded but leaves the camera
    /// aspect untouched.
    pub fn resize(&mut self, width: u32, height: u32, camera: &mut OrbitCamera) {
        self.width = width;
        self.height = height;
        if let Some(aspect) = self.aspect() {
            camera.aspect = aspect;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_at_zero() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0);
        assert_eq!(camera.position, Vec3::new(0.0, 50.0, 220.0));
    }

    #[test]
    fn test_view_looks_at_origin() {
        let camera = OrbitCamera::default();
        let origin_in_view = camera.view().transform_point3(Vec3::ZERO);
        // right-handed view space looks down -Z
        assert!(origin_in_view.x.abs() < 1e-3);
        assert!(origin_in_view.z < 0.0);
    }

    #[test]
    fn test_zero_height_keeps_aspect() {
        let mut camera = OrbitCamera::new(2.0);
        let mut viewport = Viewport::new(800, 400);
        viewport.resize(800, 0, &mut camera);
        assert_eq!(camera.aspect, 2.0);
        assert!(!viewport.is_drawable());
    }
}
