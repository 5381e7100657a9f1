use stress_scene::camera::{OrbitCamera, Viewport, FAR, FOV_Y_DEGREES, NEAR};

#[cfg(test)]
mod viewport_tests {
    use super::*;

    #[test]
    fn test_resize_sets_aspect_to_width_over_height() {
        for (w, h) in [(1920u32, 1080u32), (800, 600), (600, 800), (1, 1), (3000, 7)] {
            let mut camera = OrbitCamera::default();
            let mut viewport = Viewport::new(100, 100);

            viewport.resize(w, h, &mut camera);

            assert_eq!(camera.aspect, w as f32 / h as f32);
            assert_eq!((viewport.width, viewport.height), (w, h));
        }
    }

    #[test]
    fn test_zero_width_is_not_drawable() {
        let viewport = Viewport::new(0, 600);
        assert_eq!(viewport.aspect(), None);
        assert!(!viewport.is_drawable());
    }

    #[test]
    fn test_camera_lens_defaults() {
        let camera = OrbitCamera::new(1.5);
        assert_eq!(camera.fov_y, FOV_Y_DEGREES.to_radians());
        assert_eq!(camera.near, NEAR);
        assert_eq!(camera.far, FAR);
        assert_eq!(camera.aspect, 1.5);
    }

    #[test]
    fn test_projection_tracks_aspect() {
        let mut camera = OrbitCamera::new(1.0);
        let square = camera.projection();
        Viewport::new(1, 1).resize(2000, 1000, &mut camera);
        let wide = camera.projection();

        // x scale halves when the view gets twice as wide
        let ratio = square.x_axis.x / wide.x_axis.x;
        assert!((ratio - 2.0).abs() < 1e-5);
        assert_eq!(square.y_axis.y, wide.y_axis.y);
    }
}
