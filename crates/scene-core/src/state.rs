//! Scene-side state types shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The timeline writes
//! them and the renderer reads them once per frame to build camera and model
//! matrices.

use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Aim the camera at `target` without moving it.
    #[inline]
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update the aspect ratio from a pixel size. Zero heights are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: CAMERA_DEFAULT_EYE,
            target: BOX_INITIAL_POSITION,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

/// Position and XYZ Euler rotation (radians) of one scene object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_rotation_translation(rotation, self.position)
    }
}

/// Everything the timeline is allowed to touch.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneState {
    pub cube: Transform,
    pub torus: Transform,
    pub camera: Camera,
    /// Extra x/y rotation of the box accumulated by the idle spin (radians).
    pub idle_spin: f32,
}

impl SceneState {
    /// Put the camera back at its default eye, aimed at the box.
    pub fn reset_camera(&mut self) {
        self.camera.eye = CAMERA_DEFAULT_EYE;
        self.camera.look_at(self.cube.position);
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            cube: Transform {
                position: BOX_INITIAL_POSITION,
                rotation: BOX_INITIAL_ROTATION,
            },
            torus: Transform {
                position: TORUS_INITIAL_POSITION,
                rotation: Vec3::ZERO,
            },
            camera: Camera::default(),
            idle_spin: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_camera_aims_at_cube() {
        let mut scene = SceneState::default();
        scene.cube.position = Vec3::new(1.0, 2.0, 3.0);
        scene.camera.eye = Vec3::new(9.0, 9.0, 9.0);
        scene.reset_camera();
        assert_eq!(scene.camera.eye, CAMERA_DEFAULT_EYE);
        assert_eq!(scene.camera.target, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn set_viewport_ignores_degenerate_sizes() {
        let mut cam = Camera::default();
        cam.set_viewport(1600, 800);
        assert_eq!(cam.aspect, 2.0);
        cam.set_viewport(0, 800);
        cam.set_viewport(1600, 0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn model_matrix_places_translation_last() {
        let t = Transform {
            position: Vec3::new(0.0, 0.0, -15.0),
            rotation: Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
        };
        let p = t.model_matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(0.0, 1.0, -15.0)).length() < 1e-5);
    }
}
