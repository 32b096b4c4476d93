pub mod memory;

use std::path::PathBuf;

use anyhow::Result;
use glam::{Mat4, Quat, Vec3, Vec4};

use crate::config::ExportFormat;
use crate::math::bounds::AABB;

/// Handle to an object owned by the host scene. Valid until the object is
/// removed; the orchestration code never holds a handle across a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Mesh,
    Camera,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraProjection {
    Perspective,
    Orthographic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
}

/// The host's render configuration block. Mutated once per run before the
/// export loop, except for `filepath` which changes per direction.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub resolution_x: u32,
    pub resolution_y: u32,
    pub resolution_percentage: u32,
    pub fps: u32,
    pub file_format: ExportFormat,
    pub color_mode: ColorMode,
    pub color_depth: u8,
    pub quality: u8,
    pub film_transparent: bool,
    /// Output path prefix; the host appends frame numbers and the extension.
    pub filepath: PathBuf,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolution_x: 1920,
            resolution_y: 1080,
            resolution_percentage: 100,
            fps: 24,
            file_format: ExportFormat::Png,
            color_mode: ColorMode::Rgba,
            color_depth: 8,
            quality: 90,
            film_transparent: false,
            filepath: PathBuf::new(),
        }
    }
}

/// The world's background shader inputs, when the scene has one.
#[derive(Debug, Clone, Copy)]
pub struct WorldBackground {
    pub color: Vec4,
    pub strength: f32,
}

/// Everything the export pipeline needs from the host 3D application.
///
/// The host owns scene representation, geometry, rendering and encoding; this
/// trait only parameterizes and invokes them. Accessors taking an [`ObjectId`]
/// require a live handle.
pub trait SceneHost {
    fn objects(&self) -> Vec<ObjectId>;
    fn find_object(&self, name: &str) -> Option<ObjectId>;
    fn object_name(&self, id: ObjectId) -> String;
    fn object_kind(&self, id: ObjectId) -> ObjectKind;
    fn remove_object(&mut self, id: ObjectId);

    fn add_camera(&mut self, name: &str, location: Vec3) -> ObjectId;
    fn add_sun_light(&mut self, name: &str, location: Vec3) -> ObjectId;

    fn location(&self, id: ObjectId) -> Vec3;
    fn set_location(&mut self, id: ObjectId, location: Vec3);
    fn rotation(&self, id: ObjectId) -> Quat;
    fn set_rotation(&mut self, id: ObjectId, rotation: Quat);
    fn world_matrix(&self, id: ObjectId) -> Mat4;
    /// Local-space bounding box of a mesh object, `None` for non-meshes.
    fn local_bounds(&self, id: ObjectId) -> Option<AABB>;

    fn set_camera_projection(&mut self, id: ObjectId, projection: CameraProjection);
    fn ortho_scale(&self, id: ObjectId) -> f32;
    fn set_ortho_scale(&mut self, id: ObjectId, scale: f32);
    fn set_active_camera(&mut self, id: ObjectId);
    fn set_light_energy(&mut self, id: ObjectId, energy: f32);

    fn render_settings(&self) -> &RenderSettings;
    fn render_settings_mut(&mut self) -> &mut RenderSettings;
    fn world_background_mut(&mut self) -> Option<&mut WorldBackground>;

    fn frame_range(&self) -> (i32, i32);
    fn set_frame_range(&mut self, start: i32, end: i32);
    fn set_current_frame(&mut self, frame: i32);

    /// Render every frame of the current range to numbered files under the
    /// current filepath prefix. Blocks until done; returns the frame count.
    fn render_animation(&mut self) -> Result<u32>;
    /// Render the current frame to a single still image.
    fn render_still(&mut self) -> Result<()>;
}
