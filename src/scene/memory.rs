use std::path::PathBuf;

use anyhow::Result;
use glam::{Mat4, Quat, Vec3, Vec4};

use crate::math::bounds::AABB;
use crate::scene::{
    CameraProjection, ObjectId, ObjectKind, RenderSettings, SceneHost, WorldBackground,
};

/// What the host was asked to render, recorded instead of rasterized.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderInvocation {
    Animation {
        start: i32,
        end: i32,
        filepath: PathBuf,
    },
    Still {
        frame: i32,
        filepath: PathBuf,
    },
}

#[derive(Debug)]
struct MemoryObject {
    name: String,
    kind: ObjectKind,
    location: Vec3,
    rotation: Quat,
    bounds: Option<AABB>,
    projection: CameraProjection,
    ortho_scale: f32,
    energy: f32,
}

impl MemoryObject {
    fn new(name: &str, kind: ObjectKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            bounds: None,
            projection: CameraProjection::Perspective,
            ortho_scale: 1.0,
            energy: 1.0,
        }
    }
}

/// In-memory [`SceneHost`]: holds the same state a real host scene would and
/// records render invocations instead of producing images. Drives the dry-run
/// binary and every test.
pub struct MemoryScene {
    objects: Vec<Option<MemoryObject>>,
    settings: RenderSettings,
    background: Option<WorldBackground>,
    active_camera: Option<ObjectId>,
    frame_start: i32,
    frame_end: i32,
    current_frame: i32,
    pub renders: Vec<RenderInvocation>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            settings: RenderSettings::default(),
            background: Some(WorldBackground {
                color: Vec4::new(0.05, 0.05, 0.05, 1.0),
                strength: 1.0,
            }),
            active_camera: None,
            frame_start: 1,
            frame_end: 250,
            current_frame: 1,
            renders: Vec::new(),
        }
    }

    /// A fresh scene the way a host application opens one: a default light
    /// named "Light" and a single imported mesh with the given bounds.
    pub fn with_mesh(name: &str, bounds: AABB) -> Self {
        let mut scene = Self::new();
        let light = scene.alloc(MemoryObject::new("Light", ObjectKind::Light));
        scene.object_mut(light).location = Vec3::new(4.0, 1.0, 6.0);
        scene.add_mesh(name, bounds);
        scene
    }

    pub fn add_mesh(&mut self, name: &str, bounds: AABB) -> ObjectId {
        let mut object = MemoryObject::new(name, ObjectKind::Mesh);
        object.bounds = Some(bounds);
        self.alloc(object)
    }

    #[allow(dead_code)]
    pub fn without_background(mut self) -> Self {
        self.background = None;
        self
    }

    #[allow(dead_code)]
    pub fn active_camera(&self) -> Option<ObjectId> {
        self.active_camera
    }

    #[allow(dead_code)]
    pub fn world_background(&self) -> Option<&WorldBackground> {
        self.background.as_ref()
    }

    #[allow(dead_code)]
    pub fn current_frame(&self) -> i32 {
        self.current_frame
    }

    #[allow(dead_code)]
    pub fn camera_projection(&self, id: ObjectId) -> CameraProjection {
        self.object(id).projection
    }

    #[allow(dead_code)]
    pub fn light_energy(&self, id: ObjectId) -> f32 {
        self.object(id).energy
    }

    fn alloc(&mut self, object: MemoryObject) -> ObjectId {
        self.objects.push(Some(object));
        ObjectId(self.objects.len() - 1)
    }

    fn object(&self, id: ObjectId) -> &MemoryObject {
        self.objects[id.0].as_ref().expect("stale object handle")
    }

    fn object_mut(&mut self, id: ObjectId) -> &mut MemoryObject {
        self.objects[id.0].as_mut().expect("stale object handle")
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHost for MemoryScene {
    fn objects(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|_| ObjectId(index)))
            .collect()
    }

    fn find_object(&self, name: &str) -> Option<ObjectId> {
        self.objects()
            .into_iter()
            .find(|&id| self.object(id).name == name)
    }

    fn object_name(&self, id: ObjectId) -> String {
        self.object(id).name.clone()
    }

    fn object_kind(&self, id: ObjectId) -> ObjectKind {
        self.object(id).kind
    }

    fn remove_object(&mut self, id: ObjectId) {
        self.objects[id.0] = None;
        if self.active_camera == Some(id) {
            self.active_camera = None;
        }
    }

    fn add_camera(&mut self, name: &str, location: Vec3) -> ObjectId {
        let mut object = MemoryObject::new(name, ObjectKind::Camera);
        object.location = location;
        self.alloc(object)
    }

    fn add_sun_light(&mut self, name: &str, location: Vec3) -> ObjectId {
        let mut object = MemoryObject::new(name, ObjectKind::Light);
        object.location = location;
        self.alloc(object)
    }

    fn location(&self, id: ObjectId) -> Vec3 {
        self.object(id).location
    }

    fn set_location(&mut self, id: ObjectId, location: Vec3) {
        self.object_mut(id).location = location;
    }

    fn rotation(&self, id: ObjectId) -> Quat {
        self.object(id).rotation
    }

    fn set_rotation(&mut self, id: ObjectId, rotation: Quat) {
        self.object_mut(id).rotation = rotation;
    }

    fn world_matrix(&self, id: ObjectId) -> Mat4 {
        let object = self.object(id);
        Mat4::from_rotation_translation(object.rotation, object.location)
    }

    fn local_bounds(&self, id: ObjectId) -> Option<AABB> {
        self.object(id).bounds
    }

    fn set_camera_projection(&mut self, id: ObjectId, projection: CameraProjection) {
        self.object_mut(id).projection = projection;
    }

    fn ortho_scale(&self, id: ObjectId) -> f32 {
        self.object(id).ortho_scale
    }

    fn set_ortho_scale(&mut self, id: ObjectId, scale: f32) {
        self.object_mut(id).ortho_scale = scale;
    }

    fn set_active_camera(&mut self, id: ObjectId) {
        self.active_camera = Some(id);
    }

    fn set_light_energy(&mut self, id: ObjectId, energy: f32) {
        self.object_mut(id).energy = energy;
    }

    fn render_settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn render_settings_mut(&mut self) -> &mut RenderSettings {
        &mut self.settings
    }

    fn world_background_mut(&mut self) -> Option<&mut WorldBackground> {
        self.background.as_mut()
    }

    fn frame_range(&self) -> (i32, i32) {
        (self.frame_start, self.frame_end)
    }

    fn set_frame_range(&mut self, start: i32, end: i32) {
        self.frame_start = start;
        self.frame_end = end;
    }

    fn set_current_frame(&mut self, frame: i32) {
        self.current_frame = frame;
    }

    fn render_animation(&mut self) -> Result<u32> {
        let frames = (self.frame_end - self.frame_start + 1).max(0) as u32;
        self.renders.push(RenderInvocation::Animation {
            start: self.frame_start,
            end: self.frame_end,
            filepath: self.settings.filepath.clone(),
        });
        Ok(frames)
    }

    fn render_still(&mut self) -> Result<()> {
        self.renders.push(RenderInvocation::Still {
            frame: self.current_frame,
            filepath: self.settings.filepath.clone(),
        });
        Ok(())
    }
}
