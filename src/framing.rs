use anyhow::{bail, Context, Result};
use itertools::Itertools;
use log::warn;

use crate::rig::{CAMERA_NAME, FILL_LIGHT_NAME, KEY_LIGHT_NAME};
use crate::scene::{ObjectId, ObjectKind, SceneHost};

/// Extra room around the model so it never touches the sprite edge.
const FRAME_PADDING: f32 = 1.1;

/// Resolves the mesh to export. A configured name must exist; without one the
/// scene must contain exactly one mesh that is not part of the sprite rig,
/// so enumeration order never decides which model gets exported.
pub fn resolve_model(scene: &impl SceneHost, model_name: Option<&str>) -> Result<ObjectId> {
    if let Some(name) = model_name {
        return scene
            .find_object(name)
            .with_context(|| format!("model '{name}' not found in scene"));
    }

    let rig_names = [CAMERA_NAME, KEY_LIGHT_NAME, FILL_LIGHT_NAME];
    let candidates: Vec<ObjectId> = scene
        .objects()
        .into_iter()
        .filter(|&id| scene.object_kind(id) == ObjectKind::Mesh)
        .filter(|&id| !rig_names.contains(&scene.object_name(id).as_str()))
        .collect();

    match candidates.as_slice() {
        [] => bail!("no mesh object found; import a model first"),
        [only] => Ok(*only),
        several => bail!(
            "scene has several candidate meshes ({}); set model_name to pick one",
            several.iter().map(|&id| scene.object_name(id)).join(", ")
        ),
    }
}

/// Fits the sprite camera to the model: world-space bounding box, largest
/// axis extent, 10% padding, written as the camera's ortho scale.
pub fn frame_model(scene: &mut impl SceneHost, model: ObjectId) {
    let Some(bounds) = scene.local_bounds(model) else {
        warn!(
            "'{}' has no bounds; leaving camera scale unchanged",
            scene.object_name(model)
        );
        return;
    };

    let world_bounds = bounds.transformed(&scene.world_matrix(model));
    let max_extent = world_bounds.size().max_element();

    let Some(camera) = scene.find_object(CAMERA_NAME) else {
        warn!("no sprite camera to frame; run camera setup first");
        return;
    };
    scene.set_ortho_scale(camera, max_extent * FRAME_PADDING);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportConfig;
    use crate::math::bounds::AABB;
    use crate::rig;
    use crate::scene::memory::MemoryScene;
    use glam::Vec3;

    fn rigged_scene_with_mesh(name: &str, bounds: AABB) -> (MemoryScene, ObjectId) {
        let mut scene = MemoryScene::new();
        let mesh = scene.add_mesh(name, bounds);
        rig::setup_camera(&mut scene, &ExportConfig::default());
        (scene, mesh)
    }

    #[test]
    fn unit_cube_frames_to_padded_scale() {
        let bounds = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let (mut scene, mesh) = rigged_scene_with_mesh("Cube", bounds);

        frame_model(&mut scene, mesh);

        let camera = scene.find_object(CAMERA_NAME).unwrap();
        assert!((scene.ortho_scale(camera) - 2.2).abs() < 1e-5);
    }

    #[test]
    fn largest_axis_extent_wins() {
        // Extents (2, 4, 1) on (x, y, z).
        let bounds = AABB::new(Vec3::new(-1.0, -2.0, -0.5), Vec3::new(1.0, 2.0, 0.5));
        let (mut scene, mesh) = rigged_scene_with_mesh("Tower", bounds);

        frame_model(&mut scene, mesh);

        let camera = scene.find_object(CAMERA_NAME).unwrap();
        assert!((scene.ortho_scale(camera) - 4.4).abs() < 1e-5);
    }

    #[test]
    fn framing_uses_world_space_bounds() {
        let bounds = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let (mut scene, mesh) = rigged_scene_with_mesh("Cube", bounds);
        // Translation moves the box but does not change its extents.
        scene.set_location(mesh, Vec3::new(10.0, 0.0, 0.0));

        frame_model(&mut scene, mesh);

        let camera = scene.find_object(CAMERA_NAME).unwrap();
        assert!((scene.ortho_scale(camera) - 2.2).abs() < 1e-5);
    }

    #[test]
    fn resolve_prefers_configured_name() {
        let mut scene = MemoryScene::new();
        scene.add_mesh("Rock", AABB::new(Vec3::ZERO, Vec3::ONE));
        let player = scene.add_mesh("Player", AABB::new(Vec3::ZERO, Vec3::ONE));

        assert_eq!(resolve_model(&scene, Some("Player")).unwrap(), player);
    }

    #[test]
    fn resolve_rejects_unknown_name() {
        let mut scene = MemoryScene::new();
        scene.add_mesh("Rock", AABB::new(Vec3::ZERO, Vec3::ONE));

        let err = resolve_model(&scene, Some("Player")).unwrap_err();
        assert!(err.to_string().contains("Player"));
    }

    #[test]
    fn resolve_skips_rig_objects() {
        let mut scene = MemoryScene::new();
        rig::setup_camera(&mut scene, &ExportConfig::default());
        rig::setup_lighting(&mut scene);
        let mesh = scene.add_mesh("Player", AABB::new(Vec3::ZERO, Vec3::ONE));

        assert_eq!(resolve_model(&scene, None).unwrap(), mesh);
    }

    #[test]
    fn resolve_fails_with_no_mesh() {
        let scene = MemoryScene::new();
        assert!(resolve_model(&scene, None).is_err());
    }

    #[test]
    fn resolve_fails_with_ambiguous_meshes() {
        let mut scene = MemoryScene::new();
        scene.add_mesh("Rock", AABB::new(Vec3::ZERO, Vec3::ONE));
        scene.add_mesh("Player", AABB::new(Vec3::ZERO, Vec3::ONE));

        let err = resolve_model(&scene, None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Rock") && message.contains("Player"));
    }
}
