use glam::{EulerRot, Quat, Vec3};
use log::warn;

use crate::config::{ExportConfig, ExportFormat};
use crate::scene::{CameraProjection, ColorMode, ObjectId, SceneHost};

pub const CAMERA_NAME: &str = "SpriteCamera";
pub const KEY_LIGHT_NAME: &str = "KeyLight";
pub const FILL_LIGHT_NAME: &str = "FillLight";
/// The host's default light, removed before our own lights go in.
pub const DEFAULT_LIGHT_NAME: &str = "Light";

/// Ensures the orthographic sprite camera exists and faces the origin from
/// the configured distance. Reuses an existing camera by name, so repeated
/// runs do not accumulate duplicates.
pub fn setup_camera(scene: &mut impl SceneHost, config: &ExportConfig) -> ObjectId {
    let location = Vec3::new(0.0, -config.camera_distance, 0.0);

    let camera = match scene.find_object(CAMERA_NAME) {
        Some(camera) => camera,
        None => scene.add_camera(CAMERA_NAME, location),
    };

    scene.set_camera_projection(camera, CameraProjection::Orthographic);
    // Placeholder scale; framing overwrites this per direction.
    scene.set_ortho_scale(camera, 2.0);

    scene.set_location(camera, location);
    scene.set_rotation(
        camera,
        Quat::from_rotation_x(config.camera_angle_degrees.to_radians()),
    );

    scene.set_active_camera(camera);
    camera
}

/// Replaces the host's default light with a fixed key + fill pair. Not
/// idempotent: rerunning adds another pair.
pub fn setup_lighting(scene: &mut impl SceneHost) {
    if let Some(default_light) = scene.find_object(DEFAULT_LIGHT_NAME) {
        scene.remove_object(default_light);
    }

    let key_light = scene.add_sun_light(KEY_LIGHT_NAME, Vec3::new(2.0, -2.0, 3.0));
    scene.set_light_energy(key_light, 3.0);
    scene.set_rotation(key_light, Quat::from_euler(EulerRot::XYZ, 0.785, 0.785, 0.0));

    let fill_light = scene.add_sun_light(FILL_LIGHT_NAME, Vec3::new(-2.0, -2.0, 2.0));
    scene.set_light_energy(fill_light, 1.5);
    scene.set_rotation(
        fill_light,
        Quat::from_euler(EulerRot::XYZ, 0.785, -0.785, 0.0),
    );
}

/// Writes the sprite resolution, frame rate and format block into the host's
/// render settings. PNG gets 16-bit RGBA with a transparent film and a zeroed
/// world background; JPEG gets 8-bit RGB at quality 95.
pub fn setup_render_settings(scene: &mut impl SceneHost, config: &ExportConfig) {
    let settings = scene.render_settings_mut();
    settings.resolution_x = config.sprite_size;
    settings.resolution_y = config.sprite_size;
    settings.resolution_percentage = 100;
    settings.fps = config.frame_rate;
    settings.file_format = config.format;

    match config.format {
        ExportFormat::Png => {
            settings.color_mode = ColorMode::Rgba;
            settings.color_depth = 16;
            settings.film_transparent = true;
        }
        ExportFormat::Jpeg => {
            settings.color_mode = ColorMode::Rgb;
            settings.color_depth = 8;
            settings.quality = 95;
        }
    }

    if config.format == ExportFormat::Png {
        match scene.world_background_mut() {
            Some(background) => {
                background.color = config.background_color.truncate().extend(1.0);
                background.strength = 0.0;
            }
            None => warn!(
                "scene has no world background shader; sprites may render over an opaque backdrop"
            ),
        }
    }
}
