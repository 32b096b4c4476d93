use std::fs;

use anyhow::{bail, Context, Result};
use glam::Quat;
use itertools::Itertools;
use log::{error, info};

use crate::config::{Direction, ExportConfig};
use crate::framing::{self, resolve_model};
use crate::rig;
use crate::scene::SceneHost;

/// Runs the whole export: rig the scene once, then render every direction.
/// A direction that fails is logged and skipped; the run only errors up front
/// (no model, unwritable output folder) or if any direction failed.
pub fn run(scene: &mut impl SceneHost, config: &ExportConfig) -> Result<()> {
    fs::create_dir_all(&config.output_folder).with_context(|| {
        format!(
            "failed to create output folder {}",
            config.output_folder.display()
        )
    })?;
    info!("output folder: {}", config.output_folder.display());

    info!("setting up camera, lighting and render settings");
    rig::setup_camera(scene, config);
    rig::setup_lighting(scene);
    rig::setup_render_settings(scene, config);

    let model = resolve_model(scene, config.model_name.as_deref())?;
    info!("found model: {}", scene.object_name(model));

    info!(
        "exporting {} directions: {}",
        config.directions.len(),
        config.directions.iter().map(|d| d.name.as_str()).join(", ")
    );

    let mut failed = 0;
    for direction in &config.directions {
        if let Err(err) = export_direction(scene, config, direction) {
            error!("direction '{}' failed: {err:#}", direction.name);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} directions failed", config.directions.len());
    }

    info!(
        "export complete; sprites saved to {}",
        config.output_folder.display()
    );
    Ok(())
}

/// Renders one direction: yaw the model, reframe the camera, point the host's
/// output path at `<output>/<direction>/<model>_<direction>_`, render, and
/// put the model's rotation back.
pub fn export_direction(
    scene: &mut impl SceneHost,
    config: &ExportConfig,
    direction: &Direction,
) -> Result<()> {
    let model = resolve_model(scene, config.model_name.as_deref())?;
    let model_name = scene.object_name(model);

    let original_rotation = scene.rotation(model);
    scene.set_rotation(
        model,
        Quat::from_rotation_y(direction.rotation_y_degrees.to_radians()),
    );

    framing::frame_model(scene, model);

    let direction_folder = config.output_folder.join(&direction.name);
    fs::create_dir_all(&direction_folder).with_context(|| {
        format!(
            "failed to create direction folder {}",
            direction_folder.display()
        )
    })?;

    scene.render_settings_mut().filepath =
        direction_folder.join(format!("{model_name}_{}_", direction.name));

    let start_frame = config.animation_start_frame;
    let end_frame = config
        .animation_end_frame
        .unwrap_or_else(|| scene.frame_range().1);

    if config.export_animations && end_frame > start_frame {
        info!(
            "exporting animation: {} (frames {start_frame}-{end_frame})...",
            direction.name
        );
        scene.set_frame_range(start_frame, end_frame);
        let frames = scene.render_animation()?;
        info!("exported {frames} frames to {}", direction_folder.display());
    } else if config.export_static {
        info!("exporting static sprite: {}...", direction.name);
        scene.set_current_frame(start_frame);
        scene.render_still()?;
        info!("exported static sprite to {}", direction_folder.display());
    }

    // On render failure above the rotation stays modified; the host scene is
    // treated as disposable in that case.
    scene.set_rotation(model, original_rotation);

    Ok(())
}
