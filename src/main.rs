use anyhow::Result;
use glam::Vec3;

mod config;
mod exporter;
mod framing;
mod math;
mod rig;
mod scene;

use config::ExportConfig;
use math::bounds::AABB;
use scene::memory::MemoryScene;
use scene::SceneHost;

/// Dry run against the in-memory scene host: rigs a demo scene, walks every
/// direction and logs the renders a real host would perform. Plugging in an
/// actual 3D application means implementing [`scene::SceneHost`] for it and
/// handing it to [`exporter::run`] instead.
fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = ExportConfig::default();

    let mut scene = MemoryScene::with_mesh(
        "Player",
        AABB::new(Vec3::new(-0.5, 0.0, -0.5), Vec3::new(0.5, 1.8, 0.5)),
    );
    scene.set_frame_range(1, 10);

    exporter::run(&mut scene, &config)?;

    for render in &scene.renders {
        log::debug!("host render call: {render:?}");
    }

    Ok(())
}
