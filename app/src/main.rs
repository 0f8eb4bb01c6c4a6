mod click;
mod flycam;
mod opener;

use std::{cell::RefCell, rc::Rc};

use glam::Vec3;

use vitrine_camera::{CameraRig, Perspective};
use vitrine_core::{config::EngineConfig, Engine};
use vitrine_scene::{ClickTarget, Scene, Shape};

use crate::click::ClickOpenModule;
use crate::flycam::{FlyCamModule, SharedView};
use crate::opener::SystemUrlOpener;

/// A display case: a pedestal with an orb on it, and a placard in front.
/// The placard is the clickable collider the config points at by default.
fn build_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(
        "pedestal",
        Shape::Aabb {
            min: Vec3::new(-0.5, 0.0, -8.5),
            max: Vec3::new(0.5, 1.0, -7.5),
        },
    );
    scene.add(
        "orb",
        Shape::Sphere {
            center: Vec3::new(0.0, 1.4, -8.0),
            radius: 0.4,
        },
    );
    scene.add(
        "placard",
        Shape::Aabb {
            min: Vec3::new(-0.6, 0.9, -6.05),
            max: Vec3::new(0.6, 1.3, -5.95),
        },
    );
    scene
}

fn main() -> anyhow::Result<()> {
    vitrine_core::logsys::init();

    let cfg = EngineConfig::load_or_default("vitrine.toml")?;

    let scene = build_scene();
    let target = scene.find(&cfg.click.target).map(|collider| ClickTarget {
        collider,
        url: cfg.click.url.clone(),
    });
    if target.is_none() {
        log::error!(
            "config names click target '{}' but the scene has no such collider",
            cfg.click.target
        );
    }

    let view = Rc::new(RefCell::new(SharedView {
        rig: CameraRig::new(Vec3::new(0.0, 1.2, 0.0), glam::Quat::IDENTITY),
        proj: Perspective::default(),
    }));

    let camera_cfg = cfg.camera.clone();
    let mut engine = Engine::new(cfg);
    engine.add_module(FlyCamModule::new(view.clone(), &camera_cfg));
    engine.add_module(ClickOpenModule::new(
        view,
        scene,
        target,
        Box::new(SystemUrlOpener),
    ));

    engine.run()?;
    Ok(())
}
