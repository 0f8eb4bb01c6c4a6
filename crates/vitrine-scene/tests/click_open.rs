use glam::{Vec2, Vec3};
use vitrine_camera::{CameraRig, Perspective};
use vitrine_scene::{ClickOpenHandler, ClickTarget, Scene, Shape, UrlOpener};

#[derive(Default)]
struct RecordingOpener {
    calls: Vec<String>,
    fail: bool,
}

impl UrlOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("no browser available");
        }
        self.calls.push(url.to_string());
        Ok(())
    }
}

fn demo_scene() -> (Scene, ClickTarget) {
    let mut scene = Scene::new();
    scene.add(
        "pedestal",
        Shape::Aabb {
            min: Vec3::new(2.0, -1.0, -8.0),
            max: Vec3::new(4.0, 1.0, -6.0),
        },
    );
    let placard = scene.add(
        "placard",
        Shape::Aabb {
            min: Vec3::new(-1.0, -0.5, -5.5),
            max: Vec3::new(1.0, 0.5, -4.5),
        },
    );
    (
        scene,
        ClickTarget {
            collider: placard,
            url: "https://www.example.com".to_string(),
        },
    )
}

#[test]
fn clicking_the_placard_through_the_cursor_opens_its_url() {
    let (scene, target) = demo_scene();
    let handler = ClickOpenHandler::new(Some(target));
    let rig = CameraRig::default();
    let proj = Perspective::default();
    let viewport = Vec2::new(1280.0, 720.0);
    let mut opener = RecordingOpener::default();

    // Cursor dead center, placard straight ahead.
    handler.frame(
        true,
        &rig,
        &proj,
        viewport * 0.5,
        viewport,
        &scene,
        &mut opener,
    );
    assert_eq!(opener.calls, vec!["https://www.example.com"]);
}

#[test]
fn clicking_empty_space_does_nothing() {
    let (scene, target) = demo_scene();
    let handler = ClickOpenHandler::new(Some(target));
    let rig = CameraRig::default();
    let proj = Perspective::default();
    let viewport = Vec2::new(1280.0, 720.0);
    let mut opener = RecordingOpener::default();

    // Cursor in the top-left corner, nothing up there.
    handler.frame(
        true,
        &rig,
        &proj,
        Vec2::new(5.0, 5.0),
        viewport,
        &scene,
        &mut opener,
    );
    assert!(opener.calls.is_empty());
}

#[test]
fn opener_failure_is_contained() {
    let (scene, target) = demo_scene();
    let handler = ClickOpenHandler::new(Some(target));
    let rig = CameraRig::default();
    let proj = Perspective::default();
    let viewport = Vec2::new(1280.0, 720.0);
    let mut opener = RecordingOpener {
        fail: true,
        ..RecordingOpener::default()
    };

    // Logged, not propagated; the handler keeps working.
    handler.frame(
        true,
        &rig,
        &proj,
        viewport * 0.5,
        viewport,
        &scene,
        &mut opener,
    );
    opener.fail = false;
    handler.frame(
        true,
        &rig,
        &proj,
        viewport * 0.5,
        viewport,
        &scene,
        &mut opener,
    );
    assert_eq!(opener.calls.len(), 1);
}
