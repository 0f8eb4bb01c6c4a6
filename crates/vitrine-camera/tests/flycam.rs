use glam::{Vec2, Vec3};
use vitrine_camera::{CamInput, CameraRig, FlyCamController};

const DT: f32 = 1.0 / 60.0;

#[test]
fn look_then_move_travels_along_new_forward() {
    let mut ctrl = FlyCamController::default();
    let mut rig = CameraRig::default();

    // Turn 90 degrees right: pointer right is negative yaw.
    let quarter_turn_px = std::f32::consts::FRAC_PI_2 / ctrl.look_sens;
    ctrl.apply(
        &mut rig,
        &CamInput {
            look_delta: Vec2::new(quarter_turn_px, 0.0),
            ..CamInput::default()
        },
        DT,
    );
    assert!((ctrl.yaw + std::f32::consts::FRAC_PI_2).abs() < 1e-4);

    for _ in 0..60 {
        ctrl.apply(
            &mut rig,
            &CamInput {
                move_axis: Vec3::Z,
                ..CamInput::default()
            },
            DT,
        );
    }

    // Forward is now world +X.
    assert!(rig.position.x > 0.1);
    assert!(rig.position.z.abs() < 0.01);
}

#[test]
fn held_forward_reaches_cruise_and_coasts_to_rest() {
    let mut ctrl = FlyCamController::default();
    let mut rig = CameraRig::default();

    for _ in 0..120 {
        ctrl.apply(
            &mut rig,
            &CamInput {
                move_axis: Vec3::Z,
                ..CamInput::default()
            },
            DT,
        );
    }
    let cruise = ctrl.velocity.length();
    assert!(cruise > 1.0);

    let mut frames_to_rest = 0u32;
    while ctrl.velocity.length() > 1e-3 {
        ctrl.apply(&mut rig, &CamInput::default(), DT);
        frames_to_rest += 1;
        assert!(frames_to_rest < 10_000, "velocity never decayed");
    }
    // Decay is exponential, so rest arrives in well under a minute.
    assert!(frames_to_rest < 600);
}
