use solsim::simulation::constants::{AU, DAY, PLANETS, SCALE_MIN_PX_PER_AU, ZOOM_MAX, ZOOM_MIN};
use solsim::view::hud::distance_lines;
use solsim::{
    calculate_scaled_sizes, world_to_screen, BodyFilter, ControlEvent, Flow, NVec2, Scenario,
    SimError, SimParams, Viewport,
};

// ==================================================================================
// Coordinate transform tests
// ==================================================================================

#[test]
fn origin_maps_to_screen_center_plus_offset() {
    assert_eq!(world_to_screen(0.0, 0.0, 1.0, 0.0, 0.0, 800.0, 600.0), (400.0, 300.0));
    assert_eq!(world_to_screen(0.0, 0.0, 1.0, 15.0, -5.0, 800.0, 600.0), (415.0, 295.0));
}

#[test]
fn world_to_screen_is_linear_and_repeatable() {
    let scale = 100.0 / AU;
    let (w, h) = (935.0, 725.0);
    let p = (-1.3 * AU, 0.4 * AU);

    let first = world_to_screen(p.0, p.1, scale, 10.0, 20.0, w, h);
    let second = world_to_screen(p.0, p.1, scale, 10.0, 20.0, w, h);
    assert_eq!(first, second);

    // doubling the world offset from center doubles the screen offset from center
    let one = world_to_screen(AU, 0.0, scale, 0.0, 0.0, w, h);
    let two = world_to_screen(2.0 * AU, 0.0, scale, 0.0, 0.0, w, h);
    assert!(((two.0 - w / 2.0) - 2.0 * (one.0 - w / 2.0)).abs() < 1e-9);
    assert!((one.0 - (w / 2.0 + 100.0)).abs() < 1e-9);
}

#[test]
fn orbit_line_needs_three_points_and_enabled_trail() {
    let mut scenario = Scenario::solar_system().unwrap();
    let engine = &mut scenario.engine;
    let params = engine.params.clone();

    for frame in 1..=3 {
        engine.advance_frame().unwrap();
        let view = Viewport::new(&params, 935.0, 725.0);
        let earth = engine.system.get("Earth").unwrap();
        assert_eq!(view.orbit_line(earth).is_some(), frame >= 3, "frame {frame}");
        assert!(view.orbit_line(engine.system.sun().unwrap()).is_none());
    }

    engine.apply_controls([ControlEvent::ToggleTrail(2)]);
    let view = Viewport::new(&params, 935.0, 725.0);
    assert!(view.orbit_line(engine.system.get("Earth").unwrap()).is_none());
    assert!(view.orbit_line(engine.system.get("Venus").unwrap()).is_some());
}

#[test]
fn trail_is_reprojected_when_scale_changes() {
    let mut scenario = Scenario::solar_system().unwrap();
    for _ in 0..5 {
        scenario.engine.advance_frame().unwrap();
    }
    let engine = &scenario.engine;
    let earth = engine.system.get("Earth").unwrap();

    let near = Viewport::new(&engine.params, 935.0, 725.0).project_trail(&earth.trail);
    let zoomed = SimParams {
        scale: engine.params.scale * 2.0,
        ..engine.params.clone()
    };
    let far = Viewport::new(&zoomed, 935.0, 725.0).project_trail(&earth.trail);

    assert_eq!(near.len(), far.len());
    for (a, b) in near.iter().zip(far.iter()) {
        assert!(((b.0 - 467.5) - 2.0 * (a.0 - 467.5)).abs() < 1e-6);
    }
}

// ==================================================================================
// Scaling engine tests
// ==================================================================================

#[test]
fn unit_zoom_returns_base_table() {
    let sizes = calculate_scaled_sizes(1.0);
    assert_eq!(sizes.len(), PLANETS.len());
    for p in PLANETS.iter() {
        assert_eq!(sizes.get(p.name).unwrap(), p.base_px);
    }
}

#[test]
fn double_zoom_doubles_every_size() {
    let one = calculate_scaled_sizes(1.0);
    let two = calculate_scaled_sizes(2.0);
    for (name, r) in one.iter() {
        assert_eq!(two.get(name).unwrap(), 2.0 * r, "{name}");
    }
}

#[test]
fn unregistered_name_fails() {
    let sizes = calculate_scaled_sizes(1.0);
    assert_eq!(
        sizes.get("Pluto").unwrap_err(),
        SimError::UnregisteredBody { name: "Pluto".into() }
    );
    assert!(sizes.get("Sun").is_err(), "the sun is not rescaled");
}

// ==================================================================================
// Control tests
// ==================================================================================

#[test]
fn zoom_factor_stays_clamped() {
    let mut scenario = Scenario::solar_system().unwrap();
    let engine = &mut scenario.engine;

    for _ in 0..100 {
        engine.apply_controls([ControlEvent::ZoomIn]);
        assert!(engine.params.zoom <= ZOOM_MAX);
    }
    assert_eq!(engine.params.zoom, ZOOM_MAX);

    for _ in 0..200 {
        engine.apply_controls([ControlEvent::ZoomOut]);
        assert!(engine.params.zoom >= ZOOM_MIN);
        assert!(engine.params.scale > 0.0, "scale must never flip sign");
    }
    assert_eq!(engine.params.zoom, ZOOM_MIN);
    assert!((engine.params.scale_px_per_au() - SCALE_MIN_PX_PER_AU).abs() < 1e-9);
}

#[test]
fn zoom_rescales_display_radii() {
    let mut scenario = Scenario::solar_system().unwrap();
    let engine = &mut scenario.engine;
    let sun_radius = engine.system.sun().unwrap().display_radius;

    engine.apply_controls([ControlEvent::ZoomIn, ControlEvent::ZoomIn]);
    engine.advance_frame().unwrap();

    let zoom = engine.params.zoom;
    assert!((zoom - 1.1).abs() < 1e-12);
    assert_eq!(engine.sizes.zoom(), zoom, "size table follows the zoom");
    for p in PLANETS.iter() {
        let b = engine.system.get(p.name).unwrap();
        assert_eq!(b.display_radius, p.base_px * zoom, "{}", p.name);
    }
    assert_eq!(engine.system.sun().unwrap().display_radius, sun_radius);
}

#[test]
fn timestep_steps_by_one_day_without_bounds() {
    let mut params = SimParams::default();
    assert_eq!(params.timestep, DAY);

    params.speed_up();
    assert_eq!(params.timestep, 2.0 * DAY);

    for _ in 0..3 {
        params.slow_down();
    }
    assert_eq!(params.timestep, -DAY, "negative timesteps are allowed");
}

#[test]
fn pan_moves_offset_in_steps() {
    let mut scenario = Scenario::solar_system().unwrap();
    let engine = &mut scenario.engine;

    engine.apply_controls([ControlEvent::Pan { dx: 1, dy: 0 }, ControlEvent::Pan { dx: 0, dy: -1 }]);
    assert_eq!(engine.params.offset, NVec2::new(5.0, -5.0));

    let cmd = engine.draw_commands(935.0, 725.0);
    let sun = cmd.iter().find(|c| c.id == 0).unwrap();
    assert_eq!(sun.center, (467.5 + 5.0, 362.5 - 5.0));
}

#[test]
fn trail_toggles() {
    let mut scenario = Scenario::solar_system().unwrap();
    let engine = &mut scenario.engine;

    engine.apply_controls([ControlEvent::ToggleAllTrails]);
    assert!(engine.system.planets().all(|b| !b.draw_trail));
    assert!(!engine.system.sun().unwrap().draw_trail);

    engine.apply_controls([ControlEvent::ToggleTrail(0), ControlEvent::ToggleTrail(99)]);
    let on: Vec<&str> = engine
        .system
        .planets()
        .filter(|b| b.draw_trail)
        .map(|b| b.name.as_str())
        .collect();
    assert_eq!(on, vec!["Mercury"]);
}

#[test]
fn filter_hides_planets_but_keeps_the_sun_and_physics() {
    let mut scenario = Scenario::solar_system().unwrap();
    let engine = &mut scenario.engine;

    engine.apply_controls([ControlEvent::Show(BodyFilter::Inner)]);
    engine.advance_frame().unwrap();

    let drawn = engine.draw_commands(935.0, 725.0);
    assert_eq!(drawn.len(), 5);
    assert!(drawn.iter().any(|c| c.id == engine.system.sun().unwrap().id));

    // outer planets still integrate
    assert_eq!(engine.system.get("Neptune").unwrap().trail.len(), 1);

    let lines = distance_lines(&engine.system, engine.filter);
    assert_eq!(lines.len(), 4);

    engine.apply_controls([ControlEvent::Show(BodyFilter::Outer)]);
    assert_eq!(engine.draw_commands(935.0, 725.0).len(), 5);
}

#[test]
fn quit_event_ends_the_session() {
    let mut scenario = Scenario::solar_system().unwrap();
    assert_eq!(scenario.engine.apply_controls([ControlEvent::SpeedUp]), Flow::Continue);
    assert_eq!(scenario.engine.apply_controls([ControlEvent::Quit]), Flow::Quit);
}

#[test]
fn hud_reports_distance_in_km() {
    let mut scenario = Scenario::solar_system().unwrap();
    scenario.engine.advance_frame().unwrap();

    let lines = distance_lines(&scenario.engine.system, BodyFilter::All);
    assert_eq!(lines.len(), 8);
    let earth = lines.iter().find(|l| l.text.starts_with("Earth")).unwrap();
    assert_eq!(earth.text, "Earth: 149600000.0 km");
}
