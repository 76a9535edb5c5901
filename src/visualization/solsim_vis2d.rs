use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::input::mouse::MouseWheel;
use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy::window::{PrimaryWindow, WindowResolution};

use crate::simulation::constants::{COLOR_BACKGROUND, COLOR_TEXT, PHYSICS_HZ};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Rgb;
use crate::view::controls::{edge_pan, BodyFilter, ControlEvent, Flow};
use crate::view::hud::{distance_lines, timestep_line, DISTANCE_TITLE, NAVIGATION, TITLE, TOGGLES};

#[derive(Component)]
struct BodyIndex(pub usize);

/// HUD text that changes every frame
#[derive(Component)]
enum HudField {
    Fps,
    Timestep,
    Distance(usize), // body id
}

const FONT_SIZE: f32 = 16.0;
const MARGIN: f32 = 15.0;

const DIGIT_KEYS: [KeyCode; 8] = [
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
];

pub fn run_2d(scenario: Scenario) {
    let resolution = WindowResolution::new(scenario.width as f32, scenario.height as f32);

    App::new()
        .insert_resource(ClearColor(to_color(COLOR_BACKGROUND)))
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: TITLE.to_string(),
                resolution,
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .add_plugins(PhysicsPlugin)
        .add_systems(Startup, (setup_bodies_system, setup_hud_system))
        // input is applied before the next fixed step reads the parameters
        .add_systems(
            Update,
            (input_system, render_system, hud_system).chain(),
        )
        .run();
}

fn to_color(c: Rgb) -> Color {
    Color::srgb_u8(c.0, c.1, c.2)
}

/// Screen pixels (top-left origin, y down) -> 2D camera space (centered, y up)
fn to_canvas(p: (f64, f64), width: f64, height: f64) -> Vec2 {
    Vec2::new((p.0 - width / 2.0) as f32, (height / 2.0 - p.1) as f32)
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    info!(
        "starting 2D viewer with {} bodies, {:.1} px/AU, timestep {:.0} days",
        scenario.engine.system.bodies.len(),
        scenario.engine.params.scale_px_per_au(),
        scenario.engine.params.timestep_days()
    );

    commands.spawn(Camera2dBundle::default());

    // unit circle, scaled to the display radius every frame
    let circle = Mesh2dHandle(meshes.add(Circle::new(1.0)));

    for body in &scenario.engine.system.bodies {
        let z = if body.is_sun() { 0.0 } else { 1.0 };
        commands.spawn((
            MaterialMesh2dBundle {
                mesh: circle.clone(),
                material: materials.add(ColorMaterial::from(to_color(body.color))),
                transform: Transform::from_xyz(0.0, 0.0, z),
                ..Default::default()
            },
            BodyIndex(body.id),
        ));
    }
}

fn text_style(color: Rgb) -> TextStyle {
    TextStyle {
        font_size: FONT_SIZE,
        color: to_color(color),
        ..Default::default()
    }
}

fn absolute(left: Option<f32>, top: Option<f32>, right: Option<f32>, bottom: Option<f32>) -> Style {
    let px = |v: Option<f32>| v.map(Val::Px).unwrap_or(Val::Auto);
    Style {
        position_type: PositionType::Absolute,
        left: px(left),
        top: px(top),
        right: px(right),
        bottom: px(bottom),
        ..Default::default()
    }
}

fn setup_hud_system(mut commands: Commands, scenario: Res<Scenario>) {
    commands.spawn((
        TextBundle::from_section("FPS: 0", text_style(COLOR_TEXT))
            .with_style(absolute(Some(MARGIN), Some(MARGIN), None, None)),
        HudField::Fps,
    ));
    commands.spawn((
        TextBundle::from_section("", text_style(COLOR_TEXT))
            .with_style(absolute(Some(MARGIN), Some(MARGIN + 25.0), None, None)),
        HudField::Timestep,
    ));

    commands.spawn(
        TextBundle::from_section(TITLE, text_style(COLOR_TEXT))
            .with_style(absolute(None, Some(MARGIN), Some(MARGIN), None)),
    );

    let navigation: Vec<TextSection> = NAVIGATION
        .iter()
        .chain(std::iter::once(&TOGGLES))
        .map(|line| TextSection::new(format!("{line}\n"), text_style(COLOR_TEXT)))
        .collect();
    commands.spawn(
        TextBundle::from_sections(navigation)
            .with_text_justify(JustifyText::Right)
            .with_style(absolute(None, None, Some(MARGIN), Some(MARGIN))),
    );

    // Distances, bottom-left, one line per planet
    let planets: Vec<_> = scenario.engine.system.planets().map(|b| (b.id, b.color)).collect();
    let first_line = scenario.height as f32 - MARGIN - 25.0 * planets.len() as f32;

    commands.spawn(
        TextBundle::from_section(DISTANCE_TITLE, text_style(COLOR_TEXT))
            .with_style(absolute(Some(MARGIN), Some(first_line - 30.0), None, None)),
    );
    for (i, (id, color)) in planets.into_iter().enumerate() {
        commands.spawn((
            TextBundle::from_section("", text_style(color))
                .with_style(absolute(Some(MARGIN), Some(first_line + 25.0 * i as f32), None, None)),
            HudField::Distance(id),
        ));
    }
}

fn input_system(
    mut scenario: ResMut<Scenario>,
    keys: Res<ButtonInput<KeyCode>>,
    mut wheel: EventReader<MouseWheel>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut exit: EventWriter<AppExit>,
) {
    let mut events = Vec::new();

    for ev in wheel.read() {
        if ev.y > 0.0 {
            events.push(ControlEvent::ZoomIn);
        } else if ev.y < 0.0 {
            events.push(ControlEvent::ZoomOut);
        }
    }

    if keys.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        events.push(ControlEvent::SpeedUp);
    }
    if keys.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        events.push(ControlEvent::SlowDown);
    }
    if keys.just_pressed(KeyCode::KeyQ) {
        events.push(ControlEvent::ToggleAllTrails);
    }
    for (i, key) in DIGIT_KEYS.iter().enumerate() {
        if keys.just_pressed(*key) {
            events.push(ControlEvent::ToggleTrail(i));
        }
    }
    if keys.just_pressed(KeyCode::KeyA) {
        events.push(ControlEvent::Show(BodyFilter::All));
    }
    if keys.just_pressed(KeyCode::KeyS) {
        events.push(ControlEvent::Show(BodyFilter::Inner));
    }
    if keys.just_pressed(KeyCode::KeyD) {
        events.push(ControlEvent::Show(BodyFilter::Outer));
    }
    if keys.just_pressed(KeyCode::Escape) {
        events.push(ControlEvent::Quit);
    }

    // Held arrow keys pan every frame
    let mut dx = 0;
    let mut dy = 0;
    if keys.pressed(KeyCode::ArrowLeft) {
        dx += 1;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        dx -= 1;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        dy += 1;
    }
    if keys.pressed(KeyCode::ArrowDown) {
        dy -= 1;
    }
    if dx != 0 || dy != 0 {
        events.push(ControlEvent::Pan { dx, dy });
    }

    if let Ok(window) = windows.get_single() {
        let cursor = window.cursor_position().map(|p| (p.x as f64, p.y as f64));
        if let Some(pan) = edge_pan(cursor, window.width() as f64, window.height() as f64) {
            events.push(pan);
        }
    }

    if scenario.engine.apply_controls(events) == Flow::Quit {
        info!("quit requested");
        exit.send(AppExit::Success);
    }
}

/// Steps the `Scenario` engine at `PHYSICS_HZ`, independent of the display rate
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(PHYSICS_HZ))
            .add_systems(FixedUpdate, physics_step_system);
    }
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    if scenario.engine.halted().is_some() {
        return;
    }
    // the engine already logged it at error level and stays halted
    if let Err(e) = scenario.engine.advance_frame() {
        debug!("physics step skipped: {e}");
    }
}

fn render_system(
    scenario: Res<Scenario>,
    mut query: Query<(&BodyIndex, &mut Transform, &mut Visibility)>,
    mut gizmos: Gizmos,
) {
    let (w, h) = (scenario.width as f64, scenario.height as f64);
    let commands = scenario.engine.draw_commands(w, h);

    for (BodyIndex(i), mut transform, mut visibility) in &mut query {
        match commands.iter().find(|c| c.id == *i) {
            Some(cmd) => {
                let p = to_canvas(cmd.center, w, h);
                transform.translation.x = p.x;
                transform.translation.y = p.y;
                transform.scale = Vec3::new(cmd.radius as f32, cmd.radius as f32, 1.0);
                *visibility = Visibility::Visible;
            }
            None => *visibility = Visibility::Hidden,
        }
    }

    for cmd in &commands {
        if let Some(trail) = &cmd.trail {
            gizmos.linestrip_2d(trail.iter().map(|p| to_canvas(*p, w, h)), to_color(cmd.color));
        }
    }
}

fn hud_system(
    scenario: Res<Scenario>,
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<(&HudField, &mut Text, &mut Visibility)>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);
    let engine = &scenario.engine;
    let lines = distance_lines(&engine.system, engine.filter);

    for (field, mut text, mut visibility) in &mut query {
        match field {
            HudField::Fps => text.sections[0].value = format!("FPS: {}", fps as u32),
            HudField::Timestep => {
                let mut value = timestep_line(engine.params.timestep_days());
                if let Some(e) = engine.halted() {
                    value.push_str(&format!("  (halted: {e})"));
                }
                text.sections[0].value = value;
            }
            HudField::Distance(id) => match lines.iter().find(|l| l.id == *id) {
                Some(line) => {
                    text.sections[0].value = line.text.clone();
                    *visibility = Visibility::Visible;
                }
                None => *visibility = Visibility::Hidden,
            },
        }
    }
}
