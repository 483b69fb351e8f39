use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::scenario::Scenario;
use crate::simulation::states::StarId;
use crate::simulation::trail::PaintOp;

/// Everything spawned for the current frame's paint list
#[derive(Component)]
struct PaintItem;

/// On-screen time and light readout
#[derive(Component)]
struct Readout;

/// One material per star, reused every frame
#[derive(Resource)]
struct Palette {
    trails: [Handle<ColorMaterial>; 2],
    disks: [Handle<ColorMaterial>; 2],
}

/// Pixels per metre, `scale_base / (r1 + r2)`
#[derive(Resource)]
struct Zoom {
    scale_base: f32,
}

const SCALE_BASE_DELTA: f32 = 10.0;
const LAYER_STEP: f32 = 0.01; // z spacing between consecutive paint ops
const GIZMO_ORIGIN: Vec2 = Vec2::new(-560.0, -280.0); // bottom-left of the default window
const GIZMO_LENGTH: f32 = 50.0;
const GIZMO_COLORS: [Color; 3] = [Color::srgb(1.0, 0.3, 0.3), Color::srgb(0.3, 1.0, 0.3), Color::srgb(0.4, 0.5, 1.0)];

// colour from temperature lives outside the simulation core
const TRAIL_COLORS: [Color; 2] = [Color::srgb(1.0, 0.8, 0.5), Color::srgb(0.55, 0.7, 1.0)];
const DISK_COLORS: [Color; 2] = [Color::srgb(1.0, 0.9, 0.7), Color::srgb(0.75, 0.85, 1.0)];

pub fn run_2d(scenario: Scenario) {
    info!(
        "run_2d: starting Bevy 2D viewer, p = {:.4} day, tick every {} ms",
        scenario.sim.elements().p,
        scenario.view.tick_interval_ms
    );

    let tick_seconds = scenario.view.tick_interval_ms as f64 / 1000.0;
    let zoom = Zoom {
        scale_base: scenario.view.scale_base,
    };

    App::new()
        .insert_resource(scenario)
        .insert_resource(zoom)
        .insert_resource(Time::<Fixed>::from_seconds(tick_seconds))
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_system)
        .add_systems(FixedUpdate, physics_step_system)
        .add_systems(Update, (keyboard_system, redraw_system, readout_system, basis_gizmo_system).chain())
        .run();
}

fn setup_system(mut commands: Commands, mut scenario: ResMut<Scenario>, mut materials: ResMut<Assets<ColorMaterial>>) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    commands.insert_resource(Palette {
        trails: TRAIL_COLORS.map(|c| materials.add(ColorMaterial::from(c))),
        disks: DISK_COLORS.map(|c| materials.add(ColorMaterial::from(c))),
    });

    commands.spawn((
        TextBundle::from_section(
            "",
            TextStyle {
                font_size: 18.0,
                color: Color::WHITE,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        }),
        Readout,
    ));

    scenario.sim.start();
}

fn physics_step_system(mut scenario: ResMut<Scenario>) {
    if !scenario.sim.is_running() {
        return;
    }
    if let Err(err) = scenario.sim.tick() {
        warn!("simulation restarted: {err}");
    }
}

/// Space: pause / resume, R: restart, = / -: zoom
fn keyboard_system(keys: Res<ButtonInput<KeyCode>>, mut scenario: ResMut<Scenario>, mut zoom: ResMut<Zoom>) {
    if keys.just_pressed(KeyCode::Space) {
        if scenario.sim.is_running() {
            scenario.sim.pause();
        } else {
            scenario.sim.start();
        }
    }
    if keys.just_pressed(KeyCode::KeyR) {
        scenario.sim.restart();
    }
    if keys.just_pressed(KeyCode::Equal) {
        zoom.scale_base += SCALE_BASE_DELTA;
    }
    if keys.just_pressed(KeyCode::Minus) && zoom.scale_base > SCALE_BASE_DELTA {
        zoom.scale_base -= SCALE_BASE_DELTA;
    }
}

/// Respawn the paint list, each op one layer above the previous one
fn redraw_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    zoom: Res<Zoom>,
    palette: Res<Palette>,
    mut meshes: ResMut<Assets<Mesh>>,
    old: Query<Entity, With<PaintItem>>,
) {
    for entity in &old {
        commands.entity(entity).despawn();
    }

    let sim = &scenario.sim;
    let [s1, s2] = sim.stars();
    let scale = zoom.scale_base / (s1.radius + s2.radius) as f32;

    for (layer, op) in sim.paint_ops().into_iter().enumerate() {
        let z = layer as f32 * LAYER_STEP;
        match op {
            PaintOp::Stroke { star, points } => {
                let positions: Vec<[f32; 3]> = points
                    .iter()
                    .map(|p| [p.x as f32 * scale, p.y as f32 * scale, 0.0])
                    .collect();
                let mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::RENDER_WORLD)
                    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);
                spawn_item(&mut commands, meshes.add(mesh), palette.trails[star.index()].clone(), Vec3::new(0.0, 0.0, z));
            }
            PaintOp::Disk { star } => {
                let body = sim.star(star);
                let radius_screen = (body.radius as f32 * scale).max(1.0);
                let at = Vec3::new(body.img.x as f32 * scale, body.img.y as f32 * scale, z);
                spawn_item(&mut commands, meshes.add(Circle::new(radius_screen)), disk_material(&palette, star), at);
            }
        }
    }
}

/// Elapsed time in days and orbital periods, latest relative flux
fn readout_system(scenario: Res<Scenario>, mut texts: Query<&mut Text, With<Readout>>) {
    let sim = &scenario.sim;
    let flux = sim.fluxes().latest().copied().unwrap_or(1.0);
    for mut text in &mut texts {
        text.sections[0].value = format!(
            "t = {:.3} day\n  = {:.3} periods\nrel. flux {:.4}",
            sim.elapsed(),
            sim.elapsed_periods(),
            flux
        );
    }
}

/// Orbital x, y, z axes as seen by the observer
fn basis_gizmo_system(scenario: Res<Scenario>, mut gizmos: Gizmos) {
    for (axis, color) in scenario.sim.basis().iter().zip(GIZMO_COLORS) {
        let tip = GIZMO_ORIGIN + Vec2::new(axis.x as f32, axis.y as f32) * GIZMO_LENGTH;
        gizmos.line_2d(GIZMO_ORIGIN, tip, color);
    }
}

fn disk_material(palette: &Palette, star: StarId) -> Handle<ColorMaterial> {
    palette.disks[star.index()].clone()
}

fn spawn_item(commands: &mut Commands, mesh: Handle<Mesh>, material: Handle<ColorMaterial>, at: Vec3) {
    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(mesh),
            material,
            transform: Transform::from_translation(at),
            ..Default::default()
        },
        PaintItem,
    ));
}
