use crate::helpers::mesh::polygon_mesh;
use crate::scene::components::{RingStroke, SceneEntity, Stroke};
use crate::scene::events::RedrawScene;
use crate::scene::resources::SceneSettings;
use bevy::prelude::*;
use scenegen::scene::SceneLayout;

pub fn request_initial_draw(mut redraw: MessageWriter<RedrawScene>) {
    redraw.write(RedrawScene);
}

pub fn toggle_season(
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<SceneSettings>,
    mut redraw: MessageWriter<RedrawScene>,
) {
    if keys.just_pressed(KeyCode::KeyS) {
        settings.season = settings.season.toggled();
        info!("season switched to {:?}", settings.season);
        redraw.write(RedrawScene);
    }
}

pub fn redraw_scene_on_event(
    mut events: MessageReader<RedrawScene>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    settings: Res<SceneSettings>,
    scene_entities: Query<Entity, With<SceneEntity>>,
) {
    if events.read().count() == 0 {
        return;
    }

    // Pick up edits to the config file between redraws.
    scenegen::reload_config();

    for entity in scene_entities.iter() {
        commands.entity(entity).despawn();
    }

    let config = scenegen::get_config();
    let layout = SceneLayout::compose(settings.coordinate, settings.season, &config);
    let (width, height) = (config.canvas.width, config.canvas.height);

    // Stacking follows the original draw order: body, roof, window, then
    // the sun on top.
    let house_polygons = [
        (&layout.house.body, Color::srgb_u8(210, 105, 30), 0.0),
        (&layout.house.roof, Color::srgb_u8(139, 0, 0), 0.1),
        (&layout.house.window, Color::srgb_u8(173, 216, 230), 0.2),
    ];
    for (points, fill, z) in house_polygons {
        let world: Vec<Vec2> = points
            .iter()
            .map(|&point| canvas_to_world(point, width, height))
            .collect();
        commands.spawn((
            Mesh2d(meshes.add(polygon_mesh(&world))),
            MeshMaterial2d(materials.add(fill)),
            Transform::from_xyz(0.0, 0.0, z),
            Stroke {
                points: world,
                color: Color::BLACK,
                closed: true,
            },
            SceneEntity,
        ));
    }

    for label in layout.compass {
        commands.spawn((
            Text2d::new(label.text),
            TextFont {
                font_size: config.compass.font_size,
                ..default()
            },
            TextColor(Color::BLACK),
            Transform::from_translation(
                canvas_to_world(label.position, width, height).extend(0.4),
            ),
            SceneEntity,
        ));
    }

    let arc: Vec<Vec2> = layout
        .sun_path
        .arc_points(config.sun_path.segments)
        .iter()
        .map(|&point| canvas_to_world(point, width, height))
        .collect();
    commands.spawn((
        Stroke {
            points: arc,
            color: Color::srgb_u8(255, 165, 0),
            closed: false,
        },
        SceneEntity,
    ));

    let sun_center = canvas_to_world(layout.sun_path.sun_center, width, height);
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(config.sun_path.marker_radius))),
        MeshMaterial2d(materials.add(Color::srgb_u8(255, 255, 0))),
        Transform::from_translation(sun_center.extend(0.3)),
        RingStroke {
            center: sun_center,
            radius: config.sun_path.marker_radius,
            color: Color::srgb_u8(255, 215, 0),
        },
        SceneEntity,
    ));

    info!(
        "composed scene: facing {} deg, season {:?}",
        layout.facing_deg, settings.season
    );
}

/// Gizmos are immediate-mode, so outlines and the arc are re-submitted
/// every frame from the stroke components.
pub fn draw_strokes(mut gizmos: Gizmos, strokes: Query<&Stroke>, rings: Query<&RingStroke>) {
    for stroke in &strokes {
        if stroke.closed {
            gizmos.linestrip_2d(
                stroke.points.iter().copied().chain(stroke.points.first().copied()),
                stroke.color,
            );
        } else {
            gizmos.linestrip_2d(stroke.points.iter().copied(), stroke.color);
        }
    }
    for ring in &rings {
        gizmos.circle_2d(ring.center, ring.radius, ring.color);
    }
}

/// Canvas coordinates have the origin at the top left with y growing
/// downward; Bevy's world is y-up and centered on the camera.
fn canvas_to_world(point: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(point.x - width / 2.0, height / 2.0 - point.y)
}
