//! End-to-end scenarios through the public API.

use approx::assert_relative_eq;
use creature_ik::{
    Creature, CreatureConfig, LimbConfig, RecordingSurface, SpawnDirection, SpineConfig,
    SurfaceCommand, TentacleConfig,
};
use glam::DVec2;
use std::f64::consts::PI;

fn spine_only_config() -> CreatureConfig {
    CreatureConfig {
        spine: SpineConfig {
            segment_count: 5,
            segment_radii: vec![10.0, 9.0, 8.0, 7.0, 6.0],
            link_length: 10.0,
            angle_constraint: PI / 12.0,
        },
        limbs: Vec::new(),
        tentacles: Vec::new(),
    }
}

#[test]
fn one_step_toward_a_horizontal_target() {
    let mut creature = Creature::new(spine_only_config(), DVec2::new(100.0, 100.0)).unwrap();
    let mut surface = RecordingSurface::new();

    creature.step_and_render(DVec2::new(200.0, 100.0), 0.0, &mut surface, false);

    // Head covered 10% of the distance and took on the travel heading.
    let head = creature.spine()[0];
    assert_relative_eq!(head.position.x, 110.0, epsilon = 1e-9);
    assert_relative_eq!(head.position.y, 100.0, epsilon = 1e-9);
    assert_relative_eq!(head.angle, 0.0, epsilon = 1e-9);

    // The first trailing segment sits exactly one link behind, bent at
    // most the constraint away from the head's heading.
    let second = creature.spine()[1];
    let distance = (second.position - head.position).length();
    assert_relative_eq!(distance, 10.0, epsilon = 1e-6);
    let bend = creature_ik::math::relative_angle_diff(second.angle, head.angle).abs();
    assert!(bend <= PI / 12.0 + 1e-9);
}

#[test]
fn silhouette_path_closes_on_its_starting_point() {
    let mut creature = Creature::new(spine_only_config(), DVec2::new(100.0, 100.0)).unwrap();
    let mut surface = RecordingSurface::new();
    creature.step_and_render(DVec2::new(180.0, 140.0), 0.0, &mut surface, false);

    let commands = surface.commands();
    let start = commands
        .iter()
        .find_map(|command| match command {
            SurfaceCommand::MoveTo(point) => Some(*point),
            _ => None,
        })
        .expect("outline starts with a move-to");
    let (center, radius, start_angle, end_angle) = commands
        .iter()
        .rev()
        .find_map(|command| match command {
            SurfaceCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => Some((*center, *radius, *start_angle, *end_angle)),
            _ => None,
        })
        .expect("outline ends with the head cap");

    assert_relative_eq!(end_angle - start_angle, PI, epsilon = 1e-12);
    let cap_end = center + DVec2::from_angle(end_angle) * radius;
    assert_relative_eq!(cap_end.x, start.x, epsilon = 1e-6);
    assert_relative_eq!(cap_end.y, start.y, epsilon = 1e-6);
}

#[test]
fn full_creature_animates_and_renders_every_chain() {
    let config = CreatureConfig {
        spine: SpineConfig {
            segment_count: 12,
            segment_radii: (0..12).map(|i| 24.0 - i as f64).collect(),
            link_length: 12.0,
            angle_constraint: PI / 12.0,
        },
        limbs: vec![
            LimbConfig {
                segment_count: 5,
                segment_radii: (0..5).map(|i| 20.0 - i as f64 / 2.0).collect(),
                link_length: 20.0,
                spawn_anchor_index: 3,
                spawn_direction: SpawnDirection::Left,
            },
            LimbConfig {
                segment_count: 5,
                segment_radii: (0..5).map(|i| 20.0 - i as f64 / 2.0).collect(),
                link_length: 20.0,
                spawn_anchor_index: 3,
                spawn_direction: SpawnDirection::Right,
            },
        ],
        tentacles: vec![TentacleConfig {
            segment_count: 8,
            segment_radii: (0..8).map(|i| 10.0 - i as f64).collect(),
            link_length: 9.0,
            spawn_anchor_index: 9,
            spawn_direction: SpawnDirection::Right,
        }],
    };
    let mut creature = Creature::new(config, DVec2::new(300.0, 300.0)).unwrap();

    // Chase a wandering target for a while.
    for frame in 0..120 {
        let t = frame as f64 / 60.0;
        let target = DVec2::new(300.0 + 150.0 * t.cos(), 300.0 + 90.0 * t.sin());
        creature.step(target, t);
    }

    // Spine links never drift off their fixed length.
    for pair in creature.spine().windows(2) {
        let distance = (pair[1].position - pair[0].position).length();
        assert_relative_eq!(distance, 12.0, epsilon = 1e-6);
    }

    // Limb interiors stay rigid rods.
    for limb in creature.limbs() {
        for pair in limb[1..].windows(2) {
            let distance = (pair[1].position - pair[0].position).length();
            assert_relative_eq!(distance, 20.0, epsilon = 1e-6);
        }
    }

    // Every position everywhere stays finite.
    let all = creature
        .spine()
        .iter()
        .chain(creature.limbs().iter().flatten())
        .chain(creature.tentacles().iter().flatten());
    for segment in all {
        assert!(segment.position.is_finite());
    }

    // One filled outline per chain: 2 limbs + 1 tentacle + spine.
    let mut surface = RecordingSurface::new();
    creature.render(&mut surface, false);
    let fills = surface
        .commands()
        .iter()
        .filter(|command| matches!(command, SurfaceCommand::Fill))
        .count();
    assert_eq!(fills, 4);
}

#[test]
fn rebuilding_with_a_new_shape_replaces_the_chains() {
    let mut config = spine_only_config();
    let creature = Creature::new(config.clone(), DVec2::new(50.0, 50.0)).unwrap();
    assert_eq!(creature.spine().len(), 5);

    config.spine.segment_count = 9;
    config.spine.segment_radii = vec![5.0; 9];
    let rebuilt = Creature::new(config, DVec2::new(50.0, 50.0)).unwrap();
    assert_eq!(rebuilt.spine().len(), 9);
}
