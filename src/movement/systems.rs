//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundSensor, MovementTuning, Player};

/// Overlap a small circle below the feet against the `Ground` layer.
pub(crate) fn sense_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(Entity, &Transform, &mut GroundSensor), With<Player>>,
) {
    let probe = Collider::circle(tuning.ground_check_radius);

    for (entity, transform, mut sensor) in &mut query {
        let filter =
            SpatialQueryFilter::from_mask(GameLayer::Ground).with_excluded_entities([entity]);
        let origin =
            transform.translation.truncate() - Vec2::new(0.0, tuning.ground_check_offset);

        let hits = spatial_query.shape_intersections(&probe, origin, 0.0, &filter);
        let grounded = !hits.is_empty();

        if grounded != sensor.grounded {
            debug!("Ground sensor: grounded={}", grounded);
        }
        sensor.grounded = grounded;
    }
}
