use crate::models::{Arena, Body};

/// Keeps `body` inside `arena`, reflecting it perfectly elastically off the walls.
///
/// See [`reflect_with_restitution`]. Returns `true` when any wall was touched.
///
/// # Examples
///
/// ```
/// use rs_particle_lab::interactions::reflect;
/// use rs_particle_lab::models::{Arena, Body};
///
/// let arena = Arena::new(10.0, 10.0).unwrap();
/// let mut body = Body::from_components(10.5, 5.0, 2.0, 0.0, 1.0, 1.0).unwrap();
///
/// assert!(reflect(&mut body, &arena));
/// assert_eq!(body.position.x, 9.0);
/// assert_eq!(body.velocity.x, -2.0);
/// ```
pub fn reflect(body: &mut Body, arena: &Arena) -> bool {
    reflect_with_restitution(body, arena, 1.0)
}

/// Clamps `body` inside `arena` and reflects its velocity off any wall it touches.
///
/// Each axis is handled independently. When the body's edge reaches a wall its centre is
/// clamped to one radius from that wall and the velocity component on that axis is negated
/// and scaled by `restitution`, whichever way it points. A body pushed against a wall by a
/// collision while already moving away from it is therefore turned back towards the wall.
///
/// A body whose radius is at least half an arena dimension cannot fit on that axis. The low
/// wall wins and the body ends up clamped to `radius` even if that places its far edge
/// outside the arena. This is accepted rather than corrected.
pub fn reflect_with_restitution(body: &mut Body, arena: &Arena, restitution: f64) -> bool {
    let r = body.radius;
    let x_contact = reflect_axis(&mut body.position.x, &mut body.velocity.x, r, arena.width, restitution);
    let y_contact = reflect_axis(&mut body.position.y, &mut body.velocity.y, r, arena.height, restitution);
    x_contact || y_contact
}

fn reflect_axis(position: &mut f64, velocity: &mut f64, radius: f64, bound: f64, restitution: f64) -> bool {
    if *position - radius <= 0.0 {
        *position = radius;
        *velocity = -*velocity * restitution;
        true
    } else if *position + radius >= bound {
        *position = bound - radius;
        *velocity = -*velocity * restitution;
        true
    } else {
        false
    }
}
