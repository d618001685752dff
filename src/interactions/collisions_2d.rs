use log::trace;
use crate::models::{Body, Vector2D};

/// Geometry of an overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit vector from the first body's centre towards the second's.
    pub normal: Vector2D,
    /// How far the discs overlap along `normal`.
    pub penetration: f64,
}

/// Finds the contact between two discs.
///
/// Returns `None` when they do not overlap, and also when their centres coincide exactly:
/// that pair has no usable normal and is skipped rather than treated as an error.
pub fn detect_contact(a: &Body, b: &Body) -> Option<Contact> {
    let delta = b.position - a.position;
    let distance = delta.length();
    let min_distance = a.radius + b.radius;
    if distance >= min_distance || distance == 0.0 {
        return None;
    }
    Some(Contact {
        normal: delta * (1.0 / distance),
        penetration: min_distance - distance,
    })
}

/// Resolves one pair of discs. Returns `true` if they were in contact.
///
/// 1. Both bodies are pushed apart along the contact normal, each by half of
///    (penetration + `separation_bias`), regardless of their masses.
/// 2. Velocities are split into normal and tangential parts. Tangential parts are kept
///    (no friction); normal parts go through the 1-D elastic collision formula
///    `v1n' = (v1n*(m1-m2) + 2*m2*v2n) / (m1+m2)` and its mirror, which conserves both
///    momentum and kinetic energy along the normal.
///
/// Both masses must be positive. That is a caller precondition; nothing is checked here.
///
/// # Examples
///
/// ```
/// use rs_particle_lab::interactions::resolve_pair;
/// use rs_particle_lab::models::Body;
///
/// let mut a = Body::from_components(0.0, 0.0, 1.0, 0.0, 1.0, 1.0).unwrap();
/// let mut b = Body::from_components(1.5, 0.0, -1.0, 0.0, 1.0, 1.0).unwrap();
///
/// assert!(resolve_pair(&mut a, &mut b, 1.0));
/// // Equal masses swap their normal velocities.
/// assert_eq!(a.velocity.x, -1.0);
/// assert_eq!(b.velocity.x, 1.0);
/// // And end up separated by the bias.
/// assert_eq!(b.position.x - a.position.x, 3.0);
/// ```
pub fn resolve_pair(a: &mut Body, b: &mut Body, separation_bias: f64) -> bool {
    let Some(contact) = detect_contact(a, b) else {
        return false;
    };
    let normal = contact.normal;

    let correction = normal * (0.5 * (contact.penetration + separation_bias));
    a.position -= correction;
    b.position += correction;

    let tangent = normal.perpendicular();
    let v1n = a.velocity.dot(normal);
    let v1t = a.velocity.dot(tangent);
    let v2n = b.velocity.dot(normal);
    let v2t = b.velocity.dot(tangent);

    let (m1, m2) = (a.mass, b.mass);
    let total_mass = m1 + m2;
    let v1n_after = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / total_mass;
    let v2n_after = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / total_mass;

    a.velocity = normal * v1n_after + tangent * v1t;
    b.velocity = normal * v2n_after + tangent * v2t;

    trace!(
        "resolved contact: penetration={:.4}, v1n {:.3} -> {:.3}, v2n {:.3} -> {:.3}",
        contact.penetration, v1n, v1n_after, v2n, v2n_after
    );
    true
}

/// Resolves every unordered pair once, in ascending `(i, j)` order with `i < j`,
/// using the default one-unit separation bias.
///
/// Returns the number of pairs that were in contact.
pub fn resolve_all(bodies: &mut [Body]) -> usize {
    resolve_all_with_bias(bodies, 1.0)
}

/// [`resolve_all`] with an explicit separation bias.
///
/// This is brute force, O(n²) per call, and allocates nothing.
pub fn resolve_all_with_bias(bodies: &mut [Body], separation_bias: f64) -> usize {
    let mut contacts = 0;
    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let first = &mut head[i];
        for second in tail.iter_mut() {
            if resolve_pair(first, second, separation_bias) {
                contacts += 1;
            }
        }
    }
    contacts
}
