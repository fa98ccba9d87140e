use crate::geometry::{Point, Rect, Scalar};

/// Free space left in `space` once `obstacle` is taken out.
///
/// Returns `space` itself when the two do not intersect. Otherwise returns
/// up to four strips, in the order right, bottom, top, left. Each strip runs
/// the full width or height of `space`, so neighbouring strips overlap.
/// Strips with no area are dropped.
pub fn partition<T: Scalar>(space: &Rect<T>, obstacle: &Rect<T>) -> Vec<Rect<T>> {
    if !space.intersects_with(obstacle) {
        return vec![*space];
    }

    let candidates = [
        Rect::new(Point::new(obstacle.right(), space.top()), space.bottom_right),
        Rect::new(Point::new(space.left(), obstacle.bottom()), space.bottom_right),
        Rect::new(space.top_left, Point::new(space.right(), obstacle.top())),
        Rect::new(space.top_left, Point::new(obstacle.left(), space.bottom())),
    ];

    candidates.into_iter().filter(Rect::is_valid).collect()
}

/// Every maximal free rectangle of `bounds` after carving out `obstacles`,
/// processed in order. Bounds with no area leave no free space.
pub fn partition_space<T: Scalar>(bounds: &Rect<T>, obstacles: &[Rect<T>]) -> Vec<Rect<T>> {
    if !bounds.is_valid() {
        log::debug!("bounds {} have no area", bounds);
        return Vec::new();
    }
    let mut spaces = vec![*bounds];

    for (idx, obstacle) in obstacles.iter().enumerate() {
        spaces = spaces
            .iter()
            .flat_map(|space| partition(space, obstacle))
            .collect();
        log::debug!(
            "obstacle {} {}: {} free spaces",
            idx + 1,
            obstacle,
            spaces.len()
        );
    }

    spaces
}
