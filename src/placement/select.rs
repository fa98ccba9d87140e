use crate::geometry::{Point, Rect, Scalar};

/// The tightest free space that can hold `size`.
///
/// Candidates must be at least `size` wide and tall. Among those, the one
/// wasting the least area wins; on equal waste the earliest candidate is
/// kept. Returns `None` when nothing is big enough.
pub fn choose_space<T: Scalar>(spaces: &[Rect<T>], size: Point<T>) -> Option<Rect<T>> {
    let fitting: Vec<&Rect<T>> = spaces.iter().filter(|space| space.can_hold(size)).collect();
    if fitting.is_empty() {
        log::debug!("none of {} free spaces can hold {}", spaces.len(), size);
        return None;
    }

    let target_area = T::wide_mul(size.x.widen(), size.y.widen());
    let mut best = fitting[0];
    let mut best_waste = T::wide_sub(best.area(), target_area);
    for space in fitting.into_iter().skip(1) {
        let waste = T::wide_sub(space.area(), target_area);
        if waste < best_waste {
            best = space;
            best_waste = waste;
        }
    }

    log::debug!("chose {} wasting {}", best, best_waste);
    Some(*best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i64, y: i64, w: i64, h: i64) -> Rect {
        Rect::from_origin_size(x, y, w, h)
    }

    #[test]
    fn picks_smallest_waste() {
        let spaces = [rect(0, 0, 3, 3), rect(10, 0, 2, 3), rect(20, 0, 2, 7)];
        assert_eq!(
            choose_space(&spaces, Point::new(2, 2)),
            Some(rect(10, 0, 2, 3))
        );
    }

    #[test]
    fn equal_waste_keeps_first_candidate() {
        let spaces = [
            rect(0, 0, 8, 8),
            rect(10, 0, 5, 4),
            rect(20, 0, 4, 5),
            rect(30, 0, 5, 4),
        ];
        assert_eq!(
            choose_space(&spaces, Point::new(4, 4)),
            Some(rect(10, 0, 5, 4))
        );
    }

    #[test]
    fn exact_fit_is_accepted() {
        let spaces = [rect(0, 0, 100, 100), rect(7, 7, 20, 10)];
        assert_eq!(
            choose_space(&spaces, Point::new(20, 10)),
            Some(rect(7, 7, 20, 10))
        );
    }

    #[test]
    fn large_area_is_not_enough() {
        // Plenty of area, but every candidate is too narrow or too short.
        let spaces = [rect(0, 0, 1000, 9), rect(0, 0, 9, 1000)];
        assert_eq!(choose_space(&spaces, Point::new(10, 10)), None);
        assert_eq!(choose_space::<i64>(&[], Point::new(1, 1)), None);
    }

    #[test]
    fn huge_spaces_are_ranked_without_overflow() {
        let spaces = [
            rect(0, 0, i64::MAX, i64::MAX),
            rect(0, 0, i64::MAX, 2),
            rect(i64::MAX - 5, 0, 5, i64::MAX),
        ];
        assert_eq!(choose_space(&spaces, Point::new(2, 2)), Some(spaces[1]));
        assert_eq!(
            choose_space(&spaces, Point::new(i64::MAX, i64::MAX)),
            Some(spaces[0])
        );
    }
}
