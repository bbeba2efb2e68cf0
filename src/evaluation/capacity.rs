//! Capacity feasibility checks.

use crate::models::Route;

/// Returns `true` if the combined demand of all `routes` fits in `capacity`.
///
/// Demand is accumulated route by route in iteration order and the check
/// stops at the first node that pushes the running total over capacity.
///
/// # Examples
///
/// ```
/// use cvrp_construct::models::Route;
/// use cvrp_construct::evaluation::is_total_capacity_valid;
///
/// let demand = [0, 4, 5, 6];
/// let a = Route::from(vec![1, 2]);
/// let b = Route::from(vec![3]);
/// assert!(is_total_capacity_valid([&a, &b], &demand, 15));
/// assert!(!is_total_capacity_valid([&a, &b], &demand, 14));
/// ```
pub fn is_total_capacity_valid<'r, I>(routes: I, demand: &[i32], capacity: i32) -> bool
where
    I: IntoIterator<Item = &'r Route>,
{
    let mut total: i64 = 0;
    for route in routes {
        for &node in route.nodes() {
            total += i64::from(demand[node]);
            if total > i64::from(capacity) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_is_feasible() {
        assert!(is_total_capacity_valid(
            std::iter::empty::<&Route>(),
            &[0],
            1
        ));
    }

    #[test]
    fn test_exactly_at_capacity() {
        let demand = [0, 3, 7];
        let r = Route::from(vec![1, 2]);
        assert!(is_total_capacity_valid([&r], &demand, 10));
        assert!(!is_total_capacity_valid([&r], &demand, 9));
    }

    #[test]
    fn test_stops_at_first_overflow() {
        // Node 9 is out of range for `demand`; reaching it would panic, so a
        // passing test shows the scan stopped once the total overflowed.
        let demand = [0, 8, 8];
        let a = Route::from(vec![1, 2]);
        let b = Route::from(vec![9]);
        assert!(!is_total_capacity_valid([&a, &b], &demand, 10));
    }

    #[test]
    fn test_large_demands_do_not_overflow() {
        let demand = [0, i32::MAX, i32::MAX];
        let r = Route::from(vec![1, 2]);
        assert!(!is_total_capacity_valid([&r], &demand, i32::MAX));
    }
}
