use crate::{
    error::{InterpolationError, Result},
    knot::KnotSet,
};

/// Where a query falls relative to the knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Inside the domain, in the segment starting at the given knot index.
    /// The last knot belongs to the last segment.
    Interior(usize),
    BelowDomain,
    AboveDomain,
}

pub fn locate(knots: &KnotSet, x: f64) -> Result<Location> {
    if x.is_nan() {
        return Err(InterpolationError::NotANumber);
    }
    if x.is_infinite() {
        return Err(InterpolationError::InfiniteQuery(x));
    }
    if x < knots.min_x() {
        Ok(Location::BelowDomain)
    } else if x > knots.max_x() {
        Ok(Location::AboveDomain)
    } else {
        Ok(Location::Interior(find_interval_index(knots, x)))
    }
}

/// Same as [locate], trying `index_hint` and the following segment before searching.
/// Sorted queries are located in constant time this way.
pub fn locate_with_hint(knots: &KnotSet, index_hint: usize, x: f64) -> Result<Location> {
    match locate(knots, x)? {
        Location::Interior(_) => Ok(Location::Interior(find_interval_index_with_hint(knots, index_hint, x))),
        exterior => Ok(exterior),
    }
}

fn find_interval_index(knots: &KnotSet, x: f64) -> usize {
    if knots.is_spacing_uniform() {
        find_interval_index_uniform(knots, x)
    } else {
        find_interval_index_bisect(knots, x)
    }
}

fn find_interval_index_bisect(knots: &KnotSet, x: f64) -> usize {
    let positions = knots.get_x();
    let mut min = 0;
    let mut max = positions.len() - 1;

    while max - min > 1 {
        let mid = (min + max) / 2;
        if x < positions[mid] {
            max = mid;
        } else {
            min = mid;
        }
    }
    min
}

// The guess can be one segment off because of rounding. It is tried together with its
// neighbours, anything further away goes through bisection.
fn find_interval_index_uniform(knots: &KnotSet, x: f64) -> usize {
    let last_segment = knots.segment_count() - 1;
    let relative_x = (x - knots.min_x()) / (knots.max_x() - knots.min_x());
    let guess = ((relative_x * knots.segment_count() as f64).floor() as usize).min(last_segment);

    let candidates = [Some(guess), guess.checked_sub(1), Some(guess + 1).filter(|i| *i <= last_segment)];
    candidates
        .into_iter()
        .flatten()
        .find(|index| is_in_interval_range(knots, *index, x))
        .unwrap_or_else(|| find_interval_index_bisect(knots, x))
}

fn find_interval_index_with_hint(knots: &KnotSet, index_hint: usize, x: f64) -> usize {
    let last_segment = knots.segment_count() - 1;
    let index_hint = index_hint.min(last_segment);

    if is_in_interval_range(knots, index_hint, x) {
        index_hint
    } else if index_hint < last_segment && is_in_interval_range(knots, index_hint + 1, x) {
        index_hint + 1
    } else {
        find_interval_index(knots, x)
    }
}

// Half-open on the right except for the last segment, matching the bisection convention.
fn is_in_interval_range(knots: &KnotSet, interval_index: usize, x: f64) -> bool {
    let positions = knots.get_x();
    let upper = positions[interval_index + 1];
    positions[interval_index] <= x && (x < upper || (x == upper && interval_index == knots.segment_count() - 1))
}
