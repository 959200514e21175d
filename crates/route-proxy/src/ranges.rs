use common::{RangeSelector, Waypoint};

// Every range starts from the same depot.
const ORIGIN: Waypoint = Waypoint::new(17.385044, 78.486671);

/// Maps a selector to the fixed (origin, destination) pair requested upstream.
///
/// `Today` and `Other` share the default short route.
pub fn resolve(selector: RangeSelector) -> (Waypoint, Waypoint) {
    let destination = match selector {
        RangeSelector::Yesterday => Waypoint::new(17.484044, 78.456671),
        RangeSelector::ThisWeek => Waypoint::new(17.784044, 78.556671),
        RangeSelector::PreviousWeek => Waypoint::new(17.685044, 78.606671),
        RangeSelector::ThisMonth => Waypoint::new(18.385044, 79.486671),
        RangeSelector::PreviousMonth => Waypoint::new(18.385044, 78.986671),
        RangeSelector::Today | RangeSelector::Other => Waypoint::new(17.385944, 78.486871),
    };
    (ORIGIN, destination)
}
