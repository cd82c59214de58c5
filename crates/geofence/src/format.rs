/// Human readable distance: whole meters below one kilometer, kilometers with
/// one decimal above.
pub fn format_distance(meters: f64) -> String {
    let meters = meters.max(0.0);
    if meters.round() < 1000.0 {
        format!("{} m", meters.round() as u64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

pub fn format_eta(minutes: u32) -> String {
    let hours = minutes / 60;
    let minutes = minutes % 60;
    match (hours, minutes) {
        (0, 0) => "< 1 min".to_owned(),
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{} h", h),
        (h, m) => format!("{} h {} min", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(42.4), "42 m");
        assert_eq!(format_distance(999.4), "999 m");
        assert_eq!(format_distance(999.6), "1.0 km");
        assert_eq!(format_distance(343_556.0), "343.6 km");
    }

    #[test]
    fn etas() {
        assert_eq!(format_eta(0), "< 1 min");
        assert_eq!(format_eta(17), "17 min");
        assert_eq!(format_eta(60), "1 h");
        assert_eq!(format_eta(135), "2 h 15 min");
    }
}
