use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

/// Width of every table cell, labels included.
pub const CELL_WIDTH: usize = 7;

/// Longest exposure the camera can time in BULB mode, in hours.
pub const MAX_BULB_HOURS: i64 = 99;

/// Glyph shown when an exposure is longer than the BULB timer can record.
pub const UNREPRESENTABLE_MARKER: char = 'x';

const FRACTION_LIMIT_SECONDS: f64 = 0.25;
const TIMED_LIMIT_SECONDS: f64 = 30.0;

/// Light attenuation of an ND filter (or a stack of them), in stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopValue {
    pub stops: u32,
    pub label: String,
}

impl StopValue {
    pub fn new(stops: u32, label: impl Into<String>) -> Self {
        Self {
            stops,
            label: label.into(),
        }
    }

    /// Stacks two filters. Labels keep argument order: `combine(1k, 4)` is `"1k 4"`.
    pub fn combine(a: &StopValue, b: &StopValue) -> StopValue {
        StopValue {
            stops: a.stops + b.stops,
            label: format!("{} {}", a.label, b.label),
        }
    }

    /// Orders by stop count only, labels are ignored.
    pub fn cmp_stops(&self, other: &StopValue) -> Ordering {
        self.stops.cmp(&other.stops)
    }

    pub fn format_label(&self) -> String {
        format!("{:>width$}", self.label, width = CELL_WIDTH)
    }
}

impl Add for &StopValue {
    type Output = StopValue;

    fn add(self, rhs: &StopValue) -> StopValue {
        StopValue::combine(self, rhs)
    }
}

/// A shutter duration in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ExposureTime(f64);

impl ExposureTime {
    /// `1/denominator` seconds, e.g. `from_fraction(4000)` is 1/4000s.
    pub fn from_fraction(denominator: u32) -> Self {
        Self(1.0 / f64::from(denominator))
    }

    /// `whole + tenths/10` seconds, e.g. `from_whole_and_tenths(3, 2)` is 3"2.
    pub fn from_whole_and_tenths(whole: u32, tenths: u32) -> Self {
        Self(f64::from(whole) + f64::from(tenths) / 10.0)
    }

    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Exposure needed behind `stops` of ND filtering. Every stop doubles the time.
    pub fn apply_stops(&self, stops: u32) -> f64 {
        // 2^i32::MAX already overflows to infinity
        let factor = i32::try_from(stops).map_or(f64::INFINITY, |n| 2f64.powi(n));
        self.0 * factor
    }

    pub fn format_with_stops(&self, stops: u32) -> String {
        format_duration(self.apply_stops(stops))
    }
}

impl fmt::Display for ExposureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.0))
    }
}

/// The notation a duration is displayed in. Each upper bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationBand {
    /// Up to 1/4s, shown as the denominator of `1/N`.
    Fraction,
    /// Up to 30s, shown as seconds and tenths: `3"2`.
    Timed,
    /// BULB up to 60 minutes: `5' 30"`.
    BulbMinutes,
    /// BULB up to 99 hours, minute resolution: `1h 01'`.
    BulbHours,
    /// Longer than the BULB timer can record.
    Unrepresentable,
}

impl DurationBand {
    pub fn classify(seconds: f64) -> Self {
        if seconds <= FRACTION_LIMIT_SECONDS {
            return DurationBand::Fraction;
        }
        if seconds <= TIMED_LIMIT_SECONDS {
            return DurationBand::Timed;
        }

        let minutes_total = bulb_seconds(seconds) / 60;
        if minutes_total <= 60 {
            DurationBand::BulbMinutes
        } else if minutes_total / 60 > MAX_BULB_HOURS {
            DurationBand::Unrepresentable
        } else {
            DurationBand::BulbHours
        }
    }
}

fn bulb_seconds(seconds: f64) -> i64 {
    seconds.ceil() as i64
}

/// Formats a duration the way the camera displays it, always 7 characters wide
/// for the durations a shutter table produces.
pub fn format_duration(seconds: f64) -> String {
    match DurationBand::classify(seconds) {
        DurationBand::Fraction => {
            let denominator = (1.0 / seconds).round() as i64;
            format!("{:width$}", denominator, width = CELL_WIDTH)
        }
        DurationBand::Timed => {
            let whole = seconds.floor();
            let tenths = ((seconds - whole) * 10.0).round() as i64;
            format!("{:5}\"{}", whole as i64, tenths)
        }
        DurationBand::BulbMinutes => {
            let total = bulb_seconds(seconds);
            format!("{:2}' {:02}\"", total / 60, total % 60)
        }
        DurationBand::BulbHours => {
            // 秒數在小時等級不顯示
            let minutes_total = bulb_seconds(seconds) / 60;
            format!("{:2}h {:02}'", minutes_total / 60, minutes_total % 60)
        }
        DurationBand::Unrepresentable => {
            format!("{:width$}", UNREPRESENTABLE_MARKER, width = CELL_WIDTH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_sums_stops_and_keeps_label_order() {
        let nd1000 = StopValue::new(10, "1k");
        let nd4 = StopValue::new(2, "4");

        let stacked = StopValue::combine(&nd1000, &nd4);
        assert_eq!(stacked.stops, 12);
        assert_eq!(stacked.label, "1k 4");

        let reversed = &nd4 + &nd1000;
        assert_eq!(reversed.stops, 12);
        assert_eq!(reversed.label, "4 1k");
    }

    #[test]
    fn test_combine_is_associative_on_stops() {
        let a = StopValue::new(10, "1k");
        let b = StopValue::new(6, "64");
        let c = StopValue::new(2, "4");

        let left = &(&a + &b) + &c;
        let right = &a + &(&b + &c);
        assert_eq!(left.stops, right.stops);
        assert_eq!(left.label, "1k 64 4");
        assert_eq!(right.label, "1k 64 4");
    }

    #[test]
    fn test_cmp_stops_ignores_label() {
        let a = StopValue::new(3, "8");
        let b = StopValue::new(3, "other");
        assert_eq!(a.cmp_stops(&b), Ordering::Equal);
        assert_eq!(StopValue::new(2, "4").cmp_stops(&a), Ordering::Less);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(StopValue::new(2, "4").format_label(), "      4");
        assert_eq!(StopValue::new(18, "1k 64 4").format_label(), "1k 64 4");
        assert_eq!(StopValue::new(21, "1k 64 8 4").format_label(), "1k 64 8 4");
    }

    #[test]
    fn test_exposure_construction() {
        assert_eq!(ExposureTime::from_fraction(4).seconds(), 0.25);
        assert_eq!(ExposureTime::from_fraction(4000).seconds(), 1.0 / 4000.0);
        assert_eq!(ExposureTime::from_whole_and_tenths(2, 5).seconds(), 2.5);
        assert_eq!(ExposureTime::from_whole_and_tenths(30, 0).seconds(), 30.0);
    }

    #[test]
    fn test_apply_stops_doubles_per_stop() {
        let shutter = ExposureTime::from_whole_and_tenths(1, 0);
        assert_eq!(shutter.apply_stops(0), 1.0);
        assert_eq!(shutter.apply_stops(1), 2.0);
        assert_eq!(shutter.apply_stops(10), 1024.0);

        let fast = ExposureTime::from_fraction(4000);
        let mut previous = fast.apply_stops(0);
        for stops in 1..=21 {
            let current = fast.apply_stops(stops);
            assert!(current >= previous);
            assert_eq!(current, fast.seconds() * f64::from(1u32 << stops));
            previous = current;
        }
    }

    #[test]
    fn test_apply_stops_never_shrinks_for_huge_stop_counts() {
        let shutter = ExposureTime::from_whole_and_tenths(1, 0);
        let beyond_i32 = i32::MAX as u32 + 1;

        assert!(shutter.apply_stops(beyond_i32) >= shutter.apply_stops(30));
        assert!(shutter.apply_stops(u32::MAX).is_infinite());
        assert_eq!(shutter.format_with_stops(u32::MAX), "x      ");
    }

    #[test]
    fn test_fraction_band() {
        assert_eq!(format_duration(0.25), "      4");
        assert_eq!(format_duration(0.2), "      5");
        assert_eq!(format_duration(1.0 / 4000.0), "   4000");
        assert_eq!(DurationBand::classify(0.25), DurationBand::Fraction);
    }

    #[test]
    fn test_timed_band() {
        assert_eq!(format_duration(0.26), "    0\"3");
        assert_eq!(format_duration(3.2), "    3\"2");
        assert_eq!(format_duration(1.0), "    1\"0");
        assert_eq!(format_duration(30.0), "   30\"0");
        assert_eq!(DurationBand::classify(30.0), DurationBand::Timed);
    }

    #[test]
    fn test_bulb_minutes_band() {
        assert_eq!(format_duration(30.1), " 0' 31\"");
        assert_eq!(format_duration(120.0), " 2' 00\"");
        assert_eq!(format_duration(1024.0), "17' 04\"");
        assert_eq!(format_duration(3600.0), "60' 00\"");
        assert_eq!(DurationBand::classify(3659.0), DurationBand::BulbMinutes);
    }

    #[test]
    fn test_bulb_hours_band() {
        assert_eq!(format_duration(3661.0), " 1h 01'");
        assert_eq!(format_duration(4096.0), " 1h 08'");
        assert_eq!(format_duration(262_144.0), "72h 49'");
        assert_eq!(format_duration(359_999.0), "99h 59'");
        assert_eq!(DurationBand::classify(3660.0), DurationBand::BulbHours);
    }

    #[test]
    fn test_unrepresentable_band() {
        assert_eq!(format_duration(360_000.0), "x      ");
        assert_eq!(format_duration(30.0 * 262_144.0), "x      ");
        assert_eq!(
            DurationBand::classify(360_000.0),
            DurationBand::Unrepresentable
        );
    }

    #[test]
    fn test_display_uses_camera_notation() {
        assert_eq!(ExposureTime::from_fraction(10).to_string(), "     10");
        assert_eq!(ExposureTime::from_whole_and_tenths(0, 3).to_string(), "    0\"3");
        assert_eq!(
            ExposureTime::from_whole_and_tenths(30, 0).format_with_stops(2),
            " 2' 00\""
        );
    }
}
