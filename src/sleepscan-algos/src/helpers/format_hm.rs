use chrono::TimeDelta;

pub trait FormatHM {
    fn format_hm(&self) -> String;
}

/// Whole hours and minutes, hours not wrapped at a day: `31h 5m`.
impl FormatHM for TimeDelta {
    fn format_hm(&self) -> String {
        let total = self.num_seconds() as f64 / 60.0;
        total.format_hm()
    }
}

/// Minutes as `{h}h {m}m`.
impl FormatHM for f64 {
    fn format_hm(&self) -> String {
        let h = (self / 60.0).floor() as i64;
        let m = self.rem_euclid(60.0) as i64;
        format!("{}h {}m", h, m)
    }
}

/// Clock hour rendering used for typical sleep and wake times: `7.8` -> `7:00`.
pub fn format_hour(hour: f64) -> String {
    format!("{}:00", hour.trunc() as i64)
}
