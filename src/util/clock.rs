//! Local wall-clock time of day.

use crate::state::transcript::TimeOfDay;

/// Current local time of day, used to stamp client-side messages.
pub fn now() -> TimeOfDay {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new_0();
        TimeOfDay::new(date.get_hours(), date.get_minutes(), date.get_seconds()).unwrap_or(TimeOfDay::MIDNIGHT)
    }
    #[cfg(not(feature = "csr"))]
    {
        // Native builds have no local timezone; report UTC.
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs() % 86_400);
        let secs = u32::try_from(secs).unwrap_or_default();
        TimeOfDay::new(secs / 3600, (secs / 60) % 60, secs % 60).unwrap_or(TimeOfDay::MIDNIGHT)
    }
}
