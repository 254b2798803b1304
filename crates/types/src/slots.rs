/// Weekday labels in the default time-slot schema, in index order.
pub const WEEKDAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// Daily start times in the default schedule (35 slots = 5 days x 7 starts).
pub const DAILY_STARTS: [&str; 7] = [
    "07:30", "09:15", "11:15", "13:15", "15:15", "17:05", "18:45",
];

/// Number of slots in the default schedule.
pub const DEFAULT_NUM_SLOTS: usize = WEEKDAYS.len() * DAILY_STARTS.len();

/// `serde(default = ...)` helper for `RawInstance::num_slots`.
pub fn default_num_slots() -> usize {
    DEFAULT_NUM_SLOTS
}

/// Builds the default 35-slot label schema: `"<day> <hh:mm>"`, day-major order.
pub fn default_schedule() -> Vec<String> {
    WEEKDAYS
        .iter()
        .flat_map(|day| DAILY_STARTS.iter().map(move |start| format!("{day} {start}")))
        .collect()
}

/// Day index (`0..5`) for a slot index, given `slots_per_day = num_slots / 5`.
pub fn day_of(slot: usize, slots_per_day: usize) -> usize {
    slot / slots_per_day
}

/// Within-day index (`0..slots_per_day`) for a slot index.
pub fn hour_of(slot: usize, slots_per_day: usize) -> usize {
    slot % slots_per_day
}
