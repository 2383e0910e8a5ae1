use serde::Deserialize;

pub const DEFAULT_OPEN_HOUR: u8 = 9;
pub const DEFAULT_CLOSE_HOUR: u8 = 22;

/// Opening and closing hour, both inclusive.
///
/// `open > close` is accepted as-is and simply never reports open.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct StoreHours {
    pub open: u8,
    pub close: u8,
}

impl Default for StoreHours {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN_HOUR,
            close: DEFAULT_CLOSE_HOUR,
        }
    }
}

impl StoreHours {
    pub fn new(open: u8, close: u8) -> Self {
        Self { open, close }
    }

    pub fn is_open(&self, hour: u8) -> bool {
        hour >= self.open && hour <= self.close
    }

    pub fn open_label(&self) -> String {
        fmt_hour(self.open)
    }

    pub fn close_label(&self) -> String {
        fmt_hour(self.close)
    }
}

fn fmt_hour(hour: u8) -> String {
    format!("{}:00", hour)
}

/// Source of the current local hour (0-23).
pub trait Clock {
    fn current_hour(&self) -> u8;
}

/// Reads the browser's local time. Only callable on wasm32.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn current_hour(&self) -> u8 {
        js_sys::Date::new_0().get_hours() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u8);

impl Clock for FixedClock {
    fn current_hour(&self) -> u8 {
        self.0
    }
}
