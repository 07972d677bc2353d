use log::Level;

pub const BUSINESS_NAME: &str = "JF Plumbing & Heating";

/// Address every booking mailto link is addressed to.
pub const BOOKING_RECIPIENT: &str = "zacsq@icloud.com";

pub const BOOKING_SUCCESS_MESSAGE: &str = "Thank you! Your booking request has been prepared. Please send the email that opens to complete your booking.";

// Timings in milliseconds
pub const NOTIFICATION_VISIBLE_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const FORM_RESET_DELAY_MS: u32 = 2_000;

/// Height of the fixed navbar, kept clear above a scrolled-to section.
pub const HEADER_CLEARANCE: f64 = 80.0;
pub const NAVBAR_SHADOW_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
