//! Radio Topics and Identity

/// External thermometer temperature, `f32` °C.
pub const TOPIC_THERMOMETER: &str = "thermometer/-/temperature";

/// Three-axis acceleration, `f32` g per axis.
pub const TOPIC_ACCELEROMETER: &str = "accelerometer/-/acceleration";

/// Magnetic switch opening count, `u32`.
pub const TOPIC_MAGNET_COUNT: &str = "magnet/-/count";

/// Push-button press count, `u16`.
pub const TOPIC_PUSH_BUTTON: &str = "push-button/-/event-count";

/// Name sent with the pairing request at startup.
pub const NODE_NAME: &str = "okim-bps-hugo";
