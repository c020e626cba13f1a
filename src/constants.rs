/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-rust-aqi-client/0.1.0";

/// Prediction backend base URL used when none is configured
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Path segments preceding the city in the prediction endpoint
pub const PREDICT_PATH: [&str; 2] = ["api", "predict"];

/// Prefix of every error shown on the page
pub const ERROR_PREFIX: &str = "无法获取预测结果";

/// Prefix of the city label in the result card
pub const CITY_LABEL_PREFIX: &str = "城市";

/// Theme colour for categories outside the lookup table
pub const DEFAULT_ACCENT_COLOR: &str = "var(--primary-color)";
