
/// Base URL of the listing backend
pub const API_BASE_URL: &str = "http://localhost:3000";


macro_rules! api_uri {
    ($e:expr) => (format!("{}/{}", $crate::settings::API_BASE_URL, $e));
    ($fmt:literal $(, $e:expr)*) => (format!(concat!("{}/", $fmt), $crate::settings::API_BASE_URL $(, $e)*));
}
