use log::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalyticsMode {
    /// Send through `window.gtag`.
    Gtag,
    /// Log to the browser console only.
    Console,
}

#[cfg(debug_assertions)]
pub fn analytics_mode() -> AnalyticsMode {
    AnalyticsMode::Console  // Local builds never ping GA
}

#[cfg(not(debug_assertions))]
pub fn analytics_mode() -> AnalyticsMode {
    AnalyticsMode::Gtag
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const SHOP_NAME: &str = "Orange Systemz";
pub const WHATSAPP_NUMBER: &str = "917736012315";
pub const PHONE_DISPLAY: &str = "+91-7736012315";
pub const EMAIL: &str = "orangesystemz.kochi@gmail.com";
pub const HOURS: &str = "Mon–Sat, 09:00 AM – 8:00 PM";
pub const ADDRESS_LINES: [&str; 2] = [
    "Anand arcade, Ground floor, S A Road",
    "Elamkulam Jn, Kochi, Kerala, India",
];

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m14!1m8!1m3!1d2778.6437988940356!2d76.3045454386296!3d9.967552250202589!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3b0873eae09bd73d%3A0xfa7c561bda017285!2sOrange%20Systemz!5e0!3m2!1sen!2sin!4v1764184091202!5m2!1sen!2sin";

pub const REVIEWS_SCRIPT_URL: &str = "https://elfsightcdn.com/platform.js";
pub const REVIEWS_APP_CLASS: &str = "elfsight-app-6f0e31d3-07d7-42cb-9a0c-52719d5e180a";

/// Chat link to the shop, optionally with a prefilled message.
pub fn whatsapp_url(message: Option<&str>) -> String {
    match message {
        Some(text) => format!(
            "https://wa.me/{}?text={}",
            WHATSAPP_NUMBER,
            urlencoding::encode(text)
        ),
        None => format!("https://wa.me/{}", WHATSAPP_NUMBER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_whatsapp_link() {
        assert_eq!(whatsapp_url(None), "https://wa.me/917736012315");
    }

    #[test]
    fn prefilled_whatsapp_link_is_encoded() {
        let url = whatsapp_url(Some("Hi, I'm looking for Home / Student Laptops (10K–20K range)."));
        assert_eq!(
            url,
            "https://wa.me/917736012315?text=Hi%2C%20I%27m%20looking%20for%20Home%20%2F%20Student%20Laptops%20%2810K%E2%80%9320K%20range%29."
        );
    }
}
