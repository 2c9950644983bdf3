use log::Level;

pub const BRAND_NAME: &str = "SynTest Labs";
pub const LOGO_SRC: &str = "syn_test_icon.png";
pub const CONTACT_EMAIL: &str = "founders@syntestlabs.com";
pub const LOCATION: &str = "Pasadena, CA";

/// Remote descriptor for the hero's 3-D brain scene.
pub const SCENE_URL: &str = "https://prod.spline.design/Ikm87wzLZK9UVmer/scene.splinecode";

/// Share of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// How long the waitlist confirmation stays up before the form comes back.
pub const WAITLIST_RESET_MS: u32 = 3_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_threshold_is_a_ratio() {
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    }

    #[test]
    fn confirmation_stays_up_for_three_seconds() {
        assert_eq!(WAITLIST_RESET_MS, 3_000);
    }

    #[test]
    fn debug_builds_log_verbosely() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
