//! Copy for every section of the page. Nothing here changes at runtime.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Lavender,
    Aqua,
    Sky,
}

impl Accent {
    pub const fn hex(self) -> &'static str {
        match self {
            Accent::Lavender => "#b996dd",
            Accent::Aqua => "#a2e8f4",
            Accent::Sky => "#00BFFF",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Activity,
    Microscope,
    Zap,
    Brain,
    Shield,
    CheckCircle,
    Users,
    Lock,
}

impl Glyph {
    pub const fn symbol(self) -> &'static str {
        match self {
            Glyph::Activity => "📈",
            Glyph::Microscope => "🔬",
            Glyph::Zap => "⚡",
            Glyph::Brain => "🧠",
            Glyph::Shield => "🛡️",
            Glyph::CheckCircle => "✅",
            Glyph::Users => "👥",
            Glyph::Lock => "🔒",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Glyph::Activity => "activity",
            Glyph::Microscope => "microscope",
            Glyph::Zap => "lightning",
            Glyph::Brain => "brain",
            Glyph::Shield => "shield",
            Glyph::CheckCircle => "check",
            Glyph::Users => "people",
            Glyph::Lock => "lock",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    pub glyph: Glyph,
    pub accent: Accent,
}

impl Icon {
    const fn new(glyph: Glyph, accent: Accent) -> Self {
        Self { glyph, accent }
    }
}

/// Numbered gradient disc shown above each process step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepBadge {
    pub number: u8,
    pub from: Accent,
    pub to: Accent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplainerSlide {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub ordinal: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: StepBadge,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    /// Degrees in `[0, 360)`, clockwise from the positive x axis in screen space.
    pub angle: f64,
}

pub const EXPLAINER_SLIDES: [ExplainerSlide; 4] = [
    ExplainerSlide {
        title: "Every 6 minutes, someone in the U.S. is diagnosed with Parkinson's",
        description: "But diagnosis often comes too late, when 80% of dopamine neurons are already lost.",
        icon: Icon::new(Glyph::Activity, Accent::Lavender),
    },
    ExplainerSlide {
        title: "Existing tests rely on invasive or late-stage tools",
        description: "Spinal fluid taps, expensive MRIs, and subjective clinical assessments.",
        icon: Icon::new(Glyph::Microscope, Accent::Aqua),
    },
    ExplainerSlide {
        title: "Our solution: A nanoenzyme-based colorimetric test strip",
        description: "Powered by saliva, gold nanoparticles, and cutting-edge biomarker detection.",
        icon: Icon::new(Glyph::Zap, Accent::Sky),
    },
    ExplainerSlide {
        title: "Scan with an app. Detect early. Take control.",
        description: "AI-powered analysis delivers clinically validated results in minutes.",
        icon: Icon::new(Glyph::Brain, Accent::Lavender),
    },
];

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        ordinal: "01",
        title: "Collect Saliva",
        description: "Simple saliva collection with our specialized test strip",
        icon: StepBadge { number: 1, from: Accent::Lavender, to: Accent::Aqua },
    },
    ProcessStep {
        ordinal: "02",
        title: "Nanoparticle Reaction",
        description: "Gold nanoparticle aggregation triggered by Cu²⁺ biomarkers",
        icon: StepBadge { number: 2, from: Accent::Aqua, to: Accent::Sky },
    },
    ProcessStep {
        ordinal: "03",
        title: "AI-Powered Scan",
        description: "Scan strip with our computer vision app for instant analysis",
        icon: StepBadge { number: 3, from: Accent::Sky, to: Accent::Lavender },
    },
    ProcessStep {
        ordinal: "04",
        title: "Secure Results",
        description: "Instant, encrypted report with clinical-grade validation",
        icon: StepBadge { number: 4, from: Accent::Lavender, to: Accent::Aqua },
    },
];

pub const FEATURES: [FeatureCard; 6] = [
    FeatureCard {
        title: "Nanoparticle Science",
        description: "LSPR-enhanced multiplex testing with Cu²⁺-induced gold nanoparticle aggregation",
        icon: Icon::new(Glyph::Microscope, Accent::Lavender),
        angle: 0.0,
    },
    FeatureCard {
        title: "AI-Enhanced App",
        description: "Clinical-grade computer vision delivers instant, accurate results",
        icon: Icon::new(Glyph::Brain, Accent::Aqua),
        angle: 60.0,
    },
    FeatureCard {
        title: "FDA-Pending Safety",
        description: "Physician-prescribed and backed by UC Irvine clinicians",
        icon: Icon::new(Glyph::Shield, Accent::Sky),
        angle: 120.0,
    },
    FeatureCard {
        title: "Saliva-Based Simplicity",
        description: "Non-invasive and frictionless, no more MRIs or CSF tests",
        icon: Icon::new(Glyph::CheckCircle, Accent::Lavender),
        angle: 180.0,
    },
    FeatureCard {
        title: "Built for Access",
        description: "Designed to make Parkinson's testing simple and comfortable",
        icon: Icon::new(Glyph::Users, Accent::Aqua),
        angle: 240.0,
    },
    FeatureCard {
        title: "Data You Control",
        description: "All results are encrypted, private, and shareable with your physician",
        icon: Icon::new(Glyph::Lock, Accent::Sky),
        angle: 300.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_angles_are_distinct_and_evenly_spaced() {
        for (i, feature) in FEATURES.iter().enumerate() {
            assert!((0.0..360.0).contains(&feature.angle), "{} out of range", feature.title);
            assert_eq!(feature.angle, i as f64 * 60.0);
        }
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.ordinal, format!("{:02}", i + 1));
            assert_eq!(step.icon.number as usize, i + 1);
        }
    }

    #[test]
    fn every_entry_has_copy() {
        let slides = EXPLAINER_SLIDES.iter().map(|s| (s.title, s.description));
        let steps = PROCESS_STEPS.iter().map(|s| (s.title, s.description));
        let features = FEATURES.iter().map(|f| (f.title, f.description));
        for (title, description) in slides.chain(steps).chain(features) {
            assert!(!title.is_empty());
            assert!(!description.is_empty());
        }
    }

    #[test]
    fn accents_are_css_hex() {
        for accent in [Accent::Lavender, Accent::Aqua, Accent::Sky] {
            let hex = accent.hex();
            assert!(hex.starts_with('#') && hex.len() == 7, "{hex}");
        }
    }
}
