pub mod brands;
pub mod detector;
pub mod features;
pub mod hostname;
pub mod normalization;
pub mod script;
pub mod skeleton;
pub mod trust;

pub use brands::{Brand, BrandRegistry};
pub use detector::{DetectionResult, HomographDetector, HostnameAnalysis};
pub use features::UrlFeatures;
pub use script::{ScriptClassifier, ScriptPresence};
pub use trust::TrustedDomains;
