//! Blend shape naming convention detection.

use bitflags::bitflags;
use serde::Serialize;

const UNIFIED_EXPRESSIONS_SIGNATURES: &[&str] = &["MouthRaiserLower", "MouthRaiserLowerLeft"];
const ARKIT_SIGNATURES: &[&str] = &["mouthShrugLower"];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Convention {
    UnifiedExpressions,
    #[serde(rename = "arkit")]
    ARKit,
    Unknown,
}

bitflags! {
    /// Which convention signatures are present on a mesh.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct ConventionSignatures: u8 {
        const UNIFIED_EXPRESSIONS = 1 << 0;
        const ARKIT = 1 << 1;
    }
}

impl ConventionSignatures {
    pub fn detect<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut found = Self::empty();
        for name in names {
            if matches_any(name, UNIFIED_EXPRESSIONS_SIGNATURES) {
                found |= Self::UNIFIED_EXPRESSIONS;
            }
            if matches_any(name, ARKIT_SIGNATURES) {
                found |= Self::ARKIT;
            }
            if found.is_all() {
                break;
            }
        }
        found
    }

    /// Unified Expressions wins when both signatures are present.
    pub fn convention(self) -> Convention {
        if self.contains(Self::UNIFIED_EXPRESSIONS) {
            Convention::UnifiedExpressions
        } else if self.contains(Self::ARKIT) {
            Convention::ARKit
        } else {
            Convention::Unknown
        }
    }
}

fn matches_any(name: &str, signatures: &[&str]) -> bool {
    signatures.iter().any(|s| s.eq_ignore_ascii_case(name))
}

pub fn classify<'a>(names: impl IntoIterator<Item = &'a str>) -> Convention {
    ConventionSignatures::detect(names).convention()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unified_expressions_wins_ties() {
        assert_eq!(
            classify(["MouthRaiserLower", "mouthShrugLower"]),
            Convention::UnifiedExpressions
        );
        assert_eq!(
            classify(["mouthShrugLower", "MouthRaiserLowerLeft"]),
            Convention::UnifiedExpressions
        );
    }

    #[test]
    fn arkit_only() {
        assert_eq!(classify(["mouthShrugLower"]), Convention::ARKit);
    }

    #[test]
    fn unknown() {
        assert_eq!(classify(["SomeRandomShape"]), Convention::Unknown);
        assert_eq!(classify(std::iter::empty()), Convention::Unknown);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(classify(["MOUTHRAISERLOWERLEFT"]), Convention::UnifiedExpressions);
        assert_eq!(classify(["MouthShrugLower"]), Convention::ARKit);
    }

    #[test]
    fn deterministic() {
        let names = ["JawOpen", "mouthShrugLower", "EyeClosedLeft"];
        assert_eq!(classify(names), classify(names));
    }

    #[test]
    fn signatures_report_both() {
        let found = ConventionSignatures::detect(["mouthshruglower", "mouthraiserlower"]);
        assert!(found.is_all());
    }
}
