use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// How a region's name expands into concrete blend shape names.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConventionElementKind {
    /// Has `Left`/`Right` variants as well as a shared centered name.
    CombinedAndSided,
    /// A single centered name.
    Dedicated,
    /// `Left`/`Right` variants only.
    Sided,
}

/// A facial region as named by one convention.
///
/// The accessors never consult `kind`; it is carried for consumers that want
/// to know which of the derived names the convention actually defines.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CanonicalElement {
    pub prefix: &'static str,
    pub kind: ConventionElementKind,
    pub is_blended: bool,
}

impl CanonicalElement {
    pub const fn new(prefix: &'static str, kind: ConventionElementKind) -> Self {
        Self {
            prefix,
            kind,
            is_blended: false,
        }
    }

    pub const fn blended(prefix: &'static str, kind: ConventionElementKind) -> Self {
        Self {
            prefix,
            kind,
            is_blended: true,
        }
    }

    pub fn left(&self) -> String {
        format!("{}Left", self.prefix)
    }

    pub fn right(&self) -> String {
        format!("{}Right", self.prefix)
    }

    pub fn center(&self) -> &'static str {
        self.prefix
    }

    pub fn sided(&self, side: Side) -> String {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }
}

/// The Unified Expressions blend shape vocabulary.
///
/// See <https://docs.vrcft.io/docs/tutorial-avatars/tutorial-avatars-extras/unified-blendshapes>.
/// Some of the kinds below may not match the published reference exactly.
pub mod unified {
    use super::CanonicalElement;
    use super::ConventionElementKind::{CombinedAndSided, Dedicated, Sided};

    pub const EYE_LOOK_UP: CanonicalElement = CanonicalElement::new("EyeLookUp", CombinedAndSided);
    pub const EYE_LOOK_DOWN: CanonicalElement = CanonicalElement::new("EyeLookDown", CombinedAndSided);
    pub const EYE_LOOK_IN: CanonicalElement = CanonicalElement::new("EyeLookIn", CombinedAndSided);
    pub const EYE_LOOK_OUT: CanonicalElement = CanonicalElement::new("EyeLookOut", CombinedAndSided);
    pub const EYE_CLOSED: CanonicalElement = CanonicalElement::new("EyeClosed", CombinedAndSided);
    pub const EYE_SQUINT: CanonicalElement = CanonicalElement::new("EyeSquint", CombinedAndSided);
    pub const EYE_WIDE: CanonicalElement = CanonicalElement::new("EyeWide", CombinedAndSided);
    pub const EYE_DILATION: CanonicalElement = CanonicalElement::new("EyeDilation", CombinedAndSided);
    pub const EYE_CONSTRICT: CanonicalElement = CanonicalElement::new("EyeConstrict", CombinedAndSided);
    pub const BROW_DOWN: CanonicalElement = CanonicalElement::blended("BrowDown", CombinedAndSided);
    pub const BROW_INNER_UP: CanonicalElement = CanonicalElement::new("BrowInnerUp", CombinedAndSided);
    pub const BROW_OUTER_UP: CanonicalElement = CanonicalElement::new("BrowOuterUp", CombinedAndSided);
    pub const NOSE_SNEER: CanonicalElement = CanonicalElement::new("NoseSneer", CombinedAndSided);
    pub const CHEEK_SQUINT: CanonicalElement = CanonicalElement::new("CheekSquint", CombinedAndSided);
    pub const CHEEK_PUFF: CanonicalElement = CanonicalElement::new("CheekPuff", CombinedAndSided);
    pub const CHEEK_SUCK: CanonicalElement = CanonicalElement::new("CheekSuck", CombinedAndSided);
    pub const JAW_OPEN: CanonicalElement = CanonicalElement::new("JawOpen", Dedicated);
    pub const MOUTH_CLOSED: CanonicalElement = CanonicalElement::new("MouthClosed", Dedicated);
    pub const JAW: CanonicalElement = CanonicalElement::new("Jaw", Sided);
    pub const JAW_FORWARD: CanonicalElement = CanonicalElement::new("JawForward", Dedicated);
    pub const LIP_SUCK_UPPER: CanonicalElement = CanonicalElement::new("LipSuckUpper", CombinedAndSided);
    pub const LIP_SUCK_LOWER: CanonicalElement = CanonicalElement::new("LipSuckLower", CombinedAndSided);
    pub const LIP_FUNNEL: CanonicalElement = CanonicalElement::new("LipFunnel", Dedicated);
    pub const LIP_FUNNEL_UPPER: CanonicalElement = CanonicalElement::new("LipFunnelUpper", CombinedAndSided);
    pub const LIP_FUNNEL_LOWER: CanonicalElement = CanonicalElement::new("LipFunnelLower", CombinedAndSided);
    pub const LIP_PUCKER: CanonicalElement = CanonicalElement::blended("LipPucker", CombinedAndSided);
    pub const MOUTH_UPPER_UP: CanonicalElement = CanonicalElement::new("MouthUpperUp", CombinedAndSided);
    pub const MOUTH_LOWER_DOWN: CanonicalElement = CanonicalElement::new("MouthLowerDown", CombinedAndSided);
    pub const MOUTH: CanonicalElement = CanonicalElement::blended("Mouth", Sided);
    pub const MOUTH_UPPER: CanonicalElement = CanonicalElement::new("MouthUpper", CombinedAndSided);
    pub const MOUTH_LOWER: CanonicalElement = CanonicalElement::new("MouthLower", CombinedAndSided);
    pub const MOUTH_FROWN: CanonicalElement = CanonicalElement::new("MouthFrown", CombinedAndSided);
    pub const MOUTH_SMILE: CanonicalElement = CanonicalElement::blended("MouthSmile", CombinedAndSided);
    pub const MOUTH_STRETCH: CanonicalElement = CanonicalElement::new("MouthStretch", CombinedAndSided);
    pub const MOUTH_DIMPLE: CanonicalElement = CanonicalElement::new("MouthDimple", CombinedAndSided);
    pub const MOUTH_RAISER_UPPER: CanonicalElement = CanonicalElement::new("MouthRaiserUpper", Dedicated);
    pub const MOUTH_RAISER_LOWER: CanonicalElement = CanonicalElement::new("MouthRaiserLower", Dedicated);
    pub const MOUTH_PRESS: CanonicalElement = CanonicalElement::new("MouthPress", CombinedAndSided);
    pub const MOUTH_TIGHTENER: CanonicalElement = CanonicalElement::new("MouthTightener", CombinedAndSided);
    pub const TONGUE_OUT: CanonicalElement = CanonicalElement::new("TongueOut", Dedicated);
    pub const TONGUE_UP: CanonicalElement = CanonicalElement::new("TongueUp", Dedicated);
    pub const TONGUE_DOWN: CanonicalElement = CanonicalElement::new("TongueDown", Dedicated);
    pub const TONGUE_LEFT: CanonicalElement = CanonicalElement::new("TongueLeft", Dedicated);
    pub const TONGUE_RIGHT: CanonicalElement = CanonicalElement::new("TongueRight", Dedicated);

    pub static ALL: &[CanonicalElement] = &[
        EYE_LOOK_UP,
        EYE_LOOK_DOWN,
        EYE_LOOK_IN,
        EYE_LOOK_OUT,
        EYE_CLOSED,
        EYE_SQUINT,
        EYE_WIDE,
        EYE_DILATION,
        EYE_CONSTRICT,
        BROW_DOWN,
        BROW_INNER_UP,
        BROW_OUTER_UP,
        NOSE_SNEER,
        CHEEK_SQUINT,
        CHEEK_PUFF,
        CHEEK_SUCK,
        JAW_OPEN,
        MOUTH_CLOSED,
        JAW,
        JAW_FORWARD,
        LIP_SUCK_UPPER,
        LIP_SUCK_LOWER,
        LIP_FUNNEL,
        LIP_FUNNEL_UPPER,
        LIP_FUNNEL_LOWER,
        LIP_PUCKER,
        MOUTH_UPPER_UP,
        MOUTH_LOWER_DOWN,
        MOUTH,
        MOUTH_UPPER,
        MOUTH_LOWER,
        MOUTH_FROWN,
        MOUTH_SMILE,
        MOUTH_STRETCH,
        MOUTH_DIMPLE,
        MOUTH_RAISER_UPPER,
        MOUTH_RAISER_LOWER,
        MOUTH_PRESS,
        MOUTH_TIGHTENER,
        TONGUE_OUT,
        TONGUE_UP,
        TONGUE_DOWN,
        TONGUE_LEFT,
        TONGUE_RIGHT,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_names() {
        assert_eq!(unified::BROW_DOWN.left(), "BrowDownLeft");
        assert_eq!(unified::BROW_DOWN.right(), "BrowDownRight");
        assert_eq!(unified::JAW_OPEN.center(), "JawOpen");
        assert_eq!(unified::JAW.sided(Side::Right), "JawRight");
    }

    #[test]
    fn prefixes_are_unique() {
        let mut prefixes: Vec<_> = unified::ALL.iter().map(|e| e.prefix).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), unified::ALL.len());
    }
}
