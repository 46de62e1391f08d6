//! Canonical channel to blend shape binding tables.

use std::borrow::Cow;

use crate::classify::Convention;
use crate::expression::{AvatarExpression, EyeTarget};
use crate::vocabulary::unified::*;
use crate::vocabulary::{CanonicalElement, Side};

use AvatarExpression as X;
use ShapeRef::{Ignore, Todo, Unavailable};

/// A concrete blend shape name, held as its element and side so tables can be
/// built at compile time. `side: None` is the element's centered name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ShapeName {
    pub element: CanonicalElement,
    pub side: Option<Side>,
}

impl ShapeName {
    pub fn name(&self) -> Cow<'static, str> {
        match self.side {
            Some(side) => Cow::Owned(self.element.sided(side)),
            None => Cow::Borrowed(self.element.center()),
        }
    }
}

/// The value side of a binding: either a real blend shape or a reason there
/// is none.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ShapeRef {
    Shape(ShapeName),
    /// The channel has no meaningful analog in the convention.
    Ignore,
    /// The correct mapping is not known yet.
    Todo,
    /// The convention cannot express the channel at all.
    Unavailable,
}

impl ShapeRef {
    pub const fn left(element: CanonicalElement) -> Self {
        Self::sided(element, Side::Left)
    }

    pub const fn right(element: CanonicalElement) -> Self {
        Self::sided(element, Side::Right)
    }

    pub const fn sided(element: CanonicalElement, side: Side) -> Self {
        Self::Shape(ShapeName {
            element,
            side: Some(side),
        })
    }

    pub const fn center(element: CanonicalElement) -> Self {
        Self::Shape(ShapeName {
            element,
            side: None,
        })
    }

    pub fn name(&self) -> Option<Cow<'static, str>> {
        match self {
            Self::Shape(shape) => Some(shape.name()),
            Self::Ignore | Self::Todo | Self::Unavailable => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Binding {
    pub expression: AvatarExpression,
    pub shape: ShapeRef,
}

impl Binding {
    pub const fn new(expression: AvatarExpression, shape: ShapeRef) -> Self {
        Self { expression, shape }
    }
}

/// Binds one eye driver target to the element whose side matches the eye.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EyeBinding {
    pub target: EyeTarget,
    pub element: CanonicalElement,
}

/// The eye driver bindings. These are keyed to Unified Expressions names.
pub static EYE_BINDINGS: &[EyeBinding] = &[
    EyeBinding { target: EyeTarget::OpenClose, element: EYE_CLOSED },
    EyeBinding { target: EyeTarget::Widen, element: EYE_WIDE },
    // Squint is not a 1:1 match for squeeze.
    EyeBinding { target: EyeTarget::Squeeze, element: EYE_SQUINT },
    EyeBinding { target: EyeTarget::Frown, element: BROW_OUTER_UP },
    EyeBinding { target: EyeTarget::LookUp, element: EYE_LOOK_UP },
    EyeBinding { target: EyeTarget::LookDown, element: EYE_LOOK_DOWN },
];

/// Returns the ordered binding table for `convention`.
///
/// A channel may appear more than once; every entry is resolved on its own.
/// ARKit is detected but has no bindings yet, and `Unknown` has none by
/// definition.
pub fn build_bindings(convention: Convention) -> &'static [Binding] {
    match convention {
        Convention::UnifiedExpressions => UNIFIED_EXPRESSION_BINDINGS,
        Convention::ARKit | Convention::Unknown => &[],
    }
}

const fn bind(expression: AvatarExpression, shape: ShapeRef) -> Binding {
    Binding::new(expression, shape)
}

static UNIFIED_EXPRESSION_BINDINGS: &[Binding] = &[
    // Eyebrows
    bind(X::FrownLeft, ShapeRef::left(BROW_DOWN)),
    bind(X::FrownLeft, ShapeRef::left(BROW_INNER_UP)),
    bind(X::FrownRight, ShapeRef::right(BROW_DOWN)),
    bind(X::FrownRight, ShapeRef::right(BROW_INNER_UP)),
    // Mouth
    bind(X::Smile, Ignore),
    bind(X::SmileLeft, ShapeRef::left(MOUTH_SMILE)),
    bind(X::SmileRight, ShapeRef::right(MOUTH_SMILE)),
    bind(X::SmirkLeft, ShapeRef::left(MOUTH)),
    bind(X::SmirkRight, ShapeRef::right(MOUTH)),
    bind(X::Frown, Ignore),
    bind(X::FrownLeft, ShapeRef::left(MOUTH_FROWN)),
    bind(X::FrownRight, ShapeRef::right(MOUTH_FROWN)),
    bind(X::MouthDimple, Ignore),
    bind(X::MouthDimpleLeft, ShapeRef::left(MOUTH_DIMPLE)),
    bind(X::MouthDimpleRight, ShapeRef::right(MOUTH_DIMPLE)),
    // Tongue
    bind(X::TongueOut, ShapeRef::center(TONGUE_OUT)),
    bind(X::TongueRaise, Ignore),
    bind(X::TongueExtend, Ignore),
    bind(X::TongueLeft, ShapeRef::center(TONGUE_LEFT)),
    bind(X::TongueRight, ShapeRef::center(TONGUE_RIGHT)),
    bind(X::TongueDown, ShapeRef::center(TONGUE_DOWN)),
    bind(X::TongueUp, ShapeRef::center(TONGUE_UP)),
    bind(X::TongueRoll, Todo),
    bind(X::TongueHorizontal, Todo),
    bind(X::TongueVertical, Todo),
    bind(X::TongueUpLeft, Unavailable),
    bind(X::TongueUpRight, Unavailable),
    bind(X::TongueDownLeft, Unavailable),
    bind(X::TongueDownRight, Unavailable),
    bind(X::SmileClosed, Todo),
    bind(X::SmileClosedLeft, Todo),
    bind(X::SmileClosedRight, Todo),
    bind(X::Grin, Todo),
    bind(X::GrinLeft, Todo),
    bind(X::GrinRight, Todo),
    bind(X::Angry, Todo),
    // Cheeks
    bind(X::CheekPuffLeft, ShapeRef::left(CHEEK_PUFF)),
    bind(X::CheekPuffRight, ShapeRef::right(CHEEK_PUFF)),
    bind(X::CheekPuff, Ignore),
    bind(X::CheekSuckLeft, ShapeRef::left(CHEEK_SUCK)),
    bind(X::CheekSuckRight, ShapeRef::right(CHEEK_SUCK)),
    bind(X::CheekSuck, Ignore),
    bind(X::CheekRaiseLeft, ShapeRef::left(CHEEK_SQUINT)),
    bind(X::CheekRaiseRight, ShapeRef::right(CHEEK_SQUINT)),
    bind(X::CheekRaise, Todo),
    // Lips
    bind(X::LipRaiseUpperLeft, ShapeRef::left(MOUTH_RAISER_UPPER)),
    bind(X::LipRaiseUpperRight, ShapeRef::right(MOUTH_RAISER_UPPER)),
    bind(X::LipRaiseLowerLeft, ShapeRef::left(MOUTH_RAISER_LOWER)),
    bind(X::LipRaiseLowerRight, ShapeRef::right(MOUTH_RAISER_LOWER)),
    bind(X::LipRaiseUpper, ShapeRef::left(MOUTH_UPPER)),
    bind(X::LipRaiseUpper, ShapeRef::right(MOUTH_UPPER)),
    bind(X::LipRaiseLower, ShapeRef::left(MOUTH_LOWER)),
    bind(X::LipRaiseLower, ShapeRef::right(MOUTH_LOWER)),
    bind(X::LipMoveLeftUpper, Todo),
    bind(X::LipMoveRightUpper, Todo),
    bind(X::LipMoveLeftLower, Todo),
    bind(X::LipMoveRightLower, Todo),
    bind(X::LipMoveHorizontalUpper, Todo),
    bind(X::LipMoveHorizontalLower, Todo),
    bind(X::LipTopLeftOverturn, Todo),
    bind(X::LipTopRightOverturn, Todo),
    bind(X::LipTopOverturn, Todo),
    bind(X::LipBottomLeftOverturn, Todo),
    bind(X::LipBottomRightOverturn, Todo),
    bind(X::LipBottomOverturn, Todo),
    bind(X::LipOverlayUpper, Todo),
    bind(X::LipOverlayUpperLeft, Todo),
    bind(X::LipOverlayUpperRight, Todo),
    bind(X::LipUnderlayUpper, Todo),
    bind(X::LipUnderlayUpperLeft, Todo),
    bind(X::LipUnderlayUpperRight, Todo),
    bind(X::LipOverlayLower, Todo),
    bind(X::LipOverlayLowerLeft, Todo),
    bind(X::LipOverlayLowerRight, Todo),
    bind(X::LipUnderlayLower, Todo),
    bind(X::LipUnderlayLowerLeft, Todo),
    bind(X::LipUnderlayLowerRight, Todo),
    bind(X::LipStretch, Ignore),
    bind(X::LipStretchLeft, ShapeRef::left(MOUTH_STRETCH)),
    bind(X::LipStretchRight, ShapeRef::right(MOUTH_STRETCH)),
    bind(X::LipTighten, Ignore),
    bind(X::LipTightenLeft, ShapeRef::left(MOUTH_TIGHTENER)),
    bind(X::LipTightenRight, ShapeRef::right(MOUTH_TIGHTENER)),
    bind(X::LipsPress, Ignore),
    bind(X::LipsPressLeft, ShapeRef::left(MOUTH_PRESS)),
    bind(X::LipsPressRight, ShapeRef::right(MOUTH_PRESS)),
    // Jaw
    bind(X::JawLeft, ShapeRef::left(JAW)),
    bind(X::JawRight, ShapeRef::right(JAW)),
    bind(X::JawHorizontal, Todo),
    bind(X::JawForward, ShapeRef::center(JAW_FORWARD)),
    // MouthClosed is not the inverse of JawDown.
    bind(X::JawDown, Todo),
    bind(X::JawOpen, ShapeRef::center(JAW_OPEN)),
    // Pout drives both funnel shapes on each side.
    bind(X::Pout, Ignore),
    bind(X::PoutLeft, ShapeRef::left(LIP_FUNNEL_UPPER)),
    bind(X::PoutLeft, ShapeRef::left(LIP_FUNNEL_LOWER)),
    bind(X::PoutRight, ShapeRef::right(LIP_FUNNEL_UPPER)),
    bind(X::PoutRight, ShapeRef::right(LIP_FUNNEL_LOWER)),
    // Nose and chin
    bind(X::NoseWrinkle, Todo),
    bind(X::NoseWrinkleLeft, ShapeRef::left(NOSE_SNEER)),
    bind(X::NoseWrinkleRight, ShapeRef::right(NOSE_SNEER)),
    bind(X::ChinRaise, Todo),
    bind(X::ChinRaiseBottom, Todo),
    bind(X::ChinRaiseTop, Todo),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn shapes_for(expression: AvatarExpression) -> Vec<ShapeRef> {
        build_bindings(Convention::UnifiedExpressions)
            .iter()
            .filter(|b| b.expression == expression)
            .map(|b| b.shape)
            .collect()
    }

    #[test]
    fn arkit_and_unknown_have_no_bindings() {
        assert!(build_bindings(Convention::ARKit).is_empty());
        assert!(build_bindings(Convention::Unknown).is_empty());
    }

    #[test]
    fn table_is_stable() {
        let a = build_bindings(Convention::UnifiedExpressions);
        let b = build_bindings(Convention::UnifiedExpressions);
        assert_eq!(a, b);
        assert_eq!(a[0], bind(X::FrownLeft, ShapeRef::left(BROW_DOWN)));
    }

    #[test]
    fn frown_fans_out_to_brows_and_mouth() {
        let names: Vec<_> = shapes_for(X::FrownLeft)
            .iter()
            .filter_map(|s| s.name())
            .collect();
        assert_eq!(names, ["BrowDownLeft", "BrowInnerUpLeft", "MouthFrownLeft"]);
    }

    #[test]
    fn pout_sides_fan_out_to_both_funnels() {
        let left: Vec<_> = shapes_for(X::PoutLeft).iter().filter_map(|s| s.name()).collect();
        let right: Vec<_> = shapes_for(X::PoutRight).iter().filter_map(|s| s.name()).collect();
        assert_eq!(left, ["LipFunnelUpperLeft", "LipFunnelLowerLeft"]);
        assert_eq!(right, ["LipFunnelUpperRight", "LipFunnelLowerRight"]);
        assert_eq!(shapes_for(X::Pout), [Ignore]);
    }

    #[test]
    fn diagonal_tongue_is_unavailable() {
        for expression in [X::TongueUpLeft, X::TongueUpRight, X::TongueDownLeft, X::TongueDownRight] {
            assert_eq!(shapes_for(expression), [Unavailable]);
        }
    }

    #[test]
    fn centered_names_have_no_side_suffix() {
        assert_eq!(shapes_for(X::JawOpen)[0].name().as_deref(), Some("JawOpen"));
        assert_eq!(shapes_for(X::TongueOut)[0].name().as_deref(), Some("TongueOut"));
    }

    #[test]
    fn sentinels_have_no_name() {
        for shape in [Ignore, Todo, Unavailable] {
            assert!(shape.name().is_none());
        }
    }
}
