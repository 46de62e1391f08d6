use serde::Serialize;

/// Convention-independent facial channels a face tracker drives.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub enum AvatarExpression {
    Smile,
    SmileLeft,
    SmileRight,
    SmileClosed,
    SmileClosedLeft,
    SmileClosedRight,
    Grin,
    GrinLeft,
    GrinRight,
    SmirkLeft,
    SmirkRight,
    Frown,
    FrownLeft,
    FrownRight,
    Angry,
    MouthDimple,
    MouthDimpleLeft,
    MouthDimpleRight,
    TongueOut,
    TongueRaise,
    TongueExtend,
    TongueLeft,
    TongueRight,
    TongueDown,
    TongueUp,
    TongueRoll,
    TongueHorizontal,
    TongueVertical,
    TongueUpLeft,
    TongueUpRight,
    TongueDownLeft,
    TongueDownRight,
    CheekPuff,
    CheekPuffLeft,
    CheekPuffRight,
    CheekSuck,
    CheekSuckLeft,
    CheekSuckRight,
    CheekRaise,
    CheekRaiseLeft,
    CheekRaiseRight,
    LipRaiseUpper,
    LipRaiseUpperLeft,
    LipRaiseUpperRight,
    LipRaiseLower,
    LipRaiseLowerLeft,
    LipRaiseLowerRight,
    LipMoveLeftUpper,
    LipMoveRightUpper,
    LipMoveLeftLower,
    LipMoveRightLower,
    LipMoveHorizontalUpper,
    LipMoveHorizontalLower,
    LipTopOverturn,
    LipTopLeftOverturn,
    LipTopRightOverturn,
    LipBottomOverturn,
    LipBottomLeftOverturn,
    LipBottomRightOverturn,
    LipOverlayUpper,
    LipOverlayUpperLeft,
    LipOverlayUpperRight,
    LipUnderlayUpper,
    LipUnderlayUpperLeft,
    LipUnderlayUpperRight,
    LipOverlayLower,
    LipOverlayLowerLeft,
    LipOverlayLowerRight,
    LipUnderlayLower,
    LipUnderlayLowerLeft,
    LipUnderlayLowerRight,
    LipStretch,
    LipStretchLeft,
    LipStretchRight,
    LipTighten,
    LipTightenLeft,
    LipTightenRight,
    LipsPress,
    LipsPressLeft,
    LipsPressRight,
    JawLeft,
    JawRight,
    JawHorizontal,
    JawForward,
    JawDown,
    JawOpen,
    Pout,
    PoutLeft,
    PoutRight,
    NoseWrinkle,
    NoseWrinkleLeft,
    NoseWrinkleRight,
    ChinRaise,
    ChinRaiseBottom,
    ChinRaiseTop,
}

/// Per-eye weight destinations on an eye driver entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EyeTarget {
    OpenClose,
    Widen,
    Squeeze,
    Frown,
    LookUp,
    LookDown,
}

impl EyeTarget {
    pub const ALL: [EyeTarget; 6] = [
        EyeTarget::OpenClose,
        EyeTarget::Widen,
        EyeTarget::Squeeze,
        EyeTarget::Frown,
        EyeTarget::LookUp,
        EyeTarget::LookDown,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            EyeTarget::OpenClose => 0,
            EyeTarget::Widen => 1,
            EyeTarget::Squeeze => 2,
            EyeTarget::Frown => 3,
            EyeTarget::LookUp => 4,
            EyeTarget::LookDown => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_target_indices_are_dense() {
        for (i, target) in EyeTarget::ALL.iter().enumerate() {
            assert_eq!(target.index(), i);
        }
    }
}
