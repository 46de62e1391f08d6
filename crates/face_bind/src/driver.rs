//! Driver state the passes write into.
//!
//! Hosts own these values (as components, fields, ...) and hand them to the
//! passes through [`DriverHost`](crate::DriverHost).

use serde::Serialize;

use crate::expression::{AvatarExpression, EyeTarget};
use crate::vocabulary::Side;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LinkRange {
    pub min: f32,
    pub max: f32,
}

impl LinkRange {
    pub const UNIT: LinkRange = LinkRange { min: 0.0, max: 1.0 };
}

impl Default for LinkRange {
    fn default() -> Self {
        Self::UNIT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionLink {
    pub expression: AvatarExpression,
    pub slot: usize,
    pub range: LinkRange,
    pub volume_suppression: f32,
}

/// Expression channel to weight slot links for one mesh.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExpressionDriver {
    pub links: Vec<ExpressionLink>,
}

impl ExpressionDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link. Links for the same expression accumulate.
    pub fn force_link(&mut self, slot: usize, expression: AvatarExpression, range: LinkRange) -> &mut ExpressionLink {
        self.links.push(ExpressionLink {
            expression,
            slot,
            range,
            volume_suppression: 0.0,
        });
        let last = self.links.len() - 1;
        &mut self.links[last]
    }

    pub fn links_for(&self, expression: AvatarExpression) -> impl Iterator<Item = &ExpressionLink> {
        self.links.iter().filter(move |l| l.expression == expression)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EyeEntry {
    pub side: Side,
    targets: [Option<usize>; EyeTarget::ALL.len()],
}

impl EyeEntry {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            targets: [None; EyeTarget::ALL.len()],
        }
    }

    pub fn force_link(&mut self, target: EyeTarget, slot: usize) {
        self.targets[target.index()] = Some(slot);
    }

    pub fn target(&self, target: EyeTarget) -> Option<usize> {
        self.targets[target.index()]
    }

    pub fn linked(&self) -> impl Iterator<Item = (EyeTarget, usize)> + '_ {
        EyeTarget::ALL
            .into_iter()
            .filter_map(|t| self.target(t).map(|slot| (t, slot)))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EyeLinearDriver {
    pub eyes: Vec<EyeEntry>,
}

impl EyeLinearDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates one left and one right eye when there are none yet.
    /// Existing entries are kept as they are.
    pub fn ensure_eye_entries(&mut self) {
        if self.eyes.is_empty() {
            self.eyes.extend(Side::BOTH.map(EyeEntry::new));
        }
    }
}
