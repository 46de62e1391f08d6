use std::fmt;

use serde::Serialize;

use face_bind::{
    bind_expression_driver, bind_eye_linear_driver, build_bindings, AvatarExpression, Convention, DriverHost,
    ExpressionDriver, EyeLinearDriver, MeshBlendShapes, PassOutcome, SkipReason,
};

#[derive(Debug, Default)]
struct Drivers {
    eyes: EyeLinearDriver,
    expression: Option<ExpressionDriver>,
}

impl DriverHost for Drivers {
    fn eye_driver(&mut self) -> &mut EyeLinearDriver {
        &mut self.eyes
    }

    fn replace_expression_driver(&mut self) -> &mut ExpressionDriver {
        self.expression.insert(ExpressionDriver::new())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedBinding {
    pub expression: AvatarExpression,
    pub shape: Option<String>,
    #[serde(flatten)]
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Distinct non-null shape names, which can be fewer than the weight slots.
    pub named_shapes: usize,
    pub weight_slots: usize,
    pub convention: Convention,
    pub eye_pass: PassOutcome,
    pub expression_pass: PassOutcome,
    pub eyes: EyeLinearDriver,
    pub expressions: Option<ExpressionDriver>,
    pub skipped: Vec<SkippedBinding>,
}

impl Report {
    pub fn build(mesh: &MeshBlendShapes) -> Self {
        let mut drivers = Drivers::default();
        let eye_pass = bind_eye_linear_driver(mesh, &mut drivers);
        let expression_pass = bind_expression_driver(mesh, &mut drivers);

        let skipped = match expression_pass {
            PassOutcome::Bound { .. } => build_bindings(Convention::UnifiedExpressions)
                .iter()
                .filter_map(|binding| {
                    let reason = mesh.explain(&binding.shape).err()?;
                    Some(SkippedBinding {
                        expression: binding.expression,
                        shape: binding.shape.name().map(String::from),
                        reason,
                    })
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            named_shapes: mesh.index.len(),
            weight_slots: mesh.weight_slots,
            convention: mesh.convention(),
            eye_pass,
            expression_pass,
            eyes: drivers.eyes,
            expressions: drivers.expression,
            skipped,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "named shapes: {} ({} weight slots)", self.named_shapes, self.weight_slots)?;
        writeln!(f, "convention:   {:?}", self.convention)?;
        writeln!(f, "eye pass:     {:?}", self.eye_pass)?;
        for eye in &self.eyes.eyes {
            for (target, slot) in eye.linked() {
                writeln!(f, "  {:?} {:?} -> {}", eye.side, target, slot)?;
            }
        }
        writeln!(f, "expressions:  {:?}", self.expression_pass)?;
        if let Some(driver) = &self.expressions {
            for link in &driver.links {
                writeln!(f, "  {:?} -> {}", link.expression, link.slot)?;
            }
        }
        if !self.skipped.is_empty() {
            writeln!(f, "skipped:")?;
            for skipped in &self.skipped {
                match &skipped.shape {
                    Some(shape) => writeln!(f, "  {:?} ({}): {:?}", skipped.expression, shape, skipped.reason)?,
                    None => writeln!(f, "  {:?}: {:?}", skipped.expression, skipped.reason)?,
                }
            }
        }
        Ok(())
    }
}
