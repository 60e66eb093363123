use tracing::{debug, info};

use crate::color::Color;
use crate::config::DeriveConfig;
use crate::error::AccentError;
use crate::pipeline::contrast::{check_hover, validate, ContrastCheck};
use crate::pipeline::derive::Variants;

/// Controller states. `Finalized` and `Blocked` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Checking,
    Repairing,
    Finalized,
    Blocked,
}

/// Result of the hover repair loop.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverRepair {
    pub hover: Color,
    pub check: ContrastCheck,
    /// Oklch lightness of the hover before repair and after each iteration.
    pub lightness_trace: Vec<f32>,
}

impl HoverRepair {
    /// Number of darkening iterations performed.
    pub fn steps(&self) -> usize {
        self.lightness_trace.len().saturating_sub(1)
    }
}

/// A finalized run: variants with the repaired hover, plus all checks.
#[derive(Debug, Clone, PartialEq)]
pub struct GateOutcome {
    pub variants: Variants,
    pub checks: [ContrastCheck; 3],
    pub repair: HoverRepair,
    pub forced: bool,
}

/// Darken `hover` in fixed Oklch steps until it clears the light canvas.
///
/// Every iteration must strictly lower lightness; the loop ends with
/// [`AccentError::RepairExhausted`] once it reaches `max_repair_steps` or the
/// lightness floor without passing.
pub fn repair_hover(hover: Color, config: &DeriveConfig) -> Result<HoverRepair, AccentError> {
    let mut current = hover;
    let mut check = check_hover(current, config);
    let mut lightness = current.lightness();
    let mut lightness_trace = vec![lightness];
    let mut best_ratio = check.ratio;

    while !check.passes {
        let steps = lightness_trace.len() - 1;
        if steps >= config.max_repair_steps {
            return Err(AccentError::RepairExhausted {
                steps,
                best_ratio,
                minimum: check.minimum,
                failures: Vec::new(),
            });
        }

        let next = current.adjust_lightness(-config.repair_step);
        let next_lightness = next.lightness();
        if next_lightness >= lightness {
            return Err(AccentError::RepairExhausted {
                steps,
                best_ratio,
                minimum: check.minimum,
                failures: Vec::new(),
            });
        }

        current = next;
        lightness = next_lightness;
        check = check_hover(current, config);
        best_ratio = best_ratio.max(check.ratio);
        lightness_trace.push(lightness);
        debug!(
            step = steps + 1,
            hover = %current,
            lightness,
            ratio = check.ratio,
            "darkened hover"
        );
    }

    Ok(HoverRepair {
        hover: current,
        check,
        lightness_trace,
    })
}

/// Decide whether a set of reported checks may be emitted.
///
/// Returns the failing checks when blocked.
pub fn gate(checks: &[ContrastCheck], force: bool) -> Result<GateState, Vec<ContrastCheck>> {
    let failures: Vec<ContrastCheck> = checks.iter().filter(|c| !c.passes).copied().collect();
    if failures.is_empty() || force {
        Ok(GateState::Finalized)
    } else {
        Err(failures)
    }
}

/// Drive the controller from `Checking` to a terminal state.
///
/// The hover check only routes into `Repairing`; once repaired, hover is left
/// out of the failures that can block. An exhausted repair ends the run before
/// the gate, so it carries the failing reported checks itself, forced or not.
pub fn run(
    mut variants: Variants,
    config: &DeriveConfig,
    force: bool,
) -> Result<GateOutcome, AccentError> {
    let mut state = GateState::Checking;
    let mut checks = validate(&variants, config);
    let mut repair: Option<HoverRepair> = None;

    loop {
        state = match state {
            GateState::Checking => {
                if repair.is_none() && !check_hover(variants.hover, config).passes {
                    GateState::Repairing
                } else {
                    gate(&checks, force).unwrap_or(GateState::Blocked)
                }
            }
            GateState::Repairing => {
                let repaired = repair_hover(variants.hover, config).map_err(|err| match err {
                    AccentError::RepairExhausted {
                        steps,
                        best_ratio,
                        minimum,
                        ..
                    } => AccentError::RepairExhausted {
                        steps,
                        best_ratio,
                        minimum,
                        failures: checks.iter().filter(|c| !c.passes).copied().collect(),
                    },
                    other => other,
                })?;
                variants.hover = repaired.hover;
                repair = Some(repaired);
                checks = validate(&variants, config);
                GateState::Checking
            }
            GateState::Finalized => {
                let failures = checks.iter().filter(|c| !c.passes).count();
                if failures > 0 {
                    info!(failures, "contrast gate overridden");
                }
                let repair = match repair {
                    Some(repair) => repair,
                    None => HoverRepair {
                        hover: variants.hover,
                        check: check_hover(variants.hover, config),
                        lightness_trace: vec![variants.hover.lightness()],
                    },
                };
                return Ok(GateOutcome {
                    variants,
                    checks,
                    repair,
                    forced: failures > 0,
                });
            }
            GateState::Blocked => {
                let failures = checks.iter().filter(|c| !c.passes).copied().collect();
                return Err(AccentError::AccessibilityGateBlocked { failures });
            }
        };
        debug!(?state, "gate transition");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::contrast::Pairing;
    use crate::pipeline::derive::derive_variants;
    use crate::pipeline::normalize::SeedColor;

    fn variants(hex: &str) -> Variants {
        derive_variants(&SeedColor::parse(hex).unwrap(), &DeriveConfig::default())
    }

    fn passing() -> ContrastCheck {
        ContrastCheck::new(Pairing::AccentOnLightCanvas, 4.0, 3.0)
    }

    fn failing() -> ContrastCheck {
        ContrastCheck::new(Pairing::DarkOnDarkCanvas, 2.0, 3.0)
    }

    #[test]
    fn gate_passes_when_all_checks_pass() {
        assert_eq!(gate(&[passing(), passing(), passing()], false), Ok(GateState::Finalized));
    }

    #[test]
    fn gate_blocks_on_any_failure() {
        let failures = gate(&[passing(), failing(), passing()], false).unwrap_err();
        assert_eq!(failures, vec![failing()]);
    }

    #[test]
    fn force_overrides_the_gate() {
        assert_eq!(gate(&[failing(), failing(), failing()], true), Ok(GateState::Finalized));
    }

    #[test]
    fn passing_hover_needs_no_repair() {
        let config = DeriveConfig::default();
        let repair = repair_hover(Color::new(0x8a, 0x6a, 0x2f), &config).unwrap();
        assert_eq!(repair.steps(), 0);
        assert!(repair.check.passes);
    }

    #[test]
    fn light_hover_is_darkened_until_it_passes() {
        let config = DeriveConfig::default();
        let start = Color::new(0xb0, 0xb0, 0xb0);
        let repair = repair_hover(start, &config).unwrap();
        assert!(repair.steps() >= 1);
        assert!(repair.check.ratio >= 3.0, "{:?}", repair.check);
        for pair in repair.lightness_trace.windows(2) {
            assert!(pair[1] < pair[0], "lightness must strictly decrease: {pair:?}");
        }
    }

    #[test]
    fn repair_cap_yields_exhaustion() {
        let config = DeriveConfig {
            max_repair_steps: 1,
            ..DeriveConfig::default()
        };
        let err = repair_hover(Color::new(0xff, 0xff, 0xff), &config).unwrap_err();
        match err {
            AccentError::RepairExhausted { steps, best_ratio, .. } => {
                assert_eq!(steps, 1);
                assert!(best_ratio < 3.0);
            }
            other => panic!("expected RepairExhausted, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_target_stops_at_lightness_floor() {
        // Nothing reaches 25:1, so the loop must end at black instead of spinning.
        let config = DeriveConfig {
            min_ui_contrast: 25.0,
            max_repair_steps: 1000,
            ..DeriveConfig::default()
        };
        let err = repair_hover(Color::new(0x80, 0x80, 0x80), &config).unwrap_err();
        assert!(matches!(err, AccentError::RepairExhausted { steps, .. } if steps < 1000));
    }

    #[test]
    fn exhausted_run_still_names_failing_checks() {
        let config = DeriveConfig {
            max_repair_steps: 1,
            ..DeriveConfig::default()
        };
        let err = run(variants("#ffffff"), &config, false).unwrap_err();
        match err {
            AccentError::RepairExhausted { failures, .. } => {
                assert!(failures.iter().any(|f| f.pairing == Pairing::AccentOnLightCanvas));
                assert!(failures.iter().all(|f| !f.passes));
            }
            other => panic!("expected RepairExhausted, got {other:?}"),
        }

        let forced = run(variants("#ffffff"), &config, true).unwrap_err();
        assert!(matches!(forced, AccentError::RepairExhausted { ref failures, .. } if !failures.is_empty()));
    }

    #[test]
    fn run_finalizes_clean_seed() {
        let outcome = run(variants("#8a5a20"), &DeriveConfig::default(), false).unwrap();
        assert!(outcome.checks.iter().all(|c| c.passes));
        assert_eq!(outcome.repair.steps(), 0);
        assert!(!outcome.forced);
    }

    #[test]
    fn run_blocks_near_black_seed() {
        let err = run(variants("#1f1f1f"), &DeriveConfig::default(), false).unwrap_err();
        match err {
            AccentError::AccessibilityGateBlocked { failures } => {
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].pairing, Pairing::DarkOnDarkCanvas);
            }
            other => panic!("expected AccessibilityGateBlocked, got {other:?}"),
        }
    }

    #[test]
    fn run_repairs_hover_before_gating() {
        let before = variants("#e0e0e0");
        let initial_hover = before.hover;
        let outcome = run(before, &DeriveConfig::default(), true).unwrap();
        assert!(outcome.repair.steps() >= 1);
        assert!(outcome.repair.check.passes);
        assert_ne!(outcome.variants.hover, initial_hover);
        assert!(outcome.variants.hover.lightness() <= initial_hover.lightness());
        assert!(outcome.forced);
    }
}
