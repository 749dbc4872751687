//! Definition validation using Validation.
//!
//! Every check runs, and all violations are accumulated instead of
//! stopping at the first one, so a broken definition is reported in a
//! single pass.

use crate::builder::error::DefinitionError;
use crate::builder::region::RegionBuilder;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub(crate) type Checked = Validation<(), NonEmptyVec<DefinitionError>>;

fn check(ok: bool, violation: impl FnOnce() -> DefinitionError) -> Checked {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Validate a whole machine, accumulating ALL violations.
pub(crate) fn validate_machine<C, E, A>(machine: &str, regions: &[RegionBuilder<C, E, A>]) -> Checked {
    let mut checks = vec![check(!regions.is_empty(), || DefinitionError::NoRegions {
        machine: machine.to_string(),
    })];

    for region in regions {
        validate_region(&region.id, region, &mut checks);
    }

    Validation::all_vec(checks).map(|_| ())
}

fn validate_region<C, E, A>(path: &str, region: &RegionBuilder<C, E, A>, checks: &mut Vec<Checked>) {
    checks.push(check(!region.states.is_empty(), || {
        DefinitionError::EmptyRegion {
            region: path.to_string(),
        }
    }));

    let mut seen = HashSet::new();
    for state in &region.states {
        checks.push(check(seen.insert(state.id.as_str()), || {
            DefinitionError::DuplicateState {
                region: path.to_string(),
                state: state.id.clone(),
            }
        }));
    }

    match &region.initial {
        None => checks.push(Validation::fail(DefinitionError::MissingInitial {
            region: path.to_string(),
        })),
        Some(initial) => checks.push(check(seen.contains(initial.as_str()), || {
            DefinitionError::UnknownInitial {
                region: path.to_string(),
                initial: initial.clone(),
            }
        })),
    }

    for state in &region.states {
        for transition in &state.transitions {
            checks.push(check(seen.contains(transition.target.as_str()), || {
                DefinitionError::UnknownTarget {
                    region: path.to_string(),
                    state: state.id.clone(),
                    event: transition.event.clone(),
                    target: transition.target.clone(),
                }
            }));
        }

        if let Some(nested) = &state.region {
            validate_region(&format!("{path}.{}", state.id), nested, checks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StateBuilder;

    type Region = RegionBuilder<(), (), &'static str>;
    type State = StateBuilder<(), (), &'static str>;

    fn violations(result: Checked) -> Vec<DefinitionError> {
        match result {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    #[test]
    fn well_formed_machine_passes() {
        let region = Region::new("main")
            .initial("a")
            .state(State::new("a").on("GO", "b"))
            .state(State::new("b").on("BACK", "a"));

        assert!(validate_machine("m", &[region]).is_success());
    }

    #[test]
    fn machine_without_regions_fails() {
        let regions: Vec<Region> = Vec::new();
        assert_eq!(
            violations(validate_machine("m", &regions)),
            vec![DefinitionError::NoRegions {
                machine: "m".to_string()
            }]
        );
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let region = Region::new("main")
            .state(State::new("a").on("GO", "nowhere"))
            .state(State::new("a"))
            .state(State::new("c").region(Region::new("inner").state(State::new("x"))));

        let errors = violations(validate_machine("m", &[region]));

        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&DefinitionError::DuplicateState {
            region: "main".to_string(),
            state: "a".to_string(),
        }));
        assert!(errors.contains(&DefinitionError::MissingInitial {
            region: "main".to_string(),
        }));
        assert!(errors.contains(&DefinitionError::UnknownTarget {
            region: "main".to_string(),
            state: "a".to_string(),
            event: "GO".to_string(),
            target: "nowhere".to_string(),
        }));
        assert!(errors.contains(&DefinitionError::MissingInitial {
            region: "main.c".to_string(),
        }));
    }

    #[test]
    fn unknown_initial_is_reported() {
        let region = Region::new("main").initial("z").state(State::new("a"));

        assert_eq!(
            violations(validate_machine("m", &[region])),
            vec![DefinitionError::UnknownInitial {
                region: "main".to_string(),
                initial: "z".to_string(),
            }]
        );
    }

    #[test]
    fn empty_composite_region_is_reported() {
        let region = Region::new("main")
            .initial("a")
            .state(State::new("a").region(Region::new("inner")));

        let errors = violations(validate_machine("m", &[region]));
        assert!(errors.contains(&DefinitionError::EmptyRegion {
            region: "main.a".to_string(),
        }));
        assert!(errors.contains(&DefinitionError::MissingInitial {
            region: "main.a".to_string(),
        }));
    }

    #[test]
    fn transitions_cannot_target_nested_states() {
        let region = Region::new("main")
            .initial("a")
            .state(
                State::new("a").on("DIVE", "x").region(
                    Region::new("inner")
                        .initial("x")
                        .state(State::new("x")),
                ),
            );

        assert_eq!(
            violations(validate_machine("m", &[region])),
            vec![DefinitionError::UnknownTarget {
                region: "main".to_string(),
                state: "a".to_string(),
                event: "DIVE".to_string(),
                target: "x".to_string(),
            }]
        );
    }
}
