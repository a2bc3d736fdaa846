//! Dependency resolution over a completed module set.
//!
//! For every `(module, symbol, range)` tuple in the dependency table the
//! resolver runs an ordered candidate search:
//!
//! 1. the depending module itself,
//! 2. every kernel-set module, in table order,
//! 3. the module named `<symbol>.ko`, if scanned.
//!
//! The first candidate whose provision entry has the symbol inside the
//! version window wins ([`Outcome::Preferred`]) and the search stops.
//! Failing that, the whole provision table is searched; any matches at all
//! yield [`Outcome::Elsewhere`] with every matching module, otherwise the
//! dependency is [`Outcome::Unresolved`].
//!
//! Resolution is a pure function over the set; it performs no I/O and
//! mutates nothing.

use serde::Serialize;

use crate::model::{ModuleSet, VersionRange, MODULE_SUFFIX};

/// How one dependency was (or was not) satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Satisfied by a high-priority candidate: self, a kernel-set module,
    /// or the module named after the symbol.
    Preferred { resolver: String },
    /// Satisfied, but only by modules outside the expected search order.
    /// Carries every matching provider.
    Elsewhere { resolvers: Vec<String> },
    /// No provision entry anywhere satisfies the version window.
    Unresolved,
}

/// One resolved dependency: who needed what, and what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The depending module.
    pub module: String,
    /// The depended symbol.
    pub symbol: String,
    /// The acceptable version window, as declared.
    pub range: VersionRange,
    /// The search outcome.
    pub outcome: Outcome,
}

/// Whether `candidate`'s provision entry satisfies `symbol` within `range`.
///
/// A candidate with no provision entry at all is simply not a match; that
/// is expected for the named-module probe and never an error.
fn satisfies(set: &ModuleSet, candidate: &str, symbol: &str, range: VersionRange) -> bool {
    set.provides(candidate)
        .and_then(|provides| provides.get(symbol))
        .is_some_and(|version| range.contains(*version))
}

/// Resolve every dependency of every module in the set.
///
/// Outcomes come out in table order: modules sorted by name, each module's
/// dependencies sorted by symbol. Modules with no dependencies contribute
/// nothing.
pub fn resolve_all(set: &ModuleSet) -> Vec<Resolution> {
    let kernel_set = set.kernel_set();
    let mut resolutions = Vec::new();

    for (module, depends) in set.dependencies() {
        for (symbol, range) in depends {
            resolutions.push(Resolution {
                module: module.to_string(),
                symbol: symbol.clone(),
                range: *range,
                outcome: resolve_one(set, &kernel_set, module, symbol, *range),
            });
        }
    }

    resolutions
}

fn resolve_one(
    set: &ModuleSet,
    kernel_set: &[String],
    module: &str,
    symbol: &str,
    range: VersionRange,
) -> Outcome {
    let named = format!("{}{}", symbol, MODULE_SUFFIX);
    let priority = std::iter::once(module)
        .chain(kernel_set.iter().map(String::as_str))
        .chain(std::iter::once(named.as_str()));

    for candidate in priority {
        if satisfies(set, candidate, symbol, range) {
            return Outcome::Preferred {
                resolver: candidate.to_string(),
            };
        }
    }

    // Failed candidates cannot reappear here; anything that matches now
    // was outside the priority order.
    let resolvers: Vec<String> = set
        .provisions()
        .filter(|(name, _)| satisfies(set, name, symbol, range))
        .map(|(name, _)| name.to_string())
        .collect();

    if resolvers.is_empty() {
        Outcome::Unresolved
    } else {
        Outcome::Elsewhere { resolvers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DependsEntry, ProvidesEntry};

    fn provides(entries: &[(&str, u32)]) -> ProvidesEntry {
        entries
            .iter()
            .map(|(name, version)| (name.to_string(), *version))
            .collect()
    }

    fn depends(entries: &[(&str, u32, u32, u32)]) -> DependsEntry {
        entries
            .iter()
            .map(|(name, min, pref, max)| (name.to_string(), VersionRange::new(*min, *pref, *max)))
            .collect()
    }

    fn single_outcome(resolutions: &[Resolution]) -> &Outcome {
        assert_eq!(resolutions.len(), 1);
        &resolutions[0].outcome
    }

    #[test]
    fn module_without_dependencies_yields_nothing() {
        let mut set = ModuleSet::new();
        set.insert("lone.ko", provides(&[("lone", 1)]), DependsEntry::new());

        assert!(resolve_all(&set).is_empty());
    }

    #[test]
    fn self_satisfied_dependency_wins_over_other_providers() {
        let mut set = ModuleSet::new();
        set.insert(
            "self.ko",
            provides(&[("shared", 2)]),
            depends(&[("shared", 1, 2, 3)]),
        );
        set.insert("other.ko", provides(&[("shared", 2)]), DependsEntry::new());

        let resolutions = resolve_all(&set);
        assert_eq!(
            single_outcome(&resolutions),
            &Outcome::Preferred {
                resolver: "self.ko".to_string()
            }
        );
    }

    #[test]
    fn kernel_set_beats_named_module() {
        let mut set = ModuleSet::new();
        set.insert("kernel", provides(&[("abi", 7)]), DependsEntry::new());
        set.insert("abi.ko", provides(&[("abi", 7)]), DependsEntry::new());
        set.insert(
            "drv.ko",
            ProvidesEntry::new(),
            depends(&[("abi", 5, 7, 9)]),
        );

        let resolutions = resolve_all(&set);
        assert_eq!(
            single_outcome(&resolutions),
            &Outcome::Preferred {
                resolver: "kernel".to_string()
            }
        );
    }

    #[test]
    fn named_module_match() {
        // net.ko depends on core; core.ko is the literal <symbol>.ko
        // candidate and its version sits inside the window.
        let mut set = ModuleSet::new();
        set.insert(
            "net.ko",
            provides(&[("netcore", 3)]),
            depends(&[("core", 1, 2, 5)]),
        );
        set.insert("core.ko", provides(&[("core", 2)]), DependsEntry::new());

        let resolutions = resolve_all(&set);
        assert_eq!(
            single_outcome(&resolutions),
            &Outcome::Preferred {
                resolver: "core.ko".to_string()
            }
        );
    }

    #[test]
    fn elsewhere_with_single_provider() {
        let mut set = ModuleSet::new();
        set.insert(
            "a.ko",
            ProvidesEntry::new(),
            depends(&[("widget", 1, 1, 9)]),
        );
        set.insert("k.ko", provides(&[("widget", 4)]), DependsEntry::new());

        let resolutions = resolve_all(&set);
        assert_eq!(
            single_outcome(&resolutions),
            &Outcome::Elsewhere {
                resolvers: vec!["k.ko".to_string()]
            }
        );
    }

    #[test]
    fn elsewhere_lists_every_matching_provider() {
        let mut set = ModuleSet::new();
        set.insert(
            "a.ko",
            ProvidesEntry::new(),
            depends(&[("widget", 1, 1, 9)]),
        );
        set.insert("j.ko", provides(&[("widget", 3)]), DependsEntry::new());
        set.insert("k.ko", provides(&[("widget", 4)]), DependsEntry::new());

        let resolutions = resolve_all(&set);
        assert_eq!(
            single_outcome(&resolutions),
            &Outcome::Elsewhere {
                resolvers: vec!["j.ko".to_string(), "k.ko".to_string()]
            }
        );
    }

    #[test]
    fn unresolved_when_no_provider_exists() {
        let mut set = ModuleSet::new();
        set.insert("a.ko", ProvidesEntry::new(), depends(&[("foo", 10, 10, 10)]));

        let resolutions = resolve_all(&set);
        assert_eq!(single_outcome(&resolutions), &Outcome::Unresolved);
        assert_eq!(resolutions[0].range, VersionRange::new(10, 10, 10));
    }

    #[test]
    fn out_of_range_provider_is_no_provider() {
        // b.ko provides foo, but below the window; the outcome is
        // unresolved, not elsewhere.
        let mut set = ModuleSet::new();
        set.insert("a.ko", ProvidesEntry::new(), depends(&[("foo", 10, 10, 10)]));
        set.insert("b.ko", provides(&[("foo", 5)]), DependsEntry::new());

        let resolutions = resolve_all(&set);
        assert_eq!(single_outcome(&resolutions), &Outcome::Unresolved);
    }

    #[test]
    fn window_boundaries_are_inclusive() {
        for (version, expect_match) in [(1, false), (2, true), (5, true), (6, false)] {
            let mut set = ModuleSet::new();
            set.insert("a.ko", ProvidesEntry::new(), depends(&[("sym", 2, 3, 5)]));
            set.insert("sym.ko", provides(&[("sym", version)]), DependsEntry::new());

            let resolutions = resolve_all(&set);
            let matched = matches!(single_outcome(&resolutions), Outcome::Preferred { .. });
            assert_eq!(matched, expect_match, "version {}", version);
        }
    }

    #[test]
    fn preferred_version_is_not_part_of_the_match() {
        // The provider's version differs from preferred but sits inside
        // the window; still a first-class match.
        let mut set = ModuleSet::new();
        set.insert("a.ko", ProvidesEntry::new(), depends(&[("sym", 1, 9, 10)]));
        set.insert("sym.ko", provides(&[("sym", 2)]), DependsEntry::new());

        let resolutions = resolve_all(&set);
        assert!(matches!(
            single_outcome(&resolutions),
            Outcome::Preferred { .. }
        ));
    }

    #[test]
    fn kernel_module_missing_symbol_falls_through() {
        let mut set = ModuleSet::new();
        set.insert("kernel", provides(&[("unrelated", 1)]), DependsEntry::new());
        set.insert(
            "drv.ko",
            ProvidesEntry::new(),
            depends(&[("abi", 1, 1, 9)]),
        );
        set.insert("abi.ko", provides(&[("abi", 3)]), DependsEntry::new());

        let resolutions = resolve_all(&set);
        assert_eq!(
            single_outcome(&resolutions),
            &Outcome::Preferred {
                resolver: "abi.ko".to_string()
            }
        );
    }

    #[test]
    fn outcomes_come_out_in_table_order() {
        let mut set = ModuleSet::new();
        set.insert(
            "b.ko",
            ProvidesEntry::new(),
            depends(&[("beta", 1, 1, 1), ("alpha", 1, 1, 1)]),
        );
        set.insert("a.ko", ProvidesEntry::new(), depends(&[("gamma", 1, 1, 1)]));

        let resolutions = resolve_all(&set);
        let order: Vec<(&str, &str)> = resolutions
            .iter()
            .map(|r| (r.module.as_str(), r.symbol.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("a.ko", "gamma"), ("b.ko", "alpha"), ("b.ko", "beta")]
        );
    }
}
