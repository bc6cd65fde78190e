//! Upper neighbors of EL concepts.
//!
//! An upper neighbor is reached by a single structural generalization step:
//! dropping a conjunct, or generalizing inside the filler of an existential
//! restriction. The computation is a pure structural recursion over the
//! expression tree and always terminates because every recursive call works on
//! a strict subtree.
//!
//! Two [`GeneralizationMode`]s are available. [`GeneralizationMode::Folded`]
//! drops an existential conjunct and adds every generalization of its filler
//! to the same neighbor. [`GeneralizationMode::Separate`] emits the drop and each
//! in-place generalization as distinct neighbors.

use serde::{Deserialize, Serialize};

use crate::concept::Concept;

/// How a conjunction combines dropping a conjunct with generalizing it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneralizationMode {
    /// For conjunct `∃r.F`, one neighbor holds the remaining conjuncts plus
    /// `∃r.F'` for every upper neighbor `F'` of `F`.
    #[default]
    Folded,
    /// For every conjunct, one neighbor without it, then one neighbor per
    /// upper neighbor of the conjunct substituted at its position.
    Separate,
}

/// Upper-neighbor engine parameterised by a [`GeneralizationMode`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpperNeighbors {
    mode: GeneralizationMode,
}

impl UpperNeighbors {
    #[must_use]
    pub fn new(mode: GeneralizationMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> GeneralizationMode {
        self.mode
    }

    /// Returns the upper neighbors of `concept` in deterministic order.
    ///
    /// Concept names and the empty conjunction have none, and neither does a
    /// conjunction whose only conjunct cannot be generalized. The input is
    /// never modified.
    #[must_use]
    pub fn compute(&self, concept: &Concept) -> Vec<Concept> {
        let neighbors = self.generalize(concept);
        tracing::debug!(
            concept = %concept,
            mode = ?self.mode,
            count = neighbors.len(),
            "computed upper neighbors"
        );
        neighbors
    }

    fn generalize(&self, concept: &Concept) -> Vec<Concept> {
        match concept {
            Concept::Name { .. } => vec![],
            Concept::Conjunction { conjuncts } => match self.mode {
                GeneralizationMode::Folded => self.folded(conjuncts),
                GeneralizationMode::Separate => self.separate(conjuncts),
            },
            Concept::Existential { role, filler } => self
                .generalize(filler)
                .into_iter()
                .map(|generalized| Concept::restriction(role.clone(), generalized))
                .collect(),
        }
    }

    fn folded(&self, conjuncts: &[Concept]) -> Vec<Concept> {
        let mut neighbors = Vec::with_capacity(conjuncts.len());
        for conjunct in conjuncts {
            let mut rest = without_first(conjuncts, conjunct);
            if let Concept::Existential { role, filler } = conjunct {
                rest.extend(
                    self.generalize(filler)
                        .into_iter()
                        .map(|generalized| Concept::restriction(role.clone(), generalized)),
                );
            }
            if rest.is_empty() {
                tracing::trace!(conjunct = %conjunct, "dropping the only conjunct yields nothing");
                continue;
            }
            neighbors.push(Concept::conjunction(rest));
        }
        neighbors
    }

    fn separate(&self, conjuncts: &[Concept]) -> Vec<Concept> {
        let mut neighbors = Vec::with_capacity(conjuncts.len());
        for (index, conjunct) in conjuncts.iter().enumerate() {
            let rest = without_first(conjuncts, conjunct);
            if !rest.is_empty() {
                neighbors.push(Concept::conjunction(rest));
            }
            for generalized in self.generalize(conjunct) {
                let mut replaced = conjuncts.to_vec();
                replaced[index] = generalized;
                neighbors.push(Concept::conjunction(replaced));
            }
        }
        neighbors
    }
}

/// Upper neighbors of `concept` using the folded generalization step.
#[must_use]
pub fn upper_neighbors(concept: &Concept) -> Vec<Concept> {
    UpperNeighbors::default().compute(concept)
}

// Removes the first structurally equal occurrence, so duplicate conjuncts
// always lose their leftmost copy.
fn without_first(conjuncts: &[Concept], target: &Concept) -> Vec<Concept> {
    let mut rest = conjuncts.to_vec();
    if let Some(index) = rest.iter().position(|candidate| candidate == target) {
        rest.remove(index);
    }
    rest
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{upper_neighbors, GeneralizationMode, UpperNeighbors};
    use crate::concept::Concept;

    fn parse(text: &str) -> Concept {
        text.parse().expect("valid concept")
    }

    fn rendered(neighbors: &[Concept]) -> Vec<String> {
        neighbors.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    #[case("A", &[])]
    #[case("A ⊓ B", &["B", "A"])]
    #[case("∃r.A", &[])]
    #[case("∃r.(A ⊓ B)", &["∃r.(B)", "∃r.(A)"])]
    #[case("A ⊓ ∃r.(B ⊓ C)", &["∃r.(B ⊓ C)", "A ⊓ ∃r.(C) ⊓ ∃r.(B)"])]
    #[case("A ⊓ B ⊓ C", &["B ⊓ C", "A ⊓ C", "A ⊓ B"])]
    #[case("∃r.A ⊓ B", &["B", "∃r.(A)"])]
    fn folded_scenarios(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(rendered(&upper_neighbors(&parse(input))), expected);
    }

    #[test]
    fn conjunction_neighbors_keep_conjunction_shape() {
        let a = Concept::name("A").expect("name");
        let b = Concept::name("B").expect("name");
        let neighbors = upper_neighbors(&Concept::conjunction([a.clone(), b.clone()]));
        assert_eq!(
            neighbors,
            vec![Concept::conjunction([b]), Concept::conjunction([a])]
        );
    }

    #[test]
    fn folded_step_merges_drop_and_filler_generalization() {
        let a = Concept::name("A").expect("name");
        let b = Concept::name("B").expect("name");
        let c = Concept::name("C").expect("name");
        let restriction =
            Concept::exists("r", Concept::conjunction([b.clone(), c.clone()])).expect("role");
        let input = Concept::conjunction([a.clone(), restriction.clone()]);

        let expected = vec![
            Concept::conjunction([restriction]),
            Concept::conjunction([
                a,
                Concept::exists("r", Concept::conjunction([c])).expect("role"),
                Concept::exists("r", Concept::conjunction([b])).expect("role"),
            ]),
        ];
        assert_eq!(upper_neighbors(&input), expected);
    }

    #[rstest]
    #[case(Concept::conjunction([]))]
    #[case(Concept::conjunction([Concept::name("A").expect("name")]))]
    #[case(Concept::conjunction([Concept::conjunction([])]))]
    #[case(Concept::conjunction([Concept::exists("r", Concept::name("A").expect("name")).expect("role")]))]
    fn degenerate_conjunctions_have_no_neighbors(#[case] input: Concept) {
        assert!(upper_neighbors(&input).is_empty());
    }

    #[test]
    fn lone_existential_conjunct_folds_into_one_neighbor() {
        let a = Concept::name("A").expect("name");
        let b = Concept::name("B").expect("name");
        let input = Concept::conjunction([Concept::exists(
            "r",
            Concept::conjunction([a.clone(), b.clone()]),
        )
        .expect("role")]);

        let neighbors = upper_neighbors(&input);
        assert_eq!(
            neighbors,
            vec![Concept::conjunction([
                Concept::exists("r", Concept::conjunction([b])).expect("role"),
                Concept::exists("r", Concept::conjunction([a])).expect("role"),
            ])]
        );
        assert_eq!(rendered(&neighbors), vec!["∃r.(B) ⊓ ∃r.(A)"]);
    }

    #[test]
    fn duplicate_existential_conjuncts_each_fold() {
        assert_eq!(
            rendered(&upper_neighbors(&parse("∃r.(A ⊓ B) ⊓ ∃r.(A ⊓ B)"))),
            vec![
                "∃r.(A ⊓ B) ⊓ ∃r.(B) ⊓ ∃r.(A)",
                "∃r.(A ⊓ B) ⊓ ∃r.(B) ⊓ ∃r.(A)"
            ]
        );
    }

    #[test]
    fn duplicates_lose_their_leftmost_copy() {
        assert_eq!(rendered(&upper_neighbors(&parse("A ⊓ A"))), vec!["A", "A"]);
        assert_eq!(
            rendered(&upper_neighbors(&parse("A ⊓ B ⊓ A"))),
            vec!["B ⊓ A", "A ⊓ A", "B ⊓ A"]
        );
    }

    #[test]
    fn nested_conjunction_conjuncts_are_only_dropped_when_folded() {
        assert_eq!(
            rendered(&upper_neighbors(&parse("A ⊓ (B ⊓ C)"))),
            vec!["B ⊓ C", "A"]
        );
    }

    #[test]
    fn separate_mode_emits_drop_and_generalizations_independently() {
        let engine = UpperNeighbors::new(GeneralizationMode::Separate);
        assert_eq!(
            rendered(&engine.compute(&parse("A ⊓ ∃r.(B ⊓ C)"))),
            vec!["∃r.(B ⊓ C)", "A", "A ⊓ ∃r.(C)", "A ⊓ ∃r.(B)"]
        );
        assert_eq!(
            rendered(&engine.compute(&parse("A ⊓ (B ⊓ C)"))),
            vec!["B ⊓ C", "A", "A ⊓ C", "A ⊓ B"]
        );
    }

    #[test]
    fn separate_mode_generalizes_a_lone_existential_conjunct() {
        let engine = UpperNeighbors::new(GeneralizationMode::Separate);
        let input = Concept::conjunction([parse("∃r.(A ⊓ B)")]);
        assert_eq!(rendered(&engine.compute(&input)), vec!["∃r.(B)", "∃r.(A)"]);
    }

    #[test]
    fn modes_agree_on_names_and_restrictions() {
        let separate = UpperNeighbors::new(GeneralizationMode::Separate);
        let folded = UpperNeighbors::default();
        assert_eq!(folded.mode(), GeneralizationMode::Folded);
        for input in ["A", "∃r.A", "∃r.(A ⊓ B)", "∃r.∃s.(A ⊓ B)"] {
            let concept = parse(input);
            assert_eq!(separate.compute(&concept), folded.compute(&concept));
        }
    }
}
