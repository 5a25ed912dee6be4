//! The two agent collections owned by a run.

use vb_core::{HumanId, MosquitoId};

use crate::{Human, Mosquito};

/// Flat, indexable human and mosquito collections.
///
/// Sizes are fixed at construction: no step adds or removes agents.  Code
/// that touches one human and one mosquito at once addresses them by index
/// (or takes two disjoint `&mut`), never through shared handles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    pub humans:     Vec<Human>,
    pub mosquitoes: Vec<Mosquito>,
}

impl Population {
    pub fn new(humans: Vec<Human>, mosquitoes: Vec<Mosquito>) -> Self {
        Self { humans, mosquitoes }
    }

    #[inline]
    pub fn human_count(&self) -> usize {
        self.humans.len()
    }

    #[inline]
    pub fn mosquito_count(&self) -> usize {
        self.mosquitoes.len()
    }

    #[inline]
    pub fn human(&self, id: HumanId) -> &Human {
        &self.humans[id.index()]
    }

    #[inline]
    pub fn human_mut(&mut self, id: HumanId) -> &mut Human {
        &mut self.humans[id.index()]
    }

    #[inline]
    pub fn mosquito(&self, id: MosquitoId) -> &Mosquito {
        &self.mosquitoes[id.index()]
    }

    #[inline]
    pub fn mosquito_mut(&mut self, id: MosquitoId) -> &mut Mosquito {
        &mut self.mosquitoes[id.index()]
    }

    /// Mutable access to one mosquito and one human at the same time.
    ///
    /// The two live in different `Vec`s, so the borrows are disjoint.
    #[inline]
    pub fn pair_mut(&mut self, mosquito: MosquitoId, human: HumanId) -> (&mut Mosquito, &mut Human) {
        (&mut self.mosquitoes[mosquito.index()], &mut self.humans[human.index()])
    }
}
