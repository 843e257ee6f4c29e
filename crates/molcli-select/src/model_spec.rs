//! Model id sets
//!
//! Grammar per comma-separated token:
//!
//! - `N` selects `(N,)`
//! - `N.M` selects `(N, M)`; deeper ids such as `1.2.3` work the same way
//! - `N-M` selects every `(k,)` with `N <= k <= M`
//! - `N.A-B` selects every `(N, k)` with `A <= k <= B`
//!
//! A range may only appear in the last dotted component.

use std::borrow::Borrow;

use molcli_mol::{Model, ModelId};
use smallvec::SmallVec;

/// Parsed set of model ids
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelSpec {
    /// Items in the order they were written
    pub items: Vec<ModelItem>,
}

/// One token of a model spec
#[derive(Debug, Clone, PartialEq)]
pub enum ModelItem {
    /// A single id (e.g. `1` or `1.2`)
    Id(ModelId),
    /// Range over the last component below a common parent
    /// (e.g. `3-5` has an empty parent, `1.2-4` has parent `1`)
    Range {
        parent: SmallVec<[u32; 4]>,
        start: u32,
        end: u32,
    },
}

impl ModelItem {
    /// Check if an id is selected by this item
    pub fn matches(&self, id: &ModelId) -> bool {
        match self {
            ModelItem::Id(own) => own == id,
            ModelItem::Range { parent, start, end } => match id.parts().split_last() {
                Some((last, head)) => head == parent.as_slice() && *start <= *last && *last <= *end,
                None => false,
            },
        }
    }

    fn parse(token: &str) -> Option<ModelItem> {
        let mut components: Vec<&str> = token.split('.').collect();
        let last = components.pop()?;
        let parent = components
            .iter()
            .map(|c| c.parse::<u32>().ok())
            .collect::<Option<SmallVec<[u32; 4]>>>()?;

        match last.split_once('-') {
            Some((start, end)) => Some(ModelItem::Range {
                parent,
                start: start.parse().ok()?,
                end: end.parse().ok()?,
            }),
            None => {
                let mut parts = parent;
                parts.push(last.parse().ok()?);
                Some(ModelItem::Id(ModelId::new(&parts)))
            }
        }
    }
}

impl ModelSpec {
    /// Parse a comma-separated model spec, skipping malformed tokens
    pub fn parse(spec: &str) -> Self {
        let mut items = Vec::new();
        if spec.is_empty() {
            return ModelSpec { items };
        }
        for token in spec.split(',') {
            match ModelItem::parse(token) {
                Some(item) => items.push(item),
                None => log::debug!("Skipping malformed model spec token {:?}", token),
            }
        }
        ModelSpec { items }
    }

    /// True if nothing can match
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if an id is selected
    pub fn contains_id(&self, id: &ModelId) -> bool {
        self.items.iter().any(|item| item.matches(id))
    }

    /// Check if a model is selected
    pub fn contains(&self, model: &Model) -> bool {
        self.contains_id(&model.id)
    }

    /// Keep the selected models, preserving input order
    pub fn filter<M>(&self, models: &[M]) -> Vec<M>
    where
        M: Borrow<Model> + Clone,
    {
        models
            .iter()
            .filter(|m| self.contains(<M as Borrow<Model>>::borrow(*m)))
            .cloned()
            .collect()
    }
}

impl From<&str> for ModelSpec {
    fn from(spec: &str) -> Self {
        ModelSpec::parse(spec)
    }
}
