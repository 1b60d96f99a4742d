// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Exception taxonomy: a forest of failure kinds linked by refinement.
//!
//! Handler matching walks a raised kind's lineage (the kind itself, then each
//! ancestor) and stops at the first kind a scope has a handler for, so the
//! most specific handler always wins. Because every kind has at most one
//! parent, two distinct handlers can never be equally specific.

use std::collections::{HashMap, HashSet};

use super::{ConfigError, Kind};

#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    parents: HashMap<Kind, Option<Kind>>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a kind, optionally refining an already declared parent.
    pub fn declare(
        &mut self,
        kind: impl Into<Kind>,
        parent: Option<Kind>,
    ) -> Result<&mut Self, ConfigError> {
        let kind = kind.into();
        if self.parents.contains_key(&kind) {
            return Err(ConfigError::DuplicateKind {
                kind: kind.to_string(),
            });
        }
        if let Some(parent) = &parent {
            if !self.parents.contains_key(parent) {
                return Err(ConfigError::UnknownParentKind {
                    kind: kind.to_string(),
                    parent: parent.to_string(),
                });
            }
        }
        self.parents.insert(kind, parent);
        Ok(self)
    }

    /// Build a taxonomy from declarations given in any order.
    ///
    /// Accumulates duplicate and unknown-parent errors; cycle detection only
    /// runs once every parent reference resolves.
    pub fn from_declarations<I>(declarations: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Kind, Option<Kind>)>,
    {
        let mut parents: HashMap<Kind, Option<Kind>> = HashMap::new();
        let mut order = Vec::new();
        let mut errors = Vec::new();

        for (kind, parent) in declarations {
            if parents.contains_key(&kind) {
                errors.push(ConfigError::DuplicateKind {
                    kind: kind.to_string(),
                });
                continue;
            }
            order.push(kind.clone());
            parents.insert(kind, parent);
        }

        for kind in &order {
            if let Some(Some(parent)) = parents.get(kind) {
                if !parents.contains_key(parent) {
                    errors.push(ConfigError::UnknownParentKind {
                        kind: kind.to_string(),
                        parent: parent.to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            if let Some(cycle) = find_cycle(&order, &parents) {
                errors.push(ConfigError::KindCycle { cycle });
            }
        }

        if errors.is_empty() {
            Ok(Self { parents })
        } else {
            Err(ConfigError::from_many(errors))
        }
    }

    pub fn contains(&self, kind: &Kind) -> bool {
        self.parents.contains_key(kind)
    }

    pub fn parent(&self, kind: &Kind) -> Option<&Kind> {
        self.parents.get(kind).and_then(|p| p.as_ref())
    }

    /// The kind followed by its ancestors, most specific first.
    ///
    /// An undeclared kind is its own root.
    pub fn lineage<'a>(&'a self, kind: &'a Kind) -> impl Iterator<Item = &'a Kind> + 'a {
        std::iter::successors(Some(kind), move |k| self.parent(k))
    }

    /// `true` when `kind` is `ancestor` or refines it.
    pub fn is_a(&self, kind: &Kind, ancestor: &Kind) -> bool {
        self.lineage(kind).any(|k| k == ancestor)
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

fn find_cycle(order: &[Kind], parents: &HashMap<Kind, Option<Kind>>) -> Option<Vec<String>> {
    let mut cleared: HashSet<&Kind> = HashSet::new();

    for start in order {
        let mut path: Vec<&Kind> = Vec::new();
        let mut on_path: HashSet<&Kind> = HashSet::new();
        let mut current = Some(start);

        while let Some(kind) = current {
            if cleared.contains(kind) {
                break;
            }
            if !on_path.insert(kind) {
                let begin = path.iter().position(|k| *k == kind).unwrap_or(0);
                let mut cycle: Vec<String> = path[begin..].iter().map(|k| k.to_string()).collect();
                cycle.push(kind.to_string());
                return Some(cycle);
            }
            path.push(kind);
            current = parents.get(kind).and_then(|p| p.as_ref());
        }

        cleared.extend(path);
    }

    None
}
