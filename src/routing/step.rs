// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::traits::{Predicate, Processor};

/// One unit of pipeline work.
///
/// The set of step shapes is closed; behaviour varies only through the
/// injected processors and predicates.
#[derive(Clone)]
pub enum Step {
    /// Run a business processor against the message.
    Transform(Arc<dyn Processor>),
    /// Call `on_true` as a sub-route when the predicate holds; otherwise call
    /// `on_false` if present, or fall through to the next step.
    Branch {
        predicate: Arc<dyn Predicate>,
        on_true: String,
        on_false: Option<String>,
    },
    /// Call another route by entry name.
    Invoke(String),
    /// Run the steps of the first matching `when`, else `otherwise`, inline in
    /// the current route.
    Choice { whens: Vec<When>, otherwise: Vec<Step> },
    /// Hand the message to a registered endpoint.
    Deliver(String),
    /// Emit a log line tagged with the current route.
    Log(String),
}

/// A guarded block inside a [`Step::Choice`].
#[derive(Clone)]
pub struct When {
    pub predicate: Arc<dyn Predicate>,
    pub steps: Vec<Step>,
}

impl When {
    pub fn new(predicate: Arc<dyn Predicate>, steps: Vec<Step>) -> Self {
        Self { predicate, steps }
    }
}

impl Step {
    pub fn transform(processor: impl Processor + 'static) -> Self {
        Step::Transform(Arc::new(processor))
    }

    pub fn branch(
        predicate: impl Predicate + 'static,
        on_true: impl Into<String>,
        on_false: Option<String>,
    ) -> Self {
        Step::Branch {
            predicate: Arc::new(predicate),
            on_true: on_true.into(),
            on_false,
        }
    }

    pub fn invoke(entry: impl Into<String>) -> Self {
        Step::Invoke(entry.into())
    }

    pub fn choice(whens: Vec<When>, otherwise: Vec<Step>) -> Self {
        Step::Choice { whens, otherwise }
    }

    pub fn deliver(endpoint: impl Into<String>) -> Self {
        Step::Deliver(endpoint.into())
    }

    pub fn log(text: impl Into<String>) -> Self {
        Step::Log(text.into())
    }

    /// Short label used in logs.
    pub fn label(&self) -> String {
        match self {
            Step::Transform(p) => format!("process({})", p.name()),
            Step::Branch { predicate, .. } => format!("branch({})", predicate.name()),
            Step::Invoke(entry) => format!("invoke({})", entry),
            Step::Choice { whens, .. } => format!("choice({} whens)", whens.len()),
            Step::Deliver(endpoint) => format!("deliver({})", endpoint),
            Step::Log(_) => "log".to_string(),
        }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Choice { whens, otherwise } => f
                .debug_struct("Choice")
                .field("whens", whens)
                .field("otherwise", otherwise)
                .finish(),
            Step::Branch {
                predicate,
                on_true,
                on_false,
            } => f
                .debug_struct("Branch")
                .field("predicate", &predicate.name())
                .field("on_true", on_true)
                .field("on_false", on_false)
                .finish(),
            other => f.write_str(&other.label()),
        }
    }
}

impl fmt::Debug for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("When")
            .field("predicate", &self.predicate.name())
            .field("steps", &self.steps)
            .finish()
    }
}

/// Visit every step, descending into choice blocks.
pub(crate) fn walk_steps<'a>(steps: &'a [Step], visit: &mut dyn FnMut(&'a Step)) {
    for step in steps {
        visit(step);
        if let Step::Choice { whens, otherwise } = step {
            for when in whens {
                walk_steps(&when.steps, visit);
            }
            walk_steps(otherwise, visit);
        }
    }
}
