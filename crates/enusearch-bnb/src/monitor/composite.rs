// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Monitoring combinators for tree search
//!
//! Provides `CompositeTreeSearchMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging and early stopping without
//! coupling them to the solver.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::tree_search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    node::Node,
    stats::BnbSolverStatistics,
};
use enusearch_core::num::ObjectiveValue;
use enusearch_model::problem::ProblemShape;

/// A tree search monitor that aggregates multiple monitors and forwards events to all of them.
pub struct CompositeTreeSearchMonitor<'a, T>
where
    T: ObjectiveValue,
{
    monitors: Vec<Box<dyn TreeSearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeTreeSearchMonitor<'a, T>
where
    T: ObjectiveValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeTreeSearchMonitor<'a, T>
where
    T: ObjectiveValue,
{
    /// Creates a new empty `CompositeTreeSearchMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeTreeSearchMonitor` with room for `capacity` monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TreeSearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn TreeSearchMonitor<T> + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> FromIterator<Box<dyn TreeSearchMonitor<T> + 'a>> for CompositeTreeSearchMonitor<'a, T>
where
    T: ObjectiveValue,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TreeSearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> TreeSearchMonitor<T> for CompositeTreeSearchMonitor<'a, T>
where
    T: ObjectiveValue,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, shape: &ProblemShape, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enter_search(shape, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(&mut self, statistics: &BnbSolverStatistics) -> SearchCommand {
        for monitor in &mut self.monitors {
            let cmd = monitor.search_command(statistics);
            if !matches!(cmd, SearchCommand::Continue) {
                return cmd;
            }
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_step(&mut self, node: &Node<T>, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_step(node, statistics);
        }
    }

    #[inline(always)]
    fn on_prune(&mut self, node: &Node<T>, reason: PruneReason, statistics: &BnbSolverStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_prune(node, reason, statistics);
        }
    }

    #[inline(always)]
    fn on_branches_generated(
        &mut self,
        parent: &Node<T>,
        count: usize,
        statistics: &BnbSolverStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_branches_generated(parent, count, statistics);
        }
    }

    #[inline(always)]
    fn on_solution_found(
        &mut self,
        node: &Node<T>,
        objective_value: T,
        statistics: &BnbSolverStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_solution_found(node, objective_value, statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records event names into a shared log.
    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
        command: SearchCommand,
    }

    impl Recorder {
        fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>, command: SearchCommand) -> Self {
            Self {
                name,
                log: Rc::clone(log),
                command,
            }
        }

        fn push(&self, event: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, event));
        }
    }

    impl TreeSearchMonitor<i64> for Recorder {
        fn name(&self) -> &str {
            self.name
        }
        fn on_enter_search(&mut self, _shape: &ProblemShape, _statistics: &BnbSolverStatistics) {
            self.push("enter");
        }
        fn on_exit_search(&mut self, _statistics: &BnbSolverStatistics) {
            self.push("exit");
        }
        fn search_command(&mut self, _statistics: &BnbSolverStatistics) -> SearchCommand {
            self.push("command");
            self.command.clone()
        }
        fn on_step(&mut self, _node: &Node<i64>, _statistics: &BnbSolverStatistics) {
            self.push("step");
        }
        fn on_prune(
            &mut self,
            _node: &Node<i64>,
            reason: PruneReason,
            _statistics: &BnbSolverStatistics,
        ) {
            self.push(&format!("prune({})", reason));
        }
        fn on_branches_generated(
            &mut self,
            _parent: &Node<i64>,
            count: usize,
            _statistics: &BnbSolverStatistics,
        ) {
            self.push(&format!("branches({})", count));
        }
        fn on_solution_found(
            &mut self,
            _node: &Node<i64>,
            objective_value: i64,
            _statistics: &BnbSolverStatistics,
        ) {
            self.push(&format!("solution({})", objective_value));
        }
    }

    fn node() -> Node<i64> {
        Node::new(crate::node::Position::new(), 0)
    }

    #[test]
    fn test_fan_out_in_insertion_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeTreeSearchMonitor::new();
        composite.add_monitor(Recorder::new("a", &log, SearchCommand::Continue));
        composite.add_monitor(Recorder::new("b", &log, SearchCommand::Continue));
        assert_eq!(composite.len(), 2);

        let stats = BnbSolverStatistics::default();
        composite.on_step(&node(), &stats);
        composite.on_prune(&node(), PruneReason::DeadEnd, &stats);
        composite.on_solution_found(&node(), 4, &stats);

        assert_eq!(
            *log.borrow(),
            vec![
                "a:step",
                "b:step",
                "a:prune(DeadEnd)",
                "b:prune(DeadEnd)",
                "a:solution(4)",
                "b:solution(4)"
            ]
        );
    }

    #[test]
    fn test_search_command_short_circuits() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let monitors: Vec<Box<dyn TreeSearchMonitor<i64>>> = vec![
            Box::new(Recorder::new("a", &log, SearchCommand::Continue)),
            Box::new(Recorder::new("b", &log, SearchCommand::Terminate("b says stop".into()))),
            Box::new(Recorder::new("c", &log, SearchCommand::Terminate("c says stop".into()))),
        ];
        let mut composite: CompositeTreeSearchMonitor<'_, i64> = monitors.into_iter().collect();

        let cmd = composite.search_command(&BnbSolverStatistics::default());
        assert_eq!(cmd, SearchCommand::Terminate("b says stop".to_string()));
        assert_eq!(*log.borrow(), vec!["a:command", "b:command"]);
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite: CompositeTreeSearchMonitor<'_, i64> =
            CompositeTreeSearchMonitor::with_capacity(2);
        assert!(composite.is_empty());
        assert_eq!(
            composite.search_command(&BnbSolverStatistics::default()),
            SearchCommand::Continue
        );
        composite.add_monitor(crate::monitor::no_op::NoOperationMonitor::new());
        assert_eq!(composite.monitors()[0].name(), "NoOperationMonitor");
        composite.clear();
        assert!(composite.is_empty());
    }
}
