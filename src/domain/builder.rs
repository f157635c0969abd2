//! Hierarchy view construction from a flat employee snapshot.

use std::collections::{HashMap, HashSet};

use tracing::{instrument, warn};

use crate::domain::entities::{Employee, EmployeeId};
use crate::domain::error::{HierarchyError, HierarchyResult};
use crate::domain::node::OrgNode;

/// Identity-keyed adjacency index over one employee snapshot.
///
/// Built in a single O(n) pass: an id lookup table, a manager id to
/// direct-reports table (snapshot order preserved within each group),
/// and the roots in snapshot order. All view operations borrow the
/// snapshot through this index and hold no other state, so one index is
/// safe to share across concurrent calls as long as the snapshot is not
/// mutated underneath it.
pub struct HierarchyIndex<'a> {
    by_id: HashMap<EmployeeId, &'a Employee>,
    children: HashMap<EmployeeId, Vec<&'a Employee>>,
    roots: Vec<&'a Employee>,
}

impl<'a> HierarchyIndex<'a> {
    pub fn new(snapshot: &'a [Employee]) -> Self {
        let mut by_id = HashMap::with_capacity(snapshot.len());
        let mut children: HashMap<EmployeeId, Vec<&'a Employee>> = HashMap::new();
        let mut roots = Vec::new();

        for employee in snapshot {
            by_id.insert(employee.id, employee);
            match employee.manager_id {
                Some(manager_id) => children.entry(manager_id).or_default().push(employee),
                None => roots.push(employee),
            }
        }

        Self {
            by_id,
            children,
            roots,
        }
    }

    /// Direct reports of `id`, in snapshot order. Empty for unknown ids.
    pub fn direct_reports(&self, id: EmployeeId) -> &[&'a Employee] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Root employees (no manager), in snapshot order.
    pub fn roots(&self) -> &[&'a Employee] {
        &self.roots
    }

    /// Builds the complete forest: every root node fully expanded down
    /// to the deepest report, roots in snapshot order.
    ///
    /// Employees whose manager id does not resolve within the snapshot
    /// are unreachable from any root and are dropped from the output
    /// (logged as a warning). Employees unreachable for any other
    /// reason sit on a cycle, which is reported as an error instead of
    /// losing records silently.
    #[instrument(level = "debug", skip(self))]
    pub fn build_forest(&self) -> HierarchyResult<Vec<OrgNode>> {
        let mut visited = HashSet::with_capacity(self.by_id.len());

        let mut forest = Vec::with_capacity(self.roots.len());
        for &root in &self.roots {
            forest.push(self.expand(root, &mut visited)?);
        }

        for orphan in self.orphans() {
            warn!(
                employee = orphan.id,
                manager = ?orphan.manager_id,
                "dropping employee with missing manager from forest"
            );
            // Account for the orphan's subtree so only cycle members remain unvisited
            self.expand(orphan, &mut visited)?;
        }

        if let Some(stray) = self.by_id.keys().find(|id| !visited.contains(id)) {
            return Err(HierarchyError::CycleDetected(*stray));
        }

        Ok(forest)
    }

    /// Builds the full descendant subtree rooted at `id`.
    #[instrument(level = "debug", skip(self))]
    pub fn build_subtree(&self, id: EmployeeId) -> HierarchyResult<OrgNode> {
        let target = self.lookup(id)?;
        let mut visited = HashSet::new();
        self.expand(target, &mut visited)
    }

    /// Builds the contextual view for `id`: ancestor chain, level peers,
    /// and the target's fully expanded subtree. Branches off the path
    /// are collapsed to shallow nodes, bounding the output to
    /// O(depth + peers + |target subtree|) instead of O(n).
    ///
    /// For a root target the result lists every root (target expanded,
    /// others shallow, snapshot order). Otherwise it is a singleton
    /// holding the farthest ancestor, each ancestor wrapping the next as
    /// its sole report, down to the direct manager whose reports fan out
    /// the target's peers.
    #[instrument(level = "debug", skip(self))]
    pub fn build_contextual_view(&self, id: EmployeeId) -> HierarchyResult<Vec<OrgNode>> {
        let target = self.lookup(id)?;
        let expanded_target = self.build_subtree(id)?;

        // Farthest-to-nearest; empty when the target is itself a root
        let ancestors = self.ancestor_chain(target)?;

        match ancestors.split_last() {
            None => Ok(self.fan_out(&self.roots, id, expanded_target)),
            Some((direct_manager, outer_ancestors)) => {
                let peers = self.direct_reports(direct_manager.id);
                let peer_nodes = self.fan_out(peers, id, expanded_target);
                let mut current = OrgNode::from_employee(direct_manager, peer_nodes);

                // Wrap the remaining ancestors nearest-to-farthest, each
                // holding the previous result as its sole report
                for ancestor in outer_ancestors.iter().rev() {
                    current = OrgNode::from_employee(ancestor, vec![current]);
                }

                Ok(vec![current])
            }
        }
    }

    fn lookup(&self, id: EmployeeId) -> HierarchyResult<&'a Employee> {
        self.by_id
            .get(&id)
            .copied()
            .ok_or(HierarchyError::EmployeeNotFound(id))
    }

    /// Bottom-up recursive expansion: report lists are built first and
    /// attached exactly once, nodes are never mutated afterwards. The
    /// visited set turns a cyclic relation into an error instead of
    /// unbounded recursion.
    fn expand(
        &self,
        employee: &'a Employee,
        visited: &mut HashSet<EmployeeId>,
    ) -> HierarchyResult<OrgNode> {
        if !visited.insert(employee.id) {
            return Err(HierarchyError::CycleDetected(employee.id));
        }

        let reports = self
            .direct_reports(employee.id)
            .iter()
            .map(|&report| self.expand(report, visited))
            .collect::<HierarchyResult<Vec<_>>>()?;

        Ok(OrgNode::from_employee(employee, reports))
    }

    /// Manager chain of `target`, farthest ancestor first, direct
    /// manager last. Empty for roots.
    fn ancestor_chain(&self, target: &'a Employee) -> HierarchyResult<Vec<&'a Employee>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::from([target.id]);
        let mut cursor = target;

        while let Some(manager_id) = cursor.manager_id {
            let manager =
                self.by_id
                    .get(&manager_id)
                    .copied()
                    .ok_or(HierarchyError::DanglingManager {
                        employee: cursor.id,
                        manager: manager_id,
                    })?;
            if !visited.insert(manager.id) {
                return Err(HierarchyError::CycleDetected(manager.id));
            }
            chain.push(manager);
            cursor = manager;
        }

        chain.reverse();
        Ok(chain)
    }

    /// One expanded node among shallow siblings, preserving `members`
    /// order. `expanded` replaces the member whose id is `target`.
    fn fan_out(
        &self,
        members: &[&'a Employee],
        target: EmployeeId,
        expanded: OrgNode,
    ) -> Vec<OrgNode> {
        let mut expanded = Some(expanded);
        members
            .iter()
            .map(|member| {
                if member.id == target {
                    expanded.take().unwrap_or_else(|| OrgNode::shallow(member))
                } else {
                    OrgNode::shallow(member)
                }
            })
            .collect()
    }

    /// Employees whose manager id resolves to no snapshot member.
    fn orphans(&self) -> Vec<&'a Employee> {
        let mut orphans = Vec::new();
        for (manager_id, reports) in &self.children {
            if !self.by_id.contains_key(manager_id) {
                orphans.extend(reports.iter().copied());
            }
        }
        orphans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Vec<Employee> {
        vec![
            Employee::new(1, None, "Grace", "Hopper"),
            Employee::new(2, Some(1), "Ada", "Lovelace"),
            Employee::new(3, Some(1), "Alan", "Turing"),
            Employee::new(4, Some(2), "Edsger", "Dijkstra"),
        ]
    }

    #[test]
    fn given_snapshot_when_indexing_then_groups_reports_in_snapshot_order() {
        let employees = snapshot();
        let index = HierarchyIndex::new(&employees);

        let reports: Vec<_> = index.direct_reports(1).iter().map(|e| e.id).collect();
        assert_eq!(reports, vec![2, 3]);
        assert!(index.direct_reports(4).is_empty());
    }

    #[test]
    fn given_snapshot_when_indexing_then_collects_roots_in_snapshot_order() {
        let employees = vec![
            Employee::new(10, None, "First", "Root"),
            Employee::new(20, None, "Second", "Root"),
            Employee::new(30, Some(10), "Some", "Report"),
        ];
        let index = HierarchyIndex::new(&employees);

        let roots: Vec<_> = index.roots().iter().map(|e| e.id).collect();
        assert_eq!(roots, vec![10, 20]);
    }

    #[test]
    fn given_dangling_manager_when_listing_orphans_then_returns_affected_employees() {
        let employees = vec![
            Employee::new(1, None, "Grace", "Hopper"),
            Employee::new(5, Some(99), "Lost", "Soul"),
        ];
        let index = HierarchyIndex::new(&employees);

        let orphans: Vec<_> = index.orphans().iter().map(|e| e.id).collect();
        assert_eq!(orphans, vec![5]);
    }
}
