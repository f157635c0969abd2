//! Tests for HierarchyIndex::build_forest

use rstest::{fixture, rstest};

use orgtree::util::testing::init_test_setup;
use orgtree::{Employee, EmployeeId, HierarchyError, HierarchyIndex, OrgNode};

#[fixture]
fn company() -> Vec<Employee> {
    init_test_setup();
    vec![
        Employee::new(1, None, "Grace", "Hopper")
            .with_job_title("CEO")
            .with_department("Management")
            .with_email("grace@example.com"),
        Employee::new(2, Some(1), "Ada", "Lovelace").with_job_title("CTO"),
        Employee::new(3, Some(1), "Alan", "Turing").with_job_title("CFO"),
        Employee::new(4, Some(2), "Edsger", "Dijkstra").with_job_title("Engineer"),
    ]
}

fn collect_ids(node: &OrgNode, ids: &mut Vec<EmployeeId>) {
    ids.push(node.id);
    for report in &node.reports {
        collect_ids(report, ids);
    }
}

#[rstest]
fn given_company_when_building_forest_then_nests_reports_under_managers(company: Vec<Employee>) {
    // Act
    let index = HierarchyIndex::new(&company);
    let forest = index.build_forest().unwrap();

    // Assert
    assert_eq!(forest.len(), 1);
    let root = &forest[0];
    assert_eq!(root.id, 1);

    let report_ids: Vec<_> = root.reports.iter().map(|r| r.id).collect();
    assert_eq!(report_ids, vec![2, 3]);

    assert_eq!(root.reports[0].reports.len(), 1);
    assert_eq!(root.reports[0].reports[0].id, 4);
    assert!(root.reports[1].reports.is_empty());
}

#[rstest]
fn given_company_when_building_forest_then_copies_attributes_through(company: Vec<Employee>) {
    let index = HierarchyIndex::new(&company);
    let forest = index.build_forest().unwrap();

    let root = &forest[0];
    assert_eq!(root.first_name, "Grace");
    assert_eq!(root.last_name, "Hopper");
    assert_eq!(root.job_title.as_deref(), Some("CEO"));
    assert_eq!(root.department, "Management");
    assert_eq!(root.email, "grace@example.com");
}

#[rstest]
fn given_company_when_building_forest_then_every_employee_appears_exactly_once(
    company: Vec<Employee>,
) {
    let index = HierarchyIndex::new(&company);
    let forest = index.build_forest().unwrap();

    let mut ids = Vec::new();
    for tree in &forest {
        collect_ids(tree, &mut ids);
    }
    ids.sort_unstable();

    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn given_empty_snapshot_when_building_forest_then_returns_empty_list() {
    let snapshot: Vec<Employee> = Vec::new();
    let index = HierarchyIndex::new(&snapshot);

    assert!(index.build_forest().unwrap().is_empty());
}

#[test]
fn given_multiple_roots_when_building_forest_then_preserves_snapshot_order() {
    let snapshot = vec![
        Employee::new(20, None, "Second", "Company"),
        Employee::new(10, None, "First", "Company"),
        Employee::new(30, Some(10), "Some", "Report"),
    ];
    let index = HierarchyIndex::new(&snapshot);

    let forest = index.build_forest().unwrap();
    let root_ids: Vec<_> = forest.iter().map(|t| t.id).collect();

    assert_eq!(root_ids, vec![20, 10]);
}

#[rstest]
fn given_dangling_manager_when_building_forest_then_omits_orphan(mut company: Vec<Employee>) {
    // Arrange: employee 5 points at a manager that is not in the snapshot
    company.push(Employee::new(5, Some(99), "Lost", "Soul"));

    // Act
    let index = HierarchyIndex::new(&company);
    let forest = index.build_forest().unwrap();

    // Assert: the orphan is dropped, everyone else is present
    let mut ids = Vec::new();
    for tree in &forest {
        collect_ids(tree, &mut ids);
    }
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn given_cyclic_relation_when_building_forest_then_errors() {
    let snapshot = vec![
        Employee::new(1, None, "Grace", "Hopper"),
        Employee::new(2, Some(3), "Ada", "Lovelace"),
        Employee::new(3, Some(2), "Alan", "Turing"),
    ];
    let index = HierarchyIndex::new(&snapshot);

    let result = index.build_forest();

    assert!(matches!(result, Err(HierarchyError::CycleDetected(_))));
}

#[rstest]
fn given_unchanged_snapshot_when_building_forest_twice_then_results_are_identical(
    company: Vec<Employee>,
) {
    let index = HierarchyIndex::new(&company);

    let first = index.build_forest().unwrap();
    let second = index.build_forest().unwrap();

    assert_eq!(first, second);
}
