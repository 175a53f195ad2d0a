use todo_core::db::open_db_in_memory;
use todo_core::{
    builtin_scenarios, run_suite, ModelDriver, SqliteSlotRepository, TodoDriver, DEFAULT_SLOT_KEY,
};

#[test]
fn builtin_catalog_passes_against_in_memory_model() {
    let scenarios = builtin_scenarios();
    let report = run_suite(&scenarios, || ModelDriver::in_memory(DEFAULT_SLOT_KEY));

    let failures: Vec<_> = report
        .failed()
        .map(|failed| format!("{}: {:?}", failed.name, failed.failure))
        .collect();
    assert!(failures.is_empty(), "failed scenarios: {failures:#?}");
    assert_eq!(report.passed_count(), scenarios.len());
}

#[test]
fn builtin_catalog_passes_against_sqlite_storage() {
    let scenarios = builtin_scenarios();
    let connections: Vec<_> = scenarios
        .iter()
        .map(|_| open_db_in_memory().unwrap())
        .collect();
    let mut next = connections.iter();

    let report = run_suite(&scenarios, || {
        let conn = next.next().expect("one connection per scenario");
        ModelDriver::new(SqliteSlotRepository::new(conn), DEFAULT_SLOT_KEY)
    });
    assert!(report.is_success(), "{report:#?}");
}

#[test]
fn reload_reads_back_what_the_previous_session_wrote() {
    let mut driver = ModelDriver::in_memory(DEFAULT_SLOT_KEY);
    driver.add("Book doctor appointment").unwrap();
    driver.toggle_at(0).unwrap();
    driver.add("   ").unwrap();

    driver.reload().unwrap();
    assert_eq!(driver.labels().unwrap(), vec!["Book doctor appointment"]);
    assert_eq!(driver.completed_flags().unwrap(), vec![true]);
    assert!(driver.toggle_all_checked().unwrap());
}
