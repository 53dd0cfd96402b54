use masthead_core::{init_logging, logging_status, Catalog, LoggingConfig};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let first_dir = tempfile::tempdir().unwrap();
    let second_dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig::new("info", first_dir.path());

    assert!(logging_status().is_none());
    init_logging(&config).expect("first init should succeed");
    init_logging(&config).expect("same config should be idempotent");

    let level_error = init_logging(&LoggingConfig::new("debug", first_dir.path()))
        .expect_err("level conflict should fail");
    assert!(level_error.contains("refusing to switch"));

    let dir_error = init_logging(&LoggingConfig::new("info", second_dir.path()))
        .expect_err("directory conflict should fail");
    assert!(dir_error.contains("refusing to switch"));

    let (level, log_dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(log_dir, first_dir.path());

    // catalog events go through the active logger without disturbing results
    let mut catalog = Catalog::new();
    let carry = catalog.create_author("Carry Bradshaw").unwrap();
    let vogue = catalog.create_magazine("Vogue", "Fashion").unwrap();
    assert!(carry.add_article(&mut catalog, vogue, "Tiny").is_err());
    carry
        .add_article(&mut catalog, vogue, "How to be single and happy")
        .unwrap();
    catalog.reset();
    assert!(catalog.articles().is_empty());
}
