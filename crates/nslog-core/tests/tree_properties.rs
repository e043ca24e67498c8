//! Behaviour of the namespace tree: creation, cascading, inheritance.

use std::sync::Arc;

use nslog_core::sink::MemorySink;
use nslog_core::{Level, Registry};
use nslog_types::{LoggerSettings, LoggingConfig, Options};
use proptest::prelude::*;

fn registry() -> Registry {
    Registry::builder()
        .sink(Arc::new(MemorySink::new()))
        .without_call_site()
        .build()
}

#[test]
fn resolving_twice_returns_the_same_logger() {
    let registry = registry();
    let first = registry.get_logger("app.ui");
    let second = registry.resolve("app.ui");
    let qualified = registry.get_logger("global.app.ui");

    assert_eq!(first, second);
    assert_eq!(first, qualified);
    assert_eq!(registry.logger_count(), 3);
}

#[test]
fn resolving_a_leaf_materializes_every_ancestor() {
    let registry = registry();
    let leaf = registry.get_logger("a.b.c");

    assert_eq!(
        registry.namespaces(),
        vec!["global", "global.a", "global.a.b", "global.a.b.c"]
    );

    let b = leaf.parent().unwrap();
    let a = b.parent().unwrap();
    let root = a.parent().unwrap();

    assert_eq!(b.namespace().as_str(), "global.a.b");
    assert_eq!(a.namespace().as_str(), "global.a");
    assert!(root.is_root());
    assert_eq!(root, registry.root());

    assert_eq!(root.children(), vec![a.clone()]);
    assert_eq!(a.children(), vec![b.clone()]);
    assert_eq!(b.children(), vec![leaf.clone()]);

    // A later explicit request reuses the materialized node
    assert_eq!(registry.get_logger("a.b"), b);
    assert_eq!(registry.logger_count(), 4);
}

#[test]
fn enable_and_disable_cascade_down_only() {
    let registry = registry();
    // Root starts enabled; disable it so the subtree starts disabled.
    registry.root().disable();
    let a = registry.get_logger("a");
    let ab = registry.get_logger("a.b");
    let abc = registry.get_logger("a.b.c");

    assert!(!a.is_enabled() && !ab.is_enabled() && !abc.is_enabled());

    a.enable();
    assert!(a.is_enabled() && ab.is_enabled() && abc.is_enabled());
    assert!(!registry.root().is_enabled());

    ab.disable();
    assert!(a.is_enabled());
    assert!(!ab.is_enabled());
    assert!(!abc.is_enabled());
}

#[test]
fn enable_reaches_children_disabled_earlier() {
    let registry = registry();
    let a = registry.get_logger("a");
    let ab = registry.get_logger("a.b");

    ab.disable();
    assert!(a.is_enabled());
    assert!(!ab.is_enabled());

    a.enable();
    assert!(ab.is_enabled());
}

#[test]
fn level_filtering_follows_the_threshold() {
    let registry = registry();
    let logger = registry.get_logger("filter");
    logger.set_level("warning");

    assert!(!logger.can_log("debug"));
    assert!(!logger.can_log("info"));
    assert!(logger.can_log("warning"));
    assert!(logger.can_log("WARN"));
    assert!(logger.can_log("error"));
    assert!(logger.can_log("fatal"));

    logger.disable();
    for level in Level::ALL_LEVELS {
        assert!(!logger.can_log_at(level));
    }
}

#[test]
fn unknown_levels_are_ignored_and_never_loggable() {
    let registry = registry();
    let logger = registry.get_logger("bogus");
    logger.set_level("error");
    logger.set_level("bogus");

    assert_eq!(logger.level(), Level::Error);
    assert!(!logger.can_log("bogus"));

    logger.set_level("all");
    assert!(!logger.can_log("bogus"));
    assert!(!logger.can_log(""));
}

#[test]
fn children_inherit_state_only_at_creation() {
    let registry = registry();
    registry.root().disable();

    let a = registry.get_logger("a");
    a.set_level("error").enable();

    let ab = registry.get_logger("a.b");
    assert!(ab.is_enabled());
    assert_eq!(ab.level(), Level::Error);

    a.set_level("debug");
    assert_eq!(ab.level(), Level::Error);
    assert_eq!(a.level(), Level::Debug);

    // A fresh child picks up the parent's current level
    assert_eq!(registry.get_logger("a.c").level(), Level::Debug);
}

#[test]
fn root_defaults() {
    let registry = registry();
    let root = registry.root();
    assert!(root.is_enabled());
    assert_eq!(root.level(), Level::All);
    assert!(root.can_log("all"));

    root.disable();
    let child = registry.get_logger("fresh");
    assert!(!child.is_enabled());
}

#[test]
fn registries_are_isolated() {
    let one = registry();
    let two = registry();

    one.get_logger("only.here").set_level("fatal");
    assert!(two.lookup("only.here").is_none());
    assert_eq!(two.logger_count(), 1);
}

#[test]
fn registry_without_sink_fails_closed() {
    let registry = Registry::builder().without_sink().build();
    let root = registry.root();

    assert!(root.is_enabled());
    assert!(!root.can_log("fatal"));
    assert!(!root.can_log_unleveled());

    // Emitting is still a silent no-op
    root.fatal(format_args!("nowhere to go"));
}

#[test]
fn apply_configures_loggers_in_order() {
    let registry = registry();
    let mut config = LoggingConfig {
        options: Options {
            show_timestamp: false,
            ..Options::default()
        },
        ..LoggingConfig::default()
    };
    config.loggers.insert(
        "".to_string(),
        LoggerSettings {
            enabled: Some(false),
            level: None,
        },
    );
    config.loggers.insert(
        "app".to_string(),
        LoggerSettings {
            enabled: Some(true),
            level: Some(Level::Info),
        },
    );
    config.loggers.insert(
        "app.db".to_string(),
        LoggerSettings {
            enabled: Some(false),
            level: Some(Level::Debug),
        },
    );

    registry.apply(&config).unwrap();

    assert!(!registry.options().show_timestamp);
    assert!(!registry.root().is_enabled());

    let app = registry.get_logger("app");
    let db = registry.get_logger("app.db");
    assert!(app.is_enabled());
    assert_eq!(app.level(), Level::Info);
    assert!(!db.is_enabled());
    assert_eq!(db.level(), Level::Debug);
}

proptest! {
    #[test]
    fn can_log_matches_severity(threshold in 0usize..6, requested in 0usize..6, enabled in any::<bool>()) {
        let registry = registry();
        let logger = registry.get_logger("prop.level");
        let threshold = Level::ALL_LEVELS[threshold];
        let requested = Level::ALL_LEVELS[requested];

        logger.set_level_to(threshold);
        if enabled { logger.enable(); } else { logger.disable(); }

        let expected = enabled && requested.severity() >= threshold.severity();
        prop_assert_eq!(logger.can_log(requested.name()), expected);
        prop_assert_eq!(logger.can_log_at(requested), expected);
    }

    #[test]
    fn creation_order_does_not_change_the_tree(order in Just(vec!["x.y.z", "x", "x.y", "x.w"]).prop_shuffle()) {
        let registry = registry();
        for namespace in &order {
            registry.get_logger(namespace);
        }

        let mut namespaces = registry.namespaces();
        namespaces.sort();
        prop_assert_eq!(
            namespaces,
            vec!["global", "global.x", "global.x.w", "global.x.y", "global.x.y.z"]
        );

        let x = registry.get_logger("x");
        prop_assert_eq!(x.children().len(), 2);
        prop_assert_eq!(registry.get_logger("x.y.z").parent().unwrap(), registry.get_logger("x.y"));
    }
}
