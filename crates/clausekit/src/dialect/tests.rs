use super::*;
use crate::value::Value;

#[test]
fn quote_identifier_per_style() {
    assert_eq!(BaseDialect::generic().quote_identifier("users"), "users");
    assert_eq!(BaseDialect::postgres().quote_identifier("users"), r#""users""#);
    assert_eq!(BaseDialect::mysql().quote_identifier("users"), "`users`");
    assert_eq!(SqlServerDialect::new().quote_identifier("users"), "[users]");
}

#[test]
fn quote_identifier_does_not_escape() {
    let pg = BaseDialect::postgres();
    assert_eq!(pg.quote_identifier(r#"we"ird"#), r#""we"ird""#);
}

#[test]
fn quote_literal_for_logging() {
    let d = BaseDialect::generic();
    assert_eq!(d.quote_literal(&Value::from("abc")), "'abc'");
    assert_eq!(d.quote_literal(&Value::from(42)), "42");
    assert_eq!(d.quote_literal(&Value::from(1.5)), "1.5");
    assert_eq!(d.quote_literal(&Value::from(true)), "true");
    assert_eq!(d.quote_literal(&Value::Null), "NULL");
    assert_eq!(d.quote_literal(&Value::from(vec!["a", "b"])), "('a', 'b')");
}

#[test]
fn placeholder_styles() {
    let config = |style| BaseDialect::new(DialectConfig::new("t").placeholder(style));

    assert_eq!(config(PlaceholderStyle::Question).placeholder(3), "?");
    assert_eq!(config(PlaceholderStyle::Dollar).placeholder(3), "$3");
    assert_eq!(config(PlaceholderStyle::Colon).placeholder(3), ":3");
    assert_eq!(config(PlaceholderStyle::Named).placeholder(3), "@p3");
}

#[test]
fn placeholder_defaults_to_question_when_unset() {
    let d = BaseDialect::new(DialectConfig::new("t"));
    assert_eq!(d.placeholder(1), "?");
    assert_eq!(d.placeholder(9), "?");
}

#[test]
fn placeholder_does_not_enforce_order() {
    let pg = BaseDialect::postgres();
    assert_eq!(pg.placeholder(5), "$5");
    assert_eq!(pg.placeholder(2), "$2");
}

#[test]
fn limit_offset_combinations() {
    let d = BaseDialect::generic();
    assert_eq!(d.build_limit_offset(10, 20), "LIMIT 10 OFFSET 20");
    assert_eq!(d.build_limit_offset(10, -1), "LIMIT 10");
    assert_eq!(d.build_limit_offset(-1, 20), "OFFSET 20");
    assert_eq!(d.build_limit_offset(-1, -1), "");
    assert_eq!(d.build_limit_offset(0, 0), "LIMIT 0 OFFSET 0");
}

#[test]
fn sqlserver_limit_offset_is_computed() {
    let d = SqlServerDialect::new();
    assert_eq!(
        d.build_limit_offset(10, 20),
        "OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
    );
    assert_eq!(
        d.build_limit_offset(5, -1),
        "OFFSET 0 ROWS FETCH NEXT 5 ROWS ONLY"
    );
    assert_eq!(d.build_limit_offset(-1, 7), "OFFSET 7 ROWS");
    assert_eq!(d.build_limit_offset(-1, -1), "");
}

#[test]
fn render_from_respects_aliasing() {
    let pg = BaseDialect::postgres();
    assert_eq!(pg.render_from("users", "u"), r#""users" u"#);
    assert_eq!(pg.render_from("users", ""), r#""users""#);

    let no_alias = BaseDialect::new(
        DialectConfig::new("t")
            .quoting(Quoting::Bracket)
            .placeholder(PlaceholderStyle::Question),
    );
    assert_eq!(no_alias.render_from("logs", "l"), "[logs]");
}

#[test]
fn feature_flags() {
    assert!(BaseDialect::postgres().supports_returning());
    assert!(BaseDialect::postgres().supports_upsert());
    assert!(!BaseDialect::mysql().supports_returning());
    assert!(!BaseDialect::generic().supports_upsert());

    // Computed rather than configured.
    let mssql = SqlServerDialect::new();
    assert!(!mssql.base().config().enable_returning);
    assert!(mssql.supports_returning());
}

#[test]
fn validate_dialects() {
    assert!(BaseDialect::generic().validate().is_ok());
    assert!(SqlServerDialect::new().validate().is_ok());

    let blank = BaseDialect::new(DialectConfig::new("  ").placeholder(PlaceholderStyle::Dollar));
    assert_eq!(blank.validate(), Err(ConfigError::MissingName));

    let no_style = BaseDialect::new(DialectConfig::new("x").quoting(Quoting::Double));
    assert_eq!(no_style.validate(), Err(ConfigError::MissingPlaceholder));

    // Quoting may legitimately be none.
    let plain = BaseDialect::new(DialectConfig::new("x").placeholder(PlaceholderStyle::Colon));
    assert!(plain.validate().is_ok());
}

#[test]
fn from_config_validates() {
    assert!(BaseDialect::from_config(DialectConfig::new("x")).is_err());
    let d = BaseDialect::from_config(
        DialectConfig::new("oracle").placeholder(PlaceholderStyle::Colon),
    )
    .unwrap();
    assert_eq!(d.name(), "oracle");
}

#[test]
fn name_falls_back_to_base() {
    let d = BaseDialect::new(DialectConfig::default());
    assert_eq!(d.name(), "base");
    assert_eq!(SqlServerDialect::new().name(), "sqlserver");
}

#[test]
fn placeholders_context() {
    let pg = BaseDialect::postgres();
    let mut ph = Placeholders::new();
    assert_eq!(ph.next(&pg), "$1");
    assert_eq!(ph.next(&pg), "$2");
    assert_eq!(ph.count(), 2);

    ph.reset();
    assert_eq!(ph.next(&pg), "$1");

    let mut ph = Placeholders::starting_after(4);
    assert_eq!(ph.next(&pg), "$5");
}

#[test]
fn dialect_is_shareable_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let pg: Arc<dyn Dialect> = Arc::new(BaseDialect::postgres());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pg = Arc::clone(&pg);
            thread::spawn(move || {
                let mut ph = Placeholders::new();
                (ph.next(&*pg), ph.next(&*pg))
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), ("$1".to_string(), "$2".to_string()));
    }
}
