//! Named rules shared between grammars and threads.

use combinate::containers::{Container, Eager, Grammar, Lazy, LazyContainer, Limited};
use combinate::testing::assert_result;
use combinate::{pattern, GrammarError, Value};
use std::thread;

#[test]
fn eager_containers_report_missing_rules() {
    let eager = Eager::container();
    eager.set("digit", pattern("\\d"));
    assert!(eager.get("digit").is_ok());

    let err = eager.get("letter").unwrap_err();
    assert!(matches!(err, GrammarError::MissingParser { .. }));
    assert_eq!(err.to_string(), "Missing the parser `letter`");
}

#[test]
fn clones_share_one_registry() {
    let lazy = Lazy::container();
    let parser = lazy.proxy("greeting");
    let writer = lazy.clone();
    writer.set("greeting", "hello".into());

    assert!(lazy.has("greeting"));
    assert_result(&parser.parse("hello world"))
        .is_ok()
        .text("hello")
        .unparsed(" world");
}

#[test]
fn grammars_prefer_eager_rules() {
    let lazy = Lazy::container();
    let grammar = Grammar::with(lazy.clone());
    lazy.set("word", "lazy".into());
    grammar.set("word", "eager".into());

    assert_result(&grammar.rule("word").parse("eager")).is_ok();
    grammar.remove("word");
    assert_result(&grammar.rule("word").parse("lazy")).is_ok();
}

#[test]
fn mutually_recursive_rules() {
    let grammar = Grammar::container();
    grammar.register_lazy(
        "list",
        grammar.rule("item").split(",").between("(", ")"),
    );
    grammar.register_lazy("item", pattern("[a-z]+").or(grammar.rule("list")));

    let result = grammar.rule("list").end().parse("(a,(b,c),d)");
    assert_result(&result).is_ok().unparsed("");
    assert_eq!(
        result.into_data(),
        Value::list(vec![
            Value::from("a"),
            Value::list(["b", "c"]),
            Value::from("d"),
        ])
    );
}

#[test]
fn left_recursive_grammars_terminate() {
    let limited = Limited::recursion(Lazy::container());
    let grammar = Grammar::with(limited.clone());
    limited.set(
        "sum",
        grammar
            .rule("sum")
            .and_then("+")
            .and_then(pattern("\\d"))
            .or(pattern("\\d")),
    );

    assert_result(&grammar.rule("sum").parse("1+2"))
        .is_ok()
        .text("1")
        .unparsed("+2");
}

#[test]
fn guarded_grammars_parse_in_parallel() {
    let limited = Limited::recursion(Lazy::container());
    limited.set(
        "expression",
        limited.proxy("expression").and_then("a").or("z"),
    );
    let parser = limited.proxy("expression").split(",").end();

    let handles: Vec<_> = (0..8)
        .map(|n| {
            let parser = parser.clone();
            thread::spawn(move || {
                let input = vec!["z"; n + 1].join(",");
                let result = parser.parse(&input);
                (result.ok(), result.into_data())
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let (ok, data) = handle.join().unwrap();
        assert!(ok);
        assert_eq!(data, Value::list(vec!["z"; n + 1]));
    }
}
