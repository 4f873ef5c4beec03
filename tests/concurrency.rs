use tseitin_checker::{
    checker::Checker,
    db::term::TermDB,
    structures::{justification::Justification, term::TermKey},
};

/// Justifications paired with the expected verdict, over a shared term database.
fn cases() -> (TermDB, Vec<(Justification, bool)>) {
    let mut terms = TermDB::default();
    let [a, b, c] = ["a", "b", "c"].map(|name| terms.mk_bool(name).unwrap());
    let [not_a, not_b, not_c]: [TermKey; 3] = [a, b, c].map(|atom| terms.mk_not(atom).unwrap());

    let a_and_b = terms.mk_and(vec![a, b]).unwrap();
    let b_or_c = terms.mk_or(vec![b, c]).unwrap();
    let not_b_or_c = terms.mk_not(b_or_c).unwrap();
    let ite = terms.mk_ite(a, b, c).unwrap();

    let cases = vec![
        (Justification::tseitin(vec![a_and_b, not_a, not_b]), true),
        (Justification::tseitin(vec![a_and_b, not_a]), false),
        (Justification::tseitin(vec![b_or_c, not_c]), true),
        (Justification::tseitin(vec![not_b_or_c, b, c]), true),
        (Justification::tseitin(vec![not_b_or_c, c]), false),
        (Justification::tseitin(vec![ite, not_a, not_b]), true),
        (Justification::tseitin(vec![ite, a, not_b]), false),
        (Justification::tseitin(vec![]), false),
    ];

    (terms, cases)
}

#[test]
fn checker_per_thread() {
    let (terms, cases) = cases();

    crossbeam::scope(|s| {
        for offset in 0..4 {
            let terms = &terms;
            let cases = &cases;
            s.spawn(move |_| {
                let mut checker = Checker::default();
                for round in 0..64 {
                    let (justification, expected) = &cases[(offset + round) % cases.len()];
                    assert_eq!(checker.check(terms, justification), *expected);
                }
                assert_eq!(checker.counters().checks, 64);
            });
        }
    })
    .unwrap();
}
