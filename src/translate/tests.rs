use super::*;
use crate::testutil::{err_or_fail, ok_or_fail};

fn strict() -> Opts {
    Opts::default()
}

fn lenient() -> Opts {
    Opts {
        policy: Policy::Lenient,
        ..Default::default()
    }
}

mod translate {
    use super::*;

    #[test]
    fn empty() {
        let r = ok_or_fail!(translate("nothing", "", &strict()));

        assert_eq!(r.name, "nothing");
        assert!(r.statements.is_empty());
    }

    #[test]
    fn only_whitespace() {
        let r = ok_or_fail!(translate("nothing", "\n  \n\t\n", &strict()));

        assert!(r.statements.is_empty());
    }

    #[test]
    fn assertion() {
        let r = ok_or_fail!(translate("+", "(+ 1 2) -> 3\n", &strict()));

        assert_eq!(
            r.statements,
            [Statement::Assert {
                expr: "(+ 1 2)",
                compare: "3"
            }]
        );
    }

    #[test]
    fn plain_statement() {
        let r = ok_or_fail!(translate("def", "(def 'x 100)\n", &strict()));

        assert_eq!(r.statements, [Statement::Expr("(def 'x 100)")]);
    }

    #[test]
    fn atom_assertion() {
        let r = ok_or_fail!(translate("def", "x -> 100\n", &strict()));

        assert_eq!(
            r.statements,
            [Statement::Assert {
                expr: "x",
                compare: "100"
            }]
        );
    }

    #[test]
    fn string_comparison() {
        let r = ok_or_fail!(translate(
            "??",
            "(?? \"Hello\" none \"Goodbye\") -> \"Hello\"\n",
            &strict()
        ));

        assert_eq!(
            r.statements,
            [Statement::Assert {
                expr: "(?? \"Hello\" none \"Goodbye\")",
                compare: "\"Hello\""
            }]
        );
    }

    #[test]
    fn form_comparison() {
        let r = ok_or_fail!(translate("list", "(list 1 2) -> (list 1 2)", &strict()));

        assert_eq!(
            r.statements,
            [Statement::Assert {
                expr: "(list 1 2)",
                compare: "(list 1 2)"
            }]
        );
    }

    #[test]
    fn multiple_in_order() {
        let src = "(def 'x 10)\nx -> 10\n(mutate 'x + 5) -> 15\nx -> 15\n";

        let r = ok_or_fail!(translate("mutate", src, &strict()));

        assert_eq!(
            r.statements,
            [
                Statement::Expr("(def 'x 10)"),
                Statement::Assert {
                    expr: "x",
                    compare: "10"
                },
                Statement::Assert {
                    expr: "(mutate 'x + 5)",
                    compare: "15"
                },
                Statement::Assert {
                    expr: "x",
                    compare: "15"
                },
            ]
        );
    }

    #[test]
    fn assertions_not_merged_on_one_line() {
        let r = ok_or_fail!(translate("not", "(not true) -> false (not false) -> true", &strict()));

        assert_eq!(
            r.statements,
            [
                Statement::Assert {
                    expr: "(not true)",
                    compare: "false"
                },
                Statement::Assert {
                    expr: "(not false)",
                    compare: "true"
                },
            ]
        );
    }

    #[test]
    fn marker_without_spaces() {
        let r = ok_or_fail!(translate("-", "(- 10)->-10", &strict()));

        assert_eq!(
            r.statements,
            [Statement::Assert {
                expr: "(- 10)",
                compare: "-10"
            }]
        );
    }

    #[test]
    fn negative_number_is_not_a_marker() {
        let r = ok_or_fail!(translate("-", "(- 10)\n-10\n", &strict()));

        assert_eq!(
            r.statements,
            [Statement::Expr("(- 10)"), Statement::Expr("-10")]
        );
    }

    #[test]
    fn multiline_expression() {
        let src = "(==\n    (list (list 1))\n    (list (list 1))) -> true\n";

        let r = ok_or_fail!(translate("==", src, &strict()));

        assert_eq!(
            r.statements,
            [Statement::Assert {
                expr: "(==\n    (list (list 1))\n    (list (list 1)))",
                compare: "true"
            }]
        );
    }

    #[test]
    fn comment_skipped() {
        let r = ok_or_fail!(translate("foo", "; a note\n(foo)", &strict()));

        assert_eq!(r.statements, [Statement::Expr("(foo)")]);
    }

    #[test]
    fn trailing_comment_skipped() {
        let r = ok_or_fail!(translate("foo", "(foo) -> 1 ; one\n", &strict()));

        assert_eq!(
            r.statements,
            [Statement::Assert {
                expr: "(foo)",
                compare: "1"
            }]
        );
    }

    #[test]
    fn comment_only() {
        let r = ok_or_fail!(translate("foo", "; nothing to see\n; here", &strict()));

        assert!(r.statements.is_empty());
    }

    #[test]
    fn blank_line_between_groups() {
        let src = "(def 'x 10) -> none\nx -> 10\n\n(def 'x 40 'y 50) -> none\n";

        let r = ok_or_fail!(translate("def", src, &strict()));

        assert_eq!(
            r.statements,
            [
                Statement::Assert {
                    expr: "(def 'x 10)",
                    compare: "none"
                },
                Statement::Assert {
                    expr: "x",
                    compare: "10"
                },
                Statement::Blank,
                Statement::Assert {
                    expr: "(def 'x 40 'y 50)",
                    compare: "none"
                },
            ]
        );
    }

    #[test]
    fn blank_lines_collapse() {
        let r = ok_or_fail!(translate("a", "(a)\n\n\n\n(b)", &strict()));

        assert_eq!(
            r.statements,
            [Statement::Expr("(a)"), Statement::Blank, Statement::Expr("(b)")]
        );
    }

    #[test]
    fn blank_line_before_comment_group() {
        let src = "(== 1 1) -> true\n\n; Equality is recursive:\n(== (list 1) (list 1)) -> true\n";

        let r = ok_or_fail!(translate("==", src, &strict()));

        assert_eq!(r.statements.len(), 3);
        assert_eq!(r.statements[1], Statement::Blank);
    }

    #[test]
    fn blank_line_after_comment() {
        let r = ok_or_fail!(translate("a", "(a)\n; note\n\n(b)", &strict()));

        assert_eq!(
            r.statements,
            [Statement::Expr("(a)"), Statement::Blank, Statement::Expr("(b)")]
        );
    }

    #[test]
    fn no_leading_or_trailing_blank() {
        let r = ok_or_fail!(translate("a", "\n\n(a)\n\n; done\n\n", &strict()));

        assert_eq!(r.statements, [Statement::Expr("(a)")]);
    }

    #[test]
    fn missing_comparison_strict() {
        let err = err_or_fail!(translate("a", "(a) ->\n(b)", &strict()));

        assert_eq!(err.kind, TranslateErrorKind::MissingComparison);
        assert_eq!(err.span, 4..6);
    }

    #[test]
    fn missing_comparison_at_end_strict() {
        let err = err_or_fail!(translate("a", "(a) ->  ", &strict()));

        assert_eq!(err.kind, TranslateErrorKind::MissingComparison);
    }

    #[test]
    fn missing_comparison_lenient() {
        let r = ok_or_fail!(translate("a", "(a) ->\n(b)", &lenient()));

        assert_eq!(
            r.statements,
            [Statement::Expr("(a)"), Statement::Expr("(b)")]
        );
    }

    #[test]
    fn unterminated_strict() {
        let err = err_or_fail!(translate("a", "(a) -> 1\n(b (c)\n", &strict()));

        assert_eq!(
            err.kind,
            TranslateErrorKind::Unterminated(Unterminated::Form)
        );
        assert_eq!(err.span, 9..16);
    }

    #[test]
    fn unterminated_comparison_strict() {
        let err = err_or_fail!(translate("a", "(a) -> \"abc", &strict()));

        assert_eq!(
            err.kind,
            TranslateErrorKind::Unterminated(Unterminated::String)
        );
        assert_eq!(err.span, 7..11);
    }

    #[test]
    fn unterminated_lenient() {
        let r = ok_or_fail!(translate("a", "(a) -> 1\n(b (c)\n", &lenient()));

        assert_eq!(
            r.statements,
            [
                Statement::Assert {
                    expr: "(a)",
                    compare: "1"
                },
                Statement::Expr("(b (c)\n")
            ]
        );
    }
}

mod statement {
    use super::*;

    #[test]
    fn display_expr() {
        let s = Statement::Expr("(def 'x 10)");

        assert_eq!(s.to_string(), "(def 'x 10)");
    }

    #[test]
    fn display_assert() {
        let s = Statement::Assert {
            expr: "(+ 1 2)",
            compare: "3",
        };

        assert_eq!(s.to_string(), "(asserteq (+ 1 2) 3)");
    }

    #[test]
    fn display_blank() {
        assert_eq!(Statement::Blank.to_string(), "");
    }
}

mod display {
    use super::*;

    #[test]
    fn empty_unit() {
        let unit = TestUnit::new("nothing");

        assert_eq!(unit.display(4).to_string(), "(test-case 'nothing {\n})\n");
    }

    #[test]
    fn statements() {
        let unit = TestUnit {
            name: "def",
            statements: vec![
                Statement::Expr("(def 'x 10)"),
                Statement::Assert {
                    expr: "x",
                    compare: "10",
                },
                Statement::Blank,
                Statement::Assert {
                    expr: "(+ x 1)",
                    compare: "11",
                },
            ],
        };

        assert_eq!(
            unit.display(4).to_string(),
            "(test-case 'def {\n\
            \t(def 'x 10)\n\
            \t(asserteq x 10)\n\
            \n\
            \t(asserteq (+ x 1) 11)\n\
            })\n"
        );
    }

    #[test]
    fn multiline_reindented() {
        let unit = TestUnit {
            name: "func",
            statements: vec![Statement::Expr("(func 'square 'x {\n    [x * x]\n})")],
        };

        assert_eq!(
            unit.display(4).to_string(),
            "(test-case 'func {\n\
            \t(func 'square 'x {\n\
            \t\t[x * x]\n\
            \t})\n\
            })\n"
        );
    }

    #[test]
    fn multiline_assertion() {
        let unit = TestUnit {
            name: "if",
            statements: vec![Statement::Assert {
                expr: "(if true {\n    (def 'x 10)\n    [x + 30]\n})",
                compare: "40",
            }],
        };

        assert_eq!(
            unit.display(4).to_string(),
            "(test-case 'if {\n\
            \t(asserteq (if true {\n\
            \t\t(def 'x 10)\n\
            \t\t[x + 30]\n\
            \t}) 40)\n\
            })\n"
        );
    }

    #[test]
    fn custom_indent() {
        let unit = TestUnit {
            name: "f",
            statements: vec![Statement::Expr("(f\n  (g\n    (h)))")],
        };

        assert_eq!(
            unit.display(2).to_string(),
            "(test-case 'f {\n\
            \t(f\n\
            \t\t(g\n\
            \t\t\t(h)))\n\
            })\n"
        );
    }
}

mod reindent {
    use super::*;

    #[test]
    fn no_indent() {
        assert_eq!(reindent("(foo)", 4), "(foo)");
    }

    #[test]
    fn whole_units() {
        assert_eq!(reindent("        (foo)", 4), "\t\t(foo)");
    }

    #[test]
    fn partial_unit_kept_as_spaces() {
        assert_eq!(reindent("      (foo)", 4), "\t  (foo)");
    }

    #[test]
    fn inner_spaces_untouched() {
        assert_eq!(reindent("    \"a    b\"", 4), "\t\"a    b\"");
    }

    #[test]
    fn zero_width() {
        assert_eq!(reindent("   x", 0), "   x");
    }

    #[test]
    fn empty_line() {
        assert_eq!(reindent("", 4), "");
    }
}
