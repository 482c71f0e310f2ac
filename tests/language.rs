use ami::{get_result, interpreter::evaluator::core::Context};

fn eval(src: &str) -> String {
    match get_result(src, "test") {
        Ok(value) => value.to_string(),
        Err(report) => panic!("Script failed: {report}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(src, "test").is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

#[test]
fn precedence_and_basic_arithmetic() {
    assert_eq!(eval("2 + 3 * 4"), "14");
    assert_eq!(eval("5 ^ -1 * 10"), "2");
    assert_eq!(eval("10 - 2 - 3"), "5");
    assert_eq!(eval("2 ^ 3 % 3"), "2");
    assert_eq!(eval("(2 + 3) * 4"), "20");
}

#[test]
fn nested_negation() {
    assert_eq!(eval("-5"), "-5");
    assert_eq!(eval("5-(-(-(-5)))"), "10");
    assert_failure("--5");
    assert_failure("-true");
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_eq!(eval("1 / 0"), "inf");
    assert_eq!(eval("-1 / 0"), "-inf");
    assert_eq!(eval("0 / 0"), "nan");
}

#[test]
fn assignments_echo_and_persist() {
    assert_eq!(eval("x = 5"), "x = 5");
    assert_eq!(eval("x = 2; x + 1"), "3");
    assert_eq!(eval("x = 1; y = 2; x + y"), "3");
    assert_failure("pi = 3");
}

#[test]
fn compound_assignments() {
    assert_eq!(eval("x = 2; x += 3; x"), "5");
    assert_eq!(eval("x = 7; x -= 2; x"), "5");
    assert_eq!(eval("x = 4; x *= 2; x"), "8");
    assert_eq!(eval("x = 9; x /= 3; x"), "3");
    assert_eq!(eval("x = 2; x ^= 3; x"), "8");
    assert_eq!(eval("x = 7; x %= 3; x"), "1");
    assert_failure("y += 1");
    assert_failure("pi += 1");
}

#[test]
fn comparisons_and_logic() {
    assert_eq!(eval("2 < 3"), "true");
    assert_eq!(eval("3 >= 3"), "true");
    assert_eq!(eval("2 != 3"), "true");
    assert_eq!(eval("true == 1"), "true");
    assert_eq!(eval("true and 0"), "false");
    assert_eq!(eval("1 or false"), "true");
    assert_eq!(eval("not 0"), "true");
    assert_eq!(eval("not null"), "true");
    assert_eq!(eval("nan == nan"), "false");
}

#[test]
fn conditionals_require_parenthesized_conditions() {
    assert_eq!(eval("if (2 < 3) 7 else 11"), "7");
    assert_eq!(eval("if (2 > 3) 7 else 11"), "11");
    assert_eq!(eval("if (2 > 3) 7"), "null");
    assert_failure("if 2 < 3 7");
}

#[test]
fn user_defined_functions() {
    assert_eq!(eval("f(x) -> x"), "defined function 'f'");
    assert_eq!(eval("f(x) -> x ^ 2; f(3)"), "9");
    assert_eq!(eval("add(a, b) -> a + b; add(2, 5)"), "7");
    assert_eq!(eval("f(x) -> x; f(x) -> x + 1; f(1)"), "2");
    assert_eq!(eval("f(x) -> x * 2; f(2 + 3)"), "10");
}

#[test]
fn function_definition_restrictions() {
    assert_failure("sqrt(x) -> x");
    assert_failure("f(pi) -> pi");
    assert_failure("g(1) -> 2");
}

#[test]
fn function_arity_is_checked() {
    assert_failure("f(x, y) -> x + y; f(3)");
    assert_failure("f(x) -> x; f(1, 2)");
    assert_failure("sqrt(1, 2)");
}

#[test]
fn recursion_works_up_to_the_ceiling() {
    assert_eq!(eval("fact(n) -> if (n <= 1) 1 else n * fact(n - 1); fact(5)"),
               "120");
    assert_failure("r(x) -> r(x); r(1)");
    assert_failure("a(x) -> b(x); b(x) -> a(x); a(1)");
}

#[test]
fn recursion_counters_reset_between_programs() {
    let mut context = Context::new();
    context.eval_source("r(x) -> r(x)", "test").unwrap();

    assert!(context.eval_source("r(1)", "test").is_err());

    // The failed call must not poison later, unrelated evaluation.
    let value = context.eval_source("g(x) -> x; g(7)", "test").unwrap();
    assert_eq!(value.to_string(), "7");
}

#[test]
fn interval_membership_honors_open_endpoints() {
    assert_eq!(eval("5 in [0;10]"), "true");
    assert_eq!(eval("5 in ]5;10]"), "false");
    assert_eq!(eval("10 in [0;10["), "false");
    assert_eq!(eval("0 in [0;inf["), "true");
    assert_eq!(eval("2 in [1+1;2*3]"), "true");
}

#[test]
fn invalid_intervals_are_rejected() {
    assert_failure("[5;1]");
    assert_failure("[0;inf]");
    assert_failure("[nan;1]");
    assert_eq!(eval("[0;inf["), "[0;inf[");
    assert_eq!(eval("]0;5]"), "]0;5]");
}

#[test]
fn sets_are_sorted_and_unique() {
    assert_eq!(eval("{2, 1, 2}"), "{1, 2}");
    assert_eq!(eval("{1, 2, 3} union {2, 3, 4}"), "{1, 2, 3, 4}");
    assert_eq!(eval("{1, 2, 3} intersection {2, 3}"), "{2, 3}");
    assert_eq!(eval("{1, 2, 3} - {2}"), "{1, 3}");
    assert_eq!(eval("{3, 1, 2} == {1, 2, 3}"), "true");
    assert_eq!(eval("2 in {1, 2}"), "true");
    assert_failure("{1, true}");
}

#[test]
fn set_algebra_stays_symbolic_over_intervals() {
    assert_eq!(eval("[0;1] union {5}"), "[0;1] union {5}");
    assert_eq!(eval("5 in ({1, 2} union [4;6])"), "true");
    assert_eq!(eval("5 in ([0;10] intersection [5;6])"), "true");
    assert_eq!(eval("3 in ([0;10] intersection ]3;4])"), "false");
    assert_failure("1 union 2");
}

#[test]
fn membership_binds_at_additive_level() {
    assert_eq!(eval("1 + 4 in {5}"), "true");
}

#[test]
fn vectors_and_matrices() {
    assert_eq!(eval("[2, 3] * [5, 3]"), "19");
    assert_eq!(eval("2 * [1, 2, 3]"), "[2, 4, 6]");
    assert_eq!(eval("[1, 2, 3] * 2"), "[2, 4, 6]");
    assert_eq!(eval("[[1, 2], [3, 4]]"), "[[1, 2], [3, 4]]");
    assert_failure("[1, 2] * [1, 2, 3]");
    assert_failure("[1]");
    assert_failure("[1, 2, 3, 4]");
    assert_failure("[[1, 2], [3]]");
    assert_failure("[]");
}

#[test]
fn set_indexing_is_by_sorted_position() {
    assert_eq!(eval("{5, 6, 7}[1]"), "6");
    assert_eq!(eval("{3, 1, 2}[0]"), "1");
    assert_failure("{}[0]");
    assert_failure("{1, 2}[0.5]");
    assert_failure("{1, 2}[-1]");
    assert_failure("[1, 2][0]");
}

#[test]
fn factorial_is_postfix() {
    assert_eq!(eval("5!"), "120");
    assert_eq!(eval("0!"), "1");
    assert_eq!(eval("3! + 1"), "7");
    assert_failure("(-1)!");
    assert_failure("2.5!");
    assert_failure("100!");
}

#[test]
fn builtin_functions_and_constants() {
    assert_eq!(eval("sqrt(9)"), "3");
    assert_eq!(eval("cos(0)"), "1");
    assert_eq!(eval("gcd(12, 18)"), "6");
    assert_eq!(eval("lcm(4, 6)"), "12");
    assert_eq!(eval("log2(8)"), "3");
    assert_eq!(eval("floor(3.7)"), "3");
    assert_eq!(eval("min(2, 3)"), "2");
    assert_eq!(eval("abs(-4)"), "4");
    assert_eq!(eval("(pi > 3.14) and (pi < 3.15)"), "true");
    assert_eq!(eval("inf > 1e308"), "true");
}

#[test]
fn random_stays_within_its_bounds() {
    assert_eq!(eval("x = random(2, 3); (x >= 2) and (x < 3)"), "true");
    assert_failure("random(3, 2)");
}

#[test]
fn diagnostics_render_with_a_caret() {
    let report = get_result("2 + @", "test").unwrap_err().to_string();
    assert!(report.contains("SyntaxError"));
    assert!(report.contains("col '4'"));
    assert!(report.ends_with("    ^"));

    let report = get_result("2 + x", "test").unwrap_err().to_string();
    assert!(report.contains("use of undeclared identifier 'x'"));
}

#[test]
fn numeric_literal_forms() {
    assert_eq!(eval("1'000 + 1"), "1001");
    assert_eq!(eval("1e-10 > 0"), "true");
    assert_eq!(eval("2.5 * 4"), "10");
    // An exponent marker without digits is not part of the number.
    assert_failure("2e");
}

#[test]
fn programs_are_semicolon_separated() {
    assert_eq!(eval(""), "null");
    assert_eq!(eval(";;"), "null");
    assert_eq!(eval("1; 2; 3"), "3");
    assert_failure("1 2");
}

#[test]
fn mixed_type_operands_are_errors() {
    assert_failure("1 + true");
    assert_failure("{1} * {2}");
    assert_failure("null < 1");
    assert_failure("[1, 2] in {1}");
}
