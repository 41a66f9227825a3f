//! Property-based tests for expression compilation.

use proptest::prelude::*;

use crate::compile;

fn coefficient() -> impl Strategy<Value = i32> {
    -20i32..=20
}

fn sample() -> impl Strategy<Value = f64> {
    -10.0f64..10.0
}

proptest! {
    #[test]
    fn compiling_twice_gives_identical_functions(
        a in coefficient(),
        b in coefficient(),
        c in coefficient(),
        x in sample(),
    ) {
        let source = format!("{a}*x**2 + {b}*sin(x) - {c}");
        let first = compile(&source).unwrap();
        let second = compile(&source).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.eval(x), second.eval(x));
    }

    #[test]
    fn polynomial_matches_direct_evaluation(
        a in coefficient(),
        b in coefficient(),
        c in coefficient(),
        x in sample(),
    ) {
        let f = compile(&format!("({a})*x*x + ({b})*x + ({c})")).unwrap();
        let expected = f64::from(a) * x * x + f64::from(b) * x + f64::from(c);

        prop_assert_eq!(f.eval(x).unwrap(), expected);
    }

    #[test]
    fn rendered_tree_compiles_to_the_same_tree(
        a in coefficient(),
        b in coefficient(),
    ) {
        let f = compile(&format!("{a} - x**3 / (1 + abs({b}*x))")).unwrap();
        let again = compile(&f.to_string()).unwrap();

        prop_assert_eq!(f.ast(), again.ast());
    }
}
