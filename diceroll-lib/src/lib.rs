pub mod dice;
pub mod error;
mod evaluator;
pub mod options;
mod parser;
pub mod roll;
pub mod seed;
pub mod solver;
pub mod term;

#[cfg(test)]
mod tests {
    use crate::dice::Critic;
    use crate::error::Error;
    use crate::error::Limit;
    use crate::options::Limits;
    use crate::options::Options;
    use crate::roll::Source;
    use crate::seed;
    use crate::solver::Solver;
    use crate::term::Term;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub struct MockIter<'a, T: Iterator<Item = u64>> {
        pub iter: &'a mut T,
    }

    impl<T: Iterator<Item = u64>> Source for MockIter<'_, T> {
        fn throw(&mut self, sides: u64) -> u64 {
            match self.iter.next() {
                Some(value) => {
                    if value > sides {
                        panic!("Tried to return {} for a {} sided dice", value, sides)
                    }
                    value
                }
                None => panic!("Iterator out of values"),
            }
        }
    }

    fn terms(input: &str) -> Vec<Term> {
        Solver::new(input).unwrap().parse().unwrap().terms().to_vec()
    }

    fn dice(amount: u64, sides: u64) -> Term {
        Term::Dice { amount, sides }
    }

    #[test]
    fn one_dice_parse_test() {
        assert_eq!(vec![dice(1, 20)], terms("1d20"));
    }

    #[test]
    fn default_amount_test() {
        assert_eq!(vec![dice(1, 6)], terms("d6"));
        assert_eq!(vec![dice(1, 20)], terms("d20"));
    }

    #[test]
    fn dice_and_modifier_test() {
        assert_eq!(vec![dice(2, 6), Term::Modifier(3)], terms("2d6+3"));
        assert_eq!(vec![dice(2, 6), Term::Modifier(-3)], terms("2d6-3"));
    }

    #[test]
    fn lone_modifier_test() {
        assert_eq!(vec![Term::Modifier(5)], terms("+5"));
    }

    #[test]
    fn no_terms_test() {
        let parsed = Solver::new("not a dice expr").unwrap().parse().unwrap();
        assert!(parsed.is_empty());
        let ignored = parsed
            .ignored()
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>();
        assert_eq!(vec!["not", "a", "dice", "expr"], ignored);
        assert_eq!(6, parsed.ignored()[2].offset);
    }

    #[test]
    fn missing_sides_test() {
        let parsed = Solver::new("3d").unwrap().parse().unwrap();
        assert!(parsed.is_empty());
        assert_eq!("3d", parsed.ignored()[0].text);
    }

    #[test]
    fn zero_sides_test() {
        let parsed = Solver::new("d0").unwrap().parse().unwrap();
        assert!(parsed.is_empty());
        assert_eq!("d0", parsed.ignored()[0].text);

        let parsed = Solver::new("2d00+1").unwrap().parse().unwrap();
        assert_eq!(&[Term::Modifier(1)], parsed.terms());
        assert_eq!("2d00", parsed.ignored()[0].text);
    }

    #[test]
    fn interleaved_test() {
        assert_eq!(
            vec![dice(1, 20), dice(2, 4), Term::Modifier(-1), dice(1, 8)],
            terms("1d20 2d4-1 d8")
        );
    }

    // A sign always binds to the number right after it, so `+2d4` is a modifier and a `d4`
    #[test]
    fn signed_dice_test() {
        assert_eq!(
            vec![dice(1, 20), Term::Modifier(2), dice(1, 4), Term::Modifier(-1)],
            terms("1d20+2d4-1")
        );
        assert_eq!(
            vec![dice(2, 6), Term::Modifier(-1), dice(1, 4)],
            terms("2d6-1d4")
        );
    }

    #[test]
    fn lenient_skip_test() {
        let parsed = Solver::new("2d6 + 3").unwrap().parse().unwrap();
        assert_eq!(&[dice(2, 6)], parsed.terms());
        assert!(parsed.has_ignored());
        assert_eq!(2, parsed.ignored().len());
    }

    #[test]
    fn strict_malformed_test() {
        let r = Solver::with_options("3dX", Options::strict());
        match r.parse() {
            Err(Error::Malformed { offset, fragment }) => {
                assert_eq!(0, offset);
                assert_eq!("3dX", fragment);
            }
            other => panic!("unexpected {:?}", other),
        }

        let r = Solver::with_options("2d6 + 3", Options::strict());
        match r.parse() {
            Err(Error::Malformed { offset, fragment }) => {
                assert_eq!(4, offset);
                assert_eq!("+", fragment);
            }
            other => panic!("unexpected {:?}", other),
        }

        let r = Solver::with_options("d0", Options::strict());
        assert!(matches!(r.parse(), Err(Error::Malformed { .. })));
    }

    #[test]
    fn strict_whitespace_test() {
        let r = Solver::with_options(" 2d6 +3 ", Options::strict());
        assert_eq!(&[dice(2, 6), Term::Modifier(3)], r.parse().unwrap().terms());
    }

    #[test]
    fn range_test() {
        let r = Solver::new("101d6").unwrap();
        match r.parse() {
            Err(Error::Range { limit, value, max }) => {
                assert_eq!(Limit::Amount, limit);
                assert_eq!("101", value);
                assert_eq!(Limits::MAX_DICE_AMOUNT, max);
            }
            other => panic!("unexpected {:?}", other),
        }

        let r = Solver::new("1d10001").unwrap();
        assert!(matches!(
            r.parse(),
            Err(Error::Range {
                limit: Limit::Sides,
                ..
            })
        ));

        assert_eq!(vec![dice(100, 10_000)], terms("100d10000"));
    }

    #[test]
    fn huge_literal_test() {
        let r = Solver::new("99999999999999999999d6").unwrap();
        assert!(matches!(
            r.parse(),
            Err(Error::Range {
                limit: Limit::Amount,
                ..
            })
        ));

        let r = Solver::new("d6+99999999999999999999").unwrap();
        assert!(matches!(
            r.parse(),
            Err(Error::Range {
                limit: Limit::Modifier,
                ..
            })
        ));
    }

    #[test]
    fn custom_limits_test() {
        let options = Options::default().with_limits(Limits {
            max_amount: 2,
            max_sides: 6,
        });
        let r = Solver::with_options("3d6", options);
        assert!(matches!(r.parse(), Err(Error::Range { max: 2, .. })));
        let r = Solver::with_options("2d8", options);
        assert!(matches!(r.parse(), Err(Error::Range { max: 6, .. })));
    }

    #[test]
    fn get_single_test() {
        let r = Solver::new("2d6+3").unwrap();
        let roll_mock = vec![3, 5];
        let res = r
            .solve_with_source(&mut MockIter {
                iter: &mut roll_mock.into_iter(),
            })
            .unwrap();
        assert_eq!(11, res.get_total());
        assert_eq!(vec![3, 5], res.values().collect::<Vec<_>>());
        assert_eq!(3, res.get_modifier());
    }

    #[test]
    fn draw_order_test() {
        let r = Solver::new("1d20+2d4-1").unwrap();
        let roll_mock = vec![10, 3];
        let res = r
            .solve_with_source(&mut MockIter {
                iter: &mut roll_mock.into_iter(),
            })
            .unwrap();
        assert_eq!(vec![10, 3], res.values().collect::<Vec<_>>());
        assert_eq!(1, res.get_modifier());
        assert_eq!(14, res.get_total());
    }

    #[test]
    fn counting_roller_test() {
        let r = Solver::new("3d6").unwrap();
        let rolls = vec![3, 6, 3];
        let res = r
            .solve_with_source(&mut MockIter {
                iter: &mut rolls.into_iter(),
            })
            .unwrap();
        assert_eq!(12, res.get_total());
        assert_eq!(0, res.get_modifier());
    }

    #[test]
    fn modifiers_only_test() {
        let res = Solver::new("+5-2").unwrap().solve().unwrap();
        assert_eq!(3, res.get_total());
        assert_eq!(3, res.get_modifier());
        assert!(res.get_rolls().is_empty());
    }

    #[test]
    fn zero_dice_test() {
        let res = Solver::new("0d6").unwrap().solve().unwrap();
        assert_eq!(0, res.get_total());
        assert!(res.get_rolls().is_empty());
    }

    #[test]
    fn empty_expression_test() {
        let r = Solver::new("not a dice expr").unwrap();
        assert!(matches!(r.solve(), Err(Error::Empty)));
    }

    #[test]
    fn empty_terms_test() {
        let res = Solver::evaluate(&[], &mut MockIter { iter: &mut (1..1) }).unwrap();
        assert_eq!(0, res.get_total());
        assert_eq!(0, res.get_modifier());
        assert!(res.get_rolls().is_empty());
    }

    #[test]
    fn overflow_test() {
        let r = Solver::new("+9223372036854775807+1").unwrap();
        assert!(matches!(r.solve(), Err(Error::Overflow)));
    }

    #[test]
    fn critic_test() {
        let r = Solver::new("3d6").unwrap();
        let res = r
            .solve_with_source(&mut MockIter { iter: &mut [6, 1, 3].into_iter() })
            .unwrap();
        assert_eq!(Critic::Max, res.get_rolls()[0].critic);
        assert_eq!(Critic::Min, res.get_rolls()[1].critic);
        assert_eq!(Critic::Not, res.get_rolls()[2].critic);
    }

    #[test]
    fn dice_range_test() {
        let res = Solver::new("100d6").unwrap().solve().unwrap();
        assert_eq!(100, res.get_rolls().len());
        assert!(res.values().all(|v| (1..=6).contains(&v)));
    }

    #[test]
    fn determinism_test() {
        let r = Solver::new("4d6+1d8").unwrap();
        let first = r.solve_with(&mut StdRng::seed_from_u64(42)).unwrap();
        let second = r.solve_with(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn seed_test() {
        let nanos = 1_700_000_000_000_000_000;
        assert_eq!(
            seed::seed_at(nanos, &("player", 1u64)),
            seed::seed_at(nanos, &("player", 1u64))
        );
        assert_ne!(
            seed::seed_at(nanos, &("player", 1u64)),
            seed::seed_at(nanos, &("player", 2u64))
        );
        assert_ne!(
            seed::seed_at(nanos, &("player", 1u64)),
            seed::seed_at(nanos + 1, &("player", 1u64))
        );
    }

    #[test]
    fn display_test() {
        let parsed = Solver::new("d20 -2 +1").unwrap().parse().unwrap();
        assert_eq!("1d20-2+1", parsed.to_string());
    }

    proptest! {
        #[test]
        fn total_invariant_test(
            amount in 0..=100u64,
            sides in 1..=10_000u64,
            modifier in -1000i64..1000,
            state in any::<u64>(),
        ) {
            let r = Solver::new(&format!("{amount}d{sides}{modifier:+}")).unwrap();
            let res = r.solve_with(&mut StdRng::seed_from_u64(state)).unwrap();
            let sum = res.values().sum::<u64>() as i64;
            prop_assert_eq!(res.get_total(), sum + res.get_modifier());
            prop_assert_eq!(modifier, res.get_modifier());
            prop_assert_eq!(amount as usize, res.get_rolls().len());
            prop_assert!(res.values().all(|v| (1..=sides).contains(&v)));
        }

        #[test]
        fn parse_idempotence_test(input in ".*") {
            let r = Solver::new(&input).unwrap();
            match (r.parse(), r.parse()) {
                (Ok(first), Ok(second)) => prop_assert_eq!(first, second),
                (Err(first), Err(second)) => prop_assert_eq!(first.to_string(), second.to_string()),
                _ => prop_assert!(false, "parse of `{}` is not stable", input),
            }
        }
    }
}
