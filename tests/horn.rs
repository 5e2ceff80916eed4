use tellask::{
    config::Config,
    context::Context,
    reports::{Decision, Engine},
    types::err::{ChainError, ErrorKind, HornError},
};

fn context_of(input: &str) -> Context {
    let mut the_context = Context::from_config(Config::default());
    the_context
        .read_tell_ask(input.as_bytes())
        .expect("readable input");
    the_context
}

fn derived(decision: Decision) -> Vec<String> {
    match decision {
        Decision::Yes(derived) => derived,
        Decision::No => panic!("expected entailment"),
    }
}

mod biconditional {
    use super::*;

    #[test]
    fn forward_from_the_left() {
        let mut ctx = context_of("TELL\na <-> b; a;\nASK\nb\n");
        assert!(derived(ctx.infer(Engine::Forward).unwrap()).contains(&"b".to_string()));
    }

    #[test]
    fn forward_from_the_right() {
        let mut ctx = context_of("TELL\na <-> b; b;\nASK\na\n");
        assert!(derived(ctx.infer(Engine::Forward).unwrap()).contains(&"a".to_string()));
    }

    #[test]
    fn parses_to_two_rules() {
        let ctx = context_of("TELL\na <-> b;\nASK\na\n");
        assert_eq!(ctx.rule_db.count(), 2);
    }
}

mod fixed_point {
    use super::*;

    #[test]
    fn chaining_beyond_the_fixed_point_changes_nothing() {
        let mut once = context_of("TELL\na; a => b; b => c;\nASK\na\n");
        let closure = derived(once.infer(Engine::Forward).unwrap());

        // re-declare the whole closure as facts: another full chain derives nothing new
        let redeclared = format!("TELL\n{}; a => b; b => c;\nASK\na\n", closure.join("; "));
        let mut twice = context_of(&redeclared);
        assert_eq!(derived(twice.infer(Engine::Forward).unwrap()), closure);
    }
}

mod soundness {
    use super::*;

    #[test]
    fn backward_derivations_are_forward_derivable() {
        let input = "TELL\na; a => b; b => c; d => c;\nASK\nc\n";
        let mut ctx = context_of(input);
        let backward = derived(ctx.infer(Engine::Backward).unwrap());
        let forward = derived(ctx.infer(Engine::Forward).unwrap());
        for symbol in &backward {
            assert!(forward.contains(symbol), "{symbol} not forward-derivable");
        }
    }

    #[test]
    fn first_successful_alternative_wins() {
        // both alternatives could prove c, only the first is used
        let input = "TELL\na; d; a => c; d => c;\nASK\nc\n";
        let mut ctx = context_of(input);
        let backward = derived(ctx.infer(Engine::Backward).unwrap());
        assert!(backward.contains(&"a".to_string()));
        assert!(!backward.contains(&"d".to_string()));
    }
}

mod rejection {
    use super::*;

    #[test]
    fn disjunction_is_rejected() {
        let mut ctx = context_of("TELL\na || b => c; a;\nASK\nc\n");
        assert_eq!(
            ctx.infer(Engine::Forward),
            Err(ErrorKind::Horn(HornError::Disjunction))
        );
        assert_eq!(
            ctx.infer(Engine::Backward),
            Err(ErrorKind::Horn(HornError::Disjunction))
        );
    }

    #[test]
    fn negation_is_rejected() {
        let mut ctx = context_of("TELL\n~a; b;\nASK\nb\n");
        assert_eq!(
            ctx.infer(Engine::Forward),
            Err(ErrorKind::Horn(HornError::Negation))
        );
    }

    #[test]
    fn brackets_are_rejected() {
        let mut ctx = context_of("TELL\n(a & b) => c; a; b;\nASK\nc\n");
        assert_eq!(
            ctx.infer(Engine::Forward),
            Err(ErrorKind::Horn(HornError::Brackets))
        );
        assert_eq!(
            ctx.infer(Engine::Backward),
            Err(ErrorKind::Horn(HornError::Brackets))
        );
    }
}

mod cycles {
    use super::*;

    #[test]
    fn a_cyclic_goal_fails_rather_than_recursing() {
        let mut ctx = context_of("TELL\na => b; b => a;\nASK\nb\n");
        assert_eq!(ctx.infer(Engine::Backward).unwrap(), Decision::No);
    }

    #[test]
    fn strict_mode_surfaces_the_cycle() {
        let mut config = Config::default();
        config.fail_on_cycle = true;
        let mut ctx = Context::from_config(config);
        ctx.read_tell_ask("TELL\na => b; b => a;\nASK\nb\n".as_bytes())
            .unwrap();
        assert_eq!(
            ctx.infer(Engine::Backward),
            Err(ErrorKind::Chain(ChainError::CyclicRules))
        );
    }

    #[test]
    fn forward_chaining_terminates_on_cycles() {
        let mut ctx = context_of("TELL\na => b; b => a;\nASK\nb\n");
        assert_eq!(ctx.infer(Engine::Forward).unwrap(), Decision::No);
    }
}
