use tellask::{
    config::Config,
    context::Context,
    reports::{Decision, Engine},
    types::err::{ErrorKind, QueryError},
};

fn context_of(input: &str) -> Context {
    let mut the_context = Context::from_config(Config::default());
    the_context
        .read_tell_ask(input.as_bytes())
        .expect("readable input");
    the_context
}

mod basic {
    use super::*;

    const WEATHER: &str = "TELL\nrain; rain => wet; wet => slippery;\nASK\nslippery\n";

    #[test]
    fn forward_chains_to_the_query() {
        let mut ctx = context_of(WEATHER);
        let decision = ctx.infer(Engine::Forward).unwrap();
        let expected = vec!["wet".to_string(), "rain".to_string(), "slippery".to_string()];
        assert_eq!(decision, Decision::Yes(expected));
    }

    #[test]
    fn backward_proves_the_query() {
        let mut ctx = context_of(WEATHER);
        let decision = ctx.infer(Engine::Backward).unwrap();
        let expected = vec!["wet".to_string(), "rain".to_string(), "slippery".to_string()];
        assert_eq!(decision, Decision::Yes(expected));
    }

    #[test]
    fn truth_table_agrees() {
        let mut ctx = context_of(WEATHER);
        let decision = ctx.infer(Engine::TruthTable).unwrap();
        assert!(matches!(decision, Decision::Yes(ref derived) if derived.contains(&"slippery".to_string())));
    }

    #[test]
    fn dpll_agrees_without_a_trace() {
        let mut ctx = context_of(WEATHER);
        assert_eq!(ctx.infer(Engine::Dpll).unwrap(), Decision::Yes(Vec::new()));
    }

    #[test]
    fn underivable_queries_are_no_for_every_engine() {
        let input = "TELL\nrain; rain => wet;\nASK\ndry\n";
        for engine in [Engine::TruthTable, Engine::Forward, Engine::Backward, Engine::Dpll] {
            let mut ctx = context_of(input);
            assert_eq!(ctx.infer(engine).unwrap(), Decision::No, "{engine}");
        }
    }

    #[test]
    fn missing_ask_section_is_fatal() {
        let mut ctx = context_of("TELL\nrain;\n");
        assert_eq!(
            ctx.infer(Engine::Forward),
            Err(ErrorKind::Query(QueryError::Missing))
        );
    }

    #[test]
    fn unicode_input_reads_like_ascii() {
        let unicode = "TELL\np ∧ q → r; p; q;\nASK\nr\n";
        let ascii = "TELL\np & q => r; p; q;\nASK\nr\n";
        let mut from_unicode = context_of(unicode);
        let mut from_ascii = context_of(ascii);
        assert_eq!(
            from_unicode.infer(Engine::Forward).unwrap(),
            from_ascii.infer(Engine::Forward).unwrap()
        );
    }
}
