/*!
The context --- to which assertions are added and within which queries are answered.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness, which is only consulted when the
DPLL procedure is configured to branch at random. [from_config](Context::from_config) is
implemented for a context rather than a generic context so a source of randomness need not be
supplied alongside a config.

A context owns the databases built from its input --- rules, facts, and the running count of
placeholder symbols --- together with the query read from the ASK section, if any. Engines
never mutate the databases: each run works on its own copies, so one context can serve
repeated queries under different engines.

# Example

```rust
# use tellask::config::Config;
# use tellask::context::Context;
# use tellask::reports::{Decision, Engine};
let mut the_context = Context::from_config(Config::default());

the_context.add_assertion("rain => wet").unwrap();
the_context.add_fact("rain");

let decision = the_context.infer_query("wet", Engine::Backward).unwrap();
assert!(matches!(decision, Decision::Yes(_)));

assert_eq!(the_context.infer_query("dry", Engine::Backward), Ok(Decision::No));
```
*/

use rand::SeedableRng;

use crate::{
    config::Config,
    db::{FactDb, RuleDb},
    generic::minimal_pcg::MinimalPcg32,
    reports::{Decision, Engine},
    structures::symbol::Symbol,
    types::err::{ErrorKind, QueryError},
};

/// A context parameterised by a source of randomness.
pub struct GenericContext<R: rand::Rng> {
    /// The configuration of the context.
    pub config: Config,

    /// The rules of the knowledge base.
    pub rule_db: RuleDb,

    /// The declared facts of the knowledge base.
    pub fact_db: FactDb,

    /// The query read from the ASK section, if any.
    query: Option<Symbol>,

    /// Count of placeholder symbols minted so far.
    pub(crate) placeholder_count: usize,

    /// The source of rng, used when branching at random.
    pub(crate) rng: R,
}

/// A context with a fixed source of randomness.
pub type Context = GenericContext<MinimalPcg32>;

impl Context {
    /// A context from a config, with rng seeded from the config.
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPcg32::seed_from_u64(config.seed);
        GenericContext {
            config,
            rule_db: RuleDb::default(),
            fact_db: FactDb::default(),
            query: None,
            placeholder_count: 0,
            rng,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}

impl<R: rand::Rng> GenericContext<R> {
    /// Sets the query symbol.
    pub fn set_query(&mut self, query: &str) {
        self.query = Some(query.trim().to_string());
    }

    /// The query symbol, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Answers the stored query with the given engine.
    ///
    /// Errs if no query has been read or set.
    pub fn infer(&mut self, engine: Engine) -> Result<Decision, ErrorKind> {
        let query = match &self.query {
            Some(query) => query.clone(),
            None => return Err(ErrorKind::from(QueryError::Missing)),
        };
        self.infer_query(&query, engine)
    }

    /// Answers the given query with the given engine.
    pub fn infer_query(&mut self, query: &str, engine: Engine) -> Result<Decision, ErrorKind> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ErrorKind::from(QueryError::Missing));
        }
        match engine {
            Engine::TruthTable => Ok(self.truth_table(query)),
            Engine::Forward => self.forward_chain(query),
            Engine::Backward => self.backward_chain(query),
            Engine::Dpll => Ok(self.dpll_entails(query)),
        }
    }
}
