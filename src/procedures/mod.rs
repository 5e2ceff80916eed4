/*!
The inference procedures, as methods on a context.

Four mutually independent engines consume the same knowledge base:

- [truth_table](crate::procedures::truth_table) --- exhaustive enumeration of the symbol
  universe.
- [forward](crate::procedures::forward) --- data-driven chaining to a fixed point, Horn-form
  input only.
- [backward](crate::procedures::backward) --- goal-directed proof search, Horn-form input only.
- [dpll](crate::procedures::dpll) --- satisfiability search over the clausal translation,
  entailment by refutation.

All are single-threaded and run to completion within one call; nothing is shared between
invocations beyond the immutable databases.
*/

pub mod backward;
pub mod dpll;
pub mod forward;
pub mod truth_table;
