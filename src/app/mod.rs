//! Screen-level state, independent of how the screens are rendered.

pub mod lookup;
pub mod producer_form;
pub mod transaction_list;

pub use lookup::{consumer_lookup, verify_product, Lookup};
pub use producer_form::{ProducerForm, SubmitError, SubmitOutcome};
pub use transaction_list::TransactionList;
