//! Whole-word term finding with English pronoun-group expansion.
//!
//! ```
//! use term_finder::find_term_instances;
//!
//! assert_eq!(
//!     find_term_instances("The Customer is not our client", "Customer, us"),
//!     vec!["Customer", "our"]
//! );
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod pronouns;

pub use config::MatcherConfig;
pub use error::MatchError;
pub use matcher::{find_term_instances, MatchSet, TermMatcher};
