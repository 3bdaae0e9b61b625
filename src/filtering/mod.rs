/*! Token-level filtering utilities

Word vector lines are filtered on their leading token only.

- [token::leading_token] and [token::fold_case] extract and normalize that token.
- [numeric::NumericToken] detects numerals, implementing [filter::Filter].
! */
mod filter;
mod numeric;
mod token;

pub use filter::Filter;
pub use numeric::NumericToken;
pub use token::{fold_case, leading_token};
