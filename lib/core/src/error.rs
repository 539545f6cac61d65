//! Error handling foundation for graph-search-chat.
//!
//! Only the `Result` alias lives here. Each crate owns its domain error
//! enum and wraps it in a rootcause `Report` at the crate boundary.

use rootcause::Report;

/// A Result type alias over rootcause's `Report`.
pub type Result<T, C = ()> = std::result::Result<T, Report<C>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_alias_carries_value() {
        let ok: Result<&str> = Ok("citation");
        assert_eq!(ok.expect("should be ok"), "citation");
    }
}
